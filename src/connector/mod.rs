//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Text generation (OpenAI chat completions, offline mock)
//! - Shopping search (Rakuten Ichiba item search, offline mock)
//! - Presentation (CLI container, router and controllers)

pub mod adapter;
pub mod api;

pub use adapter::*;
