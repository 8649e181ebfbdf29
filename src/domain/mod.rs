//! # Domain Layer
//!
//! Core models, the error taxonomy, and the pure recommendation parser.
//! This layer is independent of external services and transports.

mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
