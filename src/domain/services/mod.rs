//! Pure domain services.

mod recommendation_parser;

pub use recommendation_parser::*;
