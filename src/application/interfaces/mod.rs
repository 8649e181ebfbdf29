mod chat_client;
mod product_search_service;

pub use chat_client::*;
pub use product_search_service::*;
