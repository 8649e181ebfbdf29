mod mock_chat_client;
mod mock_product_search;
mod openai_chat_client;
mod rakuten_product_search;

pub use mock_chat_client::*;
pub use mock_product_search::*;
pub use openai_chat_client::*;
pub use rakuten_product_search::*;
