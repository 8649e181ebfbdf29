mod gift_session;
mod request_recommendations;
mod search_products;

pub use gift_session::*;
pub use request_recommendations::*;
pub use search_products::*;
