pub mod recommend_controller;
pub mod render;
pub mod search_controller;
pub mod session_controller;

pub use recommend_controller::RecommendController;
pub use search_controller::SearchController;
pub use session_controller::SessionController;
