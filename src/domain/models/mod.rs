mod product;
mod recommendation;
mod session;

pub use product::*;
pub use recommendation::*;
pub use session::*;
