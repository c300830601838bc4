pub mod category;
pub mod product;
pub mod session;

pub use category::*;
pub use product::*;
pub use session::*;
