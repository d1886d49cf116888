pub mod event;
pub mod store;

pub use event::*;
pub use store::*;
