pub mod input;
pub mod order;

pub use input::OrderInput;
pub use order::*;
