pub mod quote;
pub mod summary;

pub use quote::*;
pub use summary::*;
