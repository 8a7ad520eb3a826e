//! HTTP handlers for the dataset routes.

pub mod books;
pub mod meta;
pub mod verses;
pub use books::*;
pub use meta::*;
pub use verses::*;
