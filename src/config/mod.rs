//! Server configuration: typed settings and the environment loader.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;
