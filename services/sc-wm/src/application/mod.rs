//! Application layer

pub mod handlers;
pub mod queries;

pub use handlers::*;
pub use queries::*;
