//! Storage layer: the durable record store behind the domain services.

pub mod json;
pub mod traits;

pub use json::{JsonConnection, StudentRepository};
pub use traits::StudentStore;
