//! Input validation helpers shared by handlers and services.

pub mod common;
pub mod property;

pub use common::*;
pub use property::*;
