//! Request models for API endpoints.

pub mod property;

pub use property::*;
