//! Response models for API endpoints.

pub mod api;
pub mod neighborhood;
pub mod property;

pub use api::*;
pub use neighborhood::*;
pub use property::*;
