//! HTTP request handlers organized by domain.

pub mod neighborhood_handler;
pub mod property_handler;

pub use neighborhood_handler::*;
pub use property_handler::*;
