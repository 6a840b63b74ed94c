//! Services organized by domain concern.

pub mod neighborhood_service;
pub mod property_service;

pub use neighborhood_service::NeighborhoodService;
pub use property_service::PropertyService;
