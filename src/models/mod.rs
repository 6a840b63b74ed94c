//! Data models organized by type.

pub mod neighborhood;
pub mod property;
pub mod requests;
pub mod responses;

pub use neighborhood::*;
pub use property::*;
pub use requests::*;
pub use responses::*;
