//! Response types used by API handlers.

mod responses;

pub use responses::*;
