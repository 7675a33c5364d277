//! Data transfer objects for API communication.
//!
//! Request and response types for the hand evaluation endpoint,
//! serializable via `serde`. These types bridge the gap between the Rust
//! domain model and JSON payloads; field names follow the wire contract
//! (`requestId`, `errorMessage`, ...), not Rust convention.
mod request;
mod response;

pub use request::*;
pub use response::*;
