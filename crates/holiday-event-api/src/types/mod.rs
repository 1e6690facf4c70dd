//! Core types for the Holiday and Event API
//!
//! Requests are plain data with builders; responses are decoded directly
//! from the API's JSON and own all of their nested data.

// Re-export commonly used types from submodules
pub use event::*;
pub use rate_limit::*;
pub use request::*;
pub use response::*;

// Submodules
pub mod event;
pub mod rate_limit;
pub mod request;
pub mod response;
