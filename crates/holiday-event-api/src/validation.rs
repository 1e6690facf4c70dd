//! Request validation
//!
//! Checks run before any network activity, so a request that fails here
//! never reaches the API and never counts against the rate limit.
//!
//! # Examples
//!
//! ```rust
//! use holiday_event_api::{SearchRequest, validation::validate_search_request};
//!
//! assert!(validate_search_request(&SearchRequest::new("pizza day")).is_ok());
//! assert!(validate_search_request(&SearchRequest::default()).is_err());
//! ```

use crate::error::{Error, Result};
use crate::observability::log_validation_error;
use crate::types::{GetEventInfoRequest, SearchRequest};

/// Validate a [`GetEventInfoRequest`].
///
/// # Errors
///
/// Returns [`Error::EventIdRequired`] when `id` is empty.
pub fn validate_event_info_request(request: &GetEventInfoRequest) -> Result<()> {
    if request.id.is_empty() {
        log_validation_error("id", "empty");
        return Err(Error::EventIdRequired);
    }
    Ok(())
}

/// Validate a [`SearchRequest`].
///
/// The API itself rejects queries shorter than three characters; that rule
/// is left to the server so its error message reaches the caller unchanged.
///
/// # Errors
///
/// Returns [`Error::SearchQueryRequired`] when `query` is empty.
pub fn validate_search_request(request: &SearchRequest) -> Result<()> {
    if request.query.is_empty() {
        log_validation_error("query", "empty");
        return Err(Error::SearchQueryRequired);
    }
    Ok(())
}
