//! Rate limit accounting

use serde::{Deserialize, Serialize};

/// Your API plan's current rate limit and status.
///
/// Filled in from the provider's response headers after every successful
/// call. Purely informational: the client does not enforce it. Upgrade your
/// plan to raise these limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RateLimit {
    /// The amount of requests allowed this billing cycle
    pub limit: i64,

    /// The amount of requests remaining this billing cycle
    pub remaining: i64,
}

impl RateLimit {
    /// Requests already spent this billing cycle.
    pub fn used(&self) -> i64 {
        self.limit.saturating_sub(self.remaining)
    }
}
