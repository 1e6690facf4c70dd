//! Per-call cancellation and deadlines
//!
//! Every API operation takes a [`RequestContext`]. Cancelling its token or
//! passing its deadline makes the in-flight call return promptly with
//! [`Error::Cancelled`] or [`Error::Timeout`]; the pending HTTP exchange is
//! dropped, which releases its connection.

use crate::error::{Error, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Cancellation token plus optional deadline for a single API call.
///
/// Contexts are cheap to clone; clones share the same token, so one
/// `cancel()` stops every call made with any of them.
///
/// # Example
///
/// ```rust
/// use holiday_event_api::RequestContext;
/// use std::time::Duration;
///
/// let ctx = RequestContext::new().with_timeout(Duration::from_secs(5));
/// let token = ctx.cancellation_token();
///
/// // From another task:
/// token.cancel();
/// assert!(ctx.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    cancellation: CancellationToken,
    deadline: Option<Deadline>,
}

#[derive(Debug, Clone, Copy)]
struct Deadline {
    at: Instant,
    budget: Duration,
}

impl RequestContext {
    /// A context that is never cancelled and has no deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context driven by an existing token, e.g. a child of an app-wide
    /// shutdown token.
    pub fn with_cancellation(cancellation: CancellationToken) -> Self {
        Self {
            cancellation,
            deadline: None,
        }
    }

    /// Fail calls that have not completed `timeout` from now.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Deadline {
            at: Instant::now() + timeout,
            budget: timeout,
        });
        self
    }

    /// Fail calls that have not completed by `deadline`.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(Deadline {
            at: deadline,
            budget: deadline.saturating_duration_since(Instant::now()),
        });
        self
    }

    /// The token that cancels calls made with this context.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    /// Cancel every call using this context.
    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// The deadline, if one was set.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline.map(|d| d.at)
    }

    /// Fail fast if the context is already cancelled or past its deadline.
    pub(crate) fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            return Err(Error::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline.at => Err(Error::Timeout(deadline.budget)),
            _ => Ok(()),
        }
    }

    /// Drive `fut` to completion unless the context fires first.
    ///
    /// When the context wins, `fut` is dropped before returning.
    pub(crate) async fn run<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let deadline = self.deadline;
        let expired = async move {
            match deadline {
                Some(deadline) => {
                    tokio::time::sleep_until(deadline.at).await;
                    deadline.budget
                }
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancellation.cancelled() => Err(Error::Cancelled),
            budget = expired => Err(Error::Timeout(budget)),
            result = fut => result,
        }
    }
}
