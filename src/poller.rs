//! Payment-status poller.
//!
//! External checkout providers confirm payment out-of-band, so after the
//! redirect back the client cannot know synchronously whether payment
//! cleared. The poller issues a bounded sequence of strictly sequential
//! status checks with a fixed delay gate between attempts. Expired is a
//! fast-path: the provider already gave a definitive negative answer, so
//! there is no point waiting out the attempt budget.
//!
//! The attempt ceiling is the only timeout; slow individual requests can
//! push total elapsed time past `attempts x delay`.

use std::time::Duration;

use tracing::{debug, warn};

use crate::backend::PaymentBackend;
use crate::error::{AppError, Result};
use crate::models::CheckoutStatus;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy)]
pub struct StatusPoller {
    max_attempts: u32,
    delay: Duration,
}

impl Default for StatusPoller {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_DELAY)
    }
}

impl StatusPoller {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// Poll until the session resolves or the attempt budget runs out.
    ///
    /// Termination, in priority order:
    /// 1. `paid` reported: success with the status payload.
    /// 2. session `expired`: [`AppError::PaymentExpired`], never retried.
    /// 3. any other status or transient request failure: retry after the
    ///    delay, until attempts are exhausted.
    /// 4. budget exhausted with the final attempt returning a status:
    ///    [`AppError::PaymentTimeout`].
    /// 5. budget exhausted with the final attempt failing:
    ///    [`AppError::PaymentCheckFailed`].
    ///
    /// The only state across attempts is the loop counter; dropping the
    /// returned future abandons any remaining attempts.
    pub async fn poll(
        &self,
        backend: &PaymentBackend,
        session_id: &str,
    ) -> Result<CheckoutStatus> {
        if session_id.trim().is_empty() {
            return Err(AppError::Validation("session id is required".into()));
        }

        let mut last_error: Option<AppError> = None;

        for attempt in 1..=self.max_attempts {
            match backend.checkout_status(session_id).await {
                Ok(status) => {
                    if status.is_paid() {
                        debug!(session_id, attempt, "payment confirmed");
                        return Ok(status);
                    }
                    if status.is_expired() {
                        return Err(AppError::PaymentExpired);
                    }
                    debug!(
                        session_id,
                        attempt,
                        payment_status = %status.payment_status,
                        "payment not resolved yet"
                    );
                    last_error = None;
                }
                Err(err) => {
                    warn!(session_id, attempt, error = %err, "status check attempt failed");
                    last_error = Some(err);
                }
            }

            // No delay after the final attempt.
            if attempt < self.max_attempts {
                tokio::time::sleep(self.delay).await;
            }
        }

        match last_error {
            Some(err) => Err(AppError::PaymentCheckFailed(err.to_string())),
            None => Err(AppError::PaymentTimeout),
        }
    }
}
