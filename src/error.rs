//! Error taxonomy for the funnel client.
//!
//! The three polling failures (expired / timeout / check failed) are kept as
//! distinct variants so callers can show different user-facing messages.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Rejected locally before any network call (bad email, empty session id).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Checkout-session request failed or returned no redirect URL.
    #[error("checkout session creation failed: {0}")]
    SessionCreation(String),

    /// The provider gave a definitive negative answer; never retried.
    #[error("payment session expired")]
    PaymentExpired,

    /// Polling exhausted its attempt budget without resolution.
    #[error("payment status check timed out")]
    PaymentTimeout,

    /// Network or parse failure on the final polling attempt.
    #[error("payment status check failed: {0}")]
    PaymentCheckFailed(String),

    /// Download generation failed upstream; callers degrade to the fallback
    /// bundle instead of surfacing this.
    #[error("download generation failed: {0}")]
    DownloadGeneration(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the payment backend.
    #[error("backend returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// User-facing copy for each failure.
    ///
    /// The funnel converts every error at its boundary with this; nothing
    /// propagates to the shell as an uncaught failure. Timeout and check
    /// failure share copy on purpose (they are logged distinctly).
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => format!("Please check your details: {msg}."),
            AppError::SessionCreation(_) => {
                "We couldn't start the checkout. Please try again.".to_string()
            }
            AppError::PaymentExpired => {
                "Your payment session expired. Please restart checkout.".to_string()
            }
            AppError::PaymentTimeout | AppError::PaymentCheckFailed(_) => {
                "We couldn't verify your payment. Please contact support if this persists."
                    .to_string()
            }
            AppError::DownloadGeneration(_) => {
                "Your downloads are being prepared. Check back in a few minutes.".to_string()
            }
            AppError::Http(_) | AppError::Api { .. } | AppError::Internal(_) => {
                "Something went wrong on our side. Please try again.".to_string()
            }
        }
    }
}
