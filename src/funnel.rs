//! Purchase-flow orchestration: checkout initiation and the success-page
//! verification state machine.
//!
//! Every error is caught here and carried out as a user-facing message;
//! none propagate to the shell as uncaught failures.

use tracing::{info, warn};

use crate::backend::PaymentBackend;
use crate::downloads;
use crate::error::{AppError, Result};
use crate::models::{
    CheckoutResponse, CheckoutStatus, DownloadLink, PublicStats, PurchaseIntent,
    MAIN_PACKAGE_ID, PREMIUM_PACKAGE_ID,
};
use crate::poller::StatusPoller;

/// Validate the intent and create a checkout session for the package.
///
/// A response without a redirect URL is a [`AppError::SessionCreation`]
/// failure; the purchase flow stays open and the user can retry inline.
pub async fn begin_checkout(
    backend: &PaymentBackend,
    intent: &PurchaseIntent,
    package_id: &str,
    origin_url: &str,
) -> Result<CheckoutResponse> {
    intent.validate()?;

    let response = backend
        .create_checkout_session(package_id, origin_url)
        .await
        .map_err(|e| AppError::SessionCreation(e.to_string()))?;

    if response.url.trim().is_empty() {
        return Err(AppError::SessionCreation(
            "backend returned no redirect URL".into(),
        ));
    }

    info!(session_id = %response.session_id, package_id, "checkout session created");
    Ok(response)
}

/// Outcome of success-page verification.
#[derive(Debug)]
pub enum Verification {
    Confirmed {
        status: CheckoutStatus,
        /// Buyer email: the caller's if given, else from session metadata.
        email: Option<String>,
        bundle: Vec<DownloadLink>,
    },
    Failed {
        reason: AppError,
        /// User-facing copy for the failure state.
        message: String,
    },
}

impl Verification {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Verification::Confirmed { .. })
    }
}

/// The success-page state machine: resolve the session's payment status,
/// then unlock the download bundle.
///
/// `session_id` comes from the return-link query string; its absence is an
/// error state, not a crash. The bundle is materialized only after the
/// poller reports `paid`.
pub async fn verify_purchase(
    backend: &PaymentBackend,
    poller: &StatusPoller,
    session_id: Option<&str>,
    email: Option<&str>,
    upsell_accepted: bool,
) -> Verification {
    let session_id = match session_id.map(str::trim).filter(|s| !s.is_empty()) {
        Some(id) => id,
        None => {
            let reason = AppError::Validation("missing session_id parameter".into());
            return Verification::Failed {
                message: reason.user_message(),
                reason,
            };
        }
    };

    match poller.poll(backend, session_id).await {
        Ok(status) => {
            let email = email
                .map(str::to_string)
                .or_else(|| status.customer_email().map(str::to_string));
            let package_type = if upsell_accepted {
                PREMIUM_PACKAGE_ID
            } else {
                MAIN_PACKAGE_ID
            };
            let bundle = downloads::materialize(
                backend,
                email.as_deref().unwrap_or_default(),
                session_id,
                package_type,
            )
            .await;

            info!(session_id, package_type, items = bundle.len(), "purchase verified");
            Verification::Confirmed {
                status,
                email,
                bundle,
            }
        }
        Err(reason) => {
            // Check failures get their own log line for diagnostics even
            // though the user sees the same copy as a timeout.
            match &reason {
                AppError::PaymentCheckFailed(detail) => {
                    warn!(session_id, detail = %detail, "status check failed on final attempt");
                }
                _ => warn!(session_id, error = %reason, "payment verification failed"),
            }
            Verification::Failed {
                message: reason.user_message(),
                reason,
            }
        }
    }
}

/// Landing-page counters, with the baked-in numbers as degraded mode.
pub async fn landing_stats(backend: &PaymentBackend) -> PublicStats {
    match backend.public_stats().await {
        Ok(stats) => stats,
        Err(err) => {
            warn!(error = %err, "stats fetch failed, serving fallback numbers");
            PublicStats::fallback()
        }
    }
}
