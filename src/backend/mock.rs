//! In-memory payment backend for tests and local development.
//!
//! Behaves like the live backend's happy path by default (sessions resolve
//! paid on the first status read). Tests script per-session status
//! sequences and failure injection to drive the poller through its
//! termination paths.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{AppError, Result};
use crate::models::{
    self, CheckoutResponse, CheckoutStatus, DownloadLink, PackageConfig, PaymentStatus,
    PublicStats, SessionStatus, StatusMetadata, PREMIUM_PACKAGE_ID,
};

/// One scripted outcome for a status check. When a script runs out, its
/// last step repeats for every further attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStep {
    Pending,
    Paid,
    Expired,
    /// Simulated transport failure for this attempt.
    Fail,
}

#[derive(Debug, Default)]
struct Inner {
    scripts: HashMap<String, Script>,
    status_calls: HashMap<String, u32>,
    bundles: HashMap<String, Vec<DownloadLink>>,
    stats: Option<PublicStats>,
    fail_downloads: bool,
    fail_stats: bool,
    omit_session_url: bool,
}

#[derive(Debug)]
struct Script {
    steps: Vec<StatusStep>,
    next: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    inner: Arc<Mutex<Inner>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Script the status sequence a session will report, one step per
    /// status check.
    pub fn script_status(&self, session_id: &str, steps: &[StatusStep]) {
        self.lock().scripts.insert(
            session_id.to_string(),
            Script {
                steps: steps.to_vec(),
                next: 0,
            },
        );
    }

    /// Number of status checks performed against a session so far.
    pub fn status_calls(&self, session_id: &str) -> u32 {
        self.lock()
            .status_calls
            .get(session_id)
            .copied()
            .unwrap_or(0)
    }

    /// Make download generation fail, exercising the fallback bundle.
    pub fn fail_downloads(&self) {
        self.lock().fail_downloads = true;
    }

    /// Make the stats endpoint fail, exercising the baked-in fallback.
    pub fn fail_stats(&self) {
        self.lock().fail_stats = true;
    }

    pub fn set_stats(&self, stats: PublicStats) {
        self.lock().stats = Some(stats);
    }

    /// Make session creation respond without a redirect URL.
    pub fn omit_session_url(&self) {
        self.lock().omit_session_url = true;
    }

    pub fn create_checkout_session(
        &self,
        _package_id: &str,
        origin_url: &str,
    ) -> Result<CheckoutResponse> {
        let session_id = format!("mock_session_{}", uuid::Uuid::new_v4().simple());
        let url = if self.lock().omit_session_url {
            String::new()
        } else {
            format!("{origin_url}/success?session_id={session_id}")
        };
        Ok(CheckoutResponse { url, session_id })
    }

    pub fn checkout_status(&self, session_id: &str) -> Result<CheckoutStatus> {
        let mut inner = self.lock();
        *inner
            .status_calls
            .entry(session_id.to_string())
            .or_insert(0) += 1;

        // Unscripted sessions resolve paid immediately.
        let step = match inner.scripts.get_mut(session_id) {
            Some(script) => {
                let step = script
                    .steps
                    .get(script.next)
                    .or_else(|| script.steps.last())
                    .copied()
                    .unwrap_or(StatusStep::Paid);
                script.next += 1;
                step
            }
            None => StatusStep::Paid,
        };

        match step {
            StatusStep::Pending => Ok(CheckoutStatus {
                status: SessionStatus::Open,
                payment_status: PaymentStatus::Pending,
                amount_total: None,
                currency: None,
                metadata: None,
            }),
            StatusStep::Paid => Ok(CheckoutStatus {
                status: SessionStatus::Complete,
                payment_status: PaymentStatus::Paid,
                amount_total: Some(20.0),
                currency: Some("gbp".to_string()),
                metadata: Some(StatusMetadata {
                    customer_email: Some("user@example.com".to_string()),
                    package_id: Some(models::MAIN_PACKAGE_ID.to_string()),
                }),
            }),
            StatusStep::Expired => Ok(CheckoutStatus {
                status: SessionStatus::Expired,
                payment_status: PaymentStatus::Expired,
                amount_total: None,
                currency: None,
                metadata: None,
            }),
            StatusStep::Fail => Err(AppError::Internal("simulated status failure".into())),
        }
    }

    pub fn public_stats(&self) -> Result<PublicStats> {
        let inner = self.lock();
        if inner.fail_stats {
            return Err(AppError::Api {
                status: 503,
                message: "stats unavailable".into(),
            });
        }
        Ok(inner.stats.clone().unwrap_or_else(PublicStats::fallback))
    }

    pub fn packages(&self) -> Result<Vec<PackageConfig>> {
        Ok(models::catalog())
    }

    pub fn generate_downloads(
        &self,
        _email: &str,
        session_id: &str,
        package_type: &str,
    ) -> Result<Vec<DownloadLink>> {
        let mut inner = self.lock();
        if inner.fail_downloads {
            return Err(AppError::DownloadGeneration(
                "simulated generation failure".into(),
            ));
        }

        let mut links = vec![
            DownloadLink::new(
                "AI Lead Generation System",
                "https://downloads.example.com/ai-lead-generation.zip",
                "15 MB",
            ),
            DownloadLink::new(
                "Content Creation Automation",
                "https://downloads.example.com/content-automation.zip",
                "12 MB",
            ),
            DownloadLink::new(
                "Customer Support AI Agent",
                "https://downloads.example.com/support-agent.zip",
                "18 MB",
            ),
            DownloadLink::new(
                "Sales Funnel Optimizer",
                "https://downloads.example.com/funnel-optimizer.zip",
                "8 MB",
            ),
            DownloadLink::new(
                "Complete Implementation Guide",
                "https://downloads.example.com/implementation-guide.pdf",
                "5 MB",
            ),
            DownloadLink::new(
                "Video Walkthrough Series",
                "https://downloads.example.com/video-walkthroughs.zip",
                "156 MB",
            ),
        ];
        if package_type == PREMIUM_PACKAGE_ID {
            links.push(DownloadLink::new(
                "Premium Implementation Guide",
                "https://downloads.example.com/premium-guide.pdf",
                "25 MB",
            ));
            links.push(DownloadLink::new(
                "Advanced Workflow Templates",
                "https://downloads.example.com/advanced-templates.zip",
                "22 MB",
            ));
        }

        inner.bundles.insert(session_id.to_string(), links.clone());
        Ok(links)
    }

    pub fn downloads(&self, session_id: &str) -> Result<Vec<DownloadLink>> {
        self.lock()
            .bundles
            .get(session_id)
            .cloned()
            .ok_or_else(|| AppError::Api {
                status: 404,
                message: "Downloads not found".into(),
            })
    }
}
