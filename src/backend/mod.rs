mod http;
mod mock;

pub use http::*;
pub use mock::*;

use crate::config::Config;
use crate::error::Result;
use crate::models::{CheckoutResponse, CheckoutStatus, DownloadLink, PackageConfig, PublicStats};

/// Payment backend selected by configuration.
///
/// Callers talk to this one type; whether the other end is the live HTTP
/// API or the in-memory mock never leaks past construction. The operation
/// set is exactly what the funnel consumes: session creation, status reads,
/// stats, packages, and download generation/retrieval.
#[derive(Debug, Clone)]
pub enum PaymentBackend {
    Http(HttpBackend),
    Mock(MockBackend),
}

impl PaymentBackend {
    pub fn from_config(config: &Config) -> Self {
        if config.dev_mode {
            PaymentBackend::Mock(MockBackend::new())
        } else {
            PaymentBackend::Http(HttpBackend::new(&config.api_url))
        }
    }

    pub async fn create_checkout_session(
        &self,
        package_id: &str,
        origin_url: &str,
    ) -> Result<CheckoutResponse> {
        match self {
            PaymentBackend::Http(b) => b.create_checkout_session(package_id, origin_url).await,
            PaymentBackend::Mock(b) => b.create_checkout_session(package_id, origin_url),
        }
    }

    pub async fn checkout_status(&self, session_id: &str) -> Result<CheckoutStatus> {
        match self {
            PaymentBackend::Http(b) => b.checkout_status(session_id).await,
            PaymentBackend::Mock(b) => b.checkout_status(session_id),
        }
    }

    pub async fn public_stats(&self) -> Result<PublicStats> {
        match self {
            PaymentBackend::Http(b) => b.public_stats().await,
            PaymentBackend::Mock(b) => b.public_stats(),
        }
    }

    pub async fn packages(&self) -> Result<Vec<PackageConfig>> {
        match self {
            PaymentBackend::Http(b) => b.packages().await,
            PaymentBackend::Mock(b) => b.packages(),
        }
    }

    pub async fn generate_downloads(
        &self,
        email: &str,
        session_id: &str,
        package_type: &str,
    ) -> Result<Vec<DownloadLink>> {
        match self {
            PaymentBackend::Http(b) => b.generate_downloads(email, session_id, package_type).await,
            PaymentBackend::Mock(b) => b.generate_downloads(email, session_id, package_type),
        }
    }

    pub async fn downloads(&self, session_id: &str) -> Result<Vec<DownloadLink>> {
        match self {
            PaymentBackend::Http(b) => b.downloads(session_id).await,
            PaymentBackend::Mock(b) => b.downloads(session_id),
        }
    }
}
