use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::{
    CheckoutRequest, CheckoutResponse, CheckoutStatus, DownloadLink, DownloadRequest,
    DownloadResponse, PackageConfig, PublicStats,
};

/// Per-request ceiling. The backend may sit behind a cold Stripe round-trip,
/// so this is deliberately generous.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Live HTTP client for the payment backend API.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn create_checkout_session(
        &self,
        package_id: &str,
        origin_url: &str,
    ) -> Result<CheckoutResponse> {
        let request = CheckoutRequest {
            package_id: package_id.to_string(),
            origin_url: origin_url.to_string(),
        };

        let response = self
            .client
            .post(self.url("/checkout/session"))
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await?;
        let response = error_for_status(response).await?;

        Ok(response.json::<CheckoutResponse>().await?)
    }

    pub async fn checkout_status(&self, session_id: &str) -> Result<CheckoutStatus> {
        let path = format!("/checkout/status/{}", urlencoding::encode(session_id));
        let response = self
            .client
            .get(self.url(&path))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;
        let response = error_for_status(response).await?;

        Ok(response.json::<CheckoutStatus>().await?)
    }

    pub async fn public_stats(&self) -> Result<PublicStats> {
        let response = self
            .client
            .get(self.url("/stats/public"))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;
        let response = error_for_status(response).await?;

        Ok(response.json::<PublicStats>().await?)
    }

    pub async fn packages(&self) -> Result<Vec<PackageConfig>> {
        let response = self
            .client
            .get(self.url("/packages"))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;
        let response = error_for_status(response).await?;

        // The backend keys packages by id; present them cheapest first.
        let body: PackagesResponse = response.json().await?;
        let mut packages: Vec<PackageConfig> = body.packages.into_values().collect();
        packages.sort_by(|a, b| a.price.total_cmp(&b.price));
        Ok(packages)
    }

    pub async fn generate_downloads(
        &self,
        email: &str,
        session_id: &str,
        package_type: &str,
    ) -> Result<Vec<DownloadLink>> {
        let request = DownloadRequest {
            email: email.to_string(),
            session_id: session_id.to_string(),
            package_type: package_type.to_string(),
        };

        let response = self
            .client
            .post(self.url("/downloads/generate"))
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await?;
        let response = error_for_status(response).await?;

        let body: DownloadResponse = response.json().await?;
        Ok(body.download_links)
    }

    pub async fn downloads(&self, session_id: &str) -> Result<Vec<DownloadLink>> {
        let path = format!("/downloads/{}", urlencoding::encode(session_id));
        let response = self
            .client
            .get(self.url(&path))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;
        let response = error_for_status(response).await?;

        // The record endpoint returns the stored document; only the links
        // matter here, extra fields are ignored.
        let body: DownloadResponse = response.json().await?;
        Ok(body.download_links)
    }
}

#[derive(Debug, Deserialize)]
struct PackagesResponse {
    #[serde(default)]
    packages: HashMap<String, PackageConfig>,
}

async fn error_for_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(AppError::Api {
        status: status.as_u16(),
        message,
    })
}
