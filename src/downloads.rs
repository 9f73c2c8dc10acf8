//! Download-bundle materialization.
//!
//! Generation failure degrades to a fixed placeholder bundle instead of
//! blocking the success page. The fallback varies by purchased package:
//! premium buyers get the upsell placeholders too, so degraded mode never
//! hides items that were paid for.

use tracing::warn;

use crate::backend::PaymentBackend;
use crate::models::{DownloadLink, PREMIUM_PACKAGE_ID};

/// Request the deliverables for a confirmed purchase.
///
/// Only called once payment status is exactly `paid`; the funnel enforces
/// that ordering. Never returns an empty list.
pub async fn materialize(
    backend: &PaymentBackend,
    email: &str,
    session_id: &str,
    package_type: &str,
) -> Vec<DownloadLink> {
    match backend
        .generate_downloads(email, session_id, package_type)
        .await
    {
        Ok(links) if !links.is_empty() => links,
        Ok(_) => {
            warn!(session_id, package_type, "backend returned an empty bundle, serving fallback");
            fallback_bundle(package_type)
        }
        Err(err) => {
            warn!(
                session_id,
                package_type,
                error = %err,
                "download generation failed, serving fallback bundle"
            );
            fallback_bundle(package_type)
        }
    }
}

/// Placeholder bundle served when generation fails. Links are inert until
/// the real bundle is regenerated (the user is told to check their email).
pub fn fallback_bundle(package_type: &str) -> Vec<DownloadLink> {
    let mut links = vec![
        DownloadLink::new("AI Lead Generation System", "#", "15 MB"),
        DownloadLink::new("Content Creation Automation", "#", "12 MB"),
        DownloadLink::new("Customer Support AI Agent", "#", "18 MB"),
        DownloadLink::new("Sales Funnel Optimizer", "#", "8 MB"),
    ];
    if package_type == PREMIUM_PACKAGE_ID {
        links.push(DownloadLink::new("Premium Implementation Guide", "#", "25 MB"));
        links.push(DownloadLink::new("Advanced Workflow Templates", "#", "22 MB"));
    }
    links
}
