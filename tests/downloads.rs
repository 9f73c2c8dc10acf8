//! Download-bundle materialization and fallback behavior.

mod common;
use common::*;

use storefront::downloads;
use storefront::error::AppError;
use storefront::models::{MAIN_PACKAGE_ID, PREMIUM_PACKAGE_ID};

#[tokio::test]
async fn materialize_passes_through_generated_bundle() {
    let (_, backend) = mock_backend();

    let bundle =
        downloads::materialize(&backend, "buyer@example.com", "sess_dl", MAIN_PACKAGE_ID).await;
    assert_eq!(bundle.len(), 6);
    assert!(bundle.iter().all(|l| l.url.starts_with("https://")));
    // Insertion order is preserved.
    assert_eq!(bundle[0].name, "AI Lead Generation System");
}

#[tokio::test]
async fn generation_failure_degrades_to_fallback_not_error() {
    let (mock, backend) = mock_backend();
    mock.fail_downloads();

    let bundle =
        downloads::materialize(&backend, "buyer@example.com", "sess_dl", MAIN_PACKAGE_ID).await;
    assert_eq!(bundle.len(), 4);
    assert!(bundle.iter().all(|l| l.url == "#"));
}

#[tokio::test]
async fn fallback_includes_premium_items_for_premium_buyers() {
    let (mock, backend) = mock_backend();
    mock.fail_downloads();

    let bundle =
        downloads::materialize(&backend, "buyer@example.com", "sess_dl", PREMIUM_PACKAGE_ID).await;
    assert_eq!(bundle.len(), 6);
    assert!(bundle.iter().any(|l| l.name == "Premium Implementation Guide"));
    assert!(bundle.iter().any(|l| l.name == "Advanced Workflow Templates"));
}

#[tokio::test]
async fn fallback_is_never_empty() {
    assert!(!downloads::fallback_bundle(MAIN_PACKAGE_ID).is_empty());
    assert!(!downloads::fallback_bundle("unknown_package").is_empty());
}

#[tokio::test]
async fn stored_bundle_is_retrievable_by_session() {
    let (_, backend) = mock_backend();

    let generated = backend
        .generate_downloads("buyer@example.com", "sess_keep", MAIN_PACKAGE_ID)
        .await
        .unwrap();
    let fetched = backend.downloads("sess_keep").await.unwrap();
    assert_eq!(generated, fetched);
}

#[tokio::test]
async fn unknown_session_has_no_downloads() {
    let (_, backend) = mock_backend();

    let err = backend.downloads("sess_missing").await.unwrap_err();
    assert!(matches!(err, AppError::Api { status: 404, .. }));
}
