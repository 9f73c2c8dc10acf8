//! Poller termination-path tests, driven by scripted status sequences on
//! the mock backend with a zero delay.

mod common;
use common::*;

use storefront::error::AppError;
use tokio_test::assert_ok;

#[tokio::test]
async fn paid_immediately_resolves_on_first_attempt() {
    let (mock, backend) = mock_backend();
    // Unscripted sessions report paid at once.
    let status = assert_ok!(fast_poller(10).poll(&backend, "sess_paid").await);
    assert!(status.is_paid());
    assert_eq!(mock.status_calls("sess_paid"), 1);
}

#[tokio::test]
async fn expired_fails_immediately_without_retry() {
    let (mock, backend) = mock_backend();
    mock.script_status("sess_2", &[StatusStep::Expired]);

    let err = fast_poller(10).poll(&backend, "sess_2").await.unwrap_err();
    assert!(matches!(err, AppError::PaymentExpired));
    assert_eq!(mock.status_calls("sess_2"), 1, "expired must never retry");
}

#[tokio::test]
async fn succeeds_on_nth_attempt_with_exactly_n_requests() {
    let (mock, backend) = mock_backend();
    mock.script_status(
        "sess_n",
        &[
            StatusStep::Pending,
            StatusStep::Pending,
            StatusStep::Pending,
            StatusStep::Pending,
            StatusStep::Paid,
        ],
    );

    let status = fast_poller(10).poll(&backend, "sess_n").await.unwrap();
    assert!(status.is_paid());
    assert_eq!(mock.status_calls("sess_n"), 5);
}

#[tokio::test]
async fn always_pending_times_out_after_attempt_limit() {
    let (mock, backend) = mock_backend();
    mock.script_status("sess_p", &[StatusStep::Pending]);

    let err = fast_poller(4).poll(&backend, "sess_p").await.unwrap_err();
    assert!(matches!(err, AppError::PaymentTimeout));
    assert_eq!(mock.status_calls("sess_p"), 4);
}

#[tokio::test]
async fn request_failures_surface_as_check_failed_not_panic() {
    let (mock, backend) = mock_backend();
    mock.script_status("sess_f", &[StatusStep::Fail]);

    let err = fast_poller(3).poll(&backend, "sess_f").await.unwrap_err();
    assert!(matches!(err, AppError::PaymentCheckFailed(_)));
    assert_eq!(mock.status_calls("sess_f"), 3);
}

#[tokio::test]
async fn status_on_final_attempt_wins_over_earlier_failures() {
    let (mock, backend) = mock_backend();
    // Two transport failures, then the provider answers pending. The loop
    // ends on a status, so this is a timeout, not a check failure.
    mock.script_status(
        "sess_r",
        &[StatusStep::Fail, StatusStep::Fail, StatusStep::Pending],
    );

    let err = fast_poller(3).poll(&backend, "sess_r").await.unwrap_err();
    assert!(matches!(err, AppError::PaymentTimeout));
    assert_eq!(mock.status_calls("sess_r"), 3);
}

#[tokio::test]
async fn empty_session_id_is_rejected_before_any_request() {
    let (mock, backend) = mock_backend();

    let err = fast_poller(10).poll(&backend, "  ").await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(mock.status_calls("  "), 0);
}

#[tokio::test]
async fn end_to_end_pending_pending_paid() {
    let (mock, backend) = mock_backend();
    mock.script_status(
        "sess_1",
        &[StatusStep::Pending, StatusStep::Pending, StatusStep::Paid],
    );

    let status = fast_poller(5).poll(&backend, "sess_1").await.unwrap();
    assert!(status.is_paid());
    assert_eq!(mock.status_calls("sess_1"), 3);
}
