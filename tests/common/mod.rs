//! Shared helpers for integration tests.

// Not every test binary uses every helper or re-export.
#![allow(dead_code, unused_imports)]

use std::time::Duration;

use storefront::backend::{MockBackend, PaymentBackend};
use storefront::poller::StatusPoller;

pub use storefront::backend::StatusStep;

/// Mock backend plus the dispatch wrapper the library is driven through.
pub fn mock_backend() -> (MockBackend, PaymentBackend) {
    let mock = MockBackend::new();
    let backend = PaymentBackend::Mock(mock.clone());
    (mock, backend)
}

/// Poller with zero inter-attempt delay so tests finish immediately.
pub fn fast_poller(max_attempts: u32) -> StatusPoller {
    StatusPoller::new(max_attempts, Duration::ZERO)
}
