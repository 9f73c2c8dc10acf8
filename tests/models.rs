//! Wire-type and validation tests.

use storefront::models::{
    CheckoutStatus, PaymentStatus, PurchaseIntent, SessionStatus, find_package, catalog,
    MAIN_PACKAGE_ID, PREMIUM_PACKAGE_ID,
};

#[test]
fn intent_accepts_plain_addresses() {
    assert!(PurchaseIntent::new("buyer@example.com", false).validate().is_ok());
    assert!(PurchaseIntent::new("a.b+tag@sub.domain.co.uk", true).validate().is_ok());
}

#[test]
fn intent_rejects_malformed_addresses() {
    for email in ["", "   ", "plainaddress", "@example.com", "user@", "user@nodot", "user @example.com", "user@.com", "user@example.com."] {
        assert!(
            PurchaseIntent::new(email, false).validate().is_err(),
            "should reject {email:?}"
        );
    }
}

#[test]
fn status_payload_parses_the_backend_shape() {
    let body = r#"{
        "status": "complete",
        "payment_status": "paid",
        "amount_total": 20.0,
        "currency": "gbp",
        "metadata": {"customer_email": "user@example.com"}
    }"#;

    let status: CheckoutStatus = serde_json::from_str(body).unwrap();
    assert!(status.is_paid());
    assert!(!status.is_expired());
    assert_eq!(status.customer_email(), Some("user@example.com"));
}

#[test]
fn unrecognized_statuses_map_to_unknown() {
    let body = r#"{"status": "weird", "payment_status": "half_paid"}"#;

    let status: CheckoutStatus = serde_json::from_str(body).unwrap();
    assert_eq!(status.status, SessionStatus::Unknown);
    assert_eq!(status.payment_status, PaymentStatus::Unknown);
    assert!(!status.is_paid());
}

#[test]
fn sparse_status_payload_parses_with_defaults() {
    let body = r#"{"status": "open", "payment_status": "pending"}"#;

    let status: CheckoutStatus = serde_json::from_str(body).unwrap();
    assert_eq!(status.amount_total, None);
    assert_eq!(status.customer_email(), None);
}

#[test]
fn catalog_gates_the_upsell_behind_the_base_purchase() {
    let main = find_package(MAIN_PACKAGE_ID).unwrap();
    let premium = find_package(PREMIUM_PACKAGE_ID).unwrap();

    assert_eq!(main.available_to, None);
    assert_eq!(premium.available_to.as_deref(), Some("main_buyers"));
    assert!(premium.price > main.price);
    assert_eq!(catalog().len(), 2);
}
