use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub package_id: String,
    pub origin_url: String,
}

/// A checkout session as created by the external payment provider. The
/// client never mutates it; it only redirects to `url` and later reads
/// status by `session_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub url: String,
    pub session_id: String,
}

/// Lifecycle of the provider-side session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SessionStatus {
    Open,
    Complete,
    Expired,
    /// Anything the provider reports that we don't recognize.
    #[serde(other)]
    Unknown,
}

/// Payment state within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentStatus {
    Initiated,
    Pending,
    Paid,
    Failed,
    Expired,
    Unpaid,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusMetadata {
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub package_id: Option<String>,
}

/// Read-only status view fetched by session id. Not cached beyond the
/// current polling loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutStatus {
    pub status: SessionStatus,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub amount_total: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub metadata: Option<StatusMetadata>,
}

impl CheckoutStatus {
    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }

    pub fn is_expired(&self) -> bool {
        self.status == SessionStatus::Expired
    }

    pub fn customer_email(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.customer_email.as_deref())
    }
}
