use crate::error::{AppError, Result};

/// Client-local purchase state: who is buying and whether the upsell was
/// accepted. Ephemeral; lives only between checkout initiation and the
/// success-page render, never persisted.
#[derive(Debug, Clone)]
pub struct PurchaseIntent {
    pub email: String,
    pub upsell_accepted: bool,
}

impl PurchaseIntent {
    pub fn new(email: impl Into<String>, upsell_accepted: bool) -> Self {
        Self {
            email: email.into(),
            upsell_accepted,
        }
    }

    /// Reject malformed or missing emails before any network call.
    pub fn validate(&self) -> Result<()> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(AppError::Validation("email is required".into()));
        }
        let valid = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
                    && !email.contains(char::is_whitespace)
            }
            None => false,
        };
        if !valid {
            return Err(AppError::Validation(format!(
                "'{email}' does not look like an email address"
            )));
        }
        Ok(())
    }
}
