use serde::{Deserialize, Serialize};

/// The base offer shown on the landing page.
pub const MAIN_PACKAGE_ID: &str = "automation_main";
/// The post-purchase upsell, only offered to main-package buyers.
pub const PREMIUM_PACKAGE_ID: &str = "automation_premium";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageConfig {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub currency: String,
    pub description: String,
    #[serde(default)]
    pub contents: Vec<String>,
    /// None = anyone; "main_buyers" = gated behind the base purchase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_to: Option<String>,
}

/// Static package catalog. The backend serves its own copy at `/packages`;
/// this one backs the CLI when the backend is unreachable and the mock in
/// dev mode.
pub fn catalog() -> Vec<PackageConfig> {
    vec![
        PackageConfig {
            id: MAIN_PACKAGE_ID.to_string(),
            name: "Automation Workflow Bundle".to_string(),
            price: 20.0,
            currency: "gbp".to_string(),
            description: "Four complete AI automation workflows plus implementation guides"
                .to_string(),
            contents: vec![
                "AI Lead Generation System".to_string(),
                "Content Creation Automation".to_string(),
                "Customer Support AI Agent".to_string(),
                "Sales Funnel Optimizer".to_string(),
                "Step-by-step Implementation Guides".to_string(),
                "Video Walkthroughs".to_string(),
            ],
            available_to: None,
        },
        PackageConfig {
            id: PREMIUM_PACKAGE_ID.to_string(),
            name: "Premium Implementation Package".to_string(),
            price: 125.0,
            currency: "gbp".to_string(),
            description: "One-on-one implementation session plus advanced workflow templates"
                .to_string(),
            contents: vec![
                "1-hour screen-share implementation".to_string(),
                "Custom workflow modifications".to_string(),
                "Advanced Workflow Templates".to_string(),
                "Direct access via calendar booking".to_string(),
            ],
            available_to: Some("main_buyers".to_string()),
        },
    ]
}

pub fn find_package(id: &str) -> Option<PackageConfig> {
    catalog().into_iter().find(|p| p.id == id)
}
