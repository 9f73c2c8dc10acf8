use serde::{Deserialize, Serialize};

/// One deliverable in a download bundle. Ordering within a bundle is
/// insertion order and the bundle is immutable once generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadLink {
    pub name: String,
    pub url: String,
    pub size: String,
}

impl DownloadLink {
    pub fn new(name: &str, url: &str, size: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            size: size.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub email: String,
    pub session_id: String,
    pub package_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadResponse {
    pub download_links: Vec<DownloadLink>,
}
