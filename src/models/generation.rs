use serde::{Deserialize, Serialize};

/// Canonical inbound shape for title generation requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateTitlesRequest {
    /// Missing topics deserialize as empty and are rejected by validation.
    #[serde(default)]
    pub topic: String,
    /// Style label; unknown or absent labels fall back to the default style.
    #[serde(default)]
    pub style: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateTitlesResponse {
    pub titles: Vec<String>,
}
