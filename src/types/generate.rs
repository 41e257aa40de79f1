use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub session_id: String,
    pub product_name: String,
    pub offer: String,
    pub audience: String,
    #[serde(default)]
    pub proof: Option<String>,
    #[serde(default)]
    pub constraints: Option<String>,
    #[serde(default)]
    pub cta: Option<String>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct GenerateResponse {
    pub content: String,
    /// Set only when canned demo content was substituted for a live call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<bool>,
}
