use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Default)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct CheckoutResponse {
    pub url: String,
}

#[derive(Deserialize)]
pub struct SuccessQuery {
    pub session_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct SuccessResponse {
    pub paid: bool,
    pub session_id: String,
}
