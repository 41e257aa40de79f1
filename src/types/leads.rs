use serde::{Deserialize, Serialize};

/// Denormalized wizard intake as submitted by the client. Everything but
/// the email is best-effort and coerced to defaults when absent.
#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct LeadSubmission {
    pub template: String,
    pub business_name: String,
    pub website: String,
    pub city: String,
    pub radius_miles: f64,
    pub phone: String,
    pub services: String,
    pub hours: String,
    pub promos: String,
    pub email: Option<String>,
}

/// Row shape appended by the spreadsheet endpoint.
#[derive(Serialize, Deserialize, Clone)]
pub struct LeadRow {
    pub created_at: String,
    pub template: String,
    pub business_name: String,
    pub website: String,
    pub city: String,
    pub radius_miles: f64,
    pub phone: String,
    pub services: String,
    pub hours: String,
    pub promos: String,
    pub email: String,
}

#[derive(Serialize, Clone)]
pub struct LeadForwardPayload {
    #[serde(rename = "sheetId")]
    pub sheet_id: Option<String>,
    pub row: LeadRow,
}
