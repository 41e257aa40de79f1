use actix_web::{post, web, HttpResponse};
use chrono::{SecondsFormat, Utc};
use serde_json::json;
use tracing::{error, info, warn};

use crate::types::{LeadForwardPayload, LeadRow, LeadSubmission};
use crate::validate::is_plausible_email;
use crate::AppState;

#[post("/leads")]
pub async fn leads(app_state: web::Data<AppState>, body: web::Bytes) -> HttpResponse {
    let submission: LeadSubmission = match serde_json::from_slice(&body) {
        Ok(parsed) => parsed,
        Err(_) => {
            return HttpResponse::BadRequest()
                .json(json!({ "ok": false, "error": "Invalid request" }));
        }
    };

    let Some(email) = submission
        .email
        .as_deref()
        .filter(|email| is_plausible_email(email))
    else {
        warn!("Rejecting lead submission without a usable email");
        return HttpResponse::BadRequest()
            .json(json!({ "ok": false, "error": "Email is required" }));
    };

    let Some(endpoint) = &app_state.config.leads_apps_script_url else {
        error!("Lead submitted but LEADS_APPS_SCRIPT_URL is not configured");
        return HttpResponse::InternalServerError().json(json!({
            "ok": false,
            "error": "Lead capture backend not configured (missing LEADS_APPS_SCRIPT_URL)."
        }));
    };

    let row = LeadRow {
        created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        template: submission.template,
        business_name: submission.business_name,
        website: submission.website,
        city: submission.city,
        radius_miles: submission.radius_miles,
        phone: submission.phone,
        services: submission.services,
        hours: submission.hours,
        promos: submission.promos,
        email: email.to_string(),
    };

    info!("Forwarding lead for template {:?}", row.template);

    let payload = LeadForwardPayload {
        sheet_id: app_state.config.leads_sheet_id.clone(),
        row,
    };

    // Single forward, no retry: a failed call loses the lead unless the
    // caller resubmits.
    let response = app_state
        .http_client
        .post(endpoint)
        .header("Cache-Control", "no-store")
        .json(&payload)
        .send()
        .await;

    match response {
        Ok(response) => {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            if !status.is_success() {
                warn!("Lead endpoint rejected forward with status {}", status);
                return HttpResponse::BadGateway().json(json!({
                    "ok": false,
                    "error": format!("Apps Script error: {}", text)
                }));
            }
            HttpResponse::Ok().json(json!({ "ok": true, "result": text }))
        }
        Err(e) => {
            error!("Failed to forward lead: {:?}", e);
            HttpResponse::InternalServerError()
                .json(json!({ "ok": false, "error": e.to_string() }))
        }
    }
}
