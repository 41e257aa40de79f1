use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde_json::json;
use stripe::generated::checkout::checkout_session;
use stripe::{CheckoutSessionMode, CreateCheckoutSession, CreateCheckoutSessionLineItems};
use tracing::{error, info, warn};

use crate::config::resolve_base_url;
use crate::gate::PaymentVerdict;
use crate::types::{CheckoutRequest, CheckoutResponse, SuccessQuery, SuccessResponse};
use crate::validate::is_plausible_email;
use crate::AppState;

#[post("/create-checkout-session")]
pub async fn create_checkout_session(
    app_state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> HttpResponse {
    let checkout_request: CheckoutRequest = match serde_json::from_slice(&body) {
        Ok(parsed) => parsed,
        Err(_) => {
            return HttpResponse::BadRequest().json(json!({ "error": "Invalid request" }));
        }
    };

    if let Some(email) = &checkout_request.email {
        if !is_plausible_email(email) {
            warn!("Rejecting checkout request with invalid email");
            return HttpResponse::BadRequest().json(json!({ "error": "Invalid request" }));
        }
    }

    let Some(base_url) = resolve_base_url(&app_state.config, &req) else {
        error!("No APP_URL configured and no usable origin/forwarded headers on request");
        return HttpResponse::InternalServerError().json(json!({
            "error": "Unable to resolve application base URL; set APP_URL"
        }));
    };

    let Some(price_id) = app_state.config.active_price_id() else {
        error!("Active price tier has no configured price id");
        return HttpResponse::InternalServerError().json(json!({
            "error": "No price id configured for the active price tier"
        }));
    };

    let Some(stripe_client) = &app_state.stripe_client else {
        error!("Checkout requested but STRIPE_SECRET_KEY is not configured");
        return HttpResponse::InternalServerError()
            .json(json!({ "error": "STRIPE_SECRET_KEY not configured" }));
    };

    info!("Creating checkout session against price {}", price_id);

    // Stripe substitutes its own session token for the placeholder.
    let success_url = format!("{}/success?session_id={{CHECKOUT_SESSION_ID}}", base_url);
    let cancel_url = format!("{}/?canceled=1", base_url);

    let line_item = CreateCheckoutSessionLineItems {
        price: Some(price_id.to_string()),
        quantity: Some(1),
        ..Default::default()
    };

    let create_checkout_session = CreateCheckoutSession {
        allow_promotion_codes: Some(true),
        customer_email: checkout_request.email.as_deref(),
        line_items: vec![line_item].into(),
        mode: CheckoutSessionMode::Payment.into(),
        success_url: success_url.as_str().into(),
        cancel_url: cancel_url.as_str().into(),
        ..Default::default()
    };

    let checkout =
        checkout_session::CheckoutSession::create(stripe_client, create_checkout_session).await;

    match checkout {
        Ok(checkout) => match checkout.url {
            Some(url) => {
                info!("Created checkout session {}", checkout.id);
                HttpResponse::Ok().json(CheckoutResponse { url })
            }
            None => {
                error!("Checkout session {} has no redirect URL", checkout.id);
                HttpResponse::InternalServerError()
                    .json(json!({ "error": "Checkout session has no redirect URL" }))
            }
        },
        Err(e) => {
            error!("Failed to create checkout session: {:?}", e);
            HttpResponse::InternalServerError().json(json!({ "error": e.to_string() }))
        }
    }
}

/// JSON rendition of the post-payment success page: re-queries the provider
/// through the shared gate on every hit.
#[get("/success")]
pub async fn success(
    app_state: web::Data<AppState>,
    query: web::Query<SuccessQuery>,
) -> HttpResponse {
    let Some(session_id) = query.into_inner().session_id.filter(|id| !id.is_empty()) else {
        return HttpResponse::BadRequest().json(json!({ "error": "Missing session" }));
    };

    match app_state.gate.verify(&session_id).await {
        PaymentVerdict::Paid { session_id } => HttpResponse::Ok().json(SuccessResponse {
            paid: true,
            session_id,
        }),
        PaymentVerdict::Unpaid => HttpResponse::Ok().json(SuccessResponse {
            paid: false,
            session_id,
        }),
    }
}
