use actix_web::{post, web, HttpResponse};
use async_openai::types::{
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use serde_json::json;
use tracing::{error, info, warn};

use crate::gate::PaymentVerdict;
use crate::prompts::Prompts;
use crate::types::{GenerateRequest, GenerateResponse};
use crate::AppState;

const GENERATION_MODEL: &str = "gpt-4.1-mini";
const GENERATION_TEMPERATURE: f32 = 0.8;

#[post("/generate")]
pub async fn generate(app_state: web::Data<AppState>, body: web::Bytes) -> HttpResponse {
    let request: GenerateRequest = match serde_json::from_slice(&body) {
        Ok(parsed) => parsed,
        Err(_) => {
            return HttpResponse::BadRequest().json(json!({ "error": "Invalid request" }));
        }
    };

    if request.session_id.is_empty()
        || request.product_name.is_empty()
        || request.offer.is_empty()
        || request.audience.is_empty()
    {
        return HttpResponse::BadRequest().json(json!({ "error": "Invalid request" }));
    }

    info!("Generate request gated on session {}", request.session_id);

    // Gate by paid checkout session; no caching, re-verified per request.
    if let PaymentVerdict::Unpaid = app_state.gate.verify(&request.session_id).await {
        warn!("Rejecting generate request for unpaid session");
        return HttpResponse::PaymentRequired().json(json!({ "error": "Payment required" }));
    }

    // A live credential always wins over demo mode.
    let Some(oai_client) = &app_state.oai_client else {
        if app_state.config.demo_mode {
            info!("No generation credential; serving demo pack");
            return HttpResponse::Ok().json(GenerateResponse {
                content: Prompts::demo_pack(&request),
                demo: Some(true),
            });
        }
        error!("Generate requested but OPENAI_API_KEY is not configured");
        return HttpResponse::InternalServerError().json(json!({
            "error": "OPENAI_API_KEY not set. Add it to your environment to enable generation (or wire in another model provider)."
        }));
    };

    let completion_request = match CreateChatCompletionRequestArgs::default()
        .model(GENERATION_MODEL)
        .temperature(GENERATION_TEMPERATURE)
        .messages([
            match ChatCompletionRequestSystemMessageArgs::default()
                .content(Prompts::SYSTEM)
                .build()
            {
                Ok(message) => message.into(),
                Err(e) => {
                    error!("Failed to build system message: {:?}", e);
                    return HttpResponse::InternalServerError()
                        .json(json!({ "error": e.to_string() }));
                }
            },
            match ChatCompletionRequestUserMessageArgs::default()
                .content(Prompts::creative_pack(&request))
                .build()
            {
                Ok(message) => message.into(),
                Err(e) => {
                    error!("Failed to build user message: {:?}", e);
                    return HttpResponse::InternalServerError()
                        .json(json!({ "error": e.to_string() }));
                }
            },
        ])
        .build()
    {
        Ok(completion_request) => completion_request,
        Err(e) => {
            error!("Failed to build completion request: {:?}", e);
            return HttpResponse::InternalServerError().json(json!({ "error": e.to_string() }));
        }
    };

    // Single non-streaming call; any transport failure is terminal for the
    // request.
    match oai_client.chat().create(completion_request).await {
        Ok(response) => {
            let content = response
                .choices
                .first()
                .and_then(|choice| choice.message.content.clone())
                .unwrap_or_default();
            HttpResponse::Ok().json(GenerateResponse {
                content,
                demo: None,
            })
        }
        Err(e) => {
            error!("Failed to create completion: {:?}", e);
            HttpResponse::InternalServerError().json(json!({ "error": e.to_string() }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use std::collections::HashMap;

    fn state(pairs: &[(&str, &str)]) -> web::Data<AppState> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let config = AppConfig::from_map(&vars).unwrap();
        web::Data::new(AppState::new(config).unwrap())
    }

    fn valid_body(session_id: &str) -> serde_json::Value {
        json!({
            "sessionId": session_id,
            "productName": "GlowSkin Serum",
            "offer": "20% off first order",
            "audience": "women 25-45 into skincare",
        })
    }

    #[actix_web::test]
    async fn rejects_malformed_and_incomplete_bodies() {
        let app = test::init_service(
            App::new()
                .app_data(state(&[("DEMO_MODE", "true")]))
                .service(generate),
        )
        .await;

        let malformed = test::TestRequest::post()
            .uri("/generate")
            .set_payload("not json")
            .to_request();
        let resp = test::call_service(&app, malformed).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let empty_field = test::TestRequest::post()
            .uri("/generate")
            .set_json(json!({
                "sessionId": "demo",
                "productName": "",
                "offer": "x",
                "audience": "y",
            }))
            .to_request();
        let resp = test::call_service(&app, empty_field).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn unverifiable_session_returns_402_before_any_generation() {
        // Live gate with a dummy key: the malformed id short-circuits to
        // Unpaid without touching the network, and no OpenAI client exists.
        let app = test::init_service(
            App::new()
                .app_data(state(&[
                    ("STRIPE_SECRET_KEY", "sk_test_dummy"),
                    ("STRIPE_PRICE_ID_29", "price_29"),
                ]))
                .service(generate),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generate")
            .set_json(valid_body("not-a-real-session"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYMENT_REQUIRED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Payment required");
    }

    #[actix_web::test]
    async fn sentinel_session_with_demo_mode_serves_tagged_demo_pack() {
        let app = test::init_service(
            App::new()
                .app_data(state(&[("DEMO_MODE", "true")]))
                .service(generate),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generate")
            .set_json(valid_body("demo"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["demo"], true);
        let content = body["content"].as_str().unwrap();
        assert!(content.contains("Demo content"));
        assert!(content.contains("GlowSkin Serum"));
    }

    #[actix_web::test]
    async fn sentinel_session_bypasses_live_gate_but_missing_credential_is_a_config_error() {
        let app = test::init_service(
            App::new()
                .app_data(state(&[
                    ("STRIPE_SECRET_KEY", "sk_test_dummy"),
                    ("STRIPE_PRICE_ID_29", "price_29"),
                ]))
                .service(generate),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generate")
            .set_json(valid_body("demo"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("OPENAI_API_KEY"));
    }
}
