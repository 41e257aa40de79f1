use actix_web::{post, web, HttpResponse};
use serde_json::json;

use crate::plan::{render_plan, WizardIntake};

/// Headless preview of the wizard plan assembler; pure per-request
/// recomputation with no side effects.
#[post("/wizard/plan")]
pub async fn wizard_plan(body: web::Bytes) -> HttpResponse {
    let intake: WizardIntake = match serde_json::from_slice(&body) {
        Ok(parsed) => parsed,
        Err(_) => {
            return HttpResponse::BadRequest().json(json!({ "error": "Invalid request" }));
        }
    };

    HttpResponse::Ok().json(json!({ "plan": render_plan(&intake) }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn renders_plan_for_known_template() {
        let app = test::init_service(App::new().service(wizard_plan)).await;

        let req = test::TestRequest::post()
            .uri("/wizard/plan")
            .set_json(json!({
                "template": "local-service",
                "businessName": "Roanoke AC Pros",
                "primaryCity": "Roanoke, VA",
                "serviceRadiusMiles": 20,
                "services": "AC repair, AC install",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        let plan = body["plan"].as_str().unwrap();
        assert!(plan.contains("- AC repair near me"));
        assert!(plan.contains("- Roanoke, VA AC Repair — Same Day"));
    }

    #[actix_web::test]
    async fn rejects_unknown_template() {
        let app = test::init_service(App::new().service(wizard_plan)).await;

        let req = test::TestRequest::post()
            .uri("/wizard/plan")
            .set_json(json!({ "template": "billboards" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
