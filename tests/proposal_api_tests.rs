//! Integration tests for proposal composition and preview.

use std::sync::Arc;

use actix_web::{test, web, App};
use serde_json::{json, Value};

use proposal_desk_server::catalog::ServiceCatalog;
use proposal_desk_server::export::raster::{FixedRasterizer, RasterImage};
use proposal_desk_server::proposal::handlers as proposal_handlers;
use proposal_desk_server::proposal::{FixedStamp, TemplatePreset};
use proposal_desk_server::share::build_proposal_email_html;
use proposal_desk_server::AppState;

const FIXED_DATE: &str = "5 December 2025";
const FIXED_ID: &str = "PROP-1764922400000-fixedtest";

fn test_state() -> web::Data<AppState> {
    let catalog = ServiceCatalog::load_default().expect("bundled catalog loads");
    let image = RasterImage {
        jpeg: vec![0xFF, 0xD8, 0xFF, 0xD9],
        width_px: 1600,
        height_px: 1000,
    };
    web::Data::new(AppState::with_parts(
        catalog,
        Arc::new(FixedStamp::new(FIXED_DATE, FIXED_ID)),
        Arc::new(FixedRasterizer::new(image)),
        TemplatePreset::Branded,
    ))
}

fn proposal_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::resource("/proposals")
                    .route(web::post().to(proposal_handlers::compose_proposal)),
            )
            .service(
                web::resource("/proposals/preview")
                    .route(web::post().to(proposal_handlers::preview_proposal)),
            ),
    );
}

fn acme_payload() -> Value {
    json!({
        "formData": {
            "clientName": "Acme Corp",
            "industry": "Healthcare",
            "serviceId": "ai-automation"
        }
    })
}

/// Blank timeline and budget fall back to the selected service's estimates.
#[actix_web::test]
async fn test_compose_uses_service_fallbacks() {
    let app =
        test::init_service(App::new().app_data(test_state()).configure(proposal_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/proposals")
        .set_json(acme_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], FIXED_ID);
    assert_eq!(body["date"], FIXED_DATE);
    assert_eq!(body["clientName"], "Acme Corp");
    assert_eq!(body["timeline"], "8-12 weeks");
    assert_eq!(body["costRange"], "₹5L-₹10L");
    assert!(body["problemUnderstanding"]
        .as_str()
        .unwrap()
        .contains("Acme Corp operates in the Healthcare sector"));
}

/// With a pinned stamp, composing twice yields byte-identical responses.
#[actix_web::test]
async fn test_compose_is_deterministic_under_fixed_stamp() {
    let app =
        test::init_service(App::new().app_data(test_state()).configure(proposal_routes)).await;

    let first = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/proposals")
            .set_json(acme_payload())
            .to_request(),
    )
    .await;
    let second = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/proposals")
            .set_json(acme_payload())
            .to_request(),
    )
    .await;

    let first_bytes = test::read_body(first).await;
    let second_bytes = test::read_body(second).await;
    assert_eq!(first_bytes, second_bytes);
}

/// Non-blank form values win over service fallbacks.
#[actix_web::test]
async fn test_compose_prefers_filled_form_values() {
    let app =
        test::init_service(App::new().app_data(test_state()).configure(proposal_routes)).await;

    let payload = json!({
        "formData": {
            "clientName": "Acme Corp",
            "industry": "Healthcare",
            "serviceId": "ai-automation",
            "timeline": "6 weeks",
            "budget": "₹3L flat"
        }
    });
    let req = test::TestRequest::post()
        .uri("/api/proposals")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["timeline"], "6 weeks");
    assert_eq!(body["costRange"], "₹3L flat");
    assert!(body["fullContent"].as_str().unwrap().contains("₹3L flat"));
}

#[actix_web::test]
async fn test_compose_rejects_blank_required_fields() {
    let app =
        test::init_service(App::new().app_data(test_state()).configure(proposal_routes)).await;

    let payload = json!({
        "formData": {
            "clientName": "   ",
            "industry": "Healthcare",
            "serviceId": "ai-automation"
        }
    });
    let req = test::TestRequest::post()
        .uri("/api/proposals")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BadRequest");
    assert!(body["message"].as_str().unwrap().contains("clientName"));
}

#[actix_web::test]
async fn test_compose_with_unknown_service_is_not_found() {
    let app =
        test::init_service(App::new().app_data(test_state()).configure(proposal_routes)).await;

    let payload = json!({
        "formData": {
            "clientName": "Acme Corp",
            "industry": "Healthcare",
            "serviceId": "does-not-exist"
        }
    });
    let req = test::TestRequest::post()
        .uri("/api/proposals")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NotFound");
}

/// Omitting the preset renders the full branded document.
#[actix_web::test]
async fn test_default_preset_renders_branded_document() {
    let app =
        test::init_service(App::new().app_data(test_state()).configure(proposal_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/proposals")
        .set_json(acme_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;

    let body: Value = test::read_body_json(resp).await;
    let content = body["fullContent"].as_str().unwrap();
    assert!(content.contains("<div class=\"cw-proposal\">"));
    assert!(content.contains("Project Specifications"));
    assert!(content.contains("7. Timelines &amp; Payment Milestone"));
    assert!(content.contains("13. Post Deployment Support"));
}

/// Naming the classic preset switches the whole document family.
#[actix_web::test]
async fn test_preset_override_renders_classic_document() {
    let app =
        test::init_service(App::new().app_data(test_state()).configure(proposal_routes)).await;

    let mut payload = acme_payload();
    payload["preset"] = json!("classic");
    let req = test::TestRequest::post()
        .uri("/api/proposals")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    let body: Value = test::read_body_json(resp).await;
    let content = body["fullContent"].as_str().unwrap();
    assert!(content.contains("cw-proposal-classic"));
    assert!(content.contains("Executive Summary"));
}

/// A caller-supplied milestone schedule replaces the standard rows.
#[actix_web::test]
async fn test_milestone_override_replaces_standard_schedule() {
    let app =
        test::init_service(App::new().app_data(test_state()).configure(proposal_routes)).await;

    let mut payload = acme_payload();
    payload["milestones"] = json!([
        {
            "sn": 1,
            "milestone": "Discovery complete",
            "duration": "2 Weeks",
            "percentage": "50%",
            "amount": "500000"
        },
        {
            "sn": 2,
            "milestone": "Production cutover",
            "duration": "6 Weeks",
            "percentage": "50%",
            "amount": "500000"
        }
    ]);
    let req = test::TestRequest::post()
        .uri("/api/proposals")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    let body: Value = test::read_body_json(resp).await;
    let content = body["fullContent"].as_str().unwrap();
    assert!(content.contains("Discovery complete"));
    assert!(content.contains("Production cutover"));
    assert!(!content.contains("Upon signing the contract"));
}

/// The preview endpoint returns exactly the markup the email share sends.
#[actix_web::test]
async fn test_preview_wraps_html_in_email_markup() {
    let app =
        test::init_service(App::new().app_data(test_state()).configure(proposal_routes)).await;

    let payload = json!({
        "html": "<p>Final scope as discussed.</p>",
        "clientName": "Acme Corp",
        "proposalId": "PROP-42-abc"
    });
    let req = test::TestRequest::post()
        .uri("/api/proposals/preview")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert!(resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let body = test::read_body(resp).await;
    let expected =
        build_proposal_email_html("<p>Final scope as discussed.</p>", "Acme Corp", "PROP-42-abc");
    assert_eq!(body, expected.as_bytes());
}
