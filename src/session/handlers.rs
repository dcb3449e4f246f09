use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::proposal::ProposalFormData;
use crate::session::store::{session_key, DRAFT_KEY, FORM_DATA_KEY};
use crate::state::AppState;
use crate::ErrorResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DraftPayload {
    /// Working proposal HTML as last edited.
    pub html: String,
}

#[utoipa::path(
    context_path = "/api",
    tag = "Session Service",
    put,
    path = "/sessions/{session_id}/form",
    request_body = ProposalFormData,
    responses(
        (status = 204, description = "Form state stored"),
        (status = 500, description = "Form state could not be encoded", body = ErrorResponse)
    ),
    params(
        ("session_id" = String, Path, description = "Caller-chosen session identifier")
    )
)]
pub async fn put_form(
    session_id: web::Path<String>,
    form: web::Json<ProposalFormData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let encoded = match serde_json::to_string(&form.into_inner()) {
        Ok(json) => json,
        Err(err) => {
            log::error!("Failed to encode form state: {}", err);
            return HttpResponse::InternalServerError().json(ErrorResponse::internal_error(
                &format!("Failed to encode form state: {}", err),
            ));
        }
    };

    data.sessions
        .set(&session_key(&session_id, FORM_DATA_KEY), encoded);
    HttpResponse::NoContent().finish()
}

#[utoipa::path(
    context_path = "/api",
    tag = "Session Service",
    get,
    path = "/sessions/{session_id}/form",
    responses(
        (status = 200, description = "Stored form state", body = ProposalFormData),
        (status = 404, description = "Nothing stored for this session", body = ErrorResponse)
    ),
    params(
        ("session_id" = String, Path, description = "Caller-chosen session identifier")
    )
)]
pub async fn get_form(session_id: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    match data.sessions.get(&session_key(&session_id, FORM_DATA_KEY)) {
        Some(json) => HttpResponse::Ok()
            .content_type("application/json")
            .body(json),
        None => HttpResponse::NotFound().json(ErrorResponse::new(
            "MissingSessionState",
            &format!("No form data stored for session '{}'", session_id),
        )),
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Session Service",
    put,
    path = "/sessions/{session_id}/draft",
    request_body = DraftPayload,
    responses(
        (status = 204, description = "Draft stored")
    ),
    params(
        ("session_id" = String, Path, description = "Caller-chosen session identifier")
    )
)]
pub async fn put_draft(
    session_id: web::Path<String>,
    draft: web::Json<DraftPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    data.sessions
        .set(&session_key(&session_id, DRAFT_KEY), draft.into_inner().html);
    HttpResponse::NoContent().finish()
}

#[utoipa::path(
    context_path = "/api",
    tag = "Session Service",
    get,
    path = "/sessions/{session_id}/draft",
    responses(
        (status = 200, description = "Stored draft", body = DraftPayload),
        (status = 404, description = "Nothing stored for this session", body = ErrorResponse)
    ),
    params(
        ("session_id" = String, Path, description = "Caller-chosen session identifier")
    )
)]
pub async fn get_draft(session_id: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    match data.sessions.get(&session_key(&session_id, DRAFT_KEY)) {
        Some(html) => HttpResponse::Ok().json(DraftPayload { html }),
        None => HttpResponse::NotFound().json(ErrorResponse::new(
            "MissingSessionState",
            &format!("No draft stored for session '{}'", session_id),
        )),
    }
}
