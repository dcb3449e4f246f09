use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::metrics::PROPOSALS_COMPOSED;
use crate::proposal::composer::compose;
use crate::proposal::models::{
    ComposeOptions, GeneratedProposal, MilestoneRow, ProposalFormData, TemplatePreset,
};
use crate::share::email::build_proposal_email_html;
use crate::state::AppState;
use crate::ErrorResponse;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComposeProposalRequest {
    pub form_data: ProposalFormData,
    /// Template preset; the server default applies when omitted.
    #[serde(default)]
    pub preset: Option<TemplatePreset>,
    /// Replacement milestone schedule; the standard five rows apply when
    /// omitted.
    #[serde(default)]
    pub milestones: Option<Vec<MilestoneRow>>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    /// The live proposal HTML (possibly edited since composition).
    pub html: String,
    pub client_name: String,
    pub proposal_id: String,
}

#[utoipa::path(
    context_path = "/api",
    tag = "Proposal Service",
    post,
    path = "/proposals",
    request_body = ComposeProposalRequest,
    responses(
        (status = 200, description = "Proposal composed", body = GeneratedProposal),
        (status = 400, description = "Required form fields missing", body = ErrorResponse),
        (status = 404, description = "Selected service not found", body = ErrorResponse)
    )
)]
pub async fn compose_proposal(
    req: web::Json<ComposeProposalRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    if let Err(report) = req.form_data.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(&report));
    }

    let service = match data.catalog.by_id(&req.form_data.service_id) {
        Some(service) => service,
        None => {
            return HttpResponse::NotFound().json(ErrorResponse::not_found(&format!(
                "Service '{}' not found in catalog",
                req.form_data.service_id
            )))
        }
    };

    let options = ComposeOptions {
        preset: req.preset.unwrap_or(data.default_preset),
        milestones: req.milestones,
    };

    let proposal = compose(req.form_data, service, &options, data.stamp.as_ref());
    PROPOSALS_COMPOSED.inc();
    log::info!(
        "composed proposal {} for client '{}'",
        proposal.id,
        proposal.client_name
    );

    HttpResponse::Ok().json(proposal)
}

#[utoipa::path(
    context_path = "/api",
    tag = "Proposal Service",
    post,
    path = "/proposals/preview",
    request_body = PreviewRequest,
    responses(
        (status = 200, description = "Preview markup, byte-identical to the email body", content_type = "text/html")
    )
)]
pub async fn preview_proposal(req: web::Json<PreviewRequest>) -> impl Responder {
    let req = req.into_inner();
    let html = build_proposal_email_html(&req.html, &req.client_name, &req.proposal_id);
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
