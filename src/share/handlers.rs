use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::metrics::EMAIL_SHARES;
use crate::share::email::{build_mailto_url, build_proposal_email_html, email_subject};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmailShareRequest {
    /// The live proposal HTML (possibly edited since composition).
    pub html: String,
    pub client_name: String,
    pub proposal_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmailShareResponse {
    #[schema(example = "IT Solution Proposal for Acme Corp - PROP-1764922400000-4f9a1c2e0")]
    pub subject: String,
    /// Byte-identical to the markup served by the preview endpoint.
    pub html_body: String,
    pub mailto_url: String,
}

#[utoipa::path(
    context_path = "/api",
    tag = "Share Service",
    post,
    path = "/share/email",
    request_body = EmailShareRequest,
    responses(
        (status = 200, description = "Email share payload", body = EmailShareResponse)
    )
)]
pub async fn share_email(req: web::Json<EmailShareRequest>) -> impl Responder {
    let req = req.into_inner();

    let subject = email_subject(&req.client_name, &req.proposal_id);
    let html_body = build_proposal_email_html(&req.html, &req.client_name, &req.proposal_id);
    let mailto_url = build_mailto_url(&subject, &html_body);
    EMAIL_SHARES.inc();

    HttpResponse::Ok().json(EmailShareResponse {
        subject,
        html_body,
        mailto_url,
    })
}
