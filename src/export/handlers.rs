use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::export::paginate::{plan_pages, PageGeometry};
use crate::export::pdf::assemble_pdf;
use crate::export::raster::RasterOptions;
use crate::export::{export_filename, ExportError};
use crate::metrics::PDF_EXPORTS;
use crate::state::AppState;
use crate::ErrorResponse;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportPdfRequest {
    /// The live proposal HTML (possibly edited since composition).
    pub html: String,
    pub client_name: String,
    pub proposal_id: String,
}

#[utoipa::path(
    context_path = "/api",
    tag = "Export Service",
    post,
    path = "/exports/pdf",
    request_body = ExportPdfRequest,
    responses(
        (status = 200, description = "Paginated A4 PDF", content_type = "application/pdf"),
        (status = 400, description = "Empty document", body = ErrorResponse),
        (status = 500, description = "Rendering failed", body = ErrorResponse)
    )
)]
pub async fn export_pdf(
    req: web::Json<ExportPdfRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    if req.html.trim().is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(
            "Proposal HTML must not be empty",
        ));
    }

    let options = RasterOptions::default();
    let image = match data.rasterizer.rasterize(&req.html, &options).await {
        Ok(image) => image,
        Err(err) => return export_failure(&req.proposal_id, err),
    };

    let plan = match plan_pages(image.width_px, image.height_px, PageGeometry::a4()) {
        Ok(plan) => plan,
        Err(err) => return export_failure(&req.proposal_id, err),
    };

    let pdf = assemble_pdf(&image, &plan);
    let filename = export_filename(&req.proposal_id, &req.client_name);
    PDF_EXPORTS.inc();
    log::info!(
        "Exported proposal {} as '{}' ({} pages)",
        req.proposal_id,
        filename,
        plan.page_count()
    );

    HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", filename),
        ))
        .body(pdf)
}

fn export_failure(proposal_id: &str, err: ExportError) -> HttpResponse {
    log::error!("PDF export failed for proposal {}: {}", proposal_id, err);
    HttpResponse::InternalServerError().json(ErrorResponse::new(
        "ExportFailed",
        &format!("Failed to export PDF: {}", err),
    ))
}
