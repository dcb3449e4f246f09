use actix_web::{HttpResponse, Responder};

use crate::editor::actions::{all_action_descriptors, ActionDescriptor};

#[utoipa::path(
    context_path = "/api",
    tag = "Editor Service",
    get,
    path = "/editor/actions",
    responses(
        (status = 200, description = "Toolbar actions the editor supports", body = [ActionDescriptor])
    )
)]
pub async fn list_actions() -> impl Responder {
    HttpResponse::Ok().json(all_action_descriptors())
}
