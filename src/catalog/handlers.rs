use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::catalog::models::ServiceDefinition;
use crate::state::AppState;
use crate::ErrorResponse;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[utoipa::path(
    context_path = "/api",
    tag = "Service Catalog",
    get,
    path = "/services",
    responses(
        (status = 200, description = "List of all service offerings", body = [ServiceDefinition])
    )
)]
pub async fn get_all_services(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.catalog.all())
}

#[utoipa::path(
    context_path = "/api",
    tag = "Service Catalog",
    get,
    path = "/services/search",
    responses(
        (status = 200, description = "Services matching the query", body = [ServiceDefinition])
    ),
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive match over name, short description and industries")
    )
)]
pub async fn search_services(
    query: web::Query<SearchQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let hits = data.catalog.search(&query.q);
    HttpResponse::Ok().json(hits)
}

#[utoipa::path(
    context_path = "/api",
    tag = "Service Catalog",
    get,
    path = "/services/{id}",
    responses(
        (status = 200, description = "Service found", body = ServiceDefinition),
        (status = 404, description = "Service not found", body = ErrorResponse)
    ),
    params(
        ("id" = String, Path, description = "ID of the service to retrieve")
    )
)]
pub async fn get_service_by_id(
    id: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.catalog.by_id(&id) {
        Some(service) => HttpResponse::Ok().json(service),
        None => HttpResponse::NotFound().json(ErrorResponse::not_found(&format!(
            "Service '{}' not found in catalog",
            id
        ))),
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Service Catalog",
    get,
    path = "/services/{id}/subdomains/{sub_id}",
    responses(
        (status = 200, description = "Sub-domain found", body = crate::catalog::models::SubDomain),
        (status = 404, description = "Service or sub-domain not found", body = ErrorResponse)
    ),
    params(
        ("id" = String, Path, description = "ID of the parent service"),
        ("sub_id" = String, Path, description = "ID of the sub-domain")
    )
)]
pub async fn get_sub_domain(
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (service_id, sub_id) = path.into_inner();
    match data.catalog.sub_domain(&service_id, &sub_id) {
        Some(sub) => HttpResponse::Ok().json(sub),
        None => HttpResponse::NotFound().json(ErrorResponse::not_found(&format!(
            "Sub-domain '{}' not found under service '{}'",
            sub_id, service_id
        ))),
    }
}
