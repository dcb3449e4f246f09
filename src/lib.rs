use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use chrono;
use dotenvy;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod catalog;
pub mod config;
pub mod editor;
pub mod export;
pub mod metrics;
pub mod proposal;
pub mod session;
pub mod share;
pub mod state;

pub use crate::state::AppState;

/// Company name stamped into every generated document.
pub const COMPANY_NAME: &str = "Craftwell Technologies Pvt. Ltd.";

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

pub async fn run() -> std::io::Result<()> {
    unsafe {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    #[derive(OpenApi)]
    #[openapi(
        paths(
            crate::catalog::handlers::get_all_services,
            crate::catalog::handlers::search_services,
            crate::catalog::handlers::get_service_by_id,
            crate::catalog::handlers::get_sub_domain,
            crate::proposal::handlers::compose_proposal,
            crate::proposal::handlers::preview_proposal,
            crate::export::handlers::export_pdf,
            crate::share::handlers::share_email,
            crate::session::handlers::put_form,
            crate::session::handlers::get_form,
            crate::session::handlers::put_draft,
            crate::session::handlers::get_draft,
            crate::editor::handlers::list_actions
        ),
        components(
            schemas(
                catalog::models::ServiceDefinition,
                catalog::models::SubDomain,
                catalog::models::TechStack,
                catalog::models::CaseStudy,
                catalog::models::Faq,
                proposal::models::ProposalFormData,
                proposal::models::MilestoneRow,
                proposal::models::TemplatePreset,
                proposal::models::GeneratedProposal,
                proposal::handlers::ComposeProposalRequest,
                proposal::handlers::PreviewRequest,
                export::handlers::ExportPdfRequest,
                share::handlers::EmailShareRequest,
                share::handlers::EmailShareResponse,
                session::handlers::DraftPayload,
                editor::actions::ActionDescriptor,
                editor::actions::ToolbarAction,
                editor::actions::Alignment,
                ErrorResponse,
            )
        ),
        tags(
            (name = "Service Catalog", description = "Service offering lookup and search endpoints."),
            (name = "Proposal Service", description = "Proposal composition and preview endpoints."),
            (name = "Export Service", description = "PDF export endpoints."),
            (name = "Share Service", description = "Email share endpoints."),
            (name = "Session Service", description = "Form-to-editor handoff endpoints."),
            (name = "Editor Service", description = "Toolbar action metadata endpoints.")
        ),
        servers(
            (url = "http://127.0.0.1:8080", description = "Localhost Staging server")
        )
    )]
    struct ApiDoc;

    dotenvy::dotenv().ok(); // Load .env file
    let server_config = crate::config::ServerConfig::from_env();
    let app_state = match AppState::from_config(&server_config) {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            log::error!("Failed to load the service catalog. Please check SERVICE_CATALOG_PATH in .env or the bundled static/services.json. Error: {}", e);
            std::process::exit(1);
        }
    };

    let prometheus = PrometheusMetricsBuilder::new("proposal_desk_server")
        .endpoint("/metrics")
        .build()
        .expect("Failed to create Prometheus metrics middleware");
    crate::metrics::register_with(&prometheus.registry);

    let bind_target = (server_config.host.clone(), server_config.port);
    log::info!(
        "Starting server at http://{}:{}",
        server_config.host,
        server_config.port
    );

    HttpServer::new(move || {
        let app_state = app_state.clone();
        let prometheus = prometheus.clone();
        let cors = Cors::default()
            .allowed_origin("http://localhost:5173")
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:8080")
            .allowed_origin("http://127.0.0.1:8080")
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                header::AUTHORIZATION,
                header::ACCEPT,
                header::CONTENT_TYPE,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus)
            .wrap(cors)
            .app_data(app_state)
            .service(
                web::scope("/api")
                    .service(
                        web::resource("/services")
                            .route(web::get().to(catalog::handlers::get_all_services)),
                    )
                    .service(
                        web::resource("/services/search")
                            .route(web::get().to(catalog::handlers::search_services)),
                    )
                    .service(
                        web::resource("/services/{id}")
                            .route(web::get().to(catalog::handlers::get_service_by_id)),
                    )
                    .service(
                        web::resource("/services/{id}/subdomains/{sub_id}")
                            .route(web::get().to(catalog::handlers::get_sub_domain)),
                    )
                    .service(
                        web::resource("/proposals")
                            .route(web::post().to(proposal::handlers::compose_proposal)),
                    )
                    .service(
                        web::resource("/proposals/preview")
                            .route(web::post().to(proposal::handlers::preview_proposal)),
                    )
                    .service(
                        web::resource("/exports/pdf")
                            .route(web::post().to(export::handlers::export_pdf)),
                    )
                    .service(
                        web::resource("/share/email")
                            .route(web::post().to(share::handlers::share_email)),
                    )
                    .service(
                        web::resource("/sessions/{session_id}/form")
                            .route(web::put().to(session::handlers::put_form))
                            .route(web::get().to(session::handlers::get_form)),
                    )
                    .service(
                        web::resource("/sessions/{session_id}/draft")
                            .route(web::put().to(session::handlers::put_draft))
                            .route(web::get().to(session::handlers::get_draft)),
                    )
                    .service(
                        web::resource("/editor/actions")
                            .route(web::get().to(editor::handlers::list_actions)),
                    ),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .backlog(8192)
    .max_connections(25000)
    .keep_alive(actix_web::http::KeepAlive::Os)
    .bind(bind_target)?
    .run()
    .await
}
