use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpRequest, HttpResponse, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod akta;
pub mod api;
pub mod config;
pub mod mcp;
pub mod terbilang;

pub use crate::config::AppConfig;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
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

    pub fn unprocessable(message: &str) -> Self {
        Self::new("UnprocessableEntity", message)
    }
}

/// Fallback for unknown routes.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::not_found(&format!(
        "Route {} {} tidak ditemukan",
        req.method(),
        req.path()
    )))
}

/// Shared state handed to every worker.
pub fn mcp_state(config: &AppConfig) -> web::Data<Arc<mcp::McpState>> {
    let registry = mcp::tools::ToolRegistry::new(config.angka_policy);
    web::Data::new(Arc::new(mcp::McpState::new(mcp::McpService::new(registry))))
}

/// Register every route of the service (REST, MCP, Swagger UI).
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(api::config)
        .configure(mcp::config)
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}")
                .url("/api-doc/openapi.json", api::ApiDoc::openapi()),
        );
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok(); // Load .env file
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration, check the AKTA_* variables in .env: {}", e);
            return Err(e.into());
        }
    };

    let prometheus = PrometheusMetricsBuilder::new("akta_ajb_server")
        .endpoint("/metrics")
        .build()
        .map_err(|e| anyhow::anyhow!("failed to create Prometheus metrics middleware: {e}"))?;

    let app_config = web::Data::new(config.clone());
    let mcp_state = mcp_state(&config);
    let bind_addr = (config.host.clone(), config.port);

    log::info!(
        "Starting server at http://{}:{} (angka policy: {:?})",
        config.host,
        config.port,
        config.angka_policy
    );

    HttpServer::new(move || {
        let cors = config
            .allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus.clone())
            .wrap(cors)
            .app_data(app_config.clone())
            .app_data(mcp_state.clone())
            .configure(configure)
            .default_service(web::to(not_found))
    })
    .bind(bind_addr)?
    .run()
    .await?;

    Ok(())
}
