//! REST endpoints for the terbilang core and AJB context preparation.

pub mod handlers;
pub mod models;

use actix_web::{error, web, HttpResponse};
use utoipa::OpenApi;

use crate::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::get_terbilang,
        handlers::format_nominal,
        handlers::format_luas_tanah,
        handlers::format_tanggal,
        handlers::prepare_akta_context,
        handlers::health,
    ),
    components(
        schemas(
            models::TerbilangResponse,
            models::NominalRequest,
            models::LuasRequest,
            models::TanggalRequest,
            models::TanggalResponse,
            models::HealthResponse,
            crate::terbilang::FormattedAmount,
            crate::terbilang::DateInfo,
            crate::akta::AktaRequest,
            crate::akta::AktaContext,
            crate::akta::ExtractedFields,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Terbilang", description = "Indonesian number and date wording."),
        (name = "Akta", description = "AJB template context preparation."),
        (name = "Health", description = "Liveness probe.")
    )
)]
pub struct ApiDoc;

/// Malformed JSON bodies get the same error shape as every other failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        log::warn!("rejected request body: {}", message);
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ErrorResponse::bad_request(&message)),
        )
        .into()
    })
}

/// Register REST routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::scope("/api")
                .service(
                    web::resource("/terbilang/{angka}")
                        .route(web::get().to(handlers::get_terbilang)),
                )
                .service(web::resource("/nominal").route(web::post().to(handlers::format_nominal)))
                .service(web::resource("/luas").route(web::post().to(handlers::format_luas_tanah)))
                .service(web::resource("/tanggal").route(web::post().to(handlers::format_tanggal)))
                .service(
                    web::resource("/akta/konteks")
                        .route(web::post().to(handlers::prepare_akta_context)),
                ),
        )
        .service(web::resource("/health").route(web::get().to(handlers::health)));
}
