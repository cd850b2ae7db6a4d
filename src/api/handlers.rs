use actix_web::{web, HttpResponse, Responder};

use crate::akta::{build_context, AktaContext, AktaError, AktaRequest};
use crate::api::models::{
    HealthResponse, LuasRequest, NominalRequest, TanggalRequest, TanggalResponse,
    TerbilangResponse,
};
use crate::config::AppConfig;
use crate::terbilang::nominal::try_format_luas;
use crate::terbilang::tanggal::format_tanggal_panjang;
use crate::terbilang::{
    format_amount, format_luas, localize, terbilang, try_format_amount, AngkaPolicy,
    FormattedAmount, TerbilangError,
};
use crate::ErrorResponse;

fn unprocessable(err: &TerbilangError) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ErrorResponse::unprocessable(&err.to_string()))
}

#[utoipa::path(
    context_path = "/api",
    tag = "Terbilang",
    get,
    path = "/terbilang/{angka}",
    params(
        ("angka" = u64, Path, description = "Non-negative integer to spell out")
    ),
    responses(
        (status = 200, description = "Indonesian words for the number", body = TerbilangResponse),
        (status = 422, description = "Number too large (strict policy only)", body = ErrorResponse)
    )
)]
pub async fn get_terbilang(
    path: web::Path<u64>,
    config: web::Data<AppConfig>,
) -> impl Responder {
    let angka = path.into_inner();
    log::info!("terbilang requested for {}", angka);

    match config.angka_policy.resolve(terbilang(angka)) {
        Ok(text) => HttpResponse::Ok().json(TerbilangResponse {
            angka,
            terbilang: text,
        }),
        Err(err) => unprocessable(&err),
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Terbilang",
    post,
    path = "/nominal",
    request_body = NominalRequest,
    responses(
        (status = 200, description = "Dotted digits and title-cased words", body = FormattedAmount),
        (status = 422, description = "Amount too large (strict policy only)", body = ErrorResponse)
    )
)]
pub async fn format_nominal(
    req: web::Json<NominalRequest>,
    config: web::Data<AppConfig>,
) -> impl Responder {
    let result = match config.angka_policy {
        AngkaPolicy::Strict => try_format_amount(req.angka),
        AngkaPolicy::Sentinel => Ok(format_amount(req.angka)),
    };

    match result {
        Ok(formatted) => HttpResponse::Ok().json(formatted),
        Err(err) => unprocessable(&err),
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Terbilang",
    post,
    path = "/luas",
    request_body = LuasRequest,
    responses(
        (status = 200, description = "Area read from free text", body = FormattedAmount),
        (
            status = 422,
            description = "Text has no digits or is too large (strict policy only)",
            body = ErrorResponse
        )
    )
)]
pub async fn format_luas_tanah(
    req: web::Json<LuasRequest>,
    config: web::Data<AppConfig>,
) -> impl Responder {
    let result = match config.angka_policy {
        AngkaPolicy::Strict => try_format_luas(&req.teks),
        AngkaPolicy::Sentinel => Ok(format_luas(&req.teks)),
    };

    match result {
        Ok(formatted) => HttpResponse::Ok().json(formatted),
        Err(err) => unprocessable(&err),
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Terbilang",
    post,
    path = "/tanggal",
    request_body = TanggalRequest,
    responses(
        (status = 200, description = "Localised date parts", body = TanggalResponse),
        (status = 400, description = "Not a calendar date", body = ErrorResponse)
    )
)]
pub async fn format_tanggal(req: web::Json<TanggalRequest>) -> impl Responder {
    let Some(date) = req.to_date() else {
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(&format!(
            "Tanggal {:02}-{:02}-{} tidak valid",
            req.hari, req.bulan, req.tahun
        )));
    };

    let info = localize(date);
    let kalimat_akta = info.kalimat_akta();
    HttpResponse::Ok().json(TanggalResponse {
        info,
        tanggal_panjang: format_tanggal_panjang(date),
        kalimat_akta,
    })
}

#[utoipa::path(
    context_path = "/api",
    tag = "Akta",
    post,
    path = "/akta/konteks",
    request_body = AktaRequest,
    responses(
        (status = 200, description = "Template values and review notes", body = AktaContext),
        (status = 400, description = "Extraction reply could not be parsed", body = ErrorResponse),
        (
            status = 422,
            description = "Amount could not be spelled out (strict policy only)",
            body = ErrorResponse
        )
    )
)]
pub async fn prepare_akta_context(
    req: web::Json<AktaRequest>,
    config: web::Data<AppConfig>,
) -> impl Responder {
    match build_context(&req, config.angka_policy) {
        Ok(context) => HttpResponse::Ok().json(context),
        Err(err @ AktaError::Extraction { .. }) => {
            log::warn!("akta context rejected: {}", err);
            HttpResponse::BadRequest().json(ErrorResponse::bad_request(&err.to_string()))
        }
        Err(err @ AktaError::Angka { .. }) => {
            log::warn!("akta context rejected: {}", err);
            HttpResponse::UnprocessableEntity().json(ErrorResponse::unprocessable(&err.to_string()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
