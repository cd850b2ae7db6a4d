#[cfg(test)]
mod error_handling_tests {
    use actix_web::{http::StatusCode, test, web, App};
    use akta_ajb_server::terbilang::TerbilangError;
    use akta_ajb_server::{configure, mcp_state, not_found, AppConfig, ErrorResponse};
    use serde_json::{json, Value};

    macro_rules! init_app {
        () => {{
            let config = AppConfig::default();
            test::init_service(
                App::new()
                    .app_data(web::Data::new(config.clone()))
                    .app_data(mcp_state(&config))
                    .configure(configure)
                    .default_service(web::to(not_found)),
            )
            .await
        }};
    }

    #[::core::prelude::v1::test]
    fn test_error_response_serialization() {
        let bad_request = ErrorResponse::bad_request("Input tidak valid");
        assert_eq!(bad_request.error, "BadRequest");

        let json = serde_json::to_string(&bad_request).unwrap();
        let parsed: ErrorResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.message, "Input tidak valid");
        assert!(!parsed.timestamp.is_empty());

        assert_eq!(ErrorResponse::unprocessable("x").error, "UnprocessableEntity");
        assert_eq!(ErrorResponse::not_found("x").error, "NotFound");
    }

    #[::core::prelude::v1::test]
    fn test_terbilang_error_messages() {
        let too_large = TerbilangError::OutOfRange(1_000_000_000_000);
        assert!(too_large.to_string().contains("999.999.999.999"));
        assert_eq!(too_large.placeholder(), "Angka terlalu besar");

        let malformed = TerbilangError::MalformedInput("abc".to_string());
        assert!(malformed.to_string().contains("'abc'"));
    }

    #[actix_web::test]
    async fn test_unknown_route_is_json_404() {
        let app = init_app!();
        let req = test::TestRequest::get().uri("/api/tidak-ada").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "NotFound");
    }

    #[actix_web::test]
    async fn test_malformed_json_body() {
        let app = init_app!();
        let req = test::TestRequest::post()
            .uri("/api/nominal")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ \"angka\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "BadRequest");
    }

    #[actix_web::test]
    async fn test_negative_amount_is_rejected() {
        let app = init_app!();
        let req = test::TestRequest::post()
            .uri("/api/nominal")
            .set_json(json!({ "angka": -1 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
