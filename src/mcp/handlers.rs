//! MCP Stateless HTTP Handlers for Actix-Web.
//!
//! Each POST carries one JSON-RPC message; no session is kept between requests.

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::mcp::rpc::{OutboundResponse, RpcRequest};
use crate::mcp::service::McpService;

/// MCP State for Actix-Web
pub struct McpState {
    pub service: McpService,
}

impl McpState {
    pub fn new(service: McpService) -> Self {
        Self { service }
    }
}

/// RPC handler - POST /mcp
pub async fn rpc_handler(state: web::Data<Arc<McpState>>, body: web::Bytes) -> impl Responder {
    let request: RpcRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            log::warn!("unparseable MCP message: {}", err);
            return HttpResponse::Ok()
                .content_type("application/json")
                .json(OutboundResponse::parse_error(format!("JSON tidak valid: {err}")));
        }
    };

    log::info!("Received MCP request: {}", request.method);

    if let Some(response) = state.service.handle_request(request) {
        return HttpResponse::Ok()
            .content_type("application/json")
            .json(response);
    }

    // Notifications return 202 Accepted
    HttpResponse::Accepted().finish()
}

/// Configure MCP routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/mcp").route(web::post().to(rpc_handler)));
}
