//! MCP (Model Context Protocol) Module
//!
//! Exposes the terbilang and AJB preparation operations as JSON-RPC 2.0
//! tools over HTTP, so an assistant that already reads the documents can
//! fill the deed numbers itself.

pub mod content;
pub mod handlers;
pub mod rpc;
pub mod service;
pub mod tools;

pub use handlers::{config, McpState};
pub use service::McpService;
