//! MCP Tools module - defines tools exposed via JSON-RPC.
//!
//! Each tool file provides its descriptor (name, description, input schema)
//! and argument types; the registry parses, validates and executes.

mod akta;
mod nominal;
pub mod registry;
mod tanggal;
mod terbilang;

pub use registry::ToolRegistry;
