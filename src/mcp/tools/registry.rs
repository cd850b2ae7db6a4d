//! Tool registry - central routing for MCP tools.
//!
//! Provides `list_tools()` and `call_tool()` as defined by the MCP protocol.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::akta::{build_context, AktaRequest};
use crate::mcp::content::ToolResult;
use crate::terbilang::nominal::try_format_luas;
use crate::terbilang::tanggal::format_tanggal_panjang;
use crate::terbilang::{
    format_amount, format_luas, localize, terbilang, try_format_amount, AngkaPolicy,
};

use super::akta;
use super::nominal::{self, NominalArgs, NominalInput};
use super::tanggal::{self, TanggalArgs};
use super::terbilang::{self as terbilang_tool, TerbilangArgs};

/// Tool descriptor as returned by `tools/list`.
#[derive(Debug, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Central registry for all MCP tools.
pub struct ToolRegistry {
    policy: AngkaPolicy,
}

impl ToolRegistry {
    pub fn new(policy: AngkaPolicy) -> Self {
        Self { policy }
    }

    /// List all available tools.
    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        vec![
            terbilang_tool::descriptor(),
            tanggal::descriptor(),
            nominal::descriptor(),
            akta::descriptor(),
        ]
    }

    /// Call a tool by name with the given arguments.
    pub fn call_tool(&self, name: &str, arguments: Option<Value>) -> ToolResult {
        match name {
            terbilang_tool::TOOL_NAME => self.call_terbilang(arguments),
            tanggal::TOOL_NAME => self.call_format_tanggal(arguments),
            nominal::TOOL_NAME => self.call_format_nominal(arguments),
            akta::TOOL_NAME => self.call_siapkan_data_akta(arguments),
            _ => ToolResult::error(format!(
                "Tool '{}' tidak tersedia. Tools yang tersedia: {}, {}, {}, {}",
                name,
                terbilang_tool::TOOL_NAME,
                tanggal::TOOL_NAME,
                nominal::TOOL_NAME,
                akta::TOOL_NAME,
            )),
        }
    }

    fn call_terbilang(&self, arguments: Option<Value>) -> ToolResult {
        let args = match parse_arguments::<TerbilangArgs>(arguments) {
            Ok(args) => args,
            Err(err) => return ToolResult::error(err),
        };

        match self.policy.resolve(terbilang(args.angka)) {
            Ok(text) => ToolResult::summary_with_json(
                format!("Terbilang {}: {}", args.angka, display_words(&text)),
                &json!({ "angka": args.angka, "terbilang": text }),
            ),
            Err(err) => ToolResult::error(format!("Gagal mengeja angka: {}", err)),
        }
    }

    fn call_format_tanggal(&self, arguments: Option<Value>) -> ToolResult {
        let args = match parse_arguments::<TanggalArgs>(arguments) {
            Ok(args) => args,
            Err(err) => return ToolResult::error(err),
        };

        let date = match args.validate() {
            Ok(date) => date,
            Err(err) => return ToolResult::error(err),
        };

        let info = localize(date);
        let kalimat = info.kalimat_akta();
        let summary = format!("Pada hari ini, {}", kalimat);
        let payload = json!({
            "weekday_name": info.weekday_name,
            "day_in_words": info.day_in_words,
            "month_name": info.month_name,
            "year_in_words": info.year_in_words,
            "numeric_date_string": info.numeric_date_string,
            "tanggal_panjang": format_tanggal_panjang(date),
            "kalimat_akta": kalimat,
        });

        ToolResult::summary_with_json(summary, &payload)
    }

    fn call_format_nominal(&self, arguments: Option<Value>) -> ToolResult {
        let args = match parse_arguments::<NominalArgs>(arguments) {
            Ok(args) => args,
            Err(err) => return ToolResult::error(err),
        };

        let input = match args.validate() {
            Ok(input) => input,
            Err(err) => return ToolResult::error(err),
        };

        let result = match (input, self.policy) {
            (NominalInput::Angka(angka), AngkaPolicy::Strict) => try_format_amount(angka),
            (NominalInput::Angka(angka), AngkaPolicy::Sentinel) => Ok(format_amount(angka)),
            (NominalInput::Teks(teks), AngkaPolicy::Strict) => try_format_luas(teks),
            (NominalInput::Teks(teks), AngkaPolicy::Sentinel) => Ok(format_luas(teks)),
        };

        match result {
            Ok(formatted) => ToolResult::summary_with_json(
                format!("{} ({})", formatted.digits, formatted.words),
                &json!({ "digits": formatted.digits, "words": formatted.words }),
            ),
            Err(err) => ToolResult::error(format!("Gagal memformat nominal: {}", err)),
        }
    }

    fn call_siapkan_data_akta(&self, arguments: Option<Value>) -> ToolResult {
        let request = match parse_arguments::<AktaRequest>(arguments) {
            Ok(request) => request,
            Err(err) => return ToolResult::error(err),
        };

        let context = match build_context(&request, self.policy) {
            Ok(context) => context,
            Err(err) => return ToolResult::error(format!("Gagal menyiapkan data akta: {}", err)),
        };

        let summary = format!("Data akta siap dirender. {}", context.review.to_mcp_message());

        match serde_json::to_value(&context) {
            Ok(payload) => ToolResult::summary_with_json(summary, &payload),
            Err(err) => ToolResult::error(format!("Gagal menyusun respons: {}", err)),
        }
    }
}

// Zero has no words; show it explicitly in the human summary.
fn display_words(text: &str) -> &str {
    if text.is_empty() {
        "(kosong)"
    } else {
        text
    }
}

fn parse_arguments<T: for<'de> Deserialize<'de>>(arguments: Option<Value>) -> Result<T, String> {
    let value = arguments.unwrap_or(Value::Null);
    serde_json::from_value(value).map_err(|err| format!("Argumen tidak valid: {}", err))
}
