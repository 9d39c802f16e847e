//! Error handling utilities for MCP server

use atelier_core::StudioError;
use rmcp::ErrorData;

/// Helper to convert studio errors to MCP errors
pub fn to_mcp_error(message: &str, error: &StudioError) -> ErrorData {
    ErrorData::internal_error(format!("{message}: {error}"), None)
}
