mod directory;

use faucets_core::catalog::Catalog;
use serde::{Deserialize, Serialize};

// Re-export types needed by tool handlers
pub use super::{JsonRpcError, Tool};

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

/// Wrap a serializable payload as a single pretty-printed text block.
pub fn text_result<T: Serialize>(data: &T) -> Result<serde_json::Value, JsonRpcError> {
    let json_string = serde_json::to_string_pretty(data).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Serialization error: {e}"),
        data: None,
    })?;

    let result = CallToolResult {
        content: vec![Content::Text { text: json_string }],
        is_error: None,
    };

    serde_json::to_value(result).map_err(JsonRpcError::internal)
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
        },
        server_info: ServerInfo {
            name: "faucets".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    serde_json::to_value(result).map_err(JsonRpcError::internal)
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let string_list = |description: &str| {
        serde_json::json!({
            "type": "array",
            "items": { "type": "string" },
            "description": description
        })
    };

    let tools = vec![
        Tool {
            name: "faucets_search".to_string(),
            description: "Search the testnet faucet directory. Filters combine with AND across categories and OR within a category; empty categories match everything. Amount filters only apply together with asset filters. Returns the matching faucets with chain, testnet, asset, amount, type, wallet requirement and URL.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "search": {
                        "type": "string",
                        "description": "Case-insensitive text matched against name, chain, testnet, asset and notes"
                    },
                    "chains": string_list("Chain names to include (e.g. 'Ethereum', 'Base')"),
                    "assets": string_list("Asset symbols to include (e.g. 'ETH', 'USDC')"),
                    "types": {
                        "type": "array",
                        "items": {
                            "type": "string",
                            "enum": ["official", "community", "third-party", "wallet"]
                        },
                        "description": "Faucet types to include. 'wallet' matches faucets that require a wallet connection"
                    },
                    "amounts": string_list("Drip amount labels to include, as returned by faucets_options"),
                    "wallet": {
                        "type": "array",
                        "items": {
                            "type": "string",
                            "enum": ["address-only", "wallet-required"]
                        },
                        "description": "Wallet connection classes to include"
                    },
                    "sort": {
                        "type": "string",
                        "description": "Column to sort by (default: curated order)",
                        "enum": ["faucet", "chain", "testnet", "asset"]
                    },
                    "order": {
                        "type": "string",
                        "description": "Sort direction (default: asc)",
                        "enum": ["asc", "desc"]
                    },
                    "limit": {
                        "type": "number",
                        "description": "Maximum number of faucets to return (default: all)"
                    }
                },
                "required": []
            }),
        },
        Tool {
            name: "faucets_options".to_string(),
            description: "List the values accepted by each faucets_search filter: chains, assets, types, wallet classes, and the drip amounts offered for the given assets.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "assets": string_list("Assets whose drip amounts should be listed")
                },
                "required": []
            }),
        },
        Tool {
            name: "faucets_logos".to_string(),
            description: "Return the ordered logo URL candidates for a chain name or asset symbol. Clients should try them in order and hide the image when all fail.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "kind": {
                        "type": "string",
                        "enum": ["chain", "asset"]
                    },
                    "key": {
                        "type": "string",
                        "description": "Chain name or asset symbol"
                    }
                },
                "required": ["kind", "key"]
            }),
        },
    ];

    let result = ToolsList { tools };

    serde_json::to_value(result).map_err(JsonRpcError::internal)
}

pub fn handle_tools_call(
    params: Option<serde_json::Value>,
    catalog: &Catalog,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid params: {e}")))?;

    match params.name.as_str() {
        "faucets_search" => directory::handle_search(params.arguments, catalog, global),
        "faucets_options" => directory::handle_options(params.arguments, catalog, global),
        "faucets_logos" => directory::handle_logos(params.arguments, global),
        _ => Err(JsonRpcError::invalid_params(format!(
            "Unknown tool: {}",
            params.name
        ))),
    }
}
