use crate::prelude::eprintln;
use faucets_core::catalog::Catalog;
use faucets_core::filter::{FilterSelection, TypeFilter, WalletConnection};
use serde::Deserialize;
use std::collections::BTreeSet;

use super::{text_result, JsonRpcError};

fn parse_args<T: for<'de> Deserialize<'de>>(
    arguments: Option<serde_json::Value>,
) -> Result<T, JsonRpcError> {
    let arguments = match arguments {
        None | Some(serde_json::Value::Null) => serde_json::json!({}),
        Some(value) => value,
    };

    serde_json::from_value(arguments)
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid arguments: {e}")))
}

pub fn handle_search(
    arguments: Option<serde_json::Value>,
    catalog: &Catalog,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct SearchArgs {
        #[serde(default)]
        search: String,
        #[serde(default)]
        chains: BTreeSet<String>,
        #[serde(default)]
        assets: BTreeSet<String>,
        #[serde(default)]
        types: BTreeSet<TypeFilter>,
        #[serde(default)]
        amounts: BTreeSet<String>,
        #[serde(default)]
        wallet: BTreeSet<WalletConnection>,
        sort: Option<String>,
        order: Option<String>,
        limit: Option<usize>,
    }

    let args: SearchArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!(
            "Calling faucets_search: search={:?}, sort={:?}, order={:?}, limit={:?}",
            args.search, args.sort, args.order, args.limit
        );
    }

    let mut selection = FilterSelection {
        search: args.search,
        chains: args.chains,
        assets: args.assets,
        types: args.types,
        amounts: args.amounts,
        wallet: args.wallet,
    };
    selection.prune_amounts(catalog);

    let sort = crate::list::sort_config(args.sort.as_deref(), args.order.as_deref());
    let mut output = crate::list::list_data(catalog, &selection, sort);

    if let Some(limit) = args.limit {
        output.faucets.truncate(limit);
    }

    text_result(&output)
}

pub fn handle_options(
    arguments: Option<serde_json::Value>,
    catalog: &Catalog,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct OptionsArgs {
        #[serde(default)]
        assets: BTreeSet<String>,
    }

    let args: OptionsArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling faucets_options: assets={:?}", args.assets);
    }

    text_result(&crate::options::options_data(catalog, &args.assets))
}

pub fn handle_logos(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct LogosArgs {
        kind: String,
        key: String,
    }

    let args: LogosArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling faucets_logos: kind={}, key={}", args.kind, args.key);
    }

    let kind = crate::logos::parse_kind(&args.kind).map_err(JsonRpcError::invalid_params)?;

    text_result(&crate::logos::logos_data(kind, &args.key, 0))
}
