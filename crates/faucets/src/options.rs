use crate::prelude::{println, *};
use colored::Colorize;
use faucets_core::catalog::Catalog;
use faucets_core::filter::{TypeFilter, WalletConnection};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, clap::Args, Clone)]
pub struct OptionsOptions {
    /// Asset whose drip amounts should be listed (repeatable)
    #[arg(long = "asset", value_name = "ASSET")]
    pub assets: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Values the filter bar offers for the current asset selection
#[derive(Debug, Serialize)]
pub struct FilterOptions {
    pub chains: Vec<String>,
    pub assets: Vec<String>,
    pub types: Vec<TypeFilter>,
    pub wallet: Vec<WalletConnection>,
    pub amounts: Vec<String>,
}

pub fn options_data(catalog: &Catalog, assets: &BTreeSet<String>) -> FilterOptions {
    FilterOptions {
        chains: catalog.chains(),
        assets: catalog.assets(),
        types: vec![
            TypeFilter::Official,
            TypeFilter::Community,
            TypeFilter::ThirdParty,
            TypeFilter::Wallet,
        ],
        wallet: vec![WalletConnection::AddressOnly, WalletConnection::WalletRequired],
        amounts: catalog.available_amounts(assets),
    }
}

pub async fn run(options: OptionsOptions, global: crate::Global) -> Result<()> {
    let catalog = crate::catalog::load(&global)?;
    let assets: BTreeSet<String> = options.assets.into_iter().collect();
    let data = options_data(&catalog, &assets);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    print_group("Chains", &data.chains);
    print_group("Assets", &data.assets);
    print_group("Types", &data.types);
    print_group("Wallet connection", &data.wallet);

    if assets.is_empty() {
        println!("{}", "Amounts: pass --asset to list drip amounts".dimmed());
    } else {
        print_group("Amounts", &data.amounts);
    }

    Ok(())
}

fn print_group<T: ToString>(title: &str, values: &[T]) {
    let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    println!("{} {}", format!("{title}:").bold(), values.join(", "));
}
