use crate::filters::FilterArgs;
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use faucets_core::catalog::{Catalog, Faucet, FaucetType};
use faucets_core::filter::{filter_faucets, FilterSelection};
use faucets_core::sort::{sort_faucets, SortConfig, SortKey, SortMode};
use prettytable::{Cell, Row, Table};
use serde::Serialize;

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    #[clap(flatten)]
    pub filters: FilterArgs,

    /// Column to sort by: faucet, chain, testnet or asset
    #[arg(long, env = "FAUCETS_SORT")]
    pub sort: Option<String>,

    /// Sort direction: asc or desc
    #[arg(long, default_value = "asc")]
    pub order: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct ListOutput {
    pub total: usize,
    pub count: usize,
    pub sort: SortConfig,
    pub faucets: Vec<Faucet>,
}

/// Resolve user supplied sort names. Anything unknown means the default order.
pub fn sort_config(sort: Option<&str>, order: Option<&str>) -> SortConfig {
    let Some(name) = sort else {
        return SortConfig::default();
    };

    let Some(key) = SortKey::parse(name) else {
        log::warn!("Unknown sort column {name:?}, using the default order");
        return SortConfig::default();
    };

    match order.map(SortMode::parse).unwrap_or(SortMode::Asc) {
        SortMode::Default => SortConfig::default(),
        mode => SortConfig::new(Some(key), mode),
    }
}

/// Filter and order the catalog.
pub fn list_data(catalog: &Catalog, selection: &FilterSelection, sort: SortConfig) -> ListOutput {
    let rows = sort_faucets(filter_faucets(catalog.faucets(), selection), sort);

    ListOutput {
        total: catalog.len(),
        count: rows.len(),
        sort,
        faucets: rows.into_iter().cloned().collect(),
    }
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    let catalog = crate::catalog::load(&global)?;
    let selection = options.filters.selection(&catalog);
    let sort = sort_config(options.sort.as_deref(), Some(&options.order));

    if global.verbose {
        eprintln!("Filters: {}", serde_json::to_string(&selection)?);
        eprintln!("Sort: {} {}", sort.key.map(|k| k.as_str()).unwrap_or("default"), sort.mode);
    }

    let output = list_data(&catalog, &selection, sort);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("Showing {} of {} faucets", output.count, output.total)
            .bright_cyan()
            .bold()
    );

    if output.faucets.is_empty() {
        println!("\n{}", "No faucets match the current filters.".yellow());
        return Ok(());
    }

    println!();
    faucet_table(&output.faucets).printstd();

    Ok(())
}

pub fn type_cell(faucet_type: FaucetType) -> Cell {
    let style = match faucet_type {
        FaucetType::Official => "Fg",
        FaucetType::Community => "Fy",
        FaucetType::ThirdParty => "Fc",
    };
    Cell::new(&faucet_type.label()).style_spec(style)
}

pub fn wallet_cell(faucet: &Faucet) -> Cell {
    if faucet.wallet_connection_required {
        Cell::new("wallet").style_spec("Fr")
    } else {
        Cell::new("address")
    }
}

pub fn faucet_table(faucets: &[Faucet]) -> Table {
    let mut table = new_table();
    table.set_titles(Row::new(
        ["ID", "Faucet", "Chain", "Testnet", "Asset", "Amount", "Type", "Connect"]
            .iter()
            .map(|title| Cell::new(title).style_spec("b"))
            .collect(),
    ));

    for faucet in faucets {
        table.add_row(Row::new(vec![
            Cell::new(&faucet.id.to_string()),
            Cell::new(&faucet.name),
            Cell::new(&faucet.chain),
            Cell::new(&faucet.testnet),
            Cell::new(&faucet.asset),
            Cell::new(faucet.amount.as_deref().unwrap_or("-")),
            type_cell(faucet.faucet_type),
            wallet_cell(faucet),
        ]));
    }

    table
}
