use crate::prelude::{println, *};
use colored::Colorize;
use faucets_core::analytics::AnalyticsEvent;
use faucets_core::catalog::{Catalog, Faucet};
use faucets_core::logos::{asset_logo, chain_logo};

#[derive(Debug, clap::Args, Clone)]
pub struct ShowOptions {
    /// Faucet id
    pub id: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Look a faucet up by id.
pub fn show_data(catalog: &Catalog, id: u32) -> Result<&Faucet> {
    catalog.get(id).ok_or_else(|| Error::FaucetNotFound(id).into())
}

pub async fn run(options: ShowOptions, global: crate::Global) -> Result<()> {
    let catalog = crate::catalog::load(&global)?;
    let faucet = show_data(&catalog, options.id)?;

    crate::analytics::emit(&AnalyticsEvent::faucet_opened(faucet));

    if options.json {
        println!("{}", serde_json::to_string_pretty(faucet)?);
        return Ok(());
    }

    println!("{}", faucet.name.bright_cyan().bold());
    println!("{}\n", faucet.url.underline());

    let mut table = new_table();
    table.add_row(prettytable::row!["Chain", faucet.chain]);
    table.add_row(prettytable::row!["Testnet", faucet.testnet]);
    table.add_row(prettytable::row!["Asset", faucet.asset]);

    if let Some(amount) = &faucet.amount {
        table.add_row(prettytable::row!["Amount", amount]);
    }

    table.add_row(prettytable::row!["Type", faucet.faucet_type.label()]);
    table.add_row(prettytable::row![
        "Wallet connection",
        if faucet.wallet_connection_required {
            "required"
        } else {
            "not required"
        }
    ]);

    if let Some(logo) = chain_logo(&faucet.chain, 0) {
        table.add_row(prettytable::row!["Chain logo", logo]);
    }
    if let Some(logo) = asset_logo(&faucet.asset, 0) {
        table.add_row(prettytable::row!["Asset logo", logo]);
    }

    table.printstd();

    if let Some(notes) = &faucet.notes {
        println!("\n{}", notes.dimmed());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_data_found() {
        let catalog = Catalog::builtin().unwrap();
        let first = catalog.faucets()[0].id;

        assert_eq!(show_data(&catalog, first).unwrap().id, first);
    }

    #[test]
    fn test_show_data_missing() {
        let catalog = Catalog::builtin().unwrap();

        let err = show_data(&catalog, u32::MAX).unwrap_err();

        assert_eq!(err.to_string(), format!("Faucet {} not found", u32::MAX));
    }
}
