use faucets_core::catalog::Catalog;
use faucets_core::filter::{FilterSelection, TypeFilter, WalletConnection};

/// Filter flags shared by every command that narrows the catalog.
#[derive(Debug, clap::Args, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive text matched against name, chain, testnet, asset and notes
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Chain to include (repeatable)
    #[arg(long = "chain", value_name = "CHAIN")]
    pub chains: Vec<String>,

    /// Asset symbol to include (repeatable)
    #[arg(long = "asset", value_name = "ASSET")]
    pub assets: Vec<String>,

    /// Faucet type: official, community, third-party or wallet (repeatable)
    #[arg(long = "type", value_name = "TYPE")]
    pub types: Vec<TypeFilter>,

    /// Drip amount to include, only applies together with --asset (repeatable)
    #[arg(long = "amount", value_name = "AMOUNT")]
    pub amounts: Vec<String>,

    /// Wallet connection: address-only or wallet-required (repeatable)
    #[arg(long = "wallet", value_name = "CLASS")]
    pub wallet: Vec<WalletConnection>,
}

impl FilterArgs {
    /// Build the selection, dropping amounts the chosen assets do not offer.
    pub fn selection(&self, catalog: &Catalog) -> FilterSelection {
        let mut selection = FilterSelection {
            search: self.search.clone(),
            chains: self.chains.iter().cloned().collect(),
            assets: self.assets.iter().cloned().collect(),
            types: self.types.iter().copied().collect(),
            amounts: self.amounts.iter().cloned().collect(),
            wallet: self.wallet.iter().copied().collect(),
        };

        let requested = selection.amounts.len();
        selection.prune_amounts(catalog);
        if selection.amounts.len() < requested {
            log::warn!(
                "Ignoring {} amount filter(s) not offered by the selected assets",
                requested - selection.amounts.len()
            );
        }

        selection
    }
}
