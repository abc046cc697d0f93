//! Filter predicate for the faucet table.
//!
//! Criteria combine with AND across categories and OR within a category. An
//! empty category never filters anything out.

use crate::catalog::{Catalog, Faucet, FaucetType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Values of the "Type" filter.
///
/// `Wallet` is a pseudo-type: it matches faucets that require a wallet
/// connection instead of matching the faucet's `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeFilter {
    Official,
    Community,
    ThirdParty,
    Wallet,
}

impl TypeFilter {
    pub fn faucet_type(&self) -> Option<FaucetType> {
        match self {
            TypeFilter::Official => Some(FaucetType::Official),
            TypeFilter::Community => Some(FaucetType::Community),
            TypeFilter::ThirdParty => Some(FaucetType::ThirdParty),
            TypeFilter::Wallet => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFilter::Wallet => "wallet",
            other => other.faucet_type().map(|t| t.as_str()).unwrap_or_default(),
        }
    }
}

impl From<FaucetType> for TypeFilter {
    fn from(value: FaucetType) -> Self {
        match value {
            FaucetType::Official => TypeFilter::Official,
            FaucetType::Community => TypeFilter::Community,
            FaucetType::ThirdParty => TypeFilter::ThirdParty,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("wallet") {
            return Ok(TypeFilter::Wallet);
        }

        s.parse::<FaucetType>()
            .map(TypeFilter::from)
            .map_err(|_| {
                format!(
                    "Invalid type filter: {s}. Valid values: official, community, third-party, wallet"
                )
            })
    }
}

/// Safety class of a faucet: paste-an-address vs. connect-a-wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WalletConnection {
    AddressOnly,
    WalletRequired,
}

impl WalletConnection {
    pub fn of(faucet: &Faucet) -> Self {
        if faucet.wallet_connection_required {
            WalletConnection::WalletRequired
        } else {
            WalletConnection::AddressOnly
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WalletConnection::AddressOnly => "address-only",
            WalletConnection::WalletRequired => "wallet-required",
        }
    }
}

impl fmt::Display for WalletConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WalletConnection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "address-only" => Ok(WalletConnection::AddressOnly),
            "wallet-required" => Ok(WalletConnection::WalletRequired),
            other => Err(format!(
                "Invalid wallet connection filter: {other}. Valid values: address-only, wallet-required"
            )),
        }
    }
}

/// Current filter selections. Every field is empty by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub chains: BTreeSet<String>,
    #[serde(default)]
    pub assets: BTreeSet<String>,
    #[serde(default)]
    pub types: BTreeSet<TypeFilter>,
    #[serde(default)]
    pub amounts: BTreeSet<String>,
    #[serde(default)]
    pub wallet: BTreeSet<WalletConnection>,
}

impl FilterSelection {
    /// True when any criterion would narrow the list.
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty()
            || !self.chains.is_empty()
            || !self.assets.is_empty()
            || !self.types.is_empty()
            || !self.amounts.is_empty()
            || !self.wallet.is_empty()
    }

    /// Drop amount selections that the current asset selection no longer
    /// offers. Clears them entirely when no asset is selected.
    pub fn prune_amounts(&mut self, catalog: &Catalog) {
        if self.amounts.is_empty() {
            return;
        }

        if self.assets.is_empty() {
            self.amounts.clear();
            return;
        }

        let available = catalog.available_amounts(&self.assets);
        self.amounts.retain(|amount| available.contains(amount));
    }
}

/// Case-insensitive substring match against name, chain, testnet, asset and
/// notes. An empty (or blank) term matches everything.
pub fn matches_search(faucet: &Faucet, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }

    [
        Some(faucet.name.as_str()),
        Some(faucet.chain.as_str()),
        Some(faucet.testnet.as_str()),
        Some(faucet.asset.as_str()),
        faucet.notes.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&term))
}

fn matches_category(value: &str, selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || selected.contains(value)
}

/// Type/auth check: the `wallet` pseudo-value and the wallet-connection
/// classes are checked against `wallet_connection_required`, the remaining
/// type values against `type`. All parts must pass.
pub fn matches_type(
    faucet: &Faucet,
    types: &BTreeSet<TypeFilter>,
    wallet: &BTreeSet<WalletConnection>,
) -> bool {
    let wants_wallet = types.contains(&TypeFilter::Wallet);
    let matches_wallet = !wants_wallet || faucet.wallet_connection_required;

    let mut kinds = types.iter().filter_map(TypeFilter::faucet_type).peekable();
    let matches_kind = kinds.peek().is_none() || kinds.any(|kind| kind == faucet.faucet_type);

    let matches_connection = wallet.is_empty() || wallet.contains(&WalletConnection::of(faucet));

    matches_wallet && matches_kind && matches_connection
}

/// Amount check. Inert while no asset is selected; otherwise the faucet must
/// advertise one of the selected amounts.
pub fn matches_amount(
    faucet: &Faucet,
    assets: &BTreeSet<String>,
    amounts: &BTreeSet<String>,
) -> bool {
    if assets.is_empty() || amounts.is_empty() {
        return true;
    }

    faucet
        .amount
        .as_ref()
        .is_some_and(|amount| amounts.contains(amount))
}

/// Whether a faucet satisfies every active criterion of the selection.
pub fn matches(faucet: &Faucet, selection: &FilterSelection) -> bool {
    matches_search(faucet, &selection.search)
        && matches_category(&faucet.chain, &selection.chains)
        && matches_category(&faucet.asset, &selection.assets)
        && matches_type(faucet, &selection.types, &selection.wallet)
        && matches_amount(faucet, &selection.assets, &selection.amounts)
}

/// Keep the faucets that match, preserving input order.
pub fn filter_faucets<'a>(faucets: &'a [Faucet], selection: &FilterSelection) -> Vec<&'a Faucet> {
    faucets.iter().filter(|f| matches(f, selection)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::faucet;

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn sample() -> Vec<Faucet> {
        let mut alchemy = faucet(1, "Alchemy Faucet", "Ethereum", "Sepolia", "ETH");
        alchemy.amount = Some("0.1 ETH".to_string());
        alchemy.faucet_type = FaucetType::ThirdParty;

        let mut pow = faucet(2, "PoW Faucet", "Ethereum", "Holesky", "ETH");
        pow.faucet_type = FaucetType::Community;
        pow.notes = Some("Mine in the browser".to_string());

        let mut circle = faucet(3, "Circle", "Base", "Sepolia", "USDC");
        circle.amount = Some("10 USDC".to_string());

        let mut solana = faucet(4, "Solana Faucet", "Solana", "Devnet", "SOL");
        solana.wallet_connection_required = true;

        vec![alchemy, pow, circle, solana]
    }

    fn ids(faucets: &[&Faucet]) -> Vec<u32> {
        faucets.iter().map(|f| f.id).collect()
    }

    // ============================================================================
    // Empty selection
    // ============================================================================

    #[test]
    fn test_empty_selection_matches_all() {
        let faucets = sample();
        let selection = FilterSelection::default();

        assert!(faucets.iter().all(|f| matches(f, &selection)));
        assert!(!selection.is_active());
    }

    // ============================================================================
    // Search
    // ============================================================================

    #[test]
    fn test_search_case_insensitive() {
        let faucets = sample();
        let selection = FilterSelection {
            search: "  sepOLIA ".to_string(),
            ..Default::default()
        };

        assert_eq!(ids(&filter_faucets(&faucets, &selection)), vec![1, 3]);
    }

    #[test]
    fn test_search_matches_notes() {
        let faucets = sample();
        assert!(matches_search(&faucets[1], "browser"));
        assert!(!matches_search(&faucets[0], "browser"));
    }

    #[test]
    fn test_search_blank_term() {
        let faucets = sample();
        assert!(matches_search(&faucets[0], "   "));
    }

    #[test]
    fn test_search_matches_asset() {
        let faucets = sample();
        let selection = FilterSelection {
            search: "usdc".to_string(),
            ..Default::default()
        };

        assert_eq!(ids(&filter_faucets(&faucets, &selection)), vec![3]);
    }

    // ============================================================================
    // Categories
    // ============================================================================

    #[test]
    fn test_chain_filter_single() {
        let faucets = sample();
        let selection = FilterSelection {
            chains: set(&["Base"]),
            ..Default::default()
        };

        for f in &faucets {
            assert_eq!(matches(f, &selection), f.chain == "Base");
        }
    }

    #[test]
    fn test_chain_filter_or_within_category() {
        let faucets = sample();
        let selection = FilterSelection {
            chains: set(&["Base", "Solana"]),
            ..Default::default()
        };

        assert_eq!(ids(&filter_faucets(&faucets, &selection)), vec![3, 4]);
    }

    #[test]
    fn test_and_across_categories() {
        let faucets = sample();
        let selection = FilterSelection {
            chains: set(&["Ethereum"]),
            search: "holesky".to_string(),
            ..Default::default()
        };

        assert_eq!(ids(&filter_faucets(&faucets, &selection)), vec![2]);
    }

    #[test]
    fn test_asset_filter() {
        let faucets = sample();
        let selection = FilterSelection {
            assets: set(&["ETH"]),
            ..Default::default()
        };

        assert_eq!(ids(&filter_faucets(&faucets, &selection)), vec![1, 2]);
    }

    // ============================================================================
    // Amount
    // ============================================================================

    #[test]
    fn test_amount_inert_without_assets() {
        let faucets = sample();
        let selection = FilterSelection {
            amounts: set(&["does not exist"]),
            ..Default::default()
        };

        assert!(faucets.iter().all(|f| matches(f, &selection)));
    }

    #[test]
    fn test_amount_requires_present_amount() {
        let faucets = sample();
        let selection = FilterSelection {
            assets: set(&["ETH"]),
            amounts: set(&["0.1 ETH"]),
            ..Default::default()
        };

        assert_eq!(ids(&filter_faucets(&faucets, &selection)), vec![1]);
    }

    #[test]
    fn test_prune_amounts_on_asset_change() {
        let catalog = Catalog::from_faucets(sample()).unwrap();
        let mut selection = FilterSelection {
            assets: set(&["USDC"]),
            amounts: set(&["0.1 ETH", "10 USDC"]),
            ..Default::default()
        };

        selection.prune_amounts(&catalog);
        assert_eq!(selection.amounts, set(&["10 USDC"]));

        selection.assets.clear();
        selection.prune_amounts(&catalog);
        assert!(selection.amounts.is_empty());
    }

    // ============================================================================
    // Type / auth
    // ============================================================================

    #[test]
    fn test_type_filter() {
        let faucets = sample();
        let selection = FilterSelection {
            types: [TypeFilter::Community, TypeFilter::ThirdParty]
                .into_iter()
                .collect(),
            ..Default::default()
        };

        assert_eq!(ids(&filter_faucets(&faucets, &selection)), vec![1, 2]);
    }

    #[test]
    fn test_wallet_pseudo_type_only() {
        let faucets = sample();
        let selection = FilterSelection {
            types: [TypeFilter::Wallet].into_iter().collect(),
            ..Default::default()
        };

        assert_eq!(ids(&filter_faucets(&faucets, &selection)), vec![4]);
    }

    #[test]
    fn test_wallet_and_type_both_required() {
        let faucets = sample();
        let selection = FilterSelection {
            types: [TypeFilter::Wallet, TypeFilter::Community]
                .into_iter()
                .collect(),
            ..Default::default()
        };

        assert!(filter_faucets(&faucets, &selection).is_empty());
    }

    #[test]
    fn test_wallet_connection_classes() {
        let faucets = sample();
        let address_only = FilterSelection {
            wallet: [WalletConnection::AddressOnly].into_iter().collect(),
            ..Default::default()
        };
        let both = FilterSelection {
            wallet: [WalletConnection::AddressOnly, WalletConnection::WalletRequired]
                .into_iter()
                .collect(),
            ..Default::default()
        };

        assert_eq!(ids(&filter_faucets(&faucets, &address_only)), vec![1, 2, 3]);
        assert_eq!(filter_faucets(&faucets, &both).len(), faucets.len());
    }

    #[test]
    fn test_type_filter_from_str() {
        assert_eq!("wallet".parse::<TypeFilter>().unwrap(), TypeFilter::Wallet);
        assert_eq!(
            "third-party".parse::<TypeFilter>().unwrap(),
            TypeFilter::ThirdParty
        );
        assert!("partner".parse::<TypeFilter>().is_err());
    }

    #[test]
    fn test_filter_preserves_order() {
        let mut faucets = sample();
        faucets.reverse();
        let selection = FilterSelection {
            chains: set(&["Ethereum"]),
            ..Default::default()
        };

        assert_eq!(ids(&filter_faucets(&faucets, &selection)), vec![2, 1]);
    }
}
