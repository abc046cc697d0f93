//! Faucet records and the immutable catalog that holds them.
//!
//! The catalog is fixture data: it is parsed once from JSON and never
//! mutated afterwards. Lookups that the filter bar needs (distinct chains,
//! assets and the amounts available for an asset selection) are derived
//! from it on demand.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

/// Catalog bundled with the binary.
const BUILTIN_CATALOG: &str = include_str!("../data/faucets.json");

/// Who operates a faucet
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FaucetType {
    Official,
    Community,
    ThirdParty,
}

impl FaucetType {
    /// All faucet types, in the order the filter bar lists them.
    pub const ALL: [FaucetType; 3] = [
        FaucetType::Official,
        FaucetType::Community,
        FaucetType::ThirdParty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FaucetType::Official => "official",
            FaucetType::Community => "community",
            FaucetType::ThirdParty => "third-party",
        }
    }

    /// Capitalized label used in tables ("Official", "Third-party").
    pub fn label(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for FaucetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FaucetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "official" => Ok(FaucetType::Official),
            "community" => Ok(FaucetType::Community),
            "third-party" => Ok(FaucetType::ThirdParty),
            other => Err(format!(
                "Invalid faucet type: {other}. Valid types: official, community, third-party"
            )),
        }
    }
}

/// A single faucet entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faucet {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub chain: String,
    #[serde(default)]
    pub testnet: String,
    #[serde(default)]
    pub asset: String,
    #[serde(default, deserialize_with = "non_empty_text")]
    pub amount: Option<String>,
    #[serde(rename = "type")]
    pub faucet_type: FaucetType,
    #[serde(default)]
    pub wallet_connection_required: bool,
    pub url: String,
    #[serde(default, deserialize_with = "non_empty_text")]
    pub notes: Option<String>,
}

/// Treats `null`, a missing key and `""` alike.
fn non_empty_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_empty()))
}

/// Error type for catalog loading
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate faucet id {0} in catalog")]
    DuplicateId(u32),
}

/// The read-only list of faucets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    faucets: Vec<Faucet>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn from_faucets(faucets: Vec<Faucet>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(faucets.len());
        for faucet in &faucets {
            if !seen.insert(faucet.id) {
                return Err(CatalogError::DuplicateId(faucet.id));
            }
        }

        Ok(Self { faucets })
    }

    /// Parse a JSON array of faucet records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let faucets: Vec<Faucet> = serde_json::from_str(json)?;
        Self::from_faucets(faucets)
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn faucets(&self) -> &[Faucet] {
        &self.faucets
    }

    pub fn len(&self) -> usize {
        self.faucets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faucets.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Faucet> {
        self.faucets.iter().find(|f| f.id == id)
    }

    /// Distinct chain names, sorted.
    pub fn chains(&self) -> Vec<String> {
        distinct(self.faucets.iter().map(|f| f.chain.as_str()))
    }

    /// Distinct asset symbols, sorted.
    pub fn assets(&self) -> Vec<String> {
        distinct(self.faucets.iter().map(|f| f.asset.as_str()))
    }

    /// Amount labels offered by faucets of the selected assets.
    ///
    /// Returns an empty list when no asset is selected, which hides the
    /// amount filter entirely.
    pub fn available_amounts(&self, assets: &BTreeSet<String>) -> Vec<String> {
        if assets.is_empty() {
            return Vec::new();
        }

        distinct(
            self.faucets
                .iter()
                .filter(|f| assets.contains(&f.asset))
                .filter_map(|f| f.amount.as_deref()),
        )
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn faucet(id: u32, name: &str, chain: &str, testnet: &str, asset: &str) -> Faucet {
        Faucet {
            id,
            name: name.to_string(),
            chain: chain.to_string(),
            testnet: testnet.to_string(),
            asset: asset.to_string(),
            amount: None,
            faucet_type: FaucetType::Official,
            wallet_connection_required: false,
            url: format!("https://faucet.example.com/{id}"),
            notes: None,
        }
    }
}
