//! Table ordering.
//!
//! Only the faucet, chain, testnet and asset columns are sortable. The
//! default order ranks assets by market cap and breaks ties on chain,
//! testnet, faucet name and asset symbol. Keyed orders compare one column
//! first and fall back to that same sequence, always ascending.

use crate::catalog::Faucet;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Market cap rank (lower rank = bigger market cap). Assets missing from
/// this table sort after every ranked asset.
pub const ASSET_MARKETCAP_RANK: &[(&str, u32)] = &[
    ("ETH", 1),
    ("USDC", 2),
    ("USDT", 3),
    ("SOL", 4),
    ("BNB", 5),
    ("XRP", 6),
    ("MATIC", 7),
    ("AVAX", 8),
    ("LINK", 9),
    ("NEAR", 10),
    ("APT", 11),
    ("SUI", 12),
    ("ALGO", 13),
    ("ATOM", 14),
    ("FTM", 15),
    ("MNT", 16),
    ("TRX", 17),
    ("WND", 18),
    ("ROC", 19),
    ("INJ", 20),
    ("CELO", 21),
    ("EIGEN", 22),
    ("PYUSD", 23),
];

/// Sortable columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Faucet,
    Chain,
    Testnet,
    Asset,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Faucet,
        SortKey::Chain,
        SortKey::Testnet,
        SortKey::Asset,
    ];

    /// Parse a column name. Anything that is not sortable yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "faucet" => Some(SortKey::Faucet),
            "chain" => Some(SortKey::Chain),
            "testnet" => Some(SortKey::Testnet),
            "asset" => Some(SortKey::Asset),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Faucet => "faucet",
            SortKey::Chain => "chain",
            SortKey::Testnet => "testnet",
            SortKey::Asset => "asset",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction, or the bespoke default order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Default,
    Asc,
    Desc,
}

impl SortMode {
    /// Parse a mode name. Unknown values mean `Default`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "asc" => SortMode::Asc,
            "desc" => SortMode::Desc,
            _ => SortMode::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::Asc => "asc",
            SortMode::Desc => "desc",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active sort column and mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: Option<SortKey>,
    pub mode: SortMode,
}

impl SortConfig {
    pub fn new(key: Option<SortKey>, mode: SortMode) -> Self {
        Self { key, mode }
    }

    /// Next configuration after the user selects `key`.
    ///
    /// A new column starts ascending; selecting the same column again goes
    /// to descending and then back to the default order.
    pub fn cycle(self, key: SortKey) -> Self {
        if self.key != Some(key) {
            return Self::new(Some(key), SortMode::Asc);
        }

        match self.mode {
            SortMode::Asc => Self::new(Some(key), SortMode::Desc),
            _ => Self::default(),
        }
    }

    pub fn comparator(&self) -> Comparator {
        make_comparator(self.key, self.mode)
    }
}

/// Market cap rank of an asset symbol, `None` when unranked.
pub fn asset_rank(asset: &str) -> Option<u32> {
    let key = asset.trim().to_uppercase();
    ASSET_MARKETCAP_RANK
        .iter()
        .find(|(symbol, _)| *symbol == key)
        .map(|(_, rank)| *rank)
}

fn compare_rank(a: &str, b: &str) -> Ordering {
    let rank = |asset: &str| asset_rank(asset).unwrap_or(u32::MAX);
    rank(a).cmp(&rank(b))
}

/// Accent- and case-folded form of a string used as the primary collation key.
fn collation_key(value: &str) -> String {
    value
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Case-insensitive, accent-aware string comparison where empty (or blank)
/// values sort after every non-empty value.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    let a = a.trim();
    let b = b.trim();

    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => collation_key(a)
            .cmp(&collation_key(b))
            .then_with(|| a.to_lowercase().cmp(&b.to_lowercase())),
    }
}

fn field(faucet: &Faucet, key: SortKey) -> &str {
    match key {
        SortKey::Faucet => &faucet.name,
        SortKey::Chain => &faucet.chain,
        SortKey::Testnet => &faucet.testnet,
        SortKey::Asset => &faucet.asset,
    }
}

/// Default sequence (rank, chain, testnet, faucet, asset), skipping the
/// fields of `exclude`. Always ascending.
fn tie_break(a: &Faucet, b: &Faucet, exclude: Option<SortKey>) -> Ordering {
    let skip = |key: SortKey| exclude == Some(key);
    let mut ordering = Ordering::Equal;

    if !skip(SortKey::Asset) {
        ordering = compare_rank(&a.asset, &b.asset);
    }

    for key in [SortKey::Chain, SortKey::Testnet, SortKey::Faucet] {
        if !skip(key) {
            ordering = ordering.then_with(|| compare_text(field(a, key), field(b, key)));
        }
    }

    if !skip(SortKey::Asset) {
        ordering = ordering.then_with(|| compare_text(&a.asset, &b.asset));
    }

    ordering
}

/// A total order over faucets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// Market cap rank, then chain, testnet, faucet and asset.
    Default,
    /// One column first, then the default sequence without that column.
    Keyed { key: SortKey, descending: bool },
}

impl Comparator {
    pub fn compare(&self, a: &Faucet, b: &Faucet) -> Ordering {
        match *self {
            Comparator::Default => tie_break(a, b, None),
            Comparator::Keyed { key, descending } => {
                let (x, y) = (field(a, key).trim(), field(b, key).trim());

                // Empty values stay last in both directions.
                let primary = if x.is_empty() || y.is_empty() {
                    compare_text(x, y)
                } else {
                    let ordering = match key {
                        SortKey::Asset => compare_rank(x, y).then_with(|| compare_text(x, y)),
                        _ => compare_text(x, y),
                    };
                    if descending {
                        ordering.reverse()
                    } else {
                        ordering
                    }
                };

                primary.then_with(|| tie_break(a, b, Some(key)))
            }
        }
    }
}

/// Comparator for a sort configuration. A missing key or the default mode
/// selects the default order.
pub fn make_comparator(key: Option<SortKey>, mode: SortMode) -> Comparator {
    match (key, mode) {
        (Some(key), SortMode::Asc) => Comparator::Keyed {
            key,
            descending: false,
        },
        (Some(key), SortMode::Desc) => Comparator::Keyed {
            key,
            descending: true,
        },
        _ => Comparator::Default,
    }
}

/// Sort keeping the original relative order of elements the comparison
/// considers equal.
pub fn stable_sort<T, F>(rows: Vec<T>, compare: F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut decorated: Vec<(usize, T)> = rows.into_iter().enumerate().collect();
    decorated.sort_unstable_by(|(ia, a), (ib, b)| compare(a, b).then(ia.cmp(ib)));
    decorated.into_iter().map(|(_, row)| row).collect()
}

/// Order faucets for display.
pub fn sort_faucets<'a>(rows: Vec<&'a Faucet>, config: SortConfig) -> Vec<&'a Faucet> {
    let comparator = config.comparator();
    stable_sort(rows, |a, b| comparator.compare(a, b))
}
