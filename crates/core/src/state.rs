//! Directory UI state and its single update entry point.
//!
//! `update` never mutates in place: it takes the current state and an
//! action and returns the next state together with the analytics events
//! the transition produced.

use crate::analytics::{AnalyticsEvent, FilterKind};
use crate::catalog::Catalog;
use crate::filter::{FilterSelection, TypeFilter, WalletConnection};
use crate::sort::{SortConfig, SortKey};
use serde::Serialize;
use std::collections::BTreeSet;

/// Everything the directory view needs besides the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppState {
    pub filters: FilterSelection,
    pub sort: SortConfig,
    pub dark_mode: bool,
    /// Name of the open modal, if any.
    pub modal: Option<String>,
    /// Whether the "copied" indicator is showing.
    pub copied: bool,
    /// Indices of expanded FAQ entries.
    pub open_faqs: BTreeSet<usize>,
}

/// A single value toggled in one of the filter categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Chain(String),
    Asset(String),
    Type(TypeFilter),
    Amount(String),
    Wallet(WalletConnection),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetSearch(String),
    Toggle(FilterValue),
    SetChains(BTreeSet<String>),
    SetAssets(BTreeSet<String>),
    SetTypes(BTreeSet<TypeFilter>),
    SetAmounts(BTreeSet<String>),
    SetWallet(BTreeSet<WalletConnection>),
    /// Clears every filter and the sort order.
    ResetFilters,
    Sort(SortKey),
    ToggleDarkMode,
    OpenModal(String),
    /// Closing a modal also clears the "copied" indicator.
    CloseModal,
    /// Result of a clipboard write; failures are ignored.
    CopyFinished { ok: bool },
    /// The "copied" indicator timed out.
    ClearCopied,
    ToggleFaq { index: usize, question: String },
    OpenFaucet(u32),
    PageVisited { visit_count: u32 },
}

impl AppState {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            ..Default::default()
        }
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

fn changed_event(kind: FilterKind, filters: &FilterSelection) -> AnalyticsEvent {
    match kind {
        FilterKind::Chain => AnalyticsEvent::filter_changed(kind, &filters.chains),
        FilterKind::Asset => AnalyticsEvent::filter_changed(kind, &filters.assets),
        FilterKind::Amount => AnalyticsEvent::filter_changed(kind, &filters.amounts),
        FilterKind::Type => AnalyticsEvent::filter_changed(kind, &filters.types),
        FilterKind::Safety => AnalyticsEvent::filter_changed(kind, &filters.wallet),
    }
}

/// Apply `action` to `state`.
///
/// Any change of the asset or amount selection prunes the amount selection
/// against what `catalog` offers for the selected assets.
pub fn update(
    state: &AppState,
    action: Action,
    catalog: &Catalog,
) -> (AppState, Vec<AnalyticsEvent>) {
    let mut next = state.clone();
    let mut events = Vec::new();

    let changed = match action {
        Action::SetSearch(term) => {
            next.filters.search = term;
            None
        }
        Action::Toggle(value) => Some(match value {
            FilterValue::Chain(chain) => {
                toggle(&mut next.filters.chains, chain);
                FilterKind::Chain
            }
            FilterValue::Asset(asset) => {
                toggle(&mut next.filters.assets, asset);
                FilterKind::Asset
            }
            FilterValue::Type(kind) => {
                toggle(&mut next.filters.types, kind);
                FilterKind::Type
            }
            FilterValue::Amount(amount) => {
                toggle(&mut next.filters.amounts, amount);
                FilterKind::Amount
            }
            FilterValue::Wallet(class) => {
                toggle(&mut next.filters.wallet, class);
                FilterKind::Safety
            }
        }),
        Action::SetChains(chains) => {
            next.filters.chains = chains;
            Some(FilterKind::Chain)
        }
        Action::SetAssets(assets) => {
            next.filters.assets = assets;
            Some(FilterKind::Asset)
        }
        Action::SetTypes(types) => {
            next.filters.types = types;
            Some(FilterKind::Type)
        }
        Action::SetAmounts(amounts) => {
            next.filters.amounts = amounts;
            Some(FilterKind::Amount)
        }
        Action::SetWallet(wallet) => {
            next.filters.wallet = wallet;
            Some(FilterKind::Safety)
        }
        Action::ResetFilters => {
            next.filters = FilterSelection::default();
            next.sort = SortConfig::default();
            events.push(AnalyticsEvent::FiltersReset);
            None
        }
        Action::Sort(key) => {
            next.sort = state.sort.cycle(key);
            events.push(AnalyticsEvent::TableSorted {
                sort_column: next.sort.key,
                sort_direction: next.sort.mode,
            });
            None
        }
        Action::ToggleDarkMode => {
            next.dark_mode = !state.dark_mode;
            events.push(AnalyticsEvent::DarkModeToggled {
                dark_mode: next.dark_mode,
            });
            None
        }
        Action::OpenModal(modal) => {
            events.push(AnalyticsEvent::ModalOpened {
                modal: modal.clone(),
            });
            next.modal = Some(modal);
            None
        }
        Action::CloseModal => {
            next.modal = None;
            next.copied = false;
            None
        }
        Action::CopyFinished { ok } => {
            if ok {
                next.copied = true;
                events.push(AnalyticsEvent::LinkCopied);
            }
            None
        }
        Action::ClearCopied => {
            next.copied = false;
            None
        }
        Action::ToggleFaq { index, question } => {
            if next.open_faqs.insert(index) {
                events.push(AnalyticsEvent::FaqOpened {
                    faq_question: question,
                });
            } else {
                next.open_faqs.remove(&index);
            }
            None
        }
        Action::OpenFaucet(id) => {
            if let Some(faucet) = catalog.get(id) {
                events.push(AnalyticsEvent::faucet_opened(faucet));
            }
            None
        }
        Action::PageVisited { visit_count } => {
            events.push(AnalyticsEvent::PageVisited { visit_count });
            None
        }
    };

    if next.filters.assets != state.filters.assets
        || next.filters.amounts != state.filters.amounts
    {
        next.filters.prune_amounts(catalog);
    }

    if let Some(kind) = changed {
        events.push(changed_event(kind, &next.filters));
    }

    (next, events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::faucet;
    use crate::sort::SortMode;

    fn catalog() -> Catalog {
        let mut eth = faucet(1, "Alchemy", "Ethereum", "Sepolia", "ETH");
        eth.amount = Some("0.1 ETH".to_string());
        let mut usdc = faucet(2, "Circle", "Base", "Sepolia", "USDC");
        usdc.amount = Some("10 USDC".to_string());

        Catalog::from_faucets(vec![eth, usdc]).unwrap()
    }

    fn apply(state: &AppState, actions: Vec<Action>) -> (AppState, Vec<AnalyticsEvent>) {
        let catalog = catalog();
        let mut state = state.clone();
        let mut all = Vec::new();
        for action in actions {
            let (next, events) = update(&state, action, &catalog);
            state = next;
            all.extend(events);
        }
        (state, all)
    }

    #[test]
    fn test_update_does_not_mutate_input() {
        let state = AppState::default();
        let (next, _) = update(&state, Action::ToggleDarkMode, &catalog());

        assert!(!state.dark_mode);
        assert!(next.dark_mode);
    }

    #[test]
    fn test_toggle_chain_emits_filter_changed() {
        let (state, events) = apply(
            &AppState::default(),
            vec![Action::Toggle(FilterValue::Chain("Base".to_string()))],
        );

        assert!(state.filters.chains.contains("Base"));
        assert_eq!(
            events,
            vec![AnalyticsEvent::filter_changed(FilterKind::Chain, ["Base"])]
        );
    }

    #[test]
    fn test_toggle_twice_removes_value() {
        let toggle = Action::Toggle(FilterValue::Type(TypeFilter::Wallet));
        let (state, events) = apply(&AppState::default(), vec![toggle.clone(), toggle]);

        assert!(state.filters.types.is_empty());
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_asset_change_prunes_amounts() {
        let (state, _) = apply(
            &AppState::default(),
            vec![
                Action::Toggle(FilterValue::Asset("ETH".to_string())),
                Action::Toggle(FilterValue::Amount("0.1 ETH".to_string())),
                Action::SetAssets(["USDC".to_string()].into_iter().collect()),
            ],
        );

        assert!(state.filters.amounts.is_empty());
    }

    #[test]
    fn test_clearing_assets_clears_amounts() {
        let (state, _) = apply(
            &AppState::default(),
            vec![
                Action::Toggle(FilterValue::Asset("ETH".to_string())),
                Action::Toggle(FilterValue::Amount("0.1 ETH".to_string())),
                Action::Toggle(FilterValue::Asset("ETH".to_string())),
            ],
        );

        assert!(state.filters.assets.is_empty());
        assert!(state.filters.amounts.is_empty());
    }

    #[test]
    fn test_amount_without_asset_is_dropped() {
        let (state, events) = apply(
            &AppState::default(),
            vec![Action::Toggle(FilterValue::Amount("0.1 ETH".to_string()))],
        );

        assert!(state.filters.amounts.is_empty());
        assert_eq!(
            events,
            vec![AnalyticsEvent::filter_changed(
                FilterKind::Amount,
                &BTreeSet::<String>::new()
            )]
        );
    }

    #[test]
    fn test_amount_outside_selected_assets_is_dropped() {
        let (state, _) = apply(
            &AppState::default(),
            vec![
                Action::Toggle(FilterValue::Asset("ETH".to_string())),
                Action::Toggle(FilterValue::Amount("10 USDC".to_string())),
                Action::SetAmounts(
                    ["0.1 ETH".to_string(), "10 USDC".to_string()]
                        .into_iter()
                        .collect(),
                ),
            ],
        );

        assert_eq!(
            state.filters.amounts.iter().collect::<Vec<_>>(),
            vec!["0.1 ETH"]
        );
    }

    #[test]
    fn test_adding_asset_keeps_valid_amounts() {
        let (state, _) = apply(
            &AppState::default(),
            vec![
                Action::Toggle(FilterValue::Asset("ETH".to_string())),
                Action::Toggle(FilterValue::Amount("0.1 ETH".to_string())),
                Action::Toggle(FilterValue::Asset("USDC".to_string())),
            ],
        );

        assert!(state.filters.amounts.contains("0.1 ETH"));
    }

    #[test]
    fn test_sort_cycles_three_times() {
        let catalog = catalog();
        let start = AppState::default();

        let (first, events) = update(&start, Action::Sort(SortKey::Chain), &catalog);
        let (second, _) = update(&first, Action::Sort(SortKey::Chain), &catalog);
        let (third, _) = update(&second, Action::Sort(SortKey::Chain), &catalog);

        assert_eq!(first.sort, SortConfig::new(Some(SortKey::Chain), SortMode::Asc));
        assert_eq!(second.sort, SortConfig::new(Some(SortKey::Chain), SortMode::Desc));
        assert_eq!(third.sort, SortConfig::default());
        assert_eq!(
            events,
            vec![AnalyticsEvent::TableSorted {
                sort_column: Some(SortKey::Chain),
                sort_direction: SortMode::Asc,
            }]
        );
    }

    #[test]
    fn test_reset_clears_filters_and_sort() {
        let (state, events) = apply(
            &AppState::new(true),
            vec![
                Action::SetSearch("eth".to_string()),
                Action::Toggle(FilterValue::Chain("Base".to_string())),
                Action::Sort(SortKey::Asset),
                Action::ResetFilters,
            ],
        );

        assert_eq!(state.filters, FilterSelection::default());
        assert_eq!(state.sort, SortConfig::default());
        assert!(state.dark_mode);
        assert_eq!(events.last(), Some(&AnalyticsEvent::FiltersReset));
    }

    #[test]
    fn test_search_emits_nothing_immediately() {
        let (state, events) = apply(
            &AppState::default(),
            vec![Action::SetSearch("sepolia".to_string())],
        );

        assert_eq!(state.filters.search, "sepolia");
        assert!(events.is_empty());
    }

    #[test]
    fn test_copy_failure_is_swallowed() {
        let (state, events) = apply(
            &AppState::default(),
            vec![
                Action::OpenModal("report".to_string()),
                Action::CopyFinished { ok: false },
            ],
        );

        assert!(!state.copied);
        assert_eq!(state.modal.as_deref(), Some("report"));
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_close_modal_clears_copied() {
        let (state, events) = apply(
            &AppState::default(),
            vec![
                Action::OpenModal("report".to_string()),
                Action::CopyFinished { ok: true },
                Action::CloseModal,
            ],
        );

        assert!(!state.copied);
        assert!(state.modal.is_none());
        assert!(events.contains(&AnalyticsEvent::LinkCopied));
    }

    #[test]
    fn test_faq_opened_only_on_expand() {
        let toggle = Action::ToggleFaq {
            index: 2,
            question: "Is it safe?".to_string(),
        };
        let (state, events) = apply(&AppState::default(), vec![toggle.clone(), toggle]);

        assert!(state.open_faqs.is_empty());
        assert_eq!(
            events,
            vec![AnalyticsEvent::FaqOpened {
                faq_question: "Is it safe?".to_string()
            }]
        );
    }

    #[test]
    fn test_open_faucet_unknown_id() {
        let (_, events) = apply(&AppState::default(), vec![Action::OpenFaucet(404)]);
        assert!(events.is_empty());

        let (_, events) = apply(&AppState::default(), vec![Action::OpenFaucet(2)]);
        assert_eq!(events[0].name(), "faucet_opened");
    }
}
