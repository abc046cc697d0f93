//! Analytics events and the search debouncer.
//!
//! Events are plain data. Delivering them is the shell's job and nothing in
//! the core waits on, or reacts to, delivery.

use crate::catalog::{Faucet, FaucetType};
use crate::sort::{SortKey, SortMode};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Quiet period after the last keystroke before a search is reported.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(800);

/// Filter category named in `filter_changed` events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Chain,
    Asset,
    Amount,
    Type,
    Safety,
}

/// A structured analytics event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    FaucetOpened {
        faucet_id: u32,
        faucet_name: String,
        faucet_chain: String,
        faucet_testnet: String,
        faucet_asset: String,
        faucet_type: FaucetType,
        faucet_url: String,
        wallet_required: bool,
    },
    SearchPerformed {
        search_term: String,
        result_count: usize,
    },
    FilterChanged {
        filter_type: FilterKind,
        filter_values: Vec<String>,
        filter_count: usize,
    },
    FiltersReset,
    TableSorted {
        sort_column: Option<SortKey>,
        sort_direction: SortMode,
    },
    ModalOpened {
        modal: String,
    },
    LinkCopied,
    DarkModeToggled {
        dark_mode: bool,
    },
    FaqOpened {
        faq_question: String,
    },
    PageVisited {
        visit_count: u32,
    },
}

impl AnalyticsEvent {
    pub fn faucet_opened(faucet: &Faucet) -> Self {
        AnalyticsEvent::FaucetOpened {
            faucet_id: faucet.id,
            faucet_name: faucet.name.clone(),
            faucet_chain: faucet.chain.clone(),
            faucet_testnet: faucet.testnet.clone(),
            faucet_asset: faucet.asset.clone(),
            faucet_type: faucet.faucet_type,
            faucet_url: faucet.url.clone(),
            wallet_required: faucet.wallet_connection_required,
        }
    }

    pub fn filter_changed<I, S>(filter_type: FilterKind, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let filter_values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
        AnalyticsEvent::FilterChanged {
            filter_type,
            filter_count: filter_values.len(),
            filter_values,
        }
    }

    /// Event name as sent to the sink.
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::FaucetOpened { .. } => "faucet_opened",
            AnalyticsEvent::SearchPerformed { .. } => "search_performed",
            AnalyticsEvent::FilterChanged { .. } => "filter_changed",
            AnalyticsEvent::FiltersReset => "filters_reset",
            AnalyticsEvent::TableSorted { .. } => "table_sorted",
            AnalyticsEvent::ModalOpened { .. } => "modal_opened",
            AnalyticsEvent::LinkCopied => "link_copied",
            AnalyticsEvent::DarkModeToggled { .. } => "dark_mode_toggled",
            AnalyticsEvent::FaqOpened { .. } => "faq_opened",
            AnalyticsEvent::PageVisited { .. } => "page_visited",
        }
    }
}

/// Delays search reporting until typing stops.
///
/// Every input restarts the timer; only the last term is reported, once.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record a keystroke. A blank term cancels any pending report.
    pub fn input(&mut self, term: &str, now: Instant) {
        let term = term.trim();
        if term.is_empty() {
            self.pending = None;
            return;
        }

        self.pending = Some((term.to_string(), now + self.delay));
    }

    /// When the pending report becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Take the pending term if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match self.pending.take() {
            Some((term, deadline)) if now >= deadline => Some(term),
            other => {
                self.pending = other;
                None
            }
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
