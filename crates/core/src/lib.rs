//! Core library for faucets
//!
//! This crate implements the **Functional Core** of the faucets directory,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The faucets project uses a two-crate architecture:
//!
//! - **`faucets_core`** (this crate): catalog model, filtering, sorting, logo
//!   resolution and the directory state machine, with zero I/O
//! - **`faucets`**: terminal browsing, the MCP server and event delivery (the
//!   Imperative Shell)
//!
//! Every function here is deterministic. Time only enters through explicit
//! `Instant` arguments, so the debouncer is as easy to test as the filters.
//!
//! # Module Organization
//!
//! - [`catalog`]: faucet records and the catalog they are loaded into
//! - [`filter`]: the search, chain, asset, type and amount predicate
//! - [`sort`]: column comparators and the stable sort
//! - [`logos`]: logo candidate tables and the per-image fallback cursor
//! - [`state`]: directory UI state and its `update` transition
//! - [`analytics`]: event payloads and the search debouncer
//! - [`report`]: the prefilled "report a faucet" link
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use faucets_core::catalog::Catalog;
//! use faucets_core::filter::{filter_faucets, FilterSelection};
//! use faucets_core::sort::{sort_faucets, SortConfig, SortKey, SortMode};
//!
//! let catalog = Catalog::builtin()?;
//! let selection = FilterSelection {
//!     search: "sepolia".to_string(),
//!     ..Default::default()
//! };
//!
//! let rows = filter_faucets(catalog.faucets(), &selection);
//! let rows = sort_faucets(rows, SortConfig::new(Some(SortKey::Asset), SortMode::Asc));
//! ```

pub mod analytics;
pub mod catalog;
pub mod filter;
pub mod logos;
pub mod report;
pub mod sort;
pub mod state;
