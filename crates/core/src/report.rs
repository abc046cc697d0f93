//! Link to the "report a faucet" form, prefilled from the active filters.

use crate::filter::FilterSelection;
use std::collections::BTreeSet;

pub const REPORT_FORM_BASE: &str = "https://form.typeform.com/to/x479092r";

/// Value sent for fields the directory cannot fill in.
pub const PLACEHOLDER: &str = "xxxxx";

fn single(values: &BTreeSet<String>) -> String {
    match (values.len(), values.iter().next()) {
        (1, Some(value)) => urlencoding::encode(value).into_owned(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Build the prefilled form URL.
///
/// Chain and asset are only filled in when exactly one of each is selected.
pub fn report_form_url(page_url: Option<&str>, filters: &FilterSelection) -> String {
    let page = page_url
        .filter(|url| !url.is_empty())
        .map(|url| urlencoding::encode(url).into_owned())
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    format!(
        "{REPORT_FORM_BASE}#pageurl={page}&chain={}&testnet={PLACEHOLDER}&asset={}&fauceturl={PLACEHOLDER}",
        single(&filters.chains),
        single(&filters.assets),
    )
}
