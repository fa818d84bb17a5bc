//! Read-only commands: list, show, search and stats. None of these save the store.

use crate::commands::{Out, NO_DEALS};
use crate::query::{self, Listed, Stats};
use crate::{render, DealStore, Result};

/// Lists all deals, best score first.
pub fn list(store: &DealStore) -> Out<Vec<Listed>> {
    if store.is_empty() {
        return NO_DEALS.into();
    }
    let listed = query::list_all(store.deals());
    let message = format!(
        "Deals sorted by score:\n\n{}",
        render::listing(&listed)
    );
    Out::new(message, listed)
}

/// Shows every field of the deal at `index`.
///
/// # Errors
///
/// - Returns a `NotFound` error if there is no deal at `index`.
pub fn show(store: &DealStore, index: usize) -> Result<Out<Listed>> {
    let listed = Listed::new(index, store.get(index)?);
    Ok(Out::new(render::details(&listed), listed))
}

/// Lists the deals of `category`, ignoring case, best score first.
pub fn search(store: &DealStore, category: &str) -> Out<Vec<Listed>> {
    let found = query::by_category(store.deals(), category);
    if found.is_empty() {
        return format!("No deals found in category \"{category}\".").into();
    }
    let message = format!(
        "Deals in category \"{category}\":\n\n{}\n\nTotal: {} deal{} in category \"{category}\".",
        render::listing(&found),
        found.len(),
        if found.len() == 1 { "" } else { "s" }
    );
    Out::new(message, found)
}

/// The top deals and the number of deals per category.
pub fn stats(store: &DealStore) -> Out<Stats> {
    if store.is_empty() {
        return NO_DEALS.into();
    }
    let stats = query::stats(store.deals());
    Out::new(render::stats(&stats), stats)
}
