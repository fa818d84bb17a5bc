//! Delete command handler.

use crate::commands::Out;
use crate::model::Deal;
use crate::prompt::Prompt;
use crate::{DealStore, Result};
use tracing::info;

pub(crate) const DELETION_CANCELLED: &str = "Deletion cancelled.";

/// Asks the operator to confirm (default no) and then removes the deal at `index`. With
/// `assume_yes` the question is skipped.
///
/// A declined deletion leaves the store untouched and returns an `Out` without a structure.
///
/// # Errors
///
/// - Returns a `NotFound` error, before asking anything, if there is no deal at `index`.
/// - Returns a `Console` error if the answer cannot be read.
pub async fn confirm_delete<P>(
    store: &mut DealStore,
    index: usize,
    assume_yes: bool,
    prompt: &mut P,
) -> Result<Out<Deal>>
where
    P: Prompt,
{
    let title = store.get(index)?.title().to_string();
    let confirmed = assume_yes
        || prompt
            .confirm(&format!("Do you really want to delete \"{title}\"?"), false)
            .await?;
    if !confirmed {
        info!("Deletion of \"{title}\" cancelled");
        return Ok(DELETION_CANCELLED.into());
    }
    delete(store, index).await
}

/// Removes the deal at `index` without asking.
///
/// # Errors
///
/// - Returns a `NotFound` error if there is no deal at `index`.
pub async fn delete(store: &mut DealStore, index: usize) -> Result<Out<Deal>> {
    let removed = store.remove_at(index).await?;
    info!("Deal deleted: {}", removed.title());
    Ok(Out::new(
        format!("\"{}\" was deleted.", removed.title()),
        removed,
    ))
}
