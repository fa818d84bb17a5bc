//! Vote command handler.

use crate::commands::Out;
use crate::model::Opinion;
use crate::{DealStore, Result};
use tracing::info;

/// Records one vote on the deal at `index` and returns its new score.
///
/// # Errors
///
/// - Returns a `NotFound` error if there is no deal at `index`.
pub async fn vote(store: &mut DealStore, index: usize, opinion: Opinion) -> Result<Out<i64>> {
    let score = store.update_score(index, opinion).await?;
    let title = store.get(index)?.title().to_string();
    info!("Vote '{opinion}' recorded for \"{title}\", score is now {score}");
    Ok(Out::new(
        format!("Vote recorded. \"{title}\" now has a score of {score}."),
        score,
    ))
}
