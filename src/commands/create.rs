//! Create command handlers.

use crate::args::CreateArgs;
use crate::commands::Out;
use crate::model::{Deal, NewDeal};
use crate::validate::validate_price;
use crate::{utils, DealStore, Result};
use tracing::info;

/// Adds a deal built from `new_deal` with a score of zero and the current local time.
pub async fn create(store: &mut DealStore, new_deal: NewDeal) -> Out<Deal> {
    let deal = Deal::new(new_deal, utils::timestamp());
    let index = store.add(deal.clone()).await;
    info!("New deal added: {}", deal.title());
    Out::new(
        format!("Deal #{} \"{}\" added.", index + 1, deal.title()),
        deal,
    )
}

/// Validates the prices given on the command line, then adds the deal.
///
/// # Errors
///
/// - Returns a `Validation` error if either price is not a number greater than zero. Nothing is
///   added in that case.
pub async fn create_from_input(store: &mut DealStore, args: &CreateArgs) -> Result<Out<Deal>> {
    let new_deal = NewDeal {
        title: args.title().to_string(),
        description: args.description().to_string(),
        initial_price: validate_price(args.initial_price())?,
        discount_price: validate_price(args.discount_price())?,
        link: args.link().to_string(),
        category: args.category().to_string(),
    };
    Ok(create(store, new_deal).await)
}
