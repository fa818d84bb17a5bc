//! Plain-text rendering of deals for the console.

use crate::model::Price;
use crate::query::{Listed, Stats};
use rust_decimal::RoundingStrategy;
use std::fmt::Write;

const RULE: &str = "----------------------------------------------";
const BANNER: &str = "==============================================";

/// `499.9` -> `499.90 €`
pub fn price(price: Price) -> String {
    let mut value = price
        .value()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(2);
    format!("{value} €")
}

fn discount_suffix(discount: Option<u32>) -> String {
    match discount {
        Some(percent) => format!(" (-{percent}%)"),
        None => " (no discount)".to_string(),
    }
}

/// One block per deal, in the order given.
pub fn listing(items: &[Listed]) -> String {
    let mut out = String::new();
    for item in items {
        let deal = item.deal();
        let _ = writeln!(out, "#{} {}", item.position(), deal.title());
        let _ = writeln!(
            out,
            "   {}",
            deal.description().unwrap_or("No description")
        );
        let _ = writeln!(
            out,
            "   {} → {}{}",
            price(deal.initial_price()),
            price(deal.discount_price()),
            discount_suffix(item.discount())
        );
        let _ = writeln!(out, "   Category: {}", deal.category());
        let _ = writeln!(out, "   Score: {}", deal.score());
        let _ = writeln!(out, "   Added on {}", deal.created_at());
        let _ = writeln!(out, "{RULE}");
    }
    out.trim_end().to_string()
}

/// Every field of one deal.
pub fn details(item: &Listed) -> String {
    let deal = item.deal();
    let mut out = String::new();
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out, "{}", deal.title());
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(
        out,
        "Description: {}",
        deal.description().unwrap_or("None")
    );
    let _ = writeln!(out, "Category: {}", deal.category());
    let _ = writeln!(out, "Score: {}", deal.score());
    let _ = writeln!(out, "Initial price: {}", price(deal.initial_price()));
    let _ = writeln!(out, "Discount price: {}", price(deal.discount_price()));
    let discount = item
        .discount()
        .map_or_else(|| "0%".to_string(), |percent| format!("-{percent}%"));
    let _ = writeln!(out, "Discount: {discount}");
    let _ = writeln!(out, "Added on: {}", deal.created_at());
    let _ = writeln!(out, "Link: {}", deal.link().unwrap_or("No link provided"));
    let _ = write!(out, "{RULE}");
    out
}

/// The top deals table followed by the per-category table.
pub fn stats(stats: &Stats) -> String {
    let width = stats
        .top
        .iter()
        .map(|l| l.deal().title().chars().count())
        .chain(stats.categories.iter().map(|c| c.category.chars().count()))
        .chain(["Category".len()])
        .max()
        .unwrap_or_default();

    let mut out = String::new();
    let _ = writeln!(out, "Top {} deals:", stats.top.len());
    let _ = writeln!(out, "  {:<width$}  Score", "Title");
    for item in &stats.top {
        let _ = writeln!(out, "  {:<width$}  {}", item.deal().title(), item.deal().score());
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Deals per category:");
    let _ = writeln!(out, "  {:<width$}  Total", "Category");
    for c in &stats.categories {
        let _ = writeln!(out, "  {:<width$}  {}", c.category, c.count);
    }
    out.trim_end().to_string()
}

/// The label of a deal in a selection list.
pub fn choice(item: &Listed) -> String {
    format!("{} (Score: {})", item.deal().title(), item.deal().score())
}
