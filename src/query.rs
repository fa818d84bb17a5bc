//! Read-only views over the stored deals: ranking, category filters and statistics.
//!
//! Every function here works on a borrowed slice and builds new values. Ranking sorts a copy, so
//! the storage order of the deals is never changed by looking at them.

use crate::model::Deal;
use serde::Serialize;

/// How many deals the statistics rank.
pub const TOP_COUNT: usize = 3;

/// A deal as shown in a listing, with its storage position and derived discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listed {
    /// Zero-based position in storage.
    index: usize,
    /// The discount percentage, `None` if there is no discount.
    discount: Option<u32>,
    #[serde(flatten)]
    deal: Deal,
}

impl Listed {
    pub fn new(index: usize, deal: &Deal) -> Self {
        Self {
            index,
            discount: deal.discount(),
            deal: deal.clone(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// One-based position, as shown to the operator.
    pub fn position(&self) -> usize {
        self.index + 1
    }

    pub fn discount(&self) -> Option<u32> {
        self.discount
    }

    pub fn deal(&self) -> &Deal {
        &self.deal
    }
}

/// The number of deals in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// The statistics view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// The best deals by score.
    pub top: Vec<Listed>,
    /// Deals per category, in order of first appearance.
    pub categories: Vec<CategoryCount>,
}

/// All deals, best score first. Equal scores keep their storage order.
pub fn list_all(deals: &[Deal]) -> Vec<Listed> {
    ranked(deals.iter().enumerate())
}

/// The distinct categories, exactly as stored, in order of first appearance.
pub fn categories(deals: &[Deal]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for deal in deals {
        if !found.iter().any(|c| c == deal.category()) {
            found.push(deal.category().to_string());
        }
    }
    found
}

/// The deals whose category equals `category`, ignoring case, best score first.
pub fn by_category(deals: &[Deal], category: &str) -> Vec<Listed> {
    let wanted = category.to_lowercase();
    ranked(
        deals
            .iter()
            .enumerate()
            .filter(|(_, d)| d.category().to_lowercase() == wanted),
    )
}

/// The `n` best deals by score.
pub fn top(deals: &[Deal], n: usize) -> Vec<Listed> {
    let mut listed = list_all(deals);
    listed.truncate(n);
    listed
}

/// How many deals each category holds, in order of first appearance.
pub fn count_by_category(deals: &[Deal]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for deal in deals {
        match counts.iter_mut().find(|c| c.category == deal.category()) {
            Some(c) => c.count += 1,
            None => counts.push(CategoryCount {
                category: deal.category().to_string(),
                count: 1,
            }),
        }
    }
    counts
}

pub fn stats(deals: &[Deal]) -> Stats {
    Stats {
        top: top(deals, TOP_COUNT),
        categories: count_by_category(deals),
    }
}

fn ranked<'a>(deals: impl Iterator<Item = (usize, &'a Deal)>) -> Vec<Listed> {
    let mut listed: Vec<Listed> = deals.map(|(ix, d)| Listed::new(ix, d)).collect();
    listed.sort_by(|a, b| b.deal.score().cmp(&a.deal.score()));
    listed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{sample, scored};

    fn titles(listed: &[Listed]) -> Vec<&str> {
        listed.iter().map(|l| l.deal().title()).collect()
    }

    #[test]
    fn test_list_all_sorts_a_copy() {
        let deals = vec![
            scored("A", "x", 1),
            scored("B", "x", 5),
            scored("C", "x", -2),
            scored("D", "x", 5),
        ];
        let before = deals.clone();

        let listed = list_all(&deals);
        assert_eq!(titles(&listed), vec!["B", "D", "A", "C"]);
        assert_eq!(listed[0].index(), 1);
        assert_eq!(listed[0].position(), 2);
        assert_eq!(deals, before);
        assert_eq!(list_all(&deals), listed);
    }

    #[test]
    fn test_listed_discount() {
        let listed = list_all(&[
            sample("TV", "500", "400", "Electronics"),
            sample("Radio", "50", "50", "Electronics"),
        ]);
        assert_eq!(listed[0].discount(), Some(20));
        assert_eq!(listed[1].discount(), None);
    }

    #[test]
    fn test_categories_distinct_case_sensitive() {
        let deals = vec![
            scored("A", "Food", 0),
            scored("B", "Tech", 0),
            scored("C", "food", 0),
            scored("D", "Food", 0),
        ];
        assert_eq!(categories(&deals), vec!["Food", "Tech", "food"]);
        assert!(categories(&[]).is_empty());
    }

    #[test]
    fn test_by_category_ignores_case() {
        let deals = vec![
            scored("A", "Food", 0),
            scored("B", "Tech", 9),
            scored("C", "food", 3),
            scored("D", "FOOD", -1),
        ];
        let found = by_category(&deals, "Food");
        assert_eq!(titles(&found), vec!["C", "A", "D"]);
        assert_eq!(found[0].index(), 2);
        assert!(by_category(&deals, "Garden").is_empty());
    }

    #[test]
    fn test_stats() {
        let deals = vec![
            scored("A", "Food", 2),
            scored("B", "Tech", 7),
            scored("C", "Food", 4),
            scored("D", "Home", 1),
            scored("E", "Tech", 3),
        ];
        let stats = stats(&deals);
        assert_eq!(titles(&stats.top), vec!["B", "C", "E"]);
        assert_eq!(
            stats.categories,
            vec![
                CategoryCount {
                    category: "Food".to_string(),
                    count: 2
                },
                CategoryCount {
                    category: "Tech".to_string(),
                    count: 2
                },
                CategoryCount {
                    category: "Home".to_string(),
                    count: 1
                },
            ]
        );
        assert_eq!(super::stats(&deals), stats);
    }

    #[test]
    fn test_top_with_few_deals() {
        let deals = vec![scored("A", "x", 0)];
        assert_eq!(top(&deals, TOP_COUNT).len(), 1);
        assert!(top(&[], TOP_COUNT).is_empty());
    }
}
