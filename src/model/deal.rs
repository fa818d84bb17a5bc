use crate::model::{discount_percent, Price};
use serde::{Deserialize, Serialize};

/// One catalog entry describing a discounted offer.
///
/// This is the shape of each element of the array in `deals.json`:
/// ```json
/// {
///   "title": "TV",
///   "description": "55 inch OLED",
///   "initialPrice": "500",
///   "discountPrice": "400",
///   "link": "https://example.com/tv",
///   "category": "Electronics",
///   "score": 0,
///   "createdAt": "14/10/2026 09:41:07"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    title: String,
    #[serde(default)]
    description: String,
    initial_price: Price,
    discount_price: Price,
    #[serde(default)]
    link: String,
    category: String,
    #[serde(default)]
    score: i64,
    created_at: String,
}

impl Deal {
    /// Creates a deal from operator input with a score of zero.
    pub fn new(new_deal: NewDeal, created_at: impl Into<String>) -> Self {
        let NewDeal {
            title,
            description,
            initial_price,
            discount_price,
            link,
            category,
        } = new_deal;
        Self {
            title,
            description,
            initial_price,
            discount_price,
            link,
            category,
            score: 0,
            created_at: created_at.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The description, or `None` if it was left empty.
    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    pub fn initial_price(&self) -> Price {
        self.initial_price
    }

    pub fn discount_price(&self) -> Price {
        self.discount_price
    }

    /// The link, or `None` if it was left empty.
    pub fn link(&self) -> Option<&str> {
        non_empty(&self.link)
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// See `discount_percent`.
    pub fn discount(&self) -> Option<u32> {
        discount_percent(self.initial_price, self.discount_price)
    }

    /// Applies a single vote to the score.
    pub(crate) fn vote(&mut self, opinion: Opinion) {
        self.score = self.score.saturating_add(opinion.delta());
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// The fields gathered from the operator when creating a deal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewDeal {
    pub title: String,
    pub description: String,
    pub initial_price: Price,
    pub discount_price: Price,
    pub link: String,
    pub category: String,
}

/// A vote on a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Opinion {
    /// A good deal: +1.
    Good,
    /// A bad deal: -1.
    Bad,
}

serde_plain::derive_display_from_serialize!(Opinion);
serde_plain::derive_fromstr_from_deserialize!(Opinion);

impl Opinion {
    pub fn delta(self) -> i64 {
        match self {
            Opinion::Good => 1,
            Opinion::Bad => -1,
        }
    }

    /// The label shown to the operator.
    pub fn label(self) -> &'static str {
        match self {
            Opinion::Good => "Good deal",
            Opinion::Bad => "Bad deal",
        }
    }
}
