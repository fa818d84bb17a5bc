//! Types that represent the core data model, such as `Deal` and `Price`.
mod deal;
mod price;

pub use deal::{Deal, NewDeal, Opinion};
pub use price::{discount_percent, Price, PriceError};
