pub mod args;
mod backup;
pub mod commands;
mod config;
mod error;
pub mod model;
pub mod prompt;
pub mod query;
mod render;
mod store;
mod utils;
pub mod validate;

#[cfg(test)]
mod test;

pub use backup::Backup;
pub use config::Config;
pub use error::{Error, ErrorType, Result};
pub use store::DealStore;
