//! Shared test utilities for creating test environments.
//!
//! This module is only compiled when running tests (`#[cfg(test)]`).

use crate::model::{Deal, NewDeal, Price};
use crate::prompt::Console;
use crate::{utils, Config, DealStore};
use std::io::Cursor;
use std::path::PathBuf;
use std::str::FromStr;
use tempfile::TempDir;

/// Test environment with a data directory inside a temporary directory.
/// Holds TempDir to keep the directory alive for the duration of the test.
pub struct TestEnv {
    _temp_dir: TempDir,
    config: Config,
}

impl TestEnv {
    /// Creates a test environment. The data directory itself is not created yet.
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path().join("data")).await.unwrap();
        Self {
            _temp_dir: temp_dir,
            config,
        }
    }

    pub fn config(&self) -> Config {
        self.config.clone()
    }

    /// Writes `contents` as the deals file, creating the data directory.
    pub async fn write_deals(&self, contents: &str) {
        utils::make_dir(self.config.root()).await.unwrap();
        utils::write(self.config.deals_path(), contents)
            .await
            .unwrap();
    }

    /// Loads a store and adds one sample deal per title, all in the "Misc" category.
    pub async fn store_with(&self, titles: &[&str]) -> DealStore {
        let mut store = DealStore::load(&self.config).await;
        for title in titles {
            store.add(sample(title, "20", "15", "Misc")).await;
        }
        store
    }

    /// The files currently in the backups directory, sorted.
    pub async fn backups(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        let mut dir = utils::read_dir(self.config.backups()).await.unwrap();
        while let Some(entry) = dir.next_entry().await.unwrap() {
            files.push(entry.path());
        }
        files.sort();
        files
    }
}

/// A deal with a score of zero and a fixed creation time.
pub fn sample(title: &str, initial: &str, discount: &str, category: &str) -> Deal {
    Deal::new(
        NewDeal {
            title: title.to_string(),
            description: format!("About {title}"),
            initial_price: Price::from_str(initial).unwrap(),
            discount_price: Price::from_str(discount).unwrap(),
            link: String::new(),
            category: category.to_string(),
        },
        "14/10/2026 09:00:00",
    )
}

/// Builds a sample with the given score by replaying votes.
pub fn scored(title: &str, category: &str, score: i64) -> Deal {
    let mut deal = sample(title, "100", "80", category);
    let opinion = if score < 0 {
        crate::model::Opinion::Bad
    } else {
        crate::model::Opinion::Good
    };
    for _ in 0..score.unsigned_abs() {
        deal.vote(opinion);
    }
    deal
}

/// A console that reads the given lines and records everything it prints.
pub type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

pub fn console(lines: &[&str]) -> TestConsole {
    let input: String = lines.iter().map(|line| format!("{line}\n")).collect();
    Console::new(Cursor::new(input.into_bytes()), Vec::new())
}

/// Everything the console printed so far.
pub fn printed(console: &TestConsole) -> String {
    String::from_utf8_lossy(console.output()).to_string()
}
