//! The record store: the in-memory list of deals and the JSON file that backs it.

use crate::backup::Backup;
use crate::error::{Error, ErrorType, IntoResult};
use crate::model::{Deal, Opinion};
use crate::{utils, Config, Result};
use serde_json::error::Category;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Owns the deals for the lifetime of the process.
///
/// The store is loaded once with `DealStore::load` and handed to each operation by reference.
/// Every mutation is written back to the deals file immediately; reads never touch the disk.
#[derive(Debug, Clone)]
pub struct DealStore {
    path: PathBuf,
    backup: Backup,
    deals: Vec<Deal>,
}

impl DealStore {
    /// Loads the deals file named by `config`.
    ///
    /// - Creates the data directory if needed.
    /// - Writes an empty list if there is no deals file yet.
    /// - Otherwise parses the file.
    ///
    /// This never fails. If the file cannot be loaded the problem is logged and the store
    /// starts empty. A file that exists but does not parse is first moved to the backups
    /// directory and replaced with an empty list.
    pub async fn load(config: &Config) -> Self {
        let mut store = Self {
            path: config.deals_path().to_path_buf(),
            backup: config.backup(),
            deals: Vec::new(),
        };
        match store.read().await {
            Ok(deals) => {
                info!("{} deal(s) loaded from {}", deals.len(), store.path.display());
                store.deals = deals;
            }
            Err(e) => error!("Unable to load deals ({}): {e}", e.kind()),
        }
        store
    }

    async fn read(&self) -> Result<Vec<Deal>> {
        if let Some(dir) = self.path.parent() {
            utils::make_dir(dir).await.pub_result(ErrorType::StorageRead)?;
        }
        if !utils::exists(&self.path)
            .await
            .pub_result(ErrorType::StorageRead)?
        {
            debug!("Creating an empty deals file at {}", self.path.display());
            utils::write(&self.path, "[]")
                .await
                .pub_result(ErrorType::StorageWrite)?;
            return Ok(Vec::new());
        }
        let content = utils::read_bytes(&self.path)
            .await
            .pub_result(ErrorType::StorageRead)?;
        match parse(&self.path, &content) {
            Ok(deals) => Ok(deals),
            Err(e) => {
                self.set_aside().await;
                Err(e)
            }
        }
    }

    /// Moves an unparsable deals file out of the way and starts a fresh one.
    async fn set_aside(&self) {
        match self.backup.set_aside(&self.path).await {
            Ok(moved) => {
                warn!("The unreadable deals file was moved to {}", moved.display());
                if let Err(e) = utils::write(&self.path, "[]").await {
                    error!("{e:#}");
                }
            }
            Err(e) => error!("Unable to move the unreadable deals file aside: {e:#}"),
        }
    }

    /// Writes all deals to the deals file, pretty-printed.
    pub async fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.deals).pub_result(ErrorType::StorageWrite)?;
        utils::write(&self.path, json)
            .await
            .pub_result(ErrorType::StorageWrite)?;
        info!("Saved {} deal(s) to {}", self.deals.len(), self.path.display());
        Ok(())
    }

    /// Saves, logging instead of returning a failure. The in-memory list stays as it is.
    async fn persist(&self) {
        if let Err(e) = self.save().await {
            error!("Unable to save deals: {e}");
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All deals in storage order.
    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    pub fn get(&self, index: usize) -> Result<&Deal> {
        self.deals.get(index).ok_or_else(|| self.not_found(index))
    }

    pub fn len(&self) -> usize {
        self.deals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }

    /// Appends `deal` and persists. Returns the index of the new deal.
    pub async fn add(&mut self, deal: Deal) -> usize {
        self.deals.push(deal);
        self.persist().await;
        self.deals.len() - 1
    }

    /// Removes and returns the deal at `index`, then persists.
    pub async fn remove_at(&mut self, index: usize) -> Result<Deal> {
        if index >= self.deals.len() {
            return Err(self.not_found(index));
        }
        let removed = self.deals.remove(index);
        self.persist().await;
        Ok(removed)
    }

    /// Applies one vote to the deal at `index`, then persists. Returns the new score.
    pub async fn update_score(&mut self, index: usize, opinion: Opinion) -> Result<i64> {
        let len = self.deals.len();
        let deal = self.deals.get_mut(index).ok_or_else(|| not_found(index, len))?;
        deal.vote(opinion);
        let score = deal.score();
        self.persist().await;
        Ok(score)
    }

    fn not_found(&self, index: usize) -> Error {
        not_found(index, self.deals.len())
    }

    #[cfg(test)]
    pub(crate) fn from_deals(config: &Config, deals: Vec<Deal>) -> Self {
        Self {
            path: config.deals_path().to_path_buf(),
            backup: config.backup(),
            deals,
        }
    }
}

fn not_found(index: usize, len: usize) -> Error {
    Error::msg(
        ErrorType::NotFound,
        format!(
            "There is no deal #{} (there {} {len} deal{})",
            index + 1,
            if len == 1 { "is" } else { "are" },
            if len == 1 { "" } else { "s" }
        ),
    )
}

/// Parses the contents of a deals file.
///
/// Bytes that are not JSON (including invalid UTF-8) are a `StorageRead` error; JSON that is not
/// a list of deals is a `StorageSchema` error.
fn parse(path: &Path, content: &[u8]) -> Result<Vec<Deal>> {
    serde_json::from_slice(content).map_err(|e| {
        let kind = match e.classify() {
            Category::Data => ErrorType::StorageSchema,
            _ => ErrorType::StorageRead,
        };
        Error::new(
            kind,
            anyhow::Error::new(e).context(format!("Unable to parse {}", path.display())),
        )
    })
}
