//! Setting aside deals files that could not be loaded.
//!
//! When the deals file is unreadable as a list of deals, the store moves it into the backups
//! directory before starting over with an empty list, so that a later save does not overwrite the
//! operator's data.

use crate::{utils, Config};
use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Manages set-aside files and their rotation.
///
/// The `Backup` struct is immutable and owns copies of the paths and settings it needs.
/// Create a new instance via `Config::backup()` or `Backup::new()`.
#[derive(Debug, Clone)]
pub struct Backup {
    backups_dir: PathBuf,
    backup_copies: u32,
}

impl Backup {
    /// Creates a new `Backup` instance from a `Config`.
    pub fn new(config: &Config) -> Self {
        Self {
            backups_dir: config.backups().to_path_buf(),
            backup_copies: config.backup_copies(),
        }
    }

    /// Moves the file at `path` into the backups directory.
    ///
    /// The filename format is `{stem}.YYYY-MM-DD-NNN.{ext}` where NNN is a sequence number, e.g.
    /// `deals.2026-10-14-001.json`. Automatically rotates old files, keeping only
    /// `backup_copies` of them.
    ///
    /// Returns the new path of the file.
    pub async fn set_aside(&self, path: &Path) -> Result<PathBuf> {
        let prefix = path
            .file_stem()
            .with_context(|| format!("No file name in {}", path.display()))?
            .to_string_lossy()
            .to_string();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default();

        utils::make_dir(&self.backups_dir).await?;
        let date = today();
        let seq = self
            .next_sequence_number(&prefix, &date, &extension)
            .await?;
        let filename = if extension.is_empty() {
            format!("{prefix}.{date}-{seq:03}")
        } else {
            format!("{prefix}.{date}-{seq:03}.{extension}")
        };
        let destination = self.backups_dir.join(&filename);

        utils::rename(path, &destination).await?;
        debug!("Moved {} to {}", path.display(), destination.display());

        self.rotate(&prefix, &extension).await?;

        Ok(destination)
    }

    /// Scans the backups directory for existing files with the given prefix and date,
    /// and returns the next sequence number.
    async fn next_sequence_number(&self, prefix: &str, date: &str, extension: &str) -> Result<u32> {
        let pattern_start = format!("{prefix}.{date}-");
        let mut max_seq: u32 = 0;

        let mut dir = utils::read_dir(&self.backups_dir).await?;
        while let Some(entry) = dir
            .next_entry()
            .await
            .context("Failed to read directory entry")?
        {
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();

            if name.starts_with(&pattern_start) {
                if let Some(seq) = parse_sequence_number(&name, prefix, date, extension) {
                    max_seq = max_seq.max(seq);
                }
            }
        }

        Ok(max_seq + 1)
    }

    /// Removes the oldest files, keeping only `backup_copies` files with the given prefix.
    async fn rotate(&self, prefix: &str, extension: &str) -> Result<()> {
        let mut files: Vec<(PathBuf, String)> = Vec::new();

        let mut dir = utils::read_dir(&self.backups_dir).await?;
        while let Some(entry) = dir
            .next_entry()
            .await
            .context("Failed to read directory entry")?
        {
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy().to_string();

            if is_backup_file(&name, prefix, extension) {
                files.push((entry.path(), name));
            }
        }

        // The name format sorts by date, then sequence number
        files.sort_by(|a, b| a.1.cmp(&b.1));

        let to_delete = files.len().saturating_sub(self.backup_copies as usize);
        for (path, _) in files.into_iter().take(to_delete) {
            debug!("Removing old backup {}", path.display());
            utils::remove(&path).await?;
        }

        Ok(())
    }
}

/// Returns today's date in YYYY-MM-DD format.
fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Parses the sequence number from a set-aside filename.
/// Returns None if the filename doesn't match the expected pattern.
fn parse_sequence_number(filename: &str, prefix: &str, date: &str, extension: &str) -> Option<u32> {
    let remainder = filename.strip_prefix(&format!("{prefix}.{date}-"))?;
    let seq_str = if extension.is_empty() {
        remainder
    } else {
        remainder.strip_suffix(&format!(".{extension}"))?
    };
    seq_str.parse().ok()
}

/// Checks if a filename is a set-aside file with the given prefix and extension.
fn is_backup_file(filename: &str, prefix: &str, extension: &str) -> bool {
    let Some(rest) = filename.strip_prefix(&format!("{prefix}.")) else {
        return false;
    };
    let stamp = if extension.is_empty() {
        Some(rest)
    } else {
        rest.strip_suffix(&format!(".{extension}"))
    };
    // YYYY-MM-DD-NNN
    stamp.is_some_and(|s| s.len() >= 14 && s.chars().all(|c| c.is_ascii_digit() || c == '-'))
}
