//! Configuration handling for the deals catalog.
//!
//! Everything lives in a data directory (`./data` by default). The data directory may contain an
//! optional `config.json`; when it is absent the defaults are used.

use crate::backup::Backup;
use crate::error::{ErrorType, IntoResult};
use crate::{utils, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "deals";
const CONFIG_VERSION: u8 = 1;
const BACKUP_COPIES: u32 = 5;
const BACKUPS: &str = ".backups";
const CONFIG_JSON: &str = "config.json";
const DEALS_JSON: &str = "deals.json";

/// The `Config` object represents the configuration of the app. You instantiate it by providing
/// the path to the data directory and from there it loads `config.json` if there is one. It
/// provides the paths to the deals file and the backups directory.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    config_path: PathBuf,
    deals_path: PathBuf,
    backups: PathBuf,
    config_file: ConfigFile,
}

impl Config {
    /// Loads the configuration for `data_dir`.
    ///
    /// Nothing is created on disk here; the store creates the data directory and deals file when
    /// it loads.
    ///
    /// # Errors
    /// - Returns a `Config` error if `config.json` exists but cannot be read or parsed, or if it
    ///   belongs to another application.
    pub async fn load(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let root = data_dir.into();
        let config_path = root.join(CONFIG_JSON);
        let config_file = if utils::exists(&config_path)
            .await
            .pub_result(ErrorType::Config)?
        {
            ConfigFile::load(&config_path)
                .await
                .pub_result(ErrorType::Config)?
        } else {
            ConfigFile::default()
        };
        let deals_path = utils::resolve(&root, &config_file.deals_file);
        Ok(Self {
            backups: root.join(BACKUPS),
            root,
            config_path,
            deals_path,
            config_file,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// The JSON file holding the deals.
    pub fn deals_path(&self) -> &Path {
        &self.deals_path
    }

    pub fn backups(&self) -> &Path {
        &self.backups
    }

    pub fn config_version(&self) -> u8 {
        self.config_file.config_version
    }

    pub fn backup_copies(&self) -> u32 {
        self.config_file.backup_copies
    }

    /// Creates a new `Backup` instance for setting aside unreadable deals files.
    pub fn backup(&self) -> Backup {
        Backup::new(self)
    }
}

/// Represents the serialization and deserialization format of the configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "app_name": "deals",
///   "config_version": 1,
///   "deals_file": "deals.json",
///   "backup_copies": 5
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
struct ConfigFile {
    /// Application name, should always be "deals"
    app_name: String,

    /// Configuration file version
    config_version: u8,

    /// Path to the deals file, relative to the data directory or absolute
    #[serde(default = "default_deals_file")]
    deals_file: PathBuf,

    /// Number of set-aside deals files to keep
    #[serde(default = "default_backup_copies")]
    backup_copies: u32,
}

fn default_deals_file() -> PathBuf {
    PathBuf::from(DEALS_JSON)
}

fn default_backup_copies() -> u32 {
    BACKUP_COPIES
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            deals_file: default_deals_file(),
            backup_copies: BACKUP_COPIES,
        }
    }
}

impl ConfigFile {
    /// Loads a ConfigFile from the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if `app_name` is wrong.
    async fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = utils::read(path).await?;

        let config: ConfigFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

        anyhow::ensure!(
            config.app_name == APP_NAME,
            "Invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            config.app_name
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_config_defaults_without_file() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("data");
        let config = Config::load(&root).await.unwrap();
        assert_eq!(config.root(), root.as_path());
        assert_eq!(config.deals_path(), root.join("deals.json").as_path());
        assert_eq!(config.backups(), root.join(".backups").as_path());
        assert_eq!(config.backup_copies(), 5);
        // Loading the configuration does not touch the disk.
        assert!(!root.exists());
    }

    #[tokio::test]
    async fn test_config_file_minimal() {
        let dir = TempDir::new().unwrap();
        let json = r#"{
            "app_name": "deals",
            "config_version": 1
        }"#;
        utils::write(dir.path().join(CONFIG_JSON), json)
            .await
            .unwrap();

        let config = Config::load(dir.path()).await.unwrap();
        assert_eq!(config.deals_path(), dir.path().join(DEALS_JSON).as_path());
        assert_eq!(config.backup_copies(), BACKUP_COPIES);
    }

    #[tokio::test]
    async fn test_config_file_overrides() {
        let dir = TempDir::new().unwrap();
        let json = r#"{
            "app_name": "deals",
            "config_version": 1,
            "deals_file": "archive/bargains.json",
            "backup_copies": 2
        }"#;
        utils::write(dir.path().join(CONFIG_JSON), json)
            .await
            .unwrap();

        let config = Config::load(dir.path()).await.unwrap();
        assert_eq!(
            config.deals_path(),
            dir.path().join("archive").join("bargains.json").as_path()
        );
        assert_eq!(config.backup_copies(), 2);
    }

    #[tokio::test]
    async fn test_config_file_invalid_app_name() {
        let dir = TempDir::new().unwrap();
        let json = r#"{ "app_name": "bargains", "config_version": 1 }"#;
        utils::write(dir.path().join(CONFIG_JSON), json)
            .await
            .unwrap();

        let err = Config::load(dir.path()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorType::Config);
        assert!(err.to_string().contains("Invalid app_name"));
    }

    #[tokio::test]
    async fn test_config_path_is_a_directory() {
        let dir = TempDir::new().unwrap();
        utils::make_dir(&dir.path().join(CONFIG_JSON)).await.unwrap();

        let err = Config::load(dir.path()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorType::Config);
    }

    #[tokio::test]
    async fn test_config_file_not_json() {
        let dir = TempDir::new().unwrap();
        utils::write(dir.path().join(CONFIG_JSON), "app_name = deals")
            .await
            .unwrap();

        let err = Config::load(dir.path()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorType::Config);
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
