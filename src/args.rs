//! These structs provide the CLI interface for the deals CLI.

use crate::model::Opinion;
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

/// deals: a small catalog of bargains, kept in a local JSON file.
///
/// Record deals you come across, vote on them, and browse them by score or by category. Run
/// without a subcommand to get the interactive menu.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Args {
    pub fn new(common: Common, command: Option<Command>) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    /// The subcommand to run. `None` means the interactive menu.
    pub fn command(&self) -> Option<&Command> {
        self.command.as_ref()
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Open the interactive menu. This is the default.
    Menu,
    /// Show all deals, best score first.
    List,
    /// Show every detail of one deal.
    Show(PositionArgs),
    /// Show the deals of one category. The category is matched ignoring case.
    Search(SearchArgs),
    /// Add a new deal.
    Create(CreateArgs),
    /// Vote on a deal.
    Vote(VoteArgs),
    /// Delete a deal.
    Delete(DeleteArgs),
    /// Show the top 3 deals and the number of deals per category.
    Stats,
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where the deals file is kept.
    #[arg(long, env = "DEALS_HOME", default_value = "data")]
    data_dir: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, data_dir: PathBuf) -> Self {
        Self {
            log_level,
            data_dir: data_dir.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn data_dir(&self) -> &DisplayPath {
        &self.data_dir
    }
}

/// (Not shown): Args for the `deals show` command.
#[derive(Debug, Parser, Clone)]
pub struct PositionArgs {
    /// The number of the deal, as shown in listings (starting at 1).
    position: NonZeroUsize,
}

impl PositionArgs {
    pub fn new(position: NonZeroUsize) -> Self {
        Self { position }
    }

    /// The zero-based storage index.
    pub fn index(&self) -> usize {
        self.position.get() - 1
    }
}

/// (Not shown): Args for the `deals search` command.
#[derive(Debug, Parser, Clone)]
pub struct SearchArgs {
    /// The category to show.
    category: String,
}

impl SearchArgs {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

/// (Not shown): Args for the `deals create` command.
#[derive(Debug, Parser, Clone)]
pub struct CreateArgs {
    /// The title of the deal.
    #[arg(long)]
    title: String,

    /// A free text description.
    #[arg(long, default_value = "")]
    description: String,

    /// The regular price. Must be a number greater than zero.
    #[arg(long)]
    initial_price: String,

    /// The discounted price. Must be a number greater than zero.
    #[arg(long)]
    discount_price: String,

    /// Where to find the deal.
    #[arg(long, default_value = "")]
    link: String,

    /// The category, e.g. Electronics.
    #[arg(long)]
    category: String,
}

impl CreateArgs {
    pub fn new(
        title: impl Into<String>,
        initial_price: impl Into<String>,
        discount_price: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            initial_price: initial_price.into(),
            discount_price: discount_price.into(),
            link: String::new(),
            category: category.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn initial_price(&self) -> &str {
        &self.initial_price
    }

    pub fn discount_price(&self) -> &str {
        &self.discount_price
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

/// (Not shown): Args for the `deals vote` command.
#[derive(Debug, Parser, Clone)]
pub struct VoteArgs {
    /// The number of the deal, as shown in listings (starting at 1).
    position: NonZeroUsize,

    /// "good" or "bad"
    opinion: Opinion,
}

impl VoteArgs {
    pub fn new(position: NonZeroUsize, opinion: Opinion) -> Self {
        Self { position, opinion }
    }

    /// The zero-based storage index.
    pub fn index(&self) -> usize {
        self.position.get() - 1
    }

    pub fn opinion(&self) -> Opinion {
        self.opinion
    }
}

/// (Not shown): Args for the `deals delete` command.
#[derive(Debug, Parser, Clone)]
pub struct DeleteArgs {
    /// The number of the deal, as shown in listings (starting at 1).
    position: NonZeroUsize,

    /// Delete without asking for confirmation.
    #[arg(long)]
    yes: bool,
}

impl DeleteArgs {
    pub fn new(position: NonZeroUsize, yes: bool) -> Self {
        Self { position, yes }
    }

    /// The zero-based storage index.
    pub fn index(&self) -> usize {
        self.position.get() - 1
    }

    pub fn yes(&self) -> bool {
        self.yes
    }
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn path(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_is_menu() {
        let args = Args::try_parse_from(["deals"]).unwrap();
        assert!(args.command().is_none());
        assert_eq!(args.common().log_level(), LevelFilter::INFO);
    }

    #[test]
    fn test_data_dir() {
        let args = Args::try_parse_from(["deals", "--data-dir", "/tmp/bargains", "list"]).unwrap();
        assert_eq!(args.common().data_dir().path(), Path::new("/tmp/bargains"));
        assert!(matches!(args.command(), Some(Command::List)));
    }

    #[test]
    fn test_vote_args() {
        let args = Args::try_parse_from(["deals", "vote", "2", "bad"]).unwrap();
        match args.command() {
            Some(Command::Vote(vote)) => {
                assert_eq!(vote.index(), 1);
                assert_eq!(vote.opinion(), Opinion::Bad);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(Args::try_parse_from(["deals", "vote", "0", "good"]).is_err());
        assert!(Args::try_parse_from(["deals", "vote", "1", "meh"]).is_err());
    }

    #[test]
    fn test_create_args() {
        let args = Args::try_parse_from([
            "deals",
            "create",
            "--title",
            "TV",
            "--initial-price",
            "500",
            "--discount-price",
            "400",
            "--category",
            "Electronics",
        ])
        .unwrap();
        match args.command() {
            Some(Command::Create(create)) => {
                assert_eq!(create.title(), "TV");
                assert_eq!(create.initial_price(), "500");
                assert_eq!(create.description(), "");
                assert_eq!(create.link(), "");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_delete_args() {
        let args = Args::try_parse_from(["deals", "delete", "3", "--yes"]).unwrap();
        match args.command() {
            Some(Command::Delete(delete)) => {
                assert_eq!(delete.index(), 2);
                assert!(delete.yes());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
