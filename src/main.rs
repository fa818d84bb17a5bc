use clap::Parser;
use mini_deals::args::{Args, Command};
use mini_deals::commands;
use mini_deals::prompt::Console;
use mini_deals::{Config, DealStore, Result};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e}");
            ExitCode::FAILURE
        }
    }
}

pub async fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let config = Config::load(args.common().data_dir().path()).await?;
    let mut store = DealStore::load(&config).await;

    let _: () = match args.command() {
        None | Some(Command::Menu) => commands::menu(&mut store, &mut Console::stdio())
            .await?
            .print(),

        Some(Command::List) => commands::list(&store).print(),

        Some(Command::Show(show_args)) => commands::show(&store, show_args.index())?.print(),

        Some(Command::Search(search_args)) => {
            commands::search(&store, search_args.category()).print()
        }

        Some(Command::Create(create_args)) => {
            commands::create_from_input(&mut store, create_args)
                .await?
                .print()
        }

        Some(Command::Vote(vote_args)) => {
            commands::vote(&mut store, vote_args.index(), vote_args.opinion())
                .await?
                .print()
        }

        Some(Command::Delete(delete_args)) => commands::confirm_delete(
            &mut store,
            delete_args.index(),
            delete_args.yes(),
            &mut Console::stdio(),
        )
        .await?
        .print(),

        Some(Command::Stats) => commands::stats(&store).print(),
    };
    Ok(())
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!(
                "{}={},{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                level,
                env!("CARGO_BIN_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
