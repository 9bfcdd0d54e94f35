use clap::Parser;
use directories::ProjectDirs;
use libris::api::{CmdResult, LibraryApi};
use libris::config::LibrisConfig;
use libris::error::Result;
use libris::store::memory::InMemoryStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
mod cli;

use args::{Cli, Commands};
use cli::print::{print_books, print_late_fee, print_messages, print_patron_status};

const CONFIG_DIR_ENV: &str = "LIBRIS_CONFIG_DIR";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,libris={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut api = init_api(cli.config_dir)?;

    let result = match cli.command {
        Some(Commands::Add {
            title,
            author,
            isbn,
            copies,
        }) => api.add_book(&title, &author, &isbn, copies)?,
        Some(Commands::Borrow { patron_id, book_id }) => {
            api.borrow_book(Some(patron_id.as_str()), book_id)?
        }
        Some(Commands::Return { patron_id, book_id }) => {
            api.return_book(Some(patron_id.as_str()), book_id)?
        }
        Some(Commands::Fee { patron_id, book_id }) => {
            api.calculate_late_fee(&patron_id, book_id)?
        }
        Some(Commands::Search { query, field }) => api.search_books(&query, field.as_str())?,
        Some(Commands::Status { patron_id }) => api.get_patron_status(&patron_id)?,
        Some(Commands::List) | None => api.list_books()?,
    };

    print_result(&result);
    Ok(())
}

fn init_api(config_dir: Option<PathBuf>) -> Result<LibraryApi<InMemoryStore>> {
    let config = match resolve_config_dir(config_dir) {
        Some(dir) => LibrisConfig::load(dir)?,
        None => LibrisConfig::default(),
    };

    let mut api = LibraryApi::new(InMemoryStore::new(), config.policy());
    if config.seed_sample_catalog {
        api.seed_sample_catalog()?;
    }
    Ok(api)
}

/// `--config-dir`, then `LIBRIS_CONFIG_DIR`, then the platform config dir.
fn resolve_config_dir(flag: Option<PathBuf>) -> Option<PathBuf> {
    if flag.is_some() {
        return flag;
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    match ProjectDirs::from("org", "libris", "libris") {
        Some(dirs) => Some(dirs.config_dir().to_path_buf()),
        None => {
            tracing::warn!("could not determine a config directory, using defaults");
            None
        }
    }
}

fn print_result(result: &CmdResult) {
    print_books(&result.listed_books);
    print_books(&result.affected_books);
    if let Some(fee) = &result.late_fee {
        print_late_fee(fee);
    }
    if let Some(status) = &result.patron_status {
        print_patron_status(status);
    }
    print_messages(&result.messages);
}
