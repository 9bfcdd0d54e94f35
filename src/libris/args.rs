use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "libris")]
#[command(version, about = "A small library catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json (overrides LIBRIS_CONFIG_DIR and the platform config dir)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the catalog
    #[command(alias = "ls")]
    List,

    /// Add a book to the catalog
    Add {
        title: String,
        author: String,
        /// 13-digit ISBN
        isbn: String,
        /// Number of copies
        #[arg(allow_negative_numbers = true)]
        copies: i64,
    },

    /// Borrow a book
    Borrow {
        /// 6-digit patron ID
        patron_id: String,
        #[arg(allow_negative_numbers = true)]
        book_id: i64,
    },

    /// Return a borrowed book
    Return {
        patron_id: String,
        #[arg(allow_negative_numbers = true)]
        book_id: i64,
    },

    /// Show the late fee owed on a loan
    Fee {
        patron_id: String,
        #[arg(allow_negative_numbers = true)]
        book_id: i64,
    },

    /// Search the catalog
    Search {
        query: String,

        /// Field to search
        #[arg(long, value_enum, default_value_t = SearchField::Title)]
        field: SearchField,
    },

    /// Show a patron's status report
    Status { patron_id: String },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Isbn,
}

impl SearchField {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Isbn => "isbn",
        }
    }
}
