pub mod categorize;
pub mod config;
pub mod export;
pub mod summary;
pub mod view;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use splitcat::error::{Result, SplitcatError};
use splitcat::models::Category;
use splitcat::parser::Dialect;
use splitcat::session::Session;
use splitcat::settings::Settings;

#[derive(Parser)]
#[command(
    name = "splitcat",
    about = "Tag card transactions as Splitwise or personal. Nothing is stored."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where transactions come from and which ones are already tagged.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// CSV export: Posted Date, Reference Number, Payee, Address, Amount
    pub file: PathBuf,
    /// Ids to tag as Splitwise, e.g. 0,3,7
    #[arg(long, value_delimiter = ',')]
    pub splitwise: Vec<usize>,
    /// Ids to tag as personal
    #[arg(long, value_delimiter = ',')]
    pub personal: Vec<usize>,
    /// Read a sixth Category column written by `splitcat export`
    #[arg(long)]
    pub resume: bool,
    /// CSV dialect: naive or quoted (default from settings)
    #[arg(long)]
    pub dialect: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List transactions with filtering, search and sorting.
    View {
        #[command(flatten)]
        source: SourceArgs,
        /// all, splitwise, personal, uncategorized
        #[arg(long)]
        filter: Option<String>,
        /// Case-insensitive match on payee or address
        #[arg(long)]
        search: Option<String>,
        /// date, amount, payee, reference, address
        #[arg(long)]
        sort: Option<String>,
        /// asc or desc
        #[arg(long)]
        order: Option<String>,
    },
    /// Show count and total per category.
    Summary {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Write the categorized CSV.
    Export {
        #[command(flatten)]
        source: SourceArgs,
        /// Output path (default from settings)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Interactively tag uncategorized transactions, then export.
    Categorize {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show or change saved defaults.
    Config {
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        order: Option<String>,
        #[arg(long)]
        dialect: Option<String>,
        /// Default export file name
        #[arg(long = "export-name")]
        export_name: Option<String>,
    },
}

pub(crate) fn resolve_dialect(source: &SourceArgs, settings: &Settings) -> Result<Dialect> {
    match &source.dialect {
        Some(d) => d.parse(),
        None => settings.dialect(),
    }
}

/// Load the file and apply `--splitwise` / `--personal`. Naming an id that
/// is not in the file is an error here, unlike the silent core no-op.
pub(crate) fn open_session(source: &SourceArgs, settings: &Settings) -> Result<Session> {
    let mut session = Session::new(resolve_dialect(source, settings)?);
    session.load_path(&source.file, source.resume)?;

    let tags = source
        .splitwise
        .iter()
        .map(|id| (*id, Category::Splitwise))
        .chain(source.personal.iter().map(|id| (*id, Category::Personal)));
    for (id, category) in tags {
        if !session.set_category(id, category) {
            return Err(SplitcatError::UnknownTransaction(id));
        }
    }
    Ok(session)
}
