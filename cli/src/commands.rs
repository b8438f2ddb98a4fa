pub mod countries;
pub mod generate;
pub mod prefixes;

use std::fmt;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use contactr_common::config::{Config, Theme};
use contactr_common::country::CountryId;
use contactr_common::sourcing::SourcingMode;
use contactr_core::prefixes::PrefixTable;

use crate::terminal::progress;

#[derive(Parser)]
#[command(name = "contactr")]
#[command(about = "A synthetic contact generator.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet output; repeat to also drop listings
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Terminal palette (defaults to the persisted choice)
    #[arg(long, global = true)]
    pub theme: Option<Theme>,

    /// Settings file location (defaults to the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub settings_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate contacts for a country
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Show the supported country rule table
    #[command(alias = "c")]
    Countries,
    /// List candidate NANPA prefixes for an area code
    #[command(alias = "p")]
    Prefixes(PrefixesArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Country to format numbers for (US, CA, UK, AU, DE)
    #[arg(short, long)]
    pub country: Option<CountryId>,

    /// Area code; exactly 3 digits for US/CA, free-form elsewhere
    #[arg(short, long)]
    pub area_code: Option<String>,

    /// Prefix sourcing mode: a/algorithmic, b/registry, c/hybrid
    #[arg(short, long)]
    pub mode: Option<SourcingMode>,

    /// How many contacts to generate (1 to 20000)
    #[arg(short = 'n', long)]
    pub count: Option<u32>,

    /// Fixed central-office prefix for US/CA numbers
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Output format
    #[arg(short, long, default_value_t = ExportFormat::Plain)]
    pub format: ExportFormat,

    /// Write to this path instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// NANPA prefix lookup file
    #[arg(long, value_name = "PATH")]
    pub prefix_file: Option<PathBuf>,

    /// Seed the generator for a reproducible batch
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args)]
pub struct PrefixesArgs {
    /// Country whose plan the area code belongs to
    #[arg(short, long)]
    pub country: Option<CountryId>,

    /// Area code to list candidates for
    #[arg(short, long)]
    pub area_code: Option<String>,

    /// Prefix sourcing mode: a/algorithmic, b/registry, c/hybrid
    #[arg(short, long)]
    pub mode: Option<SourcingMode>,

    /// NANPA prefix lookup file
    #[arg(long, value_name = "PATH")]
    pub prefix_file: Option<PathBuf>,

    /// List every candidate instead of a screenful
    #[arg(long)]
    pub all: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One line per contact, name then phone
    Plain,
    /// Comma-separated values with a header row
    Csv,
    /// vCard 3.0
    Vcf,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Plain => "plain",
            Self::Csv => "csv",
            Self::Vcf => "vcf",
        };
        write!(f, "{name}")
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Awaited once before a command runs; absence or load failure leaves the
/// table empty and the sourcing modes fall back from there.
pub(crate) async fn load_prefix_table(path_arg: Option<PathBuf>, cfg: &Config) -> PrefixTable {
    let Some(path) = path_arg.or_else(PrefixTable::default_path) else {
        return PrefixTable::empty();
    };

    let spinner = progress::load_spinner("Loading prefix database…", cfg.quiet);
    let table = PrefixTable::load(&path).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    table
}
