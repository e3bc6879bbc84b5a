use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "isofrac - isotope mass fractions of molecules, with bounds from standard atomic weight limits.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report the mass fraction of one or more isotopes in a single molecule.
    Fraction(FractionArgs),
    /// Weighted isotope fractions over a distribution of hydrocarbon chain lengths.
    Distribution(DistributionArgs),
    /// Print the isotope reference table.
    Table,
}

/// Arguments for the `fraction` subcommand.
#[derive(Args, Debug)]
pub struct FractionArgs {
    /// Isotope to evaluate (e.g., '2H'). Can be used multiple times.
    #[arg(short, long = "isotope", required = true, value_name = "ISOTOPE")]
    pub isotopes: Vec<String>,

    /// Element count of the molecule (e.g., 'H=6'). Can be used multiple times.
    #[arg(short, long = "element", required = true, value_name = "SYMBOL=COUNT")]
    pub elements: Vec<String>,
}

/// Arguments for the `distribution` subcommand.
#[derive(Args, Debug, Default)]
pub struct DistributionArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the isotopes to evaluate. The first one is the reference isotope.
    #[arg(short, long = "isotope", value_name = "ISOTOPE")]
    pub isotopes: Vec<String>,

    /// Override the number of hydrogen atoms removed from 2 x (carbon count).
    #[arg(long, value_name = "INT")]
    pub hydrogen_deficit: Option<u32>,

    /// Override the weight of one chain length (e.g., '17=0.306'). Can be used multiple times.
    #[arg(short, long = "weight", value_name = "NC=WEIGHT")]
    pub weights: Vec<String>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S composition.16=0.07
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
