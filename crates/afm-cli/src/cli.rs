use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "AFMTools Developers",
    version,
    about = "ff_gen_charge_constr - Generate charge-product constraint rows for force-field fitting from a COU-terms list and a constraint equation.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// COU-terms file: one whitespace-separated atom-type pair per line.
    #[arg(value_name = "COU_TERMS")]
    pub cou_terms: PathBuf,

    /// Constraint-equation file, or '-' to read it from standard input.
    #[arg(value_name = "CONSTRAINT_FILE")]
    pub constraint_file: PathBuf,

    /// Write rows to this file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a run configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the first index assigned to COU pairs (default 1).
    #[arg(long, value_name = "INT")]
    pub index_base: Option<usize>,

    /// Drop rows whose terms all failed to resolve (diagnostics are still written).
    #[arg(long)]
    pub skip_empty_rows: bool,

    /// Print floats with a fixed number of decimals instead of the shortest form.
    #[arg(long, value_name = "INT")]
    pub precision: Option<usize>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S output.empty-rows=skip
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output; rows and '_not_found_' lines are still written
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
