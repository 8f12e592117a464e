use crate::cli::Cli;
use crate::config::PartialRunConfig;
use crate::error::{CliError, Result};
use afmtools::workflows::charge_constraints::{self, InputSource, RunSummary};
use std::fs::File;
use std::io::{self, BufWriter};
use tracing::info;

/// Loads both inputs, then streams rows to the output and `_not_found_` lines to stderr.
///
/// The output file is only created once both inputs have parsed cleanly.
pub fn run(cli: &Cli) -> Result<RunSummary> {
    let partial_config = match &cli.config {
        Some(path) => PartialRunConfig::from_file(path)?,
        None => PartialRunConfig::default(),
    };
    let config = partial_config.merge_with_cli(cli)?;

    let cou_terms = InputSource::from_arg(&cli.cou_terms);
    let constraints = InputSource::from_arg(&cli.constraint_file);
    if cou_terms == InputSource::Stdin && constraints == InputSource::Stdin {
        return Err(CliError::Argument(
            "only one input can be read from standard input".to_string(),
        ));
    }

    let index = charge_constraints::load_pair_index(&cou_terms, config.index_base)?;
    let constraint_file = charge_constraints::load_constraint_file(&constraints)?;

    let mut diagnostics = io::stderr().lock();
    let summary = match &cli.output {
        Some(path) => {
            info!("Writing constraint rows to {:?}.", path);
            let mut output = BufWriter::new(File::create(path)?);
            charge_constraints::generate(
                &index,
                &constraint_file,
                &config,
                &mut output,
                &mut diagnostics,
            )?
        }
        None => {
            let mut output = io::stdout().lock();
            charge_constraints::generate(
                &index,
                &constraint_file,
                &config,
                &mut output,
                &mut diagnostics,
            )?
        }
    };
    Ok(summary)
}
