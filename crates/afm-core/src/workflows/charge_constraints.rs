use crate::core::index::pair_index::PairIndex;
use crate::core::io::constraint::ConstraintFile;
use crate::core::io::cou;
use crate::core::io::writer::{RowWriter, not_found_line};
use crate::engine::config::{EmitterConfig, EmptyRowPolicy};
use crate::engine::emitter::ConstraintEmitter;
use crate::engine::error::EngineError;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Where an input file is read from. `-` on the command line means standard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    pub fn from_arg(arg: &Path) -> Self {
        if arg == Path::new("-") {
            Self::Stdin
        } else {
            Self::File(arg.to_path_buf())
        }
    }

    pub fn name(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "<stdin>".to_string(),
        }
    }

    fn open(&self) -> Result<Box<dyn BufRead>, EngineError> {
        match self {
            Self::File(path) => {
                let file = File::open(path).map_err(|e| EngineError::Open {
                    source_name: self.name(),
                    source: e,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub pair_count: usize,
    pub rows_written: usize,
    pub rows_skipped: usize,
    pub unresolved_terms: usize,
}

/// Runs the whole job: builds the pair index, parses the constraint file, then streams rows
/// to `output` and `_not_found_` lines to `diagnostics`.
///
/// Both inputs are fully parsed before the first row is written, so a malformed line
/// anywhere leaves `output` untouched.
#[instrument(skip_all, name = "charge_constraint_workflow")]
pub fn run(
    cou_terms: &InputSource,
    constraints: &InputSource,
    config: &EmitterConfig,
    output: &mut impl Write,
    diagnostics: &mut impl Write,
) -> Result<RunSummary, EngineError> {
    let index = load_pair_index(cou_terms, config.index_base)?;
    let constraint_file = load_constraint_file(constraints)?;
    generate(&index, &constraint_file, config, output, diagnostics)
}

pub fn load_pair_index(source: &InputSource, base: usize) -> Result<PairIndex, EngineError> {
    let mut reader = source.open()?;
    let pairs = cou::read_pairs(&mut reader).map_err(|e| EngineError::CouTerms {
        source_name: source.name(),
        source: e,
    })?;
    let index = PairIndex::build(pairs, base).map_err(|e| EngineError::PairIndex {
        source_name: source.name(),
        source: e,
    })?;
    info!(
        "Indexed {} distinct COU pairs from '{}'.",
        index.len(),
        source.name()
    );
    Ok(index)
}

pub fn load_constraint_file(source: &InputSource) -> Result<ConstraintFile, EngineError> {
    let mut reader = source.open()?;
    let file = ConstraintFile::read_from(&mut reader).map_err(|e| EngineError::ConstraintFile {
        source_name: source.name(),
        source: e,
    })?;
    info!(
        "Loaded a {}-term equation and {} target atoms from '{}'.",
        file.equation.terms.len(),
        file.targets.len(),
        source.name()
    );
    Ok(file)
}

/// Streams one row per target atom, in input order.
pub fn generate(
    index: &PairIndex,
    constraint_file: &ConstraintFile,
    config: &EmitterConfig,
    output: &mut impl Write,
    diagnostics: &mut impl Write,
) -> Result<RunSummary, EngineError> {
    let emitter = ConstraintEmitter::new(&constraint_file.equation, index);
    let mut writer = RowWriter::new(output, config.format);
    let mut summary = RunSummary {
        pair_count: index.len(),
        ..Default::default()
    };

    for target in &constraint_file.targets {
        let emission = emitter.emit(target);

        for (a, b) in &emission.unresolved {
            writeln!(diagnostics, "{}", not_found_line(a, b)).map_err(EngineError::Write)?;
        }
        summary.unresolved_terms += emission.unresolved.len();

        if emission.row.is_empty() && config.empty_rows == EmptyRowPolicy::Skip {
            debug!("Skipping row for '{}': no term resolved.", target.atom_type);
            summary.rows_skipped += 1;
            continue;
        }
        writer.write_row(&emission.row).map_err(EngineError::Write)?;
        summary.rows_written += 1;
    }

    writer.flush().map_err(EngineError::Write)?;
    diagnostics.flush().map_err(EngineError::Write)?;

    info!(
        "Wrote {} rows ({} skipped, {} unresolved terms).",
        summary.rows_written, summary.rows_skipped, summary.unresolved_terms
    );
    Ok(summary)
}
