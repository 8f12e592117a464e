pub mod defaults;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use afmtools::engine::config::{EmitterConfig, EmitterConfigBuilder, EmptyRowPolicy};
use defaults::DefaultsConfig;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialIndexConfig {
    base: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    #[serde(rename = "empty-rows")]
    empty_rows: Option<EmptyRowPolicy>,
    precision: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialRunConfig {
    index: Option<PartialIndexConfig>,
    output: Option<PartialOutputConfig>,
}

impl PartialRunConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Resolves the final run configuration. Precedence: CLI flag, `--set`, file, default.
    pub fn merge_with_cli(mut self, args: &Cli) -> Result<EmitterConfig> {
        self.apply_set_values(&args.set_values)?;

        let defaults = DefaultsConfig::default();
        let index = self.index.take().unwrap_or_default();
        let output = self.output.take().unwrap_or_default();

        let empty_rows = if args.skip_empty_rows {
            EmptyRowPolicy::Skip
        } else {
            output.empty_rows.unwrap_or(defaults.empty_rows)
        };

        let config = EmitterConfigBuilder::new()
            .index_base(args.index_base.or(index.base).unwrap_or(defaults.index_base))
            .empty_rows(empty_rows)
            .precision(args.precision.or(output.precision).or(defaults.precision))
            .build();
        debug!("Resolved run configuration: {:?}", config);
        Ok(config)
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;

            match key {
                "index.base" => {
                    self.index.get_or_insert_with(Default::default).base =
                        Some(value_str.parse().map_err(|_| {
                            CliError::Config(format!(
                                "Invalid integer value for {}: {}",
                                key, value_str
                            ))
                        })?);
                }
                "output.empty-rows" => {
                    let policy = match value_str {
                        "emit" => EmptyRowPolicy::Emit,
                        "skip" => EmptyRowPolicy::Skip,
                        _ => {
                            return Err(CliError::Config(format!(
                                "Invalid value for {}: '{}'. Expected 'emit' or 'skip'.",
                                key, value_str
                            )));
                        }
                    };
                    self.output.get_or_insert_with(Default::default).empty_rows = Some(policy);
                }
                "output.precision" => {
                    self.output.get_or_insert_with(Default::default).precision =
                        Some(value_str.parse().map_err(|_| {
                            CliError::Config(format!(
                                "Invalid integer value for {}: {}",
                                key, value_str
                            ))
                        })?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use once_cell::sync::Lazy;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    static TEST_DIR: Lazy<TempDir> = Lazy::new(|| tempdir().expect("Failed to create temp dir"));

    fn write_config_file(name: &str, content: &str) -> PathBuf {
        let file_path = TEST_DIR.path().join(name);
        fs::write(&file_path, content).unwrap();
        file_path
    }

    fn cli_with(extra: &[&str]) -> Cli {
        let mut args = vec!["ff_gen_charge_constr", "terms.cou", "eq.constr"];
        args.extend_from_slice(extra);
        Cli::parse_from(args)
    }

    #[test]
    fn empty_config_resolves_to_defaults() {
        let config = PartialRunConfig::default()
            .merge_with_cli(&cli_with(&[]))
            .unwrap();
        assert_eq!(config, EmitterConfig::default());
    }

    #[test]
    fn load_from_file_and_merge_with_defaults() {
        let config_path = write_config_file(
            "file_values.toml",
            r#"
            [index]
            base = 0

            [output]
            empty-rows = "skip"
            "#,
        );
        let config = PartialRunConfig::from_file(&config_path)
            .unwrap()
            .merge_with_cli(&cli_with(&[]))
            .unwrap();

        assert_eq!(config.index_base, 0);
        assert_eq!(config.empty_rows, EmptyRowPolicy::Skip);
        assert_eq!(config.format.precision, None);
    }

    #[test]
    fn cli_args_override_set_values_and_file_values() {
        let config_path = write_config_file(
            "override.toml",
            r#"
            [index]
            base = 0 # Will be overridden

            [output]
            precision = 2 # Will be overridden by --set
            "#,
        );
        let cli = cli_with(&["--index-base", "5", "-S", "output.precision=6"]);
        let config = PartialRunConfig::from_file(&config_path)
            .unwrap()
            .merge_with_cli(&cli)
            .unwrap();

        assert_eq!(config.index_base, 5);
        assert_eq!(config.format.precision, Some(6));

        let cli = cli_with(&["--precision", "1", "-S", "output.precision=6"]);
        let config = PartialRunConfig::from_file(&config_path)
            .unwrap()
            .merge_with_cli(&cli)
            .unwrap();
        assert_eq!(config.format.precision, Some(1));
    }

    #[test]
    fn skip_flag_wins_over_file_policy() {
        let config_path = write_config_file(
            "emit.toml",
            r#"
            [output]
            empty-rows = "emit"
            "#,
        );
        let config = PartialRunConfig::from_file(&config_path)
            .unwrap()
            .merge_with_cli(&cli_with(&["--skip-empty-rows"]))
            .unwrap();
        assert_eq!(config.empty_rows, EmptyRowPolicy::Skip);
    }

    #[test]
    fn set_empty_rows_accepts_only_known_policies() {
        let config = PartialRunConfig::default()
            .merge_with_cli(&cli_with(&["-S", "output.empty-rows=skip"]))
            .unwrap();
        assert_eq!(config.empty_rows, EmptyRowPolicy::Skip);

        let result =
            PartialRunConfig::default().merge_with_cli(&cli_with(&["-S", "output.empty-rows=drop"]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn malformed_set_values_are_rejected() {
        for bad in ["index.base", "index.base=-1", "output.colour=red"] {
            let result = PartialRunConfig::default().merge_with_cli(&cli_with(&["-S", bad]));
            assert!(
                matches!(result, Err(CliError::Config(_))),
                "expected config error for '{bad}'"
            );
        }
    }

    #[test]
    fn unknown_keys_in_file_are_rejected() {
        let config_path = write_config_file(
            "unknown.toml",
            r#"
            [output]
            decimals = 3
            "#,
        );
        let result = PartialRunConfig::from_file(&config_path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let result = PartialRunConfig::from_file(&TEST_DIR.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
