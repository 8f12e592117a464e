use crate::core::index::pair_index::DEFAULT_INDEX_BASE;
use crate::core::io::writer::RowFormat;
use serde::Deserialize;

/// What to do with a row whose terms all failed to resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyRowPolicy {
    #[default]
    Emit,
    Skip,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmitterConfig {
    pub index_base: usize,
    pub empty_rows: EmptyRowPolicy,
    pub format: RowFormat,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        EmitterConfigBuilder::new().build()
    }
}

#[derive(Default)]
pub struct EmitterConfigBuilder {
    index_base: Option<usize>,
    empty_rows: Option<EmptyRowPolicy>,
    precision: Option<usize>,
}

impl EmitterConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index_base(mut self, base: usize) -> Self {
        self.index_base = Some(base);
        self
    }
    pub fn empty_rows(mut self, policy: EmptyRowPolicy) -> Self {
        self.empty_rows = Some(policy);
        self
    }
    pub fn precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    pub fn build(self) -> EmitterConfig {
        EmitterConfig {
            index_base: self.index_base.unwrap_or(DEFAULT_INDEX_BASE),
            empty_rows: self.empty_rows.unwrap_or_default(),
            format: RowFormat::new(self.precision),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_output() {
        let config = EmitterConfig::default();
        assert_eq!(config.index_base, 1);
        assert_eq!(config.empty_rows, EmptyRowPolicy::Emit);
        assert_eq!(config.format.precision, None);
    }

    #[test]
    fn builder_overrides_every_field() {
        let config = EmitterConfigBuilder::new()
            .index_base(0)
            .empty_rows(EmptyRowPolicy::Skip)
            .precision(Some(6))
            .build();
        assert_eq!(config.index_base, 0);
        assert_eq!(config.empty_rows, EmptyRowPolicy::Skip);
        assert_eq!(config.format, RowFormat::new(Some(6)));
    }
}
