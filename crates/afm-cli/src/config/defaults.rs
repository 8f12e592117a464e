use afmtools::core::index::pair_index::DEFAULT_INDEX_BASE;
use afmtools::engine::config::EmptyRowPolicy;

pub struct DefaultsConfig {
    pub index_base: usize,
    pub empty_rows: EmptyRowPolicy,
    pub precision: Option<usize>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            index_base: DEFAULT_INDEX_BASE,
            empty_rows: EmptyRowPolicy::Emit,
            precision: None,
        }
    }
}
