/// One constraint row, produced per target atom.
///
/// `coefficients` and `indices` are parallel: entry `i` of each comes from the same
/// resolved term.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow {
    pub coefficients: Vec<f64>,
    pub indices: Vec<usize>,
    pub constraint_value: f64,
    pub weight: f64,
}

impl OutputRow {
    pub fn charge_count(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.coefficients
            .iter()
            .copied()
            .zip(self.indices.iter().copied())
    }
}
