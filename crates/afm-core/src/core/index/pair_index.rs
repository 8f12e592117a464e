use crate::core::models::atom_type::{AtomType, PairKey};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// First index handed out when no other base is configured.
pub const DEFAULT_INDEX_BASE: usize = 1;

/// Sequential lookup from unordered atom-type pairs to charge-product indices.
///
/// Indices are dense: `base, base + 1, ..., base + len - 1`, assigned in order of first
/// appearance. The index is immutable once built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("Index base {base} leaves no room for pair #{position}: indices would exceed {max}")]
    BaseOverflow {
        base: usize,
        position: usize,
        max: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairIndex {
    base: usize,
    entries: HashMap<PairKey, usize>,
}

impl PairIndex {
    /// Builds the index from declared pairs. Re-declaring a pair, in either order, keeps
    /// its original index. Fails if a new index would not fit in `usize`.
    pub fn build<I>(pairs: I, base: usize) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = (AtomType, AtomType)>,
    {
        let mut entries: HashMap<PairKey, usize> = HashMap::new();
        for (a, b) in pairs {
            let key = PairKey::new(a, b);
            if entries.contains_key(&key) {
                debug!("Duplicate COU term '{}' keeps its index.", key);
                continue;
            }
            let next = base
                .checked_add(entries.len())
                .ok_or(IndexError::BaseOverflow {
                    base,
                    position: entries.len() + 1,
                    max: usize::MAX,
                })?;
            entries.insert(key, next);
        }
        Ok(Self { base, entries })
    }

    pub fn lookup(&self, a: &AtomType, b: &AtomType) -> Option<usize> {
        self.entries
            .get(&PairKey::new(a.clone(), b.clone()))
            .copied()
    }

    pub fn base(&self) -> usize {
        self.base
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(pair, index)` in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (&PairKey, usize)> {
        let mut ordered: Vec<_> = self.entries.iter().map(|(k, &v)| (k, v)).collect();
        ordered.sort_unstable_by_key(|&(_, index)| index);
        ordered.into_iter()
    }
}
