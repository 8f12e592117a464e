use crate::core::index::pair_index::PairIndex;
use crate::core::models::atom_type::AtomType;
use crate::core::models::equation::{ConstraintEquation, TargetAtom};
use crate::core::models::row::OutputRow;
use tracing::debug;

/// The row built for one target atom, plus the term pairs that could not be resolved.
///
/// Each unresolved entry is `(term atom type, target atom type)` in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct Emission {
    pub row: OutputRow,
    pub unresolved: Vec<(AtomType, AtomType)>,
}

pub struct ConstraintEmitter<'a> {
    equation: &'a ConstraintEquation,
    index: &'a PairIndex,
}

impl<'a> ConstraintEmitter<'a> {
    pub fn new(equation: &'a ConstraintEquation, index: &'a PairIndex) -> Self {
        Self { equation, index }
    }

    /// Pairs every equation term with `target` and resolves it against the index.
    ///
    /// Unresolved terms are left out of the row; `chargeCount` counts only what resolved.
    pub fn emit(&self, target: &TargetAtom) -> Emission {
        let term_count = self.equation.terms.len();
        let mut coefficients = Vec::with_capacity(term_count);
        let mut indices = Vec::with_capacity(term_count);
        let mut unresolved = Vec::new();

        for term in &self.equation.terms {
            match self.index.lookup(&term.atom_type, &target.atom_type) {
                Some(index) => {
                    coefficients.push(term.coefficient);
                    indices.push(index);
                }
                None => {
                    debug!(
                        "No COU term for pair ({}, {}); dropping it from the row.",
                        term.atom_type, target.atom_type
                    );
                    unresolved.push((term.atom_type.clone(), target.atom_type.clone()));
                }
            }
        }

        Emission {
            row: OutputRow {
                coefficients,
                indices,
                constraint_value: target.charge * self.equation.scaling_factor,
                weight: self.equation.weight,
            },
            unresolved,
        }
    }
}
