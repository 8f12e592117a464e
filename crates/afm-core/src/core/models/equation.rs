use super::atom_type::AtomType;

#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintTerm {
    pub coefficient: f64,
    pub atom_type: AtomType,
}

/// A linear relation over charge products, as read from the constraint-file header.
///
/// `terms` is never empty and keeps the order of the input line, which fixes the
/// column order of every emitted row.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintEquation {
    pub terms: Vec<ConstraintTerm>,
    pub scaling_factor: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TargetAtom {
    pub atom_type: AtomType,
    pub charge: f64,
}

impl TargetAtom {
    pub fn new(atom_type: AtomType, charge: Option<f64>) -> Self {
        Self {
            atom_type,
            charge: charge.unwrap_or(0.0),
        }
    }
}
