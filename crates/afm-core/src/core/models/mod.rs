pub mod atom_type;
pub mod equation;
pub mod row;
