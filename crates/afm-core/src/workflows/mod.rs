//! # Workflows Module
//!
//! Top-level entry points that run a complete job.
//!
//! - **Charge Constraints** ([`charge_constraints`]) - Reads a COU-terms list and a
//!   constraint-equation file and streams one constraint row per target atom.

pub mod charge_constraints;
