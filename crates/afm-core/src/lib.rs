//! # AFMTools Core Library
//!
//! Generates linear charge-product constraints for force-field fitting from a list of
//! Coulomb (COU) pair terms and a constraint-equation file.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Immutable data models (`AtomType`, `PairKey`,
//!   `ConstraintEquation`), the plain-text readers and writers, and the `PairIndex`.
//!
//! - **[`engine`]: The Logic Core.** Run configuration and the `ConstraintEmitter`, which turns
//!   one target atom into one output row.
//!
//! - **[`workflows`]: The Public API.** Ties the layers together into a complete run, from two
//!   input files to a stream of rows and diagnostics.

pub mod core;
pub mod engine;
pub mod workflows;
