//! # Core Module
//!
//! Stateless building blocks for charge-constraint generation.
//!
//! - **Data Model** ([`models`]) - Atom types, normalized pair keys, equations and output rows
//! - **Plain-Text I/O** ([`io`]) - COU-terms reader, constraint-file parser, row formatting
//! - **Pair Lookup** ([`index`]) - Sequential index over unordered atom-type pairs

pub mod index;
pub mod io;
pub mod models;
