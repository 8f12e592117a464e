//! # Engine Module
//!
//! Turns a parsed constraint equation and a built [`PairIndex`](crate::core::index::pair_index::PairIndex)
//! into output rows.
//!
//! - **Configuration** ([`config`]) - Index base, empty-row policy and number formatting
//! - **Row Emission** ([`emitter`]) - Resolves each term against the index for one target atom
//! - **Error Handling** ([`error`]) - Fatal errors raised while loading inputs or writing rows

pub mod config;
pub mod emitter;
pub mod error;
