//! Plain-text readers and writers for the two input formats and the row output.
//!
//! Both input formats share the same line rules: blank lines and lines whose first
//! non-whitespace character is `#` carry no data, and fields are whitespace-separated.

pub mod constraint;
pub mod cou;
pub mod error;
pub mod text;
pub mod writer;
