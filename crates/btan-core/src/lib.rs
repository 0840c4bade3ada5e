#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Shared helpers for btan.
//!
//! - [`Colors`]: ANSI palette used by the table dump and CLI output
//! - [`utils`]: column and list formatting for fixed-width table rendering

mod colors;
pub mod utils;

#[cfg(test)]
mod utils_tests;

pub use colors::Colors;
