//! Command-line definitions.

pub mod args;
