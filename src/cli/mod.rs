//! Command-line argument parsing for the inspection binary

pub mod args;

pub use args::Args;
