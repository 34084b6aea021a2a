//! facetdsl CLI library
//!
//! The binary's building blocks: argument parsing, configuration loading,
//! logging setup and one module per subcommand. Translation itself lives in
//! `facetdsl-query`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
