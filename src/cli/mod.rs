//! CLI module
//!
//! Command-line interface for reading catalog feeds.
//!
//! # Commands
//!
//! - `products` - Read the full product index
//! - `updated` - Read the daily product index
//! - `categories` - Read the category reference list
//! - `suppliers` - Read the supplier reference list
//! - `product` - Look up a single product
//!
//! Records are written to stdout, logs to stderr.

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, WindowArgs};
pub use runner::Runner;
