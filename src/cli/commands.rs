//! CLI commands and argument parsing

use crate::reader::{LimitBasis, PageWindow};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Icecat catalog feed reader
#[derive(Parser, Debug)]
#[command(name = "icecat-reader")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Account name
    #[arg(short, long, global = true, env = "ICECAT_USERNAME")]
    pub username: Option<String>,

    /// Account password
    #[arg(short, long, global = true, env = "ICECAT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Application key
    #[arg(long, global = true, env = "ICECAT_APPKEY", hide_env_values = true)]
    pub appkey: Option<String>,

    /// Catalog language code
    #[arg(short, long, global = true, env = "ICECAT_LANGUAGE")]
    pub language: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read the full product index
    Products {
        #[command(flatten)]
        window: WindowArgs,

        /// Fetch each product's detail document
        #[arg(long)]
        enrich: bool,
    },

    /// Read the daily index of updated products
    Updated {
        #[command(flatten)]
        window: WindowArgs,

        /// Fetch each product's detail document
        #[arg(long)]
        enrich: bool,
    },

    /// Read the category reference list
    Categories {
        #[command(flatten)]
        window: WindowArgs,
    },

    /// Read the supplier reference list
    Suppliers {
        #[command(flatten)]
        window: WindowArgs,
    },

    /// Look up one product by numeric id or detail path
    Product {
        /// Numeric Icecat id or detail document path
        identifier: String,
    },
}

/// Skip/limit window flags
#[derive(Args, Debug, Clone)]
pub struct WindowArgs {
    /// Entries to skip before delivering
    #[arg(long, default_value_t = 0)]
    pub skip: usize,

    /// Maximum records to deliver
    #[arg(long, default_value_t = crate::reader::DEFAULT_LIMIT)]
    pub limit: usize,

    /// Counter the limit bounds (delivered, examined)
    #[arg(long, default_value = "delivered")]
    pub limit_basis: LimitBasis,
}

impl WindowArgs {
    /// The window these flags describe
    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.skip, self.limit).with_basis(self.limit_basis)
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Indented JSON
    Pretty,
}
