//! CLI runner - executes commands

use crate::catalog::{CatalogClient, ProductMode};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{ReaderConfig, ENV_APPKEY, ENV_LANGUAGE, ENV_PASSWORD, ENV_USERNAME};
use crate::error::{Error, Result, ResultExt};
use crate::reader::Flow;
use crate::records::ProductDetail;
use serde::Serialize;
use std::io::{ErrorKind, Write};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
    cancel: CancellationToken,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            cancel: CancellationToken::new(),
        }
    }

    /// Abort the running command once `token` is cancelled
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        let client = CatalogClient::new(config)?.with_cancellation(self.cancel.clone());

        match &self.cli.command {
            Commands::Products { window, enrich } => {
                client
                    .fetch_products(window.window(), ProductMode::from(*enrich), |r| {
                        self.emit(&r)
                    })
                    .await
            }
            Commands::Updated { window, enrich } => {
                client
                    .fetch_updated_products(window.window(), ProductMode::from(*enrich), |r| {
                        self.emit(&r)
                    })
                    .await
            }
            Commands::Categories { window } => {
                client
                    .fetch_categories(window.window(), |c| self.emit(&c))
                    .await
            }
            Commands::Suppliers { window } => {
                client
                    .fetch_suppliers(window.window(), |s| self.emit(&s))
                    .await
            }
            Commands::Product { identifier } => self.product(&client, identifier).await,
        }
    }

    /// Config file, then environment, then flags
    pub fn load_config(&self) -> Result<ReaderConfig> {
        let config = match &self.cli.config {
            Some(path) => ReaderConfig::from_file(path)?,
            None => ReaderConfig::default(),
        };

        let cli = &self.cli;
        let config = config
            .with_env_overrides()
            .with_overrides_from(|key| match key {
                ENV_USERNAME => cli.username.clone(),
                ENV_PASSWORD => cli.password.clone(),
                ENV_APPKEY => cli.appkey.clone(),
                ENV_LANGUAGE => cli.language.clone(),
                _ => None,
            });

        config.validate()?;
        debug!("Using config: {:?}", config);
        Ok(config)
    }

    async fn product(&self, client: &CatalogClient, identifier: &str) -> Result<()> {
        match client.fetch_product(identifier).await? {
            Some(ProductDetail::Json(body)) => self.write_line(&body).map(|_| ()),
            Some(detail) => self.emit(&detail).map(|_| ()),
            None => Err(Error::Other(format!("Product not found: {identifier}"))),
        }
    }

    /// Write one record; a closed stdout ends the read
    fn emit<T: Serialize>(&self, record: &T) -> Result<Flow> {
        let line = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(record),
            OutputFormat::Pretty => serde_json::to_string_pretty(record),
        }
        .context("Failed to serialize record")?;
        self.write_line(&line)
    }

    fn write_line(&self, line: &str) -> Result<Flow> {
        let mut stdout = std::io::stdout().lock();
        match writeln!(stdout, "{line}") {
            Ok(()) => Ok(Flow::Continue),
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!("stdout closed, stopping");
                Ok(Flow::Stop)
            }
            Err(e) => Err(Error::Io(e)),
        }
    }
}
