//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use shopfront_catalog::Currency;
use shopfront_data::{JsonProductSource, MockProductSource, ProductSource};
use tracing::warn;

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

/// Where products come from for one command.
#[derive(Debug, Default)]
pub struct SourceOptions<'a> {
    /// JSON catalog overriding the configured one.
    pub catalog: Option<&'a str>,
    /// Make the built-in catalog reject every call.
    pub fail: bool,
    /// Skip simulated latency.
    pub instant: bool,
    /// Currency for the built-in catalog, overriding the configured one.
    pub currency: Option<Currency>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let config_names = ["shopfront.toml", ".shopfront.toml", "shopfront.json"];

        let mut current = start.to_path_buf();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some(config),
                        Err(e) => warn!(
                            path = %config_path.display(),
                            error = %format!("{:#}", e),
                            "ignoring unreadable config file"
                        ),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Build the product source for a command.
    pub fn product_source(&self, options: SourceOptions<'_>) -> Arc<dyn ProductSource> {
        let catalog = options
            .catalog
            .or(self.config.storefront.catalog.as_deref());

        if let Some(path) = catalog {
            let path = self.resolve_path(path);
            self.output.debug(&format!("Using catalog file {}", path.display()));
            if options.fail {
                self.output.warn("--fail only applies to the built-in catalog");
            }
            return Arc::new(JsonProductSource::new(path));
        }

        let latency = if options.instant {
            shopfront_data::LatencyConfig::none()
        } else {
            self.config.latency.to_latency()
        };
        let currency = options.currency.unwrap_or(self.config.storefront.currency);
        let mut source = MockProductSource::sample(currency).with_latency(latency);
        if options.fail {
            source = source.failing("simulated outage");
        }
        Arc::new(source)
    }

    /// Context with default config and JSON output, rooted at `cwd`.
    #[cfg(test)]
    pub(crate) fn detached(cwd: PathBuf) -> Self {
        Self {
            config: CliConfig::default(),
            output: Output::new(false, true),
            cwd,
        }
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
