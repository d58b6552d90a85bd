//! CLI configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::cart::DEFAULT_TAX_RATE;
use storefront_data::{DEFAULT_BASE_URL, DEFAULT_LIMIT};
use storefront_observability::{LogFormat, LogLevel};

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Catalog API settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Cart pricing settings.
    #[serde(default)]
    pub cart: CartConfig,

    /// Payment simulation settings.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    /// Parse config content, picking the format from the file name.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Check values that parse but cannot be used.
    pub fn validate(&self) -> Result<()> {
        if self.catalog.limit == 0 {
            anyhow::bail!("catalog.limit must be at least 1");
        }
        if !(0.0..1.0).contains(&self.cart.tax_rate) {
            anyhow::bail!("cart.tax_rate must be in [0, 1), got {}", self.cart.tax_rate);
        }
        Ok(())
    }
}

/// Catalog API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// API root; products are fetched from `{base_url}/products`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Products requested in the single fetch.
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Request timeout in seconds. No timeout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl CatalogConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            limit: default_limit(),
            timeout_secs: None,
        }
    }
}

/// Cart pricing settings. Prices are always US dollars, so unknown keys such
/// as `currency` are rejected instead of silently ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CartConfig {
    /// Sales tax rate applied to the subtotal.
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
}

fn default_tax_rate() -> f64 {
    DEFAULT_TAX_RATE
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
        }
    }
}

/// Payment simulation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// How long a submitted payment stays processing.
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,
}

fn default_processing_delay_ms() -> u64 {
    2000
}

impl CheckoutConfig {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: default_processing_delay_ms(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level; `RUST_LOG` overrides it.
    #[serde(default)]
    pub level: LogLevel,

    /// `human` or `json`.
    #[serde(default)]
    pub format: LogFormat,
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Storefront configuration

[catalog]
base_url = "{base_url}"
limit = {limit}
# timeout_secs = 10

[cart]
tax_rate = {tax_rate}

[checkout]
processing_delay_ms = {delay}

[logging]
level = "info"
format = "human"
"#,
        base_url = DEFAULT_BASE_URL,
        limit = DEFAULT_LIMIT,
        tax_rate = DEFAULT_TAX_RATE,
        delay = default_processing_delay_ms(),
    )
}
