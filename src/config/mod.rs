//! Configuration loading and management

use crate::actions::RedirectPaths;
use anyhow::Result;
use serde::{Deserialize, Serialize};

fn default_listen_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_invoices_path() -> String {
    "/dashboard/invoices".to_string()
}

fn default_customers_path() -> String {
    "/dashboard/customers".to_string()
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP surface binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// PostgreSQL connection string; absent means the in-memory store
    #[serde(default)]
    pub database_url: Option<String>,

    /// Invoices listing path (redirect target and cache tag)
    #[serde(default = "default_invoices_path")]
    pub invoices_path: String,

    /// Customers listing path (redirect target and cache tag)
    #[serde(default = "default_customers_path")]
    pub customers_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            database_url: None,
            invoices_path: default_invoices_path(),
            customers_path: default_customers_path(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Apply environment overrides (`BILLET_LISTEN_ADDR`, `DATABASE_URL`)
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(addr) = std::env::var("BILLET_LISTEN_ADDR") {
            self.listen_addr = addr;
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.database_url = Some(url);
        }
        self
    }

    /// Redirect/invalidation paths for the action layer
    pub fn redirect_paths(&self) -> RedirectPaths {
        RedirectPaths {
            invoices: self.invoices_path.clone(),
            customers: self.customers_path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.listen_addr, "127.0.0.1:3000");
        assert_eq!(config.invoices_path, "/dashboard/invoices");
        assert_eq!(config.customers_path, "/dashboard/customers");
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = AppConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = AppConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed.listen_addr, config.listen_addr);
        assert_eq!(parsed.invoices_path, config.invoices_path);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let parsed = AppConfig::from_yaml_str("listen_addr: 0.0.0.0:8080\n").unwrap();
        assert_eq!(parsed.listen_addr, "0.0.0.0:8080");
        assert_eq!(parsed.invoices_path, "/dashboard/invoices");
    }

    #[test]
    fn test_redirect_paths() {
        let config = AppConfig::from_yaml_str(
            "invoices_path: /app/invoices\ncustomers_path: /app/customers\n",
        )
        .unwrap();
        let paths = config.redirect_paths();
        assert_eq!(paths.invoices, "/app/invoices");
        assert_eq!(paths.customers, "/app/customers");
    }
}
