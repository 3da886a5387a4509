use std::path::{Path, PathBuf};

use docs_common::catalog;
use docs_common::store::DocumentStore;

use crate::error::AppError;

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// JSON catalog to serve instead of the built-in Flutter catalog.
    pub catalog_path: Option<String>,
    /// Bind address for the HTML site (e.g. "127.0.0.1:3000"). `None` disables it.
    pub http_addr: Option<String>,
    /// Serve MCP over TCP on this address instead of stdio.
    pub mcp_tcp_addr: Option<String>,
    /// Skip the MCP server entirely and only serve the HTML site.
    pub disable_mcp: bool,
}

impl Config {
    /// All optional:
    /// - `FLUTTER_DOCS_CATALOG`: path to a JSON catalog file
    /// - `FLUTTER_DOCS_HTTP_ADDR`: bind address for the HTML site
    /// - `MCP_TCP_LISTEN_ADDR`: serve MCP on TCP rather than stdio
    /// - `FLUTTER_DOCS_DISABLE_MCP`: `1` or `true` to run the site only
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let catalog_path = non_empty("FLUTTER_DOCS_CATALOG");
        if let Some(path) = &catalog_path {
            if !Path::new(path).exists() {
                return Err(AppError::Config(format!("catalog file not found: {path}")));
            }
        }

        let disable_mcp = non_empty("FLUTTER_DOCS_DISABLE_MCP")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let http_addr = non_empty("FLUTTER_DOCS_HTTP_ADDR");
        if disable_mcp && http_addr.is_none() {
            return Err(AppError::Config(
                "FLUTTER_DOCS_DISABLE_MCP requires FLUTTER_DOCS_HTTP_ADDR".to_string(),
            ));
        }

        Ok(Self {
            catalog_path,
            http_addr,
            mcp_tcp_addr: non_empty("MCP_TCP_LISTEN_ADDR"),
            disable_mcp,
        })
    }

    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog_path.as_deref().map(PathBuf::from)
    }

    /// Loads the configured catalog, or the built-in one when none is set.
    pub fn load_store(&self) -> Result<DocumentStore, AppError> {
        match self.catalog_path() {
            Some(path) => {
                let json = std::fs::read_to_string(&path).map_err(|e| {
                    AppError::Config(format!("failed to read {}: {e}", path.display()))
                })?;
                Ok(DocumentStore::from_json(&json)?)
            }
            None => Ok(catalog::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_builtin_catalog_over_stdio() {
        let config = config(&[]).unwrap();
        assert!(config.catalog_path.is_none());
        assert!(config.http_addr.is_none());
        assert!(config.mcp_tcp_addr.is_none());
        assert!(!config.disable_mcp);

        let store = config.load_store().unwrap();
        assert!(store.category("getting-started").is_some());
    }

    #[test]
    fn missing_catalog_file_is_rejected() {
        let err = config(&[("FLUTTER_DOCS_CATALOG", "/definitely/not/here.json")]).unwrap_err();
        assert!(matches!(err, AppError::Config(msg) if msg.contains("not found")));
    }

    #[test]
    fn disabling_mcp_requires_the_site() {
        assert!(config(&[("FLUTTER_DOCS_DISABLE_MCP", "true")]).is_err());

        let config = config(&[
            ("FLUTTER_DOCS_DISABLE_MCP", "1"),
            ("FLUTTER_DOCS_HTTP_ADDR", "127.0.0.1:3000"),
        ])
        .unwrap();
        assert!(config.disable_mcp);
        assert_eq!(config.http_addr.as_deref(), Some("127.0.0.1:3000"));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config(&[("MCP_TCP_LISTEN_ADDR", "  "), ("FLUTTER_DOCS_CATALOG", "")]).unwrap();
        assert!(config.mcp_tcp_addr.is_none());
        assert!(config.catalog_path.is_none());
    }
}
