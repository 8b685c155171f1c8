//! Store Configuration
//!
//! Where the remote document store lives and how to authenticate to it.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// Local Realtime Database emulator
pub const DEFAULT_DATABASE_URL: &str = "http://127.0.0.1:9000";
pub const DEFAULT_NAMESPACE: &str = "tab-marks";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the database, without trailing slash
    pub database_url: String,
    /// Passed as the `auth` query parameter when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    /// Passed as the `ns` query parameter (emulator namespaces)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            auth_token: None,
            namespace: Some(DEFAULT_NAMESPACE.to_string()),
        }
    }
}

impl StoreConfig {
    /// Overlay optional values on the defaults. Blank values are ignored.
    ///
    /// A custom database URL drops the default emulator namespace.
    pub fn from_values(
        database_url: Option<&str>,
        auth_token: Option<&str>,
        namespace: Option<&str>,
    ) -> Self {
        let mut config = Self::default();
        if let Some(url) = non_blank(database_url) {
            config.database_url = url.trim_end_matches('/').to_string();
            config.namespace = None;
        }
        if let Some(token) = non_blank(auth_token) {
            config.auth_token = Some(token.to_string());
        }
        if let Some(ns) = non_blank(namespace) {
            config.namespace = Some(ns.to_string());
        }
        config
    }

    pub fn validate(&self) -> DomainResult<()> {
        let url = self.database_url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(DomainError::InvalidInput(format!(
                "database_url must be an http(s) URL, got {:?}",
                url
            )));
        }
        if url.ends_with('/') {
            return Err(DomainError::InvalidInput("database_url must not end with '/'".into()));
        }
        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_emulator() {
        let config = StoreConfig::default();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.namespace.as_deref(), Some(DEFAULT_NAMESPACE));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_url_drops_emulator_namespace() {
        let config = StoreConfig::from_values(Some("https://marks.example.app/"), Some("tok"), None);
        assert_eq!(config.database_url, "https://marks.example.app");
        assert_eq!(config.auth_token.as_deref(), Some("tok"));
        assert_eq!(config.namespace, None);
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = StoreConfig::from_values(Some("  "), Some(""), None);
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_validate_rejects_non_http() {
        let config = StoreConfig { database_url: "ftp://x".into(), ..Default::default() };
        assert!(matches!(config.validate(), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_config_deserializes_with_optional_fields() {
        let config: StoreConfig =
            serde_json::from_str(r#"{ "database_url": "https://db.example" }"#).unwrap();
        assert_eq!(config.auth_token, None);
        assert_eq!(config.namespace, None);
    }
}
