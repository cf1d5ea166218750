use crate::error::FolioError;
use std::time::Duration;

pub const DEFAULT_FIRESTORE_URL: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_DATABASE: &str = "(default)";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

pub const ENV_FIRESTORE_URL: &str = "FOLIO_FIRESTORE_URL";
pub const ENV_PROJECT: &str = "FOLIO_FIRESTORE_PROJECT";
pub const ENV_DATABASE: &str = "FOLIO_FIRESTORE_DATABASE";
pub const ENV_API_KEY: &str = "FOLIO_FIRESTORE_API_KEY";

/// Where the portfolio documents live
#[derive(Debug, Clone, PartialEq)]
pub struct FolioConfig {
    pub base_url: String,
    pub project_id: String,
    pub database: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FIRESTORE_URL.to_string(),
            project_id: String::new(),
            database: DEFAULT_DATABASE.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl FolioConfig {
    /// Defaults overridden by any `FOLIO_FIRESTORE_*` variables that are set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            base_url: non_empty(ENV_FIRESTORE_URL).unwrap_or(defaults.base_url),
            project_id: non_empty(ENV_PROJECT).unwrap_or(defaults.project_id),
            database: non_empty(ENV_DATABASE).unwrap_or(defaults.database),
            api_key: non_empty(ENV_API_KEY),
            timeout: defaults.timeout,
        }
    }

    /// `.../projects/{project}/databases/{database}/documents`
    pub fn documents_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents",
            self.base_url.trim_end_matches('/'),
            self.project_id,
            self.database
        )
    }

    pub fn validate(&self) -> Result<(), FolioError> {
        if self.project_id.trim().is_empty() {
            return Err(FolioError::Config(format!(
                "No Firestore project configured (set {} or pass --project)",
                ENV_PROJECT
            )));
        }
        if self.base_url.trim().is_empty() {
            return Err(FolioError::Config("Firestore base URL is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_is_empty() {
        let config = FolioConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, FolioConfig::default());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides() {
        let config = FolioConfig::from_lookup(lookup_from(&[
            (ENV_PROJECT, "my-portfolio"),
            (ENV_API_KEY, "secret"),
            (ENV_FIRESTORE_URL, "http://localhost:8080/v1/"),
            (ENV_DATABASE, "  "),
        ]));
        assert_eq!(config.project_id, "my-portfolio");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.database, DEFAULT_DATABASE);
        assert_eq!(
            config.documents_url(),
            "http://localhost:8080/v1/projects/my-portfolio/databases/(default)/documents"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_project_is_config_error() {
        match FolioConfig::default().validate() {
            Err(FolioError::Config(msg)) => assert!(msg.contains(ENV_PROJECT)),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
