use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Connection settings for the explanation backend.
#[derive(Clone, PartialEq)]
pub struct ServiceConfig {
    /// Base URL of the Generative Language API, without a trailing path.
    pub endpoint: String,
    pub model: String,
    /// `None` means the service runs unconfigured and every request resolves
    /// to the missing-credential message.
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl ServiceConfig {
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

// The key never appears in logs or debug output.
impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Default)]
pub struct ServiceConfigBuilder {
    endpoint: Option<String>,
    model: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl ServiceConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
    /// Sets the credential. Blank keys are treated as absent.
    pub fn api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key.filter(|k| !k.trim().is_empty());
        self
    }
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<ServiceConfig, ConfigError> {
        let endpoint = self
            .endpoint
            .filter(|e| !e.trim().is_empty())
            .ok_or(ConfigError::MissingParameter("endpoint"))?;
        let model = self
            .model
            .filter(|m| !m.trim().is_empty())
            .ok_or(ConfigError::MissingParameter("model"))?;
        Ok(ServiceConfig {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model,
            api_key: self.api_key,
            timeout: self
                .timeout
                .ok_or(ConfigError::MissingParameter("timeout"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ServiceConfigBuilder {
        ServiceConfigBuilder::new()
            .endpoint(DEFAULT_ENDPOINT)
            .model(DEFAULT_MODEL)
            .timeout(DEFAULT_TIMEOUT)
    }

    #[test]
    fn build_succeeds_without_api_key() {
        let config = complete().build().unwrap();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.has_credential());
    }

    #[test]
    fn build_reports_first_missing_parameter() {
        assert_eq!(
            ServiceConfigBuilder::new().build().unwrap_err(),
            ConfigError::MissingParameter("endpoint")
        );
        assert_eq!(
            ServiceConfigBuilder::new()
                .endpoint(DEFAULT_ENDPOINT)
                .build()
                .unwrap_err(),
            ConfigError::MissingParameter("model")
        );
        assert_eq!(
            ServiceConfigBuilder::new()
                .endpoint(DEFAULT_ENDPOINT)
                .model("m")
                .build()
                .unwrap_err(),
            ConfigError::MissingParameter("timeout")
        );
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let config = complete().api_key(Some("   ".to_string())).build().unwrap();
        assert_eq!(config.api_key, None);
        let config = complete().api_key(Some("k".to_string())).build().unwrap();
        assert!(config.has_credential());
    }

    #[test]
    fn endpoint_trailing_slash_is_trimmed() {
        let config = complete().endpoint("http://localhost:8080/").build().unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080");
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = complete().api_key(Some("secret-key".to_string())).build().unwrap();
        let text = format!("{config:?}");
        assert!(!text.contains("secret-key"));
        assert!(text.contains("<redacted>"));
    }
}
