use chemlab::engine::config::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT};

pub struct DefaultsConfig {
    pub endpoint: String,
    pub model: String,
    pub timeout_secs: u64,
    pub api_key_env: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            api_key_env: "API_KEY".to_string(),
        }
    }
}
