use chemlab::engine::config::ServiceConfig;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub service: ServiceConfig,
    /// The environment variable the credential was looked up in.
    pub api_key_env: String,
    /// The config file that was loaded, if any.
    pub source: Option<PathBuf>,
}
