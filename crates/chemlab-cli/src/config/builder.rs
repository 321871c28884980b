use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::ServiceArgs;
use crate::error::{CliError, Result};
use chemlab::engine::config::ServiceConfigBuilder;
use directories::ProjectDirs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

pub fn build_config(args: &ServiceArgs) -> Result<AppConfig> {
    build_config_with(args, default_config_path(), |name| std::env::var(name).ok())
}

/// Builds the configuration with an injectable default file location and
/// environment lookup.
pub fn build_config_with(
    args: &ServiceArgs,
    default_path: Option<PathBuf>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let source = match &args.config {
        Some(path) => Some(path.clone()),
        None => default_path.filter(|p| p.is_file()),
    };
    let file_config = match &source {
        Some(path) => {
            info!("Using configuration file {:?}", path);
            FileConfig::from_file(path)?
        }
        None => FileConfig::default(),
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;
    let service_file = file_config.service.take().unwrap_or_default();

    let endpoint = args
        .endpoint
        .clone()
        .or(service_file.endpoint)
        .unwrap_or(defaults.endpoint);
    let model = args
        .model
        .clone()
        .or(service_file.model)
        .unwrap_or(defaults.model);
    let timeout_secs = args
        .timeout
        .or(service_file.timeout_secs)
        .unwrap_or(defaults.timeout_secs);
    if timeout_secs == 0 {
        return Err(CliError::Config(
            "Timeout must be at least 1 second".to_string(),
        ));
    }
    let api_key_env = args
        .api_key_env
        .clone()
        .or(service_file.api_key_env)
        .unwrap_or(defaults.api_key_env);

    let api_key = env(&api_key_env)
        .filter(|k| !k.trim().is_empty())
        .or(service_file.api_key);
    if api_key.is_none() {
        debug!("No API key found in ${} or the config file", api_key_env);
    }

    let service = ServiceConfigBuilder::new()
        .endpoint(endpoint)
        .model(model)
        .timeout(Duration::from_secs(timeout_secs))
        .api_key(api_key)
        .build()?;

    Ok(AppConfig {
        service,
        api_key_env,
        source,
    })
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "chemlab", "chemlab").map(|dirs| dirs.config_dir().join("config.toml"))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let service = config.service.get_or_insert_with(Default::default);

        match key.trim() {
            "service.endpoint" => service.endpoint = Some(value_str.to_string()),
            "service.model" => service.model = Some(value_str.to_string()),
            "service.timeout-secs" => {
                service.timeout_secs = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                })?);
            }
            "service.api-key-env" => service.api_key_env = Some(value_str.to_string()),
            "service.api-key" => service.api_key = Some(value_str.to_string()),
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
