use anyhow::Result;
use log::debug;
use payment_factory_cli::{Config, NetworkConfig};
use std::path::{Path, PathBuf};
use tokio::fs;

pub const SOURCE_ENV_VAR: &str = "PAYMENT_FACTORY_SOURCE";

pub fn expand_path(config_path: &Path) -> Result<PathBuf> {
    if config_path.starts_with("~") {
        let home_dir =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        let path_str = config_path.to_string_lossy();
        let without_tilde = &path_str[1..];
        Ok(home_dir.join(without_tilde.trim_start_matches('/')))
    } else {
        Ok(config_path.to_path_buf())
    }
}

pub async fn load_config(config_path: &Path) -> Result<Config> {
    let expanded_path = expand_path(config_path)?;

    if !expanded_path.exists() {
        // Create default config if it doesn't exist
        let default_config = Config::default();
        create_config_file(&expanded_path, &default_config).await?;
        return Ok(default_config);
    }

    debug!("Reading config from {}", expanded_path.display());
    let config_content = fs::read_to_string(&expanded_path).await?;
    let config: Config = toml::from_str(&config_content)?;

    Ok(config)
}

async fn create_config_file(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let config_content = toml::to_string_pretty(config)?;
    fs::write(path, config_content).await?;

    eprintln!("Created default config file at: {}", path.display());

    Ok(())
}

/// Network from `--network` when given, otherwise the config file's.
pub fn resolve_network(config: &Config, network: Option<&str>) -> Result<NetworkConfig> {
    match network {
        Some(name) => NetworkConfig::for_network(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown network: {}", name)),
        None => Ok(config.network.clone()),
    }
}

pub fn get_source(config: &Config) -> Result<String> {
    // Check environment variable first
    if let Ok(source) = std::env::var(SOURCE_ENV_VAR) {
        return Ok(source);
    }

    if let Some(source) = &config.auth.source {
        return Ok(source.clone());
    }

    Err(anyhow::anyhow!(
        "No source account found. Set {} or add auth.source to the config file",
        SOURCE_ENV_VAR
    ))
}

pub fn get_contract_id(config: &Config, contract_id: Option<String>) -> Result<String> {
    contract_id
        .or_else(|| config.contract.factory_id.clone())
        .ok_or_else(|| anyhow::anyhow!("No contract ID provided"))
}
