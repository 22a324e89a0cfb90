use serde::{Deserialize, Serialize};

use std::{env, fs, path::Path, time::Duration};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_store_timeout", with = "humantime_serde")]
    pub store_timeout: Duration,
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}

const fn default_store_timeout() -> Duration {
    DEFAULT_STORE_TIMEOUT
}

fn load_from_file(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    serde_yaml::from_str(&contents).map_err(Into::into)
}

fn load_from_env() -> Result<Config, Box<dyn std::error::Error>> {
    load_from_vars(|key| env::var(key).ok())
}

fn load_from_vars(
    var: impl Fn(&str) -> Option<String>,
) -> Result<Config, Box<dyn std::error::Error>> {
    let database_url =
        var("DATABASE_URL").ok_or("DATABASE_URL environment variable is required")?;

    let port = match var("PORT") {
        Some(port) => port
            .parse::<u16>()
            .map_err(|e| format!("Failed to parse PORT: {e}"))?,
        None => DEFAULT_PORT,
    };

    let store_timeout = match var("STORE_TIMEOUT") {
        Some(timeout) => humantime_serde::re::humantime::parse_duration(&timeout)
            .map_err(|e| format!("Failed to parse STORE_TIMEOUT: {e}"))?,
        None => DEFAULT_STORE_TIMEOUT,
    };

    Ok(Config {
        database_url,
        port,
        store_timeout,
    })
}

pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    // Retrieve env variable
    let config_path =
        env::var("NOTE_SERVICE_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

    // Try env path
    if Path::new(&config_path).exists() {
        tracing::info!("Loading configuration from '{}'", config_path);
        return load_from_file(Path::new(&config_path));
    }

    // Fallback to config.yaml
    if Path::new("config.yaml").exists() {
        tracing::warn!(
            "Config file '{}' not found, falling back to 'config.yaml'",
            config_path
        );
        return load_from_file(Path::new("config.yaml"));
    }

    // Fallback to environment variables
    tracing::info!(
        "No config file found, attempting to load configuration from environment variables"
    );
    load_from_env().map_err(|e| {
        format!(
            "Config file not found and environment variables are incomplete. \
             Tried: '{config_path}', 'config.yaml', and environment variables. \
             Error: {e}"
        )
        .into()
    })
}
