use std::env;
use std::fmt::Formatter;
use std::path::PathBuf;

use dotenv::dotenv;

const DEFAULT_ZONING_DATA_PATH: &str = "static/data/zoning_data.json";
const DEFAULT_INSIGHTS_PATH: &str = "static/data/zoning_insights.json";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub zoning_data_path: PathBuf,
    pub insights_path: PathBuf,
    pub bind_address: String,
    pub port: u16
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    InvalidPort(String)
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            ConfigError::InvalidPort(value) => {
                write!(f, "PORT must be an integer between 0 and 65535, got {:?}", value)
            },
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for std::io::Error {
    fn from(error: ConfigError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, error)
    }
}

/// Reads the configuration from the environment, after loading `.env` if
/// there is one.
pub fn init_config() -> Result<Config, ConfigError> {
    dotenv().ok();
    config_from(|key| env::var(key).ok())
}

fn config_from<F>(var: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>
{
    let zoning_data_path = var("ZONING_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ZONING_DATA_PATH));

    let insights_path = var("ZONING_INSIGHTS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INSIGHTS_PATH));

    let bind_address = var("BIND_ADDRESS")
        .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

    let port = match var("PORT") {
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value))?,
        None => DEFAULT_PORT,
    };

    Ok(Config { zoning_data_path, insights_path, bind_address, port })
}
