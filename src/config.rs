use crate::error::{Error, Result};
use crate::services::index_service::DuplicatePolicy;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

pub const DEFAULT_EMPLOYEES_FILE: &str = "src/main/resources/employees.json";
pub const DEFAULT_REVIEWS_FILE: &str = "src/main/resources/reviews.json";
pub const DEFAULT_OUTPUT_FILE: &str = "output.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub employees_file: PathBuf,
    pub reviews_file: PathBuf,
    pub output_file: PathBuf,
    pub duplicate_policy: DuplicatePolicy,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Default for Config {
    fn default() -> Self {
        Self {
            employees_file: PathBuf::from(DEFAULT_EMPLOYEES_FILE),
            reviews_file: PathBuf::from(DEFAULT_REVIEWS_FILE),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            employees_file: get_env_or("EMPLOYEES_FILE", DEFAULT_EMPLOYEES_FILE).into(),
            reviews_file: get_env_or("REVIEWS_FILE", DEFAULT_REVIEWS_FILE).into(),
            output_file: get_env_or("OUTPUT_FILE", DEFAULT_OUTPUT_FILE).into(),
            duplicate_policy: get_env_parse_or("DUPLICATE_EMPLOYEE_POLICY", DuplicatePolicy::default())?,
        })
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        _ => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
