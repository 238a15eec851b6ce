use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct CafeConfig {
    pub common: core_config::Config,
    pub environment: Environment,
    pub service_name: String,
    pub store: StoreConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Environment {
    Dev,
    Prod,
}

impl FromStr for Environment {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Dev),
            "prod" | "production" => Ok(Environment::Prod),
            other => Err(AppError::ConfigError(anyhow::anyhow!(
                "Unknown ENVIRONMENT '{}', expected 'dev' or 'prod'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoreBackend {
    MongoDb,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(StoreBackend::MongoDb),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(AppError::ConfigError(anyhow::anyhow!(
                "Unknown STORE_BACKEND '{}', expected 'mongodb' or 'memory'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Required for the MongoDB backend.
    pub mongo_url: Option<String>,
    pub db_name: String,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// `*` mirrors any requesting origin.
    pub allowed_origins: Vec<String>,
}

impl CafeConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        Self::from_lookup(common, |key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `load` passes the process environment.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("ENVIRONMENT") {
            Some(value) => value.parse()?,
            None => Environment::Dev,
        };
        let is_prod = environment == Environment::Prod;
        let get = |key: &str, default: Option<&str>| get_var(&lookup, key, default, is_prod);

        let backend = match lookup("STORE_BACKEND") {
            Some(value) => value.parse()?,
            None => StoreBackend::MongoDb,
        };

        let mongo_url = match backend {
            StoreBackend::MongoDb => Some(get("MONGO_URL", None)?),
            StoreBackend::Memory => lookup("MONGO_URL"),
        };

        Ok(CafeConfig {
            common,
            environment,
            service_name: "cafe-service".to_string(),
            store: StoreConfig {
                backend,
                mongo_url,
                db_name: get("DB_NAME", Some("cafe_db"))?,
            },
            cors: CorsConfig {
                // Permissive unless restricted, in every environment
                allowed_origins: parse_origins(
                    &lookup("CORS_ORIGINS").unwrap_or_else(|| "*".to_string()),
                ),
            },
        })
    }

    /// In-memory configuration for tests and local runs.
    pub fn in_memory() -> Self {
        CafeConfig {
            common: core_config::Config {
                port: 0,
                ..Default::default()
            },
            environment: Environment::Dev,
            service_name: "cafe-service".to_string(),
            store: StoreConfig {
                backend: StoreBackend::Memory,
                mongo_url: None,
                db_name: "cafe_db".to_string(),
            },
            cors: CorsConfig {
                allowed_origins: vec!["*".to_string()],
            },
        }
    }
}

/// Split a comma-separated origin list. An empty list means `*`.
pub fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        vec!["*".to_string()]
    } else {
        origins
    }
}

fn get_var<F>(lookup: &F, key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => Ok(val),
        None => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
