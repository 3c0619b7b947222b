use std::{collections::HashMap, net::SocketAddr, str::FromStr};

use strum_macros::{Display, EnumString};

pub const DEFAULT_MONGO_URL : &str = "mongodb://localhost:27017";
pub const DEFAULT_DB_NAME : &str = "dark_realms";
pub const DEFAULT_BIND_ADDRESS : &str = "0.0.0.0:8001";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError
{
    #[error("{name} has an invalid value: {value}")]
    InvalidValue { name : &'static str, value : String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum StorageBackend
{
    Mongo,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins
{
    Any,
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig
{
    pub mongo_url : String,
    pub db_name : String,
    pub bind_address : SocketAddr,
    pub cors_origins : CorsOrigins,
    pub storage_backend : StorageBackend,
}

impl ServerConfig
{
    pub fn from_env() -> Result<Self, ConfigError>
    {
        Self::from_vars(&std::env::vars().collect())
    }

    // MONGO_URL, DB_NAME, BIND_ADDRESS, CORS_ORIGINS, STORAGE_BACKEND
    pub fn from_vars(vars : &HashMap<String, String>) -> Result<Self, ConfigError>
    {
        let read = |name : &str, default : &str| -> String
        {
            vars.get(name)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .unwrap_or(default)
                .to_owned()
        };

        let bind_address = read("BIND_ADDRESS", DEFAULT_BIND_ADDRESS);
        let bind_address = SocketAddr::from_str(&bind_address)
            .map_err(|_| ConfigError::InvalidValue { name: "BIND_ADDRESS", value: bind_address.clone() })?;

        let storage_backend = read("STORAGE_BACKEND", "mongo");
        let storage_backend = StorageBackend::from_str(&storage_backend.to_lowercase())
            .map_err(|_| ConfigError::InvalidValue { name: "STORAGE_BACKEND", value: storage_backend.clone() })?;

        Ok(ServerConfig
        {
            mongo_url: read("MONGO_URL", DEFAULT_MONGO_URL),
            db_name: read("DB_NAME", DEFAULT_DB_NAME),
            bind_address,
            cors_origins: parse_cors_origins(&read("CORS_ORIGINS", "*")),
            storage_backend,
        })
    }
}

fn parse_cors_origins(value : &str) -> CorsOrigins
{
    let origins : Vec<String> = value
        .split(',')
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .map(|origin| origin.to_owned())
        .collect();

    if origins.is_empty() || origins.iter().any(|origin| origin == "*")
    {
        CorsOrigins::Any
    }
    else
    {
        CorsOrigins::List(origins)
    }
}
