use std::net::SocketAddr;

use thiserror::Error;

use crate::utils::middleware::AllowedOrigins;

const DEFAULT_POOL_SIZE: u32 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub allowed_origins: AllowedOrigins,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = get("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
            })?,
            None => 8000,
        };
        let addr_raw = format!("{}:{}", host, port);
        let addr: SocketAddr = addr_raw.parse().map_err(|_| ConfigError::Invalid {
            key: "HOST",
            value: host,
        })?;
        let allowed_origins = get("ALLOWED_ORIGINS")
            .map(|raw| AllowedOrigins::parse(&raw))
            .unwrap_or_default();
        Ok(Self {
            addr,
            allowed_origins,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseConfig {
    Postgres { url: String, pool_size: u32 },
    /// `DATABASE_URL=memory`
    InMemory,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = get("DATABASE_URL").ok_or(ConfigError::MissingEnv("DATABASE_URL"))?;
        if url.trim() == "memory" {
            return Ok(DatabaseConfig::InMemory);
        }
        let pool_size = match get("DB_POOL_SIZE") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "DB_POOL_SIZE",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_POOL_SIZE,
        };
        Ok(DatabaseConfig::Postgres { url, pool_size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn server_defaults() {
        let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.addr, "127.0.0.1:8000".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.allowed_origins, AllowedOrigins::default());
    }

    #[test]
    fn server_rejects_bad_port() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }

    #[test]
    fn database_url_is_required() {
        let err = DatabaseConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv("DATABASE_URL")));
    }

    #[test]
    fn database_memory_and_postgres() {
        let memory = DatabaseConfig::from_lookup(lookup(&[("DATABASE_URL", "memory")])).unwrap();
        assert_eq!(memory, DatabaseConfig::InMemory);

        let pg = DatabaseConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/inventory"),
            ("DB_POOL_SIZE", "4"),
        ]))
        .unwrap();
        assert_eq!(
            pg,
            DatabaseConfig::Postgres {
                url: "postgres://localhost/inventory".to_string(),
                pool_size: 4,
            }
        );
    }

    #[test]
    fn database_rejects_zero_pool() {
        let err = DatabaseConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/inventory"),
            ("DB_POOL_SIZE", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DB_POOL_SIZE", .. }));
    }
}
