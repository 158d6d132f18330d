//! Runtime configuration read from the process environment.
//!
//! `dotenv` is loaded by the binary before [`Config::from_env`] runs, so a
//! `.env` file next to the executable works the same as exported variables.

use derive_more::Display;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432";
const DEFAULT_DATABASE_NAME: &str = "tutor";
const DEFAULT_COLLECTION_NAME: &str = "notes";
const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Debug, Display, PartialEq, Eq)]
pub enum ConfigError {
    #[display(fmt = "env {} must not be empty", _0)]
    Empty(&'static str),
    #[display(fmt = "env PORT must be a port number, got '{}'", _0)]
    InvalidPort(String),
    #[display(fmt = "env COLLECTION_NAME must be a plain identifier, got '{}'", _0)]
    InvalidCollectionName(String),
}

/// Where the notes live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub connection_uri: String,
    pub database_name: String,
    pub collection_name: String,
}

impl StoreConfig {
    /// Connection URI with the database name appended as the path.
    pub fn connection_url(&self) -> String {
        format!(
            "{}/{}",
            self.connection_uri.trim_end_matches('/'),
            self.database_name
        )
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            connection_uri: DEFAULT_DATABASE_URL.to_string(),
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub store: StoreConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &'static str, default: &str| -> Result<String, ConfigError> {
            match lookup(key) {
                Some(value) if value.trim().is_empty() => Err(ConfigError::Empty(key)),
                Some(value) => Ok(value.trim().to_string()),
                None => Ok(default.to_string()),
            }
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let collection_name = var("COLLECTION_NAME", DEFAULT_COLLECTION_NAME)?;
        if !is_identifier(&collection_name) {
            return Err(ConfigError::InvalidCollectionName(collection_name));
        }

        Ok(Self {
            host: var("HOST", DEFAULT_HOST)?,
            port,
            static_dir: var("STATIC_DIR", DEFAULT_STATIC_DIR)?,
            store: StoreConfig {
                connection_uri: var("DATABASE_URL", DEFAULT_DATABASE_URL)?,
                database_name: var("DATABASE_NAME", DEFAULT_DATABASE_NAME)?,
                collection_name,
            },
        })
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// The collection name is interpolated into SQL, so only bare identifiers pass.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).expect("defaults are valid");
        assert_eq!(config.port, 3000);
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
        assert_eq!(config.static_dir, "public");
        assert_eq!(config.store, StoreConfig::default());
        assert_eq!(
            config.store.connection_url(),
            "postgres://localhost:5432/tutor"
        );
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("DATABASE_URL", "postgres://user:pw@db:5432/"),
            ("DATABASE_NAME", "scratch"),
            ("COLLECTION_NAME", "my_notes"),
        ])
        .expect("valid overrides");
        assert_eq!(config.port, 8080);
        assert_eq!(config.store.collection_name, "my_notes");
        assert_eq!(
            config.store.connection_url(),
            "postgres://user:pw@db:5432/scratch"
        );
    }

    #[test]
    fn test_invalid_port() {
        assert_eq!(
            config_from(&[("PORT", "eighty")]),
            Err(ConfigError::InvalidPort("eighty".to_string()))
        );
        assert!(config_from(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn test_collection_name_must_be_identifier() {
        assert_eq!(
            config_from(&[("COLLECTION_NAME", "notes; DROP TABLE x")]),
            Err(ConfigError::InvalidCollectionName(
                "notes; DROP TABLE x".to_string()
            ))
        );
        assert!(config_from(&[("COLLECTION_NAME", "1notes")]).is_err());
        assert!(config_from(&[("COLLECTION_NAME", "_notes2")]).is_ok());
    }

    #[test]
    fn test_empty_value_rejected() {
        assert_eq!(
            config_from(&[("DATABASE_NAME", " ")]),
            Err(ConfigError::Empty("DATABASE_NAME"))
        );
    }
}
