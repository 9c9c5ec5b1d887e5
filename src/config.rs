use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Where to write the schema SDL on startup, if anywhere.
    pub schema_sdl_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|source| Error::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        let schema_sdl_path = lookup("SCHEMA_SDL_PATH")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            schema_sdl_path,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
