//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge built-in defaults + `config.toml` +
//! `config.<env>.toml` + `APP_*` env vars (`__` separates nested keys, so
//! `APP_INDEX__TANTIVY_DIR` overrides `index.tantivy_dir`).
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    pub entities_dir: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSettings {
    pub tantivy_dir: String,
    pub writer_heap_bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub filter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub data: DataSettings,
    pub index: IndexSettings,
    pub logging: LoggingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data: DataSettings { entities_dir: "../dev_data/entities".to_string() },
            index: IndexSettings {
                tantivy_dir: "../dev_data/indexes/tantivy".to_string(),
                writer_heap_bytes: 50_000_000,
            },
            logging: LoggingSettings { filter: "info".to_string() },
        }
    }
}

impl Settings {
    pub fn entities_dir(&self) -> PathBuf {
        expand_path(&self.data.entities_dir)
    }

    pub fn tantivy_dir(&self) -> PathBuf {
        expand_path(&self.index.tantivy_dir)
    }
}

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_for_env(&env_name)
    }

    pub fn load_for_env(env_name: &str) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file("config.toml"));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            other => return Err(Error::InvalidConfig(format!("unknown RUST_ENV '{}'", other))),
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment };
        config.validate()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| Error::InvalidConfig(format!("Failed to get '{}': {}", key, e)))
    }

    pub fn settings(&self) -> Result<Settings> {
        self.figment
            .extract()
            .map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    fn validate(&self) -> Result<()> {
        let settings = self.settings()?;
        if settings.index.writer_heap_bytes < 15_000_000 {
            // tantivy refuses writer budgets below 15MB
            return Err(Error::InvalidConfig(format!(
                "index.writer_heap_bytes must be at least 15000000, got {}",
                settings.index.writer_heap_bytes
            )));
        }
        Ok(())
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
