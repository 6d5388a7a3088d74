//! Configuration for the drills.
//!
//! Defaults match the hard-coded values the exercises were written against.
//! A TOML file can override any field, and the two endpoint URLs can also be
//! overridden from the environment so tests and demos can point them at a
//! local server.

use crate::error::{DrillError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const LOGIN_URL_ENV: &str = "DRILLS_LOGIN_URL";
pub const TODOS_URL_ENV: &str = "DRILLS_TODOS_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DrillsConfig {
    /// Endpoint receiving credential checks.
    #[serde(default = "default_login_url")]
    pub login_url: String,

    /// Base URL for todo lookups; the id is appended as a path segment.
    #[serde(default = "default_todos_url")]
    pub todos_url: String,

    /// Army size used by the fight drill when none is given.
    #[serde(default = "default_army_size")]
    pub army_size: usize,
}

fn default_login_url() -> String {
    "https://mydomain/login".to_string()
}

fn default_todos_url() -> String {
    "https://jsonplaceholder.typicode.com/todos".to_string()
}

fn default_army_size() -> usize {
    100
}

impl Default for DrillsConfig {
    fn default() -> Self {
        Self {
            login_url: default_login_url(),
            todos_url: default_todos_url(),
            army_size: default_army_size(),
        }
    }
}

impl DrillsConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DrillsConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path` when given, falls back to defaults otherwise, then applies
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let content = fs::read_to_string(path)?;
                tracing::debug!(path = %path.display(), "loaded config file");
                Self::from_toml_str(&content)?
            }
            None => Self::default(),
        };
        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    /// Applies overrides from `lookup`. Taking the lookup as a closure keeps
    /// tests away from the process environment.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(LOGIN_URL_ENV).filter(|v| !v.is_empty()) {
            self.login_url = url;
        }
        if let Some(url) = lookup(TODOS_URL_ENV).filter(|v| !v.is_empty()) {
            self.todos_url = url;
        }
        self
    }

    fn validate(&self) -> Result<()> {
        if self.login_url.trim().is_empty() {
            return Err(DrillError::Config("login_url must not be empty".into()));
        }
        if self.todos_url.trim().is_empty() {
            return Err(DrillError::Config("todos_url must not be empty".into()));
        }
        if self.army_size == 0 {
            return Err(DrillError::Config("army_size must be at least 1".into()));
        }
        Ok(())
    }
}
