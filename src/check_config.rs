use std::collections::HashMap;

use crate::error::ProjectConfigError;

/// A named check configuration: the set of audit rules a file set is
/// checked with. The rules themselves live behind `location`; this crate
/// only models the reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CheckConfig {
    name: String,
    location: String,
}

impl CheckConfig {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

/// Reference held by a file set: either a name still pending resolution or
/// a configuration that was explicitly assigned. Keeping both states in one
/// value ties the name to whatever was last assigned.
#[derive(Debug, Clone)]
pub enum CheckConfigRef {
    Named(String),
    Resolved(CheckConfig),
}

impl CheckConfigRef {
    pub fn name(&self) -> &str {
        match self {
            CheckConfigRef::Named(name) => name,
            CheckConfigRef::Resolved(config) => config.name(),
        }
    }
}

impl Default for CheckConfigRef {
    fn default() -> Self {
        CheckConfigRef::Named(String::new())
    }
}

/// Name-keyed store of check configurations.
#[derive(Debug, Clone, Default)]
pub struct CheckConfigRegistry {
    configs: HashMap<String, CheckConfig>,
}

impl CheckConfigRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a configuration, replacing any previous one with the same name.
    pub fn register(&mut self, config: CheckConfig) {
        self.configs.insert(config.name().to_string(), config);
    }

    pub fn get_by_name(&self, name: &str) -> Result<&CheckConfig, ProjectConfigError> {
        self.configs
            .get(name)
            .ok_or_else(|| ProjectConfigError::UnknownCheckConfig(name.to_string()))
    }
}
