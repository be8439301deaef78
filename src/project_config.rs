use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::check_config::{CheckConfig, CheckConfigRegistry};
use crate::error::ProjectConfigError;
use crate::file_set::FileSet;
use crate::pattern::FileMatchPattern;

pub const DEFAULT_CONFIG_FILENAME: &str = ".auditset.json";

/// Raw shape of the persisted project configuration, as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectConfigObject {
    pub check_configs: Vec<CheckConfigObject>,
    pub file_sets: Vec<FileSetObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckConfigObject {
    pub name: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileSetObject {
    pub name: String,
    #[serde(default)]
    pub check_config: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub patterns: Vec<PatternObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatternObject {
    pub pattern: String,
    #[serde(default = "default_include")]
    pub include: bool,
}

fn default_enabled() -> bool {
    true
}

fn default_include() -> bool {
    true
}

/// A project's audit configuration: its registered check configurations and
/// its file sets, with all patterns compiled.
#[derive(Debug, Clone)]
pub struct ProjectConfiguration {
    registry: CheckConfigRegistry,
    file_sets: Vec<FileSet>,
}

impl ProjectConfiguration {
    /// Load the configuration for a project. An explicit `config_path` wins;
    /// otherwise `root_dir/DEFAULT_CONFIG_FILENAME` is used when present,
    /// and a project without a config file gets the defaults.
    pub fn load(
        root_dir: impl Into<PathBuf>,
        config_path: Option<PathBuf>,
    ) -> Result<Self, ProjectConfigError> {
        let root_dir = root_dir.into();
        let object = load_config(&root_dir, config_path)?;
        Self::from_object(object)
    }

    pub fn from_object(object: ProjectConfigObject) -> Result<Self, ProjectConfigError> {
        let mut registry = CheckConfigRegistry::new();
        for config in object.check_configs {
            registry.register(CheckConfig::new(config.name, config.location));
        }

        let file_sets = object
            .file_sets
            .into_iter()
            .map(resolve_file_set)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            registry,
            file_sets,
        })
    }

    pub fn registry(&self) -> &CheckConfigRegistry {
        &self.registry
    }

    pub fn file_sets(&self) -> &[FileSet] {
        &self.file_sets
    }

    pub fn file_sets_mut(&mut self) -> &mut Vec<FileSet> {
        &mut self.file_sets
    }

    pub fn enabled_file_sets(&self) -> impl Iterator<Item = &FileSet> {
        self.file_sets.iter().filter(|file_set| file_set.is_enabled())
    }

    /// True when any enabled file set includes the project-relative path.
    pub fn is_checked(&self, path: &Path) -> Result<bool, ProjectConfigError> {
        for file_set in self.enabled_file_sets() {
            if file_set.includes_file(path)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

fn resolve_file_set(object: FileSetObject) -> Result<FileSet, ProjectConfigError> {
    let patterns = object
        .patterns
        .iter()
        .map(|pattern| FileMatchPattern::new(&pattern.pattern, pattern.include))
        .collect::<Result<Vec<_>, _>>()?;

    let mut file_set = FileSet::default();
    file_set.set_name(object.name);
    file_set.set_check_config_name(object.check_config);
    file_set.set_enabled(object.enabled);
    file_set.set_file_match_patterns(patterns);
    Ok(file_set)
}

fn load_config(
    root_dir: &Path,
    config_path: Option<PathBuf>,
) -> Result<ProjectConfigObject, ProjectConfigError> {
    if let Some(path) = config_path {
        return read_config_file(&path);
    }

    let path = root_dir.join(DEFAULT_CONFIG_FILENAME);
    if path.exists() {
        return read_config_file(&path);
    }

    Ok(ProjectConfigObject::default())
}

fn read_config_file(path: &Path) -> Result<ProjectConfigObject, ProjectConfigError> {
    let content =
        fs::read_to_string(path).map_err(|err| ProjectConfigError::Io(path.to_path_buf(), err))?;
    serde_json::from_str(&content).map_err(|err| ProjectConfigError::Json(path.to_path_buf(), err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_object_rejects_malformed_pattern() {
        let object: ProjectConfigObject = serde_json::from_str(
            r#"{
                "file_sets": [
                    {
                        "name": "sources",
                        "patterns": [{ "pattern": "src/[" }]
                    }
                ]
            }"#,
        )
        .expect("valid json");

        assert!(matches!(
            ProjectConfiguration::from_object(object),
            Err(ProjectConfigError::InvalidPattern(pattern, _)) if pattern == "src/["
        ));
    }

    #[test]
    fn object_defaults_enable_sets_and_patterns() {
        let object: ProjectConfigObject = serde_json::from_str(
            r#"{
                "file_sets": [
                    {
                        "name": "sources",
                        "patterns": [{ "pattern": "src/**/*.java" }]
                    }
                ]
            }"#,
        )
        .expect("valid json");

        let project = ProjectConfiguration::from_object(object).expect("resolves");
        let file_set = &project.file_sets()[0];
        assert!(file_set.is_enabled());
        assert!(file_set.file_match_patterns()[0].is_include_pattern());
        assert_eq!(file_set.check_config_name(), "");
    }
}
