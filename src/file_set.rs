use std::hash::{Hash, Hasher};
use std::path::Path;
use std::sync::Arc;

use crate::check_config::{CheckConfig, CheckConfigRef, CheckConfigRegistry};
use crate::error::ProjectConfigError;
use crate::pattern::FileMatchPattern;

/// A file set: a named, ordered collection of file-matching rules audited
/// with a common check configuration.
///
/// `Clone` is shallow by contract: the pattern list is shared between the
/// original and the copy, not deep-copied. Callers wanting an independent
/// list must rebuild it via [`FileSet::set_file_match_patterns`].
#[derive(Debug, Clone)]
pub struct FileSet {
    name: String,
    check_config: CheckConfigRef,
    enabled: bool,
    file_match_patterns: Arc<Vec<FileMatchPattern>>,
}

impl Default for FileSet {
    fn default() -> Self {
        Self {
            name: String::new(),
            check_config: CheckConfigRef::default(),
            enabled: true,
            file_match_patterns: Arc::new(Vec::new()),
        }
    }
}

impl FileSet {
    pub fn new(name: impl Into<String>, check_config: CheckConfig) -> Self {
        let mut file_set = Self::default();
        file_set.set_name(name);
        file_set.set_check_config(Some(check_config));
        file_set
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn file_match_patterns(&self) -> &[FileMatchPattern] {
        &self.file_match_patterns
    }

    pub fn set_file_match_patterns(&mut self, patterns: Vec<FileMatchPattern>) {
        self.file_match_patterns = Arc::new(patterns);
    }

    /// The name of the check configuration this set is audited with, or the
    /// empty string when none was ever assigned. Always reflects whatever
    /// configuration was last assigned.
    pub fn check_config_name(&self) -> &str {
        self.check_config.name()
    }

    /// Point this set at a configuration by name only, leaving resolution to
    /// a later [`FileSet::check_config`] call.
    pub fn set_check_config_name(&mut self, name: impl Into<String>) {
        self.check_config = CheckConfigRef::Named(name.into());
    }

    /// Resolve the check configuration through the registry. Resolution
    /// happens on every call; a failed lookup is swallowed and surfaces as
    /// `None`, never as an error.
    pub fn check_config<'a>(&self, registry: &'a CheckConfigRegistry) -> Option<&'a CheckConfig> {
        registry.get_by_name(self.check_config_name()).ok()
    }

    /// Assign a check configuration. `None` drops the assigned configuration
    /// but keeps the previously assigned name, so [`FileSet::check_config_name`]
    /// still answers with the old name afterwards.
    pub fn set_check_config(&mut self, check_config: Option<CheckConfig>) {
        match check_config {
            Some(config) => self.check_config = CheckConfigRef::Resolved(config),
            None => {
                let name = self.check_config_name().to_string();
                self.check_config = CheckConfigRef::Named(name);
            }
        }
    }

    /// Test whether a project-relative path is included in this set.
    ///
    /// Every pattern is consulted front to back; each matching pattern
    /// overwrites the running decision (include or exclude), so the last
    /// matching pattern wins. With no matching pattern the path is excluded.
    pub fn includes_file(&self, path: &Path) -> Result<bool, ProjectConfigError> {
        let mut result = false;
        for pattern in self.file_match_patterns.iter() {
            if pattern.is_match(path)? {
                result = pattern.is_include_pattern();
            }
        }
        Ok(result)
    }
}

// Field order matters for the short-circuit: name, config name, enabled flag,
// then the pattern list. Hash covers the same fields in the same order so
// equal sets hash equally.
impl PartialEq for FileSet {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.check_config_name() == other.check_config_name()
            && self.enabled == other.enabled
            && self.file_match_patterns == other.file_match_patterns
    }
}

impl Eq for FileSet {}

impl Hash for FileSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.check_config_name().hash(state);
        self.enabled.hash(state);
        self.file_match_patterns.hash(state);
    }
}
