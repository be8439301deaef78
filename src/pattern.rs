use std::hash::{Hash, Hasher};
use std::path::{Component, Path};

use globset::{Glob, GlobMatcher};

use crate::error::ProjectConfigError;

/// A single file-matching rule: a glob over project-relative paths plus a
/// flag saying whether a match includes or excludes the file.
#[derive(Debug, Clone)]
pub struct FileMatchPattern {
    pattern: String,
    matcher: GlobMatcher,
    include: bool,
}

impl FileMatchPattern {
    pub fn new(pattern: &str, include: bool) -> Result<Self, ProjectConfigError> {
        let matcher = compile(pattern)?;
        Ok(Self {
            pattern: pattern.to_string(),
            matcher,
            include,
        })
    }

    pub fn include(pattern: &str) -> Result<Self, ProjectConfigError> {
        Self::new(pattern, true)
    }

    pub fn exclude(pattern: &str) -> Result<Self, ProjectConfigError> {
        Self::new(pattern, false)
    }

    pub fn match_pattern(&self) -> &str {
        &self.pattern
    }

    /// Replace the glob text, recompiling the matcher. On a malformed
    /// pattern the previous pattern stays in effect.
    pub fn set_match_pattern(&mut self, pattern: &str) -> Result<(), ProjectConfigError> {
        let matcher = compile(pattern)?;
        self.pattern = pattern.to_string();
        self.matcher = matcher;
        Ok(())
    }

    pub fn is_include_pattern(&self) -> bool {
        self.include
    }

    pub fn set_is_include_pattern(&mut self, include: bool) {
        self.include = include;
    }

    /// Test a project-relative path against this pattern. Paths that are
    /// absolute or escape the project root via `..` cannot be matched and
    /// produce an error.
    pub fn is_match(&self, path: &Path) -> Result<bool, ProjectConfigError> {
        ensure_project_relative(path)?;
        Ok(self.matcher.is_match(path))
    }
}

// The compiled matcher is derived from the pattern text, so equality and
// hashing only consider the text and the include flag.
impl PartialEq for FileMatchPattern {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.include == other.include
    }
}

impl Eq for FileMatchPattern {}

impl Hash for FileMatchPattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
        self.include.hash(state);
    }
}

fn compile(pattern: &str) -> Result<GlobMatcher, ProjectConfigError> {
    Glob::new(pattern)
        .map(|glob| glob.compile_matcher())
        .map_err(|err| ProjectConfigError::InvalidPattern(pattern.to_string(), err))
}

fn ensure_project_relative(path: &Path) -> Result<(), ProjectConfigError> {
    let escapes = path
        .components()
        .any(|component| matches!(component, Component::ParentDir));
    if path.is_absolute() || escapes {
        return Err(ProjectConfigError::PathOutsideProject(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_glob_against_relative_path() {
        let pattern = FileMatchPattern::include("*.java").expect("valid glob");
        assert!(pattern.is_match(Path::new("Main.java")).unwrap());
        assert!(!pattern.is_match(Path::new("readme.txt")).unwrap());
    }

    #[test]
    fn rejects_malformed_glob() {
        let result = FileMatchPattern::include("src/[");
        assert!(matches!(
            result,
            Err(ProjectConfigError::InvalidPattern(pattern, _)) if pattern == "src/["
        ));
    }

    #[test]
    fn rejects_paths_outside_the_project() {
        let pattern = FileMatchPattern::include("**/*.java").expect("valid glob");

        let absolute = Path::new("/etc/Main.java");
        assert!(matches!(
            pattern.is_match(absolute),
            Err(ProjectConfigError::PathOutsideProject(_))
        ));

        let escaping = Path::new("../other/Main.java");
        assert!(matches!(
            pattern.is_match(escaping),
            Err(ProjectConfigError::PathOutsideProject(_))
        ));
    }

    #[test]
    fn set_match_pattern_recompiles() {
        let mut pattern = FileMatchPattern::include("*.java").expect("valid glob");
        pattern.set_match_pattern("*.sql").expect("valid glob");

        assert_eq!(pattern.match_pattern(), "*.sql");
        assert!(pattern.is_match(Path::new("query.sql")).unwrap());
        assert!(!pattern.is_match(Path::new("Main.java")).unwrap());
    }

    #[test]
    fn set_match_pattern_keeps_previous_on_error() {
        let mut pattern = FileMatchPattern::include("*.java").expect("valid glob");
        assert!(pattern.set_match_pattern("[").is_err());

        assert_eq!(pattern.match_pattern(), "*.java");
        assert!(pattern.is_match(Path::new("Main.java")).unwrap());
    }

    #[test]
    fn equality_ignores_compiled_matcher() {
        let a = FileMatchPattern::include("*.java").unwrap();
        let b = FileMatchPattern::include("*.java").unwrap();
        let c = FileMatchPattern::exclude("*.java").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
