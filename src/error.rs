use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectConfigError {
    #[error("invalid file match pattern {0}: {1}")]
    InvalidPattern(String, #[source] globset::Error),
    #[error("path {0} is not relative to the project root")]
    PathOutsideProject(PathBuf),
    #[error("unknown check configuration: {0}")]
    UnknownCheckConfig(String),
    #[error("failed to read {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("failed to parse {0}: {1}")]
    Json(PathBuf, #[source] serde_json::Error),
}
