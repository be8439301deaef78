mod check_config;
mod error;
mod file_set;
mod pattern;
mod project_config;

pub use check_config::{CheckConfig, CheckConfigRef, CheckConfigRegistry};
pub use error::ProjectConfigError;
pub use file_set::FileSet;
pub use pattern::FileMatchPattern;
pub use project_config::{
    CheckConfigObject, FileSetObject, PatternObject, ProjectConfigObject, ProjectConfiguration,
    DEFAULT_CONFIG_FILENAME,
};
