//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::MIN_RUNTIME_VERSION;

/// Domain errors represent violated preconditions of a scaffolding run.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("project name must not be empty")]
    EmptyProjectName,

    #[error("cannot parse runtime version from: {0:?}")]
    InvalidVersion(String),

    #[error(
        "Node.js {major}.{minor}+ required for Next.js 15+ (found {found})",
        major = MIN_RUNTIME_VERSION.0,
        minor = MIN_RUNTIME_VERSION.1
    )]
    IncompatibleRuntime { found: String },
}
