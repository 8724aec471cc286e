use thiserror::Error;

/// Core domain errors
///
/// User input never produces one of these: unparseable numbers count as zero
/// and operations on unknown ids are no-ops. Only caller defects end up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown course field: {name}")]
    UnknownField { name: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
