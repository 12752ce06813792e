use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScorerError {
    #[error("invalid scorer configuration: `{field}` {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}
