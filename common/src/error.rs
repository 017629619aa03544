use thiserror::Error;

/// Errors raised while turning config lines into endpoint descriptors.
///
/// Both variants are fatal: the run stops before any request is sent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("lines must be formatted as hostname;user;password, but found '{line}' ({found} fields)")]
    MalformedConfig { line: String, found: usize },

    #[error("{field} must not be empty in '{line}'")]
    EmptyField { field: &'static str, line: String },
}
