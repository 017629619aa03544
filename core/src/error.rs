use thiserror::Error;

/// Failure of a single host during a run.
///
/// Host errors are collected per host and reported; they never abort the run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    /// Connection failure, timeout, unexpected HTTP status or unreadable body.
    #[error("request to {address} failed: {reason}")]
    Transport { address: String, reason: String },

    /// The manager answered, but not with an `OK` listing.
    #[error("{address} reported failure:\n{response}")]
    RemoteFailure { address: String, response: String },

    /// An application line without the `path:state` separator.
    #[error("{address} sent an unparsable application line: '{line}'")]
    MalformedLine { address: String, line: String },

    /// The worker polling this host ended without handing back an outcome.
    #[error("no outcome received from {address}")]
    Lost { address: String },
}

impl HostError {
    pub fn address(&self) -> &str {
        match self {
            HostError::Transport { address, .. }
            | HostError::RemoteFailure { address, .. }
            | HostError::MalformedLine { address, .. }
            | HostError::Lost { address } => address,
        }
    }
}
