use std::fmt;

use serde::Serialize;

/// An application deployed on a manager, as reported by its status listing.
///
/// Two records describe the same application when their [`Display`](fmt::Display)
/// renderings are identical; [`ApplicationRecord::composed`] is that key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationRecord {
    pub host: String,
    pub path: String,
    pub state: String,
}

impl ApplicationRecord {
    pub fn new(host: impl Into<String>, path: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            path: path.into(),
            state: state.into(),
        }
    }

    /// Deduplication identity of this record.
    pub fn composed(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ApplicationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} ({})", self.host, self.path, self.state)
    }
}
