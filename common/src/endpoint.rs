//! # Endpoint Descriptors
//!
//! One descriptor per manager endpoint, built from a config line of the form
//! `address;username;password`.

use std::fmt;
use std::str::FromStr;

use anyhow::Context;

use crate::error::ConfigError;

const FIELD_DELIMITER: char = ';';

/// Address and credentials of one manager endpoint.
///
/// Fields are private so a descriptor can only exist in its validated form.
#[derive(Clone, PartialEq, Eq)]
pub struct EndpointDescriptor {
    address: String,
    username: String,
    password: String,
}

impl EndpointDescriptor {
    /// Builds a descriptor from a single config line.
    ///
    /// The line and each of its three fields are trimmed. Fails with
    /// [`ConfigError::MalformedConfig`] on a field count other than three and with
    /// [`ConfigError::EmptyField`] if a trimmed field is empty.
    pub fn from_line(line: &str) -> Result<Self, ConfigError> {
        let trimmed: &str = line.trim();
        let fields: Vec<&str> = trimmed.split(FIELD_DELIMITER).map(str::trim).collect();

        let [address, username, password] = fields[..] else {
            return Err(ConfigError::MalformedConfig {
                line: trimmed.to_string(),
                found: fields.len(),
            });
        };

        for (name, value) in [("address", address), ("username", username), ("password", password)] {
            if value.is_empty() {
                return Err(ConfigError::EmptyField {
                    field: name,
                    line: trimmed.to_string(),
                });
            }
        }

        Ok(Self {
            address: address.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl FromStr for EndpointDescriptor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_line(s)
    }
}

impl fmt::Display for EndpointDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "host '{}' username '{}' password? {}",
            self.address,
            self.username,
            !self.password.is_empty()
        )
    }
}

// Manual impl keeps the password out of debug logs.
impl fmt::Debug for EndpointDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointDescriptor")
            .field("address", &self.address)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Parses the contents of an endpoint config file.
///
/// Lines are split on `\n`, a trailing `\r` is dropped and blank lines are
/// skipped. The first invalid line aborts parsing; its 1-based line number is
/// attached as context.
pub fn parse_endpoints(content: &str) -> anyhow::Result<Vec<EndpointDescriptor>> {
    let mut endpoints: Vec<EndpointDescriptor> = Vec::new();

    for (idx, raw) in content.split('\n').enumerate() {
        let line: &str = raw.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let endpoint = EndpointDescriptor::from_line(line)
            .with_context(|| format!("invalid endpoint on line {}", idx + 1))?;

        endpoints.push(endpoint);
    }

    Ok(endpoints)
}
