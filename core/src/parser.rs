//! Parser for the manager's plain-text application listing.
//!
//! A successful listing looks like:
//!
//! ```text
//! OK - Listed applications for virtual host localhost
//! /:running:0:ROOT
//! /manager:running:1:manager
//! ```
//!
//! Anything whose first line does not start with `OK` is a failure report.

use catisland_common::application::ApplicationRecord;

use crate::error::HostError;

const OK_MARKER: &str = "OK";
const FIELD_SEPARATOR: char = ':';

/// Parses `raw` as reported by the manager at `address`.
pub fn parse_status(address: &str, raw: &str) -> Result<Vec<ApplicationRecord>, HostError> {
    let mut lines = raw.split('\n');

    let header: &str = lines.next().unwrap_or_default();
    if !header.starts_with(OK_MARKER) {
        return Err(HostError::RemoteFailure {
            address: address.to_string(),
            response: raw.to_string(),
        });
    }

    lines
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(|line| parse_application(address, line))
        .collect()
}

fn parse_application(address: &str, line: &str) -> Result<ApplicationRecord, HostError> {
    let mut fields = line.split(FIELD_SEPARATOR);

    match (fields.next(), fields.next()) {
        (Some(path), Some(state)) => Ok(ApplicationRecord::new(address, path, state)),
        _ => Err(HostError::MalformedLine {
            address: address.to_string(),
            line: line.to_string(),
        }),
    }
}
