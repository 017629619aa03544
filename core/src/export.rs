use std::fs;
use std::path::Path;

use anyhow::Context;
use catisland_common::application::ApplicationRecord;

/// Renders `apps` as a pretty-printed JSON array.
pub fn to_json(apps: &[ApplicationRecord]) -> anyhow::Result<String> {
    serde_json::to_string_pretty(apps).context("failed to serialize applications")
}

/// Writes the JSON rendering of `apps` to `path`, replacing any existing file.
pub fn write_json(path: &Path, apps: &[ApplicationRecord]) -> anyhow::Result<()> {
    let json: String = to_json(apps)?;
    fs::write(path, json).with_context(|| format!("error writing JSON to {}", path.display()))
}
