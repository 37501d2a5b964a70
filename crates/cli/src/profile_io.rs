use anyhow::{bail, Context, Result};
use feedlens_profile::TopicProfile;
use std::fs;
use std::path::Path;

/// Load a profile from disk, picking the format by file extension
pub fn load_profile(path: &Path) -> Result<TopicProfile> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading profile {}", path.display()))?;

    let profile = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => TopicProfile::from_toml_str(&raw)
            .with_context(|| format!("parsing {}", path.display()))?,
        Some("json") | None => TopicProfile::from_json_str(&raw)
            .with_context(|| format!("parsing {}", path.display()))?,
        Some(other) => bail!("unsupported profile format '{other}' (expected json or toml)"),
    };

    if profile.keywords.is_empty() {
        log::warn!(
            "Profile '{}' has no keywords; matching falls back to name/description similarity",
            profile.name
        );
    }
    Ok(profile)
}
