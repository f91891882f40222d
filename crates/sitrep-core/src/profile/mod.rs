pub mod schema;

use crate::error::SitrepError;
use schema::LayoutProfile;
use std::path::Path;

/// Load a layout profile from a JSON file.
pub fn load_profile(path: &Path) -> Result<LayoutProfile, SitrepError> {
    let content = std::fs::read_to_string(path).map_err(|e| SitrepError::ProfileLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_profile(&content, path)
}

/// Parse a layout profile from a JSON string.
pub fn parse_profile(json: &str, source: &Path) -> Result<LayoutProfile, SitrepError> {
    let profile: LayoutProfile =
        serde_json::from_str(json).map_err(|e| SitrepError::ProfileLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Parse a layout profile from a JSON string (no file path context).
pub fn parse_profile_str(json: &str) -> Result<LayoutProfile, SitrepError> {
    let profile: LayoutProfile = serde_json::from_str(json).map_err(SitrepError::Json)?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Validate that a profile is usable.
pub fn validate_profile(profile: &LayoutProfile) -> Result<(), SitrepError> {
    let sentinels = [
        ("region_sentinel", &profile.region_sentinel),
        ("column_header", &profile.column_header),
        ("header_terminator", &profile.header_terminator),
        ("repeated_header_prefix", &profile.repeated_header_prefix),
        ("total_prefix", &profile.total_prefix),
        ("summary_sentinel", &profile.summary_sentinel),
        ("summary_caption_prefix", &profile.summary_caption_prefix),
        ("predictive_sentinel", &profile.predictive_sentinel),
    ];

    for (field, value) in sentinels {
        if value.trim().is_empty() {
            return Err(SitrepError::ProfileInvalid(format!(
                "'{field}' must not be empty"
            )));
        }
    }

    if profile.header_line_count == 0 {
        return Err(SitrepError::ProfileInvalid(
            "header_line_count must be at least 1".into(),
        ));
    }

    Ok(())
}
