use sitrep_core::error::SitrepError;
use sitrep_core::profile::{load_profile, schema::LayoutProfile};
use std::path::Path;

pub fn show() -> Result<(), SitrepError> {
    let json = serde_json::to_string_pretty(&LayoutProfile::default())?;
    println!("{json}");
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), SitrepError> {
    let profile = load_profile(file)?;
    let default = LayoutProfile::default();

    println!("Profile '{}' is valid.", profile.name);

    let overrides: Vec<(&str, &str, &str)> = [
        ("region_sentinel", &profile.region_sentinel, &default.region_sentinel),
        ("column_header", &profile.column_header, &default.column_header),
        ("header_terminator", &profile.header_terminator, &default.header_terminator),
        (
            "repeated_header_prefix",
            &profile.repeated_header_prefix,
            &default.repeated_header_prefix,
        ),
        ("total_prefix", &profile.total_prefix, &default.total_prefix),
        ("summary_sentinel", &profile.summary_sentinel, &default.summary_sentinel),
        (
            "summary_caption_prefix",
            &profile.summary_caption_prefix,
            &default.summary_caption_prefix,
        ),
        ("predictive_sentinel", &profile.predictive_sentinel, &default.predictive_sentinel),
    ]
    .into_iter()
    .filter(|(_, value, default)| value != default)
    .map(|(field, value, default)| (field, value.as_str(), default.as_str()))
    .collect();

    if overrides.is_empty() && profile.header_line_count == default.header_line_count {
        println!("  Same layout as the default profile.");
        return Ok(());
    }

    println!("  Overrides:");
    for (field, value, default) in &overrides {
        println!("    {field}: {value:?} (default {default:?})");
    }
    if profile.header_line_count != default.header_line_count {
        println!(
            "    header_line_count: {} (default {})",
            profile.header_line_count, default.header_line_count
        );
    }

    Ok(())
}
