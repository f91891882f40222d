pub mod extract;
pub mod profile;
pub mod regions;

use sitrep_core::error::SitrepError;
use sitrep_core::profile::{load_profile, schema::LayoutProfile};
use std::path::Path;

/// The profile given on the command line, or the default layout.
fn resolve_profile(path: Option<&Path>) -> Result<LayoutProfile, SitrepError> {
    match path {
        Some(path) => {
            let profile = load_profile(path)?;
            log::debug!("using layout profile '{}' from {}", profile.name, path.display());
            Ok(profile)
        }
        None => Ok(LayoutProfile::default()),
    }
}
