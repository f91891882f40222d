use crate::error::SitrepError;
use std::path::{Path, PathBuf};

/// Whether a source argument names a remote document.
pub fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// File name a downloaded report is stored under.
pub fn download_file_name(stamp: &str) -> String {
    format!("fire_summary_{stamp}.pdf")
}

/// Download the report PDF into `dest_dir`, returning the saved path.
///
/// Non-success HTTP statuses are errors; the run cannot continue without
/// the document.
pub fn download_report(url: &str, dest_dir: &Path, stamp: &str) -> Result<PathBuf, SitrepError> {
    std::fs::create_dir_all(dest_dir)?;
    let path = dest_dir.join(download_file_name(stamp));

    log::info!("downloading report from {url}");
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let bytes = response.bytes()?;
    log::debug!("downloaded {} bytes from {url}", bytes.len());

    std::fs::write(&path, &bytes)?;
    log::info!("saved report to {}", path.display());
    Ok(path)
}
