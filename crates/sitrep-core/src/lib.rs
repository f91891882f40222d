pub mod config;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod profile;
pub mod sink;

use config::RunConfig;
use error::SitrepError;
use extraction::source::load_text;
use extraction::PdfExtractor;
use model::Report;
use parsing::Document;
use profile::schema::LayoutProfile;
use std::path::Path;

/// Extract a report from its plain text using the default layout.
pub fn extract_report(text: &str) -> Report {
    extract_report_with(text, &LayoutProfile::default())
}

/// Extract a report from its plain text using a custom layout profile.
///
/// Never fails: structural problems are reported through the report's
/// warnings and skipped lines.
pub fn extract_report_with(text: &str, profile: &LayoutProfile) -> Report {
    parsing::parse_document(&Document::from_text(text), profile)
}

/// Extract a report straight from PDF bytes.
pub fn ingest_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    profile: &LayoutProfile,
) -> Result<Report, SitrepError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    let doc = Document::from_pages(&pages);
    if doc.is_empty() {
        return Err(SitrepError::NoText);
    }
    Ok(parsing::parse_document(&doc, profile))
}

/// Acquire the configured source and extract its report.
///
/// Remote sources are downloaded into the run's output directory.
pub fn run(config: &RunConfig, extractor: &dyn PdfExtractor) -> Result<Report, SitrepError> {
    run_with_download_dir(config, extractor, &config.output_dir())
}

/// Like [`run`], but remote sources are downloaded into `download_dir`.
///
/// Nothing is written under the configured data directory.
pub fn run_with_download_dir(
    config: &RunConfig,
    extractor: &dyn PdfExtractor,
    download_dir: &Path,
) -> Result<Report, SitrepError> {
    let text = load_text(&config.source, extractor, download_dir, &config.date_stamp())?;
    let report = extract_report_with(&text, &config.profile);

    log::info!(
        "extracted {} regions, {} incidents, {} summary rows",
        report.regions.len(),
        report.incident_count(),
        report.national_summary.len()
    );
    if !report.skipped_lines.is_empty() {
        log::info!("{} line(s) skipped during parsing", report.skipped_lines.len());
    }
    for warning in &report.warnings {
        log::warn!("{}: {}", warning.section, warning.reason);
    }

    Ok(report)
}
