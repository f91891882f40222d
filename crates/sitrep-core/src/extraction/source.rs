use crate::error::SitrepError;
use crate::extraction::fetch::{download_report, is_url};
use crate::extraction::PdfExtractor;
use crate::parsing::Document;
use std::path::{Path, PathBuf};

/// Where the report text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSource {
    /// A URL to download a PDF from.
    Remote(String),
    /// A local PDF file.
    Pdf(PathBuf),
    /// A local plain-text rendition of the report.
    Text(PathBuf),
}

impl ReportSource {
    /// Classify a command-line source argument.
    pub fn from_arg(arg: &str) -> ReportSource {
        if is_url(arg) {
            return ReportSource::Remote(arg.to_string());
        }
        let path = PathBuf::from(arg);
        let is_pdf = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if is_pdf {
            ReportSource::Pdf(path)
        } else {
            ReportSource::Text(path)
        }
    }
}

/// Turn a report source into one text blob.
///
/// Remote sources are downloaded into `download_dir` first. Every failure
/// here is fatal: without text there is nothing to parse.
pub fn load_text(
    source: &ReportSource,
    extractor: &dyn PdfExtractor,
    download_dir: &Path,
    stamp: &str,
) -> Result<String, SitrepError> {
    match source {
        ReportSource::Remote(url) => {
            let path = download_report(url, download_dir, stamp)?;
            pdf_text(&path, extractor)
        }
        ReportSource::Pdf(path) => pdf_text(path, extractor),
        ReportSource::Text(path) => {
            ensure_exists(path)?;
            log::info!("loading text file {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
    }
}

fn pdf_text(path: &Path, extractor: &dyn PdfExtractor) -> Result<String, SitrepError> {
    ensure_exists(path)?;
    log::info!(
        "extracting text from {} using {}",
        path.display(),
        extractor.backend_name()
    );
    let bytes = std::fs::read(path)?;
    let pages = extractor.extract_pages(&bytes)?;
    let doc = Document::from_pages(&pages);
    if doc.is_empty() {
        return Err(SitrepError::NoText);
    }
    Ok(doc.lines().join("\n"))
}

fn ensure_exists(path: &Path) -> Result<(), SitrepError> {
    if path.exists() {
        Ok(())
    } else {
        Err(SitrepError::SourceNotFound(path.to_path_buf()))
    }
}
