use sitrep_core::error::SitrepError;
use sitrep_core::extraction::pdftotext::PdftotextExtractor;
use sitrep_core::extraction::source::{load_text, ReportSource};
use sitrep_core::model::RegionReport;
use sitrep_core::parsing::classify::LineClassifier;
use sitrep_core::parsing::regions::detect_regions;
use sitrep_core::parsing::Document;
use std::path::PathBuf;

pub fn run(input_file: PathBuf, profile: Option<PathBuf>) -> Result<(), SitrepError> {
    let profile = super::resolve_profile(profile.as_deref())?;
    let source = ReportSource::from_arg(&input_file.to_string_lossy());

    // Remote reports are only needed long enough to list their regions
    let scratch = tempfile::tempdir()?;
    let extractor = PdftotextExtractor::new();
    let text = load_text(&source, &extractor, scratch.path(), "regions")?;
    let doc = Document::from_text(&text);

    let spans = detect_regions(doc.lines(), &LineClassifier::new(&profile));
    if spans.is_empty() {
        println!("No regions found in {}", input_file.display());
        return Ok(());
    }

    let max_label = spans.iter().map(|s| s.label.len()).max().unwrap_or(10);
    for (i, span) in spans.iter().enumerate() {
        println!(
            "  {:<10} {:<width$}  lines {}..{}",
            RegionReport::key(i + 1),
            span.label,
            span.start_line,
            span.end_line,
            width = max_label
        );
    }
    println!("\n{} region(s)", spans.len());

    Ok(())
}
