use sitrep_core::config::{parse_date_stamp, RunConfig};
use sitrep_core::error::SitrepError;
use sitrep_core::extraction::pdftotext::PdftotextExtractor;
use sitrep_core::extraction::source::ReportSource;
use sitrep_core::sink::{emit_report, DirectorySink};
use std::path::PathBuf;

use crate::output;

pub struct ExtractArgs {
    pub source: String,
    pub output_format: String,
    pub data_dir: PathBuf,
    pub date: Option<String>,
    pub profile: Option<PathBuf>,
    pub dry_run: bool,
}

pub fn run(args: ExtractArgs) -> Result<(), SitrepError> {
    let mut config = RunConfig::new()
        .with_source(ReportSource::from_arg(&args.source))
        .with_data_dir(args.data_dir)
        .with_profile(super::resolve_profile(args.profile.as_deref())?);
    if let Some(date) = &args.date {
        config = config.with_run_date(parse_date_stamp(date)?);
    }

    let extractor = PdftotextExtractor::new();
    let report = if args.dry_run {
        // A downloaded report only lives for the length of the run
        let scratch = tempfile::tempdir()?;
        sitrep_core::run_with_download_dir(&config, &extractor, scratch.path())?
    } else {
        sitrep_core::run(&config, &extractor)?
    };

    match args.output_format.as_str() {
        "json" => output::json::print(&report)?,
        _ => output::table::print(&report),
    }

    if args.dry_run {
        eprintln!("Dry run, no files written");
    } else {
        let mut sink = DirectorySink::new(config.output_dir());
        let count = emit_report(&report, &config.date_stamp(), &mut sink)?;
        eprintln!(
            "Wrote {} file(s) to {}",
            count,
            config.output_dir().display()
        );
    }

    if !report.warnings.is_empty() {
        for w in &report.warnings {
            eprintln!("  warning: {}: {}", w.section, w.reason);
        }
    }
    if !report.skipped_lines.is_empty() {
        eprintln!(
            "  {} line(s) skipped during parsing",
            report.skipped_lines.len()
        );
    }

    Ok(())
}
