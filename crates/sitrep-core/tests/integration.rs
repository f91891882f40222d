//! Integration tests for the extraction pipeline end to end.
//!
//! Uses a MockExtractor that returns pre-built PageContent without
//! invoking pdftotext, so these tests run without poppler-utils.

use rust_decimal_macros::dec;
use sitrep_core::config::RunConfig;
use sitrep_core::error::SitrepError;
use sitrep_core::extraction::source::ReportSource;
use sitrep_core::extraction::{PageContent, PdfExtractor};
use sitrep_core::model::SkipReason;
use sitrep_core::parsing::values::Quantity;
use sitrep_core::profile::parse_profile_str;
use sitrep_core::sink::{emit_report, DirectorySink};
use sitrep_core::{extract_report, extract_report_with, ingest_pdf, run, run_with_download_dir};

const SAMPLE: &str = include_str!("fixtures/imsr_sample.txt");

struct MockExtractor {
    pages: Vec<PageContent>,
}

impl PdfExtractor for MockExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, SitrepError> {
        Ok(self.pages.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

fn page(number: usize, lines: &[&str]) -> PageContent {
    PageContent {
        page_number: number,
        lines: lines.iter().map(|s| s.to_string()).collect(),
    }
}

/// The sample report split into two pages at the Great Basin caption.
fn sample_pages() -> Vec<PageContent> {
    let lines: Vec<&str> = SAMPLE.lines().collect();
    let split = lines
        .iter()
        .position(|l| l.starts_with("Great Basin Area"))
        .unwrap();
    vec![page(1, &lines[..split]), page(2, &lines[split..])]
}

// ---------------------------------------------------------------------------
// Full sample report
// ---------------------------------------------------------------------------
#[test]
fn sample_report_regions_in_document_order() {
    let report = extract_report(SAMPLE);

    let key = report.region_key();
    let labels: Vec<&str> = key.values().map(String::as_str).collect();
    assert_eq!(
        labels,
        vec![
            "Northwest Area (PL 3)",
            "Great Basin Area (PL 4)",
            "Alaska Area (PL 1)"
        ]
    );
    assert_eq!(key.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn sample_report_incident_tables() {
    let report = extract_report(SAMPLE);

    let northwest = &report.regions[&1];
    let names: Vec<&str> = northwest
        .records
        .iter()
        .map(|r| r.incident_name.as_str())
        .collect();
    // "Complex" fragment skipped, repeated header does not end the table
    assert_eq!(
        names,
        vec!["Big Creek Fire", "Cedar", "Lone Pine Complex", "Grouse Ridge"]
    );
    assert_eq!(northwest.narrative, vec!["New fires: 24", "Type 1 IMTs committed: 1"]);

    let big_creek = &northwest.records[0];
    assert_eq!(big_creek.unit, "WA-NES");
    assert_eq!(big_creek.cost_to_date, "$1,000,000");
    assert_eq!(big_creek.origin_ownership, "USFS");
    assert_eq!(big_creek.total_acres(), Quantity::Known(dec!(1500)));
    assert_eq!(big_creek.change_in_personnel(), Quantity::Known(dec!(-20)));

    let lone_pine = &northwest.records[2];
    assert_eq!(lone_pine.containment_date, "UNK");
    assert_eq!(lone_pine.total_personnel(), Quantity::Known(dec!(1120)));
    assert_eq!(lone_pine.cost_to_date(), Quantity::Known(dec!(12100000)));

    let great_basin = &report.regions[&2];
    assert_eq!(great_basin.records.len(), 2);
    assert_eq!(great_basin.records[1].incident_name, "Cow Camp");
    assert_eq!(great_basin.narrative, vec!["New fires: 9"]);

    let alaska = &report.regions[&3];
    assert!(alaska.records.is_empty());
    assert_eq!(alaska.narrative, vec!["No new large incidents reported."]);

    assert_eq!(report.incident_count(), 6);
}

#[test]
fn sample_report_diagnostics() {
    let report = extract_report(SAMPLE);

    let reasons: Vec<(&str, &SkipReason)> = report
        .skipped_lines
        .iter()
        .map(|s| (s.text.as_str(), &s.reason))
        .collect();
    assert!(reasons.contains(&(
        "EACC     2",
        &SkipReason::SummaryShort {
            tokens: 2,
            expected: 8
        }
    )));
    assert!(reasons.contains(&("Complex", &SkipReason::Fragment)));
    assert!(reasons.iter().any(|(text, reason)| text.starts_with("Short Row")
        && **reason
            == SkipReason::Malformed {
                tokens: 5,
                expected: 15
            }));
    assert_eq!(report.skipped_lines.len(), 3);

    // Every skipped line points at its source line
    let lines: Vec<&str> = SAMPLE.lines().collect();
    for skipped in &report.skipped_lines {
        assert_eq!(lines[skipped.line_index].trim(), skipped.text);
    }

    // Alaska has no incident table
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].section, "Region_3");
    assert!(report.warnings[0].reason.contains("Incident Name"));
}

#[test]
fn sample_report_national_summary() {
    let report = extract_report(SAMPLE);

    let codes: Vec<&str> = report
        .national_summary
        .iter()
        .map(|r| r.area_code.as_str())
        .collect();
    assert_eq!(codes, vec!["AICC", "NWCC", "GBCC", "Total"]);

    let nwcc = &report.national_summary[1];
    assert_eq!(nwcc.cumulative_acres, "145,678");
    assert_eq!(nwcc.change_in_personnel, "-120");
    assert_eq!(nwcc.total_personnel(), Quantity::Known(dec!(2345)));
    assert!(report.national_summary[3].is_total());
}

#[test]
fn sample_report_header_and_predictive() {
    let report = extract_report(SAMPLE);

    assert_eq!(
        report.header.header_lines,
        vec![
            "National Interagency Fire Center",
            "Incident Management Situation Report",
            "Monday, July 28, 2025 - 0730 MT"
        ]
    );
    assert_eq!(report.header.report_date, "July 28, 2025");
    assert!(report
        .header
        .narrative_summary
        .starts_with("National Preparedness Level 3"));
    assert!(report
        .header
        .narrative_summary
        .ends_with("Area Command Teams committed: 0"));
    assert_eq!(
        report.predictive_summary(),
        "Monsoon moisture continues across the Southwest with\n\
         isolated dry thunderstorms over the Great Basin.\n\n\
         Hot and dry conditions persist in the Northwest."
    );
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------
#[test]
fn every_record_reconstructs_its_line() {
    let report = extract_report(SAMPLE);
    let line_tokens: Vec<Vec<&str>> = SAMPLE
        .lines()
        .map(|l| l.split_whitespace().collect())
        .collect();

    for region in report.regions.values() {
        for record in &region.records {
            assert!(
                line_tokens.contains(&record.tokens()),
                "no source line for {}",
                record.incident_name
            );
        }
    }
}

#[test]
fn extraction_is_idempotent() {
    let first = serde_json::to_string(&extract_report(SAMPLE)).unwrap();
    let second = serde_json::to_string(&extract_report(SAMPLE)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn no_sentinels_gives_empty_regions() {
    let report = extract_report("Just a memo.\nNothing about fires here.\n");
    assert!(report.regions.is_empty());
    assert!(report.region_key().is_empty());
    assert_eq!(report.incident_count(), 0);
}

#[test]
fn label_keeps_priority_level() {
    let report = extract_report(
        "h1\nh2\nh3\nNorthwest Area (PL 3)\nFire Activity and Teams Assigned   Totals\n",
    );
    assert_eq!(report.regions[&1].label(), "Northwest Area (PL 3)");
    assert!(report.region_by_label("Northwest   Area (PL 3)").is_some());
}

#[test]
fn garbage_input_never_panics() {
    for text in [
        "",
        "\n\n\n",
        "\x0c\x0c",
        "Fire Activity and Teams Assigned   Totals",
        "Incident Name\nOwn\nIncident Name",
        "Active Incident Resource Summary\nTotal",
        "Predictive Services",
        "\u{feff}\u{0}ÅÄÖ 🔥 Total Own Incident",
    ] {
        let report = extract_report(text);
        assert_eq!(report.incident_count(), 0, "input: {text:?}");
    }
}

#[test]
fn custom_profile_changes_sentinels() {
    let profile = parse_profile_str(
        r#"{ "name": "relabelled", "region_sentinel": "Teams Assigned Totals" }"#,
    )
    .unwrap();
    let text = SAMPLE.replace("Fire Activity and Teams Assigned   Totals", "Teams Assigned Totals");

    assert!(extract_report(&text).regions.is_empty());
    let report = extract_report_with(&text, &profile);
    assert_eq!(report.regions.len(), 3);
    assert_eq!(report.incident_count(), 6);
}

// ---------------------------------------------------------------------------
// PDF ingestion and runs
// ---------------------------------------------------------------------------
#[test]
fn ingest_pdf_matches_text_extraction() {
    let extractor = MockExtractor {
        pages: sample_pages(),
    };
    let from_pdf = ingest_pdf(&[], &extractor, &Default::default()).unwrap();
    assert_eq!(from_pdf, extract_report(SAMPLE));
}

#[test]
fn ingest_pdf_without_text_is_error() {
    let extractor = MockExtractor {
        pages: vec![page(1, &["", "   "])],
    };
    let err = ingest_pdf(&[], &extractor, &Default::default()).unwrap_err();
    assert!(matches!(err, SitrepError::NoText));
}

#[test]
fn run_from_pdf_file() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("sitreprt.pdf");
    std::fs::write(&pdf, b"%PDF-1.4").unwrap();

    let config = RunConfig::new()
        .with_source(ReportSource::Pdf(pdf))
        .with_data_dir(dir.path());
    let extractor = MockExtractor {
        pages: sample_pages(),
    };
    let report = run(&config, &extractor).unwrap();
    assert_eq!(report.regions.len(), 3);
}

#[test]
fn run_missing_source_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = RunConfig::new()
        .with_source(ReportSource::Text(dir.path().join("missing.txt")))
        .with_data_dir(dir.path());
    let extractor = MockExtractor { pages: vec![] };
    let err = run(&config, &extractor).unwrap_err();
    assert!(matches!(err, SitrepError::SourceNotFound(_)));
}

#[test]
fn run_with_scratch_download_dir_leaves_data_dir_untouched() {
    let data = tempfile::tempdir().unwrap();
    let scratch = tempfile::tempdir().unwrap();
    let config = RunConfig::new()
        .with_source(ReportSource::Remote("http://".into()))
        .with_data_dir(data.path().join("data"));
    let extractor = MockExtractor { pages: vec![] };

    let err = run_with_download_dir(&config, &extractor, scratch.path()).unwrap_err();
    assert!(matches!(err, SitrepError::Http(_)));
    assert!(!config.data_dir.exists());
}

#[test]
fn run_with_scratch_download_dir_reads_local_sources() {
    let dir = tempfile::tempdir().unwrap();
    let text = dir.path().join("sitrep.txt");
    std::fs::write(&text, SAMPLE).unwrap();
    let scratch = tempfile::tempdir().unwrap();
    let config = RunConfig::new()
        .with_source(ReportSource::Text(text))
        .with_data_dir(dir.path().join("data"));
    let extractor = MockExtractor { pages: vec![] };

    let report = run_with_download_dir(&config, &extractor, scratch.path()).unwrap();
    assert_eq!(report, extract_report(SAMPLE));
    assert!(!config.data_dir.exists());
}

#[test]
fn emit_writes_daily_tree() {
    let dir = tempfile::tempdir().unwrap();
    let config = RunConfig::new()
        .with_data_dir(dir.path())
        .with_run_date(sitrep_core::config::parse_date_stamp("20250728").unwrap());
    let report = extract_report(SAMPLE);

    let mut sink = DirectorySink::new(config.output_dir());
    let count = emit_report(&report, &config.date_stamp(), &mut sink).unwrap();
    // national summary, daily summary, predictive, 3 regions, key, summaries
    assert_eq!(count, 8);

    let out = config.output_dir();
    for name in [
        "fire_summary_20250728.json",
        "daily_summary.json",
        "predictive_summary.txt",
    ] {
        assert!(out.join(name).is_file(), "{name} missing");
    }
    let regions = config.regions_dir();
    for name in [
        "Region_1_20250728.json",
        "Region_2_20250728.json",
        "Region_3_20250728.json",
        "region_key_20250728.json",
        "region_summaries_20250728.json",
    ] {
        assert!(regions.join(name).is_file(), "{name} missing");
    }

    let daily: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out.join("daily_summary.json")).unwrap())
            .unwrap();
    let clean = daily["clean_summary"].as_str().unwrap();
    assert!(!clean.contains("Understanding the IMSR"));
    assert!(clean.contains("NIMOs committed: 1\n\nArea Command Teams committed: 0"));

    let region_1: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(regions.join("Region_1_20250728.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(region_1.as_array().unwrap().len(), 4);
    assert_eq!(region_1[3]["Incident Name"], "Grouse Ridge");
}
