pub mod classify;
pub mod header;
pub mod normalize;
pub mod regions;
pub mod summary;
pub mod table;
pub mod tokens;
pub mod values;

use crate::extraction::PageContent;
use crate::model::{ParseWarning, RegionReport, Report};
use crate::profile::schema::LayoutProfile;
use classify::LineClassifier;
use header::extract_header;
use regions::{detect_regions, region_narrative};
use summary::extract_national_summary;
use table::{scan_region_table, MissingAnchor};

/// The full report text as an ordered list of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Split text into lines. Form feeds (pdftotext page breaks) end a line.
    pub fn from_text(text: &str) -> Document {
        let lines = text
            .split('\x0c')
            .flat_map(str::lines)
            .map(|l| l.to_string())
            .collect();
        Document { lines }
    }

    /// Concatenate extracted pages in page order.
    pub fn from_pages(pages: &[PageContent]) -> Document {
        let lines = pages.iter().flat_map(|p| p.lines.iter().cloned()).collect();
        Document { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }
}

/// Run every extractor over a document and assemble the report.
///
/// Never fails. Missing anchors become warnings and the affected section
/// stays empty; unparseable rows become skipped-line entries.
pub fn parse_document(doc: &Document, profile: &LayoutProfile) -> Report {
    let lines = doc.lines();
    let classifier = LineClassifier::new(profile);
    let mut report = Report {
        header: extract_header(lines, &classifier),
        ..Report::default()
    };

    if !lines.iter().any(|l| classifier.is_predictive_sentinel(l)) {
        report
            .warnings
            .push(ParseWarning::missing("predictive services", &profile.predictive_sentinel));
    }

    let summary = extract_national_summary(lines, &classifier);
    if !summary.found {
        report
            .warnings
            .push(ParseWarning::missing("national summary", &profile.summary_sentinel));
    }
    report.national_summary = summary.records;
    report.skipped_lines.extend(summary.skipped);

    let spans = detect_regions(lines, &classifier);
    if spans.is_empty() {
        log::info!("no regions found");
    }

    for (i, span) in spans.into_iter().enumerate() {
        let scan = scan_region_table(lines, &span.label, span.start_line, &classifier);
        if let Some(anchor) = scan.missing {
            let sentinel = match anchor {
                MissingAnchor::Label => span.label.as_str(),
                MissingAnchor::ColumnHeader => profile.column_header.as_str(),
                MissingAnchor::HeaderTerminator => profile.header_terminator.as_str(),
            };
            report
                .warnings
                .push(ParseWarning::missing(RegionReport::key(i + 1), sentinel));
        }
        report.skipped_lines.extend(scan.skipped);

        let narrative = region_narrative(lines, &span, &classifier);
        report.regions.insert(
            i + 1,
            RegionReport {
                span,
                narrative,
                records: scan.records,
            },
        );
    }

    report
}
