use super::classify::LineClassifier;
use super::tokens::{split_right_anchored, token_count};
use crate::model::{IncidentRecord, SkipReason, SkippedLine, INCIDENT_COLUMNS};
use serde::Serialize;

/// Which structural anchor was missing when a region table could not be located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingAnchor {
    /// The region label does not recur at or after its anchor line.
    Label,
    /// No "Incident Name" line after the label.
    ColumnHeader,
    /// The column header never closes with an "Own" line.
    HeaderTerminator,
}

/// Result of scanning one region's incident table.
#[derive(Debug, Clone, Default)]
pub struct TableScan {
    pub records: Vec<IncidentRecord>,
    pub skipped: Vec<SkippedLine>,
    /// The column header lines, trimmed, as they appeared above the data.
    pub header_lines: Vec<String>,
    pub missing: Option<MissingAnchor>,
}

impl TableScan {
    fn missing(anchor: MissingAnchor) -> TableScan {
        TableScan {
            missing: Some(anchor),
            ..TableScan::default()
        }
    }
}

/// Records of the incident table belonging to `label`.
///
/// See [`scan_region_table`]; this drops the diagnostics.
pub fn parse_region_table<S: AsRef<str>>(
    lines: &[S],
    label: &str,
    anchor: usize,
    classifier: &LineClassifier,
) -> Vec<IncidentRecord> {
    scan_region_table(lines, label, anchor, classifier).records
}

/// Locate and tokenize the incident table of the region labelled `label`.
///
/// The search starts at `anchor` (the region's label line). Data rows follow
/// the line that closes the column header and run until a blank line, the
/// next area caption, or a totals row. A column header repeated after a page
/// break is skipped without ending the table.
///
/// Never fails: a missing anchor yields an empty scan with `missing` set.
pub fn scan_region_table<S: AsRef<str>>(
    lines: &[S],
    label: &str,
    anchor: usize,
    classifier: &LineClassifier,
) -> TableScan {
    let line_at = |i: usize| lines[i].as_ref();
    let find_from = |start: usize, pred: &dyn Fn(&str) -> bool| {
        (start..lines.len()).find(|&i| pred(line_at(i)))
    };

    let Some(label_idx) = find_from(anchor, &|l| l.contains(label)) else {
        log::warn!("region '{label}' not found after line {anchor}");
        return TableScan::missing(MissingAnchor::Label);
    };

    let Some(header_start) = find_from(label_idx + 1, &|l| classifier.is_column_header(l)) else {
        log::warn!("column header not found for region '{label}'");
        return TableScan::missing(MissingAnchor::ColumnHeader);
    };

    let Some(own_idx) = find_from(header_start, &|l| classifier.is_header_terminator(l)) else {
        log::warn!("column header for region '{label}' never closes");
        return TableScan::missing(MissingAnchor::HeaderTerminator);
    };

    let mut scan = TableScan {
        header_lines: (header_start..=own_idx)
            .map(|i| line_at(i).trim().to_string())
            .collect(),
        ..TableScan::default()
    };

    let mut k = own_idx + 1;
    while k < lines.len() {
        let line = line_at(k).trim();

        if LineClassifier::is_blank(line) {
            break;
        }

        // Header re-emitted after a page break: resume after its closing line
        if classifier.is_repeated_header(line) {
            match find_from(k, &|l| classifier.is_header_terminator(l)) {
                Some(next_own) => {
                    k = next_own + 1;
                    continue;
                }
                None => break,
            }
        }

        if classifier.is_area_caption(line) {
            break;
        }

        match tokenize_row(line) {
            Ok(record) => scan.records.push(record),
            Err(reason) => {
                log::debug!("skipping line {k} of region '{label}': {reason:?}");
                scan.skipped.push(SkippedLine {
                    line_index: k,
                    text: line.to_string(),
                    reason,
                });
            }
        }
        k += 1;
    }

    log::info!(
        "region '{}': {} record(s), {} line(s) skipped",
        label,
        scan.records.len(),
        scan.skipped.len()
    );

    scan
}

/// Tokenize one data line into an incident record, anchoring from the right.
pub fn tokenize_row(line: &str) -> Result<IncidentRecord, SkipReason> {
    let count = token_count(line);
    if count == 1 {
        return Err(SkipReason::Fragment);
    }

    let malformed = SkipReason::Malformed {
        tokens: count,
        expected: INCIDENT_COLUMNS.len(),
    };
    let (name, trailing) =
        split_right_anchored(line, IncidentRecord::TRAILING_COLUMNS).ok_or(malformed.clone())?;
    IncidentRecord::from_parts(name, &trailing).ok_or(malformed)
}
