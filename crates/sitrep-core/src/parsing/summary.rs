use super::classify::LineClassifier;
use super::tokens::{split_right_anchored, token_count};
use crate::model::{SkipReason, SkippedLine, SummaryRecord, SUMMARY_COLUMNS};

#[derive(Debug, Clone, Default)]
pub struct SummaryScan {
    pub records: Vec<SummaryRecord>,
    pub skipped: Vec<SkippedLine>,
    /// False when the summary caption was not in the document.
    pub found: bool,
}

/// Extract the national resource summary table.
///
/// Candidate lines run from after the summary caption up to and including
/// the first totals row. Only lines starting with an area code or the
/// totals word are parsed; the last 7 tokens are the numeric columns and
/// everything before them is the area code.
pub fn extract_national_summary<S: AsRef<str>>(
    lines: &[S],
    classifier: &LineClassifier,
) -> SummaryScan {
    let profile = classifier.profile();
    let Some(caption) = lines
        .iter()
        .position(|l| l.as_ref().contains(&profile.summary_sentinel))
    else {
        log::warn!("'{}' not found", profile.summary_sentinel);
        return SummaryScan::default();
    };

    let mut scan = SummaryScan {
        found: true,
        ..SummaryScan::default()
    };

    for (i, raw) in lines.iter().enumerate().skip(caption + 1) {
        let line = raw.as_ref().trim();
        let is_last = classifier.is_total(line);

        if !line.is_empty() && classifier.is_summary_row_start(line) {
            match split_right_anchored(line, SummaryRecord::TRAILING_COLUMNS)
                .and_then(|(code, trailing)| SummaryRecord::from_parts(code, &trailing))
            {
                Some(record) => scan.records.push(record),
                None => {
                    log::debug!("dropping short summary line {i}: {line}");
                    scan.skipped.push(SkippedLine {
                        line_index: i,
                        text: line.to_string(),
                        reason: SkipReason::SummaryShort {
                            tokens: token_count(line),
                            expected: SUMMARY_COLUMNS.len(),
                        },
                    });
                }
            }
        }

        if is_last {
            break;
        }
    }

    scan
}
