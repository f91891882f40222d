use super::classify::LineClassifier;
use crate::model::ReportHeader;
use regex::Regex;
use std::sync::LazyLock;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},\s+\d{4}\b|\b\d{1,2}/\d{1,2}/\d{4}\b",
    )
    .unwrap()
});

/// Extract the report front matter: header lines, narrative summary,
/// predictive services discussion and report date.
pub fn extract_header<S: AsRef<str>>(lines: &[S], classifier: &LineClassifier) -> ReportHeader {
    let profile = classifier.profile();
    let header_count = profile.header_line_count.min(lines.len());

    let header_lines: Vec<String> = lines[..header_count]
        .iter()
        .map(|l| l.as_ref().to_string())
        .collect();

    let summary_idx = find_line(lines, &profile.summary_sentinel);
    let predictive_idx = find_line(lines, &profile.predictive_sentinel);

    let narrative_summary = match summary_idx.or(predictive_idx) {
        Some(end) if end > header_count => join_trimmed(&lines[header_count..end]),
        _ => String::new(),
    };

    let predictive_services_text = match predictive_idx {
        Some(idx) => paragraphs(&lines[idx + 1..]),
        None => String::new(),
    };

    let report_date = header_lines
        .iter()
        .map(String::as_str)
        .chain(narrative_summary.lines())
        .find_map(find_date)
        .unwrap_or_default();

    ReportHeader {
        header_lines,
        narrative_summary,
        predictive_services_text,
        report_date,
    }
}

/// First date in a line, as written ("July 28, 2025" or "7/28/2025").
pub fn find_date(line: &str) -> Option<String> {
    DATE_RE.find(line).map(|m| m.as_str().to_string())
}

fn find_line<S: AsRef<str>>(lines: &[S], needle: &str) -> Option<usize> {
    lines.iter().position(|l| l.as_ref().contains(needle))
}

fn join_trimmed<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(|l| l.as_ref())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Join lines into paragraphs: consecutive text lines are joined with a
/// newline, and any run of blank lines becomes one paragraph break.
fn paragraphs<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            if !current.is_empty() {
                out.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current.join("\n"));
    }

    out.join("\n\n").trim().to_string()
}
