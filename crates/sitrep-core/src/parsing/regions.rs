use super::classify::LineClassifier;
use crate::model::RegionSpan;

/// Find all region blocks in document order.
///
/// A region starts at the line before each region sentinel (its label) and
/// runs until the next region's label line or the end of the document. A
/// sentinel on the first line has no label and is ignored.
pub fn detect_regions<S: AsRef<str>>(lines: &[S], classifier: &LineClassifier) -> Vec<RegionSpan> {
    let mut spans: Vec<RegionSpan> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if i == 0 || !classifier.is_region_sentinel(line.as_ref()) {
            continue;
        }
        let label = lines[i - 1].as_ref().trim().to_string();
        log::debug!("region detected before line {i}: {label}");
        spans.push(RegionSpan {
            label,
            start_line: i - 1,
            end_line: lines.len(),
        });
    }

    // Each span ends where the next one starts
    let starts: Vec<usize> = spans.iter().map(|s| s.start_line).collect();
    for (span, next_start) in spans.iter_mut().zip(starts.iter().skip(1)) {
        span.end_line = *next_start;
    }

    spans
}

/// Free text of a region between its sentinel line and its table header
/// (or the predictive services discussion, whichever comes first).
///
/// Lines are trimmed; leading and trailing blank lines are dropped, blank
/// lines between paragraphs are kept as empty strings.
pub fn region_narrative<S: AsRef<str>>(
    lines: &[S],
    span: &RegionSpan,
    classifier: &LineClassifier,
) -> Vec<String> {
    let end = span.end_line.min(lines.len());
    let start = (span.start_line + 2).min(end);

    let mut out: Vec<String> = lines[start..end]
        .iter()
        .map(|l| l.as_ref())
        .take_while(|l| {
            !classifier.is_column_header(l) && !classifier.is_predictive_sentinel(l)
        })
        .map(|l| l.trim().to_string())
        .skip_while(|l| l.is_empty())
        .collect();

    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::schema::LayoutProfile;

    const SENTINEL: &str = "Fire Activity and Teams Assigned   Totals";

    #[test]
    fn test_label_is_previous_line() {
        let profile = LayoutProfile::default();
        let c = LineClassifier::new(&profile);
        let lines = vec![
            "Header",
            "  Northwest Area (PL 3)  ",
            "Fire Activity and Teams Assigned   Totals      ",
            "Incident Name",
        ];
        let spans = detect_regions(&lines, &c);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].label, "Northwest Area (PL 3)");
        assert_eq!(spans[0].start_line, 1);
        assert_eq!(spans[0].end_line, 4);
    }

    #[test]
    fn test_spans_are_ordered_and_disjoint() {
        let profile = LayoutProfile::default();
        let c = LineClassifier::new(&profile);
        let lines = vec![
            "Alaska Area (PL 1)",
            SENTINEL,
            "text",
            "Northwest Area (PL 3)",
            SENTINEL,
            "more",
            "Alaska Area (PL 1)",
            SENTINEL,
        ];
        let spans = detect_regions(&lines, &c);
        let labels: Vec<&str> = spans.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Alaska Area (PL 1)", "Northwest Area (PL 3)", "Alaska Area (PL 1)"]
        );
        assert_eq!((spans[0].start_line, spans[0].end_line), (0, 3));
        assert_eq!((spans[1].start_line, spans[1].end_line), (3, 6));
        assert_eq!((spans[2].start_line, spans[2].end_line), (6, 8));
    }

    #[test]
    fn test_sentinel_on_first_line_ignored() {
        let profile = LayoutProfile::default();
        let c = LineClassifier::new(&profile);
        let lines = vec![SENTINEL, "Incident Name"];
        assert!(detect_regions(&lines, &c).is_empty());
    }

    #[test]
    fn test_no_sentinels() {
        let profile = LayoutProfile::default();
        let c = LineClassifier::new(&profile);
        let lines: Vec<&str> = vec!["just", "some", "text"];
        assert!(detect_regions(&lines, &c).is_empty());
        let empty: Vec<String> = Vec::new();
        assert!(detect_regions(&empty, &c).is_empty());
    }

    #[test]
    fn test_region_narrative() {
        let profile = LayoutProfile::default();
        let c = LineClassifier::new(&profile);
        let lines = vec![
            "Northwest Area (PL 3)",
            SENTINEL,
            "",
            "  New fires: 24   ",
            "",
            "  Type 1 IMTs committed: 1",
            "",
            "Incident Name   Unit",
            "                Own",
        ];
        let spans = detect_regions(&lines, &c);
        let narrative = region_narrative(&lines, &spans[0], &c);
        assert_eq!(narrative, vec!["New fires: 24", "", "Type 1 IMTs committed: 1"]);
    }

    #[test]
    fn test_last_region_narrative_stops_at_predictive() {
        let profile = LayoutProfile::default();
        let c = LineClassifier::new(&profile);
        let lines = vec![
            "Alaska Area (PL 1)",
            SENTINEL,
            "No new large incidents reported.",
            "",
            "Predictive Services Discussion",
            "Hot and dry.",
        ];
        let spans = detect_regions(&lines, &c);
        assert_eq!(
            region_narrative(&lines, &spans[0], &c),
            vec!["No new large incidents reported."]
        );
    }
}
