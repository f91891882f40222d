use regex::Regex;
use std::sync::LazyLock;

/// Boilerplate phrases the report repeats around its narrative.
const BOILERPLATE: &[&str] = &["Understanding the IMSR", "IMSR Map"];

static TOTALS_CAPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Fire\s+Activity\s+and\s+Teams\s+Assigned\s+Totals\s*").unwrap());

/// The explanatory block about non-suppression fires that precedes the tables.
static COMP_FIRES_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Fires not managed under a full suppression strategy.*?can be found in the NWCG glossary\s+or here")
        .unwrap()
});

/// Clean a narrative block for display.
///
/// Steps:
/// 1. Remove boilerplate captions and the non-suppression fires block
/// 2. Trim the start of every line
/// 3. Drop lines of 3 characters or fewer (page numbers, stray marks)
/// 4. Add a blank line after "NIMOs committed:" lines
pub fn clean_narrative(text: &str) -> String {
    let mut s = text.to_string();
    for phrase in BOILERPLATE {
        s = s.replace(phrase, "");
    }
    s = TOTALS_CAPTION.replace_all(&s, "").into_owned();
    s = COMP_FIRES_BLOCK.replace_all(&s, "").into_owned();

    let mut out: Vec<&str> = Vec::new();
    for line in s.trim().lines() {
        let line = line.trim_start();
        if line.trim().chars().count() <= 3 {
            continue;
        }
        out.push(line);
        if line.contains("NIMOs committed:") {
            out.push("");
        }
    }

    out.join("\n")
}

/// Normalize a region label for comparison: collapse whitespace runs and trim.
pub fn normalize_label(label: &str) -> String {
    label.split_whitespace().collect::<Vec<_>>().join(" ")
}
