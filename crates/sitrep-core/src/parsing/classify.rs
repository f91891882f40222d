use crate::profile::schema::LayoutProfile;
use regex::Regex;
use std::sync::LazyLock;

/// A geographic area caption such as "Northwest Area (PL 3)" or
/// "Great Basin Area (PL 4)". Only the start of the line is matched, so
/// captions carrying trailing layout text still count.
static AREA_CAPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Z][a-z]+ )+Area\b").unwrap());

/// A 3-4 letter uppercase area code (e.g. "NWCC", "SACC") as a whole word.
static AREA_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{3,4}\b").unwrap());

/// Answers categorical questions about single report lines.
///
/// Holds no state besides the profile; every method looks at one line.
#[derive(Debug, Clone, Copy)]
pub struct LineClassifier<'p> {
    profile: &'p LayoutProfile,
}

impl<'p> LineClassifier<'p> {
    pub fn new(profile: &'p LayoutProfile) -> Self {
        LineClassifier { profile }
    }

    pub fn profile(&self) -> &'p LayoutProfile {
        self.profile
    }

    /// The region totals caption. The region label is the line before it.
    pub fn is_region_sentinel(&self, line: &str) -> bool {
        line.contains(&self.profile.region_sentinel)
    }

    pub fn is_column_header(&self, line: &str) -> bool {
        line.contains(&self.profile.column_header)
    }

    pub fn is_header_terminator(&self, line: &str) -> bool {
        line.contains(&self.profile.header_terminator)
    }

    /// Start of the predictive services discussion, which closes the last
    /// region's free text.
    pub fn is_predictive_sentinel(&self, line: &str) -> bool {
        line.contains(&self.profile.predictive_sentinel)
    }

    pub fn is_blank(line: &str) -> bool {
        line.trim().is_empty()
    }

    /// A column header re-emitted after a page break inside a table.
    pub fn is_repeated_header(&self, line: &str) -> bool {
        line.trim_start()
            .starts_with(&self.profile.repeated_header_prefix)
    }

    pub fn is_total(&self, line: &str) -> bool {
        line.trim_start().starts_with(&self.profile.total_prefix)
    }

    /// The caption of the next area block, or a totals row.
    pub fn is_area_caption(&self, line: &str) -> bool {
        let trimmed = line.trim();
        AREA_CAPTION.is_match(trimmed) || self.is_total(trimmed)
    }

    /// A national summary data row: starts with an area code or the totals
    /// word, and is not the column caption line.
    pub fn is_summary_row_start(&self, line: &str) -> bool {
        let trimmed = line.trim();
        if trimmed.starts_with(&self.profile.summary_caption_prefix) {
            return false;
        }
        AREA_CODE.is_match(trimmed) || starts_with_word(trimmed, &self.profile.total_prefix)
    }
}

fn starts_with_word(line: &str, word: &str) -> bool {
    match line.strip_prefix(word) {
        Some(rest) => rest.chars().next().map_or(true, |c| !c.is_alphanumeric()),
        None => false,
    }
}
