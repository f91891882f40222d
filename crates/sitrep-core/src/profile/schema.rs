use serde::{Deserialize, Serialize};

/// The literal anchors the extraction heuristics search for.
///
/// Every field has a default matching the current report layout, so a
/// profile file only needs the fields that drifted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutProfile {
    pub name: String,
    /// Caption of a region's totals block. The line before it is the region label.
    pub region_sentinel: String,
    /// Opens a region table's column header.
    pub column_header: String,
    /// Closes a (possibly multi-line) column header.
    pub header_terminator: String,
    /// A data line starting with this is a header repeated after a page break.
    pub repeated_header_prefix: String,
    /// Totals rows start with this.
    pub total_prefix: String,
    /// Caption of the national resource summary table.
    pub summary_sentinel: String,
    /// Column caption line of the national summary table.
    pub summary_caption_prefix: String,
    /// Heading of the predictive services discussion.
    pub predictive_sentinel: String,
    /// Number of leading lines kept verbatim as the report header.
    pub header_line_count: usize,
}

impl Default for LayoutProfile {
    fn default() -> Self {
        LayoutProfile {
            name: "imsr".to_string(),
            region_sentinel: "Fire Activity and Teams Assigned   Totals".to_string(),
            column_header: "Incident Name".to_string(),
            header_terminator: "Own".to_string(),
            repeated_header_prefix: "Incident".to_string(),
            total_prefix: "Total".to_string(),
            summary_sentinel: "Active Incident Resource Summary".to_string(),
            summary_caption_prefix: "GACC".to_string(),
            predictive_sentinel: "Predictive Services".to_string(),
            header_line_count: 3,
        }
    }
}
