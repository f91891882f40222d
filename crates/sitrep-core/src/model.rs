use crate::parsing::normalize::normalize_label;
use crate::parsing::values::{parse_quantity, Quantity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column names of a region incident table, in report order.
pub const INCIDENT_COLUMNS: [&str; 15] = [
    "Incident Name",
    "Unit",
    "Total Acres",
    "Change in Acres",
    "Percent Contained",
    "Containment Estimate Date",
    "Estimated Containment",
    "Total Personnel",
    "Change in Personnel",
    "Crews",
    "Engines",
    "Helicopters",
    "Structures Lost",
    "Cost to Date",
    "Origin/Ownership",
];

/// Column names of the national resource summary table.
pub const SUMMARY_COLUMNS: [&str; 8] = [
    "GACC",
    "Incidents",
    "Cumulative Acres",
    "Crews",
    "Engines",
    "Helicopters",
    "Total Personnel",
    "Change in Personnel",
];

/// One row of a region incident table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentRecord {
    #[serde(rename = "Incident Name")]
    pub incident_name: String,
    #[serde(rename = "Unit")]
    pub unit: String,
    #[serde(rename = "Total Acres")]
    pub total_acres: String,
    #[serde(rename = "Change in Acres")]
    pub change_in_acres: String,
    #[serde(rename = "Percent Contained")]
    pub percent_contained: String,
    #[serde(rename = "Containment Estimate Date")]
    pub containment_date: String,
    #[serde(rename = "Estimated Containment")]
    pub estimated_containment: String,
    #[serde(rename = "Total Personnel")]
    pub total_personnel: String,
    #[serde(rename = "Change in Personnel")]
    pub change_in_personnel: String,
    #[serde(rename = "Crews")]
    pub crews: String,
    #[serde(rename = "Engines")]
    pub engines: String,
    #[serde(rename = "Helicopters")]
    pub helicopters: String,
    #[serde(rename = "Structures Lost")]
    pub structures_lost: String,
    #[serde(rename = "Cost to Date")]
    pub cost_to_date: String,
    #[serde(rename = "Origin/Ownership")]
    pub origin_ownership: String,
}

impl IncidentRecord {
    /// Number of fixed-width columns following the incident name.
    pub const TRAILING_COLUMNS: usize = INCIDENT_COLUMNS.len() - 1;

    /// Build a record from a name and exactly `TRAILING_COLUMNS` trailing tokens.
    ///
    /// Returns None if the name is empty or the trailing token count is wrong.
    pub fn from_parts(name: String, trailing: &[&str]) -> Option<IncidentRecord> {
        if name.is_empty() || trailing.len() != Self::TRAILING_COLUMNS {
            return None;
        }
        let t = |i: usize| trailing[i].to_string();
        Some(IncidentRecord {
            incident_name: name,
            unit: t(0),
            total_acres: t(1),
            change_in_acres: t(2),
            percent_contained: t(3),
            containment_date: t(4),
            estimated_containment: t(5),
            total_personnel: t(6),
            change_in_personnel: t(7),
            crews: t(8),
            engines: t(9),
            helicopters: t(10),
            structures_lost: t(11),
            cost_to_date: t(12),
            origin_ownership: t(13),
        })
    }

    /// Field values in column order.
    pub fn values(&self) -> [&str; 15] {
        [
            self.incident_name.as_str(),
            self.unit.as_str(),
            self.total_acres.as_str(),
            self.change_in_acres.as_str(),
            self.percent_contained.as_str(),
            self.containment_date.as_str(),
            self.estimated_containment.as_str(),
            self.total_personnel.as_str(),
            self.change_in_personnel.as_str(),
            self.crews.as_str(),
            self.engines.as_str(),
            self.helicopters.as_str(),
            self.structures_lost.as_str(),
            self.cost_to_date.as_str(),
            self.origin_ownership.as_str(),
        ]
    }

    /// Whitespace tokens of the source line this record was built from.
    pub fn tokens(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.incident_name.split_whitespace().collect();
        tokens.extend(self.values()[1..].iter().copied());
        tokens
    }

    pub fn total_acres(&self) -> Quantity {
        parse_quantity(&self.total_acres)
    }

    pub fn percent_contained(&self) -> Quantity {
        parse_quantity(&self.percent_contained)
    }

    pub fn total_personnel(&self) -> Quantity {
        parse_quantity(&self.total_personnel)
    }

    pub fn change_in_personnel(&self) -> Quantity {
        parse_quantity(&self.change_in_personnel)
    }

    pub fn cost_to_date(&self) -> Quantity {
        parse_quantity(&self.cost_to_date)
    }
}

/// One row of the national resource summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    #[serde(rename = "GACC")]
    pub area_code: String,
    #[serde(rename = "Incidents")]
    pub incidents: String,
    #[serde(rename = "Cumulative Acres")]
    pub cumulative_acres: String,
    #[serde(rename = "Crews")]
    pub crews: String,
    #[serde(rename = "Engines")]
    pub engines: String,
    #[serde(rename = "Helicopters")]
    pub helicopters: String,
    #[serde(rename = "Total Personnel")]
    pub total_personnel: String,
    #[serde(rename = "Change in Personnel")]
    pub change_in_personnel: String,
}

impl SummaryRecord {
    pub const TRAILING_COLUMNS: usize = SUMMARY_COLUMNS.len() - 1;

    pub fn from_parts(area_code: String, trailing: &[&str]) -> Option<SummaryRecord> {
        if area_code.is_empty() || trailing.len() != Self::TRAILING_COLUMNS {
            return None;
        }
        let t = |i: usize| trailing[i].to_string();
        Some(SummaryRecord {
            area_code,
            incidents: t(0),
            cumulative_acres: t(1),
            crews: t(2),
            engines: t(3),
            helicopters: t(4),
            total_personnel: t(5),
            change_in_personnel: t(6),
        })
    }

    /// Field values in column order.
    pub fn values(&self) -> [&str; 8] {
        [
            self.area_code.as_str(),
            self.incidents.as_str(),
            self.cumulative_acres.as_str(),
            self.crews.as_str(),
            self.engines.as_str(),
            self.helicopters.as_str(),
            self.total_personnel.as_str(),
            self.change_in_personnel.as_str(),
        ]
    }

    pub fn is_total(&self) -> bool {
        self.area_code.starts_with("Total")
    }

    pub fn incidents(&self) -> Quantity {
        parse_quantity(&self.incidents)
    }

    pub fn cumulative_acres(&self) -> Quantity {
        parse_quantity(&self.cumulative_acres)
    }

    pub fn total_personnel(&self) -> Quantity {
        parse_quantity(&self.total_personnel)
    }
}

/// A region block located in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSpan {
    pub label: String,
    /// Index of the label line.
    pub start_line: usize,
    /// Exclusive end: next region's label line, or the document length.
    pub end_line: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionReport {
    #[serde(flatten)]
    pub span: RegionSpan,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub narrative: Vec<String>,
    pub records: Vec<IncidentRecord>,
}

impl RegionReport {
    /// Stable file/record key for the region at a 1-based index.
    pub fn key(index: usize) -> String {
        format!("Region_{index}")
    }

    pub fn label(&self) -> &str {
        &self.span.label
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportHeader {
    pub header_lines: Vec<String>,
    pub narrative_summary: String,
    pub predictive_services_text: String,
    /// First date found in the header or narrative, or empty.
    pub report_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// A lone token, usually a wrapped piece of the previous row.
    Fragment,
    /// Too few tokens to fill the fixed columns.
    Malformed { tokens: usize, expected: usize },
    /// National summary row with too few tokens.
    SummaryShort { tokens: usize, expected: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    pub line_index: usize,
    pub text: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseWarning {
    pub section: String,
    pub reason: String,
}

impl ParseWarning {
    pub fn missing(section: impl Into<String>, sentinel: &str) -> ParseWarning {
        ParseWarning {
            section: section.into(),
            reason: format!("'{sentinel}' not found"),
        }
    }
}

/// Everything extracted from one situation report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub header: ReportHeader,
    pub national_summary: Vec<SummaryRecord>,
    /// Regions keyed by 1-based position in the document.
    pub regions: BTreeMap<usize, RegionReport>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_lines: Vec<SkippedLine>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ParseWarning>,
}

impl Report {
    pub fn predictive_summary(&self) -> &str {
        &self.header.predictive_services_text
    }

    /// Region index -> label mapping.
    pub fn region_key(&self) -> BTreeMap<usize, String> {
        self.regions
            .iter()
            .map(|(i, r)| (*i, r.span.label.clone()))
            .collect()
    }

    /// First region whose label matches, ignoring whitespace differences.
    pub fn region_by_label(&self, label: &str) -> Option<&RegionReport> {
        let wanted = normalize_label(label);
        self.regions
            .values()
            .find(|r| normalize_label(&r.span.label) == wanted)
    }

    pub fn incident_count(&self) -> usize {
        self.regions.values().map(|r| r.records.len()).sum()
    }
}
