use crate::error::SitrepError;
use crate::model::{RegionReport, Report};
use crate::parsing::normalize::{clean_narrative, normalize_label};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Destination for named report collections.
///
/// Names are relative paths such as `regions/Region_1_20250728.json`.
pub trait RecordSink {
    fn write_json(&mut self, name: &str, value: &Value) -> Result<(), SitrepError>;

    fn write_text(&mut self, name: &str, text: &str) -> Result<(), SitrepError>;
}

/// Writes collections as files under a root directory.
#[derive(Debug)]
pub struct DirectorySink {
    root: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> DirectorySink {
        DirectorySink {
            root: root.into(),
            written: Vec::new(),
        }
    }

    /// Paths written so far, in write order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn write_file(&mut self, name: &str, contents: &str) -> Result<(), SitrepError> {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, contents)?;
        log::debug!("wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }
}

impl RecordSink for DirectorySink {
    fn write_json(&mut self, name: &str, value: &Value) -> Result<(), SitrepError> {
        let json = serde_json::to_string_pretty(value)?;
        self.write_file(name, &json)
    }

    fn write_text(&mut self, name: &str, text: &str) -> Result<(), SitrepError> {
        self.write_file(name, text)
    }
}

/// Persist a report as the daily file set, returning the number of
/// collections written.
///
/// Layout relative to the sink root:
/// `fire_summary_<stamp>.json`, `daily_summary.json`,
/// `predictive_summary.txt`, and under `regions/` one
/// `Region_<n>_<stamp>.json` per region plus `region_key_<stamp>.json` and
/// `region_summaries_<stamp>.json`.
pub fn emit_report(
    report: &Report,
    stamp: &str,
    sink: &mut dyn RecordSink,
) -> Result<usize, SitrepError> {
    let mut count = 0;

    sink.write_json(
        &format!("fire_summary_{stamp}.json"),
        &serde_json::to_value(&report.national_summary)?,
    )?;
    count += 1;

    sink.write_json("daily_summary.json", &daily_summary(report))?;
    count += 1;

    sink.write_text("predictive_summary.txt", report.predictive_summary())?;
    count += 1;

    for (index, region) in &report.regions {
        let name = format!("regions/{}_{stamp}.json", RegionReport::key(*index));
        sink.write_json(&name, &serde_json::to_value(&region.records)?)?;
        count += 1;
    }

    let key: BTreeMap<String, &str> = report
        .regions
        .iter()
        .map(|(i, r)| (i.to_string(), r.label()))
        .collect();
    sink.write_json(
        &format!("regions/region_key_{stamp}.json"),
        &serde_json::to_value(key)?,
    )?;
    count += 1;

    let summaries: BTreeMap<String, &[String]> = report
        .regions
        .values()
        .map(|r| (normalize_label(r.label()), r.narrative.as_slice()))
        .collect();
    sink.write_json(
        &format!("regions/region_summaries_{stamp}.json"),
        &serde_json::to_value(summaries)?,
    )?;
    count += 1;

    log::info!(
        "wrote {count} collections ({} regions, {} incidents)",
        report.regions.len(),
        report.incident_count()
    );
    Ok(count)
}

fn daily_summary(report: &Report) -> Value {
    let header = &report.header;
    json!({
        "header": header.header_lines,
        "summary": header.narrative_summary,
        "clean_summary": clean_narrative(&header.narrative_summary),
        "report_date": header.report_date,
    })
}
