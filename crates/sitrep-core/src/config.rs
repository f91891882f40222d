use crate::error::SitrepError;
use crate::extraction::source::ReportSource;
use crate::profile::schema::LayoutProfile;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Where the current situation report is published.
pub const DEFAULT_REPORT_URL: &str = "https://www.nifc.gov/nicc-files/sitreprt.pdf";

pub const DEFAULT_DATA_DIR: &str = "data";

const DATE_STAMP_FORMAT: &str = "%Y%m%d";

/// Settings for one extraction run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: ReportSource,
    pub data_dir: PathBuf,
    pub run_date: NaiveDate,
    pub profile: LayoutProfile,
}

impl RunConfig {
    /// Run against the published report, dated today.
    pub fn new() -> RunConfig {
        RunConfig {
            source: ReportSource::Remote(DEFAULT_REPORT_URL.to_string()),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            run_date: chrono::Local::now().date_naive(),
            profile: LayoutProfile::default(),
        }
    }

    pub fn with_source(mut self, source: ReportSource) -> RunConfig {
        self.source = source;
        self
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> RunConfig {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_run_date(mut self, run_date: NaiveDate) -> RunConfig {
        self.run_date = run_date;
        self
    }

    pub fn with_profile(mut self, profile: LayoutProfile) -> RunConfig {
        self.profile = profile;
        self
    }

    /// Run date as used in file and directory names, e.g. `20250728`.
    pub fn date_stamp(&self) -> String {
        self.run_date.format(DATE_STAMP_FORMAT).to_string()
    }

    /// Directory receiving this run's files.
    pub fn output_dir(&self) -> PathBuf {
        self.data_dir.join(self.date_stamp())
    }

    pub fn regions_dir(&self) -> PathBuf {
        regions_dir(&self.output_dir())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig::new()
    }
}

pub(crate) fn regions_dir(output_dir: &Path) -> PathBuf {
    output_dir.join("regions")
}

/// Parse a `YYYYMMDD` date stamp.
pub fn parse_date_stamp(s: &str) -> Result<NaiveDate, SitrepError> {
    let s = s.trim();
    if s.len() != 8 {
        return Err(SitrepError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, DATE_STAMP_FORMAT)
        .map_err(|_| SitrepError::InvalidDate(s.to_string()))
}
