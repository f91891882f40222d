use sitrep_core::error::SitrepError;
use sitrep_core::model::Report;

pub fn print(report: &Report) -> Result<(), SitrepError> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}
