use rust_decimal::Decimal;
use sitrep_core::model::{IncidentRecord, Report, SummaryRecord, SUMMARY_COLUMNS};
use sitrep_core::parsing::normalize::clean_narrative;

pub fn print(report: &Report) {
    let header = &report.header;
    for line in &header.header_lines {
        println!("{}", line.trim());
    }
    println!();

    let summary = clean_narrative(&header.narrative_summary);
    if !summary.is_empty() {
        println!("{summary}\n");
    }

    if !report.national_summary.is_empty() {
        println!("=== National summary ===\n");
        print_summary(&report.national_summary);
        println!();
    }

    for (index, region) in &report.regions {
        println!("=== {}. {} ===\n", index, region.label());
        for line in &region.narrative {
            println!("  {line}");
        }
        if !region.narrative.is_empty() {
            println!();
        }

        if region.records.is_empty() {
            println!("  No incidents listed.\n");
            continue;
        }
        print_incidents(&region.records);
        println!();
    }

    if !report.predictive_summary().is_empty() {
        println!("=== Predictive services ===\n");
        println!("{}\n", report.predictive_summary());
    }
}

fn print_summary(rows: &[SummaryRecord]) {
    let widths: Vec<usize> = SUMMARY_COLUMNS
        .iter()
        .enumerate()
        .map(|(i, title)| {
            rows.iter()
                .map(|r| r.values()[i].len())
                .max()
                .unwrap_or(0)
                .max(title.len())
        })
        .collect();

    let cells = |values: [&str; 8]| -> String {
        values
            .iter()
            .zip(&widths)
            .map(|(v, w)| format!("{v:>w$}", w = *w))
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!("  {}", cells(SUMMARY_COLUMNS));
    for row in rows {
        println!("  {}", cells(row.values()));
    }

    let areas: Vec<&SummaryRecord> = rows.iter().filter(|r| !r.is_total()).collect();
    let incidents: Decimal = areas.iter().map(|r| r.incidents().or_zero()).sum();
    let acres: Decimal = areas.iter().map(|r| r.cumulative_acres().or_zero()).sum();
    println!(
        "\n  {} area(s): {} incident(s), {} acre(s)",
        areas.len(),
        incidents,
        acres
    );
}

fn print_incidents(records: &[IncidentRecord]) {
    let max_name = records
        .iter()
        .map(|r| r.incident_name.len())
        .max()
        .unwrap_or(10)
        .max("Incident".len());

    println!(
        "  {:<width$}  {:<8}  {:>12}  {:>5}  {:>9}  {:>14}  Origin",
        "Incident",
        "Unit",
        "Acres",
        "% Ctn",
        "Personnel",
        "Cost",
        width = max_name
    );

    let mut total_acres = Decimal::ZERO;
    let mut total_personnel = Decimal::ZERO;
    for r in records {
        println!(
            "  {:<width$}  {:<8}  {:>12}  {:>5}  {:>9}  {:>14}  {}",
            r.incident_name,
            r.unit,
            r.total_acres().to_string(),
            r.percent_contained().to_string(),
            r.total_personnel().to_string(),
            r.cost_to_date().to_string(),
            r.origin_ownership,
            width = max_name
        );
        total_acres += r.total_acres().or_zero();
        total_personnel += r.total_personnel().or_zero();
    }

    println!(
        "  {:<width$}  {:<8}  {:>12}  {:>5}  {:>9}",
        "Total",
        "",
        total_acres.to_string(),
        "",
        total_personnel.to_string(),
        width = max_name
    );
}
