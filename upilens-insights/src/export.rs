//! Export forms for an assembled ledger: a flat CSV table and the
//! condensed line form fed to an external summarization collaborator.

use anyhow::Result;
use std::io::Write;
use upilens_core::TransactionRecord;

/// CSV columns, one per record field.
const CSV_HEADER: [&str; 7] = [
    "Date",
    "Description",
    "Amount",
    "Category",
    "Type",
    "Month_Year",
    "Full_Date",
];

/// Write records as a flat CSV table. `Full_Date` is empty for records
/// whose timestamp never resolved.
pub fn write_csv<W: Write>(records: &[TransactionRecord], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_HEADER)?;
    for r in records {
        let full_date = r
            .resolved_at
            .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();
        writer.write_record([
            r.display_date.clone(),
            r.description.clone(),
            format!("{:.2}", r.amount),
            r.category.clone(),
            r.txn_type.to_string(),
            r.month_bucket.clone(),
            full_date,
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Condensed one-line-per-record form,
/// `<date> | <description> | <amount> | <category>`, sized for prompting
/// an external report generator.
pub fn condensed_lines(records: &[TransactionRecord]) -> String {
    records
        .iter()
        .map(|r| {
            format!(
                "{} | {} | {:.2} | {}",
                r.display_date, r.description, r.amount, r.category
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
