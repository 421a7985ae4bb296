use std::io::Write;

use elemfuse_data::ReportRow;
use serde::{Deserialize, Serialize};

use crate::constants::REPORT_HEADER;
use crate::element::Element;
use crate::error::Result;
use crate::fusion::ElementTable;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Tab separated, one line per element under a fixed header
    #[default]
    Tsv,
    /// Pretty-printed JSON array of rows
    Json,
}

/// Derived quantities for one element. Unknown values come out as zero.
pub fn report_row(element: &Element) -> ReportRow {
    ReportRow {
        atomic_number: element.atomic_number(),
        density: element.density().unwrap_or(0.0),
        calculated_density: element.calculated_density(),
        empirical_density: element.empirical_density(),
        calculated_spacing: element.calculated_spacing(),
        empirical_spacing: element.empirical_spacing(),
    }
}

/// Writes one report row per element, in table order.
pub fn write_report<W: Write>(
    elements: &ElementTable,
    mut writer: W,
    format: ReportFormat,
) -> Result<()> {
    let rows: Vec<ReportRow> = elements.iter().map(report_row).collect();
    match format {
        ReportFormat::Tsv => {
            writeln!(writer, "{REPORT_HEADER}")?;
            for row in &rows {
                writeln!(
                    writer,
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    row.atomic_number,
                    row.density,
                    row.calculated_density,
                    row.empirical_density,
                    row.calculated_spacing,
                    row.empirical_spacing
                )?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &rows)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}
