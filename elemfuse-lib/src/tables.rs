use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use elemfuse_data::{DensityRow, RadiusRow, WeightRow};

use crate::config::{DensityLayout, RadiiLayout, WeightLayout};
use crate::error::{FuseError, Result};
use crate::normalize::{density_cell, radius_cell, weight_cell};

/// The three source tables, in the order they are fused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Radii,
    Densities,
    Weights,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Radii => f.write_str("atomic radii"),
            Self::Densities => f.write_str("density"),
            Self::Weights => f.write_str("atomic weight"),
        }
    }
}

/// Parse the atomic radii table.
///
/// Format: comma separated, one element per line:
///   atomic_number, symbol, name, empirical_radius, calculated_radius
/// Radii are in picometers; `no data` is read as 0.
pub fn read_radii<R: BufRead>(reader: R, layout: &RadiiLayout) -> Result<Vec<RadiusRow>> {
    let mut rows = Vec::new();
    for (line, text) in data_lines(reader, layout.has_header)? {
        let cells = Cells::split(Table::Radii, line, &text, layout.min_columns())?;
        rows.push(RadiusRow {
            line,
            atomic_number: cells.parse(layout.atomic_number)?,
            symbol: cells.text(layout.symbol).to_string(),
            name: cells.text(layout.name).to_string(),
            empirical_radius: cells.parse_with(layout.empirical, radius_cell)?,
            calculated_radius: cells.parse_with(layout.calculated, radius_cell)?,
        });
    }
    Ok(rows)
}

/// Parse the measured density table.
///
/// Density and atoms-per-volume cells may carry units and notes, e.g.
/// `1.2(g/cm3)`; these are stripped before parsing.
pub fn read_densities<R: BufRead>(reader: R, layout: &DensityLayout) -> Result<Vec<DensityRow>> {
    let mut rows = Vec::new();
    for (line, text) in data_lines(reader, layout.has_header)? {
        let cells = Cells::split(Table::Densities, line, &text, layout.min_columns())?;
        rows.push(DensityRow {
            line,
            reference: cells.parse(layout.reference)?,
            density: cells.parse_float(layout.density, density_cell)?,
            atoms_per_volume: cells.parse_float(layout.atoms_per_volume, density_cell)?,
        });
    }
    Ok(rows)
}

/// Parse the atomic weight table. Weights stay in atomic mass units.
pub fn read_weights<R: BufRead>(reader: R, layout: &WeightLayout) -> Result<Vec<WeightRow>> {
    let mut rows = Vec::new();
    for (line, text) in data_lines(reader, layout.has_header)? {
        let cells = Cells::split(Table::Weights, line, &text, layout.min_columns())?;
        rows.push(WeightRow {
            line,
            reference: cells.parse(layout.reference)?,
            atomic_mass: cells.parse_float(layout.weight, weight_cell)?,
        });
    }
    Ok(rows)
}

pub fn load_radii(path: &Path, layout: &RadiiLayout) -> Result<Vec<RadiusRow>> {
    let rows = load(Table::Radii, path, |reader| read_radii(reader, layout))?;
    log::info!("{}: {} elements", Table::Radii, rows.len());
    Ok(rows)
}

pub fn load_densities(path: &Path, layout: &DensityLayout) -> Result<Vec<DensityRow>> {
    let rows = load(Table::Densities, path, |reader| read_densities(reader, layout))?;
    log::info!("{}: {} entries", Table::Densities, rows.len());
    Ok(rows)
}

pub fn load_weights(path: &Path, layout: &WeightLayout) -> Result<Vec<WeightRow>> {
    let rows = load(Table::Weights, path, |reader| read_weights(reader, layout))?;
    log::info!("{}: {} entries", Table::Weights, rows.len());
    Ok(rows)
}

fn load<T>(
    table: Table,
    path: &Path,
    read: impl FnOnce(BufReader<File>) -> Result<T>,
) -> Result<T> {
    let resource = |source: io::Error| FuseError::Resource {
        table,
        path: path.to_path_buf(),
        source,
    };
    log::debug!("reading {table} table from {path:?}");
    let file = File::open(path).map_err(resource)?;
    read(BufReader::new(file)).map_err(|e| match e {
        FuseError::Io(source) => resource(source),
        other => other,
    })
}

/// Non-blank lines with their 1-based line numbers, header removed.
fn data_lines<R: BufRead>(reader: R, has_header: bool) -> Result<Vec<(usize, String)>> {
    let mut lines = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if has_header && index == 0 {
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        lines.push((index + 1, line));
    }
    Ok(lines)
}

struct Cells<'a> {
    table: Table,
    line: usize,
    cells: Vec<&'a str>,
}

impl<'a> Cells<'a> {
    fn split(table: Table, line: usize, text: &'a str, min_columns: usize) -> Result<Self> {
        let cells: Vec<&str> = text.split(',').map(str::trim).collect();
        if cells.len() < min_columns {
            return Err(FuseError::Format {
                table,
                line,
                column: cells.len(),
                cell: text.trim_end().to_string(),
                reason: format!(
                    "expected at least {min_columns} columns, found {}",
                    cells.len()
                ),
            });
        }
        Ok(Cells { table, line, cells })
    }

    fn text(&self, column: usize) -> &'a str {
        self.cells[column]
    }

    fn parse<T>(&self, column: usize) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.parse_with(column, str::to_string)
    }

    fn parse_with<T>(&self, column: usize, clean: impl Fn(&str) -> String) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        clean(self.text(column))
            .parse::<T>()
            .map_err(|e| self.format_error(column, e.to_string()))
    }

    /// Like [`parse_with`](Self::parse_with), but overflow to infinity is an error.
    fn parse_float(&self, column: usize, clean: impl Fn(&str) -> String) -> Result<f64> {
        let value: f64 = self.parse_with(column, clean)?;
        if !value.is_finite() {
            return Err(self.format_error(column, "value is not a finite number".to_string()));
        }
        Ok(value)
    }

    fn format_error(&self, column: usize, reason: String) -> FuseError {
        FuseError::Format {
            table: self.table,
            line: self.line,
            column,
            cell: self.text(column).to_string(),
            reason,
        }
    }
}
