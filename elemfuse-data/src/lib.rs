#![no_std]

extern crate alloc;

use alloc::string::String;
use serde::{Deserialize, Serialize};

/// One row of the atomic radii table.
///
/// Radii are in picometers; `0` marks a cell that held no data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiusRow {
    pub line: usize,
    pub atomic_number: i64,
    pub symbol: String,
    pub name: String,
    pub empirical_radius: i64,
    pub calculated_radius: i64,
}

/// One row of the measured density table.
///
/// `reference` is the 1-based position of the target element in the radii table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityRow {
    pub line: usize,
    pub reference: i64,
    pub density: f64,
    pub atoms_per_volume: f64,
}

/// One row of the atomic weight table, mass still in atomic mass units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRow {
    pub line: usize,
    pub reference: i64,
    pub atomic_mass: f64,
}

/// Derived quantities for one element, as printed in the report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub atomic_number: u32,
    pub density: f64,
    pub calculated_density: f64,
    pub empirical_density: f64,
    pub calculated_spacing: f64,
    pub empirical_spacing: f64,
}
