/// Unified atomic mass unit (kg)
pub const ATOMIC_MASS_UNIT: f64 = 1.66053886e-27;

/// Scale applied on top of the mass unit conversion, carried over from the
/// unit order of the atomic weight source.
pub const WEIGHT_SCALE: f64 = 1000.0;

/// Metres per picometre
pub const PICOMETRE: f64 = 1e-12;

/// Missing-data marker used by the radii table
pub const NO_DATA: &str = "no data";

/// Report header, tab-aligned for terminal output
pub const REPORT_HEADER: &str =
    "Nr.\tDensity\t\tCalculated dens\t\tEmpirical dens\t\tCalc distance\t\t\tEmp distance";
