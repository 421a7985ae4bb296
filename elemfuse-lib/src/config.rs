use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FuseError, Result};
use crate::report::ReportFormat;

/// Everything a fusion run needs: where the three tables live, how their
/// columns are laid out, and how to print the result.
///
/// Every field has a default, so a TOML file only names what it changes:
///
/// ```
/// let config = elemfuse::Config::from_toml_str(
///     "[sources]\nradii = \"data/radii.csv\"\n\n[weights]\nhas_header = false\n",
/// )
/// .unwrap();
/// assert_eq!(config.sources.radii, std::path::PathBuf::from("data/radii.csv"));
/// assert!(!config.weights.has_header);
/// assert!(config.densities.has_header);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub sources: SourcePaths,
    pub radii: RadiiLayout,
    pub densities: DensityLayout,
    pub weights: WeightLayout,
    pub report: ReportConfig,
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| FuseError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| FuseError::Config(format!("cannot read {path:?}: {e}")))?;
        Self::from_toml_str(&text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourcePaths {
    pub radii: PathBuf,
    pub densities: PathBuf,
    pub weights: PathBuf,
}

impl Default for SourcePaths {
    fn default() -> Self {
        SourcePaths {
            radii: PathBuf::from("atomicRadii.csv"),
            densities: PathBuf::from("numericDensities.csv"),
            weights: PathBuf::from("atomicWeight.csv"),
        }
    }
}

/// Column positions (0-based) in the atomic radii table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RadiiLayout {
    pub has_header: bool,
    pub atomic_number: usize,
    pub symbol: usize,
    pub name: usize,
    pub empirical: usize,
    pub calculated: usize,
}

impl Default for RadiiLayout {
    fn default() -> Self {
        RadiiLayout {
            has_header: true,
            atomic_number: 0,
            symbol: 1,
            name: 2,
            empirical: 3,
            calculated: 4,
        }
    }
}

impl RadiiLayout {
    pub fn min_columns(&self) -> usize {
        [
            self.atomic_number,
            self.symbol,
            self.name,
            self.empirical,
            self.calculated,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
            + 1
    }
}

/// Column positions (0-based) in the measured density table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DensityLayout {
    pub has_header: bool,
    pub density: usize,
    pub atoms_per_volume: usize,
    pub reference: usize,
}

impl Default for DensityLayout {
    fn default() -> Self {
        DensityLayout {
            has_header: true,
            density: 2,
            atoms_per_volume: 3,
            reference: 4,
        }
    }
}

impl DensityLayout {
    pub fn min_columns(&self) -> usize {
        self.density.max(self.atoms_per_volume).max(self.reference) + 1
    }
}

/// Column positions (0-based) in the atomic weight table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeightLayout {
    pub has_header: bool,
    pub reference: usize,
    pub weight: usize,
}

impl Default for WeightLayout {
    fn default() -> Self {
        WeightLayout {
            has_header: true,
            reference: 0,
            weight: 4,
        }
    }
}

impl WeightLayout {
    pub fn min_columns(&self) -> usize {
        self.reference.max(self.weight) + 1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub format: ReportFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.densities.reference, 4);
        assert_eq!(config.weights.weight, 4);
        assert_eq!(config.report.format, ReportFormat::Tsv);
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml_str(
            r#"
            [densities]
            density = 1
            atoms_per_volume = 2

            [report]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.densities.density, 1);
        assert_eq!(config.densities.atoms_per_volume, 2);
        assert_eq!(config.densities.reference, 4);
        assert!(config.densities.has_header);
        assert_eq!(config.report.format, ReportFormat::Json);
        assert_eq!(config.sources, SourcePaths::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::from_toml_str("[sources]\nradius = \"x.csv\"\n").unwrap_err();
        assert!(matches!(err, FuseError::Config(_)));
    }

    #[test]
    fn test_min_columns() {
        assert_eq!(RadiiLayout::default().min_columns(), 5);
        assert_eq!(DensityLayout::default().min_columns(), 5);
        assert_eq!(WeightLayout::default().min_columns(), 5);
        let layout = WeightLayout {
            reference: 7,
            ..WeightLayout::default()
        };
        assert_eq!(layout.min_columns(), 8);
    }

    #[test]
    fn test_missing_config_file() {
        let err = Config::load(Path::new("/nonexistent/elemfuse.toml")).unwrap_err();
        assert!(matches!(err, FuseError::Config(_)));
    }
}
