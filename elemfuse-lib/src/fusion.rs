use elemfuse_data::{DensityRow, RadiusRow, WeightRow};

use crate::config::Config;
use crate::constants::{ATOMIC_MASS_UNIT, WEIGHT_SCALE};
use crate::element::Element;
use crate::error::{FuseError, Result};
use crate::tables::{self, Table};

/// Elements in radii-table order, addressed by 1-based position.
///
/// The density and weight tables refer to elements by that position, not by
/// symbol, so the radii table defines the index space and the other two
/// tables can only update records that already exist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementTable {
    elements: Vec<Element>,
}

impl ElementTable {
    /// Builds one element per radii row, in row order.
    pub fn from_radii(rows: &[RadiusRow]) -> Result<Self> {
        let mut elements = Vec::with_capacity(rows.len());
        for row in rows {
            let element = Element::new(
                row.atomic_number,
                row.symbol.as_str(),
                row.name.as_str(),
                row.empirical_radius,
                row.calculated_radius,
            )
            .map_err(|source| FuseError::Validation {
                table: Table::Radii,
                line: row.line,
                source,
            })?;

            let position = elements.len() + 1;
            if element.atomic_number() as usize != position {
                log::warn!(
                    "{} table, line {}: {} has atomic number {} but sits at position {}",
                    Table::Radii,
                    row.line,
                    element.symbol(),
                    element.atomic_number(),
                    position
                );
            }
            elements.push(element);
        }
        Ok(ElementTable { elements })
    }

    /// Sets measured density and atoms per volume on the referenced elements.
    ///
    /// All references are checked before any element is touched.
    pub fn apply_densities(&mut self, rows: &[DensityRow]) -> Result<()> {
        for row in rows {
            self.index_of(Table::Densities, row.line, row.reference)?;
        }
        for row in rows {
            let element = self.element_mut(Table::Densities, row.line, row.reference)?;
            element.set_density(row.density);
            element.set_atoms_per_volume(row.atoms_per_volume);
        }
        log::debug!("applied {} density rows", rows.len());
        Ok(())
    }

    /// Sets the per-atom weight (kg) on the referenced elements.
    ///
    /// All references are checked before any element is touched.
    pub fn apply_weights(&mut self, rows: &[WeightRow]) -> Result<()> {
        for row in rows {
            self.index_of(Table::Weights, row.line, row.reference)?;
        }
        for row in rows {
            let element = self.element_mut(Table::Weights, row.line, row.reference)?;
            element.set_weight(row.atomic_mass * ATOMIC_MASS_UNIT * WEIGHT_SCALE);
        }
        log::debug!("applied {} weight rows", rows.len());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at the given 1-based position.
    pub fn get(&self, atomic_number: u32) -> Option<&Element> {
        let index = usize::try_from(atomic_number).ok()?.checked_sub(1)?;
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[Element] {
        &self.elements
    }

    fn index_of(&self, table: Table, line: usize, reference: i64) -> Result<usize> {
        usize::try_from(reference)
            .ok()
            .and_then(|r| r.checked_sub(1))
            .filter(|&index| index < self.elements.len())
            .ok_or(FuseError::Index {
                table,
                line,
                reference,
                len: self.elements.len(),
            })
    }

    fn element_mut(&mut self, table: Table, line: usize, reference: i64) -> Result<&mut Element> {
        let index = self.index_of(table, line, reference)?;
        Ok(&mut self.elements[index])
    }
}

impl<'a> IntoIterator for &'a ElementTable {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Runs the whole load: radii, then densities, then weights.
///
/// Each table is read completely and its file closed before the next one is
/// opened. The first error ends the run.
pub fn fuse(config: &Config) -> Result<ElementTable> {
    let radii = tables::load_radii(&config.sources.radii, &config.radii)?;
    let mut elements = ElementTable::from_radii(&radii)?;

    let densities = tables::load_densities(&config.sources.densities, &config.densities)?;
    elements.apply_densities(&densities)?;

    let weights = tables::load_weights(&config.sources.weights, &config.weights)?;
    elements.apply_weights(&weights)?;

    log::info!("fused {} elements", elements.len());
    Ok(elements)
}
