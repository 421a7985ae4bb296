use std::f64::consts::PI;
use std::fmt;

use crate::constants::PICOMETRE;
use crate::error::ValidationError;

/// Which of the two tabulated atomic radii to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RadiusKind {
    /// Radius measured from bond lengths
    Empirical,
    /// Radius from theoretical models
    Calculated,
}

impl fmt::Display for RadiusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empirical => f.write_str("empirical"),
            Self::Calculated => f.write_str("calculated"),
        }
    }
}

/// One chemical element with its measured and tabulated properties.
///
/// Identity (atomic number, symbol, name) is fixed at construction. The
/// measured quantities start out unknown and are filled in by the density
/// and weight tables. Unknown values are `None`; a raw `0` passed to a
/// setter means "no data".
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    atomic_number: u32,
    symbol: String,
    name: String,
    empirical_radius: Option<u32>,
    calculated_radius: Option<u32>,
    atoms_per_volume: Option<f64>,
    density: Option<f64>,
    weight: Option<f64>,
}

impl Element {
    /// Creates an element from one row of the radii table.
    ///
    /// # Arguments
    /// * `atomic_number` - Must be positive
    /// * `empirical_radius`, `calculated_radius` - Picometers, `0` for no data
    pub fn new(
        atomic_number: i64,
        symbol: impl Into<String>,
        name: impl Into<String>,
        empirical_radius: i64,
        calculated_radius: i64,
    ) -> Result<Self, ValidationError> {
        if atomic_number <= 0 {
            return Err(ValidationError::NonPositiveAtomicNumber(atomic_number));
        }
        let atomic_number = u32::try_from(atomic_number)
            .map_err(|_| ValidationError::AtomicNumberOutOfRange(atomic_number))?;

        Ok(Element {
            atomic_number,
            symbol: symbol.into(),
            name: name.into(),
            empirical_radius: checked_radius(RadiusKind::Empirical, empirical_radius)?,
            calculated_radius: checked_radius(RadiusKind::Calculated, calculated_radius)?,
            atoms_per_volume: None,
            density: None,
            weight: None,
        })
    }

    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn empirical_radius(&self) -> Option<u32> {
        self.empirical_radius
    }

    pub fn calculated_radius(&self) -> Option<u32> {
        self.calculated_radius
    }

    /// Radius of the given kind in picometers.
    pub fn radius(&self, kind: RadiusKind) -> Option<u32> {
        match kind {
            RadiusKind::Empirical => self.empirical_radius,
            RadiusKind::Calculated => self.calculated_radius,
        }
    }

    /// Radius of the given kind in metres.
    pub fn radius_m(&self, kind: RadiusKind) -> Option<f64> {
        self.radius(kind).map(|pm| f64::from(pm) * PICOMETRE)
    }

    pub fn set_empirical_radius(&mut self, radius: i64) -> Result<(), ValidationError> {
        self.empirical_radius = checked_radius(RadiusKind::Empirical, radius)?;
        Ok(())
    }

    pub fn set_calculated_radius(&mut self, radius: i64) -> Result<(), ValidationError> {
        self.calculated_radius = checked_radius(RadiusKind::Calculated, radius)?;
        Ok(())
    }

    pub fn atoms_per_volume(&self) -> Option<f64> {
        self.atoms_per_volume
    }

    pub fn set_atoms_per_volume(&mut self, atoms_per_volume: f64) {
        self.atoms_per_volume = known(atoms_per_volume);
    }

    /// Measured mass density.
    pub fn density(&self) -> Option<f64> {
        self.density
    }

    pub fn set_density(&mut self, density: f64) {
        self.density = known(density);
    }

    /// Mass of one atom in kilograms.
    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = known(weight);
    }

    /// Volume of a sphere with the given radius, in m³. Zero when the radius is unknown.
    pub fn sphere_volume(&self, kind: RadiusKind) -> f64 {
        match self.radius_m(kind) {
            Some(r) => 4.0 * PI * r.powi(3) / 3.0,
            None => 0.0,
        }
    }

    /// Atomic volume paired with the calculated density column.
    ///
    /// Built from the *empirical* radius, matching the established report.
    /// Use [`sphere_volume`](Self::sphere_volume) for an explicit choice.
    pub fn calculated_volume(&self) -> f64 {
        self.sphere_volume(RadiusKind::Empirical)
    }

    /// Atomic volume paired with the empirical density column.
    ///
    /// Built from the *calculated* radius, matching the established report.
    pub fn empirical_volume(&self) -> f64 {
        self.sphere_volume(RadiusKind::Calculated)
    }

    /// Weight over [`calculated_volume`](Self::calculated_volume); zero unless
    /// both are positive.
    pub fn calculated_density(&self) -> f64 {
        self.mass_over(self.calculated_volume())
    }

    /// Weight over [`empirical_volume`](Self::empirical_volume); zero unless
    /// both are positive.
    pub fn empirical_density(&self) -> f64 {
        self.mass_over(self.empirical_volume())
    }

    /// Gap between neighbouring atoms, in metres.
    ///
    /// The measured weight and density give the radius of the sphere each
    /// atom occupies, `r = (3·weight / (4·π·density))^(1/3)`; the spacing is
    /// twice what is left of that radius after subtracting the atomic radius
    /// of the given kind. Returns zero if weight, density or radius is not
    /// positive.
    pub fn interatomic_spacing(&self, kind: RadiusKind) -> f64 {
        let (Some(weight), Some(density), Some(radius)) =
            (self.weight, self.density, self.radius_m(kind))
        else {
            return 0.0;
        };
        if weight <= 0.0 || density <= 0.0 || radius <= 0.0 {
            return 0.0;
        }

        let packing_radius = (3.0 * weight / (4.0 * PI * density)).cbrt();
        2.0 * (packing_radius - radius)
    }

    pub fn calculated_spacing(&self) -> f64 {
        self.interatomic_spacing(RadiusKind::Calculated)
    }

    pub fn empirical_spacing(&self) -> f64 {
        self.interatomic_spacing(RadiusKind::Empirical)
    }

    fn mass_over(&self, volume: f64) -> f64 {
        match self.weight {
            Some(weight) if weight > 0.0 && volume > 0.0 => weight / volume,
            _ => 0.0,
        }
    }
}

fn known(value: f64) -> Option<f64> {
    (value != 0.0).then_some(value)
}

fn checked_radius(kind: RadiusKind, value: i64) -> Result<Option<u32>, ValidationError> {
    if value < 0 {
        return Err(ValidationError::NegativeRadius { kind, value });
    }
    if value == 0 {
        return Ok(None);
    }
    u32::try_from(value)
        .map(Some)
        .map_err(|_| ValidationError::RadiusOutOfRange { kind, value })
}
