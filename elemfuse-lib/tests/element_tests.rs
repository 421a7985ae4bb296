use std::f64::consts::PI;

use approx::assert_relative_eq;
use elemfuse::constants::{ATOMIC_MASS_UNIT, PICOMETRE, WEIGHT_SCALE};
use elemfuse::{Element, RadiusKind, ValidationError};

fn hydrogen() -> Element {
    let mut h = Element::new(1, "H", "Hydrogen", 25, 53).unwrap();
    h.set_density(0.00009);
    h.set_weight(1.008 * ATOMIC_MASS_UNIT * WEIGHT_SCALE);
    h
}

fn sphere(radius_pm: f64) -> f64 {
    4.0 * PI * (radius_pm * PICOMETRE).powi(3) / 3.0
}

#[test]
fn test_construction() {
    let fe = Element::new(26, "Fe", "Iron", 140, 156).unwrap();
    assert_eq!(fe.atomic_number(), 26);
    assert_eq!(fe.symbol(), "Fe");
    assert_eq!(fe.name(), "Iron");
    assert_eq!(fe.empirical_radius(), Some(140));
    assert_eq!(fe.calculated_radius(), Some(156));
    assert_eq!(fe.density(), None);
    assert_eq!(fe.weight(), None);
    assert_eq!(fe.atoms_per_volume(), None);
}

#[test]
fn test_zero_radius_is_unknown() {
    let he = Element::new(2, "He", "Helium", 0, 31).unwrap();
    assert_eq!(he.empirical_radius(), None);
    assert_eq!(he.radius(RadiusKind::Calculated), Some(31));
}

#[test]
fn test_invalid_atomic_number() {
    assert_eq!(
        Element::new(0, "X", "Nothing", 1, 1),
        Err(ValidationError::NonPositiveAtomicNumber(0))
    );
    assert_eq!(
        Element::new(-4, "X", "Nothing", 1, 1),
        Err(ValidationError::NonPositiveAtomicNumber(-4))
    );
    assert!(matches!(
        Element::new(i64::MAX, "X", "Nothing", 1, 1),
        Err(ValidationError::AtomicNumberOutOfRange(_))
    ));
}

#[test]
fn test_negative_radius() {
    assert_eq!(
        Element::new(3, "Li", "Lithium", -1, 167),
        Err(ValidationError::NegativeRadius {
            kind: RadiusKind::Empirical,
            value: -1
        })
    );
    assert_eq!(
        Element::new(3, "Li", "Lithium", 145, -167),
        Err(ValidationError::NegativeRadius {
            kind: RadiusKind::Calculated,
            value: -167
        })
    );
}

#[test]
fn test_radius_setters_validate() {
    let mut li = Element::new(3, "Li", "Lithium", 145, 167).unwrap();
    li.set_empirical_radius(150).unwrap();
    assert_eq!(li.empirical_radius(), Some(150));
    li.set_calculated_radius(0).unwrap();
    assert_eq!(li.calculated_radius(), None);
    assert!(li.set_calculated_radius(-2).is_err());
    assert_eq!(li.calculated_radius(), None);
}

#[test]
fn test_zero_measurements_are_unknown() {
    let mut h = hydrogen();
    h.set_density(0.0);
    h.set_atoms_per_volume(0.0);
    assert_eq!(h.density(), None);
    assert_eq!(h.atoms_per_volume(), None);
}

#[test]
fn test_radius_in_metres() {
    let h = hydrogen();
    assert_relative_eq!(h.radius_m(RadiusKind::Empirical).unwrap(), 25e-12);
    assert_relative_eq!(h.radius_m(RadiusKind::Calculated).unwrap(), 53e-12);
}

#[test]
fn test_volume_pairing() {
    let h = hydrogen();
    // the calculated volume is built from the empirical radius and vice versa
    assert_relative_eq!(h.calculated_volume(), sphere(25.0), max_relative = 1e-12);
    assert_relative_eq!(h.empirical_volume(), sphere(53.0), max_relative = 1e-12);
    assert_relative_eq!(
        h.sphere_volume(RadiusKind::Calculated),
        h.empirical_volume()
    );
}

#[test]
fn test_densities() {
    let h = hydrogen();
    let weight = h.weight().unwrap();
    assert_relative_eq!(
        h.calculated_density(),
        weight / sphere(25.0),
        max_relative = 1e-12
    );
    assert_relative_eq!(
        h.empirical_density(),
        weight / sphere(53.0),
        max_relative = 1e-12
    );
    assert!(h.calculated_density() > h.empirical_density());
}

#[test]
fn test_density_without_calculated_radius() {
    let mut he = Element::new(2, "He", "Helium", 120, 0).unwrap();
    he.set_weight(4.0026 * ATOMIC_MASS_UNIT * WEIGHT_SCALE);
    assert_eq!(he.empirical_volume(), 0.0);
    assert_eq!(he.empirical_density(), 0.0);
    assert!(he.calculated_density() > 0.0);
}

#[test]
fn test_density_without_weight() {
    let h = Element::new(1, "H", "Hydrogen", 25, 53).unwrap();
    assert_eq!(h.calculated_density(), 0.0);
    assert_eq!(h.empirical_density(), 0.0);
}

#[test]
fn test_density_with_negative_weight() {
    let mut h = hydrogen();
    h.set_weight(-1.0e-24);
    assert_eq!(h.weight(), Some(-1.0e-24));
    assert_eq!(h.calculated_density(), 0.0);
    assert_eq!(h.empirical_density(), 0.0);
}

#[test]
fn test_spacing() {
    let h = hydrogen();
    let weight = h.weight().unwrap();
    let packing = (3.0 * weight / (4.0 * PI * 0.00009)).cbrt();
    assert_relative_eq!(
        h.calculated_spacing(),
        2.0 * (packing - 53e-12),
        max_relative = 1e-12
    );
    assert_relative_eq!(
        h.empirical_spacing(),
        2.0 * (packing - 25e-12),
        max_relative = 1e-12
    );
    assert_eq!(
        h.interatomic_spacing(RadiusKind::Empirical),
        h.empirical_spacing()
    );
}

#[test]
fn test_spacing_zero_without_inputs() {
    let mut h = hydrogen();
    h.set_density(0.0);
    assert_eq!(h.calculated_spacing(), 0.0);
    assert_eq!(h.empirical_spacing(), 0.0);

    let mut h = hydrogen();
    h.set_weight(0.0);
    assert_eq!(h.calculated_spacing(), 0.0);

    let mut h = hydrogen();
    h.set_density(-1.0);
    assert_eq!(h.empirical_spacing(), 0.0);

    let mut h = hydrogen();
    h.set_weight(-1.0);
    assert_eq!(h.calculated_spacing(), 0.0);

    let mut h = hydrogen();
    h.set_empirical_radius(0).unwrap();
    assert_eq!(h.empirical_spacing(), 0.0);
    assert!(h.calculated_spacing() != 0.0);
}

#[test]
fn test_formulas_never_nan() {
    let bare = Element::new(118, "Og", "Oganesson", 0, 0).unwrap();
    for value in [
        bare.calculated_volume(),
        bare.empirical_volume(),
        bare.calculated_density(),
        bare.empirical_density(),
        bare.calculated_spacing(),
        bare.empirical_spacing(),
    ] {
        assert_eq!(value, 0.0);
    }
}
