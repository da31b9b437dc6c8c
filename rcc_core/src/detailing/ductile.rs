//! Ductile detailing for seismic zones (SP 34 Section 12)

use crate::checks::CheckResult;
use crate::clauses::sp34_ref;
use crate::errors::{nonzero, CalcResult};
use crate::materials::grades::{ConcreteGrade, SteelGrade};
use crate::materials::Material;

/// Axial stress ratio (σ/fck) at which special confinement becomes mandatory
pub const CONFINEMENT_AXIAL_RATIO: f64 = 0.1;

/// Minimum confinement length regardless of member size (mm)
pub const MIN_CONFINEMENT_LENGTH: f64 = 450.0;

/// Minimum tension steel ratio on each face
pub fn ductile_min_ratio(material: &Material) -> f64 {
    let low_grade_mild = material.concrete_grade() == Some(ConcreteGrade::M15)
        && material.steel_grade() == Some(SteelGrade::Fe250);
    if low_grade_mild {
        0.0035
    } else {
        0.06 * material.fck / material.fy
    }
}

/// Both faces of a ductile beam need at least the minimum ratio over b·d
pub fn check_beam_reinforcement_ratio(
    ast_top: f64,
    ast_bottom: f64,
    width: f64,
    effective_depth: f64,
    material: &Material,
) -> CalcResult<CheckResult> {
    let bd = nonzero("ductile steel ratio", "width x effective depth", width * effective_depth)?;
    let p_min = ductile_min_ratio(material);
    let p_top = ast_top / bd;
    let p_bottom = ast_bottom / bd;

    if p_top < p_min || p_bottom < p_min {
        return Ok(CheckResult::fail(
            sp34_ref::DUCTILE_BEAM_STEEL,
            "Insufficient reinforcement ratio for ductile design",
        )
        .with_values(p_top.min(p_bottom), p_min));
    }

    Ok(CheckResult::pass(
        sp34_ref::DUCTILE_BEAM_STEEL,
        "Reinforcement ratio adequate for ductile design",
    ))
}

/// Stirrup spacing: d/4 over the end zones, d/2 elsewhere
pub fn check_stirrup_spacing(spacing_ends: f64, spacing_middle: f64, effective_depth: f64) -> CheckResult {
    let max_ends = effective_depth / 4.0;
    let max_middle = effective_depth / 2.0;

    if spacing_ends > max_ends {
        return CheckResult::fail(sp34_ref::DUCTILE_STIRRUPS, "Excessive stirrup spacing near beam ends")
            .with_values(spacing_ends, max_ends);
    }
    if spacing_middle > max_middle {
        return CheckResult::fail(sp34_ref::DUCTILE_STIRRUPS, "Excessive stirrup spacing in beam middle")
            .with_values(spacing_middle, max_middle);
    }
    CheckResult::pass(sp34_ref::DUCTILE_STIRRUPS, "Stirrup spacing adequate for ductile design")
}

/// Required confinement length: max(clear height / 6, member dimension, 450)
pub fn confinement_length(member_dimension: f64, clear_height: f64) -> f64 {
    (clear_height / 6.0).max(member_dimension).max(MIN_CONFINEMENT_LENGTH)
}

/// Special confining steel for columns carrying σ ≥ 0.1·fck.
///
/// `provided_length` is `None` when the column has no special confinement.
pub fn check_column_confinement(
    member_dimension: f64,
    clear_height: f64,
    provided_length: Option<f64>,
    axial_stress_ratio: f64,
) -> CheckResult {
    if axial_stress_ratio < CONFINEMENT_AXIAL_RATIO {
        return CheckResult::pass(sp34_ref::CONFINEMENT, "Column confinement adequate");
    }

    let required = confinement_length(member_dimension, clear_height);
    match provided_length {
        None => CheckResult::fail(sp34_ref::CONFINEMENT, "Special confining reinforcement required")
            .with_required(required),
        Some(length) if length < required => {
            CheckResult::fail(sp34_ref::CONFINEMENT, "Insufficient confinement length")
                .with_values(length, required)
        }
        Some(_) => CheckResult::pass(sp34_ref::CONFINEMENT, "Column confinement adequate"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_ratio() {
        assert_eq!(ductile_min_ratio(&Material::new(15.0, 250.0)), 0.0035);
        let p = ductile_min_ratio(&Material::new(25.0, 415.0));
        assert!((p - 0.06 * 25.0 / 415.0).abs() < 1e-12);
        // M15 with high-yield steel uses the formula
        let p = ductile_min_ratio(&Material::new(15.0, 415.0));
        assert!((p - 0.06 * 15.0 / 415.0).abs() < 1e-12);
    }

    #[test]
    fn test_beam_ratio_reports_smaller_face() {
        let m25 = Material::new(25.0, 415.0);
        // p_min ≈ 0.003614; 300·450 = 135000
        let result = check_beam_reinforcement_ratio(300.0, 1000.0, 300.0, 450.0, &m25).unwrap();
        assert!(!result.is_compliant);
        assert!((result.actual_value.unwrap() - 300.0 / 135000.0).abs() < 1e-12);

        assert!(check_beam_reinforcement_ratio(600.0, 1000.0, 300.0, 450.0, &m25)
            .unwrap()
            .is_compliant);
        assert!(check_beam_reinforcement_ratio(600.0, 1000.0, 0.0, 450.0, &m25).is_err());
    }

    #[test]
    fn test_stirrups() {
        assert!(check_stirrup_spacing(100.0, 200.0, 450.0).is_compliant);
        let ends = check_stirrup_spacing(150.0, 200.0, 450.0);
        assert!(!ends.is_compliant);
        assert_eq!(ends.required_value, Some(112.5));
        let middle = check_stirrup_spacing(100.0, 250.0, 450.0);
        assert_eq!(middle.description, "Excessive stirrup spacing in beam middle");
    }

    #[test]
    fn test_confinement() {
        assert!(check_column_confinement(400.0, 3000.0, None, 0.05).is_compliant);

        let missing = check_column_confinement(400.0, 3000.0, None, 0.2);
        assert!(!missing.is_compliant);
        assert_eq!(missing.actual_value, None);
        assert_eq!(missing.required_value, Some(500.0));

        let short = check_column_confinement(600.0, 3000.0, Some(500.0), 0.1);
        assert_eq!(short.required_value, Some(600.0));
        assert!(check_column_confinement(300.0, 2400.0, Some(450.0), 0.3).is_compliant);
    }
}
