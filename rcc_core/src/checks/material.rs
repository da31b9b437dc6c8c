//! Material compliance (IS 456 Clauses 5.6, 6.1)
//!
//! Grade membership is a checked property: a [`Material`](crate::materials::Material)
//! with fck = 22 is a valid record that fails [`validate_grade`].

use crate::checks::{format_list, CheckResult};
use crate::clauses::is456_ref;
use crate::materials::{ConcreteGrade, SteelGrade};
use crate::member::{ConcreteType, ExposureCondition, MemberType};
use crate::tables::exposure_requirements;

/// Concrete grade must be one of M15..M80
///
/// # Example
/// ```rust
/// use rcc_core::checks::material::validate_grade;
///
/// assert!(validate_grade(25.0).is_compliant);
/// assert!(!validate_grade(22.0).is_compliant);
/// ```
pub fn validate_grade(fck: f64) -> CheckResult {
    if ConcreteGrade::from_fck(fck).is_none() {
        let valid = format_list(ConcreteGrade::ALL.iter().map(|g| g.fck()));
        return CheckResult::fail(
            is456_ref::CONCRETE_GRADE,
            format!("Invalid concrete grade M{}. Valid grades: {}", fck, valid),
        )
        .with_remarks(format!("Valid grades: {}", valid));
    }
    CheckResult::pass(is456_ref::CONCRETE_GRADE, format!("Concrete grade M{} is valid", fck))
}

/// Steel grade must be one of Fe250, Fe415, Fe500, Fe550
pub fn validate_steel_grade(fy: f64) -> CheckResult {
    if SteelGrade::from_fy(fy).is_none() {
        let valid = format_list(SteelGrade::ALL.iter().map(|g| g.fy()));
        return CheckResult::fail(
            is456_ref::STEEL_GRADE,
            format!("Invalid steel grade Fe{}. Valid grades: {}", fy, valid),
        );
    }
    CheckResult::pass(is456_ref::STEEL_GRADE, format!("Steel grade Fe{} is valid", fy))
}

/// Minimum concrete grade for the exposure class (Table 5).
///
/// The requirement is the same for every member type; `member_type` is kept
/// so callers state what they are checking.
pub fn minimum_grade_for_exposure(
    _member_type: MemberType,
    fck: f64,
    exposure: ExposureCondition,
    concrete_type: ConcreteType,
) -> CheckResult {
    let row = exposure_requirements(exposure);
    let required = match concrete_type {
        ConcreteType::Plain => row.min_grade_plain,
        ConcreteType::Reinforced => row.min_grade_reinforced,
    };

    if fck < required {
        return CheckResult::fail(
            is456_ref::MINIMUM_GRADE,
            format!(
                "Minimum concrete grade for {} exposure is M{}, provided M{}",
                exposure, required, fck
            ),
        )
        .with_values(fck, required);
    }

    CheckResult::pass(
        is456_ref::MINIMUM_GRADE,
        format!(
            "Concrete grade M{} satisfies minimum requirement for {} exposure",
            fck, exposure
        ),
    )
    .with_values(fck, required)
}
