//! Durability compliance (IS 456 Section 8, Clause 26.4)

use crate::checks::CheckResult;
use crate::clauses::is456_ref;
use crate::member::ExposureCondition;
use crate::tables::exposure_requirements;

/// Nominal cover for the exposure class (Table 16), mm
pub fn minimum_cover(exposure: ExposureCondition) -> f64 {
    exposure_requirements(exposure).nominal_cover
}

/// Cover must be at least the tabulated value and at least the bar diameter
pub fn check_cover(cover: f64, exposure: ExposureCondition, bar_dia: f64) -> CheckResult {
    let required = minimum_cover(exposure).max(bar_dia);

    if cover < required {
        return CheckResult::fail(
            is456_ref::COVER,
            format!(
                "Minimum cover required is {}mm for {} exposure, provided {}mm",
                required, exposure, cover
            ),
        )
        .with_values(cover, required);
    }

    CheckResult::pass(
        is456_ref::COVER,
        format!("Cover {}mm satisfies requirement for {} exposure", cover, exposure),
    )
    .with_values(cover, required)
}

/// Minimum cement content and maximum w/c ratio for the exposure (Table 5).
///
/// Mix proportions are not part of the member record, so this is an
/// advisory: it always passes and carries the limits in its description.
pub fn cement_and_water_cement_ratio(exposure: ExposureCondition, _fck: f64) -> CheckResult {
    let row = exposure_requirements(exposure);
    CheckResult::pass(
        is456_ref::CEMENT_CONTENT,
        format!(
            "Minimum cement content: {} kg/m³, Maximum W/C ratio: {:.2}",
            row.min_cement_content, row.max_water_cement_ratio
        ),
    )
    .with_remarks("Advisory: verify against the mix design")
}
