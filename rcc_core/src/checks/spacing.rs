//! Bar spacing limits (IS 456 Clause 26.3)

use crate::checks::CheckResult;
use crate::clauses::is456_ref;
use crate::equations::section::bar_area;
use crate::errors::{nonzero, CalcResult};
use crate::member::MemberType;
use crate::settings::SpacingRuleset;

/// Smallest clear spacing: the bar diameter or aggregate + 5 mm
pub fn minimum_spacing(bar_dia: f64, aggregate_size: f64) -> f64 {
    bar_dia.max(aggregate_size + 5.0)
}

/// Largest spacing: slabs are limited to 3d as well as the ruleset cap
pub fn maximum_spacing(member_type: MemberType, effective_depth: f64, ruleset: SpacingRuleset) -> f64 {
    let cap = ruleset.max_spacing();
    match member_type {
        MemberType::Slab => (3.0 * effective_depth).min(cap),
        _ => cap,
    }
}

/// Spacing must fall inside [minimum, maximum]
///
/// # Example
/// ```rust
/// use rcc_core::checks::spacing::check_spacing;
/// use rcc_core::member::MemberType;
/// use rcc_core::settings::SpacingRuleset;
///
/// let result = check_spacing(20.0, MemberType::Beam, 20.0, 450.0, 20.0, SpacingRuleset::Is456);
/// assert!(!result.is_compliant); // needs 25 mm
/// ```
pub fn check_spacing(
    spacing: f64,
    member_type: MemberType,
    bar_dia: f64,
    effective_depth: f64,
    aggregate_size: f64,
    ruleset: SpacingRuleset,
) -> CheckResult {
    let min_spacing = minimum_spacing(bar_dia, aggregate_size);
    let max_spacing = maximum_spacing(member_type, effective_depth, ruleset);

    if spacing < min_spacing {
        return CheckResult::fail(
            is456_ref::MIN_SPACING,
            format!("Minimum spacing required is {}mm, provided {:.1}mm", min_spacing, spacing),
        )
        .with_values(spacing, min_spacing);
    }

    if spacing > max_spacing {
        return CheckResult::fail(
            is456_ref::MAX_SPACING,
            format!("Maximum spacing allowed is {}mm, provided {:.1}mm", max_spacing, spacing),
        )
        .with_values(spacing, max_spacing);
    }

    CheckResult::pass(is456_ref::MIN_SPACING, format!("Bar spacing {:.1}mm is within limits", spacing))
}

/// Centre spacing implied by an aggregate steel area spread across the width.
///
/// n = Ast / (π·φ²/4); spacing = (width − 2·cover)/(n − 1), or the full
/// width when a single bar (or less) is implied.
pub fn estimate_bar_spacing(ast: f64, bar_dia: f64, width: f64, cover: f64) -> CalcResult<f64> {
    let one_bar = nonzero("bar spacing estimate", "bar area", bar_area(bar_dia))?;
    let bar_count = ast / one_bar;
    if bar_count > 1.0 {
        Ok((width - 2.0 * cover) / (bar_count - 1.0))
    } else {
        Ok(width)
    }
}
