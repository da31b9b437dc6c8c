//! Slab detailing (SP 34 Section 9)

use serde::{Deserialize, Serialize};

use crate::checks::CheckResult;
use crate::clauses::sp34_ref;
use crate::errors::CalcResult;
use crate::reinforcement::total_area;

use super::{DetailingRequest, DetailingResults};

/// Which layer of slab steel a spacing applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlabSteel {
    Main,
    Distribution,
}

impl SlabSteel {
    /// Largest spacing: 3d for main steel, 5d for distribution steel, never over 450
    pub fn max_spacing(&self, effective_depth: f64) -> f64 {
        let multiple = match self {
            SlabSteel::Main => 3.0,
            SlabSteel::Distribution => 5.0,
        };
        (multiple * effective_depth).min(450.0)
    }

    fn label(&self) -> &'static str {
        match self {
            SlabSteel::Main => "main reinforcement",
            SlabSteel::Distribution => "distribution reinforcement",
        }
    }
}

/// Support at a slab corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerCondition {
    #[default]
    Continuous,
    SimplySupportedBothEdges,
}

/// Slab-specific detailing inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlabDetails {
    /// Deformed bars (0.12% minimum) or plain bars (0.15%)
    pub deformed: bool,
    /// Main steel spacing (mm)
    pub main_spacing: f64,
    /// Distribution steel spacing (mm)
    pub dist_spacing: f64,
    pub corner: CornerCondition,
    /// Torsion steel provided at the corner (mm²), if any
    pub torsion_steel: Option<f64>,
    /// Shorter span (mm); the member length when absent
    pub shorter_span: Option<f64>,
}

impl Default for SlabDetails {
    fn default() -> Self {
        SlabDetails {
            deformed: true,
            main_spacing: 200.0,
            dist_spacing: 300.0,
            corner: CornerCondition::Continuous,
            torsion_steel: None,
            shorter_span: None,
        }
    }
}

/// 0.12% (deformed) or 0.15% (plain) of the gross section
pub fn check_minimum_steel(ast: f64, gross_area: f64, deformed: bool) -> CheckResult {
    let percent = if deformed { 0.12 } else { 0.15 };
    let required = percent / 100.0 * gross_area;
    if ast < required {
        return CheckResult::fail(sp34_ref::SLAB_MIN_STEEL, "Insufficient minimum reinforcement in slab")
            .with_values(ast, required);
    }
    CheckResult::pass(sp34_ref::SLAB_MIN_STEEL, "Minimum reinforcement adequate")
}

pub fn check_spacing(spacing: f64, effective_depth: f64, steel: SlabSteel) -> CheckResult {
    let max_spacing = steel.max_spacing(effective_depth);
    if spacing > max_spacing {
        return CheckResult::fail(
            sp34_ref::SLAB_SPACING,
            format!("Excessive spacing for {}", steel.label()),
        )
        .with_values(spacing, max_spacing);
    }
    CheckResult::pass(
        sp34_ref::SLAB_SPACING,
        format!("Spacing for {} adequate", steel.label()),
    )
}

/// Corners held down on both simply supported edges need torsion steel of
/// 0.75 × the mid-span steel, carried shorter_span / 5 from the corner.
pub fn check_torsion_at_corner(
    corner: CornerCondition,
    torsion_steel: Option<f64>,
    max_moment_steel: f64,
    shorter_span: f64,
) -> CheckResult {
    if corner == CornerCondition::Continuous {
        return CheckResult::pass(sp34_ref::SLAB_TORSION, "Torsional reinforcement adequate");
    }

    let required = 0.75 * max_moment_steel;
    let extent = format!("Extend {:.0}mm from the corner in each direction", shorter_span / 5.0);
    match torsion_steel {
        None => CheckResult::fail(sp34_ref::SLAB_TORSION, "Torsional reinforcement required at corner")
            .with_required(required)
            .with_remarks(extent),
        Some(area) if area < required => {
            CheckResult::fail(sp34_ref::SLAB_TORSION, "Insufficient torsional reinforcement")
                .with_values(area, required)
                .with_remarks(extent)
        }
        Some(_) => CheckResult::pass(sp34_ref::SLAB_TORSION, "Torsional reinforcement adequate").with_remarks(extent),
    }
}

pub(super) fn detail(request: &DetailingRequest, details: &SlabDetails, results: &mut DetailingResults) -> CalcResult<()> {
    let geometry = &request.geometry;
    let ast = total_area(&request.bars);

    results.push(
        "min_reinforcement",
        check_minimum_steel(ast, geometry.gross_area(), details.deformed),
    );
    results.push(
        "main_spacing",
        check_spacing(details.main_spacing, geometry.effective_depth, SlabSteel::Main),
    );
    results.push(
        "dist_spacing",
        check_spacing(details.dist_spacing, geometry.effective_depth, SlabSteel::Distribution),
    );
    results.push(
        "torsional_reinforcement",
        check_torsion_at_corner(
            details.corner,
            details.torsion_steel,
            ast,
            details.shorter_span.unwrap_or(geometry.length),
        ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_steel() {
        // 1000 x 150 strip
        assert!(check_minimum_steel(180.0, 150_000.0, true).is_compliant);
        let plain = check_minimum_steel(180.0, 150_000.0, false);
        assert!(!plain.is_compliant);
        assert!((plain.required_value.unwrap() - 225.0).abs() < 1e-9);
    }

    #[test]
    fn test_spacing_caps() {
        assert_eq!(SlabSteel::Main.max_spacing(120.0), 360.0);
        assert_eq!(SlabSteel::Main.max_spacing(200.0), 450.0);
        assert_eq!(SlabSteel::Distribution.max_spacing(80.0), 400.0);

        let result = check_spacing(400.0, 120.0, SlabSteel::Main);
        assert!(!result.is_compliant);
        assert_eq!(result.description, "Excessive spacing for main reinforcement");
        assert!(check_spacing(400.0, 120.0, SlabSteel::Distribution).is_compliant);
    }

    #[test]
    fn test_torsion_at_corner() {
        assert!(check_torsion_at_corner(CornerCondition::Continuous, None, 500.0, 4000.0).is_compliant);

        let missing = check_torsion_at_corner(CornerCondition::SimplySupportedBothEdges, None, 500.0, 4000.0);
        assert!(!missing.is_compliant);
        assert_eq!(missing.required_value, Some(375.0));
        assert_eq!(missing.remarks.as_deref(), Some("Extend 800mm from the corner in each direction"));

        let short = check_torsion_at_corner(CornerCondition::SimplySupportedBothEdges, Some(300.0), 500.0, 4000.0);
        assert_eq!(short.actual_value, Some(300.0));
        assert!(
            check_torsion_at_corner(CornerCondition::SimplySupportedBothEdges, Some(400.0), 500.0, 4000.0)
                .is_compliant
        );
    }
}
