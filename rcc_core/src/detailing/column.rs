//! Column detailing (SP 34 Sections 7.1, 7.2)

use serde::{Deserialize, Serialize};

use crate::checks::CheckResult;
use crate::clauses::sp34_ref;
use crate::errors::{nonzero, CalcResult};
use crate::reinforcement::{total_area, ReinforcementBar};

use super::{ductile, DetailingRequest, DetailingResults};

/// Smallest diameter counted as a longitudinal (main) bar; thinner bars are ties
pub const MIN_MAIN_BAR_DIAMETER: f64 = 12.0;

/// Cross-section and lateral tie arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnShape {
    #[default]
    Rectangular,
    Circular,
    CircularHelical,
}

impl ColumnShape {
    /// Minimum number of longitudinal bars
    pub fn min_bars(&self) -> u32 {
        match self {
            ColumnShape::CircularHelical => 6,
            ColumnShape::Rectangular | ColumnShape::Circular => 4,
        }
    }
}

/// Column-specific detailing inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnDetails {
    pub shape: ColumnShape,
    /// Section lies within a lap zone (raises the steel cap to 6%)
    pub lap_zone: bool,
    /// Lateral tie pitch (mm)
    pub tie_spacing: f64,
    /// Lateral tie diameter (mm)
    pub tie_diameter: f64,
    /// Clear height between floors (mm)
    pub clear_height: f64,
    /// Axial stress over fck
    pub axial_stress_ratio: f64,
    /// Length of special confining steel at each end, if any (mm)
    pub confinement_length: Option<f64>,
}

impl Default for ColumnDetails {
    fn default() -> Self {
        ColumnDetails {
            shape: ColumnShape::Rectangular,
            lap_zone: false,
            tie_spacing: 200.0,
            tie_diameter: 8.0,
            clear_height: 3000.0,
            axial_stress_ratio: 0.05,
            confinement_length: None,
        }
    }
}

/// Largest main-bar diameter (12 when there are none) and the number of main bars
pub fn main_bars(bars: &[ReinforcementBar]) -> (f64, u32) {
    let main = bars.iter().filter(|b| b.diameter >= MIN_MAIN_BAR_DIAMETER);
    let diameter = main.clone().map(|b| b.diameter).reduce(f64::max);
    let count = main.map(|b| b.count).sum();
    (diameter.unwrap_or(MIN_MAIN_BAR_DIAMETER), count)
}

pub fn check_minimum_longitudinal(ast: f64, gross_area: f64) -> CalcResult<CheckResult> {
    let gross_area = nonzero("column minimum steel", "gross area", gross_area)?;
    let required = 0.008 * gross_area;
    if ast < required {
        return Ok(CheckResult::fail(
            sp34_ref::COLUMN_STEEL,
            "Insufficient minimum longitudinal reinforcement",
        )
        .with_values(ast, required));
    }
    Ok(CheckResult::pass(sp34_ref::COLUMN_STEEL, "Minimum longitudinal reinforcement adequate"))
}

/// 4% of the gross area, 6% inside a lap zone
pub fn check_maximum_longitudinal(ast: f64, gross_area: f64, lap_zone: bool) -> CheckResult {
    let ratio = if lap_zone { 0.06 } else { 0.04 };
    let limit = ratio * gross_area;
    if ast > limit {
        return CheckResult::fail(sp34_ref::COLUMN_STEEL, "Excessive longitudinal reinforcement")
            .with_values(ast, limit);
    }
    CheckResult::pass(sp34_ref::COLUMN_STEEL, "Maximum longitudinal reinforcement within limits")
}

pub fn check_bars_and_diameter(bar_count: u32, bar_diameter: f64, shape: ColumnShape) -> CheckResult {
    let min_bars = shape.min_bars();
    if bar_count < min_bars {
        return CheckResult::fail(
            sp34_ref::COLUMN_BAR_COUNT,
            format!("Insufficient number of bars (minimum {})", min_bars),
        )
        .with_values(bar_count as f64, min_bars as f64);
    }
    if bar_diameter < MIN_MAIN_BAR_DIAMETER {
        return CheckResult::fail(sp34_ref::COLUMN_BAR_DIAMETER, "Bar diameter too small")
            .with_values(bar_diameter, MIN_MAIN_BAR_DIAMETER);
    }
    CheckResult::pass(sp34_ref::COLUMN_BARS, "Number of bars and diameter adequate")
}

/// Largest tie pitch: min(least lateral dimension, 16φ, 48φt)
pub fn max_tie_spacing(least_dimension: f64, main_bar_diameter: f64, tie_diameter: f64) -> f64 {
    least_dimension.min(16.0 * main_bar_diameter).min(48.0 * tie_diameter)
}

/// Smallest tie diameter: max(φ/4, 5)
pub fn min_tie_diameter(main_bar_diameter: f64) -> f64 {
    (main_bar_diameter / 4.0).max(5.0)
}

pub fn check_ties(tie_spacing: f64, tie_diameter: f64, least_dimension: f64, main_bar_diameter: f64) -> CheckResult {
    let max_spacing = max_tie_spacing(least_dimension, main_bar_diameter, tie_diameter);
    if tie_spacing > max_spacing {
        return CheckResult::fail(sp34_ref::TIE_SPACING, "Tie spacing excessive").with_values(tie_spacing, max_spacing);
    }
    let min_diameter = min_tie_diameter(main_bar_diameter);
    if tie_diameter < min_diameter {
        return CheckResult::fail(sp34_ref::TIE_DIAMETER, "Tie diameter too small")
            .with_values(tie_diameter, min_diameter);
    }
    CheckResult::pass(sp34_ref::TIES, "Tie spacing and diameter adequate")
}

pub(super) fn detail(request: &DetailingRequest, details: &ColumnDetails, results: &mut DetailingResults) -> CalcResult<()> {
    let geometry = &request.geometry;
    let gross_area = geometry.gross_area();
    let ast = total_area(&request.bars);
    let (main_diameter, main_count) = main_bars(&request.bars);
    let least_dimension = geometry.least_lateral_dimension();

    results.push("min_longitudinal", check_minimum_longitudinal(ast, gross_area)?);
    results.push(
        "max_longitudinal",
        check_maximum_longitudinal(ast, gross_area, details.lap_zone),
    );
    results.push(
        "min_bars_diameter",
        check_bars_and_diameter(main_count, main_diameter, details.shape),
    );
    results.push(
        "tie_requirements",
        check_ties(details.tie_spacing, details.tie_diameter, least_dimension, main_diameter),
    );

    if request.ductile {
        results.push(
            "ductile_confinement",
            ductile::check_column_confinement(
                least_dimension,
                details.clear_height,
                details.confinement_length,
                details.axial_stress_ratio,
            ),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reinforcement::BarPosition;

    fn longitudinal(diameter: f64, count: u32) -> ReinforcementBar {
        ReinforcementBar::new(diameter, count, 100.0, 3000.0, BarPosition::Longitudinal)
    }

    #[test]
    fn test_main_bars_ignore_ties() {
        let bars = [longitudinal(16.0, 4), longitudinal(20.0, 2), longitudinal(8.0, 12)];
        assert_eq!(main_bars(&bars), (20.0, 6));
        assert_eq!(main_bars(&[longitudinal(10.0, 4)]), (12.0, 0));
    }

    #[test]
    fn test_longitudinal_limits() {
        // 400 x 400 column
        let result = check_minimum_longitudinal(1000.0, 160_000.0).unwrap();
        assert!(!result.is_compliant);
        assert_eq!(result.required_value, Some(1280.0));
        assert!(check_minimum_longitudinal(1000.0, 0.0).is_err());

        assert!(!check_maximum_longitudinal(7000.0, 160_000.0, false).is_compliant);
        assert!(check_maximum_longitudinal(7000.0, 160_000.0, true).is_compliant);
    }

    #[test]
    fn test_bar_count_by_shape() {
        assert!(check_bars_and_diameter(4, 16.0, ColumnShape::Rectangular).is_compliant);
        let helical = check_bars_and_diameter(4, 16.0, ColumnShape::CircularHelical);
        assert!(!helical.is_compliant);
        assert_eq!(helical.description, "Insufficient number of bars (minimum 6)");
        assert_eq!(helical.required_value, Some(6.0));
    }

    #[test]
    fn test_ties() {
        // min(300, 16·20, 48·8) = 300
        assert_eq!(max_tie_spacing(300.0, 20.0, 8.0), 300.0);
        assert_eq!(max_tie_spacing(400.0, 16.0, 6.0), 256.0);
        assert_eq!(min_tie_diameter(32.0), 8.0);
        assert_eq!(min_tie_diameter(16.0), 5.0);

        assert!(check_ties(200.0, 8.0, 400.0, 20.0).is_compliant);
        let thin = check_ties(200.0, 6.0, 400.0, 32.0);
        assert_eq!(thin.clause_reference, "SP 34:1987, Section 7.2.6.2");
        assert_eq!(thin.required_value, Some(8.0));
    }

    #[test]
    fn test_details_defaults() {
        let details: ColumnDetails = serde_json::from_str(r#"{ "shape": "circular_helical" }"#).unwrap();
        assert_eq!(details.shape, ColumnShape::CircularHelical);
        assert_eq!(details.tie_spacing, 200.0);
        assert_eq!(details.confinement_length, None);
    }
}
