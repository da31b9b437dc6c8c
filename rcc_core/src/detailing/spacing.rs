//! Cover and bar spacing rules common to every member (SP 34 Sections 4.1, 8.2.1)

use crate::checks::CheckResult;
use crate::clauses::sp34_ref;
use crate::member::ExposureCondition;
use crate::reinforcement::ReinforcementBar;
use crate::tables::{exposure_requirements, DETAILING_BASE_COVER};

/// Required detailing cover: 15 mm plus the exposure addition
pub fn detailing_cover(exposure: ExposureCondition) -> f64 {
    DETAILING_BASE_COVER + exposure_requirements(exposure).detailing_cover_addition
}

pub fn check_detailing_cover(cover: f64, exposure: ExposureCondition) -> CheckResult {
    let required = detailing_cover(exposure);
    if cover < required {
        return CheckResult::fail(sp34_ref::COVER, "Insufficient concrete cover").with_values(cover, required);
    }
    CheckResult::pass(sp34_ref::COVER, "Concrete cover adequate")
}

/// Horizontal spacing between adjacent bars, walked in list order.
///
/// Each group's `spacing` must be at least the larger of its own diameter and
/// the next group's, and at least aggregate + 5 mm. The last group is held to
/// its own diameter, and only when it has two or more bars. The first
/// violation is reported.
pub fn check_horizontal_bar_spacing(bars: &[ReinforcementBar], aggregate_size: f64) -> CheckResult {
    for (i, bar) in bars.iter().enumerate() {
        let next_diameter = match bars.get(i + 1) {
            Some(next) => next.diameter,
            None if bar.count >= 2 => bar.diameter,
            None => continue,
        };
        let required = bar.diameter.max(next_diameter).max(aggregate_size + 5.0);
        if bar.spacing < required {
            return CheckResult::fail(sp34_ref::BAR_SPACING, "Insufficient horizontal spacing between bars")
                .with_values(bar.spacing, required);
        }
    }
    CheckResult::pass(sp34_ref::BAR_SPACING, "Horizontal bar spacing adequate")
}

/// Clear vertical distance between bar layers: max(15, ⅔·aggregate, largest φ)
pub fn check_vertical_bar_spacing(layer_spacing: f64, max_bar_diameter: f64, aggregate_size: f64) -> CheckResult {
    let required = 15.0_f64.max(2.0 / 3.0 * aggregate_size).max(max_bar_diameter);
    if layer_spacing < required {
        return CheckResult::fail(sp34_ref::BAR_SPACING, "Insufficient vertical spacing between bar layers")
            .with_values(layer_spacing, required);
    }
    CheckResult::pass(sp34_ref::BAR_SPACING, "Vertical bar spacing adequate")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reinforcement::BarPosition;

    #[test]
    fn test_detailing_cover() {
        assert_eq!(detailing_cover(ExposureCondition::Mild), 15.0);
        assert_eq!(detailing_cover(ExposureCondition::Moderate), 30.0);
        assert_eq!(detailing_cover(ExposureCondition::Extreme), 65.0);

        let result = check_detailing_cover(25.0, ExposureCondition::Moderate);
        assert!(!result.is_compliant);
        assert_eq!(result.required_value, Some(30.0));
        assert!(check_detailing_cover(30.0, ExposureCondition::Moderate).is_compliant);
    }

    #[test]
    fn test_first_violation_reported() {
        let bars = [
            ReinforcementBar::new(20.0, 4, 75.0, 6000.0, BarPosition::Bottom),
            ReinforcementBar::new(25.0, 2, 20.0, 6000.0, BarPosition::Bottom),
            ReinforcementBar::new(32.0, 2, 10.0, 6000.0, BarPosition::Top),
        ];
        let result = check_horizontal_bar_spacing(&bars, 20.0);
        assert!(!result.is_compliant);
        // second group against the 32 mm third group
        assert_eq!(result.actual_value, Some(20.0));
        assert_eq!(result.required_value, Some(32.0));
    }

    #[test]
    fn test_bars_within_a_group() {
        // eight 20 mm bars at 10 mm: max(20, 20 + 5) = 25
        let crowded = [ReinforcementBar::new(20.0, 8, 10.0, 3000.0, BarPosition::Longitudinal)];
        let result = check_horizontal_bar_spacing(&crowded, 20.0);
        assert!(!result.is_compliant);
        assert_eq!(result.actual_value, Some(10.0));
        assert_eq!(result.required_value, Some(25.0));

        // a lone bar has no neighbour
        let single = [ReinforcementBar::new(20.0, 1, 10.0, 3000.0, BarPosition::Longitudinal)];
        assert!(check_horizontal_bar_spacing(&single, 20.0).is_compliant);
        assert!(check_horizontal_bar_spacing(&[], 20.0).is_compliant);
    }

    #[test]
    fn test_last_group_checked() {
        let bars = [
            ReinforcementBar::new(20.0, 4, 75.0, 6000.0, BarPosition::Bottom),
            ReinforcementBar::new(32.0, 3, 30.0, 6000.0, BarPosition::Bottom),
        ];
        let result = check_horizontal_bar_spacing(&bars, 20.0);
        assert!(!result.is_compliant);
        assert_eq!(result.actual_value, Some(30.0));
        assert_eq!(result.required_value, Some(32.0));

        let wide = [
            ReinforcementBar::new(20.0, 4, 75.0, 6000.0, BarPosition::Bottom),
            ReinforcementBar::new(32.0, 3, 40.0, 6000.0, BarPosition::Bottom),
        ];
        assert!(check_horizontal_bar_spacing(&wide, 20.0).is_compliant);
    }

    #[test]
    fn test_vertical_spacing() {
        let result = check_vertical_bar_spacing(15.0, 12.0, 30.0);
        assert!(!result.is_compliant);
        assert_eq!(result.required_value, Some(20.0));
        assert!(check_vertical_bar_spacing(25.0, 25.0, 20.0).is_compliant);
    }
}
