//! Anchorage of bars (SP 34 Section 4.3, Table 4.1)

use serde::{Deserialize, Serialize};

use crate::checks::development::development_length;
use crate::checks::CheckResult;
use crate::clauses::sp34_ref;
use crate::materials::Material;
use crate::reinforcement::{HookType, StressCondition};
use crate::tables::hook_anchorage_multiple;

/// A bar end to be anchored
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorageDetails {
    /// Bar diameter (mm)
    pub bar_diameter: f64,
    /// Straight embedment beyond the critical section (mm)
    pub available_length: f64,
    #[serde(default)]
    pub hook: Option<HookType>,
    #[serde(default = "default_true")]
    pub deformed: bool,
}

fn default_true() -> bool {
    true
}

/// Anchorage value a hook or bend adds to the straight length (mm)
pub fn hook_contribution(bar_diameter: f64, hook: Option<HookType>) -> f64 {
    hook.map_or(0.0, |h| hook_anchorage_multiple(h) * bar_diameter)
}

/// Straight length plus hook value must reach the tension development length
pub fn check_anchorage(details: &AnchorageDetails, material: &Material) -> CheckResult {
    let required = development_length(
        details.bar_diameter,
        material.fck,
        material.fy,
        details.deformed,
        StressCondition::Tension,
    );
    let hook = hook_contribution(details.bar_diameter, details.hook);
    let effective = details.available_length + hook;

    if effective < required {
        return CheckResult::fail(
            sp34_ref::ANCHORAGE,
            format!("Insufficient anchorage length for {}mm bar", details.bar_diameter),
        )
        .with_values(effective, required)
        .with_remarks(format!("Hook contribution: {}mm", hook));
    }

    CheckResult::pass(sp34_ref::ANCHORAGE, "Anchorage length adequate").with_values(effective, required)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(available: f64, hook: Option<HookType>) -> AnchorageDetails {
        AnchorageDetails {
            bar_diameter: 16.0,
            available_length: available,
            hook,
            deformed: true,
        }
    }

    #[test]
    fn test_hook_contribution() {
        assert_eq!(hook_contribution(16.0, None), 0.0);
        assert_eq!(hook_contribution(16.0, Some(HookType::UHook)), 256.0);
        assert_eq!(hook_contribution(16.0, Some(HookType::BEND_90)), 128.0);
    }

    #[test]
    fn test_hook_makes_up_shortfall() {
        let m25 = Material::new(25.0, 415.0);
        // Ld = 0.87·415·16 / (4·1.4·1.6) ≈ 644.7
        let short = check_anchorage(&bar(500.0, None), &m25);
        assert!(!short.is_compliant);
        assert_eq!(short.remarks.as_deref(), Some("Hook contribution: 0mm"));
        assert!((short.required_value.unwrap() - 644.73).abs() < 0.01);

        let hooked = check_anchorage(&bar(500.0, Some(HookType::UHook)), &m25);
        assert!(hooked.is_compliant);
        assert_eq!(hooked.actual_value, Some(756.0));
    }
}
