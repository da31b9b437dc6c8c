//! # Shear Compliance (IS 456 Clause 40)
//!
//! The nominal stress τv = Vu/(b·d) is compared with the concrete's design
//! shear strength τc (Table 19) and the absolute ceiling τc,max (Table 20).
//! Comparisons are strict, so a stress exactly at a limit takes the more
//! favourable branch.
//!
//! The M25+ branch of τc is an index-and-scale approximation of Table 19,
//! not the tabulated values; see [`crate::tables::design_shear_strength`].

use serde::{Deserialize, Serialize};

use crate::checks::CheckResult;
use crate::clauses::is456_ref;
use crate::equations::section::{nominal_shear_stress, steel_percentage};
use crate::errors::CalcResult;
use crate::tables;
use crate::units::KiloNewtons;

/// Stresses behind a shear verdict (all N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShearAnalysis {
    pub tv: f64,
    pub tc: f64,
    pub tc_max: f64,
    /// τv > τc
    pub shear_reinforcement_required: bool,
}

/// Verdict plus the stresses it was based on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShearCheck {
    pub result: CheckResult,
    pub analysis: ShearAnalysis,
}

/// Design shear strength τc of the section (Table 19)
///
/// # Example
/// ```rust
/// use rcc_core::checks::shear::design_shear_strength;
///
/// // pt = 0.5% in M20 reads the ≤ 0.50 band
/// let tc = design_shear_strength(1000.0, 100.0, 500.0, 20.0).unwrap();
/// assert_eq!(tc, 0.48);
/// ```
pub fn design_shear_strength(b: f64, d: f64, ast: f64, fck: f64) -> CalcResult<f64> {
    let pt = steel_percentage(ast, b, d)?;
    Ok(tables::design_shear_strength(pt, fck))
}

/// Classify a design shear force against τc and τc,max
pub fn check_shear_capacity(vu: KiloNewtons, b: f64, d: f64, ast: f64, fck: f64) -> CalcResult<ShearCheck> {
    let tv = nominal_shear_stress(vu, b, d)?.value();
    let tc = design_shear_strength(b, d, ast, fck)?;
    let tc_max = tables::tc_max(fck);

    let analysis = ShearAnalysis {
        tv,
        tc,
        tc_max,
        shear_reinforcement_required: tv > tc,
    };

    let result = if tv > tc_max {
        CheckResult::fail(
            is456_ref::SHEAR_MAX,
            format!(
                "Nominal shear stress {:.2} N/mm² exceeds maximum allowed {} N/mm²",
                tv, tc_max
            ),
        )
        .with_values(tv, tc_max)
        .with_remarks("Increase the section size")
    } else if tv > tc {
        CheckResult::pass(
            is456_ref::SHEAR,
            format!("Shear reinforcement required. tv={:.2} > tc={:.2} N/mm²", tv, tc),
        )
        .with_values(tv, tc)
    } else {
        CheckResult::pass(
            is456_ref::SHEAR,
            format!("No shear reinforcement required. tv={:.2} ≤ tc={:.2} N/mm²", tv, tc),
        )
        .with_values(tv, tc)
    };

    Ok(ShearCheck { result, analysis })
}

/// τv over τc,max
pub fn shear_utilization(analysis: &ShearAnalysis) -> f64 {
    if analysis.tc_max > 0.0 {
        analysis.tv / analysis.tc_max
    } else {
        f64::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tie_at_tc_needs_no_reinforcement() {
        // tv = 48000 / (1000·100) = 0.48 = tc for M20 at pt = 0.5
        let check = check_shear_capacity(KiloNewtons(48.0), 1000.0, 100.0, 500.0, 20.0).unwrap();
        assert_eq!(check.analysis.tv, check.analysis.tc);
        assert!(!check.analysis.shear_reinforcement_required);
        assert!(check.result.is_compliant);
        assert!(check.result.description.starts_with("No shear reinforcement required"));
    }

    #[test]
    fn test_tie_at_tc_max_passes() {
        // M15 tc_max = 2.5; tv = 250000 / (1000·100)
        let check = check_shear_capacity(KiloNewtons(250.0), 1000.0, 100.0, 500.0, 15.0).unwrap();
        assert_eq!(check.analysis.tv, 2.5);
        assert!(check.result.is_compliant);
        assert!(check.analysis.shear_reinforcement_required);
    }

    #[test]
    fn test_over_stressed_section_fails() {
        let check = check_shear_capacity(KiloNewtons(300.0), 1000.0, 100.0, 500.0, 15.0).unwrap();
        assert!(!check.result.is_compliant);
        assert_eq!(
            check.result.summary(),
            "Clause 40.2.3: Nominal shear stress 3.00 N/mm² exceeds maximum allowed 2.5 N/mm²"
        );
    }

    #[test]
    fn test_reference_beam() {
        let check = check_shear_capacity(KiloNewtons(93.75), 300.0, 450.0, 1256.0, 25.0).unwrap();
        assert!((check.analysis.tc - 0.36).abs() < 1e-12);
        assert!(check.analysis.shear_reinforcement_required);
        assert_eq!(
            check.result.description,
            "Shear reinforcement required. tv=0.69 > tc=0.36 N/mm²"
        );
        assert!((shear_utilization(&check.analysis) - 0.224).abs() < 1e-3);
    }

    #[test]
    fn test_zero_section_errors() {
        assert!(check_shear_capacity(KiloNewtons(10.0), 0.0, 450.0, 1256.0, 25.0).is_err());
    }
}
