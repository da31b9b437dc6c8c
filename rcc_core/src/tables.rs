//! # Code Tables
//!
//! Read-only lookup data from IS 456:2000 and SP 34:1987. Everything here is
//! built once and never written, so any number of evaluations may read it at
//! the same time.
//!
//! Grade-keyed tables have a strict form (`tabulated_*`) that reports a key
//! outside the table as [`CalcError::LookupMiss`], and a lenient form that
//! resolves the miss to the documented fallback constant and logs it.
//!
//! ## Example
//!
//! ```rust
//! use rcc_core::member::ExposureCondition;
//! use rcc_core::tables::{bond_stress, exposure_requirements, tc_max};
//!
//! assert_eq!(exposure_requirements(ExposureCondition::Severe).nominal_cover, 45.0);
//! assert_eq!(bond_stress(25.0), 1.4);
//! assert_eq!(tc_max(22.0), 4.0); // fallback for a non-standard grade
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{ConcreteGrade, SteelGrade};
use crate::member::{ExposureCondition, SupportCondition};
use crate::reinforcement::HookType;

// ============================================================================
// Exposure-dependent requirements (IS 456 Tables 3, 5, 16; SP 34 Section 4.1)
// ============================================================================

/// Every requirement that depends only on the exposure class
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExposureRequirements {
    /// Nominal cover, Table 16 (mm)
    pub nominal_cover: f64,
    /// Minimum grade fck for plain concrete, Table 5
    pub min_grade_plain: f64,
    /// Minimum grade fck for reinforced concrete, Table 5
    pub min_grade_reinforced: f64,
    /// Minimum cement content, Table 5 (kg/m³)
    pub min_cement_content: f64,
    /// Maximum free water-cement ratio, Table 5
    pub max_water_cement_ratio: f64,
    /// Cover added to the SP 34 base cover (mm)
    pub detailing_cover_addition: f64,
}

/// Indexed by [`ExposureCondition::index`], mildest first
const EXPOSURE_TABLE: [ExposureRequirements; 5] = [
    ExposureRequirements {
        nominal_cover: 20.0,
        min_grade_plain: 15.0,
        min_grade_reinforced: 20.0,
        min_cement_content: 300.0,
        max_water_cement_ratio: 0.55,
        detailing_cover_addition: 0.0,
    },
    ExposureRequirements {
        nominal_cover: 30.0,
        min_grade_plain: 15.0,
        min_grade_reinforced: 25.0,
        min_cement_content: 300.0,
        max_water_cement_ratio: 0.50,
        detailing_cover_addition: 15.0,
    },
    ExposureRequirements {
        nominal_cover: 45.0,
        min_grade_plain: 20.0,
        min_grade_reinforced: 30.0,
        min_cement_content: 320.0,
        max_water_cement_ratio: 0.45,
        detailing_cover_addition: 25.0,
    },
    ExposureRequirements {
        nominal_cover: 50.0,
        min_grade_plain: 20.0,
        min_grade_reinforced: 35.0,
        min_cement_content: 340.0,
        max_water_cement_ratio: 0.45,
        detailing_cover_addition: 40.0,
    },
    ExposureRequirements {
        nominal_cover: 75.0,
        min_grade_plain: 25.0,
        min_grade_reinforced: 40.0,
        min_cement_content: 360.0,
        max_water_cement_ratio: 0.40,
        detailing_cover_addition: 50.0,
    },
];

/// SP 34 base cover for "other reinforcement" before the exposure addition (mm)
pub const DETAILING_BASE_COVER: f64 = 15.0;

/// Requirements row for an exposure class
pub fn exposure_requirements(exposure: ExposureCondition) -> &'static ExposureRequirements {
    &EXPOSURE_TABLE[exposure.index()]
}

// ============================================================================
// Bond stress (IS 456 Clause 26.2.1.1)
// ============================================================================

/// Design bond stress τbd for plain bars in tension (N/mm²)
static BOND_STRESS: Lazy<HashMap<ConcreteGrade, f64>> = Lazy::new(|| {
    HashMap::from([
        (ConcreteGrade::M15, 1.0),
        (ConcreteGrade::M20, 1.2),
        (ConcreteGrade::M25, 1.4),
        (ConcreteGrade::M30, 1.5),
        (ConcreteGrade::M35, 1.7),
        (ConcreteGrade::M40, 1.9),
    ])
});

const BOND_STRESS_HIGH_GRADE: f64 = 1.9;
const BOND_STRESS_FALLBACK: f64 = 1.2;

/// τbd for plain bars in tension, only for grades in the table
pub fn tabulated_bond_stress(fck: f64) -> CalcResult<f64> {
    ConcreteGrade::from_fck(fck)
        .and_then(|g| BOND_STRESS.get(&g).copied())
        .ok_or_else(|| CalcError::lookup_miss("bond stress", format!("fck = {}", fck)))
}

/// τbd for plain bars in tension. M40 and above take 1.9; any other
/// unlisted fck takes 1.2.
pub fn bond_stress(fck: f64) -> f64 {
    match tabulated_bond_stress(fck) {
        Ok(tbd) => tbd,
        Err(_) if fck >= 40.0 => BOND_STRESS_HIGH_GRADE,
        Err(miss) => {
            warn!(%miss, fallback = BOND_STRESS_FALLBACK, "using fallback bond stress");
            BOND_STRESS_FALLBACK
        }
    }
}

// ============================================================================
// Design shear strength of concrete τc (IS 456 Table 19)
// ============================================================================

/// Upper bounds of the pt bands; the final band is pt > 2.00
const TC_BAND_LIMITS: [f64; 9] = [0.15, 0.25, 0.50, 0.75, 1.00, 1.25, 1.50, 1.75, 2.00];

const TC_M15: [f64; 10] = [0.28, 0.35, 0.46, 0.54, 0.60, 0.64, 0.68, 0.71, 0.71, 0.71];
const TC_M20: [f64; 10] = [0.28, 0.36, 0.48, 0.56, 0.62, 0.67, 0.72, 0.75, 0.79, 0.82];

/// Base values for M25 and above, indexed by floor(2·pt)
const TC_BASE_HIGH_GRADE: [f64; 10] = [0.29, 0.36, 0.49, 0.57, 0.64, 0.70, 0.74, 0.78, 0.82, 0.85];

/// Largest pt the table is read at
pub const TC_PT_CAP: f64 = 3.0;

const TC_FALLBACK: f64 = 0.28;

fn band_index(pt: f64) -> usize {
    TC_BAND_LIMITS
        .iter()
        .position(|limit| pt <= *limit)
        .unwrap_or(TC_BAND_LIMITS.len())
}

/// τc for a steel percentage (capped at 3.0) and concrete strength.
///
/// M15 and M20 read the step table. M25 and above use the base values
/// scaled by min(1 + (fck − 25)/100, 1.2). Anything else falls back to 0.28.
pub fn design_shear_strength(pt: f64, fck: f64) -> f64 {
    let pt = pt.min(TC_PT_CAP);
    match ConcreteGrade::from_fck(fck) {
        Some(ConcreteGrade::M15) => TC_M15[band_index(pt)],
        Some(ConcreteGrade::M20) => TC_M20[band_index(pt)],
        _ if fck >= 25.0 => {
            let grade_factor = (1.0 + (fck - 25.0) / 100.0).min(1.2);
            // pt is non-negative here, so the cast truncates like floor
            let index = ((pt * 2.0).max(0.0) as usize).min(TC_BASE_HIGH_GRADE.len() - 1);
            TC_BASE_HIGH_GRADE[index] * grade_factor
        }
        _ => {
            debug!(fck, fallback = TC_FALLBACK, "shear strength not tabulated, using fallback");
            TC_FALLBACK
        }
    }
}

// ============================================================================
// Maximum shear stress τc,max (IS 456 Table 20)
// ============================================================================

static TC_MAX: Lazy<HashMap<ConcreteGrade, f64>> = Lazy::new(|| {
    HashMap::from([
        (ConcreteGrade::M15, 2.5),
        (ConcreteGrade::M20, 2.8),
        (ConcreteGrade::M25, 3.1),
        (ConcreteGrade::M30, 3.5),
        (ConcreteGrade::M35, 3.7),
        (ConcreteGrade::M40, 4.0),
    ])
});

const TC_MAX_FALLBACK: f64 = 4.0;

/// τc,max, only for grades in the table
pub fn tabulated_tc_max(fck: f64) -> CalcResult<f64> {
    ConcreteGrade::from_fck(fck)
        .and_then(|g| TC_MAX.get(&g).copied())
        .ok_or_else(|| CalcError::lookup_miss("tc_max", format!("fck = {}", fck)))
}

/// τc,max for a concrete strength. M40 and above take 4.0, as does any
/// other grade missing from the table.
pub fn tc_max(fck: f64) -> f64 {
    match tabulated_tc_max(fck) {
        Ok(value) => value,
        Err(_) if fck >= 40.0 => TC_MAX_FALLBACK,
        Err(miss) => {
            warn!(%miss, fallback = TC_MAX_FALLBACK, "using fallback tc_max");
            TC_MAX_FALLBACK
        }
    }
}

// ============================================================================
// Flexure (IS 456 Clause 38.1)
// ============================================================================

/// Limiting neutral axis ratio xu,max/d by steel grade
pub fn limiting_depth_ratio(fy: f64) -> f64 {
    match SteelGrade::from_fy(fy) {
        Some(SteelGrade::Fe415) => 0.48,
        Some(SteelGrade::Fe500) => 0.46,
        _ => 0.53,
    }
}

// ============================================================================
// Deflection (IS 456 Clause 23.2.1, Fig. 4)
// ============================================================================

/// Basic span to effective depth ratio
pub fn basic_span_depth_ratio(support: SupportCondition) -> f64 {
    match support {
        SupportCondition::Cantilever => 7.0,
        SupportCondition::SimplySupported => 20.0,
        SupportCondition::Continuous => 26.0,
    }
}

/// Basic ratio for a support condition given by name; unknown names read as 20
pub fn basic_span_depth_ratio_by_name(name: &str) -> f64 {
    match name.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
        "cantilever" => basic_span_depth_ratio(SupportCondition::Cantilever),
        "simply_supported" => basic_span_depth_ratio(SupportCondition::SimplySupported),
        "continuous" => basic_span_depth_ratio(SupportCondition::Continuous),
        other => {
            debug!(support = other, "unknown support condition, using simply supported ratio");
            basic_span_depth_ratio(SupportCondition::SimplySupported)
        }
    }
}

/// (upper fs bound, modification factor); stresses above the last bound take 0.8
const TENSION_MODIFICATION_BANDS: [(f64, f64); 4] = [(150.0, 2.0), (200.0, 1.5), (250.0, 1.2), (300.0, 1.0)];

/// Modification factor for tension steel at service stress fs (N/mm²)
pub fn tension_modification_factor(fs: f64) -> f64 {
    TENSION_MODIFICATION_BANDS
        .iter()
        .find(|(limit, _)| fs <= *limit)
        .map(|(_, factor)| *factor)
        .unwrap_or(0.8)
}

// ============================================================================
// Anchorage of hooks and bends (SP 34 Table 4.1)
// ============================================================================

const U_HOOK_MULTIPLE: f64 = 16.0;
const BEND_MULTIPLE_PER_45: f64 = 4.0;

/// Anchorage value of a hook or bend as a multiple of bar diameter
pub fn hook_anchorage_multiple(hook: HookType) -> f64 {
    match hook {
        HookType::UHook => U_HOOK_MULTIPLE,
        HookType::Bend { bends_45 } => (BEND_MULTIPLE_PER_45 * f64::from(bends_45)).min(U_HOOK_MULTIPLE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_non_decreasing() {
        let covers: Vec<f64> = ExposureCondition::ALL
            .iter()
            .map(|e| exposure_requirements(*e).nominal_cover)
            .collect();
        assert_eq!(covers, vec![20.0, 30.0, 45.0, 50.0, 75.0]);
        assert!(covers.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_exposure_rows() {
        let extreme = exposure_requirements(ExposureCondition::Extreme);
        assert_eq!(extreme.min_grade_reinforced, 40.0);
        assert_eq!(extreme.min_grade_plain, 25.0);
        assert_eq!(extreme.min_cement_content, 360.0);
        assert_eq!(extreme.max_water_cement_ratio, 0.40);
        assert_eq!(extreme.detailing_cover_addition, 50.0);
    }

    #[test]
    fn test_bond_stress() {
        assert_eq!(bond_stress(15.0), 1.0);
        assert_eq!(bond_stress(30.0), 1.5);
        assert_eq!(bond_stress(40.0), 1.9);
        assert_eq!(bond_stress(60.0), 1.9);
        assert_eq!(bond_stress(22.0), 1.2);
    }

    #[test]
    fn test_tc_step_tables() {
        assert_eq!(design_shear_strength(0.15, 15.0), 0.28);
        assert_eq!(design_shear_strength(0.16, 15.0), 0.35);
        assert_eq!(design_shear_strength(0.50, 20.0), 0.48);
        assert_eq!(design_shear_strength(2.5, 20.0), 0.82);
        // capped at 3.0 but still in the last band
        assert_eq!(design_shear_strength(5.0, 15.0), 0.71);
    }

    #[test]
    fn test_tc_high_grade_scaling() {
        // pt = 0.93 -> index 1, factor 1.0
        assert!((design_shear_strength(0.93, 25.0) - 0.36).abs() < 1e-12);
        // M30: factor 1.05
        assert!((design_shear_strength(1.0, 30.0) - 0.49 * 1.05).abs() < 1e-12);
        // factor caps at 1.2 for M45 and above; pt caps at 3.0 -> index 6
        assert!((design_shear_strength(3.0, 80.0) - 0.74 * 1.2).abs() < 1e-12);
        assert!((design_shear_strength(4.5, 80.0) - 0.74 * 1.2).abs() < 1e-12);
        assert!((design_shear_strength(2.9, 25.0) - 0.70).abs() < 1e-12);
    }

    #[test]
    fn test_tc_fallback() {
        assert_eq!(design_shear_strength(1.0, 10.0), 0.28);
        assert_eq!(design_shear_strength(1.0, 22.0), 0.28);
    }

    #[test]
    fn test_strict_lookups_report_misses() {
        assert_eq!(tabulated_bond_stress(30.0).unwrap(), 1.5);
        let miss = tabulated_bond_stress(22.0).unwrap_err();
        assert_eq!(miss.error_code(), "LOOKUP_MISS");
        assert_eq!(
            miss,
            CalcError::LookupMiss {
                table: "bond stress".to_string(),
                key: "fck = 22".to_string(),
            }
        );
        assert!(tabulated_tc_max(50.0).is_err());
        assert_eq!(tabulated_tc_max(20.0).unwrap(), 2.8);
    }

    #[test]
    fn test_tc_max() {
        assert_eq!(tc_max(15.0), 2.5);
        assert_eq!(tc_max(40.0), 4.0);
        assert_eq!(tc_max(50.0), 4.0);
    }

    #[test]
    fn test_limiting_depth_ratio() {
        assert_eq!(limiting_depth_ratio(415.0), 0.48);
        assert_eq!(limiting_depth_ratio(500.0), 0.46);
        assert_eq!(limiting_depth_ratio(250.0), 0.53);
        assert_eq!(limiting_depth_ratio(550.0), 0.53);
    }

    #[test]
    fn test_deflection_tables() {
        assert_eq!(basic_span_depth_ratio(SupportCondition::Cantilever), 7.0);
        assert_eq!(basic_span_depth_ratio_by_name("Continuous"), 26.0);
        assert_eq!(basic_span_depth_ratio_by_name("propped"), 20.0);
        assert_eq!(tension_modification_factor(150.0), 2.0);
        assert_eq!(tension_modification_factor(192.56), 1.5);
        assert_eq!(tension_modification_factor(300.0), 1.0);
        assert_eq!(tension_modification_factor(300.1), 0.8);
    }

    #[test]
    fn test_hook_anchorage() {
        assert_eq!(hook_anchorage_multiple(HookType::UHook), 16.0);
        assert_eq!(hook_anchorage_multiple(HookType::BEND_90), 8.0);
        assert_eq!(hook_anchorage_multiple(HookType::Bend { bends_45: 6 }), 16.0);
    }
}
