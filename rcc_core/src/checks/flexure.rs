//! # Flexural Compliance (IS 456 Clauses 26.5, 38.1)
//!
//! Limit-state moment capacity of a singly reinforced rectangular section
//! with the rectangular-parabolic stress block:
//!
//! ```text
//!   xu     = 0.87·fy·Ast / (0.36·fck·b)
//!   xu,max = k·d          k = 0.48 (Fe415), 0.46 (Fe500), 0.53 otherwise
//!
//!   xu ≤ xu,max  (under-reinforced)  Mu = 0.87·fy·Ast·(d − 0.42·xu)
//!   xu > xu,max  (over-reinforced)   Mu = 0.36·fck·b·d²·k·(1 − 0.42·k)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use rcc_core::checks::flexure::{moment_capacity, SectionType};
//!
//! let cap = moment_capacity(300.0, 450.0, 1256.0, 25.0, 415.0).unwrap();
//! assert_eq!(cap.analysis.section_type, SectionType::UnderReinforced);
//! assert!((cap.capacity.0 - 172.08).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use crate::checks::CheckResult;
use crate::clauses::is456_ref;
use crate::errors::{nonzero, CalcResult};
use crate::member::MemberType;
use crate::tables::limiting_depth_ratio;
use crate::units::{KnM, NMm};

/// Whether the tension steel yields before the concrete crushes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionType {
    UnderReinforced,
    OverReinforced,
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionType::UnderReinforced => write!(f, "under-reinforced"),
            SectionType::OverReinforced => write!(f, "over-reinforced"),
        }
    }
}

/// Neutral axis analysis behind a capacity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlexuralAnalysis {
    /// Depth of neutral axis xu (mm)
    pub xu: f64,
    /// Limiting depth xu,max (mm)
    pub xu_max: f64,
    pub section_type: SectionType,
}

/// Design moment of resistance and how it was reached
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentCapacity {
    /// Mu in kN·m
    pub capacity: KnM,
    pub analysis: FlexuralAnalysis,
}

/// Minimum tension steel (Clause 26.5.1.1 / 26.5.2.1)
///
/// - Beam: 0.85·b·d/fy
/// - Slab: 0.15% of b·d for mild steel, 0.12% otherwise
/// - Other members: 0.12% of b·d
pub fn minimum_steel_area(member_type: MemberType, b: f64, d: f64, fy: f64) -> CalcResult<f64> {
    Ok(match member_type {
        MemberType::Beam => 0.85 * b * d / nonzero("minimum steel", "fy", fy)?,
        MemberType::Slab if fy <= 250.0 => 0.0015 * b * d,
        _ => 0.0012 * b * d,
    })
}

pub fn check_minimum_steel(member_type: MemberType, ast: f64, b: f64, d: f64, fy: f64) -> CalcResult<CheckResult> {
    let min_steel = minimum_steel_area(member_type, b, d, fy)?;

    if ast < min_steel {
        return Ok(CheckResult::fail(
            is456_ref::MINIMUM_STEEL,
            format!("Minimum steel required is {:.0}mm², provided {:.0}mm²", min_steel, ast),
        )
        .with_values(ast, min_steel));
    }

    Ok(CheckResult::pass(is456_ref::MINIMUM_STEEL, "Minimum steel requirement satisfied").with_values(ast, min_steel))
}

/// Maximum tension steel 4% of the gross section b·D (Clause 26.5.1.1(b))
pub fn check_maximum_steel(ast: f64, b: f64, overall_depth: f64) -> CheckResult {
    let max_steel = 0.04 * b * overall_depth;

    if ast > max_steel {
        return CheckResult::fail(
            is456_ref::MAXIMUM_STEEL,
            format!("Maximum steel allowed is {:.0}mm², provided {:.0}mm²", max_steel, ast),
        )
        .with_values(ast, max_steel);
    }

    CheckResult::pass(is456_ref::MAXIMUM_STEEL, "Maximum steel requirement satisfied").with_values(ast, max_steel)
}

/// Limit-state moment of resistance (Clause 38.1, Annex G).
///
/// Errors when `0.36·fck·b` is zero, since the neutral axis is undefined.
pub fn moment_capacity(b: f64, d: f64, ast: f64, fck: f64, fy: f64) -> CalcResult<MomentCapacity> {
    let xu_max_by_d = limiting_depth_ratio(fy);
    let xu_max = xu_max_by_d * d;

    let xu = 0.87 * fy * ast / nonzero("moment capacity", "0.36·fck·b", 0.36 * fck * b)?;

    let (mu, section_type) = if xu <= xu_max {
        (0.87 * fy * ast * (d - 0.42 * xu), SectionType::UnderReinforced)
    } else {
        (
            0.36 * fck * b * d * d * xu_max_by_d * (1.0 - 0.42 * xu_max_by_d),
            SectionType::OverReinforced,
        )
    };

    Ok(MomentCapacity {
        capacity: NMm(mu).into(),
        analysis: FlexuralAnalysis {
            xu,
            xu_max,
            section_type,
        },
    })
}

/// Applied over resisting moment; infinite when the capacity is zero
pub fn flexural_utilization(applied: KnM, capacity: KnM) -> f64 {
    if capacity.0 > 0.0 {
        applied.0 / capacity.0
    } else {
        f64::INFINITY
    }
}

/// Utilization above 1.0 fails
pub fn check_flexural_capacity(applied: KnM, capacity: &MomentCapacity) -> CheckResult {
    let utilization = flexural_utilization(applied, capacity.capacity);

    let result = if utilization > 1.0 {
        CheckResult::fail(
            is456_ref::FLEXURE,
            format!("Flexural capacity insufficient: Utilization = {:.2}", utilization),
        )
    } else {
        CheckResult::pass(
            is456_ref::FLEXURE,
            format!("Flexural capacity adequate: Utilization = {:.2}", utilization),
        )
    };

    result
        .with_values(applied.0, capacity.capacity.0)
        .with_remarks(format!("Section is {}", capacity.analysis.section_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_beam_capacity() {
        let cap = moment_capacity(300.0, 450.0, 1256.0, 25.0, 415.0).unwrap();
        // xu = 0.87·415·1256 / (0.36·25·300)
        assert!((cap.analysis.xu - 167.96).abs() < 0.01);
        assert!((cap.analysis.xu_max - 216.0).abs() < 1e-9);
        assert_eq!(cap.analysis.section_type, SectionType::UnderReinforced);
        assert!((cap.capacity.0 - 172.08).abs() < 0.01);
    }

    #[test]
    fn test_over_reinforced_uses_limiting_moment() {
        let cap = moment_capacity(230.0, 400.0, 4000.0, 20.0, 500.0).unwrap();
        assert_eq!(cap.analysis.section_type, SectionType::OverReinforced);
        let k = 0.46;
        let expected = 0.36 * 20.0 * 230.0 * 400.0 * 400.0 * k * (1.0 - 0.42 * k) / 1e6;
        assert!((cap.capacity.0 - expected).abs() < 1e-9);
    }

    #[test]
    fn test_zero_width_is_computation_failure() {
        let err = moment_capacity(0.0, 450.0, 1256.0, 25.0, 415.0).unwrap_err();
        assert_eq!(err.error_code(), "COMPUTATION_FAILURE");
    }

    #[test]
    fn test_minimum_steel_by_member() {
        let beam = minimum_steel_area(MemberType::Beam, 300.0, 450.0, 415.0).unwrap();
        assert!((beam - 276.506).abs() < 0.001);
        assert!((minimum_steel_area(MemberType::Slab, 1000.0, 120.0, 250.0).unwrap() - 180.0).abs() < 1e-9);
        assert!((minimum_steel_area(MemberType::Slab, 1000.0, 120.0, 415.0).unwrap() - 144.0).abs() < 1e-9);
        assert!((minimum_steel_area(MemberType::Column, 400.0, 350.0, 415.0).unwrap() - 168.0).abs() < 1e-9);
        assert!(minimum_steel_area(MemberType::Beam, 300.0, 450.0, 0.0).is_err());
    }

    #[test]
    fn test_steel_limit_messages() {
        let low = check_minimum_steel(MemberType::Beam, 200.0, 300.0, 450.0, 415.0).unwrap();
        assert!(!low.is_compliant);
        assert_eq!(low.summary(), "Clause 26.5: Minimum steel required is 277mm², provided 200mm²");

        let high = check_maximum_steel(7000.0, 300.0, 500.0);
        assert!(!high.is_compliant);
        assert_eq!(high.required_value, Some(6000.0));
        assert!(check_maximum_steel(6000.0, 300.0, 500.0).is_compliant);
    }

    #[test]
    fn test_utilization() {
        assert_eq!(flexural_utilization(KnM(50.0), KnM(100.0)), 0.5);
        assert!(flexural_utilization(KnM(50.0), KnM(0.0)).is_infinite());

        let cap = moment_capacity(300.0, 450.0, 1256.0, 25.0, 415.0).unwrap();
        let result = check_flexural_capacity(KnM(117.1875), &cap);
        assert!(result.is_compliant);
        assert_eq!(result.description, "Flexural capacity adequate: Utilization = 0.68");
        assert!(!check_flexural_capacity(KnM(200.0), &cap).is_compliant);
    }
}
