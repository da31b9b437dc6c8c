//! # Reinforced Section Quantities
//!
//! ## Notation
//!
//! - `φ` = bar diameter (mm)
//! - `Ast` = area of tension steel (mm²)
//! - `b` = width, `d` = effective depth (mm)
//! - `pt` = tension steel percentage 100·Ast/(b·d)
//! - `τv` = nominal shear stress Vu/(b·d)

use std::f64::consts::PI;

use crate::errors::{nonzero, CalcResult};
use crate::units::{KiloNewtons, NPerMm2, Newtons, SqMm};

/// Area of one round bar, π·φ²/4
///
/// # Example
/// ```rust
/// use rcc_core::equations::section::bar_area;
///
/// assert!((bar_area(20.0) - 314.159).abs() < 0.001);
/// ```
#[inline]
pub fn bar_area(diameter: f64) -> f64 {
    PI * (diameter / 2.0).powi(2)
}

/// Area of `count` bars of one diameter
#[inline]
pub fn bars_area(diameter: f64, count: u32) -> f64 {
    bar_area(diameter) * f64::from(count)
}

/// Tension steel percentage pt = 100·Ast/(b·d)
pub fn steel_percentage(ast: f64, b: f64, d: f64) -> CalcResult<f64> {
    let bd = nonzero("steel percentage", "b·d", b * d)?;
    Ok(100.0 * ast / bd)
}

/// Nominal shear stress τv = Vu·1000/(b·d) (IS 456 Clause 40.1)
pub fn nominal_shear_stress(vu: KiloNewtons, b: f64, d: f64) -> CalcResult<NPerMm2> {
    let bd = nonzero("nominal shear stress", "b·d", b * d)?;
    Ok(Newtons::from(vu) / SqMm(bd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_areas() {
        // 4-20φ ≈ 1256 mm²
        assert!((bars_area(20.0, 4) - 1256.64).abs() < 0.01);
        assert_eq!(bars_area(12.0, 0), 0.0);
    }

    #[test]
    fn test_steel_percentage() {
        let pt = steel_percentage(1256.0, 300.0, 450.0).unwrap();
        assert!((pt - 0.9304).abs() < 1e-4);
        assert!(steel_percentage(100.0, 0.0, 450.0).is_err());
    }

    #[test]
    fn test_nominal_shear_stress() {
        let tv = nominal_shear_stress(KiloNewtons(93.75), 300.0, 450.0).unwrap();
        assert!((tv.value() - 0.6944).abs() < 1e-4);
        assert!(nominal_shear_stress(KiloNewtons(10.0), 300.0, 0.0).is_err());
    }
}
