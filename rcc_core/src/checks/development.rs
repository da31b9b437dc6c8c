//! Development length (IS 456 Clause 26.2.1, SP 34 Section 4.2.2)
//!
//! Ld = 0.87·fy·φ / (4·τbd). τbd starts from the plain-bar table value and
//! is raised 60% for deformed bars, then a further 25% for compression.

use crate::reinforcement::StressCondition;
use crate::tables::bond_stress;

/// Increase in bond stress for deformed bars
pub const DEFORMED_BOND_FACTOR: f64 = 1.6;
/// Increase in bond stress for bars in compression
pub const COMPRESSION_BOND_FACTOR: f64 = 1.25;

/// Design bond stress after the bar-type and stress-state increases
pub fn design_bond_stress(fck: f64, deformed: bool, stress: StressCondition) -> f64 {
    let mut tbd = bond_stress(fck);
    if deformed {
        tbd *= DEFORMED_BOND_FACTOR;
    }
    if stress == StressCondition::Compression {
        tbd *= COMPRESSION_BOND_FACTOR;
    }
    tbd
}

/// Development length in mm
///
/// # Example
/// ```rust
/// use rcc_core::checks::development::development_length;
/// use rcc_core::reinforcement::StressCondition;
///
/// let ld = development_length(20.0, 25.0, 415.0, true, StressCondition::Tension);
/// assert_eq!(format!("{:.0}", ld), "806");
/// ```
pub fn development_length(bar_dia: f64, fck: f64, fy: f64, deformed: bool, stress: StressCondition) -> f64 {
    let tbd = design_bond_stress(fck, deformed, stress);
    0.87 * fy * bar_dia / (4.0 * tbd)
}

/// Recommendation line carried into the compliance report
pub fn development_length_note(ld: f64) -> String {
    format!("Required development length: {:.0}mm (Clause 26.2.1)", ld)
}
