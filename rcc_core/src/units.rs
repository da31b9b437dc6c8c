//! # Unit Types
//!
//! Type-safe wrappers for the SI units used throughout the engine. These are
//! plain f64 newtypes so JSON stays clean (just numbers).
//!
//! ## Unit Conventions
//!
//! Member records use the units engineers read off a drawing:
//! - Length: millimetres (mm); spans are converted to metres (m) for demand
//! - Force: kilonewtons (kN); stresses divide by mm² so forces go to newtons (N)
//! - Stress: N/mm² (numerically equal to MPa)
//! - Moment: kN·m for demand and capacity; section formulas work in N·mm
//! - Distributed load: kN/m (beams) or kN/m² (slabs, treated per metre strip)
//!
//! ## Example
//!
//! ```rust
//! use rcc_core::units::{Meters, Millimeters, KnM, NMm};
//!
//! let span: Meters = Millimeters(5000.0).into();
//! assert_eq!(span.0, 5.0);
//!
//! let capacity: KnM = NMm(172.0e6).into();
//! assert_eq!(capacity.0, 172.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

impl From<KiloNewtons> for Newtons {
    fn from(kn: KiloNewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

impl From<Newtons> for KiloNewtons {
    fn from(n: Newtons) -> Self {
        KiloNewtons(n.0 / 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnM(pub f64);

/// Moment in newton-millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NMm(pub f64);

impl From<NMm> for KnM {
    fn from(nmm: NMm) -> Self {
        KnM(nmm.0 / 1e6)
    }
}

impl From<KnM> for NMm {
    fn from(knm: KnM) -> Self {
        NMm(knm.0 * 1e6)
    }
}

// ============================================================================
// Distributed Load and Stress Units
// ============================================================================

/// Distributed load in kilonewtons per metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerM(pub f64);

/// Stress in N/mm² (MPa)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NPerMm2(pub f64);

/// Area in mm²
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMm(pub f64);

impl Mul<Meters> for KnPerM {
    type Output = KiloNewtons;
    fn mul(self, rhs: Meters) -> KiloNewtons {
        KiloNewtons(self.0 * rhs.0)
    }
}

impl Div<SqMm> for Newtons {
    type Output = NPerMm2;
    fn div(self, rhs: SqMm) -> NPerMm2 {
        NPerMm2(self.0 / rhs.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(Newtons);
impl_arithmetic!(KiloNewtons);
impl_arithmetic!(KnM);
impl_arithmetic!(NMm);
impl_arithmetic!(KnPerM);
impl_arithmetic!(NPerMm2);
impl_arithmetic!(SqMm);
