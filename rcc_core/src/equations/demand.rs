//! # Approximate Design Demand
//!
//! Hand-calculation estimates of the design moment and shear for a member
//! under a uniformly distributed factored load. No structural analysis is
//! performed; these are the textbook coefficients.
//!
//! ```text
//!     w (kN/m)
//!    ↓↓↓↓↓↓↓↓↓↓↓↓↓↓
//!    ──────────────
//!    △            △
//!    ←──── L ────→
//! ```

use crate::units::{KiloNewtons, KnM, KnPerM, Meters};

/// Mid-span moment of a simply supported span, M = wL²/8
///
/// # Example
/// ```rust
/// use rcc_core::equations::demand::simply_supported_moment;
/// use rcc_core::units::{KnPerM, Meters};
///
/// let m = simply_supported_moment(KnPerM(37.5), Meters(5.0));
/// assert_eq!(m.0, 117.1875);
/// ```
#[inline]
pub fn simply_supported_moment(w: KnPerM, l: Meters) -> KnM {
    KnM(w.0 * l.0 * l.0 / 8.0)
}

/// Conservative moment for continuous or restrained members, M = wL²/12
#[inline]
pub fn continuous_moment(w: KnPerM, l: Meters) -> KnM {
    KnM(w.0 * l.0 * l.0 / 12.0)
}

/// Support shear of a simply supported span, V = wL/2
#[inline]
pub fn simply_supported_shear(w: KnPerM, l: Meters) -> KiloNewtons {
    (w * l) / 2.0
}
