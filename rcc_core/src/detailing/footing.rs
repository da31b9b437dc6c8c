//! Footing detailing (SP 34 Sections 6.2, 6.5)

use serde::{Deserialize, Serialize};

use crate::checks::CheckResult;
use crate::clauses::sp34_ref;
use crate::errors::CalcResult;

use super::{DetailingRequest, DetailingResults};

/// Starter bars carrying the column into the footing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DowelDetails {
    /// Total dowel area (mm²)
    pub area: f64,
    /// Supported column area (mm²)
    #[serde(default = "default_column_area")]
    pub column_area: f64,
    #[serde(default = "default_count")]
    pub count: u32,
    /// Dowel diameter (mm)
    #[serde(default = "default_diameter")]
    pub diameter: f64,
    /// Diameter of the column bars being lapped (mm)
    #[serde(default = "default_column_bar_diameter")]
    pub column_bar_diameter: f64,
}

fn default_column_area() -> f64 {
    400.0 * 400.0
}

fn default_count() -> u32 {
    4
}

fn default_diameter() -> f64 {
    16.0
}

fn default_column_bar_diameter() -> f64 {
    20.0
}

impl DowelDetails {
    /// Dowels of the given total area with the standard arrangement
    pub fn with_area(area: f64) -> Self {
        DowelDetails {
            area,
            column_area: default_column_area(),
            count: default_count(),
            diameter: default_diameter(),
            column_bar_diameter: default_column_bar_diameter(),
        }
    }
}

/// Footing-specific detailing inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FootingDetails {
    pub in_contact_with_earth: bool,
    pub dowels: Option<DowelDetails>,
}

impl Default for FootingDetails {
    fn default() -> Self {
        FootingDetails {
            in_contact_with_earth: true,
            dowels: None,
        }
    }
}

/// 75 mm against earth, 50 mm otherwise
pub fn check_cover(cover: f64, in_contact_with_earth: bool) -> CheckResult {
    let required = if in_contact_with_earth { 75.0 } else { 50.0 };
    if cover < required {
        return CheckResult::fail(sp34_ref::FOOTING_COVER, "Insufficient cover for footing reinforcement")
            .with_values(cover, required);
    }
    CheckResult::pass(sp34_ref::FOOTING_COVER, "Cover adequate for footing")
}

/// Dowel area ≥ 0.5% of the column, at least 4 bars of 12 mm, and within 3 mm
/// of the column bar diameter
pub fn check_dowels(dowels: &DowelDetails) -> CheckResult {
    const MIN_BARS: u32 = 4;
    const MIN_DIAMETER: f64 = 12.0;
    const MAX_DIAMETER_DIFFERENCE: f64 = 3.0;

    let min_area = 0.005 * dowels.column_area;
    if dowels.area < min_area {
        return CheckResult::fail(sp34_ref::DOWELS, "Insufficient dowel area").with_values(dowels.area, min_area);
    }
    if dowels.count < MIN_BARS {
        return CheckResult::fail(sp34_ref::DOWELS, "Insufficient number of dowel bars")
            .with_values(dowels.count as f64, MIN_BARS as f64);
    }
    if dowels.diameter < MIN_DIAMETER {
        return CheckResult::fail(sp34_ref::DOWELS, "Dowel diameter too small")
            .with_values(dowels.diameter, MIN_DIAMETER);
    }

    let difference = (dowels.diameter - dowels.column_bar_diameter).abs();
    if difference > MAX_DIAMETER_DIFFERENCE {
        return CheckResult::fail(sp34_ref::DOWELS, "Dowel diameter differs too much from column bars")
            .with_values(difference, MAX_DIAMETER_DIFFERENCE);
    }
    CheckResult::pass(sp34_ref::DOWELS, "Dowel requirements satisfied")
}

pub(super) fn detail(request: &DetailingRequest, details: &FootingDetails, results: &mut DetailingResults) -> CalcResult<()> {
    results.push(
        "footing_cover",
        check_cover(request.geometry.cover, details.in_contact_with_earth),
    );
    if let Some(dowels) = details.dowels.as_ref().filter(|d| d.area > 0.0) {
        results.push("dowel_requirements", check_dowels(dowels));
    }
    Ok(())
}
