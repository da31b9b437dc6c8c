//! # SP 34 Detailing Engine
//!
//! Runs the SP 34:1987 detailing rules against a bar-by-bar description of a
//! member. Every member gets the common cover and horizontal spacing checks;
//! the member details then select the member-specific family, and optional
//! anchorage, splice and layer data add their own checks.
//!
//! Results come back as an ordered list of named checks, in the order the
//! rules ran.
//!
//! ## Example
//!
//! ```rust
//! use rcc_core::detailing::{check_member_detailing, DetailingRequest, MemberDetails};
//! use rcc_core::materials::Material;
//! use rcc_core::member::{Dimensions, ExposureCondition};
//! use rcc_core::reinforcement::{BarPosition, ReinforcementBar};
//!
//! let request = DetailingRequest {
//!     exposure: ExposureCondition::Moderate,
//!     ..DetailingRequest::new(
//!         MemberDetails::Beam(Default::default()),
//!         Dimensions::new(6000.0, 300.0, 600.0, 550.0, 30.0),
//!         vec![
//!             ReinforcementBar::new(20.0, 4, 75.0, 6000.0, BarPosition::Bottom),
//!             ReinforcementBar::new(12.0, 2, 150.0, 6000.0, BarPosition::Top),
//!         ],
//!         Material::new(25.0, 415.0),
//!     )
//! };
//!
//! let results = check_member_detailing(&request).unwrap();
//! assert!(results.get("cover_check").unwrap().is_compliant);
//! assert!(results.is_compliant());
//! ```

pub mod anchorage;
pub mod beam;
pub mod column;
pub mod ductile;
pub mod footing;
pub mod lap_splice;
pub mod slab;
pub mod spacing;

pub use anchorage::AnchorageDetails;
pub use beam::BeamDetails;
pub use column::{ColumnDetails, ColumnShape};
pub use footing::{DowelDetails, FootingDetails};
pub use lap_splice::SpliceDetails;
pub use slab::{CornerCondition, SlabDetails, SlabSteel};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::checks::CheckResult;
use crate::errors::{CalcError, CalcResult};
use crate::materials::Material;
use crate::member::{Dimensions, ExposureCondition, MemberType};
use crate::reinforcement::ReinforcementBar;

// ============================================================================
// Request
// ============================================================================

/// Member-specific inputs, tagged by member type.
///
/// ## JSON Example
///
/// ```json
/// { "member_type": "column", "shape": "circular_helical", "tie_spacing": 150.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "member_type", rename_all = "snake_case")]
pub enum MemberDetails {
    Beam(BeamDetails),
    Column(ColumnDetails),
    Slab(SlabDetails),
    Footing(FootingDetails),
    Stair,
    Wall,
}

impl MemberDetails {
    pub fn member_type(&self) -> MemberType {
        match self {
            MemberDetails::Beam(_) => MemberType::Beam,
            MemberDetails::Column(_) => MemberType::Column,
            MemberDetails::Slab(_) => MemberType::Slab,
            MemberDetails::Footing(_) => MemberType::Footing,
            MemberDetails::Stair => MemberType::Stair,
            MemberDetails::Wall => MemberType::Wall,
        }
    }

    /// Default details for a member type
    pub fn for_member(member_type: MemberType) -> Self {
        match member_type {
            MemberType::Beam => MemberDetails::Beam(BeamDetails::default()),
            MemberType::Column => MemberDetails::Column(ColumnDetails::default()),
            MemberType::Slab => MemberDetails::Slab(SlabDetails::default()),
            MemberType::Footing => MemberDetails::Footing(FootingDetails::default()),
            MemberType::Stair => MemberDetails::Stair,
            MemberType::Wall => MemberDetails::Wall,
        }
    }
}

/// Everything the detailing engine needs for one member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailingRequest {
    pub member: MemberDetails,
    pub geometry: Dimensions,
    pub bars: Vec<ReinforcementBar>,
    pub material: Material,
    #[serde(default = "default_exposure")]
    pub exposure: ExposureCondition,
    /// Apply the ductile (seismic) overrides
    #[serde(default)]
    pub ductile: bool,
    /// Nominal maximum aggregate size (mm)
    #[serde(default = "default_aggregate")]
    pub aggregate_size: f64,
    /// Clear distance between bar layers (mm)
    #[serde(default)]
    pub layer_spacing: Option<f64>,
    #[serde(default)]
    pub anchorage: Option<AnchorageDetails>,
    #[serde(default)]
    pub splices: Option<SpliceDetails>,
}

fn default_exposure() -> ExposureCondition {
    ExposureCondition::Mild
}

fn default_aggregate() -> f64 {
    20.0
}

impl DetailingRequest {
    /// Request with mild exposure, 20 mm aggregate and no optional checks
    pub fn new(member: MemberDetails, geometry: Dimensions, bars: Vec<ReinforcementBar>, material: Material) -> Self {
        DetailingRequest {
            member,
            geometry,
            bars,
            material,
            exposure: default_exposure(),
            ductile: false,
            aggregate_size: default_aggregate(),
            layer_spacing: None,
            anchorage: None,
            splices: None,
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        self.geometry.validate()?;
        self.material.validate()?;
        for bar in &self.bars {
            bar.validate()?;
        }
        if self.aggregate_size.is_nan() || self.aggregate_size <= 0.0 {
            return Err(CalcError::invalid_input(
                "aggregate_size",
                self.aggregate_size.to_string(),
                "Aggregate size must be positive",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Results
// ============================================================================

/// One named check outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedCheck {
    pub name: String,
    pub result: CheckResult,
}

/// Ordered check name → result mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetailingResults {
    checks: Vec<NamedCheck>,
}

impl DetailingResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a check; a repeated name replaces the earlier result in place
    pub fn push(&mut self, name: impl Into<String>, result: CheckResult) {
        let name = name.into();
        match self.checks.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.result = result,
            None => self.checks.push(NamedCheck { name, result }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&CheckResult> {
        self.checks.iter().find(|c| c.name == name).map(|c| &c.result)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedCheck> {
        self.checks.iter()
    }

    pub fn passed(&self) -> impl Iterator<Item = &NamedCheck> {
        self.checks.iter().filter(|c| c.result.is_compliant)
    }

    pub fn failed(&self) -> impl Iterator<Item = &NamedCheck> {
        self.checks.iter().filter(|c| !c.result.is_compliant)
    }

    /// True when no check failed
    pub fn is_compliant(&self) -> bool {
        self.checks.iter().all(|c| c.result.is_compliant)
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Run every applicable SP 34 detailing check for one member
pub fn check_member_detailing(request: &DetailingRequest) -> CalcResult<DetailingResults> {
    request.validate()?;

    let mut results = DetailingResults::new();
    results.push(
        "cover_check",
        spacing::check_detailing_cover(request.geometry.cover, request.exposure),
    );
    results.push(
        "spacing_check",
        spacing::check_horizontal_bar_spacing(&request.bars, request.aggregate_size),
    );
    if let Some(layer_spacing) = request.layer_spacing {
        let max_diameter = request.bars.iter().map(|b| b.diameter).fold(0.0, f64::max);
        results.push(
            "vertical_spacing",
            spacing::check_vertical_bar_spacing(layer_spacing, max_diameter, request.aggregate_size),
        );
    }

    match &request.member {
        MemberDetails::Beam(details) => beam::detail(request, details, &mut results)?,
        MemberDetails::Column(details) => column::detail(request, details, &mut results)?,
        MemberDetails::Slab(details) => slab::detail(request, details, &mut results)?,
        MemberDetails::Footing(details) => footing::detail(request, details, &mut results)?,
        MemberDetails::Stair | MemberDetails::Wall => {}
    }

    if let Some(anchorage) = &request.anchorage {
        results.push("anchorage", anchorage::check_anchorage(anchorage, &request.material));
    }

    if let Some(splices) = &request.splices {
        let lap = lap_splice::lap_length_for(
            splices.bar_diameter,
            &request.material,
            splices.splice_type,
            splices.deformed,
        );
        let stagger = lap_splice::check_splice_staggering(&splices.positions, lap)
            .with_remarks(format!("Lap length for {} splice: {:.0}mm", splices.splice_type, lap));
        results.push("lap_stagger", stagger);
        results.push(
            "splice_location",
            lap_splice::check_splice_location(splices.at_max_moment, splices.moment_ratio),
        );
    }

    debug!(
        member = %request.member.member_type(),
        checks = results.len(),
        failed = results.failed().count(),
        "detailing complete"
    );
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reinforcement::{BarPosition, HookType, SpliceType};

    fn example_beam() -> DetailingRequest {
        DetailingRequest {
            exposure: ExposureCondition::Moderate,
            ..DetailingRequest::new(
                MemberDetails::Beam(BeamDetails::default()),
                Dimensions::new(6000.0, 300.0, 600.0, 550.0, 30.0),
                vec![
                    ReinforcementBar::new(20.0, 4, 75.0, 6000.0, BarPosition::Bottom),
                    ReinforcementBar::new(12.0, 2, 150.0, 6000.0, BarPosition::Top),
                ],
                Material::new(25.0, 415.0),
            )
        }
    }

    #[test]
    fn test_beam_check_order() {
        let results = check_member_detailing(&example_beam()).unwrap();
        let names: Vec<&str> = results.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["cover_check", "spacing_check", "min_reinforcement", "max_reinforcement", "side_face_reinforcement"]
        );
        assert!(results.is_compliant());
    }

    #[test]
    fn test_ductile_beam_uses_positioned_bars() {
        let request = DetailingRequest {
            ductile: true,
            ..example_beam()
        };
        let results = check_member_detailing(&request).unwrap();

        // top 2-12φ = 226 mm² over 300·550 is below 0.06·25/415
        let ductile = results.get("ductile_reinforcement").unwrap();
        assert!(!ductile.is_compliant);
        assert!((ductile.actual_value.unwrap() - 226.19 / 165_000.0).abs() < 1e-6);

        // 150 mm at the ends exceeds 550/4
        assert!(!results.get("ductile_stirrups").unwrap().is_compliant);
        assert_eq!(results.failed().count(), 2);
        assert!(!results.is_compliant());
    }

    #[test]
    fn test_optional_checks_append() {
        let request = DetailingRequest {
            layer_spacing: Some(25.0),
            anchorage: Some(AnchorageDetails {
                bar_diameter: 20.0,
                available_length: 600.0,
                hook: Some(HookType::UHook),
                deformed: true,
            }),
            splices: Some(SpliceDetails {
                bar_diameter: 20.0,
                positions: vec![0.0, 1000.0],
                splice_type: SpliceType::FlexuralTension,
                deformed: true,
                at_max_moment: false,
                moment_ratio: 0.0,
            }),
            ..example_beam()
        };
        let results = check_member_detailing(&request).unwrap();
        assert!(results.get("vertical_spacing").unwrap().is_compliant);
        assert!(results.get("anchorage").unwrap().is_compliant);
        assert!(results.get("splice_location").unwrap().is_compliant);

        // lap = max(805.9, 600) so stagger needs 1.3·805.9
        let stagger = results.get("lap_stagger").unwrap();
        assert!(!stagger.is_compliant);
        assert!((stagger.required_value.unwrap() - 1.3 * 805.9).abs() < 0.1);
    }

    #[test]
    fn test_stair_has_common_checks_only() {
        let request = DetailingRequest::new(
            MemberDetails::Stair,
            Dimensions::new(3000.0, 1000.0, 150.0, 125.0, 10.0),
            vec![ReinforcementBar::new(10.0, 7, 150.0, 3000.0, BarPosition::Bottom)],
            Material::new(20.0, 415.0),
        );
        let results = check_member_detailing(&request).unwrap();
        assert_eq!(results.len(), 2);
        let cover = results.get("cover_check").unwrap();
        assert!(!cover.is_compliant);
        assert_eq!(cover.required_value, Some(15.0));
    }

    #[test]
    fn test_invalid_geometry_is_error() {
        let mut request = example_beam();
        request.geometry.effective_depth = 650.0;
        let err = check_member_detailing(&request).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "member": { "member_type": "footing", "dowels": { "area": 1257.0, "diameter": 20.0 } },
            "geometry": { "length": 2000.0, "width": 2000.0, "depth": 500.0, "effective_depth": 425.0, "cover": 75.0 },
            "bars": [ { "diameter": 12.0, "count": 13, "spacing": 150.0, "length": 1900.0 } ],
            "material": { "fck": 20.0, "fy": 415.0 }
        }"#;
        let request: DetailingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.member.member_type(), MemberType::Footing);
        assert_eq!(request.exposure, ExposureCondition::Mild);

        let results = check_member_detailing(&request).unwrap();
        assert!(results.get("footing_cover").unwrap().is_compliant);
        assert!(results.get("dowel_requirements").unwrap().is_compliant);
    }

    #[test]
    fn test_push_replaces_same_name() {
        let mut results = DetailingResults::new();
        results.push("cover_check", CheckResult::fail("x", "first"));
        results.push("cover_check", CheckResult::pass("x", "second"));
        assert_eq!(results.len(), 1);
        assert!(results.is_compliant());
    }
}
