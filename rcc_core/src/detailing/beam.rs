//! Beam detailing (SP 34 Section 8.2)

use serde::{Deserialize, Serialize};

use crate::checks::CheckResult;
use crate::clauses::sp34_ref;
use crate::errors::{nonzero, CalcResult};
use crate::reinforcement::{area_at, total_area, BarPosition};

use super::{ductile, DetailingRequest, DetailingResults};

/// Overall depth above which side-face steel is mandatory (mm)
pub const SIDE_FACE_DEPTH: f64 = 750.0;

/// Beam-specific detailing inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamDetails {
    /// Side-face steel area over both faces (mm²)
    pub side_face_steel: f64,
    /// Top steel for the ductile ratio; bars at `Top` when absent
    pub ast_top: Option<f64>,
    /// Bottom steel for the ductile ratio; bars at `Bottom` when absent
    pub ast_bottom: Option<f64>,
    /// Stirrup spacing over the end zones (mm)
    pub stirrup_spacing_ends: f64,
    /// Stirrup spacing over the middle of the span (mm)
    pub stirrup_spacing_middle: f64,
}

impl Default for BeamDetails {
    fn default() -> Self {
        BeamDetails {
            side_face_steel: 0.0,
            ast_top: None,
            ast_bottom: None,
            stirrup_spacing_ends: 150.0,
            stirrup_spacing_middle: 200.0,
        }
    }
}

/// Tension steel of at least 0.85·b·d/fy
pub fn check_minimum_steel(ast: f64, width: f64, effective_depth: f64, fy: f64) -> CalcResult<CheckResult> {
    let required = 0.85 * width * effective_depth / nonzero("beam minimum steel", "fy", fy)?;
    if ast < required {
        return Ok(
            CheckResult::fail(sp34_ref::BEAM_MIN_STEEL, "Insufficient minimum reinforcement in beam")
                .with_values(ast, required),
        );
    }
    Ok(CheckResult::pass(sp34_ref::BEAM_MIN_STEEL, "Minimum reinforcement adequate"))
}

/// Tension steel of at most 0.04·b·D
pub fn check_maximum_steel(ast: f64, width: f64, overall_depth: f64) -> CheckResult {
    let limit = 0.04 * width * overall_depth;
    if ast > limit {
        return CheckResult::fail(sp34_ref::BEAM_MAX_STEEL, "Excessive reinforcement in beam")
            .with_values(ast, limit);
    }
    CheckResult::pass(sp34_ref::BEAM_MAX_STEEL, "Maximum reinforcement within limits")
}

/// Deep beams need side-face steel of 0.1% of the web area
pub fn check_side_face_steel(side_steel: f64, width: f64, overall_depth: f64) -> CheckResult {
    if overall_depth <= SIDE_FACE_DEPTH {
        return CheckResult::pass(sp34_ref::SIDE_FACE, "Side face reinforcement not required");
    }

    let required = 0.001 * width * overall_depth;
    if side_steel <= 0.0 {
        return CheckResult::fail(sp34_ref::SIDE_FACE, "Side face reinforcement required for deep beam")
            .with_values(side_steel, required);
    }
    if side_steel < required {
        return CheckResult::fail(sp34_ref::SIDE_FACE, "Insufficient side face reinforcement")
            .with_values(side_steel, required);
    }
    CheckResult::pass(sp34_ref::SIDE_FACE, "Side face reinforcement adequate")
}

pub(super) fn detail(request: &DetailingRequest, details: &BeamDetails, results: &mut DetailingResults) -> CalcResult<()> {
    let geometry = &request.geometry;
    let ast = total_area(&request.bars);

    results.push(
        "min_reinforcement",
        check_minimum_steel(ast, geometry.width, geometry.effective_depth, request.material.fy)?,
    );
    results.push(
        "max_reinforcement",
        check_maximum_steel(ast, geometry.width, geometry.depth),
    );
    results.push(
        "side_face_reinforcement",
        check_side_face_steel(details.side_face_steel, geometry.width, geometry.depth),
    );

    if request.ductile {
        let ast_top = details.ast_top.unwrap_or_else(|| area_at(&request.bars, BarPosition::Top));
        let ast_bottom = details.ast_bottom.unwrap_or_else(|| area_at(&request.bars, BarPosition::Bottom));
        results.push(
            "ductile_reinforcement",
            ductile::check_beam_reinforcement_ratio(
                ast_top,
                ast_bottom,
                geometry.width,
                geometry.effective_depth,
                &request.material,
            )?,
        );
        results.push(
            "ductile_stirrups",
            ductile::check_stirrup_spacing(
                details.stirrup_spacing_ends,
                details.stirrup_spacing_middle,
                geometry.effective_depth,
            ),
        );
    }

    Ok(())
}
