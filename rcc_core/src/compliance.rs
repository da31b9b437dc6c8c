//! # IS 456 Compliance Evaluation
//!
//! Chains the IS 456:2000 rule modules over one member and aggregates the
//! outcome. Stages run in a fixed order:
//!
//! 1. Material - grade membership and the exposure minimum grade
//! 2. Durability - nominal cover, cement content and w/c advisory
//! 3. Flexure - steel limits and moment capacity under the governing load
//! 4. Shear - τv against τc and τc,max
//! 5. Deflection - span/effective depth ratio
//! 6. Detailing - bar spacing and development length
//!
//! A stage that cannot be computed (zero divisor, invalid record) is recorded
//! as one failed entry `"<Stage> check error: ..."` and the remaining stages
//! still run. A report is always produced.
//!
//! ## Example
//!
//! ```rust
//! use rcc_core::compliance::{evaluate, ComplianceRequest};
//! use rcc_core::loads::Loads;
//! use rcc_core::materials::Material;
//! use rcc_core::member::{Dimensions, ExposureCondition, MemberType};
//! use rcc_core::reinforcement::Reinforcement;
//! use rcc_core::settings::CheckSettings;
//!
//! let request = ComplianceRequest {
//!     member_type: MemberType::Beam,
//!     dimensions: Dimensions::new(5000.0, 300.0, 500.0, 450.0, 30.0),
//!     material: Material::new(25.0, 415.0),
//!     loads: Loads::new(15.0, 10.0),
//!     exposure: ExposureCondition::Moderate,
//!     reinforcement: Reinforcement::main(1256.0, 20.0),
//! };
//!
//! let outcome = evaluate(&request, &CheckSettings::default());
//! assert!(outcome.overall_compliance);
//! assert!(outcome.utilization_ratios["flexure"] < 1.0);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::checks::deflection::{check_span_depth_ratio, deflection_utilization, SpanDepthInput};
use crate::checks::development::{development_length, development_length_note};
use crate::checks::flexure::{
    check_flexural_capacity, check_maximum_steel, check_minimum_steel, flexural_utilization, moment_capacity,
};
use crate::checks::shear::{check_shear_capacity, shear_utilization};
use crate::checks::spacing::{check_spacing, estimate_bar_spacing};
use crate::checks::{durability, material, CheckResult};
use crate::equations::{continuous_moment, simply_supported_moment, simply_supported_shear};
use crate::errors::{CalcError, CalcResult};
use crate::loads::{FactoredLoad, Loads};
use crate::materials::Material;
use crate::member::{Dimensions, ExposureCondition, MemberType};
use crate::reinforcement::{Reinforcement, StressCondition};
use crate::settings::CheckSettings;
use crate::units::{KnM, KnPerM, Meters};

// ============================================================================
// Request
// ============================================================================

/// One member to evaluate
///
/// ## JSON Example
///
/// ```json
/// {
///   "member_type": "beam",
///   "dimensions": { "length": 5000.0, "width": 300.0, "depth": 500.0, "effective_depth": 450.0, "cover": 25.0 },
///   "material": { "fck": 25.0, "fy": 415.0 },
///   "loads": { "dead": 15.0, "live": 10.0 },
///   "exposure": "moderate",
///   "reinforcement": { "main_steel_area": 1256.0, "main_bar_dia": 20.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRequest {
    pub member_type: MemberType,
    pub dimensions: Dimensions,
    pub material: Material,
    #[serde(default)]
    pub loads: Loads,
    #[serde(default = "default_exposure")]
    pub exposure: ExposureCondition,
    #[serde(default)]
    pub reinforcement: Reinforcement,
}

fn default_exposure() -> ExposureCondition {
    ExposureCondition::Mild
}

// ============================================================================
// Stages
// ============================================================================

/// Evaluation stage, in run order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Material,
    Durability,
    Flexure,
    Shear,
    Deflection,
    Detailing,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Material,
        Stage::Durability,
        Stage::Flexure,
        Stage::Shear,
        Stage::Deflection,
        Stage::Detailing,
    ];

    /// Label used in stage error entries
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Material => "Material",
            Stage::Durability => "Durability",
            Stage::Flexure => "Flexural",
            Stage::Shear => "Shear",
            Stage::Deflection => "Deflection",
            Stage::Detailing => "Detailing",
        }
    }

    fn run(&self, request: &ComplianceRequest, settings: &CheckSettings) -> CalcResult<StageReport> {
        match self {
            Stage::Material => material_stage(request, settings),
            Stage::Durability => durability_stage(request, settings),
            Stage::Flexure => flexure_stage(request, settings),
            Stage::Shear => shear_stage(request, settings),
            Stage::Deflection => deflection_stage(request, settings),
            Stage::Detailing => detailing_stage(request, settings),
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// What one stage found
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    pub checks: Vec<CheckResult>,
    pub utilization: Vec<(&'static str, f64)>,
    pub recommendations: Vec<String>,
}

impl StageReport {
    fn check(&mut self, result: CheckResult) {
        self.checks.push(result);
    }
}

fn material_stage(request: &ComplianceRequest, settings: &CheckSettings) -> CalcResult<StageReport> {
    let m = &request.material;
    m.validate()?;

    let mut report = StageReport::default();
    report.check(material::validate_grade(m.fck));
    report.check(material::validate_steel_grade(m.fy));
    report.check(material::minimum_grade_for_exposure(
        request.member_type,
        m.fck,
        request.exposure,
        settings.concrete_type,
    ));
    Ok(report)
}

fn durability_stage(request: &ComplianceRequest, _settings: &CheckSettings) -> CalcResult<StageReport> {
    request.dimensions.validate()?;

    let mut report = StageReport::default();
    report.check(durability::check_cover(
        request.dimensions.cover,
        request.exposure,
        request.reinforcement.main_bar_dia,
    ));
    report.check(durability::cement_and_water_cement_ratio(request.exposure, request.material.fck));
    Ok(report)
}

/// Governing factored line load
fn design_load(loads: &Loads) -> CalcResult<FactoredLoad> {
    loads.validate()?;
    loads
        .governing()
        .ok_or_else(|| CalcError::computation_failure("governing load", "no load combinations"))
}

/// wL²/8 for beams, the conservative wL²/12 for everything else
fn applied_moment(member_type: MemberType, w: KnPerM, span: Meters) -> KnM {
    match member_type {
        MemberType::Beam => simply_supported_moment(w, span),
        _ => continuous_moment(w, span),
    }
}

fn flexure_stage(request: &ComplianceRequest, _settings: &CheckSettings) -> CalcResult<StageReport> {
    let dims = &request.dimensions;
    let m = &request.material;
    dims.validate()?;
    request.reinforcement.validate()?;
    let ast = request.reinforcement.main_steel_area;

    let mut report = StageReport::default();
    report.check(check_minimum_steel(
        request.member_type,
        ast,
        dims.width,
        dims.effective_depth,
        m.fy,
    )?);
    report.check(check_maximum_steel(ast, dims.width, dims.depth));

    let load = design_load(&request.loads)?;
    let applied = applied_moment(request.member_type, KnPerM(load.value), Meters(dims.span_m()));
    let capacity = moment_capacity(dims.width, dims.effective_depth, ast, m.fck, m.fy)?;
    debug!(
        combination = %load.name,
        applied = applied.0,
        capacity = capacity.capacity.0,
        "flexure demand"
    );

    report
        .utilization
        .push(("flexure", flexural_utilization(applied, capacity.capacity)));
    report.check(check_flexural_capacity(applied, &capacity));
    Ok(report)
}

fn shear_stage(request: &ComplianceRequest, _settings: &CheckSettings) -> CalcResult<StageReport> {
    let dims = &request.dimensions;
    dims.validate()?;

    let load = design_load(&request.loads)?;
    let vu = simply_supported_shear(KnPerM(load.value), Meters(dims.span_m()));
    let shear = check_shear_capacity(
        vu,
        dims.width,
        dims.effective_depth,
        request.reinforcement.main_steel_area,
        request.material.fck,
    )?;

    let mut report = StageReport::default();
    if shear.result.is_compliant && shear.analysis.shear_reinforcement_required {
        report
            .recommendations
            .push("Provide shear reinforcement as per IS 456:2000 Clause 40.4".to_string());
    }
    report.utilization.push(("shear", shear_utilization(&shear.analysis)));
    report.check(shear.result);
    Ok(report)
}

fn deflection_stage(request: &ComplianceRequest, settings: &CheckSettings) -> CalcResult<StageReport> {
    let dims = &request.dimensions;
    let reinforcement = &request.reinforcement;
    dims.validate()?;

    let ast_required = reinforcement
        .required_steel_area
        .unwrap_or(settings.required_steel_ratio * reinforcement.main_steel_area);
    let check = check_span_depth_ratio(&SpanDepthInput {
        span: dims.length,
        effective_depth: dims.effective_depth,
        support: settings.support_condition,
        ast_provided: reinforcement.main_steel_area,
        ast_required,
        fy: request.material.fy,
    })?;

    let mut report = StageReport::default();
    report
        .utilization
        .push(("deflection", deflection_utilization(&check.analysis)));
    report.check(check.result);
    Ok(report)
}

fn detailing_stage(request: &ComplianceRequest, settings: &CheckSettings) -> CalcResult<StageReport> {
    let dims = &request.dimensions;
    let reinforcement = &request.reinforcement;
    let m = &request.material;
    dims.validate()?;

    let mut report = StageReport::default();
    if reinforcement.main_steel_area > 0.0 {
        let spacing = estimate_bar_spacing(
            reinforcement.main_steel_area,
            reinforcement.main_bar_dia,
            dims.width,
            dims.cover,
        )?;
        report.check(check_spacing(
            spacing,
            request.member_type,
            reinforcement.main_bar_dia,
            dims.effective_depth,
            settings.aggregate_size_mm,
            settings.spacing_ruleset,
        ));
    }

    let ld = development_length(
        reinforcement.main_bar_dia,
        m.fck,
        m.fy,
        reinforcement.deformed,
        StressCondition::Tension,
    );
    report.recommendations.push(development_length_note(ld));
    Ok(report)
}

// ============================================================================
// Outcome
// ============================================================================

/// A stage that could not be computed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageFailure {
    pub stage: Stage,
    pub error: CalcError,
}

/// A check together with the stage that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageCheck {
    pub stage: Stage,
    pub result: CheckResult,
}

/// Aggregated result of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceOutcome {
    pub member_type: MemberType,
    /// AND of every check and every stage
    pub overall_compliance: bool,
    /// Failed check summaries and stage error entries, in run order
    pub failed_checks: Vec<String>,
    pub passed_checks: Vec<String>,
    /// Aspect → applied / capacity in stage order; infinite when the capacity is zero
    #[serde(with = "ratio_map")]
    pub utilization_ratios: IndexMap<String, f64>,
    pub recommendations: Vec<String>,
    /// Governing load combination name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub governing_combination: Option<String>,
    /// Every check with its stage
    #[serde(default)]
    pub checks: Vec<StageCheck>,
    #[serde(default)]
    pub stage_failures: Vec<StageFailure>,
}

impl ComplianceOutcome {
    fn new(member_type: MemberType) -> Self {
        ComplianceOutcome {
            member_type,
            overall_compliance: true,
            failed_checks: Vec::new(),
            passed_checks: Vec::new(),
            utilization_ratios: IndexMap::new(),
            recommendations: Vec::new(),
            governing_combination: None,
            checks: Vec::new(),
            stage_failures: Vec::new(),
        }
    }

    fn absorb(&mut self, stage: Stage, report: StageReport) {
        for result in report.checks {
            if result.is_compliant {
                self.passed_checks.push(result.summary());
            } else {
                self.failed_checks.push(result.summary());
                self.overall_compliance = false;
            }
            self.checks.push(StageCheck { stage, result });
        }
        for (aspect, ratio) in report.utilization {
            self.utilization_ratios.insert(aspect.to_string(), ratio);
        }
        self.recommendations.extend(report.recommendations);
    }

    fn stage_failed(&mut self, stage: Stage, error: CalcError) {
        self.failed_checks.push(format!("{} check error: {}", stage.label(), error));
        self.overall_compliance = false;
        self.stage_failures.push(StageFailure { stage, error });
    }
}

/// Evaluate one member against every stage
pub fn evaluate(request: &ComplianceRequest, settings: &CheckSettings) -> ComplianceOutcome {
    let mut outcome = ComplianceOutcome::new(request.member_type);
    outcome.governing_combination = request.loads.governing().map(|load| load.name);

    for stage in Stage::ALL {
        debug!(%stage, member = %request.member_type, "stage start");
        match stage.run(request, settings) {
            Ok(report) => {
                debug!(
                    %stage,
                    checks = report.checks.len(),
                    failed = report.checks.iter().filter(|c| !c.is_compliant).count(),
                    "stage finished"
                );
                outcome.absorb(stage, report);
            }
            Err(error) => {
                warn!(%stage, %error, "stage could not be computed");
                outcome.stage_failed(stage, error);
            }
        }
    }

    info!(
        member = %request.member_type,
        compliant = outcome.overall_compliance,
        failed = outcome.failed_checks.len(),
        "compliance evaluated"
    );
    outcome
}

/// Utilization ratios with infinity written as the string `"inf"`
mod ratio_map {
    use indexmap::IndexMap;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Ratio {
        Finite(f64),
        Unbounded(String),
    }

    pub fn serialize<S: Serializer>(map: &IndexMap<String, f64>, serializer: S) -> Result<S::Ok, S::Error> {
        let encoded: IndexMap<&str, Ratio> = map
            .iter()
            .map(|(k, v)| {
                let ratio = if v.is_finite() {
                    Ratio::Finite(*v)
                } else {
                    Ratio::Unbounded("inf".to_string())
                };
                (k.as_str(), ratio)
            })
            .collect();
        encoded.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<IndexMap<String, f64>, D::Error> {
        let encoded = IndexMap::<String, Ratio>::deserialize(deserializer)?;
        Ok(encoded
            .into_iter()
            .map(|(k, v)| {
                let ratio = match v {
                    Ratio::Finite(value) => value,
                    Ratio::Unbounded(_) => f64::INFINITY,
                };
                (k, ratio)
            })
            .collect())
    }
}
