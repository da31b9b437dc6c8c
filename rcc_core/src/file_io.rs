//! # File I/O Module
//!
//! Reads member requests (JSON) and settings (TOML), and writes evaluation
//! outcomes with:
//! - **Atomic saves**: write to `.tmp`, re-read and parse, then rename
//! - **Version validation**: saved outcomes carry a schema version
//!
//! ## Example
//!
//! ```rust,no_run
//! use rcc_core::compliance::evaluate;
//! use rcc_core::file_io::{load_compliance_request, load_settings, save_outcome};
//! use std::path::Path;
//!
//! let request = load_compliance_request(Path::new("beam.json"))?;
//! let settings = load_settings(Path::new("rcc.toml"))?;
//! let outcome = evaluate(&request, &settings);
//! save_outcome(&outcome, Path::new("beam.outcome.json"))?;
//! # Ok::<(), rcc_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compliance::{ComplianceOutcome, ComplianceRequest};
use crate::detailing::DetailingRequest;
use crate::errors::{CalcError, CalcResult};
use crate::settings::CheckSettings;

/// Schema version of saved outcome files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Header of a saved outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeMeta {
    pub version: String,
    pub generated_at: DateTime<Utc>,
    /// Tool name and version that produced the file
    pub tool: String,
}

impl OutcomeMeta {
    fn current() -> Self {
        OutcomeMeta {
            version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            tool: format!("rcc_core {}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// An outcome as written to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedOutcome {
    pub meta: OutcomeMeta,
    pub outcome: ComplianceOutcome,
}

fn read_text(path: &Path) -> CalcResult<String> {
    fs::read_to_string(path).map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> CalcResult<T> {
    let contents = read_text(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))
}

/// Load a compliance request; the concrete modulus is derived when absent
pub fn load_compliance_request(path: &Path) -> CalcResult<ComplianceRequest> {
    let mut request: ComplianceRequest = read_json(path)?;
    request.material = request.material.with_derived();
    debug!(path = %path.display(), member = %request.member_type, "loaded compliance request");
    Ok(request)
}

pub fn load_detailing_request(path: &Path) -> CalcResult<DetailingRequest> {
    let mut request: DetailingRequest = read_json(path)?;
    request.material = request.material.with_derived();
    debug!(path = %path.display(), bars = request.bars.len(), "loaded detailing request");
    Ok(request)
}

/// Load settings from TOML; omitted fields take their defaults
pub fn load_settings(path: &Path) -> CalcResult<CheckSettings> {
    CheckSettings::from_toml_str(&read_text(path)?)
}

/// Save an outcome with atomic write semantics.
///
/// 1. Serialize with a fresh header
/// 2. Write and fsync `<path>.tmp`
/// 3. Re-read the temp file and parse it back
/// 4. Rename over `path`
pub fn save_outcome(outcome: &ComplianceOutcome, path: &Path) -> CalcResult<()> {
    let saved = SavedOutcome {
        meta: OutcomeMeta::current(),
        outcome: outcome.clone(),
    };
    let json = serde_json::to_string_pretty(&saved).map_err(|e| CalcError::serialization(e.to_string()))?;

    let tmp_path = path.with_extension("json.tmp");
    let tmp_display = tmp_path.display().to_string();

    let mut tmp_file = File::create(&tmp_path)
        .map_err(|e| CalcError::file_error("create temp file", tmp_display.clone(), e.to_string()))?;
    tmp_file
        .write_all(json.as_bytes())
        .map_err(|e| CalcError::file_error("write temp file", tmp_display.clone(), e.to_string()))?;
    tmp_file
        .sync_all()
        .map_err(|e| CalcError::file_error("sync temp file", tmp_display.clone(), e.to_string()))?;
    drop(tmp_file);

    if let Err(e) = read_json::<SavedOutcome>(&tmp_path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(CalcError::file_error("verify temp file", tmp_display, e.to_string()));
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!(path = %path.display(), "saved outcome");
    Ok(())
}

/// Load a saved outcome, rejecting incompatible schema versions
pub fn load_outcome(path: &Path) -> CalcResult<SavedOutcome> {
    let saved: SavedOutcome = read_json(path)?;
    validate_version(&saved.meta.version)?;
    Ok(saved)
}

/// Major must match; on 0.x a newer minor is also rejected
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };
    let parse = |v: &str| -> Vec<u32> { v.split('.').filter_map(|p| p.parse().ok()).collect() };

    let file_parts = parse(file_version);
    let current_parts = parse(SCHEMA_VERSION);

    match (file_parts.as_slice(), current_parts.as_slice()) {
        ([file_major, ..], [current_major, ..]) if file_major != current_major => Err(mismatch()),
        ([0, file_minor, ..], [0, current_minor, ..]) if file_minor > current_minor => Err(mismatch()),
        ([_, ..], [_, ..]) => Ok(()),
        _ => Err(mismatch()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::evaluate;
    use crate::loads::Loads;
    use crate::materials::Material;
    use crate::member::{Dimensions, ExposureCondition, MemberType};
    use crate::reinforcement::Reinforcement;

    fn outcome() -> ComplianceOutcome {
        let request = ComplianceRequest {
            member_type: MemberType::Beam,
            dimensions: Dimensions::new(5000.0, 300.0, 500.0, 450.0, 25.0),
            material: Material::new(25.0, 415.0),
            loads: Loads::new(15.0, 10.0),
            exposure: ExposureCondition::Moderate,
            reinforcement: Reinforcement::main(1256.0, 20.0),
        };
        evaluate(&request, &CheckSettings::default())
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("beam.outcome.json");

        let outcome = outcome();
        save_outcome(&outcome, &path).unwrap();

        let loaded = load_outcome(&path).unwrap();
        assert_eq!(loaded.meta.version, SCHEMA_VERSION);
        assert!(loaded.meta.tool.starts_with("rcc_core "));
        assert_eq!(loaded.outcome.failed_checks, outcome.failed_checks);
        assert_eq!(loaded.outcome.recommendations, outcome.recommendations);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        save_outcome(&outcome(), &path).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_load_request_derives_modulus() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slab.json");
        fs::write(
            &path,
            r#"{
                "member_type": "slab",
                "dimensions": { "length": 4000.0, "width": 1000.0, "depth": 150.0, "effective_depth": 125.0, "cover": 20.0 },
                "material": { "fck": 25.0, "fy": 500.0 },
                "loads": { "dead": 5.0, "live": 3.0 },
                "reinforcement": { "main_steel_area": 335.0, "main_bar_dia": 8.0 }
            }"#,
        )
        .unwrap();

        let request = load_compliance_request(&path).unwrap();
        assert_eq!(request.member_type, MemberType::Slab);
        assert_eq!(request.exposure, ExposureCondition::Mild);
        assert_eq!(request.material.ec, 25000.0);
        assert_eq!(request.material.gamma_c, 1.5);
    }

    #[test]
    fn test_errors_are_structured() {
        let dir = tempfile::tempdir().unwrap();

        let missing = load_compliance_request(&dir.path().join("missing.json")).unwrap_err();
        assert_eq!(missing.error_code(), "FILE_ERROR");

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{ not json").unwrap();
        assert_eq!(load_detailing_request(&bad).unwrap_err().error_code(), "SERIALIZATION_ERROR");

        let settings = dir.path().join("rcc.toml");
        fs::write(&settings, "spacing_ruleset = \"sp34\"\n").unwrap();
        assert_eq!(load_settings(&settings).unwrap().spacing_ruleset.max_spacing(), 450.0);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.7").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }
}
