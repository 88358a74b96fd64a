// ─────────────────────────────────────────────────────────────────────
// SCPN Pit Designer — Parameter Documents
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! JSON documents holding one parameter set in its `to_dict` shape.

use std::path::Path;

use serde_json::Value;

use crate::error::PitResult;
use crate::params::TokamakPitParams;

impl TokamakPitParams {
    /// Parse a JSON document.
    pub fn from_json_str(text: &str) -> PitResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_dict(&value)
    }

    /// Load from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> PitResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let params = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded pit parameters");
        Ok(params)
    }

    /// Pretty-printed JSON document, two-space indent.
    pub fn to_json_pretty(&self) -> PitResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_dict())?)
    }

    pub fn write_file(&self, path: impl AsRef<Path>) -> PitResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json_pretty()?)?;
        tracing::debug!(path = %path.display(), "wrote pit parameters");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PitError;
    use crate::presets::{preset, PRESET_NAMES};
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pit-types-{}-{name}.json", std::process::id()))
    }

    #[test]
    fn test_file_roundtrip_all_presets() {
        for name in PRESET_NAMES {
            let params = preset(name).unwrap();
            let path = scratch_path(name);
            params.write_file(&path).unwrap();
            let loaded = TokamakPitParams::from_file(&path).unwrap();
            std::fs::remove_file(&path).ok();
            assert_eq!(params, loaded, "preset {name} did not survive a file roundtrip");
        }
    }

    #[test]
    fn test_pretty_json_shape() {
        let text = preset("default").unwrap().to_json_pretty().unwrap();
        assert!(text.contains("\n  \"inner_radius\": 8.0"));
        assert!(text.contains("\"sector_count\": 16"));
        assert!(text.contains("\"run_width\": 2.4"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TokamakPitParams::from_file(scratch_path("does-not-exist")).unwrap_err();
        assert!(matches!(err, PitError::Io(_)));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = TokamakPitParams::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, PitError::Json(_)));
    }
}
