//! Calculator configuration, loadable from TOML.
//!
//! ```toml
//! [ascendant]
//! coarse_step_deg = 1.0
//! initial_offset_deg = 5.0
//! refine_iterations = 12
//! ```
//!
//! Missing tables and keys fall back to the defaults above.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ascendant::AscendantConfig;
use crate::error::NatalError;

/// Configuration for [`crate::NatalCalculator`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NatalConfig {
    pub ascendant: AscendantConfig,
}

impl NatalConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, NatalError> {
        let config: Self =
            toml::from_str(text).map_err(|e| NatalError::Config(format!("parse: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NatalError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| NatalError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), NatalError> {
        self.ascendant.validate()
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String, NatalError> {
        toml::to_string(self).map_err(|e| NatalError::Config(format!("serialize: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(NatalConfig::from_toml_str("").unwrap(), NatalConfig::default());
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let c = NatalConfig::from_toml_str("[ascendant]\nrefine_iterations = 20\n").unwrap();
        assert_eq!(c.ascendant.refine_iterations, 20);
        assert_eq!(c.ascendant.coarse_step_deg, 1.0);
        assert_eq!(c.ascendant.initial_offset_deg, 5.0);
    }

    #[test]
    fn invalid_values_rejected() {
        let err = NatalConfig::from_toml_str("[ascendant]\ncoarse_step_deg = -2.0\n").unwrap_err();
        assert!(matches!(err, NatalError::InvalidConfig(_)));
    }

    #[test]
    fn oversized_search_rejected() {
        for text in [
            "[ascendant]\ncoarse_step_deg = 1e-12\n",
            "[ascendant]\nrefine_iterations = 1000\n",
        ] {
            let err = NatalConfig::from_toml_str(text).unwrap_err();
            assert!(matches!(err, NatalError::InvalidConfig(_)), "{text}");
        }
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = NatalConfig::from_toml_str("[ascendant\n").unwrap_err();
        assert!(matches!(err, NatalError::Config(_)));
        let err = NatalConfig::from_toml_str("[ascendant]\nrefine_iterations = \"x\"\n").unwrap_err();
        assert!(matches!(err, NatalError::Config(_)));
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = NatalConfig::load("/nonexistent/zodiya.toml").unwrap_err();
        assert!(matches!(err, NatalError::Config(_)));
    }

    #[test]
    fn toml_round_trip() {
        let mut c = NatalConfig::default();
        c.ascendant.coarse_step_deg = 0.5;
        let text = c.to_toml_string().unwrap();
        assert_eq!(NatalConfig::from_toml_str(&text).unwrap(), c);
    }
}
