use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use silo_audit_corpus::ListingConfig;
use std::fs;
use std::path::Path;

/// Everything an audit run can be tuned with
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    pub listing: ListingConfig,
    pub scoring: ScoringConfig,
    pub gaps: GapConfig,
}

impl AuditConfig {
    /// Read a JSON config file; omitted fields keep their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            EngineError::invalid_config(format!("failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_json_str(&text)?;
        log::debug!("Loaded config {}", path.display());
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| EngineError::invalid_config(e.to_string()))?;
        config.validate().map_err(EngineError::InvalidConfig)?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        self.listing.validate()?;
        self.scoring.validate()
    }
}

/// Keyword weights and the assignment threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Minimum silo score for an assignment
    pub threshold: f64,

    /// Points when the whole keyword appears
    pub full_match_points: f64,

    /// Points per keyword word that appears
    pub word_match_points: f64,

    /// Keyword words must be longer than this to count
    pub min_word_chars: usize,

    /// Upper bound of every score
    pub score_cap: f64,

    /// Multiplier applied to points per keyword
    pub normalization: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            threshold: 15.0,
            full_match_points: 2.0,
            word_match_points: 1.0,
            min_word_chars: 3,
            score_cap: 100.0,
            normalization: 50.0,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !(self.score_cap.is_finite() && self.score_cap > 0.0) {
            return Err(format!(
                "scoring.score_cap must be > 0 (got {})",
                self.score_cap
            ));
        }

        if !(self.threshold >= 0.0 && self.threshold <= self.score_cap) {
            return Err(format!(
                "scoring.threshold ({}) must be within 0..={}",
                self.threshold, self.score_cap
            ));
        }

        if !(self.normalization.is_finite() && self.normalization > 0.0) {
            return Err(format!(
                "scoring.normalization must be > 0 (got {})",
                self.normalization
            ));
        }

        if !(self.full_match_points >= 0.0 && self.word_match_points >= 0.0) {
            return Err("scoring match points cannot be negative".to_string());
        }

        Ok(())
    }
}

/// How required nodes are checked against titles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapMode {
    /// Containment, or every longer word present in one title
    #[default]
    Lenient,

    /// Containment only
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GapConfig {
    pub mode: GapMode,

    /// Node words up to this length are ignored by the lenient test
    pub short_word_chars: usize,
}

impl Default for GapConfig {
    fn default() -> Self {
        Self {
            mode: GapMode::Lenient,
            short_word_chars: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_valid() {
        assert!(AuditConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AuditConfig::from_json_str(
            r#"{"scoring": {"threshold": 25}, "gaps": {"mode": "strict"}}"#,
        )
        .unwrap();

        assert_eq!(config.scoring.threshold, 25.0);
        assert_eq!(config.scoring.full_match_points, 2.0);
        assert_eq!(config.gaps.mode, GapMode::Strict);
        assert_eq!(config.gaps.short_word_chars, 3);
        assert_eq!(config.listing, ListingConfig::default());
    }

    #[test]
    fn test_config_validation() {
        let mut scoring = ScoringConfig::default();

        // Invalid: threshold above cap
        scoring.threshold = 150.0;
        assert!(scoring.validate().is_err());

        // Invalid: zero normalization
        scoring.threshold = 15.0;
        scoring.normalization = 0.0;
        assert!(scoring.validate().is_err());

        // Invalid: negative weight
        scoring.normalization = 50.0;
        scoring.word_match_points = -1.0;
        assert!(scoring.validate().is_err());

        // Invalid: NaN threshold
        scoring.word_match_points = 1.0;
        scoring.threshold = f64::NAN;
        assert!(scoring.validate().is_err());

        scoring.threshold = 0.0;
        assert!(scoring.validate().is_ok());
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = AuditConfig::from_json_str(r#"{"scoring": {"threshold": "high"}}"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));

        let err = AuditConfig::from_json_str(r#"{"scoring": {"score_cap": -5}}"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(ref msg) if msg.contains("score_cap")));
    }
}
