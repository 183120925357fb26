use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ScoringError, ScoringResult};

/// Points awarded for a finished match, in half-point units so that a
/// halved match (½) stays an exact integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchPointsConfig {
    pub win: u32,
    pub halve: u32,
    pub loss: u32,
}

impl Default for MatchPointsConfig {
    fn default() -> Self {
        Self {
            win: 2,
            halve: 1,
            loss: 0,
        }
    }
}

/// Tunable scoring rules, loaded from `scoring.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Fraction of the pair's combined handicap used as the foursomes
    /// team handicap.
    pub foursomes_allowance: f64,
    /// Fraction of each player's handicap used in four-ball.
    pub four_ball_allowance: f64,
    pub match_points: MatchPointsConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            foursomes_allowance: 0.5,
            four_ball_allowance: 1.0,
            match_points: MatchPointsConfig::default(),
        }
    }
}

impl ScoringConfig {
    /// Load config from the file named by `FAIRWAY_SCORING_CONFIG`
    /// (default `config/scoring.toml`). Falls back to defaults if the file
    /// is missing or invalid.
    pub fn load() -> Self {
        let path = std::env::var("FAIRWAY_SCORING_CONFIG")
            .unwrap_or_else(|_| "config/scoring.toml".to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to load {}: {e}, using defaults", path.display());
                    ScoringConfig::default()
                },
            },
            Err(_) => ScoringConfig::default(),
        }
    }

    pub fn from_toml_str(content: &str) -> ScoringResult<Self> {
        let cfg: ScoringConfig =
            toml::from_str(content).map_err(|e| ScoringError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> ScoringResult<()> {
        check_allowance("foursomes_allowance", self.foursomes_allowance)?;
        check_allowance("four_ball_allowance", self.four_ball_allowance)?;
        let mp = &self.match_points;
        if mp.win < mp.halve || mp.halve < mp.loss {
            return Err(ScoringError::Config(format!(
                "match_points must satisfy win >= halve >= loss (got {}/{}/{})",
                mp.win, mp.halve, mp.loss
            )));
        }
        Ok(())
    }
}

fn check_allowance(name: &str, value: f64) -> ScoringResult<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ScoringError::Config(format!(
            "{name} must be within 0.0..=1.0 (got {value})"
        )))
    }
}
