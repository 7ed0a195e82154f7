use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ErrorCode;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub bfs: BfsConfig,
    #[serde(default)]
    pub shortest_path: ShortestPathConfig,
}

/// Reachability settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BfsConfig {
    /// Stop expanding after this many hops. `None` explores everything.
    #[serde(default)]
    pub max_depth: Option<u32>,
}

/// Shortest-path settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathConfig {
    /// A post-convergence relaxation counts as an improvement only when it
    /// lowers a distance by more than this amount. `0.0` is exact.
    #[serde(default = "default_cycle_tolerance")]
    pub cycle_tolerance: f64,
}

impl Default for ShortestPathConfig {
    fn default() -> Self {
        Self {
            cycle_tolerance: default_cycle_tolerance(),
        }
    }
}

impl AnalyticsConfig {
    /// Parse and validate TOML text.
    ///
    /// # Errors
    ///
    /// Fails when the text is not valid TOML for this schema or when
    /// `cycle_tolerance` is negative or not finite.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let code = ErrorCode::ConfigParseError;
        let config = toml::from_str::<Self>(content)
            .with_context(|| format!("{code}: {}", code.message()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let tol = self.shortest_path.cycle_tolerance;
        ensure!(
            tol.is_finite() && tol >= 0.0,
            "{}: shortest_path.cycle_tolerance must be a finite non-negative number, got {tol}",
            ErrorCode::ConfigParseError
        );
        Ok(())
    }
}

/// Load configuration from `path`, falling back to defaults when the file
/// does not exist.
///
/// # Errors
///
/// Fails when the file exists but cannot be read, parsed or validated.
pub fn load_config(path: &Path) -> Result<AnalyticsConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AnalyticsConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    AnalyticsConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

const fn default_cycle_tolerance() -> f64 {
    0.0
}
