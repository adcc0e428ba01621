use std::fs;
use std::path::Path;

use hcf_core::errors::{ErrorInfo, FlowError};
use hcf_graph::MAX_DIMENSION;
use serde::{Deserialize, Serialize};

/// YAML-configurable parameters governing a dimension sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Smallest hypercube dimension to solve.
    #[serde(default = "default_min_dimension")]
    pub min_dimension: u32,
    /// Largest hypercube dimension to solve, inclusive.
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,
    /// Independent random builds per dimension.
    #[serde(default = "default_trials")]
    pub trials: usize,
    /// Master seed from which every trial's substream is derived.
    #[serde(default)]
    pub master_seed: u64,
}

fn default_min_dimension() -> u32 {
    1
}

fn default_max_dimension() -> u32 {
    10
}

fn default_trials() -> usize {
    5
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_dimension: default_min_dimension(),
            max_dimension: default_max_dimension(),
            trials: default_trials(),
            master_seed: 0,
        }
    }
}

impl SweepConfig {
    /// Parses a configuration from YAML text.
    pub fn from_yaml_str(raw: &str) -> Result<Self, FlowError> {
        serde_yaml::from_str(raw)
            .map_err(|err| FlowError::Serde(ErrorInfo::new("parse-sweep-config", err.to_string())))
    }

    /// Reads and parses the YAML file at `path`.
    pub fn load(path: &Path) -> Result<Self, FlowError> {
        let raw = fs::read_to_string(path).map_err(|err| {
            FlowError::Config(
                ErrorInfo::new("read-sweep-config", err.to_string())
                    .with_context("path", path.display()),
            )
        })?;
        Self::from_yaml_str(&raw)
    }

    /// Rejects empty or unrepresentable sweeps.
    pub fn validate(&self) -> Result<(), FlowError> {
        if self.min_dimension > self.max_dimension {
            return Err(FlowError::Config(
                ErrorInfo::new("empty-dimension-range", "min_dimension exceeds max_dimension")
                    .with_context("min_dimension", self.min_dimension)
                    .with_context("max_dimension", self.max_dimension),
            ));
        }
        if self.max_dimension > MAX_DIMENSION {
            return Err(FlowError::Config(
                ErrorInfo::new("dimension-out-of-range", "max_dimension is not representable")
                    .with_context("max_dimension", self.max_dimension)
                    .with_hint(format!("use at most {MAX_DIMENSION}")),
            ));
        }
        if self.trials == 0 {
            return Err(FlowError::Config(ErrorInfo::new(
                "no-trials",
                "a sweep needs at least one trial per dimension",
            )));
        }
        Ok(())
    }
}

/// Substream identifier for one `(dimension, trial)` cell of a sweep.
pub fn substream_id(dimension: u32, trial: usize) -> u64 {
    (u64::from(dimension) << 32) | (trial as u64 & 0xffff_ffff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = SweepConfig::from_yaml_str("max_dimension: 4\n").unwrap();
        assert_eq!(
            config,
            SweepConfig {
                max_dimension: 4,
                ..SweepConfig::default()
            }
        );
        config.validate().unwrap();
    }

    #[test]
    fn malformed_yaml_is_a_serde_error() {
        let err = SweepConfig::from_yaml_str("trials: [1, 2").unwrap_err();
        assert!(matches!(err, FlowError::Serde(_)));
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        let inverted = SweepConfig {
            min_dimension: 5,
            max_dimension: 2,
            ..SweepConfig::default()
        };
        assert_eq!(inverted.validate().unwrap_err().code(), "empty-dimension-range");

        let oversized = SweepConfig {
            max_dimension: MAX_DIMENSION + 1,
            ..SweepConfig::default()
        };
        assert_eq!(oversized.validate().unwrap_err().code(), "dimension-out-of-range");

        let idle = SweepConfig {
            trials: 0,
            ..SweepConfig::default()
        };
        assert_eq!(idle.validate().unwrap_err().code(), "no-trials");
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.yaml");
        fs::write(
            &path,
            "min_dimension: 2\nmax_dimension: 3\ntrials: 2\nmaster_seed: 9\n",
        )
        .unwrap();
        let config = SweepConfig::load(&path).unwrap();
        assert_eq!(config.master_seed, 9);
        assert_eq!(config.trials, 2);

        let err = SweepConfig::load(&dir.path().join("absent.yaml")).unwrap_err();
        assert_eq!(err.code(), "read-sweep-config");
    }

    #[test]
    fn substreams_separate_dimension_and_trial() {
        assert_ne!(substream_id(3, 1), substream_id(1, 3));
        assert_eq!(substream_id(2, 0), 2u64 << 32);
    }
}
