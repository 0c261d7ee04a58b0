//! Simulation configuration, validation, and error types.
//!
//! [`SimulationConfig`] carries the caller-facing parameters of a run.
//! [`validate()`](SimulationConfig::validate) checks their ranges before a
//! simulation starts; [`Grid`](crate::Grid) construction itself only
//! rejects inputs that make building the lattice impossible.

use std::error::Error;
use std::fmt;

use schelling_core::SampleError;
use schelling_space::SpaceError;
use serde::{Deserialize, Serialize};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during validation or grid construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `grid_size` is zero.
    InvalidGridSize,
    /// `percent_empty` is NaN or outside `[0, 1)`.
    InvalidPercentEmpty {
        /// The invalid value.
        value: f64,
    },
    /// `threshold` is NaN or outside `[0, 1]`.
    InvalidThreshold {
        /// The invalid value.
        value: f64,
    },
    /// `number_of_groups` is zero.
    NoGroups,
    /// The lattice could not be built.
    Space(SpaceError),
    /// Empty cells could not be placed.
    Sampling(SampleError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGridSize => write!(f, "grid_size must be at least 1"),
            Self::InvalidPercentEmpty { value } => {
                write!(f, "percent_empty must be in [0, 1), got {value}")
            }
            Self::InvalidThreshold { value } => {
                write!(f, "threshold must be in [0, 1], got {value}")
            }
            Self::NoGroups => write!(f, "number_of_groups must be at least 1"),
            Self::Space(e) => write!(f, "space: {e}"),
            Self::Sampling(e) => write!(f, "sampling: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Sampling(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<SampleError> for ConfigError {
    fn from(e: SampleError) -> Self {
        Self::Sampling(e)
    }
}

// ── GridParams ─────────────────────────────────────────────────────

/// Construction parameters for a [`Grid`](crate::Grid) of arbitrary shape.
///
/// Not range-checked: out-of-range thresholds and empty fractions are
/// accepted so boundary behaviour can be explored directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridParams {
    /// Lattice rows.
    pub rows: u32,
    /// Lattice columns.
    pub cols: u32,
    /// Fraction of cells left empty; the count is `round(rows * cols * percent_empty)`.
    pub percent_empty: f64,
    /// Minimum same-group share of occupied neighbours for an agent to be happy.
    pub threshold: f64,
    /// Groups are drawn uniformly from `1..=number_of_groups`.
    pub number_of_groups: u32,
    /// RNG seed for deterministic placement and relocation.
    pub seed: u64,
}

// ── SimulationConfig ───────────────────────────────────────────────

/// Complete configuration for one simulation run on a square grid.
///
/// Deserializable from any serde format, so host adapters can pass it
/// through unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Rows and columns of the square grid.
    pub grid_size: u32,
    /// Fraction of cells left empty, in `[0, 1)`.
    pub percent_empty: f64,
    /// Similarity threshold, in `[0, 1]`.
    pub threshold: f64,
    /// Number of agent groups, at least 1.
    pub number_of_groups: u32,
    /// Maximum number of rounds after the initial placement.
    pub max_rounds: u32,
    /// RNG seed.
    pub seed: u64,
}

impl SimulationConfig {
    /// Validate all parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::InvalidGridSize);
        }
        if !(0.0..1.0).contains(&self.percent_empty) {
            return Err(ConfigError::InvalidPercentEmpty {
                value: self.percent_empty,
            });
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidThreshold {
                value: self.threshold,
            });
        }
        if self.number_of_groups == 0 {
            return Err(ConfigError::NoGroups);
        }
        Ok(())
    }

    /// Grid rows.
    pub fn rows(&self) -> u32 {
        self.grid_size
    }

    /// Grid columns.
    pub fn cols(&self) -> u32 {
        self.grid_size
    }

    /// Grid construction parameters for this configuration.
    pub fn grid_params(&self) -> GridParams {
        GridParams {
            rows: self.rows(),
            cols: self.cols(),
            percent_empty: self.percent_empty,
            threshold: self.threshold,
            number_of_groups: self.number_of_groups,
            seed: self.seed,
        }
    }
}
