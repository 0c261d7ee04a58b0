//! Error types for the random source.

use std::error::Error;
use std::fmt;

/// Errors from [`SimRng`](crate::SimRng) sampling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SampleError {
    /// More distinct samples were requested than the population holds.
    TooManySamples {
        /// Number of samples requested.
        requested: usize,
        /// Size of the population sampled from.
        population: usize,
    },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManySamples {
                requested,
                population,
            } => write!(
                f,
                "cannot draw {requested} distinct samples from a population of {population}"
            ),
        }
    }
}

impl Error for SampleError {}
