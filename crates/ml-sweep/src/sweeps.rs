//! Ranged parameter sweeps.
//!
//! A sweep is either an explicit list of values or an evenly spaced range
//! (linear or logarithmic) between two bounds.

use crate::error::{SweepConfigResult, SweepError};
use std::fmt;

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepType {
    /// Uniformly spaced points
    #[default]
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Evenly spaced range between two bounds.
///
/// Only built through [`SweepDefinition::new`], so every instance has at
/// least two points, distinct finite bounds, and positive bounds when
/// logarithmic.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDefinition {
    start: f64,
    end: f64,
    num_points: usize,
    sweep_type: SweepType,
}

impl SweepDefinition {
    /// Create a range sweep.
    ///
    /// # Errors
    /// `InvalidConfiguration` for fewer than 2 points, non-finite or
    /// identical bounds, or a logarithmic sweep with a non-positive bound.
    pub fn new(
        start: f64,
        end: f64,
        num_points: usize,
        sweep_type: SweepType,
    ) -> SweepConfigResult<Self> {
        if num_points < 2 {
            return Err(SweepError::InvalidConfiguration(
                "Sweep must have at least 2 points".to_string(),
            ));
        }

        if !start.is_finite() || !end.is_finite() {
            return Err(SweepError::InvalidConfiguration(
                "Sweep bounds must be finite".to_string(),
            ));
        }

        if (start - end).abs() < 1e-12 {
            return Err(SweepError::InvalidConfiguration(
                "Start and end values must be different".to_string(),
            ));
        }

        if sweep_type == SweepType::Logarithmic && (start <= 0.0 || end <= 0.0) {
            return Err(SweepError::InvalidConfiguration(
                "Logarithmic sweep bounds must be positive".to_string(),
            ));
        }

        Ok(Self {
            start,
            end,
            num_points,
            sweep_type,
        })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    /// Last value, reproduced exactly.
    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn sweep_type(&self) -> SweepType {
        self.sweep_type
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.sweep_type {
            SweepType::Linear => self.generate_linear(),
            SweepType::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<f64> {
        let delta = (self.end - self.start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| self.start + i as f64 * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        let log_start = self.start.ln();
        let log_delta = (self.end.ln() - log_start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| (log_start + i as f64 * log_delta).exp())
            .collect();

        points[0] = self.start;
        points[self.num_points - 1] = self.end;
        points
    }
}

/// Values taken by one swept parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValues {
    /// Explicit values, used in the given order
    List(Vec<f64>),
    /// Generated range
    Range(SweepDefinition),
}

impl ParameterValues {
    /// A parameter held fixed at one value.
    pub fn fixed(value: f64) -> Self {
        Self::List(vec![value])
    }

    pub fn values(&self) -> Vec<f64> {
        match self {
            Self::List(values) => values.clone(),
            Self::Range(def) => def.generate_points(),
        }
    }
}

impl From<Vec<f64>> for ParameterValues {
    fn from(values: Vec<f64>) -> Self {
        Self::List(values)
    }
}

impl From<SweepDefinition> for ParameterValues {
    fn from(def: SweepDefinition) -> Self {
        Self::Range(def)
    }
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep from {} to {} ({} points, {})",
            self.start, self.end, self.num_points, self.sweep_type
        )
    }
}
