//! Sweep execution.
//!
//! Connects the sweep grid to the mean-line evaluator. Each evaluation is
//! independent, so the parallel executor fans out across the rayon pool and
//! then restores grid order.

use crate::grid::{SweepGrid, SweepKey};
use ml_model::{MeanLineModel, ModelResult, PerformanceResult, ValidationPolicy};
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// One evaluated combination.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRecord {
    pub key: SweepKey,
    /// Always `Ok` under [`ValidationPolicy::Unchecked`]
    pub outcome: ModelResult<PerformanceResult>,
}

/// Result of a sweep, in grid enumeration order.
#[derive(Debug, Clone)]
pub struct SweepResult {
    pub records: Vec<SweepRecord>,
    /// Number of successful evaluations
    pub num_successful: usize,
    /// Number of evaluations rejected by the validation policy
    pub num_failed: usize,
}

impl SweepResult {
    fn from_records(records: Vec<SweepRecord>) -> Self {
        let num_successful = records.iter().filter(|r| r.outcome.is_ok()).count();
        let num_failed = records.len() - num_successful;
        Self {
            records,
            num_successful,
            num_failed,
        }
    }

    /// Successful records with their keys (excluding failed points).
    pub fn successful(&self) -> impl Iterator<Item = (&SweepKey, &PerformanceResult)> {
        self.records
            .iter()
            .filter_map(|r| r.outcome.as_ref().ok().map(|result| (&r.key, result)))
    }

    /// Get pressure ratio array (excluding failed points)
    pub fn pressure_ratios(&self) -> Vec<f64> {
        self.successful().map(|(_, r)| r.pressure_ratio).collect()
    }

    /// Get specific work array (excluding failed points)
    pub fn specific_work_j_kg(&self) -> Vec<f64> {
        self.successful().map(|(_, r)| r.delta_h_j_kg).collect()
    }

    /// Highest finite pressure ratio and the key that produced it.
    pub fn peak_pressure_ratio(&self) -> Option<(SweepKey, f64)> {
        self.successful()
            .filter(|(_, r)| r.pressure_ratio.is_finite())
            .max_by(|a, b| a.1.pressure_ratio.total_cmp(&b.1.pressure_ratio))
            .map(|(k, r)| (*k, r.pressure_ratio))
    }
}

fn evaluate_key(model: MeanLineModel<'_>, policy: ValidationPolicy, key: SweepKey) -> SweepRecord {
    let outcome = policy.apply(
        &key.operating_point(),
        &key.factors(),
        model.geometry,
        model.gas,
    );
    if let Err(e) = &outcome {
        debug!(
            n_rpm = key.n_rpm,
            mdot = key.mdot_kg_s,
            slip = key.slip,
            eta_c = key.eta_c,
            error = %e,
            "point rejected"
        );
    }
    SweepRecord { key, outcome }
}

fn report(result: &SweepResult, mode: &str) {
    info!(
        mode,
        points = result.records.len(),
        successful = result.num_successful,
        "sweep complete"
    );
    if result.num_failed > 0 {
        warn!(
            failed = result.num_failed,
            "sweep contains points rejected by validation"
        );
    }
}

/// Evaluate every combination of `grid` on the calling thread.
pub fn execute_sweep(
    model: MeanLineModel<'_>,
    grid: &SweepGrid,
    policy: ValidationPolicy,
) -> SweepResult {
    let records = grid
        .keys()
        .map(|key| evaluate_key(model, policy, key))
        .collect();
    let result = SweepResult::from_records(records);
    report(&result, "sequential");
    result
}

/// Evaluate every combination of `grid` across the rayon thread pool.
///
/// Output order matches [`execute_sweep`].
pub fn execute_sweep_parallel(
    model: MeanLineModel<'_>,
    grid: &SweepGrid,
    policy: ValidationPolicy,
) -> SweepResult {
    let records = (0..grid.len())
        .into_par_iter()
        .filter_map(|i| grid.key(i))
        .map(|key| evaluate_key(model, policy, key))
        .collect();
    let result = SweepResult::from_records(records);
    report(&result, "parallel");
    result
}
