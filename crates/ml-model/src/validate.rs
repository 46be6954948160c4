//! Optional physical-validity checks around the unchecked evaluator.
//!
//! The evaluator itself never branches on input validity. Callers that need
//! physically meaningful results go through [`evaluate_checked`], which
//! screens the inputs, evaluates, then screens the result.

use crate::error::{ModelError, ModelResult};
use crate::evaluator::{EmpiricalFactors, OperatingPoint, PerformanceResult, evaluate};
use crate::gas::GasProperties;
use crate::geometry::GeometryConstants;

/// How a sweep treats each evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationPolicy {
    /// Return the raw arithmetic, NaN included.
    #[default]
    Unchecked,
    /// Reject invalid inputs and non-physical results.
    Checked,
}

/// `mdot > 0`, `N >= 0`, both finite.
pub fn check_operating_point(point: &OperatingPoint) -> ModelResult<()> {
    if !point.n_rpm.is_finite() || point.n_rpm < 0.0 {
        return Err(ModelError::InvalidOperatingPoint {
            what: "rotational speed must be finite and non-negative",
            value: point.n_rpm,
        });
    }
    if !point.mdot_kg_s.is_finite() || point.mdot_kg_s <= 0.0 {
        return Err(ModelError::InvalidOperatingPoint {
            what: "mass flow rate must be finite and positive",
            value: point.mdot_kg_s,
        });
    }
    Ok(())
}

/// `0 < sigma <= 1`, `0 < eta_c <= 1`.
pub fn check_factors(factors: &EmpiricalFactors) -> ModelResult<()> {
    if !(factors.slip > 0.0 && factors.slip <= 1.0) {
        return Err(ModelError::InvalidFactors {
            what: "slip factor must be in (0,1]",
            value: factors.slip,
        });
    }
    if !(factors.eta_c > 0.0 && factors.eta_c <= 1.0) {
        return Err(ModelError::InvalidFactors {
            what: "isentropic efficiency must be in (0,1]",
            value: factors.eta_c,
        });
    }
    Ok(())
}

/// Finite everywhere and `PR >= 1`.
pub fn check_result(result: &PerformanceResult) -> ModelResult<()> {
    if !result.is_finite() {
        return Err(ModelError::DomainArithmetic {
            what: "non-finite result",
            value: result.pressure_ratio,
        });
    }
    if result.pressure_ratio < 1.0 {
        return Err(ModelError::DomainArithmetic {
            what: "pressure ratio below 1",
            value: result.pressure_ratio,
        });
    }
    Ok(())
}

/// Checked form of [`evaluate`].
pub fn evaluate_checked(
    point: &OperatingPoint,
    factors: &EmpiricalFactors,
    geometry: &GeometryConstants,
    gas: &GasProperties,
) -> ModelResult<PerformanceResult> {
    check_operating_point(point)?;
    check_factors(factors)?;
    let result = evaluate(point, factors, geometry, gas);
    check_result(&result)?;
    Ok(result)
}

impl ValidationPolicy {
    /// Evaluate under this policy.
    pub fn apply(
        self,
        point: &OperatingPoint,
        factors: &EmpiricalFactors,
        geometry: &GeometryConstants,
        gas: &GasProperties,
    ) -> ModelResult<PerformanceResult> {
        match self {
            ValidationPolicy::Unchecked => Ok(evaluate(point, factors, geometry, gas)),
            ValidationPolicy::Checked => evaluate_checked(point, factors, geometry, gas),
        }
    }
}
