//! Cartesian product of operating points and empirical factors.

use crate::error::{SweepConfigResult, SweepError};
use crate::sweeps::ParameterValues;
use ml_model::{EmpiricalFactors, OperatingPoint};

/// The inputs that produced one evaluation.
///
/// Carried alongside every result so records can be attributed regardless of
/// the order they were computed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepKey {
    pub n_rpm: f64,
    pub mdot_kg_s: f64,
    pub slip: f64,
    pub eta_c: f64,
}

impl SweepKey {
    pub fn operating_point(&self) -> OperatingPoint {
        OperatingPoint::new(self.n_rpm, self.mdot_kg_s)
    }

    pub fn factors(&self) -> EmpiricalFactors {
        EmpiricalFactors::new(self.slip, self.eta_c)
    }
}

/// Four value lists whose Cartesian product is evaluated.
///
/// Enumeration is row-major: speed outermost, then mass flow, slip factor,
/// and efficiency innermost. A single-valued list holds that parameter fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepGrid {
    speeds_rpm: Vec<f64>,
    mass_flows_kg_s: Vec<f64>,
    slip_factors: Vec<f64>,
    efficiencies: Vec<f64>,
}

impl SweepGrid {
    /// # Errors
    /// `EmptyParameter` if any list is empty, `NonFiniteValue` for NaN or
    /// infinite entries.
    pub fn new(
        speeds_rpm: impl Into<ParameterValues>,
        mass_flows_kg_s: impl Into<ParameterValues>,
        slip_factors: impl Into<ParameterValues>,
        efficiencies: impl Into<ParameterValues>,
    ) -> SweepConfigResult<Self> {
        Ok(Self {
            speeds_rpm: checked("rotational speed", speeds_rpm.into())?,
            mass_flows_kg_s: checked("mass flow rate", mass_flows_kg_s.into())?,
            slip_factors: checked("slip factor", slip_factors.into())?,
            efficiencies: checked("isentropic efficiency", efficiencies.into())?,
        })
    }

    /// Sweep speed and mass flow at fixed factors.
    pub fn operating_map(
        speeds_rpm: impl Into<ParameterValues>,
        mass_flows_kg_s: impl Into<ParameterValues>,
        factors: EmpiricalFactors,
    ) -> SweepConfigResult<Self> {
        Self::new(
            speeds_rpm,
            mass_flows_kg_s,
            ParameterValues::fixed(factors.slip),
            ParameterValues::fixed(factors.eta_c),
        )
    }

    /// Sweep slip factor and efficiency at a fixed operating point.
    pub fn factor_study(
        point: OperatingPoint,
        slip_factors: impl Into<ParameterValues>,
        efficiencies: impl Into<ParameterValues>,
    ) -> SweepConfigResult<Self> {
        Self::new(
            ParameterValues::fixed(point.n_rpm),
            ParameterValues::fixed(point.mdot_kg_s),
            slip_factors,
            efficiencies,
        )
    }

    pub fn speeds_rpm(&self) -> &[f64] {
        &self.speeds_rpm
    }

    pub fn mass_flows_kg_s(&self) -> &[f64] {
        &self.mass_flows_kg_s
    }

    pub fn slip_factors(&self) -> &[f64] {
        &self.slip_factors
    }

    pub fn efficiencies(&self) -> &[f64] {
        &self.efficiencies
    }

    /// Number of combinations.
    pub fn len(&self) -> usize {
        self.speeds_rpm.len()
            * self.mass_flows_kg_s.len()
            * self.slip_factors.len()
            * self.efficiencies.len()
    }

    /// Never true for a grid built through [`SweepGrid::new`].
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Key at a flat row-major index, `None` past the end.
    pub fn key(&self, index: usize) -> Option<SweepKey> {
        if index >= self.len() {
            return None;
        }
        let n_eta = self.efficiencies.len();
        let n_slip = self.slip_factors.len();
        let n_mdot = self.mass_flows_kg_s.len();

        let i_eta = index % n_eta;
        let rest = index / n_eta;
        let i_slip = rest % n_slip;
        let rest = rest / n_slip;
        let i_mdot = rest % n_mdot;
        let i_n = rest / n_mdot;

        Some(SweepKey {
            n_rpm: self.speeds_rpm[i_n],
            mdot_kg_s: self.mass_flows_kg_s[i_mdot],
            slip: self.slip_factors[i_slip],
            eta_c: self.efficiencies[i_eta],
        })
    }

    /// All keys in enumeration order.
    pub fn keys(&self) -> impl Iterator<Item = SweepKey> + '_ {
        (0..self.len()).filter_map(move |i| self.key(i))
    }
}

/// Call `f` once per combination, in enumeration order.
pub fn for_each_combination<F>(grid: &SweepGrid, mut f: F)
where
    F: FnMut(SweepKey),
{
    for key in grid.keys() {
        f(key);
    }
}

/// Map every combination through `f`, keeping the key with each output.
pub fn map_combinations<T, F>(grid: &SweepGrid, mut f: F) -> Vec<(SweepKey, T)>
where
    F: FnMut(&SweepKey) -> T,
{
    grid.keys()
        .map(|key| {
            let out = f(&key);
            (key, out)
        })
        .collect()
}

fn checked(parameter: &'static str, values: ParameterValues) -> SweepConfigResult<Vec<f64>> {
    let values = values.values();
    if values.is_empty() {
        return Err(SweepError::EmptyParameter { parameter });
    }
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(SweepError::NonFiniteValue {
            parameter,
            index,
            value,
        });
    }
    Ok(values)
}
