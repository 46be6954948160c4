//! Calorically perfect gas at the stage inlet.

use crate::error::{ModelError, ModelResult};
use ml_core::numeric::{ensure_finite, ensure_positive};
use ml_core::units::constants::{GAMMA_AIR, P_STD_PA, R_AIR};
use ml_core::units::{Pressure, Temperature, k, pa};
use uom::si::{pressure::pascal, thermodynamic_temperature::kelvin};

/// Immutable gas constants and inlet stagnation state.
///
/// `cp` and the inlet density are derived here and nowhere else:
///
/// ```text
/// cp     = gamma * R / (gamma - 1)
/// rho_in = p0_in / (R * T0_in)
/// ```
///
/// `cp` cannot be supplied directly.
#[derive(Clone, Debug, PartialEq)]
pub struct GasProperties {
    gamma: f64,
    r_j_per_kg_k: f64,
    cp_j_per_kg_k: f64,
    t0_in_k: f64,
    p0_in_pa: f64,
    rho_in_kg_m3: f64,
}

impl GasProperties {
    /// # Errors
    /// `InvalidGasProperties` when `gamma <= 1`, `R <= 0`, `T0_in <= 0`,
    /// `p0_in <= 0`, or any value is non-finite.
    pub fn new(
        gamma: f64,
        r_j_per_kg_k: f64,
        t0_in: Temperature,
        p0_in: Pressure,
    ) -> ModelResult<Self> {
        let gamma = ensure_finite(gamma, "gamma").map_err(ModelError::gas)?;
        if gamma <= 1.0 {
            return Err(ModelError::InvalidGasProperties {
                what: "gamma must exceed 1",
                value: gamma,
            });
        }
        let r = ensure_positive(r_j_per_kg_k, "gas constant").map_err(ModelError::gas)?;
        let t0_in_k = ensure_positive(t0_in.get::<kelvin>(), "inlet stagnation temperature")
            .map_err(ModelError::gas)?;
        let p0_in_pa = ensure_positive(p0_in.get::<pascal>(), "inlet stagnation pressure")
            .map_err(ModelError::gas)?;

        Ok(Self {
            gamma,
            r_j_per_kg_k: r,
            cp_j_per_kg_k: gamma * r / (gamma - 1.0),
            t0_in_k,
            p0_in_pa,
            rho_in_kg_m3: p0_in_pa / (r * t0_in_k),
        })
    }

    /// Dry air at 300 K and 101325 Pa.
    pub fn standard_air() -> ModelResult<Self> {
        Self::new(GAMMA_AIR, R_AIR, k(300.0), pa(P_STD_PA))
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn r_j_per_kg_k(&self) -> f64 {
        self.r_j_per_kg_k
    }

    pub fn cp_j_per_kg_k(&self) -> f64 {
        self.cp_j_per_kg_k
    }

    pub fn t0_in_k(&self) -> f64 {
        self.t0_in_k
    }

    pub fn p0_in_pa(&self) -> f64 {
        self.p0_in_pa
    }

    pub fn rho_in_kg_m3(&self) -> f64 {
        self.rho_in_kg_m3
    }

    /// Isentropic exponent `gamma / (gamma - 1)`.
    pub fn isentropic_exponent(&self) -> f64 {
        self.gamma / (self.gamma - 1.0)
    }
}
