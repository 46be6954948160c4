//! Mean-line velocity triangle and Euler work.

use crate::gas::GasProperties;
use crate::geometry::GeometryConstants;
use ml_core::units::rpm_to_rad_per_s;

/// Rotational speed and mass flow of one evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OperatingPoint {
    /// Shaft speed (rev/min)
    pub n_rpm: f64,
    /// Mass flow rate (kg/s)
    pub mdot_kg_s: f64,
}

impl OperatingPoint {
    pub fn new(n_rpm: f64, mdot_kg_s: f64) -> Self {
        Self { n_rpm, mdot_kg_s }
    }
}

/// Empirical corrections applied to the ideal velocity triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmpiricalFactors {
    /// Slip factor sigma, conventionally in (0, 1]
    pub slip: f64,
    /// Isentropic efficiency eta_c, conventionally in (0, 1]
    pub eta_c: f64,
}

impl EmpiricalFactors {
    pub fn new(slip: f64, eta_c: f64) -> Self {
        Self { slip, eta_c }
    }
}

/// Everything computed for one operating point.
///
/// Velocities in m/s, `delta_h` in J/kg, `delta_t` in K.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerformanceResult {
    pub omega_rad_s: f64,
    pub u_m_s: f64,
    pub v_ax_m_s: f64,
    pub v_theta1_m_s: f64,
    pub v_theta2_ideal_m_s: f64,
    pub v_theta2_m_s: f64,
    pub delta_h_j_kg: f64,
    pub delta_t_k: f64,
    pub pressure_ratio: f64,
}

impl PerformanceResult {
    /// `T0_out = T0_in + delta_T`
    pub fn outlet_stagnation_temperature_k(&self, gas: &GasProperties) -> f64 {
        gas.t0_in_k() + self.delta_t_k
    }

    /// `p0_out = PR * p0_in`
    pub fn outlet_stagnation_pressure_pa(&self, gas: &GasProperties) -> f64 {
        self.pressure_ratio * gas.p0_in_pa()
    }

    /// Shaft power absorbed by the stage, `mdot * delta_h` (W).
    pub fn shaft_power_w(&self, mdot_kg_s: f64) -> f64 {
        mdot_kg_s * self.delta_h_j_kg
    }

    /// False when out-of-envelope inputs produced NaN or infinity anywhere.
    pub fn is_finite(&self) -> bool {
        self.fields().iter().all(|v| v.is_finite())
    }

    fn fields(&self) -> [f64; 9] {
        [
            self.omega_rad_s,
            self.u_m_s,
            self.v_ax_m_s,
            self.v_theta1_m_s,
            self.v_theta2_ideal_m_s,
            self.v_theta2_m_s,
            self.delta_h_j_kg,
            self.delta_t_k,
            self.pressure_ratio,
        ]
    }
}

/// Evaluate the stage at one operating point.
///
/// ```text
/// omega        = 2 pi N / 60
/// U            = omega r_m
/// V_ax         = mdot / (rho_in A_in)
/// V_theta1     = 0
/// V_theta2_id  = U - V_ax / tan(beta2)
/// V_theta2     = sigma V_theta2_id
/// delta_h      = U (V_theta2 - V_theta1)
/// delta_T      = delta_h / cp
/// PR           = (1 + eta_c delta_T / T0_in)^(gamma / (gamma - 1))
/// ```
///
/// Inputs are not checked. Out-of-envelope values (mdot <= 0, beta2 with
/// `tan(beta2) == 0`, a negative base in the last step) yield whatever the
/// arithmetic gives, including NaN, infinity or `PR < 1`. Use
/// [`crate::validate::evaluate_checked`] when physical validity matters.
pub fn evaluate(
    point: &OperatingPoint,
    factors: &EmpiricalFactors,
    geometry: &GeometryConstants,
    gas: &GasProperties,
) -> PerformanceResult {
    let omega_rad_s = rpm_to_rad_per_s(point.n_rpm);
    let u_m_s = omega_rad_s * geometry.r_mean_m();

    // Uniform axial flow at inlet density
    let v_ax_m_s = point.mdot_kg_s / (gas.rho_in_kg_m3() * geometry.a_in_m2());

    // No inlet swirl
    let v_theta1_m_s = 0.0;

    let v_theta2_ideal_m_s = u_m_s - v_ax_m_s / geometry.beta2_rad().tan();
    let v_theta2_m_s = factors.slip * v_theta2_ideal_m_s;

    let delta_h_j_kg = u_m_s * (v_theta2_m_s - v_theta1_m_s);
    let delta_t_k = delta_h_j_kg / gas.cp_j_per_kg_k();

    let pressure_ratio = (1.0 + factors.eta_c * delta_t_k / gas.t0_in_k())
        .powf(gas.isentropic_exponent());

    PerformanceResult {
        omega_rad_s,
        u_m_s,
        v_ax_m_s,
        v_theta1_m_s,
        v_theta2_ideal_m_s,
        v_theta2_m_s,
        delta_h_j_kg,
        delta_t_k,
        pressure_ratio,
    }
}

/// Flat-argument form of [`evaluate`].
pub fn evaluate_raw(
    n_rpm: f64,
    mdot_kg_s: f64,
    slip: f64,
    eta_c: f64,
    geometry: &GeometryConstants,
    gas: &GasProperties,
) -> PerformanceResult {
    evaluate(
        &OperatingPoint::new(n_rpm, mdot_kg_s),
        &EmpiricalFactors::new(slip, eta_c),
        geometry,
        gas,
    )
}

/// Geometry and gas bound together for repeated evaluation.
///
/// Holds references only, so it is `Copy` and can be shared freely across
/// sweep worker threads.
#[derive(Clone, Copy, Debug)]
pub struct MeanLineModel<'a> {
    pub geometry: &'a GeometryConstants,
    pub gas: &'a GasProperties,
}

impl<'a> MeanLineModel<'a> {
    pub fn new(geometry: &'a GeometryConstants, gas: &'a GasProperties) -> Self {
        Self { geometry, gas }
    }

    pub fn evaluate(
        &self,
        point: &OperatingPoint,
        factors: &EmpiricalFactors,
    ) -> PerformanceResult {
        evaluate(point, factors, self.geometry, self.gas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ml_core::numeric::{Tolerances, nearly_equal};

    fn baseline() -> (GeometryConstants, GasProperties) {
        (
            GeometryConstants::reference().unwrap(),
            GasProperties::standard_air().unwrap(),
        )
    }

    #[test]
    fn zero_slip_does_no_work() {
        let (geom, gas) = baseline();
        let r = evaluate_raw(70_000.0, 0.2, 0.0, 0.76, &geom, &gas);
        assert_eq!(r.v_theta2_m_s, 0.0);
        assert_eq!(r.delta_h_j_kg, 0.0);
        assert_eq!(r.delta_t_k, 0.0);
        assert_eq!(r.pressure_ratio, 1.0);
    }

    #[test]
    fn inlet_swirl_is_zero() {
        let (geom, gas) = baseline();
        let r = evaluate_raw(50_000.0, 0.1, 0.9, 0.8, &geom, &gas);
        assert_eq!(r.v_theta1_m_s, 0.0);
    }

    #[test]
    fn slip_only_scales_tangential_component() {
        let (geom, gas) = baseline();
        let a = evaluate_raw(70_000.0, 0.2, 1.0, 0.76, &geom, &gas);
        let b = evaluate_raw(70_000.0, 0.2, 0.5, 0.76, &geom, &gas);
        assert_eq!(a.v_ax_m_s, b.v_ax_m_s);
        assert_eq!(a.u_m_s, b.u_m_s);
        assert_eq!(a.v_theta2_ideal_m_s, b.v_theta2_ideal_m_s);
        assert!(nearly_equal(
            b.v_theta2_m_s,
            0.5 * a.v_theta2_m_s,
            Tolerances::default()
        ));
    }

    #[test]
    fn doubling_speed_doubles_blade_speed() {
        let (geom, gas) = baseline();
        let a = evaluate_raw(35_000.0, 0.2, 0.92, 0.76, &geom, &gas);
        let b = evaluate_raw(70_000.0, 0.2, 0.92, 0.76, &geom, &gas);
        assert!(nearly_equal(b.u_m_s, 2.0 * a.u_m_s, Tolerances::default()));
        assert_eq!(a.v_ax_m_s, b.v_ax_m_s);

        // PR recomputed from the doubled blade speed
        let u = b.u_m_s;
        let vt2 = 0.92 * (u - b.v_ax_m_s / geom.beta2_rad().tan());
        let dt = u * vt2 / gas.cp_j_per_kg_k();
        let pr = (1.0 + 0.76 * dt / gas.t0_in_k()).powf(3.5);
        assert!(nearly_equal(b.pressure_ratio, pr, Tolerances::default()));
    }

    #[test]
    fn zero_mass_flow_is_pure_blade_speed() {
        let (geom, gas) = baseline();
        let r = evaluate_raw(70_000.0, 0.0, 1.0, 1.0, &geom, &gas);
        assert_eq!(r.v_ax_m_s, 0.0);
        assert_eq!(r.v_theta2_ideal_m_s, r.u_m_s);
    }

    #[test]
    fn negative_base_propagates_nan() {
        let (geom, gas) = baseline();
        // Huge through-flow drives V_theta2 far negative.
        let r = evaluate_raw(10_000.0, 50.0, 1.0, 1.0, &geom, &gas);
        assert!(r.delta_h_j_kg < 0.0);
        assert!(r.pressure_ratio.is_nan());
        assert!(!r.is_finite());
    }

    #[test]
    fn derived_outlet_state() {
        let (geom, gas) = baseline();
        let r = evaluate_raw(70_000.0, 0.2, 0.92, 0.76, &geom, &gas);
        assert!(nearly_equal(
            r.outlet_stagnation_temperature_k(&gas),
            300.0 + r.delta_t_k,
            Tolerances::default()
        ));
        assert!(nearly_equal(
            r.outlet_stagnation_pressure_pa(&gas),
            r.pressure_ratio * 101_325.0,
            Tolerances::default()
        ));
        assert!(nearly_equal(
            r.shaft_power_w(0.2),
            0.2 * r.delta_h_j_kg,
            Tolerances::default()
        ));
    }

    #[test]
    fn model_matches_free_function() {
        let (geom, gas) = baseline();
        let model = MeanLineModel::new(&geom, &gas);
        let point = OperatingPoint::new(60_000.0, 0.15);
        let factors = EmpiricalFactors::new(0.9, 0.8);
        assert_eq!(
            model.evaluate(&point, &factors),
            evaluate(&point, &factors, &geom, &gas)
        );
    }

    #[test]
    fn baseline_is_bit_identical_across_calls() {
        let (geom, gas) = baseline();
        let point = OperatingPoint::new(70_000.0, 0.2);
        let factors = EmpiricalFactors::new(0.92, 0.76);
        let first = evaluate(&point, &factors, &geom, &gas);
        for _ in 0..5 {
            let again = evaluate(&point, &factors, &geom, &gas);
            assert_eq!(again.fields().map(f64::to_bits), first.fields().map(f64::to_bits));
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn baseline() -> (GeometryConstants, GasProperties) {
        (
            GeometryConstants::reference().unwrap(),
            GasProperties::standard_air().unwrap(),
        )
    }

    proptest! {
        #[test]
        fn more_slip_means_more_work(
            n in 40_000.0_f64..120_000.0,
            mdot in 0.01_f64..0.2,
            s1 in 0.05_f64..1.0,
            ds in 0.01_f64..0.5,
            eta in 0.5_f64..1.0,
        ) {
            let (geom, gas) = baseline();
            let s2 = (s1 + ds).min(1.0);
            prop_assume!(s2 > s1);
            let a = evaluate_raw(n, mdot, s1, eta, &geom, &gas);
            let b = evaluate_raw(n, mdot, s2, eta, &geom, &gas);
            prop_assume!(a.v_theta2_ideal_m_s > 0.0);
            prop_assert!(b.v_theta2_m_s > a.v_theta2_m_s);
            prop_assert!(b.delta_h_j_kg > a.delta_h_j_kg);
            prop_assert!(b.pressure_ratio > a.pressure_ratio);
        }

        #[test]
        fn zero_slip_is_unity_pressure_ratio(
            n in 0.0_f64..150_000.0,
            mdot in 0.001_f64..1.0,
            eta in 0.1_f64..1.0,
        ) {
            let (geom, gas) = baseline();
            let r = evaluate_raw(n, mdot, 0.0, eta, &geom, &gas);
            prop_assert_eq!(r.delta_h_j_kg, 0.0);
            prop_assert_eq!(r.pressure_ratio, 1.0);
        }

        #[test]
        fn evaluation_is_repeatable(
            n in 0.0_f64..150_000.0,
            mdot in -1.0_f64..1.0,
            slip in -0.5_f64..1.5,
            eta in -0.5_f64..1.5,
        ) {
            let (geom, gas) = baseline();
            let a = evaluate_raw(n, mdot, slip, eta, &geom, &gas);
            let b = evaluate_raw(n, mdot, slip, eta, &geom, &gas);
            prop_assert_eq!(a.fields().map(f64::to_bits), b.fields().map(f64::to_bits));
        }
    }
}
