//! Baseline design point of the reference impeller.

use ml_core::numeric::{Tolerances, nearly_equal};
use ml_core::units::{deg, k, m, pa};
use ml_model::{
    Annulus, EmpiricalFactors, GasProperties, GeometryConstants, MeanLineModel, OperatingPoint,
    evaluate, evaluate_checked, evaluate_raw,
};

fn rel(tol: f64) -> Tolerances {
    Tolerances::relative(tol)
}

#[test]
fn baseline_design_point() {
    let geometry = GeometryConstants::reference().unwrap();
    let gas = GasProperties::standard_air().unwrap();

    assert!(nearly_equal(geometry.a_in_m2(), 1.469_787e-3, rel(1e-5)));
    assert!(nearly_equal(gas.rho_in_kg_m3(), 1.176_829, rel(1e-5)));

    let r = evaluate(
        &OperatingPoint::new(70_000.0, 0.20),
        &EmpiricalFactors::new(0.92, 0.76),
        &geometry,
        &gas,
    );

    assert!(nearly_equal(r.u_m_s, 208.498_08, rel(1e-6)));
    assert!(nearly_equal(r.v_ax_m_s, 115.627_80, rel(1e-6)));

    let v_theta2_ideal = r.u_m_s - r.v_ax_m_s / 49.13_f64.to_radians().tan();
    assert!(nearly_equal(r.v_theta2_ideal_m_s, v_theta2_ideal, rel(1e-3)));
    assert!(nearly_equal(r.v_theta2_ideal_m_s, 108.444_06, rel(1e-6)));
    assert!(nearly_equal(r.v_theta2_m_s, 99.768_54, rel(1e-6)));
    assert!(nearly_equal(r.delta_h_j_kg, 20_801.548, rel(1e-6)));
    assert!(nearly_equal(r.delta_t_k, 20.708_36, rel(1e-6)));

    // Four significant figures
    assert!((r.pressure_ratio - 1.196).abs() < 5e-4);
    assert!(nearly_equal(r.pressure_ratio, 1.195_973, rel(1e-6)));
}

#[test]
fn hand_built_configuration_matches_first_sketch() {
    // Mean radius 28.44 mm, inlet at 1 bar, no slip, eta_c 0.75.
    let geometry = GeometryConstants::new(
        Annulus::new(m(23e-3), m(7.82e-3)),
        Annulus::new(m(33e-3), m(18.31e-3)),
        m(0.02844),
        deg(49.13),
    )
    .unwrap()
    .with_beta1(deg(90.0));
    let gas = GasProperties::new(1.4, 287.0, k(300.0), pa(1e5)).unwrap();

    let r = evaluate_raw(70_000.0, 0.2, 1.0, 0.75, &geometry, &gas);
    assert!(nearly_equal(r.u_m_s, 208.476_09, rel(1e-6)));
    assert!(nearly_equal(r.v_ax_m_s, 117.159_87, rel(1e-6)));
    assert!(nearly_equal(r.pressure_ratio, 1.208_373, rel(1e-6)));
}

#[test]
fn two_configurations_do_not_interfere() {
    let geometry = GeometryConstants::reference().unwrap();
    let air = GasProperties::standard_air().unwrap();
    let helium = GasProperties::new(1.667, 2077.0, k(300.0), pa(101_325.0)).unwrap();

    let point = OperatingPoint::new(70_000.0, 0.05);
    let factors = EmpiricalFactors::new(0.92, 0.76);

    let before = MeanLineModel::new(&geometry, &air).evaluate(&point, &factors);
    let he = MeanLineModel::new(&geometry, &helium).evaluate(&point, &factors);
    let after = MeanLineModel::new(&geometry, &air).evaluate(&point, &factors);

    assert_eq!(before, after);
    assert_ne!(before.pressure_ratio, he.pressure_ratio);
}

#[test]
fn checked_baseline_passes() {
    let geometry = GeometryConstants::reference().unwrap();
    let gas = GasProperties::standard_air().unwrap();
    let point = OperatingPoint::new(70_000.0, 0.2);
    let factors = EmpiricalFactors::new(0.92, 0.76);

    let checked = evaluate_checked(&point, &factors, &geometry, &gas).unwrap();
    assert_eq!(checked, evaluate(&point, &factors, &geometry, &gas));
}
