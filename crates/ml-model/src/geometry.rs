//! Compressor stage geometry.

use crate::error::{ModelError, ModelResult};
use ml_core::numeric::ensure_positive;
use ml_core::units::{Angle, Length, deg, mm};
use std::f64::consts::PI;
use uom::si::{angle::radian, length::meter};

/// Annulus flow area between a tip and a hub radius.
///
/// ```text
/// A = pi * (r_tip^2 - r_hub^2)
/// ```
///
/// Positive whenever `r_tip > r_hub >= 0`. No checks are made here; invalid
/// radii are rejected when [`GeometryConstants`] is built.
#[inline]
pub fn flow_area(r_tip_m: f64, r_hub_m: f64) -> f64 {
    PI * (r_tip_m * r_tip_m - r_hub_m * r_hub_m)
}

/// Tip and hub radius of one flow station (m).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Annulus {
    pub r_tip_m: f64,
    pub r_hub_m: f64,
}

impl Annulus {
    pub fn new(r_tip: Length, r_hub: Length) -> Self {
        Self {
            r_tip_m: r_tip.get::<meter>(),
            r_hub_m: r_hub.get::<meter>(),
        }
    }

    pub fn area_m2(&self) -> f64 {
        flow_area(self.r_tip_m, self.r_hub_m)
    }

    /// Blade height `b = r_tip - r_hub`.
    pub fn blade_height_m(&self) -> f64 {
        self.r_tip_m - self.r_hub_m
    }

    fn validate(
        &self,
        tip: &'static str,
        hub: &'static str,
        order: &'static str,
    ) -> ModelResult<()> {
        ensure_positive(self.r_tip_m, tip).map_err(ModelError::geometry)?;
        ensure_positive(self.r_hub_m, hub).map_err(ModelError::geometry)?;
        if self.r_tip_m <= self.r_hub_m {
            return Err(ModelError::InvalidGeometry {
                what: order,
                value: self.blade_height_m(),
            });
        }
        Ok(())
    }
}

/// Immutable stage geometry.
///
/// Built once from design values and passed by reference to the evaluator.
/// Flow areas are derived at construction so every query returns the same
/// bits for the life of the value.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryConstants {
    inlet: Annulus,
    outlet: Annulus,
    r_mean_m: f64,
    beta1_rad: f64,
    beta2_rad: f64,
    a_in_m2: f64,
    a_out_m2: f64,
}

impl GeometryConstants {
    /// Create stage geometry.
    ///
    /// The inlet blade angle defaults to 90 degrees (axial inlet); see
    /// [`GeometryConstants::with_beta1`].
    ///
    /// # Errors
    /// `InvalidGeometry` for non-positive or non-finite radii, or when a tip
    /// radius does not exceed its hub radius.
    pub fn new(
        inlet: Annulus,
        outlet: Annulus,
        r_mean: Length,
        beta2: Angle,
    ) -> ModelResult<Self> {
        inlet.validate(
            "inlet tip radius",
            "inlet hub radius",
            "inlet tip radius must exceed hub radius",
        )?;
        outlet.validate(
            "outlet tip radius",
            "outlet hub radius",
            "outlet tip radius must exceed hub radius",
        )?;
        let r_mean_m = ensure_positive(r_mean.get::<meter>(), "mean radius")
            .map_err(ModelError::geometry)?;

        let beta2_rad = beta2.get::<radian>();
        if !beta2_rad.is_finite() {
            return Err(ModelError::InvalidGeometry {
                what: "outlet blade angle",
                value: beta2_rad,
            });
        }

        Ok(Self {
            inlet,
            outlet,
            r_mean_m,
            beta1_rad: PI / 2.0,
            beta2_rad,
            a_in_m2: inlet.area_m2(),
            a_out_m2: outlet.area_m2(),
        })
    }

    /// Override the inlet blade angle.
    pub fn with_beta1(mut self, beta1: Angle) -> Self {
        self.beta1_rad = beta1.get::<radian>();
        self
    }

    /// Baseline impeller: 23/7.82 mm inlet, 33/18.31 mm outlet,
    /// 28.443 mm mean radius, 49.13 degree outlet blade angle.
    pub fn reference() -> ModelResult<Self> {
        Self::new(
            Annulus::new(mm(23.0), mm(7.82)),
            Annulus::new(mm(33.0), mm(18.31)),
            mm(28.443),
            deg(49.13),
        )
    }

    pub fn inlet(&self) -> Annulus {
        self.inlet
    }

    pub fn outlet(&self) -> Annulus {
        self.outlet
    }

    pub fn r_mean_m(&self) -> f64 {
        self.r_mean_m
    }

    pub fn beta1_rad(&self) -> f64 {
        self.beta1_rad
    }

    pub fn beta2_rad(&self) -> f64 {
        self.beta2_rad
    }

    /// Inlet annulus area `A_in`.
    pub fn a_in_m2(&self) -> f64 {
        self.a_in_m2
    }

    /// Outlet annulus area `A_out`.
    pub fn a_out_m2(&self) -> f64 {
        self.a_out_m2
    }

    pub fn b_in_m(&self) -> f64 {
        self.inlet.blade_height_m()
    }

    pub fn b_out_m(&self) -> f64 {
        self.outlet.blade_height_m()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ml_core::units::m;

    #[test]
    fn reference_geometry_areas() {
        let g = GeometryConstants::reference().unwrap();
        let expected_in = PI * (0.023_f64.powi(2) - 0.00782_f64.powi(2));
        assert!((g.a_in_m2() - expected_in).abs() < 1e-15);
        assert!((g.a_in_m2() - 1.4698e-3).abs() < 1e-7);
        assert!((g.a_out_m2() - 2.3680e-3).abs() < 1e-7);
        assert!((g.b_in_m() - 0.01518).abs() < 1e-12);
        assert!((g.beta1_rad() - PI / 2.0).abs() < 1e-15);
    }

    #[test]
    fn inverted_radii_rejected() {
        let err = GeometryConstants::new(
            Annulus::new(m(0.005), m(0.01)),
            Annulus::new(m(0.033), m(0.018)),
            m(0.028),
            deg(49.0),
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::InvalidGeometry { .. }));
    }

    #[test]
    fn equal_radii_rejected() {
        let result = GeometryConstants::new(
            Annulus::new(m(0.02), m(0.02)),
            Annulus::new(m(0.033), m(0.018)),
            m(0.028),
            deg(49.0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn non_positive_radius_rejected() {
        let result = GeometryConstants::new(
            Annulus::new(m(0.023), m(0.0078)),
            Annulus::new(m(0.033), m(-0.018)),
            m(0.028),
            deg(49.0),
        );
        assert!(matches!(
            result,
            Err(ModelError::InvalidGeometry {
                what: "outlet hub radius",
                ..
            })
        ));

        let result = GeometryConstants::new(
            Annulus::new(m(0.023), m(0.0078)),
            Annulus::new(m(0.033), m(0.018)),
            m(0.0),
            deg(49.0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn beta1_override() {
        let g = GeometryConstants::reference().unwrap().with_beta1(deg(60.0));
        assert!((g.beta1_rad() - PI / 3.0).abs() < 1e-12);
    }

    #[test]
    fn derived_area_is_stable() {
        let g = GeometryConstants::reference().unwrap();
        let first = g.a_in_m2().to_bits();
        for _ in 0..10 {
            assert_eq!(g.a_in_m2().to_bits(), first);
        }
        assert_eq!(g.clone().a_in_m2().to_bits(), first);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn area_positive_when_tip_exceeds_hub(
            hub in 1e-4_f64..0.5,
            gap in 1e-5_f64..0.5,
        ) {
            let tip = hub + gap;
            prop_assert!(flow_area(tip, hub) > 0.0);
        }
    }
}
