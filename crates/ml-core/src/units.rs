// ml-core/src/units.rs

use uom::si::f64::{
    Angle as UomAngle, Length as UomLength, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Angle = UomAngle;
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn deg(v: f64) -> Angle {
    use uom::si::angle::degree;
    Angle::new::<degree>(v)
}

/// rev/min to rad/s, the conversion used by the evaluator hot path.
#[inline]
pub fn rpm_to_rad_per_s(n_rpm: f64) -> f64 {
    2.0 * std::f64::consts::PI * n_rpm / 60.0
}

pub mod constants {
    /// Specific gas constant of dry air, J/(kg K).
    pub const R_AIR: f64 = 287.0;
    /// Ratio of specific heats of dry air.
    pub const GAMMA_AIR: f64 = 1.4;
    /// Standard sea-level pressure, Pa.
    pub const P_STD_PA: f64 = 101_325.0;
}
