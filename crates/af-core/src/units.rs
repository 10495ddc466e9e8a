// af-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Force as UomForce, Length as UomLength, Mass as UomMass,
    MassDensity as UomMassDensity, MassRate as UomMassRate, Time as UomTime,
    Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Force = UomForce;
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Density = UomMassDensity;
pub type MassRate = UomMassRate;
pub type Time = UomTime;
pub type Velocity = UomVelocity;

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn newton(v: f64) -> Force {
    use uom::si::force::newton;
    Force::new::<newton>(v)
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

pub mod constants {
    /// Standard gravity at sea level (m/s²).
    pub const G0_MPS2: f64 = 9.806_65;

    /// Astronomical unit (m).
    pub const AU_M: f64 = 1.495_978_707e11;

    /// Solar radiation pressure at 1 AU (N/m²).
    pub const SOLAR_PRESSURE_1AU_PA: f64 = 4.56e-6;

    /// Gravitational parameter of Earth (m³/s²).
    pub const MU_EARTH: f64 = 3.986_004_418e14;

    /// Gravitational parameter of the Sun (m³/s²).
    pub const MU_SUN: f64 = 1.327_124_400_18e20;

    /// Gravitational parameter of the Moon (m³/s²).
    pub const MU_MOON: f64 = 4.902_800_066e12;

    /// Mean equatorial radius of Earth (m).
    pub const EARTH_RADIUS_M: f64 = 6.378_137e6;
}
