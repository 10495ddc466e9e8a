//! Closed category vocabularies for acceleration and mass-rate models.

use core::fmt;

/// Acceleration model categories recognized by automatic simulation setup.
///
/// Models outside this set cannot participate in category-based queries;
/// they classify as `Undefined`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccelerationModelType {
    Undefined,
    CentralGravity,
    Aerodynamic,
    CannonBallRadiationPressure,
    SphericalHarmonicGravity,
    MutualSphericalHarmonicGravity,
    ThirdBodyCentralGravity,
    ThirdBodySphericalHarmonicGravity,
    ThirdBodyMutualSphericalHarmonicGravity,
    ThrustAcceleration,
}

impl AccelerationModelType {
    /// Every category, `Undefined` included, each exactly once.
    pub const ALL: [Self; 10] = [
        Self::Undefined,
        Self::CentralGravity,
        Self::Aerodynamic,
        Self::CannonBallRadiationPressure,
        Self::SphericalHarmonicGravity,
        Self::MutualSphericalHarmonicGravity,
        Self::ThirdBodyCentralGravity,
        Self::ThirdBodySphericalHarmonicGravity,
        Self::ThirdBodyMutualSphericalHarmonicGravity,
        Self::ThrustAcceleration,
    ];

    /// Stable identifier used as a logging and serialization key.
    ///
    /// Distinct categories always map to distinct names; `Undefined` gets a
    /// sentinel rather than an error.
    pub fn name(self) -> &'static str {
        match self {
            Self::Undefined => "undefined_acceleration",
            Self::CentralGravity => "central_gravity",
            Self::Aerodynamic => "aerodynamic",
            Self::CannonBallRadiationPressure => "cannon_ball_radiation_pressure",
            Self::SphericalHarmonicGravity => "spherical_harmonic_gravity",
            Self::MutualSphericalHarmonicGravity => "mutual_spherical_harmonic_gravity",
            Self::ThirdBodyCentralGravity => "third_body_central_gravity",
            Self::ThirdBodySphericalHarmonicGravity => "third_body_spherical_harmonic_gravity",
            Self::ThirdBodyMutualSphericalHarmonicGravity => {
                "third_body_mutual_spherical_harmonic_gravity"
            }
            Self::ThrustAcceleration => "thrust_acceleration",
        }
    }
}

impl fmt::Display for AccelerationModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mass-rate model categories recognized by automatic simulation setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MassRateModelType {
    Undefined,
    Custom,
    FromThrust,
}

impl MassRateModelType {
    /// Every category, `Undefined` included, each exactly once.
    pub const ALL: [Self; 3] = [Self::Undefined, Self::Custom, Self::FromThrust];

    /// Stable identifier used as a logging and serialization key.
    pub fn name(self) -> &'static str {
        match self {
            Self::Undefined => "undefined_mass_rate_model",
            Self::Custom => "custom_mass_rate_model",
            Self::FromThrust => "from_thrust_mass_rate_model",
        }
    }
}

impl fmt::Display for MassRateModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
