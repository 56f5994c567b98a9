//! Reference frames and rigid transforms between them
use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::error::ServiceError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Earth centered reference frames that [EarthModel](crate::service::EarthModel)
/// knows how to relate.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Frame {
    /// Mean equator and equinox of J2000
    #[default]
    EME2000,
    /// Geocentric Celestial Reference Frame, frame bias is neglected
    GCRF,
    /// International Celestial Reference Frame, frame bias is neglected
    ICRF,
    /// Mean equator and equinox of date
    MOD,
    /// True equator and equinox of date
    TOD,
    /// Pseudo Earth fixed frame
    PEF,
    /// International Terrestrial Reference Frame, any realization.
    /// Polar motion is neglected.
    ITRF,
}

impl Frame {
    /// Returns true if this frame does not rotate with the Earth
    pub fn is_inertial(&self) -> bool {
        matches!(self, Self::EME2000 | Self::GCRF | Self::ICRF | Self::MOD | Self::TOD)
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::EME2000 => f.write_str("EME2000"),
            Self::GCRF => f.write_str("GCRF"),
            Self::ICRF => f.write_str("ICRF"),
            Self::MOD => f.write_str("MOD"),
            Self::TOD => f.write_str("TOD"),
            Self::PEF => f.write_str("PEF"),
            Self::ITRF => f.write_str("ITRF"),
        }
    }
}

impl std::str::FromStr for Frame {
    type Err = ServiceError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        match upper.as_str() {
            "EME2000" | "J2000" => Ok(Self::EME2000),
            "GCRF" => Ok(Self::GCRF),
            "ICRF" => Ok(Self::ICRF),
            "MOD" => Ok(Self::MOD),
            "TOD" => Ok(Self::TOD),
            "PEF" => Ok(Self::PEF),
            "ITRF" | "ITRF-93" | "ITRF-97" | "ITRF93" | "ITRF97" | "ITRF2000" | "ITRF2005"
            | "ITRF2008" | "ITRF2014" | "ITRF2020" => Ok(Self::ITRF),
            _ => Err(ServiceError::UnknownFrame(s.to_string())),
        }
    }
}

/// [RigidTransform] maps coordinates expressed in one frame
/// to coordinates expressed in another frame: `rotation * r + translation`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RigidTransform {
    pub rotation: Rotation3<f64>,
    pub translation: Vector3<f64>,
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl RigidTransform {
    /// Transform that does not modify anything
    pub fn identity() -> Self {
        Self {
            rotation: Rotation3::identity(),
            translation: Vector3::zeros(),
        }
    }
    /// Builds a pure rotation from a direction cosine matrix
    pub fn from_matrix(dcm: Matrix3<f64>) -> Self {
        Self {
            rotation: Rotation3::from_matrix_unchecked(dcm),
            translation: Vector3::zeros(),
        }
    }
    /// Applies this transform to given position
    pub fn apply(&self, position: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * position + self.translation
    }
    /// Returns the reciprocal transform
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.inverse();
        Self {
            rotation,
            translation: -(rotation * self.translation),
        }
    }
    /// Returns the transform that applies `self` then `next`
    pub fn then(&self, next: &Self) -> Self {
        Self {
            rotation: next.rotation * self.rotation,
            translation: next.rotation * self.translation + next.translation,
        }
    }
}
