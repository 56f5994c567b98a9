//! Time tagged state vectors and covariances
use hifitime::Epoch;
use nalgebra::{Matrix6, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Derivatives provided by the ephemeris data lines of a segment
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Derivatives {
    /// Position and velocity
    #[default]
    PositionVelocity,
    /// Position, velocity and acceleration
    PositionVelocityAcceleration,
}

impl std::fmt::Display for Derivatives {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::PositionVelocity => f.write_str("USE_PV"),
            Self::PositionVelocityAcceleration => f.write_str("USE_PVA"),
        }
    }
}

/// [StateVector] of a satellite, in SI units: positions in meters,
/// velocities in meters per second, accelerations in m.s⁻².
/// Files express them in kilometers, we convert while parsing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateVector {
    pub epoch: Epoch,
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub acceleration: Option<Vector3<f64>>,
    /// Position/velocity covariance, in m², m².s⁻¹ and m².s⁻²
    pub covariance: Option<Matrix6<f64>>,
}

impl StateVector {
    /// Builds a new [StateVector] from a position and velocity
    pub fn new(epoch: Epoch, position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        Self {
            epoch,
            position,
            velocity,
            acceleration: None,
            covariance: None,
        }
    }
    /// Copies and returns [Self] with given acceleration
    pub fn with_acceleration(&self, acceleration: Vector3<f64>) -> Self {
        let mut s = self.clone();
        s.acceleration = Some(acceleration);
        s
    }
    /// Copies and returns [Self] with given covariance
    pub fn with_covariance(&self, covariance: Matrix6<f64>) -> Self {
        let mut s = self.clone();
        s.covariance = Some(covariance);
        s
    }
    /// Returns [Derivatives] available in this [StateVector]
    pub fn derivatives(&self) -> Derivatives {
        if self.acceleration.is_some() {
            Derivatives::PositionVelocityAcceleration
        } else {
            Derivatives::PositionVelocity
        }
    }
    /// Returns this [StateVector] epoch in seconds since 1970-01-01T00:00:00 UTC
    pub fn unix_timestamp(&self) -> f64 {
        self.epoch.to_unix_seconds()
    }
}

impl std::fmt::Display for StateVector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{{{}, P({:.3}, {:.3}, {:.3}), V({:.6}, {:.6}, {:.6})",
            self.epoch,
            self.position.x,
            self.position.y,
            self.position.z,
            self.velocity.x,
            self.velocity.y,
            self.velocity.z,
        )?;
        if let Some(acc) = self.acceleration {
            write!(f, ", A({:.9}, {:.9}, {:.9})", acc.x, acc.y, acc.z)?;
        }
        f.write_str("}")
    }
}

/// [Covariance] matrix as described in a `COVARIANCE_START` block
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Covariance {
    pub epoch: Epoch,
    /// `COV_REF_FRAME`, when it differs from the segment frame
    pub ref_frame: Option<String>,
    /// Symmetric 6x6 matrix, in SI units
    pub matrix: Matrix6<f64>,
}

impl Covariance {
    /// Builds [Covariance] from the 21 terms of its lower triangle,
    /// given row by row, in SI units.
    pub(crate) fn from_lower_triangle(
        epoch: Epoch,
        ref_frame: Option<String>,
        terms: &[f64],
    ) -> Self {
        let mut matrix = Matrix6::<f64>::zeros();
        let mut k = 0;
        for i in 0..6 {
            for j in 0..=i {
                if let Some(value) = terms.get(k) {
                    matrix[(i, j)] = *value;
                    matrix[(j, i)] = *value;
                }
                k += 1;
            }
        }
        Self {
            epoch,
            ref_frame,
            matrix,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn lower_triangle() {
        let terms = (1..=21).map(|k| k as f64).collect::<Vec<_>>();
        let cov = Covariance::from_lower_triangle(Epoch::default(), None, &terms);
        assert_eq!(cov.matrix, cov.matrix.transpose());
        assert_eq!(cov.matrix[(0, 0)], 1.0);
        assert_eq!(cov.matrix[(1, 0)], 2.0);
        assert_eq!(cov.matrix[(1, 1)], 3.0);
        assert_eq!(cov.matrix[(5, 0)], 16.0);
        assert_eq!(cov.matrix[(5, 5)], 21.0);
        assert_eq!(cov.matrix[(0, 5)], 16.0);
    }
}
