//! Reference ellipsoids and geodetic coordinates
use dms_coordinates::DMS;
use hifitime::Epoch;
use nalgebra::Vector3;

use crate::{error::Error, frame::Frame, service::TimeFrameService};

use std::f64::consts::{FRAC_PI_2, PI};

#[cfg(feature = "log")]
use log::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Below this distance to the center [m], there is no foot-point.
const DEGENERATE_RADIUS: f64 = 1.0E-9;

/// Latitude convergence criterion [rad]
const LATITUDE_CONVERGENCE: f64 = 1.0E-14;

const MAX_ITERATIONS: usize = 32;

/// [GeodeticPoint]: latitude and longitude in radians, altitude in meters
#[derive(Default, Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeodeticPoint {
    /// Latitude within [-π/2, π/2]
    pub latitude: f64,
    /// Longitude within [-π, π[
    pub longitude: f64,
    pub altitude: f64,
}

impl GeodeticPoint {
    /// Builds [GeodeticPoint] from angles in radians and altitude in meters
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }
    /// Builds [GeodeticPoint] from angles in decimal degrees and altitude in meters
    pub fn from_degrees(latitude_ddeg: f64, longitude_ddeg: f64, altitude: f64) -> Self {
        Self::new(latitude_ddeg.to_radians(), longitude_ddeg.to_radians(), altitude)
    }
    /// Latitude in decimal degrees
    pub fn latitude_ddeg(&self) -> f64 {
        self.latitude.to_degrees()
    }
    /// Longitude in decimal degrees
    pub fn longitude_ddeg(&self) -> f64 {
        self.longitude.to_degrees()
    }
    /// Latitude and longitude, as [DMS]
    pub fn to_dms(&self) -> (DMS, DMS) {
        (
            DMS::from_ddeg_latitude(self.latitude_ddeg()),
            DMS::from_ddeg_longitude(self.longitude_ddeg()),
        )
    }
}

impl std::fmt::Display for GeodeticPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{{lat: {:.6}°, lon: {:.6}°, alt: {:.3} m}}",
            self.latitude_ddeg(),
            self.longitude_ddeg(),
            self.altitude
        )
    }
}

/// One axis symmetric [Ellipsoid], attached to a body fixed [Frame]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ellipsoid {
    /// Equatorial radius [m]
    pub semi_major_axis: f64,
    pub flattening: f64,
    /// Body fixed [Frame] the ellipsoid is attached to
    pub frame: Frame,
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

impl Ellipsoid {
    pub const WGS84: Self = Self {
        semi_major_axis: 6378137.0,
        flattening: 1.0 / 298.257223563,
        frame: Frame::ITRF,
    };

    pub const GRS80: Self = Self {
        semi_major_axis: 6378137.0,
        flattening: 1.0 / 298.257222101,
        frame: Frame::ITRF,
    };

    pub const IERS2010: Self = Self {
        semi_major_axis: 6378136.6,
        flattening: 1.0 / 298.25642,
        frame: Frame::ITRF,
    };

    /// Copies and returns [Self] attached to another body fixed [Frame]
    pub fn with_frame(&self, frame: Frame) -> Self {
        let mut s = *self;
        s.frame = frame;
        s
    }
    /// Polar radius [m]
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.flattening)
    }
    /// First eccentricity squared
    pub fn eccentricity_squared(&self) -> f64 {
        self.flattening * (2.0 - self.flattening)
    }
    /// Converts body fixed cartesian coordinates [m] to [GeodeticPoint].
    pub fn to_geodetic(&self, position: &Vector3<f64>) -> Result<GeodeticPoint, Error> {
        if !position.iter().all(|x| x.is_finite()) || position.norm() < DEGENERATE_RADIUS {
            return Err(Error::DegenerateGeometry);
        }

        let a = self.semi_major_axis;
        let e2 = self.eccentricity_squared();
        let (x, y, z) = (position.x, position.y, position.z);
        let p = x.hypot(y);

        let mut longitude = y.atan2(x);
        if longitude >= PI {
            longitude -= 2.0 * PI;
        }

        let mut latitude = z.atan2(p * (1.0 - e2));
        let mut converged = false;
        for _ in 0..MAX_ITERATIONS {
            let sin_lat = latitude.sin();
            let n = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
            let next = (z + e2 * n * sin_lat).atan2(p);
            converged = (next - latitude).abs() < LATITUDE_CONVERGENCE;
            latitude = next;
            if converged {
                break;
            }
        }

        if !converged {
            #[cfg(feature = "log")]
            warn!(
                "{:?}: latitude did not converge after {} iterations",
                position, MAX_ITERATIONS
            );
        }
        let latitude = latitude.clamp(-FRAC_PI_2, FRAC_PI_2);

        // valid at any latitude, poles included
        let (sin_lat, cos_lat) = latitude.sin_cos();
        let altitude = p * cos_lat + z * sin_lat - a * (1.0 - e2 * sin_lat * sin_lat).sqrt();

        Ok(GeodeticPoint {
            latitude,
            longitude,
            altitude,
        })
    }
    /// Converts [GeodeticPoint] to body fixed cartesian coordinates [m]
    pub fn to_cartesian(&self, point: &GeodeticPoint) -> Vector3<f64> {
        let e2 = self.eccentricity_squared();
        let (sin_lat, cos_lat) = point.latitude.sin_cos();
        let (sin_lon, cos_lon) = point.longitude.sin_cos();
        let n = self.semi_major_axis / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        Vector3::new(
            (n + point.altitude) * cos_lat * cos_lon,
            (n + point.altitude) * cos_lat * sin_lon,
            (n * (1.0 - e2) + point.altitude) * sin_lat,
        )
    }
    /// Converts `position` [m], expressed in `frame` at `epoch`, to [GeodeticPoint].
    pub fn transform<S: TimeFrameService>(
        &self,
        position: &Vector3<f64>,
        frame: Frame,
        epoch: Epoch,
        service: &S,
    ) -> Result<GeodeticPoint, Error> {
        let transform = service.rotation(frame, self.frame, epoch)?;
        self.to_geodetic(&transform.apply(position))
    }
}

/// Converts `position` [m], expressed in `frame` at `epoch`,
/// to [GeodeticPoint] relative to `ellipsoid`.
pub fn transform<S: TimeFrameService>(
    position: &Vector3<f64>,
    frame: Frame,
    epoch: Epoch,
    ellipsoid: &Ellipsoid,
    service: &S,
) -> Result<GeodeticPoint, Error> {
    ellipsoid.transform(position, frame, epoch, service)
}
