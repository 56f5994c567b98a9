//! Time & Frame service.
//!
//! The parser and the geodetic transforms only rely on the [TimeFrameService] trait.
//! [EarthModel] is a self contained implementation, without Earth Orientation Parameters:
//!  - IAU-1976 precession
//!  - IAU-1980 nutation, restricted to its leading terms
//!  - IAU-1982 Greenwich mean sidereal time, with UT1 = UTC
//!  - polar motion is neglected, so PEF and ITRF coincide
//!
//! Earth fixed positions are dominated by the UT1 = UTC approximation:
//! |UT1 - UTC| stays below 0.9 s, which is up to about 450 m at LEO altitudes
//! (0.004° of longitude). Plug in your own service, fed with Earth Orientation
//! Parameters, if you need the full IERS conventions.
use hifitime::{Epoch, TimeScale};
use nalgebra::Matrix3;

use crate::{
    constants::{ARCSEC_TO_RAD, DAYS_PER_CENTURY, J2000_JD},
    epoch::{parse_in_timescale, timescale},
    error::ServiceError,
    frame::{Frame, RigidTransform},
};

use std::f64::consts::TAU;
use std::str::FromStr;

/// Services the core requires from a time scale database
/// and a frames library.
pub trait TimeFrameService {
    /// Time scale registry lookup
    fn time_scale(&self, name: &str) -> Result<TimeScale, ServiceError>;

    /// Resolves a date expressed in named time scale
    fn resolve_time(&self, content: &str, time_scale: &str) -> Result<Epoch, ServiceError> {
        let ts = self.time_scale(time_scale)?;
        parse_in_timescale(content, ts)
    }

    /// Frame registry lookup
    fn frame(&self, name: &str) -> Result<Frame, ServiceError>;

    /// Returns the transform that maps coordinates expressed in `from`
    /// into coordinates expressed in `to`, at `epoch`.
    fn rotation(&self, from: Frame, to: Frame, epoch: Epoch)
        -> Result<RigidTransform, ServiceError>;
}

impl<T: TimeFrameService + ?Sized> TimeFrameService for &T {
    fn time_scale(&self, name: &str) -> Result<TimeScale, ServiceError> {
        (**self).time_scale(name)
    }
    fn resolve_time(&self, content: &str, time_scale: &str) -> Result<Epoch, ServiceError> {
        (**self).resolve_time(content, time_scale)
    }
    fn frame(&self, name: &str) -> Result<Frame, ServiceError> {
        (**self).frame(name)
    }
    fn rotation(
        &self,
        from: Frame,
        to: Frame,
        epoch: Epoch,
    ) -> Result<RigidTransform, ServiceError> {
        (**self).rotation(from, to, epoch)
    }
}

/*
 * Passive (frame) rotations about X, Y and Z axes
 */
fn rot1(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c)
}

fn rot2(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c)
}

fn rot3(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0)
}

/// IAU-1980 nutation series, leading terms.
/// Multipliers of (l, l', F, D, Ω) then
/// Δψ (A + A'.T) and Δε (B + B'.T) coefficients, in 0.1 mas.
const NUTATION_TERMS: [([i8; 5], [f64; 4]); 18] = [
    ([0, 0, 0, 0, 1], [-171996.0, -174.2, 92025.0, 8.9]),
    ([0, 0, 2, -2, 2], [-13187.0, -1.6, 5736.0, -3.1]),
    ([0, 0, 2, 0, 2], [-2274.0, -0.2, 977.0, -0.5]),
    ([0, 0, 0, 0, 2], [2062.0, 0.2, -895.0, 0.5]),
    ([0, 1, 0, 0, 0], [1426.0, -3.4, 54.0, -0.1]),
    ([1, 0, 0, 0, 0], [712.0, 0.1, -7.0, 0.0]),
    ([0, 1, 2, -2, 2], [-517.0, 1.2, 224.0, -0.6]),
    ([0, 0, 2, 0, 1], [-386.0, -0.4, 200.0, 0.0]),
    ([1, 0, 2, 0, 2], [-301.0, 0.0, 129.0, -0.1]),
    ([0, -1, 2, -2, 2], [217.0, -0.5, -95.0, 0.3]),
    ([1, 0, 0, -2, 0], [-158.0, 0.0, -1.0, 0.0]),
    ([0, 0, 2, -2, 1], [129.0, 0.1, -70.0, 0.0]),
    ([-1, 0, 2, 0, 2], [123.0, 0.0, -53.0, 0.0]),
    ([1, 0, 0, 0, 1], [63.0, 0.1, -33.0, 0.0]),
    ([0, 0, 0, 2, 0], [63.0, 0.0, -2.0, 0.0]),
    ([-1, 0, 2, 2, 2], [-59.0, 0.0, 26.0, 0.0]),
    ([-1, 0, 0, 0, 1], [-58.0, -0.1, 32.0, 0.0]),
    ([1, 0, 2, 0, 1], [-51.0, 0.0, 27.0, 0.0]),
];

/// Greenwich mean sidereal time (IAU-1982) in radians, within [0, 2π[,
/// from Julian date in UT1.
pub(crate) fn gmst(jd_ut1: f64) -> f64 {
    let t = (jd_ut1 - J2000_JD) / DAYS_PER_CENTURY;
    let seconds =
        67310.54841 + (876600.0 * 3600.0 + 8640184.812866) * t + 0.093104 * t * t
            - 6.2E-6 * t * t * t;
    (seconds.rem_euclid(86400.0) / 86400.0 * TAU).rem_euclid(TAU)
}

/// Mean obliquity of the ecliptic (IAU-1980) in radians,
/// `t` in Julian centuries of TT.
pub(crate) fn mean_obliquity(t: f64) -> f64 {
    (84381.448 - 46.8150 * t - 0.00059 * t * t + 0.001813 * t * t * t) * ARCSEC_TO_RAD
}

/// Nutation angles (Δψ, Δε) in radians, `t` in Julian centuries of TT.
pub(crate) fn nutation_angles(t: f64) -> (f64, f64) {
    const REVOLUTION: f64 = 1296000.0;
    let fundamental = [
        485866.733 + (1325.0 * REVOLUTION + 715922.633) * t + 31.310 * t * t + 0.064 * t * t * t,
        1287099.804 + (99.0 * REVOLUTION + 1292581.224) * t
            - 0.577 * t * t
            - 0.012 * t * t * t,
        335778.877 + (1342.0 * REVOLUTION + 295263.137) * t - 13.257 * t * t
            + 0.011 * t * t * t,
        1072261.307 + (1236.0 * REVOLUTION + 1105601.328) * t - 6.891 * t * t
            + 0.019 * t * t * t,
        450160.280 - (5.0 * REVOLUTION + 482890.539) * t + 7.455 * t * t + 0.008 * t * t * t,
    ]
    .map(|arcsec| arcsec.rem_euclid(REVOLUTION) * ARCSEC_TO_RAD);

    let (mut dpsi, mut deps) = (0.0_f64, 0.0_f64);
    for (multipliers, coefs) in NUTATION_TERMS.iter() {
        let arg = multipliers
            .iter()
            .zip(fundamental.iter())
            .map(|(k, angle)| *k as f64 * angle)
            .sum::<f64>();
        dpsi += (coefs[0] + coefs[1] * t) * arg.sin();
        deps += (coefs[2] + coefs[3] * t) * arg.cos();
    }
    (
        dpsi * 1.0E-4 * ARCSEC_TO_RAD,
        deps * 1.0E-4 * ARCSEC_TO_RAD,
    )
}

/// IAU-1976 precession matrix, from EME2000 to mean of date,
/// `t` in Julian centuries of TT.
pub(crate) fn precession(t: f64) -> Matrix3<f64> {
    let zeta = (2306.2181 * t + 0.30188 * t * t + 0.017998 * t * t * t) * ARCSEC_TO_RAD;
    let theta = (2004.3109 * t - 0.42665 * t * t - 0.041833 * t * t * t) * ARCSEC_TO_RAD;
    let z = (2306.2181 * t + 1.09468 * t * t + 0.018203 * t * t * t) * ARCSEC_TO_RAD;
    rot3(-z) * rot2(theta) * rot3(-zeta)
}

/// Default [TimeFrameService]: IAU-1976/1980 Earth model without EOP.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct EarthModel;

impl EarthModel {
    /// Returns the direction cosine matrix that maps EME2000 coordinates
    /// into `frame` coordinates, at `epoch`.
    pub fn from_eme2000(&self, frame: Frame, epoch: Epoch) -> Matrix3<f64> {
        let t = (epoch.to_jde_tt_days() - J2000_JD) / DAYS_PER_CENTURY;
        match frame {
            Frame::EME2000 | Frame::GCRF | Frame::ICRF => Matrix3::identity(),
            Frame::MOD => precession(t),
            Frame::TOD => self.nutation(t) * precession(t),
            Frame::PEF | Frame::ITRF => {
                let (dpsi, deps) = nutation_angles(t);
                let eps = mean_obliquity(t);
                let gast = gmst(epoch.to_jde_utc_days()) + dpsi * (eps + deps).cos();
                rot3(gast) * self.nutation(t) * precession(t)
            },
        }
    }
    /*
     * Nutation matrix, from mean of date to true of date
     */
    fn nutation(&self, t: f64) -> Matrix3<f64> {
        let (dpsi, deps) = nutation_angles(t);
        let eps = mean_obliquity(t);
        rot1(-(eps + deps)) * rot3(-dpsi) * rot1(eps)
    }
}

impl TimeFrameService for EarthModel {
    fn time_scale(&self, name: &str) -> Result<TimeScale, ServiceError> {
        timescale(name)
    }
    fn frame(&self, name: &str) -> Result<Frame, ServiceError> {
        Frame::from_str(name)
    }
    fn rotation(
        &self,
        from: Frame,
        to: Frame,
        epoch: Epoch,
    ) -> Result<RigidTransform, ServiceError> {
        if from == to {
            return Ok(RigidTransform::identity());
        }
        let dcm = self.from_eme2000(to, epoch) * self.from_eme2000(from, epoch).transpose();
        Ok(RigidTransform::from_matrix(dcm))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hifitime::Duration;
    use nalgebra::Vector3;

    fn is_orthonormal(m: &Matrix3<f64>) -> bool {
        (m * m.transpose() - Matrix3::identity()).norm() < 1.0E-12 && (m.determinant() - 1.0).abs() < 1.0E-12
    }

    #[test]
    fn greenwich_mean_sidereal_time() {
        // 1992-08-20T12:14:00 UT1
        let jd = 2448854.5 + 44040.0 / 86400.0;
        let gmst_deg = gmst(jd).to_degrees();
        assert!((gmst_deg - 152.578787886).abs() < 1.0E-5, "gmst: {}", gmst_deg);
    }

    #[test]
    fn precession_matrix() {
        assert!((precession(0.0) - Matrix3::identity()).norm() < 1.0E-15);
        let p = precession(0.21);
        assert!(is_orthonormal(&p));
        // about 50"/year of general precession
        let x = p * Vector3::x();
        let drift = x.y.atan2(x.x).abs() / ARCSEC_TO_RAD;
        assert!(drift > 900.0 && drift < 1000.0, "drift: {}", drift);
    }

    #[test]
    fn nutation_amplitude() {
        for t in [-0.2, 0.0, 0.1, 0.21] {
            let (dpsi, deps) = nutation_angles(t);
            assert!(dpsi.abs() / ARCSEC_TO_RAD < 20.0);
            assert!(deps.abs() / ARCSEC_TO_RAD < 10.0);
        }
        let eps = mean_obliquity(0.0).to_degrees();
        assert!((eps - 23.4392911).abs() < 1.0E-6);
    }

    #[test]
    fn frame_rotations() {
        let model = EarthModel;
        let t = Epoch::from_gregorian_utc_hms(2021, 3, 20, 12, 0, 0);
        let r = Vector3::new(6778.0E3, 1200.0E3, -300.0E3);

        for (from, to) in [
            (Frame::EME2000, Frame::ITRF),
            (Frame::EME2000, Frame::TOD),
            (Frame::MOD, Frame::PEF),
            (Frame::GCRF, Frame::EME2000),
        ] {
            let forward = model.rotation(from, to, t).unwrap();
            let backward = model.rotation(to, from, t).unwrap();
            assert!(is_orthonormal(forward.rotation.matrix()));
            let back = backward.apply(&forward.apply(&r));
            assert!((back - r).norm() < 1.0E-6, "{} -> {}", from, to);
            assert!((forward.apply(&r).norm() - r.norm()).abs() < 1.0E-6);
        }

        let pef = model.rotation(Frame::EME2000, Frame::PEF, t).unwrap();
        let itrf = model.rotation(Frame::EME2000, Frame::ITRF, t).unwrap();
        assert_eq!(pef, itrf);

        // Earth rotation: Z axis is preserved (up to precession-nutation)
        let z = itrf.apply(&Vector3::z());
        assert!(z.z > 0.9999);
    }

    #[test]
    fn ut1_sensitivity() {
        let model = EarthModel;
        let t = Epoch::from_gregorian_utc_hms(2021, 3, 20, 12, 0, 0);
        let leo = Vector3::new(6778.137E3, 0.0, 0.0);

        let itrf = model.rotation(Frame::EME2000, Frame::ITRF, t).unwrap();
        let later = model
            .rotation(Frame::EME2000, Frame::ITRF, t + Duration::from_seconds(0.9))
            .unwrap();

        // 0.9 s of Earth rotation at LEO radius
        let offset = (itrf.apply(&leo) - later.apply(&leo)).norm();
        assert!(offset > 400.0 && offset < 500.0, "offset: {} m", offset);
    }

    #[test]
    fn service_registries() {
        let model = EarthModel;
        assert_eq!(model.time_scale("UTC"), Ok(TimeScale::UTC));
        assert!(model.time_scale("MET").is_err());
        assert_eq!(model.frame("EME2000"), Ok(Frame::EME2000));
        let t = model
            .resolve_time("2021-03-20T12:00:00.000", "UTC")
            .unwrap();
        assert_eq!(t, Epoch::from_gregorian_utc_hms(2021, 3, 20, 12, 0, 0));
        assert!(model.resolve_time("2021-03-20T12:00:00.000", "XYZ").is_err());
    }
}
