//! Synthetic OEM generation
use crate::prelude::*;
use hifitime::Unit;
use rand::{distributions::Alphanumeric, Rng};

use std::path::PathBuf;

/// Earth gravitational parameter [km³.s⁻²]
const MU_KM: f64 = 398600.4418;

/// Orbit radius [km]
const RADIUS_KM: f64 = 6778.137;

const INCLINATION_DEG: f64 = 51.64;

const RAAN_DEG: f64 = 118.3;

/// Path to a file of the test pool
pub fn test_resource(name: &str) -> PathBuf {
    PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("test_resources")
        .join("OEM")
        .join(name)
}

pub fn random_name(size: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(size)
        .map(char::from)
        .collect()
}

/// Reference epoch of all synthetic files
pub fn t0() -> Epoch {
    Epoch::from_gregorian_utc_hms(2021, 3, 20, 12, 0, 0)
}

/// Epoch `seconds` after [t0]
pub fn epoch(seconds: f64) -> Epoch {
    t0() + seconds * Unit::Second
}

/// Formats an integer number of seconds after [t0] the way OEM files do
pub fn format_epoch(seconds: u32) -> String {
    format!(
        "2021-03-20T{:02}:{:02}:{:02}.000",
        12 + seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// Circular orbit: position [km], velocity [km/s] and acceleration [km/s²],
/// `t` seconds after [t0].
pub fn circular_state_km(t: f64) -> ([f64; 3], [f64; 3], [f64; 3]) {
    let n = (MU_KM / RADIUS_KM.powi(3)).sqrt();
    let v = (MU_KM / RADIUS_KM).sqrt();
    let u = n * t;
    let (su, cu) = u.sin_cos();
    let (so, co) = RAAN_DEG.to_radians().sin_cos();
    let (si, ci) = INCLINATION_DEG.to_radians().sin_cos();

    let p = [co * cu - so * su * ci, so * cu + co * su * ci, su * si];
    let q = [-co * su - so * cu * ci, -so * su + co * cu * ci, cu * si];

    let a = -MU_KM / RADIUS_KM.powi(2);
    (
        p.map(|p| RADIUS_KM * p),
        q.map(|q| v * q),
        p.map(|p| a * p),
    )
}

/// Circular orbit state in SI units, `t` seconds after [t0]
pub fn circular_state(t: f64) -> (Vector3<f64>, Vector3<f64>, Vector3<f64>) {
    let (p, v, a) = circular_state_km(t);
    (
        Vector3::from(p) * 1.0E3,
        Vector3::from(v) * 1.0E3,
        Vector3::from(a) * 1.0E3,
    )
}

/// Synthetic single segment OEM description
#[derive(Debug, Clone)]
pub struct Generator {
    pub object_id: String,
    pub samples: u32,
    /// Sampling period [s]
    pub step: u32,
    pub acceleration: bool,
    pub method: Option<&'static str>,
    pub degree: Option<usize>,
    /// Useable window, as sample indexes
    pub useable: Option<(u32, u32)>,
    /// Writes USABLE_ instead of USEABLE_
    pub misspelled: bool,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            object_id: "2021-001-A".to_string(),
            samples: 10,
            step: 60,
            acceleration: false,
            method: None,
            degree: None,
            useable: None,
            misspelled: false,
        }
    }
}

impl Generator {
    /// Epoch of the last sample, in seconds after [t0]
    pub fn last(&self) -> u32 {
        (self.samples - 1) * self.step
    }
    pub fn header(&self) -> Vec<String> {
        vec![
            "CCSDS_OEM_VERS = 2.0".to_string(),
            "CREATION_DATE = 2021-03-20T11:00:00.000".to_string(),
            format!("ORIGINATOR = {}", random_name(6)),
            String::new(),
        ]
    }
    pub fn metadata(&self) -> Vec<String> {
        let mut lines = vec![
            "META_START".to_string(),
            "OBJECT_NAME = SYNTHETIC".to_string(),
            format!("OBJECT_ID = {}", self.object_id),
            "CENTER_NAME = EARTH".to_string(),
            "REF_FRAME = EME2000".to_string(),
            "TIME_SYSTEM = UTC".to_string(),
            format!("START_TIME = {}", format_epoch(0)),
        ];
        if let Some((start, stop)) = self.useable {
            let prefix = if self.misspelled { "USABLE" } else { "USEABLE" };
            lines.push(format!(
                "{}_START_TIME = {}",
                prefix,
                format_epoch(start * self.step)
            ));
            lines.push(format!(
                "{}_STOP_TIME = {}",
                prefix,
                format_epoch(stop * self.step)
            ));
        }
        lines.push(format!("STOP_TIME = {}", format_epoch(self.last())));
        if let Some(method) = self.method {
            lines.push(format!("INTERPOLATION = {}", method));
        }
        if let Some(degree) = self.degree {
            lines.push(format!("INTERPOLATION_DEGREE = {}", degree));
        }
        lines.push("META_STOP".to_string());
        lines
    }
    pub fn data(&self) -> Vec<String> {
        (0..self.samples)
            .map(|k| {
                let t = k * self.step;
                let (p, v, a) = circular_state_km(t as f64);
                let mut line = format!(
                    "{} {:.9} {:.9} {:.9} {:.12} {:.12} {:.12}",
                    format_epoch(t),
                    p[0],
                    p[1],
                    p[2],
                    v[0],
                    v[1],
                    v[2]
                );
                if self.acceleration {
                    line.push_str(&format!(" {:.15e} {:.15e} {:.15e}", a[0], a[1], a[2]));
                }
                line
            })
            .collect()
    }
    /// Generates the whole file
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self.header();
        lines.extend(self.metadata());
        lines.extend(self.data());
        lines
    }
    pub fn generate(&self) -> String {
        self.lines().join("\n")
    }
}

/// Asserts that `state` matches the circular orbit, `t` seconds after [t0]
pub fn assert_circular_state(state: &StateVector, t: f64, position_tol: f64, velocity_tol: f64) {
    let (p, v, _) = circular_state(t);
    let dp = (state.position - p).norm();
    let dv = (state.velocity - v).norm();
    assert!(
        dp < position_tol,
        "t={}s: position error {} m exceeds {} m",
        t,
        dp,
        position_tol
    );
    assert!(
        dv < velocity_tol,
        "t={}s: velocity error {} m/s exceeds {} m/s",
        t,
        dv,
        velocity_tol
    );
}
