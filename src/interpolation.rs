//! Polynomial interpolation kernels.
//! Abscissas are expressed in seconds, relative to an arbitrary reference.
use hifitime::Epoch;
use std::ops::Range;

use crate::state::StateVector;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `INTERPOLATION` method declared in the metadata
#[derive(Default, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InterpolationMethod {
    #[default]
    Lagrange,
    Hermite,
    Linear,
    /// Any other method, interpolated like [InterpolationMethod::Lagrange]
    Other(String),
}

impl std::fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Lagrange => f.write_str("LAGRANGE"),
            Self::Hermite => f.write_str("HERMITE"),
            Self::Linear => f.write_str("LINEAR"),
            Self::Other(method) => f.write_str(method),
        }
    }
}

impl std::str::FromStr for InterpolationMethod {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_uppercase().as_str() {
            "LAGRANGE" => Ok(Self::Lagrange),
            "HERMITE" => Ok(Self::Hermite),
            "LINEAR" => Ok(Self::Linear),
            _ => Ok(Self::Other(s.to_string())),
        }
    }
}

/// Selects the `size` [StateVector]s nearest to `t`, ties broken toward earlier samples.
/// `states` must be sorted. The window is naturally clamped at both ends.
pub(crate) fn nearest_window(states: &[StateVector], t: Epoch, size: usize) -> Range<usize> {
    let size = size.min(states.len());
    let center = states.partition_point(|state| state.epoch < t);
    let (mut start, mut end) = (center, center);
    while end - start < size {
        if start == 0 {
            end += 1;
        } else if end == states.len() {
            start -= 1;
        } else if t - states[start - 1].epoch <= states[end].epoch - t {
            start -= 1;
        } else {
            end += 1;
        }
    }
    start..end
}

/// Lagrange polynomial interpolation at `t` of the `(x, y)` samples.
pub(crate) fn lagrange(t: f64, x: &[f64], y: &[f64]) -> f64 {
    let mut polynomial = 0.0_f64;
    for i in 0..x.len() {
        let mut li = 1.0_f64;
        for j in 0..x.len() {
            if j != i {
                li *= t - x[j];
                li /= x[i] - x[j];
            }
        }
        polynomial += y[i] * li;
    }
    polynomial
}

/// Hermite polynomial interpolation at `t`, using values `y`,
/// first derivatives `dy` and optional second derivatives `d2y`.
/// Returns the polynomial value and its first two derivatives.
pub(crate) fn hermite(
    t: f64,
    x: &[f64],
    y: &[f64],
    dy: &[f64],
    d2y: Option<&[f64]>,
) -> (f64, f64, f64) {
    let multiplicity = if d2y.is_some() { 3 } else { 2 };
    let n = x.len() * multiplicity;

    // repeated nodes
    let z = (0..n).map(|k| x[k / multiplicity]).collect::<Vec<_>>();

    // divided differences, q[j][k] = f[z_{k-j}, .., z_k]
    let mut q = vec![vec![0.0_f64; n]; n];
    for k in 0..n {
        q[0][k] = y[k / multiplicity];
    }
    for j in 1..n {
        for k in j..n {
            q[j][k] = if z[k] == z[k - j] {
                // j < multiplicity: derivative / j!
                let node = k / multiplicity;
                match j {
                    1 => dy[node],
                    _ => d2y.map(|d2y| d2y[node] / 2.0).unwrap_or_default(),
                }
            } else {
                (q[j - 1][k] - q[j - 1][k - 1]) / (z[k] - z[k - j])
            };
        }
    }

    // Newton form and its derivatives, Horner scheme
    let (mut p, mut dp, mut d2p) = (q[n - 1][n - 1], 0.0_f64, 0.0_f64);
    for j in (0..n - 1).rev() {
        let dt = t - z[j];
        d2p = d2p * dt + 2.0 * dp;
        dp = dp * dt + p;
        p = p * dt + q[j][j];
    }
    (p, dp, d2p)
}

#[cfg(test)]
mod test {
    use super::*;
    use hifitime::Unit;
    use nalgebra::Vector3;

    #[test]
    fn window_selection() {
        let t0 = Epoch::from_gregorian_utc_hms(2021, 3, 20, 12, 0, 0);
        let states = (0..10)
            .map(|i| {
                StateVector::new(
                    t0 + (i as f64) * 60.0 * Unit::Second,
                    Vector3::zeros(),
                    Vector3::zeros(),
                )
            })
            .collect::<Vec<_>>();

        // centered
        let t = t0 + 270.0 * Unit::Second;
        assert_eq!(nearest_window(&states, t, 4), 3..7);
        // tie goes to the earlier sample
        let t = t0 + 150.0 * Unit::Second;
        assert_eq!(nearest_window(&states, t, 3), 1..4);
        // exact knot
        assert_eq!(nearest_window(&states, states[5].epoch, 1), 5..6);
        assert_eq!(nearest_window(&states, states[5].epoch, 2), 4..6);
        // clamped at both ends
        assert_eq!(nearest_window(&states, t0, 4), 0..4);
        assert_eq!(nearest_window(&states, states[9].epoch, 4), 6..10);
        assert_eq!(nearest_window(&states, states[8].epoch, 6), 4..10);
        // larger than data set
        assert_eq!(nearest_window(&states, t0, 20), 0..10);
    }

    #[test]
    fn lagrange_polynomial() {
        // cubic polynomial is exactly reproduced by 4 points
        let f = |t: f64| 2.0 * t * t * t - t * t + 3.0 * t - 5.0;
        let x = [0.0, 1.0, 2.5, 4.0];
        let y = x.map(f);
        for t in [0.5, 1.7, 3.2] {
            assert!((lagrange(t, &x, &y) - f(t)).abs() < 1.0E-9);
        }
        assert_eq!(lagrange(2.5, &x, &y), f(2.5));
    }

    #[test]
    fn hermite_polynomial() {
        // degree 5 polynomial exactly reproduced by 3 (P, V) points
        let f = |t: f64| t.powi(5) - 2.0 * t.powi(3) + t - 1.0;
        let df = |t: f64| 5.0 * t.powi(4) - 6.0 * t * t + 1.0;
        let d2f = |t: f64| 20.0 * t.powi(3) - 12.0 * t;
        let x = [0.0, 1.0, 2.0];
        let (y, dy) = (x.map(f), x.map(df));
        for t in [0.3, 1.2, 1.9] {
            let (p, dp, d2p) = hermite(t, &x, &y, &dy, None);
            assert!((p - f(t)).abs() < 1.0E-9);
            assert!((dp - df(t)).abs() < 1.0E-9);
            assert!((d2p - d2f(t)).abs() < 1.0E-8);
        }

        // degree 8 polynomial exactly reproduced by 3 (P, V, A) points
        let g = |t: f64| t.powi(8) - t.powi(4) + 0.5 * t;
        let dg = |t: f64| 8.0 * t.powi(7) - 4.0 * t.powi(3) + 0.5;
        let d2g = |t: f64| 56.0 * t.powi(6) - 12.0 * t * t;
        let (y, dy, d2y) = (x.map(g), x.map(dg), x.map(d2g));
        for t in [0.3, 1.2, 1.9] {
            let (p, dp, _) = hermite(t, &x, &y, &dy, Some(&d2y));
            assert!((p - g(t)).abs() < 1.0E-8);
            assert!((dp - dg(t)).abs() < 1.0E-7);
        }
    }
}
