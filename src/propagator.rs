//! Bounded propagators: interpolation of tabulated ephemeris
use hifitime::Epoch;
use nalgebra::Vector3;

use crate::{
    error::Error,
    interpolation::{hermite, lagrange, nearest_window, InterpolationMethod},
    segment::Segment,
    state::{Derivatives, StateVector},
};

#[cfg(feature = "log")]
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Quality annotation of an interpolated [StateVector]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Validity {
    /// Within the useable window
    Useable,
    /// Within the interpolation range, but outside the useable window
    OutsideUseable,
}

/// Result of an interpolation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Evaluation {
    pub state: StateVector,
    pub validity: Validity,
}

impl Evaluation {
    /// Returns true if this [Evaluation] lies within the useable window
    pub fn is_useable(&self) -> bool {
        self.validity == Validity::Useable
    }
}

/// [BoundedPropagator] interpolates a single [Segment]
#[derive(Debug, Copy, Clone)]
pub struct BoundedPropagator<'a> {
    segment: &'a Segment,
}

impl<'a> BoundedPropagator<'a> {
    pub fn new(segment: &'a Segment) -> Self {
        Self { segment }
    }
    /// Earliest [Epoch] this propagator can handle
    pub fn min_epoch(&self) -> Epoch {
        self.segment.start()
    }
    /// Latest [Epoch] this propagator can handle
    pub fn max_epoch(&self) -> Epoch {
        self.segment.stop()
    }
    /// Number of samples taken into account, at least 2.
    /// [InterpolationMethod::Linear] always uses 2 samples.
    pub fn samples(&self) -> usize {
        match self.segment.interpolation_method() {
            InterpolationMethod::Linear => 2,
            _ => self.segment.interpolation_samples().max(2),
        }
    }
    /// Interpolates the [StateVector] at `t`. Stored samples are returned as is.
    pub fn propagate(&self, t: Epoch) -> Result<Evaluation, Error> {
        let (start, stop) = (self.min_epoch(), self.max_epoch());
        if t < start || t > stop {
            return Err(Error::OutOfBounds {
                epoch: t,
                start,
                stop,
            });
        }

        let validity = if self.segment.is_useable(t) {
            Validity::Useable
        } else {
            Validity::OutsideUseable
        };

        let states = self.segment.state_vectors();

        if let Ok(index) = states.binary_search_by_key(&t, |state| state.epoch) {
            return Ok(Evaluation {
                state: states[index].clone(),
                validity,
            });
        }

        let window = nearest_window(states, t, self.samples());

        #[cfg(feature = "log")]
        debug!("{} interpolation window {:?}", t, window);

        let state = self.interpolate(t, &states[window]);
        Ok(Evaluation { state, validity })
    }
    fn interpolate(&self, t: Epoch, window: &[StateVector]) -> StateVector {
        let t0 = window[0].epoch;
        let x = window
            .iter()
            .map(|state| (state.epoch - t0).to_seconds())
            .collect::<Vec<_>>();
        let dt = (t - t0).to_seconds();

        let with_acceleration =
            self.segment.available_derivatives() == Derivatives::PositionVelocityAcceleration;

        let axis = |values: &dyn Fn(&StateVector) -> f64| -> Vec<f64> {
            window.iter().map(values).collect()
        };

        let mut position = Vector3::<f64>::zeros();
        let mut velocity = Vector3::<f64>::zeros();
        let mut acceleration = Vector3::<f64>::zeros();

        for i in 0..3 {
            let p = axis(&|state| state.position[i]);
            let v = axis(&|state| state.velocity[i]);
            let a = axis(&|state| state.acceleration.map(|a| a[i]).unwrap_or_default());

            match self.segment.interpolation_method() {
                InterpolationMethod::Hermite => {
                    let d2 = if with_acceleration {
                        Some(a.as_slice())
                    } else {
                        None
                    };
                    let (pi, vi, ai) = hermite(dt, &x, &p, &v, d2);
                    position[i] = pi;
                    velocity[i] = vi;
                    acceleration[i] = ai;
                },
                _ => {
                    position[i] = lagrange(dt, &x, &p);
                    velocity[i] = lagrange(dt, &x, &v);
                    if with_acceleration {
                        acceleration[i] = lagrange(dt, &x, &a);
                    }
                },
            }
        }

        let state = StateVector::new(t, position, velocity);
        if with_acceleration {
            state.with_acceleration(acceleration)
        } else {
            state
        }
    }
}

/// [AggregatePropagator] interpolates all [Segment]s of one satellite.
/// When segments overlap, the latest segment takes precedence.
#[derive(Debug, Copy, Clone)]
pub struct AggregatePropagator<'a> {
    segments: &'a [Segment],
}

impl<'a> AggregatePropagator<'a> {
    pub fn new(segments: &'a [Segment]) -> Self {
        Self { segments }
    }
    /// Earliest [Epoch] this propagator can handle
    pub fn min_epoch(&self) -> Option<Epoch> {
        self.segments.iter().map(|segment| segment.start()).min()
    }
    /// Latest [Epoch] this propagator can handle
    pub fn max_epoch(&self) -> Option<Epoch> {
        self.segments.iter().map(|segment| segment.stop()).max()
    }
    /// Interpolates the [StateVector] at `t`, using the latest [Segment] that covers `t`.
    pub fn propagate(&self, t: Epoch) -> Result<Evaluation, Error> {
        match self
            .segments
            .iter()
            .rev()
            .find(|segment| segment.start() <= t && t <= segment.stop())
        {
            Some(segment) => segment.evaluate(t),
            None => Err(Error::OutOfBounds {
                epoch: t,
                start: self.min_epoch().unwrap_or(t),
                stop: self.max_epoch().unwrap_or(t),
            }),
        }
    }
}
