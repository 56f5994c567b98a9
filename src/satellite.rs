//! Satellite ephemeris
use hifitime::{Duration, Epoch};

use crate::{
    error::Error,
    propagator::{AggregatePropagator, Evaluation},
    segment::Segment,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [Satellite] gathers all [Segment]s of one `OBJECT_ID`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Satellite {
    /// `OBJECT_ID`
    pub id: String,
    /// `OBJECT_NAME`
    pub name: String,
    /// Gravitational parameter of the central body [m³.s⁻²]
    pub mu: f64,
    pub(crate) segments: Vec<Segment>,
}

impl Satellite {
    /// Returns `OBJECT_ID`
    pub fn id(&self) -> &str {
        &self.id
    }
    /// Returns gravitational parameter [m³.s⁻²]
    pub fn mu(&self) -> f64 {
        self.mu
    }
    /// Returns [Segment]s in chronological order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
    /// First [Epoch] of the first [Segment]
    pub fn start(&self) -> Epoch {
        self.segments
            .first()
            .map(|segment| segment.start())
            .unwrap_or_default()
    }
    /// Last [Epoch] of the last [Segment]
    pub fn stop(&self) -> Epoch {
        self.segments
            .last()
            .map(|segment| segment.stop())
            .unwrap_or_default()
    }
    /// Time span described by this [Satellite]
    pub fn duration(&self) -> Duration {
        self.stop() - self.start()
    }
    /// Returns an [AggregatePropagator] over all [Segment]s
    pub fn propagator(&self) -> AggregatePropagator<'_> {
        AggregatePropagator::new(&self.segments)
    }
    /// Interpolates the state at `t`, see [AggregatePropagator::propagate]
    pub fn evaluate(&self, t: Epoch) -> Result<Evaluation, Error> {
        self.propagator().propagate(t)
    }
}
