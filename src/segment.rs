//! Ephemeris segments: one metadata block and its ephemeris data
use hifitime::{Epoch, TimeScale};

use crate::{
    error::{Error, ServiceError},
    frame::Frame,
    interpolation::InterpolationMethod,
    propagator::{BoundedPropagator, Evaluation},
    service::TimeFrameService,
    state::{Covariance, Derivatives, StateVector},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default `INTERPOLATION_DEGREE`, when not specified
pub const DEFAULT_INTERPOLATION_DEGREE: usize = 1;

/// [Metadata] of a [Segment], as found in the `META_START` block
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Metadata {
    pub object_name: String,
    /// International designator, for example "1998-067-A"
    pub object_id: String,
    pub center_name: String,
    /// `REF_FRAME`, stored as is.
    pub ref_frame: String,
    pub ref_frame_epoch: Option<Epoch>,
    /// `TIME_SYSTEM`, stored as is.
    pub time_system: String,
    /// [TimeScale] resolved from `TIME_SYSTEM`
    pub time_scale: TimeScale,
    pub start_time: Epoch,
    pub stop_time: Epoch,
    pub useable_start_time: Option<Epoch>,
    pub useable_stop_time: Option<Epoch>,
    pub interpolation: InterpolationMethod,
    pub interpolation_degree: usize,
    pub comments: Vec<String>,
}

/// [Segment] is a contiguous and homogeneous block of [StateVector]s
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    pub metadata: Metadata,
    /// Comments found at the beginning of the data block
    pub data_comments: Vec<String>,
    pub(crate) states: Vec<StateVector>,
    pub(crate) covariances: Vec<Covariance>,
    pub(crate) derivatives: Derivatives,
}

impl Segment {
    /// Returns `REF_FRAME` as is
    pub fn frame_name(&self) -> &str {
        &self.metadata.ref_frame
    }
    /// Resolves `REF_FRAME` with the frame registry of given service
    pub fn frame<S: TimeFrameService>(&self, service: &S) -> Result<Frame, ServiceError> {
        service.frame(&self.metadata.ref_frame)
    }
    /// Returns `CENTER_NAME`
    pub fn center_name(&self) -> &str {
        &self.metadata.center_name
    }
    /// Returns true if `REF_FRAME_EPOCH` was specified
    pub fn has_ref_frame_epoch(&self) -> bool {
        self.metadata.ref_frame_epoch.is_some()
    }
    /// Returns `TIME_SYSTEM` as is
    pub fn time_system(&self) -> &str {
        &self.metadata.time_system
    }
    /// Returns [TimeScale] of this segment
    pub fn time_scale(&self) -> TimeScale {
        self.metadata.time_scale
    }
    /// Returns `INTERPOLATION`
    pub fn interpolation_method(&self) -> &InterpolationMethod {
        &self.metadata.interpolation
    }
    /// Returns `INTERPOLATION_DEGREE`
    pub fn interpolation_degree(&self) -> usize {
        self.metadata.interpolation_degree
    }
    /// Number of samples used by the interpolator
    pub fn interpolation_samples(&self) -> usize {
        self.metadata.interpolation_degree + 1
    }
    /// Returns `START_TIME`
    pub fn start_time(&self) -> Epoch {
        self.metadata.start_time
    }
    /// Returns `STOP_TIME`
    pub fn stop_time(&self) -> Epoch {
        self.metadata.stop_time
    }
    /// Returns `USEABLE_START_TIME`, or the first [StateVector] epoch when not specified
    pub fn useable_start(&self) -> Epoch {
        self.metadata.useable_start_time.unwrap_or(self.start())
    }
    /// Returns `USEABLE_STOP_TIME`, or the last [StateVector] epoch when not specified
    pub fn useable_stop(&self) -> Epoch {
        self.metadata.useable_stop_time.unwrap_or(self.stop())
    }
    /// First [StateVector] epoch
    pub fn start(&self) -> Epoch {
        self.states
            .first()
            .map(|state| state.epoch)
            .unwrap_or(self.metadata.start_time)
    }
    /// Last [StateVector] epoch
    pub fn stop(&self) -> Epoch {
        self.states
            .last()
            .map(|state| state.epoch)
            .unwrap_or(self.metadata.stop_time)
    }
    /// Returns [Derivatives] available in the data lines
    pub fn available_derivatives(&self) -> Derivatives {
        self.derivatives
    }
    /// Returns [StateVector]s, in chronological order
    pub fn state_vectors(&self) -> &[StateVector] {
        &self.states
    }
    /// Returns an iterator over the [Covariance] blocks
    pub fn covariances(&self) -> impl Iterator<Item = &Covariance> + '_ {
        self.covariances.iter()
    }
    /// Returns an iterator over all comments (metadata and data block)
    pub fn comments(&self) -> impl Iterator<Item = &String> + '_ {
        self.metadata.comments.iter().chain(self.data_comments.iter())
    }
    /// Returns true if `t` lies within the useable window
    pub fn is_useable(&self, t: Epoch) -> bool {
        t >= self.useable_start() && t <= self.useable_stop()
    }
    /// Returns a [BoundedPropagator] over this segment
    pub fn propagator(&self) -> BoundedPropagator<'_> {
        BoundedPropagator::new(self)
    }
    /// Interpolates the [StateVector] at `t`, which must lie within [Self::start]
    /// and [Self::stop].
    pub fn evaluate(&self, t: Epoch) -> Result<Evaluation, Error> {
        self.propagator().propagate(t)
    }
}
