//! CCSDS Orbit Ephemeris Message (OEM) parser.
//!
//! Parses OEM files (KVN format), including files published with
//! known format mistakes (see [repair]), interpolates satellite state vectors
//! within their tabulated span, and converts positions to geodetic coordinates.
//!
//! ```
//! use oem::prelude::*;
//! use std::str::FromStr;
//!
//! let oem = OEM::from_file("test_resources/OEM/ISS.OEM_J2K_EPH.txt")
//!     .unwrap();
//!
//! let iss = oem.satellite("1998-067-A")
//!     .unwrap();
//!
//! let t = Epoch::from_str("2021-03-20T12:10:00 UTC")
//!     .unwrap();
//!
//! let eval = iss.evaluate(t)
//!     .unwrap();
//!
//! let geo = Ellipsoid::WGS84
//!     .transform(&eval.state.position, Frame::EME2000, t, &EarthModel)
//!     .unwrap();
//!
//! assert!(geo.altitude > 300.0E3 && geo.altitude < 500.0E3);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

use itertools::Itertools;

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

#[cfg(test)]
mod tests;

mod constants;
mod reader;

pub mod ellipsoid;
pub mod epoch;
pub mod error;
pub mod frame;
pub mod header;
pub mod interpolation;
pub mod keys;
pub mod parsing;
pub mod propagator;
pub mod repair;
pub mod satellite;
pub mod segment;
pub mod service;
pub mod state;

#[cfg(docsrs)]
mod bibliography;

use error::Error;
use header::Header;
use parsing::Parser;
use reader::BufferedReader;
use satellite::Satellite;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod prelude {
    pub use crate::{
        ellipsoid::{transform, Ellipsoid, GeodeticPoint},
        error::{Error, ParsingError, ServiceError},
        frame::{Frame, RigidTransform},
        header::Header,
        interpolation::InterpolationMethod,
        keys::Keyword,
        parsing::Parser,
        propagator::{AggregatePropagator, BoundedPropagator, Evaluation, Validity},
        repair::{Repair, RepairRule},
        satellite::Satellite,
        segment::{Metadata, Segment},
        service::{EarthModel, TimeFrameService},
        state::{Covariance, Derivatives, StateVector},
        OEM,
    };
    // Pub re-export
    pub use hifitime::{Duration, Epoch, TimeScale};
    pub use nalgebra::{Matrix6, Vector3};
}

/// [OEM] is a parsed Orbit Ephemeris Message: a [Header]
/// and the [Satellite]s it describes, indexed by `OBJECT_ID`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OEM {
    pub(crate) header: Header,
    pub(crate) satellites: BTreeMap<String, Satellite>,
}

impl OEM {
    /// Repairs and parses raw lines with the default [Parser]
    pub fn parse<I, L>(lines: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        Parser::default().parse_raw(lines)
    }
    /// Parses given file, with the default [Parser].
    /// Gzip compressed files (.gz) are supported when the `flate2` feature is enabled.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let reader = BufferedReader::new(path)?;
        Parser::default().parse_reader(reader)
    }
    /// Returns file [Header]
    pub fn header(&self) -> &Header {
        &self.header
    }
    /// Returns [Satellite] identified by this `OBJECT_ID`
    pub fn satellite(&self, id: &str) -> Result<&Satellite, Error> {
        self.satellites
            .get(id)
            .ok_or_else(|| Error::Lookup(id.to_string()))
    }
    /// Returns an iterator over all [Satellite]s, sorted by `OBJECT_ID`
    pub fn satellites(&self) -> impl Iterator<Item = &Satellite> + '_ {
        self.satellites.values()
    }
    /// Returns an iterator over all `OBJECT_ID`s
    pub fn satellite_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.satellites.keys().map(|id| id.as_str())
    }
    /// Returns total number of [Satellite]s
    pub fn nb_satellites(&self) -> usize {
        self.satellites.len()
    }
    /// Returns a unique iterator over the `REF_FRAME`s in use
    pub fn frames(&self) -> impl Iterator<Item = &str> + '_ {
        self.satellites()
            .flat_map(|sat| sat.segments().iter().map(|seg| seg.frame_name()))
            .unique()
    }
    /// Returns a unique iterator over the `TIME_SYSTEM`s in use
    pub fn time_systems(&self) -> impl Iterator<Item = &str> + '_ {
        self.satellites()
            .flat_map(|sat| sat.segments().iter().map(|seg| seg.time_system()))
            .unique()
    }
}

impl FromStr for OEM {
    type Err = Error;
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Self::parse(content.lines())
    }
}
