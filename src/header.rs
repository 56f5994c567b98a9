//! OEM header
use hifitime::Epoch;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [Header] gathers everything that precedes the first metadata block
#[derive(Default, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Header {
    /// `CCSDS_OEM_VERS`, "1.0" or "2.0"
    pub version: String,
    /// `CREATION_DATE`, always expressed in UTC
    pub creation_date: Option<Epoch>,
    pub originator: Option<String>,
    pub comments: Vec<String>,
}

impl Header {
    /// Returns major revision number, if `version` is valid
    pub fn major_version(&self) -> Option<u8> {
        self.version
            .split('.')
            .next()
            .and_then(|major| major.trim().parse::<u8>().ok())
    }
}

impl std::fmt::Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "CCSDS OEM v{}", self.version)?;
        if let Some(originator) = &self.originator {
            write!(f, " by {}", originator)?;
        }
        if let Some(date) = &self.creation_date {
            write!(f, " ({})", date)?;
        }
        Ok(())
    }
}
