//! OEM keywords we know how to interpret
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Keywords supported by this parser. Any other keyword
/// is tolerated and ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Keyword {
    CcsdsOemVers,
    CreationDate,
    Originator,
    Comment,
    MetaStart,
    MetaStop,
    ObjectName,
    ObjectId,
    CenterName,
    RefFrame,
    RefFrameEpoch,
    TimeSystem,
    StartTime,
    UseableStartTime,
    UseableStopTime,
    StopTime,
    Interpolation,
    InterpolationDegree,
    CovarianceStart,
    CovarianceStop,
    Epoch,
    CovRefFrame,
}

impl Keyword {
    /// Returns true if this keyword belongs to a metadata block
    pub fn is_metadata(&self) -> bool {
        matches!(
            self,
            Self::ObjectName
                | Self::ObjectId
                | Self::CenterName
                | Self::RefFrame
                | Self::RefFrameEpoch
                | Self::TimeSystem
                | Self::StartTime
                | Self::UseableStartTime
                | Self::UseableStopTime
                | Self::StopTime
                | Self::Interpolation
                | Self::InterpolationDegree
        )
    }
    /// Returns true if this keyword is a block delimiter
    /// (no value attached)
    pub fn is_delimiter(&self) -> bool {
        matches!(
            self,
            Self::MetaStart | Self::MetaStop | Self::CovarianceStart | Self::CovarianceStop
        )
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::CcsdsOemVers => f.write_str("CCSDS_OEM_VERS"),
            Self::CreationDate => f.write_str("CREATION_DATE"),
            Self::Originator => f.write_str("ORIGINATOR"),
            Self::Comment => f.write_str("COMMENT"),
            Self::MetaStart => f.write_str("META_START"),
            Self::MetaStop => f.write_str("META_STOP"),
            Self::ObjectName => f.write_str("OBJECT_NAME"),
            Self::ObjectId => f.write_str("OBJECT_ID"),
            Self::CenterName => f.write_str("CENTER_NAME"),
            Self::RefFrame => f.write_str("REF_FRAME"),
            Self::RefFrameEpoch => f.write_str("REF_FRAME_EPOCH"),
            Self::TimeSystem => f.write_str("TIME_SYSTEM"),
            Self::StartTime => f.write_str("START_TIME"),
            Self::UseableStartTime => f.write_str("USEABLE_START_TIME"),
            Self::UseableStopTime => f.write_str("USEABLE_STOP_TIME"),
            Self::StopTime => f.write_str("STOP_TIME"),
            Self::Interpolation => f.write_str("INTERPOLATION"),
            Self::InterpolationDegree => f.write_str("INTERPOLATION_DEGREE"),
            Self::CovarianceStart => f.write_str("COVARIANCE_START"),
            Self::CovarianceStop => f.write_str("COVARIANCE_STOP"),
            Self::Epoch => f.write_str("EPOCH"),
            Self::CovRefFrame => f.write_str("COV_REF_FRAME"),
        }
    }
}

impl std::str::FromStr for Keyword {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CCSDS_OEM_VERS" => Ok(Self::CcsdsOemVers),
            "CREATION_DATE" => Ok(Self::CreationDate),
            "ORIGINATOR" => Ok(Self::Originator),
            "COMMENT" => Ok(Self::Comment),
            "META_START" => Ok(Self::MetaStart),
            "META_STOP" => Ok(Self::MetaStop),
            "OBJECT_NAME" => Ok(Self::ObjectName),
            "OBJECT_ID" => Ok(Self::ObjectId),
            "CENTER_NAME" => Ok(Self::CenterName),
            "REF_FRAME" => Ok(Self::RefFrame),
            "REF_FRAME_EPOCH" => Ok(Self::RefFrameEpoch),
            "TIME_SYSTEM" => Ok(Self::TimeSystem),
            "START_TIME" => Ok(Self::StartTime),
            "USEABLE_START_TIME" => Ok(Self::UseableStartTime),
            "USEABLE_STOP_TIME" => Ok(Self::UseableStopTime),
            "STOP_TIME" => Ok(Self::StopTime),
            "INTERPOLATION" => Ok(Self::Interpolation),
            "INTERPOLATION_DEGREE" => Ok(Self::InterpolationDegree),
            "COVARIANCE_START" => Ok(Self::CovarianceStart),
            "COVARIANCE_STOP" => Ok(Self::CovarianceStop),
            "EPOCH" => Ok(Self::Epoch),
            "COV_REF_FRAME" => Ok(Self::CovRefFrame),
            _ => Err(s.to_string()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;
    #[test]
    fn keyword_parsing() {
        for kw in [
            Keyword::CcsdsOemVers,
            Keyword::MetaStart,
            Keyword::UseableStartTime,
            Keyword::InterpolationDegree,
            Keyword::CovRefFrame,
        ] {
            assert_eq!(Keyword::from_str(&kw.to_string()), Ok(kw));
        }
        assert!(Keyword::from_str("USABLE_START_TIME").is_err());
        assert!(Keyword::from_str("MASS").is_err());
        assert!(Keyword::RefFrame.is_metadata());
        assert!(!Keyword::Epoch.is_metadata());
        assert!(Keyword::CovarianceStop.is_delimiter());
    }
}
