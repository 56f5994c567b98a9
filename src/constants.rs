//! Physical constants

/// Julian date of the J2000 reference epoch
pub(crate) const J2000_JD: f64 = 2451545.0;

/// Days per Julian century
pub(crate) const DAYS_PER_CENTURY: f64 = 36525.0;

pub(crate) const ARCSEC_TO_RAD: f64 = std::f64::consts::PI / 648000.0;

/// Gravitational parameters [m³.s⁻²]
pub(crate) struct GM;

impl GM {
    pub const SUN: f64 = 1.32712440018E20;
    pub const MERCURY: f64 = 2.2032E13;
    pub const VENUS: f64 = 3.24859E14;
    pub const EARTH: f64 = 3.986004418E14;
    pub const MOON: f64 = 4.9028E12;
    pub const MARS: f64 = 4.282837E13;
    pub const JUPITER: f64 = 1.26686534E17;
    pub const SATURN: f64 = 3.7931187E16;
    pub const URANUS: f64 = 5.793939E15;
    pub const NEPTUNE: f64 = 6.836529E15;
    pub const PLUTO: f64 = 8.71E11;

    /// Returns gravitational parameter of given `CENTER_NAME`
    pub fn from_center_name(name: &str) -> Option<f64> {
        match name.trim().to_uppercase().as_str() {
            "SUN" => Some(Self::SUN),
            "MERCURY" => Some(Self::MERCURY),
            "VENUS" => Some(Self::VENUS),
            "EARTH" => Some(Self::EARTH),
            "MOON" => Some(Self::MOON),
            "MARS" => Some(Self::MARS),
            "JUPITER" => Some(Self::JUPITER),
            "SATURN" => Some(Self::SATURN),
            "URANUS" => Some(Self::URANUS),
            "NEPTUNE" => Some(Self::NEPTUNE),
            "PLUTO" => Some(Self::PLUTO),
            _ => None,
        }
    }
}
