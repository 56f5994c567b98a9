//! CCSDS epoch parsing
use crate::error::ServiceError;
use hifitime::{Epoch, TimeScale};

/// Returns [TimeScale] that matches this CCSDS `TIME_SYSTEM` value.
/// UT1 and other rotational time systems are not supported.
pub fn timescale(name: &str) -> Result<TimeScale, ServiceError> {
    match name.trim().to_uppercase().as_str() {
        "UTC" => Ok(TimeScale::UTC),
        "TAI" => Ok(TimeScale::TAI),
        "TT" | "TDT" => Ok(TimeScale::TT),
        "GPS" | "GPST" => Ok(TimeScale::GPST),
        "GST" | "GAL" => Ok(TimeScale::GST),
        "BDT" => Ok(TimeScale::BDT),
        "TDB" | "ET" => Ok(TimeScale::TDB),
        _ => Err(ServiceError::UnknownTimeScale(name.to_string())),
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/*
 * Converts day of year to (month, day)
 */
fn month_day(year: i32, doy: u16) -> Option<(u8, u8)> {
    let mut days = [31_u16, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if is_leap_year(year) {
        days[1] = 29;
    }
    let mut remaining = doy;
    if remaining == 0 {
        return None;
    }
    for (month, ndays) in days.iter().enumerate() {
        if remaining <= *ndays {
            return Some((month as u8 + 1, remaining as u8));
        }
        remaining -= ndays;
    }
    None
}

/*
 * Parses "hh:mm:ss[.fff]" into (hh, mm, ss, nanos)
 */
fn parse_time(content: &str) -> Option<(u8, u8, u8, u32)> {
    let mut items = content.split(':');
    let hh = items.next()?.parse::<u8>().ok()?;
    let mm = items.next()?.parse::<u8>().ok()?;
    let seconds = items.next()?;
    if items.next().is_some() {
        return None;
    }
    let (ss, nanos) = match seconds.split_once('.') {
        Some((ss, fract)) => {
            if fract.is_empty() || !fract.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            // nanosecond resolution: remaining digits are truncated
            let digits = &fract[..fract.len().min(9)];
            let nanos = digits.parse::<u32>().ok()? * 10_u32.pow(9 - digits.len() as u32);
            (ss.parse::<u8>().ok()?, nanos)
        },
        None => (seconds.parse::<u8>().ok()?, 0),
    };
    Some((hh, mm, ss, nanos))
}

/// Parses a CCSDS epoch, either in calendar form `YYYY-MM-DDThh:mm:ss[.fff]`
/// or in day of year form `YYYY-DDDThh:mm:ss[.fff]`, possibly terminated by `Z`,
/// expressed in given [TimeScale].
pub fn parse_in_timescale(content: &str, ts: TimeScale) -> Result<Epoch, ServiceError> {
    let err = || ServiceError::InvalidEpoch(content.to_string());

    let trimmed = content.trim();
    let trimmed = trimmed.strip_suffix('Z').unwrap_or(trimmed);

    let (date, time) = trimmed.split_once('T').ok_or_else(err)?;
    let (hh, mm, ss, nanos) = parse_time(time).ok_or_else(err)?;

    let items = date.split('-').collect::<Vec<_>>();
    let (year, month, day) = match items.len() {
        3 => {
            let y = items[0].parse::<i32>().or(Err(err()))?;
            let m = items[1].parse::<u8>().or(Err(err()))?;
            let d = items[2].parse::<u8>().or(Err(err()))?;
            (y, m, d)
        },
        2 => {
            let y = items[0].parse::<i32>().or(Err(err()))?;
            let doy = items[1].parse::<u16>().or(Err(err()))?;
            let (m, d) = month_day(y, doy).ok_or_else(err)?;
            (y, m, d)
        },
        _ => return Err(err()),
    };

    if items[0].len() != 4 {
        return Err(err());
    }

    Epoch::maybe_from_gregorian(year, month, day, hh, mm, ss, nanos, ts).or(Err(err()))
}

#[cfg(test)]
mod test {
    use super::*;
    use hifitime::Unit;
    use std::str::FromStr;
    #[test]
    fn timescale_registry() {
        assert_eq!(timescale("UTC"), Ok(TimeScale::UTC));
        assert_eq!(timescale("utc"), Ok(TimeScale::UTC));
        assert_eq!(timescale("TDT"), Ok(TimeScale::TT));
        assert_eq!(timescale("GPS"), Ok(TimeScale::GPST));
        assert_eq!(
            timescale("UT1"),
            Err(ServiceError::UnknownTimeScale("UT1".to_string()))
        );
    }
    #[test]
    fn calendar_epochs() {
        let t = parse_in_timescale("2021-03-20T12:00:00.000", TimeScale::UTC).unwrap();
        assert_eq!(t, Epoch::from_str("2021-03-20T12:00:00 UTC").unwrap());

        let t = parse_in_timescale("2021-03-20T12:00:01.250Z", TimeScale::UTC).unwrap();
        assert_eq!(
            t,
            Epoch::from_str("2021-03-20T12:00:01 UTC").unwrap() + 250.0 * Unit::Millisecond
        );

        let t = parse_in_timescale("1996-12-18T12:00:00.331", TimeScale::TAI).unwrap();
        assert_eq!(t.time_scale, TimeScale::TAI);
    }
    #[test]
    fn day_of_year_epochs() {
        let t = parse_in_timescale("2021-079T12:00:00", TimeScale::UTC).unwrap();
        assert_eq!(t, Epoch::from_str("2021-03-20T12:00:00 UTC").unwrap());

        let t = parse_in_timescale("2020-366T00:00:00", TimeScale::UTC).unwrap();
        assert_eq!(t, Epoch::from_str("2020-12-31T00:00:00 UTC").unwrap());

        assert!(parse_in_timescale("2021-366T00:00:00", TimeScale::UTC).is_err());
    }
    #[test]
    fn invalid_epochs() {
        for content in [
            "",
            "2021-03-20",
            "2021-03-20 12:00:00",
            "21-03-20T12:00:00",
            "2021-03-20T12:00",
            "2021-03-20T12:00:00.",
            "2021-03-20T12:00:0a",
            "1.5",
        ] {
            assert!(
                parse_in_timescale(content, TimeScale::UTC).is_err(),
                "\"{}\" should not be accepted",
                content
            );
        }
    }
}
