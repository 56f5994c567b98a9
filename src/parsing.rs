//! OEM structural parser
use hifitime::Epoch;
use nalgebra::Vector3;

use crate::{
    constants::GM,
    error::{Error, ParsingError},
    header::Header,
    interpolation::InterpolationMethod,
    keys::Keyword,
    repair::Repair,
    satellite::Satellite,
    segment::{Metadata, Segment, DEFAULT_INTERPOLATION_DEGREE},
    service::{EarthModel, TimeFrameService},
    state::{Covariance, Derivatives, StateVector},
    OEM,
};

use std::collections::{BTreeMap, HashMap};
use std::io::BufRead;
use std::str::FromStr;

#[cfg(feature = "log")]
use log::{debug, warn};

/// Files express distances in km
const KM: f64 = 1.0E3;

/// Number of terms in the lower triangle of a 6x6 matrix
const COVARIANCE_TERMS: usize = 21;

fn invalid(line_number: usize, content: &str, detail: ParsingError) -> Error {
    Error::Validation {
        line_number,
        content: content.to_string(),
        detail,
    }
}

/*
 * Line classification
 */
#[derive(Debug, Clone, Copy, PartialEq)]
enum Line<'a> {
    Blank,
    Comment(&'a str),
    Delimiter(Keyword),
    KeyValue(&'a str, &'a str),
    /// Ephemeris data or covariance terms
    Data(&'a str),
}

fn is_comment(content: &str) -> bool {
    match content.strip_prefix("COMMENT") {
        Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
        None => false,
    }
}

fn classify(content: &str) -> Line<'_> {
    let content = content.trim();
    if content.is_empty() {
        return Line::Blank;
    }
    if is_comment(content) {
        return Line::Comment(content["COMMENT".len()..].trim());
    }
    if let Some((key, value)) = content.split_once('=') {
        return Line::KeyValue(key.trim(), value.trim());
    }
    match Keyword::from_str(content) {
        Ok(keyword) if keyword.is_delimiter() => Line::Delimiter(keyword),
        _ => Line::Data(content),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Header,
    Metadata,
    Data,
    Covariance,
}

/*
 * Metadata value, with its position in the file
 */
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    line_number: usize,
    content: String,
}

impl Entry {
    fn invalid(&self, detail: ParsingError) -> Error {
        invalid(self.line_number, &self.content, detail)
    }
}

#[derive(Debug, Default)]
struct MetadataBlock {
    entries: HashMap<Keyword, Entry>,
    comments: Vec<String>,
}

impl MetadataBlock {
    fn optional(&self, keyword: Keyword) -> Option<&Entry> {
        self.entries.get(&keyword)
    }
    fn required(&self, keyword: Keyword, line_number: usize, content: &str) -> Result<&Entry, Error> {
        self.entries
            .get(&keyword)
            .ok_or_else(|| invalid(line_number, content, ParsingError::MissingKeyword(keyword)))
    }
    /*
     * Resolves the whole block, once META_STOP has been reached
     */
    fn resolve<S: TimeFrameService>(
        &self,
        service: &S,
        line_number: usize,
        content: &str,
    ) -> Result<Metadata, Error> {
        let object_name = self.required(Keyword::ObjectName, line_number, content)?;
        let object_id = self.required(Keyword::ObjectId, line_number, content)?;
        let center_name = self.required(Keyword::CenterName, line_number, content)?;
        let ref_frame = self.required(Keyword::RefFrame, line_number, content)?;
        let time_system = self.required(Keyword::TimeSystem, line_number, content)?;
        let start_time = self.required(Keyword::StartTime, line_number, content)?;
        let stop_time = self.required(Keyword::StopTime, line_number, content)?;

        let time_scale = service
            .time_scale(&time_system.value)
            .map_err(|e| time_system.invalid(e.into()))?;

        let resolve = |entry: &Entry| -> Result<Epoch, Error> {
            service
                .resolve_time(&entry.value, &time_system.value)
                .map_err(|e| entry.invalid(e.into()))
        };

        let start = resolve(start_time)?;
        let stop = resolve(stop_time)?;
        if stop < start {
            return Err(invalid(line_number, content, ParsingError::InvalidSpan));
        }

        let ref_frame_epoch = match self.optional(Keyword::RefFrameEpoch) {
            Some(entry) => Some(resolve(entry)?),
            None => None,
        };

        let useable_start_time = match self.optional(Keyword::UseableStartTime) {
            Some(entry) => Some(resolve(entry)?),
            None => None,
        };
        let useable_stop_time = match self.optional(Keyword::UseableStopTime) {
            Some(entry) => Some(resolve(entry)?),
            None => None,
        };

        let useable_start = useable_start_time.unwrap_or(start);
        let useable_stop = useable_stop_time.unwrap_or(stop);
        if useable_start < start || useable_stop > stop || useable_stop < useable_start {
            return Err(invalid(line_number, content, ParsingError::UseableWindow));
        }

        #[cfg(feature = "log")]
        if useable_start_time.is_none() && useable_stop_time.is_none() {
            warn!(
                "{}: no useable window, ephemeris data span applies",
                object_id.value
            );
        }

        let interpolation = self
            .optional(Keyword::Interpolation)
            .map(|entry| InterpolationMethod::from_str(&entry.value).unwrap_or_default())
            .unwrap_or_default();

        let interpolation_degree = match self.optional(Keyword::InterpolationDegree) {
            Some(entry) => entry.value.parse::<usize>().map_err(|_| {
                entry.invalid(ParsingError::InterpolationDegree(entry.value.clone()))
            })?,
            None => DEFAULT_INTERPOLATION_DEGREE,
        };

        Ok(Metadata {
            object_name: object_name.value.clone(),
            object_id: object_id.value.clone(),
            center_name: center_name.value.clone(),
            ref_frame: ref_frame.value.clone(),
            ref_frame_epoch,
            time_system: time_system.value.clone(),
            time_scale,
            start_time: start,
            stop_time: stop,
            useable_start_time,
            useable_stop_time,
            interpolation,
            interpolation_degree,
            comments: self.comments.clone(),
        })
    }
}

/*
 * Covariance matrix being accumulated
 */
#[derive(Debug)]
struct PendingCovariance {
    epoch: Epoch,
    ref_frame: Option<String>,
    terms: Vec<f64>,
    line_number: usize,
    content: String,
}

impl PendingCovariance {
    fn build(self) -> Result<Covariance, Error> {
        if self.terms.len() != COVARIANCE_TERMS {
            return Err(invalid(
                self.line_number,
                &self.content,
                ParsingError::CovarianceSize(self.terms.len()),
            ));
        }
        Ok(Covariance::from_lower_triangle(
            self.epoch,
            self.ref_frame,
            &self.terms,
        ))
    }
}

/*
 * Segment being accumulated
 */
#[derive(Debug)]
struct PendingSegment {
    metadata: Metadata,
    mu: Option<f64>,
    data_comments: Vec<String>,
    states: Vec<StateVector>,
    covariances: Vec<Covariance>,
    covariance: Option<PendingCovariance>,
    derivatives: Option<Derivatives>,
    /// Data run was closed by a blank line or a covariance block
    closed: bool,
    /// META_STOP line, useable window errors are reported there
    meta_stop: (usize, String),
}

impl PendingSegment {
    fn new(metadata: Metadata, mu: Option<f64>, line_number: usize, content: &str) -> Self {
        Self {
            metadata,
            mu,
            meta_stop: (line_number, content.to_string()),
            data_comments: Vec::new(),
            states: Vec::new(),
            covariances: Vec::new(),
            covariance: None,
            derivatives: None,
            closed: false,
        }
    }
    fn build(self, line_number: usize, content: &str) -> Result<(Option<f64>, Segment), Error> {
        if self.states.is_empty() {
            return Err(invalid(line_number, content, ParsingError::EmptySegment));
        }
        let mut states = self.states;

        // the useable window must be interpolable
        let (first, last) = (states[0].epoch, states[states.len() - 1].epoch);
        let before = self.metadata.useable_start_time.is_some_and(|t| t < first);
        let after = self.metadata.useable_stop_time.is_some_and(|t| t > last);
        if before || after {
            let (line_number, content) = &self.meta_stop;
            return Err(invalid(*line_number, content, ParsingError::UseableWindow));
        }

        for cov in self.covariances.iter() {
            if let Ok(index) = states.binary_search_by_key(&cov.epoch, |state| state.epoch) {
                states[index] = states[index].with_covariance(cov.matrix);
            }
        }
        Ok((
            self.mu,
            Segment {
                metadata: self.metadata,
                data_comments: self.data_comments,
                states,
                covariances: self.covariances,
                derivatives: self.derivatives.unwrap_or_default(),
            },
        ))
    }
}

/*
 * Parsing state: everything that is accumulated line after line
 */
struct State<'p, S: TimeFrameService> {
    parser: &'p Parser<S>,
    section: Section,
    header: Header,
    has_version: bool,
    metadata: MetadataBlock,
    segment: Option<PendingSegment>,
    satellites: BTreeMap<String, Satellite>,
    line_number: usize,
    last_content: String,
}

impl<'p, S: TimeFrameService> State<'p, S> {
    fn new(parser: &'p Parser<S>) -> Self {
        Self {
            parser,
            section: Section::Header,
            header: Header::default(),
            has_version: false,
            metadata: MetadataBlock::default(),
            segment: None,
            satellites: BTreeMap::new(),
            line_number: 0,
            last_content: String::new(),
        }
    }

    fn consume(&mut self, content: &str) -> Result<(), Error> {
        self.line_number += 1;
        let line_number = self.line_number;

        match classify(content) {
            Line::Blank => {
                if self.section == Section::Data {
                    if let Some(segment) = &mut self.segment {
                        if !segment.states.is_empty() {
                            segment.closed = true;
                        }
                    }
                }
            },
            Line::Comment(comment) => self.comment(comment),
            Line::Delimiter(keyword) => self.delimiter(keyword, line_number, content)?,
            Line::KeyValue(key, value) => self.key_value(key, value, line_number, content)?,
            Line::Data(data) => self.data(data, line_number, content)?,
        }

        self.last_content = content.to_string();
        Ok(())
    }

    fn comment(&mut self, comment: &str) {
        let comment = comment.to_string();
        match self.section {
            Section::Header => self.header.comments.push(comment),
            Section::Metadata => self.metadata.comments.push(comment),
            Section::Data | Section::Covariance => {
                if let Some(segment) = &mut self.segment {
                    segment.data_comments.push(comment);
                }
            },
        }
    }

    fn delimiter(&mut self, keyword: Keyword, line_number: usize, content: &str) -> Result<(), Error> {
        let unexpected = || {
            invalid(
                line_number,
                content,
                ParsingError::UnexpectedKeyword(keyword.to_string()),
            )
        };
        match (keyword, self.section) {
            (Keyword::MetaStart, Section::Header) => {
                if !self.has_version {
                    return Err(invalid(
                        line_number,
                        content,
                        ParsingError::MissingKeyword(Keyword::CcsdsOemVers),
                    ));
                }
                self.section = Section::Metadata;
            },
            (Keyword::MetaStart, Section::Data) => {
                self.close_segment(line_number, content)?;
                self.section = Section::Metadata;
            },
            (Keyword::MetaStop, Section::Metadata) => {
                let block = std::mem::take(&mut self.metadata);
                let metadata = block.resolve(&self.parser.service, line_number, content)?;
                let mu = if self.satellites.contains_key(&metadata.object_id) {
                    None
                } else {
                    Some(self.resolve_mu(&block, &metadata.center_name)?)
                };
                self.segment = Some(PendingSegment::new(metadata, mu, line_number, content));
                self.section = Section::Data;
            },
            (Keyword::CovarianceStart, Section::Data) => {
                if let Some(segment) = &mut self.segment {
                    segment.closed = true;
                }
                self.section = Section::Covariance;
            },
            (Keyword::CovarianceStop, Section::Covariance) => {
                self.close_covariance()?;
                self.section = Section::Data;
            },
            _ => return Err(unexpected()),
        }
        Ok(())
    }

    fn key_value(&mut self, key: &str, value: &str, line_number: usize, content: &str) -> Result<(), Error> {
        let keyword = match Keyword::from_str(key) {
            Ok(keyword) => keyword,
            Err(_) => {
                #[cfg(feature = "log")]
                debug!("line {}: ignored keyword \"{}\"", line_number, key);
                return Ok(());
            },
        };

        if value.is_empty() {
            return Err(invalid(
                line_number,
                content,
                ParsingError::EmptyValue(keyword),
            ));
        }

        let unexpected = || {
            invalid(
                line_number,
                content,
                ParsingError::UnexpectedKeyword(key.to_string()),
            )
        };

        match self.section {
            Section::Header => match keyword {
                Keyword::CcsdsOemVers => {
                    self.header.version = value.to_string();
                    self.has_version = true;
                },
                Keyword::CreationDate => {
                    let date = self
                        .parser
                        .service
                        .resolve_time(value, "UTC")
                        .map_err(|e| invalid(line_number, content, e.into()))?;
                    self.header.creation_date = Some(date);
                },
                Keyword::Originator => {
                    self.header.originator = Some(value.to_string());
                },
                _ => return Err(unexpected()),
            },
            Section::Metadata => {
                if !keyword.is_metadata() {
                    return Err(unexpected());
                }
                if self.metadata.entries.contains_key(&keyword) {
                    return Err(invalid(
                        line_number,
                        content,
                        ParsingError::DuplicateKeyword(keyword),
                    ));
                }
                self.metadata.entries.insert(
                    keyword,
                    Entry {
                        value: value.to_string(),
                        line_number,
                        content: content.to_string(),
                    },
                );
            },
            Section::Covariance => match keyword {
                Keyword::Epoch => {
                    self.close_covariance()?;
                    let epoch = self.resolve_epoch(value, line_number, content)?;
                    if let Some(segment) = &mut self.segment {
                        segment.covariance = Some(PendingCovariance {
                            epoch,
                            ref_frame: None,
                            terms: Vec::with_capacity(COVARIANCE_TERMS),
                            line_number,
                            content: content.to_string(),
                        });
                    }
                },
                Keyword::CovRefFrame => {
                    match self.segment.as_mut().and_then(|s| s.covariance.as_mut()) {
                        Some(pending) => pending.ref_frame = Some(value.to_string()),
                        None => {
                            return Err(invalid(
                                line_number,
                                content,
                                ParsingError::CovarianceEpoch,
                            ))
                        },
                    }
                },
                _ => return Err(unexpected()),
            },
            Section::Data => return Err(unexpected()),
        }
        Ok(())
    }

    fn data(&mut self, data: &str, line_number: usize, content: &str) -> Result<(), Error> {
        match self.section {
            Section::Data => self.state_vector(data, line_number, content),
            Section::Covariance => self.covariance_terms(data, line_number, content),
            Section::Header | Section::Metadata => Err(invalid(
                line_number,
                content,
                ParsingError::DataOutsideBlock,
            )),
        }
    }

    fn state_vector(&mut self, data: &str, line_number: usize, content: &str) -> Result<(), Error> {
        let err = |detail| invalid(line_number, content, detail);

        let tokens = data.split_ascii_whitespace().collect::<Vec<_>>();
        let derivatives = match tokens.len() {
            7 => Derivatives::PositionVelocity,
            10 => Derivatives::PositionVelocityAcceleration,
            n => return Err(err(ParsingError::DataFields(n))),
        };

        let epoch = self.resolve_epoch(tokens[0], line_number, content)?;

        let values = tokens[1..]
            .iter()
            .map(|token| {
                token
                    .parse::<f64>()
                    .map(|value| value * KM)
                    .or(Err(ParsingError::Coordinates(token.to_string())))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(err)?;

        let segment = match &mut self.segment {
            Some(segment) if !segment.closed => segment,
            _ => return Err(err(ParsingError::DataOutsideBlock)),
        };

        match segment.derivatives {
            Some(expected) if expected != derivatives => {
                return Err(err(ParsingError::DerivativesMismatch));
            },
            Some(_) => {},
            None => segment.derivatives = Some(derivatives),
        }

        if let Some(last) = segment.states.last() {
            if epoch <= last.epoch {
                return Err(err(ParsingError::NonMonotonicEpoch));
            }
        }

        if epoch < segment.metadata.start_time || epoch > segment.metadata.stop_time {
            return Err(err(ParsingError::OutsideDeclaredSpan));
        }

        let position = Vector3::new(values[0], values[1], values[2]);
        let velocity = Vector3::new(values[3], values[4], values[5]);
        let state = StateVector::new(epoch, position, velocity);

        let state = match derivatives {
            Derivatives::PositionVelocityAcceleration => {
                state.with_acceleration(Vector3::new(values[6], values[7], values[8]))
            },
            Derivatives::PositionVelocity => state,
        };

        segment.states.push(state);
        Ok(())
    }

    fn covariance_terms(&mut self, data: &str, line_number: usize, content: &str) -> Result<(), Error> {
        let err = |detail| invalid(line_number, content, detail);

        let pending = match self.segment.as_mut().and_then(|s| s.covariance.as_mut()) {
            Some(pending) => pending,
            None => return Err(err(ParsingError::CovarianceEpoch)),
        };

        for token in data.split_ascii_whitespace() {
            let term = token
                .parse::<f64>()
                .or(Err(ParsingError::CovarianceTerm(token.to_string())))
                .map_err(err)?;
            // km² → m²
            pending.terms.push(term * KM * KM);
        }

        if pending.terms.len() > COVARIANCE_TERMS {
            return Err(err(ParsingError::CovarianceSize(pending.terms.len())));
        }
        Ok(())
    }

    fn close_covariance(&mut self) -> Result<(), Error> {
        if let Some(segment) = &mut self.segment {
            if let Some(pending) = segment.covariance.take() {
                segment.covariances.push(pending.build()?);
            }
        }
        Ok(())
    }

    fn resolve_epoch(&self, value: &str, line_number: usize, content: &str) -> Result<Epoch, Error> {
        let time_system = self
            .segment
            .as_ref()
            .map(|segment| segment.metadata.time_system.as_str())
            .unwrap_or("UTC");
        self.parser
            .service
            .resolve_time(value, time_system)
            .map_err(|e| invalid(line_number, content, e.into()))
    }

    fn resolve_mu(&self, block: &MetadataBlock, center_name: &str) -> Result<f64, Error> {
        if let Some(mu) = self.parser.mu {
            return Ok(mu);
        }
        match GM::from_center_name(center_name) {
            Some(mu) => Ok(mu),
            None => {
                let entry = block.optional(Keyword::CenterName);
                let (line_number, content) = entry
                    .map(|entry| (entry.line_number, entry.content.as_str()))
                    .unwrap_or((self.line_number, ""));
                Err(invalid(
                    line_number,
                    content,
                    ParsingError::UnknownMu(center_name.to_string()),
                ))
            },
        }
    }

    fn close_segment(&mut self, line_number: usize, content: &str) -> Result<(), Error> {
        let pending = match self.segment.take() {
            Some(pending) => pending,
            None => return Ok(()),
        };

        let (mu, segment) = pending.build(line_number, content)?;
        let id = segment.metadata.object_id.clone();

        #[cfg(feature = "log")]
        debug!(
            "{}: segment [{} ; {}] with {} state vectors",
            id,
            segment.start(),
            segment.stop(),
            segment.states.len()
        );

        match self.satellites.get_mut(&id) {
            Some(satellite) => satellite.segments.push(segment),
            None => {
                #[cfg(feature = "log")]
                debug!("new satellite {}", id);

                let satellite = Satellite {
                    id: id.clone(),
                    name: segment.metadata.object_name.clone(),
                    mu: mu.unwrap_or(GM::EARTH),
                    segments: vec![segment],
                };
                self.satellites.insert(id, satellite);
            },
        }
        Ok(())
    }

    fn finish(mut self) -> Result<OEM, Error> {
        let line_number = self.line_number;
        let content = std::mem::take(&mut self.last_content);
        match self.section {
            Section::Header => {
                return Err(invalid(line_number, &content, ParsingError::NoSegment));
            },
            Section::Metadata | Section::Covariance => {
                return Err(invalid(
                    line_number,
                    &content,
                    ParsingError::UnterminatedBlock,
                ));
            },
            Section::Data => self.close_segment(line_number, &content)?,
        }

        let mut satellites = self.satellites;
        for satellite in satellites.values_mut() {
            satellite.segments.sort_by_key(|segment| segment.start());
        }

        Ok(OEM {
            header: self.header,
            satellites,
        })
    }
}

/// [Parser] turns corrected lines into an [OEM].
/// ```
/// use oem::prelude::*;
///
/// let parser = Parser::default()
///     .with_mu(398600.4418E9);
///
/// let content = "CCSDS_OEM_VERS = 2.0
/// META_START
/// OBJECT_NAME = ISS
/// OBJECT_ID = 1998-067-A
/// CENTER_NAME = EARTH
/// REF_FRAME = EME2000
/// TIME_SYSTEM = UTC
/// START_TIME = 2021-03-20T12:00:00.000
/// STOP_TIME = 2021-03-20T12:01:00.000
/// META_STOP
/// 2021-03-20T12:00:00.000 6778.137 0.0 0.0 0.0 7.6686 0.0
/// 2021-03-20T12:01:00.000 6772.5 459.9 0.0 -0.5 7.66 0.0";
///
/// let oem = parser.parse_raw(content.lines())
///     .unwrap();
///
/// let iss = oem.satellite("1998-067-A")
///     .unwrap();
/// assert_eq!(iss.segments().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Parser<S: TimeFrameService = EarthModel> {
    repair: Repair,
    mu: Option<f64>,
    service: S,
}

impl Default for Parser<EarthModel> {
    fn default() -> Self {
        Self {
            repair: Repair::default(),
            mu: None,
            service: EarthModel,
        }
    }
}

impl<S: TimeFrameService + Clone> Parser<S> {
    /// Copies and returns [Parser] with given [Repair] rules
    pub fn with_repair(&self, repair: Repair) -> Self {
        let mut s = self.clone();
        s.repair = repair;
        s
    }
    /// Copies and returns [Parser] that uses this gravitational parameter [m³.s⁻²]
    /// for every satellite, whatever their `CENTER_NAME`.
    pub fn with_mu(&self, mu: f64) -> Self {
        let mut s = self.clone();
        s.mu = Some(mu);
        s
    }
    /// Copies and returns [Parser] that relies on another [TimeFrameService]
    pub fn with_service<T: TimeFrameService>(&self, service: T) -> Parser<T> {
        Parser {
            repair: self.repair.clone(),
            mu: self.mu,
            service,
        }
    }
}

impl<S: TimeFrameService> Parser<S> {
    /// Returns [Repair] rules applied by [Self::parse_raw]
    pub fn repair(&self) -> &Repair {
        &self.repair
    }
    /// Returns [TimeFrameService] in use
    pub fn service(&self) -> &S {
        &self.service
    }
    /// Parses already corrected lines.
    /// Aborts on the first invalid line, with an [Error::Validation].
    pub fn parse<I, L>(&self, lines: I) -> Result<OEM, Error>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let mut state = State::new(self);
        for line in lines {
            state.consume(line.as_ref())?;
        }
        state.finish()
    }
    /// Repairs then parses raw lines
    pub fn parse_raw<I, L>(&self, lines: I) -> Result<OEM, Error>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        self.parse(self.repair.lines(lines))
    }
    /// Repairs then parses all lines of a [BufRead]er
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<OEM, Error> {
        let mut state = State::new(self);
        for line in self.repair.try_lines(reader.lines()) {
            state.consume(&line?)?;
        }
        state.finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn line_classification() {
        assert_eq!(classify(""), Line::Blank);
        assert_eq!(classify("   "), Line::Blank);
        assert_eq!(classify("COMMENT  hello"), Line::Comment("hello"));
        assert_eq!(classify("COMMENT"), Line::Comment(""));
        assert_eq!(classify("META_START"), Line::Delimiter(Keyword::MetaStart));
        assert_eq!(
            classify(" COVARIANCE_STOP "),
            Line::Delimiter(Keyword::CovarianceStop)
        );
        assert_eq!(
            classify("OBJECT_ID = 1998-067-A"),
            Line::KeyValue("OBJECT_ID", "1998-067-A")
        );
        assert_eq!(classify("MASS=420000"), Line::KeyValue("MASS", "420000"));
        assert_eq!(
            classify("2021-03-20T12:00:00 1 2 3 4 5 6"),
            Line::Data("2021-03-20T12:00:00 1 2 3 4 5 6")
        );
        // not a comment
        assert_eq!(classify("COMMENTS = 1"), Line::KeyValue("COMMENTS", "1"));
    }
}
