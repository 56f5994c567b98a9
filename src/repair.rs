//! Line level repair of known publisher mistakes.
//!
//! Some publishers (among which the ISS trajectory operations) write
//! `USABLE_START_TIME` instead of `USEABLE_START_TIME`. [Repair] fixes such lines
//! one by one, prior any structural parsing.
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [RepairRule] inserts `insertion` at char `offset`
/// in every line starting with `prefix`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RepairRule {
    prefix: String,
    offset: usize,
    insertion: String,
}

impl RepairRule {
    /// Builds a new [RepairRule]. `offset` is expressed in chars, not bytes.
    pub fn new(prefix: &str, offset: usize, insertion: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            offset,
            insertion: insertion.to_string(),
        }
    }
    /// `USABLE_*` → `USEABLE_*`
    pub fn useable() -> Self {
        Self::new("USABLE_", 2, "E")
    }
    /// Returns true if this rule applies to given line
    pub fn matches(&self, line: &str) -> bool {
        line.starts_with(&self.prefix)
    }
    /// Applies this rule to given line, whether it matches or not
    pub fn fix(&self, line: &str) -> String {
        let byte_offset = line
            .char_indices()
            .nth(self.offset)
            .map(|(i, _)| i)
            .unwrap_or(line.len());
        let mut fixed = String::with_capacity(line.len() + self.insertion.len());
        fixed.push_str(&line[..byte_offset]);
        fixed.push_str(&self.insertion);
        fixed.push_str(&line[byte_offset..]);
        fixed
    }
}

/// [Repair] is an ordered set of [RepairRule]s.
/// The first matching rule applies, other lines are preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Repair {
    rules: Vec<RepairRule>,
}

impl Default for Repair {
    /// Builds a [Repair] that fixes the `USABLE_` mistake
    fn default() -> Self {
        Self {
            rules: vec![RepairRule::useable()],
        }
    }
}

impl Repair {
    /// Builds a [Repair] that does not modify anything
    pub fn none() -> Self {
        Self { rules: Vec::new() }
    }
    /// Copies and returns [Self] with one more [RepairRule]
    pub fn with_rule(&self, rule: RepairRule) -> Self {
        let mut s = self.clone();
        s.rules.push(rule);
        s
    }
    /// Returns an iterator over the [RepairRule]s
    pub fn rules(&self) -> impl Iterator<Item = &RepairRule> + '_ {
        self.rules.iter()
    }
    /// Repairs a single line
    pub fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
        match self.rules.iter().find(|rule| rule.matches(line)) {
            Some(rule) => Cow::Owned(rule.fix(line)),
            None => Cow::Borrowed(line),
        }
    }
    /// Lazily repairs a sequence of lines
    pub fn lines<'a, I, S>(&'a self, lines: I) -> impl Iterator<Item = String> + 'a
    where
        I: IntoIterator<Item = S>,
        I::IntoIter: 'a,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .map(move |line| self.apply(line.as_ref()).into_owned())
    }
    /// Lazily repairs a sequence of fallible lines, like [std::io::BufRead::lines]
    pub fn try_lines<'a, I>(&'a self, lines: I) -> impl Iterator<Item = std::io::Result<String>> + 'a
    where
        I: IntoIterator<Item = std::io::Result<String>>,
        I::IntoIter: 'a,
    {
        lines.into_iter().map(move |line| {
            let line = line?;
            if self.rules.iter().any(|rule| rule.matches(&line)) {
                Ok(self.apply(&line).into_owned())
            } else {
                Ok(line)
            }
        })
    }
}
