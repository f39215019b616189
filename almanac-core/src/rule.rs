use crate::{
    error::{AlmanacError, AlmanacResult},
    range::Range,
};
use serde::{Deserialize, Serialize};
use std::cmp::{max, min};

/// One line of a section: values in `[source_start, source_start + length)` move by
/// `dest_start - source_start`. Serialized in input line order, `[dest_start, source_start, length]`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "[i64; 3]", into = "[i64; 3]")]
pub struct MappingRule {
    source_start: i64,
    dest_start: i64,
    length: i64,
}

impl MappingRule {
    pub fn new(dest_start: i64, source_start: i64, length: i64) -> AlmanacResult<Self> {
        let malformed = |reason| AlmanacError::MalformedRule {
            dest_start,
            source_start,
            length,
            reason,
        };
        if length <= 0 {
            return Err(malformed("length must be > 0"));
        }
        if source_start < 0 || dest_start < 0 {
            return Err(malformed("source and destination starts must be >= 0"));
        }
        if source_start.checked_add(length - 1).is_none()
            || dest_start.checked_add(length - 1).is_none()
        {
            return Err(malformed("interval end overflows"));
        }
        Ok(Self {
            source_start,
            dest_start,
            length,
        })
    }

    pub fn source_start(&self) -> i64 {
        self.source_start
    }

    pub fn dest_start(&self) -> i64 {
        self.dest_start
    }

    pub fn length(&self) -> i64 {
        self.length
    }

    /// Last source value covered by this rule, inclusive.
    pub fn source_end(&self) -> i64 {
        self.source_start + self.length - 1
    }

    pub fn offset(&self) -> i64 {
        self.dest_start - self.source_start
    }

    pub fn source_range(&self) -> Range {
        Range::new_unchecked(self.source_start, self.length)
    }

    pub fn overlaps(&self, other: &MappingRule) -> bool {
        self.source_start <= other.source_end() && other.source_start <= self.source_end()
    }

    /// Returns `None` when `value` lies outside the source interval.
    pub fn map_scalar(&self, value: i64) -> Option<i64> {
        if value < self.source_start || value > self.source_end() {
            return None;
        }
        Some(value - self.source_start + self.dest_start)
    }

    /// Splits `range` against the source interval.
    ///
    /// The intersection comes back translated into destination space; the parts of `range`
    /// before and after the intersection come back untouched, in that order. A range that
    /// does not touch the source interval yields `(None, [])`.
    ///
    /// The mapped length plus the leftover lengths always equals `range.length()`.
    pub fn map_range(&self, range: &Range) -> (Option<Range>, Vec<Range>) {
        let overlap_start = max(range.start(), self.source_start);
        let overlap_end = min(range.end(), self.source_end());
        if overlap_start > overlap_end {
            return (None, Vec::new());
        }

        let mapped = Range::new_unchecked(
            overlap_start - self.source_start + self.dest_start,
            overlap_end - overlap_start + 1,
        );

        let mut leftovers = Vec::with_capacity(2);
        if range.start() < overlap_start {
            leftovers.push(Range::new_unchecked(
                range.start(),
                overlap_start - range.start(),
            ));
        }
        if range.end() > overlap_end {
            leftovers.push(Range::new_unchecked(
                overlap_end + 1,
                range.end() - overlap_end,
            ));
        }
        (Some(mapped), leftovers)
    }
}

impl TryFrom<[i64; 3]> for MappingRule {
    type Error = AlmanacError;

    fn try_from(arr: [i64; 3]) -> AlmanacResult<Self> {
        MappingRule::new(arr[0], arr[1], arr[2])
    }
}

impl From<MappingRule> for [i64; 3] {
    fn from(rule: MappingRule) -> Self {
        [rule.dest_start, rule.source_start, rule.length]
    }
}

impl std::fmt::Display for MappingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.dest_start, self.source_start, self.length)
    }
}
