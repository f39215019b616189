use crate::error::{AlmanacError, AlmanacResult};
use serde::{Deserialize, Serialize};

/// A contiguous run of integers `[start, start + length)`.
///
/// # Invariants
/// `start >= 0` and `length > 0`. Serialized as `[start, length]`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "[i64; 2]", into = "[i64; 2]")]
pub struct Range {
    start: i64,
    length: i64,
}

impl Range {
    pub fn new(start: i64, length: i64) -> AlmanacResult<Self> {
        if start < 0 || length <= 0 || start.checked_add(length - 1).is_none() {
            return Err(AlmanacError::InvalidRange { start, length });
        }
        Ok(Self { start, length })
    }

    /// Callers must already know that `start >= 0` and `length > 0`, e.g. because the
    /// values were cut out of another valid range or a validated rule.
    #[inline]
    pub(crate) fn new_unchecked(start: i64, length: i64) -> Self {
        debug_assert!(
            start >= 0 && length > 0,
            "Invalid range: start must be >= 0 and length > 0"
        );
        Self { start, length }
    }

    #[inline]
    pub fn start(&self) -> i64 {
        self.start
    }

    #[inline]
    pub fn length(&self) -> i64 {
        self.length
    }

    /// Last integer of the range, inclusive.
    #[inline]
    pub fn end(&self) -> i64 {
        self.start + self.length - 1
    }

    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.start <= value && value <= self.end()
    }
}

impl TryFrom<[i64; 2]> for Range {
    type Error = AlmanacError;

    fn try_from(arr: [i64; 2]) -> AlmanacResult<Self> {
        Range::new(arr[0], arr[1])
    }
}

impl From<Range> for [i64; 2] {
    fn from(range: Range) -> Self {
        [range.start, range.length]
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end())
    }
}
