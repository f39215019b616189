use crate::{range::Range, section::Section};
use logging_timer::time;
use serde::{Deserialize, Serialize};

/// Ordered chain of sections. Each stage consumes the full output of the previous one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Pipeline {
    sections: Vec<Section>,
}

impl Pipeline {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn resolve_scalar(&self, value: i64) -> i64 {
        resolve_scalar(value, &self.sections)
    }

    pub fn resolve_ranges(&self, ranges: &[Range]) -> Vec<Range> {
        resolve_ranges(ranges, &self.sections)
    }

    pub fn run_scalars(&self, values: &[i64]) -> Option<i64> {
        run_scalars(values, &self.sections)
    }

    pub fn run_ranges(&self, ranges: &[Range]) -> Option<i64> {
        run_ranges(ranges, &self.sections)
    }
}

impl From<Vec<Section>> for Pipeline {
    fn from(sections: Vec<Section>) -> Self {
        Self::new(sections)
    }
}

pub fn resolve_scalar(value: i64, sections: &[Section]) -> i64 {
    sections
        .iter()
        .fold(value, |value, section| section.resolve_scalar(value))
}

#[time]
pub fn resolve_ranges(ranges: &[Range], sections: &[Section]) -> Vec<Range> {
    let mut current = ranges.to_vec();
    for (idx, section) in sections.iter().enumerate() {
        current = section.resolve_ranges(&current);
        log::debug!(
            "stage {} ({}): {} fragments",
            idx,
            section.label().unwrap_or("unlabelled"),
            current.len()
        );
    }
    current
}

/// Lowest value reached by any of `values`. `None` if `values` is empty.
pub fn run_scalars(values: &[i64], sections: &[Section]) -> Option<i64> {
    values
        .iter()
        .map(|&value| resolve_scalar(value, sections))
        .min()
}

/// Lowest value reached by any integer in `ranges`. Every integer in a range is at least
/// its start, so only the starts of the final fragments matter. `None` if `ranges` is empty.
pub fn run_ranges(ranges: &[Range], sections: &[Section]) -> Option<i64> {
    resolve_ranges(ranges, sections)
        .iter()
        .map(Range::start)
        .min()
}
