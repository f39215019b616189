use crate::{range::Range, rule::MappingRule};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One mapping stage. Rules are tried in order and the first match wins; anything no
/// rule covers maps to itself.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Section {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    rules: Vec<MappingRule>,
}

impl Section {
    pub fn new(rules: Vec<MappingRule>) -> Self {
        Self { label: None, rules }
    }

    pub fn with_label(label: impl Into<String>, rules: Vec<MappingRule>) -> Self {
        Self {
            label: Some(label.into()),
            rules,
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn rules(&self) -> &[MappingRule] {
        &self.rules
    }

    /// First pair of rules (by index) whose source intervals intersect.
    pub fn overlapping_rules(&self) -> Option<(usize, usize)> {
        for (i, a) in self.rules.iter().enumerate() {
            for (j, b) in self.rules.iter().enumerate().skip(i + 1) {
                if a.overlaps(b) {
                    return Some((i, j));
                }
            }
        }
        None
    }

    pub fn resolve_scalar(&self, value: i64) -> i64 {
        self.rules
            .iter()
            .find_map(|rule| rule.map_scalar(value))
            .unwrap_or(value)
    }

    /// Maps every range through this section.
    ///
    /// Leftover fragments go back on the queue and are matched from the first rule again,
    /// since a later rule may cover them. The output is not merged: adjacent or overlapping
    /// ranges stay separate entries.
    pub fn resolve_ranges(&self, ranges: &[Range]) -> Vec<Range> {
        let mut worklist: VecDeque<Range> = ranges.iter().copied().collect();
        let mut resolved = Vec::with_capacity(ranges.len());

        while let Some(range) = worklist.pop_front() {
            let hit = self.rules.iter().find_map(|rule| match rule.map_range(&range) {
                (Some(mapped), leftovers) => Some((mapped, leftovers)),
                (None, _) => None,
            });
            match hit {
                Some((mapped, leftovers)) => {
                    resolved.push(mapped);
                    worklist.extend(leftovers);
                }
                None => resolved.push(range),
            }
        }
        resolved
    }
}
