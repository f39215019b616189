use crate::{
    error::{AlmanacError, AlmanacResult},
    pipeline::Pipeline,
    range::Range,
    rule::MappingRule,
    section::Section,
};
use logging_timer::time;
use serde::{Deserialize, Serialize};

/// How the seeds line is read.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SeedMode {
    /// Every integer is a seed.
    Scalar,
    /// Integers pair up as `(start, length)`.
    Range,
}

impl std::fmt::Display for SeedMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedMode::Scalar => write!(f, "scalar"),
            SeedMode::Range => write!(f, "range"),
        }
    }
}

impl std::str::FromStr for SeedMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scalar" => Ok(SeedMode::Scalar),
            "range" => Ok(SeedMode::Range),
            _ => Err(format!("Unknown seed mode '{}'. Expected 'scalar' or 'range'", s)),
        }
    }
}

/// Parsed puzzle input: a seeds line followed by the mapping sections.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Almanac {
    seeds: Vec<i64>,
    pipeline: Pipeline,
}

impl Almanac {
    pub fn new(seeds: Vec<i64>, sections: Vec<Section>) -> Self {
        Self {
            seeds,
            pipeline: Pipeline::new(sections),
        }
    }

    pub fn seeds(&self) -> &[i64] {
        &self.seeds
    }

    pub fn sections(&self) -> &[Section] {
        self.pipeline.sections()
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    #[time]
    pub fn parse(input: &str) -> AlmanacResult<Self> {
        let mut lines = input
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (_, seeds_line) = lines.next().ok_or(AlmanacError::MissingSeeds)?;
        let seeds = parse_seeds(seeds_line)?;

        let mut sections = Vec::new();
        let mut current: Option<(Option<String>, Vec<MappingRule>)> = None;
        for (line_number, line) in lines {
            if line.starts_with(|c: char| c.is_alphabetic()) {
                if let Some((label, rules)) = current.take() {
                    sections.push(build_section(label, rules));
                }
                current = Some((parse_label(line), Vec::new()));
            } else {
                let (_, rules) = current
                    .as_mut()
                    .ok_or(AlmanacError::RuleOutsideSection { line_number })?;
                rules.push(parse_rule(line_number, line)?);
            }
        }
        if let Some((label, rules)) = current {
            sections.push(build_section(label, rules));
        }

        log::debug!(
            "parsed {} seeds and {} sections",
            seeds.len(),
            sections.len()
        );
        Ok(Self::new(seeds, sections))
    }

    /// Seeds read pairwise as `(start, length)`.
    pub fn seed_ranges(&self) -> AlmanacResult<Vec<Range>> {
        if self.seeds.len() % 2 != 0 {
            return Err(AlmanacError::OddSeedCount {
                count: self.seeds.len(),
            });
        }
        self.seeds
            .chunks_exact(2)
            .map(|pair| Range::new(pair[0], pair[1]))
            .collect()
    }

    /// Lowest final value over all seeds read in `mode`.
    pub fn lowest(&self, mode: SeedMode) -> AlmanacResult<i64> {
        let lowest = match mode {
            SeedMode::Scalar => self.pipeline.run_scalars(&self.seeds),
            SeedMode::Range => self.pipeline.run_ranges(&self.seed_ranges()?),
        };
        lowest.ok_or(AlmanacError::MissingSeeds)
    }
}

fn parse_seeds(line: &str) -> AlmanacResult<Vec<i64>> {
    let values = match line.split_once(':') {
        Some((_, values)) => values,
        None => line,
    };
    let seeds = values
        .split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| AlmanacError::InvalidSeed {
                token: token.to_string(),
            })
        })
        .collect::<AlmanacResult<Vec<i64>>>()?;
    if seeds.is_empty() {
        return Err(AlmanacError::MissingSeeds);
    }
    Ok(seeds)
}

// "seed-to-soil map:" -> "seed-to-soil"
fn parse_label(header: &str) -> Option<String> {
    let header = header.trim_end_matches(':').trim_end();
    if header == "map" {
        return None;
    }
    let label = header.strip_suffix(" map").unwrap_or(header).trim_end();
    Some(label.to_string())
}

fn parse_rule(line_number: usize, line: &str) -> AlmanacResult<MappingRule> {
    let malformed = || AlmanacError::MalformedRuleLine {
        line_number,
        line: line.to_string(),
    };
    let values = line
        .split_whitespace()
        .map(|token| token.parse::<i64>().map_err(|_| malformed()))
        .collect::<AlmanacResult<Vec<i64>>>()?;
    match values[..] {
        [dest_start, source_start, length] => MappingRule::new(dest_start, source_start, length),
        _ => Err(malformed()),
    }
}

fn build_section(label: Option<String>, rules: Vec<MappingRule>) -> Section {
    let section = match label {
        Some(label) => Section::with_label(label, rules),
        None => Section::new(rules),
    };
    if let Some((a, b)) = section.overlapping_rules() {
        log::warn!(
            "section '{}': rules {} and {} have overlapping sources, first match wins",
            section.label().unwrap_or("unlabelled"),
            a,
            b
        );
    }
    section
}

impl std::fmt::Display for Almanac {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "seeds:")?;
        for seed in &self.seeds {
            write!(f, " {}", seed)?;
        }
        writeln!(f)?;
        for section in self.sections() {
            writeln!(f)?;
            match section.label() {
                Some(label) => writeln!(f, "{} map:", label)?,
                None => writeln!(f, "map:")?,
            }
            for rule in section.rules() {
                writeln!(f, "{}", rule)?;
            }
        }
        Ok(())
    }
}
