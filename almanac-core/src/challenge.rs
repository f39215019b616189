use crate::{
    almanac::{Almanac, SeedMode},
    rule::MappingRule,
    section::Section,
};
use anyhow::{anyhow, Result};
use rand::{
    rngs::SmallRng,
    seq::{index, SliceRandom},
    Rng, SeedableRng,
};
use serde::{Deserialize, Serialize};

const CATEGORIES: [&str; 8] = [
    "seed",
    "soil",
    "fertilizer",
    "water",
    "light",
    "temperature",
    "humidity",
    "location",
];

/// Upper bound on the number of seeds `verify_solution` walks one at a time.
pub const MAX_ENUMERATED_SEEDS: i64 = 1 << 24;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Difficulty {
    pub num_sections: usize,
    pub num_rules: usize,
    pub num_seed_pairs: usize,
    /// Exclusive upper bound for every generated start.
    pub max_value: i64,
}

impl TryFrom<Vec<i32>> for Difficulty {
    type Error = anyhow::Error;

    fn try_from(arr: Vec<i32>) -> Result<Self> {
        match arr[..] {
            [num_sections, num_rules, num_seed_pairs, max_value]
                if num_sections >= 0 && num_rules >= 0 && num_seed_pairs >= 0 =>
            {
                Ok(Self {
                    num_sections: num_sections as usize,
                    num_rules: num_rules as usize,
                    num_seed_pairs: num_seed_pairs as usize,
                    max_value: max_value as i64,
                })
            }
            _ => Err(anyhow!(
                "Difficulty must be 4 non-negative values [num_sections, num_rules, num_seed_pairs, max_value], got {:?}",
                arr
            )),
        }
    }
}

impl TryFrom<Difficulty> for Vec<i32> {
    type Error = anyhow::Error;

    fn try_from(difficulty: Difficulty) -> Result<Self> {
        let out_of_range = |_| anyhow!("Difficulty {:?} does not fit in i32 values", difficulty);
        Ok(vec![
            i32::try_from(difficulty.num_sections).map_err(out_of_range)?,
            i32::try_from(difficulty.num_rules).map_err(out_of_range)?,
            i32::try_from(difficulty.num_seed_pairs).map_err(out_of_range)?,
            i32::try_from(difficulty.max_value).map_err(out_of_range)?,
        ])
    }
}

impl Difficulty {
    /// Longest seed range a generated instance may contain.
    pub fn max_seed_length(&self) -> i64 {
        (self.max_value / 10).max(1)
    }

    /// Rejects difficulties that cannot be generated, or whose seeds are too many to verify
    /// by enumeration.
    pub fn validate(&self) -> Result<()> {
        if self.num_seed_pairs == 0 {
            return Err(anyhow!("num_seed_pairs must be at least 1"));
        }
        if self.max_value < 2 {
            return Err(anyhow!("max_value must be at least 2, got {}", self.max_value));
        }
        if self.num_rules.saturating_mul(2) as u64 > self.max_value as u64 {
            return Err(anyhow!(
                "Cannot fit {} disjoint rules below {}",
                self.num_rules,
                self.max_value
            ));
        }
        let coverage = i64::try_from(self.num_seed_pairs)
            .ok()
            .and_then(|pairs| pairs.checked_mul(self.max_seed_length()));
        match coverage {
            Some(coverage) if coverage <= MAX_ENUMERATED_SEEDS => Ok(()),
            _ => Err(anyhow!(
                "{} seed pairs of up to {} seeds each exceed the verifiable limit of {} seeds",
                self.num_seed_pairs,
                self.max_seed_length(),
                MAX_ENUMERATED_SEEDS
            )),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Solution {
    pub lowest_location: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub difficulty: Difficulty,
    pub almanac: Almanac,
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        difficulty.validate()?;
        let domain = difficulty.max_value;
        let mut rng = SmallRng::from_seed(*seed);

        let max_seed_length = difficulty.max_seed_length();
        let seeds = (0..difficulty.num_seed_pairs)
            .flat_map(|_| {
                let start = rng.gen_range(0..domain);
                let length = rng.gen_range(1..=max_seed_length);
                [start, length]
            })
            .collect::<Vec<i64>>();

        let mut sections = Vec::with_capacity(difficulty.num_sections);
        for idx in 0..difficulty.num_sections {
            // sorted distinct cut points, taken pairwise, give disjoint [a, b) sources
            let mut cuts = index::sample(&mut rng, domain as usize, 2 * difficulty.num_rules)
                .into_vec();
            cuts.sort_unstable();
            let mut rules = cuts
                .chunks_exact(2)
                .map(|pair| {
                    let source_start = pair[0] as i64;
                    let length = pair[1] as i64 - source_start;
                    MappingRule::new(rng.gen_range(0..domain), source_start, length)
                })
                .collect::<Result<Vec<MappingRule>, _>>()?;
            rules.shuffle(&mut rng);
            sections.push(Section::with_label(section_label(idx), rules));
        }

        Ok(Self {
            seed: *seed,
            difficulty: *difficulty,
            almanac: Almanac::new(seeds, sections),
        })
    }

    pub fn solve(&self) -> Result<Solution> {
        Ok(Solution {
            lowest_location: self.almanac.lowest(SeedMode::Range)?,
        })
    }

    /// Walks every seed of every seed range one at a time. Only viable for small domains.
    pub fn calc_lowest_location_by_enumeration(&self) -> Result<i64> {
        let pipeline = self.almanac.pipeline();
        self.almanac
            .seed_ranges()?
            .iter()
            .flat_map(|range| range.start()..=range.end())
            .map(|value| pipeline.resolve_scalar(value))
            .min()
            .ok_or_else(|| anyhow!("Challenge has no seeds"))
    }

    pub fn verify_solution(&self, solution: &Solution) -> Result<()> {
        let expected = self.calc_lowest_location_by_enumeration()?;
        if solution.lowest_location != expected {
            Err(anyhow!(
                "Lowest location ({}) does not match expected ({})",
                solution.lowest_location,
                expected
            ))
        } else {
            Ok(())
        }
    }
}

fn section_label(idx: usize) -> String {
    if idx + 1 < CATEGORIES.len() {
        format!("{}-to-{}", CATEGORIES[idx], CATEGORIES[idx + 1])
    } else {
        format!("stage-{}-to-stage-{}", idx, idx + 1)
    }
}
