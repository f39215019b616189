use almanac_core::{
    challenge::{Challenge, Difficulty, Solution, MAX_ENUMERATED_SEEDS},
    Almanac, SeedMode,
};

fn difficulty() -> Difficulty {
    Difficulty {
        num_sections: 7,
        num_rules: 6,
        num_seed_pairs: 4,
        max_value: 500,
    }
}

#[test]
fn test_generate_instance_is_deterministic() {
    let a = Challenge::generate_instance(&[7; 32], &difficulty()).unwrap();
    let b = Challenge::generate_instance(&[7; 32], &difficulty()).unwrap();
    let c = Challenge::generate_instance(&[8; 32], &difficulty()).unwrap();
    assert_eq!(a.almanac, b.almanac);
    assert_ne!(a.almanac, c.almanac);
}

#[test]
fn test_generate_instance_shape() {
    let challenge = Challenge::generate_instance(&[1; 32], &difficulty()).unwrap();
    let almanac = &challenge.almanac;
    assert_eq!(almanac.seeds().len(), 8);
    assert_eq!(almanac.seed_ranges().unwrap().len(), 4);
    assert_eq!(almanac.sections().len(), 7);
    assert_eq!(almanac.sections()[0].label(), Some("seed-to-soil"));
    assert_eq!(almanac.sections()[6].label(), Some("humidity-to-location"));
    for section in almanac.sections() {
        assert_eq!(section.rules().len(), 6);
        assert_eq!(section.overlapping_rules(), None);
        for rule in section.rules() {
            assert!(rule.source_end() < 500);
            assert!(rule.dest_start() < 500);
        }
    }
}

#[test]
fn test_generated_instance_survives_text_round_trip() {
    let challenge = Challenge::generate_instance(&[3; 32], &difficulty()).unwrap();
    let reparsed = Almanac::parse(&challenge.almanac.to_string()).unwrap();
    assert_eq!(reparsed, challenge.almanac);
}

#[test]
fn test_solve_and_verify() {
    for seed in 0..20u8 {
        let challenge = Challenge::generate_instance(&[seed; 32], &difficulty()).unwrap();
        let solution = challenge.solve().unwrap();
        assert!(challenge.verify_solution(&solution).is_ok());
        assert_eq!(
            solution.lowest_location,
            challenge.calc_lowest_location_by_enumeration().unwrap()
        );
    }
}

#[test]
fn test_verify_rejects_wrong_answer() {
    let challenge = Challenge::generate_instance(&[11; 32], &difficulty()).unwrap();
    let solution = challenge.solve().unwrap();
    let wrong = Solution {
        lowest_location: solution.lowest_location + 1,
    };
    assert!(challenge.verify_solution(&wrong).is_err());
}

#[test]
fn test_range_mode_never_beats_scalar_mode_on_own_starts() {
    // seed starts are a subset of the seeds covered in range mode
    let challenge = Challenge::generate_instance(&[5; 32], &difficulty()).unwrap();
    let starts = challenge
        .almanac
        .seed_ranges()
        .unwrap()
        .iter()
        .map(|r| r.start())
        .collect::<Vec<i64>>();
    let from_starts = challenge.almanac.pipeline().run_scalars(&starts).unwrap();
    assert!(challenge.almanac.lowest(SeedMode::Range).unwrap() <= from_starts);
}

#[test]
fn test_generate_instance_rejects_impossible_difficulty() {
    let too_many_rules = Difficulty {
        num_rules: 300,
        ..difficulty()
    };
    assert!(Challenge::generate_instance(&[0; 32], &too_many_rules).is_err());
    let tiny_domain = Difficulty {
        max_value: 1,
        ..difficulty()
    };
    assert!(Challenge::generate_instance(&[0; 32], &tiny_domain).is_err());
    let no_seeds = Difficulty {
        num_seed_pairs: 0,
        ..difficulty()
    };
    assert!(no_seeds.validate().is_err());
    assert!(Challenge::generate_instance(&[0; 32], &no_seeds).is_err());
}

#[test]
fn test_generate_instance_rejects_unverifiable_seed_coverage() {
    let huge_domain = Difficulty {
        num_sections: 2,
        num_rules: 2,
        num_seed_pairs: 2,
        max_value: 1_000_000_000_000,
    };
    assert!(huge_domain.validate().is_err());
    assert!(Challenge::generate_instance(&[0; 32], &huge_domain).is_err());

    let too_many_pairs = Difficulty {
        num_seed_pairs: usize::MAX,
        ..difficulty()
    };
    assert!(Challenge::generate_instance(&[0; 32], &too_many_pairs).is_err());

    let at_limit = Difficulty {
        num_sections: 1,
        num_rules: 1,
        num_seed_pairs: 1,
        max_value: MAX_ENUMERATED_SEEDS * 10,
    };
    assert_eq!(at_limit.max_seed_length(), MAX_ENUMERATED_SEEDS);
    assert!(at_limit.validate().is_ok());
    let over_limit = Difficulty {
        num_seed_pairs: 2,
        ..at_limit
    };
    assert!(over_limit.validate().is_err());
}

#[test]
fn test_difficulty_from_vec() {
    let difficulty = Difficulty::try_from(vec![7, 6, 4, 500]).unwrap();
    assert_eq!(difficulty, self::difficulty());
    assert_eq!(Vec::<i32>::try_from(difficulty).unwrap(), vec![7, 6, 4, 500]);
    assert!(Difficulty::try_from(vec![7, 6, 4]).is_err());
    assert!(Difficulty::try_from(vec![-1, 6, 4, 500]).is_err());

    let wide = Difficulty {
        max_value: 1_000_000_000_000,
        ..difficulty
    };
    assert!(Vec::<i32>::try_from(wide).is_err());
}

#[test]
fn test_challenge_serde() {
    let challenge = Challenge::generate_instance(&[2; 32], &difficulty()).unwrap();
    let json = serde_json::to_string(&challenge).unwrap();
    let parsed: Challenge = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.almanac, challenge.almanac);
    assert_eq!(parsed.difficulty, challenge.difficulty);
}
