#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlmanacError {
    InvalidRange {
        start: i64,
        length: i64,
    },
    InvalidSeed {
        token: String,
    },
    MalformedRule {
        dest_start: i64,
        source_start: i64,
        length: i64,
        reason: &'static str,
    },
    MalformedRuleLine {
        line_number: usize,
        line: String,
    },
    MissingSeeds,
    OddSeedCount {
        count: usize,
    },
    RuleOutsideSection {
        line_number: usize,
    },
}

impl std::fmt::Display for AlmanacError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlmanacError::InvalidRange { start, length } => write!(
                f,
                "Range (start: '{}', length: '{}') is invalid. Start must be >= 0 and length > 0",
                start, length
            ),
            AlmanacError::InvalidSeed { token } => {
                write!(f, "Seed '{}' is not an integer", token)
            }
            AlmanacError::MalformedRule {
                dest_start,
                source_start,
                length,
                reason,
            } => write!(
                f,
                "Rule '{} {} {}' is malformed: {}",
                dest_start, source_start, length, reason
            ),
            AlmanacError::MalformedRuleLine { line_number, line } => write!(
                f,
                "Line {} '{}' must contain exactly three integers: dest_start source_start length",
                line_number, line
            ),
            AlmanacError::MissingSeeds => write!(f, "Expected a non-empty seeds line"),
            AlmanacError::OddSeedCount { count } => write!(
                f,
                "Seed ranges need (start, length) pairs, but {} seeds were given",
                count
            ),
            AlmanacError::RuleOutsideSection { line_number } => write!(
                f,
                "Line {} is a rule but no section header precedes it",
                line_number
            ),
        }
    }
}

impl std::error::Error for AlmanacError {}

pub type AlmanacResult<T> = std::result::Result<T, AlmanacError>;
