use crate::player::TeamId;

/// Validation failures raised before any score is computed.
///
/// Missing hole scores are never an error: a `0` entry means "not yet
/// played" and is skipped by every aggregate.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringError {
    /// Two parallel arrays (scores, pars, stroke indices) disagree in length.
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    /// A course must have at least one hole.
    EmptyCourse,
    /// Holes must be numbered 1..=N in order.
    HoleNumber { expected: u32, actual: u32 },
    /// A hole number that is not on the scorecard.
    UnknownHole(u32),
    InvalidPar { hole: u32, par: u32 },
    /// Stroke index of zero, or larger than the number of holes.
    InvalidStrokeIndex(u32),
    DuplicateStrokeIndex(u32),
    /// NaN or infinite handicap.
    InvalidHandicap(f64),
    /// A match needs exactly two sides.
    SideCount(usize),
    EmptyTeam(TeamId),
    Config(String),
}

impl std::fmt::Display for ScoringError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch {
                what,
                expected,
                actual,
            } => write!(f, "{what}: expected {expected} entries, got {actual}"),
            Self::EmptyCourse => write!(f, "course has no holes"),
            Self::HoleNumber { expected, actual } => {
                write!(f, "expected hole {expected}, found hole {actual}")
            },
            Self::UnknownHole(n) => write!(f, "hole {n} is not on the scorecard"),
            Self::InvalidPar { hole, par } => write!(f, "hole {hole} has invalid par {par}"),
            Self::InvalidStrokeIndex(si) => write!(f, "stroke index {si} is out of range"),
            Self::DuplicateStrokeIndex(si) => write!(f, "stroke index {si} is used twice"),
            Self::InvalidHandicap(h) => {
                write!(f, "handicap {h} is not a finite value of at most 54")
            },
            Self::SideCount(n) => write!(f, "a match needs exactly 2 sides, got {n}"),
            Self::EmptyTeam(id) => write!(f, "team {id} has no players"),
            Self::Config(m) => write!(f, "invalid scoring config: {m}"),
        }
    }
}

impl std::error::Error for ScoringError {}

/// Shorthand used throughout the engine.
pub type ScoringResult<T> = Result<T, ScoringError>;

/// Reject a parallel array whose length differs from the course's hole count.
pub fn check_len(what: &'static str, expected: usize, actual: usize) -> ScoringResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(ScoringError::LengthMismatch {
            what,
            expected,
            actual,
        })
    }
}
