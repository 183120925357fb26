//! Golf scoring engine.
//!
//! Pure functions from raw hole-by-hole strokes to Stableford points,
//! gross/net totals, match-play standings and ranked leaderboards. Nothing
//! here holds state between calls: every result is recomputed from the
//! snapshot passed in.

pub mod handicap;
pub mod leaderboard;
pub mod match_play;
pub mod stableford;
pub mod stroke_play;

pub use handicap::{allocate, foursomes_handicap, strokes_received};
pub use leaderboard::{
    Leaderboard, LeaderboardEntry, MatchRecord, RankingMetric, RoundMetric, Standing,
    build_leaderboard, match_point_entries, rank,
};
pub use match_play::{
    HoleOutcome, MatchCompletion, MatchSide, MatchState, RunningStatus, Side, SideFormat,
    evaluate_match,
};
pub use stableford::{stableford_points, team_stableford, total_stableford};
pub use stroke_play::{RoundSummary, ScoreName, summarize_round};
