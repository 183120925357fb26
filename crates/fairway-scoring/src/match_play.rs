//! Hole-by-hole match play for individuals and teams.
//!
//! Every evaluation recomputes from the full set of hole scores. A hole is
//! only *graded* once both sides have a score on it; an ungraded hole never
//! counts as a halve, and a match can only be closed out once every hole up
//! to the deciding one is graded.

use serde::{Deserialize, Serialize};

use fairway_core::error::check_len;
use fairway_core::{
    Course, MatchPointsConfig, PlayerRoundScore, ScoringError, ScoringResult, Team,
};

use crate::handicap::{allocate, foursomes_handicap, net_score};

/// One of the two sides in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchSide {
    A,
    B,
}

/// Result of a single hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoleOutcome {
    Won(MatchSide),
    /// Both sides scored and their net scores were equal.
    Halved,
    /// At least one side has no score yet.
    Ungraded,
}

impl HoleOutcome {
    /// +1 for side A, -1 for side B, 0 for a halve or an ungraded hole.
    pub fn signed(self) -> i8 {
        match self {
            Self::Won(MatchSide::A) => 1,
            Self::Won(MatchSide::B) => -1,
            Self::Halved | Self::Ungraded => 0,
        }
    }

    pub fn is_graded(self) -> bool {
        !matches!(self, Self::Ungraded)
    }

    /// Compare two net scores; lower wins.
    pub fn from_nets(a: Option<i32>, b: Option<i32>) -> Self {
        match (a, b) {
            (Some(a), Some(b)) if a < b => Self::Won(MatchSide::A),
            (Some(a), Some(b)) if a > b => Self::Won(MatchSide::B),
            (Some(_), Some(_)) => Self::Halved,
            _ => Self::Ungraded,
        }
    }
}

/// Match standing after a given hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningStatus {
    /// Holes up, always non-negative.
    pub differential: u32,
    /// `None` when all square.
    pub leader: Option<MatchSide>,
}

/// How and where a match finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCompletion {
    pub ended_on_hole: u32,
    /// `None` for a match finishing all square.
    pub winner: Option<MatchSide>,
    /// "3&2", "1 UP" or "AS".
    pub notation: String,
}

/// How a side produces its per-hole net score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SideFormat {
    Individual(PlayerRoundScore),
    /// Better ball: the lowest net among members who have a score.
    FourBall(Vec<PlayerRoundScore>),
    /// One ball per pair, one shared score per hole.
    Foursomes { team_handicap: f64, scores: Vec<u32> },
}

/// A named competitor in a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Side {
    pub id: u64,
    pub name: String,
    pub format: SideFormat,
}

impl Side {
    pub fn individual(player: PlayerRoundScore) -> Self {
        Self {
            id: player.player_id,
            name: format!("Player {}", player.player_id),
            format: SideFormat::Individual(player),
        }
    }

    /// Four-ball side from a team; each member's handicap is scaled by
    /// `allowance`.
    pub fn four_ball(team: &Team, allowance: f64) -> Self {
        Self {
            id: team.id,
            name: team.name.clone(),
            format: SideFormat::FourBall(
                team.players
                    .iter()
                    .map(|p| p.with_allowance(allowance))
                    .collect(),
            ),
        }
    }

    /// Foursomes side playing `scores` off `allowance` of the team's
    /// combined handicap. A team with no players is rejected.
    pub fn foursomes(team: &Team, scores: Vec<u32>, allowance: f64) -> ScoringResult<Self> {
        Ok(Self {
            id: team.id,
            name: team.name.clone(),
            format: SideFormat::Foursomes {
                team_handicap: foursomes_handicap(team, allowance)?,
                scores,
            },
        })
    }

    /// Net score per hole, `None` where the side has no valid score.
    pub fn net_scores(&self, course: &Course) -> ScoringResult<Vec<Option<i32>>> {
        match &self.format {
            SideFormat::Individual(player) => player_nets(course, player),
            SideFormat::FourBall(members) => {
                if members.is_empty() {
                    return Err(ScoringError::EmptyTeam(self.id));
                }
                let cards = members
                    .iter()
                    .map(|m| player_nets(course, m))
                    .collect::<ScoringResult<Vec<_>>>()?;
                Ok((0..course.hole_count())
                    .map(|i| cards.iter().filter_map(|card| card[i]).min())
                    .collect())
            },
            SideFormat::Foursomes {
                team_handicap,
                scores,
            } => {
                check_len("foursomes scores", course.hole_count(), scores.len())?;
                let strokes = allocate(*team_handicap, course)?;
                Ok(scores
                    .iter()
                    .zip(&strokes)
                    .map(|(&score, &s)| net_score(score, s))
                    .collect())
            },
        }
    }
}

fn player_nets(course: &Course, player: &PlayerRoundScore) -> ScoringResult<Vec<Option<i32>>> {
    player.validate_for(course)?;
    let strokes = allocate(player.handicap, course)?;
    Ok(player
        .hole_scores
        .iter()
        .zip(&strokes)
        .map(|(&score, &s)| net_score(score, s))
        .collect())
}

/// Hole outcomes from two sides' per-hole net scores.
pub fn hole_results(a: &[Option<i32>], b: &[Option<i32>]) -> ScoringResult<Vec<HoleOutcome>> {
    check_len("side B net scores", a.len(), b.len())?;
    Ok(a.iter()
        .zip(b)
        .map(|(&a, &b)| HoleOutcome::from_nets(a, b))
        .collect())
}

/// Standing after each hole, counting graded holes only. An ungraded hole
/// carries the previous standing forward.
pub fn running_status(outcomes: &[HoleOutcome]) -> Vec<RunningStatus> {
    let mut margin: i32 = 0;
    outcomes
        .iter()
        .map(|o| {
            margin += i32::from(o.signed());
            status_for(margin)
        })
        .collect()
}

fn status_for(margin: i32) -> RunningStatus {
    RunningStatus {
        differential: margin.unsigned_abs(),
        leader: match margin.signum() {
            1 => Some(MatchSide::A),
            -1 => Some(MatchSide::B),
            _ => None,
        },
    }
}

/// Find where the match finished, if it has.
///
/// Walks holes in order and stops at the first ungraded one, so a result
/// is never reported from sparse data.
pub fn match_completion(outcomes: &[HoleOutcome]) -> Option<MatchCompletion> {
    let total = outcomes.len();
    let mut margin: i32 = 0;
    for (i, outcome) in outcomes.iter().enumerate() {
        if !outcome.is_graded() {
            return None;
        }
        margin += i32::from(outcome.signed());
        let played = i + 1;
        let remaining = (total - played) as u32;
        let status = status_for(margin);

        let notation = if remaining == 0 {
            if status.differential == 0 {
                "AS".to_string()
            } else {
                format!("{} UP", status.differential)
            }
        } else if status.differential > remaining {
            format!("{}&{}", status.differential, remaining)
        } else {
            continue;
        };
        return Some(MatchCompletion {
            ended_on_hole: played as u32,
            winner: status.leader,
            notation,
        });
    }
    None
}

/// Full derived state of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub hole_results: Vec<HoleOutcome>,
    pub running_status: Vec<RunningStatus>,
    pub completion: Option<MatchCompletion>,
}

impl MatchState {
    pub fn from_outcomes(outcomes: Vec<HoleOutcome>) -> Self {
        Self {
            running_status: running_status(&outcomes),
            completion: match_completion(&outcomes),
            hole_results: outcomes,
        }
    }

    pub fn total_holes(&self) -> usize {
        self.hole_results.len()
    }

    pub fn is_over(&self) -> bool {
        self.completion.is_some()
    }

    pub fn winner(&self) -> Option<MatchSide> {
        self.completion.as_ref().and_then(|c| c.winner)
    }

    /// Consecutive graded holes from the first tee.
    pub fn thru(&self) -> usize {
        self.hole_results
            .iter()
            .take_while(|o| o.is_graded())
            .count()
    }

    /// Standing after the last consecutively graded hole.
    pub fn current_status(&self) -> RunningStatus {
        match self.thru() {
            0 => status_for(0),
            n => self.running_status[n - 1],
        }
    }

    /// Leader is exactly as many holes up as remain, match still live.
    pub fn is_dormie(&self) -> bool {
        let status = self.current_status();
        let remaining = (self.total_holes() - self.thru()) as u32;
        !self.is_over() && status.differential > 0 && status.differential == remaining
    }

    /// Display text: the final notation, or e.g. "2 UP thru 7" while live.
    pub fn status_text(&self) -> String {
        if let Some(c) = &self.completion {
            return c.notation.clone();
        }
        let thru = self.thru();
        if thru == 0 {
            return "Not started".to_string();
        }
        match self.current_status().differential {
            0 => format!("AS thru {thru}"),
            d => format!("{d} UP thru {thru}"),
        }
    }

    /// Match points `(side A, side B)` in half-point units, once finished.
    pub fn match_points(&self, points: &MatchPointsConfig) -> Option<(u32, u32)> {
        let completion = self.completion.as_ref()?;
        Some(match completion.winner {
            Some(MatchSide::A) => (points.win, points.loss),
            Some(MatchSide::B) => (points.loss, points.win),
            None => (points.halve, points.halve),
        })
    }
}

/// Evaluate a match between exactly two sides on `course`.
pub fn evaluate_match(course: &Course, sides: &[Side]) -> ScoringResult<MatchState> {
    let [a, b] = sides else {
        return Err(ScoringError::SideCount(sides.len()));
    };
    let outcomes = hole_results(&a.net_scores(course)?, &b.net_scores(course)?)?;
    let state = MatchState::from_outcomes(outcomes);

    tracing::debug!(
        side_a = a.id,
        side_b = b.id,
        thru = state.thru(),
        status = %state.status_text(),
        "Evaluated match"
    );
    Ok(state)
}
