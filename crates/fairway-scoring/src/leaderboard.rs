use serde::{Deserialize, Serialize};

use fairway_core::{Course, MatchPointsConfig, PlayerId, PlayerRoundScore, ScoringResult};

use crate::match_play::MatchState;
use crate::stroke_play::{RoundSummary, summarize_round};

/// What a leaderboard is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankingMetric {
    Gross,
    Net,
    ToPar,
    NetToPar,
    Stableford,
    /// Half-point units, so a halved match stays an integer.
    MatchPoints,
}

impl RankingMetric {
    pub fn lower_is_better(self) -> bool {
        matches!(self, Self::Gross | Self::Net | Self::ToPar | Self::NetToPar)
    }
}

/// Metrics that can be read straight off a scorecard.
///
/// `Gross` and `Net` are raw stroke totals over the holes played, so they
/// only compare fairly between cards with the same number of holes entered.
/// A live board with players on different holes should rank by `ToPar` or
/// `NetToPar`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundMetric {
    Gross,
    Net,
    ToPar,
    NetToPar,
    Stableford,
}

impl RoundMetric {
    pub fn value_of(self, summary: &RoundSummary) -> i64 {
        match self {
            Self::Gross => i64::from(summary.gross),
            Self::Net => i64::from(summary.net),
            Self::ToPar => i64::from(summary.to_par),
            Self::NetToPar => i64::from(summary.net_to_par),
            Self::Stableford => i64::from(summary.stableford),
        }
    }
}

impl From<RoundMetric> for RankingMetric {
    fn from(metric: RoundMetric) -> Self {
        match metric {
            RoundMetric::Gross => Self::Gross,
            RoundMetric::Net => Self::Net,
            RoundMetric::ToPar => Self::ToPar,
            RoundMetric::NetToPar => Self::NetToPar,
            RoundMetric::Stableford => Self::Stableford,
        }
    }
}

/// An entity and its value under the active metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry<T> {
    pub entity: T,
    pub value: i64,
}

/// A ranked row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing<T> {
    pub rank: u32,
    pub tied: bool,
    /// "1", "T2", "4" ...
    pub position: String,
    pub entity: T,
    pub value: i64,
}

pub fn position_label(rank: u32, tied: bool) -> String {
    if tied {
        format!("T{rank}")
    } else {
        rank.to_string()
    }
}

/// Order `entries` by `metric` and assign golf positions.
///
/// Equal values share a position prefixed with "T" and the next distinct
/// value skips the tied places (two tied for 2nd are both "T2", the next is
/// "4"). Ties keep their input order.
pub fn rank<T>(mut entries: Vec<LeaderboardEntry<T>>, metric: RankingMetric) -> Vec<Standing<T>> {
    if metric.lower_is_better() {
        entries.sort_by(|a, b| a.value.cmp(&b.value));
    } else {
        entries.sort_by(|a, b| b.value.cmp(&a.value));
    }

    let values: Vec<i64> = entries.iter().map(|e| e.value).collect();
    let mut group_start = 0;
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            if values[i] != values[group_start] {
                group_start = i;
            }
            let tied = i > group_start || values.get(i + 1) == Some(&values[i]);
            let rank = group_start as u32 + 1;
            Standing {
                rank,
                tied,
                position: position_label(rank, tied),
                entity: entry.entity,
                value: entry.value,
            }
        })
        .collect()
}

/// A ranked round plus the players who have not scored a hole yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub metric: RankingMetric,
    pub standings: Vec<Standing<PlayerId>>,
    pub not_started: Vec<PlayerId>,
}

/// Summarize every card and rank the players who have started.
///
/// Values are taken as they stand, with no projection over unplayed holes:
/// under `Gross` or `Net` a card two holes in leads a finished one. Use
/// `ToPar` or `NetToPar` while a round is in progress.
pub fn build_leaderboard(
    course: &Course,
    players: &[PlayerRoundScore],
    metric: RoundMetric,
) -> ScoringResult<Leaderboard> {
    let mut entries = Vec::with_capacity(players.len());
    let mut not_started = Vec::new();
    for player in players {
        let summary = summarize_round(course, player)?;
        if summary.holes_played == 0 {
            not_started.push(player.player_id);
        } else {
            entries.push(LeaderboardEntry {
                entity: player.player_id,
                value: metric.value_of(&summary),
            });
        }
    }

    let standings = rank(entries, metric.into());
    tracing::debug!(
        metric = ?metric,
        ranked = standings.len(),
        not_started = not_started.len(),
        "Built leaderboard"
    );
    Ok(Leaderboard {
        metric: metric.into(),
        standings,
        not_started,
    })
}

/// A match between two sides, identified by `T`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord<T> {
    pub side_a: T,
    pub side_b: T,
    pub state: MatchState,
}

/// Tally match points per side across `records`, in first-seen order.
/// Unfinished matches list their sides but award nothing.
pub fn match_point_entries<T: Clone + PartialEq>(
    records: &[MatchRecord<T>],
    points: &MatchPointsConfig,
) -> Vec<LeaderboardEntry<T>> {
    let mut entries: Vec<LeaderboardEntry<T>> = Vec::new();
    let mut credit = |side: &T, pts: u32| match entries.iter_mut().find(|e| &e.entity == side) {
        Some(entry) => entry.value += i64::from(pts),
        None => entries.push(LeaderboardEntry {
            entity: side.clone(),
            value: i64::from(pts),
        }),
    };

    for record in records {
        let (a, b) = record.state.match_points(points).unwrap_or((0, 0));
        credit(&record.side_a, a);
        credit(&record.side_b, b);
    }
    entries
}

/// Render a half-point tally: 5 → "2.5", 4 → "2".
pub fn format_half_points(half_points: i64) -> String {
    if half_points % 2 == 0 {
        (half_points / 2).to_string()
    } else {
        format!("{:.1}", half_points as f64 / 2.0)
    }
}
