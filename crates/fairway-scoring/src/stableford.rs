use fairway_core::error::check_len;
use fairway_core::{Course, PlayerRoundScore, ScoringResult, Team};

use crate::handicap::{net_score, strokes_received};

/// Points for net par-2 or better. Eagles and albatrosses are not scaled
/// beyond this.
pub const MAX_POINTS: u32 = 4;

/// Points for a net score against par.
///
/// net ≤ par-2 → 4, par-1 → 3, par → 2, par+1 → 1, par+2 or worse → 0.
pub fn points_for_net(net: i32, par: u32) -> u32 {
    (par as i32 + 2 - net).clamp(0, MAX_POINTS as i32) as u32
}

/// Stableford points for one hole.
///
/// An unplayed hole (`score == 0`) is worth 0 and never fails, whatever the
/// other arguments.
pub fn stableford_points(
    score: u32,
    par: u32,
    stroke_index: u32,
    handicap: f64,
) -> ScoringResult<u32> {
    if score == 0 {
        return Ok(0);
    }
    let strokes = strokes_received(handicap, stroke_index)?;
    Ok(net_score(score, strokes).map_or(0, |net| points_for_net(net, par)))
}

/// Stableford total over parallel score / par / stroke-index arrays.
/// Unplayed holes contribute nothing.
///
/// The par and stroke-index arrays must describe a valid course: pars of at
/// least 1 and stroke indices forming a permutation of `1..=N`.
pub fn total_stableford(
    scores: &[u32],
    pars: &[u32],
    stroke_indices: &[u32],
    handicap: f64,
) -> ScoringResult<u32> {
    check_len("hole scores", pars.len(), scores.len())?;
    let course = Course::from_parts("", pars, stroke_indices)?;

    course
        .holes()
        .iter()
        .zip(scores)
        .map(|(hole, &score)| stableford_points(score, hole.par, hole.stroke_index, handicap))
        .sum()
}

/// Per-hole Stableford points for a card, `None` on unplayed holes.
pub fn hole_points(course: &Course, player: &PlayerRoundScore) -> ScoringResult<Vec<Option<u32>>> {
    player.validate_for(course)?;
    course
        .holes()
        .iter()
        .zip(&player.hole_scores)
        .map(|(hole, &score)| {
            if score == 0 {
                Ok(None)
            } else {
                stableford_points(score, hole.par, hole.stroke_index, player.handicap).map(Some)
            }
        })
        .collect()
}

/// Better-ball Stableford for a team: on each hole the best member's points
/// count. Holes no member has played contribute nothing.
///
/// `allowance` scales each member's handicap before allocation. A team with
/// no players is rejected.
pub fn team_stableford(course: &Course, team: &Team, allowance: f64) -> ScoringResult<u32> {
    team.validate_for(course)?;
    let cards = team
        .players
        .iter()
        .map(|m| hole_points(course, &m.with_allowance(allowance)))
        .collect::<ScoringResult<Vec<_>>>()?;

    Ok((0..course.hole_count())
        .filter_map(|i| cards.iter().filter_map(|card| card[i]).max())
        .sum())
}
