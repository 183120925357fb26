use fairway_core::{Course, ScoringError, ScoringResult, Team, check_handicap};

/// Holes per allocation cycle. A handicap of 18 gives one stroke on every
/// hole; each further 18 adds another full pass.
pub const ALLOCATION_CYCLE: f64 = 18.0;

/// Strokes a player receives on a hole of the given stroke index.
///
/// `floor(handicap / 18)` strokes on every hole, plus one more where
/// `stroke_index <= handicap mod 18`. Fractional handicaps are therefore
/// floored. Zero or negative handicaps receive nothing; anything above
/// [`fairway_core::MAX_HANDICAP`] is rejected.
pub fn strokes_received(handicap: f64, stroke_index: u32) -> ScoringResult<u32> {
    check_handicap(handicap)?;
    if stroke_index == 0 {
        return Err(ScoringError::InvalidStrokeIndex(stroke_index));
    }
    if handicap <= 0.0 {
        return Ok(0);
    }
    let base = (handicap / ALLOCATION_CYCLE).floor() as u32;
    let extra = u32::from(f64::from(stroke_index) <= handicap % ALLOCATION_CYCLE);
    Ok(base + extra)
}

/// Per-hole stroke allocation for a whole course, in hole order.
pub fn allocate(handicap: f64, course: &Course) -> ScoringResult<Vec<u32>> {
    course
        .holes()
        .iter()
        .map(|h| strokes_received(handicap, h.stroke_index))
        .collect()
}

/// Net strokes for one hole: `None` when the hole has not been played.
pub fn net_score(score: u32, strokes: u32) -> Option<i32> {
    (score > 0).then(|| {
        i32::try_from(score)
            .unwrap_or(i32::MAX)
            .saturating_sub_unsigned(strokes)
    })
}

/// Team handicap for foursomes: `allowance` of the pair's combined handicap.
///
/// Each member's handicap must be usable on its own, and so must the
/// resulting team figure.
pub fn foursomes_handicap(team: &Team, allowance: f64) -> ScoringResult<f64> {
    if team.players.is_empty() {
        return Err(ScoringError::EmptyTeam(team.id));
    }
    team.players.iter().try_for_each(|p| check_handicap(p.handicap))?;
    let handicap = team.combined_handicap() * allowance;
    check_handicap(handicap)?;
    Ok(handicap)
}
