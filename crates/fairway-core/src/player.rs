use serde::{Deserialize, Serialize};

use crate::course::Course;
use crate::error::{ScoringError, ScoringResult, check_len};

/// Unique identifier for a player within a round.
pub type PlayerId = u64;

/// Unique identifier for a team within a tour.
pub type TeamId = u64;

/// Highest playing handicap the engine accepts. Three full allocation passes
/// over an 18-hole course.
pub const MAX_HANDICAP: f64 = 54.0;

/// A handicap is usable when it is finite and no higher than [`MAX_HANDICAP`].
/// Plus handicaps (negative values) are accepted and receive no strokes.
pub fn check_handicap(handicap: f64) -> ScoringResult<()> {
    if handicap.is_finite() && handicap <= MAX_HANDICAP {
        Ok(())
    } else {
        Err(ScoringError::InvalidHandicap(handicap))
    }
}

/// One player's scorecard for a round.
///
/// `hole_scores[i]` holds the strokes taken on hole `i + 1`; a `0` means the
/// hole has not been entered yet and is excluded from every total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRoundScore {
    pub player_id: PlayerId,
    pub handicap: f64,
    pub hole_scores: Vec<u32>,
}

impl PlayerRoundScore {
    pub fn new(player_id: PlayerId, handicap: f64, hole_scores: Vec<u32>) -> Self {
        Self {
            player_id,
            handicap,
            hole_scores,
        }
    }

    /// Fresh card with every hole ungraded.
    pub fn blank(player_id: PlayerId, handicap: f64, hole_count: usize) -> Self {
        Self::new(player_id, handicap, vec![0; hole_count])
    }

    /// Check the card lines up with `course` and carries a usable handicap.
    pub fn validate_for(&self, course: &Course) -> ScoringResult<()> {
        check_len("hole scores", course.hole_count(), self.hole_scores.len())?;
        check_handicap(self.handicap)
    }

    /// Strokes on hole `number` (1-based), or `None` if not yet entered.
    pub fn score(&self, number: u32) -> Option<u32> {
        let idx = (number as usize).checked_sub(1)?;
        self.hole_scores.get(idx).copied().filter(|&s| s > 0)
    }

    pub fn holes_played(&self) -> usize {
        self.hole_scores.iter().filter(|&&s| s > 0).count()
    }

    pub fn is_complete(&self) -> bool {
        !self.hole_scores.is_empty() && self.hole_scores.iter().all(|&s| s > 0)
    }

    /// Record strokes for hole `number`. Passing `0` clears the hole.
    pub fn set_score(&mut self, number: u32, strokes: u32) -> ScoringResult<()> {
        let slot = (number as usize)
            .checked_sub(1)
            .and_then(|idx| self.hole_scores.get_mut(idx))
            .ok_or(ScoringError::UnknownHole(number))?;
        *slot = strokes;
        Ok(())
    }

    /// Copy of this card with the handicap scaled by `allowance`.
    pub fn with_allowance(&self, allowance: f64) -> Self {
        Self {
            handicap: self.handicap * allowance,
            ..self.clone()
        }
    }
}

/// A named group of players for team formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub players: Vec<PlayerRoundScore>,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>, players: Vec<PlayerRoundScore>) -> Self {
        Self {
            id,
            name: name.into(),
            players,
        }
    }

    pub fn validate_for(&self, course: &Course) -> ScoringResult<()> {
        if self.players.is_empty() {
            return Err(ScoringError::EmptyTeam(self.id));
        }
        self.players.iter().try_for_each(|p| p.validate_for(course))
    }

    /// Sum of member handicaps; the basis for foursomes allowances.
    pub fn combined_handicap(&self) -> f64 {
        self.players.iter().map(|p| p.handicap).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_hole_course() -> Course {
        Course::from_parts("Three", &[4, 3, 5], &[2, 3, 1]).unwrap()
    }

    #[test]
    fn zero_scores_are_not_played() {
        let card = PlayerRoundScore::new(1, 10.0, vec![5, 0, 6]);
        assert_eq!(card.holes_played(), 2);
        assert!(!card.is_complete());
        assert_eq!(card.score(1), Some(5));
        assert_eq!(card.score(2), None);
        assert_eq!(card.score(0), None);
        assert_eq!(card.score(4), None);
    }

    #[test]
    fn validate_catches_length_and_handicap() {
        let course = three_hole_course();
        assert!(
            PlayerRoundScore::blank(1, 5.0, 3)
                .validate_for(&course)
                .is_ok()
        );
        assert!(matches!(
            PlayerRoundScore::blank(1, 5.0, 2).validate_for(&course),
            Err(ScoringError::LengthMismatch { .. })
        ));
        assert!(matches!(
            PlayerRoundScore::blank(1, f64::NAN, 3).validate_for(&course),
            Err(ScoringError::InvalidHandicap(_))
        ));
    }

    #[test]
    fn handicap_ceiling_enforced() {
        assert!(check_handicap(MAX_HANDICAP).is_ok());
        assert!(check_handicap(-4.0).is_ok());
        assert_eq!(
            check_handicap(54.5),
            Err(ScoringError::InvalidHandicap(54.5))
        );
        assert_eq!(check_handicap(1e11), Err(ScoringError::InvalidHandicap(1e11)));
        let course = three_hole_course();
        assert!(matches!(
            PlayerRoundScore::blank(1, 60.0, 3).validate_for(&course),
            Err(ScoringError::InvalidHandicap(_))
        ));
    }

    #[test]
    fn set_score_updates_and_clears() {
        let mut card = PlayerRoundScore::blank(7, 0.0, 3);
        card.set_score(2, 4).unwrap();
        assert_eq!(card.score(2), Some(4));
        card.set_score(2, 0).unwrap();
        assert_eq!(card.score(2), None);
        assert_eq!(card.set_score(4, 3), Err(ScoringError::UnknownHole(4)));
        assert_eq!(card.set_score(0, 3), Err(ScoringError::UnknownHole(0)));
    }

    #[test]
    fn empty_team_rejected() {
        let course = three_hole_course();
        let team = Team::new(9, "Nobody", vec![]);
        assert_eq!(team.validate_for(&course), Err(ScoringError::EmptyTeam(9)));
    }

    #[test]
    fn combined_handicap_sums_members() {
        let team = Team::new(
            1,
            "Pair",
            vec![
                PlayerRoundScore::blank(1, 12.0, 3),
                PlayerRoundScore::blank(2, 7.5, 3),
            ],
        );
        assert_eq!(team.combined_handicap(), 19.5);
        assert_eq!(team.players[0].with_allowance(0.5).handicap, 6.0);
    }
}
