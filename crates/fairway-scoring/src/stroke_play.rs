use serde::{Deserialize, Serialize};

use fairway_core::error::check_len;
use fairway_core::{Course, PlayerId, PlayerRoundScore, ScoringResult};

use crate::handicap::{allocate, net_score};
use crate::stableford::points_for_net;

/// Name of a single hole's score relative to par.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreName {
    AlbatrossOrBetter,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogeyOrWorse,
}

impl ScoreName {
    pub fn from_relative(to_par: i32) -> Self {
        match to_par {
            i32::MIN..=-3 => Self::AlbatrossOrBetter,
            -2 => Self::Eagle,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            2 => Self::DoubleBogey,
            _ => Self::TripleBogeyOrWorse,
        }
    }

    /// `None` for an unplayed hole.
    pub fn classify(score: u32, par: u32) -> Option<Self> {
        (score > 0).then(|| Self::from_relative(score as i32 - par as i32))
    }
}

/// Sum of strokes over played holes.
pub fn gross_total(scores: &[u32]) -> u32 {
    scores.iter().sum()
}

/// Gross strokes minus the par of the holes actually played.
pub fn score_to_par(scores: &[u32], pars: &[u32]) -> ScoringResult<i32> {
    check_len("hole scores", pars.len(), scores.len())?;
    Ok(scores
        .iter()
        .zip(pars)
        .filter(|&(&s, _)| s > 0)
        .map(|(&s, &p)| s as i32 - p as i32)
        .sum())
}

/// Net strokes over played holes.
pub fn net_total(course: &Course, player: &PlayerRoundScore) -> ScoringResult<i32> {
    player.validate_for(course)?;
    let strokes = allocate(player.handicap, course)?;
    Ok(player
        .hole_scores
        .iter()
        .zip(&strokes)
        .filter_map(|(&score, &s)| net_score(score, s))
        .sum())
}

/// Every stroke-play figure for one card, computed over played holes only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub player_id: PlayerId,
    pub gross: u32,
    pub net: i32,
    pub to_par: i32,
    pub net_to_par: i32,
    pub stableford: u32,
    pub holes_played: usize,
    /// Gross over holes 1-9.
    pub front_nine: u32,
    /// Gross over holes 10-18; `None` on courses of nine holes or fewer.
    /// Holes beyond 18 count toward `gross` but neither nine.
    pub back_nine: Option<u32>,
    pub is_complete: bool,
}

/// Summarize a card against `course`.
pub fn summarize_round(course: &Course, player: &PlayerRoundScore) -> ScoringResult<RoundSummary> {
    player.validate_for(course)?;
    let strokes = allocate(player.handicap, course)?;

    let mut summary = RoundSummary {
        player_id: player.player_id,
        gross: 0,
        net: 0,
        to_par: 0,
        net_to_par: 0,
        stableford: 0,
        holes_played: 0,
        front_nine: 0,
        back_nine: (course.hole_count() > 9).then_some(0),
        is_complete: player.is_complete(),
    };

    for ((hole, &score), &received) in course.holes().iter().zip(&player.hole_scores).zip(&strokes)
    {
        let Some(net) = net_score(score, received) else {
            continue;
        };
        summary.gross += score;
        summary.net += net;
        summary.to_par += score as i32 - hole.par as i32;
        summary.net_to_par += net - hole.par as i32;
        summary.stableford += points_for_net(net, hole.par);
        summary.holes_played += 1;
        match hole.number {
            1..=9 => summary.front_nine += score,
            10..=18 => {
                if let Some(back) = summary.back_nine.as_mut() {
                    *back += score;
                }
            },
            _ => {},
        }
    }

    tracing::debug!(
        player_id = summary.player_id,
        holes_played = summary.holes_played,
        gross = summary.gross,
        net = summary.net,
        stableford = summary.stableford,
        "Summarized round"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::ScoringError;
    use fairway_core::test_helpers::{
        STANDARD_PARS, nine_hole_course, par_card, partial_card, standard_course,
    };

    #[test]
    fn score_names() {
        assert_eq!(ScoreName::classify(2, 5), Some(ScoreName::AlbatrossOrBetter));
        assert_eq!(ScoreName::classify(1, 5), Some(ScoreName::AlbatrossOrBetter));
        assert_eq!(ScoreName::classify(3, 5), Some(ScoreName::Eagle));
        assert_eq!(ScoreName::classify(3, 4), Some(ScoreName::Birdie));
        assert_eq!(ScoreName::classify(3, 3), Some(ScoreName::Par));
        assert_eq!(ScoreName::classify(5, 4), Some(ScoreName::Bogey));
        assert_eq!(ScoreName::classify(6, 4), Some(ScoreName::DoubleBogey));
        assert_eq!(ScoreName::classify(9, 4), Some(ScoreName::TripleBogeyOrWorse));
        assert_eq!(ScoreName::classify(0, 4), None);
    }

    #[test]
    fn score_name_serializes_pascal_case() {
        let json = serde_json::to_string(&ScoreName::DoubleBogey).unwrap();
        assert_eq!(json, "\"DoubleBogey\"");
    }

    #[test]
    fn to_par_only_counts_played_holes() {
        let mut scores = STANDARD_PARS.to_vec();
        scores[0] += 1;
        scores[1] = 0;
        assert_eq!(score_to_par(&scores, &STANDARD_PARS).unwrap(), 1);
        assert!(score_to_par(&scores[..3], &STANDARD_PARS).is_err());
    }

    #[test]
    fn gross_ignores_zero_entries() {
        assert_eq!(gross_total(&[4, 0, 5]), 9);
        assert_eq!(gross_total(&[]), 0);
    }

    #[test]
    fn net_total_subtracts_allocated_strokes() {
        let course = standard_course();
        let card = par_card(1, 18.0, &course);
        assert_eq!(net_total(&course, &card).unwrap(), 72 - 18);
    }

    #[test]
    fn full_round_summary() {
        let course = standard_course();
        let card = par_card(3, 10.0, &course);
        let s = summarize_round(&course, &card).unwrap();
        assert_eq!(s.player_id, 3);
        assert_eq!(s.gross, 72);
        assert_eq!(s.net, 62);
        assert_eq!(s.to_par, 0);
        assert_eq!(s.net_to_par, -10);
        // 2 points everywhere, +1 on the 10 stroke holes
        assert_eq!(s.stableford, 46);
        assert_eq!(s.holes_played, 18);
        assert_eq!(s.front_nine, 36);
        assert_eq!(s.back_nine, Some(36));
        assert!(s.is_complete);
    }

    #[test]
    fn partial_round_summary() {
        let course = standard_course();
        // Holes 1-3: par 4, par 4, par 3 played in 5, 4, 2
        let card = partial_card(4, 0.0, &[5, 4, 2], &course);
        let s = summarize_round(&course, &card).unwrap();
        assert_eq!(s.gross, 11);
        assert_eq!(s.to_par, 0);
        assert_eq!(s.stableford, 1 + 2 + 3);
        assert_eq!(s.holes_played, 3);
        assert_eq!(s.back_nine, Some(0));
        assert!(!s.is_complete);
    }

    #[test]
    fn nine_hole_course_has_no_back_nine() {
        let course = nine_hole_course();
        let card = par_card(5, 0.0, &course);
        let s = summarize_round(&course, &card).unwrap();
        assert_eq!(s.front_nine, 36);
        assert_eq!(s.back_nine, None);
    }

    #[test]
    fn back_nine_stops_at_eighteen() {
        let pars = vec![4; 27];
        let stroke_indices: Vec<u32> = (1..=27).collect();
        let course = Course::from_parts("Twenty-seven", &pars, &stroke_indices).unwrap();
        let mut card = par_card(6, 0.0, &course);
        for hole in 18..27 {
            card.hole_scores[hole] = 5;
        }
        let s = summarize_round(&course, &card).unwrap();
        assert_eq!(s.front_nine, 36);
        assert_eq!(s.back_nine, Some(36));
        assert_eq!(s.gross, 36 + 36 + 45);
    }

    #[test]
    fn short_card_rejected() {
        let course = standard_course();
        let card = PlayerRoundScore::blank(1, 0.0, 9);
        assert!(matches!(
            summarize_round(&course, &card),
            Err(ScoringError::LengthMismatch { .. })
        ));
    }
}
