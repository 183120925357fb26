pub mod config;
pub mod course;
pub mod error;
pub mod player;

pub use config::{MatchPointsConfig, ScoringConfig};
pub use course::{Course, Hole};
pub use error::{ScoringError, ScoringResult};
pub use player::{MAX_HANDICAP, PlayerId, PlayerRoundScore, Team, TeamId, check_handicap};

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::course::{Course, Hole};
    use crate::player::{PlayerId, PlayerRoundScore, Team, TeamId};

    /// Pars for the standard par-72 test course.
    pub const STANDARD_PARS: [u32; 18] = [4, 4, 3, 5, 4, 4, 3, 4, 5, 4, 3, 5, 4, 4, 3, 4, 4, 5];

    /// Stroke indices for the standard test course: odd indices on the
    /// front nine, even on the back.
    pub const STANDARD_STROKE_INDICES: [u32; 18] =
        [7, 15, 11, 1, 13, 5, 17, 3, 9, 8, 16, 2, 12, 6, 18, 4, 14, 10];

    const STANDARD_DISTANCES: [u32; 18] = [
        392, 371, 168, 521, 405, 433, 152, 447, 538, 410, 185, 560, 398, 441, 171, 452, 389, 547,
    ];

    /// An 18-hole, par-72 course with a valid stroke-index permutation.
    pub fn standard_course() -> Course {
        let holes = (0..18)
            .map(|i| Hole {
                number: i as u32 + 1,
                par: STANDARD_PARS[i],
                stroke_index: STANDARD_STROKE_INDICES[i],
                distance: STANDARD_DISTANCES[i],
            })
            .collect();
        Course::new("Standard Links", holes).expect("standard course must be valid")
    }

    /// A nine-hole par-36 course.
    pub fn nine_hole_course() -> Course {
        Course::from_parts(
            "Short Nine",
            &[4, 4, 3, 5, 4, 4, 3, 4, 5],
            &[7, 3, 9, 1, 5, 4, 8, 2, 6],
        )
        .expect("nine-hole course must be valid")
    }

    /// Card that scores exactly par on every hole of `course`.
    pub fn par_card(player_id: PlayerId, handicap: f64, course: &Course) -> PlayerRoundScore {
        PlayerRoundScore::new(player_id, handicap, course.pars())
    }

    /// Card with `scores` on the first holes and the rest ungraded.
    pub fn partial_card(
        player_id: PlayerId,
        handicap: f64,
        scores: &[u32],
        course: &Course,
    ) -> PlayerRoundScore {
        let mut hole_scores = vec![0; course.hole_count()];
        hole_scores[..scores.len()].copy_from_slice(scores);
        PlayerRoundScore::new(player_id, handicap, hole_scores)
    }

    /// Team named after its id.
    pub fn make_team(id: TeamId, players: Vec<PlayerRoundScore>) -> Team {
        Team::new(id, format!("Team{id}"), players)
    }
}
