use serde::{Deserialize, Serialize};

use crate::error::{ScoringError, ScoringResult, check_len};

/// A single hole on a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hole {
    /// 1-based hole number.
    pub number: u32,
    pub par: u32,
    /// Difficulty ranking, 1 = hardest. Drives handicap stroke allocation.
    pub stroke_index: u32,
    /// Length in yards; informational only.
    #[serde(default)]
    pub distance: u32,
}

/// Unvalidated course as it arrives from storage.
#[derive(Debug, Clone, Deserialize)]
struct CourseData {
    #[serde(default)]
    name: String,
    holes: Vec<Hole>,
}

/// A validated course definition.
///
/// Holes are numbered 1..=N in order and their stroke indices form a
/// permutation of 1..=N. Both are checked on construction and on
/// deserialization, so every `Course` in hand satisfies them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CourseData")]
pub struct Course {
    name: String,
    holes: Vec<Hole>,
}

impl TryFrom<CourseData> for Course {
    type Error = ScoringError;

    fn try_from(data: CourseData) -> Result<Self, Self::Error> {
        Course::new(data.name, data.holes)
    }
}

impl Course {
    pub fn new(name: impl Into<String>, holes: Vec<Hole>) -> ScoringResult<Self> {
        validate_holes(&holes)?;
        Ok(Self {
            name: name.into(),
            holes,
        })
    }

    /// Build a course from parallel par / stroke-index arrays.
    pub fn from_parts(
        name: impl Into<String>,
        pars: &[u32],
        stroke_indices: &[u32],
    ) -> ScoringResult<Self> {
        check_len("stroke indices", pars.len(), stroke_indices.len())?;
        let holes = pars
            .iter()
            .zip(stroke_indices)
            .enumerate()
            .map(|(i, (&par, &stroke_index))| Hole {
                number: i as u32 + 1,
                par,
                stroke_index,
                distance: 0,
            })
            .collect();
        Self::new(name, holes)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    pub fn pars(&self) -> Vec<u32> {
        self.holes.iter().map(|h| h.par).collect()
    }

    pub fn stroke_indices(&self) -> Vec<u32> {
        self.holes.iter().map(|h| h.stroke_index).collect()
    }

    pub fn total_par(&self) -> u32 {
        self.holes.iter().map(|h| h.par).sum()
    }
}

/// Check hole numbering, pars, and that stroke indices are a permutation
/// of 1..=N.
pub fn validate_holes(holes: &[Hole]) -> ScoringResult<()> {
    if holes.is_empty() {
        return Err(ScoringError::EmptyCourse);
    }
    let count = holes.len() as u32;
    let mut seen = vec![false; holes.len()];
    for (i, hole) in holes.iter().enumerate() {
        let expected = i as u32 + 1;
        if hole.number != expected {
            return Err(ScoringError::HoleNumber {
                expected,
                actual: hole.number,
            });
        }
        if hole.par == 0 {
            return Err(ScoringError::InvalidPar {
                hole: hole.number,
                par: hole.par,
            });
        }
        if hole.stroke_index == 0 || hole.stroke_index > count {
            return Err(ScoringError::InvalidStrokeIndex(hole.stroke_index));
        }
        let slot = &mut seen[(hole.stroke_index - 1) as usize];
        if *slot {
            return Err(ScoringError::DuplicateStrokeIndex(hole.stroke_index));
        }
        *slot = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nine_hole_parts() -> (Vec<u32>, Vec<u32>) {
        (
            vec![4, 4, 3, 5, 4, 4, 3, 4, 5],
            vec![7, 3, 9, 1, 5, 4, 8, 2, 6],
        )
    }

    #[test]
    fn from_parts_numbers_holes_in_order() {
        let (pars, si) = nine_hole_parts();
        let course = Course::from_parts("Nine", &pars, &si).unwrap();
        assert_eq!(course.hole_count(), 9);
        assert_eq!(course.total_par(), 36);
        assert_eq!(course.holes()[3].number, 4);
        assert_eq!(course.holes()[3].stroke_index, 1);
        assert_eq!(course.pars(), pars);
        assert_eq!(course.stroke_indices(), si);
    }

    #[test]
    fn empty_course_rejected() {
        assert_eq!(
            Course::from_parts("Empty", &[], &[]),
            Err(ScoringError::EmptyCourse)
        );
    }

    #[test]
    fn mismatched_parts_rejected() {
        let err = Course::from_parts("Bad", &[4, 4, 3], &[1, 2]).unwrap_err();
        assert!(matches!(err, ScoringError::LengthMismatch { .. }));
    }

    #[test]
    fn duplicate_stroke_index_rejected() {
        let err = Course::from_parts("Dup", &[4, 4, 3], &[1, 1, 2]).unwrap_err();
        assert_eq!(err, ScoringError::DuplicateStrokeIndex(1));
    }

    #[test]
    fn out_of_range_stroke_index_rejected() {
        assert_eq!(
            Course::from_parts("Range", &[4, 4, 3], &[1, 2, 4]).unwrap_err(),
            ScoringError::InvalidStrokeIndex(4)
        );
        assert_eq!(
            Course::from_parts("Zero", &[4, 4, 3], &[0, 1, 2]).unwrap_err(),
            ScoringError::InvalidStrokeIndex(0)
        );
    }

    #[test]
    fn zero_par_rejected() {
        assert_eq!(
            Course::from_parts("Par", &[4, 0], &[1, 2]).unwrap_err(),
            ScoringError::InvalidPar { hole: 2, par: 0 }
        );
    }

    #[test]
    fn out_of_order_holes_rejected() {
        let holes = vec![
            Hole {
                number: 2,
                par: 4,
                stroke_index: 1,
                distance: 380,
            },
            Hole {
                number: 1,
                par: 3,
                stroke_index: 2,
                distance: 160,
            },
        ];
        assert_eq!(
            Course::new("Swapped", holes).unwrap_err(),
            ScoringError::HoleNumber {
                expected: 1,
                actual: 2
            }
        );
    }

    #[test]
    fn deserialization_validates() {
        let good = r#"{"name":"Pitch","holes":[
            {"number":1,"par":3,"stroke_index":2},
            {"number":2,"par":3,"stroke_index":1,"distance":120}]}"#;
        let course: Course = serde_json::from_str(good).unwrap();
        assert_eq!(course.name(), "Pitch");
        assert_eq!(course.holes()[0].distance, 0);

        let dup = r#"{"name":"Pitch","holes":[
            {"number":1,"par":3,"stroke_index":1},
            {"number":2,"par":3,"stroke_index":1}]}"#;
        assert!(serde_json::from_str::<Course>(dup).is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn any_permutation_is_accepted(
                si in Just((1u32..=18).collect::<Vec<_>>()).prop_shuffle()
            ) {
                let pars = vec![4u32; 18];
                let course = Course::from_parts("Shuffled", &pars, &si);
                prop_assert!(course.is_ok());
            }
        }
    }
}
