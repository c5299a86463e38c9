use serde::{Deserialize, Serialize};

/// Coarse bucket for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRating {
    Good,
    NeedsImprovement,
    Poor,
}

impl ScoreRating {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            ScoreRating::Good
        } else if score >= 50 {
            ScoreRating::NeedsImprovement
        } else {
            ScoreRating::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreRating::Good => "Good",
            ScoreRating::NeedsImprovement => "Needs improvement",
            ScoreRating::Poor => "Poor",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ScoreRating::Good => "green",
            ScoreRating::NeedsImprovement => "orange",
            ScoreRating::Poor => "red",
        }
    }
}
