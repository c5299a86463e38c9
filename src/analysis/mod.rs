pub mod best_practices;
pub mod engine;
pub mod keyword;
pub mod metadata;
pub mod rating;
pub mod readability;
pub mod text;
pub mod types;

pub use best_practices::{
    best_practices_score, validate_best_practices, BestPracticeCheck, Priority,
};
pub use engine::{analyze, analyze_page, PenaltyWeights, METADATA_WEIGHTS, READABILITY_WEIGHTS};
pub use keyword::analyze_keyword;
pub use metadata::{analyze_description, analyze_title};
pub use rating::ScoreRating;
pub use readability::analyze_readability;
pub use types::*;
