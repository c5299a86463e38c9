pub mod file;
pub mod formatter;

pub use file::save_text;
pub use formatter::{
    format_analysis_detail, format_best_practices, format_score, format_scored_table,
    format_tsv, should_use_colors, ScoredPage,
};
