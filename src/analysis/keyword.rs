use super::text::{
    char_len, contains_ignore_case, count_ignore_case, first_paragraph, hyphenate, round_half_up,
    word_count,
};
use super::types::{KeywordAnalysis, SeoIssue};
use crate::page::types::non_empty;
use crate::page::SeoConfig;

pub const DENSITY_MIN_PERCENT: f64 = 0.5;
pub const DENSITY_MAX_PERCENT: f64 = 2.5;
pub const MIN_OCCURRENCES: usize = 3;
/// Content shorter than this (in chars) is not expected to repeat the keyword.
pub const OCCURRENCE_CHECK_MIN_CHARS: usize = 200;

/// Analyze placement and density of `focus_keyword`.
///
/// Issues are ordered title, description, url, first paragraph, density,
/// occurrence count. A zero count on non-empty content raises both
/// `keyword-density-too-low` and `keyword-not-found`.
pub fn analyze_keyword(config: &SeoConfig, focus_keyword: &str, content: &str) -> KeywordAnalysis {
    let mut issues = Vec::new();

    let keyword_count = count_ignore_case(content, focus_keyword);
    let words = word_count(content);
    let keyword_density = if words > 0 {
        keyword_count as f64 / words as f64 * 100.0
    } else {
        0.0
    };
    tracing::trace!(keyword_count, words, keyword_density, "keyword occurrences");

    let keyword_in_title =
        contains_ignore_case(config.title.as_deref().unwrap_or_default(), focus_keyword);
    if !keyword_in_title {
        issues.push(SeoIssue::error(
            "keyword-not-in-title",
            format!("Focus keyword \"{}\" not found in title", focus_keyword),
            "Include your focus keyword in the title",
        ));
    }

    let keyword_in_description = contains_ignore_case(
        config.description.as_deref().unwrap_or_default(),
        focus_keyword,
    );
    if !keyword_in_description {
        issues.push(SeoIssue::warning(
            "keyword-not-in-description",
            format!(
                "Focus keyword \"{}\" not found in meta description",
                focus_keyword
            ),
            "Include your focus keyword in the meta description",
        ));
    }

    let slug = config.slug.as_deref().unwrap_or_default();
    let keyword_in_url = contains_ignore_case(slug, &hyphenate(focus_keyword));
    if !keyword_in_url && non_empty(&config.slug).is_some() {
        issues.push(SeoIssue::warning(
            "keyword-not-in-url",
            format!("Focus keyword \"{}\" not found in URL", focus_keyword),
            "Include your focus keyword in the URL slug",
        ));
    }

    let keyword_in_first_paragraph = contains_ignore_case(first_paragraph(content), focus_keyword);
    if !keyword_in_first_paragraph && !content.is_empty() {
        issues.push(SeoIssue::warning(
            "keyword-not-in-first-paragraph",
            format!(
                "Focus keyword \"{}\" not found in first paragraph",
                focus_keyword
            ),
            "Include your focus keyword in the first paragraph of your content",
        ));
    }

    if keyword_density < DENSITY_MIN_PERCENT {
        issues.push(SeoIssue::warning(
            "keyword-density-too-low",
            format!(
                "Keyword density is too low ({:.2}%). Aim for 0.5-2.5%.",
                keyword_density
            ),
            "Use your focus keyword more naturally throughout the content",
        ));
    } else if keyword_density > DENSITY_MAX_PERCENT {
        issues.push(SeoIssue::error(
            "keyword-density-too-high",
            format!(
                "Keyword density is too high ({:.2}%). Keep it under 2.5% to avoid keyword stuffing.",
                keyword_density
            ),
            "Reduce keyword usage to make content more natural",
        ));
    }

    if keyword_count == 0 && !content.is_empty() {
        issues.push(SeoIssue::error(
            "keyword-not-found",
            format!("Focus keyword \"{}\" not found in content", focus_keyword),
            "Use your focus keyword in the content",
        ));
    } else if keyword_count < MIN_OCCURRENCES && char_len(content) > OCCURRENCE_CHECK_MIN_CHARS {
        issues.push(SeoIssue::warning(
            "keyword-count-low",
            format!(
                "Focus keyword appears only {} time(s). Use it more naturally.",
                keyword_count
            ),
            "Use your focus keyword a few more times throughout the content",
        ));
    }

    KeywordAnalysis {
        focus_keyword: focus_keyword.to_string(),
        keyword_density: round_half_up(keyword_density, 2),
        keyword_in_title,
        keyword_in_description,
        keyword_in_url,
        keyword_in_first_paragraph,
        keyword_in_content: keyword_count > 0,
        keyword_count,
        issues,
    }
}
