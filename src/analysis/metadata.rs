use super::text::char_len;
use super::types::SeoIssue;
use crate::page::types::non_empty;
use crate::page::SeoConfig;

pub const TITLE_MIN_LENGTH: usize = 30;
pub const TITLE_MAX_LENGTH: usize = 60;
pub const DESCRIPTION_MIN_LENGTH: usize = 120;
pub const DESCRIPTION_MAX_LENGTH: usize = 160;

/// Check title presence, length and separator usage.
///
/// An empty or whitespace-only title yields only `title-empty`.
pub fn analyze_title(title: &str) -> Vec<SeoIssue> {
    let mut issues = Vec::new();

    if title.trim().is_empty() {
        issues.push(SeoIssue::error(
            "title-empty",
            "Title is empty",
            "Add a descriptive title (30-60 characters recommended)",
        ));
        return issues;
    }

    let length = char_len(title);
    if length < TITLE_MIN_LENGTH {
        issues.push(SeoIssue::warning(
            "title-too-short",
            format!(
                "Title is too short ({} characters). Aim for 30-60 characters.",
                length
            ),
            "Expand your title to be more descriptive",
        ));
    } else if length > TITLE_MAX_LENGTH {
        issues.push(SeoIssue::warning(
            "title-too-long",
            format!(
                "Title is too long ({} characters). Keep it under 60 characters.",
                length
            ),
            "Shorten your title to avoid truncation in search results",
        ));
    }

    if title.split('|').count() > 2 {
        issues.push(SeoIssue::warning(
            "title-too-many-separators",
            "Title has too many separators",
            "Use a single separator (|) in your title",
        ));
    }

    issues
}

/// Check meta description presence and length.
pub fn analyze_description(description: &str) -> Vec<SeoIssue> {
    let mut issues = Vec::new();

    if description.trim().is_empty() {
        issues.push(SeoIssue::error(
            "description-empty",
            "Meta description is empty",
            "Add a compelling meta description (120-160 characters recommended)",
        ));
        return issues;
    }

    let length = char_len(description);
    if length < DESCRIPTION_MIN_LENGTH {
        issues.push(SeoIssue::warning(
            "description-too-short",
            format!(
                "Meta description is too short ({} characters). Aim for 120-160 characters.",
                length
            ),
            "Expand your description to be more compelling and informative",
        ));
    } else if length > DESCRIPTION_MAX_LENGTH {
        issues.push(SeoIssue::warning(
            "description-too-long",
            format!(
                "Meta description is too long ({} characters). Keep it under 160 characters.",
                length
            ),
            "Shorten your description to avoid truncation in search results",
        ));
    }

    issues
}

pub fn check_canonical(config: &SeoConfig) -> Option<SeoIssue> {
    non_empty(&config.canonical).is_none().then(|| {
        SeoIssue::warning(
            "missing-canonical",
            "Missing canonical URL",
            "Add a canonical URL to prevent duplicate content issues",
        )
    })
}

pub fn check_og_image(config: &SeoConfig) -> Option<SeoIssue> {
    non_empty(&config.og_image).is_none().then(|| {
        SeoIssue::warning(
            "missing-og-image",
            "Missing Open Graph image",
            "Add an Open Graph image (recommended: 1200x630px) for better social media sharing",
        )
    })
}

pub fn check_structured_data(config: &SeoConfig) -> Option<SeoIssue> {
    (!config.has_structured_data()).then(|| {
        SeoIssue::warning(
            "missing-structured-data",
            "No structured data found",
            "Add structured data (Schema.org) to help search engines understand your content",
        )
    })
}
