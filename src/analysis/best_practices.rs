use serde::{Deserialize, Serialize};

use super::metadata::{
    DESCRIPTION_MAX_LENGTH, DESCRIPTION_MIN_LENGTH, TITLE_MAX_LENGTH, TITLE_MIN_LENGTH,
};
use super::text::{char_len, contains_ignore_case};
use crate::page::types::non_empty;
use crate::page::SeoConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn weight(&self) -> u32 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Pass/fail result of one best-practice rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestPracticeCheck {
    pub id: String,
    pub name: String,
    pub passed: bool,
    pub message: String,
    pub priority: Priority,
}

impl BestPracticeCheck {
    fn new(
        id: &str,
        name: &str,
        passed: bool,
        message: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            passed,
            message: message.into(),
            priority,
        }
    }
}

/// Run the metadata checklist. Unlike the analysis engine this reports
/// passing checks too, so every rule shows up exactly once.
pub fn validate_best_practices(config: &SeoConfig) -> Vec<BestPracticeCheck> {
    let mut checks = Vec::new();
    let focus_keyword = non_empty(&config.focus_keyword);

    match config.title.as_deref().filter(|t| !t.trim().is_empty()) {
        None => checks.push(BestPracticeCheck::new(
            "title-missing",
            "Page Title",
            false,
            "Page title is required",
            Priority::High,
        )),
        Some(title) => {
            let length = char_len(title);
            checks.push(if length < TITLE_MIN_LENGTH {
                BestPracticeCheck::new(
                    "title-too-short",
                    "Title Length",
                    false,
                    format!(
                        "Title is too short ({} chars). Recommended: 30-60 characters.",
                        length
                    ),
                    Priority::High,
                )
            } else if length > TITLE_MAX_LENGTH {
                BestPracticeCheck::new(
                    "title-too-long",
                    "Title Length",
                    false,
                    format!("Title is too long ({} chars). Recommended: 30-60 characters.", length),
                    Priority::Medium,
                )
            } else {
                BestPracticeCheck::new(
                    "title-optimal",
                    "Title Length",
                    true,
                    format!("Title length is optimal ({} characters)", length),
                    Priority::High,
                )
            });

            if let Some(keyword) = focus_keyword {
                if !contains_ignore_case(title, keyword) {
                    checks.push(BestPracticeCheck::new(
                        "title-no-keyword",
                        "Title Keyword",
                        false,
                        "Focus keyword not found in title",
                        Priority::High,
                    ));
                }
            }
        }
    }

    match config.description.as_deref().filter(|d| !d.trim().is_empty()) {
        None => checks.push(BestPracticeCheck::new(
            "description-missing",
            "Meta Description",
            false,
            "Meta description is required",
            Priority::High,
        )),
        Some(description) => {
            let length = char_len(description);
            checks.push(if length < DESCRIPTION_MIN_LENGTH {
                BestPracticeCheck::new(
                    "description-too-short",
                    "Description Length",
                    false,
                    format!(
                        "Description is too short ({} chars). Recommended: 120-160 characters.",
                        length
                    ),
                    Priority::High,
                )
            } else if length > DESCRIPTION_MAX_LENGTH {
                BestPracticeCheck::new(
                    "description-too-long",
                    "Description Length",
                    false,
                    format!(
                        "Description is too long ({} chars). Recommended: 120-160 characters.",
                        length
                    ),
                    Priority::Medium,
                )
            } else {
                BestPracticeCheck::new(
                    "description-optimal",
                    "Description Length",
                    true,
                    format!("Description length is optimal ({} characters)", length),
                    Priority::High,
                )
            });

            if let Some(keyword) = focus_keyword {
                if !contains_ignore_case(description, keyword) {
                    checks.push(BestPracticeCheck::new(
                        "description-no-keyword",
                        "Description Keyword",
                        false,
                        "Focus keyword not found in meta description",
                        Priority::Medium,
                    ));
                }
            }
        }
    }

    checks.push(if non_empty(&config.canonical).is_some() {
        BestPracticeCheck::new(
            "canonical-present",
            "Canonical URL",
            true,
            "Canonical URL is set",
            Priority::Medium,
        )
    } else {
        BestPracticeCheck::new(
            "canonical-missing",
            "Canonical URL",
            false,
            "Canonical URL is recommended to prevent duplicate content",
            Priority::Medium,
        )
    });

    checks.push(if non_empty(&config.og_image).is_some() {
        BestPracticeCheck::new(
            "og-image-present",
            "Open Graph Image",
            true,
            "Open Graph image is set",
            Priority::Medium,
        )
    } else {
        BestPracticeCheck::new(
            "og-image-missing",
            "Open Graph Image",
            false,
            "Open Graph image is recommended for better social media sharing (1200x630px)",
            Priority::Medium,
        )
    });

    checks.push(if config.has_structured_data() {
        BestPracticeCheck::new(
            "structured-data-present",
            "Structured Data",
            true,
            "Structured data is present",
            Priority::Low,
        )
    } else {
        BestPracticeCheck::new(
            "structured-data-missing",
            "Structured Data",
            false,
            "Structured data (Schema.org) helps search engines understand your content",
            Priority::Low,
        )
    });

    checks.push(match focus_keyword {
        Some(keyword) => BestPracticeCheck::new(
            "focus-keyword-present",
            "Focus Keyword",
            true,
            format!("Focus keyword is set: \"{}\"", keyword),
            Priority::Medium,
        ),
        None => BestPracticeCheck::new(
            "focus-keyword-missing",
            "Focus Keyword",
            false,
            "Setting a focus keyword helps optimize content for specific search terms",
            Priority::Medium,
        ),
    });

    checks.push(if config.noindex {
        BestPracticeCheck::new(
            "noindex-set",
            "Indexing",
            false,
            "Page is set to noindex - search engines will not index this page",
            Priority::High,
        )
    } else {
        BestPracticeCheck::new(
            "indexable",
            "Indexing",
            true,
            "Page is indexable by search engines",
            Priority::High,
        )
    });

    checks
}

/// Weighted share of passed checks, 0-100. An empty list scores 0.
pub fn best_practices_score(checks: &[BestPracticeCheck]) -> u8 {
    let total: u32 = checks.iter().map(|c| c.priority.weight()).sum();
    if total == 0 {
        return 0;
    }
    let passed: u32 = checks
        .iter()
        .filter(|c| c.passed)
        .map(|c| c.priority.weight())
        .sum();
    (passed as f64 / total as f64 * 100.0).round() as u8
}
