use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Good,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Good => "good",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// A single finding. `id` is stable for the same condition across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoIssue {
    pub id: String,
    pub message: String,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
}

impl SeoIssue {
    pub fn new(
        id: &str,
        severity: Severity,
        message: impl Into<String>,
        fix: impl Into<String>,
    ) -> Self {
        Self {
            id: id.to_string(),
            message: message.into(),
            severity,
            fix: Some(fix.into()),
        }
    }

    pub fn error(id: &str, message: impl Into<String>, fix: impl Into<String>) -> Self {
        Self::new(id, Severity::Error, message, fix)
    }

    pub fn warning(id: &str, message: impl Into<String>, fix: impl Into<String>) -> Self {
        Self::new(id, Severity::Warning, message, fix)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    pub focus_keyword: String,
    /// Percentage of body words, rounded to 2 decimals.
    pub keyword_density: f64,
    pub keyword_in_title: bool,
    pub keyword_in_description: bool,
    pub keyword_in_url: bool,
    pub keyword_in_first_paragraph: bool,
    pub keyword_in_content: bool,
    pub keyword_count: usize,
    pub issues: Vec<SeoIssue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityAnalysis {
    /// 0-100
    pub score: u8,
    pub issues: Vec<SeoIssue>,
    /// Rounded to 1 decimal.
    pub flesch_reading_ease: f64,
    /// Words per sentence, rounded to 1 decimal.
    pub average_sentence_length: f64,
    pub paragraph_count: usize,
    pub sentence_count: usize,
}

/// Penalty applied by one analyzer group during aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenaltyContribution {
    pub label: String,
    pub errors: usize,
    pub warnings: usize,
    pub before: i32,
    pub after: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub base_score: i32,
    pub penalties: Vec<PenaltyContribution>,
}

/// Result of one engine invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoAnalysis {
    /// 0-100
    pub score: u8,
    /// Every analyzer's issues, in analyzer invocation order.
    pub issues: Vec<SeoIssue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readability: Option<ReadabilityAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword_analysis: Option<KeywordAnalysis>,
    pub breakdown: ScoreBreakdown,
}

impl SeoAnalysis {
    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    pub fn has_issue(&self, id: &str) -> bool {
        self.issues.iter().any(|i| i.id == id)
    }
}
