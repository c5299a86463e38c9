use super::keyword::analyze_keyword;
use super::metadata::{
    analyze_description, analyze_title, check_canonical, check_og_image, check_structured_data,
};
use super::readability::analyze_readability;
use super::types::{PenaltyContribution, ScoreBreakdown, SeoAnalysis, SeoIssue, Severity};
use crate::page::types::non_empty;
use crate::page::SeoConfig;

const BASE_SCORE: i32 = 100;

/// Points deducted per issue of each severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PenaltyWeights {
    pub error: i32,
    pub warning: i32,
}

/// Title, description, presence and keyword groups.
pub const METADATA_WEIGHTS: PenaltyWeights = PenaltyWeights {
    error: 10,
    warning: 5,
};

/// Readability is a rougher heuristic and weighs less.
pub const READABILITY_WEIGHTS: PenaltyWeights = PenaltyWeights {
    error: 5,
    warning: 2,
};

impl PenaltyWeights {
    pub fn penalty(&self, severity: Severity) -> i32 {
        match severity {
            Severity::Error => self.error,
            Severity::Warning => self.warning,
            Severity::Good => 0,
        }
    }
}

/// Running score plus the merged issue list, fed one analyzer group at a time.
struct Aggregator {
    score: i32,
    issues: Vec<SeoIssue>,
    penalties: Vec<PenaltyContribution>,
}

impl Aggregator {
    fn new() -> Self {
        Self {
            score: BASE_SCORE,
            issues: Vec::new(),
            penalties: Vec::new(),
        }
    }

    fn apply(&mut self, label: &str, issues: Vec<SeoIssue>, weights: PenaltyWeights) {
        let before = self.score;
        let penalty: i32 = issues.iter().map(|i| weights.penalty(i.severity)).sum();
        self.score -= penalty;

        let count = |severity: Severity| issues.iter().filter(|i| i.severity == severity).count();
        let contribution = PenaltyContribution {
            label: label.to_string(),
            errors: count(Severity::Error),
            warnings: count(Severity::Warning),
            before,
            after: self.score,
        };
        tracing::debug!(
            group = label,
            errors = contribution.errors,
            warnings = contribution.warnings,
            score = self.score,
            "applied analyzer penalties"
        );

        self.penalties.push(contribution);
        self.issues.extend(issues);
    }

    fn finish(self) -> (u8, Vec<SeoIssue>, ScoreBreakdown) {
        let score = self.score.clamp(0, 100) as u8;
        let breakdown = ScoreBreakdown {
            base_score: BASE_SCORE,
            penalties: self.penalties,
        };
        (score, self.issues, breakdown)
    }
}

/// Score a page's SEO configuration and optional body text.
///
/// Total over its input: every field may be absent and `content` may be
/// `None` or empty. `readability` is only produced for non-empty content and
/// `keyword_analysis` only for a non-empty focus keyword. `config.content` is
/// not consulted; use [`analyze_page`] for that.
pub fn analyze(config: &SeoConfig, content: Option<&str>) -> SeoAnalysis {
    let content = content.filter(|c| !c.is_empty());
    let mut aggregator = Aggregator::new();

    aggregator.apply(
        "Title",
        analyze_title(config.title.as_deref().unwrap_or_default()),
        METADATA_WEIGHTS,
    );
    aggregator.apply(
        "Description",
        analyze_description(config.description.as_deref().unwrap_or_default()),
        METADATA_WEIGHTS,
    );
    aggregator.apply(
        "Canonical URL",
        check_canonical(config).into_iter().collect(),
        METADATA_WEIGHTS,
    );
    aggregator.apply(
        "Open Graph image",
        check_og_image(config).into_iter().collect(),
        METADATA_WEIGHTS,
    );
    aggregator.apply(
        "Structured data",
        check_structured_data(config).into_iter().collect(),
        METADATA_WEIGHTS,
    );

    let keyword_analysis = match non_empty(&config.focus_keyword) {
        Some(keyword) => {
            let analysis = analyze_keyword(config, keyword, content.unwrap_or_default());
            aggregator.apply("Focus keyword", analysis.issues.clone(), METADATA_WEIGHTS);
            Some(analysis)
        }
        None => {
            aggregator.apply(
                "Focus keyword",
                vec![SeoIssue::warning(
                    "no-focus-keyword",
                    "No focus keyword set",
                    "Set a focus keyword to optimize your content for specific search terms",
                )],
                METADATA_WEIGHTS,
            );
            None
        }
    };

    let readability = content.map(|text| {
        let analysis = analyze_readability(text);
        aggregator.apply("Readability", analysis.issues.clone(), READABILITY_WEIGHTS);
        analysis
    });

    let (score, issues, breakdown) = aggregator.finish();
    tracing::debug!(score, issues = issues.len(), "seo analysis complete");

    SeoAnalysis {
        score,
        issues,
        readability,
        keyword_analysis,
        breakdown,
    }
}

/// Analyze a config using its own `content` field as the body text.
pub fn analyze_page(config: &SeoConfig) -> SeoAnalysis {
    analyze(config, config.content.as_deref())
}
