use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::analysis::{
    best_practices_score, BestPracticeCheck, ScoreRating, SeoAnalysis, Severity,
};
use crate::config::Page;
use crate::page::types::non_empty;

/// A page with its analysis result for display
pub struct ScoredPage<'a> {
    pub page: &'a Page,
    pub analysis: SeoAnalysis,
}

impl ScoredPage<'_> {
    fn title(&self) -> &str {
        non_empty(&self.page.seo.title).unwrap_or("(no title)")
    }

    /// Slug or canonical URL, whichever identifies the page.
    fn location(&self) -> String {
        non_empty(&self.page.seo.slug)
            .map(|slug| format!("/{}", slug.trim_start_matches('/')))
            .or_else(|| non_empty(&self.page.seo.canonical).map(str::to_string))
            .unwrap_or_default()
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a 0-100 score, colored by its rating
pub fn format_score(score: u8, use_colors: bool) -> String {
    let text = score.to_string();
    if !use_colors {
        return text;
    }
    match ScoreRating::from_score(score) {
        ScoreRating::Good => text.green().bold().to_string(),
        ScoreRating::NeedsImprovement => text.yellow().bold().to_string(),
        ScoreRating::Poor => text.red().bold().to_string(),
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate title to fit available width, accounting for Unicode
fn truncate_title(title: &str, max_width: usize) -> String {
    let chars: Vec<char> = title.chars().collect();
    if chars.len() <= max_width {
        title.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format pages as scored table with columns: Index, Score, Title, Location
/// No headers. Score column is right-aligned, 3 chars wide (fits "100").
pub fn format_scored_table(pages: &[ScoredPage], use_colors: bool) -> String {
    if pages.is_empty() {
        return "No pages configured.".to_string();
    }

    let term_width = get_terminal_width();
    let index_width = 3;
    let score_width = 3;
    let separator = "  ";

    pages
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!("{:>width$}", scored.analysis.score, width = score_width);
            let location = scored.location();

            let fixed_width =
                index_width + 1 + score_width + separator.len() * 2 + location.chars().count();
            let title = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_title(scored.title(), width - fixed_width)
                }
                // Very narrow terminal
                Some(_) => truncate_title(scored.title(), 20),
                None => scored.title().to_string(),
            };

            if use_colors {
                let score_colored = match ScoreRating::from_score(scored.analysis.score) {
                    ScoreRating::Good => score_padded.green().bold().to_string(),
                    ScoreRating::NeedsImprovement => score_padded.yellow().bold().to_string(),
                    ScoreRating::Poor => score_padded.red().bold().to_string(),
                };
                format!(
                    "{} {}{}{}{}{}",
                    index_str.dimmed(),
                    score_colored,
                    separator,
                    title,
                    separator,
                    location.underline()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    index_str, score_padded, separator, title, separator, location
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format pages as tab-separated values for scripting
/// Columns: score, name, errors, warnings, title (no headers, no colors)
pub fn format_tsv(pages: &[ScoredPage]) -> String {
    pages
        .iter()
        .map(|scored| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                scored.analysis.score,
                scored.page.name,
                scored.analysis.count(Severity::Error),
                scored.analysis.count(Severity::Warning),
                scored.title()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn severity_marker(severity: Severity, use_colors: bool) -> String {
    // padded to the widest label so messages line up
    let marker = format!("{:<9}", format!("[{}]", severity.as_str()));
    if !use_colors {
        return marker;
    }
    match severity {
        Severity::Error => marker.red().to_string(),
        Severity::Warning => marker.yellow().to_string(),
        Severity::Good => marker.green().to_string(),
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Multi-line report for one page: score, issues, keyword and readability
/// blocks. `verbose` adds the per-group penalty breakdown.
pub fn format_analysis_detail(
    name: &str,
    analysis: &SeoAnalysis,
    use_colors: bool,
    verbose: bool,
) -> String {
    let rating = ScoreRating::from_score(analysis.score);
    let header = if use_colors {
        format!(
            "{}  {} ({})",
            name.bold(),
            format_score(analysis.score, true),
            rating.label()
        )
    } else {
        format!("{}  {} ({})", name, analysis.score, rating.label())
    };
    let mut lines = vec![header];

    if analysis.issues.is_empty() {
        lines.push("  No issues found.".to_string());
    } else {
        lines.push(format!(
            "  Issues: {} errors, {} warnings",
            analysis.count(Severity::Error),
            analysis.count(Severity::Warning)
        ));
        for issue in &analysis.issues {
            lines.push(format!(
                "  {} {}",
                severity_marker(issue.severity, use_colors),
                issue.message
            ));
            if let Some(fix) = &issue.fix {
                let fix_line = format!("Fix: {}", fix);
                if use_colors {
                    lines.push(format!("          {}", fix_line.dimmed()));
                } else {
                    lines.push(format!("          {}", fix_line));
                }
            }
        }
    }

    if let Some(keyword) = &analysis.keyword_analysis {
        lines.push(String::new());
        lines.push(format!("  Focus keyword: \"{}\"", keyword.focus_keyword));
        lines.push(format!(
            "    Density: {}% ({} occurrences)",
            keyword.keyword_density, keyword.keyword_count
        ));
        lines.push(format!(
            "    In title: {}  description: {}  url: {}  first paragraph: {}",
            yes_no(keyword.keyword_in_title),
            yes_no(keyword.keyword_in_description),
            yes_no(keyword.keyword_in_url),
            yes_no(keyword.keyword_in_first_paragraph)
        ));
    }

    if let Some(readability) = &analysis.readability {
        lines.push(String::new());
        lines.push(format!("  Readability: {}/100", readability.score));
        lines.push(format!(
            "    Flesch reading ease: {}",
            readability.flesch_reading_ease
        ));
        lines.push(format!(
            "    Sentences: {} (avg {} words)  Paragraphs: {}",
            readability.sentence_count,
            readability.average_sentence_length,
            readability.paragraph_count
        ));
    }

    if verbose {
        lines.push(String::new());
        lines.push(format!("  Breakdown (base {}):", analysis.breakdown.base_score));
        for penalty in &analysis.breakdown.penalties {
            lines.push(format!(
                "    {:<18} {}E {}W  {} -> {}",
                penalty.label, penalty.errors, penalty.warnings, penalty.before, penalty.after
            ));
        }
    }

    lines.join("\n")
}

/// One line per best-practice check, then the weighted score
pub fn format_best_practices(checks: &[BestPracticeCheck], use_colors: bool) -> String {
    let mut lines: Vec<String> = checks
        .iter()
        .map(|check| {
            let mark = match (check.passed, use_colors) {
                (true, true) => "PASS".green().to_string(),
                (true, false) => "PASS".to_string(),
                (false, true) => "FAIL".red().to_string(),
                (false, false) => "FAIL".to_string(),
            };
            format!(
                "{}  {:<20} {:<6} {}",
                mark,
                check.name,
                check.priority.as_str(),
                check.message
            )
        })
        .collect();

    let score = best_practices_score(checks);
    lines.push(String::new());
    lines.push(format!(
        "Best practices score: {}",
        format_score(score, use_colors)
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze, validate_best_practices, SeoIssue};
    use crate::page::SeoConfig;

    fn sample_page(title: Option<&str>, slug: Option<&str>) -> Page {
        Page {
            name: "home".to_string(),
            seo: SeoConfig {
                title: title.map(str::to_string),
                slug: slug.map(str::to_string),
                ..Default::default()
            },
        }
    }

    fn analysis_with_score(score: u8) -> SeoAnalysis {
        let mut analysis = analyze(&SeoConfig::default(), None);
        analysis.score = score;
        analysis
    }

    #[test]
    fn test_format_score_plain() {
        assert_eq!(format_score(87, false), "87");
        assert_eq!(format_score(0, false), "0");
    }

    #[test]
    fn test_format_score_colored_contains_value() {
        let colored = format_score(42, true);
        assert!(colored.contains("42"));
        assert_ne!(colored, "42");
    }

    #[test]
    fn test_truncate_title_short() {
        assert_eq!(truncate_title("Short title", 20), "Short title");
    }

    #[test]
    fn test_truncate_title_long() {
        assert_eq!(truncate_title("This is a very long title", 15), "This is a ve...");
    }

    #[test]
    fn test_truncate_title_very_narrow() {
        assert_eq!(truncate_title("Hello world", 3), "Hel");
    }

    #[test]
    fn test_format_scored_table_empty() {
        assert_eq!(format_scored_table(&[], false), "No pages configured.");
    }

    #[test]
    fn test_format_scored_table_multiple() {
        let home = sample_page(Some("Handmade widgets"), Some("home"));
        let about = sample_page(None, None);
        let scored = vec![
            ScoredPage {
                page: &home,
                analysis: analysis_with_score(35),
            },
            ScoredPage {
                page: &about,
                analysis: analysis_with_score(100),
            },
        ];
        let result = format_scored_table(&scored, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 1.  35"));
        assert!(lines[0].contains("Handmade widgets"));
        assert!(lines[0].ends_with("/home"));
        assert!(lines[1].starts_with(" 2. 100"));
        assert!(lines[1].contains("(no title)"));
    }

    #[test]
    fn test_format_tsv() {
        let home = sample_page(Some("Handmade widgets"), None);
        let analysis = analyze(&SeoConfig::default(), None);
        let errors = analysis.count(Severity::Error);
        let warnings = analysis.count(Severity::Warning);
        let score = analysis.score;
        let scored = vec![ScoredPage {
            page: &home,
            analysis,
        }];
        assert_eq!(
            format_tsv(&scored),
            format!("{}\thome\t{}\t{}\tHandmade widgets", score, errors, warnings)
        );
        assert_eq!(format_tsv(&[]), "");
    }

    #[test]
    fn test_format_analysis_detail() {
        let mut analysis = analysis_with_score(72);
        analysis.issues = vec![SeoIssue::warning(
            "title-too-short",
            "Title is too short (5 characters)",
            "Aim for 30-60 characters",
        )];
        let result = format_analysis_detail("home", &analysis, false, false);
        assert!(result.starts_with("home  72 (Needs improvement)"));
        assert!(result.contains("Issues: 0 errors, 1 warnings"));
        assert!(result.contains("[warning] Title is too short (5 characters)"));
        assert!(result.contains("Fix: Aim for 30-60 characters"));
        assert!(!result.contains("Breakdown"));

        let verbose = format_analysis_detail("home", &analysis, false, true);
        assert!(verbose.contains("Breakdown (base 100):"));
        assert!(verbose.contains("Title"));
    }

    #[test]
    fn test_format_analysis_detail_no_issues() {
        let mut analysis = analysis_with_score(100);
        analysis.issues.clear();
        let result = format_analysis_detail("home", &analysis, false, false);
        assert!(result.contains("No issues found."));
    }

    #[test]
    fn test_severity_marker_uses_severity_name() {
        assert_eq!(severity_marker(Severity::Error, false), "[error]  ");
        assert_eq!(severity_marker(Severity::Warning, false), "[warning]");
        assert_eq!(severity_marker(Severity::Good, false), "[good]   ");
        assert!(severity_marker(Severity::Error, true).contains("[error]"));
    }

    #[test]
    fn test_format_best_practices() {
        let checks = validate_best_practices(&SeoConfig::default());
        let result = format_best_practices(&checks, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), checks.len() + 2);
        assert!(lines[0].starts_with("FAIL  Page Title"));
        assert!(lines[0].contains("high"));
        assert!(result.contains("PASS  Indexing"));
        assert!(result.ends_with("Best practices score: 19"));
    }
}
