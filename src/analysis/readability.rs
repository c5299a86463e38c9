use super::text::{char_len, has_subheadings, paragraphs, round_half_up, sentences, words};
use super::types::{ReadabilityAnalysis, SeoIssue};

pub const LONG_SENTENCE_WORDS: f64 = 20.0;
pub const SHORT_SENTENCE_WORDS: f64 = 10.0;
pub const LONG_PARAGRAPH_WORDS: f64 = 150.0;
pub const MIN_CONTENT_WORDS: usize = 300;

/// Word count above which short average sentences are flagged.
const SHORT_SENTENCE_MIN_WORDS: usize = 100;

/// Rough syllable estimate: one per three chars, at least one.
fn estimate_syllables(word: &str) -> usize {
    (char_len(word) / 3).max(1)
}

/// Simplified Flesch Reading Ease using the word-length syllable proxy.
/// Returns 0 when there are no sentences or no words.
pub fn flesch_reading_ease(words: &[&str], sentence_count: usize) -> f64 {
    if sentence_count == 0 || words.is_empty() {
        return 0.0;
    }
    let average_sentence_length = words.len() as f64 / sentence_count as f64;
    let syllables: usize = words.iter().map(|w| estimate_syllables(w)).sum();
    let average_syllables_per_word = syllables as f64 / words.len() as f64;

    206.835 - 1.015 * average_sentence_length - 84.6 * average_syllables_per_word
}

/// Score body text on sentence, paragraph and overall length plus Flesch ease.
///
/// Starts at 100 and deducts per finding; the result is clamped to 0-100.
pub fn analyze_readability(content: &str) -> ReadabilityAnalysis {
    let mut issues = Vec::new();

    let sentence_count = sentences(content).len();
    let words = words(content);
    let word_count = words.len();
    let paragraph_count = paragraphs(content).len();

    let average_sentence_length = if sentence_count > 0 {
        word_count as f64 / sentence_count as f64
    } else {
        0.0
    };
    let average_words_per_paragraph = if paragraph_count > 0 {
        word_count as f64 / paragraph_count as f64
    } else {
        0.0
    };
    let flesch = flesch_reading_ease(&words, sentence_count);
    tracing::trace!(
        sentence_count,
        word_count,
        paragraph_count,
        flesch,
        "readability metrics"
    );

    let mut score: i32 = 100;

    if average_sentence_length > LONG_SENTENCE_WORDS {
        issues.push(SeoIssue::warning(
            "sentence-too-long",
            format!(
                "Average sentence length is {:.1} words. Aim for 15-20 words.",
                average_sentence_length
            ),
            "Break up long sentences into shorter, clearer ones",
        ));
        score -= 10;
    } else if average_sentence_length < SHORT_SENTENCE_WORDS
        && word_count > SHORT_SENTENCE_MIN_WORDS
    {
        issues.push(SeoIssue::warning(
            "sentence-too-short",
            format!(
                "Average sentence length is {:.1} words. Vary sentence length for better flow.",
                average_sentence_length
            ),
            "Combine some short sentences for better readability",
        ));
        score -= 5;
    }

    if average_words_per_paragraph > LONG_PARAGRAPH_WORDS {
        issues.push(SeoIssue::warning(
            "paragraph-too-long",
            format!(
                "Average paragraph length is {:.0} words. Aim for 100-150 words.",
                average_words_per_paragraph
            ),
            "Break up long paragraphs into shorter ones",
        ));
        score -= 10;
    }

    if flesch < 30.0 {
        issues.push(SeoIssue::error(
            "readability-very-difficult",
            format!(
                "Content is very difficult to read (Flesch score: {:.1}). Aim for 60-70.",
                flesch
            ),
            "Simplify your language and use shorter sentences",
        ));
        score -= 20;
    } else if flesch < 50.0 {
        issues.push(SeoIssue::warning(
            "readability-difficult",
            format!(
                "Content is difficult to read (Flesch score: {:.1}). Aim for 60-70.",
                flesch
            ),
            "Simplify your language and use shorter sentences",
        ));
        score -= 10;
    }

    if word_count > MIN_CONTENT_WORDS && !has_subheadings(content) {
        issues.push(SeoIssue::warning(
            "no-subheadings",
            "No subheadings found. Use H2-H6 tags to structure your content.",
            "Add subheadings to break up your content and improve readability",
        ));
        score -= 5;
    }

    if word_count < MIN_CONTENT_WORDS {
        issues.push(SeoIssue::warning(
            "content-too-short",
            format!(
                "Content is too short ({} words). Aim for at least 300 words for better SEO.",
                word_count
            ),
            "Expand your content to provide more value to readers",
        ));
        score -= 10;
    }

    ReadabilityAnalysis {
        score: score.clamp(0, 100) as u8,
        issues,
        flesch_reading_ease: round_half_up(flesch, 1),
        average_sentence_length: round_half_up(average_sentence_length, 1),
        paragraph_count,
        sentence_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Severity;

    fn ids(analysis: &ReadabilityAnalysis) -> Vec<&str> {
        analysis.issues.iter().map(|i| i.id.as_str()).collect()
    }

    /// Ten short words per sentence; every word estimates to one syllable.
    const TEN_WORD_SENTENCE: &str = "The cat sat on the mat and ate its food.";

    fn repeat_sentences(count: usize) -> String {
        vec![TEN_WORD_SENTENCE; count].join(" ")
    }

    #[test]
    fn test_short_content() {
        let content = repeat_sentences(5);
        let analysis = analyze_readability(&content);

        assert_eq!(analysis.sentence_count, 5);
        assert_eq!(analysis.paragraph_count, 1);
        assert_eq!(analysis.average_sentence_length, 10.0);
        assert_eq!(ids(&analysis), vec!["content-too-short"]);
        assert_eq!(analysis.score, 90);
        assert!(analysis.issues[0].message.contains("(50 words)"));
    }

    #[test]
    fn test_flesch_for_simple_text() {
        // ASL 10, ASW 1.0: 206.835 - 10.15 - 84.6 = 112.085
        let content = repeat_sentences(5);
        let analysis = analyze_readability(&content);
        assert_eq!(analysis.flesch_reading_ease, 112.1);
    }

    #[test]
    fn test_long_content_without_headings() {
        let content = repeat_sentences(31);
        let analysis = analyze_readability(&content);
        assert_eq!(ids(&analysis), vec!["paragraph-too-long", "no-subheadings"]);
        assert_eq!(analysis.score, 85);
    }

    #[test]
    fn test_long_content_with_headings() {
        let section = repeat_sentences(10);
        let content = format!(
            "## One\n\n{}\n\n## Two\n\n{}\n\n## Three\n\n{}\n\n{}",
            section, section, section, section
        );
        let analysis = analyze_readability(&content);
        assert!(ids(&analysis).is_empty(), "unexpected issues: {:?}", ids(&analysis));
        assert_eq!(analysis.score, 100);
    }

    #[test]
    fn test_long_sentences() {
        let sentence = vec!["word"; 25].join(" ");
        let content = format!("{}.", sentence);
        let analysis = analyze_readability(&content);
        assert_eq!(analysis.average_sentence_length, 25.0);
        assert_eq!(ids(&analysis)[0], "sentence-too-long");
    }

    #[test]
    fn test_short_sentences_on_long_content() {
        let content = vec!["Go now."; 60].join(" ");
        let analysis = analyze_readability(&content);
        assert_eq!(analysis.average_sentence_length, 2.0);
        assert!(ids(&analysis).contains(&"sentence-too-short"));
    }

    #[test]
    fn test_difficult_text() {
        // 12-char words estimate to 4 syllables each
        let sentence = vec!["extraordinar"; 15].join(" ");
        let content = format!("{}.", sentence);
        let analysis = analyze_readability(&content);
        assert!(analysis.flesch_reading_ease < 30.0);
        let issue = &analysis.issues[0];
        assert_eq!(issue.id, "readability-very-difficult");
        assert_eq!(issue.severity, Severity::Error);
    }

    #[test]
    fn test_moderately_difficult_text() {
        // 6-char words estimate to 2 syllables, 5-char words to 1.
        // Per sentence: 9 two-syllable words and one one-syllable word.
        // ASL 10, ASW 1.9: 206.835 - 10.15 - 160.74 = 35.945
        let sentence = "people people people people people people people people happy happy.";
        let content = vec![sentence; 3].join(" ");
        let analysis = analyze_readability(&content);
        assert_eq!(analysis.flesch_reading_ease, 35.9);
        let issue = analysis
            .issues
            .iter()
            .find(|i| i.id == "readability-difficult")
            .unwrap();
        assert_eq!(issue.severity, Severity::Warning);
    }

    #[test]
    fn test_whitespace_only_content() {
        let analysis = analyze_readability("   \n\n  ");
        assert_eq!(analysis.sentence_count, 0);
        assert_eq!(analysis.paragraph_count, 0);
        assert_eq!(analysis.flesch_reading_ease, 0.0);
        assert_eq!(analysis.average_sentence_length, 0.0);
        assert_eq!(
            ids(&analysis),
            vec!["readability-very-difficult", "content-too-short"]
        );
        assert_eq!(analysis.score, 70);
    }

    #[test]
    fn test_stacked_deductions() {
        // one 400-word sentence: long sentence, long paragraph, very difficult, no headings
        let sentence = vec!["extraordinarily"; 400].join(" ");
        let analysis = analyze_readability(&sentence);
        assert_eq!(analysis.issues.len(), 4);
        assert_eq!(analysis.score, 55);
    }

    #[test]
    fn test_negative_flesch() {
        let sentence = vec!["incomprehensibilities"; 40].join(" ");
        let analysis = analyze_readability(&format!("{}.", sentence));
        // ASL 40, ASW 7: 206.835 - 40.6 - 592.2 = -425.965
        assert_eq!(analysis.flesch_reading_ease, -426.0);
    }
}
