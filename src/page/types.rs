use serde::{Deserialize, Serialize};
use serde_json::Value;

/// SEO metadata for a single page.
///
/// Every field is optional. An absent field is a valid state and means
/// "missing", never an error. Empty strings are treated the same as absent
/// values by the analysis engine and the head renderer.
///
/// Example YAML:
/// ```yaml
/// title: "Handmade widgets for every workshop | Acme"
/// description: "Browse our catalogue of handmade widgets..."
/// canonical: "https://acme.test/widgets"
/// og_image: "https://acme.test/og/widgets.png"
/// focus_keyword: "widgets"
/// slug: "handmade-widgets"
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SeoConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,

    /// Explicit robots directive. Overrides `noindex`/`nofollow` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robots: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_site_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_card: Option<TwitterCard>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_site: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_creator: Option<String>,

    /// JSON-LD payload: a single object or an array of objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<Value>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub noindex: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub nofollow: bool,

    /// The single search term this page should rank for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_keyword: Option<String>,

    /// Page body text (markdown or plain text).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// URL path segment of the page, e.g. `handmade-widgets`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl SeoConfig {
    /// Structured data counts as present unless it is absent or JSON `null`.
    pub fn has_structured_data(&self) -> bool {
        matches!(&self.structured_data, Some(value) if !value.is_null())
    }
}

/// Twitter card type.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCard {
    Summary,
    #[default]
    SummaryLargeImage,
    App,
    Player,
}

impl TwitterCard {
    pub fn as_str(&self) -> &'static str {
        match self {
            TwitterCard::Summary => "summary",
            TwitterCard::SummaryLargeImage => "summary_large_image",
            TwitterCard::App => "app",
            TwitterCard::Player => "player",
        }
    }
}

/// Site-wide fallbacks used when a page leaves a head field unset.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadDefaults {
    pub default_title: String,
    pub default_description: String,
    pub site_name: String,
    pub site_url: String,
}

impl Default for HeadDefaults {
    fn default() -> Self {
        Self {
            default_title: "My Website".to_string(),
            default_description: "Welcome to my website".to_string(),
            site_name: "My Website".to_string(),
            site_url: String::new(),
        }
    }
}

/// Return the value only when it is set and non-empty.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_config_parse() {
        let config: SeoConfig = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, SeoConfig::default());
        assert!(!config.noindex);
        assert!(config.keywords.is_empty());
    }

    #[test]
    fn test_partial_config_parse() {
        let yaml = r#"
title: "Handmade widgets"
focus_keyword: "widgets"
keywords: ["widgets", "handmade"]
twitter_card: summary
noindex: true
"#;
        let config: SeoConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.title.as_deref(), Some("Handmade widgets"));
        assert_eq!(config.focus_keyword.as_deref(), Some("widgets"));
        assert_eq!(config.keywords.len(), 2);
        assert_eq!(config.twitter_card, Some(TwitterCard::Summary));
        assert!(config.noindex);
        assert!(config.description.is_none());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<SeoConfig, _> = serde_saphyr::from_str("titel: typo");
        assert!(result.is_err());
    }

    #[test]
    fn test_structured_data_presence() {
        let mut config = SeoConfig::default();
        assert!(!config.has_structured_data());

        config.structured_data = Some(Value::Null);
        assert!(!config.has_structured_data());

        config.structured_data = Some(json!({}));
        assert!(config.has_structured_data());

        config.structured_data = Some(json!([]));
        assert!(config.has_structured_data());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(&None), None);
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&Some("x".to_string())), Some("x"));
    }

    #[test]
    fn test_twitter_card_as_str() {
        assert_eq!(TwitterCard::default().as_str(), "summary_large_image");
        assert_eq!(TwitterCard::Player.as_str(), "player");
    }
}
