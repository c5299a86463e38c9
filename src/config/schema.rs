use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::page::types::non_empty;
use crate::page::{HeadDefaults, SeoConfig};
use crate::robots::RobotsConfig;
use crate::sitemap::SitemapItem;
use crate::structured_data::{OrganizationSchema, SchemaBlock};

/// Project configuration file.
///
/// Example YAML:
/// ```yaml
/// site:
///   name: "Acme"
///   url: "https://acme.test"
/// pages:
///   - name: home
///     content_file: home.md
///     seo:
///       title: "Handmade widgets for every workshop | Acme"
///       focus_keyword: "widgets"
/// robots:
///   - disallow: ["/admin/"]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub site: Option<SiteConfig>,

    #[serde(default)]
    pub pages: Vec<PageConfig>,

    /// Explicit sitemap entries. When empty, entries are derived from `pages`.
    #[serde(default)]
    pub sitemap: Vec<SitemapItem>,

    #[serde(default)]
    pub robots: Vec<RobotsConfig>,
}

impl Config {
    pub fn head_defaults(&self) -> HeadDefaults {
        self.site
            .as_ref()
            .map(SiteConfig::head_defaults)
            .unwrap_or_default()
    }

    /// Site base URL, or "" when not configured.
    pub fn site_url(&self) -> &str {
        self.site
            .as_ref()
            .and_then(|site| non_empty(&site.url))
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    /// Title used for pages that set none (falls back to `name`)
    #[serde(default)]
    pub default_title: Option<String>,

    #[serde(default)]
    pub default_description: Option<String>,

    /// Search URL template with a `{search_term_string}` placeholder
    #[serde(default)]
    pub search_url: Option<String>,

    #[serde(default)]
    pub organization: Option<OrganizationSchema>,
}

impl SiteConfig {
    pub fn head_defaults(&self) -> HeadDefaults {
        let fallback = HeadDefaults::default();
        let site_name = non_empty(&self.name)
            .map(str::to_string)
            .unwrap_or(fallback.site_name);
        HeadDefaults {
            default_title: non_empty(&self.default_title)
                .map(str::to_string)
                .unwrap_or_else(|| site_name.clone()),
            default_description: non_empty(&self.default_description)
                .map(str::to_string)
                .unwrap_or(fallback.default_description),
            site_name,
            site_url: non_empty(&self.url).unwrap_or("").to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    #[serde(default)]
    pub name: Option<String>,

    /// Body text file, relative to the config file's directory
    #[serde(default)]
    pub content_file: Option<PathBuf>,

    #[serde(default)]
    pub schemas: Vec<SchemaBlock>,

    #[serde(default)]
    pub seo: SeoConfig,
}

impl PageConfig {
    /// Name shown in listings: explicit name, then slug, then title, then
    /// `page-N` (1-based).
    pub fn display_name(&self, index: usize) -> String {
        non_empty(&self.name)
            .or_else(|| non_empty(&self.seo.slug))
            .or_else(|| non_empty(&self.seo.title))
            .map(str::to_string)
            .unwrap_or_else(|| format!("page-{}", index + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_fallbacks() {
        let mut page = PageConfig::default();
        assert_eq!(page.display_name(2), "page-3");

        page.seo.title = Some("Widgets".to_string());
        assert_eq!(page.display_name(0), "Widgets");

        page.seo.slug = Some("widgets".to_string());
        assert_eq!(page.display_name(0), "widgets");

        page.name = Some(String::new());
        assert_eq!(page.display_name(0), "widgets");

        page.name = Some("home".to_string());
        assert_eq!(page.display_name(0), "home");
    }

    #[test]
    fn test_head_defaults_from_site() {
        let site = SiteConfig {
            name: Some("Acme".to_string()),
            url: Some("https://acme.test".to_string()),
            ..Default::default()
        };
        let defaults = site.head_defaults();
        assert_eq!(defaults.site_name, "Acme");
        assert_eq!(defaults.default_title, "Acme");
        assert_eq!(defaults.default_description, "Welcome to my website");
        assert_eq!(defaults.site_url, "https://acme.test");
    }

    #[test]
    fn test_head_defaults_without_site() {
        let config = Config::default();
        assert_eq!(config.head_defaults(), HeadDefaults::default());
        assert_eq!(config.site_url(), "");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<Config, _> = serde_saphyr::from_str("pages: []\nqueries: []\n");
        assert!(result.is_err());
    }
}
