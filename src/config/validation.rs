use std::collections::HashSet;
use url::Url;

use super::schema::Config;
use crate::page::types::non_empty;

/// Validate the project configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(url) = config.site.as_ref().and_then(|site| non_empty(&site.url)) {
        if let Err(e) = check_http_url(url) {
            errors.push(format!("site.url: invalid '{}' - {}", url, e));
        }
    }

    let mut seen = HashSet::new();
    for (i, page) in config.pages.iter().enumerate() {
        if let Some(canonical) = non_empty(&page.seo.canonical) {
            if let Err(e) = check_http_url(canonical) {
                errors.push(format!(
                    "pages[{}].seo.canonical: invalid '{}' - {}",
                    i, canonical, e
                ));
            }
        }

        let name = page.display_name(i);
        if !seen.insert(name.clone()) {
            errors.push(format!("pages[{}].name: duplicate page name '{}'", i, name));
        }
    }

    for (i, item) in config.sitemap.iter().enumerate() {
        if item.url.trim().is_empty() {
            errors.push(format!("sitemap[{}].url: must not be empty", i));
        }
        if let Some(priority) = item.priority {
            if !(0.0..=1.0).contains(&priority) {
                errors.push(format!(
                    "sitemap[{}].priority: {} is outside 0.0-1.0",
                    i, priority
                ));
            }
        }
    }

    for (i, group) in config.robots.iter().enumerate() {
        if let Some(delay) = group.crawl_delay {
            if delay.is_nan() || delay < 0.0 {
                errors.push(format!("robots[{}].crawl_delay: must be non-negative", i));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_http_url(value: &str) -> Result<(), String> {
    let url = Url::parse(value).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("unsupported scheme '{}'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{PageConfig, SiteConfig};
    use crate::page::SeoConfig;
    use crate::robots::RobotsConfig;
    use crate::sitemap::SitemapItem;

    fn page(name: &str, canonical: Option<&str>) -> PageConfig {
        PageConfig {
            name: Some(name.to_string()),
            seo: SeoConfig {
                canonical: canonical.map(str::to_string),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_config() {
        let config = Config {
            site: Some(SiteConfig {
                url: Some("https://acme.test".to_string()),
                ..Default::default()
            }),
            pages: vec![
                page("home", Some("https://acme.test/")),
                page("about", None),
            ],
            sitemap: vec![SitemapItem {
                url: "/".to_string(),
                priority: Some(1.0),
                ..Default::default()
            }],
            robots: vec![RobotsConfig {
                crawl_delay: Some(0.0),
                ..Default::default()
            }],
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_bad_urls() {
        let config = Config {
            site: Some(SiteConfig {
                url: Some("acme.test".to_string()),
                ..Default::default()
            }),
            pages: vec![page("home", Some("ftp://acme.test/"))],
            ..Default::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("site.url"));
        assert!(errors[1].contains("unsupported scheme 'ftp'"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = Config {
            pages: vec![page("home", None), page("home", None)],
            sitemap: vec![SitemapItem {
                url: " ".to_string(),
                priority: Some(1.5),
                ..Default::default()
            }],
            robots: vec![RobotsConfig {
                crawl_delay: Some(-1.0),
                ..Default::default()
            }],
            ..Default::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "pages[1].name: duplicate page name 'home'".to_string(),
                "sitemap[0].url: must not be empty".to_string(),
                "sitemap[0].priority: 1.5 is outside 0.0-1.0".to_string(),
                "robots[0].crawl_delay: must be non-negative".to_string(),
            ]
        );
    }
}
