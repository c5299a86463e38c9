//! XML sitemap and sitemap index generation.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use quick_xml::escape::escape;
use serde::{Deserialize, Serialize};

use crate::page::types::non_empty;

const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const DEFAULT_PRIORITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    #[default]
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SitemapItem {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_frequency: Option<ChangeFrequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
}

pub fn generate_sitemap(items: &[SitemapItem], base_url: &str) -> String {
    generate_sitemap_at(items, base_url, Utc::now())
}

/// Same as [`generate_sitemap`] with an explicit clock. Items without a
/// usable `last_modified` get `now` as their lastmod.
pub fn generate_sitemap_at(items: &[SitemapItem], base_url: &str, now: DateTime<Utc>) -> String {
    let mut lines = vec![
        XML_DECLARATION.to_string(),
        format!(r#"<urlset xmlns="{}">"#, SITEMAP_NAMESPACE),
    ];

    for item in items {
        let loc = if item.url.starts_with("http") {
            item.url.clone()
        } else {
            format!("{}{}", base_url, item.url)
        };
        let lastmod = non_empty(&item.last_modified)
            .map(|raw| {
                parse_last_modified(raw).unwrap_or_else(|| {
                    tracing::warn!(
                        url = %item.url,
                        value = raw,
                        "Unparseable last_modified, using current time"
                    );
                    now
                })
            })
            .unwrap_or(now);
        let changefreq = item.change_frequency.unwrap_or_default();
        let priority = item.priority.unwrap_or(DEFAULT_PRIORITY);

        lines.push("  <url>".to_string());
        lines.push(format!("    <loc>{}</loc>", escape(loc.as_str())));
        lines.push(format!("    <lastmod>{}</lastmod>", format_timestamp(lastmod)));
        lines.push(format!("    <changefreq>{}</changefreq>", changefreq.as_str()));
        lines.push(format!("    <priority>{}</priority>", priority));
        lines.push("  </url>".to_string());
    }

    lines.push("</urlset>".to_string());
    lines.join("\n")
}

pub fn generate_sitemap_index(sitemap_urls: &[String]) -> String {
    generate_sitemap_index_at(sitemap_urls, Utc::now())
}

pub fn generate_sitemap_index_at(sitemap_urls: &[String], now: DateTime<Utc>) -> String {
    let lastmod = format_timestamp(now);
    let mut lines = vec![
        XML_DECLARATION.to_string(),
        format!(r#"<sitemapindex xmlns="{}">"#, SITEMAP_NAMESPACE),
    ];

    for url in sitemap_urls {
        lines.push("  <sitemap>".to_string());
        lines.push(format!("    <loc>{}</loc>", escape(url.as_str())));
        lines.push(format!("    <lastmod>{}</lastmod>", lastmod));
        lines.push("  </sitemap>".to_string());
    }

    lines.push("</sitemapindex>".to_string());
    lines.join("\n")
}

/// Accepts RFC 3339, a bare `YYYY-MM-DDTHH:MM:SS` (read as UTC) or a date.
fn parse_last_modified(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    date.and_hms_opt(0, 0, 0)
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::escape::resolve_xml_entity;
    use quick_xml::events::Event;
    use quick_xml::Reader;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    /// Parse the document and collect the text of every element named `tag`.
    fn texts_of(xml: &str, tag: &str) -> Vec<String> {
        let mut reader = Reader::from_str(xml);
        let mut current: Option<String> = None;
        let mut out = Vec::new();
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) if e.name().as_ref() == tag.as_bytes() => {
                    current = Some(String::new())
                }
                Event::End(e) if e.name().as_ref() == tag.as_bytes() => {
                    out.extend(current.take());
                }
                Event::Text(t) => {
                    if let Some(buf) = current.as_mut() {
                        buf.push_str(&t.decode().unwrap());
                    }
                }
                Event::GeneralRef(r) => {
                    if let Some(buf) = current.as_mut() {
                        let name = r.decode().unwrap();
                        buf.push_str(resolve_xml_entity(&name).unwrap());
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }
        out
    }

    #[test]
    fn test_defaults_and_base_url() {
        let items = vec![SitemapItem {
            url: "/about".to_string(),
            ..Default::default()
        }];
        let xml = generate_sitemap_at(&items, "https://acme.test", fixed_now());

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#));
        assert_eq!(texts_of(&xml, "loc"), vec!["https://acme.test/about"]);
        assert_eq!(texts_of(&xml, "lastmod"), vec!["2024-03-01T12:00:00.000Z"]);
        assert_eq!(texts_of(&xml, "changefreq"), vec!["weekly"]);
        assert_eq!(texts_of(&xml, "priority"), vec!["0.5"]);
        assert!(xml.ends_with("</urlset>"));
    }

    #[test]
    fn test_exact_layout() {
        let items = vec![SitemapItem {
            url: "https://other.test/".to_string(),
            last_modified: Some("2024-01-15".to_string()),
            change_frequency: Some(ChangeFrequency::Daily),
            priority: Some(1.0),
        }];
        let xml = generate_sitemap_at(&items, "https://acme.test", fixed_now());
        let expected = [
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
            "  <url>",
            "    <loc>https://other.test/</loc>",
            "    <lastmod>2024-01-15T00:00:00.000Z</lastmod>",
            "    <changefreq>daily</changefreq>",
            "    <priority>1</priority>",
            "  </url>",
            "</urlset>",
        ]
        .join("\n");
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_loc_is_escaped() {
        let items = vec![SitemapItem {
            url: "/search?a=1&b=<2>".to_string(),
            priority: Some(0.8),
            ..Default::default()
        }];
        let xml = generate_sitemap_at(&items, "https://acme.test", fixed_now());
        assert!(xml.contains("<loc>https://acme.test/search?a=1&amp;b=&lt;2&gt;</loc>"));
        assert_eq!(texts_of(&xml, "loc"), vec!["https://acme.test/search?a=1&b=<2>"]);
        assert_eq!(texts_of(&xml, "priority"), vec!["0.8"]);
    }

    #[test]
    fn test_last_modified_formats() {
        let items: Vec<SitemapItem> = [
            "2024-01-15T10:30:00+02:00",
            "2024-01-15T10:30:00",
            "not a date",
            "",
        ]
        .iter()
        .map(|d| SitemapItem {
            url: "/".to_string(),
            last_modified: Some(d.to_string()),
            ..Default::default()
        })
        .collect();
        let xml = generate_sitemap_at(&items, "https://acme.test", fixed_now());
        assert_eq!(
            texts_of(&xml, "lastmod"),
            vec![
                "2024-01-15T08:30:00.000Z",
                "2024-01-15T10:30:00.000Z",
                "2024-03-01T12:00:00.000Z",
                "2024-03-01T12:00:00.000Z",
            ]
        );
    }

    #[test]
    fn test_empty_sitemap_is_well_formed() {
        let xml = generate_sitemap_at(&[], "https://acme.test", fixed_now());
        assert!(texts_of(&xml, "loc").is_empty());
        assert_eq!(xml.lines().count(), 3);
    }

    #[test]
    fn test_sitemap_index() {
        let urls = vec![
            "https://acme.test/sitemap-posts.xml".to_string(),
            "https://acme.test/sitemap-pages.xml".to_string(),
        ];
        let xml = generate_sitemap_index_at(&urls, fixed_now());
        assert!(xml.contains(
            r#"<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#
        ));
        assert_eq!(texts_of(&xml, "loc"), urls);
        assert_eq!(
            texts_of(&xml, "lastmod"),
            vec!["2024-03-01T12:00:00.000Z", "2024-03-01T12:00:00.000Z"]
        );
    }

    #[test]
    fn test_change_frequency_from_yaml() {
        let yaml = "url: /blog\nchange_frequency: monthly\npriority: 0.7\n";
        let item: SitemapItem = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(item.change_frequency, Some(ChangeFrequency::Monthly));
        assert_eq!(item.priority, Some(0.7));
    }
}
