use serde::{Deserialize, Serialize};

use crate::page::types::non_empty;

/// One `User-agent` group of a robots.txt file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RobotsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allow: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disallow: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crawl_delay: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sitemap: Vec<String>,
}

/// Render robots.txt. Sitemap lines from every group are collected into a
/// single trailing block.
pub fn generate_robots_txt(configs: &[RobotsConfig]) -> String {
    let mut blocks: Vec<String> = configs
        .iter()
        .map(|cfg| {
            let mut lines = vec![format!(
                "User-agent: {}",
                non_empty(&cfg.user_agent).unwrap_or("*")
            )];
            lines.extend(cfg.allow.iter().map(|path| format!("Allow: {}", path)));
            lines.extend(cfg.disallow.iter().map(|path| format!("Disallow: {}", path)));
            if let Some(delay) = cfg.crawl_delay {
                lines.push(format!("Crawl-delay: {}", delay));
            }
            lines.join("\n")
        })
        .collect();

    let sitemaps: Vec<String> = configs
        .iter()
        .flat_map(|cfg| cfg.sitemap.iter())
        .map(|url| format!("Sitemap: {}", url))
        .collect();
    if !sitemaps.is_empty() {
        blocks.push(sitemaps.join("\n"));
    }

    blocks.join("\n\n")
}
