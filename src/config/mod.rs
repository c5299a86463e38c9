mod schema;
mod validation;

pub use schema::{Config, PageConfig, SiteConfig};
pub use validation::validate_config;

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::page::types::non_empty;
use crate::page::SeoConfig;
use crate::sitemap::SitemapItem;

/// Project-local config file, checked before the per-user one.
pub const LOCAL_CONFIG_FILE: &str = "seo-lens.yaml";

/// A configured page with its content loaded and schemas built.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub name: String,
    pub seo: SeoConfig,
}

/// Get the config directory path (~/.config/seo-lens/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("seo-lens"))
}

/// Pick the config file: an explicit path, else `./seo-lens.yaml` if it
/// exists, else `~/.config/seo-lens/config.yaml`.
pub fn resolve_config_path(path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = path {
        return Ok(path);
    }
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Ok(local);
    }
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Errors
///
/// Returns an error if:
/// - The config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = resolve_config_path(path)?;

    if !config_path.exists() {
        anyhow::bail!(
            "Config file not found at {}. Create ./{} or ~/.config/seo-lens/config.yaml",
            config_path.display(),
            LOCAL_CONFIG_FILE
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    tracing::debug!(path = %config_path.display(), pages = config.pages.len(), "Loaded config");
    Ok(config)
}

/// Turn configured pages into analyzable pages.
///
/// Reads each `content_file` (relative to `base_dir`) into `seo.content` and,
/// when a page has no inline `structured_data`, fills it from `schemas`.
pub fn resolve_pages(config: &Config, base_dir: &Path) -> Result<Vec<Page>> {
    config
        .pages
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let mut seo = page.seo.clone();

            if let Some(file) = &page.content_file {
                let path = base_dir.join(file);
                let content = fs::read_to_string(&path).with_context(|| {
                    format!(
                        "Failed to read content file for pages[{}] at {}",
                        i,
                        path.display()
                    )
                })?;
                seo.content = Some(content);
            }

            if !seo.has_structured_data() && !page.schemas.is_empty() {
                let mut built: Vec<Value> = page.schemas.iter().map(|s| s.build()).collect();
                seo.structured_data = Some(if built.len() == 1 {
                    built.remove(0)
                } else {
                    Value::Array(built)
                });
            }

            Ok(Page {
                name: page.display_name(i),
                seo,
            })
        })
        .collect()
}

/// Sitemap entries: the explicit `sitemap` list, or one entry per indexable
/// page that has a canonical URL or a slug.
pub fn sitemap_items(config: &Config, pages: &[Page]) -> Vec<SitemapItem> {
    if !config.sitemap.is_empty() {
        return config.sitemap.clone();
    }

    pages
        .iter()
        .filter(|page| !page.seo.noindex)
        .filter_map(|page| {
            let url = non_empty(&page.seo.canonical)
                .map(str::to_string)
                .or_else(|| {
                    non_empty(&page.seo.slug)
                        .map(|slug| format!("/{}", slug.trim_start_matches('/')))
                })?;
            Some(SitemapItem {
                url,
                ..Default::default()
            })
        })
        .collect()
}
