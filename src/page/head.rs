use html_escape::{encode_double_quoted_attribute, encode_text};
use serde_json::Value;

use super::types::{non_empty, HeadDefaults, SeoConfig};

/// Head fields after applying every fallback chain.
///
/// Shared by the HTML tag renderer and the metadata object builder so both
/// always agree on which value wins.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedHead {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub robots: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub og_type: String,
    pub og_url: String,
    pub site_name: String,
    pub twitter_card: String,
    pub twitter_title: String,
    pub twitter_description: String,
    pub twitter_image: String,
}

impl ResolvedHead {
    pub fn resolve(config: &SeoConfig, defaults: &HeadDefaults) -> Self {
        let title = non_empty(&config.title)
            .unwrap_or(&defaults.default_title)
            .to_string();
        let description = non_empty(&config.description)
            .unwrap_or(&defaults.default_description)
            .to_string();
        let canonical = non_empty(&config.canonical).unwrap_or_default().to_string();
        let robots = match non_empty(&config.robots) {
            Some(robots) => robots.to_string(),
            None => robots_directive(config.noindex, config.nofollow),
        };

        let og_title = non_empty(&config.og_title).unwrap_or(&title).to_string();
        let og_description = non_empty(&config.og_description)
            .unwrap_or(&description)
            .to_string();
        let og_image = non_empty(&config.og_image).unwrap_or_default().to_string();
        let og_type = non_empty(&config.og_type).unwrap_or("website").to_string();
        let og_url = non_empty(&config.og_url).unwrap_or(&canonical).to_string();
        let site_name = non_empty(&config.og_site_name)
            .unwrap_or(&defaults.site_name)
            .to_string();

        let twitter_card = config.twitter_card.unwrap_or_default().as_str().to_string();
        let twitter_title = non_empty(&config.twitter_title)
            .unwrap_or(&og_title)
            .to_string();
        let twitter_description = non_empty(&config.twitter_description)
            .unwrap_or(&og_description)
            .to_string();
        let twitter_image = non_empty(&config.twitter_image)
            .unwrap_or(&og_image)
            .to_string();

        Self {
            title,
            description,
            canonical,
            robots,
            og_title,
            og_description,
            og_image,
            og_type,
            og_url,
            site_name,
            twitter_card,
            twitter_title,
            twitter_description,
            twitter_image,
        }
    }
}

/// Build the robots directive from the indexing flags.
pub fn robots_directive(noindex: bool, nofollow: bool) -> String {
    format!(
        "{},{}",
        if noindex { "noindex" } else { "index" },
        if nofollow { "nofollow" } else { "follow" }
    )
}

fn meta_name(name: &str, content: &str) -> String {
    format!(
        r#"<meta name="{}" content="{}" />"#,
        name,
        encode_double_quoted_attribute(content)
    )
}

fn meta_property(property: &str, content: &str) -> String {
    format!(
        r#"<meta property="{}" content="{}" />"#,
        property,
        encode_double_quoted_attribute(content)
    )
}

/// Render the full set of head tags for a page, one tag per line.
pub fn render_head_tags(config: &SeoConfig, defaults: &HeadDefaults) -> String {
    let head = ResolvedHead::resolve(config, defaults);
    let mut tags = Vec::new();

    tags.push(format!("<title>{}</title>", encode_text(&head.title)));
    tags.push(meta_name("description", &head.description));
    if !config.keywords.is_empty() {
        tags.push(meta_name("keywords", &config.keywords.join(", ")));
    }
    if let Some(author) = non_empty(&config.author) {
        tags.push(meta_name("author", author));
    }
    tags.push(meta_name("robots", &head.robots));
    if !head.canonical.is_empty() {
        tags.push(format!(
            r#"<link rel="canonical" href="{}" />"#,
            encode_double_quoted_attribute(&head.canonical)
        ));
    }

    tags.push(meta_property("og:title", &head.og_title));
    tags.push(meta_property("og:description", &head.og_description));
    if !head.og_image.is_empty() {
        tags.push(meta_property("og:image", &head.og_image));
    }
    tags.push(meta_property("og:type", &head.og_type));
    if !head.og_url.is_empty() {
        tags.push(meta_property("og:url", &head.og_url));
    }
    if !head.site_name.is_empty() {
        tags.push(meta_property("og:site_name", &head.site_name));
    }

    tags.push(meta_name("twitter:card", &head.twitter_card));
    tags.push(meta_name("twitter:title", &head.twitter_title));
    tags.push(meta_name("twitter:description", &head.twitter_description));
    if !head.twitter_image.is_empty() {
        tags.push(meta_name("twitter:image", &head.twitter_image));
    }
    if let Some(site) = non_empty(&config.twitter_site) {
        tags.push(meta_name("twitter:site", site));
    }
    if let Some(creator) = non_empty(&config.twitter_creator) {
        tags.push(meta_name("twitter:creator", creator));
    }

    if let Some(data) = config.structured_data.as_ref().filter(|v| !v.is_null()) {
        tags.push(structured_data_script(data));
    }

    tags.join("\n")
}

/// Render a JSON-LD `<script>` tag.
///
/// `</` inside the payload is written as `<\/` so string values can never
/// close the script element.
pub fn structured_data_script(data: &Value) -> String {
    let json = data.to_string().replace("</", "<\\/");
    format!(r#"<script type="application/ld+json">{}</script>"#, json)
}
