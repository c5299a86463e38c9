use serde::{Deserialize, Serialize};

use super::head::ResolvedHead;
use super::types::{non_empty, HeadDefaults, SeoConfig};

/// Framework metadata object (Next.js App Router `Metadata` shape).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<Author>>,
    pub robots: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternates: Option<Alternates>,
    pub open_graph: OpenGraph,
    pub twitter: Twitter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternates {
    pub canonical: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<OgImage>>,
    #[serde(rename = "type")]
    pub og_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OgImage {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Twitter {
    pub card: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
}

/// Map a page config onto the framework metadata object.
pub fn generate_metadata(config: &SeoConfig, defaults: &HeadDefaults) -> PageMetadata {
    let head = ResolvedHead::resolve(config, defaults);

    PageMetadata {
        keywords: (!config.keywords.is_empty()).then(|| config.keywords.clone()),
        authors: non_empty(&config.author).map(|name| {
            vec![Author {
                name: name.to_string(),
            }]
        }),
        robots: head.robots,
        alternates: (!head.canonical.is_empty()).then(|| Alternates {
            canonical: head.canonical.clone(),
        }),
        open_graph: OpenGraph {
            title: head.og_title,
            description: head.og_description,
            url: head.og_url,
            site_name: head.site_name,
            images: (!head.og_image.is_empty()).then(|| {
                vec![OgImage {
                    url: head.og_image.clone(),
                }]
            }),
            og_type: head.og_type,
        },
        twitter: Twitter {
            card: head.twitter_card,
            title: head.twitter_title,
            description: head.twitter_description,
            images: (!head.twitter_image.is_empty()).then(|| vec![head.twitter_image.clone()]),
            site: non_empty(&config.twitter_site).map(str::to_string),
            creator: non_empty(&config.twitter_creator).map(str::to_string),
        },
        title: head.title,
        description: head.description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_metadata() {
        let metadata = generate_metadata(&SeoConfig::default(), &HeadDefaults::default());
        assert_eq!(metadata.title, "My Website");
        assert!(metadata.keywords.is_none());
        assert!(metadata.authors.is_none());
        assert!(metadata.alternates.is_none());
        assert!(metadata.open_graph.images.is_none());
        assert_eq!(metadata.open_graph.og_type, "website");
        assert!(metadata.twitter.site.is_none());
    }

    #[test]
    fn test_metadata_serializes_camel_case() {
        let config = SeoConfig {
            title: Some("Widgets".to_string()),
            author: Some("Jo".to_string()),
            canonical: Some("https://acme.test/widgets".to_string()),
            og_image: Some("https://acme.test/og.png".to_string()),
            og_site_name: Some("Acme".to_string()),
            ..Default::default()
        };
        let metadata = generate_metadata(&config, &HeadDefaults::default());
        let json = serde_json::to_value(&metadata).unwrap();

        assert_eq!(json["openGraph"]["siteName"], "Acme");
        assert_eq!(json["openGraph"]["type"], "website");
        assert_eq!(json["openGraph"]["images"][0]["url"], "https://acme.test/og.png");
        assert_eq!(json["alternates"]["canonical"], "https://acme.test/widgets");
        assert_eq!(json["authors"][0]["name"], "Jo");
        assert_eq!(json["twitter"]["images"][0], "https://acme.test/og.png");
        assert!(json.get("keywords").is_none());
    }
}
