//! JSON-LD (Schema.org) builders.
//!
//! Optional inputs that are absent or empty are left out of the output
//! object entirely.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::page::types::non_empty;

const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OrganizationSchema {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub same_as: Vec<String>,
    #[serde(default)]
    pub contact_point: Option<ContactPoint>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ContactPoint {
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub contact_type: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A single image URL or a list of them.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ImageRef {
    One(String),
    Many(Vec<String>),
}

impl ImageRef {
    fn to_list(&self) -> Vec<String> {
        match self {
            ImageRef::One(url) => vec![url.clone()],
            ImageRef::Many(urls) => urls.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ArticleSchema {
    pub headline: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub date_published: Option<String>,
    #[serde(default)]
    pub date_modified: Option<String>,
    #[serde(default)]
    pub author: Option<ArticleAuthor>,
    #[serde(default)]
    pub publisher: Option<OrganizationSchema>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ArticleAuthor {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BreadcrumbSchema {
    pub items: Vec<BreadcrumbItem>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BreadcrumbItem {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProductSchema {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub offers: Option<ProductOffer>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProductOffer {
    pub price: String,
    pub price_currency: String,
    #[serde(default)]
    pub availability: Option<String>,
}

/// One structured-data block as written in the project config.
///
/// Example YAML:
/// ```yaml
/// schemas:
///   - article:
///       headline: "How we build widgets"
///       author: { name: "Jo" }
///   - breadcrumb:
///       items:
///         - { name: "Home", url: "https://acme.test/" }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SchemaBlock {
    Organization(OrganizationSchema),
    Article(ArticleSchema),
    Breadcrumb(BreadcrumbSchema),
    Product(ProductSchema),
    Website {
        name: String,
        url: String,
        #[serde(default)]
        search_url: Option<String>,
    },
}

impl SchemaBlock {
    pub fn build(&self) -> Value {
        match self {
            SchemaBlock::Organization(org) => organization(org),
            SchemaBlock::Article(article_schema) => article(article_schema),
            SchemaBlock::Breadcrumb(trail) => breadcrumb(trail),
            SchemaBlock::Product(product_schema) => product(product_schema),
            SchemaBlock::Website {
                name,
                url,
                search_url,
            } => website(name, url, search_url.as_deref()),
        }
    }
}

fn base(schema_type: &str) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("@context".to_string(), json!(SCHEMA_CONTEXT));
    map.insert("@type".to_string(), json!(schema_type));
    map
}

fn insert_opt(map: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(value) = non_empty(value) {
        map.insert(key.to_string(), json!(value));
    }
}

pub fn organization(org: &OrganizationSchema) -> Value {
    let mut map = base("Organization");
    map.insert("name".to_string(), json!(org.name));
    insert_opt(&mut map, "url", &org.url);
    insert_opt(&mut map, "logo", &org.logo);
    if !org.same_as.is_empty() {
        map.insert("sameAs".to_string(), json!(org.same_as));
    }
    if let Some(contact) = &org.contact_point {
        let mut point = Map::new();
        point.insert("@type".to_string(), json!("ContactPoint"));
        insert_opt(&mut point, "telephone", &contact.telephone);
        insert_opt(&mut point, "contactType", &contact.contact_type);
        insert_opt(&mut point, "email", &contact.email);
        map.insert("contactPoint".to_string(), Value::Object(point));
    }
    Value::Object(map)
}

pub fn article(article: &ArticleSchema) -> Value {
    let mut map = base("Article");
    map.insert("headline".to_string(), json!(article.headline));
    insert_opt(&mut map, "description", &article.description);
    if let Some(image) = &article.image {
        map.insert("image".to_string(), json!(image.to_list()));
    }
    insert_opt(&mut map, "datePublished", &article.date_published);
    insert_opt(&mut map, "dateModified", &article.date_modified);
    if let Some(author) = &article.author {
        let mut person = Map::new();
        person.insert("@type".to_string(), json!("Person"));
        person.insert("name".to_string(), json!(author.name));
        insert_opt(&mut person, "url", &author.url);
        map.insert("author".to_string(), Value::Object(person));
    }
    if let Some(publisher) = &article.publisher {
        map.insert("publisher".to_string(), organization(publisher));
    }
    Value::Object(map)
}

pub fn breadcrumb(trail: &BreadcrumbSchema) -> Value {
    let items: Vec<Value> = trail
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": item.name,
                "item": item.url,
            })
        })
        .collect();

    let mut map = base("BreadcrumbList");
    map.insert("itemListElement".to_string(), Value::Array(items));
    Value::Object(map)
}

pub fn product(product: &ProductSchema) -> Value {
    let mut map = base("Product");
    map.insert("name".to_string(), json!(product.name));
    insert_opt(&mut map, "description", &product.description);
    if let Some(image) = &product.image {
        map.insert("image".to_string(), json!(image.to_list()));
    }
    insert_opt(&mut map, "brand", &product.brand);
    if let Some(offer) = &product.offers {
        let mut offers = Map::new();
        offers.insert("@type".to_string(), json!("Offer"));
        offers.insert("price".to_string(), json!(offer.price));
        offers.insert("priceCurrency".to_string(), json!(offer.price_currency));
        insert_opt(&mut offers, "availability", &offer.availability);
        map.insert("offers".to_string(), Value::Object(offers));
    }
    Value::Object(map)
}

pub fn website(name: &str, url: &str, search_url: Option<&str>) -> Value {
    let mut map = base("WebSite");
    map.insert("name".to_string(), json!(name));
    map.insert("url".to_string(), json!(url));
    if let Some(template) = search_url.filter(|s| !s.is_empty()) {
        map.insert(
            "potentialAction".to_string(),
            json!({
                "@type": "SearchAction",
                "target": {
                    "@type": "EntryPoint",
                    "urlTemplate": template,
                },
                "query-input": "required name=search_term_string",
            }),
        );
    }
    Value::Object(map)
}
