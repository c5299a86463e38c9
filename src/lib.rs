//! Page-level SEO analysis and generation of head tags, JSON-LD, sitemaps
//! and robots.txt from a YAML project config.

pub mod analysis;
pub mod config;
pub mod output;
pub mod page;
pub mod robots;
pub mod sitemap;
pub mod structured_data;
