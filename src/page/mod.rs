pub mod head;
pub mod metadata;
pub mod types;

pub use head::{render_head_tags, robots_directive, structured_data_script, ResolvedHead};
pub use metadata::{generate_metadata, PageMetadata};
pub use types::{HeadDefaults, SeoConfig, TwitterCard};
