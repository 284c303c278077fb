//! Search-engine metadata: per-page link tags and the sitemap.

mod links;
mod sitemap;

pub use links::{absolute_url, localized_path, PageLinks};
pub use sitemap::{entries as sitemap_entries, render_xml as render_sitemap, robots_txt, SitemapEntry};
