//! XML sitemap covering every page in every registered locale.

use crate::i18n::LocaleRegistry;
use crate::seo::links::absolute_url;
use crate::site::{ChangeFrequency, Page};
use anyhow::Result;
use chrono::NaiveDate;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: NaiveDate,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// One entry per page and locale, pages in sitemap order and locales in
/// registry order within each page.
pub fn entries(base_url: &str, registry: &LocaleRegistry, today: NaiveDate) -> Vec<SitemapEntry> {
    Page::all()
        .into_iter()
        .flat_map(|page| {
            registry.locales().iter().map(move |&locale| SitemapEntry {
                url: absolute_url(base_url, locale, &page.path()),
                last_modified: today,
                change_frequency: page.change_frequency(),
                priority: page.priority(),
            })
        })
        .collect()
}

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Serialise `entries` as a sitemaps.org `urlset` document.
pub fn render_xml(entries: &[SitemapEntry]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(
        BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS)]),
    ))?;

    for entry in entries {
        let last_modified = entry.last_modified.format("%Y-%m-%d").to_string();
        let priority = format!("{:.1}", entry.priority);

        writer.write_event(Event::Start(BytesStart::new("url")))?;
        writer.create_element("loc").write_text_content(BytesText::new(&entry.url))?;
        writer.create_element("lastmod").write_text_content(BytesText::new(&last_modified))?;
        writer
            .create_element("changefreq")
            .write_text_content(BytesText::new(entry.change_frequency.as_str()))?;
        writer.create_element("priority").write_text_content(BytesText::new(&priority))?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;
    Ok(String::from_utf8(writer.into_inner())?)
}

/// `robots.txt` allowing everything and pointing at the sitemap.
pub fn robots_txt(base_url: &str) -> String {
    format!("User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n", base_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://balitecture.com";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
    }

    #[test]
    fn test_every_page_in_every_locale_once() {
        let registry = LocaleRegistry::default();
        let entries = entries(BASE, &registry, today());
        assert_eq!(entries.len(), Page::all().len() * 2);

        let mut urls: Vec<_> = entries.iter().map(|e| e.url.as_str()).collect();
        urls.sort_unstable();
        urls.dedup();
        assert_eq!(urls.len(), entries.len());
    }

    #[test]
    fn test_entries_order_and_weights() {
        let registry = LocaleRegistry::default();
        let entries = entries(BASE, &registry, today());

        assert_eq!(entries[0].url, "https://balitecture.com/en");
        assert_eq!(entries[1].url, "https://balitecture.com/id");
        assert_eq!(entries[0].priority, 1.0);
        assert_eq!(entries[0].change_frequency, ChangeFrequency::Weekly);

        let land = entries
            .iter()
            .find(|e| e.url == "https://balitecture.com/id/services/land")
            .unwrap();
        assert_eq!(land.priority, 0.7);
        assert_eq!(land.change_frequency, ChangeFrequency::Monthly);
    }

    #[test]
    fn test_single_locale_registry() {
        let registry = LocaleRegistry::new(&["id"], "id").unwrap();
        let entries = entries(BASE, &registry, today());
        assert_eq!(entries.len(), Page::all().len());
        assert!(entries.iter().all(|e| e.url.starts_with("https://balitecture.com/id")));
    }

    #[test]
    fn test_render_xml() {
        let registry = LocaleRegistry::default();
        let xml = render_xml(&entries(BASE, &registry, today())).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<loc>https://balitecture.com/id/projects/8</loc>"));
        assert!(xml.contains("<lastmod>2024-05-17</lastmod>"));
        assert!(xml.contains("<priority>0.9</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
        assert_eq!(xml.matches("<url>").count(), Page::all().len() * 2);
    }

    #[test]
    fn test_render_xml_escapes_urls() {
        let entry = SitemapEntry {
            url: "https://balitecture.com/en/projects?category=villa&page=<2>".to_string(),
            last_modified: today(),
            change_frequency: ChangeFrequency::Weekly,
            priority: 0.8,
        };
        let xml = render_xml(&[entry]).unwrap();

        assert!(xml.contains(
            "<loc>https://balitecture.com/en/projects?category=villa&amp;page=&lt;2&gt;</loc>"
        ));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
    }

    #[test]
    fn test_render_xml_empty() {
        let xml = render_xml(&[]).unwrap();
        assert!(xml.contains("<urlset"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_robots_txt() {
        let robots = robots_txt(BASE);
        assert!(robots.contains("Sitemap: https://balitecture.com/sitemap.xml"));
        assert!(robots.starts_with("User-agent: *"));
    }
}
