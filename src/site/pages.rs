//! Page table: maps the locale-free remainder of a path to a page.

use crate::site::projects::{self, PROJECTS};
use crate::site::services::ServiceKind;

/// Sitemap change frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

/// Every page the site serves under a locale prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Services,
    Service(ServiceKind),
    Projects,
    Project(u32),
}

impl Page {
    /// Look up the page for a locale-free path.
    ///
    /// A single trailing slash is tolerated (`/about/`). Project ids must
    /// name an existing project.
    pub fn from_remainder(remainder: &str) -> Option<Page> {
        let path = remainder.strip_suffix('/').unwrap_or(remainder);
        let segments: Vec<&str> = if path.is_empty() {
            Vec::new()
        } else {
            path.strip_prefix('/')?.split('/').collect()
        };

        match segments.as_slice() {
            [] => Some(Page::Home),
            ["about"] => Some(Page::About),
            ["services"] => Some(Page::Services),
            ["services", slug] => ServiceKind::from_slug(slug).map(Page::Service),
            ["projects"] => Some(Page::Projects),
            ["projects", id] => {
                let id: u32 = id.parse().ok()?;
                projects::find(id).map(|project| Page::Project(project.id))
            }
            _ => None,
        }
    }

    /// Locale-free path (`""` for the home page).
    pub fn path(&self) -> String {
        match self {
            Page::Home => String::new(),
            Page::About => "/about".to_string(),
            Page::Services => "/services".to_string(),
            Page::Service(kind) => format!("/services/{}", kind.slug()),
            Page::Projects => "/projects".to_string(),
            Page::Project(id) => format!("/projects/{}", id),
        }
    }

    /// All pages, in sitemap order.
    pub fn all() -> Vec<Page> {
        let mut pages = vec![Page::Home, Page::About, Page::Services, Page::Projects];
        pages.extend(ServiceKind::ALL.into_iter().map(Page::Service));
        pages.extend(PROJECTS.iter().map(|project| Page::Project(project.id)));
        pages
    }

    pub fn change_frequency(&self) -> ChangeFrequency {
        match self {
            Page::Home | Page::Services | Page::Projects => ChangeFrequency::Weekly,
            Page::About | Page::Service(_) | Page::Project(_) => ChangeFrequency::Monthly,
        }
    }

    pub fn priority(&self) -> f32 {
        match self {
            Page::Home => 1.0,
            Page::Services | Page::Projects => 0.9,
            Page::About => 0.8,
            Page::Service(_) => 0.7,
            Page::Project(_) => 0.6,
        }
    }
}
