//! Site content: the page table, the service lines, the project portfolio
//! and the HTML renderer that turns them into localized pages.

mod pages;
pub mod projects;
mod render;
mod services;

pub use pages::{ChangeFrequency, Page};
pub use projects::{Category, CategoryFilter, Project, ProjectStatus, PROJECTS};
pub use render::{render_not_found, render_page, PageRequest};
pub use services::ServiceKind;
