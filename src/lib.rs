//! Bilingual (English / Indonesian) website for Balitecture.
//!
//! Every page lives under a locale prefix (`/en/...`, `/id/...`). Requests
//! without one are redirected to the default locale before any page is
//! rendered; static assets and internal endpoints pass through untouched.

pub mod config;
pub mod i18n;
pub mod routing;
pub mod seo;
pub mod server;
pub mod site;
