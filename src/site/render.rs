//! HTML rendering for site pages.
//!
//! Every user-visible string comes from the message catalogue through the
//! translator, using the fallback policy carried by the [`PageRequest`].
//! Proper names (project titles, people, addresses) are not translated.
//! Markup is built with `maud`, which escapes every spliced value.

use crate::i18n::{FallbackPolicy, I18nError, Locale, Scope, Translator};
use crate::seo::{localized_path, PageLinks};
use crate::site::projects::{self, CategoryFilter, Project, PROJECTS};
use crate::site::{Page, ServiceKind};
use maud::{html, Markup, DOCTYPE};

const CONTACT_EMAIL: &str = "info@balitecture.com";
const CONTACT_PHONE: &str = "+62 361 123456";
const CONTACT_ADDRESS: &str = "Jl. Raya Seminyak, Seminyak, Bali 80361";

/// Shared Open Graph / Twitter card image, served from the site root.
const OG_IMAGE_PATH: &str = "/og-image.jpg";
const OG_IMAGE_WIDTH: u32 = 1200;
const OG_IMAGE_HEIGHT: u32 = 630;

/// Everything a page render needs besides the page itself.
#[derive(Debug, Clone)]
pub struct PageRequest<'a> {
    pub translator: &'a Translator,
    pub policy: FallbackPolicy,
    pub base_url: &'a str,
    pub locale: Locale,

    /// Active category on the projects listing
    pub filter: CategoryFilter,

    /// Year shown in the footer notice
    pub year: i32,
}

impl<'a> PageRequest<'a> {
    fn scope(&self, namespace: &str) -> Scope<'a> {
        self.translator.scope(self.locale, namespace, self.policy)
    }

    fn href(&self, path: &str) -> String {
        localized_path(self.locale, path)
    }
}

/// Render `page` as a complete HTML document.
pub fn render_page(req: &PageRequest<'_>, page: Page) -> Result<String, I18nError> {
    let (title, description) = page_meta(req, page)?;
    let body = match page {
        Page::Home => home(req)?,
        Page::About => about(req)?,
        Page::Services => services_overview(req)?,
        Page::Service(kind) => service(req, kind)?,
        Page::Projects => projects_listing(req)?,
        Page::Project(id) => match projects::find(id) {
            Some(project) => project_detail(req, project)?,
            None => return render_not_found(req),
        },
    };
    Ok(layout(req, &page.path(), &title, &description, body)?.into_string())
}

/// The localized 404 document.
pub fn render_not_found(req: &PageRequest<'_>) -> Result<String, I18nError> {
    let t = req.scope("notFound");
    let title = t.t("title")?;
    let description = t.t("description")?;
    let body = html! {
        section class="not-found" {
            h1 { (title) }
            p { (description) }
            a href=(req.href("")) { (t.t("back")?) }
        }
    };
    Ok(layout(req, "", &title, &description, body)?.into_string())
}

/// `<title>` text and meta description for `page`.
fn page_meta(req: &PageRequest<'_>, page: Page) -> Result<(String, String), I18nError> {
    let meta = req.scope("meta");
    let (title, description) = match page {
        Page::Home => return Ok((meta.t("home.title")?.into_owned(), meta.t("home.description")?.into_owned())),
        Page::About => (meta.t("about.title")?, meta.t("about.description")?),
        Page::Services => (meta.t("services.title")?, meta.t("services.description")?),
        Page::Projects => (meta.t("projects.title")?, meta.t("projects.description")?),
        Page::Service(kind) => {
            let t = req.scope(kind.namespace());
            (t.t("title")?, t.t("subtitle")?)
        }
        Page::Project(id) => {
            let name = projects::find(id).map(|p| p.title).unwrap_or_default();
            let args = [("project", name)];
            (
                meta.fmt("projectDetail.title", &args)?.into(),
                meta.fmt("projectDetail.description", &args)?.into(),
            )
        }
    };
    let title = meta.fmt("titleTemplate", &[("title", &*title)])?;
    Ok((title, description.into_owned()))
}

fn layout(
    req: &PageRequest<'_>,
    path: &str,
    title: &str,
    description: &str,
    body: Markup,
) -> Result<Markup, I18nError> {
    let links = PageLinks::new(req.base_url, req.translator.registry(), req.locale, path);
    let image = format!("{}{}", req.base_url, OG_IMAGE_PATH);
    let image_alt = req.scope("meta").t("ogImageAlt")?;

    Ok(html! {
        (DOCTYPE)
        html lang=(req.locale.code()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="description" content=(description);
                link rel="canonical" href=(links.canonical);
                @for (alt, href) in &links.alternates {
                    link rel="alternate" hreflang=(alt.code()) href=(href);
                }
                meta property="og:type" content="website";
                meta property="og:site_name" content="Balitecture";
                meta property="og:title" content=(title);
                meta property="og:description" content=(description);
                meta property="og:url" content=(links.canonical);
                meta property="og:locale" content=(links.og_locale);
                @for og in &links.og_alternates {
                    meta property="og:locale:alternate" content=(og);
                }
                meta property="og:image" content=(image);
                meta property="og:image:width" content=(OG_IMAGE_WIDTH);
                meta property="og:image:height" content=(OG_IMAGE_HEIGHT);
                meta property="og:image:alt" content=(image_alt);
                meta name="twitter:card" content="summary_large_image";
                meta name="twitter:title" content=(title);
                meta name="twitter:description" content=(description);
                meta name="twitter:image" content=(image);
            }
            body {
                (navigation(req, &links)?)
                main { (body) }
                (footer(req)?)
            }
        }
    })
}

fn navigation(req: &PageRequest<'_>, links: &PageLinks) -> Result<Markup, I18nError> {
    let t = req.scope("nav");
    Ok(html! {
        nav {
            a class="brand" href=(req.href("")) { "Balitecture" }
            ul {
                @for (key, path) in [
                    ("home", ""),
                    ("services", "/services"),
                    ("projects", "/projects"),
                    ("about", "/about"),
                    ("contact", "#contact"),
                ] {
                    li { a href=(req.href(path)) { (t.t(key)?) } }
                }
            }
            @for (alt, href) in &links.alternates {
                @if *alt != req.locale {
                    a class="locale-switch" hreflang=(alt.code()) href=(href) title=(alt.native_name()) {
                        (alt.code().to_ascii_uppercase())
                    }
                }
            }
        }
    })
}

fn footer(req: &PageRequest<'_>) -> Result<Markup, I18nError> {
    let t = req.scope("footer");
    let nav = req.scope("nav");
    let year = req.year.to_string();
    Ok(html! {
        footer {
            p { (t.t("description")?) }
            h4 { (t.t("quickLinks")?) }
            ul {
                @for (key, path) in [("about", "/about"), ("services", "/services"), ("projects", "/projects")] {
                    li { a href=(req.href(path)) { (nav.t(key)?) } }
                }
            }
            h4 { (t.t("services")?) }
            ul {
                @for kind in ServiceKind::ALL {
                    li {
                        a href=(req.href(&Page::Service(kind).path())) {
                            (req.scope(kind.namespace()).t("title")?)
                        }
                    }
                }
            }
            p class="rights" { (t.fmt("rights", &[("year", year.as_str())])?) }
        }
    })
}

// ==================== Home ====================

fn home(req: &PageRequest<'_>) -> Result<Markup, I18nError> {
    let hero = req.scope("hero");
    let services = req.scope("services");
    let projects = req.scope("projects");
    let about = req.scope("about");

    Ok(html! {
        section id="home" class="hero" {
            h1 { (hero.t("title")?) }
            h2 { (hero.t("subtitle")?) }
            p { (hero.t("description")?) }
            a class="cta" href=(req.href("/projects")) { (hero.t("cta")?) }
            a class="cta-secondary" href="#contact" { (hero.t("ctaSecondary")?) }
        }
        section id="services" {
            h2 { (services.t("title")?) }
            p { (services.t("subtitle")?) }
            ul class="services" {
                @for kind in ServiceKind::ALL {
                    (service_card(req, kind)?)
                }
            }
        }
        section id="projects" {
            h2 { (projects.t("title")?) }
            p { (projects.t("subtitle")?) }
            ul class="projects" {
                @for project in PROJECTS.iter().take(3) {
                    li {
                        h3 { (project.title) }
                        p class="location" { (project.location) }
                        p { (req.scope(&project.namespace()).t("description")?) }
                        a href=(req.href(&Page::Project(project.id).path())) { (projects.t("viewProject")?) }
                    }
                }
            }
        }
        section id="about" {
            h2 { (about.t("title")?) }
            h3 { (about.t("subtitle")?) }
            p { (about.t("description")?) }
            ul class="stats" {
                @for (value, key) in [("15+", "stat1"), ("150+", "stat2"), ("200+", "stat3"), ("25+", "stat4")] {
                    li { strong { (value) } " " (about.t(key)?) }
                }
            }
        }
        (contact(req)?)
    })
}

fn service_card(req: &PageRequest<'_>, kind: ServiceKind) -> Result<Markup, I18nError> {
    let t = req.scope(kind.namespace());
    let learn_more = req.scope("servicesPage");
    Ok(html! {
        li {
            h3 { (t.t("title")?) }
            p { (t.t("subtitle")?) }
            a href=(req.href(&Page::Service(kind).path())) { (learn_more.t("learnMore")?) }
        }
    })
}

fn contact(req: &PageRequest<'_>) -> Result<Markup, I18nError> {
    let t = req.scope("contact");
    Ok(html! {
        section id="contact" {
            h2 { (t.t("title")?) }
            p { (t.t("subtitle")?) }
            div class="contact-info" {
                h3 { (t.t("info")?) }
                p { strong { (t.t("address")?) } " " (CONTACT_ADDRESS) }
                p {
                    strong { (t.t("emailLabel")?) } " "
                    a href={ "mailto:" (CONTACT_EMAIL) } { (CONTACT_EMAIL) }
                }
                p {
                    strong { (t.t("phoneLabel")?) } " "
                    a href={ "tel:" (CONTACT_PHONE.replace(' ', "")) } { (CONTACT_PHONE) }
                }
            }
            // The form is presentational; there is no submission backend.
            form class="contact-form" onsubmit="return false" {
                label { (t.t("name")?) input type="text" name="name"; }
                label { (t.t("email")?) input type="email" name="email"; }
                label { (t.t("phone")?) input type="tel" name="phone"; }
                label { (t.t("message")?) textarea name="message" {} }
                button type="submit" { (t.t("submit")?) }
            }
        }
    })
}

// ==================== About ====================

fn about(req: &PageRequest<'_>) -> Result<Markup, I18nError> {
    let t = req.scope("aboutPage");
    let timeline = t.nested("timeline");
    let team = t.nested("team");

    Ok(html! {
        section class="page-hero" {
            h1 { (t.t("hero.title")?) }
            p { (t.t("hero.subtitle")?) }
        }
        section class="story" {
            h2 { (t.t("story.title")?) }
            p { (t.t("story.description1")?) }
            p { (t.t("story.description2")?) }
            p { (t.t("story.description3")?) }
        }
        section class="mission" {
            h2 { (t.t("mission.title")?) }
            p { (t.t("mission.description")?) }
        }
        (titled_list(&t, "values", &["excellence", "passion", "integrity", "innovation"])?)
        section class="timeline" {
            h2 { (timeline.t("title")?) }
            p { (timeline.t("description")?) }
            ol {
                @for (year, key) in [
                    ("2008", "founded"),
                    ("2012", "expansion"),
                    ("2016", "recognition"),
                    ("2020", "innovation"),
                    ("2024", "present"),
                ] {
                    li {
                        span class="year" { (year) }
                        h3 { (timeline.t(&format!("{}.title", key))?) }
                        p { (timeline.t(&format!("{}.description", key))?) }
                    }
                }
            }
        }
        section class="team" {
            h2 { (team.t("title")?) }
            p { (team.t("description")?) }
            ul {
                @for (name, key) in [
                    ("Made Wirawan", "ceo"),
                    ("Sarah Chen", "architect"),
                    ("Kadek Surya", "designer"),
                    ("Lisa Anderson", "manager"),
                ] {
                    li {
                        h3 { (name) }
                        p class="role" { (team.t(&format!("{}.role", key))?) }
                        p { (team.t(&format!("{}.bio", key))?) }
                    }
                }
            }
        }
        (stats(&t.nested("stats"), false)?)
    })
}

/// A section with `{ns}.title`, `{ns}.description` and one titled entry per
/// item.
fn titled_list(parent: &Scope<'_>, namespace: &str, items: &[&str]) -> Result<Markup, I18nError> {
    let t = parent.nested(namespace);
    Ok(html! {
        section class=(namespace) {
            h2 { (t.t("title")?) }
            p { (t.t("description")?) }
            ul {
                @for item in items {
                    li {
                        h3 { (t.t(&format!("{}.title", item))?) }
                        p { (t.t(&format!("{}.description", item))?) }
                    }
                }
            }
        }
    })
}

fn stats(t: &Scope<'_>, with_heading: bool) -> Result<Markup, I18nError> {
    Ok(html! {
        section class="stats" {
            @if with_heading {
                h2 { (t.t("title")?) }
                p { (t.t("description")?) }
            }
            ul {
                @for (value, key) in [("15+", "years"), ("150+", "projects"), ("200+", "clients"), ("25+", "awards")] {
                    li { strong { (value) } " " (t.t(key)?) }
                }
            }
        }
    })
}

// ==================== Services ====================

fn services_overview(req: &PageRequest<'_>) -> Result<Markup, I18nError> {
    let t = req.scope("servicesPage");
    let testimonials = t.nested("testimonials");

    Ok(html! {
        section class="page-hero" {
            h1 { (t.t("hero.title")?) }
            p { (t.t("hero.subtitle")?) }
        }
        section class="overview" {
            h2 { (t.t("overview.title")?) }
            p { (t.t("overview.description")?) }
            ul class="services" {
                @for kind in ServiceKind::ALL {
                    (service_card(req, kind)?)
                }
            }
        }
        section class="process" {
            h2 { (t.t("process.title")?) }
            p { (t.t("process.description")?) }
        }
        (stats(&t.nested("stats"), true)?)
        section class="testimonials" {
            h2 { (testimonials.t("title")?) }
            p { (testimonials.t("description")?) }
            ul {
                @for (name, key) in [
                    ("James Mitchell", "client1"),
                    ("Sophie Laurent", "client2"),
                    ("Hiroshi Tanaka", "client3"),
                ] {
                    li {
                        blockquote { (testimonials.t(&format!("{}.content", key))?) }
                        p { (name) ", " (testimonials.t(&format!("{}.role", key))?) }
                    }
                }
            }
        }
        (call_to_action(req)?)
    })
}

fn call_to_action(req: &PageRequest<'_>) -> Result<Markup, I18nError> {
    let t = req.scope("servicesPage.cta");
    Ok(html! {
        section class="cta" {
            h2 { (t.t("title")?) }
            p { (t.t("description")?) }
            a href=(req.href("#contact")) { (t.t("button")?) }
        }
    })
}

fn service(req: &PageRequest<'_>, kind: ServiceKind) -> Result<Markup, I18nError> {
    let t = req.scope(kind.namespace());
    let features = t.nested("features");

    Ok(html! {
        section class="page-hero" {
            h1 { (t.t("title")?) }
            p { (t.t("subtitle")?) }
        }
        section class="about-service" {
            h2 { (t.t("about.title")?) }
            p { (t.t("about.description1")?) }
            p { (t.t("about.description2")?) }
        }
        section class="features" {
            ul {
                @for feature in kind.features() {
                    li {
                        h3 { (features.t(&format!("{}.title", feature))?) }
                        p { (features.t(&format!("{}.description", feature))?) }
                    }
                }
            }
        }
        (call_to_action(req)?)
    })
}

// ==================== Projects ====================

fn filter_href(req: &PageRequest<'_>, option: CategoryFilter) -> String {
    match option {
        CategoryFilter::All => req.href("/projects"),
        CategoryFilter::Only(category) => {
            format!("{}?category={}", req.href("/projects"), category.key())
        }
    }
}

fn projects_listing(req: &PageRequest<'_>) -> Result<Markup, I18nError> {
    let t = req.scope("projectsPage");
    Ok(html! {
        section class="page-hero" {
            h1 { (t.t("hero.title")?) }
            p { (t.t("hero.subtitle")?) }
        }
        section class="filters" {
            span { (t.t("filterBy")?) }
            ul {
                @for option in CategoryFilter::options() {
                    li {
                        a href=(filter_href(req, option)) aria-current=[(option == req.filter).then_some("true")] {
                            (t.t(&format!("filters.{}", option.key()))?)
                        }
                    }
                }
            }
        }
        section class="grid" {
            ul class="projects" {
                @for project in projects::filter(&PROJECTS, req.filter) {
                    (project_card(req, &t, project)?)
                }
            }
        }
    })
}

fn project_card(req: &PageRequest<'_>, t: &Scope<'_>, project: &Project) -> Result<Markup, I18nError> {
    let copy = req.scope(&project.namespace());
    let status = project.status.key();
    Ok(html! {
        li class="project" data-category=(project.category.key()) {
            a href=(req.href(&Page::Project(project.id).path())) {
                img src=(project.image) alt=(project.title);
                span class={ "status " (status) } { (t.t(&format!("status.{}", status))?) }
                h3 { (project.title) }
                p class="location" { (project.location) }
                p class="year" { (project.year) }
                p class="size" { (project.area) " • " (project.bedrooms) " " (t.t("bedrooms")?) }
                p { (copy.t("description")?) }
                span { (t.t("viewDetails")?) }
            }
        }
    })
}

fn project_detail(req: &PageRequest<'_>, project: &Project) -> Result<Markup, I18nError> {
    let t = req.scope("projectDetail");
    let copy = req.scope(&project.namespace());
    let related: Vec<&Project> = PROJECTS
        .iter()
        .filter(|other| other.category == project.category && other.id != project.id)
        .take(3)
        .collect();
    let listing = req.scope("projectsPage");

    Ok(html! {
        section class="page-hero" {
            a href=(req.href("/projects")) { (t.t("backToProjects")?) }
            h1 { (project.title) }
            p class="location" { (project.location) }
            img src=(project.image) alt=(project.title);
        }
        section class="overview" {
            h2 { (t.t("sections.overview")?) }
            p { (copy.t("description")?) }
        }
        aside {
            dl {
                dt { (t.t("info.year")?) } dd { (project.year) }
                dt { (t.t("info.area")?) } dd { (project.area) }
                dt { (t.t("info.bedrooms")?) } dd { (project.bedrooms) }
                dt { (t.t("info.status")?) } dd { (t.t(&format!("status.{}", project.status.key()))?) }
            }
            h3 { (t.t("sidebar.features")?) }
            ul class="features" {
                @for feature in project.features {
                    li { (copy.t(&format!("features.{}", feature))?) }
                }
            }
        }
        @if !related.is_empty() {
            section class="related" {
                h2 { (t.t("related.title")?) }
                p { (t.t("related.description")?) }
                ul class="projects" {
                    @for other in &related {
                        (project_card(req, &listing, other)?)
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{DirectorySource, I18nMetrics, LocaleRegistry, MessageStore, StaticSource};
    use crate::site::Category;
    use serde_json::json;
    use std::path::Path;
    use std::sync::Arc;

    /// The catalogues shipped in `locales/`.
    fn bundled_translator() -> Translator {
        let registry = Arc::new(LocaleRegistry::default());
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("locales");
        let store = MessageStore::load(&registry, &DirectorySource::new(dir)).unwrap();
        Translator::new(registry, Arc::new(store), Arc::new(I18nMetrics::new()))
    }

    fn static_translator(en: serde_json::Value, id: serde_json::Value) -> Translator {
        let registry = Arc::new(LocaleRegistry::default());
        let source = StaticSource::new().with(Locale::English, en).with(Locale::Indonesian, id);
        let store = Arc::new(MessageStore::load(&registry, &source).unwrap());
        Translator::new(registry, store, Arc::new(I18nMetrics::new()))
    }

    fn request(translator: &Translator, locale: Locale, policy: FallbackPolicy) -> PageRequest<'_> {
        PageRequest {
            translator,
            policy,
            base_url: "https://balitecture.com",
            locale,
            filter: CategoryFilter::All,
            year: 2024,
        }
    }

    #[test]
    fn test_every_page_renders_strictly_in_every_locale() {
        let translator = bundled_translator();
        for locale in Locale::ALL {
            let req = request(&translator, locale, FallbackPolicy::Strict);
            for page in Page::all() {
                if let Err(e) = render_page(&req, page) {
                    panic!("{:?} in {} failed: {}", page, locale, e);
                }
            }
            render_not_found(&req).unwrap();
            for option in CategoryFilter::options() {
                let req = PageRequest { filter: option, ..req.clone() };
                render_page(&req, Page::Projects).unwrap();
            }
        }
        assert_eq!(translator.metrics().misses(), 0);
    }

    #[test]
    fn test_document_head() {
        let translator = bundled_translator();
        let req = request(&translator, Locale::Indonesian, FallbackPolicy::Strict);
        let html = render_page(&req, Page::About).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"id\">"));
        assert!(html.contains("<link rel=\"canonical\" href=\"https://balitecture.com/id/about\">"));
        assert!(html.contains("<link rel=\"alternate\" hreflang=\"en\" href=\"/en/about\">"));
        assert!(html.contains("<link rel=\"alternate\" hreflang=\"id\" href=\"/id/about\">"));
        assert!(html.contains("<meta property=\"og:locale\" content=\"id_ID\">"));
        assert!(html.contains("<meta property=\"og:locale:alternate\" content=\"en_US\">"));
        assert!(html.contains("class=\"locale-switch\" hreflang=\"en\" href=\"/en/about\""));
    }

    #[test]
    fn test_social_card_tags() {
        let translator = bundled_translator();
        let req = request(&translator, Locale::Indonesian, FallbackPolicy::Strict);
        let html = render_page(&req, Page::About).unwrap();

        assert!(html.contains("<meta property=\"og:image\" content=\"https://balitecture.com/og-image.jpg\">"));
        assert!(html.contains("<meta property=\"og:image:width\" content=\"1200\">"));
        assert!(html.contains("<meta property=\"og:image:height\" content=\"630\">"));
        assert!(html.contains(
            "<meta property=\"og:image:alt\" content=\"Balitecture - Pengembangan Properti Mewah di Bali\">"
        ));
        assert!(html.contains("<meta name=\"twitter:card\" content=\"summary_large_image\">"));
        assert!(html.contains("<meta name=\"twitter:title\" content=\"Tentang Kami | Balitecture\">"));
        assert!(html.contains("<meta name=\"twitter:description\" content=\"Kenali tim di balik Balitecture"));
        assert!(html.contains("<meta name=\"twitter:image\" content=\"https://balitecture.com/og-image.jpg\">"));
    }

    #[test]
    fn test_localized_text_is_used() {
        let translator = bundled_translator();
        let en = render_page(&request(&translator, Locale::English, FallbackPolicy::Strict), Page::Home)
            .unwrap();
        let id = render_page(
            &request(&translator, Locale::Indonesian, FallbackPolicy::Strict),
            Page::Home,
        )
        .unwrap();

        let en_title = translator.resolve(Locale::English, "hero.title").unwrap();
        let id_title = translator.resolve(Locale::Indonesian, "hero.title").unwrap();
        assert_ne!(en_title, id_title);
        assert!(en.contains(&format!("<h1>{}</h1>", en_title)));
        assert!(id.contains(&format!("<h1>{}</h1>", id_title)));
        assert!(id.contains("href=\"/id/projects\""));
        assert!(id.contains("© 2024"));
    }

    #[test]
    fn test_projects_filter() {
        let translator = bundled_translator();
        let req = PageRequest {
            filter: CategoryFilter::Only(Category::Resort),
            ..request(&translator, Locale::English, FallbackPolicy::Strict)
        };
        let html = render_page(&req, Page::Projects).unwrap();

        assert_eq!(html.matches("<li class=\"project\"").count(), 2);
        assert!(html.contains("Beachfront Resort Canggu"));
        assert!(html.contains("Eco Resort Munduk"));
        assert!(!html.contains("Luxury Villa Seminyak"));
        assert!(html.contains("href=\"/en/projects?category=resort\" aria-current=\"true\""));
        assert_eq!(html.matches("aria-current").count(), 1);
    }

    #[test]
    fn test_project_detail_lists_related_projects() {
        let translator = bundled_translator();
        let req = request(&translator, Locale::English, FallbackPolicy::Strict);
        let html = render_page(&req, Page::Project(7)).unwrap();

        assert!(html.contains("<h1>Boutique Hotel Jimbaran</h1>"));
        // Only commercial project: no related section
        assert!(!html.contains("class=\"related\""));

        let html = render_page(&req, Page::Project(1)).unwrap();
        assert_eq!(html.matches("<li class=\"project\"").count(), 3);
    }

    #[test]
    fn test_title_template() {
        let translator = bundled_translator();
        let req = request(&translator, Locale::English, FallbackPolicy::Strict);
        let html = render_page(&req, Page::Project(2)).unwrap();
        assert!(html.contains("<title>Beachfront Resort Canggu"));
        assert!(html.contains("| Balitecture</title>"));
    }

    #[test]
    fn test_missing_keys_follow_policy() {
        let translator = static_translator(
            json!({ "notFound": { "title": "Not found", "description": "Gone", "back": "Home" } }),
            json!({}),
        );

        let strict = request(&translator, Locale::Indonesian, FallbackPolicy::Strict);
        assert!(matches!(
            render_not_found(&strict),
            Err(I18nError::MissingTranslationKey { .. })
        ));

        let placeholder = request(&translator, Locale::Indonesian, FallbackPolicy::Placeholder);
        let html = render_not_found(&placeholder).unwrap();
        assert!(html.contains("[[id:notFound.title]]"));
    }

    #[test]
    fn test_catalogue_text_is_escaped() {
        let translator = static_translator(
            json!({
                "meta": { "ogImageAlt": "Tom & \"Jerry\"" },
                "notFound": {
                    "title": "<script>alert(1)</script>",
                    "description": "Villas & resorts",
                    "back": "Home"
                }
            }),
            json!({}),
        );
        let req = request(&translator, Locale::English, FallbackPolicy::Placeholder);
        let html = render_not_found(&req).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("<h1>&lt;script&gt;alert(1)&lt;/script&gt;</h1>"));
        assert!(html.contains("<title>&lt;script&gt;alert(1)&lt;/script&gt;</title>"));
        assert!(html.contains("<meta name=\"description\" content=\"Villas &amp; resorts\">"));
        assert!(html.contains("content=\"Tom &amp; &quot;Jerry&quot;\""));
    }
}
