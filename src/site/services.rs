//! The five service lines offered by the firm.

/// A service with its own detail page under `/services/{slug}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Land,
    Architecture,
    Furniture,
    VillaManagement,
    Construction,
}

impl ServiceKind {
    /// Display order on the services overview.
    pub const ALL: [ServiceKind; 5] = [
        ServiceKind::Land,
        ServiceKind::Architecture,
        ServiceKind::Furniture,
        ServiceKind::VillaManagement,
        ServiceKind::Construction,
    ];

    /// URL segment.
    pub fn slug(&self) -> &'static str {
        match self {
            ServiceKind::Land => "land",
            ServiceKind::Architecture => "architecture",
            ServiceKind::Furniture => "furniture",
            ServiceKind::VillaManagement => "villa-management",
            ServiceKind::Construction => "construction",
        }
    }

    pub fn from_slug(slug: &str) -> Option<ServiceKind> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    /// Message namespace holding this service's copy.
    pub fn namespace(&self) -> &'static str {
        match self {
            ServiceKind::Land => "services.land",
            ServiceKind::Architecture => "services.architecture",
            ServiceKind::Furniture => "services.furniture",
            ServiceKind::VillaManagement => "services.villaManagement",
            ServiceKind::Construction => "services.construction",
        }
    }

    /// Feature keys under `{namespace}.features`, each with a `title` and a
    /// `description`.
    pub fn features(&self) -> &'static [&'static str] {
        match self {
            ServiceKind::Land => &["location", "legal", "investment", "consultation"],
            ServiceKind::Architecture => &["design", "planning", "visualization", "quality"],
            ServiceKind::Furniture => &["custom", "materials", "craftsmanship", "delivery"],
            ServiceKind::VillaManagement => &["guest", "maintenance", "revenue", "security"],
            ServiceKind::Construction => &["quality", "timeline", "safety", "expertise"],
        }
    }
}
