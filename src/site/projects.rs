//! Project portfolio and its category filter.

/// Portfolio category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Villa,
    Resort,
    Commercial,
    Residential,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Villa,
        Category::Resort,
        Category::Commercial,
        Category::Residential,
    ];

    /// Query-string value and message key suffix.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Villa => "villa",
            Category::Resort => "resort",
            Category::Commercial => "commercial",
            Category::Residential => "residential",
        }
    }

    pub fn from_key(key: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }
}

/// Active filter on the projects listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filters in the order the listing shows them.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    /// Parse a `category` query value. Absent or unrecognised values show
    /// everything.
    pub fn from_query(value: Option<&str>) -> CategoryFilter {
        value
            .and_then(Category::from_key)
            .map(CategoryFilter::Only)
            .unwrap_or_default()
    }

    pub fn key(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.key(),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == *category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Completed,
    Ongoing,
}

impl ProjectStatus {
    pub fn key(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::Ongoing => "ongoing",
        }
    }
}

/// A portfolio entry. Titles and locations are proper names and are not
/// translated; descriptions and features live in the message catalogue
/// under `projectsPage.projects.{stem}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub stem: &'static str,
    pub category: Category,
    pub location: &'static str,
    pub year: u16,
    pub area: &'static str,
    pub bedrooms: u32,
    pub status: ProjectStatus,
    pub image: &'static str,
    pub features: &'static [&'static str],
}

impl Project {
    /// Message namespace for this project's copy.
    pub fn namespace(&self) -> String {
        format!("projectsPage.projects.{}", self.stem)
    }
}

pub static PROJECTS: [Project; 8] = [
    Project {
        id: 1,
        title: "Luxury Villa Seminyak",
        stem: "villa1",
        category: Category::Villa,
        location: "Seminyak, Bali",
        year: 2023,
        area: "450 m²",
        bedrooms: 4,
        status: ProjectStatus::Completed,
        image: "https://images.pexels.com/photos/1732414/pexels-photo-1732414.jpeg?auto=compress&cs=tinysrgb&w=800",
        features: &["pool", "garden", "garage", "security"],
    },
    Project {
        id: 2,
        title: "Beachfront Resort Canggu",
        stem: "resort1",
        category: Category::Resort,
        location: "Canggu, Bali",
        year: 2022,
        area: "2,500 m²",
        bedrooms: 24,
        status: ProjectStatus::Completed,
        image: "https://images.pexels.com/photos/261102/pexels-photo-261102.jpeg?auto=compress&cs=tinysrgb&w=800",
        features: &["beachfront", "restaurant", "spa", "pool"],
    },
    Project {
        id: 3,
        title: "Modern Villa Ubud",
        stem: "villa2",
        category: Category::Villa,
        location: "Ubud, Bali",
        year: 2023,
        area: "320 m²",
        bedrooms: 3,
        status: ProjectStatus::Completed,
        image: "https://images.pexels.com/photos/1438832/pexels-photo-1438832.jpeg?auto=compress&cs=tinysrgb&w=800",
        features: &["view", "yoga", "organic", "sustainable"],
    },
    Project {
        id: 4,
        title: "Cliffside Villa Uluwatu",
        stem: "villa3",
        category: Category::Villa,
        location: "Uluwatu, Bali",
        year: 2024,
        area: "380 m²",
        bedrooms: 3,
        status: ProjectStatus::Ongoing,
        image: "https://images.pexels.com/photos/323780/pexels-photo-323780.jpeg?auto=compress&cs=tinysrgb&w=800",
        features: &["cliff", "infinity", "elevator", "cinema"],
    },
    Project {
        id: 5,
        title: "Tropical Paradise Sanur",
        stem: "residential1",
        category: Category::Residential,
        location: "Sanur, Bali",
        year: 2023,
        area: "280 m²",
        bedrooms: 2,
        status: ProjectStatus::Completed,
        image: "https://images.pexels.com/photos/1268871/pexels-photo-1268871.jpeg?auto=compress&cs=tinysrgb&w=800",
        features: &["tropical", "courtyard", "natural", "meditation"],
    },
    Project {
        id: 6,
        title: "Contemporary Villa Nusa Dua",
        stem: "villa4",
        category: Category::Villa,
        location: "Nusa Dua, Bali",
        year: 2022,
        area: "520 m²",
        bedrooms: 5,
        status: ProjectStatus::Completed,
        image: "https://images.pexels.com/photos/2581922/pexels-photo-2581922.jpeg?auto=compress&cs=tinysrgb&w=800",
        features: &["contemporary", "smart", "wine", "gym"],
    },
    Project {
        id: 7,
        title: "Boutique Hotel Jimbaran",
        stem: "commercial1",
        category: Category::Commercial,
        location: "Jimbaran, Bali",
        year: 2024,
        area: "1,200 m²",
        bedrooms: 12,
        status: ProjectStatus::Ongoing,
        image: "https://images.pexels.com/photos/1134176/pexels-photo-1134176.jpeg?auto=compress&cs=tinysrgb&w=800",
        features: &["boutique", "rooftop", "conference", "wellness"],
    },
    Project {
        id: 8,
        title: "Eco Resort Munduk",
        stem: "resort2",
        category: Category::Resort,
        location: "Munduk, Bali",
        year: 2024,
        area: "3,500 m²",
        bedrooms: 18,
        status: ProjectStatus::Ongoing,
        image: "https://images.pexels.com/photos/1450360/pexels-photo-1450360.jpeg?auto=compress&cs=tinysrgb&w=800",
        features: &["eco", "mountain", "adventure", "local"],
    },
];

pub fn find(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

/// Projects matching `filter`, in portfolio order.
pub fn filter(projects: &[Project], filter: CategoryFilter) -> Vec<&Project> {
    projects
        .iter()
        .filter(|project| filter.matches(project))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_all_shows_everything() {
        assert_eq!(filter(&PROJECTS, CategoryFilter::All).len(), PROJECTS.len());
    }

    #[test]
    fn test_filter_by_category() {
        assert_eq!(
            ids(&filter(&PROJECTS, CategoryFilter::Only(Category::Villa))),
            vec![1, 3, 4, 6]
        );
        assert_eq!(
            ids(&filter(&PROJECTS, CategoryFilter::Only(Category::Resort))),
            vec![2, 8]
        );
        assert_eq!(
            ids(&filter(&PROJECTS, CategoryFilter::Only(Category::Commercial))),
            vec![7]
        );
        assert_eq!(
            ids(&filter(&PROJECTS, CategoryFilter::Only(Category::Residential))),
            vec![5]
        );
    }

    #[test]
    fn test_from_query() {
        assert_eq!(CategoryFilter::from_query(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_query(Some("all")), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_query(Some("castle")), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_query(Some("resort")),
            CategoryFilter::Only(Category::Resort)
        );
    }

    #[test]
    fn test_options_start_with_all() {
        let keys: Vec<_> = CategoryFilter::options().iter().map(|f| f.key()).collect();
        assert_eq!(keys, vec!["all", "villa", "resort", "commercial", "residential"]);
    }

    #[test]
    fn test_find() {
        assert_eq!(find(7).map(|p| p.title), Some("Boutique Hotel Jimbaran"));
        assert!(find(0).is_none());
        assert!(find(9).is_none());
    }

    #[test]
    fn test_ids_and_stems_unique() {
        let mut ids: Vec<_> = PROJECTS.iter().map(|p| p.id).collect();
        let mut stems: Vec<_> = PROJECTS.iter().map(|p| p.stem).collect();
        ids.sort_unstable();
        ids.dedup();
        stems.sort_unstable();
        stems.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
        assert_eq!(stems.len(), PROJECTS.len());
    }

    #[test]
    fn test_namespace() {
        assert_eq!(PROJECTS[1].namespace(), "projectsPage.projects.resort1");
    }
}
