use super::index::{NavigableEntry, SearchIndex};

/// Home page sections in layout order. The nav highlight and the search
/// catalog both point at these ids.
pub const HOME_SECTIONS: &[&str] = &["home", "about", "services", "portfolio", "testimonials", "contact"];

pub fn site_catalog() -> SearchIndex {
    let entries = [
        ("Home", "#home", "Pages"),
        ("About Us", "#about", "Pages"),
        ("Our Process", "#about", "Pages"),
        ("Portfolio", "#portfolio", "Pages"),
        ("Testimonials", "#testimonials", "Pages"),
        ("Contact Us", "#contact", "Pages"),
        ("Meet the Team", "/team", "Pages"),
        ("Web Development", "#services", "Services"),
        ("Mobile Apps", "#services", "Services"),
        ("UI/UX Design", "#services", "Services"),
        ("Digital Marketing", "#services", "Services"),
        ("SEO Optimization", "#services", "Services"),
        ("Cloud Hosting & Maintenance", "#services", "Services"),
        ("Nordic Outdoor Store", "#portfolio", "Projects"),
        ("Clinic Booking App", "#portfolio", "Projects"),
        ("Fintech Dashboard", "#portfolio", "Projects"),
        ("Terms of Service", "/terms", "Legal"),
        ("Privacy Policy", "/privacy", "Legal"),
    ];
    SearchIndex::new(
        entries
            .into_iter()
            .map(|(title, target, category)| NavigableEntry::new(title, target, category))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::index::Destination;

    #[test]
    fn test_every_anchor_points_at_a_home_section() {
        let index = site_catalog();
        for result in index.search("a").iter().chain(index.search("e").iter()) {
            if let Destination::Anchor(id) = result.entry.destination() {
                assert!(HOME_SECTIONS.contains(&id), "{} points at unknown #{}", result.title(), id);
            }
        }
    }

    #[test]
    fn test_catalog_search_spans_categories() {
        let index = site_catalog();
        let results = index.search("design");
        let categories: Vec<&str> = results.iter().map(|r| r.category()).collect();
        assert_eq!(categories, vec!["Services"]);

        let results = index.search("policy");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].entry.target, "/privacy");
    }
}
