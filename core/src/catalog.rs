/// Optional long-form fields shown in the detail overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectDetails {
    pub overview: Option<&'static str>,
    pub role: Option<&'static str>,
    pub tools: &'static [&'static str],
    pub link: Option<&'static str>,
}

/// One portfolio entry. An empty `project_images` slice means the project
/// has no gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub year: &'static str,
    pub image: Option<&'static str>,
    pub details: Option<ProjectDetails>,
    pub project_images: &'static [&'static str],
}

include!(concat!(env!("OUT_DIR"), "/project_catalog.rs"));

pub fn catalog() -> &'static [ProjectRecord] {
    PROJECT_CATALOG
}

pub fn project_by_id(id: &str) -> Option<&'static ProjectRecord> {
    let trimmed = id.trim();
    PROJECT_CATALOG.iter().find(|entry| entry.id == trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_distinct() {
        let mut seen = HashSet::new();
        for entry in catalog() {
            assert!(seen.insert(entry.id), "duplicate id {}", entry.id);
        }
    }

    #[test]
    fn lookup_trims_input() {
        let first = &catalog()[0];
        let found = project_by_id(&format!("  {} ", first.id)).map(|entry| entry.id);
        assert_eq!(found, Some(first.id));
        assert!(project_by_id("no-such-project").is_none());
    }
}
