//! Splits the catalog into the three overlay sections.

use std::collections::HashSet;

use crate::catalog::{Catalog, ProjectRecord};

/// Project names promoted to the featured section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSet {
    names: HashSet<String>,
}

impl HighlightSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl Default for HighlightSet {
    /// The site's hardcoded highlights.
    fn default() -> Self {
        Self::new(constants::site::HIGHLIGHTS.iter().copied())
    }
}

/// Disjoint, order-preserving groups covering the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogPartition<'a> {
    pub featured: Vec<&'a ProjectRecord>,
    pub deployed: Vec<&'a ProjectRecord>,
    pub archived: Vec<&'a ProjectRecord>,
}

impl CatalogPartition<'_> {
    pub fn len(&self) -> usize {
        self.featured.len() + self.deployed.len() + self.archived.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Featured: named in `highlights`. Deployed: the rest with a homepage.
/// Archived: everything left. Each record lands in exactly one group and
/// every group keeps catalog order.
pub fn partition<'a>(catalog: &'a Catalog, highlights: &HighlightSet) -> CatalogPartition<'a> {
    let mut groups = CatalogPartition::default();
    for record in catalog {
        if highlights.contains(&record.name) {
            groups.featured.push(record);
        } else if record.is_deployed() {
            groups.deployed.push(record);
        } else {
            groups.archived.push(record);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::record;
    use pretty_assertions::assert_eq;

    fn names<'a>(group: &[&'a ProjectRecord]) -> Vec<&'a str> {
        group.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn featured_wins_over_deployed() {
        let catalog = Catalog::new(vec![
            record("pazuru-pico", "https://x"),
            record("some-lib", ""),
        ])
        .unwrap();
        let groups = partition(&catalog, &HighlightSet::new(["pazuru-pico"]));

        assert_eq!(names(&groups.featured), vec!["pazuru-pico"]);
        assert!(groups.deployed.is_empty());
        assert_eq!(names(&groups.archived), vec!["some-lib"]);
    }

    #[test]
    fn groups_keep_catalog_order() {
        let catalog = Catalog::new(vec![
            record("c", "https://c"),
            record("aibou", ""),
            record("a", ""),
            record("b", "https://b"),
            record("video-clipper", "https://v"),
        ])
        .unwrap();
        let groups = partition(&catalog, &HighlightSet::default());

        assert_eq!(names(&groups.featured), vec!["aibou", "video-clipper"]);
        assert_eq!(names(&groups.deployed), vec!["c", "b"]);
        assert_eq!(names(&groups.archived), vec!["a"]);
        assert_eq!(groups.len(), catalog.len());
    }

    #[test]
    fn missing_homepage_is_archived() {
        let mut no_homepage = record("null-homepage", "");
        no_homepage.homepage_url = None;
        let catalog = Catalog::new(vec![no_homepage, record("blank", "")]).unwrap();
        let groups = partition(&catalog, &HighlightSet::new(Vec::<String>::new()));
        assert_eq!(names(&groups.archived), vec!["null-homepage", "blank"]);
    }
}
