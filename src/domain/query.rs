use serde::{Deserialize, Serialize};

use super::{CategoryFilter, Resource};

/// The transient (search term, category selector) pair behind a view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub term: String,
    pub category: CategoryFilter,
}

impl Query {
    pub fn new(term: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            term: term.into(),
            category,
        }
    }

    pub fn matches(&self, resource: &Resource) -> bool {
        self.category.admits(resource.category) && matches_term(resource, &self.term.to_lowercase())
    }

    pub fn apply<'a>(&self, records: &'a [Resource]) -> Vec<&'a Resource> {
        filter(records, &self.term, self.category)
    }
}

/// Selects the records passing both the category and the text test,
/// preserving input order.
pub fn filter<'a>(records: &'a [Resource], term: &str, category: CategoryFilter) -> Vec<&'a Resource> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|resource| category.admits(resource.category))
        .filter(|resource| matches_term(resource, &needle))
        .collect()
}

// `needle` is already lowercased.
fn matches_term(resource: &Resource, needle: &str) -> bool {
    needle.is_empty()
        || resource.title.to_lowercase().contains(needle)
        || resource.description.to_lowercase().contains(needle)
        || resource
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::infrastructure::adapters::seed;

    fn titles(view: &[&Resource]) -> Vec<String> {
        view.iter().map(|r| r.title.clone()).collect()
    }

    #[test]
    fn empty_query_is_identity() {
        let records = seed::builtin();
        let view = filter(&records, "", CategoryFilter::All);
        let expected: Vec<&Resource> = records.iter().collect();
        assert_eq!(view, expected);
    }

    #[test]
    fn term_matches_title_description_and_tags_case_insensitively() {
        let records = seed::builtin();

        assert_eq!(
            titles(&filter(&records, "JAVASCRIPT", CategoryFilter::All)),
            vec!["JavaScript Full Course", "React.js Complete Documentation"]
        );
        // description only
        assert_eq!(
            titles(&filter(&records, "memory allocation", CategoryFilter::All)),
            vec!["Operating Systems Notes"]
        );
        // tag only
        assert_eq!(
            titles(&filter(&records, "placement", CategoryFilter::All)),
            vec!["Quantitative Aptitude Guide"]
        );
    }

    #[test]
    fn category_and_term_are_combined_with_and() {
        let records = seed::builtin();
        let programming = CategoryFilter::Only(Category::Programming);

        assert_eq!(filter(&records, "", programming).len(), 2);
        assert_eq!(
            titles(&filter(&records, "react", programming)),
            vec!["React.js Complete Documentation"]
        );
        assert!(filter(&records, "arduino", programming).is_empty());
        assert!(filter(&records, "", CategoryFilter::Only(Category::More)).is_empty());
    }

    #[test]
    fn term_is_not_trimmed() {
        let records = seed::builtin();
        assert!(filter(&records, "arduino  ", CategoryFilter::All).is_empty());
        assert_eq!(filter(&records, "arduino", CategoryFilter::All).len(), 1);
    }

    #[test]
    fn every_record_is_found_by_its_own_title() {
        let records = seed::builtin();
        for record in &records {
            let view = filter(&records, &record.title, CategoryFilter::All);
            assert!(view.contains(&record));
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = seed::builtin();
        let query = Query::new("co", CategoryFilter::All);

        let once: Vec<Resource> = query.apply(&records).into_iter().cloned().collect();
        let twice: Vec<Resource> = query.apply(&once).into_iter().cloned().collect();
        assert_eq!(once, twice);
        assert!(!once.is_empty());
    }

    #[test]
    fn matches_agrees_with_filter() {
        let records = seed::builtin();
        let query = Query::new("Science", CategoryFilter::Only(Category::CompetitiveExams));
        let expected: Vec<&Resource> = records.iter().filter(|r| query.matches(r)).collect();
        assert_eq!(query.apply(&records), expected);
        assert_eq!(expected.len(), 1);
    }
}
