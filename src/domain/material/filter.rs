// SPDX-License-Identifier: MPL-2.0
//! Catalog filtering for the student browse screen.
//!
//! This module contains pure filter types without I/O. The view derives the
//! visible subset from the current selections on every render; there is no
//! incremental update path.
//!
//! # Filter pipeline
//!
//! Applied in order, with AND logic:
//! 1. year equality;
//! 2. case-insensitive substring match of the search text against title or
//!    subject (skipped when the search text is empty);
//! 3. exact subject match (skipped for the "all subjects" sentinel).

use super::{StudyMaterial, Year};

// =============================================================================
// Subject Filter
// =============================================================================

/// Secondary filter dimension, scoped to the selected year's subjects.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubjectFilter {
    /// The "all subjects" sentinel; matches every record.
    #[default]
    All,
    /// Exact subject match.
    Only(String),
}

impl SubjectFilter {
    /// Returns `true` if this filter matches the given subject.
    #[must_use]
    pub fn matches(&self, subject: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == subject,
        }
    }

    /// Returns `true` if this filter is active (not the sentinel).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }
}

// =============================================================================
// Composite Catalog Filter
// =============================================================================

/// Combined catalog filter with AND logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Selected curriculum year; always active.
    pub year: Year,
    /// Free-text search over title and subject. Empty means inactive.
    pub search: String,
    /// Subject facet, scoped to the selected year.
    pub subject: SubjectFilter,
}

impl CatalogFilter {
    /// Creates a filter for `year` with no search text and the subject
    /// sentinel.
    #[must_use]
    pub fn new(year: Year) -> Self {
        Self {
            year,
            search: String::new(),
            subject: SubjectFilter::All,
        }
    }

    /// Returns `true` if the record passes all active criteria.
    #[must_use]
    pub fn matches(&self, material: &StudyMaterial) -> bool {
        if material.year != self.year {
            return false;
        }

        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let in_title = material.title.to_lowercase().contains(&needle);
            let in_subject = material.subject.to_lowercase().contains(&needle);
            if !in_title && !in_subject {
                return false;
            }
        }

        self.subject.matches(&material.subject)
    }

    /// Derives the visible subset, preserving catalog order.
    #[must_use]
    pub fn apply<'a>(&self, catalog: &'a [StudyMaterial]) -> Vec<&'a StudyMaterial> {
        catalog.iter().filter(|m| self.matches(m)).collect()
    }

    /// Returns `true` when search or subject narrow the year's records.
    /// Decides which empty-state message the browse screen shows.
    #[must_use]
    pub fn is_narrowed(&self) -> bool {
        !self.search.is_empty() || self.subject.is_active()
    }
}

/// Subjects offered in the filter control for `year`.
///
/// Derived from the year-filtered set only (not globally), de-duplicated,
/// in first-occurrence order of the underlying catalog.
#[must_use]
pub fn available_subjects(catalog: &[StudyMaterial], year: Year) -> Vec<String> {
    let mut subjects: Vec<String> = Vec::new();
    for material in catalog.iter().filter(|m| m.year == year) {
        if !subjects.iter().any(|s| s == &material.subject) {
            subjects.push(material.subject.clone());
        }
    }
    subjects
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::material::mock_catalog;

    fn year(value: u8) -> Year {
        Year::new(value).expect("valid test year")
    }

    fn visible_ids(filter: &CatalogFilter) -> Vec<String> {
        let catalog = mock_catalog();
        filter
            .apply(&catalog)
            .iter()
            .map(|m| m.id.as_str().to_string())
            .collect()
    }

    // -------------------------------------------------------------------------
    // Year partition
    // -------------------------------------------------------------------------

    #[test]
    fn year_two_yields_first_three_records() {
        let filter = CatalogFilter::new(year(2));
        assert_eq!(visible_ids(&filter), vec!["1", "2", "3"]);
    }

    #[test]
    fn year_three_yields_last_two_records() {
        let filter = CatalogFilter::new(year(3));
        assert_eq!(visible_ids(&filter), vec!["4", "5"]);
    }

    #[test]
    fn empty_years_yield_no_records() {
        assert!(visible_ids(&CatalogFilter::new(year(1))).is_empty());
        assert!(visible_ids(&CatalogFilter::new(year(4))).is_empty());
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    #[test]
    fn search_matches_title_substring() {
        let mut filter = CatalogFilter::new(year(2));
        filter.search = "data".to_string();
        assert_eq!(visible_ids(&filter), vec!["1"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let mut filter = CatalogFilter::new(year(2));
        filter.search = "DATA".to_string();
        assert_eq!(visible_ids(&filter), vec!["1"]);
    }

    #[test]
    fn search_matches_subject_substring() {
        let mut filter = CatalogFilter::new(year(3));
        filter.search = "networks".to_string();
        assert_eq!(visible_ids(&filter), vec!["5"]);
    }

    #[test]
    fn non_matching_search_yields_empty_set() {
        let mut filter = CatalogFilter::new(year(2));
        filter.search = "quantum chromodynamics".to_string();
        assert!(visible_ids(&filter).is_empty());
    }

    // -------------------------------------------------------------------------
    // Subject facet
    // -------------------------------------------------------------------------

    #[test]
    fn subject_filter_requires_exact_match() {
        let mut filter = CatalogFilter::new(year(2));
        filter.subject = SubjectFilter::Only("Algorithms".to_string());
        assert_eq!(visible_ids(&filter), vec!["2"]);
    }

    #[test]
    fn subject_sentinel_matches_everything() {
        assert!(SubjectFilter::All.matches("anything"));
        assert!(!SubjectFilter::All.is_active());
        assert!(SubjectFilter::Only("OOP".to_string()).is_active());
    }

    #[test]
    fn stale_subject_from_another_year_yields_empty_set() {
        // The selection is deliberately kept when the year changes; the
        // filter then produces an empty result rather than an error.
        let mut filter = CatalogFilter::new(year(3));
        filter.subject = SubjectFilter::Only("Algorithms".to_string());
        assert!(visible_ids(&filter).is_empty());
    }

    #[test]
    fn search_and_subject_combine_with_and_logic() {
        let mut filter = CatalogFilter::new(year(2));
        filter.search = "complexity".to_string();
        filter.subject = SubjectFilter::Only("Algorithms".to_string());
        assert_eq!(visible_ids(&filter), vec!["2"]);

        filter.subject = SubjectFilter::Only("OOP".to_string());
        assert!(visible_ids(&filter).is_empty());
    }

    // -------------------------------------------------------------------------
    // Available subjects
    // -------------------------------------------------------------------------

    #[test]
    fn available_subjects_scoped_to_year_in_first_occurrence_order() {
        let catalog = mock_catalog();
        assert_eq!(
            available_subjects(&catalog, year(3)),
            vec!["Database Systems", "Computer Networks"]
        );
        assert_eq!(
            available_subjects(&catalog, year(2)),
            vec!["Data Structures", "Algorithms", "OOP"]
        );
    }

    #[test]
    fn available_subjects_deduplicates() {
        let mut catalog = mock_catalog();
        let duplicate = catalog[0].clone();
        catalog.push(duplicate);
        assert_eq!(
            available_subjects(&catalog, year(2)),
            vec!["Data Structures", "Algorithms", "OOP"]
        );
    }

    #[test]
    fn available_subjects_empty_year_is_empty() {
        let catalog = mock_catalog();
        assert!(available_subjects(&catalog, year(1)).is_empty());
    }

    // -------------------------------------------------------------------------
    // Narrowing flag
    // -------------------------------------------------------------------------

    #[test]
    fn is_narrowed_reflects_search_and_subject() {
        let mut filter = CatalogFilter::new(year(2));
        assert!(!filter.is_narrowed());

        filter.search = "x".to_string();
        assert!(filter.is_narrowed());

        filter.search.clear();
        filter.subject = SubjectFilter::Only("OOP".to_string());
        assert!(filter.is_narrowed());
    }
}
