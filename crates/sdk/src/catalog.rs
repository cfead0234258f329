//! Catalog projections
//!
//! Pure views over a term snapshot: counts, search, category filtering, and
//! the owner convention used by the presentation layer. Nothing here holds
//! state or touches the ledger.

use crate::term::{Term, TermStatus};

/// Catalog counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

/// Filter over a term snapshot
///
/// `search` is a case-insensitive substring match against description and
/// category; `category` is an exact match, `None` meaning all categories.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub search: String,
    pub category: Option<String>,
}

/// Counts of active and inactive terms
pub fn stats(terms: &[Term]) -> CatalogStats {
    let active = terms
        .iter()
        .filter(|t| t.status == TermStatus::Active)
        .count();
    CatalogStats {
        total: terms.len(),
        active,
        inactive: terms.len() - active,
    }
}

/// Terms matching the filter, in snapshot order
pub fn filter_terms<'a>(terms: &'a [Term], filter: &CatalogFilter) -> Vec<&'a Term> {
    let query = filter.search.to_lowercase();
    terms
        .iter()
        .filter(|term| {
            let matches_search = term.description.to_lowercase().contains(&query)
                || term.category.to_lowercase().contains(&query);
            let matches_category = match &filter.category {
                Some(category) => &term.category == category,
                None => true,
            };
            matches_search && matches_category
        })
        .collect()
}

/// Distinct categories in first-seen order
pub fn categories(terms: &[Term]) -> Vec<String> {
    let mut seen = Vec::new();
    for term in terms {
        if !seen.contains(&term.category) {
            seen.push(term.category.clone());
        }
    }
    seen
}

/// Whether `address` owns the term, by case-insensitive comparison
///
/// This is the catalog-level convention gating the toggle affordance; the
/// storage layer itself enforces no ownership.
pub fn is_owner(term: &Term, address: &str) -> bool {
    term.owner.to_lowercase() == address.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(id: &str, category: &str, description: &str, status: TermStatus) -> Term {
        Term {
            id: id.to_string(),
            encrypted_condition: "FHE-dHJ1ZQ==".to_string(),
            timestamp: 0,
            owner: "0xAbC".to_string(),
            category: category.to_string(),
            description: description.to_string(),
            status,
        }
    }

    fn sample() -> Vec<Term> {
        vec![
            term("1", "Data Usage", "No ads", TermStatus::Active),
            term("2", "Privacy", "No tracking", TermStatus::Inactive),
            term("3", "Data Usage", "No resale of data", TermStatus::Active),
        ]
    }

    #[test]
    fn test_stats() {
        let s = stats(&sample());
        assert_eq!(s.total, 3);
        assert_eq!(s.active, 2);
        assert_eq!(s.inactive, 1);
    }

    #[test]
    fn test_search_is_case_insensitive_over_both_fields() {
        let terms = sample();

        let by_description = filter_terms(
            &terms,
            &CatalogFilter {
                search: "ADS".to_string(),
                category: None,
            },
        );
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id, "1");

        let by_category = filter_terms(
            &terms,
            &CatalogFilter {
                search: "privacy".to_string(),
                category: None,
            },
        );
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].id, "2");
    }

    #[test]
    fn test_category_filter_is_exact() {
        let terms = sample();
        let filtered = filter_terms(
            &terms,
            &CatalogFilter {
                search: String::new(),
                category: Some("Data Usage".to_string()),
            },
        );
        assert_eq!(filtered.len(), 2);

        let none = filter_terms(
            &terms,
            &CatalogFilter {
                search: String::new(),
                category: Some("data usage".to_string()),
            },
        );
        assert!(none.is_empty());
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let terms = sample();
        assert_eq!(filter_terms(&terms, &CatalogFilter::default()).len(), 3);
    }

    #[test]
    fn test_categories_first_seen_order() {
        assert_eq!(categories(&sample()), vec!["Data Usage", "Privacy"]);
    }

    #[test]
    fn test_is_owner_ignores_case() {
        let terms = sample();
        assert!(is_owner(&terms[0], "0xABC"));
        assert!(is_owner(&terms[0], "0xabc"));
        assert!(!is_owner(&terms[0], "0xdef"));
    }
}
