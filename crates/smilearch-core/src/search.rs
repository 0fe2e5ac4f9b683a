//! Care tip search over the tooth catalog

use crate::catalog::{Catalog, ToothRecord};

/// Maximum number of records a search returns
pub const SEARCH_RESULT_LIMIT: usize = 8;

/// Filter the catalog by a free-text query.
///
/// Matching is case-insensitive substring containment against the record's
/// name and tip. Results keep catalog order and are capped at
/// [`SEARCH_RESULT_LIMIT`]; an empty query returns the first records.
pub fn filter<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a ToothRecord> {
    let needle = query.trim().to_lowercase();

    if needle.is_empty() {
        return catalog.iter().take(SEARCH_RESULT_LIMIT).collect();
    }

    catalog
        .iter()
        .filter(|record| record.search_text().contains(&needle))
        .take(SEARCH_RESULT_LIMIT)
        .collect()
}
