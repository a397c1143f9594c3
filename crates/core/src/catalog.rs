//! Template catalog filtering.
//!
//! The catalog view filters by category slug and by a free-text query.
//! The predicate lives here (zero internal deps) so the HTTP layer and
//! tests share one definition instead of re-deriving it per call site.

/// Read-only view of a catalog row needed by the filter predicate.
///
/// Implemented by the joined template model in the repository layer and
/// by lightweight fixtures in tests.
pub trait CatalogEntry {
    fn name(&self) -> &str;
    fn description(&self) -> Option<&str>;
    /// Slug of the joined category, if the join resolved.
    fn category_slug(&self) -> Option<&str>;
}

/// Normalize a raw search query: trim, lowercase, `None` when empty.
pub fn normalize_query(raw: &str) -> Option<String> {
    let q = raw.trim().to_lowercase();
    if q.is_empty() {
        None
    } else {
        Some(q)
    }
}

/// Whether a single entry passes the category + search filter.
///
/// - Category: matches when no category is selected, or the entry's
///   joined category slug equals the selection. An entry whose category
///   join is missing never matches an active category filter, but passes
///   when no filter is set.
/// - Search: matches when the query is empty, or the lowercased name or
///   description contains the normalized query.
pub fn matches<E: CatalogEntry>(entry: &E, category: Option<&str>, query: Option<&str>) -> bool {
    let category_match = match category {
        None => true,
        Some(slug) => entry.category_slug() == Some(slug),
    };

    let search_match = match query {
        None => true,
        Some(q) => {
            entry.name().to_lowercase().contains(q)
                || entry
                    .description()
                    .is_some_and(|d| d.to_lowercase().contains(q))
        }
    };

    category_match && search_match
}

/// Filter a slice of entries, preserving input order.
///
/// `raw_query` is normalized here; callers pass user input as-is.
pub fn filter<'a, E: CatalogEntry>(
    entries: &'a [E],
    category: Option<&str>,
    raw_query: &str,
) -> Vec<&'a E> {
    let query = normalize_query(raw_query);
    entries
        .iter()
        .filter(|e| matches(*e, category, query.as_deref()))
        .collect()
}
