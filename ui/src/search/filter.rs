/// A pure function mapping an item to one searchable string.
pub type FieldExtractor<T> = Box<dyn Fn(&T) -> String + Send + Sync>;

/// Case-insensitive substring search across any of the supplied fields.
///
/// The query is trimmed and lowercased first; an empty result of that
/// normalization matches everything. An item survives when ANY extractor's
/// lowercased output contains the query. The input is never mutated and
/// surviving items keep their original order.
///
/// With no extractors, a non-empty query can match nothing and the result is
/// empty; an empty query still returns every item.
pub fn filter_items<'a, T>(
    query: &str,
    items: &'a [T],
    fields: &[FieldExtractor<T>],
) -> Vec<&'a T> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| {
            fields
                .iter()
                .any(|field| field(item).to_lowercase().contains(&query))
        })
        .collect()
}
