/// Minimum similarity for a name to be suggested, in percent.
const SIMILARITY_THRESHOLD: f64 = 70.0;

/// Character-level similarity between two strings as a percentage of the
/// longer string's length.
pub fn similarity(lhs: &str, rhs: &str) -> f64 {
    let size = lhs.chars().count().max(rhs.chars().count());
    if size == 0 {
        return 100.0;
    }
    let distance = distance::levenshtein(lhs, rhs);
    (size - distance) as f64 / size as f64 * 100.0
}

/// Filter `candidates` down to the ones similar enough to `name` to be worth
/// suggesting.
pub fn similar_names<'a>(
    name: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Vec<&'a str> {
    candidates
        .filter(|candidate| similarity(name, candidate) > SIMILARITY_THRESHOLD)
        .collect()
}
