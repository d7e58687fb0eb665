// Order-preserving uniqueness filter

use std::collections::HashSet;

/// Return each distinct string once, keeping first-occurrence order.
pub fn dedup<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for item in items {
        let item = item.into();
        if seen.insert(item.clone()) {
            result.push(item);
        }
    }
    result
}
