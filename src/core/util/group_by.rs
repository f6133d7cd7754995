use std::collections::BTreeMap;

/// Counts items per extracted key. Buckets come back sorted by key ascending.
pub fn group_by<'a, T, K, I, F>(items: I, key_fn: F) -> Vec<(K, u64)>
where
    T: 'a,
    K: Ord,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> K,
{
    let mut buckets: BTreeMap<K, u64> = BTreeMap::new();
    for item in items {
        *buckets.entry(key_fn(item)).or_insert(0) += 1;
    }
    buckets.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_sorts_by_key() {
        let words = ["pear", "apple", "pear", "fig", "apple", "pear"];
        let counts = group_by(words.iter(), |w| w.to_string());
        assert_eq!(
            counts,
            vec![
                ("apple".to_string(), 2),
                ("fig".to_string(), 1),
                ("pear".to_string(), 3),
            ]
        );
    }

    #[test]
    fn empty_input_yields_no_buckets() {
        let empty: Vec<u32> = Vec::new();
        assert!(group_by(empty.iter(), |n| *n % 2).is_empty());
    }
}
