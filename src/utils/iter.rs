//! Sequence helpers.

/// Map `f` over `iterable`, collecting the results in order.
///
/// # Examples
///
/// ```
/// use progress_timer::utils::iter::lmap;
///
/// assert_eq!(lmap(|n: i32| n * 2, vec![1, 2, 3]), vec![2, 4, 6]);
/// ```
pub fn lmap<T, U, F, I>(f: F, iterable: I) -> Vec<U>
where
    F: FnMut(T) -> U,
    I: IntoIterator<Item = T>,
{
    iterable.into_iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lmap_preserves_order() {
        let words = ["gamma", "alpha", "beta"];
        assert_eq!(lmap(str::len, words), vec![5, 5, 4]);
        assert_eq!(lmap(|w: &str| w.to_uppercase(), words), vec!["GAMMA", "ALPHA", "BETA"]);
    }

    #[test]
    fn test_lmap_empty() {
        let empty: Vec<u32> = Vec::new();
        assert!(lmap(|n| n + 1, empty).is_empty());
    }

    #[test]
    fn test_lmap_stateful_closure() {
        let mut seen = 0;
        let running = lmap(
            |n: u32| {
                seen += n;
                seen
            },
            1..=4,
        );
        assert_eq!(running, vec![1, 3, 6, 10]);
    }
}
