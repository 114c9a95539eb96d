//! Lazy sequence pipelines.

/// Unbounded ascending integers starting at 0.
///
/// Each call starts a fresh sequence; nothing is computed until pulled.
pub fn naturals() -> impl Iterator<Item = u64> {
    std::iter::successors(Some(0_u64), |n| n.checked_add(1))
}

/// Even values among the first `limit` naturals, ascending.
pub fn even_prefix(limit: usize) -> impl Iterator<Item = u64> {
    naturals().take(limit).filter(|n| n % 2 == 0)
}

pub fn uppercase<'a, I>(names: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().map(str::to_uppercase)
}

/// Uppercase each name, append `suffix`, and keep only those containing
/// `needle`. Survivors keep their original relative order.
pub fn shout_matching<'a, I>(names: I, suffix: &str, needle: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .map(|name| name.to_uppercase() + suffix)
        .filter(|name| name.contains(needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naturals_start_at_zero_and_restart() {
        let first: Vec<u64> = naturals().take(3).collect();
        let again: Vec<u64> = naturals().take(3).collect();
        assert_eq!(first, vec![0, 1, 2]);
        assert_eq!(first, again);
    }

    #[test]
    fn even_prefix_of_one_million() {
        let mut count = 0_usize;
        let mut first = None;
        let mut last = None;
        let mut previous: Option<u64> = None;
        for n in even_prefix(1_000_000) {
            if let Some(prev) = previous {
                assert!(n > prev, "sequence not ascending at {n}");
            }
            first.get_or_insert(n);
            last = Some(n);
            previous = Some(n);
            count += 1;
        }
        assert_eq!(count, 500_000);
        assert_eq!(first, Some(0));
        assert_eq!(last, Some(999_998));
    }

    #[test]
    fn odd_limit_rounds_up_half() {
        assert_eq!(even_prefix(5).collect::<Vec<_>>(), vec![0, 2, 4]);
    }

    #[test]
    fn uppercase_keeps_order() {
        let names: Vec<String> = uppercase(["Erix", "Robert", "Ferchis"]).collect();
        assert_eq!(names, vec!["ERIX", "ROBERT", "FERCHIS"]);
    }

    #[test]
    fn shout_matching_filters_after_transform() {
        let names = ["Erix", "Robert", "Ferchis", "Juan", "Robert"];
        assert_eq!(shout_matching(names, "!!", "ERIX"), vec!["ERIX!!"]);
        assert_eq!(
            shout_matching(names, "!!", "ROBERT"),
            vec!["ROBERT!!", "ROBERT!!"]
        );
        assert!(shout_matching(names, "!!", "erix").is_empty());
    }
}
