//! Rhyme scheme tiling and grouping.
//!
//! A scheme is a label string such as "AABB" or "ABAB". Before enforcement it
//! is tiled (repeated and truncated) to exactly the stanza length; lines whose
//! label repeats form a rhyme group and must share an end-rhyme key.

/// Tile `scheme` (upper-cased) to exactly `n_lines` characters.
///
/// An empty scheme stays empty, which yields no groups.
pub fn tile_scheme(scheme: &str, n_lines: usize) -> String {
    let upper = scheme.trim().to_uppercase();
    if upper.is_empty() || n_lines == 0 {
        return String::new();
    }
    upper.chars().cycle().take(n_lines).collect()
}

/// Group stanza line indices by repeated scheme label.
///
/// Labels occurring only once impose no constraint and are dropped. Groups
/// are ordered by first appearance; indices within a group are ascending.
///
/// # Examples
///
/// ```
/// use versecraft::generation::scheme::rhyme_groups;
///
/// assert_eq!(rhyme_groups("AABB", 4), vec![vec![0, 1], vec![2, 3]]);
/// assert_eq!(rhyme_groups("ABAB", 4), vec![vec![0, 2], vec![1, 3]]);
/// ```
pub fn rhyme_groups(scheme: &str, n_lines: usize) -> Vec<Vec<usize>> {
    let tiled = tile_scheme(scheme, n_lines);
    let mut order: Vec<char> = Vec::new();
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for (i, label) in tiled.chars().enumerate() {
        match order.iter().position(|&c| c == label) {
            Some(g) => groups[g].push(i),
            None => {
                order.push(label);
                groups.push(vec![i]);
            }
        }
    }
    groups.retain(|g| g.len() > 1);
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_repeats_and_truncates() {
        assert_eq!(tile_scheme("AABB", 4), "AABB");
        assert_eq!(tile_scheme("AB", 5), "ABABA");
        assert_eq!(tile_scheme("AABB", 2), "AA");
        assert_eq!(tile_scheme("abab", 4), "ABAB");
    }

    #[test]
    fn test_empty_scheme() {
        assert_eq!(tile_scheme("", 4), "");
        assert!(rhyme_groups("", 4).is_empty());
        assert!(rhyme_groups("   ", 4).is_empty());
    }

    #[test]
    fn test_groups_aabb() {
        assert_eq!(rhyme_groups("AABB", 4), vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn test_groups_abab() {
        assert_eq!(rhyme_groups("ABAB", 4), vec![vec![0, 2], vec![1, 3]]);
    }

    #[test]
    fn test_singleton_labels_dropped() {
        // "ABCB" over 4 lines: only B repeats.
        assert_eq!(rhyme_groups("ABCB", 4), vec![vec![1, 3]]);
        // All distinct: nothing to enforce.
        assert!(rhyme_groups("ABCD", 4).is_empty());
    }

    #[test]
    fn test_tiling_creates_groups() {
        // "AB" tiled over 5 lines becomes ABABA.
        assert_eq!(rhyme_groups("AB", 5), vec![vec![0, 2, 4], vec![1, 3]]);
    }
}
