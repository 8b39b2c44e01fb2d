//! Derived View Pipeline
//!
//! Pure filter → resolve → sort over the reference list and the detail
//! cache, plus the pagination arithmetic. Recomputed on every change to
//! any input; no state of its own.

use crate::cache::DetailCache;
use crate::models::{Pokemon, PokemonRef};

/// Cards shown per page.
pub const PAGE_SIZE: usize = 9;

/// Sort selection. `Unsorted` keeps the filtered order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Unsorted,
    Name,
    Hp,
    Attack,
    Defense,
    Speed,
}

impl SortKey {
    /// Parse the `<select>` option value; unknown values mean unsorted.
    pub fn from_value(value: &str) -> Self {
        match value {
            "name" => Self::Name,
            "hp" => Self::Hp,
            "attack" => Self::Attack,
            "defense" => Self::Defense,
            "speed" => Self::Speed,
            _ => Self::Unsorted,
        }
    }

    pub fn as_value(self) -> &'static str {
        match self {
            Self::Unsorted => "",
            Self::Name => "name",
            Self::Hp => "hp",
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::Speed => "speed",
        }
    }

    /// Stat entry name for numeric sorts.
    fn stat_name(self) -> Option<&'static str> {
        match self {
            Self::Hp => Some("hp"),
            Self::Attack => Some("attack"),
            Self::Defense => Some("defense"),
            Self::Speed => Some("speed"),
            Self::Unsorted | Self::Name => None,
        }
    }
}

/// Derive the ordered record sequence for the current view state.
///
/// A reference survives the filter only if its record is already resolved
/// in the cache, its name contains `search` case-insensitively (empty
/// matches everything), and it carries `type_filter` when one is set.
/// Unresolved references reappear once their detail arrives and the
/// pipeline is recomputed.
pub fn compute(
    refs: &[PokemonRef],
    cache: &DetailCache,
    search: &str,
    type_filter: &str,
    sort: SortKey,
) -> Vec<Pokemon> {
    let needle = search.to_lowercase();

    let mut items: Vec<Pokemon> = refs
        .iter()
        .filter_map(|r| cache.record(&r.url))
        .filter(|p| {
            let matches_search = needle.is_empty() || p.name.to_lowercase().contains(&needle);
            let matches_type = type_filter.is_empty() || p.has_type(type_filter);
            matches_search && matches_type
        })
        .cloned()
        .collect();

    match sort {
        SortKey::Unsorted => {}
        SortKey::Name => items.sort_by(|a, b| a.name.cmp(&b.name)),
        stat => {
            // sort_by_key is stable, so ties keep the filtered order
            let name = stat.stat_name().unwrap_or("hp");
            items.sort_by_key(|p| std::cmp::Reverse(p.stat(name)));
        }
    }

    items
}

/// `ceil(count / page_size)`.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size)
}

/// 1-based page slice. Out-of-range pages (including page 0, or a page
/// beyond the end after a search narrowed the result set) are empty
/// rather than an error.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1) * page_size;
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NamedResource, StatEntry, TypeSlot};

    fn make_pokemon(id: u32, name: &str, types: &[&str], stats: &[(&str, u32)]) -> Pokemon {
        Pokemon {
            id,
            name: name.to_string(),
            types: types
                .iter()
                .map(|t| TypeSlot {
                    type_info: NamedResource { name: t.to_string() },
                })
                .collect(),
            stats: stats
                .iter()
                .map(|(stat, value)| StatEntry {
                    base_stat: *value,
                    stat: NamedResource { name: stat.to_string() },
                })
                .collect(),
            abilities: Vec::new(),
            sprites: Default::default(),
        }
    }

    fn make_ref(name: &str, url: &str) -> PokemonRef {
        PokemonRef {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    fn seeded_cache(entries: &[(&str, Pokemon)]) -> DetailCache {
        let mut cache = DetailCache::new();
        for (url, pokemon) in entries {
            cache.resolve(url.to_string(), pokemon.clone());
        }
        cache
    }

    #[test]
    fn test_identity_compute_preserves_reference_order() {
        let refs = vec![make_ref("c", "u3"), make_ref("a", "u1"), make_ref("b", "u2")];
        let cache = seeded_cache(&[
            ("u1", make_pokemon(1, "a", &[], &[])),
            ("u2", make_pokemon(2, "b", &[], &[])),
            ("u3", make_pokemon(3, "c", &[], &[])),
        ]);

        let result = compute(&refs, &cache, "", "", SortKey::Unsorted);
        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn test_empty_cache_yields_empty_view() {
        let refs = vec![make_ref("a", "u1"), make_ref("b", "u2"), make_ref("c", "u3")];
        let cache = DetailCache::new();
        assert!(compute(&refs, &cache, "", "", SortKey::Unsorted).is_empty());
    }

    #[test]
    fn test_unresolved_references_are_excluded() {
        let refs = vec![make_ref("a", "u1"), make_ref("b", "u2")];
        let mut cache = seeded_cache(&[("u1", make_pokemon(1, "a", &[], &[]))]);
        cache.begin_fetch("u2"); // still in flight

        let result = compute(&refs, &cache, "", "", SortKey::Unsorted);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "a");

        // the record reappears once its detail resolves
        cache.resolve("u2".to_string(), make_pokemon(2, "b", &[], &[]));
        assert_eq!(compute(&refs, &cache, "", "", SortKey::Unsorted).len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let refs = vec![make_ref("bulbasaur", "u1"), make_ref("charmander", "u2")];
        let cache = seeded_cache(&[
            ("u1", make_pokemon(1, "bulbasaur", &[], &[])),
            ("u2", make_pokemon(2, "charmander", &[], &[])),
        ]);

        let result = compute(&refs, &cache, "CHAR", "", SortKey::Unsorted);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "charmander");
    }

    #[test]
    fn test_type_filter_scenario() {
        let refs = vec![make_ref("bulbasaur", "u1"), make_ref("charmander", "u2")];
        let cache = seeded_cache(&[
            ("u1", make_pokemon(1, "bulbasaur", &["grass"], &[])),
            ("u2", make_pokemon(2, "charmander", &["fire"], &[])),
        ]);

        let result = compute(&refs, &cache, "", "fire", SortKey::Unsorted);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "charmander");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let refs = vec![make_ref("bulbasaur", "u1"), make_ref("charmander", "u2")];
        let cache = seeded_cache(&[
            ("u1", make_pokemon(1, "bulbasaur", &["grass"], &[])),
            ("u2", make_pokemon(2, "charmander", &["fire"], &[])),
        ]);

        let once = compute(&refs, &cache, "a", "fire", SortKey::Unsorted);
        let again_refs: Vec<PokemonRef> = refs
            .iter()
            .filter(|r| once.iter().any(|p| p.name == r.name))
            .cloned()
            .collect();
        let twice = compute(&again_refs, &cache, "a", "fire", SortKey::Unsorted);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_by_name_is_nondecreasing() {
        let refs = vec![make_ref("c", "u3"), make_ref("a", "u1"), make_ref("b", "u2")];
        let cache = seeded_cache(&[
            ("u1", make_pokemon(1, "a", &[], &[])),
            ("u2", make_pokemon(2, "b", &[], &[])),
            ("u3", make_pokemon(3, "c", &[], &[])),
        ]);

        let result = compute(&refs, &cache, "", "", SortKey::Name);
        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_sort_by_stat_descending_and_stable() {
        // a before c in input, both hp 50; b has hp 80
        let refs = vec![make_ref("a", "u1"), make_ref("b", "u2"), make_ref("c", "u3")];
        let cache = seeded_cache(&[
            ("u1", make_pokemon(1, "a", &[], &[("hp", 50)])),
            ("u2", make_pokemon(2, "b", &[], &[("hp", 80)])),
            ("u3", make_pokemon(3, "c", &[], &[("hp", 50)])),
        ]);

        let result = compute(&refs, &cache, "", "", SortKey::Hp);
        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn test_sort_treats_missing_stat_as_zero() {
        let refs = vec![make_ref("a", "u1"), make_ref("b", "u2")];
        let cache = seeded_cache(&[
            ("u1", make_pokemon(1, "a", &[], &[])), // no attack entry
            ("u2", make_pokemon(2, "b", &[], &[("attack", 10)])),
        ]);

        let result = compute(&refs, &cache, "", "", SortKey::Attack);
        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn test_sort_key_round_trips_select_values() {
        for value in ["", "name", "hp", "attack", "defense", "speed"] {
            assert_eq!(SortKey::from_value(value).as_value(), value);
        }
        assert_eq!(SortKey::from_value("height"), SortKey::Unsorted);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(total_pages(0, 9), 0);
        assert_eq!(total_pages(9, 9), 1);
        assert_eq!(total_pages(10, 9), 2);
        assert_eq!(total_pages(25, 20), 2);
    }

    #[test]
    fn test_page_slice_scenario() {
        // 25 matching items, pageSize 20: page 2 holds items 21..=25, page 3 is empty
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(page_slice(&items, 1, 20).len(), 20);
        assert_eq!(page_slice(&items, 2, 20), &[21, 22, 23, 24, 25]);
        assert!(page_slice(&items, 3, 20).is_empty());
        assert!(page_slice(&items, 0, 20).is_empty());
    }

    #[test]
    fn test_pages_partition_the_sequence() {
        let items: Vec<u32> = (0..47).collect();
        let page_size = 9;
        let pages = total_pages(items.len(), page_size);
        let mut rebuilt = Vec::new();
        for page in 1..=pages {
            rebuilt.extend_from_slice(page_slice(&items, page, page_size));
        }
        assert_eq!(rebuilt, items);
        assert!(page_slice(&items, pages + 1, page_size).is_empty());
    }
}
