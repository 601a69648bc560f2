use std::collections::HashMap;
use tempfile::TempDir;
use wordfit::cache::{word_width, WidthCache};
use wordfit::font::GlyphMetrics;

// --- TABLE-BACKED METRICS ---
#[derive(Default)]
struct TableMetrics {
    advances: HashMap<char, u32>,
    kerns: HashMap<(char, char), i32>,
}

impl TableMetrics {
    fn with_advances(pairs: &[(char, u32)]) -> Self {
        Self {
            advances: pairs.iter().copied().collect(),
            kerns: HashMap::new(),
        }
    }

    fn with_kern(mut self, left: char, right: char, delta: i32) -> Self {
        self.kerns.insert((left, right), delta);
        self
    }
}

impl GlyphMetrics for TableMetrics {
    fn advance(&self, ch: char) -> Option<u32> {
        self.advances.get(&ch).copied()
    }

    fn kern(&self, left: char, right: char) -> Option<i32> {
        self.kerns.get(&(left, right)).copied()
    }
}

// --- WIDTH COMPUTATION ---

#[test]
fn width_is_the_sum_of_advances() {
    let metrics = TableMetrics::with_advances(&[('c', 100), ('a', 200), ('t', 50)]);
    assert_eq!(word_width("cat", &metrics, false), 350);
}

#[test]
fn kerning_applies_to_adjacent_pairs() {
    let metrics = TableMetrics::with_advances(&[('c', 100), ('a', 200), ('t', 50)])
        .with_kern('c', 'a', -30)
        .with_kern('a', 't', 10);

    assert_eq!(word_width("cat", &metrics, true), 330);
    // Kerning off ignores the pair table entirely.
    assert_eq!(word_width("cat", &metrics, false), 350);
}

#[test]
fn missing_characters_contribute_nothing() {
    let metrics = TableMetrics::with_advances(&[('a', 200), ('t', 50)]);
    // 'x' has no glyph; 'a' and 't' still count.
    assert_eq!(word_width("xat", &metrics, false), 250);
    assert_eq!(word_width("axt", &metrics, false), 250);
    assert_eq!(word_width("", &metrics, false), 0);
    assert_eq!(word_width("xyz", &metrics, false), 0);
}

#[test]
fn kerning_requires_both_glyphs() {
    // 'x' has a kern entry but no glyph; the pair must not apply.
    let metrics = TableMetrics::with_advances(&[('a', 200)])
        .with_kern('a', 'x', -50)
        .with_kern('x', 'a', -50);

    assert_eq!(word_width("axa", &metrics, true), 400);
}

#[test]
fn pathological_kerning_clamps_at_zero() {
    let metrics = TableMetrics::with_advances(&[('a', 10), ('b', 10)]).with_kern('a', 'b', -1000);
    assert_eq!(word_width("ab", &metrics, true), 0);
}

// --- CACHE SEMANTICS ---

#[test]
fn compute_gives_every_word_one_entry() {
    let metrics = TableMetrics::with_advances(&[('a', 100), ('b', 150)]);
    let words = vec!["ab".to_string(), "a".to_string(), "b".to_string()];
    let cache = WidthCache::compute(&words, &metrics, false);

    assert_eq!(cache.len(), 3);
    assert_eq!(cache.get("ab"), Some(250));
    assert_eq!(cache.get("a"), Some(100));
    assert_eq!(cache.get("b"), Some(150));
}

#[test]
fn duplicates_keep_first_position_and_last_width() {
    let mut cache = WidthCache::new();
    cache.insert("alpha".to_string(), 5);
    cache.insert("beta".to_string(), 6);
    cache.insert("alpha".to_string(), 9);

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get("alpha"), Some(9));
    let order: Vec<&str> = cache.iter().map(|(w, _)| w).collect();
    assert_eq!(order, vec!["alpha", "beta"]);
}

#[test]
fn save_and_load_round_trips_contents_and_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cache.json");

    let mut cache = WidthCache::new();
    cache.insert("zebra".to_string(), 400);
    cache.insert("ant".to_string(), 120);
    cache.insert("mole".to_string(), 310);
    cache.save(&path).unwrap();

    let loaded = WidthCache::load(&path).unwrap();
    assert_eq!(loaded, cache);
    let order: Vec<&str> = loaded.iter().map(|(w, _)| w).collect();
    assert_eq!(order, vec!["zebra", "ant", "mole"]);
}

#[test]
fn corrupt_cache_file_fails_to_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cache.json");
    std::fs::write(&path, "{not json").unwrap();

    assert!(WidthCache::load(&path).is_err());
    assert!(WidthCache::load(dir.path().join("missing.json")).is_err());
}

#[test]
fn recompute_is_deterministic_without_shuffle() {
    let metrics = TableMetrics::with_advances(&[('a', 100), ('b', 150), ('c', 70)]);
    let words: Vec<String> = ["abc", "cab", "bca", "aa"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let first = WidthCache::compute(&words, &metrics, false);
    let second = WidthCache::compute(&words, &metrics, false);
    assert_eq!(first, second);
}
