//! The width cache: an insertion-ordered word → width mapping, persisted
//! as JSON between runs.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::CacheParams;
use crate::error::WfResult;
use crate::font::GlyphMetrics;
use crate::wordlist;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub word: String,
    pub width: u32,
}

/// Word → width mapping in build order.
///
/// Iteration order is insertion order (the shuffled order when shuffling
/// was on), which decides which words the selector prefers when more than
/// `count` qualify. A word inserted twice keeps its first position; the
/// last width wins. Never mutated once selection starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidthCache {
    entries: Vec<CacheEntry>,
    index: HashMap<String, usize>,
}

impl WidthCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: String, width: u32) {
        match self.index.get(&word) {
            Some(&i) => self.entries[i].width = width,
            None => {
                self.index.insert(word.clone(), self.entries.len());
                self.entries.push(CacheEntry { word, width });
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<u32> {
        self.index.get(word).map(|&i| self.entries[i].width)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries.iter().map(|e| (e.word.as_str(), e.width))
    }

    /// Compute a fresh cache for `words` against a metrics source.
    pub fn compute<M: GlyphMetrics>(words: &[String], metrics: &M, kerning: bool) -> Self {
        let mut cache = Self::new();
        for word in words {
            cache.insert(word.clone(), word_width(word, metrics, kerning));
        }
        cache
    }

    /// Load the persisted cache unless `force_recompute` is set or loading
    /// fails; otherwise rebuild from the word list and persist the result.
    /// `open_metrics` runs only when a rebuild actually happens, so a valid
    /// cache file never touches the font.
    pub fn load_or_compute<M, F>(
        cache_path: &Path,
        words_path: &Path,
        open_metrics: F,
        params: &CacheParams,
    ) -> WfResult<Self>
    where
        M: GlyphMetrics,
        F: FnOnce() -> WfResult<M>,
    {
        if !params.force_recompute {
            match Self::load(cache_path) {
                Ok(cache) => {
                    debug!(
                        entries = cache.len(),
                        "loaded width cache from '{}'",
                        cache_path.display()
                    );
                    return Ok(cache);
                }
                Err(e) => {
                    warn!(
                        "width cache at '{}' could not be loaded ({}); recomputing",
                        cache_path.display(),
                        e
                    );
                }
            }
        }

        let metrics = open_metrics()?;
        Self::recompute(cache_path, words_path, &metrics, params)
    }

    /// Full rebuild: read and sample the word list, compute every width,
    /// replace the persisted cache.
    pub fn recompute<M: GlyphMetrics>(
        cache_path: &Path,
        words_path: &Path,
        metrics: &M,
        params: &CacheParams,
    ) -> WfResult<Self> {
        let words = wordlist::load_words(words_path, params.case)?;
        let words = wordlist::sample(words, params.shuffle, params.seed, params.max_words);
        let cache = Self::compute(&words, metrics, params.kerning);
        cache.save(cache_path)?;
        debug!(
            entries = cache.len(),
            "recomputed width cache into '{}'",
            cache_path.display()
        );
        Ok(cache)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> WfResult<()> {
        let json = serde_json::to_string(&self.entries)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> WfResult<Self> {
        let content = fs::read_to_string(path)?;
        let entries: Vec<CacheEntry> = serde_json::from_str(&content)?;
        let mut cache = Self::new();
        for entry in entries {
            cache.insert(entry.word, entry.width);
        }
        Ok(cache)
    }
}

/// Width of a word in font units: the advance widths of every character
/// the font renders, plus, when `kerning` is on, the kerning delta of each
/// adjacent pair where both characters have glyphs. Characters without
/// glyphs contribute nothing and do not block their neighbors.
pub fn word_width<M: GlyphMetrics>(word: &str, metrics: &M, kerning: bool) -> u32 {
    let chars: Vec<char> = word.chars().collect();
    let mut width: i64 = 0;

    for (i, &ch) in chars.iter().enumerate() {
        let Some(advance) = metrics.advance(ch) else {
            continue;
        };
        width += i64::from(advance);

        if kerning {
            if let Some(&next) = chars.get(i + 1) {
                if metrics.advance(next).is_some() {
                    if let Some(delta) = metrics.kern(ch, next) {
                        width += i64::from(delta);
                    }
                }
            }
        }
    }

    // Kern deltas are usually negative; a pathological kern table could
    // drag the sum below zero.
    width.max(0) as u32
}
