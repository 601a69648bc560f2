//! Band selection over the width cache.

use tracing::debug;

use crate::cache::WidthCache;
use crate::config::SelectionParams;

/// Outcome of a selection run.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Accepted words, in acceptance order.
    pub words: Vec<String>,
    /// Number of scans actually executed.
    pub cycles_run: usize,
    /// Tolerance active during the last executed scan.
    pub final_tolerance: f64,
}

impl Selection {
    /// True when the band had to be widened past the configured starting
    /// tolerance, i.e. selection precision is reduced.
    pub fn widened(&self) -> bool {
        self.cycles_run > 1
    }
}

/// Scan the cache in iteration order for up to `count` distinct words
/// whose width lies strictly inside `(target - tolerance, target +
/// tolerance)`. On shortfall the tolerance is multiplied by `multiplier`
/// and the scan repeats, up to `max_cycles` times; words accepted in
/// earlier scans stay accepted. Disabling `retry` caps the run at one scan.
pub fn select(cache: &WidthCache, params: &SelectionParams) -> Selection {
    let mut tolerance = params.tolerance;
    let mut selection = Selection {
        words: Vec::new(),
        cycles_run: 0,
        final_tolerance: tolerance,
    };

    if params.count == 0 || cache.is_empty() {
        return selection;
    }

    let max_cycles = if params.retry { params.max_cycles } else { 1 };

    for cycle in 0..max_cycles {
        selection.cycles_run += 1;
        selection.final_tolerance = tolerance;

        let lo = params.target - tolerance;
        let hi = params.target + tolerance;

        for (word, width) in cache.iter() {
            if selection.words.len() >= params.count {
                break;
            }
            let w = f64::from(width);
            if lo < w && w < hi && !selection.words.iter().any(|s| s == word) {
                selection.words.push(word.to_string());
            }
        }

        if selection.words.len() >= params.count {
            break;
        }
        if cycle + 1 < max_cycles {
            tolerance *= params.multiplier;
            debug!(
                cycle = selection.cycles_run,
                tolerance, "scan fell short; widening band"
            );
        }
    }

    selection
}
