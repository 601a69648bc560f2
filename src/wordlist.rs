//! Word-list loading and sampling.

use std::fs;
use std::path::Path;

use crate::config::CasePolicy;
use crate::error::{WfResult, WordfitError};

/// Read a word list, one candidate per line, normalized per `case`.
/// Trailing whitespace is stripped before normalization; lines that end
/// up empty are dropped.
pub fn load_words<P: AsRef<Path>>(path: P, case: CasePolicy) -> WfResult<Vec<String>> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        WordfitError::Config(format!(
            "could not open word list '{}': {}",
            path.as_ref().display(),
            e
        ))
    })?;

    Ok(content
        .lines()
        .map(|line| normalize(line.trim_end(), case))
        .filter(|word| !word.is_empty())
        .collect())
}

pub fn normalize(word: &str, case: CasePolicy) -> String {
    match case {
        CasePolicy::Upper => word.to_uppercase(),
        CasePolicy::Lower => word.to_lowercase(),
        CasePolicy::InitialCap => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        }
    }
}

/// Shuffle-then-truncate sampling. The shuffle runs before truncation so
/// a limited cache draws from the whole list.
pub fn sample(
    mut words: Vec<String>,
    shuffle: bool,
    seed: Option<u64>,
    max_words: usize,
) -> Vec<String> {
    if shuffle {
        let mut rng = match seed {
            Some(s) => fastrand::Rng::with_seed(s),
            None => fastrand::Rng::new(),
        };
        rng.shuffle(&mut words);
    }
    words.truncate(max_words);
    words
}
