// izondrame: randomizer for a list of distinct entries (score-ordered shuffle)
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

use crate::{
    config::Config,
    score::{calculate_scores, Score},
};
use anyhow::{Error, Result};
use log::error;
use rand::{thread_rng, Rng};

/// Placeholder result produced when scores and entries cannot be paired up.
pub const MISALIGNED_MESSAGE: &str =
    "Scores and User Inputs do not align in terms of number of entries. Please check with dev.";

// an entry tagged with the score that places it
struct ScoredEntry {
    score: Score,
    entry: String,
}

/// Order entries by ascending score, where `scores[i]` belongs to `entries[i]`.
///
/// Mismatched lengths are an internal error: the result is then the single
/// [`MISALIGNED_MESSAGE`] instead of any reordering.
pub fn align_results(scores: &[Score], entries: Vec<String>) -> Vec<String> {
    if scores.len() != entries.len() {
        error!(
            "{} scores for {} entries, refusing to reorder",
            scores.len(),
            entries.len()
        );
        return vec![MISALIGNED_MESSAGE.to_string()];
    }

    let mut scored: Vec<ScoredEntry> = scores
        .iter()
        .zip(entries)
        .map(|(&score, entry)| ScoredEntry { score, entry })
        .collect();
    scored.sort_by_key(|scored_entry| scored_entry.score);
    scored.into_iter().map(|scored_entry| scored_entry.entry).collect()
}

/// Score the entries with `rng` and return them in score order.
pub fn randomize<R: Rng>(
    entries: Vec<String>,
    rng: &mut R,
    max_attempts: u32,
) -> Result<Vec<String>, Error> {
    let scores = calculate_scores(entries.len(), rng, max_attempts)?;
    Ok(align_results(&scores, entries))
}

/// Turn collected entries into the result list for this run.
pub fn execute(entries: Vec<String>, config: &Config) -> Result<Vec<String>, Error> {
    let mut rng = thread_rng();
    randomize(entries, &mut rng, config.max_attempts)
}
