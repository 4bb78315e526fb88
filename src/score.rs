// izondrame: randomizer for a list of distinct entries (score generation)
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

use anyhow::{bail, Error, Result};
use log::debug;
use rand::Rng;
use std::collections::HashSet;

/// Transient ranking value for one entry.
pub type Score = u32;

// upper bound of the fixed part of each score
pub const AUGEND_MAX: Score = 37;

/// Produce `count` pairwise distinct scores, each the sum of a draw in `1..=37` and a draw in
/// `1..=count`, so every score lies in `2..=37 + count`.
///
/// A slot is redrawn while its sum is already taken. If a slot still has no unused sum after
/// `max_attempts` draws, generation fails rather than spinning.
pub fn calculate_scores<R: Rng>(
    count: usize,
    rng: &mut R,
    max_attempts: u32,
) -> Result<Vec<Score>, Error> {
    let mut scores: Vec<Score> = Vec::with_capacity(count);
    if count == 0 {
        return Ok(scores);
    }
    let Ok(addend_max) = Score::try_from(count) else {
        bail!("too many entries to score: {count}");
    };

    let mut seen: HashSet<Score> = HashSet::with_capacity(count);
    let mut redraws: u64 = 0;
    'slots: for slot in 0..count {
        for _ in 0..max_attempts {
            let sum = rng.gen_range(1..=AUGEND_MAX) + rng.gen_range(1..=addend_max);
            if seen.insert(sum) {
                scores.push(sum);
                continue 'slots;
            }
            redraws += 1;
        }
        bail!(
            "no unused score found for entry {} of {count} after {max_attempts} attempts",
            slot + 1
        );
    }

    debug!("generated {count} scores with {redraws} redraws");
    Ok(scores)
}
