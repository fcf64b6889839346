//! Random solvable inputs
//!
//! Small arrays with exactly one valid pair, sized for the screen rather than
//! for the validator's upper bounds.

use super::InputData;
use rand::Rng;
use rustc_hash::FxHashSet;

const MIN_LENGTH: usize = 2;
const MAX_LENGTH: usize = 10;
const MIN_VALUE: i64 = -100;
const MAX_VALUE: i64 = 100;

/// Generate an input whose only solution is one planted pair
pub fn generate_random_data<R: Rng + ?Sized>(rng: &mut R) -> InputData {
    let length = rng.random_range(MIN_LENGTH..=MAX_LENGTH);

    let first = rng.random_range(0..length);
    let mut second = rng.random_range(0..length);
    while second == first {
        second = rng.random_range(0..length);
    }

    let a = rng.random_range(MIN_VALUE..=MAX_VALUE);
    let b = rng.random_range(MIN_VALUE..=MAX_VALUE);
    let target = a + b;

    let mut used = FxHashSet::default();
    used.insert(a);
    used.insert(b);

    let nums = (0..length)
        .map(|i| {
            if i == first {
                a
            } else if i == second {
                b
            } else {
                // Fillers must neither repeat nor complete a pair
                loop {
                    let candidate = rng.random_range(MIN_VALUE..=MAX_VALUE);
                    if !used.contains(&(target - candidate)) && !used.contains(&candidate) {
                        used.insert(candidate);
                        break candidate;
                    }
                }
            }
        })
        .collect();

    tracing::debug!(length, target, "generated random input");
    InputData::new(nums, target)
}

/// [`generate_random_data`] with the thread-local generator
pub fn random_input() -> InputData {
    generate_random_data(&mut rand::rng())
}
