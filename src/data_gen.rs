//! Random benchmark data.

use rand::distributions::{Distribution, Standard};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default dataset size when none is given on the command line.
pub const DEFAULT_ARRAY_SIZE: usize = 1_000_000;

/// `size` values drawn uniformly from the full range of `T`.
///
/// With a seed the dataset is reproducible across runs; without one the
/// generator is seeded from the OS.
pub fn random_values<T>(size: usize, seed: Option<u64>) -> Vec<T>
where
    Standard: Distribution<T>,
{
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    (0..size).map(|_| rng.gen()).collect()
}
