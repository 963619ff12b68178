use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro64StarStar;

/// A cheap rng with a fixed seed, for reproducible tests.
pub fn consistent_rng() -> impl Rng {
    Xoroshiro64StarStar::seed_from_u64(0)
}
