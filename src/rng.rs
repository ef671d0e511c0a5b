//! Seed handling for grid seeding. Each row draws from its own generator,
//! derived from the run seed with splitmix64, so parallel fills stay
//! reproducible for a fixed seed.
use rand::SeedableRng;
use rand::rngs::StdRng;

pub const SALT_ROW: u64 = 0x5EED_0F_11FE_u64;

#[inline]
pub fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// A new seed from OS entropy.
pub fn fresh_seed() -> u64 {
    rand::random()
}

/// Independent generator for one grid row.
#[inline]
pub fn row_rng(seed: u64, row: usize) -> StdRng {
    StdRng::seed_from_u64(splitmix64(seed ^ SALT_ROW ^ (row as u64).wrapping_mul(0x9E3779B9)))
}
