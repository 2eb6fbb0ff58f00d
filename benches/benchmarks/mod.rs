use rand::{rngs::StdRng, Rng, SeedableRng};

pub mod fulltext;
pub mod table;

pub(super) const SEED: [u8; 32] = [100; 32];

pub(super) fn rng() -> StdRng {
    StdRng::from_seed(SEED)
}

/// A random lowercase-ASCII word of length `len`.
pub(super) fn random_word(rng: &mut impl Rng, len: usize) -> String {
    (0..len)
        .map(|_| (b'a' + rng.gen_range(0..26)) as char)
        .collect()
}
