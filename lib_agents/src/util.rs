use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

/// A fast rng for agents that pick moves by chance,
/// seeded freshly from the thread rng on every call.
pub fn get_rng() -> XorShiftRng {
    XorShiftRng::from_rng(rand::thread_rng()).expect("Couldn't seed the rng from the thread rng.")
}

/// The same rng family as get_rng(), but with a fixed seed,
/// so tests that rely on randomness are repeatable.
#[allow(unused)]
pub fn get_rng_deterministic() -> XorShiftRng {
    XorShiftRng::seed_from_u64(42)
}

pub fn random_pick<'a, T>(choices: &'a [T], rng: &mut impl Rng) -> Option<&'a T> {
    choices.choose(rng)
}

pub fn random_choice<T>(choices: &[T], rng: &mut impl Rng) -> T
where
    T: Copy,
{
    *random_pick(choices, rng).expect("Attempted to pick a random choice on an empty slice.")
}
