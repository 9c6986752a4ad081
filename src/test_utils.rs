//! Helpers for tests, here and in downstream crates (`test-utils` feature).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Element, TriList};

pub type SampleList = TriList<i32, String, f64>;
pub type SampleElement = Element<i32, String, f64>;

/// Install a test logger once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A random element. Floats are whole numbers so arithmetic stays exact.
pub fn random_element(rng: &mut impl Rng) -> SampleElement {
    match rng.gen_range(0..3) {
        0 => Element::First(rng.gen_range(-1_000..1_000)),
        1 => {
            let len = rng.gen_range(0..4);
            let s: String = (0..len)
                .map(|_| char::from(b'a' + rng.gen_range(0..26u8)))
                .collect();
            Element::Second(s)
        }
        _ => Element::Third(f64::from(rng.gen_range(-1_000..1_000i32))),
    }
}

pub fn random_elements(rng: &mut impl Rng, n: usize) -> Vec<SampleElement> {
    (0..n).map(|_| random_element(rng)).collect()
}
