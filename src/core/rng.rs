use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform randomness source for generation. Everything the generators
/// draw — pattern picks, digit counts, calendar fields — derives from the
/// uniform float, so a scripted float stream makes a whole run
/// deterministic in tests.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `[min, max]` inclusive.
    fn int_in_range(&mut self, min: i64, max: i64) -> i64 {
        debug_assert!(min <= max);
        min + (self.next_f64() * (max - min + 1) as f64) as i64
    }
}

/// Pick one element uniformly. Callers guarantee `items` is non-empty.
pub fn choose<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> &'a T {
    let idx = rng.int_in_range(0, items.len() as i64 - 1) as usize;
    &items[idx]
}

/// Production source backed by the thread-local generator.
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn next_f64(&mut self) -> f64 {
        rand::rng().random()
    }
}

/// Reproducible source for `--seed` runs.
pub struct SeededRandomSource {
    rng: StdRng,
}

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn next_f64(&mut self) -> f64 {
        self.rng.random()
    }
}

/// Replays a fixed float sequence, cycling when exhausted. Test-only in
/// spirit but lives here so unit and integration tests share it.
pub struct ScriptedRandomSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandomSource {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "scripted source needs at least one value");
        Self { values, cursor: 0 }
    }
}

impl RandomSource for ScriptedRandomSource {
    fn next_f64(&mut self) -> f64 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}
