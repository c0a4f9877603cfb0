/// Where the random source gets its seed from whenever the interpreter resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Seed {
    /// Derive a fresh seed from the wall clock on every reset
    #[default]
    Entropy,
    /// Always reseed with the same value, which makes `CXNN` reproducible
    Fixed(u64),
}

/// Settings that survive `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub seed: Seed,
}

impl Config {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Seed::Fixed(seed),
        }
    }
}
