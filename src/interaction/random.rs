use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Adapter from any `rand` generator.
pub struct RngSource<R>(R);

impl RngSource<StdRng> {
    /// Generator seeded from the operating system.
    pub fn from_os() -> Self {
        Self(StdRng::from_os_rng())
    }

    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Replays a fixed list of samples, cycling when exhausted.
#[cfg(test)]
pub struct ScriptedSource {
    samples: Vec<f64>,
    pos: usize,
    pub draws: usize,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new(samples: &[f64]) -> Self {
        assert!(!samples.is_empty());
        Self {
            samples: samples.to_vec(),
            pos: 0,
            draws: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let v = self.samples[self.pos % self.samples.len()];
        self.pos += 1;
        self.draws += 1;
        v
    }
}
