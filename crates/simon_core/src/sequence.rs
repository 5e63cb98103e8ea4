//! Random pad selection.

use crate::{Pad, SimonError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{instrument, trace};

/// Picks one candidate uniformly at random.
///
/// A uniform draw from `[0, 1)` is scaled by the number of candidates and
/// floored to an index. Every call is independent.
///
/// # Errors
///
/// Returns [`SimonError::EmptyCollection`] when `candidates` is empty.
pub fn pick_random<T, R>(rng: &mut R, candidates: &[T]) -> Result<T, SimonError>
where
    T: Copy,
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return Err(SimonError::EmptyCollection);
    }

    let draw: f64 = rng.random();
    let scaled = (draw * candidates.len() as f64).floor() as usize;
    // Guards the draw == 1.0 - epsilon rounding edge.
    let index = scaled.min(candidates.len() - 1);
    Ok(candidates[index])
}

/// Produces the pad appended to the sequence each round.
#[derive(Debug, Clone)]
pub struct SequenceGenerator<R = StdRng> {
    rng: R,
}

impl SequenceGenerator<StdRng> {
    /// Creates a generator seeded from the operating system.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible generator.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SequenceGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SequenceGenerator<R> {
    /// Wraps an existing random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draws the next pad.
    pub fn next_pad(&mut self) -> Result<Pad, SimonError> {
        let pad = pick_random(&mut self.rng, &Pad::ALL)?;
        trace!(%pad, "Generated pad");
        Ok(pad)
    }
}
