use crate::{
    RandSource,
    mutex::{Mutex, lock},
};
use core::fmt;
use rand::{Rng, RngCore};

/// A `RandSource` backed by any [`rand`] generator.
///
/// The generator lives behind a mutex so that draws are serialized when the
/// source is shared between threads; each call consumes the next values of
/// the single underlying stream. With the `parking-lot` feature the mutex is
/// `parking_lot::Mutex`, otherwise `std::sync::Mutex`.
///
/// Use this to inject a seeded `rand` generator, e.g. `StdRng`, for
/// reproducible output.
///
/// # Example
/// ```
/// use passgen::{RandSource, RngSource};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let a = RngSource::new(StdRng::seed_from_u64(7));
/// let b = RngSource::new(StdRng::seed_from_u64(7));
/// assert_eq!(a.next_int(1000), b.next_int(1000));
/// ```
pub struct RngSource<R> {
    rng: Mutex<R>,
}

impl<R: RngCore> RngSource<R> {
    /// Wraps `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        let inner = self.rng.into_inner();
        #[cfg(not(feature = "parking-lot"))]
        let inner = inner.unwrap_or_else(crate::mutex::PoisonError::into_inner);
        inner
    }
}

impl<R: RngCore> RandSource for RngSource<R> {
    fn next_int(&self, bound: usize) -> usize {
        lock(&self.rng).random_range(0..bound)
    }

    fn shuffle<T>(&self, items: &mut [T]) {
        // One lock for the whole pass keeps the permutation contiguous in the
        // stream even when other threads draw concurrently.
        let mut rng = lock(&self.rng);
        for i in (1..items.len()).rev() {
            let j = rng.random_range(0..i + 1);
            items.swap(i, j);
        }
    }
}

impl<R> fmt::Debug for RngSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RngSource").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::{sync::Arc, thread::scope};

    #[test]
    fn same_seed_same_stream() {
        let a = RngSource::new(StdRng::seed_from_u64(42));
        let b = RngSource::new(StdRng::seed_from_u64(42));
        let xs: Vec<usize> = (0..64).map(|_| a.next_int(7776)).collect();
        let ys: Vec<usize> = (0..64).map(|_| b.next_int(7776)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn shuffle_matches_default_algorithm() {
        // The locked fast path must be the same permutation the provided
        // trait method would produce from the same stream.
        struct Unlocked(RngSource<StdRng>);
        impl RandSource for Unlocked {
            fn next_int(&self, bound: usize) -> usize {
                self.0.next_int(bound)
            }
        }

        let mut fast: Vec<u32> = (0..50).collect();
        let mut slow = fast.clone();
        RngSource::new(StdRng::seed_from_u64(9)).shuffle(&mut fast);
        Unlocked(RngSource::new(StdRng::seed_from_u64(9))).shuffle(&mut slow);
        assert_eq!(fast, slow);
    }

    #[test]
    fn shared_across_threads() {
        let source = Arc::new(RngSource::new(StdRng::seed_from_u64(1)));
        scope(|s| {
            for _ in 0..4 {
                let source = Arc::clone(&source);
                s.spawn(move || {
                    for _ in 0..1000 {
                        assert!(source.next_int(10) < 10);
                    }
                });
            }
        });
    }
}
