use std::{rc::Rc, sync::Arc};

/// A trait for random sources that draw uniform integers and shuffle
/// sequences.
///
/// This abstraction allows you to plug in a secure random source in
/// production and a seeded or mocked one in tests. Only [`Self::next_int`]
/// has to be implemented: [`Self::shuffle`] is a Fisher-Yates pass built on
/// top of it, so swapping the source changes the randomness but never the
/// algorithm.
///
/// Methods take `&self`. Stateful sources keep their stream position behind
/// interior mutability, which lets a single source be shared by several
/// generators (pass `&source`, an [`Rc`] or an [`Arc`]).
///
/// # Example
/// ```
/// use passgen::RandSource;
///
/// struct AlwaysZero;
/// impl RandSource for AlwaysZero {
///     fn next_int(&self, _bound: usize) -> usize {
///         0
///     }
/// }
///
/// let mut items = [1, 2, 3, 4];
/// AlwaysZero.shuffle(&mut items);
/// assert_eq!(items, [2, 3, 4, 1]);
/// ```
pub trait RandSource {
    /// Returns an integer uniformly distributed in `[0, bound)`.
    ///
    /// `bound` must be at least one. Generators validate their parameters
    /// before drawing, so they never call this with zero.
    fn next_int(&self, bound: usize) -> usize;

    /// Shuffles `items` in place.
    ///
    /// Walks from the last index down to `1`, swapping each element with one
    /// at `next_int(i + 1)`.
    fn shuffle<T>(&self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_int(i + 1);
            items.swap(i, j);
        }
    }
}

impl<R: RandSource> RandSource for &R {
    fn next_int(&self, bound: usize) -> usize {
        (**self).next_int(bound)
    }

    fn shuffle<T>(&self, items: &mut [T]) {
        (**self).shuffle(items);
    }
}

impl<R: RandSource> RandSource for Box<R> {
    fn next_int(&self, bound: usize) -> usize {
        (**self).next_int(bound)
    }

    fn shuffle<T>(&self, items: &mut [T]) {
        (**self).shuffle(items);
    }
}

impl<R: RandSource> RandSource for Rc<R> {
    fn next_int(&self, bound: usize) -> usize {
        (**self).next_int(bound)
    }

    fn shuffle<T>(&self, items: &mut [T]) {
        (**self).shuffle(items);
    }
}

impl<R: RandSource> RandSource for Arc<R> {
    fn next_int(&self, bound: usize) -> usize {
        (**self).next_int(bound)
    }

    fn shuffle<T>(&self, items: &mut [T]) {
        (**self).shuffle(items);
    }
}
