//! The uniform source trait and the draw-counting adaptor.

/// A stateful generator of uniformly distributed integers over `[0, max]`.
///
/// Each call to [`next_draw`](RandomSource::next_draw) advances the internal
/// state by exactly one step. Implementations must be deterministic for a
/// fixed seed.
pub trait RandomSource {
    /// Returns the next raw draw in `[0, self.max()]`.
    fn next_draw(&mut self) -> u64;

    /// Largest value [`next_draw`](RandomSource::next_draw) can return.
    fn max(&self) -> u64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    #[inline]
    fn next_draw(&mut self) -> u64 {
        (**self).next_draw()
    }

    #[inline]
    fn max(&self) -> u64 {
        (**self).max()
    }
}

/// Wraps a source and counts how many draws pass through it.
///
/// # Examples
///
/// ```rust
/// use lattice_core::rng::{CountingSource, LatticeRng, RandomSource};
///
/// let mut counted = CountingSource::new(LatticeRng::from_seed(7));
/// counted.next_draw();
/// counted.next_draw();
/// assert_eq!(counted.draws(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct CountingSource<S> {
    inner: S,
    draws: u64,
}

impl<S: RandomSource> CountingSource<S> {
    /// Starts counting from zero.
    pub fn new(inner: S) -> Self {
        Self { inner, draws: 0 }
    }

    /// Number of draws taken so far.
    #[inline]
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Returns the wrapped source.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: RandomSource> RandomSource for CountingSource<S> {
    #[inline]
    fn next_draw(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_draw()
    }

    #[inline]
    fn max(&self) -> u64 {
        self.inner.max()
    }
}
