//! Bridge from the engines to the `rand` ecosystem.
//!
//! This module provides [`SampleRng`], a seeded wrapper that implements
//! [`rand_core::RngCore`] over any [`RandomEngine`] and offers batch
//! operations for uniform and standard normal variates.

use rand_core::{impls, Error, RngCore};
use rand_distr::{Distribution, StandardNormal};

use crate::engines::RandomEngine;

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Seeded sampling wrapper around one engine.
///
/// Engines differ in output width (RANF and TAUS give 32 bits, MRG and UNI32
/// 31 bits, UNI 15 bits), so `RngCore` words are formed by scaling
/// `next_double` to `2^32` rather than forwarding `next_int`. Every engine
/// thereby yields words spread over the full 32-bit range.
///
/// # Examples
///
/// ```rust
/// use prng_core::engines::Ranf;
/// use prng_core::SampleRng;
///
/// let mut rng = SampleRng::<Ranf>::from_seed(42);
///
/// // Single value generation
/// let u: f64 = rng.gen_uniform();
/// assert!((0.0..1.0).contains(&u));
/// let _n: f64 = rng.gen_normal();
///
/// // Batch generation into a caller-owned buffer
/// let mut buffer = vec![0.0; 100];
/// rng.fill_uniform(&mut buffer);
/// rng.fill_normal(&mut buffer);
/// ```
#[derive(Debug, Clone)]
pub struct SampleRng<E: RandomEngine> {
    /// The wrapped engine.
    inner: E,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: i64,
}

impl<E: RandomEngine + Default> SampleRng<E> {
    /// Creates a wrapper around a fresh engine seeded with `seed`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prng_core::engines::Mrg;
    /// use prng_core::SampleRng;
    ///
    /// let mut rng1 = SampleRng::<Mrg>::from_seed(12345);
    /// let mut rng2 = SampleRng::<Mrg>::from_seed(12345);
    ///
    /// // Same seed produces identical sequences
    /// assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
    /// ```
    pub fn from_seed(seed: i64) -> Self {
        let mut inner = E::default();
        inner.seed(seed);
        Self { inner, seed }
    }
}

impl<E: RandomEngine> SampleRng<E> {
    /// Wraps an already seeded engine, recording `seed` for tracking.
    pub fn from_engine(inner: E, seed: i64) -> Self {
        Self { inner, seed }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Borrows the wrapped engine.
    #[inline]
    pub fn engine(&self) -> &E {
        &self.inner
    }

    /// Unwraps the engine.
    pub fn into_inner(self) -> E {
        self.inner
    }

    /// Generates a single uniform value in [0, 1), straight from the engine.
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.next_double()
    }

    /// Generates a single standard normal variate (mean=0, std=1).
    ///
    /// Uses the Ziggurat sampler of `rand_distr::StandardNormal`, fed by
    /// this wrapper's `RngCore` words.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(self)
    }

    /// Fills the buffer with uniform values in [0, 1).
    ///
    /// Empty buffers are a no-op.
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.inner.next_double();
        }
    }

    /// Fills the buffer with standard normal variates.
    ///
    /// Empty buffers are a no-op.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut *self);
        }
    }
}

impl<E: RandomEngine> RngCore for SampleRng<E> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        // next_double < 1, so the product is below 2^32.
        (self.inner.next_double() * TWO_POW_32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
