//! Generator algorithms and the dispatch contract they share.
//!
//! Every engine is a plain value type holding its own state block, so one
//! engine instance *is* the explicit state of the classic "state pointer"
//! API. Instances never share data: independent instances may be advanced
//! from independent threads without coordination.
//!
//! ## Module Structure
//!
//! - [`ranf`]: CRAY RANF, 48-bit LCG over 16-bit limbs
//! - [`mrg`]: L'Ecuyer five-term multiple recursive generator
//! - [`uni`]: Lagged-Fibonacci subtractive generators (UNI, UNI32)
//! - [`taus`]: Combined Tausworthe generator

use std::fmt;

use crate::descriptor::GeneratorDescriptor;
use crate::error::RngError;

pub mod mrg;
pub mod ranf;
pub mod taus;
pub mod uni;

pub use mrg::Mrg;
pub use ranf::Ranf;
pub use taus::Taus;
pub use uni::{LaggedFibonacci, Uni, Uni32};

/// Uniform contract implemented by every generator algorithm.
///
/// Callers written against this trait can swap one algorithm for another
/// without any other change. Implementations must be deterministic: the
/// sequence following `seed(s)` depends on `s` alone.
///
/// # Examples
///
/// ```
/// use prng_core::engines::{Mrg, RandomEngine, Taus};
///
/// fn mean_of<E: RandomEngine>(engine: &mut E, n: usize) -> f64 {
///     (0..n).map(|_| engine.next_double()).sum::<f64>() / n as f64
/// }
///
/// let mut mrg = Mrg::default();
/// let mut taus = Taus::default();
/// assert!((mean_of(&mut mrg, 10_000) - 0.5).abs() < 0.05);
/// assert!((mean_of(&mut taus, 10_000) - 0.5).abs() < 0.05);
/// ```
pub trait RandomEngine: Clone + fmt::Display {
    /// Return the algorithm's descriptor.
    fn descriptor(&self) -> GeneratorDescriptor;

    /// Re-initialise the state from a single integer.
    ///
    /// Accepts every `i64`; the mapping of zero and negative seeds is
    /// algorithm specific.
    fn seed(&mut self, seed: i64);

    /// Advance one step and return a value in
    /// `[descriptor().range_min, descriptor().range_max]`.
    fn next_int(&mut self) -> u32;

    /// Advance one step and return a value in `[0, 1)`.
    fn next_double(&mut self) -> f64;

    /// Returns `true` if every limb lies within the algorithm's range.
    ///
    /// States produced by `seed` and the draw methods are always valid.
    fn is_valid(&self) -> bool {
        true
    }

    /// Duplicate `src` into `self` so both continue with the same sequence.
    #[inline]
    fn copy_from(&mut self, src: &Self) {
        self.clone_from(src);
    }

    /// Replace the whole state with `state` after checking it.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::InvalidState`] if `state` has limbs outside the
    /// algorithm's range; `self` is left untouched in that case.
    fn restore(&mut self, state: &Self) -> Result<(), RngError> {
        ensure_valid(state)?;
        self.copy_from(state);
        Ok(())
    }

    /// Skip `n` draws.
    fn discard(&mut self, n: u64) {
        for _ in 0..n {
            self.next_int();
        }
    }
}

/// Reject `state` unless [`RandomEngine::is_valid`] holds.
///
/// Shared by `restore` and by snapshot deserialisation, so that no engine
/// with an out-of-range limb or cursor is ever handed to a caller.
pub(crate) fn ensure_valid<E: RandomEngine>(state: &E) -> Result<(), RngError> {
    if state.is_valid() {
        Ok(())
    } else {
        Err(RngError::InvalidState {
            generator: state.descriptor().name,
        })
    }
}
