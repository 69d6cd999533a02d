//! Implicit-state convenience layer.
//!
//! The classic API pairs every explicit-state function with an argument-free
//! twin that works on one module-level default state. Here that default
//! state lives in a context object the caller constructs once and passes
//! around, so the single-writer contract is visible at every call site:
//! each draw needs `&mut` access, and no lock is taken.
//!
//! - [`ImplicitRng`]: the adaptor, generic over any [`RandomEngine`]
//! - [`RngContext`]: one default state per algorithm, plus a configurable
//!   default generator for code that does not care which algorithm it gets
//!
//! A context is not meant to be shared between threads. Code that needs
//! concurrency should give each thread its own explicit engine.

use std::fmt;

use tracing::debug;

use crate::descriptor::{GeneratorDescriptor, GeneratorKind};
use crate::engines::{Mrg, RandomEngine, Ranf, Taus, Uni, Uni32};
use crate::error::RngError;
use crate::generator::Generator;

/// Argument-free wrapper around one owned default state.
///
/// # Examples
///
/// ```
/// use prng_core::context::ImplicitRng;
/// use prng_core::engines::Mrg;
///
/// let mut rng: ImplicitRng<Mrg> = ImplicitRng::default();
/// rng.seed(1);
/// assert_eq!(rng.next_int(), 27_730_370);
///
/// let saved = rng.get_state();
/// let next = rng.next_double();
/// rng.set_state(&saved).unwrap();
/// assert_eq!(rng.next_double(), next);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ImplicitRng<E: RandomEngine> {
    state: E,
}

impl<E: RandomEngine> ImplicitRng<E> {
    /// Wrap `initial` as the default state.
    pub fn new(initial: E) -> Self {
        Self { state: initial }
    }

    /// Return the descriptor of the wrapped algorithm.
    #[inline]
    pub fn descriptor(&self) -> GeneratorDescriptor {
        self.state.descriptor()
    }

    /// Re-seed the default state.
    pub fn seed(&mut self, seed: i64) {
        debug!(generator = self.descriptor().name, seed, "Seeding default state");
        self.state.seed(seed);
    }

    /// Draw the next integer from the default state.
    #[inline]
    pub fn next_int(&mut self) -> u32 {
        self.state.next_int()
    }

    /// Draw the next double in `[0, 1)` from the default state.
    #[inline]
    pub fn next_double(&mut self) -> f64 {
        self.state.next_double()
    }

    /// Declared maximum output, as a double.
    #[inline]
    pub fn max(&self) -> f64 {
        f64::from(self.descriptor().range_max)
    }

    /// Return a copy of the whole default state.
    #[inline]
    pub fn get_state(&self) -> E {
        self.state.clone()
    }

    /// Replace the whole default state.
    ///
    /// # Errors
    ///
    /// Propagates the engine's [`RandomEngine::restore`] error; the default
    /// state is unchanged on error.
    pub fn set_state(&mut self, state: &E) -> Result<(), RngError> {
        self.state.restore(state)?;
        debug!(generator = self.descriptor().name, "Default state replaced");
        Ok(())
    }

    /// Copy the default state into a caller-owned engine.
    #[inline]
    pub fn copy_state_into(&self, dst: &mut E) {
        dst.copy_from(&self.state);
    }

    /// Borrow the default state.
    #[inline]
    pub fn state(&self) -> &E {
        &self.state
    }

    /// Human-readable dump of the default state.
    pub fn print_state(&self) -> String {
        self.state.to_string()
    }
}

impl<E: RandomEngine + Default> Default for ImplicitRng<E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

impl<E: RandomEngine> fmt::Display for ImplicitRng<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.state, f)
    }
}

/// Process-wide default generators.
///
/// Construct one at start-up and hand `&mut` references to the code that
/// draws from it. Each per-algorithm slot starts from that algorithm's
/// documented non-zero default. `default_rng` is the algorithm selected at
/// configuration time, [`GeneratorKind::Taus`] unless chosen otherwise.
///
/// # Examples
///
/// ```
/// use prng_core::{GeneratorKind, RngContext};
///
/// let mut ctx = RngContext::with_default(GeneratorKind::Uni);
/// ctx.seed(305);
/// assert!((ctx.next_double() - 0.027_832_881).abs() < 1e-9);
///
/// // Per-algorithm defaults are independent of the selected generator.
/// assert_eq!(ctx.mrg.get_state().limbs()[0], 12_345);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RngContext {
    /// Default RANF state
    pub ranf: ImplicitRng<Ranf>,
    /// Default MRG state
    pub mrg: ImplicitRng<Mrg>,
    /// Default UNI state
    pub uni: ImplicitRng<Uni>,
    /// Default UNI32 state
    pub uni32: ImplicitRng<Uni32>,
    /// Default TAUS state
    pub taus: ImplicitRng<Taus>,
    /// Default state of the selected algorithm
    pub default_rng: ImplicitRng<Generator>,
}

impl RngContext {
    /// Create a context whose selected generator is TAUS.
    pub fn new() -> Self {
        Self::with_default(GeneratorKind::Taus)
    }

    /// Create a context whose selected generator is `kind`.
    pub fn with_default(kind: GeneratorKind) -> Self {
        debug!(generator = kind.as_str(), "Creating generator context");
        Self {
            ranf: ImplicitRng::default(),
            mrg: ImplicitRng::default(),
            uni: ImplicitRng::default(),
            uni32: ImplicitRng::default(),
            taus: ImplicitRng::default(),
            default_rng: ImplicitRng::new(Generator::with_default_state(kind)),
        }
    }

    /// Algorithm of the selected generator.
    #[inline]
    pub fn default_kind(&self) -> GeneratorKind {
        self.default_rng.state().kind()
    }

    /// Seed the selected generator.
    pub fn seed(&mut self, seed: i64) {
        self.default_rng.seed(seed);
    }

    /// Draw an integer from the selected generator.
    #[inline]
    pub fn next_int(&mut self) -> u32 {
        self.default_rng.next_int()
    }

    /// Draw a double in `[0, 1)` from the selected generator.
    #[inline]
    pub fn next_double(&mut self) -> f64 {
        self.default_rng.next_double()
    }

    /// Declared maximum output of the selected generator.
    #[inline]
    pub fn max(&self) -> f64 {
        self.default_rng.max()
    }

    /// Dump the default state of `kind`.
    pub fn print_state(&self, kind: GeneratorKind) -> String {
        match kind {
            GeneratorKind::Ranf => self.ranf.print_state(),
            GeneratorKind::Mrg => self.mrg.print_state(),
            GeneratorKind::Uni => self.uni.print_state(),
            GeneratorKind::Uni32 => self.uni32.print_state(),
            GeneratorKind::Taus => self.taus.print_state(),
        }
    }
}

impl Default for RngContext {
    fn default() -> Self {
        Self::new()
    }
}
