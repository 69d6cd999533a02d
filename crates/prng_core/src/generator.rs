//! Algorithm-agnostic generator instance.
//!
//! [`Generator`] pairs one algorithm, chosen once at configuration time, with
//! its state. It dispatches statically over a closed set of engines, so there
//! is no boxing and no runtime type inspection. The same value doubles as the
//! exported state snapshot: `state()` returns a copy, `set_state()` restores
//! one.

use std::fmt;

use crate::descriptor::{GeneratorDescriptor, GeneratorKind};
use crate::engines::{ensure_valid, Mrg, RandomEngine, Ranf, Taus, Uni, Uni32};
use crate::error::RngError;

/// A generator of any supported algorithm.
///
/// # Examples
///
/// ```
/// use prng_core::{Generator, GeneratorKind, RandomEngine};
///
/// let mut rng = Generator::new(GeneratorKind::Taus, 1);
/// assert_eq!(rng.descriptor().name, "taus");
///
/// let snapshot = rng.state();
/// let first = rng.next_int();
///
/// rng.set_state(&snapshot).unwrap();
/// assert_eq!(rng.next_int(), first);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "generator", rename_all = "lowercase"))]
pub enum Generator {
    /// CRAY RANF state
    Ranf(Ranf),
    /// L'Ecuyer MRG state
    Mrg(Mrg),
    /// UNI state, 16-bit digits
    Uni(Uni),
    /// UNI state, 32-bit digits
    Uni32(Uni32),
    /// Combined Tausworthe state
    Taus(Taus),
}

impl Generator {
    /// Create a generator of `kind` seeded with `seed`.
    pub fn new(kind: GeneratorKind, seed: i64) -> Self {
        let mut rng = Self::with_default_state(kind);
        rng.seed(seed);
        rng
    }

    /// Create a generator of `kind` holding its documented default state.
    pub fn with_default_state(kind: GeneratorKind) -> Self {
        match kind {
            GeneratorKind::Ranf => Generator::Ranf(Ranf::default()),
            GeneratorKind::Mrg => Generator::Mrg(Mrg::default()),
            GeneratorKind::Uni => Generator::Uni(Uni::default()),
            GeneratorKind::Uni32 => Generator::Uni32(Uni32::default()),
            GeneratorKind::Taus => Generator::Taus(Taus::default()),
        }
    }

    /// Return the algorithm of this generator.
    #[inline]
    pub fn kind(&self) -> GeneratorKind {
        match self {
            Generator::Ranf(_) => GeneratorKind::Ranf,
            Generator::Mrg(_) => GeneratorKind::Mrg,
            Generator::Uni(_) => GeneratorKind::Uni,
            Generator::Uni32(_) => GeneratorKind::Uni32,
            Generator::Taus(_) => GeneratorKind::Taus,
        }
    }

    /// Return a snapshot of the current state.
    #[inline]
    pub fn state(&self) -> Generator {
        *self
    }

    /// Replace the state with `snapshot`.
    ///
    /// # Errors
    ///
    /// - [`RngError::StateMismatch`] if `snapshot` belongs to another algorithm
    /// - [`RngError::InvalidState`] if `snapshot` has out-of-range limbs
    pub fn set_state(&mut self, snapshot: &Generator) -> Result<(), RngError> {
        self.restore(snapshot)
    }
}

impl RandomEngine for Generator {
    #[inline]
    fn descriptor(&self) -> GeneratorDescriptor {
        self.kind().descriptor()
    }

    fn seed(&mut self, seed: i64) {
        match self {
            Generator::Ranf(rng) => rng.seed(seed),
            Generator::Mrg(rng) => rng.seed(seed),
            Generator::Uni(rng) => rng.seed(seed),
            Generator::Uni32(rng) => rng.seed(seed),
            Generator::Taus(rng) => rng.seed(seed),
        }
    }

    #[inline]
    fn next_int(&mut self) -> u32 {
        match self {
            Generator::Ranf(rng) => rng.next_int(),
            Generator::Mrg(rng) => rng.next_int(),
            Generator::Uni(rng) => rng.next_int(),
            Generator::Uni32(rng) => rng.next_int(),
            Generator::Taus(rng) => rng.next_int(),
        }
    }

    #[inline]
    fn next_double(&mut self) -> f64 {
        match self {
            Generator::Ranf(rng) => rng.next_double(),
            Generator::Mrg(rng) => rng.next_double(),
            Generator::Uni(rng) => rng.next_double(),
            Generator::Uni32(rng) => rng.next_double(),
            Generator::Taus(rng) => rng.next_double(),
        }
    }

    fn is_valid(&self) -> bool {
        match self {
            Generator::Ranf(rng) => rng.is_valid(),
            Generator::Mrg(rng) => rng.is_valid(),
            Generator::Uni(rng) => rng.is_valid(),
            Generator::Uni32(rng) => rng.is_valid(),
            Generator::Taus(rng) => rng.is_valid(),
        }
    }

    /// Restores only a snapshot of the same algorithm.
    fn restore(&mut self, state: &Self) -> Result<(), RngError> {
        if state.kind() != self.kind() {
            return Err(RngError::StateMismatch {
                expected: self.kind().as_str(),
                found: state.kind().as_str(),
            });
        }
        ensure_valid(state)?;
        self.copy_from(state);
        Ok(())
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generator::Ranf(rng) => fmt::Display::fmt(rng, f),
            Generator::Mrg(rng) => fmt::Display::fmt(rng, f),
            Generator::Uni(rng) => fmt::Display::fmt(rng, f),
            Generator::Uni32(rng) => fmt::Display::fmt(rng, f),
            Generator::Taus(rng) => fmt::Display::fmt(rng, f),
        }
    }
}

impl From<Ranf> for Generator {
    fn from(rng: Ranf) -> Self {
        Generator::Ranf(rng)
    }
}

impl From<Mrg> for Generator {
    fn from(rng: Mrg) -> Self {
        Generator::Mrg(rng)
    }
}

impl From<Uni> for Generator {
    fn from(rng: Uni) -> Self {
        Generator::Uni(rng)
    }
}

impl From<Uni32> for Generator {
    fn from(rng: Uni32) -> Self {
        Generator::Uni32(rng)
    }
}

impl From<Taus> for Generator {
    fn from(rng: Taus) -> Self {
        Generator::Taus(rng)
    }
}
