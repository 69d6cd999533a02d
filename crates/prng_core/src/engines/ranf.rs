//! CRAY RANF generator.
//!
//! The sequence is `x_{n+1} = a x_n mod 2^48` with `a = 0x2875A2E7B175`,
//! held as three 16-bit limbs so that no 48-bit native arithmetic is needed.
//! `next_int` returns the upper 32 bits of each term.
//!
//! Seeding sets the lower 32 bits of `x_1` (lowest bit forced on, upper 16
//! bits zero), then multiplies by `a^-1 mod 2^48` so the state sits one step
//! before `x_1`, matching the CRAY first output. Only the low 32 bits of the
//! seed are significant, whereas the CRAY accepts all 2^48 states.
//!
//! The period is 2^46. Starting from `seed(0)`, `x_10001` is
//! 141091827447341.

use std::fmt;

use crate::descriptor::GeneratorDescriptor;
use crate::engines::RandomEngine;

/// Multiplier `a`, least significant limb first.
const MULTIPLIER: [u16; 3] = [0xB175, 0xA2E7, 0x2875];

/// `a^-1 mod 2^48`, least significant limb first.
const INVERSE_MULTIPLIER: [u16; 3] = [0xD6DD, 0xB894, 0x5CEE];

/// Unscaled state loaded by `seed(0)`.
const ZERO_SEED_LIMBS: [u16; 3] = [0x9CD1, 0x53FC, 0x9482];

const TWO_POW_M16: f64 = 1.0 / 65_536.0;
const TWO_POW_M32: f64 = TWO_POW_M16 * TWO_POW_M16;
const TWO_POW_M48: f64 = TWO_POW_M32 * TWO_POW_M16;

/// `c * x mod 2^48` over 16-bit limbs with explicit carry propagation.
#[inline]
fn limb_multiply(c: [u16; 3], x: [u16; 3]) -> [u16; 3] {
    let [c0, c1, c2] = c.map(u64::from);
    let [x0, x1, x2] = x.map(u64::from);

    let mut r = c0 * x0;
    let y0 = (r & 0xFFFF) as u16;

    r >>= 16;
    r += c0 * x1 + c1 * x0;
    let y1 = (r & 0xFFFF) as u16;

    r >>= 16;
    r += c0 * x2 + c1 * x1 + c2 * x0;
    let y2 = (r & 0xFFFF) as u16;

    [y0, y1, y2]
}

/// CRAY RANF state: a 48-bit value in three 16-bit limbs.
///
/// `Default` is the state left by `seed(0)`.
///
/// # Examples
///
/// ```rust
/// use prng_core::engines::{RandomEngine, Ranf};
///
/// let mut rng = Ranf::seeded(0);
/// for _ in 0..10_000 {
///     rng.next_double();
/// }
/// assert_eq!(rng.value(), 141_091_827_447_341);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ranf {
    x0: u16,
    x1: u16,
    x2: u16,
}

impl Ranf {
    /// Algorithm descriptor.
    pub const DESCRIPTOR: GeneratorDescriptor = GeneratorDescriptor {
        name: "ranf",
        range_max: 0xFFFF_FFFF,
        range_min: 0,
        state_size: std::mem::size_of::<Ranf>(),
    };

    /// Create a generator seeded with `seed`.
    pub fn seeded(seed: i64) -> Self {
        let mut rng = Self::from_limbs([0, 0, 0]);
        rng.seed(seed);
        rng
    }

    /// Build a state directly from its limbs, least significant first.
    #[inline]
    pub fn from_limbs(limbs: [u16; 3]) -> Self {
        let [x0, x1, x2] = limbs;
        Self { x0, x1, x2 }
    }

    /// Return the limbs, least significant first.
    #[inline]
    pub fn limbs(&self) -> [u16; 3] {
        [self.x0, self.x1, self.x2]
    }

    /// Return the current 48-bit term.
    #[inline]
    pub fn value(&self) -> u64 {
        u64::from(self.x0) | u64::from(self.x1) << 16 | u64::from(self.x2) << 32
    }

    #[inline]
    fn advance(&mut self) {
        *self = Self::from_limbs(limb_multiply(MULTIPLIER, self.limbs()));
    }
}

impl Default for Ranf {
    fn default() -> Self {
        Self::from_limbs(limb_multiply(INVERSE_MULTIPLIER, ZERO_SEED_LIMBS))
    }
}

impl RandomEngine for Ranf {
    #[inline]
    fn descriptor(&self) -> GeneratorDescriptor {
        Self::DESCRIPTOR
    }

    fn seed(&mut self, seed: i64) {
        // Two's complement view; only bits 0..32 are used.
        let s = seed as u64;
        let start = if s == 0 {
            ZERO_SEED_LIMBS
        } else {
            [((s | 1) & 0xFFFF) as u16, ((s >> 16) & 0xFFFF) as u16, 0]
        };
        *self = Self::from_limbs(limb_multiply(INVERSE_MULTIPLIER, start));
    }

    #[inline]
    fn next_int(&mut self) -> u32 {
        self.advance();
        u32::from(self.x2) << 16 | u32::from(self.x1)
    }

    #[inline]
    fn next_double(&mut self) -> f64 {
        self.advance();
        f64::from(self.x2) * TWO_POW_M16
            + f64::from(self.x1) * TWO_POW_M32
            + f64::from(self.x0) * TWO_POW_M48
    }
}

impl fmt::Display for Ranf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ranf: x0=0x{:04x} x1=0x{:04x} x2=0x{:04x} (x={})",
            self.x0,
            self.x1,
            self.x2,
            self.value()
        )
    }
}
