//! Maximally equidistributed combined Tausworthe generator.
//!
//! P. L'Ecuyer, "Maximally Equidistributed Combined Tausworthe Generators",
//! Mathematics of Computation 65, 203-213 (1996). Three 32-bit LFSR
//! components are advanced independently and combined by xor. The period is
//! about 2^88.
//!
//! Each component degenerates if its significant bits are all zero, so
//! seeding lifts `s1`, `s2`, `s3` to at least 2, 8 and 16 respectively.

use std::fmt;

use crate::descriptor::GeneratorDescriptor;
use crate::engines::RandomEngine;
#[cfg(feature = "serde")]
use crate::error::RngError;

const LCG_MULTIPLIER: u32 = 69_069;
const WARM_UP_DRAWS: usize = 6;

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Lower bounds below which a component is absorbing.
const MIN_S1: u32 = 2;
const MIN_S2: u32 = 8;
const MIN_S3: u32 = 16;

#[inline]
fn tausworthe(s: u32, a: u32, b: u32, c: u32, d: u32) -> u32 {
    ((s & c) << d) ^ (((s << a) ^ s) >> b)
}

#[inline]
fn lcg(n: u32) -> u32 {
    n.wrapping_mul(LCG_MULTIPLIER)
}

#[inline]
fn lift(s: u32, min: u32) -> u32 {
    if s < min {
        s + min
    } else {
        s
    }
}

/// Combined Tausworthe state: three 32-bit components.
///
/// `Default` is the state left by `seed(1)`.
///
/// # Examples
///
/// ```rust
/// use prng_core::engines::{RandomEngine, Taus};
///
/// let mut rng = Taus::seeded(1);
/// assert_eq!(rng.next_int(), 802_792_108);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TausSnapshot"))]
pub struct Taus {
    s1: u32,
    s2: u32,
    s3: u32,
}

impl Taus {
    /// Algorithm descriptor.
    pub const DESCRIPTOR: GeneratorDescriptor = GeneratorDescriptor {
        name: "taus",
        range_max: 0xFFFF_FFFF,
        range_min: 0,
        state_size: std::mem::size_of::<Taus>(),
    };

    /// Create a generator seeded with `seed`.
    pub fn seeded(seed: i64) -> Self {
        let mut rng = Self::default();
        rng.seed(seed);
        rng
    }

    /// Build a state from its three components.
    #[inline]
    pub fn from_components(components: [u32; 3]) -> Self {
        let [s1, s2, s3] = components;
        Self { s1, s2, s3 }
    }

    /// Return the three components.
    #[inline]
    pub fn components(&self) -> [u32; 3] {
        [self.s1, self.s2, self.s3]
    }
}

/// Unchecked wire form of [`Taus`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TausSnapshot {
    s1: u32,
    s2: u32,
    s3: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<TausSnapshot> for Taus {
    type Error = RngError;

    fn try_from(raw: TausSnapshot) -> Result<Self, Self::Error> {
        let rng = Self::from_components([raw.s1, raw.s2, raw.s3]);
        crate::engines::ensure_valid(&rng)?;
        Ok(rng)
    }
}

impl Default for Taus {
    fn default() -> Self {
        Self::from_components([858_228_033, 728_354_164, 2_782_359_688])
    }
}

impl RandomEngine for Taus {
    #[inline]
    fn descriptor(&self) -> GeneratorDescriptor {
        Self::DESCRIPTOR
    }

    /// Only the low 32 bits of `seed` are used; zero is treated as 1.
    fn seed(&mut self, seed: i64) {
        let s = match seed as u32 {
            0 => 1,
            s => s,
        };

        let s1 = lift(lcg(s), MIN_S1);
        let s2 = lift(lcg(s1), MIN_S2);
        let s3 = lift(lcg(s2), MIN_S3);
        *self = Self::from_components([s1, s2, s3]);

        self.discard(WARM_UP_DRAWS as u64);
    }

    #[inline]
    fn next_int(&mut self) -> u32 {
        self.s1 = tausworthe(self.s1, 13, 19, 0xFFFF_FFFE, 12);
        self.s2 = tausworthe(self.s2, 2, 25, 0xFFFF_FFF8, 4);
        self.s3 = tausworthe(self.s3, 3, 11, 0xFFFF_FFF0, 17);
        self.s1 ^ self.s2 ^ self.s3
    }

    #[inline]
    fn next_double(&mut self) -> f64 {
        f64::from(self.next_int()) / TWO_POW_32
    }

    fn is_valid(&self) -> bool {
        self.s1 >= MIN_S1 && self.s2 >= MIN_S2 && self.s3 >= MIN_S3
    }
}

impl fmt::Display for Taus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "taus: s1={} s2={} s3={}", self.s1, self.s2, self.s3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_equals_seed_one() {
        assert_eq!(Taus::default(), Taus::seeded(1));
    }

    #[test]
    fn test_zero_seed_is_one() {
        assert_eq!(Taus::seeded(0), Taus::seeded(1));
    }

    #[test]
    fn test_only_low_32_bits_matter() {
        assert_eq!(Taus::seeded(1 << 32 | 5), Taus::seeded(5));
        assert_eq!(Taus::seeded(-1), Taus::seeded(0xFFFF_FFFF));
    }

    #[test]
    fn test_reference_10000th() {
        let mut rng = Taus::seeded(1);
        assert_eq!(rng.next_int(), 802_792_108);
        assert_eq!(rng.next_int(), 4_084_684_829);
        let mut last = 0;
        for _ in 2..10_000 {
            last = rng.next_int();
        }
        assert_eq!(last, 2_733_957_125);
    }

    #[test]
    fn test_seeded_states_are_valid() {
        for seed in [0, 1, 2, 3, -7, i64::MAX, i64::MIN, 0x1234_5678] {
            assert!(Taus::seeded(seed).is_valid(), "seed {seed}");
        }
    }

    #[test]
    fn test_lift_adds_threshold() {
        assert_eq!(lift(0, MIN_S1), 2);
        assert_eq!(lift(1, MIN_S1), 3);
        assert_eq!(lift(7, MIN_S2), 15);
        assert_eq!(lift(16, MIN_S3), 16);
    }

    #[test]
    fn test_degenerate_components_rejected() {
        assert!(!Taus::from_components([1, 8, 16]).is_valid());
        assert!(!Taus::from_components([2, 7, 16]).is_valid());
        assert!(!Taus::from_components([2, 8, 15]).is_valid());
    }
}
