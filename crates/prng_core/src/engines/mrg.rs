//! Five-term multiple recursive generator.
//!
//! From P. L'Ecuyer, F. Blouin and R. Couture, "A search for good multiple
//! recursive random number generators", ACM Transactions on Modeling and
//! Computer Simulation 3, 87-98 (1993):
//!
//! `x_n = (a1 x_{n-1} + a5 x_{n-5}) mod m`, `m = 2^31 - 1`
//!
//! Both products are formed with Schrage's decomposition so that every
//! intermediate fits in an `i32`.

use std::fmt;

use crate::descriptor::GeneratorDescriptor;
use crate::engines::RandomEngine;
#[cfg(feature = "serde")]
use crate::error::RngError;

const M: i32 = 2_147_483_647;

const A1: i32 = 107_374_182;
const Q1: i32 = 20;
const R1: i32 = 7;

const A5: i32 = 104_480;
const Q5: i32 = 20_554;
const R5: i32 = 1_727;

/// Reference scale, `2^-31`. Paired with the zero remap it keeps doubles in `(0, 1)`.
const INV_M_PLUS_ONE: f64 = 4.656_612_873_077_393e-10;

const DEFAULT_LIMBS: [i32; 5] = [12_345, 23_456, 34_567, 45_678, 56_789];

/// Seed offsets: `x_k = base_k + step_k (s - 1)`.
const SEED_STEPS: [i32; 5] = [1, 2, 3, 5, 7];

/// MRG state: the five most recent terms, newest first.
///
/// `Default` is `(12345, 23456, 34567, 45678, 56789)`, the state left by
/// `seed(1)`.
///
/// # Examples
///
/// ```rust
/// use prng_core::engines::{Mrg, RandomEngine};
///
/// let mut rng = Mrg::seeded(1);
/// assert_eq!(rng.limbs(), [12_345, 23_456, 34_567, 45_678, 56_789]);
/// assert_eq!(rng.next_int(), 27_730_370);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MrgSnapshot"))]
pub struct Mrg {
    x1: i32,
    x2: i32,
    x3: i32,
    x4: i32,
    x5: i32,
}

impl Mrg {
    /// Algorithm descriptor.
    pub const DESCRIPTOR: GeneratorDescriptor = GeneratorDescriptor {
        name: "mrg",
        range_max: M as u32,
        range_min: 0,
        state_size: std::mem::size_of::<Mrg>(),
    };

    /// Create a generator seeded with `seed`.
    pub fn seeded(seed: i64) -> Self {
        let mut rng = Self::default();
        rng.seed(seed);
        rng
    }

    /// Build a state from its limbs, newest first.
    ///
    /// The limbs are not checked; see [`RandomEngine::is_valid`].
    #[inline]
    pub fn from_limbs(limbs: [i32; 5]) -> Self {
        let [x1, x2, x3, x4, x5] = limbs;
        Self { x1, x2, x3, x4, x5 }
    }

    /// Return the limbs, newest first.
    #[inline]
    pub fn limbs(&self) -> [i32; 5] {
        [self.x1, self.x2, self.x3, self.x4, self.x5]
    }

    #[inline]
    fn advance(&mut self) -> i32 {
        let h = self.x5 / Q5;
        let mut p5 = A5 * (self.x5 - h * Q5) - h * R5;

        self.x5 = self.x4;
        self.x4 = self.x3;
        self.x3 = self.x2;
        self.x2 = self.x1;

        let h = self.x1 / Q1;
        let mut p1 = A1 * (self.x1 - h * Q1) - h * R1;

        // p1 into [0, m), p5 into (-m, 0]; their sum then needs one fix-up.
        if p1 < 0 {
            p1 += M;
        }
        if p5 > 0 {
            p5 -= M;
        }
        let mut x = p1 + p5;
        if x < 0 {
            x += M;
        }
        self.x1 = x;
        x
    }
}

/// Unchecked wire form of [`Mrg`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MrgSnapshot {
    x1: i32,
    x2: i32,
    x3: i32,
    x4: i32,
    x5: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<MrgSnapshot> for Mrg {
    type Error = RngError;

    fn try_from(raw: MrgSnapshot) -> Result<Self, Self::Error> {
        let rng = Self::from_limbs([raw.x1, raw.x2, raw.x3, raw.x4, raw.x5]);
        crate::engines::ensure_valid(&rng)?;
        Ok(rng)
    }
}

impl Default for Mrg {
    fn default() -> Self {
        Self::from_limbs(DEFAULT_LIMBS)
    }
}

impl RandomEngine for Mrg {
    #[inline]
    fn descriptor(&self) -> GeneratorDescriptor {
        Self::DESCRIPTOR
    }

    /// Ad hoc linear seeding; not part of L'Ecuyer's construction.
    ///
    /// Limbs are reduced into `[0, m)`, which leaves every seed whose raw
    /// offsets already fit unchanged.
    fn seed(&mut self, seed: i64) {
        let offset = i128::from(seed) - 1;
        let limbs = std::array::from_fn(|k| {
            let raw = i128::from(DEFAULT_LIMBS[k]) + i128::from(SEED_STEPS[k]) * offset;
            raw.rem_euclid(i128::from(M)) as i32
        });
        *self = Self::from_limbs(limbs);
    }

    #[inline]
    fn next_int(&mut self) -> u32 {
        self.advance() as u32
    }

    #[inline]
    fn next_double(&mut self) -> f64 {
        let z = match self.advance() {
            0 => M,
            z => z,
        };
        f64::from(z) * INV_M_PLUS_ONE
    }

    fn is_valid(&self) -> bool {
        self.limbs().iter().all(|x| (0..M).contains(x))
    }
}

impl fmt::Display for Mrg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mrg: x1={} x2={} x3={} x4={} x5={}",
            self.x1, self.x2, self.x3, self.x4, self.x5
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plain 64-bit evaluation of the recurrence.
    fn reference_step(limbs: [i32; 5]) -> i32 {
        let x = (i64::from(A1) * i64::from(limbs[0]) + i64::from(A5) * i64::from(limbs[4]))
            % i64::from(M);
        x as i32
    }

    #[test]
    fn test_scale_is_two_pow_minus_31() {
        assert_eq!(INV_M_PLUS_ONE, 1.0 / 2_147_483_648.0);
    }

    #[test]
    fn test_schrage_constants() {
        assert_eq!(Q1, M / A1);
        assert_eq!(R1, M % A1);
        assert_eq!(Q5, M / A5);
        assert_eq!(R5, M % A5);
    }

    #[test]
    fn test_schrage_matches_wide_arithmetic() {
        let mut rng = Mrg::seeded(42);
        for _ in 0..10_000 {
            let expected = reference_step(rng.limbs());
            assert_eq!(rng.next_int(), expected as u32);
        }
    }

    #[test]
    fn test_ring_shifts() {
        let mut rng = Mrg::default();
        let x = rng.next_int() as i32;
        assert_eq!(rng.limbs(), [x, 12_345, 23_456, 34_567, 45_678]);
    }

    #[test]
    fn test_seed_offsets() {
        assert_eq!(Mrg::seeded(1), Mrg::default());
        assert_eq!(
            Mrg::seeded(3).limbs(),
            [12_347, 23_460, 34_573, 45_688, 56_803]
        );
        assert_eq!(
            Mrg::seeded(0).limbs(),
            [12_344, 23_454, 34_564, 45_673, 56_782]
        );
    }

    #[test]
    fn test_extreme_seeds_stay_in_range() {
        for seed in [i64::MIN, i64::MAX, -1_000_000_000, 1 << 40] {
            let rng = Mrg::seeded(seed);
            assert!(rng.is_valid(), "seed {seed} gave {rng}");
        }
    }

    #[test]
    fn test_reference_sequence() {
        let mut rng = Mrg::seeded(1);
        assert_eq!(rng.next_int(), 27_730_370);
        assert_eq!(rng.next_int(), 1_541_506_340);
        assert_eq!(rng.next_int(), 924_549_294);
        let mut last = 0;
        for _ in 3..10_000 {
            last = rng.next_int();
        }
        assert_eq!(last, 1_528_079_679);
    }

    #[test]
    fn test_zero_output_maps_to_largest_double() {
        // a1 * 0 + a5 * 0 = 0 on the next step.
        let mut rng = Mrg::from_limbs([0, 1, 1, 1, 0]);
        let u = rng.next_double();
        assert_eq!(rng.limbs()[0], 0);
        assert_eq!(u, f64::from(M) * INV_M_PLUS_ONE);
        assert!(u < 1.0);
    }

    #[test]
    fn test_is_valid_rejects_modulus() {
        assert!(!Mrg::from_limbs([M, 1, 1, 1, 1]).is_valid());
        assert!(!Mrg::from_limbs([1, -1, 1, 1, 1]).is_valid());
    }
}
