//! Generator descriptors and algorithm selection.
//!
//! This module provides:
//! - [`GeneratorDescriptor`]: Immutable per-algorithm metadata record
//! - [`GeneratorKind`]: Enumeration of the available algorithms, used to pick
//!   one at configuration time

use std::fmt;
use std::str::FromStr;

use crate::engines::{Mrg, Ranf, Taus, Uni, Uni32};
use crate::error::RngError;

/// Immutable metadata describing one generator algorithm.
///
/// One descriptor exists per algorithm and is shared by every instance of
/// it. The fields are the only values exposed for introspection and stay
/// stable when one algorithm is substituted for another.
///
/// # Examples
///
/// ```
/// use prng_core::engines::Mrg;
///
/// let descriptor = Mrg::DESCRIPTOR;
/// assert_eq!(descriptor.name, "mrg");
/// assert_eq!(descriptor.range_max, 2_147_483_647);
/// assert_eq!(descriptor.range_min, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeneratorDescriptor {
    /// Short lowercase algorithm name
    pub name: &'static str,
    /// Declared maximum of `next_int`
    pub range_max: u32,
    /// Declared minimum of `next_int`
    pub range_min: u32,
    /// Size of the state block in bytes
    pub state_size: usize,
}

impl GeneratorDescriptor {
    /// Returns `true` if `value` lies in `[range_min, range_max]`.
    #[inline]
    pub fn contains(&self, value: u32) -> bool {
        (self.range_min..=self.range_max).contains(&value)
    }
}

impl fmt::Display for GeneratorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<6} min={:<2} max={:<10} state={} bytes",
            self.name, self.range_min, self.range_max, self.state_size
        )
    }
}

/// The generator algorithms known to this crate.
///
/// # Variants
///
/// - `Ranf`: CRAY 48-bit linear congruential generator
/// - `Mrg`: Five-term multiple recursive generator (L'Ecuyer)
/// - `Uni`: Lagged-Fibonacci subtractive generator, 16-bit machine digits
/// - `Uni32`: Lagged-Fibonacci subtractive generator, 32-bit machine digits
/// - `Taus`: Maximally equidistributed combined Tausworthe generator
///
/// # Example
///
/// ```
/// use prng_core::GeneratorKind;
///
/// let kind: GeneratorKind = "uni32".parse().unwrap();
/// assert_eq!(kind, GeneratorKind::Uni32);
/// assert_eq!(kind.descriptor().range_max, 2_147_483_646);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GeneratorKind {
    /// CRAY RANF
    #[default]
    Ranf,
    /// L'Ecuyer MRG
    Mrg,
    /// UNI with 16-bit machine digits
    Uni,
    /// UNI with 32-bit machine digits
    Uni32,
    /// Combined Tausworthe
    Taus,
}

impl GeneratorKind {
    /// Every algorithm, in listing order.
    pub const ALL: [GeneratorKind; 5] = [
        GeneratorKind::Ranf,
        GeneratorKind::Mrg,
        GeneratorKind::Uni,
        GeneratorKind::Uni32,
        GeneratorKind::Taus,
    ];

    /// Return the descriptor of this algorithm.
    #[inline]
    pub fn descriptor(&self) -> GeneratorDescriptor {
        match self {
            GeneratorKind::Ranf => Ranf::DESCRIPTOR,
            GeneratorKind::Mrg => Mrg::DESCRIPTOR,
            GeneratorKind::Uni => Uni::DESCRIPTOR,
            GeneratorKind::Uni32 => Uni32::DESCRIPTOR,
            GeneratorKind::Taus => Taus::DESCRIPTOR,
        }
    }

    /// Return the algorithm name, identical to `descriptor().name`.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        self.descriptor().name
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GeneratorKind {
    type Err = RngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ranf" => Ok(GeneratorKind::Ranf),
            "mrg" => Ok(GeneratorKind::Mrg),
            "uni" => Ok(GeneratorKind::Uni),
            "uni32" => Ok(GeneratorKind::Uni32),
            "taus" => Ok(GeneratorKind::Taus),
            _ => Err(RngError::UnknownGenerator(s.to_string())),
        }
    }
}
