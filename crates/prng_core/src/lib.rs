//! # prng_core: Pluggable Pseudo-Random Number Engines
//!
//! A family of independent generator algorithms behind one contract,
//! [`RandomEngine`], plus a convenience layer that draws from default
//! states owned by an explicitly constructed [`RngContext`].
//!
//! ## Engines
//!
//! | Name    | Type             | Recurrence                                  | Range            |
//! |---------|------------------|---------------------------------------------|------------------|
//! | `ranf`  | [`engines::Ranf`]  | `x = a x mod 2^48` over 16-bit limbs      | `[0, 2^32 - 1]`  |
//! | `mrg`   | [`engines::Mrg`]   | `x = a1 x_{n-1} + a5 x_{n-5} mod 2^31 - 1` | `[0, 2^31 - 1]`  |
//! | `uni`   | [`engines::Uni`]   | 17-word subtractive lagged Fibonacci      | `[0, 2^15 - 2]`  |
//! | `uni32` | [`engines::Uni32`] | 17-word subtractive lagged Fibonacci      | `[0, 2^31 - 2]`  |
//! | `taus`  | [`engines::Taus`]  | combined Tausworthe, three components     | `[0, 2^32 - 1]`  |
//!
//! None of these generators is cryptographically secure.
//!
//! ## Explicit and implicit state
//!
//! Every engine is a plain `Copy` value that *is* its state. Independent
//! values share nothing and may be advanced from different threads.
//! [`RngContext`] owns one default state per algorithm and requires `&mut`
//! access to draw; it takes no lock and is meant for single-threaded use.
//!
//! ## Usage Example
//!
//! ```rust
//! use prng_core::{Generator, GeneratorKind, RandomEngine, RngContext};
//!
//! // Explicit state, algorithm chosen at configuration time
//! let kind: GeneratorKind = "ranf".parse().unwrap();
//! let mut rng = Generator::new(kind, 0);
//! let u = rng.next_double();
//! assert!((0.0..1.0).contains(&u));
//!
//! // Implicit state
//! let mut ctx = RngContext::new();
//! ctx.seed(1);
//! let _ = ctx.next_int();
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialise and deserialise engine states and [`Generator`] snapshots

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod context;
pub mod descriptor;
pub mod engines;
pub mod error;
pub mod generator;
pub mod sampler;

// Public re-exports
pub use context::{ImplicitRng, RngContext};
pub use descriptor::{GeneratorDescriptor, GeneratorKind};
pub use engines::RandomEngine;
pub use error::RngError;
pub use generator::Generator;
pub use sampler::SampleRng;
