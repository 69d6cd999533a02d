//! Error types for the edges of the engine framework.
//!
//! Drawing and seeding never fail. Errors only arise when a generator is
//! selected by name or when a state snapshot is restored from outside.

use thiserror::Error;

/// Errors raised when selecting a generator or restoring its state.
///
/// # Examples
/// ```
/// use prng_core::RngError;
///
/// let err = RngError::UnknownGenerator("mt19937".to_string());
/// assert_eq!(
///     format!("{}", err),
///     "Unknown generator: mt19937. Supported: ranf, mrg, uni, uni32, taus"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RngError {
    /// Generator name does not match any known algorithm.
    #[error("Unknown generator: {0}. Supported: ranf, mrg, uni, uni32, taus")]
    UnknownGenerator(String),

    /// A snapshot of one algorithm was offered to a generator of another.
    #[error("State mismatch: expected {expected} state, found {found} state")]
    StateMismatch {
        /// Name of the algorithm receiving the state
        expected: &'static str,
        /// Name of the algorithm the snapshot belongs to
        found: &'static str,
    },

    /// A snapshot has limbs or cursors outside the algorithm's range.
    #[error("Invalid {generator} state: limbs outside the generator's modulus")]
    InvalidState {
        /// Name of the algorithm whose state was rejected
        generator: &'static str,
    },
}
