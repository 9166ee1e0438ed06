//! Type alias for operations that support partial success.
//! Some inputs of such an operation may be rejected while the rest still
//! produce a usable value, allowing partial completion rather than total failure.

/// Represents a successful operation where some parts failed but didn't prevent overall success.
/// The `Vec<E>` contains errors from the failed parts that were handled gracefully.
pub type PartialSuccess<T, E> = ( T, Vec<E> );
