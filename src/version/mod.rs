//! Version comparison layer
//!
//! Pure computation over version strings: no I/O, no state.
//!
//! - [`semver`]: padding-normalized parsing, total-order comparison, base
//!   form extraction, newest-strictly-greater selection
//! - [`error`]: error types for version operations

pub mod error;
pub mod semver;
