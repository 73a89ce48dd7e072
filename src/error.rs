//! Validation errors.

use core::fmt;

/// Errors when trying to validate the transaction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PreExecutionError {
	/// Gas limit is smaller than the intrinsic gas required.
	InsufficientGasLimit,
}

impl fmt::Display for PreExecutionError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			PreExecutionError::InsufficientGasLimit => {
				write!(f, "gas limit is smaller than the intrinsic gas required")
			}
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for PreExecutionError {}
