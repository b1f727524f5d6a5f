use thiserror::Error;

/// Errors raised while configuring a chain or walking it.
///
/// None of these are retried. A failed walk only affects the generation
/// attempt that produced it; the model itself stays usable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
	/// A configuration value is out of its valid range.
	#[error("invalid configuration: {field} {reason}")]
	InvalidConfig {
		/// Name of the offending setting (`n`, `count`, `max_steps`).
		field: &'static str,
		/// Human readable constraint, including the rejected value.
		reason: String,
	},

	/// The walk reached a state with no recorded successor.
	#[error("no outgoing transition from state {state}")]
	NoTransition {
		/// Display form of the stuck state.
		state: String,
	},

	/// The walk did not reach the end marker within the configured bound.
	#[error("walk did not reach END within {limit} steps")]
	StepLimit {
		limit: usize,
	},
}

impl ChainError {
	pub(crate) fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
		Self::InvalidConfig { field, reason: reason.into() }
	}
}
