//! The one error type a caller might want to match on programmatically. Everything else that can
//! go wrong is reported through `anyhow::Error` with a human-readable `.context(...)` chain.

use std::fmt;

/// A fatal condition raised by a minification run.
///
/// `ResolutionFailure` is the sole recoverable member listed here conceptually: call sites that
/// hit it treat the reference as a no-op rather than constructing this variant, so in practice
/// only `InvariantViolation` and `IllegalConfiguration` ever surface as an actual `MinifyError`.
#[derive(Debug)]
pub enum MinifyError {
	/// Two members that must share a final name (an override pair, or two references resolved
	/// to the same declaration) were about to be assigned different ones, or two members that
	/// must stay distinct were about to collide.
	InvariantViolation {
		member: String,
		existing: String,
		requested: String,
	},
	/// A reference could not be resolved against the program model. Recoverable: surfaced only
	/// when a caller explicitly asks to treat unresolved references as fatal.
	ResolutionFailure {
		reference: String,
		reason: String,
	},
	/// The supplied [`MinifierOptions`](crate::options::MinifierOptions) or
	/// [`NamingStrategy`](crate::strategy::NamingStrategy) are self-contradictory (e.g. an
	/// apply-mapping table that renames a class kept by a strategy's own keep rules).
	IllegalConfiguration {
		detail: String,
	},
}

impl fmt::Display for MinifyError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			MinifyError::InvariantViolation { member, existing, requested } => write!(
				f,
				"invariant violation renaming {member}: already assigned {existing:?}, but {requested:?} was also requested"
			),
			MinifyError::ResolutionFailure { reference, reason } => {
				write!(f, "failed to resolve {reference}: {reason}")
			}
			MinifyError::IllegalConfiguration { detail } => write!(f, "illegal configuration: {detail}"),
		}
	}
}

impl std::error::Error for MinifyError {}
