//! Per-scope name allocation: a [`Namespace`] draws fresh candidates from a [`NameSource`] and
//! skips any the caller rejects (already in use, forbidden by a keep rule, etc.).

use crate::name_source::NameSource;

/// A single scope that fresh names are drawn into: one package, or one `outer$` inner-class
/// prefix. Holds its own [`NameSource`] so that two unrelated namespaces don't compete over the
/// same short names for no reason.
#[derive(Debug, Clone)]
pub struct Namespace {
	prefix: String,
	source: NameSource,
}

impl Namespace {
	pub fn new(prefix: impl Into<String>, dictionary: Vec<String>) -> Self {
		Namespace { prefix: prefix.into(), source: NameSource::new(dictionary) }
	}

	/// The scope's prefix: a package path ending in `/`, an inner-class prefix ending in the
	/// binary-name separator, or the empty string for the default package.
	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	/// Draws candidates until `is_used` accepts one (returns `false`), then returns it.
	///
	/// Mixed-case policy is the caller's concern: pass an `is_used` that folds case before
	/// consulting whatever global used-set it closes over.
	pub fn next_fresh_name(&mut self, mut is_used: impl FnMut(&str) -> bool) -> String {
		loop {
			let candidate = self.source.next();
			if !is_used(&candidate) {
				return candidate;
			}
		}
	}
}

#[cfg(test)]
mod testing {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn skips_rejected_candidates() {
		let mut ns = Namespace::new("com/example/", Vec::new());
		let taken = ["a", "b"];
		let name = ns.next_fresh_name(|candidate| taken.contains(&candidate));
		assert_eq!(name, "c");
	}
}
