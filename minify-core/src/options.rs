//! Configuration for a minification run, modeling the handful of flags that control scope and
//! naming policy (the ProGuard-style `-dontusemixedcaseclassnames`, `-repackageclasses`,
//! `-overloadaggressively`, and dictionary options).

use serde::{Deserialize, Serialize};

/// How a method's [`SignatureKey`](crate::signature_key::SignatureKey) is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignatureKeyMode {
	/// The common case: overloads that differ only by return type still collide, since most JVMs
	/// (and Android's toolchain in particular) don't fully support overload resolution on return
	/// type alone. The key is the parameter list.
	ParamsOnly,
	/// `-overloadaggressively`: the key is the full `(params, return type)` pair, allowing more
	/// aggressive reuse of short names at the cost of relying on precise overload resolution.
	FullProto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinifierOptions {
	/// Keep inner classes nested under their renamed outer class's name (`Outer$Inner` stays
	/// `a$b`, rather than `a` and an unrelated top-level `b`). Corresponds to *not* passing
	/// `-flattenpackagehierarchy`/`-repackageclasses` for nested types.
	pub keep_inner_class_structure: bool,
	/// If false, all generated names are folded to a single case when checking for collisions,
	/// so that e.g. `a` and `A` are never both used as sibling names (`-dontusemixedcaseclassnames`).
	pub mixed_case_allowed: bool,
	/// If set, every top-level (non-inner) class is moved into this package, flattening the
	/// original package hierarchy (`-repackageclasses`). `Some(String::new())` repackages into
	/// the default package.
	pub repackage_classes: Option<String>,
	pub signature_key_mode: SignatureKeyMode,
	/// Shared dictionary of preferred candidate names, consulted before falling back to the
	/// generated `a, b, c, ...` sequence, for classes, methods, and fields alike.
	pub dictionary: Vec<String>,
}

impl Default for MinifierOptions {
	fn default() -> Self {
		MinifierOptions {
			keep_inner_class_structure: true,
			mixed_case_allowed: true,
			repackage_classes: None,
			signature_key_mode: SignatureKeyMode::ParamsOnly,
			dictionary: Vec::new(),
		}
	}
}

impl MinifierOptions {
	/// Folds `name` for used-set comparisons, respecting [`Self::mixed_case_allowed`].
	pub fn fold_case<'a>(&self, name: &'a str) -> std::borrow::Cow<'a, str> {
		if self.mixed_case_allowed {
			std::borrow::Cow::Borrowed(name)
		} else {
			std::borrow::Cow::Owned(name.to_lowercase())
		}
	}
}
