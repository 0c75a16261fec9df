//! The pluggable policy that decides what gets kept, what gets renamed, and where fresh names
//! come from. Every phase of the minifier consults a `dyn NamingStrategy` instead of hardcoding
//! ProGuard-rule semantics, so that a caller can swap in a completely different keep/rename
//! policy (or, as [`ApplyMappingStrategy`] does, replay a previously recorded one).

use indexmap::IndexMap;
use jvm_model::class::ClassName;
use jvm_model::field::FieldRef;
use jvm_model::method::MethodRef;
use crate::name_source::NameSource;

/// External policy consulted by every phase of the minifier.
pub trait NamingStrategy {
	/// If `Some`, this method's name is fixed and must be reserved under it rather than renamed.
	fn reserved_method_name(&self, method: &MethodRef) -> Option<String> {
		let _ = method;
		None
	}

	/// If `Some`, this field's name is fixed and must be reserved under it rather than renamed.
	fn reserved_field_name(&self, field: &FieldRef) -> Option<String> {
		let _ = field;
		None
	}

	/// If `Some`, this class's name is fixed and must be reserved under it rather than renamed.
	fn reserved_class_name(&self, class: &ClassName) -> Option<ClassName> {
		let _ = class;
		None
	}

	/// Whether any member of `holder` may be renamed at all. Classes that return `false` here
	/// still participate in scope/collision bookkeeping; their members just keep their original
	/// names.
	fn allow_member_renaming(&self, holder: &ClassName) -> bool {
		let _ = holder;
		true
	}

	/// Produces the next fresh candidate method name, drawing from `source` and rejecting any
	/// candidate `is_available` refuses.
	fn next_method_name(
		&self,
		method: &MethodRef,
		source: &mut NameSource,
		is_available: &mut dyn FnMut(&str) -> bool,
	) -> String {
		let _ = method;
		loop {
			let candidate = source.next();
			if is_available(&candidate) {
				return candidate;
			}
		}
	}

	/// Produces the next fresh candidate field name, analogous to [`Self::next_method_name`].
	fn next_field_name(
		&self,
		field: &FieldRef,
		source: &mut NameSource,
		is_available: &mut dyn FnMut(&str) -> bool,
	) -> String {
		let _ = field;
		loop {
			let candidate = source.next();
			if is_available(&candidate) {
				return candidate;
			}
		}
	}

	/// When a strategy's own reserved name collides with one already assigned elsewhere, should
	/// the minifier treat this as fatal (`true`, the default: "break on not available") or
	/// silently retry with a different candidate?
	fn break_on_not_available(&self) -> bool {
		true
	}

	fn is_kept(&self, class: &ClassName) -> bool {
		let _ = class;
		false
	}

	fn is_renamed_by_apply_mapping(&self, class: &ClassName) -> bool {
		let _ = class;
		false
	}
}

/// The default policy: nothing is reserved beyond what a subclass adds, every member may be
/// renamed, and fresh names are drawn straight from the shared dictionary.
#[derive(Debug, Clone, Default)]
pub struct FreshNamingStrategy {
	pub kept_classes: indexmap::IndexSet<ClassName>,
}

impl NamingStrategy for FreshNamingStrategy {
	fn reserved_class_name(&self, class: &ClassName) -> Option<ClassName> {
		self.kept_classes.contains(class).then(|| class.clone())
	}

	fn is_kept(&self, class: &ClassName) -> bool {
		self.kept_classes.contains(class)
	}
}

/// A previously recorded mapping, replayed verbatim for every entry it covers (`-applymapping`).
/// Anything not covered falls back to a nested [`FreshNamingStrategy`], so an incremental
/// mapping file can be extended across runs without forcing every member to be listed.
#[derive(Debug, Clone, Default)]
pub struct ApplyMappingStrategy {
	pub classes: IndexMap<ClassName, ClassName>,
	pub methods: IndexMap<MethodRef, String>,
	pub fields: IndexMap<FieldRef, String>,
	pub fallback: FreshNamingStrategy,
}

impl NamingStrategy for ApplyMappingStrategy {
	fn reserved_class_name(&self, class: &ClassName) -> Option<ClassName> {
		self.classes.get(class).cloned().or_else(|| self.fallback.reserved_class_name(class))
	}

	fn reserved_method_name(&self, method: &MethodRef) -> Option<String> {
		self.methods.get(method).cloned().or_else(|| self.fallback.reserved_method_name(method))
	}

	fn reserved_field_name(&self, field: &FieldRef) -> Option<String> {
		self.fields.get(field).cloned().or_else(|| self.fallback.reserved_field_name(field))
	}

	fn is_renamed_by_apply_mapping(&self, class: &ClassName) -> bool {
		self.classes.contains_key(class)
	}

	fn is_kept(&self, class: &ClassName) -> bool {
		self.fallback.is_kept(class)
	}
}
