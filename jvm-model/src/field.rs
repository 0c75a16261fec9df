use std::fmt::{Debug, Formatter};
use crate::class::ClassName;
use crate::descriptor::Type;
use crate::macros::string_like;

string_like!(
	/// An unqualified field name.
	pub FieldName
);

/// The subset of the field access flags (JVMS 4.5) the minifier cares about.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct FieldAccess {
	pub is_public: bool,
	pub is_private: bool,
	pub is_protected: bool,
	pub is_static: bool,
	pub is_final: bool,
	pub is_volatile: bool,
	pub is_transient: bool,
	pub is_synthetic: bool,
	pub is_enum: bool,
}

impl Debug for FieldAccess {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("FieldAccess { ")?;
		if self.is_public { f.write_str("public ")?; }
		if self.is_private { f.write_str("private ")?; }
		if self.is_protected { f.write_str("protected ")?; }
		if self.is_static { f.write_str("static ")?; }
		if self.is_final { f.write_str("final ")?; }
		if self.is_volatile { f.write_str("volatile ")?; }
		if self.is_transient { f.write_str("transient ")?; }
		if self.is_synthetic { f.write_str("synthetic ")?; }
		if self.is_enum { f.write_str("enum ")?; }
		f.write_str("}")
	}
}

/// A reference to a field: its declaring holder, name and type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldRef {
	pub holder: ClassName,
	pub name: FieldName,
	pub ty: Type,
}

impl FieldRef {
	pub fn new(holder: impl Into<ClassName>, name: impl Into<FieldName>, ty: Type) -> FieldRef {
		FieldRef { holder: holder.into(), name: name.into(), ty }
	}
}

/// A field as declared on some class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
	pub field_ref: FieldRef,
	pub access: FieldAccess,
}
