use std::fmt::{Debug, Formatter};
use crate::class::ClassName;
use crate::descriptor::Proto;
use crate::macros::string_like;

string_like!(
	/// An unqualified method name, or one of the two special names `<init>`/`<clinit>`.
	pub MethodName
);

impl MethodName {
	pub fn is_constructor(&self) -> bool {
		self.as_str() == "<init>"
	}

	pub fn is_static_initializer(&self) -> bool {
		self.as_str() == "<clinit>"
	}

	/// Neither constructors nor static initializers are ever renamed: their names are fixed by
	/// the class file format, not chosen by the program.
	pub fn is_renameable(&self) -> bool {
		!self.is_constructor() && !self.is_static_initializer()
	}
}

/// The subset of the method access flags (JVMS 4.6) the minifier cares about.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct MethodAccess {
	pub is_public: bool,
	pub is_private: bool,
	pub is_protected: bool,
	pub is_static: bool,
	pub is_final: bool,
	pub is_bridge: bool,
	pub is_native: bool,
	pub is_abstract: bool,
	pub is_synthetic: bool,
}

impl Debug for MethodAccess {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("MethodAccess { ")?;
		if self.is_public { f.write_str("public ")?; }
		if self.is_private { f.write_str("private ")?; }
		if self.is_protected { f.write_str("protected ")?; }
		if self.is_static { f.write_str("static ")?; }
		if self.is_final { f.write_str("final ")?; }
		if self.is_bridge { f.write_str("bridge ")?; }
		if self.is_native { f.write_str("native ")?; }
		if self.is_abstract { f.write_str("abstract ")?; }
		if self.is_synthetic { f.write_str("synthetic ")?; }
		f.write_str("}")
	}
}

/// A reference to a method: the declared (or inherited) holder, its name and its signature.
///
/// This is the unit the minifier renames and the unit call sites refer to; two `MethodRef`s with
/// the same `name`/`proto` but a different `holder` are distinct references that may or may not
/// end up with the same final name, depending on whether the holders are related.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodRef {
	pub holder: ClassName,
	pub name: MethodName,
	pub proto: Proto,
}

impl MethodRef {
	pub fn new(holder: impl Into<ClassName>, name: impl Into<MethodName>, proto: Proto) -> MethodRef {
		MethodRef { holder: holder.into(), name: name.into(), proto }
	}
}

/// A method as declared on some class: its reference plus the bits of metadata the minifier's
/// scope rules depend on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDef {
	pub method_ref: MethodRef,
	pub access: MethodAccess,
}
