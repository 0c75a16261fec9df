use std::fmt::{Debug, Formatter};
use crate::macros::string_like;
use crate::method::MethodName;

string_like!(
	/// The binary name of a class, e.g. `com/example/Foo` or, for an inner class,
	/// `com/example/Foo$Inner`.
	pub ClassName
);

impl ClassName {
	/// The package prefix, including the trailing `/`, or the empty string for the default package.
	pub fn package_prefix(&self) -> &str {
		match self.0.rfind('/') {
			Some(idx) => &self.0[..=idx],
			None => "",
		}
	}

	/// The simple name: everything after the last `/`.
	pub fn simple_name(&self) -> &str {
		match self.0.rfind('/') {
			Some(idx) => &self.0[idx + 1..],
			None => &self.0,
		}
	}
}

/// Where a [`Type`](crate::program::TypeInfo) comes from, mirroring the closed-world classification
/// a minifier needs: only program classes may be renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
	/// Declared by the program under minification; eligible for renaming.
	Program,
	/// Found on the application's classpath, but not part of the program itself.
	Classpath,
	/// A platform/library class, e.g. from the bootclasspath.
	Library,
	/// Referenced, but not resolvable anywhere: treated conservatively, as if it had every method
	/// and field a caller could need, and never renamed.
	Missing,
}

impl TypeKind {
	/// Only [`TypeKind::Program`] classes, methods and fields may ever be renamed.
	pub fn is_renameable(self) -> bool {
		matches!(self, TypeKind::Program)
	}
}

/// The subset of the class access flags (JVMS 4.1) the minifier cares about.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct ClassAccess {
	pub is_public: bool,
	pub is_final: bool,
	pub is_interface: bool,
	pub is_abstract: bool,
	pub is_synthetic: bool,
	pub is_annotation: bool,
	pub is_enum: bool,
}

impl Debug for ClassAccess {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("ClassAccess { ")?;
		if self.is_public { f.write_str("public ")?; }
		if self.is_final { f.write_str("final ")?; }
		if self.is_interface { f.write_str("interface ")?; }
		if self.is_abstract { f.write_str("abstract ")?; }
		if self.is_synthetic { f.write_str("synthetic ")?; }
		if self.is_annotation { f.write_str("annotation ")?; }
		if self.is_enum { f.write_str("enum ")?; }
		f.write_str("}")
	}
}

impl From<u16> for ClassAccess {
	fn from(value: u16) -> Self {
		ClassAccess {
			is_public: value & 0x0001 != 0,
			is_final: value & 0x0010 != 0,
			is_interface: value & 0x0200 != 0,
			is_abstract: value & 0x0400 != 0,
			is_synthetic: value & 0x1000 != 0,
			is_annotation: value & 0x2000 != 0,
			is_enum: value & 0x4000 != 0,
		}
	}
}

/// The binding between a class and its lexically enclosing class, as recorded by an
/// `InnerClasses` attribute entry (JVMS 4.7.6).
///
/// `simple_name: None` marks an anonymous class: it still participates in the inner-class
/// renaming rules (its final name must still carry the outer prefix), it just never had a
/// source-level name to preserve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InnerClassAttribute {
	pub outer_class: ClassName,
	pub simple_name: Option<String>,
	/// The separator between the outer class's final name and this class's final simple name.
	/// Always `'$'` for a real inner class; kept configurable since some obfuscators reuse the
	/// attribute for synthetic bridges with a different separator.
	pub separator: char,
}

/// An enclosing-method binding for a local or anonymous class (JVMS 4.7.7), used only to decide
/// whether such a class may be renamed independently of its lexically enclosing method's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnclosingMethod {
	pub class: ClassName,
	pub method: Option<MethodName>,
}

#[cfg(test)]
mod testing {
	use super::*;

	#[test]
	fn package_prefix_and_simple_name() {
		let name = ClassName::from("com/example/Foo$Inner");
		assert_eq!(name.package_prefix(), "com/example/");
		assert_eq!(name.simple_name(), "Foo$Inner");

		let root = ClassName::from("Foo");
		assert_eq!(root.package_prefix(), "");
		assert_eq!(root.simple_name(), "Foo");
	}
}
