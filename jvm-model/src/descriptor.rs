//! JVM types as they appear in field and method descriptors.

use crate::class::ClassName;

/// A JVM type: one of the eight primitives, a class instance, or an array of some other [`Type`].
///
/// Unlike duke's `descriptor::Type`, array types are represented recursively instead of via a
/// separate dimension-counted `ArrayType` companion enum: nothing here parses the dimension count
/// out of raw descriptor bytes, so the recursive shape is the simpler one to construct and match on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
	B,
	C,
	D,
	F,
	I,
	J,
	S,
	Z,
	Object(ClassName),
	Array(Box<Type>),
}

impl Type {
	pub fn object(class: impl Into<ClassName>) -> Type {
		Type::Object(class.into())
	}

	/// The class this type refers to, if it is an [`Type::Object`] (including through any number
	/// of array layers).
	pub fn element_class(&self) -> Option<&ClassName> {
		match self {
			Type::Object(class) => Some(class),
			Type::Array(inner) => inner.element_class(),
			_ => None,
		}
	}
}

/// The full signature of a method: its parameter types, in order, and its return type.
///
/// `return_type: None` represents `void`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Proto {
	pub params: Vec<Type>,
	pub return_type: Option<Type>,
}

impl Proto {
	pub fn new(params: Vec<Type>, return_type: Option<Type>) -> Proto {
		Proto { params, return_type }
	}

	/// All class names mentioned anywhere in this signature (parameters and return type, through
	/// any number of array layers).
	pub fn referenced_classes(&self) -> impl Iterator<Item = &ClassName> {
		self.params.iter().chain(self.return_type.iter()).filter_map(Type::element_class)
	}
}
