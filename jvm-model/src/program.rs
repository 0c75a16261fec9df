//! The closed-world view of a program that the minifier operates on.
//!
//! Everything in this module is the external collaborator the minifier depends on: a class file
//! parser, jar reader, or (for tests and the demo CLI) a hand-built fixture populates a
//! [`ProgramModel`], and the minifier only ever reads from it.

use indexmap::{IndexMap, IndexSet};
use crate::class::{ClassAccess, ClassName, EnclosingMethod, InnerClassAttribute, TypeKind};
use crate::descriptor::Proto;
use crate::field::{FieldAccess, FieldDef, FieldName, FieldRef};
use crate::method::{MethodAccess, MethodDef, MethodName, MethodRef};

/// Everything the minifier knows about a single class, interface, or array/primitive boundary
/// type.
#[derive(Debug, Clone)]
pub struct TypeInfo {
	pub name: ClassName,
	pub kind: TypeKind,
	pub access: ClassAccess,
	pub super_class: Option<ClassName>,
	pub interfaces: Vec<ClassName>,
	pub inner_class: Option<InnerClassAttribute>,
	pub enclosing_method: Option<EnclosingMethod>,
}

impl TypeInfo {
	pub fn is_interface(&self) -> bool {
		self.access.is_interface
	}
}

/// The result of resolving a non-rebound method reference (see `rewrite_non_rebound_references`
/// in minify-core) down to the method declaration(s) a virtual call could actually reach.
#[derive(Debug, Clone)]
pub enum ResolveOutcome {
	/// Unambiguous: the call always lands on this declared method.
	Unique(MethodRef),
	/// Reachable through more than one unrelated declaration (e.g. two interfaces implemented by
	/// unrelated classes, both reachable from a single static type). The caller must treat this
	/// as resolved only if every alternative ends up sharing one final name.
	Ambiguous(Vec<MethodRef>),
	/// No declaration could be found; the reference is left untouched.
	NotFound,
}

/// The program the minifier runs over: program classes, the classpath/library boundary around
/// them, and enough of the resolution machinery to look up inherited members.
pub trait ProgramModel {
	/// All classes known to this model, program and non-program alike, in a stable, deterministic
	/// order.
	fn classes(&self) -> Box<dyn Iterator<Item = &ClassName> + '_>;

	fn type_info(&self, class: &ClassName) -> Option<&TypeInfo>;

	/// Methods declared directly on `class` (not inherited), in declaration order.
	fn methods(&self, class: &ClassName) -> &[MethodDef];

	/// Fields declared directly on `class` (not inherited), in declaration order.
	fn fields(&self, class: &ClassName) -> &[FieldDef];

	/// Resolves a call site's static `(holder, name, proto)` down to the method(s) that a virtual
	/// dispatch could actually reach, per the rules of JVMS 5.4.3.3/5.4.3.4.
	fn resolve_method(&self, holder: &ClassName, name: &MethodName, proto: &Proto) -> ResolveOutcome;

	/// The kind of `class`, defaulting to [`TypeKind::Missing`] for anything not in the model.
	fn kind_of(&self, class: &ClassName) -> TypeKind {
		self.type_info(class).map(|info| info.kind).unwrap_or(TypeKind::Missing)
	}
}

/// A simple in-memory [`ProgramModel`], built up with [`InMemoryProgramModel::add_class`]. Used by
/// the demo CLI and by every test in this workspace; a real deployment would instead adapt a
/// bytecode reader.
#[derive(Debug, Default)]
pub struct InMemoryProgramModel {
	types: IndexMap<ClassName, TypeInfo>,
	methods: IndexMap<ClassName, Vec<MethodDef>>,
	fields: IndexMap<ClassName, Vec<FieldDef>>,
}

impl InMemoryProgramModel {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add_class(&mut self, info: TypeInfo, methods: Vec<MethodDef>, fields: Vec<FieldDef>) -> &mut Self {
		let name = info.name.clone();
		self.types.insert(name.clone(), info);
		self.methods.insert(name.clone(), methods);
		self.fields.insert(name, fields);
		self
	}

	/// Walks from `class` up through `super_class` (and, if `through_interfaces` is set, through
	/// `interfaces` too), returning the first declared method matching `name`/`proto`.
	fn find_declaration(&self, class: &ClassName, name: &MethodName, proto: &Proto) -> Option<MethodRef> {
		let mut frontier = vec![class.clone()];
		let mut seen = IndexSet::new();
		while let Some(current) = frontier.pop() {
			if !seen.insert(current.clone()) {
				continue;
			}
			if let Some(defs) = self.methods.get(&current) {
				if let Some(def) = defs.iter().find(|d| d.method_ref.name == *name && d.method_ref.proto == *proto) {
					return Some(def.method_ref.clone());
				}
			}
			if let Some(info) = self.types.get(&current) {
				frontier.extend(info.super_class.iter().cloned());
				frontier.extend(info.interfaces.iter().cloned());
			}
		}
		None
	}
}

impl ProgramModel for InMemoryProgramModel {
	fn classes(&self) -> Box<dyn Iterator<Item = &ClassName> + '_> {
		Box::new(self.types.keys())
	}

	fn type_info(&self, class: &ClassName) -> Option<&TypeInfo> {
		self.types.get(class)
	}

	fn methods(&self, class: &ClassName) -> &[MethodDef] {
		self.methods.get(class).map(Vec::as_slice).unwrap_or(&[])
	}

	fn fields(&self, class: &ClassName) -> &[FieldDef] {
		self.fields.get(class).map(Vec::as_slice).unwrap_or(&[])
	}

	fn resolve_method(&self, holder: &ClassName, name: &MethodName, proto: &Proto) -> ResolveOutcome {
		match self.find_declaration(holder, name, proto) {
			Some(declared) => ResolveOutcome::Unique(declared),
			None => ResolveOutcome::NotFound,
		}
	}
}

#[cfg(test)]
mod testing {
	use super::*;
	use crate::class::ClassAccess;

	fn access(is_interface: bool) -> ClassAccess {
		ClassAccess {
			is_public: true,
			is_final: false,
			is_interface,
			is_abstract: is_interface,
			is_synthetic: false,
			is_annotation: false,
			is_enum: false,
		}
	}

	#[test]
	fn resolves_inherited_method() {
		let mut model = InMemoryProgramModel::new();
		model.add_class(
			TypeInfo {
				name: ClassName::from("com/example/Base"),
				kind: TypeKind::Program,
				access: access(false),
				super_class: None,
				interfaces: vec![],
				inner_class: None,
				enclosing_method: None,
			},
			vec![MethodDef {
				method_ref: MethodRef::new("com/example/Base", "greet", Proto::new(vec![], None)),
				access: MethodAccess {
					is_public: true, is_private: false, is_protected: false, is_static: false,
					is_final: false, is_bridge: false, is_native: false, is_abstract: false, is_synthetic: false,
				},
			}],
			vec![],
		);
		model.add_class(
			TypeInfo {
				name: ClassName::from("com/example/Sub"),
				kind: TypeKind::Program,
				access: access(false),
				super_class: Some(ClassName::from("com/example/Base")),
				interfaces: vec![],
				inner_class: None,
				enclosing_method: None,
			},
			vec![],
			vec![],
		);

		let outcome = model.resolve_method(
			&ClassName::from("com/example/Sub"),
			&MethodName::from("greet"),
			&Proto::new(vec![], None),
		);
		match outcome {
			ResolveOutcome::Unique(resolved) => assert_eq!(resolved.holder, ClassName::from("com/example/Base")),
			other => panic!("expected Unique, got {other:?}"),
		}
	}
}
