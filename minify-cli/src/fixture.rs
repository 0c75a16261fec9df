//! A small hand-built [`ProgramModel`] standing in for a real class-file reader, so the demo
//! binary has something to minify without depending on a bytecode parser the core deliberately
//! doesn't have.

use jvm_model::class::{ClassAccess, ClassName, TypeKind};
use jvm_model::descriptor::{Proto, Type};
use jvm_model::field::{FieldAccess, FieldDef, FieldRef};
use jvm_model::method::{MethodAccess, MethodDef, MethodRef};
use jvm_model::program::{InMemoryProgramModel, TypeInfo};

fn class_access() -> ClassAccess {
	ClassAccess { is_public: true, is_final: false, is_interface: false, is_abstract: false, is_synthetic: false, is_annotation: false, is_enum: false }
}
fn interface_access() -> ClassAccess {
	ClassAccess { is_public: true, is_final: false, is_interface: true, is_abstract: true, is_synthetic: false, is_annotation: false, is_enum: false }
}
fn public_method() -> MethodAccess {
	MethodAccess { is_public: true, is_private: false, is_protected: false, is_static: false, is_final: false, is_bridge: false, is_native: false, is_abstract: false, is_synthetic: false }
}
fn public_field() -> FieldAccess {
	FieldAccess { is_public: true, is_private: false, is_protected: false, is_static: false, is_final: false, is_volatile: false, is_transient: false, is_synthetic: false, is_enum: false }
}

fn method(holder: &str, name: &str, params: Vec<Type>, return_type: Option<Type>) -> MethodDef {
	MethodDef { method_ref: MethodRef::new(holder, name, Proto::new(params, return_type)), access: public_method() }
}

fn field(holder: &str, name: &str, ty: Type) -> FieldDef {
	FieldDef { field_ref: FieldRef::new(holder, name, ty), access: public_field() }
}

/// `com.example.Named { String name(); }`, implemented independently by `Animal` and `Robot`;
/// `Dog extends Animal` and overrides `speak`, inheriting `name` unchanged.
pub fn build() -> InMemoryProgramModel {
	let string_type = || Type::object("java/lang/String");

	let mut model = InMemoryProgramModel::new();

	model.add_class(
		TypeInfo {
			name: ClassName::from("com/example/Named"),
			kind: TypeKind::Program,
			access: interface_access(),
			super_class: None,
			interfaces: vec![],
			inner_class: None,
			enclosing_method: None,
		},
		vec![method("com/example/Named", "name", vec![], Some(string_type()))],
		vec![],
	);

	model.add_class(
		TypeInfo {
			name: ClassName::from("com/example/Animal"),
			kind: TypeKind::Program,
			access: class_access(),
			super_class: None,
			interfaces: vec![ClassName::from("com/example/Named")],
			inner_class: None,
			enclosing_method: None,
		},
		vec![
			method("com/example/Animal", "speak", vec![], None),
			method("com/example/Animal", "feed", vec![Type::I], None),
			method("com/example/Animal", "name", vec![], Some(string_type())),
		],
		vec![field("com/example/Animal", "age", Type::I)],
	);

	model.add_class(
		TypeInfo {
			name: ClassName::from("com/example/Dog"),
			kind: TypeKind::Program,
			access: class_access(),
			super_class: Some(ClassName::from("com/example/Animal")),
			interfaces: vec![],
			inner_class: None,
			enclosing_method: None,
		},
		vec![method("com/example/Dog", "speak", vec![], None), method("com/example/Dog", "fetch", vec![], None)],
		vec![field("com/example/Dog", "breed", string_type())],
	);

	model.add_class(
		TypeInfo {
			name: ClassName::from("com/example/Robot"),
			kind: TypeKind::Program,
			access: class_access(),
			super_class: None,
			interfaces: vec![ClassName::from("com/example/Named")],
			inner_class: None,
			enclosing_method: None,
		},
		vec![method("com/example/Robot", "name", vec![], Some(string_type()))],
		vec![],
	);

	model
}
