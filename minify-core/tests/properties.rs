//! The two universal properties that don't reduce to a single concrete scenario: the same input
//! always produces the same output, and replaying a previous run's output as an apply-mapping is a
//! fixed point.

use jvm_model::class::{ClassAccess, ClassName, TypeKind};
use jvm_model::descriptor::{Proto, Type};
use jvm_model::method::{MethodAccess, MethodDef, MethodRef};
use jvm_model::program::{InMemoryProgramModel, TypeInfo};
use minify_core::options::MinifierOptions;
use minify_core::pipeline::Pipeline;
use minify_core::strategy::{ApplyMappingStrategy, FreshNamingStrategy};
use pretty_assertions::assert_eq;

fn public_class() -> ClassAccess {
	ClassAccess { is_public: true, is_final: false, is_interface: false, is_abstract: false, is_synthetic: false, is_annotation: false, is_enum: false }
}
fn public_interface() -> ClassAccess {
	ClassAccess { is_public: true, is_final: false, is_interface: true, is_abstract: true, is_synthetic: false, is_annotation: false, is_enum: false }
}
fn public_method() -> MethodAccess {
	MethodAccess { is_public: true, is_private: false, is_protected: false, is_static: false, is_final: false, is_bridge: false, is_native: false, is_abstract: false, is_synthetic: false }
}

fn method_def(holder: &str, name: &str, proto: Proto) -> MethodDef {
	MethodDef { method_ref: MethodRef::new(ClassName::from(holder), name, proto), access: public_method() }
}

/// A modestly tangled fixture exercising inheritance, an interface shared by unrelated
/// implementors, and overloads, so determinism is checked against something richer than a single
/// class.
fn build_fixture() -> InMemoryProgramModel {
	let mut model = InMemoryProgramModel::new();
	model.add_class(
		TypeInfo { name: ClassName::from("com/example/Animal"), kind: TypeKind::Program, access: public_class(), super_class: None, interfaces: vec![ClassName::from("com/example/Named")], inner_class: None, enclosing_method: None },
		vec![
			method_def("com/example/Animal", "speak", Proto::new(vec![], None)),
			method_def("com/example/Animal", "feed", Proto::new(vec![Type::I], None)),
			method_def("com/example/Animal", "name", Proto::new(vec![], Some(Type::object("java/lang/String")))),
		],
		vec![],
	);
	model.add_class(
		TypeInfo { name: ClassName::from("com/example/Dog"), kind: TypeKind::Program, access: public_class(), super_class: Some(ClassName::from("com/example/Animal")), interfaces: vec![], inner_class: None, enclosing_method: None },
		vec![method_def("com/example/Dog", "speak", Proto::new(vec![], None)), method_def("com/example/Dog", "fetch", Proto::new(vec![], None))],
		vec![],
	);
	model.add_class(
		TypeInfo { name: ClassName::from("com/example/Named"), kind: TypeKind::Program, access: public_interface(), super_class: None, interfaces: vec![], inner_class: None, enclosing_method: None },
		vec![method_def("com/example/Named", "name", Proto::new(vec![], Some(Type::object("java/lang/String"))))],
		vec![],
	);
	model.add_class(
		TypeInfo { name: ClassName::from("com/example/Robot"), kind: TypeKind::Program, access: public_class(), super_class: None, interfaces: vec![ClassName::from("com/example/Named")], inner_class: None, enclosing_method: None },
		vec![method_def("com/example/Robot", "name", Proto::new(vec![], Some(Type::object("java/lang/String"))))],
		vec![],
	);
	model
}

/// Property 5: given the same program and strategy, two independent runs produce byte-identical
/// renaming tables.
#[test]
fn two_runs_over_the_same_program_produce_identical_renamings() {
	let model = build_fixture();
	let strategy = FreshNamingStrategy::default();
	let options = MinifierOptions::default();

	let first = Pipeline::new(&model, &strategy, options.clone()).run().unwrap();
	let second = Pipeline::new(&model, &strategy, options).run().unwrap();

	assert_eq!(first.class.classes, second.class.classes);
	assert_eq!(first.class.packages, second.class.packages);
	assert_eq!(first.method.methods, second.method.methods);
	assert_eq!(first.field.fields, second.field.fields);
}

/// Property 6: replaying a previous run's output as an apply-mapping strategy is a fixed point —
/// running again produces the same renaming, not a further shuffle.
#[test]
fn replaying_a_run_as_apply_mapping_is_a_fixed_point() {
	let model = build_fixture();
	let fresh = FreshNamingStrategy::default();
	let options = MinifierOptions::default();

	let baseline = Pipeline::new(&model, &fresh, options.clone()).run().unwrap();

	let replay = ApplyMappingStrategy {
		classes: baseline.class.classes.clone(),
		methods: baseline.method.methods.clone(),
		fields: baseline.field.fields.clone(),
		fallback: FreshNamingStrategy::default(),
	};
	let second = Pipeline::new(&model, &replay, options).run().unwrap();

	assert_eq!(baseline.class.classes, second.class.classes);
	assert_eq!(baseline.method.methods, second.method.methods);
	assert_eq!(baseline.field.fields, second.field.fields);
}
