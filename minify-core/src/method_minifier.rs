//! Renames methods.
//!
//! Four phases, run in order:
//! 1. class reserve: every kept method name is registered on its *frontier* — the highest
//!    ancestor at which class and library/classpath constraints coalesce (see [`frontier_of`]);
//! 2. interface reserve: a kept interface method's name is pushed out across the whole connected
//!    component of the interface lattice, and into every implementor's frontier, so a class that
//!    only transitively implements the interface still respects the reservation;
//! 3. interface assign: for every interface method not already reserved, one fresh name is picked
//!    per reachability group (the interfaces and classes the dispatch could actually hit) and
//!    written into all of them at once;
//! 4. class assign: a top-down walk of the (non-interface) class hierarchy, inheriting the naming
//!    scope from the superclass so overrides automatically pick up the same name.

use anyhow::Result;
use indexmap::{IndexMap, IndexSet};
use jvm_model::class::{ClassName, TypeKind};
use jvm_model::method::{MethodName, MethodRef};
use jvm_model::program::ProgramModel;
use crate::error::MinifyError;
use crate::interface_lattice::InterfaceLattice;
use crate::naming_state::{NamingArena, NamingId};
use crate::options::MinifierOptions;
use crate::renaming::MethodRenaming;
use crate::reservation::{ReservationArena, ReservationId};
use crate::signature_key::{signature_key, SignatureKey};
use crate::strategy::NamingStrategy;

pub struct MethodMinifier;

impl MethodMinifier {
	pub fn run(program: &dyn ProgramModel, strategy: &dyn NamingStrategy, options: &MinifierOptions) -> Result<MethodRenaming> {
		let mut reservations = ReservationArena::new();
		let mut naming = NamingArena::new();
		let mut frontier_cache: IndexMap<ClassName, (ClassName, ReservationId)> = IndexMap::new();
		let mut class_naming: IndexMap<ClassName, NamingId> = IndexMap::new();
		let mut renaming = MethodRenaming::default();

		// phase 1: class reserve
		for class in program.classes().cloned().collect::<Vec<_>>() {
			if program.kind_of(&class) != TypeKind::Program {
				continue;
			}
			if is_interface(program, &class) {
				continue;
			}
			let (_, res_id) = frontier_of(program, &class, &mut frontier_cache, &mut reservations);
			for method in program.methods(&class) {
				if let Some(name) = strategy.reserved_method_name(&method.method_ref) {
					let key = signature_key(options, &method.method_ref.proto);
					reservations.reserve_checked(res_id, key, name.clone(), method.method_ref.name.as_str())?;
					renaming.methods.insert(method.method_ref.clone(), name);
				}
			}
		}

		let lattice = InterfaceLattice::build(program);
		let mut interface_reservations: IndexMap<ClassName, ReservationId> = IndexMap::new();
		for class in program.classes() {
			if program.kind_of(class) == TypeKind::Program && is_interface(program, class) {
				interface_reservations.entry(class.clone()).or_insert_with(|| reservations.create(None));
			}
		}

		// phase 2: interface reserve
		for class in program.classes().cloned().collect::<Vec<_>>() {
			if !is_interface(program, &class) || program.kind_of(&class) != TypeKind::Program {
				continue;
			}
			for method in program.methods(&class) {
				let Some(name) = strategy.reserved_method_name(&method.method_ref) else { continue };
				let key = signature_key(options, &method.method_ref.proto);
				let component = lattice.connected_component(&class);
				for iface in &component {
					let id = *interface_reservations.entry(iface.clone()).or_insert_with(|| reservations.create(None));
					reservations.reserve_checked(id, key.clone(), name.clone(), method.method_ref.name.as_str())?;
				}
				for impl_class in lattice.implementors_of(&component) {
					let (_, res_id) = frontier_of(program, &impl_class, &mut frontier_cache, &mut reservations);
					reservations.reserve_checked(res_id, key.clone(), name.clone(), method.method_ref.name.as_str())?;
				}
				renaming.methods.insert(method.method_ref.clone(), name);
			}
		}

		// phase 3: interface assign
		let mut processed_groups: IndexSet<(ClassName, MethodName, SignatureKey)> = IndexSet::new();
		for class in program.classes().cloned().collect::<Vec<_>>() {
			if !is_interface(program, &class) || program.kind_of(&class) != TypeKind::Program {
				continue;
			}
			for method in program.methods(&class).to_vec() {
				if !method.method_ref.name.is_renameable() {
					renaming.methods.entry(method.method_ref.clone()).or_insert_with(|| method.method_ref.name.as_str().to_owned());
					continue;
				}
				if renaming.methods.contains_key(&method.method_ref) {
					continue;
				}
				let key = signature_key(options, &method.method_ref.proto);
				let component = lattice.connected_component(&class);
				let declaring = declaring_interfaces(program, options, &component, &method.method_ref.name, &key);
				let mut sorted: Vec<_> = declaring.iter().cloned().collect();
				sorted.sort();
				let root = sorted.first().cloned().unwrap_or_else(|| class.clone());
				let group_key = (root.clone(), method.method_ref.name.clone(), key.clone());
				if !processed_groups.insert(group_key) {
					continue;
				}

				let root_res = *interface_reservations.entry(root.clone()).or_insert_with(|| reservations.create(None));
				let naming_id = *class_naming.entry(root.clone()).or_insert_with(|| naming.create(None, root_res));

				let implementors = lattice.implementors_of(&declaring);
				let mut guard_ids = vec![root_res];
				for impl_class in &implementors {
					let (_, res_id) = frontier_of(program, impl_class, &mut frontier_cache, &mut reservations);
					guard_ids.push(res_id);
				}

				let final_name = assign_name(
					strategy,
					&mut reservations,
					&mut naming,
					naming_id,
					&guard_ids,
					&key,
					&method.method_ref,
					&options.dictionary,
				)?;

				for iface in declaring.iter().chain(std::iter::once(&class)) {
					if let Some(m) = program.methods(iface).iter().find(|m| m.method_ref.name == method.method_ref.name && signature_key(options, &m.method_ref.proto) == key) {
						renaming.methods.insert(m.method_ref.clone(), final_name.clone());
					}
				}
				for impl_class in &implementors {
					if let Some(m) = program.methods(impl_class).iter().find(|m| m.method_ref.name == method.method_ref.name && signature_key(options, &m.method_ref.proto) == key) {
						renaming.methods.insert(m.method_ref.clone(), final_name.clone());
					}
					let (_, res_id) = frontier_of(program, impl_class, &mut frontier_cache, &mut reservations);
					reservations.reserve(res_id, key.clone(), final_name.clone());
				}
			}
		}

		// phase 4: class assign, top-down
		for class in program.classes().cloned().collect::<Vec<_>>() {
			if program.kind_of(&class) != TypeKind::Program || is_interface(program, &class) {
				continue;
			}
			ensure_class_assigned(
				program,
				strategy,
				options,
				&class,
				&mut class_naming,
				&mut naming,
				&mut frontier_cache,
				&mut reservations,
				&mut renaming,
			)?;
		}

		Ok(renaming)
	}
}

fn is_interface(program: &dyn ProgramModel, class: &ClassName) -> bool {
	program.type_info(class).map(|info| info.is_interface()).unwrap_or(false)
}

/// The highest class (by single-inheritance `super_class` chain) a program class shares its
/// frontier with: itself, if its superclass isn't a program class; otherwise its superclass's
/// frontier.
fn frontier_of(
	program: &dyn ProgramModel,
	class: &ClassName,
	cache: &mut IndexMap<ClassName, (ClassName, ReservationId)>,
	reservations: &mut ReservationArena,
) -> (ClassName, ReservationId) {
	if let Some(existing) = cache.get(class) {
		return existing.clone();
	}
	let super_class = program.type_info(class).and_then(|info| info.super_class.clone());
	let result = match super_class {
		Some(super_class) if program.kind_of(&super_class) == TypeKind::Program => {
			frontier_of(program, &super_class, cache, reservations)
		}
		_ => {
			let id = reservations.create(None);
			(class.clone(), id)
		}
	};
	cache.insert(class.clone(), result.clone());
	result
}

/// The subset of `component` that actually declares a method named `name` with signature `key`.
fn declaring_interfaces(
	program: &dyn ProgramModel,
	options: &MinifierOptions,
	component: &IndexSet<ClassName>,
	name: &MethodName,
	key: &SignatureKey,
) -> IndexSet<ClassName> {
	component
		.iter()
		.filter(|iface| program.methods(iface).iter().any(|m| &m.method_ref.name == name && &signature_key(options, &m.method_ref.proto) == key))
		.cloned()
		.collect()
}

#[allow(clippy::too_many_arguments)]
fn assign_name(
	strategy: &dyn NamingStrategy,
	reservations: &mut ReservationArena,
	naming: &mut NamingArena,
	naming_id: NamingId,
	guard_ids: &[ReservationId],
	key: &SignatureKey,
	method_ref: &MethodRef,
	dictionary: &[String],
) -> Result<String> {
	if let Some(existing) = naming.find_assigned(naming_id, key, &method_ref.name) {
		return Ok(existing);
	}
	let final_name = naming.with_state(naming_id, key.clone(), dictionary, |state| {
		strategy.next_method_name(method_ref, &mut state.source, &mut |candidate| {
			!guard_ids.iter().any(|&id| reservations.is_reserved(id, key, candidate))
		})
	});
	naming.record(naming_id, key.clone(), method_ref.name.clone(), final_name.clone());
	for &id in guard_ids {
		reservations.reserve(id, key.clone(), final_name.clone());
	}
	Ok(final_name)
}

#[allow(clippy::too_many_arguments)]
fn ensure_class_assigned(
	program: &dyn ProgramModel,
	strategy: &dyn NamingStrategy,
	options: &MinifierOptions,
	class: &ClassName,
	class_naming: &mut IndexMap<ClassName, NamingId>,
	naming: &mut NamingArena,
	frontier_cache: &mut IndexMap<ClassName, (ClassName, ReservationId)>,
	reservations: &mut ReservationArena,
	renaming: &mut MethodRenaming,
) -> Result<NamingId> {
	if let Some(&id) = class_naming.get(class) {
		return Ok(id);
	}

	let super_class = program.type_info(class).and_then(|info| info.super_class.clone());
	let parent = match &super_class {
		Some(super_class) if program.kind_of(super_class) == TypeKind::Program => {
			Some(ensure_class_assigned(program, strategy, options, super_class, class_naming, naming, frontier_cache, reservations, renaming)?)
		}
		_ => None,
	};

	let (_, res_id) = frontier_of(program, class, frontier_cache, reservations);
	let naming_id = naming.create(parent, res_id);
	class_naming.insert(class.clone(), naming_id);

	let allow_renaming = strategy.allow_member_renaming(class);

	for method in program.methods(class).to_vec() {
		if renaming.methods.contains_key(&method.method_ref) {
			// already decided (kept, or by the interface phases) - still record into this node's
			// chain so later siblings in this class see the name as taken.
			if let Some(name) = renaming.methods.get(&method.method_ref).cloned() {
				let key = signature_key(options, &method.method_ref.proto);
				naming.record(naming_id, key, method.method_ref.name.clone(), name);
			}
			continue;
		}
		if !method.method_ref.name.is_renameable() || !allow_renaming {
			renaming.methods.insert(method.method_ref.clone(), method.method_ref.name.as_str().to_owned());
			continue;
		}

		let key = signature_key(options, &method.method_ref.proto);
		let final_name = assign_name(strategy, reservations, naming, naming_id, &[res_id], &key, &method.method_ref, &options.dictionary)?;
		renaming.methods.insert(method.method_ref.clone(), final_name);
	}

	Ok(naming_id)
}

#[cfg(test)]
mod testing {
	use super::*;
	use jvm_model::class::ClassAccess;
	use jvm_model::descriptor::Proto;
	use jvm_model::method::{MethodAccess, MethodDef};
	use jvm_model::program::{InMemoryProgramModel, TypeInfo};
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

	fn method_def(holder: &str, name: &str) -> MethodDef {
		MethodDef { method_ref: MethodRef::new(ClassName::from(holder), MethodName::from(name), Proto::new(vec![], None)), access: public_method() }
	}

	#[test]
	fn override_receives_the_same_name_as_its_ancestor() {
		let mut model = InMemoryProgramModel::new();
		model.add_class(
			TypeInfo { name: ClassName::from("com/example/Base"), kind: TypeKind::Program, access: public_class(), super_class: None, interfaces: vec![], inner_class: None, enclosing_method: None },
			vec![method_def("com/example/Base", "greet")],
			vec![],
		);
		model.add_class(
			TypeInfo { name: ClassName::from("com/example/Sub"), kind: TypeKind::Program, access: public_class(), super_class: Some(ClassName::from("com/example/Base")), interfaces: vec![], inner_class: None, enclosing_method: None },
			vec![method_def("com/example/Sub", "greet")],
			vec![],
		);

		let strategy = crate::strategy::FreshNamingStrategy::default();
		let options = MinifierOptions::default();
		let renaming = MethodMinifier::run(&model, &strategy, &options).unwrap();

		let base_name = renaming.methods.get(&method_def("com/example/Base", "greet").method_ref).unwrap();
		let sub_name = renaming.methods.get(&method_def("com/example/Sub", "greet").method_ref).unwrap();
		assert_eq!(base_name, sub_name);
	}

	#[test]
	fn unrelated_classes_implementing_one_interface_converge_on_the_interface_name() {
		let mut model = InMemoryProgramModel::new();
		model.add_class(
			TypeInfo { name: ClassName::from("com/example/I"), kind: TypeKind::Program, access: public_interface(), super_class: None, interfaces: vec![], inner_class: None, enclosing_method: None },
			vec![method_def("com/example/I", "foo")],
			vec![],
		);
		for holder in ["com/example/C1", "com/example/C2"] {
			model.add_class(
				TypeInfo { name: ClassName::from(holder), kind: TypeKind::Program, access: public_class(), super_class: None, interfaces: vec![ClassName::from("com/example/I")], inner_class: None, enclosing_method: None },
				vec![method_def(holder, "foo")],
				vec![],
			);
		}

		let strategy = crate::strategy::FreshNamingStrategy::default();
		let options = MinifierOptions::default();
		let renaming = MethodMinifier::run(&model, &strategy, &options).unwrap();

		let i_name = renaming.methods.get(&method_def("com/example/I", "foo").method_ref).unwrap().clone();
		let c1_name = renaming.methods.get(&method_def("com/example/C1", "foo").method_ref).unwrap();
		let c2_name = renaming.methods.get(&method_def("com/example/C2", "foo").method_ref).unwrap();
		assert_eq!(&i_name, c1_name);
		assert_eq!(&i_name, c2_name);
	}

	struct ConflictingMethodKeepsStrategy;
	impl NamingStrategy for ConflictingMethodKeepsStrategy {
		fn reserved_method_name(&self, method: &MethodRef) -> Option<String> {
			let _ = method;
			Some("x".to_owned())
		}
	}

	#[test]
	fn two_differently_named_methods_reserved_to_the_same_name_is_an_invariant_violation() {
		let mut model = InMemoryProgramModel::new();
		model.add_class(
			TypeInfo { name: ClassName::from("com/example/A"), kind: TypeKind::Program, access: public_class(), super_class: None, interfaces: vec![], inner_class: None, enclosing_method: None },
			vec![method_def("com/example/A", "f"), method_def("com/example/A", "g")],
			vec![],
		);

		let strategy = ConflictingMethodKeepsStrategy;
		let options = MinifierOptions::default();
		let err = MethodMinifier::run(&model, &strategy, &options).unwrap_err();
		assert!(err.downcast_ref::<crate::error::MinifyError>().is_some());
	}
}
