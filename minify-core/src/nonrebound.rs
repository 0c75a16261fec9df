//! Rewrites call-site method references whose static holder doesn't declare the method (a call
//! through an interface type, or through an ancestor further up than the actual declaration).
//!
//! Every reference is independent of every other, so this pass is split across a fixed worker
//! pool with [`std::thread::scope`] rather than run serially like the rest of the minifier.

use std::sync::Mutex;
use indexmap::IndexMap;
use jvm_model::method::{MethodName, MethodRef};
use jvm_model::program::{ProgramModel, ResolveOutcome};
use crate::renaming::MethodRenaming;

/// Resolves each of `refs` against `program` and looks up its final name in `method_renaming`.
/// References that don't resolve, or resolve ambiguously to declarations with different final
/// names, are left out of the result (the caller leaves such a reference untouched).
pub fn rewrite_non_rebound_references(program: &dyn ProgramModel, method_renaming: &MethodRenaming, refs: &[MethodRef]) -> IndexMap<MethodRef, MethodName> {
	if refs.is_empty() {
		return IndexMap::new();
	}
	let worker_count = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1).min(refs.len());
	let chunk_size = refs.len().div_ceil(worker_count.max(1));
	let chunks: Vec<&[MethodRef]> = refs.chunks(chunk_size.max(1)).collect();

	let results: Mutex<Vec<(usize, IndexMap<MethodRef, MethodName>)>> = Mutex::new(Vec::new());
	std::thread::scope(|scope| {
		for (index, chunk) in chunks.iter().enumerate() {
			let results = &results;
			scope.spawn(move || {
				let mut local = IndexMap::new();
				for reference in *chunk {
					if let Some(name) = resolve_one(program, method_renaming, reference) {
						local.insert(reference.clone(), name);
					}
				}
				results.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).push((index, local));
			});
		}
	});

	let mut ordered = results.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner());
	ordered.sort_by_key(|(index, _)| *index);
	ordered.into_iter().flat_map(|(_, chunk)| chunk).collect()
}

fn resolve_one(program: &dyn ProgramModel, method_renaming: &MethodRenaming, reference: &MethodRef) -> Option<MethodName> {
	match program.resolve_method(&reference.holder, &reference.name, &reference.proto) {
		ResolveOutcome::Unique(declared) => method_renaming.methods.get(&declared).cloned().map(MethodName::from),
		ResolveOutcome::Ambiguous(targets) => {
			let mut names = targets.iter().filter_map(|target| method_renaming.methods.get(target).cloned());
			let first = names.next()?;
			if names.all(|name| name == first) {
				Some(MethodName::from(first))
			} else {
				None
			}
		}
		ResolveOutcome::NotFound => None,
	}
}

#[cfg(test)]
mod testing {
	use super::*;
	use jvm_model::class::{ClassAccess, ClassName, TypeKind};
	use jvm_model::descriptor::Proto;
	use jvm_model::method::{MethodAccess, MethodDef};
	use jvm_model::program::{InMemoryProgramModel, TypeInfo};
	use pretty_assertions::assert_eq;

	fn public_class() -> ClassAccess {
		ClassAccess { is_public: true, is_final: false, is_interface: false, is_abstract: false, is_synthetic: false, is_annotation: false, is_enum: false }
	}
	fn public_method() -> MethodAccess {
		MethodAccess { is_public: true, is_private: false, is_protected: false, is_static: false, is_final: false, is_bridge: false, is_native: false, is_abstract: false, is_synthetic: false }
	}

	#[test]
	fn resolves_a_call_through_an_ancestor_holder() {
		let mut model = InMemoryProgramModel::new();
		model.add_class(
			TypeInfo { name: ClassName::from("com/example/Base"), kind: TypeKind::Program, access: public_class(), super_class: None, interfaces: vec![], inner_class: None, enclosing_method: None },
			vec![MethodDef { method_ref: MethodRef::new("com/example/Base", "greet", Proto::new(vec![], None)), access: public_method() }],
			vec![],
		);
		model.add_class(
			TypeInfo { name: ClassName::from("com/example/Sub"), kind: TypeKind::Program, access: public_class(), super_class: Some(ClassName::from("com/example/Base")), interfaces: vec![], inner_class: None, enclosing_method: None },
			vec![],
			vec![],
		);

		let mut renaming = MethodRenaming::default();
		renaming.methods.insert(MethodRef::new("com/example/Base", "greet", Proto::new(vec![], None)), "a".to_owned());

		let call_site = MethodRef::new("com/example/Sub", "greet", Proto::new(vec![], None));
		let resolved = rewrite_non_rebound_references(&model, &renaming, &[call_site.clone()]);
		assert_eq!(resolved.get(&call_site).unwrap().as_str(), "a");
	}
}
