//! Renames fields.
//!
//! Much simpler than method renaming: fields aren't virtually dispatched, so there's no override
//! relationship to preserve and no interface lattice to walk. Each class gets its own fresh
//! [`NameSource`] per declared field, the only inherited state being the set of names already
//! reserved or used somewhere in the class's ancestor chain (so a renamed field never shadows an
//! inherited one in a way that would change which field a bare reference resolves to).

use anyhow::Result;
use indexmap::{IndexMap, IndexSet};
use jvm_model::class::{ClassName, TypeKind};
use jvm_model::program::ProgramModel;
use crate::error::MinifyError;
use crate::name_source::NameSource;
use crate::options::MinifierOptions;
use crate::renaming::FieldRenaming;
use crate::strategy::NamingStrategy;

pub struct FieldMinifier;

impl FieldMinifier {
	pub fn run(program: &dyn ProgramModel, strategy: &dyn NamingStrategy, options: &MinifierOptions) -> Result<FieldRenaming> {
		let mut renaming = FieldRenaming::default();
		let mut reserved_by_class: IndexMap<ClassName, IndexSet<String>> = IndexMap::new();

		for class in program.classes().cloned().collect::<Vec<_>>() {
			if program.kind_of(&class) != TypeKind::Program {
				continue;
			}
			let reserved_names = reserved_field_names(program, strategy, &class, &mut reserved_by_class);

			let mut used_in_class: IndexSet<String> = IndexSet::new();
			let mut reserved_owners: IndexMap<String, String> = IndexMap::new();
			let mut source = NameSource::new(options.dictionary.clone());
			let allow_renaming = strategy.allow_member_renaming(&class);

			for field in program.fields(&class) {
				if let Some(reserved) = strategy.reserved_field_name(&field.field_ref) {
					let folded = options.fold_case(&reserved).into_owned();
					match reserved_owners.get(&folded) {
						Some(existing) if existing != field.field_ref.name.as_str() => {
							return Err(MinifyError::InvariantViolation {
								member: folded,
								existing: existing.clone(),
								requested: field.field_ref.name.as_str().to_owned(),
							}
							.into());
						}
						_ => {
							reserved_owners.insert(folded.clone(), field.field_ref.name.as_str().to_owned());
						}
					}
					renaming.fields.insert(field.field_ref.clone(), reserved.clone());
					used_in_class.insert(folded);
					continue;
				}
				if !allow_renaming {
					renaming.fields.insert(field.field_ref.clone(), field.field_ref.name.as_str().to_owned());
					used_in_class.insert(options.fold_case(field.field_ref.name.as_str()).into_owned());
					continue;
				}

				let name = strategy.next_field_name(&field.field_ref, &mut source, &mut |candidate| {
					let folded = options.fold_case(candidate).into_owned();
					!reserved_names.contains(&folded) && !used_in_class.contains(&folded)
				});
				used_in_class.insert(options.fold_case(&name).into_owned());
				renaming.fields.insert(field.field_ref.clone(), name);
			}
		}

		Ok(renaming)
	}
}

/// The union of every reserved field name visible anywhere in `class`'s ancestor chain, folded
/// per the mixed-case policy.
fn reserved_field_names(
	program: &dyn ProgramModel,
	strategy: &dyn NamingStrategy,
	class: &ClassName,
	cache: &mut IndexMap<ClassName, IndexSet<String>>,
) -> IndexSet<String> {
	if let Some(existing) = cache.get(class) {
		return existing.clone();
	}
	let mut names = IndexSet::new();
	if let Some(info) = program.type_info(class) {
		if let Some(super_class) = &info.super_class {
			names.extend(reserved_field_names(program, strategy, super_class, cache));
		}
	}
	for field in program.fields(class) {
		if let Some(reserved) = strategy.reserved_field_name(&field.field_ref) {
			names.insert(reserved);
		}
	}
	cache.insert(class.clone(), names.clone());
	names
}
