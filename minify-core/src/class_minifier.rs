//! Renames classes and, where the package changes, records the package rename too.
//!
//! Three passes over the program classes, in this order:
//! 1. reserve: every class a strategy insists on keeping gets its current name locked in first,
//!    so later passes never hand that name to someone else;
//! 2. rename: every other class gets a fresh name, honoring the inner-class prefix invariant;
//! 3. dangling types: classes referenced from a method/field signature but missing from the
//!    program model (so neither reserved nor renamed by the first two passes) are force-reserved
//!    under their original name, so every reference in the renamed output still resolves.

use anyhow::{Context, Result};
use indexmap::{IndexMap, IndexSet};
use jvm_model::class::{ClassName, TypeKind};
use jvm_model::program::ProgramModel;
use crate::error::MinifyError;
use crate::namespace::Namespace;
use crate::options::MinifierOptions;
use crate::renaming::ClassRenaming;
use crate::strategy::NamingStrategy;

pub struct ClassMinifier;

impl ClassMinifier {
	pub fn run(program: &dyn ProgramModel, strategy: &dyn NamingStrategy, options: &MinifierOptions) -> Result<ClassRenaming> {
		let mut renaming = ClassRenaming::default();
		let mut used = IndexSet::new();
		let mut namespaces: IndexMap<String, Namespace> = IndexMap::new();

		reserve_phase(program, strategy, options, &mut renaming, &mut used)?;
		for class in program.classes().cloned().collect::<Vec<_>>() {
			if program.kind_of(&class) != TypeKind::Program || renaming.classes.contains_key(&class) {
				continue;
			}
			rename_class(program, strategy, options, &class, &mut renaming, &mut used, &mut namespaces)
				.with_context(|| format!("renaming class {class}"))?;
		}

		dangling_type_pass(program, options, &mut renaming, &mut used, &mut namespaces);

		Ok(renaming)
	}
}

fn reserve_phase(
	program: &dyn ProgramModel,
	strategy: &dyn NamingStrategy,
	options: &MinifierOptions,
	renaming: &mut ClassRenaming,
	used: &mut IndexSet<String>,
) -> Result<()> {
	let mut owners: IndexMap<String, ClassName> = IndexMap::new();
	for class in program.classes() {
		let Some(info) = program.type_info(class) else { continue };
		if info.kind != TypeKind::Program {
			continue;
		}
		if let Some(reserved) = strategy.reserved_class_name(class) {
			let folded = options.fold_case(reserved.as_str()).into_owned();
			match owners.get(&folded) {
				Some(existing) if existing != class => {
					return Err(MinifyError::InvariantViolation {
						member: folded,
						existing: existing.to_string(),
						requested: class.to_string(),
					}
					.into());
				}
				_ => {
					owners.insert(folded.clone(), class.clone());
				}
			}
			renaming.classes.insert(class.clone(), reserved.clone());
			used.insert(folded);
		}
	}
	Ok(())
}

fn rename_class(
	program: &dyn ProgramModel,
	strategy: &dyn NamingStrategy,
	options: &MinifierOptions,
	class: &ClassName,
	renaming: &mut ClassRenaming,
	used: &mut IndexSet<String>,
	namespaces: &mut IndexMap<String, Namespace>,
) -> Result<ClassName> {
	if let Some(existing) = renaming.classes.get(class) {
		return Ok(existing.clone());
	}
	// Classes outside the program keep their name; we still need an entry so inner-class prefix
	// resolution for a program subclass of a non-program outer class has something to anchor to.
	let Some(info) = program.type_info(class) else {
		renaming.classes.insert(class.clone(), class.clone());
		return Ok(class.clone());
	};
	if info.kind != TypeKind::Program {
		renaming.classes.insert(class.clone(), class.clone());
		used.insert(options.fold_case(class.as_str()).into_owned());
		return Ok(class.clone());
	}
	if !strategy.allow_member_renaming(class) {
		renaming.classes.insert(class.clone(), class.clone());
		used.insert(options.fold_case(class.as_str()).into_owned());
		return Ok(class.clone());
	}

	let prefix = if options.keep_inner_class_structure {
		if let Some(inner) = &info.inner_class {
			let outer_final = rename_class(program, strategy, options, &inner.outer_class, renaming, used, namespaces)?;
			format!("{}{}", outer_final.as_str(), inner.separator)
		} else {
			package_prefix(class, options)
		}
	} else {
		package_prefix(class, options)
	};

	let namespace = namespaces
		.entry(prefix.clone())
		.or_insert_with(|| Namespace::new(prefix.clone(), options.dictionary.clone()));

	let simple = namespace.next_fresh_name(|candidate| used.contains(&options.fold_case(&format!("{prefix}{candidate}")).into_owned()));
	let full = ClassName::from(format!("{prefix}{simple}"));

	let original_package = class.package_prefix().trim_end_matches('/').to_owned();
	let new_package = full.package_prefix().trim_end_matches('/').to_owned();
	if original_package != new_package {
		renaming.packages.insert(original_package, new_package);
	}

	used.insert(options.fold_case(full.as_str()).into_owned());
	renaming.classes.insert(class.clone(), full.clone());
	Ok(full)
}

fn package_prefix(class: &ClassName, options: &MinifierOptions) -> String {
	if let Some(target) = &options.repackage_classes {
		if target.is_empty() {
			String::new()
		} else {
			format!("{target}/")
		}
	} else {
		class.package_prefix().to_owned()
	}
}

/// Walks every declared method's and field's signature looking for class names that the first two
/// passes never touched (because the referenced type isn't in the program model at all), and force
/// reserves them under their original name so the renamed output keeps resolving.
fn dangling_type_pass(
	program: &dyn ProgramModel,
	options: &MinifierOptions,
	renaming: &mut ClassRenaming,
	used: &mut IndexSet<String>,
	namespaces: &mut IndexMap<String, Namespace>,
) {
	let _ = namespaces;
	for class in program.classes() {
		for method in program.methods(class) {
			for referenced in method.method_ref.proto.referenced_classes() {
				reserve_dangling(referenced, renaming, used, options);
			}
		}
		for field in program.fields(class) {
			if let Some(referenced) = field.field_ref.ty.element_class() {
				reserve_dangling(referenced, renaming, used, options);
			}
		}
	}
}

fn reserve_dangling(class: &ClassName, renaming: &mut ClassRenaming, used: &mut IndexSet<String>, options: &MinifierOptions) {
	if renaming.classes.contains_key(class) {
		return;
	}
	renaming.classes.insert(class.clone(), class.clone());
	used.insert(options.fold_case(class.as_str()).into_owned());
}
