//! The output of a minification run: three independent rename tables, one per kind of program
//! element.

use indexmap::IndexMap;
use jvm_model::class::ClassName;
use jvm_model::field::FieldRef;
use jvm_model::method::MethodRef;

#[derive(Debug, Clone, Default)]
pub struct ClassRenaming {
	pub classes: IndexMap<ClassName, ClassName>,
	/// Source package prefix (without trailing `/`) to renamed package prefix, recorded whenever
	/// a class's rename moved it to a different package.
	pub packages: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default)]
pub struct MethodRenaming {
	pub methods: IndexMap<MethodRef, String>,
}

#[derive(Debug, Clone, Default)]
pub struct FieldRenaming {
	pub fields: IndexMap<FieldRef, String>,
}

#[derive(Debug, Clone, Default)]
pub struct Renaming {
	pub class: ClassRenaming,
	pub method: MethodRenaming,
	pub field: FieldRenaming,
}
