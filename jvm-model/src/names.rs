//! Validity checks for the identifiers that make up a program model, adapted from the class name
//! and unqualified name rules of JVMS 4.2.1/4.2.2.
//!
//! These are used at the boundary, when a [`ProgramModel`](crate::program::ProgramModel)
//! implementation is built from some outside source. Renamed names produced by the minifier are
//! always run back through these checks in tests.

use anyhow::{bail, Result};

/// A binary class name such as `com/example/Foo`, or an array descriptor such as `[Lcom/example/Foo;`.
pub fn is_valid_class_name(x: &str) -> Result<()> {
	if x.starts_with('[') {
		return Ok(());
	}
	for segment in x.split('/') {
		if segment.is_empty() {
			bail!("invalid class name {x:?}: empty segment (split at `/`) not allowed");
		}
		if segment.contains(['.', ';', '[']) {
			bail!("invalid class name {x:?}: segment {segment:?} contains one of `.`, `;` or `[`, which are not allowed");
		}
	}
	Ok(())
}

/// An unqualified name: used for field names and method parameter/local names.
pub fn is_valid_unqualified_name(x: &str, usage: &str) -> Result<()> {
	if x.is_empty() {
		bail!("invalid {usage} name: empty name not allowed");
	}
	if x.contains(['.', ';', '[', '/']) {
		bail!("invalid {usage} name {x:?}: must not contain `.`, `;`, `[` or `/`");
	}
	Ok(())
}

/// A method name: an unqualified name, or one of the two special names `<init>`/`<clinit>`.
pub fn is_valid_method_name(x: &str) -> Result<()> {
	if x == "<init>" || x == "<clinit>" {
		return Ok(());
	}
	if x.is_empty() {
		bail!("invalid method name: empty name not allowed");
	}
	if x.contains(['.', ';', '[', '/', '<', '>']) {
		bail!("invalid method name {x:?}: must not contain `.`, `;`, `[`, `/`, `<` or `>`");
	}
	Ok(())
}

#[cfg(test)]
mod testing {
	use super::*;

	#[test]
	fn class_names() {
		assert!(is_valid_class_name("com/example/Foo").is_ok());
		assert!(is_valid_class_name("[Lcom/example/Foo;").is_ok());
		assert!(is_valid_class_name("com//Foo").is_err());
		assert!(is_valid_class_name("com.example/Foo").is_err());
	}

	#[test]
	fn method_names() {
		assert!(is_valid_method_name("<init>").is_ok());
		assert!(is_valid_method_name("<clinit>").is_ok());
		assert!(is_valid_method_name("toString").is_ok());
		assert!(is_valid_method_name("<weird>").is_err());
		assert!(is_valid_method_name("a.b").is_err());
	}
}
