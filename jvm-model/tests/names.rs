use jvm_model::{is_valid_class_name, is_valid_method_name};
use jvm_model::class::ClassName;

#[test]
fn class_name_roundtrips_through_newtype() {
	let name = ClassName::from("com/example/Outer$Inner");
	assert_eq!(name.as_str(), "com/example/Outer$Inner");
	assert_eq!(name.simple_name(), "Outer$Inner");
	assert_eq!(name.package_prefix(), "com/example/");
	assert!(is_valid_class_name(name.as_str()).is_ok());
}

#[test]
fn rejects_malformed_class_names() {
	assert!(is_valid_class_name("com//Foo").is_err());
	assert!(is_valid_class_name("com.example/Foo").is_err());
}

#[test]
fn special_method_names_are_valid_but_not_renameable() {
	use jvm_model::method::MethodName;

	assert!(is_valid_method_name("<init>").is_ok());
	assert!(!MethodName::from("<init>").is_renameable());
	assert!(!MethodName::from("<clinit>").is_renameable());
	assert!(MethodName::from("doStuff").is_renameable());
}
