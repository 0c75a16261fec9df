//! The key by which methods collide: two methods with the same [`SignatureKey`] within the same
//! naming scope must receive different final names (unless one is a deliberate override/interface
//! implementation of the other, in which case they must receive the *same* name).

use jvm_model::descriptor::{Proto, Type};
use crate::options::{MinifierOptions, SignatureKeyMode};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SignatureKey {
	Params(Vec<Type>),
	Full(Proto),
}

pub fn signature_key(options: &MinifierOptions, proto: &Proto) -> SignatureKey {
	match options.signature_key_mode {
		SignatureKeyMode::ParamsOnly => SignatureKey::Params(proto.params.clone()),
		SignatureKeyMode::FullProto => SignatureKey::Full(proto.clone()),
	}
}

#[cfg(test)]
mod testing {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn params_only_ignores_return_type() {
		let options = MinifierOptions { signature_key_mode: SignatureKeyMode::ParamsOnly, ..Default::default() };
		let a = Proto::new(vec![Type::I], Some(Type::I));
		let b = Proto::new(vec![Type::I], Some(Type::object("com/example/Foo")));
		assert_eq!(signature_key(&options, &a), signature_key(&options, &b));
	}

	#[test]
	fn full_proto_distinguishes_return_type() {
		let options = MinifierOptions { signature_key_mode: SignatureKeyMode::FullProto, ..Default::default() };
		let a = Proto::new(vec![Type::I], Some(Type::I));
		let b = Proto::new(vec![Type::I], Some(Type::object("com/example/Foo")));
		assert_ne!(signature_key(&options, &a), signature_key(&options, &b));
	}
}
