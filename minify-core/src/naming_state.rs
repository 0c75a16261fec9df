//! Tracks, per class, which final names have already been handed out for which signature and
//! original method name, so that an override picks up its superclass's assignment instead of
//! being renamed independently.
//!
//! The key subtlety: two methods sharing a [`SignatureKey`] across a class hierarchy are only the
//! *same* override slot if they also share their original declared name. A subclass that declares
//! an unrelated method with the same signature (but a different original name) must still avoid
//! colliding with whatever name the override slot already claimed, but must not be forced to reuse
//! it. So bookkeeping here is keyed by the pair (original [`MethodName`], [`SignatureKey`]), not by
//! [`MethodRef`] (whose `holder` differs between an override and its ancestor declaration).
//!
//! Unlike [`crate::reservation::ReservationArena`], this tree has one node per *class* (not per
//! frontier) and genuinely walks its parent chain on every lookup: a subclass must see every name
//! its ancestors already assigned, all the way up to the class that introduced this naming scope.

use indexmap::IndexMap;
use jvm_model::method::MethodName;
use crate::name_source::NameSource;
use crate::reservation::ReservationId;
use crate::signature_key::SignatureKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamingId(usize);

/// Per-`SignatureKey` bookkeeping within one [`NamingId`] node.
#[derive(Debug, Default)]
pub struct InternalState {
	assigned: IndexMap<MethodName, String>,
	pub source: NameSource,
}

impl InternalState {
	pub fn record(&mut self, original_name: MethodName, final_name: String) {
		self.assigned.insert(original_name, final_name);
	}
}

struct NamingNode {
	parent: Option<NamingId>,
	reservation: ReservationId,
	states: IndexMap<SignatureKey, InternalState>,
}

#[derive(Default)]
pub struct NamingArena {
	nodes: Vec<NamingNode>,
}

impl NamingArena {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn create(&mut self, parent: Option<NamingId>, reservation: ReservationId) -> NamingId {
		let id = NamingId(self.nodes.len());
		self.nodes.push(NamingNode { parent, reservation, states: IndexMap::new() });
		id
	}

	pub fn reservation_of(&self, id: NamingId) -> ReservationId {
		self.nodes[id.0].reservation
	}

	/// The final name already assigned, anywhere along the parent chain, to `original_name` under
	/// `key`: i.e. the name this override slot has already committed to.
	pub fn find_assigned(&self, id: NamingId, key: &SignatureKey, original_name: &MethodName) -> Option<String> {
		let mut cur = Some(id);
		while let Some(c) = cur {
			let node = &self.nodes[c.0];
			if let Some(state) = node.states.get(key) {
				if let Some(name) = state.assigned.get(original_name) {
					return Some(name.clone());
				}
			}
			cur = node.parent;
		}
		None
	}

	/// Whether `final_name` is already claimed, under `key`, by some override slot *other than*
	/// `original_name`, anywhere along the parent chain.
	pub fn is_used_by_other(&self, id: NamingId, key: &SignatureKey, final_name: &str, original_name: &MethodName) -> bool {
		let mut cur = Some(id);
		while let Some(c) = cur {
			let node = &self.nodes[c.0];
			if let Some(state) = node.states.get(key) {
				if state.assigned.iter().any(|(name, assigned)| name != original_name && assigned == final_name) {
					return true;
				}
			}
			cur = node.parent;
		}
		false
	}

	pub fn record(&mut self, id: NamingId, key: SignatureKey, original_name: MethodName, final_name: String) {
		self.nodes[id.0].states.entry(key).or_default().record(original_name, final_name);
	}

	/// Runs `f` against this node's [`InternalState`] for `key` (creating it, with a fresh
	/// dictionary-seeded [`NameSource`], if this is the first method of that signature seen here).
	pub fn with_state<R>(&mut self, id: NamingId, key: SignatureKey, dictionary: &[String], f: impl FnOnce(&mut InternalState) -> R) -> R {
		let state = self.nodes[id.0]
			.states
			.entry(key)
			.or_insert_with(|| InternalState { assigned: IndexMap::new(), source: NameSource::new(dictionary.to_vec()) });
		f(state)
	}
}

#[cfg(test)]
mod testing {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn override_slot_is_shared_across_the_parent_chain() {
		let mut reservations = crate::reservation::ReservationArena::new();
		let res = reservations.create(None);
		let mut arena = NamingArena::new();
		let root = arena.create(None, res);
		let child = arena.create(Some(root), res);

		let key = SignatureKey::Params(vec![]);
		let greet = MethodName::from("greet");
		arena.record(root, key.clone(), greet.clone(), "a".to_owned());

		assert_eq!(arena.find_assigned(child, &key, &greet), Some("a".to_owned()));
	}

	#[test]
	fn unrelated_name_with_same_signature_must_not_reuse_the_slot() {
		let mut reservations = crate::reservation::ReservationArena::new();
		let res = reservations.create(None);
		let mut arena = NamingArena::new();
		let root = arena.create(None, res);

		let key = SignatureKey::Params(vec![]);
		arena.record(root, key.clone(), MethodName::from("greet"), "a".to_owned());

		assert!(arena.is_used_by_other(root, &key, "a", &MethodName::from("farewell")));
		assert!(!arena.is_used_by_other(root, &key, "a", &MethodName::from("greet")));
	}
}
