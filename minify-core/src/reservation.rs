//! Tracks, per naming scope and per [`SignatureKey`], which names are off-limits.
//!
//! A [`ReservationArena`] node exists once per *frontier* (the highest class/interface ancestor
//! at which library/classpath constraints coalesce, see `frontier` in method_minifier.rs) or once
//! per interface. Reservations are pushed into a node eagerly, at the point a constraint is
//! discovered (a kept name, or a name propagated across the interface lattice), rather than
//! pulled lazily by walking a parent chain at lookup time: the two are observationally
//! equivalent here since a class's own frontier reservation already *is* the coalesced node for
//! its whole non-program-bordering lineage, so there is no useful ancestor left to walk past it.
//! `parent` is kept on the node for the one case that does need it: an interface's own node
//! inheriting from nothing currently, but available should the lattice ever need a real ancestor
//! relationship instead of eager propagation.

use indexmap::IndexMap;
use indexmap::IndexSet;
use crate::error::MinifyError;
use crate::signature_key::SignatureKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReservationId(usize);

#[derive(Debug, Default)]
struct ReservationNode {
	parent: Option<ReservationId>,
	reserved: IndexMap<SignatureKey, IndexSet<String>>,
	/// Which original member first claimed each reserved name, keyed like `reserved`. Only
	/// populated by [`ReservationArena::reserve_checked`]; plain `reserve` calls (a freshly chosen,
	/// already-available candidate) can't collide by construction and don't need an owner.
	owners: IndexMap<SignatureKey, IndexMap<String, String>>,
}

#[derive(Debug, Default)]
pub struct ReservationArena {
	nodes: Vec<ReservationNode>,
}

impl ReservationArena {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn create(&mut self, parent: Option<ReservationId>) -> ReservationId {
		let id = ReservationId(self.nodes.len());
		self.nodes.push(ReservationNode { parent, reserved: IndexMap::new(), owners: IndexMap::new() });
		id
	}

	pub fn reserve(&mut self, id: ReservationId, key: SignatureKey, name: String) {
		self.nodes[id.0].reserved.entry(key).or_default().insert(name);
	}

	/// Like [`Self::reserve`], but for a name a
	/// [`NamingStrategy`](crate::strategy::NamingStrategy) insists on rather than one this arena
	/// picked itself: if a different `owner` already claimed `name` at this exact node and key,
	/// that's an [`InvariantViolation`](MinifyError::InvariantViolation), not a silent overwrite.
	/// The same owner reserving the same name again (an override, or a name propagated across the
	/// interface lattice more than once) is not a conflict.
	pub fn reserve_checked(&mut self, id: ReservationId, key: SignatureKey, name: String, owner: &str) -> Result<(), MinifyError> {
		let node = &mut self.nodes[id.0];
		let owners = node.owners.entry(key.clone()).or_default();
		match owners.get(&name) {
			Some(existing) if existing != owner => {
				return Err(MinifyError::InvariantViolation { member: name, existing: existing.clone(), requested: owner.to_owned() });
			}
			Some(_) => {}
			None => {
				owners.insert(name.clone(), owner.to_owned());
			}
		}
		node.reserved.entry(key).or_default().insert(name);
		Ok(())
	}

	pub fn is_reserved(&self, id: ReservationId, key: &SignatureKey, name: &str) -> bool {
		let mut cur = Some(id);
		while let Some(c) = cur {
			let node = &self.nodes[c.0];
			if let Some(names) = node.reserved.get(key) {
				if names.contains(name) {
					return true;
				}
			}
			cur = node.parent;
		}
		false
	}

	/// All names reserved for `key` at `id` or any ancestor.
	pub fn reserved_names(&self, id: ReservationId, key: &SignatureKey) -> IndexSet<String> {
		let mut out = IndexSet::new();
		let mut cur = Some(id);
		while let Some(c) = cur {
			let node = &self.nodes[c.0];
			if let Some(names) = node.reserved.get(key) {
				out.extend(names.iter().cloned());
			}
			cur = node.parent;
		}
		out
	}
}

#[cfg(test)]
mod testing {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn reservations_are_visible_at_the_node_they_were_made_on() {
		let mut arena = ReservationArena::new();
		let id = arena.create(None);
		let key = SignatureKey::Params(vec![]);
		arena.reserve(id, key.clone(), "a".to_owned());
		assert!(arena.is_reserved(id, &key, "a"));
		assert!(!arena.is_reserved(id, &key, "b"));
	}

	#[test]
	fn reservations_on_a_node_are_not_visible_on_an_unrelated_sibling() {
		let mut arena = ReservationArena::new();
		let a = arena.create(None);
		let b = arena.create(None);
		let key = SignatureKey::Params(vec![]);
		arena.reserve(a, key.clone(), "a".to_owned());
		assert!(!arena.is_reserved(b, &key, "a"));
	}
}
