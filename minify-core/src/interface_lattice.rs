//! The structure method_minifier's interface phases need: which interfaces are connected to which
//! — through `extends`, or bridged by a class that implements both of them — and which classes
//! implement which interfaces (directly or transitively, through a superclass or a sub-interface).

use indexmap::{IndexMap, IndexSet};
use petgraph::graphmap::UnGraphMap;
use jvm_model::class::{ClassName, TypeKind};
use jvm_model::program::ProgramModel;

pub struct InterfaceLattice {
	/// Undirected: an edge between two program interfaces related by `extends`, or between two
	/// otherwise-unrelated interfaces some program class implements both of (see
	/// [`bridge_shared_implementor`]).
	edges: UnGraphMap<ClassName, ()>,
	/// Every program interface transitively implemented by a program class (through its
	/// superclass chain and through sub-interface `extends` edges).
	implements_all: IndexMap<ClassName, IndexSet<ClassName>>,
}

impl InterfaceLattice {
	pub fn build(program: &dyn ProgramModel) -> Self {
		let mut edges = UnGraphMap::new();
		for class in program.classes() {
			if program.kind_of(class) != TypeKind::Program {
				continue;
			}
			let Some(info) = program.type_info(class) else { continue };
			if !info.is_interface() {
				continue;
			}
			edges.add_node(class.clone());
			if let Some(super_class) = &info.super_class {
				if program.kind_of(super_class) == TypeKind::Program {
					edges.add_edge(class.clone(), super_class.clone(), ());
				}
			}
			for iface in &info.interfaces {
				if program.kind_of(iface) == TypeKind::Program {
					edges.add_edge(class.clone(), iface.clone(), ());
				}
			}
		}

		let mut implements_all = IndexMap::new();
		for class in program.classes() {
			if program.kind_of(class) != TypeKind::Program {
				continue;
			}
			let Some(info) = program.type_info(class) else { continue };
			if info.is_interface() {
				continue;
			}
			let interfaces = transitive_interfaces(program, class);
			bridge_shared_implementor(&mut edges, &interfaces);
			implements_all.insert(class.clone(), interfaces);
		}

		InterfaceLattice { edges, implements_all }
	}

	/// All program interfaces reachable from `start` through `extends` edges or a shared
	/// implementor (in either direction), including `start` itself.
	pub fn connected_component(&self, start: &ClassName) -> IndexSet<ClassName> {
		let mut seen = IndexSet::new();
		let mut stack = vec![start.clone()];
		while let Some(current) = stack.pop() {
			if !seen.insert(current.clone()) {
				continue;
			}
			if self.edges.contains_node(current.clone()) {
				let mut neighbors: Vec<_> = self.edges.neighbors(current.clone()).collect();
				neighbors.sort();
				stack.extend(neighbors);
			}
		}
		seen
	}

	/// Every program class that transitively implements at least one interface in `interfaces`.
	pub fn implementors_of(&self, interfaces: &IndexSet<ClassName>) -> IndexSet<ClassName> {
		self.implements_all
			.iter()
			.filter(|(_, impls)| impls.iter().any(|i| interfaces.contains(i)))
			.map(|(class, _)| class.clone())
			.collect()
	}
}

/// Two interfaces with no `extends` relationship to each other still have to land in the same
/// connected component if some class implements both of them (directly or transitively) —
/// otherwise phase 3 of the method minifier would process them as independent reachability groups
/// and clobber whichever one it assigned a name to second. Chaining the group pairwise is enough:
/// `connected_component` only needs *some* path between every pair, not a direct edge between all
/// of them.
fn bridge_shared_implementor(edges: &mut UnGraphMap<ClassName, ()>, interfaces: &IndexSet<ClassName>) {
	let mut sorted: Vec<_> = interfaces.iter().cloned().collect();
	sorted.sort();
	for pair in sorted.windows(2) {
		edges.add_edge(pair[0].clone(), pair[1].clone(), ());
	}
}

fn transitive_interfaces(program: &dyn ProgramModel, class: &ClassName) -> IndexSet<ClassName> {
	let mut result = IndexSet::new();
	let mut stack = vec![class.clone()];
	let mut seen_classes = IndexSet::new();
	while let Some(current) = stack.pop() {
		if !seen_classes.insert(current.clone()) {
			continue;
		}
		let Some(info) = program.type_info(&current) else { continue };
		for iface in &info.interfaces {
			if program.kind_of(iface) == TypeKind::Program {
				collect_super_interfaces(program, iface, &mut result);
			}
		}
		if let Some(super_class) = &info.super_class {
			stack.push(super_class.clone());
		}
	}
	result
}

fn collect_super_interfaces(program: &dyn ProgramModel, iface: &ClassName, out: &mut IndexSet<ClassName>) {
	if !out.insert(iface.clone()) {
		return;
	}
	let Some(info) = program.type_info(iface) else { return };
	for super_iface in &info.interfaces {
		if program.kind_of(super_iface) == TypeKind::Program {
			collect_super_interfaces(program, super_iface, out);
		}
	}
	if let Some(super_class) = &info.super_class {
		if program.kind_of(super_class) == TypeKind::Program {
			collect_super_interfaces(program, super_class, out);
		}
	}
}
