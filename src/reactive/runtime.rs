//! Reactive runtime: dependency graph and observer tracking.
//!
//! The runtime records which observers (effects) read which signals. Reading
//! a signal inside an effect adds an edge; writing a signal walks its
//! subscriber edges and re-executes each effect immediately.
//!
//! The runtime lives in thread-local storage. WASM has a single thread, so
//! this is effectively one global runtime per page; on native targets each
//! thread (and therefore each test) gets its own.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Unique identifier for reactive nodes (signals and effects).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
	/// Creates a new unique `NodeId`.
	pub fn new() -> Self {
		static COUNTER: AtomicUsize = AtomicUsize::new(0);
		Self(COUNTER.fetch_add(1, Ordering::Relaxed))
	}
}

impl Default for NodeId {
	fn default() -> Self {
		Self::new()
	}
}

/// Edges for one node in the dependency graph.
#[derive(Debug, Default)]
pub(crate) struct DependencyNode {
	/// Observers that re-run when this node changes.
	pub(crate) subscribers: Vec<NodeId>,
	/// Signals this node read during its last run.
	pub(crate) dependencies: Vec<NodeId>,
}

/// Thread-local reactive runtime.
pub(crate) struct Runtime {
	/// Stack of currently executing observers; the top one collects
	/// dependencies.
	observer_stack: RefCell<Vec<NodeId>>,
	/// Dependency graph, keyed by node id.
	pub(crate) dependency_graph: RefCell<BTreeMap<NodeId, DependencyNode>>,
}

impl Runtime {
	fn new() -> Self {
		Self {
			observer_stack: RefCell::new(Vec::new()),
			dependency_graph: RefCell::new(BTreeMap::new()),
		}
	}

	/// Returns the currently executing observer, if any.
	pub(crate) fn current_observer(&self) -> Option<NodeId> {
		self.observer_stack.borrow().last().copied()
	}

	/// Pushes an observer; called when an effect starts executing.
	pub(crate) fn push_observer(&self, id: NodeId) {
		self.observer_stack.borrow_mut().push(id);
	}

	/// Pops an observer; called when an effect finishes executing.
	pub(crate) fn pop_observer(&self) -> Option<NodeId> {
		self.observer_stack.borrow_mut().pop()
	}

	/// Records an edge between the current observer and `signal_id`.
	///
	/// Invoked by `Signal::get`. A no-op outside of observer execution.
	pub(crate) fn track_dependency(&self, signal_id: NodeId) {
		let Some(observer_id) = self.current_observer() else {
			return;
		};
		let mut graph = self.dependency_graph.borrow_mut();

		let signal_node = graph.entry(signal_id).or_default();
		if !signal_node.subscribers.contains(&observer_id) {
			signal_node.subscribers.push(observer_id);
		}

		let observer_node = graph.entry(observer_id).or_default();
		if !observer_node.dependencies.contains(&signal_id) {
			observer_node.dependencies.push(signal_id);
		}
	}

	/// Re-executes every subscriber of `signal_id`.
	///
	/// The subscriber list is snapshotted before execution so effects may
	/// mutate the graph (re-tracking their dependencies) while running.
	pub(crate) fn notify_signal_change(&self, signal_id: NodeId) {
		let subscribers = {
			let graph = self.dependency_graph.borrow();
			match graph.get(&signal_id) {
				Some(node) => node.subscribers.clone(),
				None => return,
			}
		};

		for effect_id in subscribers {
			super::effect::execute_effect(effect_id);
		}
	}

	/// Removes all dependency edges of `node_id`.
	///
	/// Called before an effect re-runs, so stale subscriptions from the
	/// previous run do not linger.
	pub(crate) fn clear_dependencies(&self, node_id: NodeId) {
		let mut graph = self.dependency_graph.borrow_mut();

		if let Some(node) = graph.get(&node_id) {
			let dependencies = node.dependencies.clone();
			for dep_id in dependencies {
				if let Some(dep_node) = graph.get_mut(&dep_id) {
					dep_node.subscribers.retain(|&id| id != node_id);
				}
			}
		}

		if let Some(node) = graph.get_mut(&node_id) {
			node.dependencies.clear();
		}
	}

	/// Removes a node from the graph entirely; called on drop.
	pub(crate) fn remove_node(&self, node_id: NodeId) {
		self.clear_dependencies(node_id);
		let mut graph = self.dependency_graph.borrow_mut();
		for node in graph.values_mut() {
			node.subscribers.retain(|&id| id != node_id);
		}
		graph.remove(&node_id);
	}

	/// Number of subscribers registered for a node (test support).
	#[cfg(all(test, not(target_arch = "wasm32")))]
	pub(crate) fn subscriber_count(&self, node_id: NodeId) -> usize {
		self.dependency_graph
			.borrow()
			.get(&node_id)
			.map(|node| node.subscribers.len())
			.unwrap_or(0)
	}
}

thread_local! {
	static RUNTIME: Runtime = Runtime::new();
}

/// Runs `f` with the thread-local runtime.
pub(crate) fn with_runtime<F, R>(f: F) -> R
where
	F: FnOnce(&Runtime) -> R,
{
	RUNTIME.with(f)
}

/// Fallible runtime access for `Drop` implementations.
///
/// Returns `None` once the thread-local storage has been torn down.
pub(crate) fn try_with_runtime<F, R>(f: F) -> Option<R>
where
	F: FnOnce(&Runtime) -> R,
{
	RUNTIME.try_with(f).ok()
}
