//! `Effect`: a side effect that re-runs when its dependencies change.
//!
//! Any signal read through `get()` while the effect body executes becomes a
//! dependency; the next write to that signal re-runs the body synchronously.
//! Dependencies are re-collected on every run, so a body that reads different
//! signals on different runs stays correctly subscribed.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use hashroute::reactive::{Effect, Signal};
//!
//! let path = Signal::new(String::from("/"));
//! let seen = Rc::new(RefCell::new(Vec::new()));
//!
//! let seen_by_effect = seen.clone();
//! let path_in_effect = path.clone();
//! let _effect = Effect::new(move || {
//!     seen_by_effect.borrow_mut().push(path_in_effect.get());
//! });
//!
//! path.set(String::from("/about"));
//! assert_eq!(*seen.borrow(), vec!["/", "/about"]);
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::runtime::{NodeId, try_with_runtime, with_runtime};

/// Type alias for stored effect bodies.
type EffectFn = Rc<RefCell<Box<dyn FnMut() + 'static>>>;

// Effect bodies live outside the Effect handle so the runtime can re-run
// them by id. Each body sits behind its own RefCell: executing one effect
// only borrows that effect's cell, so an effect may trigger another without
// conflicting borrows.
thread_local! {
	static EFFECT_FUNCTIONS: RefCell<BTreeMap<NodeId, EffectFn>> = const { RefCell::new(BTreeMap::new()) };
}

/// Handle to a registered effect.
///
/// The effect body runs once on construction and again after every change to
/// a signal it read. Dropping the handle (or calling [`Effect::dispose`])
/// unsubscribes it.
pub struct Effect {
	/// Identity of this effect in the dependency graph.
	id: NodeId,
	/// Set once disposed; the stored body checks it before running.
	disposed: Rc<RefCell<bool>>,
}

impl Effect {
	/// Registers `f` as an effect and runs it immediately.
	pub fn new<F>(mut f: F) -> Self
	where
		F: FnMut() + 'static,
	{
		let id = NodeId::new();
		let disposed = Rc::new(RefCell::new(false));

		let disposed_in_body = disposed.clone();
		EFFECT_FUNCTIONS.with(|storage| {
			storage.borrow_mut().insert(
				id,
				Rc::new(RefCell::new(Box::new(move || {
					if !*disposed_in_body.borrow() {
						f();
					}
				}) as Box<dyn FnMut()>)),
			);
		});

		execute_effect(id);

		Self { id, disposed }
	}

	/// Returns this effect's node id.
	pub fn id(&self) -> NodeId {
		self.id
	}

	/// Stops the effect: it will not run again and its graph edges are
	/// removed.
	pub fn dispose(&self) {
		*self.disposed.borrow_mut() = true;

		let _ = try_with_runtime(|rt| rt.remove_node(self.id));
		let _ = EFFECT_FUNCTIONS.try_with(|storage| {
			storage.borrow_mut().remove(&self.id);
		});
	}
}

impl Drop for Effect {
	fn drop(&mut self) {
		self.dispose();
	}
}

impl std::fmt::Debug for Effect {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Effect")
			.field("id", &self.id)
			.field("disposed", &*self.disposed.borrow())
			.finish()
	}
}

/// Runs the effect body registered under `effect_id`.
///
/// Old dependencies are cleared first, then re-collected while the body
/// executes. An effect that is already running is not re-entered; a body
/// that writes one of its own dependencies would otherwise recurse forever.
pub(crate) fn execute_effect(effect_id: NodeId) {
	let Some(func) = EFFECT_FUNCTIONS.with(|storage| storage.borrow().get(&effect_id).cloned())
	else {
		return;
	};

	let Ok(mut body) = func.try_borrow_mut() else {
		return;
	};

	with_runtime(|rt| {
		rt.clear_dependencies(effect_id);
		rt.push_observer(effect_id);
	});

	(*body)();

	with_runtime(|rt| {
		rt.pop_observer();
	});
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use super::*;
	use crate::reactive::Signal;
	use serial_test::serial;

	#[test]
	#[serial]
	fn effect_runs_immediately() {
		let run_count = Rc::new(RefCell::new(0));
		let counter = run_count.clone();

		let _effect = Effect::new(move || {
			*counter.borrow_mut() += 1;
		});

		assert_eq!(*run_count.borrow(), 1);
	}

	#[test]
	#[serial]
	fn effect_reruns_on_signal_change() {
		let signal = Signal::new(0);
		let values = Rc::new(RefCell::new(Vec::new()));

		let values_in_effect = values.clone();
		let signal_in_effect = signal.clone();
		let _effect = Effect::new(move || {
			values_in_effect.borrow_mut().push(signal_in_effect.get());
		});

		signal.set(10);
		signal.set(20);

		assert_eq!(*values.borrow(), vec![0, 10, 20]);
	}

	#[test]
	#[serial]
	fn effect_tracks_multiple_signals() {
		let left = Signal::new(1);
		let right = Signal::new(2);
		let sum = Rc::new(RefCell::new(0));

		let sum_in_effect = sum.clone();
		let left_in_effect = left.clone();
		let right_in_effect = right.clone();
		let _effect = Effect::new(move || {
			*sum_in_effect.borrow_mut() = left_in_effect.get() + right_in_effect.get();
		});

		assert_eq!(*sum.borrow(), 3);

		left.set(10);
		assert_eq!(*sum.borrow(), 12);

		right.set(20);
		assert_eq!(*sum.borrow(), 30);
	}

	#[test]
	#[serial]
	fn disposed_effect_stops_rerunning() {
		let signal = Signal::new(0);
		let run_count = Rc::new(RefCell::new(0));

		let counter = run_count.clone();
		let signal_in_effect = signal.clone();
		let effect = Effect::new(move || {
			let _ = signal_in_effect.get();
			*counter.borrow_mut() += 1;
		});

		assert_eq!(*run_count.borrow(), 1);

		effect.dispose();
		signal.set(10);

		assert_eq!(*run_count.borrow(), 1);
	}

	#[test]
	#[serial]
	fn dropped_effect_stops_rerunning() {
		let signal = Signal::new(0);
		let run_count = Rc::new(RefCell::new(0));

		{
			let counter = run_count.clone();
			let signal_in_effect = signal.clone();
			let _effect = Effect::new(move || {
				let _ = signal_in_effect.get();
				*counter.borrow_mut() += 1;
			});

			assert_eq!(*run_count.borrow(), 1);
		}

		signal.set(10);
		assert_eq!(*run_count.borrow(), 1);
	}

	#[test]
	#[serial]
	fn self_writing_effect_does_not_recurse() {
		let signal = Signal::new(0);
		let run_count = Rc::new(RefCell::new(0));

		let counter = run_count.clone();
		let signal_in_effect = signal.clone();
		let _effect = Effect::new(move || {
			let current = signal_in_effect.get();
			*counter.borrow_mut() += 1;
			if current == 0 {
				signal_in_effect.set(1);
			}
		});

		// Initial run writes the signal; the re-entrant notification is
		// skipped, the outer run completes, and a later write still works.
		assert_eq!(*run_count.borrow(), 1);

		signal.set(2);
		assert_eq!(*run_count.borrow(), 2);
	}
}
