//! `Signal<T>`: the observable state cell.
//!
//! A signal holds a value and records which effects read it. Writing the
//! value re-runs those effects synchronously. The router owns exactly one
//! signal (the current path); the rendering layer only reads it.
//!
//! ## Example
//!
//! ```
//! use hashroute::reactive::Signal;
//!
//! let path = Signal::new(String::from("/"));
//! assert_eq!(path.get(), "/");
//!
//! path.set(String::from("/about"));
//! assert_eq!(path.get(), "/about");
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::runtime::{NodeId, try_with_runtime, with_runtime};

/// A single-writer, multi-reader reactive value.
///
/// Cloning a `Signal` is cheap and yields a handle to the same underlying
/// value (shared via `Rc<RefCell<T>>`). Reading through [`Signal::get`]
/// inside an [`Effect`](super::Effect) subscribes that effect to changes;
/// writing through [`Signal::set`] or [`Signal::update`] notifies all
/// subscribers immediately.
#[derive(Clone)]
pub struct Signal<T: 'static> {
	/// Identity of this signal in the dependency graph.
	id: NodeId,
	/// The value, shared across clones.
	value: Rc<RefCell<T>>,
}

impl<T: 'static> Signal<T> {
	/// Creates a new signal with the given initial value.
	pub fn new(value: T) -> Self {
		Self {
			id: NodeId::new(),
			value: Rc::new(RefCell::new(value)),
		}
	}

	/// Returns the current value, registering a dependency when called from
	/// inside an effect.
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		with_runtime(|rt| rt.track_dependency(self.id));
		self.get_untracked()
	}

	/// Returns the current value without registering a dependency.
	pub fn get_untracked(&self) -> T
	where
		T: Clone,
	{
		self.value.borrow().clone()
	}

	/// Replaces the value and re-runs all subscribed effects.
	pub fn set(&self, value: T) {
		*self.value.borrow_mut() = value;
		with_runtime(|rt| rt.notify_signal_change(self.id));
	}

	/// Mutates the value in place and re-runs all subscribed effects.
	///
	/// Subscribers are notified once, after `f` returns.
	pub fn update<F>(&self, f: F)
	where
		F: FnOnce(&mut T),
	{
		f(&mut self.value.borrow_mut());
		with_runtime(|rt| rt.notify_signal_change(self.id));
	}

	/// Returns this signal's node id.
	pub fn id(&self) -> NodeId {
		self.id
	}
}

impl<T: 'static> Drop for Signal<T> {
	fn drop(&mut self) {
		// Last clone standing removes the node from the graph.
		if Rc::strong_count(&self.value) == 1 {
			let _ = try_with_runtime(|rt| rt.remove_node(self.id));
		}
	}
}

impl<T: fmt::Debug + Clone + 'static> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("id", &self.id)
			.field("value", &self.get_untracked())
			.finish()
	}
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use super::*;
	use serial_test::serial;

	#[test]
	#[serial]
	fn new_signal_holds_initial_value() {
		let signal = Signal::new(42);
		assert_eq!(signal.get_untracked(), 42);
	}

	#[test]
	#[serial]
	fn set_replaces_value() {
		let signal = Signal::new(0);
		signal.set(100);
		assert_eq!(signal.get_untracked(), 100);
	}

	#[test]
	#[serial]
	fn update_mutates_in_place() {
		let signal = Signal::new(0);

		signal.update(|n| *n += 1);
		assert_eq!(signal.get_untracked(), 1);

		signal.update(|n| *n *= 10);
		assert_eq!(signal.get_untracked(), 10);
	}

	#[test]
	#[serial]
	fn clones_share_the_value() {
		let signal1 = Signal::new(String::from("/"));
		let signal2 = signal1.clone();

		signal1.set(String::from("/about"));
		assert_eq!(signal2.get_untracked(), "/about");
	}

	#[test]
	#[serial]
	fn get_outside_effect_does_not_subscribe() {
		let signal = Signal::new(7);
		assert_eq!(signal.get(), 7);

		with_runtime(|rt| {
			assert_eq!(rt.subscriber_count(signal.id()), 0);
		});
	}

	#[test]
	#[serial]
	fn get_inside_observer_subscribes() {
		let signal = Signal::new(7);
		let observer_id = NodeId::new();

		with_runtime(|rt| {
			rt.push_observer(observer_id);
			let _ = signal.get();
			rt.pop_observer();

			assert_eq!(rt.subscriber_count(signal.id()), 1);
		});
	}
}
