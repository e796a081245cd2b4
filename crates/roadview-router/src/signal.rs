//! Signal - single-slot reactive cell.
//!
//! `Signal<T>` holds the router's current route and notifies subscribers
//! whenever it is replaced. Clones share the same value and subscriber list.
//!
//! ## Example
//!
//! ```ignore
//! use roadview_router::Signal;
//!
//! let count = Signal::new(0);
//! let id = count.subscribe(|n| println!("now {n}"));
//!
//! count.set(42);
//! assert_eq!(count.get(), 42);
//!
//! count.unsubscribe(id);
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type Listener<T> = Rc<dyn Fn(&T)>;

/// Handle returned by [`Signal::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A reactive value that notifies subscribers on change.
///
/// The value is shared via `Rc<RefCell<T>>`, so a `Signal` is `!Send` and
/// lives on the UI thread.
pub struct Signal<T: 'static> {
	value: Rc<RefCell<T>>,
	listeners: Rc<RefCell<Vec<(SubscriptionId, Listener<T>)>>>,
	next_id: Rc<Cell<u64>>,
}

impl<T: 'static> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			value: Rc::clone(&self.value),
			listeners: Rc::clone(&self.listeners),
			next_id: Rc::clone(&self.next_id),
		}
	}
}

impl<T: 'static> Signal<T> {
	/// Creates a new signal with the given initial value.
	pub fn new(value: T) -> Self {
		Self {
			value: Rc::new(RefCell::new(value)),
			listeners: Rc::new(RefCell::new(Vec::new())),
			next_id: Rc::new(Cell::new(0)),
		}
	}

	/// Returns a clone of the current value.
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		self.value.borrow().clone()
	}

	/// Reads the current value without cloning it.
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.value.borrow())
	}

	/// Replaces the value and notifies every subscriber.
	pub fn set(&self, value: T)
	where
		T: Clone,
	{
		*self.value.borrow_mut() = value;
		self.notify();
	}

	/// Registers a listener called after every change.
	pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
	where
		F: Fn(&T) + 'static,
	{
		let id = SubscriptionId(self.next_id.get());
		self.next_id.set(id.0 + 1);
		self.listeners.borrow_mut().push((id, Rc::new(listener)));
		id
	}

	/// Removes a listener. Returns `false` if it was not registered.
	pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
		let mut listeners = self.listeners.borrow_mut();
		let before = listeners.len();
		listeners.retain(|(existing, _)| *existing != id);
		listeners.len() != before
	}

	/// Returns the number of registered listeners.
	pub fn subscriber_count(&self) -> usize {
		self.listeners.borrow().len()
	}

	fn notify(&self)
	where
		T: Clone,
	{
		// Listeners receive a snapshot and may write back to the signal.
		let listeners: Vec<Listener<T>> = self
			.listeners
			.borrow()
			.iter()
			.map(|(_, l)| Rc::clone(l))
			.collect();
		let value = self.get();
		for listener in listeners {
			listener(&value);
		}
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("value", &*self.value.borrow())
			.field("subscribers", &self.listeners.borrow().len())
			.finish()
	}
}
