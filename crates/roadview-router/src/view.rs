//! View components and the viewport they mount into.

use std::fmt;
use std::sync::Arc;

/// An opaque, mountable UI unit instantiated by the router.
pub trait View {
	/// Component name, used for logging and outlet markup.
	fn name(&self) -> &'static str;

	/// Renders the component's markup.
	fn render(&self) -> String;

	/// Called after the view is mounted into a viewport.
	fn mounted(&mut self) {}

	/// Called before the view is removed from its viewport.
	fn unmounted(&mut self) {}
}

/// Produces a fresh view instance for a route.
pub type ViewFactory = Arc<dyn Fn() -> Box<dyn View> + Send + Sync>;

/// A page region that holds at most one mounted view.
#[derive(Default)]
pub struct Viewport {
	active: Option<Box<dyn View>>,
	mount_count: usize,
}

impl fmt::Debug for Viewport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Viewport")
			.field("active", &self.active_name())
			.field("mount_count", &self.mount_count)
			.finish()
	}
}

impl Viewport {
	/// Creates an empty viewport.
	pub fn new() -> Self {
		Self::default()
	}

	/// Unmounts the current view, if any, then mounts `view`.
	pub fn mount(&mut self, mut view: Box<dyn View>) {
		self.clear();
		view.mounted();
		self.mount_count += 1;
		self.active = Some(view);
	}

	/// Unmounts the current view, leaving the viewport blank.
	pub fn clear(&mut self) {
		if let Some(mut previous) = self.active.take() {
			previous.unmounted();
		}
	}

	/// Name of the mounted view.
	pub fn active_name(&self) -> Option<&'static str> {
		self.active.as_ref().map(|v| v.name())
	}

	/// Returns `true` if nothing is mounted.
	pub fn is_blank(&self) -> bool {
		self.active.is_none()
	}

	/// Total number of mounts performed on this viewport.
	pub fn mount_count(&self) -> usize {
		self.mount_count
	}

	/// Markup of the mounted view, or an empty string.
	pub fn render(&self) -> String {
		self.active
			.as_ref()
			.map(|v| v.render())
			.unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::cell::RefCell;
	use std::rc::Rc;

	struct Recording {
		name: &'static str,
		log: Rc<RefCell<Vec<String>>>,
	}

	impl View for Recording {
		fn name(&self) -> &'static str {
			self.name
		}

		fn render(&self) -> String {
			format!("<p>{}</p>", self.name)
		}

		fn mounted(&mut self) {
			self.log.borrow_mut().push(format!("mount {}", self.name));
		}

		fn unmounted(&mut self) {
			self.log.borrow_mut().push(format!("unmount {}", self.name));
		}
	}

	#[rstest]
	fn test_viewport_swaps_views_in_order() {
		let log = Rc::new(RefCell::new(Vec::new()));
		let mut viewport = Viewport::new();
		assert!(viewport.is_blank());
		assert_eq!(viewport.render(), "");

		viewport.mount(Box::new(Recording {
			name: "First",
			log: Rc::clone(&log),
		}));
		viewport.mount(Box::new(Recording {
			name: "Second",
			log: Rc::clone(&log),
		}));

		assert_eq!(viewport.active_name(), Some("Second"));
		assert_eq!(viewport.render(), "<p>Second</p>");
		assert_eq!(viewport.mount_count(), 2);
		assert_eq!(
			*log.borrow(),
			vec!["mount First", "unmount First", "mount Second"]
		);
	}

	#[rstest]
	fn test_viewport_clear() {
		let log = Rc::new(RefCell::new(Vec::new()));
		let mut viewport = Viewport::new();
		viewport.mount(Box::new(Recording {
			name: "Only",
			log: Rc::clone(&log),
		}));

		viewport.clear();
		viewport.clear();

		assert!(viewport.is_blank());
		assert_eq!(*log.borrow(), vec!["mount Only", "unmount Only"]);
	}
}
