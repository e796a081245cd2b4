//! Route definitions and the validated route table.

use crate::error::RouterError;
use crate::view::{View, ViewFactory};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A single `(path, name, view)` binding.
#[derive(Clone)]
pub struct Route {
	path: String,
	name: String,
	view: ViewFactory,
}

impl fmt::Debug for Route {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Route")
			.field("path", &self.path)
			.field("name", &self.name)
			.finish()
	}
}

impl Route {
	/// Creates a named route whose view is built by `view`.
	pub fn new<F, V>(name: impl Into<String>, path: impl Into<String>, view: F) -> Self
	where
		F: Fn() -> V + Send + Sync + 'static,
		V: View + 'static,
	{
		Self {
			path: path.into(),
			name: name.into(),
			view: Arc::new(move || Box::new(view()) as Box<dyn View>),
		}
	}

	/// Returns the route path.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Returns the route name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Instantiates the route's view.
	pub fn render(&self) -> Box<dyn View> {
		(self.view)()
	}
}

/// Outcome of resolving a path against the route table.
#[derive(Debug, Clone)]
pub enum Resolution<'a> {
	/// A route's path equals the requested path.
	Matched(&'a Route),
	/// No route matches; carries the requested path.
	Unmatched(String),
}

impl<'a> Resolution<'a> {
	/// Returns `true` for [`Resolution::Matched`].
	pub fn is_matched(&self) -> bool {
		matches!(self, Self::Matched(_))
	}

	/// The matched route, if any.
	pub fn route(&self) -> Option<&'a Route> {
		match self {
			Self::Matched(route) => Some(*route),
			Self::Unmatched(_) => None,
		}
	}

	/// Converts an unmatched resolution into [`RouterError::UnmatchedRoute`].
	pub fn into_result(self) -> Result<&'a Route, RouterError> {
		match self {
			Self::Matched(route) => Ok(route),
			Self::Unmatched(path) => Err(RouterError::UnmatchedRoute(path)),
		}
	}
}

/// Immutable, validated collection of routes.
///
/// Paths and names are unique; every path starts with `/` and carries no
/// query string or fragment.
#[derive(Clone, Default)]
pub struct RouteTable {
	routes: Vec<Route>,
	by_path: HashMap<String, usize>,
	by_name: HashMap<String, usize>,
}

impl fmt::Debug for RouteTable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.routes.iter()).finish()
	}
}

impl RouteTable {
	/// Builds a table, failing on the first invalid or duplicate route.
	pub fn new(routes: impl IntoIterator<Item = Route>) -> Result<Self, RouterError> {
		let mut table = Self::default();

		for route in routes {
			validate_path(route.path())?;
			if route.name().is_empty() {
				return Err(RouterError::InvalidRouteName(String::new()));
			}
			if table.by_path.contains_key(route.path()) {
				return Err(RouterError::DuplicatePath(route.path().to_string()));
			}
			if table.by_name.contains_key(route.name()) {
				return Err(RouterError::DuplicateName(route.name().to_string()));
			}

			let index = table.routes.len();
			table.by_path.insert(route.path().to_string(), index);
			table.by_name.insert(route.name().to_string(), index);
			table.routes.push(route);
		}

		Ok(table)
	}

	/// Route whose path equals `path`.
	pub fn get_by_path(&self, path: &str) -> Option<&Route> {
		self.by_path.get(path).map(|&i| &self.routes[i])
	}

	/// Route registered under `name`.
	pub fn get_by_name(&self, name: &str) -> Option<&Route> {
		self.by_name.get(name).map(|&i| &self.routes[i])
	}

	/// Routes in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = &Route> {
		self.routes.iter()
	}

	/// Number of routes.
	pub fn len(&self) -> usize {
		self.routes.len()
	}

	/// Returns `true` if the table is empty.
	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}
}

fn validate_path(path: &str) -> Result<(), RouterError> {
	if !path.starts_with('/') || path.contains(['?', '#']) {
		return Err(RouterError::InvalidPath(path.to_string()));
	}
	Ok(())
}
