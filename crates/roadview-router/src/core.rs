//! Core Router Implementation.
//!
//! This module provides the main Router struct and navigation logic.

use crate::error::RouterError;
use crate::history::{History, HistoryMode, HistoryState, NavigationType};
use crate::location::{Location, RouteLocation};
use crate::route::{Resolution, Route, RouteTable};
use crate::signal::{Signal, SubscriptionId};
use crate::view::View;
use std::cell::RefCell;
use std::fmt;

/// What the router does when a location matches no route.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UnmatchedPolicy {
	/// Accept the location and render nothing into the viewport.
	#[default]
	Blank,
	/// Refuse the navigation with [`RouterError::UnmatchedRoute`].
	Reject,
	/// Navigate to the named route instead.
	Redirect(String),
}

/// Where a navigation should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
	/// A router location such as `/panorama?image=2`.
	Path(String),
	/// A route name such as `panorama`.
	Name(String),
}

impl From<&str> for NavigationTarget {
	/// Strings starting with `/` are paths, everything else is a route name.
	fn from(target: &str) -> Self {
		if target.starts_with('/') {
			Self::Path(target.to_string())
		} else {
			Self::Name(target.to_string())
		}
	}
}

impl From<String> for NavigationTarget {
	fn from(target: String) -> Self {
		Self::from(target.as_str())
	}
}

impl From<&String> for NavigationTarget {
	fn from(target: &String) -> Self {
		Self::from(target.as_str())
	}
}

impl fmt::Display for NavigationTarget {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Path(path) => f.write_str(path),
			Self::Name(name) => write!(f, "route '{}'", name),
		}
	}
}

/// The main client-side router.
///
/// Owns the route table, the session history and the current route. The
/// current route lives in a single [`Signal`], so a subscriber never sees a
/// location that disagrees with the route name resolved for it.
pub struct Router {
	routes: RouteTable,
	history: RefCell<Box<dyn History>>,
	current: Signal<RouteLocation>,
	unmatched: UnmatchedPolicy,
}

impl fmt::Debug for Router {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Router")
			.field("routes", &self.routes)
			.field("current", &self.current.get())
			.field("unmatched", &self.unmatched)
			.finish()
	}
}

impl Router {
	/// Creates a router positioned at the history's current location.
	///
	/// The starting entry is always accepted, even under
	/// [`UnmatchedPolicy::Reject`], since the browser already displays it.
	/// Under [`UnmatchedPolicy::Redirect`] it is replaced by the redirect
	/// target.
	pub fn new<H>(
		routes: RouteTable,
		history: H,
		unmatched: UnmatchedPolicy,
	) -> Result<Self, RouterError>
	where
		H: History + 'static,
	{
		if let UnmatchedPolicy::Redirect(name) = &unmatched {
			if routes.get_by_name(name).is_none() {
				return Err(RouterError::InvalidRouteName(name.clone()));
			}
		}

		let start = history.location();
		let location = Location::parse(&start)?;
		let initial = RouteLocation::new(&location, None);

		let router = Self {
			routes,
			history: RefCell::new(Box::new(history)),
			current: Signal::new(initial),
			unmatched,
		};
		// The starting entry behaves like a popped one: it is already on screen.
		router.settle(location, NavigationType::Pop)?;

		tracing::debug!(
			path = %router.current.with(|c| c.full_path.clone()),
			"router started"
		);
		Ok(router)
	}

	/// Resolves a location against the route table.
	///
	/// Only the path component takes part in matching; the query string and
	/// fragment are ignored. Unparseable input resolves as unmatched.
	pub fn resolve(&self, path: &str) -> Resolution<'_> {
		let resolution = match Location::parse(path) {
			Ok(location) => match self.routes.get_by_path(location.path()) {
				Some(route) => Resolution::Matched(route),
				None => Resolution::Unmatched(location.path().to_string()),
			},
			Err(_) => Resolution::Unmatched(path.to_string()),
		};
		tracing::debug!(path, matched = resolution.is_matched(), "resolved");
		resolution
	}

	/// Navigates to a target, adding a history entry.
	pub fn navigate(
		&self,
		target: impl Into<NavigationTarget>,
	) -> Result<RouteLocation, RouterError> {
		self.transition(target.into(), NavigationType::Push)
	}

	/// Navigates to a target, replacing the current history entry.
	pub fn replace(
		&self,
		target: impl Into<NavigationTarget>,
	) -> Result<RouteLocation, RouterError> {
		self.transition(target.into(), NavigationType::Replace)
	}

	/// Goes one entry back. Returns `false` at the start of history.
	pub fn back(&self) -> bool {
		self.go(-1)
	}

	/// Goes one entry forward. Returns `false` at the end of history.
	pub fn forward(&self) -> bool {
		self.go(1)
	}

	/// Moves `delta` entries through history.
	pub fn go(&self, delta: isize) -> bool {
		let popped = self.history.borrow_mut().go(delta);
		match popped {
			Some(location) => {
				if let Some(parsed) = parse_popped(&location) {
					self.settle_popped(parsed);
				}
				true
			}
			None => false,
		}
	}

	/// Synchronizes the router with a location reached by history
	/// traversal, e.g. a browser `popstate` event.
	///
	/// If the history backend is not already on `location`, its current entry
	/// is rewritten to it first, so the backend URL and the current route stay
	/// in step. A popped location cannot be refused, so under
	/// [`UnmatchedPolicy::Reject`] it is accepted as unmatched.
	pub fn handle_pop(&self, location: &str) {
		let Some(parsed) = parse_popped(location) else {
			return;
		};

		let full_path = parsed.full_path();
		{
			let mut history = self.history.borrow_mut();
			if history.location() != full_path {
				tracing::debug!(
					from = %history.location(),
					to = %full_path,
					"resyncing history entry"
				);
				let state = HistoryState::new(full_path.clone()).with_position(history.position());
				if let Err(err) = history.replace(&full_path, state) {
					tracing::warn!(location, error = %err, "history resync failed");
					return;
				}
			}
		}

		self.settle_popped(parsed);
	}

	fn settle_popped(&self, location: Location) {
		let path = location.full_path();
		if let Err(err) = self.settle(location, NavigationType::Pop) {
			tracing::warn!(location = %path, error = %err, "history traversal failed");
		}
	}

	/// Returns the active route location.
	pub fn current_route(&self) -> RouteLocation {
		self.current.get()
	}

	/// Returns the signal holding the active route location.
	pub fn current(&self) -> &Signal<RouteLocation> {
		&self.current
	}

	/// Registers a listener called after every route change.
	pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
	where
		F: Fn(&RouteLocation) + 'static,
	{
		self.current.subscribe(listener)
	}

	/// Removes a route change listener.
	pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
		self.current.unsubscribe(id)
	}

	/// The route matched by the current location.
	pub fn current_match(&self) -> Option<&Route> {
		self.current
			.with(|c| c.name.clone())
			.and_then(|name| self.routes.get_by_name(&name))
	}

	/// Instantiates the view of the current route. `None` when unmatched.
	pub fn render_current(&self) -> Option<Box<dyn View>> {
		self.current_match().map(Route::render)
	}

	/// Browser URL for a target, including the base path.
	pub fn href(&self, target: impl Into<NavigationTarget>) -> Result<String, RouterError> {
		let location = self.target_location(&target.into())?;
		Ok(self.history.borrow().create_href(&location.full_path()))
	}

	/// Browser URL of the current history entry.
	pub fn current_url(&self) -> String {
		self.history.borrow().url()
	}

	/// Registered routes.
	pub fn routes(&self) -> &RouteTable {
		&self.routes
	}

	/// Number of registered routes.
	pub fn route_count(&self) -> usize {
		self.routes.len()
	}

	/// Checks if a route name exists.
	pub fn has_route(&self, name: &str) -> bool {
		self.routes.get_by_name(name).is_some()
	}

	/// Normalized base path.
	pub fn base(&self) -> String {
		self.history.borrow().base().to_string()
	}

	/// History URL encoding.
	pub fn mode(&self) -> HistoryMode {
		self.history.borrow().mode()
	}

	/// Policy applied to unmatched locations.
	pub fn unmatched_policy(&self) -> &UnmatchedPolicy {
		&self.unmatched
	}

	/// Number of entries in the session history.
	pub fn history_len(&self) -> usize {
		self.history.borrow().len()
	}

	fn target_location(&self, target: &NavigationTarget) -> Result<Location, RouterError> {
		match target {
			NavigationTarget::Path(path) => Location::parse(path),
			NavigationTarget::Name(name) => {
				let route = self
					.routes
					.get_by_name(name)
					.ok_or_else(|| RouterError::InvalidRouteName(name.clone()))?;
				Location::parse(route.path())
			}
		}
	}

	fn transition(
		&self,
		target: NavigationTarget,
		nav_type: NavigationType,
	) -> Result<RouteLocation, RouterError> {
		let location = self.target_location(&target)?;
		let result = self.settle(location, nav_type)?;
		tracing::info!(
			%target,
			path = %result.full_path,
			route = result.name.as_deref().unwrap_or("<unmatched>"),
			"navigated"
		);
		Ok(result)
	}

	/// Applies the unmatched policy, records the entry and publishes the new
	/// route in one step.
	fn settle(
		&self,
		location: Location,
		nav_type: NavigationType,
	) -> Result<RouteLocation, RouterError> {
		let (location, name, nav_type) = match self.routes.get_by_path(location.path()) {
			Some(route) => {
				let name = route.name().to_string();
				(location, Some(name), nav_type)
			}
			None => self.apply_unmatched(location, nav_type)?,
		};

		let resolved = RouteLocation::new(&location, name);

		// Checked after redirects so a redirect to the current location adds
		// no entry either.
		let is_duplicate = self.current.with(|c| c.full_path == resolved.full_path);
		if nav_type == NavigationType::Push && is_duplicate {
			tracing::debug!(path = %resolved.full_path, "already at target, skipping history entry");
			return Ok(self.current_route());
		}

		{
			let mut history = self.history.borrow_mut();
			let state = HistoryState::new(resolved.full_path.clone())
				.with_route_name(resolved.name.as_deref());
			match nav_type {
				NavigationType::Push => {
					let state = state.with_position(history.position() + 1);
					history.push(&resolved.full_path, state)?;
				}
				NavigationType::Replace => {
					let state = state.with_position(history.position());
					history.replace(&resolved.full_path, state)?;
				}
				NavigationType::Pop => {}
			}
		}

		self.current.set(resolved.clone());
		Ok(resolved)
	}

	fn apply_unmatched(
		&self,
		location: Location,
		nav_type: NavigationType,
	) -> Result<(Location, Option<String>, NavigationType), RouterError> {
		tracing::warn!(path = location.path(), policy = ?self.unmatched, "no route matches");

		match &self.unmatched {
			UnmatchedPolicy::Blank => Ok((location, None, nav_type)),
			UnmatchedPolicy::Reject if nav_type != NavigationType::Pop => {
				Err(RouterError::UnmatchedRoute(location.path().to_string()))
			}
			UnmatchedPolicy::Reject => Ok((location, None, nav_type)),
			UnmatchedPolicy::Redirect(name) => {
				let route = self
					.routes
					.get_by_name(name)
					.ok_or_else(|| RouterError::InvalidRouteName(name.clone()))?;
				let redirected = Location::parse(route.path())?;
				// A popped entry is rewritten in place.
				let nav_type = match nav_type {
					NavigationType::Pop => NavigationType::Replace,
					other => other,
				};
				Ok((redirected, Some(route.name().to_string()), nav_type))
			}
		}
	}
}

fn parse_popped(location: &str) -> Option<Location> {
	match Location::parse(location) {
		Ok(parsed) => Some(parsed),
		Err(err) => {
			tracing::warn!(location, error = %err, "ignoring unroutable history entry");
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::history::MemoryHistory;
	use rstest::{fixture, rstest};
	use std::cell::Cell;
	use std::rc::Rc;

	struct Text(&'static str);

	impl View for Text {
		fn name(&self) -> &'static str {
			self.0
		}

		fn render(&self) -> String {
			self.0.to_string()
		}
	}

	fn table() -> RouteTable {
		RouteTable::new([
			Route::new("home", "/", || Text("Home")),
			Route::new("panorama", "/panorama", || Text("Panorama")),
		])
		.unwrap()
	}

	fn router_with(policy: UnmatchedPolicy) -> Router {
		Router::new(table(), MemoryHistory::default(), policy).unwrap()
	}

	#[fixture]
	fn router() -> Router {
		router_with(UnmatchedPolicy::Blank)
	}

	#[rstest]
	fn test_router_starts_at_history_location(router: Router) {
		let current = router.current_route();
		assert_eq!(current.path, "/");
		assert_eq!(current.name.as_deref(), Some("home"));
		assert_eq!(router.history_len(), 1);
	}

	#[rstest]
	#[case("/", "Home")]
	#[case("/panorama", "Panorama")]
	#[case("/panorama?image=4#top", "Panorama")]
	fn test_resolve_matches(router: Router, #[case] path: &str, #[case] view: &str) {
		let route = router.resolve(path).route().unwrap();
		assert_eq!(route.render().name(), view);
	}

	#[rstest]
	#[case("/about")]
	#[case("/panorama/")]
	#[case("/PANORAMA")]
	#[case("panorama")]
	#[case("/\\evil.example/panorama")]
	fn test_resolve_unmatched(router: Router, #[case] path: &str) {
		assert!(!router.resolve(path).is_matched());
	}

	#[rstest]
	fn test_navigate_by_path_and_name(router: Router) {
		let result = router.navigate("/panorama").unwrap();
		assert_eq!(result.name.as_deref(), Some("panorama"));
		assert_eq!(router.current_route().name.as_deref(), Some("panorama"));

		router.navigate("home").unwrap();
		assert_eq!(router.current_route().path, "/");
		assert_eq!(router.history_len(), 3);
	}

	#[rstest]
	fn test_navigate_unknown_name(router: Router) {
		let result = router.navigate("gallery");
		assert_eq!(
			result.unwrap_err(),
			RouterError::InvalidRouteName("gallery".to_string())
		);
		assert_eq!(router.current_route().path, "/");
	}

	#[rstest]
	fn test_navigate_to_current_location_adds_no_entry(router: Router) {
		router.navigate("/").unwrap();
		assert_eq!(router.history_len(), 1);
	}

	#[rstest]
	fn test_replace_keeps_history_length(router: Router) {
		router.replace("/panorama").unwrap();
		assert_eq!(router.history_len(), 1);
		assert_eq!(router.current_route().name.as_deref(), Some("panorama"));
		assert!(!router.back());
	}

	#[rstest]
	fn test_back_and_forward(router: Router) {
		router.navigate("/panorama").unwrap();

		assert!(router.back());
		assert_eq!(router.current_route().path, "/");
		assert_eq!(router.current_route().name.as_deref(), Some("home"));

		assert!(router.forward());
		assert_eq!(router.current_route().path, "/panorama");
		assert!(!router.forward());
	}

	#[rstest]
	fn test_blank_policy_accepts_unmatched(router: Router) {
		let result = router.navigate("/about").unwrap();
		assert_eq!(result.path, "/about");
		assert!(!result.is_matched());
		assert!(router.render_current().is_none());
	}

	#[rstest]
	fn test_reject_policy_refuses_unmatched() {
		let router = router_with(UnmatchedPolicy::Reject);
		let result = router.navigate("/about");

		assert_eq!(
			result.unwrap_err(),
			RouterError::UnmatchedRoute("/about".to_string())
		);
		assert_eq!(router.current_route().path, "/");
		assert_eq!(router.history_len(), 1);
	}

	#[rstest]
	fn test_redirect_policy_sends_home() {
		let router = router_with(UnmatchedPolicy::Redirect("home".to_string()));
		router.navigate("/panorama").unwrap();

		let result = router.navigate("/about").unwrap();
		assert_eq!(result.path, "/");
		assert_eq!(result.name.as_deref(), Some("home"));
	}

	#[rstest]
	fn test_redirect_to_current_location_adds_no_entry() {
		let router = router_with(UnmatchedPolicy::Redirect("home".to_string()));

		let result = router.navigate("/about").unwrap();
		assert_eq!(result.path, "/");
		assert_eq!(router.history_len(), 1);
		assert!(!router.back());
	}

	#[rstest]
	fn test_handle_pop_moves_history_with_route(router: Router) {
		router.handle_pop("/panorama?image=2");

		let current = router.current_route();
		assert_eq!(current.name.as_deref(), Some("panorama"));
		assert_eq!(router.current_url(), current.full_path);
		assert_eq!(router.history_len(), 1);
	}

	#[rstest]
	fn test_handle_pop_redirect_rewrites_popped_entry() {
		let router = router_with(UnmatchedPolicy::Redirect("home".to_string()));
		router.navigate("/panorama").unwrap();
		assert!(router.back());

		router.handle_pop("/gone");

		assert_eq!(router.current_route().path, "/");
		assert_eq!(router.current_url(), "/");
		assert!(router.forward());
		assert_eq!(router.current_route().path, "/panorama");
	}

	#[rstest]
	fn test_redirect_to_unknown_route_rejected_at_startup() {
		let result = Router::new(
			table(),
			MemoryHistory::default(),
			UnmatchedPolicy::Redirect("missing".to_string()),
		);
		assert!(matches!(result, Err(RouterError::InvalidRouteName(_))));
	}

	#[rstest]
	fn test_unmatched_start_location_under_reject() {
		let history = MemoryHistory::from_url("/about", "", HistoryMode::Web);
		let router = Router::new(table(), history, UnmatchedPolicy::Reject).unwrap();
		assert_eq!(router.current_route().path, "/about");
		assert!(!router.current_route().is_matched());
	}

	#[rstest]
	fn test_subscribers_see_each_navigation(router: Router) {
		let calls = Rc::new(Cell::new(0));
		let counter = Rc::clone(&calls);
		router.subscribe(move |_| counter.set(counter.get() + 1));

		router.navigate("/panorama").unwrap();
		router.back();
		router.navigate("/").unwrap();

		assert_eq!(calls.get(), 2);
	}

	#[rstest]
	fn test_render_current(router: Router) {
		router.navigate("panorama").unwrap();
		let view = router.render_current().unwrap();
		assert_eq!(view.render(), "Panorama");
	}

	#[rstest]
	fn test_href(router: Router) {
		assert_eq!(router.href("panorama").unwrap(), "/panorama");
		assert_eq!(router.href("/?tab=2").unwrap(), "/?tab=2");
		assert!(router.href("missing").is_err());
	}

	#[rstest]
	fn test_navigation_target_from_str() {
		assert_eq!(
			NavigationTarget::from("/panorama"),
			NavigationTarget::Path("/panorama".to_string())
		);
		assert_eq!(
			NavigationTarget::from("panorama"),
			NavigationTarget::Name("panorama".to_string())
		);
	}
}
