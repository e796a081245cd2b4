//! History backends.
//!
//! The router never talks to the browser directly; it records navigations
//! through the [`History`] trait. [`MemoryHistory`] keeps a session history
//! stack in memory with the same push/replace/traverse semantics as the
//! browser History API, and is what tests, the CLI and server-side rendering
//! use. A browser backend implements the same trait on top of
//! `window.history` and forwards `popstate` events to
//! [`Router::handle_pop`](crate::Router::handle_pop).

use crate::error::RouterError;
use url::Url;

/// How route locations are encoded in the browser URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryMode {
	/// Real URL paths (`/app/panorama`). The host must serve the
	/// application shell for every routed path.
	#[default]
	Web,
	/// Route path carried in the fragment (`/app/#/panorama`).
	Hash,
}

/// Kind of navigation that produced a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationType {
	/// A new entry was pushed.
	Push,
	/// The current entry was replaced.
	Replace,
	/// The user traversed history (back/forward).
	Pop,
}

/// State stored alongside each history entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryState {
	/// Full router location of the entry.
	pub path: String,
	/// Name of the route matched when the entry was written.
	pub route_name: Option<String>,
	/// Index of the entry in the session history.
	pub position: usize,
}

impl HistoryState {
	/// Creates a state for `path`.
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			..Default::default()
		}
	}

	/// Sets the matched route name.
	pub fn with_route_name(mut self, name: Option<&str>) -> Self {
		self.route_name = name.map(str::to_string);
		self
	}

	/// Sets the entry position.
	pub fn with_position(mut self, position: usize) -> Self {
		self.position = position;
		self
	}
}

/// Normalizes an application base path.
///
/// The result has a leading `/` and no trailing `/`; the root base is the
/// empty string. Absolute URLs are reduced to their path and relative bases
/// such as `./` are treated as the root.
pub fn normalize_base(base: &str) -> String {
	let base = base.trim();
	let path = if base.contains("://") {
		Url::parse(base)
			.map(|url| url.path().to_string())
			.unwrap_or_default()
	} else {
		base.trim_start_matches('.').to_string()
	};

	let trimmed = path.trim_matches('/');
	if trimmed.is_empty() {
		String::new()
	} else {
		format!("/{}", trimmed)
	}
}

/// Removes a normalized `base` from a browser URL path.
///
/// URLs outside the base are returned unchanged.
pub fn strip_base(url_path: &str, base: &str) -> String {
	if base.is_empty() {
		return url_path.to_string();
	}

	match url_path.strip_prefix(base) {
		Some("") => "/".to_string(),
		Some(rest) if rest.starts_with('/') => rest.to_string(),
		Some(rest) if rest.starts_with('?') || rest.starts_with('#') => format!("/{}", rest),
		_ => url_path.to_string(),
	}
}

/// Builds the browser URL for a router location.
pub fn create_href(base: &str, mode: HistoryMode, location: &str) -> String {
	match mode {
		HistoryMode::Web => format!("{}{}", base, location),
		HistoryMode::Hash => format!("{}/#{}", base, location),
	}
}

/// Extracts the router location from a browser URL path.
pub fn location_from_url(url_path: &str, base: &str, mode: HistoryMode) -> String {
	match mode {
		HistoryMode::Web => strip_base(url_path, base),
		HistoryMode::Hash => match url_path.split_once('#') {
			Some((_, fragment)) if fragment.starts_with('/') => fragment.to_string(),
			_ => "/".to_string(),
		},
	}
}

/// Session history used by the router.
pub trait History {
	/// URL encoding of route locations.
	fn mode(&self) -> HistoryMode;

	/// Normalized base path.
	fn base(&self) -> &str;

	/// Router location of the current entry.
	fn location(&self) -> String;

	/// State of the current entry, if one was recorded.
	fn state(&self) -> Option<&HistoryState>;

	/// Index of the current entry.
	fn position(&self) -> usize;

	/// Number of entries in the session history.
	fn len(&self) -> usize;

	/// Returns `true` if the history holds no entries.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Adds an entry after the current one, discarding forward entries.
	fn push(&mut self, location: &str, state: HistoryState) -> Result<(), RouterError>;

	/// Overwrites the current entry.
	fn replace(&mut self, location: &str, state: HistoryState) -> Result<(), RouterError>;

	/// Moves `delta` entries and returns the new location, or `None` when the
	/// move would leave the history.
	fn go(&mut self, delta: isize) -> Option<String>;

	/// Browser URL for a router location.
	fn create_href(&self, location: &str) -> String {
		create_href(self.base(), self.mode(), location)
	}

	/// Browser URL of the current entry.
	fn url(&self) -> String {
		self.create_href(&self.location())
	}
}

#[derive(Debug, Clone)]
struct HistoryEntry {
	location: String,
	state: Option<HistoryState>,
}

/// In-memory session history.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
	base: String,
	mode: HistoryMode,
	entries: Vec<HistoryEntry>,
	position: usize,
}

impl Default for MemoryHistory {
	fn default() -> Self {
		Self::new("", HistoryMode::Web)
	}
}

impl MemoryHistory {
	/// Creates a history with a single entry at `/`.
	pub fn new(base: &str, mode: HistoryMode) -> Self {
		Self::starting_at("/", base, mode)
	}

	/// Creates a history whose first entry is the router location of a
	/// browser URL, as seen when the page is first loaded.
	pub fn from_url(url_path: &str, base: &str, mode: HistoryMode) -> Self {
		let base = normalize_base(base);
		let location = location_from_url(url_path, &base, mode);
		Self::starting_at(&location, &base, mode)
	}

	fn starting_at(location: &str, base: &str, mode: HistoryMode) -> Self {
		Self {
			base: normalize_base(base),
			mode,
			entries: vec![HistoryEntry {
				location: location.to_string(),
				state: None,
			}],
			position: 0,
		}
	}

	/// Router locations of all entries, oldest first.
	pub fn entries(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|e| e.location.as_str())
	}
}

impl History for MemoryHistory {
	fn mode(&self) -> HistoryMode {
		self.mode
	}

	fn base(&self) -> &str {
		&self.base
	}

	fn location(&self) -> String {
		self.entries[self.position].location.clone()
	}

	fn state(&self) -> Option<&HistoryState> {
		self.entries[self.position].state.as_ref()
	}

	fn position(&self) -> usize {
		self.position
	}

	fn len(&self) -> usize {
		self.entries.len()
	}

	fn push(&mut self, location: &str, state: HistoryState) -> Result<(), RouterError> {
		self.entries.truncate(self.position + 1);
		self.entries.push(HistoryEntry {
			location: location.to_string(),
			state: Some(state),
		});
		self.position = self.entries.len() - 1;
		Ok(())
	}

	fn replace(&mut self, location: &str, state: HistoryState) -> Result<(), RouterError> {
		self.entries[self.position] = HistoryEntry {
			location: location.to_string(),
			state: Some(state),
		};
		Ok(())
	}

	fn go(&mut self, delta: isize) -> Option<String> {
		if delta == 0 {
			return None;
		}
		let target = self.position.checked_add_signed(delta)?;
		if target >= self.entries.len() {
			return None;
		}
		self.position = target;
		Some(self.location())
	}
}
