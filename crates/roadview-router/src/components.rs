//! Router Components for navigation.
//!
//! [`Link`] renders anchors that the host intercepts for client-side
//! navigation; [`RouterOutlet`] mounts the current route's view.

use crate::core::{NavigationTarget, Router};
use crate::error::RouterError;
use crate::location::RouteLocation;
use crate::view::Viewport;

/// A link that navigates without a full page reload.
///
/// Similar to HTML `<a>`; the rendered element carries `data-link` so the
/// host can intercept clicks and call [`Link::activate`].
///
/// # Example
///
/// ```ignore
/// use roadview_router::Link;
///
/// let link = Link::new("panorama", "Open viewer");
/// let html = link.render(&router)?;
/// ```
#[derive(Debug, Clone)]
pub struct Link {
	to: NavigationTarget,
	content: String,
	class: Option<String>,
	replace: bool,
}

impl Link {
	/// Creates a link to a path or route name.
	pub fn new(to: impl Into<NavigationTarget>, content: impl Into<String>) -> Self {
		Self {
			to: to.into(),
			content: content.into(),
			class: None,
			replace: false,
		}
	}

	/// Sets the CSS class.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	/// Sets whether to replace the current history entry.
	pub fn replace(mut self, replace: bool) -> Self {
		self.replace = replace;
		self
	}

	/// Returns the destination.
	pub fn to(&self) -> &NavigationTarget {
		&self.to
	}

	/// Returns whether this is a replace navigation.
	pub fn is_replace(&self) -> bool {
		self.replace
	}

	/// Returns `true` when the router's current path is this link's target.
	pub fn is_active(&self, router: &Router) -> bool {
		router
			.href(self.to.clone())
			.map(|href| href == router.current_url())
			.unwrap_or(false)
	}

	/// Renders the anchor element.
	pub fn render(&self, router: &Router) -> Result<String, RouterError> {
		let href = router.href(self.to.clone())?;

		let mut html = format!("<a href=\"{}\" data-link=\"true\"", escape_html(&href));
		if self.replace {
			html.push_str(" data-replace=\"true\"");
		}
		if let Some(class) = &self.class {
			html.push_str(&format!(" class=\"{}\"", escape_html(class)));
		}
		if self.is_active(router) {
			html.push_str(" aria-current=\"page\"");
		}
		html.push('>');
		html.push_str(&escape_html(&self.content));
		html.push_str("</a>");
		Ok(html)
	}

	/// Performs the navigation a click on this link triggers.
	pub fn activate(&self, router: &Router) -> Result<RouteLocation, RouterError> {
		if self.replace {
			router.replace(self.to.clone())
		} else {
			router.navigate(self.to.clone())
		}
	}
}

/// The region where the matched route's view is mounted.
///
/// # Example
///
/// ```ignore
/// use roadview_router::RouterOutlet;
///
/// let mut outlet = RouterOutlet::new().id("app");
/// outlet.sync(&router);
/// let html = outlet.render();
/// ```
#[derive(Debug, Default)]
pub struct RouterOutlet {
	id: Option<String>,
	class: Option<String>,
	viewport: Viewport,
	mounted_route: Option<String>,
}

impl RouterOutlet {
	/// Creates a new router outlet.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the ID attribute.
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Sets the CSS class.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	/// Mounts the view of the router's current route.
	///
	/// The view is only swapped when the matched route changes; an unmatched
	/// location leaves the viewport blank. Returns `true` if the viewport
	/// changed.
	pub fn sync(&mut self, router: &Router) -> bool {
		let target = router.current_route().name;
		if target == self.mounted_route {
			return false;
		}

		match router.current_match() {
			Some(route) => {
				tracing::debug!(route = route.name(), "mounting view");
				self.viewport.mount(route.render());
			}
			None => {
				tracing::debug!("clearing viewport");
				self.viewport.clear();
			}
		}
		self.mounted_route = target;
		true
	}

	/// Name of the route whose view is mounted.
	pub fn mounted_route(&self) -> Option<&str> {
		self.mounted_route.as_deref()
	}

	/// The underlying viewport.
	pub fn viewport(&self) -> &Viewport {
		&self.viewport
	}

	/// Renders the outlet element with the mounted view inside.
	pub fn render(&self) -> String {
		let mut html = String::from("<div data-router-outlet=\"true\"");
		if let Some(id) = &self.id {
			html.push_str(&format!(" id=\"{}\"", escape_html(id)));
		}
		if let Some(class) = &self.class {
			html.push_str(&format!(" class=\"{}\"", escape_html(class)));
		}
		if let Some(name) = self.viewport.active_name() {
			html.push_str(&format!(" data-view=\"{}\"", name));
		}
		html.push('>');
		html.push_str(&self.viewport.render());
		html.push_str("</div>");
		html
	}
}

/// Escapes text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#x27;"),
			_ => out.push(c),
		}
	}
	out
}
