//! # roadview-router
//!
//! History-based client-side router: a validated table of
//! `(path, name, view)` routes, a session history, and a single reactive
//! "current route" slot kept in step with the history.
//!
//! ## Modules
//!
//! - [`route`]: route definitions and the route table
//! - [`core`](mod@core): the [`Router`] and navigation logic
//! - [`history`]: history backends and base-path handling
//! - [`location`]: parsing of router locations
//! - [`components`]: [`Link`] and [`RouterOutlet`]
//! - [`view`]: the [`View`] trait and [`Viewport`]
//! - [`signal`]: reactive cell holding the current route
//!
//! ## Example
//!
//! ```ignore
//! use roadview_router::{HistoryMode, MemoryHistory, Route, RouteTable, Router, UnmatchedPolicy};
//!
//! let routes = RouteTable::new([
//!     Route::new("home", "/", MainPage::default),
//!     Route::new("panorama", "/panorama", PanoramaViewer::default),
//! ])?;
//! let history = MemoryHistory::new("/app/", HistoryMode::Web);
//! let router = Router::new(routes, history, UnmatchedPolicy::Blank)?;
//!
//! router.navigate("panorama")?;
//! assert_eq!(router.current_route().path, "/panorama");
//! assert_eq!(router.href("panorama")?, "/app/panorama");
//! ```

pub mod components;
pub mod core;
pub mod error;
pub mod history;
pub mod location;
pub mod route;
pub mod signal;
pub mod view;

pub use components::{Link, RouterOutlet, escape_html};
pub use crate::core::{NavigationTarget, Router, UnmatchedPolicy};
pub use error::RouterError;
pub use history::{History, HistoryMode, HistoryState, MemoryHistory, NavigationType};
pub use location::{Location, RouteLocation};
pub use route::{Resolution, Route, RouteTable};
pub use signal::{Signal, SubscriptionId};
pub use view::{View, ViewFactory, Viewport};
