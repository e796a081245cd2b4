//! # roadview
//!
//! Client-side navigation for the roadview front-end. Two routes are
//! registered:
//!
//! | Path        | Name       | View               |
//! |-------------|------------|--------------------|
//! | `/`         | `home`     | [`MainPage`]       |
//! | `/panorama` | `panorama` | [`PanoramaViewer`] |
//!
//! The router runs in history-API mode under the base path from `BASE_URL`
//! (see [`settings`]). Locations matching neither route follow the
//! configured [`UnmatchedPolicy`](roadview_router::UnmatchedPolicy); by
//! default the viewport is left blank.
//!
//! ## Example
//!
//! ```ignore
//! use roadview::{RouterSettings, create_router};
//! use roadview_router::RouterOutlet;
//!
//! let settings = RouterSettings::from_env()?;
//! let router = create_router(&settings)?;
//! let mut outlet = RouterOutlet::new().id("app");
//!
//! router.navigate("panorama")?;
//! outlet.sync(&router);
//! ```

pub mod logging;
pub mod pages;
pub mod routes;
pub mod settings;

pub use pages::{MainPage, PanoramaViewer};
pub use routes::{HOME, PANORAMA, create_router, create_router_at, create_router_with, route_table};
pub use settings::{RouterSettings, SettingsError};

/// Re-export of the router crate.
pub use roadview_router as router;
