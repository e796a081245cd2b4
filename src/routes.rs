//! The application's route table.

use crate::pages::{MainPage, PanoramaViewer};
use crate::settings::RouterSettings;
use roadview_router::{History, MemoryHistory, Route, RouteTable, Router, RouterError};

/// Name of the landing route.
pub const HOME: &str = "home";

/// Name of the panorama route.
pub const PANORAMA: &str = "panorama";

/// Builds the two-route table: `/` → [`MainPage`], `/panorama` →
/// [`PanoramaViewer`].
pub fn route_table() -> Result<RouteTable, RouterError> {
	RouteTable::new([
		Route::new(HOME, "/", MainPage::default),
		Route::new(PANORAMA, "/panorama", PanoramaViewer::default),
	])
}

/// Creates the router over an existing history backend.
pub fn create_router_with<H>(settings: &RouterSettings, history: H) -> Result<Router, RouterError>
where
	H: History + 'static,
{
	let router = Router::new(route_table()?, history, settings.unmatched_policy())?;
	tracing::info!(
		base = %router.base(),
		mode = ?router.mode(),
		routes = router.route_count(),
		"router initialized"
	);
	Ok(router)
}

/// Creates the router as it starts when the browser shows `url`.
pub fn create_router_at(settings: &RouterSettings, url: &str) -> Result<Router, RouterError> {
	let history = MemoryHistory::from_url(url, &settings.base_url, settings.history_mode());
	create_router_with(settings, history)
}

/// Creates the router starting at the application root.
pub fn create_router(settings: &RouterSettings) -> Result<Router, RouterError> {
	let history = MemoryHistory::new(&settings.base_url, settings.history_mode());
	create_router_with(settings, history)
}
