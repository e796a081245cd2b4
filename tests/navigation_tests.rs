//! Navigation contract of the roadview application router.

use roadview::router::{RouterError, RouterOutlet, UnmatchedPolicy};
use roadview::settings::{HistoryModeSetting, UnmatchedSetting};
use roadview::{HOME, PANORAMA, RouterSettings, create_router, create_router_at, route_table};
use rstest::{fixture, rstest};

#[fixture]
fn settings() -> RouterSettings {
	RouterSettings::default()
}

#[rstest]
fn test_route_table_contents() {
	let table = route_table().unwrap();
	let entries: Vec<_> = table
		.iter()
		.map(|r| (r.name(), r.path(), r.render().name()))
		.collect();

	assert_eq!(
		entries,
		vec![
			(HOME, "/", "MainPage"),
			(PANORAMA, "/panorama", "PanoramaViewer"),
		]
	);
}

#[rstest]
#[case("/", "MainPage")]
#[case("/panorama", "PanoramaViewer")]
fn test_resolve_registered_paths(settings: RouterSettings, #[case] path: &str, #[case] view: &str) {
	let router = create_router(&settings).unwrap();
	let route = router.resolve(path).route().unwrap();
	assert_eq!(route.render().name(), view);
}

#[rstest]
fn test_resolve_about_is_unmatched(settings: RouterSettings) {
	let router = create_router(&settings).unwrap();
	assert!(!router.resolve("/about").is_matched());
}

#[rstest]
fn test_navigate_by_path_then_name(settings: RouterSettings) {
	let router = create_router(&settings).unwrap();

	router.navigate("/panorama").unwrap();
	assert_eq!(router.current_route().name.as_deref(), Some(PANORAMA));

	router.navigate(HOME).unwrap();
	assert_eq!(router.current_route().path, "/");
}

#[rstest]
fn test_back_after_panorama(settings: RouterSettings) {
	let router = create_router(&settings).unwrap();
	router.navigate("/panorama").unwrap();

	assert!(router.back());
	assert_eq!(router.current_route().path, "/");
}

#[rstest]
fn test_base_url_applies_to_hrefs() {
	let settings = RouterSettings {
		base_url: "/app/".to_string(),
		..RouterSettings::default()
	};
	let router = create_router_at(&settings, "/app/panorama").unwrap();

	assert_eq!(router.current_route().name.as_deref(), Some(PANORAMA));
	assert_eq!(router.href(PANORAMA).unwrap(), "/app/panorama");
	assert_eq!(router.href(HOME).unwrap(), "/app/");
}

#[rstest]
fn test_hash_mode_from_settings() {
	let settings = RouterSettings {
		base_url: "/app/".to_string(),
		history_mode: HistoryModeSetting::Hash,
		..RouterSettings::default()
	};
	let router = create_router(&settings).unwrap();

	assert_eq!(router.href(PANORAMA).unwrap(), "/app/#/panorama");
}

#[rstest]
fn test_unmatched_policies() {
	let blank = create_router(&RouterSettings::default()).unwrap();
	assert_eq!(blank.unmatched_policy(), &UnmatchedPolicy::Blank);
	assert!(!blank.navigate("/about").unwrap().is_matched());

	let reject = create_router(&RouterSettings {
		unmatched: UnmatchedSetting::Reject,
		..RouterSettings::default()
	})
	.unwrap();
	assert_eq!(
		reject.navigate("/about").unwrap_err(),
		RouterError::UnmatchedRoute("/about".to_string())
	);

	let redirect = create_router(&RouterSettings {
		unmatched: UnmatchedSetting::Redirect,
		..RouterSettings::default()
	})
	.unwrap();
	redirect.navigate(PANORAMA).unwrap();
	assert_eq!(redirect.navigate("/about").unwrap().name.as_deref(), Some(HOME));
}

#[rstest]
fn test_redirect_to_unknown_route_fails_fast() {
	let settings = RouterSettings {
		unmatched: UnmatchedSetting::Redirect,
		redirect_to: "gallery".to_string(),
		..RouterSettings::default()
	};
	assert_eq!(
		create_router(&settings).unwrap_err(),
		RouterError::InvalidRouteName("gallery".to_string())
	);
}

#[rstest]
fn test_outlet_mounts_pages(settings: RouterSettings) {
	let router = create_router(&settings).unwrap();
	let mut outlet = RouterOutlet::new().id("app");

	outlet.sync(&router);
	assert_eq!(outlet.viewport().active_name(), Some("MainPage"));
	assert!(outlet.render().contains("<h1>Roadview</h1>"));

	router.navigate(PANORAMA).unwrap();
	outlet.sync(&router);
	assert_eq!(outlet.viewport().active_name(), Some("PanoramaViewer"));
	assert!(outlet.render().contains("panorama-canvas"));
}
