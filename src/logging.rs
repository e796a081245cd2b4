//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber filtered by `directive`
/// (e.g. `info` or `roadview_router=debug`).
///
/// Falls back to `info` when the directive does not parse. Calling this more
/// than once is harmless; later calls are ignored.
pub fn init_logging(directive: &str) {
	let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(true)
		.with_writer(std::io::stderr)
		.try_init();
}
