use roadview_router::View;

/// Panorama viewer page.
///
/// Renders the container the panorama renderer attaches to; projection and
/// image loading happen client-side once mounted.
#[derive(Debug, Clone, Default)]
pub struct PanoramaViewer {
	mounted: bool,
}

impl PanoramaViewer {
	/// Returns `true` while the viewer is mounted.
	pub fn is_mounted(&self) -> bool {
		self.mounted
	}
}

impl View for PanoramaViewer {
	fn name(&self) -> &'static str {
		"PanoramaViewer"
	}

	fn render(&self) -> String {
		"<section class=\"panorama-viewer\"><canvas class=\"panorama-canvas\"></canvas></section>"
			.to_string()
	}

	fn mounted(&mut self) {
		self.mounted = true;
		tracing::debug!(view = self.name(), "mounted");
	}

	fn unmounted(&mut self) {
		self.mounted = false;
		tracing::debug!(view = self.name(), "unmounted");
	}
}
