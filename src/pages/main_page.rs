use roadview_router::{View, escape_html};

/// Landing page.
#[derive(Debug, Clone)]
pub struct MainPage {
	title: String,
}

impl Default for MainPage {
	fn default() -> Self {
		Self {
			title: "Roadview".to_string(),
		}
	}
}

impl MainPage {
	/// Creates a landing page with a custom title.
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
		}
	}
}

impl View for MainPage {
	fn name(&self) -> &'static str {
		"MainPage"
	}

	fn render(&self) -> String {
		format!(
			"<main class=\"main-page\"><h1>{}</h1></main>",
			escape_html(&self.title)
		)
	}

	fn mounted(&mut self) {
		tracing::debug!(view = self.name(), "mounted");
	}

	fn unmounted(&mut self) {
		tracing::debug!(view = self.name(), "unmounted");
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_default_title() {
		assert_eq!(
			MainPage::default().render(),
			"<main class=\"main-page\"><h1>Roadview</h1></main>"
		);
	}

	#[rstest]
	fn test_title_is_escaped() {
		let html = MainPage::new("<script>alert(\"x\")</script> & co").render();
		assert_eq!(
			html,
			"<main class=\"main-page\"><h1>&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; co</h1></main>"
		);
	}
}
