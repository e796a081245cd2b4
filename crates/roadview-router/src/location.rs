//! Location parsing.
//!
//! A [`Location`] is the router-relative part of a URL: the path that takes
//! part in matching, plus the query string and hash fragment that ride along.

use crate::error::RouterError;
use url::Url;

/// Origin used to resolve router-relative paths into absolute URLs.
const PARSE_ORIGIN: &str = "http://localhost";

/// A parsed router location such as `/panorama?image=3#top`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
	path: String,
	raw_query: Option<String>,
	query: Vec<(String, String)>,
	hash: Option<String>,
}

impl Location {
	/// Parses a router-relative location.
	///
	/// The input must start with a single `/` and may not contain `\`, which
	/// URL parsing treats as `/`. Dot segments are resolved and the path is
	/// percent-encoded the same way a browser would.
	pub fn parse(input: &str) -> Result<Self, RouterError> {
		if !input.starts_with('/') || input.starts_with("//") || input.contains('\\') {
			return Err(RouterError::InvalidPath(input.to_string()));
		}

		let origin =
			Url::parse(PARSE_ORIGIN).map_err(|e| RouterError::InvalidPath(e.to_string()))?;
		let url = origin
			.join(input)
			.map_err(|e| RouterError::InvalidPath(format!("{}: {}", input, e)))?;
		if url.origin() != origin.origin() {
			return Err(RouterError::InvalidPath(input.to_string()));
		}

		Ok(Self {
			path: url.path().to_string(),
			raw_query: url.query().filter(|q| !q.is_empty()).map(str::to_string),
			query: url.query_pairs().into_owned().collect(),
			hash: url
				.fragment()
				.filter(|h| !h.is_empty())
				.map(str::to_string),
		})
	}

	/// The path component used for route matching.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Decoded query pairs in order of appearance.
	pub fn query(&self) -> &[(String, String)] {
		&self.query
	}

	/// The hash fragment without the leading `#`.
	pub fn hash(&self) -> Option<&str> {
		self.hash.as_deref()
	}

	/// Path, query and hash joined back together.
	pub fn full_path(&self) -> String {
		let mut full = self.path.clone();
		if let Some(query) = &self.raw_query {
			full.push('?');
			full.push_str(query);
		}
		if let Some(hash) = &self.hash {
			full.push('#');
			full.push_str(hash);
		}
		full
	}
}

/// The router's view of where the application currently is.
///
/// `name` is `None` exactly when no registered route matches `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLocation {
	/// Matched path, without query or hash.
	pub path: String,
	/// Path including query string and hash fragment.
	pub full_path: String,
	/// Name of the matched route.
	pub name: Option<String>,
	/// Decoded query pairs.
	pub query: Vec<(String, String)>,
	/// Hash fragment without the leading `#`.
	pub hash: Option<String>,
}

impl RouteLocation {
	pub(crate) fn new(location: &Location, name: Option<String>) -> Self {
		Self {
			path: location.path().to_string(),
			full_path: location.full_path(),
			name,
			query: location.query().to_vec(),
			hash: location.hash().map(str::to_string),
		}
	}

	/// Returns `true` when a registered route matched this location.
	pub fn is_matched(&self) -> bool {
		self.name.is_some()
	}

	/// Returns the first query value for `key`.
	pub fn query_value(&self, key: &str) -> Option<&str> {
		self.query
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_parse_plain_path() {
		let location = Location::parse("/panorama").unwrap();
		assert_eq!(location.path(), "/panorama");
		assert!(location.query().is_empty());
		assert_eq!(location.hash(), None);
		assert_eq!(location.full_path(), "/panorama");
	}

	#[rstest]
	fn test_parse_query_and_hash() {
		let location = Location::parse("/panorama?image=3&fov=90#top").unwrap();
		assert_eq!(location.path(), "/panorama");
		assert_eq!(
			location.query(),
			&[
				("image".to_string(), "3".to_string()),
				("fov".to_string(), "90".to_string())
			]
		);
		assert_eq!(location.hash(), Some("top"));
		assert_eq!(location.full_path(), "/panorama?image=3&fov=90#top");
	}

	#[rstest]
	#[case("/a/../panorama", "/panorama")]
	#[case("/./", "/")]
	#[case("/street view", "/street%20view")]
	fn test_parse_normalizes_path(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(Location::parse(input).unwrap().path(), expected);
	}

	#[rstest]
	#[case("")]
	#[case("panorama")]
	#[case("//evil.example/panorama")]
	#[case("/\\evil.example/panorama")]
	#[case("/panorama\\..")]
	fn test_parse_rejects_non_absolute(#[case] input: &str) {
		assert!(matches!(
			Location::parse(input),
			Err(RouterError::InvalidPath(_))
		));
	}

	#[rstest]
	fn test_route_location_query_value() {
		let location = Location::parse("/panorama?image=3").unwrap();
		let route = RouteLocation::new(&location, Some("panorama".to_string()));

		assert!(route.is_matched());
		assert_eq!(route.query_value("image"), Some("3"));
		assert_eq!(route.query_value("missing"), None);
	}
}
