//! Router settings.
//!
//! Settings come from an optional TOML file and are then overridden by the
//! environment. `BASE_URL` carries the build-time base path; the remaining
//! keys use the `ROADVIEW_` prefix.
//!
//! ```toml
//! base_url = "/app/"
//! history_mode = "web"   # or "hash"
//! unmatched = "redirect" # "blank", "reject" or "redirect"
//! redirect_to = "home"
//! log = "roadview=debug"
//! ```

use roadview_router::{HistoryMode, UnmatchedPolicy};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Prefix for roadview-specific environment variables.
pub const ENV_PREFIX: &str = "ROADVIEW_";

/// Environment variable holding the application base path.
pub const BASE_URL_VAR: &str = "BASE_URL";

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
	/// A required variable is not set.
	#[error("Missing environment variable: {0}")]
	MissingVariable(String),
	/// A variable holds a value that cannot be parsed.
	#[error("Invalid value for {key}: {value:?}")]
	InvalidValue {
		/// Variable or key name.
		key: String,
		/// Offending value.
		value: String,
	},
	/// The settings file could not be read.
	#[error("Failed to read settings file: {0}")]
	Io(#[from] std::io::Error),
	/// The settings file is not valid TOML.
	#[error("Failed to parse settings file: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Environment variable reader with optional prefix support.
#[derive(Debug, Clone, Default)]
pub struct Env {
	/// Optional prefix for variable names (e.g., "ROADVIEW_").
	pub prefix: Option<String>,
}

impl Env {
	/// Create a reader without a prefix.
	pub fn new() -> Self {
		Self::default()
	}

	/// Set a prefix for all lookups.
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	fn key_name(&self, key: &str) -> String {
		match &self.prefix {
			Some(prefix) => format!("{}{}", prefix, key),
			None => key.to_string(),
		}
	}

	/// Read a string value; unset and empty variables are `None`.
	pub fn optional(&self, key: &str) -> Option<String> {
		env::var(self.key_name(key))
			.ok()
			.filter(|value| !value.trim().is_empty())
	}

	/// Read a required string value.
	pub fn str(&self, key: &str) -> Result<String, SettingsError> {
		self.optional(key)
			.ok_or_else(|| SettingsError::MissingVariable(self.key_name(key)))
	}

	/// Read and parse a value, returning `None` when unset.
	pub fn parse<T: FromStr>(&self, key: &str) -> Result<Option<T>, SettingsError> {
		match self.optional(key) {
			Some(value) => value
				.trim()
				.parse()
				.map(Some)
				.map_err(|_| SettingsError::InvalidValue {
					key: self.key_name(key),
					value,
				}),
			None => Ok(None),
		}
	}
}

/// History mode as written in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryModeSetting {
	/// History API with real paths.
	#[default]
	Web,
	/// Fragment-based paths.
	Hash,
}

impl FromStr for HistoryModeSetting {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"web" | "history" => Ok(Self::Web),
			"hash" => Ok(Self::Hash),
			_ => Err(()),
		}
	}
}

impl From<HistoryModeSetting> for HistoryMode {
	fn from(mode: HistoryModeSetting) -> Self {
		match mode {
			HistoryModeSetting::Web => HistoryMode::Web,
			HistoryModeSetting::Hash => HistoryMode::Hash,
		}
	}
}

/// Unmatched-route behavior as written in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmatchedSetting {
	/// Render nothing.
	#[default]
	Blank,
	/// Refuse the navigation.
	Reject,
	/// Navigate to `redirect_to` instead.
	Redirect,
}

impl FromStr for UnmatchedSetting {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"blank" => Ok(Self::Blank),
			"reject" => Ok(Self::Reject),
			"redirect" => Ok(Self::Redirect),
			_ => Err(()),
		}
	}
}

/// Settings consumed once at startup to build the router.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouterSettings {
	/// Base path the application is served under.
	pub base_url: String,
	/// URL encoding of route locations.
	pub history_mode: HistoryModeSetting,
	/// Behavior on unmatched locations.
	pub unmatched: UnmatchedSetting,
	/// Route name used by [`UnmatchedSetting::Redirect`].
	pub redirect_to: String,
	/// Tracing filter directive.
	pub log: String,
}

impl Default for RouterSettings {
	fn default() -> Self {
		Self {
			base_url: "/".to_string(),
			history_mode: HistoryModeSetting::Web,
			unmatched: UnmatchedSetting::Blank,
			redirect_to: crate::routes::HOME.to_string(),
			log: "info".to_string(),
		}
	}
}

impl RouterSettings {
	/// Defaults overridden by the environment.
	pub fn from_env() -> Result<Self, SettingsError> {
		Self::default().with_env_overrides()
	}

	/// Parses settings from TOML; missing keys take their defaults.
	pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(content)?)
	}

	/// Reads settings from a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let content = fs::read_to_string(path)?;
		Self::from_toml_str(&content)
	}

	/// Loads the optional file, then applies environment overrides.
	pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
		let settings = match path {
			Some(path) => Self::from_file(path)?,
			None => Self::default(),
		};
		settings.with_env_overrides()
	}

	/// Applies `BASE_URL` and `ROADVIEW_*` variables on top of `self`.
	pub fn with_env_overrides(mut self) -> Result<Self, SettingsError> {
		if let Some(base_url) = Env::new().optional(BASE_URL_VAR) {
			self.base_url = base_url;
		}

		let env = Env::new().with_prefix(ENV_PREFIX);
		if let Some(mode) = env.parse::<HistoryModeSetting>("HISTORY_MODE")? {
			self.history_mode = mode;
		}
		if let Some(unmatched) = env.parse::<UnmatchedSetting>("UNMATCHED")? {
			self.unmatched = unmatched;
		}
		if let Some(redirect_to) = env.optional("REDIRECT_TO") {
			self.redirect_to = redirect_to;
		}
		if let Some(log) = env.optional("LOG") {
			self.log = log;
		}
		Ok(self)
	}

	/// History mode for the router.
	pub fn history_mode(&self) -> HistoryMode {
		self.history_mode.into()
	}

	/// Unmatched policy for the router.
	pub fn unmatched_policy(&self) -> UnmatchedPolicy {
		match self.unmatched {
			UnmatchedSetting::Blank => UnmatchedPolicy::Blank,
			UnmatchedSetting::Reject => UnmatchedPolicy::Reject,
			UnmatchedSetting::Redirect => UnmatchedPolicy::Redirect(self.redirect_to.clone()),
		}
	}
}
