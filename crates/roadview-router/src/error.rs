//! Error types for client-side routing.

use thiserror::Error;

/// Error type for router operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
	/// No registered route matches the path.
	#[error("Route not found: {0}")]
	UnmatchedRoute(String),
	/// Navigation by a name that is not registered.
	#[error("Invalid route name: {0}")]
	InvalidRouteName(String),
	/// Two routes share the same path.
	#[error("Duplicate route path: {0}")]
	DuplicatePath(String),
	/// Two routes share the same name.
	#[error("Duplicate route name: {0}")]
	DuplicateName(String),
	/// A route path or location that cannot be routed.
	#[error("Invalid path: {0}")]
	InvalidPath(String),
	/// The history backend refused the navigation.
	#[error("Navigation failed: {0}")]
	NavigationFailed(String),
}
