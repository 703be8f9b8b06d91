//! Error types for router operations.

use thiserror::Error;

/// Error type for router operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
	/// A navigation target could not be parsed as an absolute URL.
	#[error("Invalid navigation target: {0}")]
	InvalidUrl(#[from] url::ParseError),
	/// The environment rejected an attach/detach or history operation.
	#[error("Environment failure: {0}")]
	Environment(String),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_invalid_url_display() {
		let err = RouterError::from(url::Url::parse("not a url").unwrap_err());
		assert!(err.to_string().starts_with("Invalid navigation target:"));
	}

	#[rstest]
	fn test_environment_display() {
		let err = RouterError::Environment("no global window".to_string());
		assert_eq!(err.to_string(), "Environment failure: no global window");
	}
}
