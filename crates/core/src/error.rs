use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	#[error("navigation failed: {url}")]
	Navigation {
		url: String,
		#[source]
		source: anyhow::Error,
	},

	#[error("element not found: {selector}")]
	ElementNotFound { selector: String },

	#[error("timeout after {ms}ms waiting for: {condition}")]
	Timeout { ms: u64, condition: String },

	#[error("session failed: {0}")]
	Session(String),

	#[error(transparent)]
	Engine(#[from] anyhow::Error),
}

impl Error {
	/// Locator misses that a later extraction strategy may recover from.
	pub fn is_recoverable(&self) -> bool {
		matches!(self, Error::Timeout { .. } | Error::ElementNotFound { .. })
	}

	/// Builds an [`Error::Engine`] from anything displayable.
	///
	/// Engine adapters use this to keep the underlying message when their
	/// error type does not implement `std::error::Error + Send + Sync`.
	pub fn engine(msg: impl std::fmt::Display) -> Self {
		Error::Engine(anyhow::anyhow!("{msg}"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn locator_misses_are_recoverable() {
		let timeout = Error::Timeout {
			ms: 5000,
			condition: "div >> nth=0".into(),
		};
		let missing = Error::ElementNotFound { selector: "#out".into() };
		assert!(timeout.is_recoverable());
		assert!(missing.is_recoverable());
	}

	#[test]
	fn navigation_is_fatal() {
		let err = Error::Navigation {
			url: "https://www.swifttranslator.com/".into(),
			source: anyhow::anyhow!("net::ERR_NAME_NOT_RESOLVED"),
		};
		assert!(!err.is_recoverable());
		assert!(!Error::engine("browser closed").is_recoverable());
	}

	#[test]
	fn timeout_message_names_condition() {
		let err = Error::Timeout {
			ms: 250,
			condition: "xpath=following-sibling::div[1]".into(),
		};
		assert_eq!(err.to_string(), "timeout after 250ms waiting for: xpath=following-sibling::div[1]");
	}
}
