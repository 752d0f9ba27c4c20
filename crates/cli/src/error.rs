use std::path::PathBuf;

use thiserror::Error;

use crate::output::{CommandError, ErrorCode};

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
	/// The command already printed its result (e.g. a failing run summary).
	/// Used to signal exit code 1 without additional output.
	#[error("")]
	OutputAlreadyPrinted,

	#[error("cannot read config {}: {source}", path.display())]
	ConfigRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid config {}: {source}", path.display())]
	ConfigParse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("unknown case id(s): {}", ids.join(", "))]
	UnknownCase { ids: Vec<String> },

	/// Navigation, session, locator and engine failures from the check itself.
	#[error(transparent)]
	Check(#[from] swiftcheck::Error),
}

/// Map a Playwright message onto an error code.
fn classify_playwright_message(msg: &str) -> ErrorCode {
	if msg.contains("Timeout") {
		ErrorCode::Timeout
	} else if msg.contains("strict mode violation") || msg.contains("not found") || msg.contains("no element") {
		ErrorCode::SelectorNotFound
	} else if msg.contains("navigation") || msg.contains("net::ERR_") {
		ErrorCode::NavigationFailed
	} else {
		ErrorCode::InternalError
	}
}

impl CliError {
	/// When true, the caller should exit with code 1 without printing additional output.
	pub fn is_output_already_printed(&self) -> bool {
		matches!(self, CliError::OutputAlreadyPrinted)
	}

	/// Convert this error to a CommandError for structured output
	pub fn to_command_error(&self) -> CommandError {
		let (code, message, details) = match self {
			CliError::OutputAlreadyPrinted => (ErrorCode::InternalError, String::new(), None),
			CliError::ConfigRead { path, .. } | CliError::ConfigParse { path, .. } => (
				ErrorCode::InvalidConfig,
				self.to_string(),
				Some(serde_json::json!({ "path": path })),
			),
			CliError::UnknownCase { ids } => (
				ErrorCode::UnknownCase,
				self.to_string(),
				Some(serde_json::json!({ "ids": ids })),
			),
			CliError::Check(err) => check_error_parts(err),
		};

		CommandError { code, message, details }
	}
}

fn check_error_parts(err: &swiftcheck::Error) -> (ErrorCode, String, Option<serde_json::Value>) {
	use swiftcheck::Error;

	match err {
		Error::Navigation { url, source } => (
			ErrorCode::NavigationFailed,
			format!("Navigation to {url} failed: {source}"),
			Some(serde_json::json!({ "url": url })),
		),
		Error::ElementNotFound { selector } => (
			ErrorCode::SelectorNotFound,
			format!("No elements matched selector: {selector}"),
			Some(serde_json::json!({ "selector": selector })),
		),
		Error::Timeout { ms, condition } => (
			ErrorCode::Timeout,
			format!("Timeout after {ms}ms waiting for: {condition}"),
			Some(serde_json::json!({ "timeoutMs": ms, "condition": condition })),
		),
		Error::Session(msg) if msg.contains("launch failed") => (ErrorCode::BrowserLaunchFailed, msg.clone(), None),
		Error::Session(msg) => (ErrorCode::SessionError, msg.clone(), None),
		Error::Engine(err) => {
			let msg = err.to_string();
			(classify_playwright_message(&msg), msg, None)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unknown_case_lists_ids() {
		let err = CliError::UnknownCase {
			ids: vec!["Pos_Fun_9999".into(), "Nope".into()],
		};
		let cmd = err.to_command_error();
		assert_eq!(cmd.code, ErrorCode::UnknownCase);
		assert_eq!(cmd.message, "unknown case id(s): Pos_Fun_9999, Nope");
		assert_eq!(cmd.details, Some(serde_json::json!({ "ids": ["Pos_Fun_9999", "Nope"] })));
	}

	#[test]
	fn check_timeout_keeps_condition() {
		let err = CliError::from(swiftcheck::Error::Timeout {
			ms: 5000,
			condition: "div >> nth=0".into(),
		});
		let cmd = err.to_command_error();
		assert_eq!(cmd.code, ErrorCode::Timeout);
		assert!(cmd.message.contains("5000ms"));
	}

	#[test]
	fn navigation_failure_carries_url() {
		let err = CliError::from(swiftcheck::Error::Navigation {
			url: "https://www.swifttranslator.com/".into(),
			source: anyhow::anyhow!("net::ERR_NAME_NOT_RESOLVED"),
		});
		let cmd = err.to_command_error();
		assert_eq!(cmd.code, ErrorCode::NavigationFailed);
		assert!(cmd.message.contains("ERR_NAME_NOT_RESOLVED"));
	}

	#[test]
	fn launch_failures_get_their_own_code() {
		let err = CliError::from(swiftcheck::Error::Session("firefox launch failed: executable missing".into()));
		assert_eq!(err.to_command_error().code, ErrorCode::BrowserLaunchFailed);

		let err = CliError::from(swiftcheck::Error::Session("page closed".into()));
		assert_eq!(err.to_command_error().code, ErrorCode::SessionError);
	}

	#[test]
	fn engine_messages_are_classified() {
		assert_eq!(classify_playwright_message("Timeout 30000ms exceeded"), ErrorCode::Timeout);
		assert_eq!(
			classify_playwright_message("strict mode violation: locator(\"div\") resolved to 3 elements"),
			ErrorCode::SelectorNotFound
		);
		assert_eq!(classify_playwright_message("browser crashed"), ErrorCode::InternalError);
	}
}
