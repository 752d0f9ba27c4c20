//! Structured output envelope for all CLI commands.
//!
//! Every command produces a result envelope on stdout:
//!
//! ```json
//! {
//!   "ok": true,
//!   "command": "run",
//!   "data": { "total": 36, "passed": 30, ... },
//!   "timings": { "durationMs": 412345 },
//!   "config": { "browser": "chromium", "headless": true, ... }
//! }
//! ```
//!
//! On failure:
//!
//! ```json
//! {
//!   "ok": false,
//!   "command": "run",
//!   "error": { "code": "UNKNOWN_CASE", "message": "unknown case id(s): Pos_Fun_9999" }
//! }
//! ```
//!
//! With `-f text` the envelope is dropped and data renders through [`TextRender`].


use std::io::{self, Write};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Current schema version for command output.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
	/// TOON output (token-efficient for LLMs)
	Toon,
	/// JSON output
	Json,
	/// Newline-delimited JSON
	Ndjson,
	/// Human-readable text
	#[default]
	Text,
}

impl std::fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			OutputFormat::Toon => write!(f, "toon"),
			OutputFormat::Json => write!(f, "json"),
			OutputFormat::Ndjson => write!(f, "ndjson"),
			OutputFormat::Text => write!(f, "text"),
		}
	}
}

/// The result envelope returned by all commands.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult<T: Serialize> {
	pub schema_version: u32,

	pub ok: bool,

	/// Command name (`run`, `list`, `translate`)
	pub command: String,

	/// Only present on success
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<T>,

	/// Only present on failure
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<CommandError>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub timings: Option<Timings>,

	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub diagnostics: Vec<Diagnostic>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub config: Option<EffectiveConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
	pub code: ErrorCode,

	pub message: String,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<serde_json::Value>,
}

/// Standardized error codes for programmatic handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
	/// Browser failed to launch
	BrowserLaunchFailed,
	/// Navigation to the target page failed
	NavigationFailed,
	/// Selector did not match any elements
	SelectorNotFound,
	/// Operation timed out
	Timeout,
	/// Session could not be opened or closed
	SessionError,
	/// Config file missing or malformed
	InvalidConfig,
	/// Requested case id is not in the catalog
	UnknownCase,
	/// One or more cases failed or errored
	CasesFailed,
	/// `translate --expect` did not match the page output
	OutputMismatch,
	/// Unknown/internal error
	InternalError,
}

impl std::fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let s = match self {
			ErrorCode::BrowserLaunchFailed => "BROWSER_LAUNCH_FAILED",
			ErrorCode::NavigationFailed => "NAVIGATION_FAILED",
			ErrorCode::SelectorNotFound => "SELECTOR_NOT_FOUND",
			ErrorCode::Timeout => "TIMEOUT",
			ErrorCode::SessionError => "SESSION_ERROR",
			ErrorCode::InvalidConfig => "INVALID_CONFIG",
			ErrorCode::UnknownCase => "UNKNOWN_CASE",
			ErrorCode::CasesFailed => "CASES_FAILED",
			ErrorCode::OutputMismatch => "OUTPUT_MISMATCH",
			ErrorCode::InternalError => "INTERNAL_ERROR",
		};
		f.write_str(s)
	}
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timings {
	pub duration_ms: u64,
}

impl From<Duration> for Timings {
	fn from(duration: Duration) -> Self {
		Timings {
			duration_ms: duration.as_millis() as u64,
		}
	}
}

#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
	pub level: DiagnosticLevel,
	pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
	Info,
	Warning,
}

/// Effective configuration used for the command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveConfig {
	pub browser: String,
	pub headless: bool,
	pub url: String,
	pub navigation_timeout_ms: u64,
	pub debounce_ms: u64,
}

impl From<&Config> for EffectiveConfig {
	fn from(config: &Config) -> Self {
		Self {
			browser: config.browser.to_string(),
			headless: config.headless,
			url: config.target.url.clone(),
			navigation_timeout_ms: config.navigation_timeout_ms,
			debounce_ms: config.settle.debounce_ms,
		}
	}
}

/// Human-readable rendering of command data for `-f text`.
pub trait TextRender {
	fn render_text(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl TextRender for () {
	fn render_text(&self, _out: &mut dyn Write) -> io::Result<()> {
		Ok(())
	}
}

pub struct ResultBuilder<T: Serialize> {
	command: String,
	data: Option<T>,
	error: Option<CommandError>,
	start_time: Instant,
	diagnostics: Vec<Diagnostic>,
	config: Option<EffectiveConfig>,
}

impl<T: Serialize> ResultBuilder<T> {
	pub fn new(command: impl Into<String>) -> Self {
		Self {
			command: command.into(),
			data: None,
			error: None,
			start_time: Instant::now(),
			diagnostics: Vec::new(),
			config: None,
		}
	}

	pub fn data(mut self, data: T) -> Self {
		self.data = Some(data);
		self
	}

	pub fn error(mut self, code: ErrorCode, message: impl Into<String>) -> Self {
		self.error = Some(CommandError {
			code,
			message: message.into(),
			details: None,
		});
		self
	}

	pub fn command_error(mut self, error: CommandError) -> Self {
		self.error = Some(error);
		self
	}

	pub fn diagnostic(mut self, level: DiagnosticLevel, message: impl Into<String>) -> Self {
		self.diagnostics.push(Diagnostic {
			level,
			message: message.into(),
		});
		self
	}

	pub fn config(mut self, config: EffectiveConfig) -> Self {
		self.config = Some(config);
		self
	}

	/// A result with both data and an error (e.g. a run with failing cases)
	/// keeps the data and reports `ok: false`.
	pub fn build(self) -> CommandResult<T> {
		let ok = self.error.is_none() && self.data.is_some();
		CommandResult {
			schema_version: SCHEMA_VERSION,
			ok,
			command: self.command,
			data: self.data,
			error: self.error,
			timings: Some(Timings::from(self.start_time.elapsed())),
			diagnostics: self.diagnostics,
			config: self.config,
		}
	}
}

/// Print a command result to stdout in the specified format
pub fn print_result<T: Serialize + TextRender>(result: &CommandResult<T>, format: OutputFormat) {
	match format {
		OutputFormat::Toon => {
			if let Ok(json_value) = serde_json::to_value(result) {
				println!("{}", toon::encode(&json_value, None));
			}
		}
		OutputFormat::Json => {
			if let Ok(json) = serde_json::to_string_pretty(result) {
				println!("{json}");
			}
		}
		OutputFormat::Ndjson => {
			if let Ok(json) = serde_json::to_string(result) {
				println!("{json}");
			}
		}
		OutputFormat::Text => {
			let mut stdout = io::stdout().lock();
			let _ = write_result_text(result, &mut stdout);
		}
	}
}

fn write_result_text<T: Serialize + TextRender>(result: &CommandResult<T>, out: &mut dyn Write) -> io::Result<()> {
	if let Some(data) = &result.data {
		data.render_text(out)?;
	}
	// Errors go to stderr via print_error_stderr; only a data-carrying
	// failure (failing run) has anything left to say here.
	for diag in &result.diagnostics {
		let prefix = match diag.level {
			DiagnosticLevel::Info => "info",
			DiagnosticLevel::Warning => "warning",
		};
		writeln!(out, "[{prefix}] {}", diag.message)?;
	}
	Ok(())
}

/// Print an error to stderr in human-readable format
pub fn print_error_stderr(error: &CommandError) {
	eprintln!("Error [{}]: {}", error.code, error.message);
}
