//! Effective configuration: code defaults, then an optional JSON file, then flags.
//!
//! ```json
//! {
//!   "browser": "firefox",
//!   "headless": true,
//!   "navigationTimeoutMs": 45000,
//!   "target": { "url": "https://www.swifttranslator.com/" },
//!   "settle": { "debounceMs": 3000 }
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use swiftcheck::{DEFAULT_NAVIGATION_TIMEOUT, Settle, TargetPage, Translator};
use tracing::debug;

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Browser engine launched for each session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
	#[default]
	Chromium,
	Firefox,
	Webkit,
}

impl std::fmt::Display for BrowserKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			BrowserKind::Chromium => write!(f, "chromium"),
			BrowserKind::Firefox => write!(f, "firefox"),
			BrowserKind::Webkit => write!(f, "webkit"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
	pub browser: BrowserKind,
	pub headless: bool,
	pub navigation_timeout_ms: u64,
	pub target: TargetPage,
	pub settle: Settle,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			browser: BrowserKind::default(),
			headless: true,
			navigation_timeout_ms: DEFAULT_NAVIGATION_TIMEOUT.as_millis() as u64,
			target: TargetPage::default(),
			settle: Settle::default(),
		}
	}
}

impl Config {
	/// Reads a config file; every field is optional.
	pub fn from_file(path: &Path) -> Result<Self> {
		let raw = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
			path: path.to_path_buf(),
			source,
		})?;
		let config = serde_json::from_str(&raw).map_err(|source| CliError::ConfigParse {
			path: path.to_path_buf(),
			source,
		})?;
		debug!(target = "swiftcheck", path = %path.display(), "loaded config file");
		Ok(config)
	}

	/// Defaults, overlaid with `--config` if given, overlaid with flags.
	pub fn resolve(cli: &Cli) -> Result<Self> {
		let mut config = match &cli.config {
			Some(path) => Self::from_file(path)?,
			None => Self::default(),
		};
		config.apply_flags(cli);
		Ok(config)
	}

	fn apply_flags(&mut self, cli: &Cli) {
		if let Some(browser) = cli.browser {
			self.browser = browser;
		}
		if cli.headed {
			self.headless = false;
		}
		if let Some(url) = &cli.url {
			self.target.url = url.clone();
		}
		if let Some(ms) = cli.timeout {
			self.navigation_timeout_ms = ms;
		}
		if let Some(ms) = cli.debounce_ms {
			self.settle.debounce_ms = ms;
		}
	}

	pub fn navigation_timeout(&self) -> Duration {
		Duration::from_millis(self.navigation_timeout_ms)
	}

	pub fn translator(&self) -> Translator {
		Translator::new(self.target.clone(), self.settle).with_navigation_timeout(self.navigation_timeout())
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use clap::Parser;

	use super::*;

	fn parse(args: &[&str]) -> Cli {
		Cli::try_parse_from(std::iter::once("swiftcheck").chain(args.iter().copied())).unwrap()
	}

	#[test]
	fn defaults_target_live_site() {
		let config = Config::resolve(&parse(&["list"])).unwrap();
		assert_eq!(config, Config::default());
		assert_eq!(config.target.url, "https://www.swifttranslator.com/");
		assert!(config.headless);
		assert_eq!(config.navigation_timeout(), Duration::from_secs(30));
	}

	#[test]
	fn file_then_flags() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(
			file,
			r#"{{"browser": "firefox", "settle": {{"debounceMs": 4000, "overlayMs": 200}}, "target": {{"url": "http://localhost:8080/"}}}}"#
		)
		.unwrap();
		let path = file.path().to_str().unwrap();

		let config = Config::resolve(&parse(&["--config", path, "--debounce-ms", "3000", "--headed", "list"])).unwrap();
		assert_eq!(config.browser, BrowserKind::Firefox);
		assert_eq!(config.settle.debounce_ms, 3000);
		assert_eq!(config.settle.overlay_ms, 200);
		assert_eq!(config.settle.after_load_ms, 1000);
		assert_eq!(config.target.url, "http://localhost:8080/");
		assert_eq!(config.target.output_heading, "Sinhala");
		assert!(!config.headless);
	}

	#[test]
	fn url_flag_beats_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, r#"{{"target": {{"url": "http://localhost:8080/"}}}}"#).unwrap();
		let path = file.path().to_str().unwrap();

		let config = Config::resolve(&parse(&["--config", path, "--url", "http://127.0.0.1:3000/", "list"])).unwrap();
		assert_eq!(config.target.url, "http://127.0.0.1:3000/");
	}

	#[test]
	fn malformed_file_names_path() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "{{ not json").unwrap();
		let path = file.path().to_str().unwrap();

		let err = Config::resolve(&parse(&["--config", path, "list"])).unwrap_err();
		assert!(matches!(err, CliError::ConfigParse { .. }));
		assert!(err.to_string().contains(path));
	}

	#[test]
	fn missing_file_is_read_error() {
		let err = Config::from_file(Path::new("/nonexistent/swiftcheck.json")).unwrap_err();
		assert!(matches!(err, CliError::ConfigRead { .. }));
	}
}
