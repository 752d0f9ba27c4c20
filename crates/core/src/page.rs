//! Automation engine seam.
//!
//! The extractor never talks to a browser binding directly. It works against
//! these traits, which mirror the small subset of Playwright used here:
//! - [`PageLike`]: navigation and locator creation
//! - [`LocatorLike`]: count, click, fill, text content
//! - [`SessionLike`]: a browser session owning one page
//! - [`SessionFactory`]: opens a fresh session per case
//!
//! The CLI implements them over `pw-rs`; [`crate::testing`] provides mocks.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{Error, Result};

/// Abstracts page operations.
#[async_trait]
pub trait PageLike: Send + Sync {
	/// Returns the current URL of the page.
	fn url(&self) -> String;

	/// Navigates to `url` and waits for network quiescence, bounded by `timeout`.
	async fn goto(&self, url: &str, timeout: Duration) -> Result<()>;

	/// Creates a [`LocatorLike`] for a Playwright selector string.
	fn locator(&self, selector: &str) -> Box<dyn LocatorLike + '_>;
}

/// Abstracts locator operations.
///
/// Locators are lazy: creating one never fails, resolution happens on use.
#[async_trait]
pub trait LocatorLike: Send + Sync {
	/// Returns the selector string used to create this locator.
	fn selector(&self) -> &str;

	/// Returns the number of elements currently matching the selector.
	async fn count(&self) -> Result<usize>;

	/// Clicks the first matching element.
	async fn click(&self) -> Result<()>;

	/// Clicks the first matching element at `(x, y)` relative to its padding box.
	async fn click_at(&self, x: f64, y: f64) -> Result<()>;

	/// Types `text` into an input element, replacing any existing value.
	async fn fill(&self, text: &str) -> Result<()>;

	/// Returns the `textContent` of the first matching element, or [`None`] if not found.
	async fn text_content(&self) -> Result<Option<String>>;
}

/// Abstracts one browser session with a single active page.
#[async_trait]
pub trait SessionLike: Send + Sync {
	fn page(&self) -> &dyn PageLike;

	/// Closes the session and releases browser resources.
	async fn close(self: Box<Self>) -> Result<()>;
}

/// Opens isolated sessions, one per test case.
#[async_trait]
pub trait SessionFactory: Send + Sync {
	async fn open(&self) -> Result<Box<dyn SessionLike>>;
}

/// Reads `textContent` once the locator resolves, polling its count until `timeout`.
///
/// Fails with [`Error::Timeout`] when nothing matches in time. A matched
/// element without text content reads as an empty string.
pub async fn text_within(locator: &dyn LocatorLike, timeout: Duration, poll: Duration) -> Result<String> {
	let selector = locator.selector().to_string();
	let deadline = tokio::time::Instant::now() + timeout;

	loop {
		if locator.count().await? > 0 {
			let text = locator.text_content().await?;
			debug!(target = "swiftcheck", selector = %selector, found = text.is_some(), "read text content");
			return Ok(text.unwrap_or_default());
		}

		if tokio::time::Instant::now() >= deadline {
			return Err(Error::Timeout {
				ms: timeout.as_millis() as u64,
				condition: selector,
			});
		}

		tokio::time::sleep(poll).await;
	}
}
