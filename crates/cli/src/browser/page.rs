use std::time::Duration;

use async_trait::async_trait;
use pw::{ClickOptions, GotoOptions, Position, WaitUntil};
use swiftcheck::{Error, LocatorLike, PageLike, Result};
use tracing::debug;

use super::engine_error;

pub struct PwPage {
	page: pw::Page,
}

impl PwPage {
	pub fn new(page: pw::Page) -> Self {
		Self { page }
	}
}

#[async_trait]
impl PageLike for PwPage {
	fn url(&self) -> String {
		self.page.url()
	}

	async fn goto(&self, url: &str, timeout: Duration) -> Result<()> {
		debug!(target = "swiftcheck", url, timeout_ms = timeout.as_millis() as u64, "navigating");
		let options = GotoOptions {
			timeout: Some(timeout),
			wait_until: Some(WaitUntil::NetworkIdle),
			..Default::default()
		};
		self.page.goto(url, Some(options)).await.map(|_| ()).map_err(|e| Error::Navigation {
			url: url.to_string(),
			source: anyhow::Error::new(e),
		})
	}

	fn locator(&self, selector: &str) -> Box<dyn LocatorLike + '_> {
		Box::new(PwLocator {
			page: &self.page,
			selector: selector.to_string(),
		})
	}
}

/// Lazy locator: `pw::Page::locator` is async, so the Playwright locator is
/// rebuilt from the selector on every call.
pub struct PwLocator<'a> {
	page: &'a pw::Page,
	selector: String,
}

impl PwLocator<'_> {
	async fn resolve(&self) -> pw::Locator {
		self.page.locator(&self.selector).await
	}
}

#[async_trait]
impl LocatorLike for PwLocator<'_> {
	fn selector(&self) -> &str {
		&self.selector
	}

	async fn count(&self) -> Result<usize> {
		self.resolve().await.count().await.map_err(engine_error)
	}

	async fn click(&self) -> Result<()> {
		self.resolve().await.click(None).await.map_err(engine_error)
	}

	async fn click_at(&self, x: f64, y: f64) -> Result<()> {
		let options = ClickOptions::builder().position(Position { x, y }).build();
		self.resolve().await.click(Some(options)).await.map_err(engine_error)
	}

	async fn fill(&self, text: &str) -> Result<()> {
		self.resolve().await.fill(text, None).await.map_err(engine_error)
	}

	async fn text_content(&self) -> Result<Option<String>> {
		self.resolve().await.text_content().await.map_err(engine_error)
	}
}
