use async_trait::async_trait;
use pw::Playwright;
use swiftcheck::{Error, PageLike, Result, SessionFactory, SessionLike};
use tracing::{debug, warn};

use super::{PwPage, engine_error};
use crate::config::BrowserKind;

/// Launches a new browser for every session so cases never share state.
#[derive(Debug, Clone, Copy)]
pub struct PwSessionFactory {
	browser: BrowserKind,
	headless: bool,
}

impl PwSessionFactory {
	pub fn new(browser: BrowserKind, headless: bool) -> Self {
		Self { browser, headless }
	}
}

#[async_trait]
impl SessionFactory for PwSessionFactory {
	async fn open(&self) -> Result<Box<dyn SessionLike>> {
		debug!(target = "swiftcheck", browser = %self.browser, headless = self.headless, "launching session");

		let playwright = Playwright::launch()
			.await
			.map_err(|e| Error::Session(format!("browser launch failed: {e}")))?;

		let launch_options = pw::LaunchOptions {
			headless: Some(self.headless),
			..Default::default()
		};
		let browser = match self.browser {
			BrowserKind::Chromium => playwright.chromium().launch_with_options(launch_options).await,
			BrowserKind::Firefox => playwright.firefox().launch_with_options(launch_options).await,
			BrowserKind::Webkit => playwright.webkit().launch_with_options(launch_options).await,
		}
		.map_err(|e| Error::Session(format!("{} launch failed: {e}", self.browser)))?;

		let context = browser.new_context().await.map_err(engine_error)?;
		let page = context.new_page().await.map_err(engine_error)?;

		Ok(Box::new(PwSession {
			_playwright: playwright,
			browser,
			context,
			page: PwPage::new(page),
		}))
	}
}

pub struct PwSession {
	_playwright: Playwright,
	browser: pw::Browser,
	context: pw::BrowserContext,
	page: PwPage,
}

#[async_trait]
impl SessionLike for PwSession {
	fn page(&self) -> &dyn PageLike {
		&self.page
	}

	async fn close(self: Box<Self>) -> Result<()> {
		if let Err(err) = self.context.close().await {
			warn!(target = "swiftcheck", error = %err, "context close failed");
		}
		self.browser.close().await.map_err(engine_error)
	}
}
