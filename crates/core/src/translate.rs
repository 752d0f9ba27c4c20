use std::time::Duration;

use tracing::{debug, info};

use crate::error::Result;
use crate::extract::{Extraction, Extractor};
use crate::page::PageLike;
use crate::settle::{Phase, Settle};
use crate::target::TargetPage;

pub const DEFAULT_NAVIGATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Drives one translation on a page: load, type, wait, extract.
pub struct Translator {
	target: TargetPage,
	settle: Settle,
	navigation_timeout: Duration,
	extractor: Extractor,
}

impl Translator {
	pub fn new(target: TargetPage, settle: Settle) -> Self {
		let extractor = Extractor::new(&target, settle);
		Self {
			target,
			settle,
			navigation_timeout: DEFAULT_NAVIGATION_TIMEOUT,
			extractor,
		}
	}

	pub fn with_navigation_timeout(mut self, timeout: Duration) -> Self {
		self.navigation_timeout = timeout;
		self
	}

	pub fn with_extractor(mut self, extractor: Extractor) -> Self {
		self.extractor = extractor;
		self
	}

	pub fn target(&self) -> &TargetPage {
		&self.target
	}

	pub fn settle(&self) -> &Settle {
		&self.settle
	}

	/// Loads the target page and returns what it renders for `input`.
	///
	/// Navigation errors are returned as-is; they are fatal to the case.
	pub async fn translate(&self, page: &dyn PageLike, input: &str) -> Result<Extraction> {
		info!(target = "swiftcheck", url = %self.target.url, "load target page");
		page.goto(&self.target.url, self.navigation_timeout).await?;
		self.settle.pause(Phase::AfterLoad).await;

		self.enter(page, input).await?;
		self.extractor.extract(page).await
	}

	/// Types `input` into the page's input field and waits out the debounce.
	pub async fn enter(&self, page: &dyn PageLike, input: &str) -> Result<()> {
		let field = page.locator(&self.target.input_selector());
		field.click().await?;
		field.fill(input).await?;
		debug!(target = "swiftcheck", chars = input.chars().count(), "input filled");
		self.settle.pause(Phase::Debounce).await;
		Ok(())
	}
}
