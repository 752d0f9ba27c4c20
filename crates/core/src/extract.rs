//! Output extractor.
//!
//! Turns "the input has been typed" into "the plain-text translation the
//! page currently shows": dismiss the suggestion overlay, then try each
//! [`Strategy`] in order until one yields text.
//!
//! Failure routing:
//! * a recoverable locator error (timeout, not found) from any strategy
//!   but the last moves on to the next strategy
//! * the same error from the last strategy propagates
//! * strategies that all come back empty produce `""`, never an error

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::page::PageLike;
use crate::settle::{Phase, Settle};
use crate::strategy::{Strategy, default_strategies};
use crate::target::{Point, TargetPage};

/// Text read from the page plus the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Extraction {
	pub text: String,
	/// `None` when every strategy came back empty.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub strategy: Option<&'static str>,
}

impl Extraction {
	pub fn empty() -> Self {
		Self { text: String::new(), strategy: None }
	}
}

pub struct Extractor {
	strategies: Vec<Box<dyn Strategy>>,
	settle: Settle,
	dismiss_selector: String,
	dismiss_at: Point,
}

impl Extractor {
	/// Extractor with the primary and fallback strategies for `target`.
	pub fn new(target: &TargetPage, settle: Settle) -> Self {
		Self::with_strategies(target, settle, default_strategies(target))
	}

	pub fn with_strategies(target: &TargetPage, settle: Settle, strategies: Vec<Box<dyn Strategy>>) -> Self {
		Self {
			strategies,
			settle,
			dismiss_selector: target.dismiss_selector.clone(),
			dismiss_at: target.dismiss_at,
		}
	}

	pub fn strategy_names(&self) -> Vec<&'static str> {
		self.strategies.iter().map(|s| s.name()).collect()
	}

	/// Clicks a neutral spot so any open suggestion overlay closes.
	///
	/// Clicking with no overlay open leaves the page unchanged.
	pub async fn dismiss_overlay(&self, page: &dyn PageLike) -> Result<()> {
		let Point { x, y } = self.dismiss_at;
		page.locator(&self.dismiss_selector).click_at(x, y).await?;
		self.settle.pause(Phase::Overlay).await;
		Ok(())
	}

	pub async fn extract(&self, page: &dyn PageLike) -> Result<Extraction> {
		self.dismiss_overlay(page).await?;
		self.read(page).await
	}

	/// Runs the strategy list without dismissing the overlay first.
	pub async fn read(&self, page: &dyn PageLike) -> Result<Extraction> {
		let last = self.strategies.len().saturating_sub(1);

		for (idx, strategy) in self.strategies.iter().enumerate() {
			match strategy.extract(page, &self.settle).await {
				Ok(Some(text)) => {
					debug!(target = "swiftcheck", strategy = strategy.name(), "extracted output");
					return Ok(Extraction {
						text,
						strategy: Some(strategy.name()),
					});
				}
				Ok(None) => {
					debug!(target = "swiftcheck", strategy = strategy.name(), "strategy found no text");
				}
				Err(err) if idx < last && err.is_recoverable() => {
					warn!(target = "swiftcheck", strategy = strategy.name(), error = %err, "strategy failed, falling back");
				}
				Err(err) => return Err(err),
			}
		}

		Ok(Extraction::empty())
	}
}

#[cfg(test)]
mod tests {
	use async_trait::async_trait;

	use super::*;
	use crate::error::Error;
	use crate::testing::{MockAction, MockPage};

	fn extractor() -> (TargetPage, Extractor) {
		let target = TargetPage::default();
		let extractor = Extractor::new(&target, Settle::instant());
		(target, extractor)
	}

	#[tokio::test]
	async fn primary_wins_when_present() {
		let (target, extractor) = extractor();
		let page = MockPage::new();
		page.set_text_for_selector(&target.output_selector(), "හරි හරි");
		page.set_text_for_selector(&target.panel_selector(), "SinhalaignoredCopyClear");

		let out = extractor.extract(&page).await.unwrap();
		assert_eq!(out.text, "හරි හරි");
		assert_eq!(out.strategy, Some("heading-sibling"));
	}

	#[tokio::test]
	async fn falls_back_when_primary_times_out() {
		let (target, extractor) = extractor();
		let page = MockPage::new();
		page.set_text_for_selector(&target.panel_selector(), "Sinhalaසුබ දවසක්!CopyClear");

		let out = extractor.extract(&page).await.unwrap();
		assert_eq!(out.text, "සුබ දවසක්!");
		assert_eq!(out.strategy, Some("copy-anchored-panel"));
	}

	#[tokio::test]
	async fn fallback_failure_propagates() {
		let (_, extractor) = extractor();
		let page = MockPage::new();

		let err = extractor.extract(&page).await.unwrap_err();
		assert!(matches!(err, Error::Timeout { ref condition, .. } if *condition == TargetPage::default().panel_selector()));
	}

	#[tokio::test]
	async fn empty_primary_is_returned_without_fallback() {
		let (target, extractor) = extractor();
		let page = MockPage::new();
		page.set_text_for_selector(&target.output_selector(), "");

		let out = extractor.extract(&page).await.unwrap();
		assert_eq!(out.text, "");
		assert_eq!(out.strategy, Some("heading-sibling"));
	}

	#[tokio::test]
	async fn blank_primary_is_kept_verbatim() {
		let (target, extractor) = extractor();
		let page = MockPage::new();
		page.set_text_for_selector(&target.output_selector(), "  ");
		page.set_text_for_selector(&target.panel_selector(), "Sinhala  CopyClear");

		let out = extractor.extract(&page).await.unwrap();
		assert_eq!(out.text, "  ");
		assert_eq!(out.strategy, Some("heading-sibling"));
	}

	#[tokio::test]
	async fn nothing_usable_is_empty_string() {
		let (target, extractor) = extractor();
		let page = MockPage::new();
		page.set_text_for_selector(&target.panel_selector(), "SinhalaCopyClear");

		let out = extractor.extract(&page).await.unwrap();
		assert_eq!(out, Extraction::empty());
	}

	#[tokio::test]
	async fn overlay_is_dismissed_before_reading() {
		let (target, extractor) = extractor();
		let page = MockPage::new();
		page.set_text_for_selector(&target.output_selector(), "මම යනවා.");
		page.open_overlay();

		let out = extractor.extract(&page).await.unwrap();
		assert_eq!(out.text, "මම යනවා.");
		assert_eq!(
			page.actions(),
			vec![MockAction::ClickAt {
				selector: "body".into(),
				x: 10.0,
				y: 10.0
			}]
		);
	}

	#[tokio::test]
	async fn dismissal_is_idempotent() {
		let (target, extractor) = extractor();
		let page = MockPage::new();
		page.set_text_for_selector(&target.output_selector(), "1/26/2026");

		let first = extractor.extract(&page).await.unwrap();
		extractor.dismiss_overlay(&page).await.unwrap();
		let second = extractor.extract(&page).await.unwrap();
		assert_eq!(first, second);
		assert!(!page.overlay_open());
	}

	struct Fixed(&'static str, Option<&'static str>);

	#[async_trait]
	impl Strategy for Fixed {
		fn name(&self) -> &'static str {
			self.0
		}

		async fn extract(&self, _page: &dyn PageLike, _settle: &Settle) -> Result<Option<String>> {
			Ok(self.1.map(String::from))
		}
	}

	struct Broken;

	#[async_trait]
	impl Strategy for Broken {
		fn name(&self) -> &'static str {
			"broken"
		}

		async fn extract(&self, _page: &dyn PageLike, _settle: &Settle) -> Result<Option<String>> {
			Err(Error::engine("target closed"))
		}
	}

	#[tokio::test]
	async fn third_strategy_is_a_data_change() {
		let target = TargetPage::default();
		let strategies: Vec<Box<dyn Strategy>> = vec![Box::new(Fixed("a", None)), Box::new(Fixed("b", None)), Box::new(Fixed("c", Some("ok")))];
		let extractor = Extractor::with_strategies(&target, Settle::instant(), strategies);

		let out = extractor.read(&MockPage::new()).await.unwrap();
		assert_eq!(out.strategy, Some("c"));
		assert_eq!(extractor.strategy_names(), vec!["a", "b", "c"]);
	}

	#[tokio::test]
	async fn unrecoverable_error_skips_fallback() {
		let target = TargetPage::default();
		let strategies: Vec<Box<dyn Strategy>> = vec![Box::new(Broken), Box::new(Fixed("never", Some("x")))];
		let extractor = Extractor::with_strategies(&target, Settle::instant(), strategies);

		let err = extractor.read(&MockPage::new()).await.unwrap_err();
		assert!(matches!(err, Error::Engine(_)));
	}

	#[tokio::test]
	async fn no_strategies_is_empty() {
		let extractor = Extractor::with_strategies(&TargetPage::default(), Settle::instant(), Vec::new());
		assert_eq!(extractor.read(&MockPage::new()).await.unwrap(), Extraction::empty());
	}
}
