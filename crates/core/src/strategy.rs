//! Output extraction strategies.
//!
//! Each strategy maps the current page state to `Ok(Some(text))` when it
//! read output, `Ok(None)` when it found nothing usable, or an error when
//! its locator failed. The extractor tries them in order and only moves on
//! after `Ok(None)` or a recoverable error.

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::page::{PageLike, text_within};
use crate::settle::Settle;
use crate::target::TargetPage;

#[async_trait]
pub trait Strategy: Send + Sync {
	/// Short stable name, reported with the extraction result.
	fn name(&self) -> &'static str;

	async fn extract(&self, page: &dyn PageLike, settle: &Settle) -> Result<Option<String>>;
}

/// Reads the sibling that follows the output heading.
///
/// Returns whatever the sibling holds, verbatim. An empty or blank read is
/// still the page's output and does not trigger the fallback.
#[derive(Debug, Clone)]
pub struct HeadingSibling {
	selector: String,
}

impl HeadingSibling {
	pub fn new(target: &TargetPage) -> Self {
		Self {
			selector: target.output_selector(),
		}
	}
}

#[async_trait]
impl Strategy for HeadingSibling {
	fn name(&self) -> &'static str {
		"heading-sibling"
	}

	async fn extract(&self, page: &dyn PageLike, settle: &Settle) -> Result<Option<String>> {
		let locator = page.locator(&self.selector);
		let text = text_within(locator.as_ref(), settle.read_timeout(), settle.poll_interval()).await?;
		Ok(Some(text))
	}
}

/// Reads the whole output panel, located through its Copy button, and strips
/// the panel's own labels from the text.
#[derive(Debug, Clone)]
pub struct AnchoredPanel {
	selector: String,
	boilerplate: Vec<String>,
}

impl AnchoredPanel {
	pub fn new(target: &TargetPage) -> Self {
		Self {
			selector: target.panel_selector(),
			boilerplate: target.boilerplate(),
		}
	}
}

#[async_trait]
impl Strategy for AnchoredPanel {
	fn name(&self) -> &'static str {
		"copy-anchored-panel"
	}

	async fn extract(&self, page: &dyn PageLike, settle: &Settle) -> Result<Option<String>> {
		let locator = page.locator(&self.selector);
		let raw = text_within(locator.as_ref(), settle.panel_timeout(), settle.poll_interval()).await?;
		let stripped = strip_boilerplate(&raw, &self.boilerplate);
		debug!(target = "swiftcheck", raw_len = raw.len(), stripped = %stripped, "panel text");
		Ok((!stripped.is_empty()).then_some(stripped))
	}
}

/// Removes every occurrence of each literal, in order, then trims.
///
/// Callers pass literals longest first so that a concatenation such as
/// `CopyClear` goes before its parts.
pub fn strip_boilerplate(raw: &str, literals: &[String]) -> String {
	let mut text = raw.to_string();
	for literal in literals.iter().filter(|l| !l.is_empty()) {
		text = text.replace(literal.as_str(), "");
	}
	text.trim().to_string()
}

/// Primary then fallback, as used against the live page.
pub fn default_strategies(target: &TargetPage) -> Vec<Box<dyn Strategy>> {
	vec![Box::new(HeadingSibling::new(target)), Box::new(AnchoredPanel::new(target))]
}
