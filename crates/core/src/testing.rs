//! Mock implementations of the engine seam.
//!
//! Lets the extractor, translate flow and runner be tested without a
//! browser. Configure responses with `set_*` methods, then assert on
//! recorded [`MockAction`]s.
//!
//! # Example
//!
//! ```ignore
//! use swiftcheck::testing::{MockAction, MockPage};
//!
//! let page = MockPage::new();
//! page.set_text_for_selector("#out", "හරි හරි");
//! // ... run an extractor against &page
//! assert!(page.actions().iter().any(|a| matches!(a, MockAction::ClickAt { .. })));
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::page::{LocatorLike, PageLike, SessionFactory, SessionLike};

type FillHook = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Action recorded by [`MockPage`] for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum MockAction {
	Goto { url: String },
	Click { selector: String },
	ClickAt { selector: String, x: f64, y: f64 },
	Fill { selector: String, text: String },
}

/// Mock page with per-selector text and counts.
///
/// An optional overlay hides every selector (count 0) until a positioned
/// click dismisses it, modelling the suggestion panel on the live page.
#[derive(Default)]
pub struct MockPage {
	url: Mutex<String>,
	text_by_selector: Mutex<HashMap<String, String>>,
	count_by_selector: Mutex<HashMap<String, usize>>,
	hidden_polls: Mutex<HashMap<String, usize>>,
	goto_error: Mutex<Option<String>>,
	overlay_open: Mutex<bool>,
	fill_hook: Mutex<Option<(String, FillHook)>>,
	actions: Mutex<Vec<MockAction>>,
}

impl MockPage {
	/// Creates a new mock page at `about:blank`.
	pub fn new() -> Self {
		let page = Self::default();
		*page.url.lock() = "about:blank".to_string();
		page
	}

	/// Sets text content for a selector (also sets count to 1 if unset).
	pub fn set_text_for_selector(&self, selector: &str, text: &str) {
		self.text_by_selector.lock().insert(selector.to_string(), text.to_string());
		self.count_by_selector.lock().entry(selector.to_string()).or_insert(1);
	}

	/// Sets element count for a selector.
	pub fn set_count_for_selector(&self, selector: &str, count: usize) {
		self.count_by_selector.lock().insert(selector.to_string(), count);
	}

	/// Makes `selector` report zero matches for its first `polls` count queries.
	pub fn set_appear_after_polls(&self, selector: &str, polls: usize) {
		self.hidden_polls.lock().insert(selector.to_string(), polls);
	}

	/// Makes the next [`PageLike::goto`] fail with `message`.
	pub fn fail_goto(&self, message: &str) {
		*self.goto_error.lock() = Some(message.to_string());
	}

	/// Opens an overlay that hides all elements until a positioned click.
	pub fn open_overlay(&self) {
		*self.overlay_open.lock() = true;
	}

	pub fn overlay_open(&self) -> bool {
		*self.overlay_open.lock()
	}

	/// On every fill, writes `render(text)` as the text of `output_selector`.
	pub fn render_fills_into(&self, output_selector: &str, render: impl Fn(&str) -> String + Send + Sync + 'static) {
		*self.fill_hook.lock() = Some((output_selector.to_string(), Box::new(render)));
	}

	/// Returns all recorded actions.
	pub fn actions(&self) -> Vec<MockAction> {
		self.actions.lock().clone()
	}

	pub fn clear_actions(&self) {
		self.actions.lock().clear();
	}

	fn record_action(&self, action: MockAction) {
		self.actions.lock().push(action);
	}

	fn count_for(&self, selector: &str) -> usize {
		if *self.overlay_open.lock() {
			return 0;
		}
		let mut hidden = self.hidden_polls.lock();
		if let Some(remaining) = hidden.get_mut(selector) {
			if *remaining > 0 {
				*remaining -= 1;
				return 0;
			}
		}
		self.count_by_selector.lock().get(selector).copied().unwrap_or(0)
	}

	fn text_for(&self, selector: &str) -> Option<String> {
		if *self.overlay_open.lock() {
			return None;
		}
		self.text_by_selector.lock().get(selector).cloned()
	}
}

#[async_trait]
impl PageLike for MockPage {
	fn url(&self) -> String {
		self.url.lock().clone()
	}

	async fn goto(&self, url: &str, _timeout: Duration) -> Result<()> {
		self.record_action(MockAction::Goto { url: url.to_string() });
		if let Some(message) = self.goto_error.lock().take() {
			return Err(Error::Navigation {
				url: url.to_string(),
				source: anyhow::anyhow!(message),
			});
		}
		*self.url.lock() = url.to_string();
		Ok(())
	}

	fn locator(&self, selector: &str) -> Box<dyn LocatorLike + '_> {
		Box::new(MockLocator {
			selector: selector.to_string(),
			page: self,
		})
	}
}

/// Mock locator returned by [`MockPage::locator()`].
pub struct MockLocator<'a> {
	selector: String,
	page: &'a MockPage,
}

#[async_trait]
impl LocatorLike for MockLocator<'_> {
	fn selector(&self) -> &str {
		&self.selector
	}

	async fn count(&self) -> Result<usize> {
		Ok(self.page.count_for(&self.selector))
	}

	async fn click(&self) -> Result<()> {
		self.page.record_action(MockAction::Click {
			selector: self.selector.clone(),
		});
		Ok(())
	}

	async fn click_at(&self, x: f64, y: f64) -> Result<()> {
		self.page.record_action(MockAction::ClickAt {
			selector: self.selector.clone(),
			x,
			y,
		});
		*self.page.overlay_open.lock() = false;
		Ok(())
	}

	async fn fill(&self, text: &str) -> Result<()> {
		self.page.record_action(MockAction::Fill {
			selector: self.selector.clone(),
			text: text.to_string(),
		});
		if let Some((output, render)) = self.page.fill_hook.lock().as_ref() {
			let rendered = render(text);
			self.page.set_text_for_selector(output, &rendered);
		}
		Ok(())
	}

	async fn text_content(&self) -> Result<Option<String>> {
		Ok(self.page.text_for(&self.selector))
	}
}

/// Mock session wrapping a [`MockPage`].
pub struct MockSession {
	page: Arc<MockPage>,
	closed: Arc<AtomicUsize>,
}

impl MockSession {
	pub fn new(page: MockPage) -> Self {
		Self {
			page: Arc::new(page),
			closed: Arc::new(AtomicUsize::new(0)),
		}
	}

	pub fn mock_page(&self) -> &MockPage {
		&self.page
	}
}

#[async_trait]
impl SessionLike for MockSession {
	fn page(&self) -> &dyn PageLike {
		self.page.as_ref()
	}

	async fn close(self: Box<Self>) -> Result<()> {
		self.closed.fetch_add(1, Ordering::SeqCst);
		Ok(())
	}
}

/// Opens a freshly built [`MockPage`] per session and counts open/close calls.
pub struct MockSessionFactory {
	build: Box<dyn Fn() -> MockPage + Send + Sync>,
	opened: AtomicUsize,
	closed: Arc<AtomicUsize>,
	fail_open: Mutex<Option<String>>,
}

impl MockSessionFactory {
	pub fn new(build: impl Fn() -> MockPage + Send + Sync + 'static) -> Self {
		Self {
			build: Box::new(build),
			opened: AtomicUsize::new(0),
			closed: Arc::new(AtomicUsize::new(0)),
			fail_open: Mutex::new(None),
		}
	}

	/// Makes every subsequent [`SessionFactory::open`] fail with `message`.
	pub fn fail_open(&self, message: &str) {
		*self.fail_open.lock() = Some(message.to_string());
	}

	pub fn opened(&self) -> usize {
		self.opened.load(Ordering::SeqCst)
	}

	pub fn closed(&self) -> usize {
		self.closed.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl SessionFactory for MockSessionFactory {
	async fn open(&self) -> Result<Box<dyn SessionLike>> {
		if let Some(message) = self.fail_open.lock().clone() {
			return Err(Error::Session(message));
		}
		self.opened.fetch_add(1, Ordering::SeqCst);
		Ok(Box::new(MockSession {
			page: Arc::new((self.build)()),
			closed: Arc::clone(&self.closed),
		}))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn overlay_hides_elements_until_positioned_click() {
		let page = MockPage::new();
		page.set_text_for_selector("#out", "මම");
		page.open_overlay();

		assert_eq!(page.locator("#out").count().await.unwrap(), 0);
		page.locator("body").click_at(10.0, 10.0).await.unwrap();
		assert!(!page.overlay_open());
		assert_eq!(page.locator("#out").count().await.unwrap(), 1);
	}

	#[tokio::test]
	async fn fill_hook_renders_output() {
		let page = MockPage::new();
		page.render_fills_into("#out", |text| text.to_uppercase());

		page.locator("input").fill("abc").await.unwrap();
		assert_eq!(page.locator("#out").text_content().await.unwrap(), Some("ABC".to_string()));
		assert_eq!(
			page.actions(),
			vec![MockAction::Fill {
				selector: "input".into(),
				text: "abc".into()
			}]
		);
	}

	#[tokio::test]
	async fn goto_failure_is_navigation_error() {
		let page = MockPage::new();
		page.fail_goto("net::ERR_CONNECTION_REFUSED");

		let err = page.goto("https://example.com", Duration::from_secs(1)).await.unwrap_err();
		assert!(matches!(err, Error::Navigation { .. }));
		assert_eq!(page.url(), "about:blank");

		page.goto("https://example.com", Duration::from_secs(1)).await.unwrap();
		assert_eq!(page.url(), "https://example.com");
	}

	#[tokio::test]
	async fn factory_tracks_sessions() {
		let factory = MockSessionFactory::new(MockPage::new);
		let session = factory.open().await.unwrap();
		assert_eq!(session.page().url(), "about:blank");
		session.close().await.unwrap();

		assert_eq!(factory.opened(), 1);
		assert_eq!(factory.closed(), 1);
	}
}
