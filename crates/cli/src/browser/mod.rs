//! `pw-rs` binding for the page seam in [`swiftcheck::page`].

mod page;
mod session;

pub use page::{PwLocator, PwPage};
pub use session::{PwSession, PwSessionFactory};

/// Wraps a Playwright error so it travels through the core error type.
///
/// Selector misses become [`swiftcheck::Error::ElementNotFound`] so the
/// extractor can fall back on them.
pub(crate) fn engine_error(err: pw::Error) -> swiftcheck::Error {
	match err {
		pw::Error::ElementNotFound(selector) => swiftcheck::Error::ElementNotFound { selector },
		other => swiftcheck::Error::Engine(anyhow::Error::new(other)),
	}
}
