//! swiftcheck: end-to-end checks for the swifttranslator.com Singlish to
//! Sinhala transliterator.
//!
//! The crate is engine-agnostic. A browser binding implements the traits in
//! [`page`]; everything else (settling, extraction strategies, the case
//! catalog, the runner and reporting) works against those traits.
//!
//! # Example
//!
//! ```ignore
//! use swiftcheck::{Runner, Selection, Settle, TargetPage, Translator};
//!
//! async fn run_all(sessions: &dyn swiftcheck::SessionFactory) -> swiftcheck::Summary {
//!     let translator = Translator::new(TargetPage::default(), Settle::default());
//!     let plan = Selection::default().plan();
//!     Runner::new(sessions, &translator).run(&plan).await
//! }
//! ```

pub mod cases;
pub mod error;
pub mod extract;
pub mod page;
pub mod report;
pub mod runner;
pub mod settle;
pub mod strategy;
pub mod target;
pub mod translate;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use cases::{CaseKind, Fixture, Planned, Selection, TestCase, catalog, find};
pub use error::{Error, Result};
pub use extract::{Extraction, Extractor};
pub use page::{LocatorLike, PageLike, SessionFactory, SessionLike};
pub use report::{CaseOutcome, Divergence, Status, Summary, first_divergence};
pub use runner::Runner;
pub use settle::{Phase, Settle};
pub use strategy::{AnchoredPanel, HeadingSibling, Strategy, strip_boilerplate};
pub use target::{DEFAULT_URL, Point, TargetPage};
pub use translate::{DEFAULT_NAVIGATION_TIMEOUT, Translator};
