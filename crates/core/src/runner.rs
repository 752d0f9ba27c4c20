//! Sequential case runner.
//!
//! Each case gets its own session and a freshly loaded page. A failing case
//! never stops the run; its outcome records the error instead.

use std::time::Instant;

use tracing::{info, warn};

use crate::cases::{Planned, TestCase};
use crate::error::Result;
use crate::page::SessionFactory;
use crate::report::{CaseOutcome, Status, Summary};
use crate::translate::Translator;

pub struct Runner<'a> {
	sessions: &'a dyn SessionFactory,
	translator: &'a Translator,
}

impl<'a> Runner<'a> {
	pub fn new(sessions: &'a dyn SessionFactory, translator: &'a Translator) -> Self {
		Self { sessions, translator }
	}

	/// Runs planned cases in order and collects their outcomes.
	pub async fn run(&self, plan: &[Planned]) -> Summary {
		let mut summary = Summary::default();
		for planned in plan {
			let outcome = if planned.skip {
				info!(target = "swiftcheck", id = planned.case.id, "skipped suspect fixture");
				CaseOutcome::skipped(planned.case)
			} else {
				self.run_case(planned.case).await
			};
			summary.push(outcome);
		}
		info!(
			target = "swiftcheck",
			total = summary.total,
			passed = summary.passed,
			failed = summary.failed,
			errored = summary.errored,
			skipped = summary.skipped,
			"run finished"
		);
		summary
	}

	pub async fn run_case(&self, case: &TestCase) -> CaseOutcome {
		let started = Instant::now();
		let result = self.extract_in_fresh_session(case.input).await;
		let elapsed = started.elapsed().as_millis() as u64;

		let outcome = match result {
			Ok((text, strategy)) => CaseOutcome::compared(case, text, strategy, elapsed),
			Err(err) => CaseOutcome::errored(case, &err, elapsed),
		};

		info!(
			target = "swiftcheck",
			id = case.id,
			input = case.input,
			expected = case.expected,
			actual = %outcome.actual,
			status = %outcome.status,
			"case finished"
		);
		if outcome.status == Status::Error {
			warn!(target = "swiftcheck", id = case.id, error = outcome.error.as_deref().unwrap_or_default(), "case errored");
		}
		outcome
	}

	async fn extract_in_fresh_session(&self, input: &str) -> Result<(String, Option<&'static str>)> {
		let session = self.sessions.open().await?;
		let result = self.translator.translate(session.page(), input).await;
		if let Err(err) = session.close().await {
			warn!(target = "swiftcheck", error = %err, "session close failed");
		}
		let extraction = result?;
		Ok((extraction.text, extraction.strategy))
	}
}
