//! Per-case outcomes and run summaries.

use serde::Serialize;

use crate::cases::TestCase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
	Passed,
	/// Extracted output differs from the expected literal.
	Mismatch,
	/// Navigation, session or locator failure before a comparison was possible.
	Error,
	Skipped,
}

impl Status {
	pub fn is_failure(&self) -> bool {
		matches!(self, Status::Mismatch | Status::Error)
	}
}

impl std::fmt::Display for Status {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Status::Passed => write!(f, "PASS"),
			Status::Mismatch => write!(f, "FAIL"),
			Status::Error => write!(f, "ERROR"),
			Status::Skipped => write!(f, "SKIP"),
		}
	}
}

/// First character position where expected and actual differ.
///
/// A `None` side means that string ended before the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Divergence {
	pub char_index: usize,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub expected: Option<char>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub actual: Option<char>,
}

impl std::fmt::Display for Divergence {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let show = |c: Option<char>| match c {
			Some(c) => format!("'{c}' (U+{:04X})", c as u32),
			None => "<end>".to_string(),
		};
		write!(f, "at char {}: expected {}, got {}", self.char_index, show(self.expected), show(self.actual))
	}
}

/// Compares by Unicode scalar value, without any normalization.
pub fn first_divergence(expected: &str, actual: &str) -> Option<Divergence> {
	let mut exp = expected.chars();
	let mut act = actual.chars();
	let mut char_index = 0;

	loop {
		match (exp.next(), act.next()) {
			(None, None) => return None,
			(e, a) if e == a => char_index += 1,
			(expected, actual) => {
				return Some(Divergence {
					char_index,
					expected,
					actual,
				});
			}
		}
	}
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseOutcome {
	pub id: String,
	pub description: String,
	pub input: String,
	pub expected: String,
	pub actual: String,
	pub status: Status,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub strategy: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub divergence: Option<Divergence>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
	pub duration_ms: u64,
}

impl CaseOutcome {
	/// Exact comparison of `actual` against the case's expected literal.
	pub fn compared(case: &TestCase, actual: String, strategy: Option<&str>, duration_ms: u64) -> Self {
		let divergence = first_divergence(case.expected, &actual);
		let status = if divergence.is_none() { Status::Passed } else { Status::Mismatch };
		Self {
			strategy: strategy.map(String::from),
			divergence,
			actual,
			status,
			duration_ms,
			..Self::blank(case)
		}
	}

	/// The case could not be compared; `actual` is reported as empty.
	pub fn errored(case: &TestCase, error: impl std::fmt::Display, duration_ms: u64) -> Self {
		Self {
			status: Status::Error,
			divergence: first_divergence(case.expected, ""),
			error: Some(error.to_string()),
			duration_ms,
			..Self::blank(case)
		}
	}

	pub fn skipped(case: &TestCase) -> Self {
		Self {
			status: Status::Skipped,
			..Self::blank(case)
		}
	}

	fn blank(case: &TestCase) -> Self {
		Self {
			id: case.id.to_string(),
			description: case.description.to_string(),
			input: case.input.to_string(),
			expected: case.expected.to_string(),
			actual: String::new(),
			status: Status::Skipped,
			strategy: None,
			divergence: None,
			error: None,
			duration_ms: 0,
		}
	}
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
	pub total: usize,
	pub passed: usize,
	pub failed: usize,
	pub errored: usize,
	pub skipped: usize,
	pub cases: Vec<CaseOutcome>,
}

impl Summary {
	pub fn push(&mut self, outcome: CaseOutcome) {
		self.total += 1;
		match outcome.status {
			Status::Passed => self.passed += 1,
			Status::Mismatch => self.failed += 1,
			Status::Error => self.errored += 1,
			Status::Skipped => self.skipped += 1,
		}
		self.cases.push(outcome);
	}

	pub fn all_passed(&self) -> bool {
		self.failed == 0 && self.errored == 0
	}

	pub fn exit_code(&self) -> i32 {
		if self.all_passed() { 0 } else { 1 }
	}
}

impl FromIterator<CaseOutcome> for Summary {
	fn from_iter<I: IntoIterator<Item = CaseOutcome>>(iter: I) -> Self {
		let mut summary = Summary::default();
		for outcome in iter {
			summary.push(outcome);
		}
		summary
	}
}
