//! `swiftcheck run`: check catalog cases against the live page.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use swiftcheck::{CaseOutcome, Fixture, Runner, Selection, SessionFactory, Status, Summary};
use tracing::info;

use crate::cli::RunArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::{DiagnosticLevel, EffectiveConfig, ErrorCode, OutputFormat, ResultBuilder, TextRender, print_result};

pub async fn execute(args: &RunArgs, config: &Config, sessions: &dyn SessionFactory) -> Result<Summary> {
	let selection = Selection {
		ids: args.ids.clone(),
		filter: args.filter.clone(),
		include_suspect: args.include_suspect,
	};

	let unknown = selection.unknown_ids();
	if !unknown.is_empty() {
		return Err(CliError::UnknownCase {
			ids: unknown.into_iter().map(String::from).collect(),
		});
	}

	let plan = selection.plan();
	info!(
		target = "swiftcheck",
		selected = plan.len(),
		url = %config.target.url,
		browser = %config.browser,
		"running cases"
	);

	let translator = config.translator();
	Ok(Runner::new(sessions, &translator).run(&plan).await)
}

/// Prints the summary; any failing or errored case turns into exit code 1.
pub fn finish(summary: Summary, config: &Config, format: OutputFormat) -> Result<()> {
	let mut builder = ResultBuilder::new("run").config(EffectiveConfig::from(config));

	if summary.total == 0 {
		builder = builder.diagnostic(DiagnosticLevel::Warning, "no cases matched the selection");
	}
	if summary.skipped > 0 {
		builder = builder.diagnostic(
			DiagnosticLevel::Info,
			format!("{} suspect case(s) skipped, pass --include-suspect to run them", summary.skipped),
		);
	}

	let all_passed = summary.all_passed();
	if !all_passed {
		builder = builder.error(
			ErrorCode::CasesFailed,
			format!("{} failed and {} errored of {} cases", summary.failed, summary.errored, summary.total),
		);
	}

	print_result(&builder.data(summary).build(), format);

	if all_passed { Ok(()) } else { Err(CliError::OutputAlreadyPrinted) }
}

fn status_mark(status: Status) -> ColoredString {
	let label = format!("{:<5}", status.to_string());
	match status {
		Status::Passed => label.green().bold(),
		Status::Mismatch => label.red().bold(),
		Status::Error => label.red(),
		Status::Skipped => label.yellow(),
	}
}

fn render_outcome(case: &CaseOutcome, out: &mut dyn Write) -> io::Result<()> {
	writeln!(out, "{} {}  {}", status_mark(case.status), case.id, case.description)?;

	match case.status {
		Status::Mismatch => {
			writeln!(out, "      input:    \"{}\"", case.input)?;
			writeln!(out, "      expected: \"{}\"", case.expected)?;
			writeln!(out, "      actual:   \"{}\"", case.actual)?;
			if let Some(divergence) = &case.divergence {
				writeln!(out, "      {divergence}")?;
			}
		}
		Status::Error => {
			writeln!(out, "      input:    \"{}\"", case.input)?;
			if let Some(error) = &case.error {
				writeln!(out, "      error:    {}", error.red())?;
			}
		}
		Status::Skipped => {
			if let Some(Fixture::Suspect { reason }) = swiftcheck::find(&case.id).map(|c| c.fixture) {
				writeln!(out, "      {}", reason.dimmed())?;
			}
		}
		Status::Passed => {}
	}
	Ok(())
}

impl TextRender for Summary {
	fn render_text(&self, out: &mut dyn Write) -> io::Result<()> {
		for case in &self.cases {
			render_outcome(case, out)?;
		}
		writeln!(
			out,
			"\n{} passed, {} failed, {} errored, {} skipped ({} total)",
			self.passed, self.failed, self.errored, self.skipped, self.total
		)
	}
}
