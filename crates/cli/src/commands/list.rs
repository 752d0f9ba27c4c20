//! `swiftcheck list`: print the case catalog without touching a browser.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;
use swiftcheck::{Fixture, Selection, TestCase};

use crate::cli::ListArgs;
use crate::output::{OutputFormat, ResultBuilder, TextRender, print_result};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListData {
	pub total: usize,
	pub suspect: usize,
	pub cases: Vec<&'static TestCase>,
}

pub fn execute(args: &ListArgs) -> ListData {
	let selection = Selection {
		filter: args.filter.clone(),
		include_suspect: true,
		..Selection::default()
	};
	let cases: Vec<_> = selection.plan().into_iter().map(|p| p.case).collect();

	ListData {
		total: cases.len(),
		suspect: cases.iter().filter(|c| c.is_suspect()).count(),
		cases,
	}
}

pub fn finish(data: ListData, format: OutputFormat) {
	let result = ResultBuilder::new("list").data(data).build();
	print_result(&result, format);
}

impl TextRender for ListData {
	fn render_text(&self, out: &mut dyn Write) -> io::Result<()> {
		for case in &self.cases {
			writeln!(out, "{}  {}", case.id.bold(), case.description)?;
			writeln!(out, "    \"{}\" -> \"{}\"", case.input, case.expected)?;
			if let Fixture::Suspect { reason } = case.fixture {
				writeln!(out, "    {} {reason}", "suspect:".yellow())?;
			}
		}
		writeln!(out, "{} cases ({} suspect)", self.total, self.suspect)
	}
}
