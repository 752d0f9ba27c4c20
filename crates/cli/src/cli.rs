use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::BrowserKind;
use crate::output::OutputFormat;


#[derive(Parser, Debug)]
#[command(name = "swiftcheck")]
#[command(about = "End-to-end checks for the swifttranslator.com Singlish to Sinhala converter")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Output format: text (default), toon, json or ndjson
	#[arg(short = 'f', long, global = true, value_enum, default_value = "text")]
	pub format: OutputFormat,

	/// Browser engine [default: chromium, or the config file's choice]
	#[arg(short, long, global = true, value_enum)]
	pub browser: Option<BrowserKind>,

	/// Show the browser window
	#[arg(long, global = true)]
	pub headed: bool,

	/// JSON config file (target page, settle delays, browser)
	#[arg(long, global = true, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Page under test
	#[arg(long, global = true, value_name = "URL")]
	pub url: Option<String>,

	/// Navigation timeout in milliseconds
	#[arg(long, global = true, value_name = "MS")]
	pub timeout: Option<u64>,

	/// Wait after typing before reading the output, in milliseconds
	#[arg(long, global = true, value_name = "MS")]
	pub debounce_ms: Option<u64>,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Run catalog cases against the live page
	Run(RunArgs),

	/// List catalog cases without opening a browser
	List(ListArgs),

	/// Translate one input and print what the page shows
	Translate(TranslateArgs),
}

impl Commands {
	/// Name reported in the output envelope.
	pub fn name(&self) -> &'static str {
		match self {
			Commands::Run(_) => "run",
			Commands::List(_) => "list",
			Commands::Translate(_) => "translate",
		}
	}
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
	/// Case ids to run (default: all)
	#[arg(value_name = "ID")]
	pub ids: Vec<String>,

	/// Only cases whose id or description contains this text
	#[arg(long, value_name = "TEXT")]
	pub filter: Option<String>,

	/// Also run cases whose expected output is known to be unreachable
	#[arg(long)]
	pub include_suspect: bool,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
	/// Only cases whose id or description contains this text
	#[arg(long, value_name = "TEXT")]
	pub filter: Option<String>,
}

#[derive(Args, Debug)]
pub struct TranslateArgs {
	/// Singlish text to type into the input box
	pub input: String,

	/// Compare the output against this text and fail on mismatch
	#[arg(long, value_name = "TEXT")]
	pub expect: Option<String>,
}
