//! `swiftcheck translate`: one-off extraction, optionally checked against `--expect`.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;
use swiftcheck::{Divergence, SessionFactory, first_divergence};
use tracing::{info, warn};

use crate::cli::TranslateArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::{EffectiveConfig, ErrorCode, OutputFormat, ResultBuilder, TextRender, print_result};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateData {
	pub input: String,
	pub output: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub strategy: Option<&'static str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub expected: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub matches: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub divergence: Option<Divergence>,
}

pub async fn execute(args: &TranslateArgs, config: &Config, sessions: &dyn SessionFactory) -> Result<TranslateData> {
	let translator = config.translator();

	let session = sessions.open().await?;
	let result = translator.translate(session.page(), &args.input).await;
	if let Err(err) = session.close().await {
		warn!(target = "swiftcheck", error = %err, "session close failed");
	}
	let extraction = result?;

	let divergence = args.expect.as_deref().and_then(|expected| first_divergence(expected, &extraction.text));
	info!(
		target = "swiftcheck",
		input = %args.input,
		output = %extraction.text,
		strategy = extraction.strategy.unwrap_or("none"),
		"translated"
	);

	Ok(TranslateData {
		input: args.input.clone(),
		matches: args.expect.as_ref().map(|_| divergence.is_none()),
		expected: args.expect.clone(),
		output: extraction.text,
		strategy: extraction.strategy,
		divergence,
	})
}

pub fn finish(data: TranslateData, config: &Config, format: OutputFormat) -> Result<()> {
	let mut builder = ResultBuilder::new("translate").config(EffectiveConfig::from(config));

	let mismatch = data.matches == Some(false);
	if mismatch {
		let detail = data.divergence.as_ref().map(ToString::to_string).unwrap_or_default();
		builder = builder.error(ErrorCode::OutputMismatch, format!("output differs from expected {detail}"));
	}

	print_result(&builder.data(data).build(), format);

	if mismatch { Err(CliError::OutputAlreadyPrinted) } else { Ok(()) }
}

impl TextRender for TranslateData {
	fn render_text(&self, out: &mut dyn Write) -> io::Result<()> {
		writeln!(out, "{}", self.output)?;

		match (&self.expected, self.matches) {
			(Some(_), Some(true)) => writeln!(out, "{}", "matches expected".green()),
			(Some(expected), _) => {
				writeln!(out, "{} expected \"{expected}\"", "MISMATCH".red().bold())?;
				match &self.divergence {
					Some(divergence) => writeln!(out, "  {divergence}"),
					None => Ok(()),
				}
			}
			_ => Ok(()),
		}
	}
}

#[cfg(test)]
mod tests {
	use swiftcheck::testing::{MockPage, MockSessionFactory};
	use swiftcheck::{Settle, TargetPage};

	use super::*;

	fn config() -> Config {
		Config {
			settle: Settle::instant(),
			..Config::default()
		}
	}

	fn rendering(text: &'static str) -> MockSessionFactory {
		MockSessionFactory::new(move || {
			let page = MockPage::new();
			page.render_fills_into(&TargetPage::default().output_selector(), move |_| text.to_string());
			page
		})
	}

	fn args(input: &str, expect: Option<&str>) -> TranslateArgs {
		TranslateArgs {
			input: input.into(),
			expect: expect.map(String::from),
		}
	}

	#[tokio::test]
	async fn plain_translation_has_no_verdict() {
		let factory = rendering("සුබ දවසක්!");
		let data = execute(&args("suba dhavasak!", None), &config(), &factory).await.unwrap();

		assert_eq!(data.output, "සුබ දවසක්!");
		assert_eq!(data.strategy, Some("heading-sibling"));
		assert_eq!(data.matches, None);
		assert_eq!(factory.closed(), 1);

		let json = serde_json::to_value(&data).unwrap();
		assert!(json.get("matches").is_none());
		assert!(json.get("expected").is_none());
	}

	#[tokio::test]
	async fn expectation_match() {
		let factory = rendering("1/26/2026");
		let data = execute(&args("1/26/2026", Some("1/26/2026")), &config(), &factory).await.unwrap();

		assert_eq!(data.matches, Some(true));
		assert!(data.divergence.is_none());
		assert!(finish(data, &config(), OutputFormat::Ndjson).is_ok());
	}

	#[tokio::test]
	async fn expectation_mismatch_exits_nonzero() {
		let factory = rendering("මම  යනවා");
		let data = execute(&args("mama 😎 yanavaa", Some("මම යනවා.")), &config(), &factory).await.unwrap();

		assert_eq!(data.matches, Some(false));
		assert_eq!(data.divergence.as_ref().map(|d| d.char_index), Some(3));

		let mut buf = Vec::new();
		data.render_text(&mut buf).unwrap();
		let text = String::from_utf8(buf).unwrap();
		assert!(text.starts_with("මම  යනවා\n"));
		assert!(text.contains("expected \"මම යනවා.\""));

		let err = finish(data, &config(), OutputFormat::Json).unwrap_err();
		assert!(err.is_output_already_printed());
	}

	#[tokio::test]
	async fn navigation_failure_propagates_and_closes_session() {
		let factory = MockSessionFactory::new(|| {
			let page = MockPage::new();
			page.fail_goto("net::ERR_NAME_NOT_RESOLVED");
			page
		});

		let err = execute(&args("mama", None), &config(), &factory).await.unwrap_err();
		assert!(matches!(err, CliError::Check(swiftcheck::Error::Navigation { .. })));
		assert_eq!(factory.closed(), 1);
	}
}
