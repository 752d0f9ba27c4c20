//! Description of the page under test and the selectors derived from it.

use serde::{Deserialize, Serialize};

pub const DEFAULT_URL: &str = "https://www.swifttranslator.com/";

/// Click position used to dismiss the suggestion overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

/// Labels and anchors of the translator page.
///
/// The page has no test ids, so every selector is derived from visible
/// text and layout. Defaults describe the live site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TargetPage {
	pub url: String,
	pub input_placeholder: String,
	/// Exact heading text of the output section.
	pub output_heading: String,
	pub copy_label: String,
	pub clear_label: String,
	/// Element receiving the neutral overlay-dismiss click.
	pub dismiss_selector: String,
	pub dismiss_at: Point,
	/// Layout column holding the output panel (second match is used).
	pub output_column: String,
}

impl Default for TargetPage {
	fn default() -> Self {
		Self {
			url: DEFAULT_URL.to_string(),
			input_placeholder: "Input Your Singlish Text Here.".to_string(),
			output_heading: "Sinhala".to_string(),
			copy_label: "Copy".to_string(),
			clear_label: "Clear".to_string(),
			dismiss_selector: "body".to_string(),
			dismiss_at: Point { x: 10.0, y: 10.0 },
			output_column: ".col-span-12".to_string(),
		}
	}
}

impl TargetPage {
	pub fn input_selector(&self) -> String {
		format!("[placeholder=\"{}\"]", css_escape(&self.input_placeholder))
	}

	/// First `div` whose whole text is exactly the output heading.
	pub fn heading_selector(&self) -> String {
		format!("div >> internal:has-text=/^{}$/ >> nth=0", regex_escape(&self.output_heading))
	}

	/// The `div` right after the heading, holding the translation.
	pub fn output_selector(&self) -> String {
		format!("{} >> xpath=following-sibling::div[1]", self.heading_selector())
	}

	/// Parent of the first `div` in the output column that contains a Copy button.
	pub fn panel_selector(&self) -> String {
		format!(
			"{} >> nth=1 >> div:has(button:has-text(\"{}\")) >> nth=0 >> xpath=..",
			self.output_column,
			css_escape(&self.copy_label)
		)
	}

	/// Literal text the output panel renders around the translation, longest first.
	pub fn boilerplate(&self) -> Vec<String> {
		let mut literals = vec![
			format!("{}{}", self.copy_label, self.clear_label),
			self.output_heading.clone(),
			self.copy_label.clone(),
			self.clear_label.clone(),
		];
		literals.retain(|l| !l.is_empty());
		literals.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
		literals.dedup();
		literals
	}
}

fn css_escape(value: &str) -> String {
	value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn regex_escape(value: &str) -> String {
	let mut escaped = String::with_capacity(value.len());
	for c in value.chars() {
		if matches!(c, '\\' | '/' | '.' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '|' | '^' | '$') {
			escaped.push('\\');
		}
		escaped.push(c);
	}
	escaped
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_selectors() {
		let target = TargetPage::default();
		assert_eq!(target.input_selector(), "[placeholder=\"Input Your Singlish Text Here.\"]");
		assert_eq!(target.heading_selector(), "div >> internal:has-text=/^Sinhala$/ >> nth=0");
		assert_eq!(
			target.output_selector(),
			"div >> internal:has-text=/^Sinhala$/ >> nth=0 >> xpath=following-sibling::div[1]"
		);
		assert_eq!(
			target.panel_selector(),
			".col-span-12 >> nth=1 >> div:has(button:has-text(\"Copy\")) >> nth=0 >> xpath=.."
		);
	}

	#[test]
	fn boilerplate_is_longest_first() {
		let target = TargetPage::default();
		assert_eq!(target.boilerplate(), vec!["CopyClear", "Sinhala", "Clear", "Copy"]);
	}

	#[test]
	fn heading_text_is_regex_escaped() {
		let target = TargetPage {
			output_heading: "Sinhala (beta)".into(),
			..TargetPage::default()
		};
		assert_eq!(target.heading_selector(), "div >> internal:has-text=/^Sinhala \\(beta\\)$/ >> nth=0");
	}

	#[test]
	fn config_overrides_url_only() {
		let target: TargetPage = serde_json::from_str(r#"{"url": "http://localhost:5173/"}"#).unwrap();
		assert_eq!(target.url, "http://localhost:5173/");
		assert_eq!(target.output_heading, "Sinhala");
		assert_eq!(target.dismiss_at, Point { x: 10.0, y: 10.0 });
	}
}
