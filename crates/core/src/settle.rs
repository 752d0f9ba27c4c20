//! Fixed settling delays.
//!
//! The target page exposes no completion signal for its debounced
//! translation, so synchronization is a handful of fixed pauses plus one
//! bounded read. Every delay constant lives here.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Points in the translate flow where a fixed pause is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
	/// After the page reports network idle.
	AfterLoad,
	/// After typing, while the page debounces its translation.
	Debounce,
	/// After the neutral click that closes the suggestion overlay.
	Overlay,
}

impl std::fmt::Display for Phase {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Phase::AfterLoad => write!(f, "after-load"),
			Phase::Debounce => write!(f, "debounce"),
			Phase::Overlay => write!(f, "overlay"),
		}
	}
}

/// Delay and bound configuration, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settle {
	pub after_load_ms: u64,
	pub debounce_ms: u64,
	pub overlay_ms: u64,
	/// Upper bound for the primary strategy's text read.
	pub read_timeout_ms: u64,
	/// Upper bound for the fallback panel to render.
	pub panel_timeout_ms: u64,
	/// Interval between locator count polls during a bounded read.
	pub poll_interval_ms: u64,
}

impl Default for Settle {
	fn default() -> Self {
		Self {
			after_load_ms: 1000,
			debounce_ms: 2500,
			overlay_ms: 500,
			read_timeout_ms: 5000,
			panel_timeout_ms: 2000,
			poll_interval_ms: 100,
		}
	}
}

impl Settle {
	/// No fixed pauses; reads still poll with a short bound.
	pub fn instant() -> Self {
		Self {
			after_load_ms: 0,
			debounce_ms: 0,
			overlay_ms: 0,
			read_timeout_ms: 50,
			panel_timeout_ms: 50,
			poll_interval_ms: 10,
		}
	}

	pub fn duration(&self, phase: Phase) -> Duration {
		let ms = match phase {
			Phase::AfterLoad => self.after_load_ms,
			Phase::Debounce => self.debounce_ms,
			Phase::Overlay => self.overlay_ms,
		};
		Duration::from_millis(ms)
	}

	pub fn read_timeout(&self) -> Duration {
		Duration::from_millis(self.read_timeout_ms)
	}

	pub fn panel_timeout(&self) -> Duration {
		Duration::from_millis(self.panel_timeout_ms)
	}

	pub fn poll_interval(&self) -> Duration {
		Duration::from_millis(self.poll_interval_ms.max(1))
	}

	/// Suspends for the configured duration of `phase`.
	pub async fn pause(&self, phase: Phase) {
		let wait = self.duration(phase);
		if wait.is_zero() {
			return;
		}
		debug!(target = "swiftcheck", phase = %phase, ms = wait.as_millis() as u64, "settle");
		tokio::time::sleep(wait).await;
	}
}
