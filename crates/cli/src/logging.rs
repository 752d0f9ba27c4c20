//! Logging goes to stderr; stdout carries only command output.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
fn default_filter(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn,pw=off,pw_runtime=off",
		// -v: one line per case, Playwright stays at warn
		1 => "warn,swiftcheck=info",
		_ => "debug,swiftcheck=trace",
	}
}

pub fn init_logging(verbosity: u8) {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr)
		.with_target(verbosity > 1)
		.compact()
		.init();
}
