#![allow(
	clippy::new_without_default,
	clippy::missing_errors_doc,
	clippy::missing_panics_doc,
	// More explicit sometimes to have the module name
	clippy::module_name_repetitions
)]

use std::{fs, path::Path};

use amp_pass_lib::cli::run_cli;
use tracing_subscriber::EnvFilter;

fn main() -> std::process::ExitCode {
	let filter = EnvFilter::try_from_env("AMP_PASS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

	let arguments = std::env::args().skip(1).collect::<Vec<_>>();
	let arguments = arguments.iter().map(String::as_str).collect::<Vec<_>>();

	run_cli(
		&arguments,
		&|path: &Path| fs::read_to_string(path).ok(),
		|path: &Path, content: String| fs::write(path, content),
	)
}
