use std::{path::PathBuf, process::ExitCode, time::Instant};

use argh::FromArgs;

use crate::{
	build::{read_configuration_options, BuildConfig, BuildOutput, FailedBuildOutput},
	error_handling::emit_parse_error_to_stderr,
	transformers::amp::{Configuration, ConfigurationOptions},
	utilities::{print_error, print_success, print_to_cli},
};

const DEFAULT_OUTPUT_PATH: &str = "amp_output.js";

/// Strips development logging and folds build mode flags in JavaScript
#[derive(FromArgs, Debug)]
struct TopLevel {
	#[argh(subcommand)]
	nested: CompilerSubCommand,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum CompilerSubCommand {
	Info(Info),
	Build(BuildArguments),
}

/// Display amp-pass information
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "info")]
struct Info {}

/// Rewrite a file
#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "build")]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct BuildArguments {
	/// path to input file
	#[argh(positional)]
	pub input: PathBuf,
	/// path to output
	#[argh(positional)]
	pub output: Option<PathBuf>,
	/// path to a JSON configuration file
	#[argh(option, short = 'c')]
	pub config: Option<PathBuf>,

	/// build for production, folding mode flags
	#[argh(switch)]
	pub prod: bool,
	/// member suffix whose calls are removed, e.g. `dev.fine`. Can be repeated
	#[argh(option)]
	pub strip: Vec<String>,
	/// identifier whose `getMode()` result is folded
	#[argh(option)]
	pub mode_accessor: Option<String>,

	/// whether to minify build output
	#[argh(switch, short = 'm')]
	pub minify: bool,
	/// whether to display build times
	#[argh(switch)]
	pub timings: bool,
}

impl BuildArguments {
	/// Flags are applied on top of the configuration file
	fn configuration<T: crate::ReadFromFS>(
		&self,
		read_file: &T,
	) -> Result<Configuration, FailedBuildOutput> {
		let mut options = match self.config {
			Some(ref path) => read_configuration_options(read_file, path)?,
			None => ConfigurationOptions::default(),
		};
		options.is_prod |= self.prod;
		options.suffix_types_to_strip.extend(self.strip.iter().cloned());
		if let Some(ref name) = self.mode_accessor {
			options.mode_accessor = Some(name.clone());
		}

		Configuration::try_from(options).map_err(|error| FailedBuildOutput::InvalidConfiguration {
			path: self.config.clone(),
			reason: error.to_string(),
		})
	}
}

pub fn run_cli<T: crate::ReadFromFS, U: crate::WriteToFS>(
	cli_arguments: &[&str],
	read_file: &T,
	write_file: U,
) -> ExitCode {
	let command = match FromArgs::from_args(&["amp-pass"], cli_arguments) {
		Ok(TopLevel { nested }) => nested,
		Err(err) => {
			print_to_cli(format_args!("{}", err.output));
			return if err.status.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE };
		}
	};

	match command {
		CompilerSubCommand::Info(_) => {
			crate::utilities::print_info();
			ExitCode::SUCCESS
		}
		CompilerSubCommand::Build(build_arguments) => {
			let start = build_arguments.timings.then(Instant::now);

			let output = build_arguments.configuration(read_file).and_then(|amp| {
				let output_path =
					build_arguments.output.clone().unwrap_or_else(|| DEFAULT_OUTPUT_PATH.into());
				crate::build::build(
					read_file,
					&build_arguments.input,
					&output_path,
					&BuildConfig { amp, minify: build_arguments.minify },
				)
			});

			match output {
				Ok(BuildOutput { outputs, statistics }) => {
					for output in outputs {
						if let Err(error) = write_file(output.output_path.as_path(), output.content) {
							print_error(format_args!(
								"Could not write to {}: {error}",
								output.output_path.display()
							));
							return ExitCode::FAILURE;
						}
						print_success(format_args!("wrote {}", output.output_path.display()));
					}
					print_to_cli(format_args!("{statistics}"));
					if let Some(start) = start {
						print_to_cli(format_args!("Took {:?}", start.elapsed()));
					}
					ExitCode::SUCCESS
				}
				Err(FailedBuildOutput::ParseError { path, source, error }) => {
					if let Err(emit_error) = emit_parse_error_to_stderr(&path, &source, &error) {
						tracing::warn!(%emit_error, "could not render diagnostic");
						print_error(format_args!("{error} in {}", path.display()));
					}
					ExitCode::FAILURE
				}
				Err(error) => {
					print_error(format_args!("{error}"));
					ExitCode::FAILURE
				}
			}
		}
	}
}
