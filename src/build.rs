use std::{
	fmt,
	path::{Path, PathBuf},
};

use parser::{ASTNode, Module, ParseError, ToStringOptions};

use crate::transformers::amp::{rewrite_in_place, Configuration, ConfigurationOptions, RewriteStatistics};

pub struct Output {
	pub output_path: PathBuf,
	pub content: String,
}

pub struct BuildOutput {
	pub outputs: Vec<Output>,
	pub statistics: RewriteStatistics,
}

#[derive(Debug)]
pub enum FailedBuildOutput {
	CouldNotFindFile(PathBuf),
	/// Holds the source so that the error can be rendered against it
	ParseError { path: PathBuf, source: String, error: ParseError },
	InvalidConfiguration { path: Option<PathBuf>, reason: String },
}

impl fmt::Display for FailedBuildOutput {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FailedBuildOutput::CouldNotFindFile(path) => {
				write!(f, "Could not find file at {}", path.display())
			}
			FailedBuildOutput::ParseError { path, error, .. } => {
				write!(f, "{} in {}", error, path.display())
			}
			FailedBuildOutput::InvalidConfiguration { path: Some(path), reason } => {
				write!(f, "Invalid configuration in {}: {reason}", path.display())
			}
			FailedBuildOutput::InvalidConfiguration { path: None, reason } => {
				write!(f, "Invalid configuration: {reason}")
			}
		}
	}
}

#[derive(Debug, Clone, Default)]
pub struct BuildConfig {
	pub amp: Configuration,
	pub minify: bool,
}

/// Reads the JSON form of [`Configuration`]. Validation happens once flags have been merged in
pub fn read_configuration_options<T: crate::ReadFromFS>(
	read_file: &T,
	path: &Path,
) -> Result<ConfigurationOptions, FailedBuildOutput> {
	let content = read_file
		.get_content_at_path(path)
		.ok_or_else(|| FailedBuildOutput::CouldNotFindFile(path.to_path_buf()))?;
	serde_json::from_str(&content).map_err(|error| FailedBuildOutput::InvalidConfiguration {
		path: Some(path.to_path_buf()),
		reason: error.to_string(),
	})
}

/// Parses `input_path`, runs the rewriter over it and prints the result
pub fn build<T: crate::ReadFromFS>(
	read_file: &T,
	input_path: &Path,
	output_path: &Path,
	config: &BuildConfig,
) -> Result<BuildOutput, FailedBuildOutput> {
	let source = read_file
		.get_content_at_path(input_path)
		.ok_or_else(|| FailedBuildOutput::CouldNotFindFile(input_path.to_path_buf()))?;

	let mut module = match Module::from_string(&source) {
		Ok(module) => module,
		Err(error) => {
			return Err(FailedBuildOutput::ParseError {
				path: input_path.to_path_buf(),
				source,
				error,
			});
		}
	};

	let statistics = rewrite_in_place(&mut module, &config.amp);
	tracing::info!(input = %input_path.display(), %statistics, "rewrote module");

	let to_string_options =
		if config.minify { ToStringOptions::minified() } else { ToStringOptions::default() };

	let mut content = module.to_string(&to_string_options);
	if !content.is_empty() {
		content.push('\n');
	}

	Ok(BuildOutput {
		outputs: vec![Output { output_path: output_path.to_path_buf(), content }],
		statistics,
	})
}
