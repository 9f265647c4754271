#![allow(clippy::new_without_default)]

pub mod build;
pub mod cli;
mod error_handling;
pub mod transformers;
pub(crate) mod utilities;

use std::path::Path;

pub use build::{build, BuildConfig, BuildOutput, FailedBuildOutput};
pub use cli::run_cli;
pub use transformers::amp::{
	rewrite, rewrite_in_place, Configuration, ConfigurationError, PatternRewriter,
	RewriteStatistics,
};

pub trait ReadFromFS {
	fn get_content_at_path(&self, path: &Path) -> Option<String>;
}

impl<T> ReadFromFS for T
where
	T: Fn(&Path) -> Option<String>,
{
	fn get_content_at_path(&self, path: &Path) -> Option<String> {
		(self)(path)
	}
}

pub trait WriteToFS: Fn(&Path, String) -> std::io::Result<()> {}

impl<T> WriteToFS for T where T: Fn(&Path, String) -> std::io::Result<()> {}
