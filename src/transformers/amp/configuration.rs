use std::{collections::BTreeSet, fmt};

use serde::Deserialize;

/// Identifier whose `getMode()` result holds the build mode flags
pub const DEFAULT_MODE_ACCESSOR: &str = "$mode";

/// Settings for [`super::PatternRewriter`]. Suffixes are validated and split when built
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "ConfigurationOptions")]
pub struct Configuration {
	is_prod: bool,
	suffixes_to_strip: BTreeSet<Vec<String>>,
	mode_accessor: String,
}

/// The unvalidated JSON (and command line) form of [`Configuration`]
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct ConfigurationOptions {
	pub is_prod: bool,
	pub suffix_types_to_strip: Vec<String>,
	pub mode_accessor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
	EmptySuffix,
	InvalidSuffixSegment { suffix: String, segment: String },
	InvalidModeAccessor(String),
}

impl fmt::Display for ConfigurationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ConfigurationError::EmptySuffix => f.write_str("suffix types to strip cannot be empty"),
			ConfigurationError::InvalidSuffixSegment { suffix, segment } => {
				write!(f, "suffix '{suffix}' has invalid segment '{segment}', expected an identifier")
			}
			ConfigurationError::InvalidModeAccessor(name) => {
				write!(f, "mode accessor '{name}' is not an identifier")
			}
		}
	}
}

impl std::error::Error for ConfigurationError {}

fn is_identifier(name: &str) -> bool {
	let mut characters = name.chars();
	characters
		.next()
		.is_some_and(|first| first.is_ascii_alphabetic() || matches!(first, '$' | '_'))
		&& characters.all(|character| character.is_ascii_alphanumeric() || matches!(character, '$' | '_'))
}

fn split_suffix(suffix: &str) -> Result<Vec<String>, ConfigurationError> {
	if suffix.is_empty() {
		return Err(ConfigurationError::EmptySuffix);
	}
	suffix
		.split('.')
		.map(|segment| {
			if is_identifier(segment) {
				Ok(segment.to_owned())
			} else {
				Err(ConfigurationError::InvalidSuffixSegment {
					suffix: suffix.to_owned(),
					segment: segment.to_owned(),
				})
			}
		})
		.collect()
}

impl Configuration {
	pub fn new<S: AsRef<str>>(
		is_prod: bool,
		suffixes_to_strip: impl IntoIterator<Item = S>,
	) -> Result<Self, ConfigurationError> {
		let suffixes_to_strip = suffixes_to_strip
			.into_iter()
			.map(|suffix| split_suffix(suffix.as_ref()))
			.collect::<Result<BTreeSet<_>, _>>()?;
		Ok(Self { is_prod, suffixes_to_strip, mode_accessor: DEFAULT_MODE_ACCESSOR.to_owned() })
	}

	pub fn with_mode_accessor(mut self, name: impl Into<String>) -> Result<Self, ConfigurationError> {
		let name = name.into();
		if !is_identifier(&name) {
			return Err(ConfigurationError::InvalidModeAccessor(name));
		}
		self.mode_accessor = name;
		Ok(self)
	}

	/// Production build which strips `log.dev.fine` calls
	#[must_use]
	pub fn production() -> Self {
		Self {
			is_prod: true,
			suffixes_to_strip: BTreeSet::from([vec!["dev".to_owned(), "fine".to_owned()]]),
			mode_accessor: DEFAULT_MODE_ACCESSOR.to_owned(),
		}
	}

	#[must_use]
	pub fn is_prod(&self) -> bool {
		self.is_prod
	}

	#[must_use]
	pub fn mode_accessor(&self) -> &str {
		&self.mode_accessor
	}

	/// Dotted forms of the suffixes, in sorted order
	pub fn suffixes_to_strip(&self) -> impl Iterator<Item = String> + '_ {
		self.suffixes_to_strip.iter().map(|segments| segments.join("."))
	}

	/// Whether the trailing segments of `chain` equal one of the suffixes to strip
	#[must_use]
	pub fn strips(&self, chain: &[&str]) -> bool {
		self.suffixes_to_strip.iter().any(|suffix| chain_ends_with(chain, suffix))
	}
}

pub(crate) fn chain_ends_with<S: AsRef<str>>(chain: &[&str], suffix: &[S]) -> bool {
	chain.len() >= suffix.len()
		&& chain.iter().rev().zip(suffix.iter().rev()).all(|(segment, expected)| *segment == expected.as_ref())
}

impl TryFrom<ConfigurationOptions> for Configuration {
	type Error = ConfigurationError;

	fn try_from(options: ConfigurationOptions) -> Result<Self, Self::Error> {
		let ConfigurationOptions { is_prod, suffix_types_to_strip, mode_accessor } = options;
		let configuration = Configuration::new(is_prod, suffix_types_to_strip)?;
		match mode_accessor {
			Some(name) => configuration.with_mode_accessor(name),
			None => Ok(configuration),
		}
	}
}

impl Default for Configuration {
	fn default() -> Self {
		Self {
			is_prod: false,
			suffixes_to_strip: BTreeSet::new(),
			mode_accessor: DEFAULT_MODE_ACCESSOR.to_owned(),
		}
	}
}
