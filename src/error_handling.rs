use std::path::Path;

use codespan_reporting::{
	diagnostic::{Diagnostic, Label},
	files::SimpleFiles,
	term::{
		termcolor::{ColorChoice, StandardStream, WriteColor},
		Config,
	},
};
use parser::ParseError;

const ADDITIONAL_LINES_IN_DIAGNOSTIC: usize = 1;

/// Writes `error` with a labelled snippet of `source`
pub(crate) fn emit_parse_error(
	writer: &mut dyn WriteColor,
	path: &Path,
	source: &str,
	error: &ParseError,
) -> Result<(), codespan_reporting::files::Error> {
	let mut files = SimpleFiles::new();
	let file_id = files.add(path.display().to_string(), source);

	let diagnostic = Diagnostic::error()
		.with_message("could not parse input")
		.with_labels(vec![Label::primary(file_id, error.position).with_message(error.reason.clone())]);

	codespan_reporting::term::emit(
		writer,
		&Config {
			before_label_lines: ADDITIONAL_LINES_IN_DIAGNOSTIC,
			after_label_lines: ADDITIONAL_LINES_IN_DIAGNOSTIC,
			..Default::default()
		},
		&files,
		&diagnostic,
	)
}

pub(crate) fn emit_parse_error_to_stderr(
	path: &Path,
	source: &str,
	error: &ParseError,
) -> Result<(), codespan_reporting::files::Error> {
	let writer = StandardStream::stderr(ColorChoice::Auto);
	let mut lock = writer.lock();
	emit_parse_error(&mut lock, path, source, error)
}
