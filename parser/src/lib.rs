#![doc = include_str!("../README.md")]
#![allow(clippy::new_without_default, clippy::too_many_lines)]

mod block;
mod errors;
pub mod expressions;
pub mod functions;
mod lexer;
mod modules;
pub mod operators;
pub mod statements;
mod tokens;
pub mod visiting;

pub use block::{Block, BlockOrSingleStatement};
pub use errors::{ParseError, ParseErrors, ParseResult};
pub use expressions::{Expression, ObjectLiteralMember, PropertyKey};
pub use functions::FunctionBase;
pub use lexer::lex_script;
pub use modules::Module;
pub use statements::{
	IfStatement, Statement, VariableDeclaration, VariableDeclarationItem, VariableKeyword,
};
pub use tokens::{JSKeyword, JSToken, Token, TokenReader};

/// A start and end byte offset into the parsed source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
	pub start: u32,
	pub end: u32,
}

impl Span {
	/// For nodes which were not parsed, e.g. ones created by a transformer
	pub const NULL: Span = Span { start: 0, end: 0 };

	#[must_use]
	pub fn union(&self, other: &Span) -> Span {
		Span { start: self.start.min(other.start), end: self.end.max(other.end) }
	}
}

impl From<Span> for std::ops::Range<usize> {
	fn from(span: Span) -> Self {
		span.start as usize..span.end as usize
	}
}

/// What surrounds a string
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Quoted {
	Single,
	Double,
}

impl Quoted {
	#[must_use]
	pub fn as_char(self) -> char {
		match self {
			Quoted::Single => '\'',
			Quoted::Double => '"',
		}
	}
}

/// Settings for serializing `ASTNodes`
#[derive(Debug, Clone)]
pub struct ToStringOptions {
	/// Does not include whitespace minification
	pub pretty: bool,
	/// Has no effect if pretty == false
	pub indent_with: String,
}

impl Default for ToStringOptions {
	fn default() -> Self {
		ToStringOptions { pretty: true, indent_with: "\t".to_owned() }
	}
}

impl ToStringOptions {
	#[must_use]
	pub fn minified() -> Self {
		ToStringOptions { pretty: false, indent_with: String::new() }
	}

	pub(crate) fn add_indent(&self, indent: u8, buf: &mut String) {
		if self.pretty {
			(0..indent).for_each(|_| buf.push_str(&self.indent_with));
		}
	}

	/// Adds whitespace **conditionally** (based on pretty setting)
	pub(crate) fn push_gap_optionally(&self, buf: &mut String) {
		if self.pretty {
			buf.push(' ');
		}
	}

	pub(crate) fn push_new_line_optionally(&self, buf: &mut String) {
		if self.pretty {
			buf.push('\n');
		}
	}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalToStringInformation {
	pub depth: u8,
}

impl LocalToStringInformation {
	pub(crate) fn next_level(self) -> LocalToStringInformation {
		LocalToStringInformation { depth: self.depth + 1 }
	}
}

/// Defines common methods that would exist on a AST part include position in source, creation from reader and
/// serializing to string from options.
pub trait ASTNode: Sized + Clone + PartialEq + std::fmt::Debug + Sync + Send + 'static {
	/// From string, with default impl to call abstract method `from_reader`
	fn from_string(script: &str) -> ParseResult<Self> {
		let mut reader = TokenReader::new(lex_script(script)?);
		let node = Self::from_reader(&mut reader)?;
		reader.expect_end()?;
		Ok(node)
	}

	/// Returns position of node as span AS IT WAS PARSED. May be `Span::NULL` if AST was doesn't match anything in source
	fn get_position(&self) -> Span;

	fn from_reader(reader: &mut TokenReader) -> ParseResult<Self>;

	fn to_string_from_buffer(
		&self,
		buf: &mut String,
		options: &ToStringOptions,
		local: LocalToStringInformation,
	);

	/// Returns structure as valid string
	fn to_string(&self, options: &ToStringOptions) -> String {
		let mut buf = String::new();
		self.to_string_from_buffer(&mut buf, options, LocalToStringInformation::default());
		buf
	}
}

/// Comma separated items up to and including `end`, allowing a trailing comma
pub(crate) fn bracketed_items_from_reader<T>(
	reader: &mut TokenReader,
	end: &JSToken,
	mut item_from_reader: impl FnMut(&mut TokenReader) -> ParseResult<T>,
) -> ParseResult<(Vec<T>, Span)> {
	let mut items = Vec::new();
	loop {
		if let Some(end_position) = reader.conditional_next(end) {
			return Ok((items, end_position));
		}
		items.push(item_from_reader(reader)?);
		if reader.conditional_next(&JSToken::Comma).is_none() {
			let end_position = reader.expect_next(end)?;
			return Ok((items, end_position));
		}
	}
}

pub(crate) fn bracketed_items_to_string<T>(
	items: &[T],
	(open, close): (char, char),
	buf: &mut String,
	options: &ToStringOptions,
	mut item_to_string: impl FnMut(&T, &mut String),
) {
	use iterator_endiate::EndiateIteratorExt;

	buf.push(open);
	for (at_end, item) in items.iter().endiate() {
		item_to_string(item, buf);
		if !at_end {
			buf.push(',');
			options.push_gap_optionally(buf);
		}
	}
	buf.push(close);
}
