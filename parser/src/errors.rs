/// Contains lexing and parser errors
use std::fmt::{self, Display};

use crate::{JSToken, Span};

#[allow(missing_docs)]
pub enum ParseErrors<'a> {
	UnexpectedCharacter { found: char },
	UnterminatedStringLiteral,
	UnterminatedComment,
	UnexpectedToken { expected: &'a JSToken, found: &'a JSToken },
	ExpectedExpression { found: &'a JSToken },
	ExpectedIdentifier { location: &'static str, found: &'a JSToken },
	ExpectedPropertyKey { found: &'a JSToken },
	ExpectedSemiColon { found: &'a JSToken },
	InvalidLHSAssignment,
	ExpectedEndOfSource { found: &'a JSToken },
}

impl Display for ParseErrors<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ParseErrors::UnexpectedCharacter { found } => {
				write!(f, "Unexpected character {found:?}")
			}
			ParseErrors::UnterminatedStringLiteral => f.write_str("Unterminated string literal"),
			ParseErrors::UnterminatedComment => f.write_str("Unterminated multiline comment"),
			ParseErrors::UnexpectedToken { expected, found } => {
				write!(f, "Expected `{expected}` found `{found}`")
			}
			ParseErrors::ExpectedExpression { found } => {
				write!(f, "Expected expression found `{found}`")
			}
			ParseErrors::ExpectedIdentifier { location, found } => {
				write!(f, "Expected identifier at {location}, found `{found}`")
			}
			ParseErrors::ExpectedPropertyKey { found } => {
				write!(f, "Expected property key, found `{found}`")
			}
			ParseErrors::ExpectedSemiColon { found } => {
				write!(f, "Expected `;` or new line, found `{found}`")
			}
			ParseErrors::InvalidLHSAssignment => f.write_str("Invalid syntax on LHS of assignment"),
			ParseErrors::ExpectedEndOfSource { found } => {
				write!(f, "Expected end of source, found `{found}`")
			}
		}
	}
}

/// A error for not parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
	pub reason: String,
	pub position: Span,
}

impl ParseError {
	#[allow(clippy::needless_pass_by_value)]
	#[must_use]
	pub fn new(reason: ParseErrors, position: Span) -> Self {
		Self { reason: reason.to_string(), position }
	}
}

impl std::error::Error for ParseError {}
impl Display for ParseError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "ParseError: {} @ byte indices {}..{}", self.reason, self.position.start, self.position.end)
	}
}

pub type ParseResult<T> = Result<T, ParseError>;
