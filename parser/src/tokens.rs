use std::fmt::{self, Display};

use crate::{ParseError, ParseErrors, ParseResult, Quoted, Span};

/// All JS tokens the subset understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JSToken {
	Identifier(String),
	Keyword(JSKeyword),
	/// Kept as written, e.g. `0x10` or `1e3`
	NumberLiteral(String),
	/// Content between the quotes, escapes untouched
	StringLiteral(String, Quoted),
	OpenBrace,
	CloseBrace,
	OpenParentheses,
	CloseParentheses,
	OpenBracket,
	CloseBracket,
	Comma,
	SemiColon,
	Colon,
	Dot,
	Assign,
	Equal,
	NotEqual,
	StrictEqual,
	StrictNotEqual,
	LessThan,
	GreaterThan,
	LessThanEqual,
	GreaterThanEqual,
	LogicalAnd,
	LogicalOr,
	LogicalNot,
	Add,
	Subtract,
	Multiply,
	Divide,
	/// End of source
	EOS,
}

impl Display for JSToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			JSToken::Identifier(name) => f.write_str(name),
			JSToken::Keyword(keyword) => f.write_str(keyword.as_str()),
			JSToken::NumberLiteral(value) => f.write_str(value),
			JSToken::StringLiteral(content, quoted) => {
				let quote = quoted.as_char();
				write!(f, "{quote}{content}{quote}")
			}
			JSToken::OpenBrace => f.write_str("{"),
			JSToken::CloseBrace => f.write_str("}"),
			JSToken::OpenParentheses => f.write_str("("),
			JSToken::CloseParentheses => f.write_str(")"),
			JSToken::OpenBracket => f.write_str("["),
			JSToken::CloseBracket => f.write_str("]"),
			JSToken::Comma => f.write_str(","),
			JSToken::SemiColon => f.write_str(";"),
			JSToken::Colon => f.write_str(":"),
			JSToken::Dot => f.write_str("."),
			JSToken::Assign => f.write_str("="),
			JSToken::Equal => f.write_str("=="),
			JSToken::NotEqual => f.write_str("!="),
			JSToken::StrictEqual => f.write_str("==="),
			JSToken::StrictNotEqual => f.write_str("!=="),
			JSToken::LessThan => f.write_str("<"),
			JSToken::GreaterThan => f.write_str(">"),
			JSToken::LessThanEqual => f.write_str("<="),
			JSToken::GreaterThanEqual => f.write_str(">="),
			JSToken::LogicalAnd => f.write_str("&&"),
			JSToken::LogicalOr => f.write_str("||"),
			JSToken::LogicalNot => f.write_str("!"),
			JSToken::Add => f.write_str("+"),
			JSToken::Subtract => f.write_str("-"),
			JSToken::Multiply => f.write_str("*"),
			JSToken::Divide => f.write_str("/"),
			JSToken::EOS => f.write_str("end of source"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JSKeyword {
	Var,
	Let,
	Const,
	Function,
	If,
	Else,
	Return,
	True,
	False,
	Null,
	Typeof,
	Void,
}

impl JSKeyword {
	pub(crate) fn from_identifier(name: &str) -> Option<Self> {
		Some(match name {
			"var" => Self::Var,
			"let" => Self::Let,
			"const" => Self::Const,
			"function" => Self::Function,
			"if" => Self::If,
			"else" => Self::Else,
			"return" => Self::Return,
			"true" => Self::True,
			"false" => Self::False,
			"null" => Self::Null,
			"typeof" => Self::Typeof,
			"void" => Self::Void,
			_ => return None,
		})
	}

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Var => "var",
			Self::Let => "let",
			Self::Const => "const",
			Self::Function => "function",
			Self::If => "if",
			Self::Else => "else",
			Self::Return => "return",
			Self::True => "true",
			Self::False => "false",
			Self::Null => "null",
			Self::Typeof => "typeof",
			Self::Void => "void",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
	pub kind: JSToken,
	pub position: Span,
	/// Whether a line terminator sits between this token and the previous one. Needed for
	/// automatic semicolon insertion
	pub preceded_by_new_line: bool,
}

/// Cursor over lexed tokens. The last token is always [`JSToken::EOS`] and is never consumed
pub struct TokenReader {
	tokens: Vec<Token>,
	head: usize,
}

impl TokenReader {
	#[must_use]
	pub fn new(tokens: Vec<Token>) -> Self {
		assert!(
			matches!(tokens.last(), Some(Token { kind: JSToken::EOS, .. })),
			"token stream must end with EOS"
		);
		Self { tokens, head: 0 }
	}

	#[must_use]
	pub fn peek(&self) -> &Token {
		&self.tokens[self.head]
	}

	pub fn next(&mut self) -> Token {
		let token = self.tokens[self.head].clone();
		if token.kind != JSToken::EOS {
			self.head += 1;
		}
		token
	}

	/// Consumes the next token only if it is `kind`
	pub fn conditional_next(&mut self, kind: &JSToken) -> Option<Span> {
		if &self.peek().kind == kind {
			Some(self.next().position)
		} else {
			None
		}
	}

	pub fn expect_next(&mut self, expected: &JSToken) -> ParseResult<Span> {
		let token = self.next();
		if &token.kind == expected {
			Ok(token.position)
		} else {
			Err(ParseError::new(
				ParseErrors::UnexpectedToken { expected, found: &token.kind },
				token.position,
			))
		}
	}

	pub fn expect_identifier(&mut self, location: &'static str) -> ParseResult<(String, Span)> {
		let token = self.next();
		if let JSToken::Identifier(name) = token.kind {
			Ok((name, token.position))
		} else {
			Err(ParseError::new(
				ParseErrors::ExpectedIdentifier { location, found: &token.kind },
				token.position,
			))
		}
	}

	/// Property names can be keywords, e.g. `a.if`
	pub fn expect_property_name(&mut self) -> ParseResult<(String, Span)> {
		let token = self.next();
		match token.kind {
			JSToken::Identifier(name) => Ok((name, token.position)),
			JSToken::Keyword(keyword) => Ok((keyword.as_str().to_owned(), token.position)),
			found => Err(ParseError::new(
				ParseErrors::ExpectedIdentifier { location: "property access", found: &found },
				token.position,
			)),
		}
	}

	pub fn expect_end(&mut self) -> ParseResult<()> {
		let token = self.peek();
		if token.kind == JSToken::EOS {
			Ok(())
		} else {
			Err(ParseError::new(ParseErrors::ExpectedEndOfSource { found: &token.kind }, token.position))
		}
	}
}
