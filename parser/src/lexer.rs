use std::{iter::Peekable, str::CharIndices};

use crate::{JSKeyword, JSToken, ParseError, ParseErrors, ParseResult, Quoted, Span, Token};

/// Splits `script` into tokens. The returned list always ends with [`JSToken::EOS`]
pub fn lex_script(script: &str) -> ParseResult<Vec<Token>> {
	Lexer { script, characters: script.char_indices().peekable(), tokens: Vec::new(), new_line: false }
		.lex()
}

struct Lexer<'a> {
	script: &'a str,
	characters: Peekable<CharIndices<'a>>,
	tokens: Vec<Token>,
	/// Set when a line terminator has been skipped since the last token
	new_line: bool,
}

fn is_identifier_start(character: char) -> bool {
	character.is_ascii_alphabetic() || matches!(character, '$' | '_')
}

fn is_identifier_part(character: char) -> bool {
	character.is_ascii_alphanumeric() || matches!(character, '$' | '_')
}

impl<'a> Lexer<'a> {
	fn lex(mut self) -> ParseResult<Vec<Token>> {
		while let Some((start, character)) = self.characters.next() {
			match character {
				'\n' | '\r' | '\u{2028}' | '\u{2029}' => self.new_line = true,
				character if character.is_whitespace() => {}
				'/' if self.next_is('/') => self.skip_line_comment(),
				'/' if self.next_is('*') => self.skip_multiline_comment(start)?,
				'"' | '\'' => self.string_literal(start, character)?,
				'0'..='9' => self.number_literal(start),
				character if is_identifier_start(character) => self.identifier_or_keyword(start),
				character => self.punctuator(start, character)?,
			}
		}
		let end = self.script.len();
		self.push(JSToken::EOS, start_end(end, end));
		Ok(self.tokens)
	}

	fn push(&mut self, kind: JSToken, position: Span) {
		self.tokens.push(Token { kind, position, preceded_by_new_line: self.new_line });
		self.new_line = false;
	}

	fn next_is(&mut self, expected: char) -> bool {
		self.characters.peek().is_some_and(|(_, character)| *character == expected)
	}

	/// Consumes the next character if it is `expected`
	fn eat(&mut self, expected: char) -> bool {
		let matches = self.next_is(expected);
		if matches {
			self.characters.next();
		}
		matches
	}

	fn offset(&mut self) -> usize {
		self.characters.peek().map_or(self.script.len(), |(idx, _)| *idx)
	}

	fn skip_line_comment(&mut self) {
		while let Some((_, character)) = self.characters.peek() {
			if *character == '\n' {
				break;
			}
			self.characters.next();
		}
	}

	fn skip_multiline_comment(&mut self, start: usize) -> ParseResult<()> {
		// '*'
		self.characters.next();
		loop {
			match self.characters.next() {
				Some((_, '*')) if self.eat('/') => return Ok(()),
				Some((_, '\n')) => self.new_line = true,
				Some(_) => {}
				None => {
					return Err(ParseError::new(
						ParseErrors::UnterminatedComment,
						start_end(start, self.script.len()),
					))
				}
			}
		}
	}

	fn string_literal(&mut self, start: usize, quote: char) -> ParseResult<()> {
		loop {
			match self.characters.next() {
				Some((_, '\\')) => {
					self.characters.next();
				}
				Some((idx, character)) if character == quote => {
					let content = self.script[start + 1..idx].to_owned();
					let quoted = if quote == '"' { Quoted::Double } else { Quoted::Single };
					self.push(JSToken::StringLiteral(content, quoted), start_end(start, idx + 1));
					return Ok(());
				}
				Some((idx, '\n')) => {
					return Err(ParseError::new(
						ParseErrors::UnterminatedStringLiteral,
						start_end(start, idx),
					))
				}
				Some(_) => {}
				None => {
					return Err(ParseError::new(
						ParseErrors::UnterminatedStringLiteral,
						start_end(start, self.script.len()),
					))
				}
			}
		}
	}

	fn number_literal(&mut self, start: usize) {
		let is_zero = self.script[start..].starts_with('0');
		if is_zero && (self.eat('x') || self.eat('X')) {
			self.eat_while(|character| character.is_ascii_hexdigit());
		} else {
			self.eat_while(|character| character.is_ascii_digit());
			if self.eat('.') {
				self.eat_while(|character| character.is_ascii_digit());
			}
			if self.eat('e') || self.eat('E') {
				let _ = self.eat('+') || self.eat('-');
				self.eat_while(|character| character.is_ascii_digit());
			}
		}
		let end = self.offset();
		let script = self.script;
		self.push(JSToken::NumberLiteral(script[start..end].to_owned()), start_end(start, end));
	}

	fn identifier_or_keyword(&mut self, start: usize) {
		self.eat_while(is_identifier_part);
		let end = self.offset();
		let script = self.script;
		let name = &script[start..end];
		let kind = match JSKeyword::from_identifier(name) {
			Some(keyword) => JSToken::Keyword(keyword),
			None => JSToken::Identifier(name.to_owned()),
		};
		self.push(kind, start_end(start, end));
	}

	fn eat_while(&mut self, predicate: impl Fn(char) -> bool) {
		while self.characters.peek().is_some_and(|(_, character)| predicate(*character)) {
			self.characters.next();
		}
	}

	fn punctuator(&mut self, start: usize, character: char) -> ParseResult<()> {
		let kind = match character {
			'{' => JSToken::OpenBrace,
			'}' => JSToken::CloseBrace,
			'(' => JSToken::OpenParentheses,
			')' => JSToken::CloseParentheses,
			'[' => JSToken::OpenBracket,
			']' => JSToken::CloseBracket,
			',' => JSToken::Comma,
			';' => JSToken::SemiColon,
			':' => JSToken::Colon,
			'.' => JSToken::Dot,
			'+' => JSToken::Add,
			'-' => JSToken::Subtract,
			'*' => JSToken::Multiply,
			'/' => JSToken::Divide,
			'=' => {
				if self.eat('=') {
					if self.eat('=') {
						JSToken::StrictEqual
					} else {
						JSToken::Equal
					}
				} else {
					JSToken::Assign
				}
			}
			'!' => {
				if self.eat('=') {
					if self.eat('=') {
						JSToken::StrictNotEqual
					} else {
						JSToken::NotEqual
					}
				} else {
					JSToken::LogicalNot
				}
			}
			'<' => {
				if self.eat('=') {
					JSToken::LessThanEqual
				} else {
					JSToken::LessThan
				}
			}
			'>' => {
				if self.eat('=') {
					JSToken::GreaterThanEqual
				} else {
					JSToken::GreaterThan
				}
			}
			'&' if self.eat('&') => JSToken::LogicalAnd,
			'|' if self.eat('|') => JSToken::LogicalOr,
			found => {
				return Err(ParseError::new(
					ParseErrors::UnexpectedCharacter { found },
					start_end(start, start + found.len_utf8()),
				));
			}
		};
		let end = self.offset();
		self.push(kind, start_end(start, end));
		Ok(())
	}
}

#[allow(clippy::cast_possible_truncation)]
fn start_end(start: usize, end: usize) -> Span {
	Span { start: start as u32, end: end as u32 }
}
