use derive_partial_eq_extras::PartialEqExtras;

use crate::{
	bracketed_items_from_reader, bracketed_items_to_string,
	operators::{
		BinaryOperator, UnaryOperator, ASSIGNMENT_PRECEDENCE, LOGICAL_OR_PRECEDENCE,
		MEMBER_ACCESS_PRECEDENCE, PRIMARY_PRECEDENCE, UNARY_PRECEDENCE,
	},
	ASTNode, FunctionBase, JSKeyword, JSToken, LocalToStringInformation, ParseError, ParseErrors,
	ParseResult, Quoted, Span, ToStringOptions, TokenReader,
};

/// Expression structures. Equality ignores positions and which quotes a string used
#[derive(Debug, Clone, PartialEqExtras)]
#[partial_eq_ignore_types(Span, Quoted)]
pub enum Expression {
	// Literals:
	NumberLiteral(String, Span),
	StringLiteral(String, Quoted, Span),
	BooleanLiteral(bool, Span),
	NullLiteral(Span),
	/// `void 0`
	Undefined(Span),
	ArrayLiteral(Vec<Expression>, Span),
	ObjectLiteral(Vec<ObjectLiteralMember>, Span),
	FunctionExpression(Box<FunctionBase>),
	Parenthesised(Box<Expression>, Span),
	/// e.g `x`
	VariableReference(String, Span),
	/// e.g `x.y`
	PropertyAccess {
		parent: Box<Expression>,
		property: String,
		position: Span,
	},
	/// e.g `x[y]`
	Index {
		indexee: Box<Expression>,
		indexer: Box<Expression>,
		position: Span,
	},
	FunctionCall {
		function: Box<Expression>,
		arguments: Vec<Expression>,
		position: Span,
	},
	UnaryOperation {
		operator: UnaryOperator,
		operand: Box<Expression>,
		position: Span,
	},
	BinaryOperation {
		lhs: Box<Expression>,
		operator: BinaryOperator,
		rhs: Box<Expression>,
		position: Span,
	},
	/// Only `=`. LHS is a variable reference, property access or index
	Assignment {
		lhs: Box<Expression>,
		rhs: Box<Expression>,
		position: Span,
	},
}

#[derive(Debug, Clone, PartialEqExtras)]
#[partial_eq_ignore_types(Span, Quoted)]
pub enum PropertyKey {
	Ident(String, Span),
	StringLiteral(String, Quoted, Span),
	NumberLiteral(String, Span),
}

impl PropertyKey {
	fn from_reader(reader: &mut TokenReader) -> ParseResult<Self> {
		let token = reader.next();
		match token.kind {
			JSToken::Identifier(name) => Ok(PropertyKey::Ident(name, token.position)),
			JSToken::Keyword(keyword) => {
				Ok(PropertyKey::Ident(keyword.as_str().to_owned(), token.position))
			}
			JSToken::StringLiteral(content, quoted) => {
				Ok(PropertyKey::StringLiteral(content, quoted, token.position))
			}
			JSToken::NumberLiteral(value) => Ok(PropertyKey::NumberLiteral(value, token.position)),
			found => Err(ParseError::new(ParseErrors::ExpectedPropertyKey { found: &found }, token.position)),
		}
	}

	fn to_string_from_buffer(&self, buf: &mut String) {
		match self {
			PropertyKey::Ident(name, _) | PropertyKey::NumberLiteral(name, _) => buf.push_str(name),
			PropertyKey::StringLiteral(content, quoted, _) => {
				buf.push(quoted.as_char());
				buf.push_str(content);
				buf.push(quoted.as_char());
			}
		}
	}
}

/// `key: value` inside of an object literal
#[derive(Debug, Clone, PartialEqExtras)]
#[partial_eq_ignore_types(Span)]
pub struct ObjectLiteralMember {
	pub key: PropertyKey,
	pub value: Expression,
	pub position: Span,
}

impl ASTNode for Expression {
	fn get_position(&self) -> Span {
		match self {
			Expression::NumberLiteral(_, position)
			| Expression::StringLiteral(_, _, position)
			| Expression::BooleanLiteral(_, position)
			| Expression::NullLiteral(position)
			| Expression::Undefined(position)
			| Expression::ArrayLiteral(_, position)
			| Expression::ObjectLiteral(_, position)
			| Expression::Parenthesised(_, position)
			| Expression::VariableReference(_, position)
			| Expression::PropertyAccess { position, .. }
			| Expression::Index { position, .. }
			| Expression::FunctionCall { position, .. }
			| Expression::UnaryOperation { position, .. }
			| Expression::BinaryOperation { position, .. }
			| Expression::Assignment { position, .. } => *position,
			Expression::FunctionExpression(function) => function.position,
		}
	}

	fn from_reader(reader: &mut TokenReader) -> ParseResult<Self> {
		Self::from_reader_with_precedence(reader, ASSIGNMENT_PRECEDENCE)
	}

	fn to_string_from_buffer(
		&self,
		buf: &mut String,
		options: &ToStringOptions,
		local: LocalToStringInformation,
	) {
		match self {
			Expression::NumberLiteral(value, _) => buf.push_str(value),
			Expression::StringLiteral(content, quoted, _) => {
				buf.push(quoted.as_char());
				buf.push_str(content);
				buf.push(quoted.as_char());
			}
			Expression::BooleanLiteral(value, _) => buf.push_str(if *value { "true" } else { "false" }),
			Expression::NullLiteral(_) => buf.push_str("null"),
			Expression::Undefined(_) => buf.push_str("void 0"),
			Expression::ArrayLiteral(items, _) => {
				bracketed_items_to_string(items, ('[', ']'), buf, options, |item, buf| {
					item.to_string_using_precedence(buf, options, local, ASSIGNMENT_PRECEDENCE);
				});
			}
			Expression::ObjectLiteral(members, _) => {
				if members.is_empty() {
					buf.push_str("{}");
					return;
				}
				buf.push('{');
				options.push_gap_optionally(buf);
				for (idx, member) in members.iter().enumerate() {
					if idx > 0 {
						buf.push(',');
						options.push_gap_optionally(buf);
					}
					member.key.to_string_from_buffer(buf);
					buf.push(':');
					options.push_gap_optionally(buf);
					member.value.to_string_using_precedence(
						buf,
						options,
						local,
						ASSIGNMENT_PRECEDENCE,
					);
				}
				options.push_gap_optionally(buf);
				buf.push('}');
			}
			Expression::FunctionExpression(function) => {
				function.to_string_from_buffer(buf, options, local);
			}
			Expression::Parenthesised(inner, _) => {
				buf.push('(');
				inner.to_string_from_buffer(buf, options, local);
				buf.push(')');
			}
			Expression::VariableReference(name, _) => buf.push_str(name),
			Expression::PropertyAccess { parent, property, .. } => {
				// `1.toString` would be read as a decimal point
				let needs_parentheses = matches!(&**parent, Expression::NumberLiteral(value, _) if !value.contains(['.', 'e', 'E', 'x', 'X']));
				if needs_parentheses {
					buf.push('(');
					parent.to_string_from_buffer(buf, options, local);
					buf.push(')');
				} else {
					parent.to_string_using_precedence(buf, options, local, MEMBER_ACCESS_PRECEDENCE);
				}
				buf.push('.');
				buf.push_str(property);
			}
			Expression::Index { indexee, indexer, .. } => {
				indexee.to_string_using_precedence(buf, options, local, MEMBER_ACCESS_PRECEDENCE);
				buf.push('[');
				indexer.to_string_from_buffer(buf, options, local);
				buf.push(']');
			}
			Expression::FunctionCall { function, arguments, .. } => {
				function.to_string_using_precedence(buf, options, local, MEMBER_ACCESS_PRECEDENCE);
				bracketed_items_to_string(arguments, ('(', ')'), buf, options, |argument, buf| {
					argument.to_string_using_precedence(buf, options, local, ASSIGNMENT_PRECEDENCE);
				});
			}
			Expression::UnaryOperation { operator, operand, .. } => {
				buf.push_str(operator.as_str());
				let operand_starts_with_same_sign = matches!(
					(operator, &**operand),
					(
						UnaryOperator::Negative,
						Expression::UnaryOperation { operator: UnaryOperator::Negative, .. }
					) | (
						UnaryOperator::Plus,
						Expression::UnaryOperation { operator: UnaryOperator::Plus, .. }
					)
				);
				if operator.is_keyword() || operand_starts_with_same_sign {
					buf.push(' ');
				}
				operand.to_string_using_precedence(buf, options, local, UNARY_PRECEDENCE);
			}
			Expression::BinaryOperation { lhs, operator, rhs, .. } => {
				let precedence = operator.precedence();
				lhs.to_string_using_precedence(buf, options, local, precedence);
				options.push_gap_optionally(buf);
				buf.push_str(operator.as_str());
				// `a - -b` must not become `a--b`
				let rhs_is_signed = matches!(
					&**rhs,
					Expression::UnaryOperation {
						operator: UnaryOperator::Negative | UnaryOperator::Plus,
						..
					}
				);
				if options.pretty || rhs_is_signed {
					buf.push(' ');
				}
				rhs.to_string_using_precedence(buf, options, local, precedence + 1);
			}
			Expression::Assignment { lhs, rhs, .. } => {
				lhs.to_string_using_precedence(buf, options, local, MEMBER_ACCESS_PRECEDENCE);
				options.push_gap_optionally(buf);
				buf.push('=');
				options.push_gap_optionally(buf);
				rhs.to_string_using_precedence(buf, options, local, ASSIGNMENT_PRECEDENCE);
			}
		}
	}
}

impl Expression {
	pub fn from_reader_with_precedence(
		reader: &mut TokenReader,
		return_precedence: u8,
	) -> ParseResult<Self> {
		if return_precedence <= ASSIGNMENT_PRECEDENCE {
			return Self::assignment_from_reader(reader);
		}
		let lhs = Self::unary_from_reader(reader)?;
		Self::binary_from_reader(reader, lhs, return_precedence)
	}

	fn assignment_from_reader(reader: &mut TokenReader) -> ParseResult<Self> {
		let lhs = Self::unary_from_reader(reader)?;
		let lhs = Self::binary_from_reader(reader, lhs, LOGICAL_OR_PRECEDENCE)?;
		if reader.peek().kind != JSToken::Assign {
			return Ok(lhs);
		}
		let assign_position = reader.next().position;
		if !matches!(
			lhs,
			Expression::VariableReference(..)
				| Expression::PropertyAccess { .. }
				| Expression::Index { .. }
		) {
			return Err(ParseError::new(ParseErrors::InvalidLHSAssignment, assign_position));
		}
		let rhs = Self::assignment_from_reader(reader)?;
		let position = lhs.get_position().union(&rhs.get_position());
		Ok(Expression::Assignment { lhs: Box::new(lhs), rhs: Box::new(rhs), position })
	}

	/// Precedence climbing, all binary operators are left associative
	fn binary_from_reader(
		reader: &mut TokenReader,
		mut lhs: Expression,
		minimum_precedence: u8,
	) -> ParseResult<Self> {
		while let Some(operator) = BinaryOperator::from_token(&reader.peek().kind) {
			let precedence = operator.precedence();
			if precedence < minimum_precedence {
				break;
			}
			reader.next();
			let rhs = Self::unary_from_reader(reader)?;
			let rhs = Self::binary_from_reader(reader, rhs, precedence + 1)?;
			let position = lhs.get_position().union(&rhs.get_position());
			lhs = Expression::BinaryOperation {
				lhs: Box::new(lhs),
				operator,
				rhs: Box::new(rhs),
				position,
			};
		}
		Ok(lhs)
	}

	fn unary_from_reader(reader: &mut TokenReader) -> ParseResult<Self> {
		let Some(operator) = UnaryOperator::from_token(&reader.peek().kind) else {
			return Self::member_or_call_from_reader(reader);
		};
		let start = reader.next().position;
		let operand = Self::unary_from_reader(reader)?;
		let position = start.union(&operand.get_position());
		if let (UnaryOperator::Void, Expression::NumberLiteral(value, _)) = (operator, &operand) {
			if value == "0" {
				return Ok(Expression::Undefined(position));
			}
		}
		Ok(Expression::UnaryOperation { operator, operand: Box::new(operand), position })
	}

	fn member_or_call_from_reader(reader: &mut TokenReader) -> ParseResult<Self> {
		let mut expression = Self::primary_from_reader(reader)?;
		loop {
			match reader.peek().kind {
				JSToken::Dot => {
					reader.next();
					let (property, property_position) = reader.expect_property_name()?;
					let position = expression.get_position().union(&property_position);
					expression =
						Expression::PropertyAccess { parent: Box::new(expression), property, position };
				}
				JSToken::OpenBracket => {
					reader.next();
					let indexer = Expression::from_reader(reader)?;
					let end = reader.expect_next(&JSToken::CloseBracket)?;
					let position = expression.get_position().union(&end);
					expression = Expression::Index {
						indexee: Box::new(expression),
						indexer: Box::new(indexer),
						position,
					};
				}
				JSToken::OpenParentheses => {
					reader.next();
					let (arguments, end) = bracketed_items_from_reader(
						reader,
						&JSToken::CloseParentheses,
						Expression::from_reader,
					)?;
					let position = expression.get_position().union(&end);
					expression =
						Expression::FunctionCall { function: Box::new(expression), arguments, position };
				}
				_ => return Ok(expression),
			}
		}
	}

	fn primary_from_reader(reader: &mut TokenReader) -> ParseResult<Self> {
		if let JSToken::Keyword(JSKeyword::Function) = reader.peek().kind {
			let function = FunctionBase::from_reader(reader)?;
			return Ok(Expression::FunctionExpression(Box::new(function)));
		}
		let token = reader.next();
		let position = token.position;
		match token.kind {
			JSToken::NumberLiteral(value) => Ok(Expression::NumberLiteral(value, position)),
			JSToken::StringLiteral(content, quoted) => {
				Ok(Expression::StringLiteral(content, quoted, position))
			}
			JSToken::Keyword(JSKeyword::True) => Ok(Expression::BooleanLiteral(true, position)),
			JSToken::Keyword(JSKeyword::False) => Ok(Expression::BooleanLiteral(false, position)),
			JSToken::Keyword(JSKeyword::Null) => Ok(Expression::NullLiteral(position)),
			JSToken::Identifier(name) => Ok(Expression::VariableReference(name, position)),
			JSToken::OpenParentheses => {
				let inner = Expression::from_reader(reader)?;
				let end = reader.expect_next(&JSToken::CloseParentheses)?;
				Ok(Expression::Parenthesised(Box::new(inner), position.union(&end)))
			}
			JSToken::OpenBracket => {
				let (items, end) =
					bracketed_items_from_reader(reader, &JSToken::CloseBracket, Expression::from_reader)?;
				Ok(Expression::ArrayLiteral(items, position.union(&end)))
			}
			JSToken::OpenBrace => {
				let (members, end) =
					bracketed_items_from_reader(reader, &JSToken::CloseBrace, |reader| {
						let key = PropertyKey::from_reader(reader)?;
						reader.expect_next(&JSToken::Colon)?;
						let value = Expression::from_reader(reader)?;
						let position = key.get_position().union(&value.get_position());
						Ok(ObjectLiteralMember { key, value, position })
					})?;
				Ok(Expression::ObjectLiteral(members, position.union(&end)))
			}
			found => Err(ParseError::new(ParseErrors::ExpectedExpression { found: &found }, position)),
		}
	}

	#[must_use]
	pub fn get_precedence(&self) -> u8 {
		match self {
			Expression::Assignment { .. } => ASSIGNMENT_PRECEDENCE,
			Expression::BinaryOperation { operator, .. } => operator.precedence(),
			Expression::UnaryOperation { .. } | Expression::Undefined(_) => UNARY_PRECEDENCE,
			Expression::FunctionCall { .. }
			| Expression::PropertyAccess { .. }
			| Expression::Index { .. } => MEMBER_ACCESS_PRECEDENCE,
			_ => PRIMARY_PRECEDENCE,
		}
	}

	/// Wraps in parentheses if this binds looser than the position requires
	pub fn to_string_using_precedence(
		&self,
		buf: &mut String,
		options: &ToStringOptions,
		local: LocalToStringInformation,
		minimum_precedence: u8,
	) {
		if self.get_precedence() < minimum_precedence {
			buf.push('(');
			self.to_string_from_buffer(buf, options, local);
			buf.push(')');
		} else {
			self.to_string_from_buffer(buf, options, local);
		}
	}

	/// Whether printing this at the start of a statement would be read as a block or function declaration
	#[must_use]
	pub fn is_ambiguous_at_statement_start(&self) -> bool {
		match self {
			Expression::ObjectLiteral(..) | Expression::FunctionExpression(..) => true,
			Expression::PropertyAccess { parent: leftmost, .. }
			| Expression::Index { indexee: leftmost, .. }
			| Expression::FunctionCall { function: leftmost, .. }
			| Expression::BinaryOperation { lhs: leftmost, .. }
			| Expression::Assignment { lhs: leftmost, .. } => {
				// Already wrapped when printed under its parent
				leftmost.get_precedence() >= self.get_precedence()
					&& leftmost.is_ambiguous_at_statement_start()
			}
			_ => false,
		}
	}
}

impl PropertyKey {
	#[must_use]
	pub fn get_position(&self) -> Span {
		match self {
			PropertyKey::Ident(_, position)
			| PropertyKey::StringLiteral(_, _, position)
			| PropertyKey::NumberLiteral(_, position) => *position,
		}
	}

	/// The name as it would be accessed, e.g. `a`, `"a"` and `'a'` all give `a`
	#[must_use]
	pub fn as_str(&self) -> &str {
		match self {
			PropertyKey::Ident(name, _)
			| PropertyKey::StringLiteral(name, _, _)
			| PropertyKey::NumberLiteral(name, _) => name,
		}
	}
}
