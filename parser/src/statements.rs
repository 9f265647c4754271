use derive_partial_eq_extras::PartialEqExtras;

use crate::{
	visiting::{Chain, Visitable, VisitorMutReceiver},
	ASTNode, Block, BlockOrSingleStatement, Expression, FunctionBase, JSKeyword, JSToken,
	LocalToStringInformation, ParseError, ParseErrors, ParseResult, Span, ToStringOptions,
	TokenReader,
};

/// A statement. Declarations are included here as the subset has no exports or types
#[derive(Debug, Clone, PartialEqExtras)]
#[partial_eq_ignore_types(Span)]
pub enum Statement {
	Expression(Expression, Span),
	VariableDeclaration(VariableDeclaration),
	FunctionDeclaration(FunctionBase),
	If(IfStatement),
	Return(Option<Expression>, Span),
	Block(Block),
	/// `;`
	Empty(Span),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKeyword {
	Var,
	Let,
	Const,
}

impl VariableKeyword {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			VariableKeyword::Var => "var",
			VariableKeyword::Let => "let",
			VariableKeyword::Const => "const",
		}
	}
}

/// `var a = 1, b`
#[derive(Debug, Clone, PartialEqExtras)]
#[partial_eq_ignore_types(Span)]
pub struct VariableDeclaration {
	pub keyword: VariableKeyword,
	pub declarations: Vec<VariableDeclarationItem>,
	pub position: Span,
}

#[derive(Debug, Clone, PartialEqExtras)]
#[partial_eq_ignore_types(Span)]
pub struct VariableDeclarationItem {
	pub name: String,
	pub expression: Option<Expression>,
	pub position: Span,
}

#[derive(Debug, Clone, PartialEqExtras)]
#[partial_eq_ignore_types(Span)]
pub struct IfStatement {
	pub condition: Expression,
	pub inner: BlockOrSingleStatement,
	pub trailing_else: Option<BlockOrSingleStatement>,
	pub position: Span,
}

impl Statement {
	/// Whether a `;` (or automatic insertion point) must follow when in a statement list
	#[must_use]
	pub fn requires_semi_colon(&self) -> bool {
		matches!(self, Statement::Expression(..) | Statement::VariableDeclaration(..) | Statement::Return(..))
	}
}

/// Accepts `;`, or inserts one where the next token is on a new line, a `}` or the end
pub(crate) fn expect_semi_colon(reader: &mut TokenReader) -> ParseResult<()> {
	if reader.conditional_next(&JSToken::SemiColon).is_some() {
		return Ok(());
	}
	let next = reader.peek();
	if next.preceded_by_new_line || matches!(next.kind, JSToken::CloseBrace | JSToken::EOS) {
		Ok(())
	} else {
		Err(ParseError::new(ParseErrors::ExpectedSemiColon { found: &next.kind }, next.position))
	}
}

impl ASTNode for Statement {
	fn get_position(&self) -> Span {
		match self {
			Statement::Expression(_, position)
			| Statement::Return(_, position)
			| Statement::Empty(position) => *position,
			Statement::VariableDeclaration(declaration) => declaration.position,
			Statement::FunctionDeclaration(function) => function.position,
			Statement::If(if_statement) => if_statement.position,
			Statement::Block(block) => block.get_position(),
		}
	}

	fn from_reader(reader: &mut TokenReader) -> ParseResult<Self> {
		match reader.peek().kind {
			JSToken::Keyword(JSKeyword::Var | JSKeyword::Let | JSKeyword::Const) => {
				VariableDeclaration::from_reader(reader).map(Statement::VariableDeclaration)
			}
			JSToken::Keyword(JSKeyword::Function) => {
				FunctionBase::from_reader_with_name(reader, true).map(Statement::FunctionDeclaration)
			}
			JSToken::Keyword(JSKeyword::If) => IfStatement::from_reader(reader).map(Statement::If),
			JSToken::Keyword(JSKeyword::Return) => {
				let start = reader.next().position;
				let next = reader.peek();
				let has_value = !next.preceded_by_new_line
					&& !matches!(next.kind, JSToken::SemiColon | JSToken::CloseBrace | JSToken::EOS);
				if has_value {
					let expression = Expression::from_reader(reader)?;
					let position = start.union(&expression.get_position());
					Ok(Statement::Return(Some(expression), position))
				} else {
					Ok(Statement::Return(None, start))
				}
			}
			JSToken::OpenBrace => Block::from_reader(reader).map(Statement::Block),
			JSToken::SemiColon => Ok(Statement::Empty(reader.next().position)),
			_ => {
				let expression = Expression::from_reader(reader)?;
				let position = expression.get_position();
				Ok(Statement::Expression(expression, position))
			}
		}
	}

	fn to_string_from_buffer(
		&self,
		buf: &mut String,
		options: &ToStringOptions,
		local: LocalToStringInformation,
	) {
		match self {
			Statement::Expression(expression, _) => {
				if expression.is_ambiguous_at_statement_start() {
					buf.push('(');
					expression.to_string_from_buffer(buf, options, local);
					buf.push(')');
				} else {
					expression.to_string_from_buffer(buf, options, local);
				}
			}
			Statement::VariableDeclaration(declaration) => {
				declaration.to_string_from_buffer(buf, options, local);
			}
			Statement::FunctionDeclaration(function) => {
				function.to_string_from_buffer(buf, options, local);
			}
			Statement::If(if_statement) => if_statement.to_string_from_buffer(buf, options, local),
			Statement::Return(expression, _) => {
				buf.push_str("return");
				if let Some(expression) = expression {
					buf.push(' ');
					expression.to_string_from_buffer(buf, options, local);
				}
			}
			Statement::Block(block) => block.to_string_from_buffer(buf, options, local),
			Statement::Empty(_) => buf.push(';'),
		}
	}
}

impl Visitable for Statement {
	fn visit_mut<TData>(
		&mut self,
		visitors: &mut (impl VisitorMutReceiver<TData> + ?Sized),
		data: &mut TData,
		chain: &mut temporary_annex::Annex<Chain>,
	) {
		visitors.visit_statement_mut(self, data, chain);
		match self {
			Statement::Expression(expression, _) => expression.visit_mut(visitors, data, chain),
			Statement::VariableDeclaration(declaration) => {
				for item in &mut declaration.declarations {
					item.expression.visit_mut(visitors, data, chain);
				}
			}
			Statement::FunctionDeclaration(function) => function.visit_mut(visitors, data, chain),
			Statement::If(IfStatement { condition, inner, trailing_else, .. }) => {
				condition.visit_mut(visitors, data, chain);
				inner.visit_mut(visitors, data, chain);
				trailing_else.visit_mut(visitors, data, chain);
			}
			Statement::Return(expression, _) => expression.visit_mut(visitors, data, chain),
			Statement::Block(block) => block.visit_mut(visitors, data, chain),
			Statement::Empty(_) => {}
		}
	}
}

impl ASTNode for VariableDeclaration {
	fn get_position(&self) -> Span {
		self.position
	}

	fn from_reader(reader: &mut TokenReader) -> ParseResult<Self> {
		let token = reader.next();
		let keyword = match token.kind {
			JSToken::Keyword(JSKeyword::Var) => VariableKeyword::Var,
			JSToken::Keyword(JSKeyword::Let) => VariableKeyword::Let,
			JSToken::Keyword(JSKeyword::Const) => VariableKeyword::Const,
			found => {
				return Err(ParseError::new(
					ParseErrors::UnexpectedToken {
						expected: &JSToken::Keyword(JSKeyword::Var),
						found: &found,
					},
					token.position,
				))
			}
		};
		let mut declarations = Vec::new();
		loop {
			let (name, name_position) = reader.expect_identifier("variable declaration")?;
			let expression = if reader.conditional_next(&JSToken::Assign).is_some() {
				Some(Expression::from_reader(reader)?)
			} else {
				None
			};
			let position = match &expression {
				Some(expression) => name_position.union(&expression.get_position()),
				None => name_position,
			};
			declarations.push(VariableDeclarationItem { name, expression, position });
			if reader.conditional_next(&JSToken::Comma).is_none() {
				break;
			}
		}
		let position = declarations.last().map_or(token.position, |last| token.position.union(&last.position));
		Ok(VariableDeclaration { keyword, declarations, position })
	}

	fn to_string_from_buffer(
		&self,
		buf: &mut String,
		options: &ToStringOptions,
		local: LocalToStringInformation,
	) {
		buf.push_str(self.keyword.as_str());
		buf.push(' ');
		for (idx, item) in self.declarations.iter().enumerate() {
			if idx > 0 {
				buf.push(',');
				options.push_gap_optionally(buf);
			}
			buf.push_str(&item.name);
			if let Some(expression) = &item.expression {
				options.push_gap_optionally(buf);
				buf.push('=');
				options.push_gap_optionally(buf);
				expression.to_string_using_precedence(
					buf,
					options,
					local,
					crate::operators::ASSIGNMENT_PRECEDENCE,
				);
			}
		}
	}
}

impl ASTNode for IfStatement {
	fn get_position(&self) -> Span {
		self.position
	}

	fn from_reader(reader: &mut TokenReader) -> ParseResult<Self> {
		let start = reader.expect_next(&JSToken::Keyword(JSKeyword::If))?;
		reader.expect_next(&JSToken::OpenParentheses)?;
		let condition = Expression::from_reader(reader)?;
		reader.expect_next(&JSToken::CloseParentheses)?;
		let inner = BlockOrSingleStatement::from_reader(reader)?;
		let trailing_else = if reader.conditional_next(&JSToken::Keyword(JSKeyword::Else)).is_some() {
			Some(BlockOrSingleStatement::from_reader(reader)?)
		} else {
			None
		};
		let end = trailing_else.as_ref().unwrap_or(&inner).get_position();
		Ok(IfStatement { condition, inner, trailing_else, position: start.union(&end) })
	}

	fn to_string_from_buffer(
		&self,
		buf: &mut String,
		options: &ToStringOptions,
		local: LocalToStringInformation,
	) {
		buf.push_str("if");
		options.push_gap_optionally(buf);
		buf.push('(');
		self.condition.to_string_from_buffer(buf, options, local);
		buf.push(')');
		options.push_gap_optionally(buf);
		self.inner.to_string_from_buffer(buf, options, local);
		if let Some(trailing_else) = &self.trailing_else {
			options.push_gap_optionally(buf);
			buf.push_str("else");
			if options.pretty || matches!(trailing_else, BlockOrSingleStatement::SingleStatement(_)) {
				buf.push(' ');
			}
			trailing_else.to_string_from_buffer(buf, options, local);
		}
	}
}
