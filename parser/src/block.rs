use derive_enum_from_into::EnumFrom;
use temporary_annex::Annexable;

use crate::{
	statements::expect_semi_colon,
	visiting::{Chain, ChainVariable, Visitable, VisitorMutReceiver},
	ASTNode, JSToken, LocalToStringInformation, ParseResult, Span, Statement, ToStringOptions,
	TokenReader,
};

/// A "block" of braced statements
#[derive(Debug, Clone)]
pub struct Block(pub Vec<Statement>, pub Span);

impl Eq for Block {}

impl PartialEq for Block {
	fn eq(&self, other: &Self) -> bool {
		self.0 == other.0
	}
}

/// The statements of a [`Block`], function body or module, handed to block visitors
pub struct BlockLikeMut<'a> {
	pub items: &'a mut Vec<Statement>,
	pub position: Span,
}

impl<'a> From<&'a mut Block> for BlockLikeMut<'a> {
	fn from(block: &'a mut Block) -> Self {
		BlockLikeMut { items: &mut block.0, position: block.1 }
	}
}

impl ASTNode for Block {
	fn get_position(&self) -> Span {
		self.1
	}

	fn from_reader(reader: &mut TokenReader) -> ParseResult<Self> {
		let start = reader.expect_next(&JSToken::OpenBrace)?;
		let items = parse_statements(reader)?;
		let end = reader.expect_next(&JSToken::CloseBrace)?;
		Ok(Self(items, start.union(&end)))
	}

	fn to_string_from_buffer(
		&self,
		buf: &mut String,
		options: &ToStringOptions,
		local: LocalToStringInformation,
	) {
		if self.0.is_empty() {
			buf.push_str("{}");
			return;
		}
		buf.push('{');
		options.push_new_line_optionally(buf);
		statements_to_string(&self.0, buf, options, local.next_level());
		options.push_new_line_optionally(buf);
		options.add_indent(local.depth, buf);
		buf.push('}');
	}
}

impl Visitable for Block {
	fn visit_mut<TData>(
		&mut self,
		visitors: &mut (impl VisitorMutReceiver<TData> + ?Sized),
		data: &mut TData,
		chain: &mut temporary_annex::Annex<Chain>,
	) {
		let mut chain = chain.push_annex(ChainVariable::Block(self.1));
		visit_statements_mut(&mut self.0, self.1, visitors, data, &mut chain);
	}
}

/// For ifs and other statements
#[derive(Debug, Clone, PartialEq, EnumFrom)]
pub enum BlockOrSingleStatement {
	Braced(Block),
	SingleStatement(Box<Statement>),
}

impl From<Statement> for BlockOrSingleStatement {
	fn from(statement: Statement) -> Self {
		Self::SingleStatement(Box::new(statement))
	}
}

impl ASTNode for BlockOrSingleStatement {
	fn get_position(&self) -> Span {
		match self {
			BlockOrSingleStatement::Braced(block) => block.get_position(),
			BlockOrSingleStatement::SingleStatement(statement) => statement.get_position(),
		}
	}

	fn from_reader(reader: &mut TokenReader) -> ParseResult<Self> {
		let statement = Statement::from_reader(reader)?;
		Ok(match statement {
			Statement::Block(block) => Self::Braced(block),
			statement => {
				if statement.requires_semi_colon() {
					expect_semi_colon(reader)?;
				}
				statement.into()
			}
		})
	}

	fn to_string_from_buffer(
		&self,
		buf: &mut String,
		options: &ToStringOptions,
		local: LocalToStringInformation,
	) {
		match self {
			BlockOrSingleStatement::Braced(block) => {
				block.to_string_from_buffer(buf, options, local);
			}
			BlockOrSingleStatement::SingleStatement(statement) => {
				statement.to_string_from_buffer(buf, options, local);
				if statement.requires_semi_colon() {
					buf.push(';');
				}
			}
		}
	}
}

impl Visitable for BlockOrSingleStatement {
	fn visit_mut<TData>(
		&mut self,
		visitors: &mut (impl VisitorMutReceiver<TData> + ?Sized),
		data: &mut TData,
		chain: &mut temporary_annex::Annex<Chain>,
	) {
		match self {
			BlockOrSingleStatement::Braced(block) => block.visit_mut(visitors, data, chain),
			BlockOrSingleStatement::SingleStatement(statement) => {
				statement.visit_mut(visitors, data, chain);
			}
		}
	}
}

/// Parses statements up to a closing brace or the end of the source
pub(crate) fn parse_statements(reader: &mut TokenReader) -> ParseResult<Vec<Statement>> {
	let mut items = Vec::new();
	while !matches!(reader.peek().kind, JSToken::CloseBrace | JSToken::EOS) {
		let item = Statement::from_reader(reader)?;
		if item.requires_semi_colon() {
			expect_semi_colon(reader)?;
		}
		items.push(item);
	}
	Ok(items)
}

/// Each statement on its own line, indented to `local.depth`
pub(crate) fn statements_to_string(
	items: &[Statement],
	buf: &mut String,
	options: &ToStringOptions,
	local: LocalToStringInformation,
) {
	for (idx, item) in items.iter().enumerate() {
		if idx > 0 {
			options.push_new_line_optionally(buf);
		}
		options.add_indent(local.depth, buf);
		item.to_string_from_buffer(buf, options, local);
		if item.requires_semi_colon() {
			buf.push(';');
		}
	}
}

/// Block visitors see the list first, then each remaining statement is visited
pub(crate) fn visit_statements_mut<TData>(
	items: &mut Vec<Statement>,
	position: Span,
	visitors: &mut (impl VisitorMutReceiver<TData> + ?Sized),
	data: &mut TData,
	chain: &mut temporary_annex::Annex<Chain>,
) {
	{
		visitors.visit_block_mut(&mut BlockLikeMut { items: &mut *items, position }, data, chain);
	}
	items.iter_mut().for_each(|item| item.visit_mut(visitors, data, chain));
}
