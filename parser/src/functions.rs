use derive_partial_eq_extras::PartialEqExtras;
use temporary_annex::Annexable;

use crate::{
	bracketed_items_from_reader, bracketed_items_to_string,
	block::visit_statements_mut,
	visiting::{Chain, ChainVariable, Visitable, VisitorMutReceiver},
	ASTNode, Block, JSKeyword, JSToken, LocalToStringInformation, ParseResult, Span,
	ToStringOptions, TokenReader,
};

/// Shared by function declarations and function expressions
#[derive(Debug, Clone, PartialEqExtras)]
#[partial_eq_ignore_types(Span)]
pub struct FunctionBase {
	pub name: Option<String>,
	pub parameters: Vec<String>,
	pub body: Block,
	pub position: Span,
}

impl FunctionBase {
	/// Declarations require a name, expressions do not
	pub fn from_reader_with_name(reader: &mut TokenReader, name_required: bool) -> ParseResult<Self> {
		let start = reader.expect_next(&JSToken::Keyword(JSKeyword::Function))?;
		let name = if name_required || matches!(reader.peek().kind, JSToken::Identifier(_)) {
			Some(reader.expect_identifier("function name")?.0)
		} else {
			None
		};
		reader.expect_next(&JSToken::OpenParentheses)?;
		let (parameters, _) =
			bracketed_items_from_reader(reader, &JSToken::CloseParentheses, |reader| {
				reader.expect_identifier("function parameter").map(|(name, _)| name)
			})?;
		let body = Block::from_reader(reader)?;
		let position = start.union(&body.get_position());
		Ok(FunctionBase { name, parameters, body, position })
	}
}

impl ASTNode for FunctionBase {
	fn get_position(&self) -> Span {
		self.position
	}

	fn from_reader(reader: &mut TokenReader) -> ParseResult<Self> {
		Self::from_reader_with_name(reader, false)
	}

	fn to_string_from_buffer(
		&self,
		buf: &mut String,
		options: &ToStringOptions,
		local: LocalToStringInformation,
	) {
		buf.push_str("function");
		if let Some(name) = &self.name {
			buf.push(' ');
			buf.push_str(name);
		}
		bracketed_items_to_string(&self.parameters, ('(', ')'), buf, options, |parameter, buf| {
			buf.push_str(parameter);
		});
		options.push_gap_optionally(buf);
		self.body.to_string_from_buffer(buf, options, local);
	}
}

impl Visitable for FunctionBase {
	fn visit_mut<TData>(
		&mut self,
		visitors: &mut (impl VisitorMutReceiver<TData> + ?Sized),
		data: &mut TData,
		chain: &mut temporary_annex::Annex<Chain>,
	) {
		let mut chain = chain.push_annex(ChainVariable::Function(self.position));
		visit_statements_mut(&mut self.body.0, self.body.1, visitors, data, &mut chain);
	}
}
