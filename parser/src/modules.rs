use crate::{
	block::{parse_statements, statements_to_string, visit_statements_mut},
	visiting::{Chain, ChainVariable, VisitorMutReceiver},
	ASTNode, LocalToStringInformation, ParseResult, Span, Statement, ToStringOptions, TokenReader,
};

/// A whole source file
#[derive(Debug, Clone)]
pub struct Module {
	pub items: Vec<Statement>,
	pub span: Span,
}

impl PartialEq for Module {
	fn eq(&self, other: &Self) -> bool {
		self.items == other.items
	}
}

impl ASTNode for Module {
	fn get_position(&self) -> Span {
		self.span
	}

	fn from_reader(reader: &mut TokenReader) -> ParseResult<Self> {
		let items = parse_statements(reader)?;
		reader.expect_end()?;
		let span = Span { start: 0, end: reader.peek().position.end };
		Ok(Module { items, span })
	}

	fn to_string_from_buffer(
		&self,
		buf: &mut String,
		options: &ToStringOptions,
		local: LocalToStringInformation,
	) {
		statements_to_string(&self.items, buf, options, local);
	}
}

impl Module {
	/// Visits every statement and expression, top down. Visitors may replace the item they are
	/// given, the replacement's children are then visited
	pub fn visit_mut<TData>(
		&mut self,
		visitors: &mut (impl VisitorMutReceiver<TData> + ?Sized),
		data: &mut TData,
	) {
		let mut chain = Chain::new_with_initial(ChainVariable::Module);
		let mut chain = temporary_annex::Annex::new(&mut chain);
		visit_statements_mut(&mut self.items, self.span, visitors, data, &mut chain);
	}
}
