pub use crate::block::BlockLikeMut;
pub use ast::*;
pub use structures::*;
pub use visitors_mut::*;

mod ast {
	use temporary_annex::Annex;

	use super::{Chain, VisitorMutReceiver};
	use crate::Expression;

	/// For something to visitable it can visit all nested fields.
	pub trait Visitable {
		fn visit_mut<TData>(
			&mut self,
			visitors: &mut (impl VisitorMutReceiver<TData> + ?Sized),
			data: &mut TData,
			chain: &mut Annex<Chain>,
		);
	}

	// Implementing Visitable to some structures that are commonly used in AST
	impl<T: Visitable> Visitable for Box<T> {
		fn visit_mut<TData>(
			&mut self,
			v: &mut (impl VisitorMutReceiver<TData> + ?Sized),
			d: &mut TData,
			c: &mut Annex<Chain>,
		) {
			Visitable::visit_mut(&mut **self, v, d, c);
		}
	}

	impl<T: Visitable> Visitable for Vec<T> {
		fn visit_mut<TData>(
			&mut self,
			v: &mut (impl VisitorMutReceiver<TData> + ?Sized),
			d: &mut TData,
			c: &mut Annex<Chain>,
		) {
			self.iter_mut().for_each(|item| item.visit_mut(v, d, c));
		}
	}

	impl<T: Visitable> Visitable for Option<T> {
		fn visit_mut<TData>(
			&mut self,
			v: &mut (impl VisitorMutReceiver<TData> + ?Sized),
			d: &mut TData,
			c: &mut Annex<Chain>,
		) {
			if let Some(item) = self {
				item.visit_mut(v, d, c);
			}
		}
	}

	/// The expression is handed to visitors before its children. If a visitor replaces it, the
	/// children of the replacement are visited
	impl Visitable for Expression {
		fn visit_mut<TData>(
			&mut self,
			visitors: &mut (impl VisitorMutReceiver<TData> + ?Sized),
			data: &mut TData,
			chain: &mut Annex<Chain>,
		) {
			visitors.visit_expression_mut(self, data, chain);
			self.visit_children_mut(visitors, data, chain);
		}
	}

	impl Expression {
		fn visit_children_mut<TData>(
			&mut self,
			visitors: &mut (impl VisitorMutReceiver<TData> + ?Sized),
			data: &mut TData,
			chain: &mut Annex<Chain>,
		) {
			match self {
				Expression::NumberLiteral(..)
				| Expression::StringLiteral(..)
				| Expression::BooleanLiteral(..)
				| Expression::NullLiteral(..)
				| Expression::Undefined(..)
				| Expression::VariableReference(..) => {}
				Expression::ArrayLiteral(items, _) => items.visit_mut(visitors, data, chain),
				Expression::ObjectLiteral(members, _) => {
					for member in members {
						member.value.visit_mut(visitors, data, chain);
					}
				}
				Expression::FunctionExpression(function) => function.visit_mut(visitors, data, chain),
				Expression::Parenthesised(inner, _) => inner.visit_mut(visitors, data, chain),
				Expression::PropertyAccess { parent, .. } => parent.visit_mut(visitors, data, chain),
				Expression::Index { indexee, indexer, .. } => {
					indexee.visit_mut(visitors, data, chain);
					indexer.visit_mut(visitors, data, chain);
				}
				Expression::FunctionCall { function, arguments, .. } => {
					function.visit_mut(visitors, data, chain);
					arguments.visit_mut(visitors, data, chain);
				}
				Expression::UnaryOperation { operand, .. } => operand.visit_mut(visitors, data, chain),
				Expression::BinaryOperation { lhs, rhs, .. } => {
					lhs.visit_mut(visitors, data, chain);
					rhs.visit_mut(visitors, data, chain);
				}
				// The target is written, not read. Only the parts it reads are handed to visitors
				Expression::Assignment { lhs, rhs, .. } => {
					lhs.visit_children_mut(visitors, data, chain);
					rhs.visit_mut(visitors, data, chain);
				}
			}
		}
	}
}

/// These are structures used when visiting AST
mod structures {
	use crate::Span;
	use temporary_annex::{Annex, Annexable};

	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub enum ChainVariable {
		Module,
		Function(Span),
		Block(Span),
	}

	/// The current location in the AST
	#[derive(Debug, Clone)]
	pub struct Chain(Vec<ChainVariable>);

	impl Chain {
		#[must_use]
		pub fn new() -> Self {
			Self(Vec::with_capacity(10))
		}

		#[must_use]
		pub fn new_with_initial(initial: ChainVariable) -> Self {
			let mut buf = Vec::with_capacity(10);
			buf.push(initial);
			Self(buf)
		}

		#[must_use]
		pub fn len(&self) -> usize {
			self.0.len()
		}

		#[must_use]
		pub fn is_empty(&self) -> bool {
			self.0.is_empty()
		}

		#[must_use]
		pub fn get_chain(&self) -> &[ChainVariable] {
			&self.0
		}

		/// Number of functions surrounding the current position
		#[must_use]
		pub fn function_depth(&self) -> usize {
			self.0.iter().filter(|item| matches!(item, ChainVariable::Function(_))).count()
		}
	}

	impl Annexable for Chain {
		type NewItem = ChainVariable;

		fn push_annex(&mut self, item: Self::NewItem) -> Annex<Self>
		where
			Self: Sized,
		{
			self.0.push(item);
			Annex::new(self)
		}

		fn revert_annex(&mut self) {
			self.0.pop();
		}
	}
}

mod visitors_mut {
	use super::{BlockLikeMut, Chain};
	use crate::{Expression, Statement};

	/// A visitor over something which is hooked with some Data
	pub trait VisitorMut<Item, Data> {
		fn visit_mut(&mut self, item: &mut Item, data: &mut Data, chain: &Chain);
	}

	/// These are a receiver traits of the visitor
	#[allow(unused_variables)]
	pub trait VisitorMutReceiver<T> {
		fn visit_expression_mut(
			&mut self,
			expression: &mut Expression,
			data: &mut T,
			chain: &Chain,
		) {
		}

		fn visit_statement_mut(&mut self, statement: &mut Statement, data: &mut T, chain: &Chain) {}

		fn visit_block_mut(&mut self, block: &mut BlockLikeMut, data: &mut T, chain: &Chain) {}
	}

	impl<T> VisitorMutReceiver<T> for VisitorsMut<T> {
		fn visit_expression_mut(
			&mut self,
			expression: &mut Expression,
			data: &mut T,
			chain: &Chain,
		) {
			self.expression_visitors_mut.iter_mut().for_each(|vis| vis.visit_mut(expression, data, chain));
		}

		fn visit_statement_mut(&mut self, statement: &mut Statement, data: &mut T, chain: &Chain) {
			self.statement_visitors_mut.iter_mut().for_each(|vis| vis.visit_mut(statement, data, chain));
		}

		fn visit_block_mut(&mut self, block: &mut BlockLikeMut, data: &mut T, chain: &Chain) {
			self.block_visitors_mut.iter_mut().for_each(|vis| vis.visit_mut(block, data, chain));
		}
	}

	#[derive(Default)]
	pub struct VisitorsMut<T> {
		pub expression_visitors_mut: Vec<Box<dyn VisitorMut<Expression, T>>>,
		pub statement_visitors_mut: Vec<Box<dyn VisitorMut<Statement, T>>>,
		pub block_visitors_mut: Vec<Box<dyn for<'a> VisitorMut<BlockLikeMut<'a>, T>>>,
	}
}
