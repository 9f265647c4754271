//! Removes development logging calls and folds build mode flags for production builds.
//!
//! - `log.dev.<suffix>(..)` calls, where the suffix is configured, are removed
//! - `log.dev.assert(a, ..)` is replaced by `a`
//! - `$mode.getMode().localDev`, `.test` and `.minified` become boolean literals when building for production

pub mod configuration;
pub mod patterns;

use std::fmt;

use parser::{
	visiting::{BlockLikeMut, Chain, VisitorMutReceiver},
	ASTNode, BlockOrSingleStatement, Expression, Module, Statement,
};

pub use configuration::{Configuration, ConfigurationError, ConfigurationOptions};
pub use patterns::{LiteralValue, MatchResult, ModeProperty};

use patterns::{classify_callee, describe, mode_property, without_parentheses, CallKind};

/// Counts of what a run changed
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RewriteStatistics {
	pub removed_calls: usize,
	pub folded_asserts: usize,
	pub replaced_mode_properties: usize,
}

impl RewriteStatistics {
	#[must_use]
	pub fn total(&self) -> usize {
		self.removed_calls + self.folded_asserts + self.replaced_mode_properties
	}

	fn record(&mut self, result: &MatchResult) {
		match result {
			MatchResult::NoMatch => {}
			MatchResult::RemoveStatement => self.removed_calls += 1,
			MatchResult::ReplaceWithExpression(_)
			| MatchResult::ReplaceWithLiteral(LiteralValue::Undefined) => self.folded_asserts += 1,
			MatchResult::ReplaceWithLiteral(LiteralValue::Boolean(_)) => {
				self.replaced_mode_properties += 1;
			}
		}
	}
}

impl fmt::Display for RewriteStatistics {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"removed {} calls, folded {} asserts, replaced {} mode properties",
			self.removed_calls, self.folded_asserts, self.replaced_mode_properties
		)
	}
}

/// State of an expression position after rewriting it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
	Occupied,
	/// The expression evaluated to nothing. The owner decides what to leave behind
	Vacated,
}

/// Single pass over a [`Module`]. Hooks run top down, so an argument that replaces its call is
/// matched again in the call's place before its own children are visited
pub struct PatternRewriter<'a> {
	configuration: &'a Configuration,
}

impl<'a> PatternRewriter<'a> {
	#[must_use]
	pub fn new(configuration: &'a Configuration) -> Self {
		Self { configuration }
	}

	/// Classifies `expression` without changing anything. A match applies to the whole
	/// expression, including any parentheses around it
	#[must_use]
	pub fn match_expression(&self, expression: &Expression) -> MatchResult {
		let expression = without_parentheses(expression);
		match expression {
			Expression::FunctionCall { function, arguments, .. } => {
				match classify_callee(function, self.configuration) {
					Some(CallKind::Strip) => MatchResult::RemoveStatement,
					Some(CallKind::Assert) => match arguments.first() {
						Some(first) => MatchResult::ReplaceWithExpression(first.clone()),
						None => MatchResult::ReplaceWithLiteral(LiteralValue::Undefined),
					},
					None => MatchResult::NoMatch,
				}
			}
			Expression::PropertyAccess { .. } if self.configuration.is_prod() => {
				match mode_property(expression, self.configuration) {
					Some(property) => MatchResult::ReplaceWithLiteral(LiteralValue::Boolean(
						property.value_in_production(),
					)),
					None => MatchResult::NoMatch,
				}
			}
			_ => MatchResult::NoMatch,
		}
	}

	/// Applies matches until the expression in the slot no longer matches
	fn rewrite_slot(&self, expression: &mut Expression, statistics: &mut RewriteStatistics) -> Slot {
		loop {
			let result = self.match_expression(expression);
			if result != MatchResult::NoMatch {
				tracing::debug!(shape = %describe(expression), ?result, "rewriting");
			}
			statistics.record(&result);
			match result {
				MatchResult::NoMatch => return Slot::Occupied,
				MatchResult::RemoveStatement
				| MatchResult::ReplaceWithLiteral(LiteralValue::Undefined) => return Slot::Vacated,
				MatchResult::ReplaceWithLiteral(LiteralValue::Boolean(value)) => {
					*expression = Expression::BooleanLiteral(value, expression.get_position());
					return Slot::Occupied;
				}
				MatchResult::ReplaceWithExpression(replacement) => {
					*expression = replacement;
				}
			}
		}
	}

	/// Returns whether the statement should be kept
	fn rewrite_statement(&self, statement: &mut Statement, statistics: &mut RewriteStatistics) -> bool {
		match statement {
			Statement::Expression(expression, _) => {
				self.rewrite_slot(expression, statistics) == Slot::Occupied
			}
			Statement::VariableDeclaration(declaration) => {
				for item in &mut declaration.declarations {
					if let Some(expression) = &mut item.expression {
						if self.rewrite_slot(expression, statistics) == Slot::Vacated {
							item.expression = None;
						}
					}
				}
				true
			}
			_ => true,
		}
	}
}

impl VisitorMutReceiver<RewriteStatistics> for PatternRewriter<'_> {
	fn visit_block_mut(
		&mut self,
		block: &mut BlockLikeMut,
		data: &mut RewriteStatistics,
		chain: &Chain,
	) {
		tracing::trace!(depth = chain.len(), statements = block.items.len(), "visiting block");
		block.items.retain_mut(|statement| self.rewrite_statement(statement, data));
	}

	fn visit_statement_mut(
		&mut self,
		statement: &mut Statement,
		data: &mut RewriteStatistics,
		_chain: &Chain,
	) {
		let Statement::If(if_statement) = statement else {
			return;
		};
		let branches = std::iter::once(&mut if_statement.inner).chain(if_statement.trailing_else.as_mut());
		for branch in branches {
			if let BlockOrSingleStatement::SingleStatement(statement) = branch {
				if !self.rewrite_statement(statement, data) {
					let position = statement.get_position();
					**statement = Statement::Empty(position);
				}
			}
		}
	}

	fn visit_expression_mut(
		&mut self,
		expression: &mut Expression,
		data: &mut RewriteStatistics,
		_chain: &Chain,
	) {
		if self.rewrite_slot(expression, data) == Slot::Vacated {
			*expression = Expression::Undefined(expression.get_position());
		}
	}
}

/// Rewrites `module` in place, returning what changed
pub fn rewrite_in_place(module: &mut Module, configuration: &Configuration) -> RewriteStatistics {
	let mut statistics = RewriteStatistics::default();
	module.visit_mut(&mut PatternRewriter::new(configuration), &mut statistics);
	statistics
}

#[must_use]
pub fn rewrite(mut module: Module, configuration: &Configuration) -> Module {
	rewrite_in_place(&mut module, configuration);
	module
}
