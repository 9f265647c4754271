//! Recognising the call and property shapes the rewriter acts on. Nothing here mutates

use parser::Expression;

use super::configuration::{chain_ends_with, Configuration};

/// Always folded, regardless of the suffixes to strip
pub(crate) const ASSERT_SUFFIX: [&str; 2] = ["dev", "assert"];

const GET_MODE: &str = "getMode";

/// What should happen to a matched expression
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult {
	NoMatch,
	/// Delete the enclosing expression statement
	RemoveStatement,
	ReplaceWithExpression(Expression),
	ReplaceWithLiteral(LiteralValue),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralValue {
	Boolean(bool),
	Undefined,
}

/// Which rule a call falls under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CallKind {
	Strip,
	Assert,
}

/// Build mode flags that are known at build time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeProperty {
	LocalDev,
	Test,
	Minified,
}

impl ModeProperty {
	#[must_use]
	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"localDev" => Some(Self::LocalDev),
			"test" => Some(Self::Test),
			"minified" => Some(Self::Minified),
			_ => None,
		}
	}

	#[must_use]
	pub fn value_in_production(self) -> bool {
		match self {
			ModeProperty::LocalDev | ModeProperty::Test => false,
			ModeProperty::Minified => true,
		}
	}
}

/// `((a))` -> `a`
pub(crate) fn without_parentheses(mut expression: &Expression) -> &Expression {
	while let Expression::Parenthesised(inner, _) = expression {
		expression = &**inner;
	}
	expression
}

/// `a.b.c` -> `["a", "b", "c"]`. [`None`] if any part is computed, called or not an identifier.
/// Parentheses are ignored, `(log.dev).fine` is the same chain as `log.dev.fine`
pub(crate) fn member_chain_segments(expression: &Expression) -> Option<Vec<&str>> {
	match without_parentheses(expression) {
		Expression::VariableReference(name, _) => Some(vec![name.as_str()]),
		Expression::PropertyAccess { parent, property, .. } => {
			let mut segments = member_chain_segments(parent)?;
			segments.push(property.as_str());
			Some(segments)
		}
		_ => None,
	}
}

pub(crate) fn classify_callee(callee: &Expression, configuration: &Configuration) -> Option<CallKind> {
	let chain = member_chain_segments(callee)?;
	if configuration.strips(&chain) {
		Some(CallKind::Strip)
	} else if chain_ends_with(&chain, &ASSERT_SUFFIX) {
		Some(CallKind::Assert)
	} else {
		None
	}
}

/// Identifier references, non computed member chains and literals
fn is_side_effect_free(expression: &Expression) -> bool {
	match expression {
		Expression::NumberLiteral(..)
		| Expression::StringLiteral(..)
		| Expression::BooleanLiteral(..)
		| Expression::NullLiteral(..)
		| Expression::Undefined(..)
		| Expression::VariableReference(..) => true,
		Expression::PropertyAccess { parent, .. } | Expression::Parenthesised(parent, _) => {
			is_side_effect_free(parent)
		}
		_ => false,
	}
}

/// Matches `<mode accessor>.getMode().<flag>`
pub(crate) fn mode_property(
	expression: &Expression,
	configuration: &Configuration,
) -> Option<ModeProperty> {
	let Expression::PropertyAccess { parent, property, .. } = without_parentheses(expression) else {
		return None;
	};
	let Expression::FunctionCall { function, arguments, .. } = without_parentheses(parent) else {
		return None;
	};
	let Expression::PropertyAccess { parent: accessor, property: method, .. } =
		without_parentheses(function)
	else {
		return None;
	};
	let is_accessor = matches!(
		without_parentheses(accessor),
		Expression::VariableReference(name, _) if name == configuration.mode_accessor()
	);
	if is_accessor && method == GET_MODE && arguments.iter().all(is_side_effect_free) {
		ModeProperty::from_name(property)
	} else {
		None
	}
}

/// Short form of a matched shape for logging, e.g. `log.dev.fine(..2)`
pub(crate) fn describe(expression: &Expression) -> String {
	match expression {
		Expression::FunctionCall { function, arguments, .. } => {
			format!("{}(..{})", describe(function), arguments.len())
		}
		Expression::PropertyAccess { parent, property, .. } => {
			format!("{}.{property}", describe(parent))
		}
		Expression::VariableReference(name, _) => name.clone(),
		_ => "..".to_owned(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use parser::ASTNode;
	use pretty_assertions::assert_eq;

	fn expression(source: &str) -> Expression {
		Expression::from_string(source).unwrap()
	}

	#[test]
	fn member_chains() {
		assert_eq!(member_chain_segments(&expression("log.dev.fine")), Some(vec!["log", "dev", "fine"]));
		assert_eq!(member_chain_segments(&expression("log")), Some(vec!["log"]));
		assert_eq!(member_chain_segments(&expression("log['dev'].fine")), None);
		assert_eq!(member_chain_segments(&expression("get().dev.fine")), None);
		assert_eq!(member_chain_segments(&expression("(log).dev.fine")), Some(vec!["log", "dev", "fine"]));
		assert_eq!(member_chain_segments(&expression("((log.dev).fine)")), Some(vec!["log", "dev", "fine"]));
	}

	#[test]
	fn callee_classification() {
		let configuration = Configuration::production();
		let classify = |source: &str| classify_callee(&expression(source), &configuration);

		assert_eq!(classify("log.dev.fine"), Some(CallKind::Strip));
		assert_eq!(classify("other.dev.fine"), Some(CallKind::Strip));
		assert_eq!(classify("log.dev.assert"), Some(CallKind::Assert));
		assert_eq!(classify("log.dev.error"), None);
		assert_eq!(classify("log.xdev.fine"), None);
		assert_eq!(classify("fine"), None);

		let strips_assert = Configuration::new(true, ["dev.assert"]).unwrap();
		assert_eq!(classify_callee(&expression("log.dev.assert"), &strips_assert), Some(CallKind::Strip));
	}

	#[test]
	fn mode_properties() {
		let configuration = Configuration::production();
		let property = |source: &str| mode_property(&expression(source), &configuration);

		assert_eq!(property("$mode.getMode().localDev"), Some(ModeProperty::LocalDev));
		assert_eq!(property("$mode.getMode().test"), Some(ModeProperty::Test));
		assert_eq!(property("$mode.getMode(window.location, 'x').minified"), Some(ModeProperty::Minified));
		assert_eq!(property("$mode.getMode().otherProp"), None);
		assert_eq!(property("$mode.getMode()"), None);
		assert_eq!(property("$mode.getMode(compute()).test"), None);
		assert_eq!(property("($mode.getMode()).test"), Some(ModeProperty::Test));
		assert_eq!(property("$mode.getMode((a.b)).localDev"), Some(ModeProperty::LocalDev));
		assert_eq!(property("mode.getMode().test"), None);
		assert_eq!(property("$mode.other().test"), None);
		assert_eq!(property("$mode.getMode"), None);
	}

	#[test]
	fn production_values() {
		assert!(!ModeProperty::LocalDev.value_in_production());
		assert!(!ModeProperty::Test.value_in_production());
		assert!(ModeProperty::Minified.value_in_production());
	}
}
