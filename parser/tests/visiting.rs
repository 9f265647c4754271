use amp_pass_parser::{
	visiting::{BlockLikeMut, Chain, VisitorMut, VisitorsMut},
	ASTNode, Expression, Module, Statement, ToStringOptions,
};
use pretty_assertions::assert_eq;

#[test]
fn visiting() {
	let input = r#"
const x = "hello world";
function y() {
	if (condition) {
		do_thing("hello world" + " test")
	}
	remove_me
}
"#;

	let mut module = Module::from_string(input).unwrap();

	let mut visitors = VisitorsMut {
		expression_visitors_mut: vec![Box::new(MakeStringsUppercase)],
		statement_visitors_mut: Default::default(),
		block_visitors_mut: vec![Box::new(RemoveBareReferences("remove_me"))],
	};
	module.visit_mut(&mut visitors, &mut ());

	let output = module.to_string(&ToStringOptions::minified());

	let expected = r#"const x="HELLO WORLD";function y(){if(condition){do_thing("HELLO WORLD"+" TEST");}}"#;
	assert_eq!(output, expected);
}

#[test]
fn chain_tracks_functions() {
	let input = "a; function f() { b; { c } (function() { d })() }";
	let mut module = Module::from_string(input).unwrap();

	let mut visitors = VisitorsMut {
		expression_visitors_mut: vec![Box::new(RecordFunctionDepth)],
		statement_visitors_mut: Default::default(),
		block_visitors_mut: Default::default(),
	};
	let mut found = Vec::new();
	module.visit_mut(&mut visitors, &mut found);

	assert_eq!(
		found,
		[("a".to_owned(), 0), ("b".to_owned(), 1), ("c".to_owned(), 1), ("d".to_owned(), 2)]
	);
}

#[test]
fn replacements_are_visited() {
	let mut module = Module::from_string("wrap(x)").unwrap();

	let mut visitors = VisitorsMut {
		expression_visitors_mut: vec![Box::new(UnwrapCalls), Box::new(MakeStringsUppercase)],
		statement_visitors_mut: Default::default(),
		block_visitors_mut: Default::default(),
	};
	module.visit_mut(&mut visitors, &mut ());

	// `wrap(x)` -> `['x']`, whose element is then visited
	assert_eq!(module.to_string(&ToStringOptions::minified()), "['X'];");
}

#[test]
fn assignment_targets_are_not_visited() {
	let mut module = Module::from_string("a.b[c] = d.e").unwrap();

	let mut visitors = VisitorsMut {
		expression_visitors_mut: vec![Box::new(RecordExpressions)],
		statement_visitors_mut: Default::default(),
		block_visitors_mut: Default::default(),
	};
	let mut found = Vec::new();
	module.visit_mut(&mut visitors, &mut found);

	// `a.b[c]` itself is skipped, the expressions it reads are not
	assert_eq!(found, ["a.b[c]=d.e", "a.b", "a", "c", "d.e", "d"]);
}

/// Uppercase all string literals
struct MakeStringsUppercase;

impl VisitorMut<Expression, ()> for MakeStringsUppercase {
	fn visit_mut(&mut self, item: &mut Expression, _data: &mut (), _chain: &Chain) {
		if let Expression::StringLiteral(content, _quoted, _) = item {
			*content = content.to_uppercase();
		}
	}
}

/// Replaces `wrap(x)` with `['x']`
struct UnwrapCalls;

impl VisitorMut<Expression, ()> for UnwrapCalls {
	fn visit_mut(&mut self, item: &mut Expression, _data: &mut (), _chain: &Chain) {
		if let Expression::FunctionCall { function, .. } = item {
			if matches!(&**function, Expression::VariableReference(name, _) if name == "wrap") {
				*item = Expression::from_string("['x']").unwrap();
			}
		}
	}
}

/// Removes expression statements which are just a reference to the name
struct RemoveBareReferences(&'static str);

impl VisitorMut<BlockLikeMut<'_>, ()> for RemoveBareReferences {
	fn visit_mut(&mut self, item: &mut BlockLikeMut, _data: &mut (), _chain: &Chain) {
		item.items.retain(|statement| {
			!matches!(statement, Statement::Expression(Expression::VariableReference(name, _), _) if name == self.0)
		});
	}
}

struct RecordFunctionDepth;

impl VisitorMut<Expression, Vec<(String, usize)>> for RecordFunctionDepth {
	fn visit_mut(&mut self, item: &mut Expression, data: &mut Vec<(String, usize)>, chain: &Chain) {
		if let Expression::VariableReference(name, _) = item {
			data.push((name.clone(), chain.function_depth()));
		}
	}
}

struct RecordExpressions;

impl VisitorMut<Expression, Vec<String>> for RecordExpressions {
	fn visit_mut(&mut self, item: &mut Expression, data: &mut Vec<String>, _chain: &Chain) {
		data.push(item.to_string(&ToStringOptions::minified()));
	}
}
