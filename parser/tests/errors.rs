use amp_pass_parser::{ASTNode, Expression, Module, ParseError, Span};
use pretty_assertions::assert_eq;

fn module_error(input: &str) -> ParseError {
	Module::from_string(input).unwrap_err()
}

#[test]
fn missing_semi_colon() {
	let error = module_error("a b");
	assert_eq!(error.reason, "Expected `;` or new line, found `b`");
	assert_eq!(error.position, Span { start: 2, end: 3 });
}

#[test]
fn unexpected_character() {
	let error = module_error("x = @");
	assert_eq!(error.reason, "Unexpected character '@'");
	assert_eq!(error.position, Span { start: 4, end: 5 });
}

#[test]
fn unterminated() {
	assert_eq!(module_error("\"abc").position, Span { start: 0, end: 4 });
	assert_eq!(module_error("/* abc").reason, "Unterminated multiline comment");
}

#[test]
fn expected_identifier() {
	let error = module_error("var 1");
	assert_eq!(error.reason, "Expected identifier at variable declaration, found `1`");
	assert_eq!(error.position, Span { start: 4, end: 5 });

	let error = module_error("function () {}");
	assert_eq!(error.reason, "Expected identifier at function name, found `(`");
}

#[test]
fn invalid_assignment() {
	let error = Expression::from_string("1 = 2").unwrap_err();
	assert_eq!(error.reason, "Invalid syntax on LHS of assignment");
	assert_eq!(error.to_string(), "ParseError: Invalid syntax on LHS of assignment @ byte indices 2..3");
}

#[test]
fn unbalanced_braces() {
	assert_eq!(module_error("}").reason, "Expected end of source, found `}`");
	assert_eq!(module_error("{").reason, "Expected `}` found `end of source`");
}
