use amp_pass_lib::{rewrite, rewrite_in_place, Configuration, RewriteStatistics};
use parser::{ASTNode, Module, ToStringOptions};
use pretty_assertions::assert_eq;

fn rewrite_to_string(input: &str, configuration: &Configuration) -> String {
	let module = Module::from_string(input).unwrap();
	rewrite(module, configuration).to_string(&ToStringOptions::minified())
}

fn normalise(source: &str) -> String {
	Module::from_string(source).unwrap().to_string(&ToStringOptions::minified())
}

#[track_caller]
fn test_with(configuration: &Configuration, input: &str, expected: &str) {
	assert_eq!(rewrite_to_string(input, configuration), normalise(expected));
}

#[track_caller]
fn test(input: &str, expected: &str) {
	test_with(&Configuration::production(), input, expected);
}

/// Compares trees, so formatting and quotes in `expected` do not matter
#[track_caller]
fn test_tree(input: &str, expected: &str) {
	let module = Module::from_string(input).unwrap();
	let rewritten = rewrite(module, &Configuration::production());
	assert_eq!(rewritten, Module::from_string(expected).unwrap());
}

#[test]
fn dev_fine_removal() {
	test_tree(
		"(function() {
  var log = { dev: { fine: function() {} } };
  log.dev.fine('hello world');
  console.log('this is preserved');
})()",
		"(function() {
  var log = { dev: { fine: function() {} } };
  console.log('this is preserved');
})()",
	);
	test_tree(
		"(function() {
  var log = { dev: { fine: function() {} } };
  log.dev.fine();
  console.log('this is preserved');
})()",
		"(function() {
  var log = { dev: { fine: function() {} } };
  console.log('this is preserved');
})()",
	);
}

#[test]
fn dev_error_preserved() {
	let input = "(function() {
  var log = { dev: { error: function() {} } };
  log.dev.error('hello world');
  console.log('this is preserved');
})()";
	test_tree(input, input);
}

#[test]
fn dev_assert_expression_removal() {
	test_tree(
		"(function() {
  var log = { dev: { assert: function() {} } };
  log.dev.assert('hello world');
  console.log('this is preserved');
})()",
		"(function() {
  var log = { dev: { assert: function() {} } };
\"hello world\";
  console.log('this is preserved');
})()",
	);
	test_tree(
		"(function() {
  var log = { dev: { assert: function() {} } };
  var someValue = log.dev.assert();
  console.log('this is preserved', someValue);
})()",
		"(function() {
  var log = { dev: { assert: function() {} } };
  var someValue;
  console.log('this is preserved', someValue);
})()",
	);
}

#[test]
fn dev_assert_preserves_first_argument() {
	test_tree(
		"(function() {
  var log = { dev: { assert: function() {} } };
  var someValue = log.dev.assert(true, 'This is an error');
  console.log('this is preserved', someValue);
})()",
		"(function() {
  var log = { dev: { assert: function() {} } };
  var someValue = true;
  console.log('this is preserved', someValue);
})()",
	);
}

#[test]
fn non_calls_preserved() {
	let input = "(function() {
  var log = { dev: { assert: function() {} } };
  var someValue = log.dev.assert;
  console.log('this is preserved', someValue);
})()";
	test_tree(input, input);
}

#[test]
fn get_mode_property_replacement() {
	let cases = [("localDev", true, false), ("test", true, false), ("minified", false, true)];
	for (property, returned, folded) in cases {
		test_tree(
			&format!(
				"(function() {{
function getMode() {{ return {{ {property}: {returned} }} }}
var $mode = {{ getMode: getMode }};
  if ($mode.getMode().{property}) {{
    console.log('hello world');
  }}
}})()"
			),
			&format!(
				"(function() {{
function getMode() {{ return {{ {property}: {returned} }}; }}
var $mode = {{ getMode: getMode }};
  if ({folded}) {{
    console.log('hello world');
  }}
}})()"
			),
		);
	}
}

#[test]
fn get_mode_preserved() {
	test_tree(
		"(function() {
function getMode() { return { minified: false } }
var $mode = { getMode: getMode };
  if ($mode.getMode()) {
    console.log('hello world');
  }
})()",
		"(function() {
function getMode() { return { minified: false }; }
var $mode = { getMode: getMode };
  if ($mode.getMode()) {
    console.log('hello world');
  }
})()",
	);
	test_tree(
		"(function() {
function getMode() { return { otherProp: true } }
var $mode = { getMode: getMode };
  if ($mode.getMode().otherProp) {
    console.log('hello world');
  }
})()",
		"(function() {
function getMode() { return { otherProp: true }; }
var $mode = { getMode: getMode };
  if ($mode.getMode().otherProp) {
    console.log('hello world');
  }
})()",
	);
}

#[test]
fn removes_stripped_calls() {
	test("log.dev.fine('message', 1);", "");
	test(
		"var a = 1; log.dev.fine('message', a); var b = 2;",
		"var a = 1; var b = 2;",
	);
	test("other.dev.fine(x)", "");
}

#[test]
fn keeps_calls_not_stripped() {
	test("log.dev.error('message', 1);", "log.dev.error('message', 1);");
	test("log.dev.warn(x)", "log.dev.warn(x)");
	test("log.xdev.fine(x)", "log.xdev.fine(x)");
	test("log['dev'].fine(x)", "log['dev'].fine(x)");
	test("fine(x)", "fine(x)");
}

#[test]
fn stripped_initialiser_leaves_declaration() {
	test("var x = log.dev.fine('a'), y = 2;", "var x, y = 2;");
}

#[test]
fn folds_asserts() {
	test("log.dev.assert(a);", "a;");
	test("log.dev.assert(a, 'message', b);", "a;");
	test("log.dev.assert();", "");
	test("var a = log.dev.assert(b, 'message');", "var a = b;");
	test("var a = log.dev.assert();", "var a;");
	test("f(log.dev.assert(x > 1, 'msg'))", "f(x > 1)");
	test("f(log.dev.assert())", "f(void 0)");
}

#[test]
fn keeps_bare_references() {
	test("var a = log.dev.assert;", "var a = log.dev.assert;");
	test("f(log.dev.fine)", "f(log.dev.fine)");
}

#[test]
fn stripping_takes_priority_over_assert() {
	let configuration = Configuration::new(true, ["dev.assert"]).unwrap();
	test_with(&configuration, "log.dev.assert(a); b;", "b;");
	test_with(&configuration, "var a = log.dev.assert(b);", "var a;");
}

#[test]
fn folds_mode_properties() {
	test("if ($mode.getMode().localDev) { a(); }", "if (false) { a(); }");
	test("if ($mode.getMode().test) { a(); }", "if (false) { a(); }");
	test("var m = $mode.getMode().minified;", "var m = true;");
	test("var m = !$mode.getMode(window).minified && b;", "var m = !true && b;");
}

#[test]
fn keeps_other_mode_shapes() {
	test("if ($mode.getMode().otherProp) { a(); }", "if ($mode.getMode().otherProp) { a(); }");
	test("var m = $mode.getMode();", "var m = $mode.getMode();");
	test("var m = $mode.getMode(load()).test;", "var m = $mode.getMode(load()).test;");
	test("var m = other.getMode().test;", "var m = other.getMode().test;");
	test("$mode.getMode().localDev = 1;", "$mode.getMode().localDev = 1;");
	test("$mode.getMode().test = $mode.getMode().minified;", "$mode.getMode().test = true;");
	test("a[$mode.getMode().test] = 1;", "a[false] = 1;");
}

#[test]
fn custom_mode_accessor() {
	let configuration = Configuration::production().with_mode_accessor("__mode").unwrap();
	test_with(
		&configuration,
		"var a = __mode.getMode().test, b = $mode.getMode().test;",
		"var a = false, b = $mode.getMode().test;",
	);
}

#[test]
fn development_builds_keep_mode_properties() {
	let configuration = Configuration::new(false, ["dev.fine"]).unwrap();
	test_with(
		&configuration,
		"log.dev.fine(1); if ($mode.getMode().localDev) { log.dev.assert(a, 'b'); }",
		"if ($mode.getMode().localDev) { a; }",
	);
}

#[test]
fn nested_positions() {
	test(
		"function f(a) { log.dev.fine(a); if (a) { log.dev.fine(); return 1 } return 2 }",
		"function f(a) { if (a) { return 1 } return 2 }",
	);
	test("run(function() { log.dev.fine(1); go() })", "run(function() { go() })");
	test("a && log.dev.fine(1);", "a && void 0;");
	test("var o = { a: log.dev.fine(), b: [log.dev.assert(c, 'd')] };", "var o = { a: void 0, b: [c] };");
	test("x = log.dev.assert(y);", "x = y;");
}

#[test]
fn parenthesised_calls() {
	test("(log.dev.fine('a')); b();", "b();");
	test("var x = (log.dev.fine());", "var x;");
	test("(log.dev.fine)('a');", "");
	test("((log.dev).fine)('a'); b();", "b();");
	test("var y = (log.dev.assert(a, 'message'));", "var y = a;");
	test("x * (log.dev.assert(a + b))", "x * (a + b)");
	test("f((log.dev.fine()))", "f(void 0)");
	test("if (($mode.getMode()).minified) a();", "if (true) a();");
}

#[test]
fn single_statement_branches() {
	test("if (a) log.dev.fine(1); else b();", "if (a); else b();");
	test("if (a) b(); else log.dev.fine(1);", "if (a) b(); else;");
	test("if (a) log.dev.assert(b, 'c');", "if (a) b;");
	test("if (a) log.dev.assert();", "if (a);");
}

#[test]
fn replacements_are_rewritten_in_place() {
	test("log.dev.assert(log.dev.assert(x, 'inner'), 'outer');", "x;");
	test("log.dev.assert(log.dev.fine(x));", "");
	test("var a = log.dev.assert($mode.getMode().test);", "var a = false;");
	test("f(log.dev.assert(g(log.dev.fine())))", "f(g(void 0))");
}

#[test]
fn idempotent() {
	let configuration = Configuration::production();
	let input = "
		log.dev.fine('start');
		var a = log.dev.assert(log.dev.assert(b, 'inner'), 'outer'), c = log.dev.fine();
		if ($mode.getMode().test) log.dev.fine(); else f(log.dev.assert());
		function g() { return $mode.getMode().minified && log.dev.error('e') }
	";

	let mut module = Module::from_string(input).unwrap();
	let first = rewrite_in_place(&mut module, &configuration);
	let once = module.to_string(&ToStringOptions::minified());

	let second = rewrite_in_place(&mut module, &configuration);
	let twice = module.to_string(&ToStringOptions::minified());

	assert!(first.total() > 0);
	assert_eq!(second, RewriteStatistics::default());
	assert_eq!(once, twice);
}

#[test]
fn end_to_end() {
	let input = "var someValue = log.dev.assert(true, 'This is an error');\nconsole.log('x', someValue);";
	let module = rewrite(Module::from_string(input).unwrap(), &Configuration::production());

	assert_eq!(
		module.to_string(&ToStringOptions::default()),
		"var someValue = true;\nconsole.log('x', someValue);"
	);
}

#[test]
fn statistics() {
	let input = "
		log.dev.fine(1);
		var a = log.dev.assert(b, 'message');
		if ($mode.getMode().test) c(log.dev.fine());
		var d = $mode.getMode().minified;
		log.dev.error(a);
	";
	let mut module = Module::from_string(input).unwrap();
	let statistics = rewrite_in_place(&mut module, &Configuration::production());

	assert_eq!(
		statistics,
		RewriteStatistics { removed_calls: 2, folded_asserts: 1, replaced_mode_properties: 2 }
	);
	assert_eq!(statistics.total(), 5);
	assert_eq!(statistics.to_string(), "removed 2 calls, folded 1 asserts, replaced 2 mode properties");
}

#[test]
fn no_match_leaves_module_unchanged() {
	let input = "
		const config = { debug: log.dev, level: 2 };
		function run(a) { return a.dev.fine + $mode.mode().test }
	";
	let module = Module::from_string(input).unwrap();
	let rewritten = rewrite(module.clone(), &Configuration::production());
	assert_eq!(rewritten, module);
}
