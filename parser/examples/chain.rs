use amp_pass_parser::{
	visiting::{Chain, VisitorMut, VisitorsMut},
	ASTNode, Expression, Module,
};

struct ShowChain;

impl VisitorMut<Expression, ()> for ShowChain {
	fn visit_mut(&mut self, item: &mut Expression, _data: &mut (), chain: &Chain) {
		if matches!(item, Expression::VariableReference(name, _) if name == "chain") {
			eprintln!("{:#?}", chain.get_chain());
		}
	}
}

fn main() {
	let mut module =
		Module::from_string("chain; function f() { if (a) { g(function() { chain }) } }").unwrap();

	module.visit_mut(
		&mut VisitorsMut { expression_visitors_mut: vec![Box::new(ShowChain)], ..Default::default() },
		&mut (),
	);
}
