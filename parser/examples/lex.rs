use amp_pass_parser::lex_script;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let path = std::env::args().nth(1).ok_or("expected argument")?;
	let content = std::fs::read_to_string(path)?;

	println!("token | start (1 based) | length | new line");
	for token in lex_script(&content)? {
		let range: std::ops::Range<usize> = token.position.into();
		println!(
			"{:?} {} {} {} {:?}",
			token.kind,
			range.start + 1,
			range.len(),
			token.preceded_by_new_line,
			content.get(range)
		);
	}
	Ok(())
}
