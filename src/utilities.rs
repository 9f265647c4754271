use std::fmt::Arguments;

pub(crate) fn print_info() {
	print_to_cli(format_args!("{}@{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")));
	print_to_cli(format_args!("{}", env!("CARGO_PKG_DESCRIPTION")));
	print_to_cli(format_args!("For help run --help"));
}

pub(crate) fn print_to_cli(arguments: Arguments) {
	println!("{arguments}");
}

pub(crate) fn print_success(arguments: Arguments) {
	println!("{} {arguments}", console::style("done").green().bold());
}

pub(crate) fn print_error(arguments: Arguments) {
	eprintln!("{} {arguments}", console::style("error:").red().bold());
}
