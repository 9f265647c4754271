use std::{
	cell::RefCell,
	collections::HashMap,
	io,
	path::{Path, PathBuf},
	process::ExitCode,
};

use amp_pass_lib::{build, run_cli, BuildConfig, Configuration, FailedBuildOutput};
use pretty_assertions::assert_eq;

const INPUT: &str = "
log.dev.fine('starting');
var someValue = log.dev.assert(true, 'This is an error');
if ($mode.getMode().localDev) {
	console.log('x', someValue);
}
";

struct FileSystem {
	files: HashMap<PathBuf, String>,
	written: RefCell<HashMap<PathBuf, String>>,
}

impl FileSystem {
	fn new(files: &[(&str, &str)]) -> Self {
		Self {
			files: files.iter().map(|(path, content)| (PathBuf::from(path), (*content).to_owned())).collect(),
			written: RefCell::default(),
		}
	}

	fn run(&self, arguments: &[&str]) -> ExitCode {
		run_cli(
			arguments,
			&|path: &Path| self.files.get(path).cloned(),
			|path: &Path, content: String| {
				self.written.borrow_mut().insert(path.to_path_buf(), content);
				Ok(())
			},
		)
	}

	fn output(&self, path: &str) -> Option<String> {
		self.written.borrow().get(Path::new(path)).cloned()
	}
}

#[test]
fn build_with_flags() {
	let fs = FileSystem::new(&[("in.js", INPUT)]);
	let code = fs.run(&["build", "in.js", "out.js", "--prod", "--strip", "dev.fine", "--minify"]);

	assert_eq!(code, ExitCode::SUCCESS);
	assert_eq!(
		fs.output("out.js").as_deref(),
		Some("var someValue=true;if(false){console.log('x',someValue);}\n")
	);
}

#[test]
fn build_defaults() {
	let fs = FileSystem::new(&[("in.js", INPUT)]);
	let code = fs.run(&["build", "in.js"]);

	assert_eq!(code, ExitCode::SUCCESS);
	let expected = "log.dev.fine('starting');
var someValue = true;
if ($mode.getMode().localDev) {
	console.log('x', someValue);
}
";
	assert_eq!(fs.output("amp_output.js").as_deref(), Some(expected));
}

#[test]
fn configuration_file() {
	let fs = FileSystem::new(&[
		("in.js", "log.dev.fine(1); log.dev.warn(2); var m = __mode.getMode().test;"),
		("amp.json", r#"{ "suffixTypesToStrip": ["dev.fine"], "modeAccessor": "__mode" }"#),
	]);

	let code = fs.run(&["build", "in.js", "out.js", "--config", "amp.json", "-m"]);
	assert_eq!(code, ExitCode::SUCCESS);
	assert_eq!(
		fs.output("out.js").as_deref(),
		Some("log.dev.warn(2);var m=__mode.getMode().test;\n")
	);

	let code = fs.run(&[
		"build", "in.js", "out.js", "--config", "amp.json", "--prod", "--strip", "dev.warn", "-m",
	]);
	assert_eq!(code, ExitCode::SUCCESS);
	assert_eq!(fs.output("out.js").as_deref(), Some("var m=false;\n"));
}

#[test]
fn failures() {
	let fs = FileSystem::new(&[
		("in.js", "log.dev.fine(1)"),
		("invalid.js", "var a = ;"),
		("unknown.json", r#"{ "isProduction": true }"#),
	]);

	assert_eq!(fs.run(&["build", "missing.js"]), ExitCode::FAILURE);
	assert_eq!(fs.run(&["build", "invalid.js"]), ExitCode::FAILURE);
	assert_eq!(fs.run(&["build", "in.js", "--strip", "dev fine"]), ExitCode::FAILURE);
	assert_eq!(fs.run(&["build", "in.js", "--mode-accessor", "a.b"]), ExitCode::FAILURE);
	assert_eq!(fs.run(&["build", "in.js", "--config", "unknown.json"]), ExitCode::FAILURE);
	assert_eq!(fs.run(&["build", "in.js", "--config", "missing.json"]), ExitCode::FAILURE);
	assert!(fs.written.borrow().is_empty());
}

#[test]
fn write_failure() {
	let code = run_cli(
		&["build", "in.js"],
		&|_: &Path| Some("a();".to_owned()),
		|_: &Path, _: String| Err(io::Error::new(io::ErrorKind::PermissionDenied, "read only")),
	);
	assert_eq!(code, ExitCode::FAILURE);
}

#[test]
fn info() {
	let fs = FileSystem::new(&[]);
	assert_eq!(fs.run(&["info"]), ExitCode::SUCCESS);
	assert_eq!(fs.run(&["unknown-command"]), ExitCode::FAILURE);
}

#[test]
fn build_function() {
	let read_file = |path: &Path| (path == Path::new("a.js")).then(|| "var x = log.dev.fine()".to_owned());
	let config = BuildConfig { amp: Configuration::production(), minify: true };

	let output = build(&read_file, Path::new("a.js"), Path::new("b.js"), &config).unwrap();
	assert_eq!(output.outputs.len(), 1);
	assert_eq!(output.outputs[0].output_path, Path::new("b.js"));
	assert_eq!(output.outputs[0].content, "var x;\n");
	assert_eq!(output.statistics.removed_calls, 1);

	let error = build(&read_file, Path::new("c.js"), Path::new("b.js"), &config).err();
	assert!(matches!(error, Some(FailedBuildOutput::CouldNotFindFile(ref path)) if path == Path::new("c.js")));

	let read_invalid = |_: &Path| Some("var = 1".to_owned());
	let Err(FailedBuildOutput::ParseError { path, source, error }) =
		build(&read_invalid, Path::new("a.js"), Path::new("b.js"), &config)
	else {
		panic!("expected parse error");
	};
	assert_eq!(path, Path::new("a.js"));
	assert_eq!(source, "var = 1");
	assert_eq!(error.reason, "Expected identifier at variable declaration, found `=`");
	assert_eq!((error.position.start, error.position.end), (4, 5));
}
