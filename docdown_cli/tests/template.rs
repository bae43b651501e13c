mod common;

use common::GREET_USAGE;
use common::write_greet_model;
use docdown_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;

const INSTALL_TEMPLATE: &str =
	"{{ emit_header() }}\n\nInstall with `go get {{ import_path }}`.\n\n{{ emit_usage() }}\n";

#[test]
fn discovered_template_replaces_layout() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_greet_model(tmp.path())?;
	std::fs::write(tmp.path().join(".docdown.md"), INSTALL_TEMPLATE)?;

	let expected = format!(
		"# greet\n---\n    import \"example.com/greet\"\n\nInstall with `go get \
		 example.com/greet`.\n\n{GREET_USAGE}\n"
	);

	common::docdown_cmd()
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::diff(expected));

	Ok(())
}

#[test]
fn no_template_flag_uses_default_layout() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_greet_model(tmp.path())?;
	std::fs::write(tmp.path().join(".docdown.md"), INSTALL_TEMPLATE)?;

	common::docdown_cmd()
		.arg(tmp.path())
		.arg("--no-template")
		.assert()
		.success()
		.stdout(predicates::str::contains("Package greet says hello."))
		.stdout(predicates::str::contains("Install with").not());

	Ok(())
}

#[test]
fn template_flag_selects_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_greet_model(tmp.path())?;
	std::fs::write(tmp.path().join(".docdown.md"), INSTALL_TEMPLATE)?;
	let custom = tmp.path().join("short.tmpl");
	std::fs::write(&custom, "{{ name }}: {{ emit_synopsis() }}")?;

	common::docdown_cmd()
		.arg(tmp.path())
		.arg("--template")
		.arg(&custom)
		.arg("--signature")
		.assert()
		.success()
		.stdout(predicates::str::starts_with("greet: Package greet says hello."))
		.stdout(predicates::str::ends_with("\n\n---\n*Generated by **docdown***\n"));

	Ok(())
}

#[test]
fn config_template_is_used() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_greet_model(tmp.path())?;
	std::fs::create_dir_all(tmp.path().join("templates"))?;
	std::fs::write(tmp.path().join("templates/readme.tmpl"), "Only {{ name }}")?;
	std::fs::write(
		tmp.path().join("docdown.toml"),
		"template = \"templates/readme.tmpl\"\n",
	)?;

	common::docdown_cmd()
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::diff("Only greet\n"));

	Ok(())
}

#[test]
fn undefined_template_value_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_greet_model(tmp.path())?;
	std::fs::write(tmp.path().join(".docdown.tmpl"), "{{ functions }}")?;

	common::docdown_cmd()
		.arg(tmp.path())
		.assert()
		.code(1)
		.stdout(predicates::str::is_empty())
		.stderr(predicates::str::contains("error running template"));

	Ok(())
}

#[test]
fn missing_template_file_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_greet_model(tmp.path())?;

	common::docdown_cmd()
		.arg(tmp.path())
		.arg("--template")
		.arg(tmp.path().join("absent.tmpl"))
		.assert()
		.code(1)
		.stderr(predicates::str::contains("failed to read template"));

	Ok(())
}

#[test]
fn verbose_logs_template_path() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_greet_model(tmp.path())?;
	std::fs::write(tmp.path().join(".docdown.md"), INSTALL_TEMPLATE)?;

	common::docdown_cmd()
		.arg(tmp.path())
		.arg("--verbose")
		.assert()
		.success()
		.stderr(predicates::str::contains("rendering package through template"))
		.stderr(predicates::str::contains(".docdown.md"));

	Ok(())
}
