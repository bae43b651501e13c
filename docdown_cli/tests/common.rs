#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;
use serde_json::json;

pub fn docdown_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("docdown"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("RUST_LOG");
	cmd
}

/// Write a small package model to `dir/docdown.json`.
pub fn write_greet_model(dir: &Path) -> std::io::Result<()> {
	let model = json!({
		"name": "greet",
		"import_path": "example.com/greet",
		"synopsis": "Package greet says hello.\n\nUsage Notes\n\nCall Hello.\n",
		"functions": [
			{
				"name": "Hello",
				"declaration": "func Hello() string",
				"doc": "Hello returns a greeting.\n"
			}
		]
	});

	std::fs::write(dir.join("docdown.json"), model.to_string())
}

pub const GREET_USAGE: &str = "## Usage\n\n#### func Hello\n\n```go\nfunc Hello() string\n```\nHello \
                               returns a greeting.";
