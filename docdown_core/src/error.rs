use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum DocdownError {
	#[error(transparent)]
	#[diagnostic(code(docdown::io_error))]
	Io(#[from] std::io::Error),

	#[error("could not find a documentation model in `{0}`")]
	#[diagnostic(
		code(docdown::model_not_found),
		help("add a `docdown.json`, `docdown.yaml`, or `docdown.model.toml` file, or pass the model file directly")
	)]
	ModelNotFound(String),

	#[error("failed to parse documentation model `{path}`: {reason}")]
	#[diagnostic(code(docdown::model_parse))]
	ModelParse { path: String, reason: String },

	#[error("unsupported model file format: `{0}`")]
	#[diagnostic(
		code(docdown::unsupported_format),
		help("supported formats: json, yaml, yml, toml")
	)]
	UnsupportedModelFormat(String),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(docdown::config_parse),
		help("check that docdown.toml is valid TOML with an optional [style] section")
	)]
	ConfigParse(String),

	#[error("unknown heading detection method: `{0}`")]
	#[diagnostic(
		code(docdown::unknown_heading),
		help("available methods: SingleWord (1Word), TitleCase, Title, TitleCase1Word, none")
	)]
	UnknownHeading(String),

	#[error("failed to read template `{path}`: {reason}")]
	#[diagnostic(code(docdown::template_read))]
	TemplateRead { path: String, reason: String },

	#[error("error parsing template `{path}`: {reason}")]
	#[diagnostic(
		code(docdown::template_parse),
		help("templates use minijinja syntax, e.g. `{{{{ emit_header() }}}}`")
	)]
	TemplateParse { path: String, reason: String },

	#[error("error running template `{path}`: {reason}")]
	#[diagnostic(
		code(docdown::template_render),
		help(
			"available values: emit(), emit_header(), emit_synopsis(), emit_usage(), name, \
			 import_path, is_command"
		)
	)]
	TemplateRender { path: String, reason: String },
}

pub type DocdownResult<T> = Result<T, DocdownError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
