use std::path::PathBuf;

use clap::Parser;
use docdown_core::HeadingStrategy;
use docdown_core::Style;
use docdown_core::TemplateOptions;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Render a package documentation model as GitHub-friendly markdown.",
	long_about = "docdown renders the documentation of a package (synopsis, constants, variables, \
	              functions and types) as markdown suitable for a README.\n\nPATH is a model file \
	              (docdown.json, docdown.yaml or docdown.model.toml) or a directory holding one. \
	              Styling comes from an optional docdown.toml next to the model; flags override \
	              it. A .docdown.md (or .markdown, .template, .tmpl) template in the same \
	              directory replaces the default layout.\n\nQuick start:\n  docdown . > \
	              README.md"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct DocdownCli {
	/// Model file or package directory. Defaults to the current directory.
	pub path: Option<PathBuf>,

	/// Headline detection used on the synopsis: SingleWord (1Word),
	/// TitleCase, Title, TitleCase1Word or none.
	#[arg(long, value_name = "METHOD")]
	pub heading: Option<HeadingStrategy>,

	/// Indent declarations instead of fencing them.
	#[arg(long, default_value_t = false)]
	pub plain: bool,

	/// Append the docdown attribution footer.
	#[arg(long, default_value_t = false)]
	pub signature: bool,

	/// Leave the `import "<path>"` line out of the header.
	#[arg(long, default_value_t = false)]
	pub no_import: bool,

	/// Template file to use instead of the conventional `.docdown.*` names.
	#[arg(long, value_name = "FILE", conflicts_with = "no_template")]
	pub template: Option<PathBuf>,

	/// Ignore any template and use the default layout.
	#[arg(long, default_value_t = false)]
	pub no_template: bool,

	/// Enable verbose output.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

impl DocdownCli {
	/// The model path to load, falling back to the current directory.
	pub fn model_path(&self) -> PathBuf {
		self.path.clone().unwrap_or_else(|| PathBuf::from("."))
	}

	/// Layer the command line flags over `style`. Flags that were not passed
	/// leave the corresponding field untouched.
	pub fn apply_style(&self, style: &mut Style) {
		if let Some(heading) = self.heading {
			style.heading = heading;
		}

		if self.plain {
			style.plain = true;
		}

		if self.signature {
			style.include_signature = true;
		}

		if self.no_import {
			style.include_import = false;
		}
	}

	/// Layer the command line template flags over `options`.
	pub fn apply_template_options(&self, options: &mut TemplateOptions) {
		if self.no_template {
			options.disabled = true;
		}

		if let Some(path) = &self.template {
			options.path = Some(path.clone());
		}
	}
}
