use crate::Package;
use crate::SIGNATURE_LINE;
use crate::Scope;
use crate::Style;
use crate::format_doc;
use crate::headify;
use crate::render_section;
use crate::trim_block;

/// Separator placed between the trimmed output of consecutive steps.
pub const STEP_SEPARATOR: &str = "\n\n";

/// Renders a [`Package`] as markdown with a fixed [`Style`].
///
/// Each `emit_*` method produces one trimmed step of the document and can be
/// called on its own, in any order. [`DocumentRenderer::render`] joins the
/// steps with [`STEP_SEPARATOR`], so joining the individual steps yourself
/// gives the same bytes.
#[derive(Debug, Clone, Copy)]
pub struct DocumentRenderer<'a> {
	package: &'a Package,
	style: &'a Style,
}

impl<'a> DocumentRenderer<'a> {
	pub fn new(package: &'a Package, style: &'a Style) -> Self {
		Self { package, style }
	}

	/// The full document followed by the signature, if enabled.
	pub fn render(&self) -> String {
		join_steps([self.emit(), self.emit_signature()])
	}

	/// The default composition without the signature: header, synopsis and,
	/// for non-commands, usage.
	pub fn emit(&self) -> String {
		join_steps([self.emit_header(), self.emit_synopsis(), self.emit_usage()])
	}

	/// The package name, a rule, and the import line when one applies.
	pub fn emit_header(&self) -> String {
		let mut out = format!("# {}\n---\n", self.package.name);

		if !self.package.is_command
			&& self.style.include_import
			&& !self.package.import_path.is_empty()
		{
			out.push_str(&format!("    import \"{}\"\n", self.package.import_path));
		}

		trim_block(&out).to_string()
	}

	/// The package doc text with headlines marked.
	pub fn emit_synopsis(&self) -> String {
		let formatted = format_doc(&self.package.synopsis, "");
		let out = headify(&formatted, &self.style.synopsis_header, self.style.heading);

		trim_block(&out).to_string()
	}

	/// Constants, variables, functions and types. Commands have no usage
	/// section, so this is empty for them.
	pub fn emit_usage(&self) -> String {
		if self.package.is_command {
			tracing::trace!(name = %self.package.name, "skipping usage for command");
			return String::new();
		}

		if self.package.has_no_declarations() {
			tracing::trace!(name = %self.package.name, "package has no declarations");
		}

		let mut out = format!("{}\n\n", self.style.usage_header);
		render_section(&mut out, &self.package.constants, self.style, Scope::Package);
		render_section(&mut out, &self.package.variables, self.style, Scope::Package);
		render_section(&mut out, &self.package.functions, self.style, Scope::Package);
		render_section(&mut out, &self.package.types, self.style, Scope::Package);

		trim_block(&out).to_string()
	}

	/// The attribution footer, or an empty string when disabled.
	pub fn emit_signature(&self) -> String {
		if !self.style.include_signature {
			return String::new();
		}

		format!("---\n{SIGNATURE_LINE}")
	}
}

/// Trim each step, drop the empty ones, and join the rest.
pub fn join_steps<I, S>(steps: I) -> String
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	steps
		.into_iter()
		.map(|step| trim_block(step.as_ref()).to_string())
		.filter(|step| !step.is_empty())
		.collect::<Vec<_>>()
		.join(STEP_SEPARATOR)
}
