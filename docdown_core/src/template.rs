//! Template overlays.
//!
//! A template replaces the default composition of a document while reusing
//! the same emission steps. Templates are [`minijinja`] sources evaluated
//! against a [`TemplateView`]:
//!
//! ```text
//! {{ emit_header() }}
//!
//! {{ emit_synopsis() }}
//! {% if not is_command %}
//! Install with `go get {{ import_path }}`.
//!
//! {{ emit_usage() }}
//! {% endif %}
//! ```

use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use minijinja::AutoEscape;
use minijinja::Environment;
use minijinja::UndefinedBehavior;
use minijinja::value::Enumerator;
use minijinja::value::Object;

use crate::DocdownError;
use crate::DocdownResult;
use crate::DocumentRenderer;
use crate::Package;
use crate::Style;
use crate::join_steps;

/// Conventional template names probed in the package directory, in order.
pub const TEMPLATE_FILE_CANDIDATES: [&str; 4] = [
	".docdown.markdown",
	".docdown.md",
	".docdown.template",
	".docdown.tmpl",
];

/// Names a template can reference.
const VIEW_KEYS: [&str; 7] = [
	"emit",
	"emit_header",
	"emit_synopsis",
	"emit_usage",
	"is_command",
	"name",
	"import_path",
];

/// Read-only view of a package handed to a template.
///
/// The view exposes the emission steps as zero-argument callables together
/// with the package name, import path and command flag. Nothing else of the
/// model is reachable from a template.
#[derive(Debug, Clone)]
pub struct TemplateView {
	package: Package,
	style: Style,
}

impl TemplateView {
	pub fn new(package: Package, style: Style) -> Self {
		Self { package, style }
	}

	fn renderer(&self) -> DocumentRenderer<'_> {
		DocumentRenderer::new(&self.package, &self.style)
	}

	fn emit_step(self: &Arc<Self>, step: fn(&DocumentRenderer<'_>) -> String) -> minijinja::Value {
		let view = Arc::clone(self);
		minijinja::Value::from_function(move || step(&view.renderer()))
	}
}

impl Object for TemplateView {
	fn get_value(self: &Arc<Self>, key: &minijinja::Value) -> Option<minijinja::Value> {
		let value = match key.as_str()? {
			"emit" => self.emit_step(|renderer| renderer.emit()),
			"emit_header" => self.emit_step(|renderer| renderer.emit_header()),
			"emit_synopsis" => self.emit_step(|renderer| renderer.emit_synopsis()),
			"emit_usage" => self.emit_step(|renderer| renderer.emit_usage()),
			"is_command" => minijinja::Value::from(self.package.is_command),
			"name" => minijinja::Value::from(self.package.name.as_str()),
			"import_path" => minijinja::Value::from(self.package.import_path.as_str()),
			_ => return None,
		};

		Some(value)
	}

	fn enumerate(self: &Arc<Self>) -> Enumerator {
		Enumerator::Str(&VIEW_KEYS)
	}
}

/// A template loaded from disk.
#[derive(Debug, Clone)]
pub struct Template {
	path: PathBuf,
	source: String,
}

impl Template {
	/// Read the template at `path`.
	pub fn load(path: &Path) -> DocdownResult<Self> {
		let source = std::fs::read_to_string(path).map_err(|e| {
			DocdownError::TemplateRead {
				path: path.display().to_string(),
				reason: e.to_string(),
			}
		})?;

		Ok(Self::from_source(path, source))
	}

	pub fn from_source(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			source: source.into(),
		}
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Evaluate the template against `view`.
	///
	/// Any parse error or reference to an undefined value fails the whole
	/// render.
	pub fn render(&self, view: TemplateView) -> DocdownResult<String> {
		let path = self.path.display().to_string();
		let mut env = Environment::new();
		env.set_undefined_behavior(UndefinedBehavior::Strict);
		env.set_auto_escape_callback(|_| AutoEscape::None);
		env.add_template("__overlay__", &self.source)
			.map_err(|e| {
				DocdownError::TemplateParse {
					path: path.clone(),
					reason: e.to_string(),
				}
			})?;

		let template = env.get_template("__overlay__").map_err(|e| {
			DocdownError::TemplateParse {
				path: path.clone(),
				reason: e.to_string(),
			}
		})?;

		template
			.render(minijinja::Value::from_object(view))
			.map_err(|e| DocdownError::TemplateRender { path, reason: e.to_string() })
	}
}

/// Find the first conventional template file in `dir`.
pub fn find_template(dir: &Path) -> Option<PathBuf> {
	TEMPLATE_FILE_CANDIDATES
		.iter()
		.map(|candidate| dir.join(candidate))
		.find(|path| path.is_file())
}

/// Where to look for a template.
#[derive(Debug, Clone, Default)]
pub struct TemplateOptions {
	/// Skip templates entirely.
	pub disabled: bool,
	/// Explicit template path. Takes precedence over discovery.
	pub path: Option<PathBuf>,
}

/// Pick the template for a package directory, if any.
pub fn resolve_template(dir: &Path, options: &TemplateOptions) -> DocdownResult<Option<Template>> {
	if options.disabled {
		tracing::debug!("template processing disabled");
		return Ok(None);
	}

	let Some(path) = options.path.clone().or_else(|| find_template(dir)) else {
		tracing::debug!(dir = %dir.display(), "no template found");
		return Ok(None);
	};

	tracing::debug!(path = %path.display(), "using template");
	Template::load(&path).map(Some)
}

/// Render `package` through `template`, or through the default composition
/// when there is none. The signature is appended in both cases and the
/// finished document is trimmed.
pub fn render_document(
	package: &Package,
	style: &Style,
	template: Option<&Template>,
) -> DocdownResult<String> {
	let renderer = DocumentRenderer::new(package, style);
	let body = match template {
		Some(template) => template.render(TemplateView::new(package.clone(), style.clone()))?,
		None => renderer.emit(),
	};

	Ok(join_steps([body, renderer.emit_signature()]).trim().to_string())
}
