//! Locating and loading a package's documentation model.

use std::path::Path;
use std::path::PathBuf;

use crate::DocdownConfig;
use crate::DocdownError;
use crate::DocdownResult;
use crate::Package;
use crate::Style;
use crate::TemplateOptions;

/// Model file names probed in a package directory, in order.
pub const MODEL_FILE_CANDIDATES: [&str; 4] = [
	"docdown.json",
	"docdown.yaml",
	"docdown.yml",
	"docdown.model.toml",
];

/// Marker file holding an import path override on its first line.
pub const IMPORT_MARKER_FILE: &str = ".docdown.import";

/// A loaded package together with where it came from.
#[derive(Debug, Clone)]
pub struct PackageContext {
	/// Directory that holds the model, marker, config and template files.
	pub dir: PathBuf,
	/// The model file that was parsed.
	pub model_path: PathBuf,
	pub package: Package,
	/// Config discovered in `dir`, if any.
	pub config: Option<DocdownConfig>,
}

impl PackageContext {
	/// The config style, or the default style when there is no config.
	pub fn style(&self) -> Style {
		self.config
			.as_ref()
			.map(|config| config.style.clone())
			.unwrap_or_default()
	}

	/// Template options from the config. Callers layer command line options
	/// on top.
	pub fn template_options(&self) -> TemplateOptions {
		TemplateOptions {
			disabled: false,
			path: self
				.config
				.as_ref()
				.and_then(|config| config.template_path(&self.dir)),
		}
	}
}

/// Find the model file for `path`.
///
/// A file is used as is. A directory is searched for
/// [`MODEL_FILE_CANDIDATES`].
pub fn resolve_model_path(path: &Path) -> DocdownResult<PathBuf> {
	if path.is_file() {
		return Ok(path.to_path_buf());
	}

	if path.is_dir() {
		if let Some(found) = MODEL_FILE_CANDIDATES
			.iter()
			.map(|candidate| path.join(candidate))
			.find(|candidate| candidate.is_file())
		{
			return Ok(found);
		}
	}

	Err(DocdownError::ModelNotFound(path.display().to_string()))
}

/// Load the package described by `path`, a model file or a package
/// directory. The import marker and config in the package directory are
/// applied.
pub fn load_package(path: &Path) -> DocdownResult<PackageContext> {
	let model_path = resolve_model_path(path)?;
	let dir = model_path
		.parent()
		.map_or_else(|| PathBuf::from("."), Path::to_path_buf);
	tracing::debug!(path = %model_path.display(), "loading documentation model");

	let content = std::fs::read_to_string(&model_path)?;
	let format = model_path
		.extension()
		.and_then(|e| e.to_str())
		.unwrap_or("")
		.to_ascii_lowercase();
	let mut package = parse_model(&content, &format, &model_path.display().to_string())?;

	if let Some(import_path) = read_import_marker(&dir) {
		tracing::debug!(import_path = %import_path, "import path overridden by marker file");
		package.import_path = import_path;
	}

	let config = DocdownConfig::load(&dir)?;

	Ok(PackageContext {
		dir,
		model_path,
		package,
		config,
	})
}

/// Parse a serialized model based on its format.
pub fn parse_model(content: &str, format: &str, path_display: &str) -> DocdownResult<Package> {
	match format {
		"json" => {
			serde_json::from_str(content).map_err(|e| {
				DocdownError::ModelParse {
					path: path_display.to_string(),
					reason: e.to_string(),
				}
			})
		}
		"yaml" | "yml" => {
			serde_yaml_ng::from_str(content).map_err(|e| {
				DocdownError::ModelParse {
					path: path_display.to_string(),
					reason: e.to_string(),
				}
			})
		}
		"toml" => {
			toml::from_str(content).map_err(|e| {
				DocdownError::ModelParse {
					path: path_display.to_string(),
					reason: e.to_string(),
				}
			})
		}
		other => Err(DocdownError::UnsupportedModelFormat(other.to_string())),
	}
}

/// The first line of the import marker in `dir`, trimmed. A missing,
/// unreadable or blank marker yields `None`.
pub fn read_import_marker(dir: &Path) -> Option<String> {
	let content = std::fs::read_to_string(dir.join(IMPORT_MARKER_FILE)).ok()?;
	let import_path = content.lines().next().unwrap_or("").trim();

	if import_path.is_empty() {
		None
	} else {
		Some(import_path.to_string())
	}
}
