use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::DocdownError;
use crate::DocdownResult;
use crate::Style;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["docdown.toml", ".docdown.toml", ".config/docdown.toml"];

/// Configuration loaded from a `docdown.toml` file in the package directory.
///
/// ```toml
/// template = "docs/readme.tmpl"
///
/// [style]
/// heading = "Title"
/// plain = true
/// include_signature = true
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocdownConfig {
	/// Template file used instead of the conventional template names. Relative
	/// to the package directory.
	#[serde(default)]
	pub template: Option<PathBuf>,
	/// Style overrides applied on top of [`Style::default`].
	#[serde(default)]
	pub style: Style,
}

impl DocdownConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> DocdownResult<Option<DocdownConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		tracing::debug!(path = %config_path.display(), "loading config");
		let content = std::fs::read_to_string(&config_path)?;
		let config: DocdownConfig =
			toml::from_str(&content).map_err(|e| DocdownError::ConfigParse(e.to_string()))?;

		Ok(Some(config))
	}

	/// The configured template path resolved against `root`.
	pub fn template_path(&self, root: &Path) -> Option<PathBuf> {
		self.template.as_ref().map(|path| root.join(path))
	}
}
