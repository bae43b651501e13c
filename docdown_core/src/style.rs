use serde::Deserialize;
use serde::Serialize;

use crate::HeadingStrategy;

/// The attribution line appended when [`Style::include_signature`] is set.
pub const SIGNATURE_LINE: &str = "*Generated by **docdown***";

/// Output styling for a render.
///
/// A `Style` is built once (defaults, then config file, then command line
/// overrides) and passed by reference into every rendering call.
///
/// ```toml
/// [style]
/// heading = "TitleCase"
/// plain = true
/// synopsis_header = "##"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Style {
	/// Marker placed before headlines detected in the synopsis.
	pub synopsis_header: String,
	/// First line of the usage section.
	pub usage_header: String,
	/// Marker for package-level functions.
	pub function_header: String,
	/// Marker for types.
	pub type_header: String,
	/// Marker for functions and methods listed under a type.
	pub type_function_header: String,
	/// Render the `import "<path>"` line in the header.
	pub include_import: bool,
	/// Append the docdown attribution footer.
	pub include_signature: bool,
	/// Headline detection used on the synopsis.
	pub heading: HeadingStrategy,
	/// Indent declarations instead of fencing them.
	pub plain: bool,
	/// Info string for fenced declaration blocks.
	pub code_language: String,
}

impl Default for Style {
	fn default() -> Self {
		Self {
			synopsis_header: "###".to_string(),
			usage_header: "## Usage".to_string(),
			function_header: "####".to_string(),
			type_header: "####".to_string(),
			type_function_header: "####".to_string(),
			include_import: true,
			include_signature: false,
			heading: HeadingStrategy::TitleCase1Word,
			plain: false,
			code_language: "go".to_string(),
		}
	}
}
