//! `docdown_core` renders the declaration-level documentation of a package
//! (synopsis, constants, variables, functions, types and their members) as
//! GitHub-friendly markdown, optionally through a user supplied template.
//!
//! ## Rendering Pipeline
//!
//! ```text
//! Documentation model (docdown.json / docdown.yaml / docdown.model.toml)
//!   → Heading detector (marks headlines in the package synopsis)
//!   → Text formatter (reflows doc text, fences declarations)
//!   → Section renderer (one block per constant, variable, function, type)
//!   → Document renderer (header, synopsis, usage, signature)
//!   → Template overlay (optional, reuses the same emission steps)
//! ```
//!
//! ## Modules
//!
//! - [`config`]: `docdown.toml` discovery and style overrides.
//! - [`heading`]: headline detection strategies.
//! - [`model`]: the documentation model.
//! - [`project`]: model file discovery and the import marker file.
//! - [`template`]: template discovery and the read-only template view.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docdown_core::project::load_package;
//! use docdown_core::render_document;
//! use docdown_core::resolve_template;
//! use std::path::Path;
//!
//! let ctx = load_package(Path::new(".")).unwrap();
//! let template = resolve_template(&ctx.dir, &ctx.template_options()).unwrap();
//! let markdown = render_document(&ctx.package, &ctx.style(), template.as_ref()).unwrap();
//! println!("{markdown}");
//! ```

pub use config::*;
pub use error::*;
pub use format::*;
pub use heading::*;
pub use model::*;
pub use render::*;
pub use section::*;
pub use style::*;
pub use template::*;

pub mod config;
#[allow(unused_assignments)]
mod error;
mod format;
pub mod heading;
pub mod model;
pub mod project;
mod render;
mod section;
mod style;
pub mod template;

#[cfg(test)]
mod __fixtures;
