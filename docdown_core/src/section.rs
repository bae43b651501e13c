//! Per-entity markdown blocks for constants, variables, functions and types.

use crate::Func;
use crate::Style;
use crate::TypeDoc;
use crate::Value;
use crate::format_code;
use crate::format_doc;

/// Where a section is rendered. Functions listed under a type use a
/// different header marker from package-level functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
	Package,
	Type,
}

/// An entity that renders as one block of a usage section.
pub trait SectionEntry {
	/// The header line for this entity, if it has one.
	fn heading(&self, style: &Style, scope: Scope) -> Option<String>;

	fn declaration(&self) -> &str;

	fn doc(&self) -> &str;

	/// Separator between the code block and the doc text.
	fn code_separator(&self) -> &'static str {
		"\n"
	}

	/// Render anything nested under this entity.
	fn render_members(&self, _out: &mut String, _style: &Style) {}
}

impl SectionEntry for Value {
	fn heading(&self, _style: &Style, _scope: Scope) -> Option<String> {
		None
	}

	fn declaration(&self) -> &str {
		&self.declaration
	}

	fn doc(&self) -> &str {
		&self.doc
	}
}

impl SectionEntry for Func {
	fn heading(&self, style: &Style, scope: Scope) -> Option<String> {
		let header = match scope {
			Scope::Package => &style.function_header,
			Scope::Type => &style.type_function_header,
		};

		Some(format!("{header} func{}{}", receiver_segment(&self.receiver), self.name))
	}

	fn declaration(&self) -> &str {
		&self.declaration
	}

	fn doc(&self) -> &str {
		&self.doc
	}
}

impl SectionEntry for TypeDoc {
	fn heading(&self, style: &Style, _scope: Scope) -> Option<String> {
		Some(format!("{} type {}", style.type_header, self.name))
	}

	fn declaration(&self) -> &str {
		&self.declaration
	}

	fn doc(&self) -> &str {
		&self.doc
	}

	fn code_separator(&self) -> &'static str {
		"\n\n"
	}

	fn render_members(&self, out: &mut String, style: &Style) {
		render_section(out, &self.constants, style, Scope::Type);
		render_section(out, &self.variables, style, Scope::Type);
		render_section(out, &self.functions, style, Scope::Type);
		render_section(out, &self.methods, style, Scope::Type);
	}
}

/// Append one block per entry to `out`. An empty slice appends nothing.
pub fn render_section<E: SectionEntry>(out: &mut String, entries: &[E], style: &Style, scope: Scope) {
	for entry in entries {
		if let Some(heading) = entry.heading(style, scope) {
			out.push_str(&heading);
			out.push_str("\n\n");
		}

		out.push_str(&format_code(entry.declaration(), style));
		out.push_str(entry.code_separator());
		out.push_str(&format_doc(entry.doc(), ""));
		out.push('\n');
		entry.render_members(out, style);
	}
}

/// The receiver part of a function header: `" (T) "`, or a single space when
/// there is no receiver.
fn receiver_segment(receiver: &str) -> String {
	let receiver = receiver.trim();
	if receiver.is_empty() {
		" ".to_string()
	} else if receiver.starts_with('(') && receiver.ends_with(')') {
		format!(" {receiver} ")
	} else {
		format!(" ({receiver}) ")
	}
}
