//! Markdown-safe formatting for doc comments and declaration source.

use crate::Style;

/// Column budget for reflowed documentation text.
pub const LINE_WIDTH: usize = 80;

/// Lower bound on the reflow width for deeply indented text.
const MIN_LINE_WIDTH: usize = 20;

/// Width of the indent used for plain (unfenced) code blocks.
pub const CODE_INDENT: usize = 4;

/// Marker inserted by struct printers when fields are hidden.
const FILTERED_FIELDS_MARKER: &str = "contains filtered or unexported fields";

#[derive(Debug)]
enum Block<'a> {
	Paragraph(Vec<&'a str>),
	Verbatim(Vec<&'a str>),
}

/// Reflow documentation text to `LINE_WIDTH - indent.len()` columns.
///
/// Paragraphs are re-wrapped word by word. Lines that begin with a space or a
/// tab are treated as verbatim (example code, pre-formatted output) and pass
/// through untouched. List items always start a new paragraph so that they
/// are never merged into the text above them, and indented lines directly
/// below a list item continue that item. Blocks are separated by a
/// single blank line.
pub fn format_doc(text: &str, indent: &str) -> String {
	let width = LINE_WIDTH.saturating_sub(indent.len()).max(MIN_LINE_WIDTH);
	let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
	let blocks = split_blocks(&normalized);

	let mut result = String::with_capacity(normalized.len() + indent.len() * 8);
	for (index, block) in blocks.iter().enumerate() {
		if index > 0 {
			result.push('\n');
		}

		match block {
			Block::Paragraph(lines) => {
				for line in wrap_words(lines, width) {
					result.push_str(indent);
					result.push_str(&line);
					result.push('\n');
				}
			}
			Block::Verbatim(lines) => {
				for line in lines {
					result.push_str(line.trim_end());
					result.push('\n');
				}
			}
		}
	}

	result
}

fn split_blocks(text: &str) -> Vec<Block<'_>> {
	let mut blocks = Vec::new();
	let mut current: Option<Block<'_>> = None;

	for line in text.lines() {
		if line.trim().is_empty() {
			blocks.extend(current.take());
			continue;
		}

		let verbatim = line.starts_with([' ', '\t']);
		let continues = match &current {
			Some(Block::Verbatim(_)) => verbatim,
			Some(Block::Paragraph(lines)) => {
				if verbatim {
					lines.first().is_some_and(|first| is_list_item(first))
				} else {
					!is_list_item(line)
				}
			}
			None => false,
		};

		if continues {
			if let Some(Block::Verbatim(lines) | Block::Paragraph(lines)) = &mut current {
				lines.push(line);
			}
		} else {
			blocks.extend(current.take());
			current = Some(if verbatim {
				Block::Verbatim(vec![line])
			} else {
				Block::Paragraph(vec![line])
			});
		}
	}

	blocks.extend(current);
	blocks
}

fn is_list_item(line: &str) -> bool {
	if line.starts_with("- ") || line.starts_with("* ") || line.starts_with("+ ") {
		return true;
	}

	let digits = line.chars().take_while(char::is_ascii_digit).count();
	digits > 0 && line[digits..].starts_with(". ")
}

fn wrap_words(lines: &[&str], width: usize) -> Vec<String> {
	let mut wrapped = Vec::new();
	let mut current = String::new();

	for word in lines.iter().flat_map(|line| line.split_whitespace()) {
		if !current.is_empty() && current.len() + 1 + word.len() > width {
			wrapped.push(std::mem::take(&mut current));
		}

		if !current.is_empty() {
			current.push(' ');
		}
		current.push_str(word);
	}

	if !current.is_empty() {
		wrapped.push(current);
	}

	wrapped
}

/// Render declaration source as a Markdown code block.
///
/// In plain mode every non-blank line is indented by [`CODE_INDENT`] spaces;
/// otherwise the declaration is fenced and tagged with the style's code
/// language. Filtered-field markers are removed in both modes.
pub fn format_code(declaration: &str, style: &Style) -> String {
	let source = strip_filtered_fields(declaration);

	if style.plain {
		indent(&format!("{source}\n"), &" ".repeat(CODE_INDENT))
	} else {
		format!("```{}\n{source}\n```", style.code_language)
	}
}

/// Prefix every non-blank line of `text` with `prefix`.
///
/// Blank lines are left as they are and the trailing newline, if any, is
/// kept.
pub fn indent(text: &str, prefix: &str) -> String {
	let mut result = String::with_capacity(text.len() + prefix.len() * 8);
	for segment in text.split_inclusive('\n') {
		if !segment.trim().is_empty() {
			result.push_str(prefix);
		}
		result.push_str(segment);
	}

	result
}

fn strip_filtered_fields(declaration: &str) -> String {
	declaration
		.lines()
		.filter(|line| !is_filtered_fields_marker(line))
		.collect::<Vec<_>>()
		.join("\n")
}

fn is_filtered_fields_marker(line: &str) -> bool {
	let trimmed = line.trim();
	let phrase = trimmed.strip_prefix("//").map_or(trimmed, str::trim_start);
	phrase == FILTERED_FIELDS_MARKER
}

/// Trim a rendered block for concatenation.
///
/// Leading blank lines and all trailing whitespace are removed. The leading
/// indentation of the first content line is kept so that a block that opens
/// with verbatim text still renders as code.
pub fn trim_block(text: &str) -> &str {
	let text = text.trim_end();
	let mut start = 0;

	for line in text.split_inclusive('\n') {
		if !line.trim().is_empty() {
			break;
		}
		start += line.len();
	}

	&text[start..]
}
