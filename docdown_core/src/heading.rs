//! Headline detection inside free-form documentation text.
//!
//! A headline is a line made up entirely of "words" drawn from the alphabet
//! `[A-Za-z0-9_-]`, separated by spaces or tabs. Any other character,
//! including trailing punctuation or surrounding whitespace, disqualifies the
//! line.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::DocdownError;

/// The pattern used to decide whether a line is a headline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HeadingStrategy {
	/// Exactly one word on the line.
	SingleWord,
	/// One or more words, each starting with an uppercase letter.
	TitleCase,
	/// One or more words, no case constraint.
	Title,
	/// Either [`HeadingStrategy::SingleWord`] or
	/// [`HeadingStrategy::TitleCase`].
	#[default]
	TitleCase1Word,
	/// Heading detection is disabled.
	None,
}

impl HeadingStrategy {
	/// Returns true when `line` is a headline under this strategy.
	pub fn matches(self, line: &str) -> bool {
		match self {
			Self::SingleWord => is_single_word(line),
			Self::TitleCase => is_title(line, true),
			Self::Title => is_title(line, false),
			Self::TitleCase1Word => is_single_word(line) || is_title(line, true),
			Self::None => false,
		}
	}

	/// The canonical name accepted by the command line and config file.
	pub fn name(self) -> &'static str {
		match self {
			Self::SingleWord => "SingleWord",
			Self::TitleCase => "TitleCase",
			Self::Title => "Title",
			Self::TitleCase1Word => "TitleCase1Word",
			Self::None => "none",
		}
	}
}

impl fmt::Display for HeadingStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for HeadingStrategy {
	type Err = DocdownError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim() {
			"SingleWord" | "1Word" => Ok(Self::SingleWord),
			"TitleCase" => Ok(Self::TitleCase),
			"Title" => Ok(Self::Title),
			"TitleCase1Word" => Ok(Self::TitleCase1Word),
			"none" | "None" | "" | "-" => Ok(Self::None),
			other => Err(DocdownError::UnknownHeading(other.to_string())),
		}
	}
}

impl TryFrom<String> for HeadingStrategy {
	type Error = DocdownError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<HeadingStrategy> for String {
	fn from(value: HeadingStrategy) -> Self {
		value.name().to_string()
	}
}

/// Prefix every headline in `text` with `header`.
///
/// Lines are compared one at a time and line breaks are preserved exactly.
/// With [`HeadingStrategy::None`] the text is returned unchanged.
pub fn headify(text: &str, header: &str, strategy: HeadingStrategy) -> String {
	if strategy == HeadingStrategy::None {
		return text.to_string();
	}

	let mut result = String::with_capacity(text.len() + header.len() * 4);
	for (index, line) in text.split('\n').enumerate() {
		if index > 0 {
			result.push('\n');
		}

		if strategy.matches(line) {
			result.push_str(header);
			result.push(' ');
		}
		result.push_str(line);
	}

	result
}

fn is_word_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn is_word(word: &str) -> bool {
	!word.is_empty() && word.chars().all(is_word_char)
}

fn is_single_word(line: &str) -> bool {
	is_word(line)
}

fn is_title(line: &str, title_case: bool) -> bool {
	if line.is_empty() || line.starts_with([' ', '\t']) || line.ends_with([' ', '\t']) {
		return false;
	}

	line.split([' ', '\t'])
		.filter(|word| !word.is_empty())
		.all(|word| {
			is_word(word) && (!title_case || word.starts_with(|c: char| c.is_ascii_uppercase()))
		})
}
