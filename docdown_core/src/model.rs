//! The documentation model consumed by the renderer.
//!
//! A model is produced by an external source parser and handed over as a
//! serialized document. Every field is optional in the serialized form so a
//! partially extracted package still renders.

use serde::Deserialize;
use serde::Serialize;

/// The declaration-level documentation of a single package or command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Package {
	/// Display name of the package or command.
	pub name: String,
	/// Import path shown in the header. Empty means no import line.
	pub import_path: String,
	/// Commands render only their header and synopsis.
	pub is_command: bool,
	/// The package doc comment.
	pub synopsis: String,
	pub constants: Vec<Value>,
	pub variables: Vec<Value>,
	pub functions: Vec<Func>,
	pub types: Vec<TypeDoc>,
}

/// A constant or variable declaration group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Value {
	pub declaration: String,
	pub doc: String,
}

/// A function or method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Func {
	pub name: String,
	/// Receiver type for methods, e.g. `T` or `*T`. Empty for plain
	/// functions.
	pub receiver: String,
	pub declaration: String,
	pub doc: String,
}

/// A type together with the declarations grouped under it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeDoc {
	pub name: String,
	pub declaration: String,
	pub doc: String,
	pub constants: Vec<Value>,
	pub variables: Vec<Value>,
	/// Constructors and other functions returning this type.
	pub functions: Vec<Func>,
	pub methods: Vec<Func>,
}

impl Package {
	/// Returns true when the package has nothing to show in its usage
	/// section.
	pub fn has_no_declarations(&self) -> bool {
		self.constants.is_empty()
			&& self.variables.is_empty()
			&& self.functions.is_empty()
			&& self.types.is_empty()
	}
}
