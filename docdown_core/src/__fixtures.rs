use crate::Func;
use crate::Package;
use crate::TypeDoc;
use crate::Value;

pub const EXAMPLE_SYNOPSIS: &str = "Package example is an example package with documentation

	// Here is some code
	func example() {
		abc := 1 + 1
	}()

Installation

	# This is how to install it:
	$ curl http://example.com
	$ tar xf example.tar.gz -C .
	$ ./example &
";

pub const HEADLINE_SYNOPSIS: &str = "Headline
The previous line is a single word.

a Title Is Without punctuation

	In this mode, a title can be something without punctuation

Also do not title something with a space at the end\x20

Only Title Casing Is Allowed Here

What it says on the tin above.

1word

A title with a-dash";

pub fn example_package() -> Package {
	Package {
		name: "example".to_string(),
		import_path: "github.com/example/example".to_string(),
		is_command: false,
		synopsis: EXAMPLE_SYNOPSIS.to_string(),
		constants: vec![
			Value {
				declaration: "const Other = 3".to_string(),
				doc: "Constantly,\n\nChanging.\n".to_string(),
			},
			Value {
				declaration: "const (\n    Another = 0\n    Again   = \"this\"\n)".to_string(),
				doc: "Some more commentary\n".to_string(),
			},
		],
		variables: vec![Value {
			declaration: "var (\n    This = 1\n\n    // Anything?\n    That = 2.1\n)".to_string(),
			doc: "Something?\n".to_string(),
		}],
		functions: vec![Func {
			name: "Example".to_string(),
			receiver: String::new(),
			declaration: "func Example()".to_string(),
			doc: "Example is a function that does nothing\n".to_string(),
		}],
		types: vec![example_type()],
	}
}

pub fn example_type() -> TypeDoc {
	TypeDoc {
		name: "ExampleType".to_string(),
		declaration: "type ExampleType struct {\n    First  int\n    Second string\n    // contains \
		              filtered or unexported fields\n}"
			.to_string(),
		doc: "ExampleType is a type of nothing\n".to_string(),
		constants: vec![],
		variables: vec![],
		functions: vec![Func {
			name: "NewExample".to_string(),
			receiver: String::new(),
			declaration: "func NewExample() *ExampleType".to_string(),
			doc: String::new(),
		}],
		methods: vec![Func {
			name: "Set".to_string(),
			receiver: "ExampleType".to_string(),
			declaration: "func (ExampleType) Set() bool".to_string(),
			doc: String::new(),
		}],
	}
}

pub fn command_package() -> Package {
	Package {
		name: "mkreadme".to_string(),
		import_path: "github.com/example/mkreadme".to_string(),
		is_command: true,
		synopsis: "Command mkreadme generates documentation.\n\nUsage\n\n\tmkreadme [path]\n"
			.to_string(),
		..example_package()
	}
}

pub fn empty_package() -> Package {
	Package {
		name: "empty".to_string(),
		synopsis: "Package empty has no declarations.".to_string(),
		..Package::default()
	}
}
