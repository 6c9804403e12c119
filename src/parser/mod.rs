//! Source tokenizers for the file analyzers.
//!
//! Two tokenizers are provided, both built on the structural scanning
//! primitives in [`crate::scan`]:
//!
//! - **imports** - `import { … } from '…'` statements, for deciding whether
//!   a file references the searched component at all
//! - **classes** - `export class` declarations with their brace-balanced
//!   bodies and typed constructor parameters
//!
//! Neither tokenizer parses the language for real; both tolerate malformed
//! input by producing partial or empty structures instead of failing.
//!
//! # Example
//!
//! ```
//! use depscope::parser::{imports, classes};
//!
//! let source = "import { FooService } from './foo';\n\
//!               export class Widget {\n  constructor(private svc: FooService) {}\n}\n";
//!
//! let found = imports::parse_imports(source);
//! assert!(imports::imports_component(&found, "FooService"));
//!
//! let declarations = classes::tokenize_classes(source);
//! assert_eq!(declarations[0].parameters[0].reference, "svc");
//! ```

pub mod classes;
pub mod imports;
pub mod types;

// Re-export commonly used items for convenience
pub use classes::{parse_parameters, tokenize_classes};
pub use imports::{imports_component, parse_imports};
pub use types::{ClassDeclaration, ConstructorParameter, ImportStatement};
