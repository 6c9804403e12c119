//! Value types produced by the source tokenizers.
//!
//! These are built once by the import parser and class tokenizer and passed
//! by reference to the usage scanners; nothing mutates them after
//! construction.

/// One `import … from …` statement found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    /// Imported symbol names, in declaration order, exactly as written with
    /// spaces removed. Malformed statements can leave empty entries behind.
    pub symbols: Vec<String>,
    /// The module path between the first pair of quotes after `import`.
    pub origin: String,
}

impl ImportStatement {
    /// Returns true if `name` appears verbatim in the symbol list.
    pub fn imports(&self, name: &str) -> bool {
        self.symbols.iter().any(|symbol| symbol == name)
    }
}

/// One parameter of a class constructor.
///
/// Only parameters carrying an explicit type annotation are represented;
/// untyped parameters cannot take part in injection and are dropped during
/// tokenization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorParameter {
    /// Visibility keyword preceding the parameter name, `"public"` when the
    /// source does not spell one out.
    pub scope: String,
    /// The parameter name, i.e. the member the class reaches the dependency
    /// through (`this.<reference>`).
    pub reference: String,
    /// The annotated type name.
    pub type_name: String,
}

/// A tokenized `export class` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration {
    /// The class identifier.
    pub name: String,
    /// Full declaration text from the `export` keyword through the matching
    /// closing brace of the class body.
    pub body: String,
    /// Typed constructor parameters, in declaration order.
    pub parameters: Vec<ConstructorParameter>,
}

impl ClassDeclaration {
    /// Returns the first constructor parameter whose type is `type_name`,
    /// which decides whether this class receives that dependency at all.
    pub fn injection_of(&self, type_name: &str) -> Option<&ConstructorParameter> {
        self.parameters
            .iter()
            .find(|parameter| parameter.type_name == type_name)
    }
}
