//! Function registry

use std::sync::Arc;

use indexmap::IndexMap;

use crate::ast::{Expr, FunctionDeclaration};

/// A declared function.
///
/// The body is shared with the declaring node, so registering a
/// declaration never copies the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// Function name
    pub name: String,

    /// Parameter names, in positional order
    pub params: Vec<String>,

    /// The function body
    pub body: Arc<Expr>,
}

impl FunctionDef {
    /// Number of parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl From<&FunctionDeclaration> for FunctionDef {
    fn from(decl: &FunctionDeclaration) -> Self {
        Self {
            name: decl.name().to_string(),
            params: decl.params().to_vec(),
            body: Arc::clone(decl.body()),
        }
    }
}

/// The global mapping from function name to definition.
///
/// One registry serves every call frame of a session, which is what lets
/// recursive and forward calls resolve.
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    functions: IndexMap<String, Arc<FunctionDef>>,
}

impl FunctionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function, replacing any earlier one with the same name.
    ///
    /// Returns the replaced definition.
    pub fn declare(&mut self, def: FunctionDef) -> Option<Arc<FunctionDef>> {
        self.functions.insert(def.name.clone(), Arc::new(def))
    }

    /// Look up a function by name.
    pub fn get(&self, name: &str) -> Option<&Arc<FunctionDef>> {
        self.functions.get(name)
    }

    /// Check if a function is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Declared names, in first-declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    /// Number of declared functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check if no function is declared.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Forget every declaration.
    pub fn clear(&mut self) {
        self.functions.clear();
    }
}
