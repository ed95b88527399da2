//! References to existing globals and builtin variables.
//!
//! These only read the symbol table; the variables must already exist.

use shade_ir::{Node, ShaderVersion, Symbol, SymbolTable};

use crate::TreeError;

fn variable_node(symbol: &Symbol, name: &str) -> Result<Node, TreeError> {
    symbol
        .as_variable()
        .map(|var| Node::symbol(var.clone()))
        .ok_or_else(|| TreeError::NotAVariable {
            name: name.to_owned(),
        })
}

/// Reference the global variable `name`.
pub fn try_reference_global_variable(name: &str, symbols: &SymbolTable) -> Result<Node, TreeError> {
    let symbol = symbols
        .interner()
        .get(name)
        .and_then(|key| symbols.find_global(key))
        .ok_or_else(|| TreeError::UnknownGlobal {
            name: name.to_owned(),
        })?;
    variable_node(symbol, name)
}

/// Reference the global variable `name`. Panics if it is not declared.
pub fn reference_global_variable(name: &str, symbols: &SymbolTable) -> Node {
    try_reference_global_variable(name, symbols).unwrap_or_else(|e| panic!("{e}"))
}

/// Reference the builtin variable `name` as visible at `version`.
pub fn try_reference_builtin_variable(
    name: &str,
    symbols: &SymbolTable,
    version: ShaderVersion,
) -> Result<Node, TreeError> {
    let symbol = symbols
        .interner()
        .get(name)
        .and_then(|key| symbols.find_builtin(key, version))
        .ok_or_else(|| TreeError::UnknownBuiltinVariable {
            name: name.to_owned(),
            version: version.number(),
        })?;
    variable_node(symbol, name)
}

/// Reference the builtin variable `name`. Panics if it does not exist at
/// `version`.
pub fn reference_builtin_variable(
    name: &str,
    symbols: &SymbolTable,
    version: ShaderVersion,
) -> Node {
    try_reference_builtin_variable(name, symbols, version).unwrap_or_else(|e| panic!("{e}"))
}

#[cfg(test)]
mod tests;
