//! Builtin function resolution and call emission.
//!
//! Builtins resolve exactly like user overloads: the plain name is mangled
//! over the argument types and the result is looked up in the builtin
//! namespace for the shader's version.

use shade_ir::{mangled_name, Function, Node, ShaderVersion, SymbolTable};

use crate::TreeError;

fn resolve_builtin<'t>(
    name: &str,
    args: &[Node],
    symbols: &'t SymbolTable,
    version: ShaderVersion,
) -> Result<&'t Function, TreeError> {
    let interner = symbols.interner();
    let mangled = mangled_name(interner, name, args.iter().map(Node::ty));

    let symbol = interner
        .get(&mangled)
        .and_then(|key| symbols.find_builtin(key, version));
    match symbol {
        Some(symbol) => symbol.as_function().ok_or(TreeError::NotAFunction {
            mangled_name: mangled,
        }),
        None => Err(TreeError::UnknownBuiltinFunction {
            mangled_name: mangled,
            version: version.number(),
        }),
    }
}

/// Find the builtin overload of `name` matching the argument types.
///
/// `None` means the calling pass built a call that does not exist.
pub fn lookup_builtin_function<'t>(
    name: &str,
    args: &[Node],
    symbols: &'t SymbolTable,
    version: ShaderVersion,
) -> Option<&'t Function> {
    resolve_builtin(name, args, symbols, version).ok()
}

/// Build a call to a builtin.
///
/// A builtin tagged with a direct operator and called with exactly one
/// argument becomes a unary node carrying that operator, so later passes
/// only have one shape to match for "apply this primitive". Everything else
/// becomes an aggregate call node with the arguments in order.
pub fn try_create_builtin_function_call(
    name: &str,
    args: Vec<Node>,
    symbols: &SymbolTable,
    version: ShaderVersion,
) -> Result<Node, TreeError> {
    let func = match resolve_builtin(name, &args, symbols, version) {
        Ok(func) => func,
        Err(err) => {
            tracing::warn!(%err, "builtin call does not resolve");
            return Err(err);
        }
    };

    let args = if func.op().is_builtin_function_call() {
        args
    } else {
        match <[Node; 1]>::try_from(args) {
            Ok([operand]) => {
                tracing::trace!(op = %func.op(), "builtin call emitted as unary");
                return Ok(Node::unary(func.op(), operand, Some(func)));
            }
            Err(args) => args,
        }
    };

    tracing::trace!(name, op = %func.op(), argc = args.len(), "builtin call emitted");
    Ok(Node::builtin_call(func, args))
}

/// Build a call to a builtin. Panics if no overload matches.
pub fn create_builtin_function_call(
    name: &str,
    args: Vec<Node>,
    symbols: &SymbolTable,
    version: ShaderVersion,
) -> Node {
    try_create_builtin_function_call(name, args, symbols, version)
        .unwrap_or_else(|e| panic!("{e}"))
}
