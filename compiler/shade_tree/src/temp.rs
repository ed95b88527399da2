//! Compiler-injected temporaries.
//!
//! Every temporary created here is anonymous, tagged
//! [`SymbolKind::Internal`], and carries exactly the qualifier it was asked
//! for. Passes should never build temporaries by hand.

use shade_ir::{Node, Operator, Qualifier, SymbolKind, SymbolTable, Type, Variable};

use crate::TreeError;

/// Create an anonymous internal variable of type `ty`.
///
/// The symbol table only hands out the id; the variable is not inserted
/// into any namespace.
pub fn create_temp_variable(symbols: &SymbolTable, ty: &Type) -> Variable {
    let var = Variable::new_internal(symbols.next_unique_id(), ty.clone());
    tracing::trace!(
        id = var.id().raw(),
        basic = %ty.basic(),
        qualifier = %ty.qualifier(),
        "created temporary"
    );
    var
}

/// Create an anonymous internal variable with `qualifier` forced onto a copy
/// of `ty`.
pub fn create_temp_variable_with_qualifier(
    symbols: &SymbolTable,
    ty: &Type,
    qualifier: Qualifier,
) -> Variable {
    if ty.qualifier() == qualifier {
        return create_temp_variable(symbols, ty);
    }
    create_temp_variable(symbols, &ty.clone().with_qualifier(qualifier))
}

/// Reference a temporary.
///
/// Fails unless the variable is internal and qualified temporary, const or
/// global.
pub fn try_create_temp_symbol_node(var: &Variable) -> Result<Node, TreeError> {
    let qualifier = var.ty().qualifier();
    let qualifier_ok = matches!(
        qualifier,
        Qualifier::Temporary | Qualifier::Const | Qualifier::Global
    );
    if var.kind() != SymbolKind::Internal || !qualifier_ok {
        return Err(TreeError::NotATemporary {
            id: var.id(),
            kind: var.kind(),
            qualifier,
        });
    }
    Ok(Node::symbol(var.clone()))
}

/// Reference a temporary. Panics if `var` is not one.
pub fn create_temp_symbol_node(var: &Variable) -> Node {
    try_create_temp_symbol_node(var).unwrap_or_else(|e| panic!("{e}"))
}

/// `T tmp;`
pub fn create_temp_declaration_node(var: &Variable) -> Node {
    Node::declaration(vec![create_temp_symbol_node(var)])
}

/// `T tmp = initializer;`
pub fn create_temp_init_declaration_node(var: &Variable, initializer: Node) -> Node {
    let init = Node::binary(
        Operator::Initialize,
        create_temp_symbol_node(var),
        initializer,
    );
    Node::declaration(vec![init])
}

/// `tmp = value`
pub fn create_temp_assignment_node(var: &Variable, value: Node) -> Node {
    Node::binary(Operator::Assign, create_temp_symbol_node(var), value)
}

/// Create a temporary and its uninitialized declaration.
///
/// The declaration goes into the statement list; the variable is kept for
/// building references later in the same pass.
pub fn declare_temp_variable(
    symbols: &SymbolTable,
    ty: &Type,
    qualifier: Qualifier,
) -> (Variable, Node) {
    let var = create_temp_variable_with_qualifier(symbols, ty, qualifier);
    let declaration = create_temp_declaration_node(&var);
    (var, declaration)
}

/// Create a temporary typed after `initializer` and its initializing
/// declaration.
pub fn declare_temp_variable_with_initializer(
    symbols: &SymbolTable,
    initializer: Node,
    qualifier: Qualifier,
) -> (Variable, Node) {
    let var = create_temp_variable_with_qualifier(symbols, initializer.ty(), qualifier);
    let declaration = create_temp_init_declaration_node(&var, initializer);
    (var, declaration)
}
