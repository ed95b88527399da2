use super::*;
use crate::test_helpers::{builtin_table, float, float_const};
use crate::{create_temp_assignment_node, create_temp_variable, ensure_block};
use pretty_assertions::assert_eq;
use shade_ir::{NodeKind, Operator, Param, Qualifier, SymbolKind, SymbolTable};

fn internal_function(symbols: &SymbolTable) -> Function {
    let interner = symbols.interner();
    let params = vec![Param {
        name: interner.intern("x"),
        ty: float().with_qualifier(Qualifier::ParamIn),
    }];
    let mangled = shade_ir::mangled_name(interner, "internal_helper", params.iter().map(|p| &p.ty));
    Function::new(
        symbols.next_unique_id(),
        interner.intern("internal_helper"),
        interner.intern_owned(mangled),
        params,
        float(),
        Operator::CallFunctionInAst,
        SymbolKind::Internal,
    )
}

#[test]
fn prototype_node() {
    let symbols = builtin_table();
    let func = internal_function(&symbols);
    let node = create_internal_function_prototype_node(&func);

    let NodeKind::FunctionPrototype { function } = node.kind() else {
        panic!("expected prototype, got {node:?}");
    };
    assert_eq!(**function, func);
    assert_eq!(node.ty(), &float());
    assert_eq!(symbols.interner().lookup(func.mangled_name()), "internal_helper(f;");
}

#[test]
fn definition_pairs_prototype_and_body() {
    let symbols = builtin_table();
    let func = internal_function(&symbols);
    let var = create_temp_variable(&symbols, &float());
    let Some(body) = ensure_block(Some(create_temp_assignment_node(&var, float_const(0.0))))
    else {
        panic!("expected a body block");
    };

    let node = create_internal_function_definition_node(&func, body.clone());
    let NodeKind::FunctionDefinition { prototype, body: def_body } = node.kind() else {
        panic!("expected definition, got {node:?}");
    };
    assert_eq!(**prototype, create_internal_function_prototype_node(&func));
    assert_eq!(**def_body, body);
    assert_eq!(node.ty(), func.return_type());
}
