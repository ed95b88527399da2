use super::*;
use crate::test_helpers::{builtin_table, float};
use crate::TreeError;
use pretty_assertions::assert_eq;
use shade_ir::{BasicType, Qualifier, SymbolKind};

#[test]
fn global_reference() {
    let symbols = builtin_table();
    let node = reference_global_variable("u_scale", &symbols);

    let Some(var) = node.as_symbol() else {
        panic!("expected symbol node");
    };
    assert_eq!(symbols.interner().lookup(var.name()), "u_scale");
    assert_eq!(var.kind(), SymbolKind::UserDefined);
    assert_eq!(node.ty(), &float().with_qualifier(Qualifier::Uniform));
}

#[test]
fn global_reference_does_not_intern_missing_names() {
    let symbols = builtin_table();
    let before = symbols.interner().len();
    assert_eq!(
        try_reference_global_variable("u_missing", &symbols),
        Err(TreeError::UnknownGlobal {
            name: "u_missing".to_owned()
        })
    );
    assert_eq!(symbols.interner().len(), before);
}

#[test]
fn global_function_is_not_a_variable() {
    let symbols = builtin_table();
    assert_eq!(
        try_reference_global_variable("helper", &symbols),
        Err(TreeError::NotAVariable {
            name: "helper".to_owned()
        })
    );
}

#[test]
#[should_panic(expected = "no global variable named `u_missing`")]
fn global_reference_panics_when_missing() {
    let symbols = builtin_table();
    let _ = reference_global_variable("u_missing", &symbols);
}

#[test]
fn builtin_reference() {
    let symbols = builtin_table();
    let node = reference_builtin_variable("gl_Position", &symbols, ShaderVersion::ESSL3_00);

    let Some(var) = node.as_symbol() else {
        panic!("expected symbol node");
    };
    assert_eq!(var.kind(), SymbolKind::BuiltIn);
    assert_eq!(node.ty().qualifier(), Qualifier::Position);
}

#[test]
fn builtin_struct_reference() {
    let symbols = builtin_table();
    let node = reference_builtin_variable("gl_DepthRange", &symbols, ShaderVersion::ESSL1_00);
    assert_eq!(node.ty().basic(), BasicType::Struct);
    assert_eq!(node.ty().structure().map(|s| s.fields().len()), Some(3));
}

#[test]
fn builtin_reference_respects_version() {
    let symbols = builtin_table();
    assert!(try_reference_builtin_variable("gl_FragColor", &symbols, ShaderVersion::ESSL1_00).is_ok());
    assert_eq!(
        try_reference_builtin_variable("gl_FragColor", &symbols, ShaderVersion::ESSL3_00),
        Err(TreeError::UnknownBuiltinVariable {
            name: "gl_FragColor".to_owned(),
            version: 300,
        })
    );
}

#[test]
fn globals_and_builtins_are_separate_namespaces() {
    let symbols = builtin_table();
    assert!(try_reference_global_variable("gl_Position", &symbols).is_err());
    assert!(try_reference_builtin_variable("u_scale", &symbols, ShaderVersion::ESSL3_00).is_err());
}

#[test]
#[should_panic(expected = "no builtin variable named `gl_FragColor` in shader version 300")]
fn builtin_reference_panics_when_missing() {
    let symbols = builtin_table();
    let _ = reference_builtin_variable("gl_FragColor", &symbols, ShaderVersion::ESSL3_00);
}
