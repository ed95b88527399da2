use super::*;
use crate::BasicType;
use pretty_assertions::assert_eq;

#[test]
fn internal_variable_is_anonymous() {
    let var = Variable::new_internal(SymbolId::new(4), Type::scalar(BasicType::Float));
    assert!(var.name().is_anonymous());
    assert_eq!(var.kind(), SymbolKind::Internal);
    assert!(var.is_internal());
}

#[test]
fn user_variable_keeps_its_name() {
    let name = crate::StringInterner::new().intern("u_color");
    let var = Variable::new(
        SymbolId::new(5),
        name,
        Type::vector(BasicType::Float, 4),
        SymbolKind::UserDefined,
    );
    assert_eq!(var.name(), name);
    assert!(!var.is_internal());
}

#[test]
#[should_panic(expected = "internal variables are created with Variable::new_internal")]
fn named_internal_variable_is_rejected() {
    let name = crate::StringInterner::new().intern("tmp");
    let _ = Variable::new(
        SymbolId::new(6),
        name,
        Type::scalar(BasicType::Int),
        SymbolKind::Internal,
    );
}

#[test]
#[should_panic(expected = "internal variables are created with Variable::new_internal")]
fn anonymous_internal_variable_still_needs_new_internal() {
    let _ = Variable::new(
        SymbolId::new(7),
        Name::ANONYMOUS,
        Type::scalar(BasicType::Int),
        SymbolKind::Internal,
    );
}
