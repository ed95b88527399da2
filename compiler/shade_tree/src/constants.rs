//! Single-slot constant leaves.

use shade_ir::{BasicType, ConstValue, Node, Precision, Qualifier, Type};
use std::iter;

/// A const `int` literal, for index expressions built by passes.
pub fn create_index_node(index: i32) -> Node {
    Node::constant(
        iter::once(ConstValue::Int(index)).collect(),
        const_scalar(BasicType::Int),
    )
}

/// A const `bool` literal.
pub fn create_bool_node(value: bool) -> Node {
    Node::constant(
        iter::once(ConstValue::Bool(value)).collect(),
        const_scalar(BasicType::Bool),
    )
}

fn const_scalar(basic: BasicType) -> Type {
    Type::new(basic, Precision::Undefined, Qualifier::Const, 1, 1)
}
