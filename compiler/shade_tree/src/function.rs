//! Prototype and definition nodes for internal functions.

use shade_ir::{Function, Node};

/// Standalone prototype, for forward declarations.
pub fn create_internal_function_prototype_node(function: &Function) -> Node {
    Node::prototype(function)
}

/// Full definition: a prototype paired with `body`, which must be a block.
pub fn create_internal_function_definition_node(function: &Function, body: Node) -> Node {
    Node::definition(Node::prototype(function), body)
}

#[cfg(test)]
mod tests;
