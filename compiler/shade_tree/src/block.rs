//! Statement-to-block coercion.

use shade_ir::Node;

/// Make sure a statement position holds a block.
///
/// `None` (no body) stays `None` and a block is returned as is. Anything
/// else is wrapped in a new single-statement block that takes over the
/// statement's span, so diagnostics on the block still point at the source.
pub fn ensure_block(node: Option<Node>) -> Option<Node> {
    let node = node?;
    if node.is_block() {
        return Some(node);
    }
    let span = node.span();
    Some(Node::block(vec![node]).with_span(span))
}

#[cfg(test)]
mod tests;
