use super::*;
use crate::test_helpers::{builtin_table, float, float_const};
use crate::{create_temp_assignment_node, create_temp_variable};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use shade_ir::Span;

fn statement() -> Node {
    let symbols = builtin_table();
    let var = create_temp_variable(&symbols, &float());
    create_temp_assignment_node(&var, float_const(1.0)).with_span(Span::new(12, 20))
}

#[test]
fn none_stays_none() {
    assert_eq!(ensure_block(None), None);
}

#[test]
fn block_is_returned_unchanged() {
    let block = Node::block(vec![statement(), statement()]).with_span(Span::new(1, 2));
    assert_eq!(ensure_block(Some(block.clone())), Some(block));
}

#[test]
fn statement_is_wrapped_with_its_span() {
    let stmt = statement();
    let Some(block) = ensure_block(Some(stmt.clone())) else {
        panic!("expected a block");
    };
    assert_eq!(block.as_block(), Some(&[stmt][..]));
    assert_eq!(block.span(), Span::new(12, 20));
}

#[test]
fn idempotent() {
    let once = ensure_block(Some(statement()));
    let twice = ensure_block(once.clone());
    assert_eq!(once, twice);
}

proptest! {
    #[test]
    fn idempotent_for_any_span(start in 0u32..1000, len in 0u32..100, wrap in any::<bool>()) {
        let stmt = float_const(0.0).with_span(Span::new(start, start + len));
        let node = if wrap { Node::block(vec![stmt]) } else { stmt };
        let once = ensure_block(Some(node));
        prop_assert_eq!(ensure_block(once.clone()), once);
    }
}
