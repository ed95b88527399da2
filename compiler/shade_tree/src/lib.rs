//! Tree construction and normalization helpers for Shade transform passes.
//!
//! Transform passes rewrite the tree in place and regularly need to splice in
//! fragments of their own: zero values, temporaries, builtin calls, blocks
//! around single statements. This crate builds those fragments so that they
//! come out well-typed and follow the rules every injected node must obey.
//!
//! # Pipeline Position
//!
//! ```text
//! Source → Parse → Validate → **Transform passes** → Output
//!                                 (use shade_tree)
//! ```
//!
//! # Components
//!
//! - [`create_zero_node`]: type-directed zero values, recursing through
//!   arrays and structs
//! - [`create_index_node`], [`create_bool_node`]: single constant leaves
//! - `temp`: anonymous internal temporaries and their declarations
//! - [`create_builtin_function_call`]: overload resolution of builtins and
//!   unary/aggregate call emission
//! - [`reference_global_variable`], [`reference_builtin_variable`]
//! - [`ensure_block`]
//! - [`create_internal_function_prototype_node`],
//!   [`create_internal_function_definition_node`]
//!
//! # Failure
//!
//! Nothing here reports diagnostics. Calls that can only fail because the
//! calling pass is wrong (an unknown builtin, an undeclared global) have a
//! `try_*` form returning [`TreeError`] and a plain form that panics.

mod block;
mod builtin;
mod constants;
mod error;
mod function;
mod reference;
mod temp;
mod zero;

#[cfg(test)]
mod test_helpers;

pub use block::ensure_block;
pub use builtin::{
    create_builtin_function_call, lookup_builtin_function, try_create_builtin_function_call,
};
pub use constants::{create_bool_node, create_index_node};
pub use error::TreeError;
pub use function::{create_internal_function_definition_node, create_internal_function_prototype_node};
pub use reference::{
    reference_builtin_variable, reference_global_variable, try_reference_builtin_variable,
    try_reference_global_variable,
};
pub use temp::{
    create_temp_assignment_node, create_temp_declaration_node, create_temp_init_declaration_node,
    create_temp_symbol_node, create_temp_variable, create_temp_variable_with_qualifier,
    declare_temp_variable, declare_temp_variable_with_initializer, try_create_temp_symbol_node,
};
pub use zero::create_zero_node;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a log subscriber for the builders' events.
///
/// Does nothing unless `RUST_LOG` holds a valid filter, e.g.
/// `RUST_LOG=shade_tree=trace` to see every temporary and builtin call a
/// pass creates. Output goes through the test writer so `cargo test`
/// captures it per test. Only the first call has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_test_writer().without_time().compact())
            .with(filter)
            .try_init();
    });
}
