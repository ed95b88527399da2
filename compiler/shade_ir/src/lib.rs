//! Shade IR - data model for the shader translator's tree.
//!
//! This crate contains the data structures transform passes work on:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Type descriptors (basic kind, qualifier, array dimensions, struct layout)
//! - Constant value slots
//! - Variables, functions and the symbol table
//! - Mangled names for overload resolution
//! - Tree nodes
//!
//! # Design Philosophy
//!
//! - **Values, not mutation**: re-qualifying or peeling a `Type` yields a new
//!   value; struct layouts are immutable and shared.
//! - **Exclusive ownership**: a node owns its children; nothing in the tree
//!   is reference counted.
//! - **Two namespaces**: globals and version-gated builtins are separate
//!   lookups on the symbol table.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod constant;
mod interner;
mod mangle;
mod name;
pub mod node;
mod operator;
mod span;
mod symbol;
mod symbol_table;
mod types;

pub use constant::{ConstValue, ConstantUnion};
pub use interner::StringInterner;
pub use mangle::{mangled_name, push_mangled_type};
pub use name::Name;
pub use node::{Node, NodeKind};
pub use operator::Operator;
pub use span::Span;
pub use symbol::{Function, Param, Symbol, SymbolId, SymbolKind, Variable};
pub use symbol_table::{ShaderVersion, SymbolTable, VersionRange};
pub use types::{ArraySizes, BasicType, Field, Precision, Qualifier, StructType, Type};

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Name, SymbolId};
    crate::static_assert_size!(Name, 4);
    crate::static_assert_size!(SymbolId, 4);
}
