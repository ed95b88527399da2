//! Caller-contract violations.
//!
//! Each fallible builder has a `try_*` form returning these and a plain form
//! that panics with the same message. Transform passes use the plain form:
//! a missing builtin or global there is a bug in the pass, not in the
//! program being compiled.

use shade_ir::{Qualifier, SymbolId, SymbolKind};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("no builtin function `{mangled_name}` in shader version {version}")]
    UnknownBuiltinFunction { mangled_name: String, version: u16 },

    #[error("builtin `{mangled_name}` resolved to a variable, not a function")]
    NotAFunction { mangled_name: String },

    #[error("no global variable named `{name}`")]
    UnknownGlobal { name: String },

    #[error("no builtin variable named `{name}` in shader version {version}")]
    UnknownBuiltinVariable { name: String, version: u16 },

    #[error("`{name}` resolved to a function, not a variable")]
    NotAVariable { name: String },

    #[error("{id:?} is not a temporary (kind {kind:?}, qualifier {qualifier})")]
    NotATemporary {
        id: SymbolId,
        kind: SymbolKind,
        qualifier: Qualifier,
    },
}
