//! Variables, functions and their identities.

use std::fmt;

use crate::{Name, Operator, Type};

/// Unique identity of a symbol within one compilation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct SymbolId(u32);

impl SymbolId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({})", self.0)
    }
}

/// Where a symbol came from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolKind {
    /// Provided by the language (`gl_Position`, `max`, ...).
    BuiltIn,
    /// Declared in the program being compiled.
    UserDefined,
    /// Injected by a transform pass. Always anonymous.
    Internal,
}

/// A variable symbol.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    id: SymbolId,
    name: Name,
    ty: Type,
    kind: SymbolKind,
}

impl Variable {
    /// Create a builtin or user variable.
    ///
    /// # Panics
    /// Panics on [`SymbolKind::Internal`]; those only come from
    /// [`Variable::new_internal`], which keeps them anonymous.
    pub fn new(id: SymbolId, name: Name, ty: Type, kind: SymbolKind) -> Self {
        assert_ne!(
            kind,
            SymbolKind::Internal,
            "internal variables are created with Variable::new_internal"
        );
        Variable { id, name, ty, kind }
    }

    /// Create an anonymous compiler-internal variable.
    pub fn new_internal(id: SymbolId, ty: Type) -> Self {
        Variable {
            id,
            name: Name::ANONYMOUS,
            ty,
            kind: SymbolKind::Internal,
        }
    }

    #[inline]
    pub fn id(&self) -> SymbolId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> Name {
        self.name
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    #[inline]
    pub fn is_internal(&self) -> bool {
        self.kind == SymbolKind::Internal
    }
}

/// A function parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    pub name: Name,
    pub ty: Type,
}

/// A function identity: what call sites and prototypes point at.
#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    id: SymbolId,
    name: Name,
    mangled_name: Name,
    params: Vec<Param>,
    return_type: Type,
    op: Operator,
    kind: SymbolKind,
}

impl Function {
    /// Create a function identity.
    ///
    /// `mangled_name` must be the encoding of `name` over the parameter
    /// types (see [`crate::mangled_name`]); builtin lookup depends on it.
    pub fn new(
        id: SymbolId,
        name: Name,
        mangled_name: Name,
        params: Vec<Param>,
        return_type: Type,
        op: Operator,
        kind: SymbolKind,
    ) -> Self {
        Function {
            id,
            name,
            mangled_name,
            params,
            return_type,
            op,
            kind,
        }
    }

    #[inline]
    pub fn id(&self) -> SymbolId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> Name {
        self.name
    }

    #[inline]
    pub fn mangled_name(&self) -> Name {
        self.mangled_name
    }

    #[inline]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    #[inline]
    pub fn return_type(&self) -> &Type {
        &self.return_type
    }

    /// Operator tag; [`Operator::CallBuiltInFunction`] for generic builtins.
    #[inline]
    pub fn op(&self) -> Operator {
        self.op
    }

    #[inline]
    pub fn kind(&self) -> SymbolKind {
        self.kind
    }
}

/// Anything the symbol table can hand out.
#[derive(Clone, Debug, PartialEq)]
pub enum Symbol {
    Variable(Variable),
    Function(Function),
}

impl Symbol {
    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Symbol::Variable(var) => Some(var),
            Symbol::Function(_) => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Symbol::Function(func) => Some(func),
            Symbol::Variable(_) => None,
        }
    }
}

#[cfg(test)]
mod tests;
