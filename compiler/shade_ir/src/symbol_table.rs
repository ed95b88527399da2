//! Symbol table: the global namespace and the version-gated builtin
//! namespace.
//!
//! The two namespaces are queried through two separate operations:
//! - [`SymbolTable::find_global`]: plain name, program globals
//! - [`SymbolTable::find_builtin`]: mangled name (or plain name for builtin
//!   variables), filtered by language version
//!
//! Tree builders only ever borrow the table shared. Fresh symbol ids come
//! from an atomic counter so allocating a temporary does not need `&mut`.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::{
    mangled_name, Field, Function, Name, Operator, Param, StringInterner, StructType, Symbol,
    SymbolId, SymbolKind, Type, Variable,
};

/// Shading language version (`#version` number).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ShaderVersion(u16);

impl ShaderVersion {
    pub const ESSL1_00: ShaderVersion = ShaderVersion(100);
    pub const ESSL3_00: ShaderVersion = ShaderVersion(300);
    pub const ESSL3_10: ShaderVersion = ShaderVersion(310);
    pub const ESSL3_20: ShaderVersion = ShaderVersion(320);

    #[inline]
    pub const fn new(version: u16) -> Self {
        ShaderVersion(version)
    }

    #[inline]
    pub const fn number(self) -> u16 {
        self.0
    }
}

/// Inclusive range of versions a builtin is visible in.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct VersionRange {
    pub first: ShaderVersion,
    /// `None` means "every later version".
    pub last: Option<ShaderVersion>,
}

impl VersionRange {
    /// Visible from `first` onwards.
    pub const fn since(first: ShaderVersion) -> Self {
        VersionRange { first, last: None }
    }

    /// Visible only in `first..=last`.
    pub const fn between(first: ShaderVersion, last: ShaderVersion) -> Self {
        VersionRange {
            first,
            last: Some(last),
        }
    }

    pub fn contains(self, version: ShaderVersion) -> bool {
        version >= self.first && self.last.map_or(true, |last| version <= last)
    }
}

struct BuiltinEntry {
    versions: VersionRange,
    symbol: Symbol,
}

/// Symbol storage for one compilation.
pub struct SymbolTable {
    interner: StringInterner,
    globals: FxHashMap<Name, Symbol>,
    /// Keyed by mangled name for functions, plain name for variables.
    /// Several entries may share a key when visibility differs by version.
    builtins: FxHashMap<Name, Vec<BuiltinEntry>>,
    next_id: AtomicU32,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            interner: StringInterner::new(),
            globals: FxHashMap::default(),
            builtins: FxHashMap::default(),
            next_id: AtomicU32::new(1),
        }
    }

    #[inline]
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Allocate a fresh symbol id.
    pub fn next_unique_id(&self) -> SymbolId {
        SymbolId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Look up a program global by plain name.
    pub fn find_global(&self, name: Name) -> Option<&Symbol> {
        self.globals.get(&name)
    }

    /// Look up a builtin visible at `version`.
    pub fn find_builtin(&self, key: Name, version: ShaderVersion) -> Option<&Symbol> {
        self.builtins
            .get(&key)?
            .iter()
            .find(|entry| entry.versions.contains(version))
            .map(|entry| &entry.symbol)
    }

    /// Declare a user global variable. Redeclaration replaces the old entry.
    pub fn declare_global_variable(&mut self, name: &str, ty: Type) -> Variable {
        let name = self.interner.intern(name);
        let var = Variable::new(self.next_unique_id(), name, ty, SymbolKind::UserDefined);
        self.globals.insert(name, Symbol::Variable(var.clone()));
        var
    }

    /// Declare a user function in the global namespace under its plain name.
    pub fn declare_global_function(
        &mut self,
        name: &str,
        params: Vec<Param>,
        return_type: Type,
    ) -> Function {
        let func = self.new_function(
            name,
            params,
            return_type,
            Operator::CallFunctionInAst,
            SymbolKind::UserDefined,
        );
        self.globals.insert(func.name(), Symbol::Function(func.clone()));
        func
    }

    /// Register a builtin variable.
    pub fn insert_builtin_variable(
        &mut self,
        versions: VersionRange,
        name: &str,
        ty: Type,
    ) -> Variable {
        let name = self.interner.intern(name);
        let var = Variable::new(self.next_unique_id(), name, ty, SymbolKind::BuiltIn);
        self.insert_builtin(name, versions, Symbol::Variable(var.clone()));
        var
    }

    /// Register a builtin function overload, keyed by its mangled name.
    pub fn insert_builtin_function(
        &mut self,
        versions: VersionRange,
        name: &str,
        param_types: Vec<Type>,
        return_type: Type,
        op: Operator,
    ) -> Function {
        let params = param_types
            .into_iter()
            .map(|ty| Param {
                name: Name::ANONYMOUS,
                ty,
            })
            .collect();
        let func = self.new_function(name, params, return_type, op, SymbolKind::BuiltIn);
        self.insert_builtin(func.mangled_name(), versions, Symbol::Function(func.clone()));
        func
    }

    /// Build a struct layout with a fresh identity.
    pub fn new_struct<'a>(
        &self,
        name: &str,
        fields: impl IntoIterator<Item = (&'a str, Type)>,
    ) -> Arc<StructType> {
        let fields = fields
            .into_iter()
            .map(|(field_name, ty)| Field::new(self.interner.intern(field_name), ty))
            .collect();
        Arc::new(StructType::new(
            self.next_unique_id(),
            self.interner.intern(name),
            fields,
        ))
    }

    fn new_function(
        &self,
        name: &str,
        params: Vec<Param>,
        return_type: Type,
        op: Operator,
        kind: SymbolKind,
    ) -> Function {
        let mangled =
            mangled_name(&self.interner, name, params.iter().map(|param| &param.ty));
        Function::new(
            self.next_unique_id(),
            self.interner.intern(name),
            self.interner.intern_owned(mangled),
            params,
            return_type,
            op,
            kind,
        )
    }

    fn insert_builtin(&mut self, key: Name, versions: VersionRange, symbol: Symbol) {
        self.builtins
            .entry(key)
            .or_default()
            .push(BuiltinEntry { versions, symbol });
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolTable")
            .field("globals", &self.globals.len())
            .field("builtins", &self.builtins.len())
            .finish_non_exhaustive()
    }
}
