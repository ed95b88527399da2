//! Type descriptors.
//!
//! A [`Type`] is a plain value: passes that need a differently-qualified or
//! array-peeled variant build a new value (`with_qualifier`,
//! `to_array_element_type`) instead of mutating a descriptor another node
//! may be looking at. Struct layouts are the one shared piece; they are
//! immutable once built and live behind an `Arc`.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::{Name, SymbolId};

/// Basic kind of a type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum BasicType {
    Void,
    Float,
    Int,
    UInt,
    Bool,
    Sampler2D,
    Sampler3D,
    SamplerCube,
    Struct,
}

impl BasicType {
    /// Source-level spelling of the scalar form of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            BasicType::Void => "void",
            BasicType::Float => "float",
            BasicType::Int => "int",
            BasicType::UInt => "uint",
            BasicType::Bool => "bool",
            BasicType::Sampler2D => "sampler2D",
            BasicType::Sampler3D => "sampler3D",
            BasicType::SamplerCube => "samplerCube",
            BasicType::Struct => "struct",
        }
    }
}

impl fmt::Display for BasicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Precision qualifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Precision {
    #[default]
    Undefined,
    Low,
    Medium,
    High,
}

/// Storage and mutability class of a type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Qualifier {
    /// Function-local value or expression result.
    #[default]
    Temporary,
    /// Global variable without storage qualifier.
    Global,
    /// Compile-time constant.
    Const,
    Attribute,
    VaryingIn,
    VaryingOut,
    Uniform,
    ParamIn,
    ParamOut,
    ParamInOut,
    ParamConst,
    // Builtin variables
    FragCoord,
    FrontFacing,
    PointCoord,
    Position,
    PointSize,
    FragColor,
    FragData,
    /// Builtin uniform (`gl_DepthRange`).
    DepthRange,
}

impl Qualifier {
    pub const fn name(self) -> &'static str {
        match self {
            Qualifier::Temporary => "temporary",
            Qualifier::Global => "global",
            Qualifier::Const => "const",
            Qualifier::Attribute => "attribute",
            Qualifier::VaryingIn => "varying in",
            Qualifier::VaryingOut => "varying out",
            Qualifier::Uniform => "uniform",
            Qualifier::ParamIn => "in",
            Qualifier::ParamOut => "out",
            Qualifier::ParamInOut => "inout",
            Qualifier::ParamConst => "const in",
            Qualifier::FragCoord => "FragCoord",
            Qualifier::FrontFacing => "FrontFacing",
            Qualifier::PointCoord => "PointCoord",
            Qualifier::Position => "Position",
            Qualifier::PointSize => "PointSize",
            Qualifier::FragColor => "FragColor",
            Qualifier::FragData => "FragData",
            Qualifier::DepthRange => "DepthRange",
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named struct member.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: Name,
    pub ty: Type,
}

impl Field {
    pub fn new(name: Name, ty: Type) -> Self {
        Field { name, ty }
    }
}

/// Struct layout: fields in declaration order.
///
/// Field types are values, so a struct can never (directly or indirectly)
/// contain itself.
#[derive(Clone, Debug, PartialEq)]
pub struct StructType {
    id: SymbolId,
    name: Name,
    fields: Vec<Field>,
}

impl StructType {
    pub fn new(id: SymbolId, name: Name, fields: Vec<Field>) -> Self {
        StructType { id, name, fields }
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
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Number of scalar slots in one value of this struct.
    pub fn object_size(&self) -> usize {
        self.fields.iter().map(|field| field.ty.object_size()).sum()
    }
}

/// Array dimensions, outermost first. Two levels cover nearly every shader.
pub type ArraySizes = SmallVec<[u32; 2]>;

/// A full type descriptor.
///
/// Vectors have `primary_size > 1` and `secondary_size == 1`; matrices have
/// `primary_size` columns and `secondary_size` rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Type {
    basic: BasicType,
    precision: Precision,
    qualifier: Qualifier,
    primary_size: u8,
    secondary_size: u8,
    array_sizes: ArraySizes,
    structure: Option<Arc<StructType>>,
}

impl Type {
    /// Create a non-array, non-struct type.
    pub fn new(
        basic: BasicType,
        precision: Precision,
        qualifier: Qualifier,
        primary_size: u8,
        secondary_size: u8,
    ) -> Self {
        debug_assert!(basic != BasicType::Struct, "struct types need a layout");
        debug_assert!((1..=4).contains(&primary_size));
        debug_assert!((1..=4).contains(&secondary_size));
        Type {
            basic,
            precision,
            qualifier,
            primary_size,
            secondary_size,
            array_sizes: ArraySizes::new(),
            structure: None,
        }
    }

    /// A temporary-qualified scalar of the given kind.
    pub fn scalar(basic: BasicType) -> Self {
        Self::new(basic, Precision::Undefined, Qualifier::Temporary, 1, 1)
    }

    /// A temporary-qualified vector of `size` components.
    pub fn vector(basic: BasicType, size: u8) -> Self {
        Self::new(basic, Precision::Undefined, Qualifier::Temporary, size, 1)
    }

    /// A temporary-qualified float matrix.
    pub fn matrix(columns: u8, rows: u8) -> Self {
        Self::new(
            BasicType::Float,
            Precision::Undefined,
            Qualifier::Temporary,
            columns,
            rows,
        )
    }

    pub fn void() -> Self {
        Self::scalar(BasicType::Void)
    }

    /// A temporary-qualified value of the given struct.
    pub fn new_struct(layout: Arc<StructType>) -> Self {
        Type {
            basic: BasicType::Struct,
            precision: Precision::Undefined,
            qualifier: Qualifier::Temporary,
            primary_size: 1,
            secondary_size: 1,
            array_sizes: ArraySizes::new(),
            structure: Some(layout),
        }
    }

    #[must_use]
    pub fn with_qualifier(mut self, qualifier: Qualifier) -> Self {
        self.qualifier = qualifier;
        self
    }

    #[must_use]
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Wrap this type in a new outermost array dimension.
    ///
    /// `float` -> `float[n]`; `float[n]` -> `float[n][m]` with `m` outermost.
    #[must_use]
    pub fn with_array_size(mut self, size: u32) -> Self {
        self.array_sizes.insert(0, size);
        self
    }

    #[inline]
    pub fn basic(&self) -> BasicType {
        self.basic
    }

    #[inline]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    #[inline]
    pub fn qualifier(&self) -> Qualifier {
        self.qualifier
    }

    #[inline]
    pub fn primary_size(&self) -> u8 {
        self.primary_size
    }

    #[inline]
    pub fn secondary_size(&self) -> u8 {
        self.secondary_size
    }

    /// Array dimensions, outermost first. Empty for non-arrays.
    #[inline]
    pub fn array_sizes(&self) -> &[u32] {
        &self.array_sizes
    }

    #[inline]
    pub fn structure(&self) -> Option<&StructType> {
        self.structure.as_deref()
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        !self.array_sizes.is_empty()
    }

    #[inline]
    pub fn is_struct(&self) -> bool {
        self.basic == BasicType::Struct
    }

    pub fn is_scalar(&self) -> bool {
        !self.is_array() && !self.is_struct() && self.primary_size == 1 && self.secondary_size == 1
    }

    /// Element count of the outermost array dimension.
    pub fn outermost_array_size(&self) -> Option<u32> {
        self.array_sizes.first().copied()
    }

    /// Peel the outermost array dimension.
    #[must_use]
    pub fn to_array_element_type(mut self) -> Self {
        debug_assert!(self.is_array(), "peeling a dimension off a non-array");
        if !self.array_sizes.is_empty() {
            self.array_sizes.remove(0);
        }
        self
    }

    /// Drop every array dimension.
    #[must_use]
    pub fn strip_array_dimensions(mut self) -> Self {
        self.array_sizes.clear();
        self
    }

    /// Number of scalar slots needed to hold one value of this type.
    pub fn object_size(&self) -> usize {
        let element = match &self.structure {
            Some(layout) => layout.object_size(),
            None => usize::from(self.primary_size) * usize::from(self.secondary_size),
        };
        self.array_sizes
            .iter()
            .fold(element, |total, &size| total * size as usize)
    }
}
