//! Constant value slots.
//!
//! A constant node holds one [`ConstValue`] per scalar component of its
//! type, in component order.

use smallvec::SmallVec;

use crate::BasicType;

/// One scalar slot of a constant.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstValue {
    Float(f32),
    Int(i32),
    UInt(u32),
    Bool(bool),
}

/// Flat slot sequence backing a constant node. `vec4` and smaller stay inline.
pub type ConstantUnion = SmallVec<[ConstValue; 4]>;

impl ConstValue {
    /// Filler for constants whose kind has no slot representation.
    ///
    /// Only produced while recovering from an error that was already
    /// reported; the value carries no meaning, only the node's type does.
    pub const ERROR_RECOVERY_PLACEHOLDER: ConstValue = ConstValue::Int(42);

    /// The canonical zero of a scalar kind, `None` for every other kind.
    pub const fn zero_of(basic: BasicType) -> Option<ConstValue> {
        match basic {
            BasicType::Float => Some(ConstValue::Float(0.0)),
            BasicType::Int => Some(ConstValue::Int(0)),
            BasicType::UInt => Some(ConstValue::UInt(0)),
            BasicType::Bool => Some(ConstValue::Bool(false)),
            BasicType::Void
            | BasicType::Sampler2D
            | BasicType::Sampler3D
            | BasicType::SamplerCube
            | BasicType::Struct => None,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            ConstValue::Float(v) => v == 0.0,
            ConstValue::Int(v) => v == 0,
            ConstValue::UInt(v) => v == 0,
            ConstValue::Bool(v) => !v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_of_scalar_kinds() {
        assert_eq!(
            ConstValue::zero_of(BasicType::Float),
            Some(ConstValue::Float(0.0))
        );
        assert_eq!(ConstValue::zero_of(BasicType::Int), Some(ConstValue::Int(0)));
        assert_eq!(
            ConstValue::zero_of(BasicType::UInt),
            Some(ConstValue::UInt(0))
        );
        assert_eq!(
            ConstValue::zero_of(BasicType::Bool),
            Some(ConstValue::Bool(false))
        );
    }

    #[test]
    fn zero_of_non_scalar_kinds() {
        assert_eq!(ConstValue::zero_of(BasicType::Void), None);
        assert_eq!(ConstValue::zero_of(BasicType::Sampler2D), None);
        assert_eq!(ConstValue::zero_of(BasicType::Struct), None);
    }

    #[test]
    fn zero_detection() {
        assert!(!ConstValue::Int(-1).is_zero());
        assert!(ConstValue::Bool(false).is_zero());
        assert!(ConstValue::Float(0.0).is_zero());
        assert!(!ConstValue::ERROR_RECOVERY_PLACEHOLDER.is_zero());
    }
}
