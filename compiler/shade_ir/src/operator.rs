//! Node operators.
//!
//! Builtin functions that map 1:1 onto a primitive operation carry that
//! operation as their operator tag; every other builtin is tagged
//! [`Operator::CallBuiltInFunction`].

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    // Structural
    Initialize,
    Assign,
    Construct,
    CallFunctionInAst,
    CallBuiltInFunction,
    IndexDirect,

    // Unary arithmetic / logic
    Negative,
    Positive,
    LogicalNot,
    BitwiseNot,

    // Binary arithmetic / logic
    Add,
    Sub,
    Mul,
    Div,
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LogicalAnd,
    LogicalOr,

    // Builtins with a single argument
    Radians,
    Degrees,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Exp,
    Log,
    Exp2,
    Log2,
    Sqrt,
    InverseSqrt,
    Abs,
    Sign,
    Floor,
    Trunc,
    Round,
    Ceil,
    Fract,
    Length,
    Normalize,
    Transpose,
    Determinant,
    Inverse,
    Any,
    All,
    LogicalNotComponentWise,
    Dfdx,
    Dfdy,
    Fwidth,

    // Builtins with two or more arguments
    Mod,
    Min,
    Max,
    Clamp,
    Mix,
    Step,
    SmoothStep,
    Pow,
    Distance,
    Dot,
    Cross,
    Reflect,
}

impl Operator {
    /// Whether this is the generic "call a builtin by identity" tag.
    #[inline]
    pub fn is_builtin_function_call(self) -> bool {
        self == Operator::CallBuiltInFunction
    }

    pub const fn name(self) -> &'static str {
        match self {
            Operator::Initialize => "initialize",
            Operator::Assign => "assign",
            Operator::Construct => "construct",
            Operator::CallFunctionInAst => "call",
            Operator::CallBuiltInFunction => "call builtin",
            Operator::IndexDirect => "index",
            Operator::Negative => "negate",
            Operator::Positive => "positive",
            Operator::LogicalNot => "!",
            Operator::BitwiseNot => "~",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::LessThan => "<",
            Operator::GreaterThan => ">",
            Operator::LogicalAnd => "&&",
            Operator::LogicalOr => "||",
            Operator::Radians => "radians",
            Operator::Degrees => "degrees",
            Operator::Sin => "sin",
            Operator::Cos => "cos",
            Operator::Tan => "tan",
            Operator::Asin => "asin",
            Operator::Acos => "acos",
            Operator::Atan => "atan",
            Operator::Exp => "exp",
            Operator::Log => "log",
            Operator::Exp2 => "exp2",
            Operator::Log2 => "log2",
            Operator::Sqrt => "sqrt",
            Operator::InverseSqrt => "inversesqrt",
            Operator::Abs => "abs",
            Operator::Sign => "sign",
            Operator::Floor => "floor",
            Operator::Trunc => "trunc",
            Operator::Round => "round",
            Operator::Ceil => "ceil",
            Operator::Fract => "fract",
            Operator::Length => "length",
            Operator::Normalize => "normalize",
            Operator::Transpose => "transpose",
            Operator::Determinant => "determinant",
            Operator::Inverse => "inverse",
            Operator::Any => "any",
            Operator::All => "all",
            Operator::LogicalNotComponentWise => "not",
            Operator::Dfdx => "dFdx",
            Operator::Dfdy => "dFdy",
            Operator::Fwidth => "fwidth",
            Operator::Mod => "mod",
            Operator::Min => "min",
            Operator::Max => "max",
            Operator::Clamp => "clamp",
            Operator::Mix => "mix",
            Operator::Step => "step",
            Operator::SmoothStep => "smoothstep",
            Operator::Pow => "pow",
            Operator::Distance => "distance",
            Operator::Dot => "dot",
            Operator::Cross => "cross",
            Operator::Reflect => "reflect",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
