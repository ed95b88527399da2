//! Shared fixtures: a symbol table with a small but representative builtin
//! set.

use shade_ir::{
    BasicType, ConstValue, Node, Operator, Precision, Qualifier, ShaderVersion, SymbolTable, Type,
    VersionRange,
};

pub fn float() -> Type {
    Type::scalar(BasicType::Float)
}

pub fn int() -> Type {
    Type::scalar(BasicType::Int)
}

pub fn vec(size: u8) -> Type {
    Type::vector(BasicType::Float, size)
}

/// A const float literal.
pub fn float_const(value: f32) -> Node {
    Node::constant(
        std::iter::once(ConstValue::Float(value)).collect(),
        float().with_qualifier(Qualifier::Const),
    )
}

/// Builtins registered:
/// - `abs(float)`, `length(vec3)`: direct unary operators, every version
/// - `abs(int)`: direct unary operator, ESSL 3.00+
/// - `max(float, float)`, `clamp(float, float, float)`: direct operators
/// - `texture2D(sampler2D, vec2)`: generic call, ESSL 1.00 only
/// - `texture(sampler2D, vec2)`: generic call, ESSL 3.00+
/// - `packSnorm2x16(vec2)`: generic call with a single argument, ESSL 3.00+
/// - `gl_Position`, `gl_FragColor` (ESSL 1.00 only), `gl_DepthRange`
///
/// Globals: `u_scale` (uniform float), `helper()` (function).
pub fn builtin_table() -> SymbolTable {
    let every = VersionRange::since(ShaderVersion::ESSL1_00);
    let essl1_only = VersionRange::between(ShaderVersion::ESSL1_00, ShaderVersion::ESSL1_00);
    let essl3 = VersionRange::since(ShaderVersion::ESSL3_00);
    let sampler = Type::scalar(BasicType::Sampler2D);

    let mut table = SymbolTable::new();
    table.insert_builtin_function(every, "abs", vec![float()], float(), Operator::Abs);
    table.insert_builtin_function(essl3, "abs", vec![int()], int(), Operator::Abs);
    table.insert_builtin_function(every, "length", vec![vec(3)], float(), Operator::Length);
    table.insert_builtin_function(
        every,
        "max",
        vec![float(), float()],
        float(),
        Operator::Max,
    );
    table.insert_builtin_function(
        every,
        "clamp",
        vec![float(), float(), float()],
        float(),
        Operator::Clamp,
    );
    table.insert_builtin_function(
        essl1_only,
        "texture2D",
        vec![sampler.clone(), vec(2)],
        vec(4),
        Operator::CallBuiltInFunction,
    );
    table.insert_builtin_function(
        essl3,
        "texture",
        vec![sampler, vec(2)],
        vec(4),
        Operator::CallBuiltInFunction,
    );
    table.insert_builtin_function(
        essl3,
        "packSnorm2x16",
        vec![vec(2)],
        Type::scalar(BasicType::UInt),
        Operator::CallBuiltInFunction,
    );

    table.insert_builtin_variable(
        every,
        "gl_Position",
        vec(4)
            .with_precision(Precision::High)
            .with_qualifier(Qualifier::Position),
    );
    table.insert_builtin_variable(
        essl1_only,
        "gl_FragColor",
        vec(4)
            .with_precision(Precision::Medium)
            .with_qualifier(Qualifier::FragColor),
    );
    let depth_range = table.new_struct(
        "gl_DepthRangeParameters",
        [("near", float()), ("far", float()), ("diff", float())],
    );
    table.insert_builtin_variable(
        every,
        "gl_DepthRange",
        Type::new_struct(depth_range).with_qualifier(Qualifier::DepthRange),
    );

    table.declare_global_variable("u_scale", float().with_qualifier(Qualifier::Uniform));
    table.declare_global_function("helper", Vec::new(), Type::void());

    table
}
