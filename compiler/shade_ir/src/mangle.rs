//! Overload-resolution keys.
//!
//! A mangled name is the plain function name followed by `(` and one
//! encoded type per parameter, each terminated by `;`:
//!
//! ```text
//! max(float, float)            -> max(f;f;
//! texture2D(sampler2D, vec2)   -> texture2D(s2;f2;
//! f(mat2x3, Light[4])          -> f(f2x3;SLight[4];
//! ```
//!
//! Declarations are mangled from parameter types and call sites from
//! argument types with the same encoder, so a call resolves to exactly the
//! overload whose parameters match its arguments. Qualifiers and precision
//! do not take part in overload resolution and are not encoded.

use std::fmt::Write;

use crate::{BasicType, StringInterner, Type};

/// Mangle `name` over an ordered list of argument (or parameter) types.
pub fn mangled_name<'a>(
    interner: &StringInterner,
    name: &str,
    arg_types: impl IntoIterator<Item = &'a Type>,
) -> String {
    let mut out = String::with_capacity(name.len() + 8);
    out.push_str(name);
    out.push('(');
    for ty in arg_types {
        push_mangled_type(&mut out, ty, interner);
        out.push(';');
    }
    out
}

/// Append the encoding of a single type.
pub fn push_mangled_type(out: &mut String, ty: &Type, interner: &StringInterner) {
    match ty.basic() {
        BasicType::Float => out.push('f'),
        BasicType::Int => out.push('i'),
        BasicType::UInt => out.push('u'),
        BasicType::Bool => out.push('b'),
        BasicType::Void => out.push('v'),
        BasicType::Sampler2D => out.push_str("s2"),
        BasicType::Sampler3D => out.push_str("s3"),
        BasicType::SamplerCube => out.push_str("sc"),
        BasicType::Struct => {
            out.push('S');
            if let Some(layout) = ty.structure() {
                if layout.name().is_anonymous() {
                    // Anonymous struct: fall back to its identity
                    let _ = write!(out, "#{}", layout.id().raw());
                } else {
                    out.push_str(interner.lookup(layout.name()));
                }
            }
        }
    }

    if ty.secondary_size() > 1 {
        let _ = write!(out, "{}x{}", ty.primary_size(), ty.secondary_size());
    } else if ty.primary_size() > 1 {
        let _ = write!(out, "{}", ty.primary_size());
    }

    for size in ty.array_sizes() {
        let _ = write!(out, "[{size}]");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{Field, Name, StructType, SymbolId};

    #[test]
    fn scalar_and_vector_arguments() {
        let interner = StringInterner::new();
        let float = Type::scalar(BasicType::Float);
        let vec2 = Type::vector(BasicType::Float, 2);
        let sampler = Type::scalar(BasicType::Sampler2D);

        assert_eq!(mangled_name(&interner, "max", [&float, &float]), "max(f;f;");
        assert_eq!(
            mangled_name(&interner, "texture2D", [&sampler, &vec2]),
            "texture2D(s2;f2;"
        );
    }

    #[test]
    fn no_arguments() {
        let interner = StringInterner::new();
        assert_eq!(mangled_name(&interner, "main", []), "main(");
    }

    #[test]
    fn matrices_arrays_and_structs() {
        let interner = StringInterner::new();
        let light = Arc::new(StructType::new(
            SymbolId::new(7),
            interner.intern("Light"),
            vec![Field::new(
                interner.intern("color"),
                Type::vector(BasicType::Float, 3),
            )],
        ));
        let lights = Type::new_struct(light).with_array_size(4);
        let mat = Type::matrix(2, 3);

        assert_eq!(
            mangled_name(&interner, "f", [&mat, &lights]),
            "f(f2x3;SLight[4];"
        );
    }

    #[test]
    fn anonymous_struct_uses_identity() {
        let interner = StringInterner::new();
        let anon = Type::new_struct(Arc::new(StructType::new(
            SymbolId::new(12),
            Name::ANONYMOUS,
            Vec::new(),
        )));
        assert_eq!(mangled_name(&interner, "g", [&anon]), "g(S#12;");
    }

    #[test]
    fn qualifier_does_not_change_key() {
        let interner = StringInterner::new();
        let temp = Type::scalar(BasicType::Int);
        let constant = temp.clone().with_qualifier(crate::Qualifier::Const);
        assert_eq!(
            mangled_name(&interner, "abs", [&temp]),
            mangled_name(&interner, "abs", [&constant])
        );
    }
}
