//! Zero-value synthesis.

use shade_ir::{BasicType, ConstValue, ConstantUnion, Node, Qualifier, Type};

/// Build a const expression holding the all-zero value of `ty`.
///
/// - Scalars, vectors and matrices become a constant node with one zero slot
///   per component.
/// - Arrays become a constructor with one element zero per entry of the
///   outermost dimension.
/// - Structs become a constructor with one field zero per field, in
///   declaration order.
///
/// The parser keeps going after errors and may ask for zeros of types that
/// have none (samplers, `void`). Those still get a node of the requested type,
/// filled with [`ConstValue::ERROR_RECOVERY_PLACEHOLDER`]; a `void` array
/// loses its array dimensions since there is no `void` constructor.
pub fn create_zero_node(ty: &Type) -> Node {
    let const_type = ty.clone().with_qualifier(Qualifier::Const);

    if !ty.is_array() && !ty.is_struct() {
        let slot = ConstValue::zero_of(ty.basic()).unwrap_or_else(|| {
            tracing::debug!(
                basic = %ty.basic(),
                "zero value requested for a kind without one; using placeholder"
            );
            ConstValue::ERROR_RECOVERY_PLACEHOLDER
        });
        let values: ConstantUnion = std::iter::repeat(slot)
            .take(const_type.object_size())
            .collect();
        return Node::constant(values, const_type);
    }

    if ty.basic() == BasicType::Void {
        tracing::debug!(
            dimensions = ty.array_sizes().len(),
            "zero value requested for a void array; dropping dimensions"
        );
        return create_zero_node(&const_type.strip_array_dimensions());
    }

    let args = match ty.outermost_array_size() {
        Some(size) => {
            let element = create_zero_node(&ty.clone().to_array_element_type());
            vec![element; size as usize]
        }
        None => ty.structure().map_or_else(Vec::new, |layout| {
            layout
                .fields()
                .iter()
                .map(|field| create_zero_node(&field.ty))
                .collect()
        }),
    };

    Node::constructor(const_type, args)
}
