//! Declared type resolution
//!
//! Unwraps pointer and array layers from a declared type down to its base,
//! counting the layers for signature reporting. Structures, typedefs and
//! unknown types terminate the unwrap without counting.

use ir::types::TypeDescriptor;

/// A declared type reduced to its base plus the number of unwrapped layers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// The underlying base type
    pub base: TypeDescriptor,

    /// How many pointer/array layers were stripped to reach it
    pub indirection: u32,
}

/// Strip array and pointer wrapper layers down to the underlying base type
pub fn base_type_of(ty: &TypeDescriptor) -> ResolvedType {
    let mut current = ty;
    let mut indirection = 0;

    loop {
        match current {
            TypeDescriptor::Pointer(inner) | TypeDescriptor::Array(inner) => {
                current = inner;
                indirection += 1;
            }
            _ => break,
        }
    }

    ResolvedType {
        base: current.clone(),
        indirection,
    }
}
