use ir::types::TypeDescriptor;

use crate::type_resolver::base_type_of;

#[test]
fn test_primitive_resolves_to_itself() {
    let resolved = base_type_of(&TypeDescriptor::basic("int"));
    assert_eq!(resolved.base, TypeDescriptor::basic("int"));
    assert_eq!(resolved.indirection, 0);
}

#[test]
fn test_each_wrapper_layer_counts_once() {
    // int** and int[][] both unwrap to depth 2
    let double_ptr = TypeDescriptor::basic("int").pointer_to().pointer_to();
    let resolved = base_type_of(&double_ptr);
    assert_eq!(resolved.base, TypeDescriptor::basic("int"));
    assert_eq!(resolved.indirection, 2);

    let nested_array = TypeDescriptor::basic("int").array_of().array_of();
    let resolved = base_type_of(&nested_array);
    assert_eq!(resolved.base, TypeDescriptor::basic("int"));
    assert_eq!(resolved.indirection, 2);
}

#[test]
fn test_mixed_pointer_and_array_layers() {
    // char*[] unwraps array then pointer
    let ty = TypeDescriptor::basic("char").pointer_to().array_of();
    let resolved = base_type_of(&ty);
    assert_eq!(resolved.base, TypeDescriptor::basic("char"));
    assert_eq!(resolved.indirection, 2);
}

#[test]
fn test_struct_stops_without_counting() {
    let ty = TypeDescriptor::Struct("point".to_string()).pointer_to();
    let resolved = base_type_of(&ty);
    assert_eq!(resolved.base, TypeDescriptor::Struct("point".to_string()));
    assert_eq!(resolved.indirection, 1);
}

#[test]
fn test_typedef_stops_without_counting() {
    let ty = TypeDescriptor::Typedef("size_t".to_string());
    let resolved = base_type_of(&ty);
    assert_eq!(resolved.base, TypeDescriptor::Typedef("size_t".to_string()));
    assert_eq!(resolved.indirection, 0);
}

#[test]
fn test_unknown_stops_without_counting() {
    let resolved = base_type_of(&TypeDescriptor::Unknown);
    assert_eq!(resolved.base, TypeDescriptor::Unknown);
    assert_eq!(resolved.indirection, 0);
}

#[test]
fn test_deep_nesting_round_trip() {
    let mut ty = TypeDescriptor::basic("double");
    for layer in 0..8 {
        ty = if layer % 2 == 0 {
            ty.pointer_to()
        } else {
            ty.array_of()
        };
    }

    let resolved = base_type_of(&ty);
    assert_eq!(resolved.base, TypeDescriptor::basic("double"));
    assert_eq!(resolved.indirection, 8);
}
