//! Declared type descriptors
//!
//! This module defines the debug-metadata view of a variable's declared type:
//! a base type possibly wrapped in pointer and array layers, the way DWARF
//! describes C declarations.

use std::fmt;

/// A declared type as reported by debug metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    /// A primitive type such as `int` or `double`
    Basic(String),

    /// A pointer to another type
    Pointer(Box<TypeDescriptor>),

    /// An array of another type
    Array(Box<TypeDescriptor>),

    /// A structure type, identified by name
    Struct(String),

    /// A typedef, identified by name (the underlying type is not tracked)
    Typedef(String),

    /// The metadata was missing or could not be interpreted
    Unknown,
}

impl TypeDescriptor {
    /// Convenience constructor for a primitive type
    pub fn basic(name: &str) -> Self {
        TypeDescriptor::Basic(name.to_string())
    }

    /// Wrap this type in a pointer layer
    pub fn pointer_to(self) -> Self {
        TypeDescriptor::Pointer(Box::new(self))
    }

    /// Wrap this type in an array layer
    pub fn array_of(self) -> Self {
        TypeDescriptor::Array(Box::new(self))
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TypeDescriptor::Basic(name) => write!(f, "{}", name),
            TypeDescriptor::Pointer(inner) => write!(f, "{}*", inner),
            TypeDescriptor::Array(inner) => write!(f, "{}[]", inner),
            TypeDescriptor::Struct(name) => write!(f, "struct {}", name),
            TypeDescriptor::Typedef(name) => write!(f, "{}", name),
            TypeDescriptor::Unknown => write!(f, "unknown"),
        }
    }
}
