//! Local variable debug metadata
//!
//! Maps each stack allocation to the source-level name, declaration line, and
//! declared type the host compiler recorded for it. The analysis uses this to
//! decide where a variable was originally declared.

use std::collections::HashMap;

use crate::function::InstId;
use crate::types::TypeDescriptor;

/// Debug metadata for one local variable
#[derive(Debug, Clone)]
pub struct LocalVariable {
    /// The variable's source-level name
    pub name: String,

    /// The source line of the declaration
    pub line: u32,

    /// The declared type, possibly wrapped in pointer/array layers
    pub ty: TypeDescriptor,
}

/// Per-function debug metadata, keyed by the alloca that produces each
/// variable's address. An alloca with no entry here has no usable metadata.
#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    variables: HashMap<InstId, LocalVariable>,
}

impl DebugInfo {
    /// Create an empty metadata table
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
        }
    }

    /// Attach metadata to an alloca
    pub fn declare(&mut self, alloca: InstId, name: &str, line: u32, ty: TypeDescriptor) {
        self.variables.insert(
            alloca,
            LocalVariable {
                name: name.to_string(),
                line,
                ty,
            },
        );
    }

    /// Look up the variable backing an alloca, if metadata exists
    pub fn variable(&self, alloca: InstId) -> Option<&LocalVariable> {
        self.variables.get(&alloca)
    }
}
