//! CFG structure
//!
//! This module defines the core data structures of the host IR: modules,
//! functions, basic blocks, and the identifiers that tie them together. The
//! analysis side only ever reads these.

use crate::debug::DebugInfo;
use crate::instructions::{Instruction, Operand};
use crate::types::TypeDescriptor;

/// A unique identifier for a basic block within a function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub usize);

/// A unique identifier for an instruction within a function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstId(pub usize);

/// A unique identifier for a module-level global value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlobalId(pub usize);

/// A basic block in the CFG
#[derive(Debug, Clone)]
pub struct BasicBlock {
    /// The block's ID
    pub id: BlockId,

    /// The block's label, unique within its function
    pub label: String,

    /// The block's instructions, in program order
    pub instructions: Vec<InstId>,

    /// The blocks this block may branch to
    pub successors: Vec<BlockId>,
}

/// A function argument
#[derive(Debug, Clone)]
pub struct Parameter {
    /// The argument's name
    pub name: String,

    /// The argument's declared type
    pub ty: TypeDescriptor,
}

/// A function and its CFG
#[derive(Debug, Clone)]
pub struct Function {
    /// The function's name
    pub name: String,

    /// The function's arguments
    pub params: Vec<Parameter>,

    /// The entry block ID
    pub entry: BlockId,

    /// The function's basic blocks, indexed by `BlockId`
    pub blocks: Vec<BasicBlock>,

    /// Predecessor blocks per block, indexed by `BlockId`, derived from the
    /// successor edges when construction finishes
    pub preds: Vec<Vec<BlockId>>,

    /// The function's instructions, indexed by `InstId`
    pub instructions: Vec<Instruction>,

    /// Containing block per instruction, indexed by `InstId`
    pub inst_blocks: Vec<BlockId>,

    /// Declared (subprogram) source line from debug metadata, if any
    pub declared_line: Option<u32>,

    /// Debug metadata for the function's local variables
    pub debug: DebugInfo,
}

impl Function {
    /// Look up an instruction
    pub fn inst(&self, id: InstId) -> &Instruction {
        &self.instructions[id.0]
    }

    /// Look up a basic block
    pub fn block(&self, id: BlockId) -> &BasicBlock {
        &self.blocks[id.0]
    }

    /// The block containing an instruction
    pub fn block_of(&self, id: InstId) -> BlockId {
        self.inst_blocks[id.0]
    }

    /// Direct successor blocks of a block
    pub fn successors(&self, id: BlockId) -> &[BlockId] {
        &self.blocks[id.0].successors
    }

    /// Direct predecessor blocks of a block
    pub fn predecessors(&self, id: BlockId) -> &[BlockId] {
        &self.preds[id.0]
    }

    /// Find a block by its label
    pub fn block_by_label(&self, label: &str) -> Option<BlockId> {
        self.blocks
            .iter()
            .find(|block| block.label == label)
            .map(|block| block.id)
    }

    /// Every instruction that takes the given operand
    pub fn users_of(&self, operand: Operand) -> Vec<InstId> {
        self.instructions
            .iter()
            .enumerate()
            .filter(|(_, inst)| inst.operands.contains(&operand))
            .map(|(index, _)| InstId(index))
            .collect()
    }
}

/// A module-level global value
#[derive(Debug, Clone)]
pub struct Global {
    /// The global's ID
    pub id: GlobalId,

    /// The global's name
    pub name: String,

    /// The global's declared type
    pub ty: TypeDescriptor,
}

/// A translation unit: functions plus global values
#[derive(Debug, Clone)]
pub struct Module {
    /// The module's name
    pub name: String,

    /// Functions defined in the module
    pub functions: Vec<Function>,

    /// Global values, indexed by `GlobalId`
    pub globals: Vec<Global>,
}

impl Module {
    /// Create a new, empty module
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            functions: Vec::new(),
            globals: Vec::new(),
        }
    }

    /// Register a global value and return its ID
    pub fn add_global(&mut self, name: &str, ty: TypeDescriptor) -> GlobalId {
        let id = GlobalId(self.globals.len());
        self.globals.push(Global {
            id,
            name: name.to_string(),
            ty,
        });
        id
    }

    /// Look up a global value
    pub fn global(&self, id: GlobalId) -> &Global {
        &self.globals[id.0]
    }

    /// Find a function by name
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|function| function.name == name)
    }
}
