//! Function construction
//!
//! A small builder for assembling functions programmatically, used by tests
//! and driver demos. Blocks and instructions get sequential IDs as they are
//! added.

use crate::debug::DebugInfo;
use crate::function::{BasicBlock, BlockId, Function, InstId, Parameter};
use crate::instructions::{InstKind, Instruction, Operand};
use crate::types::TypeDescriptor;

/// Incrementally builds a [`Function`]
pub struct FunctionBuilder {
    function: Function,
}

impl FunctionBuilder {
    /// Start a new function. The first block added becomes the entry block.
    pub fn new(name: &str) -> Self {
        Self {
            function: Function {
                name: name.to_string(),
                params: Vec::new(),
                entry: BlockId(0),
                blocks: Vec::new(),
                preds: Vec::new(),
                instructions: Vec::new(),
                inst_blocks: Vec::new(),
                declared_line: None,
                debug: DebugInfo::new(),
            },
        }
    }

    /// Set the function's declared (subprogram) line
    pub fn declared_at(&mut self, line: u32) -> &mut Self {
        self.function.declared_line = Some(line);
        self
    }

    /// Add an argument
    pub fn param(&mut self, name: &str, ty: TypeDescriptor) -> &mut Self {
        self.function.params.push(Parameter {
            name: name.to_string(),
            ty,
        });
        self
    }

    /// Add a new basic block and return its ID
    pub fn add_block(&mut self, label: &str) -> BlockId {
        let id = BlockId(self.function.blocks.len());
        self.function.blocks.push(BasicBlock {
            id,
            label: label.to_string(),
            instructions: Vec::new(),
            successors: Vec::new(),
        });
        id
    }

    /// Add a CFG edge from one block to another
    pub fn add_edge(&mut self, from: BlockId, to: BlockId) -> &mut Self {
        self.function.blocks[from.0].successors.push(to);
        self
    }

    /// Append an instruction to a block and return its ID
    pub fn push_inst(
        &mut self,
        block: BlockId,
        kind: InstKind,
        operands: Vec<Operand>,
        line: Option<u32>,
    ) -> InstId {
        let id = InstId(self.function.instructions.len());
        self.function.instructions.push(Instruction {
            kind,
            operands,
            line,
        });
        self.function.inst_blocks.push(block);
        self.function.blocks[block.0].instructions.push(id);
        id
    }

    /// Allocate a local with debug metadata attached
    pub fn alloca(&mut self, block: BlockId, name: &str, line: u32, ty: TypeDescriptor) -> InstId {
        let id = self.push_inst(block, InstKind::Alloca, Vec::new(), None);
        self.function.debug.declare(id, name, line, ty);
        id
    }

    /// Allocate a local with no debug metadata (anonymous temporary)
    pub fn alloca_anonymous(&mut self, block: BlockId) -> InstId {
        self.push_inst(block, InstKind::Alloca, Vec::new(), None)
    }

    /// Read through a pointer
    pub fn load(&mut self, block: BlockId, source: Operand, line: Option<u32>) -> InstId {
        self.push_inst(block, InstKind::Load, vec![source], line)
    }

    /// Write a value through a pointer
    pub fn store(
        &mut self,
        block: BlockId,
        value: Operand,
        dest: Operand,
        line: Option<u32>,
    ) -> InstId {
        self.push_inst(block, InstKind::Store, vec![value, dest], line)
    }

    /// Copy memory between two pointers
    pub fn memcpy(
        &mut self,
        block: BlockId,
        dest: Operand,
        source: Operand,
        len: Operand,
        line: Option<u32>,
    ) -> InstId {
        self.push_inst(block, InstKind::MemCpy, vec![dest, source, len], line)
    }

    /// Append an instruction of any other opcode
    pub fn other(
        &mut self,
        block: BlockId,
        opcode: &str,
        operands: Vec<Operand>,
        line: Option<u32>,
    ) -> InstId {
        self.push_inst(block, InstKind::Other(opcode.to_string()), operands, line)
    }

    /// Append an operand to an existing instruction (phi-style back
    /// references)
    pub fn add_operand(&mut self, inst: InstId, operand: Operand) -> &mut Self {
        self.function.instructions[inst.0].operands.push(operand);
        self
    }

    /// Finish the function, filling in the predecessor table
    pub fn finish(mut self) -> Function {
        let mut preds = vec![Vec::new(); self.function.blocks.len()];
        for block in &self.function.blocks {
            for &successor in &block.successors {
                preds[successor.0].push(block.id);
            }
        }
        self.function.preds = preds;
        self.function
    }
}
