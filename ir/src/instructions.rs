//! Instruction definitions
//!
//! Instruction kinds are explicit tags resolved once at construction time, so
//! analyses switch over them instead of repeatedly probing node types.

use crate::function::{GlobalId, InstId};

/// The kind of an instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstKind {
    /// Stack allocation of a local variable; the instruction's result is the
    /// variable's address
    Alloca,

    /// Read through a pointer operand
    Load,

    /// Write a value through a pointer operand; operands are `[value, dest]`
    Store,

    /// Intrinsic memory copy; operands are `[dest, src, len]`
    MemCpy,

    /// Anything else (arithmetic, branches, calls, ...), by opcode name
    Other(String),
}

impl InstKind {
    /// True for the memory instructions the extraction analysis inspects.
    pub fn is_memory_access(&self) -> bool {
        matches!(self, InstKind::Load | InstKind::Store | InstKind::MemCpy)
    }

    /// Store and memcpy both write through a destination operand.
    pub fn is_store_like(&self) -> bool {
        matches!(self, InstKind::Store | InstKind::MemCpy)
    }

    /// Indices of the operands holding memory addresses the instruction
    /// touches, if this kind constrains them. A store touches only the
    /// address it writes; a memcpy touches both the destination and the
    /// source address, but never its length operand.
    pub fn address_operand_indices(&self) -> Option<&'static [usize]> {
        match self {
            InstKind::Store => Some(&[1]),
            InstKind::MemCpy => Some(&[0, 1]),
            _ => None,
        }
    }
}

/// An operand of an instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// The result of another instruction
    Inst(InstId),

    /// A module-level global value
    Global(GlobalId),

    /// A function argument, by position
    Argument(usize),

    /// An integer constant
    Constant(i64),
}

/// A single instruction
#[derive(Debug, Clone)]
pub struct Instruction {
    /// What the instruction does
    pub kind: InstKind,

    /// The instruction's operands
    pub operands: Vec<Operand>,

    /// Source line attached by debug info, if any
    pub line: Option<u32>,
}
