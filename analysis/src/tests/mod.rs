//! Tests for the analysis components
//!
//! This module contains tests for the extraction analysis: listing parsing,
//! region matching, reachability, def/use walking, classification, type
//! resolution, and report emission.

mod type_resolver_tests;

use std::collections::HashSet;

use ir::builder::FunctionBuilder;
use ir::function::{BlockId, Function, InstId, Module};
use ir::instructions::Operand;
use ir::types::TypeDescriptor;

use crate::block_list::BlockListing;
use crate::region::Region;

/// A small function shared across tests:
///
/// ```text
/// entry -> head -> body -> exit          (region = {head, body}, lines 5-7)
///
/// entry: x = alloca (decl line 2), buf = alloca (decl line 3),
///        tmp = alloca (decl line 6, inside the region), store 1 -> x
/// head:  load x; add; store add -> tmp
/// body:  memcpy buf <- tmp
/// exit:  load tmp; ret
/// ```
///
/// Expected classification: `x` and `buf` are inputs, `tmp` is an output.
pub struct Fixture {
    pub module: Module,
    pub entry: BlockId,
    pub head: BlockId,
    pub body: BlockId,
    pub exit: BlockId,
    pub x: InstId,
    pub buf: InstId,
    pub tmp: InstId,
}

impl Fixture {
    pub fn function(&self) -> &Function {
        &self.module.functions[0]
    }

    pub fn region(&self) -> Region {
        Region::from_blocks(self.head, [self.head, self.body])
    }
}

pub fn sample_fixture() -> Fixture {
    let mut builder = FunctionBuilder::new("compute");
    builder.declared_at(1);

    let entry = builder.add_block("entry");
    let head = builder.add_block("head");
    let body = builder.add_block("body");
    let exit = builder.add_block("exit");
    builder.add_edge(entry, head);
    builder.add_edge(head, body);
    builder.add_edge(body, exit);

    let x = builder.alloca(entry, "x", 2, TypeDescriptor::basic("int"));
    let buf = builder.alloca(entry, "buf", 3, TypeDescriptor::basic("int").array_of());
    // Allocated up front like any stack slot, but declared on line 6,
    // inside the region
    let tmp = builder.alloca(entry, "tmp", 6, TypeDescriptor::basic("int"));
    builder.store(entry, Operand::Constant(1), Operand::Inst(x), Some(2));

    let loaded = builder.load(head, Operand::Inst(x), Some(5));
    let added = builder.other(
        head,
        "add",
        vec![Operand::Inst(loaded), Operand::Constant(1)],
        Some(5),
    );
    builder.store(head, Operand::Inst(added), Operand::Inst(tmp), Some(6));

    builder.memcpy(
        body,
        Operand::Inst(buf),
        Operand::Inst(tmp),
        Operand::Constant(4),
        Some(7),
    );

    let after = builder.load(exit, Operand::Inst(tmp), Some(9));
    builder.other(exit, "ret", vec![Operand::Inst(after)], Some(9));

    let mut module = Module::new("demo");
    module.functions.push(builder.finish());

    Fixture {
        module,
        entry,
        head,
        body,
        exit,
        x,
        buf,
        tmp,
    }
}

/// The listing that names the fixture's region exactly
pub fn sample_listing() -> BlockListing {
    let mut listing = BlockListing::new();
    let blocks: HashSet<String> = ["head", "body"].iter().map(|s| s.to_string()).collect();
    listing.insert("compute".to_string(), blocks);
    listing
}
