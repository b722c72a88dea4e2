use crate::builder::FunctionBuilder;
use crate::function::{BlockId, Module};
use crate::instructions::{InstKind, Operand};
use crate::types::TypeDescriptor;

#[test]
fn test_builder_assigns_sequential_ids() {
    let mut builder = FunctionBuilder::new("f");
    let entry = builder.add_block("entry");
    let exit = builder.add_block("exit");

    assert_eq!(entry, BlockId(0));
    assert_eq!(exit, BlockId(1));

    let function = builder.finish();
    assert_eq!(function.entry, entry);
    assert_eq!(function.block(exit).label, "exit");
}

#[test]
fn test_predecessors_derived_from_edges() {
    // Diamond: entry -> left, entry -> right, left -> exit, right -> exit
    let mut builder = FunctionBuilder::new("f");
    let entry = builder.add_block("entry");
    let left = builder.add_block("left");
    let right = builder.add_block("right");
    let exit = builder.add_block("exit");
    builder.add_edge(entry, left);
    builder.add_edge(entry, right);
    builder.add_edge(left, exit);
    builder.add_edge(right, exit);

    let function = builder.finish();
    assert_eq!(function.successors(entry), &[left, right]);

    // The table is built once at finish, in block order
    assert_eq!(function.predecessors(exit), &[left, right]);
    assert_eq!(function.predecessors(left), &[entry]);
    assert!(function.predecessors(entry).is_empty());
}

#[test]
fn test_block_of_and_block_by_label() {
    let mut builder = FunctionBuilder::new("f");
    let entry = builder.add_block("entry");
    let body = builder.add_block("body");
    let x = builder.alloca(entry, "x", 2, TypeDescriptor::basic("int"));
    let load = builder.load(body, Operand::Inst(x), Some(5));

    let function = builder.finish();
    assert_eq!(function.block_of(x), entry);
    assert_eq!(function.block_of(load), body);
    assert_eq!(function.block_by_label("body"), Some(body));
    assert_eq!(function.block_by_label("missing"), None);
}

#[test]
fn test_users_of_finds_all_uses() {
    let mut builder = FunctionBuilder::new("f");
    let entry = builder.add_block("entry");
    let x = builder.alloca(entry, "x", 1, TypeDescriptor::basic("int"));
    let load = builder.load(entry, Operand::Inst(x), Some(3));
    let store = builder.store(entry, Operand::Constant(5), Operand::Inst(x), Some(4));
    // Not a user of x
    builder.other(entry, "add", vec![Operand::Inst(load), Operand::Constant(1)], Some(5));

    let function = builder.finish();
    let users = function.users_of(Operand::Inst(x));
    assert_eq!(users.len(), 2);
    assert!(users.contains(&load));
    assert!(users.contains(&store));
}

#[test]
fn test_debug_metadata_attached_by_alloca_helper() {
    let mut builder = FunctionBuilder::new("f");
    let entry = builder.add_block("entry");
    let named = builder.alloca(entry, "buf", 7, TypeDescriptor::basic("char").array_of());
    let anonymous = builder.alloca_anonymous(entry);

    let function = builder.finish();
    let var = function.debug.variable(named).unwrap();
    assert_eq!(var.name, "buf");
    assert_eq!(var.line, 7);
    assert!(function.debug.variable(anonymous).is_none());
}

#[test]
fn test_store_and_memcpy_address_operand_convention() {
    let mut builder = FunctionBuilder::new("f");
    let entry = builder.add_block("entry");
    let src = builder.alloca(entry, "src", 1, TypeDescriptor::basic("int"));
    let dst = builder.alloca(entry, "dst", 2, TypeDescriptor::basic("int"));
    let store = builder.store(entry, Operand::Inst(src), Operand::Inst(dst), Some(3));
    let copy = builder.memcpy(
        entry,
        Operand::Inst(dst),
        Operand::Inst(src),
        Operand::Constant(4),
        Some(4),
    );

    let function = builder.finish();

    // A store touches only the written address, never the value operand
    let store_inst = function.inst(store);
    let indices = store_inst.kind.address_operand_indices().unwrap();
    assert_eq!(indices, &[1]);
    assert_eq!(store_inst.operands[indices[0]], Operand::Inst(dst));

    // A memcpy touches both addresses but not the length
    let copy_inst = function.inst(copy);
    let indices = copy_inst.kind.address_operand_indices().unwrap();
    assert_eq!(indices, &[0, 1]);
    assert_eq!(copy_inst.operands[indices[0]], Operand::Inst(dst));
    assert_eq!(copy_inst.operands[indices[1]], Operand::Inst(src));

    assert_eq!(function.inst(src).kind.address_operand_indices(), None);
}

#[test]
fn test_module_lookup() {
    let mut module = Module::new("demo");
    let counter = module.add_global("counter", TypeDescriptor::basic("long"));

    let mut builder = FunctionBuilder::new("main");
    builder.add_block("entry");
    module.functions.push(builder.finish());

    assert_eq!(module.global(counter).name, "counter");
    assert!(module.function("main").is_some());
    assert!(module.function("missing").is_none());
}

#[test]
fn test_memory_access_kinds() {
    assert!(InstKind::Load.is_memory_access());
    assert!(InstKind::Store.is_memory_access());
    assert!(InstKind::MemCpy.is_memory_access());
    assert!(!InstKind::Alloca.is_memory_access());
    assert!(!InstKind::Other("add".to_string()).is_memory_access());

    assert!(InstKind::Store.is_store_like());
    assert!(InstKind::MemCpy.is_store_like());
    assert!(!InstKind::Load.is_store_like());
}
