pub mod diagnostics;
pub mod block_list;
pub mod region;
pub mod reachability;
pub mod def_use;
pub mod classify;
pub mod type_resolver;
pub mod report;
pub mod analyzer;

#[cfg(test)]
mod tests;
