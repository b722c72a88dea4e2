pub mod types;
pub mod instructions;
pub mod function;
pub mod debug;
pub mod builder;

#[cfg(test)]
mod tests;
