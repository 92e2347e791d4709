//! `RuleRepository` adapters

pub mod file;
pub mod memory;

pub use file::FileRuleRepository;
pub use memory::InMemoryRuleRepository;
