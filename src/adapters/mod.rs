// Adapters layer: concrete `Store` implementations.

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;
