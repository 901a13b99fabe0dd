//! Session storage implementations.

mod file_store;
mod memory_store;

pub use file_store::FileSessionStore;
pub use memory_store::MemorySessionStore;
