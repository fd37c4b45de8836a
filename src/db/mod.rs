pub mod keys;
pub mod kv;
pub mod memory;

pub use kv::KeyValueStore;
pub use memory::MemoryStore;
