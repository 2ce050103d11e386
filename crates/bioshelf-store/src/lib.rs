pub mod json_file;
pub mod memory;
pub mod store;

pub use json_file::JsonStore;
pub use memory::MemoryStore;
pub use store::{MaterialStore, validate_draft};
