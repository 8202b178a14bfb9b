//! Platform abstraction layer
//!
//! Durable key-value storage for snapshots:
//! - `MemoryStore`: in-process map (tests, embedding)
//! - `FileStore`: one JSON file per key in a data directory (native)
//! - `LocalStorage`: browser LocalStorage (web)

pub mod storage;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use storage::{MemoryStore, Store};

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorage;
