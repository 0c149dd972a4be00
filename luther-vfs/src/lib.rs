//! Luther Virtual File System
//!
//! The scanner reads its definition, its transition tables and the source
//! text through this abstraction, so the whole pipeline can run against an
//! in-memory tree in tests.
//!
//! # Usage
//! ```rust,ignore
//! use luther_vfs::{VirtualFileSystem, MemoryFileSystem};
//! use std::path::Path;
//!
//! let fs = MemoryFileSystem::new();
//! fs.write_file(Path::new("/scan.def"), b"ab\n").unwrap();
//! let content = fs.read_to_string(Path::new("/scan.def")).unwrap();
//! ```

mod error;
mod memory;
mod native;
mod r#trait;

pub use error::{VfsError, VfsResult};
pub use memory::MemoryFileSystem;
pub use native::NativeFileSystem;
pub use r#trait::VirtualFileSystem;

/// Create a new memory-based file system.
pub fn memory_fs() -> MemoryFileSystem {
    MemoryFileSystem::new()
}

/// Create a new native file system.
pub fn native_fs() -> NativeFileSystem {
    NativeFileSystem::new()
}
