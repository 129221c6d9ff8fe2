//! Filesystem utilities for run-cursor.

pub mod atomic;

pub use atomic::atomic_write_file;
