//! Utility modules for file I/O.

pub mod file_helper;
