//! Shared infrastructure utilities for Hyperlink.
//!
//! - **`atomic_write`**: Crash-safe file persistence (temp + rename), used for
//!   the stored theme preference.

pub mod atomic_write;

pub use atomic_write::{
    AtomicWriteOptions, FileSyncPolicy, PersistMode, atomic_write, atomic_write_with_options,
    recover_bak_file,
};
