//! Core types for the coil pooled-list workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the slot index type used for pointer-free linkage and the error
//! taxonomy shared by the pool and list operations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod slot;

pub use error::ListError;
pub use slot::SlotIndex;
