//! Safe, bounds-checked views over lifter-produced superblocks.
//!
//! The lifter library hands back a pointer-linked tree of tagged unions
//! living in its own buffers. This crate binds that memory exactly once,
//! validating every count, link, and enum code at the boundary, and then
//! exposes borrowed views that cannot outlive the buffer they point into.
//! Nothing here ever mutates or frees producer memory.

mod block;
mod expr;
pub mod raw;
mod stmt;
pub mod synth;

pub use block::*;
pub use expr::*;
pub use stmt::*;

use thiserror::Error;
use vxr_ir::IrError;

/// Errors raised while binding or walking a producer superblock.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Producer returned no block")]
    ProducerFailure,
    #[error("Tag mismatch: expected {expected}, got {actual}")]
    TagMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    #[error(transparent)]
    UnknownEnumValue(#[from] IrError),
    #[error("Null {0} link in producer memory")]
    NullLink(&'static str),
    #[error("{what} counts out of range: used {used}, capacity {size}")]
    BadCounts {
        what: &'static str,
        used: i32,
        size: i32,
    },
    #[error("Call argument list not terminated within {0} entries")]
    UnterminatedArgs(usize),
}

pub type Result<T> = std::result::Result<T, DecodeError>;
