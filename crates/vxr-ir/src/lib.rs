//! IR object model shared by every vxr crate.
//!
//! The lifter producer describes each superblock with C structs whose
//! enum-valued fields are 32-bit codes from a published numbering. This
//! crate holds those catalogs as Rust enums with every code pinned, plus
//! the checked `from_code` constructors the decoder is built on.

mod consts;
mod events;
mod jumpkind;
mod ops;
mod tags;
mod types;

pub use consts::*;
pub use events::*;
pub use jumpkind::*;
pub use ops::*;
pub use tags::*;
pub use types::*;

use thiserror::Error;

/// Errors from interpreting raw IR data.
#[derive(Error, Debug)]
pub enum IrError {
    #[error("Unknown {what} code {code:#x}")]
    UnknownEnum { what: &'static str, code: u32 },
    #[error("Type {0} has no defined size")]
    NoSize(IrType),
}

pub type Result<T> = std::result::Result<T, IrError>;
