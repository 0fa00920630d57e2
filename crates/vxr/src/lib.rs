//! VXR - VEX-style binary lifter front end.
//!
//! Lifts machine code through an external producer library and exposes
//! safe views and analyses over the resulting IR superblocks.
//!
//! # Example
//!
//! ```ignore
//! use vxr::{LiftConfig, LiftRequest, Lifter, VexArch, VexEndness};
//!
//! let mut lifter = Lifter::open("libvex.so", LiftConfig::default())?;
//! let lifted = lifter.lift(LiftRequest {
//!     arch: VexArch::Arm64,
//!     endness: VexEndness::Little,
//!     bytes: &code,
//!     addr: 0x1000,
//!     max_insns: None,
//! })?;
//! println!("{}", lifted.block()?);
//! ```

// Re-export from sub-crates
pub use vxr_analysis::{
    BlockSummary, CheckIssue, SideExit, check_block, is_noop_block, resolve_default_exit,
    retired_stmts, shallow_type,
};
pub use vxr_decode::{Block, Callee, DecodeError, Expr, ExprRef, Stmt, StmtRef};
pub use vxr_ir::{
    IrConst, IrConstTag, IrEffect, IrEndness, IrError, IrExprTag, IrJumpKind, IrLoadGOp,
    IrMBusEvent, IrOp, IrStmtTag, IrTemp, IrType, RegArray,
};
pub use vxr_lift::{
    LiftConfig, LiftError, LiftRequest, Lifted, Lifter, VexArch, VexEndness, guest,
};

use thiserror::Error;

/// Front-end errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Ir(#[from] IrError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Lift(#[from] LiftError),
}

pub type Result<T> = std::result::Result<T, Error>;
