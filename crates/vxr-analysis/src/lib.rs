//! Post-decode analyses over lifted superblocks.
//!
//! Everything here works on an already-bound [`vxr_decode::Block`] and
//! never touches producer memory directly. The analyses are read-only:
//! summaries are collected into owned results, and filtering is done
//! with iterators rather than by rewriting the statement table.

mod check;
mod exits;
mod summary;

pub use check::*;
pub use exits::*;
pub use summary::*;

use vxr_decode::{Block, Expr, ExprRef};
use vxr_ir::IrType;

/// Expression type where it can be read off the node itself.
///
/// Covers the forms lifters put on copy chains and register writes:
/// state reads, loads, constants, temporaries, selects, and clean
/// calls. Operator results would need the full opcode typing table and
/// come back as `None`.
#[must_use]
pub fn shallow_type(block: &Block<'_>, expr: ExprRef<'_>) -> Option<IrType> {
    match expr.decode().ok()? {
        Expr::Get(g) => Some(g.ty),
        Expr::Load(l) => Some(l.ty),
        Expr::Const(c) => Some(c.ty()),
        Expr::RdTmp(t) => block.temp_type(t),
        Expr::Ite(i) => shallow_type(block, i.iftrue),
        Expr::CCall(c) => Some(c.ret_ty),
        _ => None,
    }
}
