//! Constant resolution of the block's default exit.

use tracing::trace;
use vxr_decode::{Block, Expr};
use vxr_ir::{IrExprTag, IrJumpKind, IrStmtTag, IrType};

use crate::shallow_type;

/// Tries to pin the block's fall-through destination to a constant.
///
/// The next-expression is often not a literal constant: lifters route
/// it through a temporary, and at low optimization levels through a
/// register slot as well. This walks the statements backward following
/// temporary and register copy chains until it reaches a constant, and
/// gives up on anything it cannot prove: a non-branch jump kind, a
/// guarded load feeding the chain, a register write of a different
/// width, or any expression form outside plain copies.
#[must_use]
pub fn resolve_default_exit(block: &Block<'_>) -> Option<u64> {
    match block.jumpkind() {
        IrJumpKind::Boring | IrJumpKind::Call | IrJumpKind::InvalICache => {}
        _ => return None,
    }

    let next = block.next();
    match next.tag() {
        IrExprTag::Const => return next.as_const().ok()?.as_addr(),
        IrExprTag::RdTmp => {}
        _ => return None,
    }

    let mut want_tmp = Some(next.as_rd_tmp().ok()?);
    let mut want_reg: Option<(i32, IrType)> = None;

    for i in (0..block.stmt_count()).rev() {
        let stmt = block.stmt(i)?;
        let data = match stmt.tag() {
            IrStmtTag::LoadG => return None,
            IrStmtTag::WrTmp => {
                let w = stmt.as_wr_tmp().ok()?;
                if want_tmp != Some(w.tmp) {
                    continue;
                }
                w.data
            }
            IrStmtTag::Put => {
                let Some((offset, ty)) = want_reg else {
                    continue;
                };
                let p = stmt.as_put().ok()?;
                if p.offset != offset {
                    continue;
                }
                if shallow_type(block, p.data) != Some(ty) {
                    return None;
                }
                p.data
            }
            _ => continue,
        };

        match data.decode().ok()? {
            Expr::Const(c) => {
                let addr = c.as_addr();
                if let Some(addr) = addr {
                    trace!(stmt_idx = i, addr, "default exit resolved");
                }
                return addr;
            }
            Expr::RdTmp(t) => {
                want_tmp = Some(t);
                want_reg = None;
            }
            Expr::Get(g) => {
                want_tmp = None;
                want_reg = Some((g.offset, g.ty));
            }
            _ => return None,
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use vxr_decode::synth::BlockSynth;
    use vxr_ir::{IrConst, IrEndness, IrLoadGOp, IrOp};

    use super::*;

    #[test]
    fn test_constant_next_resolves() {
        let mut synth = BlockSynth::new();
        synth.imark(0x1000, 4, 0);
        let next = synth.constant(IrConst::U64(0x4000));
        synth.set_next(next);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        assert_eq!(resolve_default_exit(&block), Some(0x4000));
    }

    #[test]
    fn test_non_branch_kinds_do_not_resolve() {
        let mut synth = BlockSynth::new();
        let next = synth.constant(IrConst::U64(0x4000));
        synth.set_next(next);
        synth.set_jumpkind(IrJumpKind::Ret);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        assert_eq!(resolve_default_exit(&block), None);
    }

    #[test]
    fn test_call_kind_resolves() {
        let mut synth = BlockSynth::new();
        let next = synth.constant(IrConst::U32(0x4010));
        synth.set_next(next);
        synth.set_jumpkind(IrJumpKind::Call);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        assert_eq!(resolve_default_exit(&block), Some(0x4010));
    }

    #[test]
    fn test_temp_copy_chain_resolves() {
        let mut synth = BlockSynth::new();
        let t0 = synth.temp(IrType::I64);
        let t1 = synth.temp(IrType::I64);
        let target = synth.constant(IrConst::U64(0x5000));
        synth.wr_tmp(t0, target);
        let copy = synth.rd_tmp(t0);
        synth.wr_tmp(t1, copy);
        let next = synth.rd_tmp(t1);
        synth.set_next(next);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        assert_eq!(resolve_default_exit(&block), Some(0x5000));
    }

    #[test]
    fn test_register_roundtrip_resolves() {
        // The producer spills the target through a register slot:
        // PUT(16) = 0x6000, then t0 = GET(16), next = t0.
        let mut synth = BlockSynth::new();
        let t0 = synth.temp(IrType::I64);
        let target = synth.constant(IrConst::U64(0x6000));
        synth.put(16, target);
        let read_back = synth.get(16, IrType::I64);
        synth.wr_tmp(t0, read_back);
        let next = synth.rd_tmp(t0);
        synth.set_next(next);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        assert_eq!(resolve_default_exit(&block), Some(0x6000));
    }

    #[test]
    fn test_register_width_mismatch_gives_up() {
        let mut synth = BlockSynth::new();
        let t0 = synth.temp(IrType::I64);
        let target = synth.constant(IrConst::U32(0x6000));
        synth.put(16, target);
        let read_back = synth.get(16, IrType::I64);
        synth.wr_tmp(t0, read_back);
        let next = synth.rd_tmp(t0);
        synth.set_next(next);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        assert_eq!(resolve_default_exit(&block), None);
    }

    #[test]
    fn test_guarded_load_gives_up() {
        let mut synth = BlockSynth::new();
        let t0 = synth.temp(IrType::I32);
        let target = synth.constant(IrConst::U64(0x5000));
        synth.wr_tmp(t0, target);
        let addr = synth.get(48, IrType::I64);
        let alt = synth.constant(IrConst::U32(0));
        let guard = synth.constant(IrConst::U1(true));
        let t1 = synth.temp(IrType::I32);
        synth.load_g(IrEndness::Little, IrLoadGOp::ILGop_Ident32, t1, addr, alt, guard);
        let next = synth.rd_tmp(t0);
        synth.set_next(next);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        assert_eq!(resolve_default_exit(&block), None);
    }

    #[test]
    fn test_unwritten_temp_does_not_resolve() {
        let mut synth = BlockSynth::new();
        let t0 = synth.temp(IrType::I64);
        synth.imark(0x1000, 4, 0);
        let next = synth.rd_tmp(t0);
        synth.set_next(next);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        assert_eq!(resolve_default_exit(&block), None);
    }

    #[test]
    fn test_computed_target_gives_up() {
        let mut synth = BlockSynth::new();
        let t0 = synth.temp(IrType::I64);
        let lhs = synth.get(16, IrType::I64);
        let rhs = synth.constant(IrConst::U64(8));
        let sum = synth.binop(IrOp::Iop_Add64, lhs, rhs);
        synth.wr_tmp(t0, sum);
        let next = synth.rd_tmp(t0);
        synth.set_next(next);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        assert_eq!(resolve_default_exit(&block), None);
    }
}
