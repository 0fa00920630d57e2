//! One-pass block summary: instruction boundaries and side exits.

use tracing::debug;
use vxr_decode::{Block, Result, StmtRef};
use vxr_ir::{IrConst, IrExprTag, IrJumpKind, IrStmtTag};

/// A conditional side exit taken out of the middle of a block.
#[derive(Clone, Debug)]
pub struct SideExit {
    /// Statement index within the block.
    pub stmt_idx: usize,
    /// Address of the instruction the exit belongs to. Absent when the
    /// producer emitted the exit before any instruction marker.
    pub ins_addr: Option<u64>,
    /// The statically known destination.
    pub dst: IrConst,
    pub jump_kind: IrJumpKind,
}

/// Per-block facts collected in a single statement walk.
#[derive(Clone, Debug, Default)]
pub struct BlockSummary {
    /// Guest address of each instruction, in block order.
    pub inst_addrs: Vec<u64>,
    /// Total guest bytes covered by the block's instruction markers.
    pub size: u32,
    pub exits: Vec<SideExit>,
}

impl BlockSummary {
    /// Walks the block once, recording every instruction marker and
    /// conditional exit.
    pub fn scan(block: &Block<'_>) -> Result<Self> {
        let mut summary = Self::default();
        let mut ins_addr = None;

        for (stmt_idx, stmt) in block.stmts().enumerate() {
            match stmt.tag() {
                IrStmtTag::IMark => {
                    let m = stmt.as_imark()?;
                    let addr = m.addr + u64::from(m.delta);
                    ins_addr = Some(addr);
                    summary.inst_addrs.push(addr);
                    summary.size += m.len;
                }
                IrStmtTag::Exit => {
                    let e = stmt.as_exit()?;
                    summary.exits.push(SideExit {
                        stmt_idx,
                        ins_addr,
                        dst: e.dst,
                        jump_kind: e.jk,
                    });
                }
                _ => {}
            }
        }

        debug!(
            insts = summary.inst_addrs.len(),
            exits = summary.exits.len(),
            size = summary.size,
            "scanned block"
        );
        Ok(summary)
    }
}

/// Statements that survive no-op removal.
///
/// The producer pads blocks with `NoOp` statements where its own
/// rewrites deleted something; consumers almost always want them gone.
/// The original filter compacted the statement table in place, which a
/// borrowed view cannot do, so this is the same operation as an
/// iterator.
pub fn retired_stmts<'a>(block: &'a Block<'a>) -> impl Iterator<Item = StmtRef<'a>> + 'a {
    block.stmts().filter(|s| s.tag() != IrStmtTag::NoOp)
}

/// Whether the whole block does nothing but fall through.
///
/// True when the block carries only instruction markers, no-ops, and
/// constant writes to the instruction pointer, and its default exit is
/// a boring jump to the address right after the last instruction. The
/// producer emits such blocks at low optimization levels.
#[must_use]
pub fn is_noop_block(block: &Block<'_>) -> bool {
    let mut fallthrough = None;

    for stmt in block.stmts() {
        match stmt.tag() {
            IrStmtTag::IMark => {
                let Ok(m) = stmt.as_imark() else {
                    return false;
                };
                fallthrough = Some(m.addr + u64::from(m.delta) + u64::from(m.len));
            }
            IrStmtTag::NoOp => {}
            IrStmtTag::Put => {
                let Ok(p) = stmt.as_put() else {
                    return false;
                };
                if p.data.tag() != IrExprTag::Const || p.offset != block.offs_ip() {
                    return false;
                }
            }
            _ => return false,
        }
    }

    let Some(fallthrough) = fallthrough else {
        return false;
    };
    if block.jumpkind() != IrJumpKind::Boring {
        return false;
    }
    match block.next().as_const() {
        Ok(IrConst::U32(v)) => fallthrough < 0xFFFF_FFFF && fallthrough == u64::from(v),
        Ok(IrConst::U64(v)) => fallthrough == v,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use vxr_decode::synth::BlockSynth;
    use vxr_ir::{IrEndness, IrType};

    use super::*;

    #[test]
    fn test_scan_collects_imarks_and_exits() {
        let mut synth = BlockSynth::new();
        let t0 = synth.temp(IrType::I64);
        synth.imark(0x1000, 4, 0);
        let x0 = synth.get(16, IrType::I64);
        synth.wr_tmp(t0, x0);
        let guard = synth.constant(IrConst::U1(true));
        synth.exit(guard, IrConst::U64(0x2000), IrJumpKind::Boring, 184);
        synth.imark(0x1004, 4, 0);
        let data = synth.rd_tmp(t0);
        synth.put(32, data);
        let next = synth.constant(IrConst::U64(0x1008));
        synth.set_next(next);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        let summary = BlockSummary::scan(&block).unwrap();
        assert_eq!(summary.inst_addrs, vec![0x1000, 0x1004]);
        assert_eq!(summary.size, 8);
        assert_eq!(summary.exits.len(), 1);
        let exit = &summary.exits[0];
        assert_eq!(exit.stmt_idx, 2);
        assert_eq!(exit.ins_addr, Some(0x1000));
        assert_eq!(exit.dst.as_addr(), Some(0x2000));
        assert_eq!(exit.jump_kind, IrJumpKind::Boring);
    }

    #[test]
    fn test_scan_applies_marker_delta() {
        let mut synth = BlockSynth::new();
        synth.imark(0x8000, 2, 1);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        let summary = BlockSummary::scan(&block).unwrap();
        assert_eq!(summary.inst_addrs, vec![0x8001]);
        assert_eq!(summary.size, 2);
    }

    #[test]
    fn test_scan_empty_block() {
        let sealed = BlockSynth::new().seal();
        let block = sealed.block().unwrap();

        let summary = BlockSummary::scan(&block).unwrap();
        assert!(summary.inst_addrs.is_empty());
        assert!(summary.exits.is_empty());
        assert_eq!(summary.size, 0);
    }

    #[test]
    fn test_exit_before_any_marker_has_no_instruction() {
        let mut synth = BlockSynth::new();
        let guard = synth.constant(IrConst::U1(true));
        synth.exit(guard, IrConst::U64(0x2000), IrJumpKind::Boring, 184);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        let summary = BlockSummary::scan(&block).unwrap();
        assert_eq!(summary.exits[0].ins_addr, None);
    }

    #[test]
    fn test_retired_stmts_skip_noops() {
        let mut synth = BlockSynth::new();
        synth.no_op();
        synth.imark(0x1000, 4, 0);
        synth.no_op();
        let t0 = synth.temp(IrType::I64);
        let x0 = synth.get(16, IrType::I64);
        synth.wr_tmp(t0, x0);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        assert_eq!(block.stmt_count(), 4);
        let retired: Vec<_> = retired_stmts(&block).map(|s| s.tag()).collect();
        assert_eq!(retired, vec![IrStmtTag::IMark, IrStmtTag::WrTmp]);
    }

    #[test]
    fn test_noop_block_detected() {
        let mut synth = BlockSynth::new();
        synth.imark(0x1000, 4, 0);
        let pc = synth.constant(IrConst::U64(0x1004));
        synth.put(184, pc);
        let next = synth.constant(IrConst::U64(0x1004));
        synth.set_next(next);
        synth.set_offs_ip(184);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        assert!(is_noop_block(&block));
    }

    #[test]
    fn test_block_with_real_work_is_not_noop() {
        let mut synth = BlockSynth::new();
        let t0 = synth.temp(IrType::I64);
        synth.imark(0x1000, 4, 0);
        let x0 = synth.get(16, IrType::I64);
        synth.wr_tmp(t0, x0);
        let next = synth.constant(IrConst::U64(0x1004));
        synth.set_next(next);
        synth.set_offs_ip(184);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        assert!(!is_noop_block(&block));
    }

    #[test]
    fn test_register_write_off_the_ip_is_not_noop() {
        let mut synth = BlockSynth::new();
        synth.imark(0x1000, 4, 0);
        let v = synth.constant(IrConst::U64(7));
        synth.put(32, v);
        let next = synth.constant(IrConst::U64(0x1004));
        synth.set_next(next);
        synth.set_offs_ip(184);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        assert!(!is_noop_block(&block));
    }

    #[test]
    fn test_noop_block_requires_fallthrough_next() {
        let mut synth = BlockSynth::new();
        synth.imark(0x1000, 4, 0);
        let next = synth.constant(IrConst::U64(0x9000));
        synth.set_next(next);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        assert!(!is_noop_block(&block));
    }

    #[test]
    fn test_store_makes_block_non_noop() {
        let mut synth = BlockSynth::new();
        synth.imark(0x1000, 4, 0);
        let addr = synth.constant(IrConst::U64(0x4000));
        let val = synth.constant(IrConst::U64(1));
        synth.store(IrEndness::Little, addr, val);
        let next = synth.constant(IrConst::U64(0x1004));
        synth.set_next(next);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        assert!(!is_noop_block(&block));
    }
}
