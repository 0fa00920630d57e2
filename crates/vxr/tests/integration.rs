//! End-to-end decode and analysis through the public facade.
//!
//! Producer-shaped blocks come from the synthesizer, so everything past
//! the lift call itself is exercised without the shared library.

use vxr::{
    BlockSummary, IrConst, IrJumpKind, IrType, LiftConfig, LiftError, Lifter, VexArch,
    check_block, guest, is_noop_block, resolve_default_exit, retired_stmts,
};
use vxr_decode::synth::{BlockSynth, SynthBlock};

/// One lifted ARM64 register move, laid out as the producer would.
fn register_move_block() -> SynthBlock {
    let mut synth = BlockSynth::new();
    let t0 = synth.temp(IrType::I64);
    synth.imark(0x1000, 4, 0);
    let x0 = synth.get(guest::arm64::x(0), IrType::I64);
    synth.wr_tmp(t0, x0);
    let data = synth.rd_tmp(t0);
    synth.put(guest::arm64::x(2), data);
    let next = synth.constant(IrConst::U64(0x1004));
    synth.set_next(next);
    synth.set_offs_ip(guest::arm64::PC);
    synth.seal()
}

#[test]
fn test_block_walks_and_prints() {
    let sealed = register_move_block();
    let block = sealed.block().unwrap();

    assert_eq!(block.stmt_count(), 3);
    assert_eq!(block.temp_count(), 1);
    assert_eq!(block.jumpkind(), IrJumpKind::Boring);
    assert_eq!(block.offs_ip(), guest::arm64::PC);

    let rendered = block.to_string();
    assert!(rendered.contains("IMark(0x1000, 4, 0)"));
    assert!(rendered.contains("t0 = GET:I64(16)"));
}

#[test]
fn test_summary_and_default_exit() {
    let sealed = register_move_block();
    let block = sealed.block().unwrap();

    let summary = BlockSummary::scan(&block).unwrap();
    assert_eq!(summary.inst_addrs, vec![0x1000]);
    assert_eq!(summary.size, 4);
    assert!(summary.exits.is_empty());

    assert_eq!(resolve_default_exit(&block), Some(0x1004));
    assert!(check_block(&block).is_empty());
    assert!(!is_noop_block(&block));
}

#[test]
fn test_written_register_names() {
    let sealed = register_move_block();
    let block = sealed.block().unwrap();

    let mut names = Vec::new();
    for stmt in block.stmts() {
        if let Ok(put) = stmt.as_put() {
            names.push(guest::offset_name(VexArch::Arm64, put.offset));
        }
    }
    assert_eq!(names, vec![Some("x2")]);
}

#[test]
fn test_noop_padding_block() {
    let mut synth = BlockSynth::new();
    synth.imark(0x2000, 4, 0);
    let pc = synth.constant(IrConst::U64(0x2004));
    synth.put(guest::arm64::PC, pc);
    let next = synth.constant(IrConst::U64(0x2004));
    synth.set_next(next);
    synth.set_offs_ip(guest::arm64::PC);
    let sealed = synth.seal();
    let block = sealed.block().unwrap();

    assert!(is_noop_block(&block));
    assert_eq!(retired_stmts(&block).count(), 2);
}

#[test]
fn test_missing_producer_is_a_clean_error() {
    let Err(err) = Lifter::open("/does/not/exist/libvex.so", LiftConfig::default()) else {
        panic!("open unexpectedly succeeded");
    };
    assert!(matches!(err, LiftError::LibraryNotFound(_)));
    assert!(err.to_string().contains("libvex.so"));
}
