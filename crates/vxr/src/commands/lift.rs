//! Handle the `lift` command.

use std::path::Path;

use tracing::{error, info, warn};
use vxr::{
    Block, BlockSummary, LiftConfig, LiftRequest, Lifter, VexArch, VexEndness, check_block, guest,
    is_noop_block, resolve_default_exit,
};

use crate::cli::{EXIT_FAILURE, EXIT_SUCCESS, parse_hex_bytes};

pub fn cmd_lift(
    producer: &Path,
    arch: VexArch,
    endness: VexEndness,
    addr: u64,
    max_insns: Option<u32>,
    hex: &str,
) -> i32 {
    let bytes = match parse_hex_bytes(hex) {
        Ok(bytes) => bytes,
        Err(err) => {
            error!(error = %err, "invalid machine code argument");
            return EXIT_FAILURE;
        }
    };

    info!(
        arch = %arch,
        addr = format!("{addr:#x}"),
        len = bytes.len(),
        "lifting"
    );

    match lift_and_print(producer, arch, endness, addr, max_insns, &bytes) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            error!(error = %e, "lift failed");
            EXIT_FAILURE
        }
    }
}

fn lift_and_print(
    producer: &Path,
    arch: VexArch,
    endness: VexEndness,
    addr: u64,
    max_insns: Option<u32>,
    bytes: &[u8],
) -> vxr::Result<()> {
    let mut lifter = Lifter::open(producer, LiftConfig::default())?;
    let lifted = lifter.lift(LiftRequest {
        arch,
        endness,
        bytes,
        addr,
        max_insns,
    })?;
    let block = lifted.block()?;

    print!("{block}");
    print_summary(arch, &block)?;
    Ok(())
}

fn print_summary(arch: VexArch, block: &Block<'_>) -> vxr::Result<()> {
    let summary = BlockSummary::scan(block)?;

    let insts: Vec<String> = summary
        .inst_addrs
        .iter()
        .map(|a| format!("{a:#x}"))
        .collect();
    println!();
    println!("instructions: {}", insts.join(" "));
    println!("size: {} bytes", summary.size);

    for exit in &summary.exits {
        let from = exit
            .ins_addr
            .map_or_else(|| "?".to_string(), |a| format!("{a:#x}"));
        let to = exit
            .dst
            .as_addr()
            .map_or_else(|| exit.dst.to_string(), |a| format!("{a:#x}"));
        println!(
            "exit [{}]: {} -> {} ({})",
            exit.stmt_idx, from, to, exit.jump_kind
        );
    }

    match resolve_default_exit(block) {
        Some(target) => println!("default exit: {target:#x}"),
        None => println!("default exit: dynamic"),
    }

    if is_noop_block(block) {
        println!("no-op block");
    }

    let written = written_registers(arch, block);
    if !written.is_empty() {
        println!("writes: {}", written.join(" "));
    }

    for issue in check_block(block) {
        warn!(%issue, "consistency issue");
    }
    Ok(())
}

/// Guest registers the block's Put statements touch, in first-write
/// order, named where the architecture's offset table knows them.
fn written_registers(arch: VexArch, block: &Block<'_>) -> Vec<String> {
    let mut seen = Vec::new();
    for stmt in block.stmts() {
        let Ok(put) = stmt.as_put() else { continue };
        let name = guest::offset_name(arch, put.offset)
            .map_or_else(|| put.offset.to_string(), str::to_owned);
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}
