//! Command implementations.

mod info;
mod lift;

use crate::cli::{Cli, Commands};

/// Dispatch CLI command to the appropriate handler.
pub fn run_command(cli: &Cli) -> i32 {
    match &cli.command {
        Commands::Lift { .. } => handle_lift(cli),
        Commands::Info { .. } => handle_info(cli),
    }
}

fn handle_lift(cli: &Cli) -> i32 {
    let Commands::Lift {
        producer,
        arch,
        endness,
        addr,
        max_insns,
        bytes,
    } = &cli.command
    else {
        unreachable!("lift command variant mismatch");
    };

    lift::cmd_lift(
        producer,
        (*arch).into(),
        (*endness).into(),
        *addr,
        *max_insns,
        bytes,
    )
}

fn handle_info(cli: &Cli) -> i32 {
    let Commands::Info { topic } = &cli.command else {
        unreachable!("info command variant mismatch");
    };

    info::cmd_info(*topic)
}
