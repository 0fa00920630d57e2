//! Handle the `info` command: print the pinned catalogs.
//!
//! The producer and this side must agree on every numeric code; dumping
//! a catalog next to the producer's headers is the quickest way to spot
//! version skew.

use vxr::{IrJumpKind, IrOp, IrType, VexArch};

use crate::cli::{EXIT_SUCCESS, InfoTopic};

pub fn cmd_info(topic: InfoTopic) -> i32 {
    match topic {
        InfoTopic::Types => print_types(),
        InfoTopic::Ops => print_ops(),
        InfoTopic::Jumpkinds => print_jumpkinds(),
        InfoTopic::Archs => print_archs(),
    }
    EXIT_SUCCESS
}

fn print_types() {
    for code in 0x1100..=0x110F {
        let Ok(ty) = IrType::from_code(code) else {
            continue;
        };
        match ty.size() {
            Ok(size) => println!("{code:#06x}  {ty}  {size} bytes"),
            Err(_) => println!("{code:#06x}  {ty}"),
        }
    }
}

fn print_ops() {
    for code in 0x1400..=0x17FB {
        let Ok(op) = IrOp::from_code(code) else {
            continue;
        };
        println!("{code:#06x}  {op}");
    }
}

fn print_jumpkinds() {
    for code in 0x1A00..=0x1A1B {
        let Ok(jk) = IrJumpKind::from_code(code) else {
            continue;
        };
        println!("{code:#06x}  {jk}");
    }
}

fn print_archs() {
    for code in 0x401..=0x40B {
        let Ok(arch) = VexArch::from_code(code) else {
            continue;
        };
        println!("{code:#05x}  {arch}  {} bits", arch.word_bits());
    }
}
