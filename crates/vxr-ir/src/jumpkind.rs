//! Block exit categories.

use std::fmt;

use crate::{IrError, Result};

/// Why control leaves a superblock.
///
/// Most blocks end `Boring`; the rest tell the consumer to do something
/// before continuing, from servicing a syscall to raising a signal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u32)]
pub enum IrJumpKind {
    Invalid = 0x1A00,
    /// Plain fallthrough or jump.
    Boring = 0x1A01,
    Call = 0x1A02,
    Ret = 0x1A03,
    /// Client request to the host before continuing.
    ClientReq = 0x1A04,
    /// Guest yields to the scheduler.
    Yield = 0x1A05,
    EmWarn = 0x1A06,
    EmFail = 0x1A07,
    /// Current instruction cannot be decoded.
    NoDecode = 0x1A08,
    MapFail = 0x1A09,
    /// Invalidate instruction cache for a guest range.
    InvalICache = 0x1A0A,
    FlushDCache = 0x1A0B,
    NoRedir = 0x1A0C,
    SigIll = 0x1A0D,
    SigTrap = 0x1A0E,
    SigSegv = 0x1A0F,
    SigBus = 0x1A10,
    SigFpe = 0x1A11,
    SigFpeIntDiv = 0x1A12,
    SigFpeIntOvf = 0x1A13,
    // Guest-dependent syscall flavours. All mean: do a syscall before
    // continuing.
    SysSyscall = 0x1A14,
    SysInt32 = 0x1A15,
    SysInt128 = 0x1A16,
    SysInt129 = 0x1A17,
    SysInt130 = 0x1A18,
    SysInt145 = 0x1A19,
    SysInt210 = 0x1A1A,
    SysSysenter = 0x1A1B,
}

impl IrJumpKind {
    /// Decodes a raw jump-kind code.
    pub fn from_code(code: u32) -> Result<Self> {
        Ok(match code {
            0x1A00 => Self::Invalid,
            0x1A01 => Self::Boring,
            0x1A02 => Self::Call,
            0x1A03 => Self::Ret,
            0x1A04 => Self::ClientReq,
            0x1A05 => Self::Yield,
            0x1A06 => Self::EmWarn,
            0x1A07 => Self::EmFail,
            0x1A08 => Self::NoDecode,
            0x1A09 => Self::MapFail,
            0x1A0A => Self::InvalICache,
            0x1A0B => Self::FlushDCache,
            0x1A0C => Self::NoRedir,
            0x1A0D => Self::SigIll,
            0x1A0E => Self::SigTrap,
            0x1A0F => Self::SigSegv,
            0x1A10 => Self::SigBus,
            0x1A11 => Self::SigFpe,
            0x1A12 => Self::SigFpeIntDiv,
            0x1A13 => Self::SigFpeIntOvf,
            0x1A14 => Self::SysSyscall,
            0x1A15 => Self::SysInt32,
            0x1A16 => Self::SysInt128,
            0x1A17 => Self::SysInt129,
            0x1A18 => Self::SysInt130,
            0x1A19 => Self::SysInt145,
            0x1A1A => Self::SysInt210,
            0x1A1B => Self::SysSysenter,
            _ => return Err(IrError::UnknownEnum { what: "IRJumpKind", code }),
        })
    }
}

impl fmt::Display for IrJumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Invalid => "INVALID",
            Self::Boring => "Boring",
            Self::Call => "Call",
            Self::Ret => "Ret",
            Self::ClientReq => "ClientReq",
            Self::Yield => "Yield",
            Self::EmWarn => "EmWarn",
            Self::EmFail => "EmFail",
            Self::NoDecode => "NoDecode",
            Self::MapFail => "MapFail",
            Self::InvalICache => "InvalICache",
            Self::FlushDCache => "FlushDCache",
            Self::NoRedir => "NoRedir",
            Self::SigIll => "SigILL",
            Self::SigTrap => "SigTRAP",
            Self::SigSegv => "SigSEGV",
            Self::SigBus => "SigBUS",
            Self::SigFpe => "SigFPE",
            Self::SigFpeIntDiv => "SigFPE_IntDiv",
            Self::SigFpeIntOvf => "SigFPE_IntOvf",
            Self::SysSyscall => "Sys_syscall",
            Self::SysInt32 => "Sys_int32",
            Self::SysInt128 => "Sys_int128",
            Self::SysInt129 => "Sys_int129",
            Self::SysInt130 => "Sys_int130",
            Self::SysInt145 => "Sys_int145",
            Self::SysInt210 => "Sys_int210",
            Self::SysSysenter => "Sys_sysenter",
        })
    }
}
