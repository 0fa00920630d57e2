//! Guest architecture and endianness selectors.
//!
//! These pick which front end the producer runs; they are invocation
//! parameters, not IR node codes, which is why they live here and not
//! with the IR catalogs. `IrEndness` describes individual loads and
//! stores inside a block; `VexEndness` describes the guest as a whole.

use std::fmt;

use vxr_ir::{IrError, Result};

/// Guest architecture the producer disassembles for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u32)]
pub enum VexArch {
    Invalid = 0x400,
    X86 = 0x401,
    Amd64 = 0x402,
    Arm = 0x403,
    Arm64 = 0x404,
    Ppc32 = 0x405,
    Ppc64 = 0x406,
    S390x = 0x407,
    Mips32 = 0x408,
    Mips64 = 0x409,
    Tilegx = 0x40A,
    Riscv64 = 0x40B,
}

impl VexArch {
    /// Decodes a raw architecture code.
    pub fn from_code(code: u32) -> Result<Self> {
        Ok(match code {
            0x400 => Self::Invalid,
            0x401 => Self::X86,
            0x402 => Self::Amd64,
            0x403 => Self::Arm,
            0x404 => Self::Arm64,
            0x405 => Self::Ppc32,
            0x406 => Self::Ppc64,
            0x407 => Self::S390x,
            0x408 => Self::Mips32,
            0x409 => Self::Mips64,
            0x40A => Self::Tilegx,
            0x40B => Self::Riscv64,
            _ => return Err(IrError::UnknownEnum { what: "VexArch", code }),
        })
    }

    /// Guest word width in bits.
    #[must_use]
    pub const fn word_bits(self) -> u32 {
        match self {
            Self::X86 | Self::Arm | Self::Ppc32 | Self::Mips32 => 32,
            _ => 64,
        }
    }
}

impl fmt::Display for VexArch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Invalid => "INVALID",
            Self::X86 => "X86",
            Self::Amd64 => "AMD64",
            Self::Arm => "ARM",
            Self::Arm64 => "ARM64",
            Self::Ppc32 => "PPC32",
            Self::Ppc64 => "PPC64",
            Self::S390x => "S390X",
            Self::Mips32 => "MIPS32",
            Self::Mips64 => "MIPS64",
            Self::Tilegx => "TILEGX",
            Self::Riscv64 => "RISCV64",
        })
    }
}

/// Byte order of the guest being lifted.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u32)]
pub enum VexEndness {
    Invalid = 0x600,
    Little = 0x601,
    Big = 0x602,
}

impl VexEndness {
    /// Decodes a raw endness code.
    pub fn from_code(code: u32) -> Result<Self> {
        Ok(match code {
            0x600 => Self::Invalid,
            0x601 => Self::Little,
            0x602 => Self::Big,
            _ => return Err(IrError::UnknownEnum { what: "VexEndness", code }),
        })
    }
}

impl fmt::Display for VexEndness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Invalid => "INVALID",
            Self::Little => "LittleEndian",
            Self::Big => "BigEndian",
        })
    }
}
