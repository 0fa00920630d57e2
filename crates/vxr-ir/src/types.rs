//! Value types, endianness, and temporaries.

use std::fmt;

use crate::{IrError, Result};

/// Type of an IR value.
///
/// Every temporary, constant, and guest-state slot carries one of these.
/// The numeric values are the producer's published codes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u32)]
pub enum IrType {
    /// Placeholder for typing failures; never stored in a well-formed block.
    Invalid = 0x1100,
    I1 = 0x1101,
    I8 = 0x1102,
    I16 = 0x1103,
    I32 = 0x1104,
    I64 = 0x1105,
    /// 128-bit scalar integer.
    I128 = 0x1106,
    /// IEEE 754 half precision.
    F16 = 0x1107,
    F32 = 0x1108,
    F64 = 0x1109,
    /// 32-bit decimal floating point.
    D32 = 0x110A,
    D64 = 0x110B,
    D128 = 0x110C,
    F128 = 0x110D,
    /// 128-bit SIMD vector.
    V128 = 0x110E,
    V256 = 0x110F,
}

impl IrType {
    /// Decodes a raw type code.
    pub fn from_code(code: u32) -> Result<Self> {
        Ok(match code {
            0x1100 => Self::Invalid,
            0x1101 => Self::I1,
            0x1102 => Self::I8,
            0x1103 => Self::I16,
            0x1104 => Self::I32,
            0x1105 => Self::I64,
            0x1106 => Self::I128,
            0x1107 => Self::F16,
            0x1108 => Self::F32,
            0x1109 => Self::F64,
            0x110A => Self::D32,
            0x110B => Self::D64,
            0x110C => Self::D128,
            0x110D => Self::F128,
            0x110E => Self::V128,
            0x110F => Self::V256,
            _ => return Err(IrError::UnknownEnum { what: "IRType", code }),
        })
    }

    /// Storage footprint in bytes. `I1` rounds up to one byte.
    pub const fn size(self) -> Result<u32> {
        Ok(match self {
            Self::Invalid => return Err(IrError::NoSize(self)),
            Self::I1 | Self::I8 => 1,
            Self::I16 | Self::F16 => 2,
            Self::I32 | Self::F32 | Self::D32 => 4,
            Self::I64 | Self::F64 | Self::D64 => 8,
            Self::I128 | Self::F128 | Self::D128 | Self::V128 => 16,
            Self::V256 => 32,
        })
    }
}

impl fmt::Display for IrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Invalid => "Ity_INVALID",
            Self::I1 => "I1",
            Self::I8 => "I8",
            Self::I16 => "I16",
            Self::I32 => "I32",
            Self::I64 => "I64",
            Self::I128 => "I128",
            Self::F16 => "F16",
            Self::F32 => "F32",
            Self::F64 => "F64",
            Self::D32 => "D32",
            Self::D64 => "D64",
            Self::D128 => "D128",
            Self::F128 => "F128",
            Self::V128 => "V128",
            Self::V256 => "V256",
        })
    }
}

/// Byte order of a memory access.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u32)]
pub enum IrEndness {
    Little = 0x1200,
    Big = 0x1201,
}

impl IrEndness {
    /// Decodes a raw endianness code.
    pub fn from_code(code: u32) -> Result<Self> {
        match code {
            0x1200 => Ok(Self::Little),
            0x1201 => Ok(Self::Big),
            _ => Err(IrError::UnknownEnum { what: "IREndness", code }),
        }
    }

    /// Suffix used by load/store rendering, `LDle` vs `LDbe`.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Little => "le",
            Self::Big => "be",
        }
    }
}

/// Index of an SSA temporary within one block's type environment.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct IrTemp(pub u32);

impl IrTemp {
    /// Index value the producer reserves for "no temporary".
    pub const INVALID_CODE: u32 = 0xFFFF_FFFF;

    /// Interprets a raw index, mapping the reserved sentinel to `None`.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Option<Self> {
        if raw == Self::INVALID_CODE {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Position in the type environment.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for IrTemp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// A circular guest-state region addressed with a runtime index.
///
/// Used for rotating register files such as the x87 stack, where the
/// accessed slot is `base + ((ix + bias) % n_elems) * elem_ty.size()`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RegArray {
    /// Byte offset of the first element in the guest state.
    pub base: i32,
    /// Type of each element.
    pub elem_ty: IrType,
    /// Number of elements in the region.
    pub n_elems: i32,
}

impl fmt::Display for RegArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}:{}x{})", self.base, self.n_elems, self.elem_ty)
    }
}
