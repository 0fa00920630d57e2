//! Literal constants carried by expression trees.

use std::fmt;

use crate::{IrError, IrType, Result};

/// Discriminant of a constant, as the producer numbers them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u32)]
pub enum IrConstTag {
    U1 = 0x1300,
    U8 = 0x1301,
    U16 = 0x1302,
    U32 = 0x1303,
    U64 = 0x1304,
    F32 = 0x1305,
    F32i = 0x1306,
    F64 = 0x1307,
    F64i = 0x1308,
    V128 = 0x1309,
    V256 = 0x130A,
}

impl IrConstTag {
    /// Decodes a raw constant tag.
    pub fn from_code(code: u32) -> Result<Self> {
        Ok(match code {
            0x1300 => Self::U1,
            0x1301 => Self::U8,
            0x1302 => Self::U16,
            0x1303 => Self::U32,
            0x1304 => Self::U64,
            0x1305 => Self::F32,
            0x1306 => Self::F32i,
            0x1307 => Self::F64,
            0x1308 => Self::F64i,
            0x1309 => Self::V128,
            0x130A => Self::V256,
            _ => return Err(IrError::UnknownEnum { what: "IRConstTag", code }),
        })
    }
}

/// A literal value.
///
/// Vector constants do not carry full payloads. A `V128` holds a 16-bit
/// lane mask where each bit selects 0x00 or 0xFF for one byte lane, and
/// `V256` extends the same scheme to 32 lanes.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum IrConst {
    U1(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    /// 32-bit float carried as raw bits.
    F32i(u32),
    F64(f64),
    /// 64-bit float carried as raw bits.
    F64i(u64),
    V128(u16),
    V256(u32),
}

impl IrConst {
    /// Wire discriminant of this constant.
    #[must_use]
    pub const fn tag(self) -> IrConstTag {
        match self {
            Self::U1(_) => IrConstTag::U1,
            Self::U8(_) => IrConstTag::U8,
            Self::U16(_) => IrConstTag::U16,
            Self::U32(_) => IrConstTag::U32,
            Self::U64(_) => IrConstTag::U64,
            Self::F32(_) => IrConstTag::F32,
            Self::F32i(_) => IrConstTag::F32i,
            Self::F64(_) => IrConstTag::F64,
            Self::F64i(_) => IrConstTag::F64i,
            Self::V128(_) => IrConstTag::V128,
            Self::V256(_) => IrConstTag::V256,
        }
    }

    /// Type of the value. Raw-bits variants type as their float forms.
    #[must_use]
    pub const fn ty(self) -> IrType {
        match self {
            Self::U1(_) => IrType::I1,
            Self::U8(_) => IrType::I8,
            Self::U16(_) => IrType::I16,
            Self::U32(_) => IrType::I32,
            Self::U64(_) => IrType::I64,
            Self::F32(_) | Self::F32i(_) => IrType::F32,
            Self::F64(_) | Self::F64i(_) => IrType::F64,
            Self::V128(_) => IrType::V128,
            Self::V256(_) => IrType::V256,
        }
    }

    /// The value as an unsigned 64-bit address, when it is an integer
    /// constant. Widens smaller integers without sign extension.
    #[must_use]
    pub fn as_addr(self) -> Option<u64> {
        match self {
            Self::U1(b) => Some(u64::from(b)),
            Self::U8(v) => Some(u64::from(v)),
            Self::U16(v) => Some(u64::from(v)),
            Self::U32(v) => Some(u64::from(v)),
            Self::U64(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for IrConst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::U1(b) => write!(f, "{}:I1", u8::from(b)),
            Self::U8(v) => write!(f, "{v:#x}:I8"),
            Self::U16(v) => write!(f, "{v:#x}:I16"),
            Self::U32(v) => write!(f, "{v:#x}:I32"),
            Self::U64(v) => write!(f, "{v:#x}:I64"),
            Self::F32(v) => write!(f, "F32{{{:#x}}}", v.to_bits()),
            Self::F32i(v) => write!(f, "F32i{{{v:#x}}}"),
            Self::F64(v) => write!(f, "F64{{{:#x}}}", v.to_bits()),
            Self::F64i(v) => write!(f, "F64i{{{v:#x}}}"),
            Self::V128(v) => write!(f, "V128{{{v:#06x}}}"),
            Self::V256(v) => write!(f, "V256{{{v:#010x}}}"),
        }
    }
}
