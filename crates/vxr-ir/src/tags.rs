//! Node discriminants for statements and expressions.
//!
//! These are read before anything else in a node, so their `name`
//! strings double as the vocabulary of tag-mismatch diagnostics.

use crate::{IrError, Result};

/// Statement discriminant, as the producer numbers them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u32)]
pub enum IrStmtTag {
    NoOp = 0x1E00,
    IMark = 0x1E01,
    AbiHint = 0x1E02,
    Put = 0x1E03,
    PutI = 0x1E04,
    WrTmp = 0x1E05,
    Store = 0x1E06,
    LoadG = 0x1E07,
    StoreG = 0x1E08,
    Cas = 0x1E09,
    Llsc = 0x1E0A,
    Dirty = 0x1E0B,
    Mbe = 0x1E0C,
    Exit = 0x1E0D,
}

impl IrStmtTag {
    /// Decodes a raw statement tag.
    pub fn from_code(code: u32) -> Result<Self> {
        Ok(match code {
            0x1E00 => Self::NoOp,
            0x1E01 => Self::IMark,
            0x1E02 => Self::AbiHint,
            0x1E03 => Self::Put,
            0x1E04 => Self::PutI,
            0x1E05 => Self::WrTmp,
            0x1E06 => Self::Store,
            0x1E07 => Self::LoadG,
            0x1E08 => Self::StoreG,
            0x1E09 => Self::Cas,
            0x1E0A => Self::Llsc,
            0x1E0B => Self::Dirty,
            0x1E0C => Self::Mbe,
            0x1E0D => Self::Exit,
            _ => return Err(IrError::UnknownEnum { what: "IRStmtTag", code }),
        })
    }

    /// Producer-facing name, e.g. `"Ist_WrTmp"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NoOp => "Ist_NoOp",
            Self::IMark => "Ist_IMark",
            Self::AbiHint => "Ist_AbiHint",
            Self::Put => "Ist_Put",
            Self::PutI => "Ist_PutI",
            Self::WrTmp => "Ist_WrTmp",
            Self::Store => "Ist_Store",
            Self::LoadG => "Ist_LoadG",
            Self::StoreG => "Ist_StoreG",
            Self::Cas => "Ist_CAS",
            Self::Llsc => "Ist_LLSC",
            Self::Dirty => "Ist_Dirty",
            Self::Mbe => "Ist_MBE",
            Self::Exit => "Ist_Exit",
        }
    }
}

/// Expression discriminant, as the producer numbers them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u32)]
pub enum IrExprTag {
    /// Pattern-matching binder; internal to the producer's optimizer.
    Binder = 0x1900,
    Get = 0x1901,
    GetI = 0x1902,
    RdTmp = 0x1903,
    Qop = 0x1904,
    Triop = 0x1905,
    Binop = 0x1906,
    Unop = 0x1907,
    Load = 0x1908,
    Const = 0x1909,
    Ite = 0x190A,
    CCall = 0x190B,
    /// Marker argument: a helper call returns a vector through memory.
    VecRet = 0x190C,
    /// Marker argument: pass the guest state pointer to a helper call.
    GsPtr = 0x190D,
}

impl IrExprTag {
    /// Decodes a raw expression tag.
    pub fn from_code(code: u32) -> Result<Self> {
        Ok(match code {
            0x1900 => Self::Binder,
            0x1901 => Self::Get,
            0x1902 => Self::GetI,
            0x1903 => Self::RdTmp,
            0x1904 => Self::Qop,
            0x1905 => Self::Triop,
            0x1906 => Self::Binop,
            0x1907 => Self::Unop,
            0x1908 => Self::Load,
            0x1909 => Self::Const,
            0x190A => Self::Ite,
            0x190B => Self::CCall,
            0x190C => Self::VecRet,
            0x190D => Self::GsPtr,
            _ => return Err(IrError::UnknownEnum { what: "IRExprTag", code }),
        })
    }

    /// Producer-facing name, e.g. `"Iex_RdTmp"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Binder => "Iex_Binder",
            Self::Get => "Iex_Get",
            Self::GetI => "Iex_GetI",
            Self::RdTmp => "Iex_RdTmp",
            Self::Qop => "Iex_Qop",
            Self::Triop => "Iex_Triop",
            Self::Binop => "Iex_Binop",
            Self::Unop => "Iex_Unop",
            Self::Load => "Iex_Load",
            Self::Const => "Iex_Const",
            Self::Ite => "Iex_ITE",
            Self::CCall => "Iex_CCall",
            Self::VecRet => "Iex_VECRET",
            Self::GsPtr => "Iex_GSPTR",
        }
    }
}
