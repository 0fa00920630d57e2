//! Side-effect descriptors for dirty calls, fences, and guarded loads.

use std::fmt;

use crate::{IrError, IrType, Result};

/// How a dirty helper call touches a guest-state region.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u32)]
pub enum IrEffect {
    None = 0x1B00,
    Read = 0x1B01,
    Write = 0x1B02,
    Modify = 0x1B03,
}

impl IrEffect {
    /// Decodes a raw effect code.
    pub fn from_code(code: u32) -> Result<Self> {
        match code {
            0x1B00 => Ok(Self::None),
            0x1B01 => Ok(Self::Read),
            0x1B02 => Ok(Self::Write),
            0x1B03 => Ok(Self::Modify),
            _ => Err(IrError::UnknownEnum { what: "IREffect", code }),
        }
    }
}

impl fmt::Display for IrEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "noFX",
            Self::Read => "RdFX",
            Self::Write => "WrFX",
            Self::Modify => "MoFX",
        })
    }
}

/// Memory bus event raised by an `MBE` statement.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u32)]
pub enum IrMBusEvent {
    Fence = 0x1C00,
    /// Drop any outstanding load-linked reservation.
    CancelReservation = 0x1C01,
}

impl IrMBusEvent {
    /// Decodes a raw bus-event code.
    pub fn from_code(code: u32) -> Result<Self> {
        match code {
            0x1C00 => Ok(Self::Fence),
            0x1C01 => Ok(Self::CancelReservation),
            _ => Err(IrError::UnknownEnum { what: "IRMBusEvent", code }),
        }
    }
}

impl fmt::Display for IrMBusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fence => "Fence",
            Self::CancelReservation => "CancelReservation",
        })
    }
}

/// Widening conversion applied by a guarded load.
///
/// Names keep the producer's spellings; most are not legal CamelCase
/// anyway.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u32)]
pub enum IrLoadGOp {
    ILGop_INVALID = 0x1D00,
    ILGop_IdentV128 = 0x1D01,
    ILGop_Ident64 = 0x1D02,
    ILGop_Ident32 = 0x1D03,
    ILGop_16Uto32 = 0x1D04,
    ILGop_16Sto32 = 0x1D05,
    ILGop_8Uto32 = 0x1D06,
    ILGop_8Sto32 = 0x1D07,
}

impl IrLoadGOp {
    /// Decodes a raw guarded-load conversion code.
    pub fn from_code(code: u32) -> Result<Self> {
        Ok(match code {
            0x1D00 => Self::ILGop_INVALID,
            0x1D01 => Self::ILGop_IdentV128,
            0x1D02 => Self::ILGop_Ident64,
            0x1D03 => Self::ILGop_Ident32,
            0x1D04 => Self::ILGop_16Uto32,
            0x1D05 => Self::ILGop_16Sto32,
            0x1D06 => Self::ILGop_8Uto32,
            0x1D07 => Self::ILGop_8Sto32,
            _ => return Err(IrError::UnknownEnum { what: "IRLoadGOp", code }),
        })
    }

    /// Result and memory-argument types of the conversion.
    #[must_use]
    pub const fn types(self) -> (IrType, IrType) {
        match self {
            Self::ILGop_INVALID => (IrType::Invalid, IrType::Invalid),
            Self::ILGop_IdentV128 => (IrType::V128, IrType::V128),
            Self::ILGop_Ident64 => (IrType::I64, IrType::I64),
            Self::ILGop_Ident32 => (IrType::I32, IrType::I32),
            Self::ILGop_16Uto32 | Self::ILGop_16Sto32 => (IrType::I32, IrType::I16),
            Self::ILGop_8Uto32 | Self::ILGop_8Sto32 => (IrType::I32, IrType::I8),
        }
    }
}

impl fmt::Display for IrLoadGOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ILGop_INVALID => "ILGop_INVALID",
            Self::ILGop_IdentV128 => "IdentV128",
            Self::ILGop_Ident64 => "Ident64",
            Self::ILGop_Ident32 => "Ident32",
            Self::ILGop_16Uto32 => "16Uto32",
            Self::ILGop_16Sto32 => "16Sto32",
            Self::ILGop_8Uto32 => "8Uto32",
            Self::ILGop_8Sto32 => "8Sto32",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_codes() {
        for code in 0x1B00..=0x1B03 {
            assert_eq!(IrEffect::from_code(code).unwrap() as u32, code);
        }
        assert!(IrEffect::from_code(0x1B04).is_err());
        assert_eq!(IrEffect::Modify.to_string(), "MoFX");
    }

    #[test]
    fn test_bus_event_codes() {
        assert_eq!(IrMBusEvent::from_code(0x1C00).unwrap(), IrMBusEvent::Fence);
        assert_eq!(
            IrMBusEvent::from_code(0x1C01).unwrap(),
            IrMBusEvent::CancelReservation
        );
        assert!(IrMBusEvent::from_code(0x1C02).is_err());
    }

    #[test]
    fn test_guarded_load_conversions() {
        for code in 0x1D00..=0x1D07 {
            assert_eq!(IrLoadGOp::from_code(code).unwrap() as u32, code);
        }
        assert!(IrLoadGOp::from_code(0x1D08).is_err());
        assert_eq!(IrLoadGOp::ILGop_16Sto32.types(), (IrType::I32, IrType::I16));
        assert_eq!(IrLoadGOp::ILGop_8Uto32.to_string(), "8Uto32");
    }
}
