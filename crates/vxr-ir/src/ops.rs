//! Operation codes for expression nodes.
//!
//! One flat catalog covering every scalar, vector, and decimal operation
//! the producer can emit inside `Unop`/`Binop`/`Triop`/`Qop` nodes. The
//! numeric values are the producer's published codes and are part of the
//! wire contract, so every member is pinned explicitly. A skew against a
//! given producer build then shows up as a per-member diff, never as a
//! silent renumbering of everything downstream.

use std::fmt;

use crate::{IrError, Result};

macro_rules! ir_ops {
    ($($name:ident = $code:literal),+ $(,)?) => {
        /// Operation code carried by `Unop`/`Binop`/`Triop`/`Qop` nodes.
        ///
        /// Variant names keep the producer's exact spellings, `Iop_`
        /// prefix included, so diagnostics and greps line up with its
        /// headers. Many of the bare names (`8Uto16`, `64HLto128`, ...)
        /// would not be legal identifiers anyway.
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        #[repr(u32)]
        pub enum IrOp {
            $($name = $code,)+
        }

        impl IrOp {
            /// Decodes a raw operation code, rejecting anything outside
            /// the catalog.
            pub fn from_code(code: u32) -> Result<Self> {
                match code {
                    $($code => Ok(Self::$name),)+
                    _ => Err(IrError::UnknownEnum { what: "IROp", code }),
                }
            }

            /// Producer-facing spelling, e.g. `"Iop_Add32"`.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$name => stringify!($name),)+
                }
            }
        }
    };
}

ir_ops! {
    Iop_INVALID = 0x1400,
    // Scalar integer arithmetic.
    Iop_Add8 = 0x1401, Iop_Add16 = 0x1402, Iop_Add32 = 0x1403, Iop_Add64 = 0x1404,
    Iop_Sub8 = 0x1405, Iop_Sub16 = 0x1406, Iop_Sub32 = 0x1407, Iop_Sub64 = 0x1408,
    Iop_Mul8 = 0x1409, Iop_Mul16 = 0x140A, Iop_Mul32 = 0x140B, Iop_Mul64 = 0x140C,
    Iop_Or8 = 0x140D, Iop_Or16 = 0x140E, Iop_Or32 = 0x140F, Iop_Or64 = 0x1410,
    Iop_And8 = 0x1411, Iop_And16 = 0x1412, Iop_And32 = 0x1413, Iop_And64 = 0x1414,
    Iop_Xor8 = 0x1415, Iop_Xor16 = 0x1416, Iop_Xor32 = 0x1417, Iop_Xor64 = 0x1418,
    Iop_Shl8 = 0x1419, Iop_Shl16 = 0x141A, Iop_Shl32 = 0x141B, Iop_Shl64 = 0x141C,
    Iop_Shr8 = 0x141D, Iop_Shr16 = 0x141E, Iop_Shr32 = 0x141F, Iop_Shr64 = 0x1420,
    Iop_Sar8 = 0x1421, Iop_Sar16 = 0x1422, Iop_Sar32 = 0x1423, Iop_Sar64 = 0x1424,
    // Integer comparison.
    Iop_CmpEQ8 = 0x1425, Iop_CmpEQ16 = 0x1426, Iop_CmpEQ32 = 0x1427, Iop_CmpEQ64 = 0x1428,
    Iop_CmpNE8 = 0x1429, Iop_CmpNE16 = 0x142A, Iop_CmpNE32 = 0x142B, Iop_CmpNE64 = 0x142C,
    Iop_Not8 = 0x142D, Iop_Not16 = 0x142E, Iop_Not32 = 0x142F, Iop_Not64 = 0x1430,
    // Comparison variants carrying instrumentation hints.
    Iop_CasCmpEQ8 = 0x1431, Iop_CasCmpEQ16 = 0x1432, Iop_CasCmpEQ32 = 0x1433, Iop_CasCmpEQ64 = 0x1434,
    Iop_CasCmpNE8 = 0x1435, Iop_CasCmpNE16 = 0x1436, Iop_CasCmpNE32 = 0x1437, Iop_CasCmpNE64 = 0x1438,
    Iop_ExpCmpNE8 = 0x1439, Iop_ExpCmpNE16 = 0x143A, Iop_ExpCmpNE32 = 0x143B, Iop_ExpCmpNE64 = 0x143C,
    // Widening multiplies.
    Iop_MullS8 = 0x143D, Iop_MullS16 = 0x143E, Iop_MullS32 = 0x143F, Iop_MullS64 = 0x1440,
    Iop_MullU8 = 0x1441, Iop_MullU16 = 0x1442, Iop_MullU32 = 0x1443, Iop_MullU64 = 0x1444,
    // Counting leading/trailing zeroes.
    Iop_Clz64 = 0x1445, Iop_Clz32 = 0x1446, Iop_Ctz64 = 0x1447, Iop_Ctz32 = 0x1448,
    // Ordering comparisons.
    Iop_CmpLT32S = 0x1449, Iop_CmpLT64S = 0x144A, Iop_CmpLE32S = 0x144B, Iop_CmpLE64S = 0x144C,
    Iop_CmpLT32U = 0x144D, Iop_CmpLT64U = 0x144E, Iop_CmpLE32U = 0x144F, Iop_CmpLE64U = 0x1450,
    Iop_CmpNEZ8 = 0x1451, Iop_CmpNEZ16 = 0x1452, Iop_CmpNEZ32 = 0x1453, Iop_CmpNEZ64 = 0x1454,
    Iop_CmpwNEZ32 = 0x1455, Iop_CmpwNEZ64 = 0x1456,
    Iop_Left8 = 0x1457, Iop_Left16 = 0x1458, Iop_Left32 = 0x1459, Iop_Left64 = 0x145A,
    Iop_Max32U = 0x145B,
    // Three-way comparisons.
    Iop_CmpORD32U = 0x145C, Iop_CmpORD64U = 0x145D, Iop_CmpORD32S = 0x145E, Iop_CmpORD64S = 0x145F,
    // Division.
    Iop_DivU32 = 0x1460, Iop_DivS32 = 0x1461, Iop_DivU64 = 0x1462, Iop_DivS64 = 0x1463,
    Iop_DivU64E = 0x1464, Iop_DivS64E = 0x1465, Iop_DivU32E = 0x1466, Iop_DivS32E = 0x1467,
    Iop_DivModU64to32 = 0x1468, Iop_DivModS64to32 = 0x1469,
    Iop_DivModU128to64 = 0x146A, Iop_DivModS128to64 = 0x146B,
    Iop_DivModS64to64 = 0x146C,
    // Widening conversions.
    Iop_8Uto16 = 0x146D, Iop_8Uto32 = 0x146E, Iop_8Uto64 = 0x146F, Iop_16Uto32 = 0x1470, Iop_16Uto64 = 0x1471, Iop_32Uto64 = 0x1472,
    Iop_8Sto16 = 0x1473, Iop_8Sto32 = 0x1474, Iop_8Sto64 = 0x1475, Iop_16Sto32 = 0x1476, Iop_16Sto64 = 0x1477, Iop_32Sto64 = 0x1478,
    // Narrowing conversions and half splits/joins.
    Iop_64to8 = 0x1479, Iop_32to8 = 0x147A, Iop_64to16 = 0x147B,
    Iop_16to8 = 0x147C, Iop_16HIto8 = 0x147D, Iop_8HLto16 = 0x147E,
    Iop_32to16 = 0x147F, Iop_32HIto16 = 0x1480, Iop_16HLto32 = 0x1481,
    Iop_64to32 = 0x1482, Iop_64HIto32 = 0x1483, Iop_32HLto64 = 0x1484,
    Iop_128to64 = 0x1485, Iop_128HIto64 = 0x1486, Iop_64HLto128 = 0x1487,
    // 1-bit operations.
    Iop_Not1 = 0x1488, Iop_32to1 = 0x1489, Iop_64to1 = 0x148A,
    Iop_1Uto8 = 0x148B, Iop_1Uto32 = 0x148C, Iop_1Uto64 = 0x148D,
    Iop_1Sto8 = 0x148E, Iop_1Sto16 = 0x148F, Iop_1Sto32 = 0x1490, Iop_1Sto64 = 0x1491,
    // Scalar floating point, with explicit rounding-mode operands.
    Iop_AddF64 = 0x1492, Iop_SubF64 = 0x1493, Iop_MulF64 = 0x1494, Iop_DivF64 = 0x1495,
    Iop_AddF32 = 0x1496, Iop_SubF32 = 0x1497, Iop_MulF32 = 0x1498, Iop_DivF32 = 0x1499,
    Iop_AddF64r32 = 0x149A, Iop_SubF64r32 = 0x149B, Iop_MulF64r32 = 0x149C, Iop_DivF64r32 = 0x149D,
    Iop_NegF64 = 0x149E, Iop_AbsF64 = 0x149F,
    Iop_NegF32 = 0x14A0, Iop_AbsF32 = 0x14A1,
    Iop_SqrtF64 = 0x14A2, Iop_SqrtF32 = 0x14A3,
    Iop_CmpF64 = 0x14A4, Iop_CmpF32 = 0x14A5, Iop_CmpF128 = 0x14A6,
    // Int/FP conversions.
    Iop_F64toI16S = 0x14A7, Iop_F64toI32S = 0x14A8, Iop_F64toI64S = 0x14A9, Iop_F64toI64U = 0x14AA,
    Iop_F64toI32U = 0x14AB,
    Iop_I32StoF64 = 0x14AC, Iop_I64StoF64 = 0x14AD, Iop_I64UtoF64 = 0x14AE, Iop_I64UtoF32 = 0x14AF,
    Iop_I32UtoF32 = 0x14B0, Iop_I32UtoF64 = 0x14B1,
    Iop_F32toI32S = 0x14B2, Iop_F32toI64S = 0x14B3, Iop_F32toI32U = 0x14B4, Iop_F32toI64U = 0x14B5,
    Iop_I32StoF32 = 0x14B6, Iop_I64StoF32 = 0x14B7,
    Iop_F32toF64 = 0x14B8, Iop_F64toF32 = 0x14B9,
    // Bit-pattern reinterpretation.
    Iop_ReinterpF64asI64 = 0x14BA, Iop_ReinterpI64asF64 = 0x14BB,
    Iop_ReinterpF32asI32 = 0x14BC, Iop_ReinterpI32asF32 = 0x14BD,
    // 128-bit floating point.
    Iop_F64HLtoF128 = 0x14BE, Iop_F128HItoF64 = 0x14BF, Iop_F128LOtoF64 = 0x14C0,
    Iop_AddF128 = 0x14C1, Iop_SubF128 = 0x14C2, Iop_MulF128 = 0x14C3, Iop_DivF128 = 0x14C4,
    Iop_NegF128 = 0x14C5, Iop_AbsF128 = 0x14C6,
    Iop_SqrtF128 = 0x14C7,
    Iop_I32StoF128 = 0x14C8, Iop_I64StoF128 = 0x14C9, Iop_I32UtoF128 = 0x14CA, Iop_I64UtoF128 = 0x14CB,
    Iop_F32toF128 = 0x14CC, Iop_F64toF128 = 0x14CD,
    Iop_F128toI32S = 0x14CE, Iop_F128toI64S = 0x14CF, Iop_F128toI32U = 0x14D0, Iop_F128toI64U = 0x14D1,
    Iop_F128toF64 = 0x14D2, Iop_F128toF32 = 0x14D3,
    // x86/amd64 transcendental and remainder specials.
    Iop_AtanF64 = 0x14D4, Iop_Yl2xF64 = 0x14D5, Iop_Yl2xp1F64 = 0x14D6,
    Iop_PRemF64 = 0x14D7, Iop_PRemC3210F64 = 0x14D8, Iop_PRem1F64 = 0x14D9, Iop_PRem1C3210F64 = 0x14DA,
    Iop_ScaleF64 = 0x14DB,
    Iop_SinF64 = 0x14DC, Iop_CosF64 = 0x14DD, Iop_TanF64 = 0x14DE, Iop_2xm1F64 = 0x14DF,
    Iop_RoundF64toInt = 0x14E0, Iop_RoundF32toInt = 0x14E1,
    // Fused multiply-add/sub.
    Iop_MAddF32 = 0x14E2, Iop_MSubF32 = 0x14E3,
    Iop_MAddF64 = 0x14E4, Iop_MSubF64 = 0x14E5,
    Iop_MAddF64r32 = 0x14E6, Iop_MSubF64r32 = 0x14E7,
    // ppc rounding specials.
    Iop_RSqrtEst5GoodF64 = 0x14E8,
    Iop_RoundF64toF64_NEAREST = 0x14E9, Iop_RoundF64toF64_NegINF = 0x14EA, Iop_RoundF64toF64_PosINF = 0x14EB, Iop_RoundF64toF64_ZERO = 0x14EC,
    Iop_TruncF64asF32 = 0x14ED,
    Iop_RoundF64toF32 = 0x14EE,
    // arm64 reciprocal exponent.
    Iop_RecpExpF64 = 0x14EF, Iop_RecpExpF32 = 0x14F0,
    // IEEE 754-2008 min/max.
    Iop_MaxNumF64 = 0x14F1, Iop_MinNumF64 = 0x14F2, Iop_MaxNumF32 = 0x14F3, Iop_MinNumF32 = 0x14F4,
    // 16-bit scalar FP conversions.
    Iop_F16toF64 = 0x14F5, Iop_F64toF16 = 0x14F6,
    Iop_F16toF32 = 0x14F7, Iop_F32toF16 = 0x14F8,
    // 32-bit SIMD integer (two 16-bit or four 8-bit lanes).
    Iop_QAdd32S = 0x14F9, Iop_QSub32S = 0x14FA,
    Iop_Add16x2 = 0x14FB, Iop_Sub16x2 = 0x14FC,
    Iop_QAdd16Sx2 = 0x14FD, Iop_QAdd16Ux2 = 0x14FE,
    Iop_QSub16Sx2 = 0x14FF, Iop_QSub16Ux2 = 0x1500,
    Iop_HAdd16Ux2 = 0x1501, Iop_HAdd16Sx2 = 0x1502,
    Iop_HSub16Ux2 = 0x1503, Iop_HSub16Sx2 = 0x1504,
    Iop_Add8x4 = 0x1505, Iop_Sub8x4 = 0x1506,
    Iop_QAdd8Sx4 = 0x1507, Iop_QAdd8Ux4 = 0x1508,
    Iop_QSub8Sx4 = 0x1509, Iop_QSub8Ux4 = 0x150A,
    Iop_HAdd8Ux4 = 0x150B, Iop_HAdd8Sx4 = 0x150C,
    Iop_HSub8Ux4 = 0x150D, Iop_HSub8Sx4 = 0x150E,
    Iop_Sad8Ux4 = 0x150F,
    Iop_CmpNEZ16x2 = 0x1510, Iop_CmpNEZ8x4 = 0x1511,
    // 64-bit SIMD FP.
    Iop_I32UtoFx2 = 0x1512, Iop_I32StoFx2 = 0x1513,
    Iop_FtoI32Ux2_RZ = 0x1514, Iop_FtoI32Sx2_RZ = 0x1515,
    Iop_F32ToFixed32Ux2_RZ = 0x1516, Iop_F32ToFixed32Sx2_RZ = 0x1517,
    Iop_Fixed32UToF32x2_RN = 0x1518, Iop_Fixed32SToF32x2_RN = 0x1519,
    Iop_Max32Fx2 = 0x151A, Iop_Min32Fx2 = 0x151B,
    Iop_PwMax32Fx2 = 0x151C, Iop_PwMin32Fx2 = 0x151D,
    Iop_CmpEQ32Fx2 = 0x151E, Iop_CmpGT32Fx2 = 0x151F, Iop_CmpGE32Fx2 = 0x1520,
    Iop_RecipEst32Fx2 = 0x1521, Iop_RecipStep32Fx2 = 0x1522,
    Iop_RSqrtEst32Fx2 = 0x1523, Iop_RSqrtStep32Fx2 = 0x1524,
    Iop_Neg32Fx2 = 0x1525, Iop_Abs32Fx2 = 0x1526,
    // 64-bit SIMD integer.
    Iop_CmpNEZ8x8 = 0x1527, Iop_CmpNEZ16x4 = 0x1528, Iop_CmpNEZ32x2 = 0x1529,
    Iop_Add8x8 = 0x152A, Iop_Add16x4 = 0x152B, Iop_Add32x2 = 0x152C,
    Iop_QAdd8Ux8 = 0x152D, Iop_QAdd16Ux4 = 0x152E, Iop_QAdd32Ux2 = 0x152F, Iop_QAdd64Ux1 = 0x1530,
    Iop_QAdd8Sx8 = 0x1531, Iop_QAdd16Sx4 = 0x1532, Iop_QAdd32Sx2 = 0x1533, Iop_QAdd64Sx1 = 0x1534,
    Iop_PwAdd8x8 = 0x1535, Iop_PwAdd16x4 = 0x1536, Iop_PwAdd32x2 = 0x1537,
    Iop_PwMax8Sx8 = 0x1538, Iop_PwMax16Sx4 = 0x1539, Iop_PwMax32Sx2 = 0x153A,
    Iop_PwMax8Ux8 = 0x153B, Iop_PwMax16Ux4 = 0x153C, Iop_PwMax32Ux2 = 0x153D,
    Iop_PwMin8Sx8 = 0x153E, Iop_PwMin16Sx4 = 0x153F, Iop_PwMin32Sx2 = 0x1540,
    Iop_PwMin8Ux8 = 0x1541, Iop_PwMin16Ux4 = 0x1542, Iop_PwMin32Ux2 = 0x1543,
    Iop_PwAddL8Ux8 = 0x1544, Iop_PwAddL16Ux4 = 0x1545, Iop_PwAddL32Ux2 = 0x1546,
    Iop_PwAddL8Sx8 = 0x1547, Iop_PwAddL16Sx4 = 0x1548, Iop_PwAddL32Sx2 = 0x1549,
    Iop_Sub8x8 = 0x154A, Iop_Sub16x4 = 0x154B, Iop_Sub32x2 = 0x154C,
    Iop_QSub8Ux8 = 0x154D, Iop_QSub16Ux4 = 0x154E, Iop_QSub32Ux2 = 0x154F, Iop_QSub64Ux1 = 0x1550,
    Iop_QSub8Sx8 = 0x1551, Iop_QSub16Sx4 = 0x1552, Iop_QSub32Sx2 = 0x1553, Iop_QSub64Sx1 = 0x1554,
    Iop_Abs8x8 = 0x1555, Iop_Abs16x4 = 0x1556, Iop_Abs32x2 = 0x1557,
    Iop_Mul8x8 = 0x1558, Iop_Mul16x4 = 0x1559, Iop_Mul32x2 = 0x155A,
    Iop_Mul32Fx2 = 0x155B,
    Iop_MulHi16Ux4 = 0x155C, Iop_MulHi16Sx4 = 0x155D,
    Iop_PolynomialMul8x8 = 0x155E,
    Iop_QDMulHi16Sx4 = 0x155F, Iop_QDMulHi32Sx2 = 0x1560,
    Iop_QRDMulHi16Sx4 = 0x1561, Iop_QRDMulHi32Sx2 = 0x1562,
    Iop_Avg8Ux8 = 0x1563, Iop_Avg16Ux4 = 0x1564,
    Iop_Max8Sx8 = 0x1565, Iop_Max16Sx4 = 0x1566, Iop_Max32Sx2 = 0x1567,
    Iop_Max8Ux8 = 0x1568, Iop_Max16Ux4 = 0x1569, Iop_Max32Ux2 = 0x156A,
    Iop_Min8Sx8 = 0x156B, Iop_Min16Sx4 = 0x156C, Iop_Min32Sx2 = 0x156D,
    Iop_Min8Ux8 = 0x156E, Iop_Min16Ux4 = 0x156F, Iop_Min32Ux2 = 0x1570,
    Iop_CmpEQ8x8 = 0x1571, Iop_CmpEQ16x4 = 0x1572, Iop_CmpEQ32x2 = 0x1573,
    Iop_CmpGT8Ux8 = 0x1574, Iop_CmpGT16Ux4 = 0x1575, Iop_CmpGT32Ux2 = 0x1576,
    Iop_CmpGT8Sx8 = 0x1577, Iop_CmpGT16Sx4 = 0x1578, Iop_CmpGT32Sx2 = 0x1579,
    Iop_Cnt8x8 = 0x157A,
    Iop_Clz8x8 = 0x157B, Iop_Clz16x4 = 0x157C, Iop_Clz32x2 = 0x157D,
    Iop_Cls8x8 = 0x157E, Iop_Cls16x4 = 0x157F, Iop_Cls32x2 = 0x1580,
    Iop_Shl8x8 = 0x1581, Iop_Shl16x4 = 0x1582, Iop_Shl32x2 = 0x1583,
    Iop_Shr8x8 = 0x1584, Iop_Shr16x4 = 0x1585, Iop_Shr32x2 = 0x1586,
    Iop_Sar8x8 = 0x1587, Iop_Sar16x4 = 0x1588, Iop_Sar32x2 = 0x1589,
    Iop_Sal8x8 = 0x158A, Iop_Sal16x4 = 0x158B, Iop_Sal32x2 = 0x158C, Iop_Sal64x1 = 0x158D,
    Iop_ShlN8x8 = 0x158E, Iop_ShlN16x4 = 0x158F, Iop_ShlN32x2 = 0x1590,
    Iop_ShrN8x8 = 0x1591, Iop_ShrN16x4 = 0x1592, Iop_ShrN32x2 = 0x1593,
    Iop_SarN8x8 = 0x1594, Iop_SarN16x4 = 0x1595, Iop_SarN32x2 = 0x1596,
    Iop_QShl8x8 = 0x1597, Iop_QShl16x4 = 0x1598, Iop_QShl32x2 = 0x1599, Iop_QShl64x1 = 0x159A,
    Iop_QSal8x8 = 0x159B, Iop_QSal16x4 = 0x159C, Iop_QSal32x2 = 0x159D, Iop_QSal64x1 = 0x159E,
    Iop_QShlNsatSU8x8 = 0x159F, Iop_QShlNsatSU16x4 = 0x15A0, Iop_QShlNsatSU32x2 = 0x15A1, Iop_QShlNsatSU64x1 = 0x15A2,
    Iop_QShlNsatUU8x8 = 0x15A3, Iop_QShlNsatUU16x4 = 0x15A4, Iop_QShlNsatUU32x2 = 0x15A5, Iop_QShlNsatUU64x1 = 0x15A6,
    Iop_QShlNsatSS8x8 = 0x15A7, Iop_QShlNsatSS16x4 = 0x15A8, Iop_QShlNsatSS32x2 = 0x15A9, Iop_QShlNsatSS64x1 = 0x15AA,
    Iop_QNarrowBin16Sto8Ux8 = 0x15AB,
    Iop_QNarrowBin16Sto8Sx8 = 0x15AC, Iop_QNarrowBin32Sto16Sx4 = 0x15AD,
    Iop_NarrowBin16to8x8 = 0x15AE, Iop_NarrowBin32to16x4 = 0x15AF,
    Iop_InterleaveHI8x8 = 0x15B0, Iop_InterleaveHI16x4 = 0x15B1, Iop_InterleaveHI32x2 = 0x15B2,
    Iop_InterleaveLO8x8 = 0x15B3, Iop_InterleaveLO16x4 = 0x15B4, Iop_InterleaveLO32x2 = 0x15B5,
    Iop_InterleaveOddLanes8x8 = 0x15B6, Iop_InterleaveEvenLanes8x8 = 0x15B7,
    Iop_InterleaveOddLanes16x4 = 0x15B8, Iop_InterleaveEvenLanes16x4 = 0x15B9,
    Iop_CatOddLanes8x8 = 0x15BA, Iop_CatOddLanes16x4 = 0x15BB,
    Iop_CatEvenLanes8x8 = 0x15BC, Iop_CatEvenLanes16x4 = 0x15BD,
    Iop_GetElem8x8 = 0x15BE, Iop_GetElem16x4 = 0x15BF, Iop_GetElem32x2 = 0x15C0,
    Iop_SetElem8x8 = 0x15C1, Iop_SetElem16x4 = 0x15C2, Iop_SetElem32x2 = 0x15C3,
    Iop_Dup8x8 = 0x15C4, Iop_Dup16x4 = 0x15C5, Iop_Dup32x2 = 0x15C6,
    Iop_Slice64 = 0x15C7,
    Iop_Reverse8sIn16_x4 = 0x15C8,
    Iop_Reverse8sIn32_x2 = 0x15C9, Iop_Reverse16sIn32_x2 = 0x15CA,
    Iop_Reverse8sIn64_x1 = 0x15CB, Iop_Reverse16sIn64_x1 = 0x15CC, Iop_Reverse32sIn64_x1 = 0x15CD,
    Iop_Perm8x8 = 0x15CE,
    Iop_GetMSBs8x8 = 0x15CF,
    Iop_RecipEst32Ux2 = 0x15D0, Iop_RSqrtEst32Ux2 = 0x15D1,
    // Decimal floating point.
    Iop_AddD64 = 0x15D2, Iop_SubD64 = 0x15D3, Iop_MulD64 = 0x15D4, Iop_DivD64 = 0x15D5,
    Iop_AddD128 = 0x15D6, Iop_SubD128 = 0x15D7, Iop_MulD128 = 0x15D8, Iop_DivD128 = 0x15D9,
    Iop_ShlD64 = 0x15DA, Iop_ShrD64 = 0x15DB,
    Iop_ShlD128 = 0x15DC, Iop_ShrD128 = 0x15DD,
    Iop_D32toD64 = 0x15DE,
    Iop_D64toD128 = 0x15DF,
    Iop_I32StoD128 = 0x15E0, Iop_I32UtoD128 = 0x15E1,
    Iop_I64StoD128 = 0x15E2, Iop_I64UtoD128 = 0x15E3,
    Iop_D64toD32 = 0x15E4,
    Iop_D128toD64 = 0x15E5,
    Iop_I32StoD64 = 0x15E6, Iop_I32UtoD64 = 0x15E7,
    Iop_I64StoD64 = 0x15E8, Iop_I64UtoD64 = 0x15E9,
    Iop_D64toI32S = 0x15EA, Iop_D64toI32U = 0x15EB,
    Iop_D64toI64S = 0x15EC, Iop_D64toI64U = 0x15ED,
    Iop_D128toI32S = 0x15EE, Iop_D128toI32U = 0x15EF,
    Iop_D128toI64S = 0x15F0, Iop_D128toI64U = 0x15F1,
    Iop_F32toD32 = 0x15F2, Iop_F32toD64 = 0x15F3, Iop_F32toD128 = 0x15F4,
    Iop_F64toD32 = 0x15F5, Iop_F64toD64 = 0x15F6, Iop_F64toD128 = 0x15F7,
    Iop_F128toD32 = 0x15F8, Iop_F128toD64 = 0x15F9, Iop_F128toD128 = 0x15FA,
    Iop_D32toF32 = 0x15FB, Iop_D32toF64 = 0x15FC, Iop_D32toF128 = 0x15FD,
    Iop_D64toF32 = 0x15FE, Iop_D64toF64 = 0x15FF, Iop_D64toF128 = 0x1600,
    Iop_D128toF32 = 0x1601, Iop_D128toF64 = 0x1602, Iop_D128toF128 = 0x1603,
    Iop_RoundD64toInt = 0x1604, Iop_RoundD128toInt = 0x1605,
    Iop_CmpD64 = 0x1606, Iop_CmpD128 = 0x1607,
    Iop_CmpExpD64 = 0x1608, Iop_CmpExpD128 = 0x1609,
    Iop_QuantizeD64 = 0x160A, Iop_QuantizeD128 = 0x160B,
    Iop_SignificanceRoundD64 = 0x160C, Iop_SignificanceRoundD128 = 0x160D,
    Iop_ExtractExpD64 = 0x160E, Iop_ExtractExpD128 = 0x160F,
    Iop_ExtractSigD64 = 0x1610, Iop_ExtractSigD128 = 0x1611,
    Iop_InsertExpD64 = 0x1612, Iop_InsertExpD128 = 0x1613,
    Iop_D64HLtoD128 = 0x1614, Iop_D128HItoD64 = 0x1615, Iop_D128LOtoD64 = 0x1616,
    Iop_DPBtoBCD = 0x1617, Iop_BCDtoDPB = 0x1618,
    Iop_BCDAdd = 0x1619, Iop_BCDSub = 0x161A,
    Iop_I128StoBCD128 = 0x161B, Iop_BCD128toI128S = 0x161C,
    Iop_ReinterpI64asD64 = 0x161D, Iop_ReinterpD64asI64 = 0x161E,
    // 128-bit SIMD FP: four 32-bit lanes.
    Iop_Add32Fx4 = 0x161F, Iop_Sub32Fx4 = 0x1620, Iop_Mul32Fx4 = 0x1621, Iop_Div32Fx4 = 0x1622,
    Iop_Max32Fx4 = 0x1623, Iop_Min32Fx4 = 0x1624,
    Iop_Add32Fx2 = 0x1625, Iop_Sub32Fx2 = 0x1626,
    Iop_CmpEQ32Fx4 = 0x1627, Iop_CmpLT32Fx4 = 0x1628, Iop_CmpLE32Fx4 = 0x1629, Iop_CmpUN32Fx4 = 0x162A,
    Iop_CmpGT32Fx4 = 0x162B, Iop_CmpGE32Fx4 = 0x162C,
    Iop_PwMax32Fx4 = 0x162D, Iop_PwMin32Fx4 = 0x162E,
    Iop_Abs32Fx4 = 0x162F,
    Iop_Neg32Fx4 = 0x1630,
    Iop_Sqrt32Fx4 = 0x1631,
    Iop_RecipEst32Fx4 = 0x1632, Iop_RecipStep32Fx4 = 0x1633,
    Iop_RSqrtEst32Fx4 = 0x1634, Iop_RSqrtStep32Fx4 = 0x1635,
    Iop_I32UtoFx4 = 0x1636, Iop_I32StoFx4 = 0x1637,
    Iop_FtoI32Ux4_RZ = 0x1638, Iop_FtoI32Sx4_RZ = 0x1639,
    Iop_QFtoI32Ux4_RZ = 0x163A, Iop_QFtoI32Sx4_RZ = 0x163B,
    Iop_RoundF32x4_RM = 0x163C, Iop_RoundF32x4_RP = 0x163D,
    Iop_RoundF32x4_RN = 0x163E, Iop_RoundF32x4_RZ = 0x163F,
    Iop_F32ToFixed32Ux4_RZ = 0x1640, Iop_F32ToFixed32Sx4_RZ = 0x1641,
    Iop_Fixed32UToF32x4_RN = 0x1642, Iop_Fixed32SToF32x4_RN = 0x1643,
    Iop_F32toF16x4 = 0x1644, Iop_F16toF32x4 = 0x1645,
    // 128-bit SIMD FP: lowest-lane-only 32-bit.
    Iop_Add32F0x4 = 0x1646, Iop_Sub32F0x4 = 0x1647, Iop_Mul32F0x4 = 0x1648, Iop_Div32F0x4 = 0x1649,
    Iop_Max32F0x4 = 0x164A, Iop_Min32F0x4 = 0x164B,
    Iop_CmpEQ32F0x4 = 0x164C, Iop_CmpLT32F0x4 = 0x164D, Iop_CmpLE32F0x4 = 0x164E, Iop_CmpUN32F0x4 = 0x164F,
    Iop_RecipEst32F0x4 = 0x1650, Iop_Sqrt32F0x4 = 0x1651, Iop_RSqrtEst32F0x4 = 0x1652,
    // 128-bit SIMD FP: two 64-bit lanes.
    Iop_Add64Fx2 = 0x1653, Iop_Sub64Fx2 = 0x1654, Iop_Mul64Fx2 = 0x1655, Iop_Div64Fx2 = 0x1656,
    Iop_Max64Fx2 = 0x1657, Iop_Min64Fx2 = 0x1658,
    Iop_CmpEQ64Fx2 = 0x1659, Iop_CmpLT64Fx2 = 0x165A, Iop_CmpLE64Fx2 = 0x165B, Iop_CmpUN64Fx2 = 0x165C,
    Iop_Abs64Fx2 = 0x165D, Iop_Neg64Fx2 = 0x165E,
    Iop_Sqrt64Fx2 = 0x165F,
    Iop_RecipEst64Fx2 = 0x1660, Iop_RecipStep64Fx2 = 0x1661,
    Iop_RSqrtEst64Fx2 = 0x1662, Iop_RSqrtStep64Fx2 = 0x1663,
    // 128-bit SIMD FP: lowest-lane-only 64-bit.
    Iop_Add64F0x2 = 0x1664, Iop_Sub64F0x2 = 0x1665, Iop_Mul64F0x2 = 0x1666, Iop_Div64F0x2 = 0x1667,
    Iop_Max64F0x2 = 0x1668, Iop_Min64F0x2 = 0x1669,
    Iop_CmpEQ64F0x2 = 0x166A, Iop_CmpLT64F0x2 = 0x166B, Iop_CmpLE64F0x2 = 0x166C, Iop_CmpUN64F0x2 = 0x166D,
    Iop_Sqrt64F0x2 = 0x166E,
    // Pack/unpack between scalars and V128.
    Iop_V128to64 = 0x166F, Iop_V128HIto64 = 0x1670, Iop_64HLtoV128 = 0x1671,
    Iop_64UtoV128 = 0x1672, Iop_SetV128lo64 = 0x1673,
    Iop_ZeroHI64ofV128 = 0x1674, Iop_ZeroHI96ofV128 = 0x1675, Iop_ZeroHI112ofV128 = 0x1676, Iop_ZeroHI120ofV128 = 0x1677,
    Iop_32UtoV128 = 0x1678, Iop_V128to32 = 0x1679, Iop_SetV128lo32 = 0x167A,
    // 128-bit SIMD integer.
    Iop_NotV128 = 0x167B,
    Iop_AndV128 = 0x167C, Iop_OrV128 = 0x167D, Iop_XorV128 = 0x167E,
    Iop_ShlV128 = 0x167F, Iop_ShrV128 = 0x1680,
    Iop_CmpNEZ8x16 = 0x1681, Iop_CmpNEZ16x8 = 0x1682, Iop_CmpNEZ32x4 = 0x1683, Iop_CmpNEZ64x2 = 0x1684,
    Iop_Add8x16 = 0x1685, Iop_Add16x8 = 0x1686, Iop_Add32x4 = 0x1687, Iop_Add64x2 = 0x1688,
    Iop_QAdd8Ux16 = 0x1689, Iop_QAdd16Ux8 = 0x168A, Iop_QAdd32Ux4 = 0x168B, Iop_QAdd64Ux2 = 0x168C,
    Iop_QAdd8Sx16 = 0x168D, Iop_QAdd16Sx8 = 0x168E, Iop_QAdd32Sx4 = 0x168F, Iop_QAdd64Sx2 = 0x1690,
    Iop_QAddExtUSsatSS8x16 = 0x1691, Iop_QAddExtUSsatSS16x8 = 0x1692, Iop_QAddExtUSsatSS32x4 = 0x1693, Iop_QAddExtUSsatSS64x2 = 0x1694,
    Iop_QAddExtSUsatUU8x16 = 0x1695, Iop_QAddExtSUsatUU16x8 = 0x1696, Iop_QAddExtSUsatUU32x4 = 0x1697, Iop_QAddExtSUsatUU64x2 = 0x1698,
    Iop_Sub8x16 = 0x1699, Iop_Sub16x8 = 0x169A, Iop_Sub32x4 = 0x169B, Iop_Sub64x2 = 0x169C,
    Iop_QSub8Ux16 = 0x169D, Iop_QSub16Ux8 = 0x169E, Iop_QSub32Ux4 = 0x169F, Iop_QSub64Ux2 = 0x16A0,
    Iop_QSub8Sx16 = 0x16A1, Iop_QSub16Sx8 = 0x16A2, Iop_QSub32Sx4 = 0x16A3, Iop_QSub64Sx2 = 0x16A4,
    Iop_Mul8x16 = 0x16A5, Iop_Mul16x8 = 0x16A6, Iop_Mul32x4 = 0x16A7,
    Iop_MulHi16Ux8 = 0x16A8, Iop_MulHi32Ux4 = 0x16A9,
    Iop_MulHi16Sx8 = 0x16AA, Iop_MulHi32Sx4 = 0x16AB,
    Iop_MullEven8Ux16 = 0x16AC, Iop_MullEven16Ux8 = 0x16AD, Iop_MullEven32Ux4 = 0x16AE,
    Iop_MullEven8Sx16 = 0x16AF, Iop_MullEven16Sx8 = 0x16B0, Iop_MullEven32Sx4 = 0x16B1,
    Iop_Mull8Ux8 = 0x16B2, Iop_Mull8Sx8 = 0x16B3,
    Iop_Mull16Ux4 = 0x16B4, Iop_Mull16Sx4 = 0x16B5,
    Iop_Mull32Ux2 = 0x16B6, Iop_Mull32Sx2 = 0x16B7,
    Iop_QDMull16Sx4 = 0x16B8, Iop_QDMull32Sx2 = 0x16B9,
    Iop_QDMulHi16Sx8 = 0x16BA, Iop_QDMulHi32Sx4 = 0x16BB,
    Iop_QRDMulHi16Sx8 = 0x16BC, Iop_QRDMulHi32Sx4 = 0x16BD,
    Iop_PolynomialMul8x16 = 0x16BE,
    Iop_PolynomialMull8x8 = 0x16BF,
    Iop_PolynomialMulAdd8x16 = 0x16C0, Iop_PolynomialMulAdd16x8 = 0x16C1,
    Iop_PolynomialMulAdd32x4 = 0x16C2, Iop_PolynomialMulAdd64x2 = 0x16C3,
    Iop_PwAdd8x16 = 0x16C4, Iop_PwAdd16x8 = 0x16C5, Iop_PwAdd32x4 = 0x16C6,
    Iop_PwAdd32Fx2 = 0x16C7,
    Iop_PwAddL8Ux16 = 0x16C8, Iop_PwAddL16Ux8 = 0x16C9, Iop_PwAddL32Ux4 = 0x16CA,
    Iop_PwAddL8Sx16 = 0x16CB, Iop_PwAddL16Sx8 = 0x16CC, Iop_PwAddL32Sx4 = 0x16CD,
    Iop_Abs8x16 = 0x16CE, Iop_Abs16x8 = 0x16CF, Iop_Abs32x4 = 0x16D0, Iop_Abs64x2 = 0x16D1,
    Iop_Avg8Ux16 = 0x16D2, Iop_Avg16Ux8 = 0x16D3, Iop_Avg32Ux4 = 0x16D4,
    Iop_Avg8Sx16 = 0x16D5, Iop_Avg16Sx8 = 0x16D6, Iop_Avg32Sx4 = 0x16D7,
    Iop_Max8Sx16 = 0x16D8, Iop_Max16Sx8 = 0x16D9, Iop_Max32Sx4 = 0x16DA, Iop_Max64Sx2 = 0x16DB,
    Iop_Max8Ux16 = 0x16DC, Iop_Max16Ux8 = 0x16DD, Iop_Max32Ux4 = 0x16DE, Iop_Max64Ux2 = 0x16DF,
    Iop_Min8Sx16 = 0x16E0, Iop_Min16Sx8 = 0x16E1, Iop_Min32Sx4 = 0x16E2, Iop_Min64Sx2 = 0x16E3,
    Iop_Min8Ux16 = 0x16E4, Iop_Min16Ux8 = 0x16E5, Iop_Min32Ux4 = 0x16E6, Iop_Min64Ux2 = 0x16E7,
    Iop_CmpEQ8x16 = 0x16E8, Iop_CmpEQ16x8 = 0x16E9, Iop_CmpEQ32x4 = 0x16EA, Iop_CmpEQ64x2 = 0x16EB,
    Iop_CmpGT8Sx16 = 0x16EC, Iop_CmpGT16Sx8 = 0x16ED, Iop_CmpGT32Sx4 = 0x16EE, Iop_CmpGT64Sx2 = 0x16EF,
    Iop_CmpGT8Ux16 = 0x16F0, Iop_CmpGT16Ux8 = 0x16F1, Iop_CmpGT32Ux4 = 0x16F2, Iop_CmpGT64Ux2 = 0x16F3,
    Iop_Cnt8x16 = 0x16F4,
    Iop_Clz8x16 = 0x16F5, Iop_Clz16x8 = 0x16F6, Iop_Clz32x4 = 0x16F7,
    Iop_Cls8x16 = 0x16F8, Iop_Cls16x8 = 0x16F9, Iop_Cls32x4 = 0x16FA,
    Iop_Shl8x16 = 0x16FB, Iop_Shl16x8 = 0x16FC, Iop_Shl32x4 = 0x16FD, Iop_Shl64x2 = 0x16FE,
    Iop_Shr8x16 = 0x16FF, Iop_Shr16x8 = 0x1700, Iop_Shr32x4 = 0x1701, Iop_Shr64x2 = 0x1702,
    Iop_Sar8x16 = 0x1703, Iop_Sar16x8 = 0x1704, Iop_Sar32x4 = 0x1705, Iop_Sar64x2 = 0x1706,
    Iop_Sal8x16 = 0x1707, Iop_Sal16x8 = 0x1708, Iop_Sal32x4 = 0x1709, Iop_Sal64x2 = 0x170A,
    Iop_ShlN8x16 = 0x170B, Iop_ShlN16x8 = 0x170C, Iop_ShlN32x4 = 0x170D, Iop_ShlN64x2 = 0x170E,
    Iop_ShrN8x16 = 0x170F, Iop_ShrN16x8 = 0x1710, Iop_ShrN32x4 = 0x1711, Iop_ShrN64x2 = 0x1712,
    Iop_SarN8x16 = 0x1713, Iop_SarN16x8 = 0x1714, Iop_SarN32x4 = 0x1715, Iop_SarN64x2 = 0x1716,
    Iop_QShl8x16 = 0x1717, Iop_QShl16x8 = 0x1718, Iop_QShl32x4 = 0x1719, Iop_QShl64x2 = 0x171A,
    Iop_QSal8x16 = 0x171B, Iop_QSal16x8 = 0x171C, Iop_QSal32x4 = 0x171D, Iop_QSal64x2 = 0x171E,
    Iop_QShlNsatSU8x16 = 0x171F, Iop_QShlNsatSU16x8 = 0x1720, Iop_QShlNsatSU32x4 = 0x1721, Iop_QShlNsatSU64x2 = 0x1722,
    Iop_QShlNsatUU8x16 = 0x1723, Iop_QShlNsatUU16x8 = 0x1724, Iop_QShlNsatUU32x4 = 0x1725, Iop_QShlNsatUU64x2 = 0x1726,
    Iop_QShlNsatSS8x16 = 0x1727, Iop_QShlNsatSS16x8 = 0x1728, Iop_QShlNsatSS32x4 = 0x1729, Iop_QShlNsatSS64x2 = 0x172A,
    Iop_QandUQsh8x16 = 0x172B, Iop_QandUQsh16x8 = 0x172C, Iop_QandUQsh32x4 = 0x172D, Iop_QandUQsh64x2 = 0x172E,
    Iop_QandSQsh8x16 = 0x172F, Iop_QandSQsh16x8 = 0x1730, Iop_QandSQsh32x4 = 0x1731, Iop_QandSQsh64x2 = 0x1732,
    Iop_QandUQRsh8x16 = 0x1733, Iop_QandUQRsh16x8 = 0x1734, Iop_QandUQRsh32x4 = 0x1735, Iop_QandUQRsh64x2 = 0x1736,
    Iop_QandSQRsh8x16 = 0x1737, Iop_QandSQRsh16x8 = 0x1738, Iop_QandSQRsh32x4 = 0x1739, Iop_QandSQRsh64x2 = 0x173A,
    Iop_Sh8Sx16 = 0x173B, Iop_Sh16Sx8 = 0x173C, Iop_Sh32Sx4 = 0x173D, Iop_Sh64Sx2 = 0x173E,
    Iop_Sh8Ux16 = 0x173F, Iop_Sh16Ux8 = 0x1740, Iop_Sh32Ux4 = 0x1741, Iop_Sh64Ux2 = 0x1742,
    Iop_Rsh8Sx16 = 0x1743, Iop_Rsh16Sx8 = 0x1744, Iop_Rsh32Sx4 = 0x1745, Iop_Rsh64Sx2 = 0x1746,
    Iop_Rsh8Ux16 = 0x1747, Iop_Rsh16Ux8 = 0x1748, Iop_Rsh32Ux4 = 0x1749, Iop_Rsh64Ux2 = 0x174A,
    Iop_QandQShrNnarrow16Uto8Ux8 = 0x174B, Iop_QandQShrNnarrow32Uto16Ux4 = 0x174C, Iop_QandQShrNnarrow64Uto32Ux2 = 0x174D,
    Iop_QandQSarNnarrow16Sto8Sx8 = 0x174E, Iop_QandQSarNnarrow32Sto16Sx4 = 0x174F, Iop_QandQSarNnarrow64Sto32Sx2 = 0x1750,
    Iop_QandQSarNnarrow16Sto8Ux8 = 0x1751, Iop_QandQSarNnarrow32Sto16Ux4 = 0x1752, Iop_QandQSarNnarrow64Sto32Ux2 = 0x1753,
    Iop_QandQRShrNnarrow16Uto8Ux8 = 0x1754, Iop_QandQRShrNnarrow32Uto16Ux4 = 0x1755, Iop_QandQRShrNnarrow64Uto32Ux2 = 0x1756,
    Iop_QandQRSarNnarrow16Sto8Sx8 = 0x1757, Iop_QandQRSarNnarrow32Sto16Sx4 = 0x1758, Iop_QandQRSarNnarrow64Sto32Sx2 = 0x1759,
    Iop_QandQRSarNnarrow16Sto8Ux8 = 0x175A, Iop_QandQRSarNnarrow32Sto16Ux4 = 0x175B, Iop_QandQRSarNnarrow64Sto32Ux2 = 0x175C,
    Iop_QNarrowBin16Sto8Ux16 = 0x175D, Iop_QNarrowBin32Sto16Ux8 = 0x175E,
    Iop_QNarrowBin16Sto8Sx16 = 0x175F, Iop_QNarrowBin32Sto16Sx8 = 0x1760,
    Iop_QNarrowBin16Uto8Ux16 = 0x1761, Iop_QNarrowBin32Uto16Ux8 = 0x1762,
    Iop_NarrowBin16to8x16 = 0x1763, Iop_NarrowBin32to16x8 = 0x1764,
    Iop_QNarrowBin64Sto32Sx4 = 0x1765, Iop_QNarrowBin64Uto32Ux4 = 0x1766,
    Iop_NarrowBin64to32x4 = 0x1767,
    Iop_NarrowUn16to8x8 = 0x1768, Iop_NarrowUn32to16x4 = 0x1769, Iop_NarrowUn64to32x2 = 0x176A,
    Iop_QNarrowUn16Sto8Sx8 = 0x176B, Iop_QNarrowUn32Sto16Sx4 = 0x176C, Iop_QNarrowUn64Sto32Sx2 = 0x176D,
    Iop_QNarrowUn16Sto8Ux8 = 0x176E, Iop_QNarrowUn32Sto16Ux4 = 0x176F, Iop_QNarrowUn64Sto32Ux2 = 0x1770,
    Iop_QNarrowUn16Uto8Ux8 = 0x1771, Iop_QNarrowUn32Uto16Ux4 = 0x1772, Iop_QNarrowUn64Uto32Ux2 = 0x1773,
    Iop_Widen8Uto16x8 = 0x1774, Iop_Widen16Uto32x4 = 0x1775, Iop_Widen32Uto64x2 = 0x1776,
    Iop_Widen8Sto16x8 = 0x1777, Iop_Widen16Sto32x4 = 0x1778, Iop_Widen32Sto64x2 = 0x1779,
    Iop_InterleaveHI8x16 = 0x177A, Iop_InterleaveHI16x8 = 0x177B, Iop_InterleaveHI32x4 = 0x177C, Iop_InterleaveHI64x2 = 0x177D,
    Iop_InterleaveLO8x16 = 0x177E, Iop_InterleaveLO16x8 = 0x177F, Iop_InterleaveLO32x4 = 0x1780, Iop_InterleaveLO64x2 = 0x1781,
    Iop_InterleaveOddLanes8x16 = 0x1782, Iop_InterleaveEvenLanes8x16 = 0x1783,
    Iop_InterleaveOddLanes16x8 = 0x1784, Iop_InterleaveEvenLanes16x8 = 0x1785,
    Iop_InterleaveOddLanes32x4 = 0x1786, Iop_InterleaveEvenLanes32x4 = 0x1787,
    Iop_CatOddLanes8x16 = 0x1788, Iop_CatOddLanes16x8 = 0x1789, Iop_CatOddLanes32x4 = 0x178A,
    Iop_CatEvenLanes8x16 = 0x178B, Iop_CatEvenLanes16x8 = 0x178C, Iop_CatEvenLanes32x4 = 0x178D,
    Iop_GetElem8x16 = 0x178E, Iop_GetElem16x8 = 0x178F, Iop_GetElem32x4 = 0x1790, Iop_GetElem64x2 = 0x1791,
    Iop_Dup8x16 = 0x1792, Iop_Dup16x8 = 0x1793, Iop_Dup32x4 = 0x1794,
    Iop_SliceV128 = 0x1795,
    Iop_Reverse8sIn16_x8 = 0x1796,
    Iop_Reverse8sIn32_x4 = 0x1797, Iop_Reverse16sIn32_x4 = 0x1798,
    Iop_Reverse8sIn64_x2 = 0x1799, Iop_Reverse16sIn64_x2 = 0x179A, Iop_Reverse32sIn64_x2 = 0x179B,
    Iop_Reverse1sIn8_x16 = 0x179C,
    Iop_Perm8x16 = 0x179D,
    Iop_Perm32x4 = 0x179E,
    Iop_GetMSBs8x16 = 0x179F,
    Iop_RecipEst32Ux4 = 0x17A0, Iop_RSqrtEst32Ux4 = 0x17A1,
    // Vector cipher and hash.
    Iop_CipherV128 = 0x17A2, Iop_CipherLV128 = 0x17A3, Iop_CipherSV128 = 0x17A4,
    Iop_NCipherV128 = 0x17A5, Iop_NCipherLV128 = 0x17A6,
    Iop_SHA512 = 0x17A7, Iop_SHA256 = 0x17A8,
    // 256-bit vectors.
    Iop_V256to64_0 = 0x17A9, Iop_V256to64_1 = 0x17AA, Iop_V256to64_2 = 0x17AB, Iop_V256to64_3 = 0x17AC,
    Iop_64x4toV256 = 0x17AD,
    Iop_V256toV128_0 = 0x17AE, Iop_V256toV128_1 = 0x17AF, Iop_V128HLtoV256 = 0x17B0,
    Iop_AndV256 = 0x17B1, Iop_OrV256 = 0x17B2, Iop_XorV256 = 0x17B3, Iop_NotV256 = 0x17B4,
    Iop_CmpNEZ8x32 = 0x17B5, Iop_CmpNEZ16x16 = 0x17B6, Iop_CmpNEZ32x8 = 0x17B7, Iop_CmpNEZ64x4 = 0x17B8,
    Iop_Add8x32 = 0x17B9, Iop_Add16x16 = 0x17BA, Iop_Add32x8 = 0x17BB, Iop_Add64x4 = 0x17BC,
    Iop_Sub8x32 = 0x17BD, Iop_Sub16x16 = 0x17BE, Iop_Sub32x8 = 0x17BF, Iop_Sub64x4 = 0x17C0,
    Iop_CmpEQ8x32 = 0x17C1, Iop_CmpEQ16x16 = 0x17C2, Iop_CmpEQ32x8 = 0x17C3, Iop_CmpEQ64x4 = 0x17C4,
    Iop_CmpGT8Sx32 = 0x17C5, Iop_CmpGT16Sx16 = 0x17C6, Iop_CmpGT32Sx8 = 0x17C7, Iop_CmpGT64Sx4 = 0x17C8,
    Iop_ShlN16x16 = 0x17C9, Iop_ShlN32x8 = 0x17CA, Iop_ShlN64x4 = 0x17CB,
    Iop_ShrN16x16 = 0x17CC, Iop_ShrN32x8 = 0x17CD, Iop_ShrN64x4 = 0x17CE,
    Iop_SarN16x16 = 0x17CF, Iop_SarN32x8 = 0x17D0,
    Iop_Max8Sx32 = 0x17D1, Iop_Max16Sx16 = 0x17D2, Iop_Max32Sx8 = 0x17D3,
    Iop_Max8Ux32 = 0x17D4, Iop_Max16Ux16 = 0x17D5, Iop_Max32Ux8 = 0x17D6,
    Iop_Min8Sx32 = 0x17D7, Iop_Min16Sx16 = 0x17D8, Iop_Min32Sx8 = 0x17D9,
    Iop_Min8Ux32 = 0x17DA, Iop_Min16Ux16 = 0x17DB, Iop_Min32Ux8 = 0x17DC,
    Iop_Mul16x16 = 0x17DD, Iop_Mul32x8 = 0x17DE,
    Iop_MulHi16Ux16 = 0x17DF, Iop_MulHi16Sx16 = 0x17E0,
    Iop_QAdd8Ux32 = 0x17E1, Iop_QAdd16Ux16 = 0x17E2,
    Iop_QAdd8Sx32 = 0x17E3, Iop_QAdd16Sx16 = 0x17E4,
    Iop_QSub8Ux32 = 0x17E5, Iop_QSub16Ux16 = 0x17E6,
    Iop_QSub8Sx32 = 0x17E7, Iop_QSub16Sx16 = 0x17E8,
    Iop_Avg8Ux32 = 0x17E9, Iop_Avg16Ux16 = 0x17EA,
    Iop_Perm32x8 = 0x17EB,
    // 256-bit SIMD FP.
    Iop_Add64Fx4 = 0x17EC, Iop_Sub64Fx4 = 0x17ED, Iop_Mul64Fx4 = 0x17EE, Iop_Div64Fx4 = 0x17EF,
    Iop_Add32Fx8 = 0x17F0, Iop_Sub32Fx8 = 0x17F1, Iop_Mul32Fx8 = 0x17F2, Iop_Div32Fx8 = 0x17F3,
    Iop_Sqrt32Fx8 = 0x17F4, Iop_Sqrt64Fx4 = 0x17F5,
    Iop_RSqrtEst32Fx8 = 0x17F6, Iop_RecipEst32Fx8 = 0x17F7,
    Iop_Max32Fx8 = 0x17F8, Iop_Min32Fx8 = 0x17F9,
    Iop_Max64Fx4 = 0x17FA, Iop_Min64Fx4 = 0x17FB,
    // 0x17FC is the producer's enum bound marker, never a wire value.
}

impl fmt::Display for IrOp {
    /// Renders without the `Iop_` prefix, matching the producer's printer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name()[4..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_dense() {
        for code in 0x1400..=0x17FB {
            let op = IrOp::from_code(code).unwrap();
            assert_eq!(op as u32, code, "{op}");
        }
        assert!(matches!(
            IrOp::from_code(0x13FF),
            Err(IrError::UnknownEnum { what: "IROp", .. })
        ));
        // The producer's enum bound marker is not an operation; a block
        // carrying it is corrupt.
        assert!(matches!(
            IrOp::from_code(0x17FC),
            Err(IrError::UnknownEnum { what: "IROp", .. })
        ));
        assert!(IrOp::from_code(0x17FD).is_err());
    }

    #[test]
    fn test_landmark_codes_are_pinned() {
        assert_eq!(IrOp::Iop_INVALID as u32, 0x1400);
        assert_eq!(IrOp::Iop_Add8 as u32, 0x1401);
        assert_eq!(IrOp::Iop_Add64 as u32, 0x1404);
        assert_eq!(IrOp::Iop_Not8 as u32, 0x142D);
        assert_eq!(IrOp::Iop_CasCmpEQ8 as u32, 0x1431);
        assert_eq!(IrOp::Iop_MullS8 as u32, 0x143D);
        assert_eq!(IrOp::Iop_Clz64 as u32, 0x1445);
        assert_eq!(IrOp::Iop_CmpNEZ8 as u32, 0x1451);
        assert_eq!(IrOp::Iop_Max32U as u32, 0x145B);
        assert_eq!(IrOp::Iop_DivU32 as u32, 0x1460);
        assert_eq!(IrOp::Iop_8Uto16 as u32, 0x146D);
        assert_eq!(IrOp::Iop_1Sto64 as u32, 0x1491);
        assert_eq!(IrOp::Iop_AddF64 as u32, 0x1492);
        assert_eq!(IrOp::Iop_F32toF16 as u32, 0x14F8);
        assert_eq!(IrOp::Iop_QAdd32S as u32, 0x14F9);
        assert_eq!(IrOp::Iop_I32UtoFx2 as u32, 0x1512);
        assert_eq!(IrOp::Iop_CmpNEZ8x8 as u32, 0x1527);
        assert_eq!(IrOp::Iop_AddD64 as u32, 0x15D2);
        assert_eq!(IrOp::Iop_ReinterpD64asI64 as u32, 0x161E);
        assert_eq!(IrOp::Iop_Add32Fx4 as u32, 0x161F);
        assert_eq!(IrOp::Iop_NotV128 as u32, 0x167B);
        assert_eq!(IrOp::Iop_V256to64_0 as u32, 0x17A9);
        assert_eq!(IrOp::Iop_Min64Fx4 as u32, 0x17FB);
    }

    #[test]
    fn test_renders_without_prefix() {
        assert_eq!(IrOp::Iop_Add32.to_string(), "Add32");
        assert_eq!(IrOp::Iop_8Uto16.to_string(), "8Uto16");
        assert_eq!(IrOp::Iop_QNarrowBin64Sto32Sx4.to_string(), "QNarrowBin64Sto32Sx4");
        assert_eq!(IrOp::Iop_Add32.name(), "Iop_Add32");
    }
}
